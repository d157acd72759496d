//! Shareable metadata for `ippc_core::lang` registries.
//!
//! The `ippc_core::lang` module is a set of **registry-first** vocabularies: opcodes, operand roles, frames, type
//! names and exit codes. This submodule provides the small, dependency-free metadata shape reused by the simple
//! registries (those that need nothing beyond a spelling and a description).
//!
//! ## Notes
//! - These types are intentionally lightweight and `Copy`-friendly so registries can live in `const` tables.
//! - Registries with extra per-item data (opcode operand lists, numeric exit codes) define their own info type.

/// Shared metadata shape for “registry-first” vocabulary items.
///
/// ## Examples
/// ```rust
/// use ippc_core::lang::registry::LangItemInfo;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Demo {
///     A,
/// }
///
/// const DEMO: &[LangItemInfo<Demo>] = &[LangItemInfo::new(Demo::A, "a", "The letter a.")];
/// assert_eq!(DEMO[0].canonical, "a");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LangItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub description: &'static str,
}

impl<Id> LangItemInfo<Id> {
    /// Construct a registry entry (usable in `const` tables).
    pub const fn new(id: Id, canonical: &'static str, description: &'static str) -> Self {
        Self {
            id,
            canonical,
            description,
        }
    }
}

/// Find the entry for `id` in a registry table.
///
/// ## Returns
/// - `Some(&LangItemInfo)` when the table contains `id`, `None` otherwise.
pub fn find<Id: PartialEq>(table: &'static [LangItemInfo<Id>], id: Id) -> Option<&'static LangItemInfo<Id>> {
    table.iter().find(|item| item.id == id)
}

/// Find the entry whose canonical spelling equals `spelling` (case-sensitive).
pub fn find_by_spelling<Id>(table: &'static [LangItemInfo<Id>], spelling: &str) -> Option<&'static LangItemInfo<Id>> {
    table.iter().find(|item| item.canonical == spelling)
}
