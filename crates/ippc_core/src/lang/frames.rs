//! Variable storage frames and their token prefixes.
//!
//! A variable reference is written `<prefix>@<name>` where the prefix selects one of three frames.
//!
//! ## Examples
//! ```rust
//! use ippc_core::lang::frames::{self, FrameId};
//!
//! assert_eq!(frames::from_prefix("LF"), Some(FrameId::Local));
//! assert_eq!(frames::prefix(FrameId::Global), "GF");
//! assert_eq!(frames::from_prefix("gf"), None); // case-sensitive
//! ```

use super::registry::{self, LangItemInfo};

/// Stable identifier for a variable frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameId {
    Global,
    Temporary,
    Local,
}

/// Registry of frames; `canonical` is the token prefix.
pub const FRAMES: &[LangItemInfo<FrameId>] = &[
    LangItemInfo::new(FrameId::Global, "GF", "Global frame, alive for the whole program."),
    LangItemInfo::new(
        FrameId::Temporary,
        "TF",
        "Temporary frame, created by CREATEFRAME and moved by PUSHFRAME/POPFRAME.",
    ),
    LangItemInfo::new(FrameId::Local, "LF", "Top of the local frame stack."),
];

/// Token prefix for a frame (`GF`, `TF`, `LF`).
pub fn prefix(id: FrameId) -> &'static str {
    info_for(id).canonical
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: FrameId) -> &'static LangItemInfo<FrameId> {
    registry::find(FRAMES, id).expect("frame info missing")
}

/// Resolve a token prefix (case-sensitive).
pub fn from_prefix(s: &str) -> Option<FrameId> {
    registry::find_by_spelling(FRAMES, s).map(|f| f.id)
}
