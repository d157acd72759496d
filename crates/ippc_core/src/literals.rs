//! Define the lexical grammar of identifiers and constant payloads (policy + pure helpers).
//!
//! This module holds **pure/deterministic** validators used by the operand classifier and by tests, so the
//! grammar lives in exactly one place.
//!
//! ## Notes
//! - **Identifiers** (variable names and labels share one rule): the first character is an ASCII letter or one
//!   of `_ - $ & % * ! ?`; subsequent characters may additionally be ASCII digits.
//! - **Integers**: optional sign, then decimal, hexadecimal (`0x`), octal (`0o`) or legacy octal (leading `0`)
//!   digits. A single `_` may separate two digits, and may follow an explicit `0x`/`0o` prefix.
//! - **Strings**: every backslash must start a `\DDD` escape (exactly three decimal digits). The payload is kept
//!   verbatim; escapes are not decoded here.
//! - Validators only check form; no value is parsed, so integer magnitude is unbounded.

/// Special (non-alphanumeric) characters allowed anywhere in an identifier.
pub const IDENT_SPECIAL_CHARS: &[char] = &['_', '-', '$', '&', '%', '*', '!', '?'];

/// Check if a character can start an identifier.
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || IDENT_SPECIAL_CHARS.contains(&c)
}

/// Check if a character can continue an identifier.
pub fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

/// Check whether `s` is a well-formed identifier (variable name or label).
///
/// ## Examples
/// ```rust
/// use ippc_core::literals::is_identifier;
///
/// assert!(is_identifier("counter"));
/// assert!(is_identifier("$tmp-2?"));
/// assert!(!is_identifier("2fast"));
/// assert!(!is_identifier(""));
/// ```
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if is_ident_start(first) => chars.all(is_ident_continue),
        _ => false,
    }
}

/// Check whether `s` is a well-formed `int` constant payload.
///
/// ## Examples
/// ```rust
/// use ippc_core::literals::is_int_literal;
///
/// assert!(is_int_literal("42"));
/// assert!(is_int_literal("-7"));
/// assert!(is_int_literal("0x1F"));
/// assert!(is_int_literal("0o17"));
/// assert!(is_int_literal("017"));
/// assert!(is_int_literal("1_000"));
/// assert!(!is_int_literal(""));
/// assert!(!is_int_literal("abc"));
/// assert!(!is_int_literal("1__0"));
/// ```
pub fn is_int_literal(s: &str) -> bool {
    let body = s.strip_prefix(['+', '-']).unwrap_or(s);
    match body.as_bytes() {
        [] => false,
        [b'0', b'x' | b'X', rest @ ..] => digit_groups(rest, u8::is_ascii_hexdigit, true),
        [b'0', b'o' | b'O', rest @ ..] => digit_groups(rest, is_octal_digit, true),
        [b'0'] => true,
        // Legacy octal: the leading `0` is itself a digit, so a separator may follow it.
        [b'0', rest @ ..] => digit_groups(rest, is_octal_digit, true),
        digits @ [b'1'..=b'9', ..] => digit_groups(digits, u8::is_ascii_digit, false),
        _ => false,
    }
}

/// Check whether `s` is a well-formed `bool` constant payload (`true` or `false`, lower case).
pub fn is_bool_literal(s: &str) -> bool {
    matches!(s, "true" | "false")
}

/// Check whether `s` is a well-formed `nil` constant payload (exactly `nil`).
pub fn is_nil_literal(s: &str) -> bool {
    s == "nil"
}

/// Check whether `s` is a well-formed `string` constant payload.
///
/// ## Returns
/// - `true` when the number of backslashes equals the number of `\DDD` escapes (so any payload without a
///   backslash, including the empty one, is valid).
///
/// ## Examples
/// ```rust
/// use ippc_core::literals::is_string_literal;
///
/// assert!(is_string_literal("ab\\050c"));
/// assert!(is_string_literal("plain"));
/// assert!(is_string_literal(""));
/// assert!(!is_string_literal("ab\\c"));
/// assert!(!is_string_literal("\\12"));
/// ```
pub fn is_string_literal(s: &str) -> bool {
    backslash_count(s) == escape_sequence_count(s)
}

/// Count backslash characters in a string payload.
pub fn backslash_count(s: &str) -> usize {
    s.bytes().filter(|b| *b == b'\\').count()
}

/// Count non-overlapping `\DDD` escape sequences, scanning left to right.
pub fn escape_sequence_count(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        if is_escape_at(bytes, i) {
            count += 1;
            i += 4;
        } else {
            i += 1;
        }
    }
    count
}

// --- helpers -----------------------------------------------------------------

fn is_escape_at(bytes: &[u8], i: usize) -> bool {
    matches!(bytes.get(i..i + 4), Some([b'\\', d1, d2, d3]) if d1.is_ascii_digit() && d2.is_ascii_digit() && d3.is_ascii_digit())
}

fn is_octal_digit(b: &u8) -> bool {
    matches!(b, b'0'..=b'7')
}

/// Validate a run of digits with optional single `_` separators between them.
///
/// `leading_separator` permits one `_` before the first digit (directly after a base prefix).
fn digit_groups(bytes: &[u8], is_digit: fn(&u8) -> bool, leading_separator: bool) -> bool {
    let digits = match bytes {
        [b'_', rest @ ..] if leading_separator => rest,
        _ => bytes,
    };

    let mut prev_was_digit = false;
    for b in digits {
        if *b == b'_' {
            if !prev_was_digit {
                return false;
            }
            prev_was_digit = false;
        } else if is_digit(b) {
            prev_was_digit = true;
        } else {
            return false;
        }
    }
    prev_was_digit
}
