//! Nul-terminated byte string helpers
//!
//! Inputs and break sets are byte slices that treat 0 (null byte) as the
//! string terminator. A slice without a null byte is a string of its full
//! length.

/// Logical length of a tokenizer input or break set
///
/// Scanning never looks past the first 0 byte, so this is the index where a
/// cursor reaches end of input. A slice with no 0 byte is used whole.
///
/// # Examples
/// ```
/// use stctok::str::strlen;
/// assert_eq!(strlen(b"1,,5\0junk"), 4);
/// assert_eq!(strlen(b"\0"), 0);
/// assert_eq!(strlen(b"1,,5"), 4); // no null terminator
/// ```
pub fn strlen(s: &[u8]) -> usize {
    memchr::memchr(0, s).unwrap_or(s.len())
}

/// Slice `s` down to its logical string contents (no terminator).
pub(crate) fn as_cstr(s: &[u8]) -> &[u8] {
    &s[..strlen(s)]
}
