//! Break-set span functions
//!
//! Bounded variants of `strspn`/`strcspn` over plain byte slices. Callers
//! pass slices that are already cut at their terminator (see
//! [`crate::str::strlen`]), so embedded null bytes are ordinary bytes here.

/// Get length of prefix consisting of break bytes
///
/// Returns the length of the initial segment of `s` made up entirely of
/// bytes that appear in `accept`. An empty `accept` matches nothing.
///
/// # Examples
/// ```
/// use stctok::search::strspn;
/// assert_eq!(strspn(b",;,x,", b",;"), 3);
/// assert_eq!(strspn(b"x,", b","), 0);
/// assert_eq!(strspn(b",,", b""), 0);
/// ```
pub fn strspn(s: &[u8], accept: &[u8]) -> usize {
    s.iter().position(|c| !accept.contains(c)).unwrap_or(s.len())
}

/// Get length of prefix free of break bytes, looking at most `n` bytes
///
/// Returns the length of the initial segment of `s[..n]` containing none of
/// the bytes in `reject`. Returns `min(n, s.len())` when no byte matches.
///
/// # Examples
/// ```
/// use stctok::search::strcspn_n;
/// assert_eq!(strcspn_n(b"abc,def", b",", 16), 3);
/// assert_eq!(strcspn_n(b"abc,def", b",", 2), 2);
/// assert_eq!(strcspn_n(b"abc", b"", 16), 3);
/// ```
pub fn strcspn_n(s: &[u8], reject: &[u8], n: usize) -> usize {
    let s = &s[..n.min(s.len())];
    s.iter().position(|c| reject.contains(c)).unwrap_or(s.len())
}
