//! `stctok` implementation.
//!
//! A bounded, caller-buffered tokenizer. Each call copies one token into a
//! fixed-capacity buffer, nul-terminates it, and returns the cursor to pass
//! to the next call. No state is kept between calls.

use tracing::trace;

use crate::error::StctokError;
use crate::search::{strcspn_n, strspn};
use crate::str::as_cstr;

/// How a run of adjacent break bytes is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BreakPolicy {
    /// Every break byte is a token boundary; `",,"` holds an empty token.
    #[default]
    EmitEmpty,
    /// After a token ends, the whole following run of break bytes (any
    /// mixture of the set) is skipped as one separator.
    Collapse,
}

/// Why a token stopped where it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenEnd {
    /// A break byte was consumed.
    Break,
    /// The input ran out; the returned cursor sits on the terminator.
    EndOfString,
    /// The buffer filled up. The returned cursor points at the first byte
    /// that was not copied, and nothing was consumed past it.
    BufferFull,
}

/// Result of one [`stctok`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    /// `len` token bytes were written, followed by a nul byte.
    Token { len: usize, next: usize, end: TokenEnd },
    /// The cursor was already at the end of the input. The buffer was not
    /// touched.
    EndOfInput,
}

impl Scan {
    /// Cursor to resume from, or `None` at end of input.
    pub fn next_cursor(&self) -> Option<usize> {
        match *self {
            Scan::Token { next, .. } => Some(next),
            Scan::EndOfInput => None,
        }
    }
}

/// Copy the next token of `s`, starting at `cursor`, into `tok`.
///
/// `s` and `brk` are null-terminated (or end at the slice end). The token
/// runs up to the first byte found in `brk`, the end of `s`, or
/// `tok.len() - 1` bytes, whichever comes first, and `tok` is always
/// nul-terminated right after it.
///
/// Feed [`Scan::next_cursor`] back in until [`Scan::EndOfInput`] comes out.
///
/// # Errors
/// [`StctokError::CursorOutOfBounds`] when `cursor` lies past the end of `s`,
/// [`StctokError::ZeroCapacity`] when `tok` is empty.
///
/// # Examples
/// ```
/// use stctok::stctok::{stctok, BreakPolicy, Scan, TokenEnd};
///
/// let s = b"1,,5\0";
/// let mut buf = [0u8; 8];
///
/// let scan = stctok(s, 0, &mut buf, b",\0", BreakPolicy::EmitEmpty).unwrap();
/// assert_eq!(scan, Scan::Token { len: 1, next: 2, end: TokenEnd::Break });
/// assert_eq!(&buf[..2], b"1\0");
///
/// let scan = stctok(s, 0, &mut buf, b",\0", BreakPolicy::Collapse).unwrap();
/// assert_eq!(scan, Scan::Token { len: 1, next: 3, end: TokenEnd::Break });
///
/// let scan = stctok(s, 4, &mut buf, b",\0", BreakPolicy::Collapse).unwrap();
/// assert_eq!(scan, Scan::EndOfInput);
/// ```
pub fn stctok(
    s: &[u8],
    cursor: usize,
    tok: &mut [u8],
    brk: &[u8],
    policy: BreakPolicy,
) -> Result<Scan, StctokError> {
    let s = as_cstr(s);
    let brk = as_cstr(brk);

    if cursor > s.len() {
        return Err(StctokError::CursorOutOfBounds {
            cursor,
            len: s.len(),
        });
    }
    let Some(lim) = tok.len().checked_sub(1) else {
        return Err(StctokError::ZeroCapacity);
    };

    if cursor == s.len() {
        trace!(cursor, "end of input");
        return Ok(Scan::EndOfInput);
    }

    let rest = &s[cursor..];
    let len = strcspn_n(rest, brk, lim);
    tok[..len].copy_from_slice(&rest[..len]);
    tok[len] = 0;

    // rest[len] is only inspected when the copy stopped short of both the
    // end of input and the buffer limit, i.e. on a break byte.
    let (next, end) = if len == rest.len() {
        (s.len(), TokenEnd::EndOfString)
    } else if len == lim {
        (cursor + len, TokenEnd::BufferFull)
    } else {
        let mut next = cursor + len + 1;
        if policy == BreakPolicy::Collapse {
            next += strspn(&s[next..], brk);
        }
        (next, TokenEnd::Break)
    };

    trace!(cursor, len, next, ?end, ?policy, "token");
    Ok(Scan::Token { len, next, end })
}
