//! Pass-by-pass tokenizer walkthrough used by the `stctok` binary.

use std::io::{self, Write};

use thiserror::Error;
use tracing::{debug, warn};

use crate::error::StctokError;
use crate::stctok::{BreakPolicy, stctok};
use crate::str::strlen;

/// Input used when none is given on the command line.
pub const DEFAULT_INPUT: &str = "1,,,,5,,,,9";
/// Break set used when none is given on the command line.
pub const DEFAULT_DELIMS: &str = ",";
/// Token buffer capacity used when none is given on the command line.
pub const DEFAULT_BUFFER_SIZE: usize = 256;

/// Settings for one walkthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub input: String,
    pub delims: String,
    pub policy: BreakPolicy,
    pub buffer_size: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.to_owned(),
            delims: DEFAULT_DELIMS.to_owned(),
            policy: BreakPolicy::EmitEmpty,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

/// How a walkthrough stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finish {
    /// The last call returned [`crate::stctok::Scan::EndOfInput`].
    EndOfInput,
    /// The returned cursor reached the end of the string.
    EndOfString,
    /// The buffer is too small to make progress at this cursor.
    Stalled { cursor: usize },
}

#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Scan(#[from] StctokError),
    #[error("failed to write pass output: {0}")]
    Io(#[from] io::Error),
}

/// Tokenize `config.input` pass by pass, printing each pass to `out`.
///
/// Stops on end of input, when the remainder is empty, or when a full buffer
/// leaves the cursor where it was.
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> Result<Finish, DemoError> {
    let input = config.input.as_bytes();
    let input = &input[..strlen(input)];
    let delims = config.delims.as_bytes();
    let mut buf = vec![0u8; config.buffer_size];
    let mut cursor = 0usize;
    let mut pass = 1usize;

    let finish = loop {
        let scan = stctok(input, cursor, &mut buf, delims, config.policy)?;
        let token = &buf[..strlen(&buf)];

        writeln!(
            out,
            "Pass {pass}: stctok(\"{}\", \"{}\")",
            lossy(&input[cursor..]),
            config.delims
        )?;
        writeln!(out, "  buf: \"{}\" len={}", lossy(token), token.len())?;

        let Some(next) = scan.next_cursor() else {
            writeln!(out, "  returned: END")?;
            break Finish::EndOfInput;
        };
        writeln!(out, "  returned: \"{}\"", lossy(&input[next..]))?;
        debug!(pass, cursor, ?scan, "pass complete");

        // Only a full buffer can leave the cursor in place.
        if next == cursor {
            warn!(
                cursor,
                buffer_size = config.buffer_size,
                "token buffer too small to make progress"
            );
            break Finish::Stalled { cursor };
        }
        if next == input.len() {
            break Finish::EndOfString;
        }
        cursor = next;
        pass += 1;
    };

    match finish {
        Finish::EndOfInput => writeln!(out, "Upon exit the scan returned END")?,
        Finish::EndOfString => writeln!(out, "Upon exit the cursor is at the end of the string")?,
        Finish::Stalled { cursor } => {
            writeln!(out, "Upon exit the scan stalled at byte {cursor}")?;
        }
    }
    Ok(finish)
}

fn lossy(bytes: &[u8]) -> std::borrow::Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}
