//! Input resolution
//!
//! Text comes from the command line when any is given, otherwise from piped
//! standard input. An interactive terminal with no arguments is an error.

use crate::error::{CaseconvError, Result};
use std::io::{self, IsTerminal, Read};
use tracing::{debug, instrument};

/// Resolve the text to convert from `args` or the process's standard input.
///
/// Standard input is read at most once, and only when `args` is empty.
#[instrument]
pub fn resolve(args: &[String]) -> Result<String> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    resolve_from(args, stdin.lock(), interactive)
}

/// Resolve input from `args`, falling back to `reader` when it is not interactive.
///
/// Lines read from `reader` are re-joined with `\n`, so a trailing newline
/// and any `\r` line endings are dropped. Empty input is not an error.
pub fn resolve_from<R: Read>(args: &[String], mut reader: R, interactive: bool) -> Result<String> {
    if !args.is_empty() {
        debug!("Using {} command-line argument(s) as input", args.len());
        return Ok(args.join(" "));
    }

    if interactive {
        return Err(CaseconvError::NoInput);
    }

    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(CaseconvError::stdin)?;
    debug!("Read {} byte(s) from stdin", buf.len());

    let text = String::from_utf8_lossy(&buf);
    Ok(text.lines().collect::<Vec<_>>().join("\n"))
}
