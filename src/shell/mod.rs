//! Shell Module
//!
//! Line-oriented command shell over a shared cache. Each input line is one
//! command; each command produces exactly one JSON reply line.
//!
//! # Commands
//! - `GET key` - Retrieve a value (null on a miss)
//! - `SET key value` - Insert a value, or touch an existing key
//! - `SETNX key value` - Insert only if absent
//! - `DEL key` - Delete a key
//! - `CLEAR` - Drop all entries
//! - `CAPACITY n` - Change the size ceiling
//! - `STATS` / `KEYS` - Introspection
//! - `SAVE [path]` / `LOAD [path]` - Snapshot persistence
//! - `QUIT` - End the session

pub mod handlers;

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::models::{Command, ErrorReply};

pub use handlers::{Shell, ShellError};

/// Reads commands from `input` until EOF or `QUIT`, writing one reply line
/// per non-blank input line to `output`.
///
/// Command failures become error replies and the session continues; only
/// I/O errors on `input`/`output` end it early.
pub fn run_session<R: BufRead, W: Write>(shell: &Shell, input: R, mut output: W) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                write_error(&mut output, &ShellError::from(e))?;
                continue;
            }
        };
        let quit = command == Command::Quit;

        debug!("Executing {:?}", command);
        match shell.execute(command) {
            Ok(reply) => writeln!(output, "{}", reply)?,
            Err(e) => write_error(&mut output, &e)?,
        }
        output.flush()?;

        if quit {
            break;
        }
    }
    Ok(())
}

fn write_error<W: Write>(output: &mut W, error: &ShellError) -> io::Result<()> {
    warn!("Command failed: {}", error);
    let reply = serde_json::to_string(&ErrorReply::new(error.to_string()))
        .unwrap_or_else(|_| r#"{"error":"unrenderable error"}"#.to_string());
    writeln!(output, "{}", reply)?;
    output.flush()
}
