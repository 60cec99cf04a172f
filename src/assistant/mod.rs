//! The interactive session.
//!
//! Reads commands line by line, hands each to the [`Assistant`], and writes
//! the reply. The session is generic over its input and output so it can run
//! against stdin/stdout or against in-memory buffers in tests.

pub mod dispatch;

pub use dispatch::{Assistant, Reply, FAREWELL, GREETING, INVALID_COMMAND};

use crate::clock::Clock;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Run the conversation until `exit`/`close` or end of input.
///
/// End of input is treated like `exit`. Only I/O failures are returned as
/// errors; command failures are reported to the user and the loop goes on.
/// Input that is not valid UTF-8 is decoded lossily rather than ending the
/// session.
pub fn run_session<C, R, W>(
    assistant: &mut Assistant<C>,
    mut input: R,
    mut output: W,
) -> Result<()>
where
    C: Clock,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", WELCOME).context("Failed to write welcome message")?;
    let mut buf = Vec::new();

    loop {
        write!(output, "{}", PROMPT).context("Failed to write prompt")?;
        output.flush().context("Failed to flush output")?;

        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("Failed to read input")?;
        if read == 0 {
            debug!("Input closed");
            writeln!(output).context("Failed to write output")?;
            writeln!(output, "{}", FAREWELL).context("Failed to write output")?;
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        if std::str::from_utf8(&buf).is_err() {
            warn!("Input line was not valid UTF-8");
        }

        match assistant.handle_line(line.trim_end_matches(['\n', '\r'])) {
            Reply::Continue(text) => {
                writeln!(output, "{}", text).context("Failed to write output")?;
            }
            Reply::Exit(text) => {
                writeln!(output, "{}", text).context("Failed to write output")?;
                break;
            }
        }
    }

    info!(contacts = assistant.book().len(), "Session finished");
    Ok(())
}
