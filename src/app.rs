//! What one invocation does once its session is built.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

use crate::cli::Command;
use crate::script;
use crate::session::Session;

/// Run `command` against `session`, writing results to `out`.
///
/// `input` is only read by `run`. Any `Err` means the process should exit
/// non-zero.
pub fn execute(
    command: Option<Command>,
    session: &mut Session,
    input: impl BufRead,
    mut out: impl Write,
) -> Result<()> {
    match command {
        // Bare invocation shows the stack. Output is always newline
        // terminated, so an empty container prints an empty line.
        None => writeln!(out, "{}", session.stack())?,
        Some(Command::Op(op)) => {
            let output = session
                .apply(&op)
                .with_context(|| format!("{} failed", op.name()))?;
            writeln!(out, "{output}")?;
        }
        Some(Command::Run(args)) => {
            let summary = script::run(session, input, out, args.keep_going)?;
            if summary.failed > 0 {
                bail!(
                    "{} of {} lines failed",
                    summary.failed,
                    summary.failed + summary.succeeded
                );
            }
        }
    }
    Ok(())
}
