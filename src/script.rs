//! The `run` subcommand: many operations against one session.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use log::{debug, error};

use crate::cli::{Operation, ScriptLine};
use crate::session::{Output, Session};

/// Tally of a finished script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Run every line of `input` against `session`, writing each result to `out`.
///
/// Blank lines and `#` comments are skipped. Unless `keep_going` is set, the
/// first failing line stops the script and its error is returned.
pub fn run(
    session: &mut Session,
    input: impl BufRead,
    mut out: impl Write,
    keep_going: bool,
) -> Result<Summary> {
    let mut summary = Summary::default();

    for (i, line) in input.lines().enumerate() {
        let line_no = i + 1;
        let line = line.with_context(|| format!("reading line {line_no}"))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match run_line(session, line) {
            Ok(output) => {
                writeln!(out, "{output}")?;
                summary.succeeded += 1;
            }
            Err(err) if keep_going => {
                error!("line {line_no}: {err:#}");
                summary.failed += 1;
            }
            Err(err) => return Err(err.context(format!("line {line_no}"))),
        }
    }

    debug!("script done: {summary:?}");
    Ok(summary)
}

fn run_line(session: &mut Session, line: &str) -> Result<Output> {
    let op = parse_line(line)?;
    session
        .apply(&op)
        .with_context(|| format!("{} failed", op.name()))
}

/// Parse one script line.
///
/// Lines that would make clap print help (`--help`, a bare `stack`) are
/// errors with a one-line message instead of the help text.
fn parse_line(line: &str) -> Result<Operation> {
    match ScriptLine::try_parse_from(line.split_whitespace()) {
        Ok(ScriptLine { op }) => Ok(op),
        Err(err)
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                    | ErrorKind::DisplayVersion
                    | ErrorKind::MissingSubcommand
            ) =>
        {
            bail!("incomplete operation `{line}` (expected e.g. `stack push 1`)")
        }
        Err(err) => Err(err.into()),
    }
}
