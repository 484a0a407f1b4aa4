use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use crossterm::style::{style, Color, Stylize};
use log::{Level, LevelFilter, Log, Metadata, Record};

/// A `log` backend that writes `LEVEL message` lines to stderr, with the
/// level colored by `crossterm` when stderr is a terminal.
///
/// Stdout carries only command output, so scripts can parse it.
#[derive(Debug)]
pub struct TerminalLogger {
    level: LevelFilter,
    color: bool,
}

impl TerminalLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self::with_color(level, io::stderr().is_terminal())
    }

    pub fn with_color(level: LevelFilter, color: bool) -> Self {
        Self { level, color }
    }

    /// Install as the global logger. Fails if one is already installed.
    pub fn install(level: LevelFilter) -> Result<()> {
        log::set_boxed_logger(Box::new(Self::new(level)))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for TerminalLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        // Ignore errors; there's nowhere left to report them.
        writeln!(io::stderr().lock(), "{}", self.format(record)).ok();
    }

    fn flush(&self) {
        io::stderr().flush().ok();
    }
}

impl TerminalLogger {
    /// One log line, without the trailing newline.
    fn format(&self, record: &Record) -> String {
        let level = format!("{:<5}", record.level());
        if self.color {
            let level = style(level).with(level_color(record.level()));
            format!("{level} {}", record.args())
        } else {
            format!("{level} {}", record.args())
        }
    }
}

fn level_color(level: Level) -> Color {
    match level {
        Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        Level::Info => Color::Green,
        Level::Debug => Color::Blue,
        Level::Trace => Color::DarkGrey,
    }
}
