//! Command-line interface definitions.

use std::fmt::{self, Display};

use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, Args, Parser, Subcommand};
use log::LevelFilter;

use crate::DEFAULT_CAPACITY;

/// Bounded stack and queue simulator.
///
/// Each invocation starts from fresh (or seeded) containers, runs one
/// operation, and prints the result.
#[derive(Debug, Parser)]
#[command(name = "bounded-sim", version, about)]
pub struct Cli {
    /// Operation to run. Without one, prints the stack.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Capacity of both containers.
    #[arg(
        long,
        short = 'c',
        global = true,
        env = "BOUNDED_SIM_CAPACITY",
        default_value_t = DEFAULT_CAPACITY,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..),
    )]
    pub capacity: usize,

    /// Initial stack contents, bottom first, e.g. `1,2,3`.
    #[arg(long, global = true, value_name = "CSV", allow_hyphen_values = true)]
    pub stack: Option<String>,

    /// Initial queue contents, front first, e.g. `1,2,3`.
    #[arg(long, global = true, value_name = "CSV", allow_hyphen_values = true)]
    pub queue: Option<String>,

    /// More logging on stderr (`-v` debug, `-vv` trace).
    #[arg(long, short = 'v', global = true, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors.
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Log level, overriding `-v`/`-q` (off, error, warn, info, debug, trace).
    #[arg(long, global = true, env = "BOUNDED_SIM_LOG", value_name = "LEVEL")]
    pub log: Option<LevelFilter>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(flatten)]
    Op(Operation),

    /// Read operations from stdin, one per line, keeping state between lines.
    Run(RunArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Report failing lines and continue instead of stopping at the first.
    #[arg(long, short = 'k')]
    pub keep_going: bool,
}

/// A single operation on one of the containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Operation {
    /// Operate on the stack.
    Stack {
        #[command(subcommand)]
        op: StackOp,
    },
    /// Operate on the queue.
    Queue {
        #[command(subcommand)]
        op: QueueOp,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum StackOp {
    /// Push a value, then print the stack.
    Push {
        #[arg(allow_negative_numbers = true)]
        value: i32,
    },
    /// Remove the top value, then print the stack.
    Pop,
    /// Print the top value.
    Peek,
    /// Print the number of values.
    Size,
    /// Print the capacity.
    Capacity,
    /// Print the stack, bottom to top.
    Display,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum QueueOp {
    /// Add a value at the rear, then print the queue.
    Enqueue {
        #[arg(allow_negative_numbers = true)]
        value: i32,
    },
    /// Remove the front value, then print the queue.
    Dequeue,
    /// Print the front value.
    Peek,
    /// Print the number of values.
    Size,
    /// Print the capacity.
    Capacity,
    /// Print the queue, front to rear.
    Display,
}

/// One line of a `run` script: an [`Operation`] without the program name.
#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_help_subcommand = true)]
pub struct ScriptLine {
    #[command(subcommand)]
    pub op: Operation,
}

impl Cli {
    /// Log level from `--log`/`BOUNDED_SIM_LOG`, else from `-v`/`-q`.
    pub fn log_level(&self) -> LevelFilter {
        if let Some(level) = self.log {
            return level;
        }
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Stack { op } => match op {
                StackOp::Push { .. } => "stack push",
                StackOp::Pop => "stack pop",
                StackOp::Peek => "stack peek",
                StackOp::Size => "stack size",
                StackOp::Capacity => "stack capacity",
                StackOp::Display => "stack display",
            },
            Operation::Queue { op } => match op {
                QueueOp::Enqueue { .. } => "queue enqueue",
                QueueOp::Dequeue => "queue dequeue",
                QueueOp::Peek => "queue peek",
                QueueOp::Size => "queue size",
                QueueOp::Capacity => "queue capacity",
                QueueOp::Display => "queue display",
            },
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())?;
        match self {
            Operation::Stack {
                op: StackOp::Push { value },
            }
            | Operation::Queue {
                op: QueueOp::Enqueue { value },
            } => write!(f, " {value}"),
            _ => Ok(()),
        }
    }
}
