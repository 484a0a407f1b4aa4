use anyhow::{Context, Result};
use log::LevelFilter;

use crate::cli::Cli;
use crate::queue::BoundedQueue;
use crate::serialize;
use crate::session::Session;
use crate::stack::BoundedStack;

/// Settings resolved from the command line and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub capacity: usize,
    pub stack_seed: Vec<i32>,
    pub queue_seed: Vec<i32>,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let seed = |text: Option<&str>, flag: &str| -> Result<Vec<i32>> {
            let text = text.unwrap_or_default();
            serialize::parse(text).with_context(|| format!("invalid --{flag} contents {text:?}"))
        };

        Ok(Self {
            capacity: cli.capacity,
            stack_seed: seed(cli.stack.as_deref(), "stack")?,
            queue_seed: seed(cli.queue.as_deref(), "queue")?,
            log_level: cli.log_level(),
        })
    }

    /// Build the containers, pre-filled with the seeds.
    pub fn session(&self) -> Result<Session> {
        let stack = BoundedStack::from_values(self.capacity, self.stack_seed.iter().copied())
            .context("--stack seed doesn't fit")?;
        let queue = BoundedQueue::from_values(self.capacity, self.queue_seed.iter().copied())
            .context("--queue seed doesn't fit")?;
        Ok(Session::from_parts(stack, queue))
    }
}
