mod debug;

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod queue;
pub mod script;
pub mod serialize;
pub mod session;
pub mod stack;
pub mod term;

pub use error::Error;
pub use queue::BoundedQueue;
pub use session::{Output, Session};
pub use stack::BoundedStack;

/// Capacity of each container unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 5;
