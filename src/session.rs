use std::fmt::{self, Display};

use log::{debug, trace};

use crate::cli::{Operation, QueueOp, StackOp};
use crate::error::Error;
use crate::queue::BoundedQueue;
use crate::stack::BoundedStack;

/// The containers one invocation works on: a stack and a queue.
#[derive(Debug, Clone)]
pub struct Session {
    stack: BoundedStack,
    queue: BoundedQueue,
}

/// What an operation prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Serialized contents of a container.
    Contents(String),
    /// A peeked element.
    Value(i32),
    /// A size or capacity.
    Count(usize),
}

impl Session {
    /// Empty containers, both with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self::from_parts(BoundedStack::new(capacity), BoundedQueue::new(capacity))
    }

    pub fn from_parts(stack: BoundedStack, queue: BoundedQueue) -> Self {
        Self { stack, queue }
    }

    pub fn stack(&self) -> &BoundedStack {
        &self.stack
    }

    pub fn queue(&self) -> &BoundedQueue {
        &self.queue
    }

    /// Run one operation.
    ///
    /// On error, both containers are exactly as they were before the call.
    pub fn apply(&mut self, op: &Operation) -> Result<Output, Error> {
        trace!("applying `{op}`");
        match *op {
            Operation::Stack { op } => self.apply_stack(op),
            Operation::Queue { op } => self.apply_queue(op),
        }
    }

    fn apply_stack(&mut self, op: StackOp) -> Result<Output, Error> {
        let stack = &mut self.stack;
        let output = match op {
            StackOp::Push { value } => {
                stack.push(value)?;
                debug!("pushed {value}: {stack:#?}");
                Output::Contents(stack.serialize())
            }
            StackOp::Pop => {
                let value = stack.pop()?;
                debug!("popped {value}: {stack:#?}");
                Output::Contents(stack.serialize())
            }
            StackOp::Peek => Output::Value(stack.peek()?),
            StackOp::Size => Output::Count(stack.size()),
            StackOp::Capacity => Output::Count(stack.capacity()),
            StackOp::Display => Output::Contents(stack.serialize()),
        };
        Ok(output)
    }

    fn apply_queue(&mut self, op: QueueOp) -> Result<Output, Error> {
        let queue = &mut self.queue;
        let output = match op {
            QueueOp::Enqueue { value } => {
                queue.enqueue(value)?;
                debug!("enqueued {value}: {queue:#?}");
                Output::Contents(queue.serialize())
            }
            QueueOp::Dequeue => {
                let value = queue.dequeue()?;
                debug!("dequeued {value}: {queue:#?}");
                Output::Contents(queue.serialize())
            }
            QueueOp::Peek => Output::Value(queue.peek()?),
            QueueOp::Size => Output::Count(queue.size()),
            QueueOp::Capacity => Output::Count(queue.capacity()),
            QueueOp::Display => Output::Contents(queue.serialize()),
        };
        Ok(output)
    }
}

impl Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Contents(s) => write!(f, "{s}"),
            Output::Value(value) => write!(f, "{value}"),
            Output::Count(n) => write!(f, "{n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(op: StackOp) -> Operation {
        Operation::Stack { op }
    }

    fn queue(op: QueueOp) -> Operation {
        Operation::Queue { op }
    }

    fn contents(s: &str) -> Output {
        Output::Contents(s.to_owned())
    }

    #[test]
    fn stack_commands() {
        let mut session = Session::new(5);
        assert_eq!(session.apply(&stack(StackOp::Display)), Ok(contents("")));
        assert_eq!(session.apply(&stack(StackOp::Push { value: 1 })), Ok(contents("1")));
        assert_eq!(session.apply(&stack(StackOp::Push { value: 2 })), Ok(contents("1,2")));
        assert_eq!(session.apply(&stack(StackOp::Peek)), Ok(Output::Value(2)));
        assert_eq!(session.apply(&stack(StackOp::Size)), Ok(Output::Count(2)));
        assert_eq!(session.apply(&stack(StackOp::Capacity)), Ok(Output::Count(5)));
        assert_eq!(session.apply(&stack(StackOp::Pop)), Ok(contents("1")));
        assert_eq!(session.apply(&stack(StackOp::Pop)), Ok(contents("")));
        assert_eq!(session.apply(&stack(StackOp::Pop)), Err(Error::Underflow));
        assert_eq!(session.apply(&stack(StackOp::Peek)), Err(Error::Underflow));
    }

    #[test]
    fn queue_commands() {
        let mut session = Session::new(2);
        assert_eq!(session.apply(&queue(QueueOp::Enqueue { value: 8 })), Ok(contents("8")));
        assert_eq!(session.apply(&queue(QueueOp::Enqueue { value: 9 })), Ok(contents("8,9")));
        assert_eq!(
            session.apply(&queue(QueueOp::Enqueue { value: 10 })),
            Err(Error::Overflow { capacity: 2 })
        );
        assert_eq!(session.apply(&queue(QueueOp::Peek)), Ok(Output::Value(8)));
        assert_eq!(session.apply(&queue(QueueOp::Dequeue)), Ok(contents("9")));
        assert_eq!(session.apply(&queue(QueueOp::Size)), Ok(Output::Count(1)));
        assert_eq!(session.apply(&queue(QueueOp::Capacity)), Ok(Output::Count(2)));
        assert_eq!(session.apply(&queue(QueueOp::Display)), Ok(contents("9")));
    }

    #[test]
    fn containers_are_independent() {
        let mut session = Session::new(5);
        session.apply(&stack(StackOp::Push { value: 1 })).unwrap();
        session.apply(&queue(QueueOp::Enqueue { value: 2 })).unwrap();
        assert_eq!(session.stack().serialize(), "1");
        assert_eq!(session.queue().serialize(), "2");
    }

    #[test]
    fn output_formatting() {
        assert_eq!(contents("1,2,3").to_string(), "1,2,3");
        assert_eq!(contents("").to_string(), "");
        assert_eq!(Output::Value(-4).to_string(), "-4");
        assert_eq!(Output::Count(5).to_string(), "5");
    }
}
