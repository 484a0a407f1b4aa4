use std::fmt::{self, Debug, Display};

use crate::debug;
use crate::error::Error;
use crate::serialize;

/// A FIFO queue of `i32` over a fixed-size ring buffer.
///
/// Logical position `i` (counting from the front) lives in physical slot
/// `(front + i) % capacity`. Nothing ever shifts; dequeue just moves `front`.
#[derive(Clone)]
pub struct BoundedQueue {
    slots: Box<[i32]>,
    front: usize,
    len: usize,
}

impl BoundedQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![0; capacity].into_boxed_slice(),
            front: 0,
            len: 0,
        }
    }

    /// Build a queue by enqueueing `values` in order, front first.
    pub fn from_values(
        capacity: usize,
        values: impl IntoIterator<Item = i32>,
    ) -> Result<Self, Error> {
        let mut queue = Self::new(capacity);
        for value in values {
            queue.enqueue(value)?;
        }
        Ok(queue)
    }

    pub fn enqueue(&mut self, value: i32) -> Result<(), Error> {
        if self.is_full() {
            return Err(Error::Overflow {
                capacity: self.capacity(),
            });
        }
        let rear = self.physical(self.len);
        self.slots[rear] = value;
        self.len += 1;
        Ok(())
    }

    /// Remove and return the front element.
    pub fn dequeue(&mut self) -> Result<i32, Error> {
        let front = self.peek()?;
        self.front = (self.front + 1) % self.capacity();
        self.len -= 1;
        Ok(front)
    }

    pub fn peek(&self) -> Result<i32, Error> {
        if self.is_empty() {
            return Err(Error::Underflow);
        }
        Ok(self.slots[self.front])
    }

    pub fn size(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Live elements, front to rear.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        (0..self.len).map(|i| self.slots[self.physical(i)])
    }

    /// Comma-joined contents, front to rear.
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    /// Physical slot of logical position `i`.
    ///
    /// Callers must check `capacity() > 0` first (any non-empty queue, or any
    /// non-full one, qualifies).
    fn physical(&self, i: usize) -> usize {
        (self.front + i) % self.capacity()
    }

    /// Is physical slot `slot` currently holding a live element?
    fn is_live(&self, slot: usize) -> bool {
        let capacity = self.capacity();
        (slot + capacity - self.front) % capacity < self.len
    }
}

impl Display for BoundedQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        serialize::write_joined(f, self.iter())
    }
}

impl Debug for BoundedQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return f.debug_list().entries(self.iter()).finish();
        }

        // Show the ring in physical order, so wraparound is visible.
        let head = (self.capacity() > 0).then_some(self.front);
        write!(f, "BoundedQueue ")?;
        debug::write_slots(f, &self.slots, |i| self.is_live(i), head)?;
        write!(f, " len={}/{}", self.len, self.capacity())
    }
}
