use std::fmt::{self, Debug, Display};

use crate::debug;
use crate::error::Error;
use crate::serialize;

/// A LIFO stack of `i32` that never grows past its capacity.
#[derive(Clone)]
pub struct BoundedStack {
    slots: Box<[i32]>,
    len: usize,
}

impl BoundedStack {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![0; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Build a stack by pushing `values` in order, bottom first.
    pub fn from_values(
        capacity: usize,
        values: impl IntoIterator<Item = i32>,
    ) -> Result<Self, Error> {
        let mut stack = Self::new(capacity);
        for value in values {
            stack.push(value)?;
        }
        Ok(stack)
    }

    pub fn push(&mut self, value: i32) -> Result<(), Error> {
        if self.is_full() {
            return Err(Error::Overflow {
                capacity: self.capacity(),
            });
        }
        self.slots[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Remove and return the top element.
    ///
    /// The slot itself is left as-is; the next push overwrites it.
    pub fn pop(&mut self) -> Result<i32, Error> {
        let top = self.peek()?;
        self.len -= 1;
        Ok(top)
    }

    pub fn peek(&self) -> Result<i32, Error> {
        self.as_slice().last().copied().ok_or(Error::Underflow)
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

    /// Live elements, bottom to top.
    pub fn as_slice(&self) -> &[i32] {
        &self.slots[..self.len]
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.as_slice().iter().copied()
    }

    /// Comma-joined contents, bottom to top.
    pub fn serialize(&self) -> String {
        self.to_string()
    }
}

impl Display for BoundedStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        serialize::write_joined(f, self.iter())
    }
}

impl Debug for BoundedStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return f.debug_list().entries(self.iter()).finish();
        }

        // Show the whole backing array, including stale slots above the top.
        write!(f, "BoundedStack ")?;
        debug::write_slots(f, &self.slots, |i| i < self.len, self.len.checked_sub(1))?;
        write!(f, " len={}/{}", self.len, self.capacity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_stack() -> BoundedStack {
        BoundedStack::from_values(5, [1, 2, 3, 4, 5]).unwrap()
    }

    #[test]
    fn push_in_order() {
        let mut stack = BoundedStack::new(5);
        assert_eq!(stack.serialize(), "");

        for (i, value) in [10, -20, 30].into_iter().enumerate() {
            stack.push(value).unwrap();
            assert_eq!(stack.size(), i + 1);
        }
        assert_eq!(stack.serialize(), "10,-20,30");
        assert_eq!(stack.peek(), Ok(30));
    }

    #[test]
    fn push_when_full() {
        let mut stack = full_stack();
        assert!(stack.is_full());

        assert_eq!(stack.push(6), Err(Error::Overflow { capacity: 5 }));
        assert_eq!(stack.size(), 5);
        assert_eq!(stack.serialize(), "1,2,3,4,5");
        assert_eq!(stack.peek(), Ok(5));
    }

    #[test]
    fn pop_returns_top() {
        let mut stack = full_stack();
        assert_eq!(stack.pop(), Ok(5));
        assert_eq!(stack.pop(), Ok(4));
        assert_eq!(stack.serialize(), "1,2,3");

        // Reuses the slot that 4 was in.
        stack.push(9).unwrap();
        assert_eq!(stack.serialize(), "1,2,3,9");
    }

    #[test]
    fn pop_and_peek_when_empty() {
        let mut stack = BoundedStack::new(5);
        assert_eq!(stack.pop(), Err(Error::Underflow));
        assert_eq!(stack.peek(), Err(Error::Underflow));
        assert_eq!(stack.size(), 0);
        assert_eq!(stack.serialize(), "");

        stack.push(1).unwrap();
        stack.pop().unwrap();
        assert_eq!(stack.pop(), Err(Error::Underflow));
        assert!(stack.is_empty());
    }

    #[test]
    fn reads_are_idempotent() {
        let stack = BoundedStack::from_values(5, [4, 8]).unwrap();
        for _ in 0..3 {
            assert_eq!(stack.peek(), Ok(8));
            assert_eq!(stack.size(), 2);
            assert_eq!(stack.capacity(), 5);
            assert_eq!(stack.serialize(), "4,8");
        }
    }

    #[test]
    fn capacity_is_fixed() {
        let mut stack = BoundedStack::new(3);
        assert_eq!(stack.capacity(), 3);
        stack.push(1).unwrap();
        assert_eq!(stack.capacity(), 3);
        stack.push(2).unwrap();
        stack.push(3).unwrap();
        assert!(stack.push(4).is_err());
        assert_eq!(stack.capacity(), 3);
    }

    #[test]
    fn capacity_one() {
        let mut stack = BoundedStack::new(1);
        stack.push(7).unwrap();
        assert_eq!(stack.push(8), Err(Error::Overflow { capacity: 1 }));
        assert_eq!(stack.pop(), Ok(7));
        assert_eq!(stack.pop(), Err(Error::Underflow));
    }

    #[test]
    fn capacity_zero_rejects_everything() {
        let mut stack = BoundedStack::new(0);
        assert!(stack.is_empty());
        assert!(stack.is_full());
        assert_eq!(stack.push(1), Err(Error::Overflow { capacity: 0 }));
        assert_eq!(stack.pop(), Err(Error::Underflow));
    }

    #[test]
    fn from_values_overflow() {
        let err = BoundedStack::from_values(2, [1, 2, 3]).unwrap_err();
        assert_eq!(err, Error::Overflow { capacity: 2 });
    }

    #[test]
    fn debug_views() {
        let mut stack = full_stack();
        stack.pop().unwrap();
        stack.pop().unwrap();

        assert_eq!(format!("{stack:?}"), "[1, 2, 3]");
        assert_eq!(format!("{stack:#?}"), "BoundedStack [1 2 >3 _ _] len=3/5");
        assert_eq!(
            format!("{:#?}", BoundedStack::new(2)),
            "BoundedStack [_ _] len=0/2"
        );
    }
}
