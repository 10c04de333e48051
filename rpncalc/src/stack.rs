use thiserror::Error;

pub const DEFAULT_CAPACITY: usize = 100;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    #[error("Stack overflow (capacity {0})")]
    Overflow(usize),
    #[error("Stack underflow")]
    Underflow,
    #[error("Stack is empty")]
    EmptyAccess,
}

/// Fixed capacity LIFO. Never grows past `capacity`, a push on a full
/// stack is an error instead.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Stack<T> {
    // the bound is enforced by push, only the usual depth is preallocated
    pub fn with_capacity(capacity: usize) -> Self {
        Stack{items: Vec::with_capacity(capacity.min(DEFAULT_CAPACITY)), capacity}
    }

    pub fn push(&mut self, value: T) -> Result<(), StackError> {
        if self.items.len() >= self.capacity {
            return Err(StackError::Overflow(self.capacity));
        }
        self.items.push(value);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T, StackError> {
        self.items.pop().ok_or(StackError::Underflow)
    }

    pub fn peek(&self) -> Result<&T, StackError> {
        self.items.last().ok_or(StackError::EmptyAccess)
    }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    pub fn len(&self) -> usize { self.items.len() }

    pub fn capacity(&self) -> usize { self.capacity }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::with_capacity(DEFAULT_CAPACITY)
    }
}
