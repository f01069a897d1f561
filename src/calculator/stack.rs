use crate::errors::{Error, Result};

/// A last-in, first-out stack used by the evaluation engine
#[derive(Debug)]
pub struct Stack<T> {
    elements: Vec<T>,
}

impl<T: Copy> Stack<T> {
    /// Creates a new, empty stack
    pub fn new() -> Stack<T> {
        Stack {
            elements: Vec::new(),
        }
    }

    /// Returns true if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of elements on the stack
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns the element at the top of the stack, if any
    pub fn peek(&self) -> Option<T> {
        self.elements.last().copied()
    }

    /// Pops the element at the top of the stack. Returns an error if the
    /// stack is empty.
    pub fn pop(&mut self) -> Result<T> {
        self.elements.pop().ok_or(Error::StackUnderflow)
    }

    /// Pushes an element onto the stack
    pub fn push(&mut self, element: T) {
        self.elements.push(element);
    }

    /// Removes all elements from the stack
    pub fn clear(&mut self) {
        self.elements.clear();
    }
}
