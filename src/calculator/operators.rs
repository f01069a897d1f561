use std::collections::HashMap;
use std::fmt;

/// A binary operation with its binding precedence. Higher precedences bind
/// more tightly.
#[derive(Clone, Copy)]
pub struct Operation {
    pub precedence: u32,
    apply: fn(f64, f64) -> f64,
}

impl Operation {
    /// Returns a new operation
    pub fn new(precedence: u32, apply: fn(f64, f64) -> f64) -> Operation {
        Operation { precedence, apply }
    }

    /// Applies the operation to its left and right operands
    pub fn apply(&self, first: f64, second: f64) -> f64 {
        (self.apply)(first, second)
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Operation(precedence {})", self.precedence)
    }
}

/// An immutable mapping from operator symbols to operations
#[derive(Debug, Clone)]
pub struct OperatorTable {
    operations: HashMap<char, Operation>,
}

impl OperatorTable {
    /// Returns a table containing the four basic arithmetic operations
    pub fn standard() -> OperatorTable {
        OperatorTable::from_operations([
            ('+', Operation::new(1, |first, second| first + second)),
            ('-', Operation::new(1, |first, second| first - second)),
            ('*', Operation::new(2, |first, second| first * second)),
            ('/', Operation::new(2, |first, second| first / second)),
        ])
    }

    /// Returns a table containing the given operations
    pub fn from_operations<I>(operations: I) -> OperatorTable
    where
        I: IntoIterator<Item = (char, Operation)>,
    {
        OperatorTable {
            operations: operations.into_iter().collect(),
        }
    }

    /// Returns the operation for a symbol, if there is one
    pub fn get(&self, symbol: char) -> Option<&Operation> {
        self.operations.get(&symbol)
    }
}
