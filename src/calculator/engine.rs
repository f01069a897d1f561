use super::operators::{Operation, OperatorTable};
use super::reader::Reader;
use super::stack::Stack;
use crate::errors::{Error, Result};
use tracing::{debug, trace, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
/// Options controlling how an engine treats its input
pub struct Config {
    /// Reject lines with trailing input that does not form an operator and
    /// number pair, rather than ignoring it
    pub strict: bool,
}

/// Evaluates single-line arithmetic expressions using a value stack and an
/// operator stack. Operators of equal precedence associate to the left.
pub struct Engine {
    table: OperatorTable,
    config: Config,
    values: Stack<f64>,
    // Each pending operator is kept with its column for error reporting
    operators: Stack<(char, usize)>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(OperatorTable::standard(), Config::default())
    }
}

impl Engine {
    /// Returns a new expression evaluation engine using the given operator
    /// table
    pub fn new(table: OperatorTable, config: Config) -> Engine {
        Engine {
            table,
            config,
            values: Stack::new(),
            operators: Stack::new(),
        }
    }

    /// Evaluates an expression of the form `number (operator number)*`
    pub fn evaluate(&mut self, input: &str) -> Result<f64> {
        // Nothing from a previous line, successful or not, survives into
        // this one
        self.values.clear();
        self.operators.clear();

        let mut reader = Reader::new(input);
        reader.skip_whitespace();
        let column = reader.column();
        let Some(first) = reader.read_number() else {
            return Err(Error::MalformedNumber { column });
        };
        self.push_value(first);

        while let Some((symbol, value, column)) = reader.read_pair() {
            let precedence = self.operation(symbol, column)?.precedence;

            // Resolve pending operations which bind at least as tightly as
            // the new one before deferring it
            while let Some((top, top_column)) = self.operators.peek() {
                if self.operation(top, top_column)?.precedence < precedence {
                    break;
                }
                self.evaluate_one()?;
            }

            trace!(symbol = %symbol, "push operator");
            self.operators.push((symbol, column));
            self.push_value(value);
        }

        if !reader.at_end() {
            let column = reader.column();
            if self.config.strict {
                return Err(Error::MalformedOperator { column });
            }
            warn!(column, "ignoring trailing input");
        }

        self.evaluate_all()?;
        self.pop_value()
    }

    /// Returns the operation for a symbol
    fn operation(&self, symbol: char, column: usize) -> Result<Operation> {
        self.table
            .get(symbol)
            .copied()
            .ok_or(Error::UnknownOperator { symbol, column })
    }

    /// Pushes a value onto the value stack
    fn push_value(&mut self, value: f64) {
        trace!(value, "push value");
        self.values.push(value);
    }

    /// Pops the operator stack and returns the operator and its column
    fn pop_operator(&mut self) -> Result<(char, usize)> {
        self.operators.pop()
    }

    /// Pops the value stack and returns the value
    fn pop_value(&mut self) -> Result<f64> {
        self.values.pop()
    }

    /// Performs the operation at the top of the operator stack on the two
    /// topmost values, and pushes the result
    fn evaluate_one(&mut self) -> Result<()> {
        let (symbol, column) = self.pop_operator()?;
        let operation = self.operation(symbol, column)?;

        // The top value was pushed last, so it is the right-hand operand
        let second = self.pop_value()?;
        let first = self.pop_value()?;
        let result = operation.apply(first, second);

        debug!(symbol = %symbol, first, second, result, "evaluate");
        self.values.push(result);

        Ok(())
    }

    /// Performs all pending operations
    fn evaluate_all(&mut self) -> Result<()> {
        while !self.operators.is_empty() {
            self.evaluate_one()?;
        }

        Ok(())
    }
}
