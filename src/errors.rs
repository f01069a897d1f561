use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("expected a number at column {column}")]
    MalformedNumber { column: usize },

    #[error("expected an operator and a number at column {column}")]
    MalformedOperator { column: usize },

    #[error("unknown operator '{symbol}' at column {column}")]
    UnknownOperator { symbol: char, column: usize },

    #[error("stack underflow")]
    StackUnderflow,
}
