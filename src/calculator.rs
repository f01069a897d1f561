mod engine;
mod operators;
mod reader;
mod stack;

pub use engine::{Config, Engine};
pub use operators::{OperatorTable, Operation};
pub use reader::Reader;
pub use stack::Stack;
