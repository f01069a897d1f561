mod args;
mod logging;
mod repl;

pub use args::Options;
pub use logging::init_logging;
pub use repl::{evaluate_expressions, report, run, Summary, PROMPT};
