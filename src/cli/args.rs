use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
/// Command line options for the calculator
pub struct Options {
    /// Expressions to evaluate instead of reading lines from standard input
    pub expressions: Vec<String>,

    /// Print a prompt before reading each line
    #[arg(short, long)]
    pub prompt: bool,

    /// Treat trailing input which is not an operator and number as an error
    #[arg(short, long)]
    pub strict: bool,

    /// Increase logging verbosity when RUST_LOG is not set
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::parse_from(["linecalc"]);
        assert!(options.expressions.is_empty());
        assert!(!options.prompt);
        assert!(!options.strict);
        assert_eq!(options.verbose, 0);
    }

    #[test]
    fn test_flags() {
        let options = Options::parse_from(["linecalc", "-p", "--strict", "-vv", "1 + 2", "3 * 4"]);
        assert_eq!(options.expressions, vec!["1 + 2", "3 * 4"]);
        assert!(options.prompt);
        assert!(options.strict);
        assert_eq!(options.verbose, 2);
    }
}
