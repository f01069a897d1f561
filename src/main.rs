use clap::Parser;
use linecalc::calculator::{Config, Engine, OperatorTable};
use linecalc::cli::{self, Options};
use tracing::info;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let options = Options::parse();
    cli::init_logging(options.verbose);

    let config = Config {
        strict: options.strict,
    };
    let mut engine = Engine::new(OperatorTable::standard(), config);

    let stdout = std::io::stdout();
    let mut output = stdout.lock();

    let summary = if options.expressions.is_empty() {
        cli::run(&mut engine, std::io::stdin().lock(), &mut output, options.prompt)?
    } else {
        cli::evaluate_expressions(&mut engine, &options.expressions, &mut output)?
    };

    info!(
        evaluated = summary.evaluated,
        failed = summary.failed,
        "end of input"
    );

    Ok(())
}
