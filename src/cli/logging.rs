use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Returns the default log filter directive for a verbosity level
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "linecalc=warn",
        1 => "linecalc=info",
        2 => "linecalc=debug",
        _ => "linecalc=trace",
    }
}

/// Initializes the tracing subscriber, writing to standard error so that
/// log output never mixes with results. RUST_LOG overrides the verbosity.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}
