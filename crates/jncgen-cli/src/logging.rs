//! stderr logging setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Filter directives for the command-line flags. `None` defers to
/// `RUST_LOG`.
fn directives(verbose: bool, debug: bool) -> Option<&'static str> {
    if debug {
        Some("warn,jncgen_schema=debug,jncgen_codegen=debug,jncgen_cli=debug")
    } else if verbose {
        Some("debug")
    } else {
        None
    }
}

/// Install the global subscriber. Without flags `RUST_LOG` applies, and
/// only warnings are shown when it is unset.
pub fn init_logging(verbose: bool, debug: bool) {
    let filter = match directives(verbose, debug) {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
