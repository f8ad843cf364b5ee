//! Log subscriber set-up driven by the `-v` counter.

use std::io;

use gnuopt::Counter;
use tracing_subscriber::EnvFilter;

use crate::error::WidgetError;

/// Maps the number of `-v` flags to a default filter directive.
#[must_use]
pub const fn directive(verbose: Counter) -> &'static str {
    match verbose.get() {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs a stderr subscriber. `RUST_LOG` wins over the `-v` count.
///
/// # Errors
///
/// Returns [`WidgetError::Logging`] when a global subscriber already exists.
pub fn init(verbose: Counter) -> Result<(), WidgetError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| WidgetError::Logging(err.to_string()))
}
