//! Error types for the `widget` demo.
//!
//! Command-line problems never reach this type: `gnuopt` reports them and
//! exits before `main` runs any widget logic.

use std::io;

use thiserror::Error;

/// Errors raised while producing widget labels.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// `--count 0` leaves nothing to print.
    #[error("--count must be at least 1")]
    ZeroCount,
    /// The name collapsed to nothing after trimming.
    #[error("--name must contain visible characters")]
    BlankName,
    /// The log subscriber could not be installed.
    #[error("failed to install log subscriber: {0}")]
    Logging(String),
    /// Writing labels failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
