//! Label rendering for the widget demo.

use std::io::{self, Write};

use tracing::{debug, instrument};

use crate::cli::WidgetCli;
use crate::error::WidgetError;

const DEFAULT_PART: &str = "widget";

/// Builds one label per part, or a single label when no parts were given.
///
/// # Errors
///
/// Returns [`WidgetError::ZeroCount`] for `--count 0` and
/// [`WidgetError::BlankName`] for a whitespace-only `--name`.
#[instrument(level = "debug", skip(cli), fields(count = cli.count))]
pub fn labels(cli: &WidgetCli, parts: &[String]) -> Result<Vec<String>, WidgetError> {
    if cli.count == 0 {
        return Err(WidgetError::ZeroCount);
    }
    let name = cli.name.trim();
    if name.is_empty() {
        return Err(WidgetError::BlankName);
    }
    let names: Vec<&str> = if parts.is_empty() {
        vec![DEFAULT_PART]
    } else {
        parts.iter().map(String::as_str).collect()
    };
    Ok(names
        .into_iter()
        .map(|part| {
            let label = format!("{name}{}{} x {part}", cli.separator, cli.count);
            debug!(%label, "rendered label");
            if cli.upper {
                label.to_uppercase()
            } else if cli.lower {
                label.to_lowercase()
            } else {
                label
            }
        })
        .collect())
}

/// Writes each label on its own line.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn write(out: &mut impl Write, labels: &[String]) -> io::Result<()> {
    for label in labels {
        writeln!(out, "{label}")?;
    }
    out.flush()
}
