//! Entry point for the `widget` demo.
//!
//! Parses the command line with `gnuopt`, then prints one label per part.
//! Command-line errors print the usage to stderr and exit with status 1.

use std::env;
use std::io::{self, Write as _};

use gnuopt::exit::OrExit;
use tracing::info;
use widget::cli::{self, WidgetCli};
use widget::{logging, report};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let mut options = WidgetCli::default();
    let (parts, usage) = {
        let mut set = cli::declare(&mut options).or_exit();
        let parts = set.parse_or_exit(env::args());
        (parts, set.usage().to_string())
    };

    if options.help {
        let mut stdout = io::stdout().lock();
        stdout.write_all(usage.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    logging::init(options.verbose)?;
    info!(parts = parts.len(), name = %options.name, "rendering labels");
    let labels = report::labels(&options, &parts)?;
    report::write(&mut io::stdout().lock(), &labels)?;
    Ok(())
}
