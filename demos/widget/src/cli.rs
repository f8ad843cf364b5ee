//! Command-line surface of the widget demo.

use gnuopt::{Counter, DeclareError, Options, Set, reflect};

/// Program name used in usage and error output.
pub const PROGRAM: &str = "widget";

const CASE_GROUP: &str = "case";
const HELP_COLUMN: usize = 32;

/// Options accepted by `widget`.
#[derive(Debug, Clone, PartialEq, Eq, Options)]
pub struct WidgetCli {
    /// Name printed on every label.
    #[getopt("--name -N=NAME name printed on every label")]
    pub name: String,
    /// Widgets per part.
    #[getopt("--count -c=COUNT widgets per part")]
    pub count: u32,
    /// Text placed between the name and the rest of the label.
    #[getopt("--separator -s=SEP text between name and part")]
    pub separator: String,
    /// Upper-case the labels.
    #[getopt("--upper print labels in upper case")]
    pub upper: bool,
    /// Lower-case the labels.
    #[getopt("--lower print labels in lower case")]
    pub lower: bool,
    /// Log verbosity.
    #[getopt("-v raise log verbosity\nrepeat for more detail")]
    pub verbose: Counter,
    /// Print usage and exit.
    #[getopt("--help -h show this help and exit")]
    pub help: bool,
}

impl Default for WidgetCli {
    fn default() -> Self {
        Self {
            name: String::from("widget"),
            count: 1,
            separator: String::from(": "),
            upper: false,
            lower: false,
            verbose: Counter::default(),
            help: false,
        }
    }
}

/// Declares the options of `cli` on a new set.
///
/// `--upper` and `--lower` form a mutually exclusive group.
///
/// # Errors
///
/// Returns a [`DeclareError`] when the struct tags clash.
pub fn declare(cli: &mut WidgetCli) -> Result<Set<'_>, DeclareError> {
    let mut set = Set::new(PROGRAM);
    set.set_parameters("PART...").set_help_column(HELP_COLUMN);
    reflect::register(cli, &mut set)?;
    for name in ["upper", "lower"] {
        if let Some(opt) = set.lookup_mut(name) {
            opt.set_group(CASE_GROUP);
        }
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::{WidgetCli, declare};
    use anyhow::{Result, anyhow, ensure};
    use gnuopt::reflect;

    #[test]
    fn tags_are_valid() -> Result<()> {
        reflect::validate(&WidgetCli::default())?;
        Ok(())
    }

    #[test]
    fn case_options_are_exclusive() -> Result<()> {
        let mut cli = WidgetCli::default();
        let mut set = declare(&mut cli)?;
        let Err(err) = set.parse(["widget", "--upper", "--lower"]) else {
            return Err(anyhow!("conflicting case options were accepted"));
        };
        ensure!(
            err.to_string() == "widget: options --upper and --lower are mutually exclusive",
            "unexpected error {err}"
        );
        Ok(())
    }

    #[test]
    fn usage_lists_every_option() -> Result<()> {
        let mut cli = WidgetCli::default();
        let set = declare(&mut cli)?;
        let usage = set.usage().to_string();
        for needle in ["--name=NAME", "-c, --count=COUNT", "--upper", "-h, --help", "PART..."] {
            ensure!(usage.contains(needle), "{needle} missing from:\n{usage}");
        }
        Ok(())
    }
}
