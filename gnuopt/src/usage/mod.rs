//! Help output: a synopsis line followed by a two-column option table.
//!
//! ```text
//! Usage: widget [-v] [-c COUNT] [--lazy value] [parameters ...]
//!  -c, --count=COUNT    number of widgets
//!      --lazy=value     unspecified
//!  -v                   be verbose
//! ```

use std::fmt;

use crate::{Opt, Set};


const MIN_WIDTH: usize = 4;
const DEFAULT_PARAM: &str = "value";
const UNSPECIFIED: &str = "unspecified";
/// The leading space and the two spaces between the columns.
const GUTTER: usize = 3;

/// The full usage text of a [`Set`], rendered through [`fmt::Display`].
#[derive(Debug, Clone, Copy)]
pub struct Usage<'s, 'a> {
    set: &'s Set<'a>,
}

impl fmt::Display for Usage<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Usage: {}", self.set.program())?;
        let synopsis = self.set.usage_line();
        if !synopsis.is_empty() {
            write!(f, " {synopsis}")?;
        }
        writeln!(f)?;
        self.set.write_options(f)
    }
}

impl<'a> Set<'a> {
    /// Returns the usage text: synopsis plus option table.
    #[must_use]
    pub const fn usage(&self) -> Usage<'_, 'a> {
        Usage { set: self }
    }

    /// Returns the synopsis that follows `Usage: <program>`.
    ///
    /// Short flags are bundled first, then every other option in
    /// declaration order, then the parameters text.
    #[must_use]
    pub fn usage_line(&self) -> String {
        let bundle: String = self
            .iter()
            .filter(|opt| opt.is_flag())
            .filter_map(Opt::short)
            .collect();
        let mut parts = Vec::new();
        if !bundle.is_empty() {
            parts.push(format!("[-{bundle}]"));
        }
        parts.extend(self.iter().filter_map(synopsis_entry));
        if !self.parameters().is_empty() {
            parts.push(self.parameters().to_owned());
        }
        parts.join(" ")
    }

    /// Writes the option table, one entry per option in declaration order.
    ///
    /// The left column is as wide as the widest entry that still leaves the
    /// help text starting at or before the help column; wider entries put
    /// their help on the following line.
    ///
    /// # Errors
    ///
    /// Propagates failures from `out`.
    pub fn write_options<W>(&self, out: &mut W) -> fmt::Result
    where
        W: fmt::Write + ?Sized,
    {
        let lefts: Vec<String> = self.iter().map(left_column).collect();
        let limit = self.help_column().saturating_sub(GUTTER);
        let width = lefts
            .iter()
            .map(|left| left.chars().count())
            .filter(|len| *len <= limit)
            .fold(MIN_WIDTH, usize::max);

        for (opt, left) in self.iter().zip(&lefts) {
            let help = opt
                .help()
                .map(str::trim)
                .filter(|help| !help.is_empty())
                .unwrap_or(UNSPECIFIED);
            let mut lines = help.lines();
            let first = lines.next().unwrap_or_default();
            if left.chars().count() > width {
                writeln!(out, " {left}")?;
                writeln!(out, " {:width$}  {first}", "")?;
            } else {
                writeln!(out, " {left:<width$}  {first}")?;
            }
            for line in lines {
                writeln!(out, " {:width$}  {line}", "")?;
            }
        }
        Ok(())
    }
}

fn param_of<'o>(opt: &'o Opt<'_>) -> &'o str {
    opt.param().unwrap_or(DEFAULT_PARAM)
}

fn synopsis_entry(opt: &Opt<'_>) -> Option<String> {
    let entry = match (opt.is_flag(), opt.short(), opt.long()) {
        (true, None, Some(long)) => format!("--{long}"),
        (false, Some(short), _) if opt.is_optional() => format!("-{short} [{}]", param_of(opt)),
        (false, Some(short), _) => format!("-{short} {}", param_of(opt)),
        (false, None, Some(long)) if opt.is_optional() => {
            format!("--{long}[={}]", param_of(opt))
        }
        (false, None, Some(long)) => format!("--{long} {}", param_of(opt)),
        _ => return None,
    };
    Some(format!("[{entry}]"))
}

fn left_column(opt: &Opt<'_>) -> String {
    let mut left = match (opt.short(), opt.long()) {
        (Some(short), Some(long)) => format!("-{short}, --{long}"),
        (Some(short), None) => format!("-{short}"),
        (None, Some(long)) => format!("    --{long}"),
        (None, None) => String::new(),
    };
    if !opt.is_flag() {
        let param = param_of(opt);
        let suffix = match (opt.long().is_some(), opt.is_optional()) {
            (true, false) => format!("={param}"),
            (true, true) => format!("[={param}]"),
            (false, false) => format!(" {param}"),
            (false, true) => format!(" [{param}]"),
        };
        left.push_str(&suffix);
    }
    left
}
