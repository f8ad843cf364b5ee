//! A single declared option and its per-parse state.

use std::fmt;

use tracing::debug;

use crate::{ParseErrorKind, Value, ValueError};

use super::Declaration;

/// One declared option.
///
/// Returned by [`Set::declare`](crate::Set::declare) so constraints can be
/// chained onto the declaration:
///
/// ```
/// use gnuopt::{Declaration, Set};
///
/// let (mut json, mut yaml) = (false, false);
/// let mut set = Set::new("demo");
/// set.declare(Declaration::new().long("json"), &mut json)?.set_group("format");
/// set.declare(Declaration::new().long("yaml"), &mut yaml)?.set_group("format");
/// set.require_group("format");
/// # Ok::<(), gnuopt::DeclareError>(())
/// ```
pub struct Opt<'a> {
    short: Option<char>,
    long: Option<String>,
    value: &'a mut dyn Value,
    flag: bool,
    optional: bool,
    default: String,
    help: Option<String>,
    param: Option<String>,
    mandatory: bool,
    group: Option<String>,
    count: usize,
    site: String,
}

/// What the scanner found for an option occurrence.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Supplied<'t> {
    /// A flag appeared without text.
    Flag,
    /// Explicit text, attached or taken from the next argument.
    Text(&'t str),
    /// An optional argument was omitted.
    Default,
}

impl<'a> Opt<'a> {
    pub(super) fn new(decl: Declaration, value: &'a mut dyn Value, site: String) -> Self {
        Self {
            short: decl.short,
            long: decl.long,
            flag: value.is_flag(),
            optional: decl.optional,
            default: value.render(),
            value,
            help: decl.help,
            param: decl.param,
            mandatory: false,
            group: None,
            count: 0,
            site,
        }
    }

    /// Marks the option as mandatory: parsing fails unless it is set.
    pub const fn mandatory(&mut self) -> &mut Self {
        self.mandatory = true;
        self
    }

    /// Adds the option to a mutually exclusive group.
    pub fn set_group(&mut self, group: impl Into<String>) -> &mut Self {
        self.group = Some(group.into());
        self
    }

    /// Returns the short name.
    #[must_use]
    pub const fn short(&self) -> Option<char> {
        self.short
    }

    /// Returns the long name.
    #[must_use]
    pub fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// Returns the name used in messages: `--long` when there is one,
    /// otherwise `-s`.
    #[must_use]
    pub fn name(&self) -> String {
        match (&self.long, self.short) {
            (Some(long), _) => format!("--{long}"),
            (None, Some(short)) => format!("-{short}"),
            (None, None) => String::new(),
        }
    }

    /// Returns the help text.
    #[must_use]
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Returns the argument name used in usage output.
    #[must_use]
    pub fn param(&self) -> Option<&str> {
        self.param.as_deref()
    }

    /// Returns the value as rendered when the option was declared.
    #[must_use]
    pub fn default_text(&self) -> &str {
        &self.default
    }

    /// Reports whether the option takes no argument.
    #[must_use]
    pub const fn is_flag(&self) -> bool {
        self.flag
    }

    /// Reports whether the argument may be omitted.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.optional
    }

    /// Reports whether the option must be set.
    #[must_use]
    pub const fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    /// Returns the group the option belongs to.
    #[must_use]
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// Reports whether the option was applied during parsing.
    #[must_use]
    pub const fn was_set(&self) -> bool {
        self.count > 0
    }

    /// Returns how many times the option was applied.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns where the option was declared, as `file:line`.
    #[must_use]
    pub fn site(&self) -> &str {
        &self.site
    }

    /// Returns the bound value.
    #[must_use]
    pub const fn value(&self) -> &dyn Value {
        &*self.value
    }

    pub(crate) fn apply(&mut self, supplied: Supplied<'_>) -> Result<(), ParseErrorKind> {
        let outcome = match supplied {
            Supplied::Flag => self.value.set_flag(),
            Supplied::Text(text) => self.value.parse(text),
            Supplied::Default => self.value.parse(&self.default),
        };
        outcome.map_err(|source| ParseErrorKind::InvalidValue {
            name: self.name(),
            text: match supplied {
                Supplied::Flag => String::new(),
                Supplied::Text(text) => text.to_owned(),
                Supplied::Default => self.default.clone(),
            },
            source,
        })?;
        self.count += 1;
        debug!(option = %self.name(), value = %self.value.render(), "applied option");
        Ok(())
    }

    pub(crate) fn restore(&mut self) -> Result<(), ValueError> {
        self.count = 0;
        self.value.restore(&self.default)
    }
}

impl fmt::Debug for Opt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opt")
            .field("short", &self.short)
            .field("long", &self.long)
            .field("value", &self.value.render())
            .field("default", &self.default)
            .field("flag", &self.flag)
            .field("optional", &self.optional)
            .field("mandatory", &self.mandatory)
            .field("group", &self.group)
            .field("count", &self.count)
            .field("site", &self.site)
            .finish_non_exhaustive()
    }
}
