//! Builder describing an option before it is bound to a value.

/// The names and presentation of an option about to be declared.
///
/// ```
/// use gnuopt::Declaration;
///
/// let decl = Declaration::new()
///     .long("count")
///     .short('c')
///     .param("COUNT")
///     .help("number of widgets");
/// assert_eq!(decl.long_name(), Some("count"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declaration {
    pub(super) short: Option<char>,
    pub(super) long: Option<String>,
    pub(super) help: Option<String>,
    pub(super) param: Option<String>,
    pub(super) optional: bool,
}

impl Declaration {
    /// Starts an empty declaration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the short name, e.g. `'v'` for `-v`.
    #[must_use]
    pub const fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Sets the long name, e.g. `"verbose"` for `--verbose`.
    ///
    /// An empty name leaves the option without a long form.
    #[must_use]
    pub fn long(mut self, name: impl Into<String>) -> Self {
        let long = name.into();
        self.long = (!long.is_empty()).then_some(long);
        self
    }

    /// Sets the help text shown in usage output.
    #[must_use]
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Sets the argument name shown in usage output, e.g. `"COUNT"`.
    #[must_use]
    pub fn param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into());
        self
    }

    /// Makes the argument optional.
    ///
    /// An optional argument is only taken when attached (`--level=3`,
    /// `-l3`); otherwise the value is reset to its declared default.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Returns the short name.
    #[must_use]
    pub const fn short_name(&self) -> Option<char> {
        self.short
    }

    /// Returns the long name.
    #[must_use]
    pub fn long_name(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// Returns the help text.
    #[must_use]
    pub fn help_text(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Returns the argument name.
    #[must_use]
    pub fn param_name(&self) -> Option<&str> {
        self.param.as_deref()
    }

    /// Reports whether the argument is optional.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.optional
    }
}
