//! The option registry.
//!
//! A [`Set`] owns the declared options in declaration order together with
//! the short and long name indices the scanner resolves against. It borrows
//! every bound value mutably for its lifetime `'a`, so the values can be read
//! again once the set is dropped.

use std::collections::{BTreeMap, HashMap};
use std::panic::Location;

use crate::{DeclareError, Ordering, Value, ValueError};

mod declaration;
mod opt;

pub use declaration::Declaration;
pub use opt::Opt;
pub(crate) use opt::Supplied;

const DEFAULT_PARAMETERS: &str = "[parameters ...]";
const DEFAULT_HELP_COLUMN: usize = 20;

/// A short or long option name used for lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Name<'n> {
    /// A short name such as `'v'`.
    Short(char),
    /// A long name such as `"verbose"`, without dashes.
    Long(&'n str),
}

impl From<char> for Name<'_> {
    fn from(short: char) -> Self {
        Self::Short(short)
    }
}

impl<'n> From<&'n str> for Name<'n> {
    fn from(long: &'n str) -> Self {
        Self::Long(long)
    }
}

/// An ordered collection of declared options.
///
/// A set carries per-parse state (which options were applied), so each
/// independent parse needs its own set; see [`crate::reflect::parse_fresh`]
/// for the struct-based way to get one per caller.
#[derive(Debug)]
pub struct Set<'a> {
    program: String,
    parameters: String,
    help_column: usize,
    ordering: Ordering,
    options: Vec<Opt<'a>>,
    shorts: HashMap<char, usize>,
    longs: BTreeMap<String, usize>,
    required_groups: Vec<String>,
}

impl Default for Set<'_> {
    fn default() -> Self {
        Self::new("")
    }
}

impl<'a> Set<'a> {
    /// Creates an empty set for `program`.
    ///
    /// An empty program name is replaced by the basename of the first
    /// argument handed to [`Set::parse`].
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            parameters: String::from(DEFAULT_PARAMETERS),
            help_column: DEFAULT_HELP_COLUMN,
            ordering: Ordering::default(),
            options: Vec::new(),
            shorts: HashMap::new(),
            longs: BTreeMap::new(),
            required_groups: Vec::new(),
        }
    }

    /// Returns the program name used to prefix error messages.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Replaces the program name.
    pub fn set_program(&mut self, program: impl Into<String>) -> &mut Self {
        self.program = program.into();
        self
    }

    /// Returns the trailing text of the usage line.
    #[must_use]
    pub fn parameters(&self) -> &str {
        &self.parameters
    }

    /// Replaces the trailing text of the usage line, `[parameters ...]` by
    /// default.
    pub fn set_parameters(&mut self, parameters: impl Into<String>) -> &mut Self {
        self.parameters = parameters.into();
        self
    }

    /// Returns the column at which help text starts in usage output.
    #[must_use]
    pub const fn help_column(&self) -> usize {
        self.help_column
    }

    /// Sets the widest option column that still shares a line with its help
    /// text.
    pub const fn set_help_column(&mut self, column: usize) -> &mut Self {
        self.help_column = column;
        self
    }

    /// Returns how options and positional arguments may interleave.
    #[must_use]
    pub const fn ordering(&self) -> Ordering {
        self.ordering
    }

    /// Chooses between GNU permutation and POSIX ordering.
    pub const fn set_ordering(&mut self, ordering: Ordering) -> &mut Self {
        self.ordering = ordering;
        self
    }

    /// Declares an option bound to `value`.
    ///
    /// The declaration site is recorded for diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`DeclareError::NoName`] when the declaration has neither a
    /// short nor a long name, and [`DeclareError::DuplicateShort`] or
    /// [`DeclareError::DuplicateLong`] when a name is already taken.
    #[track_caller]
    pub fn declare(
        &mut self,
        decl: Declaration,
        value: &'a mut dyn Value,
    ) -> Result<&mut Opt<'a>, DeclareError> {
        let caller = Location::caller();
        self.declare_at(decl, value, format!("{}:{}", caller.file(), caller.line()))
    }

    pub(crate) fn declare_at(
        &mut self,
        decl: Declaration,
        value: &'a mut dyn Value,
        site: String,
    ) -> Result<&mut Opt<'a>, DeclareError> {
        if decl.short_name().is_none() && decl.long_name().is_none() {
            return Err(DeclareError::NoName { site });
        }
        if let Some(short) = decl.short_name()
            && let Some(previous) = self.lookup(short)
        {
            return Err(DeclareError::DuplicateShort {
                short,
                site,
                previous: previous.site().to_owned(),
            });
        }
        if let Some(long) = decl.long_name()
            && let Some(previous) = self.lookup(long)
        {
            return Err(DeclareError::DuplicateLong {
                long: long.to_owned(),
                site,
                previous: previous.site().to_owned(),
            });
        }

        let index = self.options.len();
        if let Some(short) = decl.short_name() {
            self.shorts.insert(short, index);
        }
        if let Some(long) = decl.long_name() {
            self.longs.insert(long.to_owned(), index);
        }
        self.options.push(Opt::new(decl, value, site));
        Ok(self.opt_mut(index))
    }

    /// Requires exactly one member of `group` to be set.
    pub fn require_group(&mut self, name: impl Into<String>) -> &mut Self {
        let group = name.into();
        if !self.required_groups.contains(&group) {
            self.required_groups.push(group);
        }
        self
    }

    /// Returns the groups marked as required, in the order they were marked.
    #[must_use]
    pub fn required_groups(&self) -> &[String] {
        &self.required_groups
    }

    /// Looks up an option by short (`'v'`) or long (`"verbose"`) name.
    #[must_use]
    pub fn lookup<'n>(&self, name: impl Into<Name<'n>>) -> Option<&Opt<'a>> {
        self.index_of(name.into())
            .and_then(|index| self.options.get(index))
    }

    /// Looks up an option for further configuration.
    #[must_use]
    pub fn lookup_mut<'n>(&mut self, name: impl Into<Name<'n>>) -> Option<&mut Opt<'a>> {
        self.index_of(name.into())
            .and_then(|index| self.options.get_mut(index))
    }

    fn index_of(&self, name: Name<'_>) -> Option<usize> {
        match name {
            Name::Short(short) => self.shorts.get(&short).copied(),
            Name::Long(long) => self.longs.get(long).copied(),
        }
    }

    /// Iterates over the options in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Opt<'a>> {
        self.options.iter()
    }

    /// Calls `visitor` for every option in declaration order.
    pub fn visit_all<F>(&self, visitor: F)
    where
        F: FnMut(&Opt<'a>),
    {
        self.options.iter().for_each(visitor);
    }

    /// Returns the number of declared options.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.options.len()
    }

    /// Reports whether nothing was declared.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Returns the members of `group` in declaration order.
    #[must_use]
    pub fn group_members(&self, group: &str) -> Vec<&Opt<'a>> {
        self.options
            .iter()
            .filter(|opt| opt.group() == Some(group))
            .collect()
    }

    /// Returns every group with its members, ordered by each group's first
    /// declared member.
    #[must_use]
    pub fn groups(&self) -> Vec<(&str, Vec<&Opt<'a>>)> {
        let mut groups: Vec<(&str, Vec<&Opt<'a>>)> = Vec::new();
        for opt in &self.options {
            let Some(group) = opt.group() else {
                continue;
            };
            match groups.iter_mut().find(|(name, _)| *name == group) {
                Some((_, members)) => members.push(opt),
                None => groups.push((group, vec![opt])),
            }
        }
        groups
    }

    /// Restores every value to its declared default and forgets which
    /// options were set.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValueError`] raised while restoring a value.
    pub fn reset(&mut self) -> Result<(), ValueError> {
        self.options.iter_mut().try_for_each(Opt::restore)
    }

    pub(crate) fn long_names(&self) -> &BTreeMap<String, usize> {
        &self.longs
    }

    pub(crate) fn short_index(&self, short: char) -> Option<usize> {
        self.shorts.get(&short).copied()
    }

    #[expect(
        clippy::indexing_slicing,
        reason = "indices come from the name maps, which only hold pushed options"
    )]
    pub(crate) fn opt(&self, index: usize) -> &Opt<'a> {
        &self.options[index]
    }

    #[expect(
        clippy::indexing_slicing,
        reason = "indices come from the name maps, which only hold pushed options"
    )]
    pub(crate) fn opt_mut(&mut self, index: usize) -> &mut Opt<'a> {
        &mut self.options[index]
    }
}

impl<'s, 'a> IntoIterator for &'s Set<'a> {
    type Item = &'s Opt<'a>;
    type IntoIter = std::slice::Iter<'s, Opt<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}
