//! Declaring options from the fields of a struct.
//!
//! A struct implementing [`Options`] (normally through
//! [`derive(Options)`](macro@crate::Options)) describes each of its fields by
//! identifier and optional tag. The functions here turn those descriptions
//! into declarations on a [`Set`]:
//!
//! * a field tagged exactly `"-"` is skipped;
//! * a field without a tag (or with an empty one) is declared from its
//!   identifier: a single letter becomes a short option, anything longer a
//!   lower-cased long option;
//! * any other tag is read with [`parse_tag`].
//!
//! ```
//! use gnuopt::{Counter, Options, reflect};
//!
//! #[derive(Clone, Default, Options)]
//! struct Cli {
//!     #[getopt("--name=NAME -N name of the widget")]
//!     name: String,
//!     #[getopt("-v be verbose")]
//!     verbose: Counter,
//!     dry_run: bool,
//! }
//!
//! let parsed = reflect::parse_fresh(&Cli::default(), ["cli", "-vv", "--dry_run", "-N", "gear"])?;
//! assert_eq!(parsed.options.name, "gear");
//! assert_eq!(parsed.options.verbose.get(), 2);
//! assert!(parsed.options.dry_run);
//! # Ok::<(), gnuopt::GnuoptError>(())
//! ```

use std::any::Any;
use std::panic::Location;

use tracing::trace;

use crate::tag::{IGNORE, OptTag, parse_tag};
use crate::{DeclareError, GnuoptError, Set, Value};

#[cfg(test)]
mod tests;

/// Static description of one field of an [`Options`] struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    ident: &'static str,
    tag: Option<&'static str>,
}

impl FieldInfo {
    /// Describes a field by identifier and optional tag.
    #[must_use]
    pub const fn new(ident: &'static str, tag: Option<&'static str>) -> Self {
        Self { ident, tag }
    }

    /// Returns the field identifier.
    #[must_use]
    pub const fn ident(&self) -> &'static str {
        self.ident
    }

    /// Returns the tag, if the field carries one.
    #[must_use]
    pub const fn tag(&self) -> Option<&'static str> {
        self.tag
    }

    /// Works out what the field declares.
    ///
    /// Returns `Ok(None)` for ignored fields.
    ///
    /// # Errors
    ///
    /// Returns a [`DeclareError::Tag`] when the tag is malformed.
    pub fn resolve(&self) -> Result<Option<OptTag>, DeclareError> {
        match self.tag {
            Some(IGNORE) => Ok(None),
            Some(tag) => parse_tag(tag)
                .map(|parsed| Some(parsed.unwrap_or_else(|| OptTag::for_field(self.ident))))
                .map_err(|source| DeclareError::Tag {
                    field: self.ident.to_owned(),
                    source,
                }),
            None => Ok(Some(OptTag::for_field(self.ident))),
        }
    }
}

/// A struct whose fields can be declared as options.
///
/// `fields` and `values_mut` describe the same fields in the same order.
/// Derive it rather than implementing it by hand.
pub trait Options {
    /// Describes every field that may declare an option.
    fn fields() -> &'static [FieldInfo];

    /// Returns the field at `index` in [`Options::fields`].
    fn value(&self, index: usize) -> Option<&dyn Value>;

    /// Returns every field, in the order of [`Options::fields`].
    fn values_mut(&mut self) -> Vec<&mut dyn Value>;
}

/// A struct populated by [`parse_fresh`] and the positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<T> {
    /// The freshly parsed copy of the template.
    pub options: T,
    /// Positional arguments in the order they appeared.
    pub args: Vec<String>,
}

/// Declares every field of `record` on `set`.
///
/// # Errors
///
/// Returns the first malformed tag or clashing name.
#[track_caller]
pub fn register<'a, T: Options>(record: &'a mut T, set: &mut Set<'a>) -> Result<(), DeclareError> {
    let caller = Location::caller();
    for (field, value) in T::fields().iter().zip(record.values_mut()) {
        let Some(tag) = field.resolve()? else {
            trace!(field = field.ident(), "skipping ignored field");
            continue;
        };
        if field.tag().is_none_or(str::is_empty) {
            trace!(field = field.ident(), "declaring field from its identifier");
        }
        let site = format!("{}:{} (field `{}`)", caller.file(), caller.line(), field.ident());
        set.declare_at(tag.into_declaration(), value, site)?;
    }
    Ok(())
}

/// Checks that the tags of `record` declare a consistent set of options
/// without touching `record` or any caller-owned [`Set`].
///
/// # Errors
///
/// Returns what [`register`] would fail with.
#[track_caller]
pub fn validate<T: Options + Clone>(record: &T) -> Result<(), DeclareError> {
    let mut scratch = record.clone();
    let mut set = Set::default();
    register(&mut scratch, &mut set)
}

/// Returns an independent copy of `record` after checking its tags.
///
/// # Errors
///
/// Returns what [`validate`] would fail with.
#[track_caller]
pub fn duplicate<T: Options + Clone>(record: &T) -> Result<T, DeclareError> {
    validate(record)?;
    Ok(record.clone())
}

/// Returns the field of `record` declaring the option `name`.
///
/// `name` is a long name (`"verbose"`) or a single-character short name
/// (`"v"`), without dashes. Fields with malformed tags are never found.
#[must_use]
pub fn lookup_value<'r, T: Options>(record: &'r T, name: &str) -> Option<&'r dyn Value> {
    let index = T::fields().iter().position(|field| {
        field.resolve().ok().flatten().is_some_and(|tag| {
            tag.long.as_deref() == Some(name)
                || tag.short.is_some_and(|short| name.chars().eq([short]))
        })
    })?;
    record.value(index)
}

/// Returns the field of `record` declaring `name`, if it holds a `V`.
#[must_use]
pub fn lookup<'r, V: Value, T: Options>(record: &'r T, name: &str) -> Option<&'r V> {
    let value: &dyn Any = lookup_value(record, name)?;
    value.downcast_ref()
}

/// Parses `args` into a fresh copy of `template`.
///
/// Every call works on its own copy and its own [`Set`], so one template
/// can be shared by any number of threads.
///
/// # Errors
///
/// Returns a [`GnuoptError::Declare`] for malformed tags and a
/// [`GnuoptError::Parse`] for rejected arguments.
#[track_caller]
pub fn parse_fresh<T, I, S>(template: &T, args: I) -> Result<Parsed<T>, GnuoptError>
where
    T: Options + Clone,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut options = template.clone();
    let positional = {
        let mut set = Set::default();
        register(&mut options, &mut set)?;
        set.parse(args)?
    };
    Ok(Parsed {
        options,
        args: positional,
    })
}
