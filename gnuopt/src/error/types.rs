//! Error enums for the declaration and parsing tiers.

use thiserror::Error;

/// Rejection raised by a [`Value`](crate::Value) adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValueError {
    message: String,
}

impl ValueError {
    /// Creates an adapter error carrying `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the adapter's explanation.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Malformed option tags such as `"---name"` or `"-a -b"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TagError {
    /// Help text was supplied without any option name.
    #[error("tag missing option name: {0:?}")]
    MissingName(String),
    /// More than one `-c` token was given.
    #[error("tag has too many short names: {0:?}")]
    TooManyShortNames(String),
    /// More than one `--name` token was given.
    #[error("tag has too many long names: {0:?}")]
    TooManyLongNames(String),
    /// A short token carried more than one character.
    #[error("tag has invalid short name: {0:?}")]
    InvalidShortName(String),
    /// `=PARAM` appeared on more than one token.
    #[error("tag has multiple parameter names: {0:?}")]
    MultipleParamNames(String),
    /// A token started with three or more dashes.
    #[error("tag must not start with ---: {0:?}")]
    TooManyDashes(String),
}

/// Declaration-time faults: the option set itself is wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DeclareError {
    /// Neither a short nor a long name was supplied.
    #[error("{site}: no short or long option given")]
    NoName {
        /// Location of the offending declaration.
        site: String,
    },
    /// The short name is already taken.
    #[error("{site}: -{short} already declared at {previous}")]
    DuplicateShort {
        /// The contested short name.
        short: char,
        /// Location of the offending declaration.
        site: String,
        /// Location of the original declaration.
        previous: String,
    },
    /// The long name is already taken.
    #[error("{site}: --{long} already declared at {previous}")]
    DuplicateLong {
        /// The contested long name.
        long: String,
        /// Location of the offending declaration.
        site: String,
        /// Location of the original declaration.
        previous: String,
    },
    /// A struct field carried a malformed tag.
    #[error("field `{field}`: {source}")]
    Tag {
        /// Identifier of the field whose tag failed to parse.
        field: String,
        /// The grammar violation.
        #[source]
        source: TagError,
    },
}

/// A parse-time fault, prefixed with the program name when displayed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{program}: {kind}")]
pub struct ParseError {
    program: String,
    kind: ParseErrorKind,
}

impl ParseError {
    /// Creates an error attributed to `program`.
    #[must_use]
    pub fn new(program: impl Into<String>, kind: ParseErrorKind) -> Self {
        Self {
            program: program.into(),
            kind,
        }
    }

    /// Returns the program name used as the message prefix.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Returns the specific fault.
    #[must_use]
    pub const fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

/// The individual parse-time faults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// The argument names no declared option.
    #[error("unknown option: {0}")]
    UnknownOption(String),
    /// A long prefix matched several declared names.
    #[error("ambiguous option: {given} (could be {})", .candidates.join(", "))]
    AmbiguousOption {
        /// The prefix as typed, including its dashes.
        given: String,
        /// Matching long names, with dashes, in sorted order.
        candidates: Vec<String>,
    },
    /// A value-taking option came last with nothing to consume.
    #[error("missing argument for option {0}")]
    MissingArgument(String),
    /// The value adapter rejected the supplied text.
    #[error("invalid value for option {name}: {text}")]
    InvalidValue {
        /// Display name of the option.
        name: String,
        /// The rejected text.
        text: String,
        /// The adapter's explanation.
        #[source]
        source: ValueError,
    },
    /// A mandatory option was never set.
    #[error("option {0} is mandatory")]
    Mandatory(String),
    /// Two members of one group were set.
    #[error("options {first} and {second} are mutually exclusive")]
    MutuallyExclusive {
        /// Earlier conflicting member in declaration order.
        first: String,
        /// Later conflicting member in declaration order.
        second: String,
    },
    /// A required group had no member set.
    #[error("exactly one of the following options must be specified: {}", .members.join(", "))]
    GroupRequired {
        /// Group members in declaration order.
        members: Vec<String>,
    },
    /// A group was marked required but nothing was declared in it.
    #[error("no options declared in group {0}")]
    EmptyGroup(String),
}

/// Either tier of failure, for entry points that declare and parse in one go.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GnuoptError {
    /// The declarations themselves were invalid.
    #[error(transparent)]
    Declare(#[from] DeclareError),
    /// The argument vector was rejected.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
