//! Error types produced while declaring and parsing options.
//!
//! Declaration faults ([`DeclareError`], [`TagError`]) point at a mistake by
//! the integrator. Parse faults ([`ParseError`]) are the expected outcome of
//! bad user input and always render as a single `"<program>: ..."` line.

mod types;

pub use types::{DeclareError, GnuoptError, ParseError, ParseErrorKind, TagError, ValueError};
