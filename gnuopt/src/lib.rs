//! GNU `getopt_long` compatible option parsing.
//!
//! Options are declared on a [`Set`], each bound to a [`Value`] owned by the
//! caller. [`Set::parse`] scans an argument vector the way GNU `getopt_long`
//! does: bundled short flags (`-abc`), attached or separate arguments
//! (`-cVALUE`, `-c VALUE`, `--count=5`, `--count 5`), unambiguous long
//! prefixes (`--verb` for `--verbose`), and `--` to end option scanning.
//! Mandatory options and mutually exclusive groups are checked once
//! scanning succeeds.
//!
//! ```
//! use gnuopt::{Declaration, Set};
//!
//! let mut verbose = false;
//! let mut count = 1_u32;
//! let mut set = Set::new("demo");
//! set.declare(Declaration::new().short('v').long("verbose"), &mut verbose)?;
//! set.declare(Declaration::new().short('c').long("count").param("N"), &mut count)?
//!     .mandatory();
//! let rest = set.parse(["demo", "-vc", "3", "input.txt"])?;
//! drop(set);
//!
//! assert!(verbose);
//! assert_eq!(count, 3);
//! assert_eq!(rest, ["input.txt"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Structs can declare their options with tags through
//! [`derive(Options)`](macro@Options); see [`reflect`].

extern crate self as gnuopt;

pub use gnuopt_macros::Options;

mod error;
pub mod exit;
mod parse;
pub mod reflect;
mod set;
pub mod tag;
mod usage;
mod validate;
mod value;

pub use error::{DeclareError, GnuoptError, ParseError, ParseErrorKind, TagError, ValueError};
pub use parse::Ordering;
pub use reflect::{FieldInfo, Options};
pub use set::{Declaration, Name, Opt, Set};
pub use usage::Usage;
pub use value::{Counter, Value};
