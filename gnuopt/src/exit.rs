//! Terminating wrappers for program entry points.
//!
//! Everything else in the crate returns errors. These helpers print the
//! error to stderr and exit with status 1, which is what a `main` function
//! usually wants to do with a bad declaration or a bad command line.

use std::fmt;
use std::process;

use tracing::error;

use crate::{Declaration, Opt, Set, Value};

const FAILURE: i32 = 1;

/// Unwraps a result or terminates the process with its error.
pub trait OrExit<T> {
    /// Returns the success value, or prints the error to stderr and exits
    /// with status 1.
    fn or_exit(self) -> T;
}

impl<T, E: fmt::Display> OrExit<T> for Result<T, E> {
    fn or_exit(self) -> T {
        self.unwrap_or_else(|err| terminate(&err, None))
    }
}

impl<'a> Set<'a> {
    /// Like [`Set::declare`], but exits the process on failure.
    #[track_caller]
    pub fn declare_or_exit(&mut self, decl: Declaration, value: &'a mut dyn Value) -> &mut Opt<'a> {
        match self.declare(decl, value) {
            Ok(opt) => opt,
            Err(err) => terminate(&err, None),
        }
    }

    /// Like [`Set::parse`], but on failure prints the error followed by the
    /// usage text and exits the process.
    pub fn parse_or_exit<I, S>(&mut self, args: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match self.parse(args) {
            Ok(rest) => rest,
            Err(err) => {
                let usage = self.usage().to_string();
                terminate(&err, Some(usage.as_str()))
            }
        }
    }
}

fn terminate(err: &dyn fmt::Display, usage: Option<&str>) -> ! {
    error!(error = %err, "terminating on option error");
    report(err, usage);
    process::exit(FAILURE)
}

#[expect(clippy::print_stderr, reason = "the user must see why the process exits")]
fn report(err: &dyn fmt::Display, usage: Option<&str>) {
    match usage {
        Some(text) => eprint!("{err}\n{text}"),
        None => eprintln!("{err}"),
    }
}
