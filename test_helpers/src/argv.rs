//! Builders for argument vectors.
//!
//! # Examples
//!
//! ```
//! use gnuopt_test_helpers::argv;
//!
//! assert_eq!(argv::with_program("tool", ["-v", "file"]), ["tool", "-v", "file"]);
//! assert_eq!(argv::split("tool -c 3"), ["tool", "-c", "3"]);
//! ```

/// Prepends `program` to `args`.
#[must_use]
pub fn with_program<I, S>(program: &str, args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    std::iter::once(program.to_owned())
        .chain(args.into_iter().map(Into::into))
        .collect()
}

/// Splits a command line on whitespace. No quoting is supported.
#[must_use]
pub fn split(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_owned).collect()
}
