//! Shared text normalisation helpers for usage and error assertions.

/// Drops the single leading newline of a block literal, so expected output
/// can start on its own line:
///
/// ```
/// use gnuopt_test_helpers::text::block;
///
/// let expected = block("
/// Usage: tool
/// ");
/// assert_eq!(expected, "Usage: tool\n");
/// ```
#[must_use]
pub fn block(text: &str) -> &str {
    text.strip_prefix('\n').unwrap_or(text)
}

/// Removes the `"<program>: "` prefix from an error message.
#[must_use]
pub fn without_program<'m>(message: &'m str, program: &str) -> &'m str {
    message
        .strip_prefix(program)
        .and_then(|rest| rest.strip_prefix(": "))
        .unwrap_or(message)
}

/// Trims trailing whitespace from every line, keeping line breaks.
#[must_use]
pub fn trim_line_ends(text: &str) -> String {
    text.lines().map(|line| format!("{}\n", line.trim_end())).collect()
}
