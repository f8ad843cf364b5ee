//! A flag that counts its occurrences, e.g. `-vvv`.

use super::{Value, parse_from_str};
use crate::ValueError;

/// Counts how many times a flag was supplied.
///
/// Each bare occurrence increments the count. An explicit value such as
/// `--verbose=3` replaces it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Counter(pub u32);

impl Counter {
    /// Returns the current count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Value for Counter {
    fn parse(&mut self, text: &str) -> Result<(), ValueError> {
        self.0 = parse_from_str(text)?;
        Ok(())
    }

    fn render(&self) -> String {
        self.0.to_string()
    }

    fn is_flag(&self) -> bool {
        true
    }

    fn set_flag(&mut self) -> Result<(), ValueError> {
        self.0 = self
            .0
            .checked_add(1)
            .ok_or_else(|| ValueError::new("counter overflow"))?;
        Ok(())
    }
}
