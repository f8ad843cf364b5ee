//! Comma separated string lists.

use super::Value;
use crate::ValueError;

/// Each occurrence appends its comma separated items, so `-I a,b -I c`
/// yields `["a", "b", "c"]`. Empty text appends nothing.
impl Value for Vec<String> {
    fn parse(&mut self, text: &str) -> Result<(), ValueError> {
        if !text.is_empty() {
            self.extend(text.split(',').map(str::to_owned));
        }
        Ok(())
    }

    fn render(&self) -> String {
        self.join(",")
    }

    fn restore(&mut self, default: &str) -> Result<(), ValueError> {
        self.clear();
        self.parse(default)
    }
}
