//! The value adapter contract and the stock adapters.
//!
//! Every declared option is bound to something implementing [`Value`]. The
//! parser hands it the raw text supplied on the command line and the usage
//! formatter asks it to render its current state. Adapters for the common
//! scalar types live here so the engine is usable out of the box; callers
//! are free to implement [`Value`] for their own types.

use std::any::Any;
use std::str::FromStr;

use crate::ValueError;

mod counter;
mod list;

pub use counter::Counter;

/// A typed destination for option arguments.
///
/// `parse` must either apply the whole value or leave the current state
/// untouched; the engine relies on this to guarantee that a rejected
/// argument never lands half-applied.
pub trait Value: Any {
    /// Applies `text` to the value.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`] describing why `text` cannot be represented.
    fn parse(&mut self, text: &str) -> Result<(), ValueError>;

    /// Renders the current value as text.
    fn render(&self) -> String;

    /// Reports whether the value is set by presence alone.
    fn is_flag(&self) -> bool {
        false
    }

    /// Applies a bare occurrence of a flag option.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`Value::parse`].
    fn set_flag(&mut self) -> Result<(), ValueError> {
        self.parse("true")
    }

    /// Restores the value from the text rendered when it was declared.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`Value::parse`].
    fn restore(&mut self, default: &str) -> Result<(), ValueError> {
        self.parse(default)
    }
}

impl Value for bool {
    fn parse(&mut self, text: &str) -> Result<(), ValueError> {
        *self = match text.to_ascii_lowercase().as_str() {
            "" | "1" | "t" | "true" | "on" => true,
            "0" | "f" | "false" | "off" => false,
            _ => return Err(ValueError::new(format!("{text:?} is not a boolean"))),
        };
        Ok(())
    }

    fn render(&self) -> String {
        self.to_string()
    }

    fn is_flag(&self) -> bool {
        true
    }

    fn set_flag(&mut self) -> Result<(), ValueError> {
        *self = true;
        Ok(())
    }
}

impl Value for String {
    fn parse(&mut self, text: &str) -> Result<(), ValueError> {
        text.clone_into(self);
        Ok(())
    }

    fn render(&self) -> String {
        self.clone()
    }
}

fn parse_from_str<T>(text: &str) -> Result<T, ValueError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    text.trim()
        .parse::<T>()
        .map_err(|err| ValueError::new(err.to_string()))
}

macro_rules! from_str_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Value for $ty {
                fn parse(&mut self, text: &str) -> Result<(), ValueError> {
                    *self = parse_from_str(text)?;
                    Ok(())
                }

                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

from_str_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char,
);
