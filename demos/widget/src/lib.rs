//! Library half of the `widget` demo.
//!
//! The binary declares its options from [`cli::WidgetCli`] with
//! `#[derive(Options)]`, parses the command line with `gnuopt`, and prints one
//! label per positional part through [`report`].

pub mod cli;
pub mod error;
pub mod logging;
pub mod report;
