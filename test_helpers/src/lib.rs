//! Test helpers shared across crates.
//!
//! This crate provides argument vector builders, text normalisation for
//! usage and error output, and a scoped thread runner for concurrency tests.

pub mod argv;
pub mod text;
pub mod threads;
