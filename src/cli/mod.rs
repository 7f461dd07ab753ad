//! Command-line interface for focustrack.

pub mod args;
pub mod commands;
