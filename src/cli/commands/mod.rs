//! Command implementations for focustrack.
//!
//! Each command returns the text to print; `main` does the printing.

mod completions;
mod config;
mod report;
mod sessions;

pub use completions::completions;
pub use config::config;
pub use report::report;
pub use sessions::{clear, history, seed};
