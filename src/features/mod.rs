//! Feature implementations for focustrack.
//!
//! - Focus timer and session storage
//! - Reports over stored sessions

pub mod focus;
pub mod report;
