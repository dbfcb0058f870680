//! Terminal-facing helpers.

pub mod report;
