//! jarhook — git hook automation for a Java utility library.
//!
//! Provides the post-merge hook installer and the pre-commit release
//! pipeline (compile, package, version bump, signing, javadoc, staging).

pub mod cli;
pub mod config;
pub mod error;
pub mod hooks;
pub mod observability;
pub mod pipeline;
pub mod tool;
