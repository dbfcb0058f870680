//! Git hook installation.

pub mod install;

pub use install::{install_hooks, InstallReport};
