//! Unified error type for jarhook.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HookError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("{tool} exited with status {status}: {stderr}")]
    Tool {
        tool: String,
        status: i32,
        stderr: String,
    },

    #[error("Version marker error: {0}")]
    Version(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, HookError>;
