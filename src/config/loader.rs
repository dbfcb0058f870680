//! Multi-source config loading with priority merging.
//!
//! Priority order (highest wins):
//!   CLI flag > Environment vars > Project config > Defaults
//!
//! Hooks are repository-scoped, so there is no user-level config file.

use std::path::Path;

use tracing::warn;

use super::schema::{BuildConfig, ProfileName};
use crate::error::{HookError, Result};

/// Name of the project config file looked up in the repository root.
pub const PROJECT_CONFIG_FILE: &str = ".jarhook.yaml";

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Load configuration from all available sources and merge them.
///
/// Sources (low → high priority):
///   1. Built-in defaults (the original repository layout)
///   2. Project config (`.jarhook.yaml` in `root`)
///   3. Environment variables (`JARHOOK_PROFILE`, `JARHOOK_SOURCES_DIR`,
///      `JARHOOK_ARTIFACT_NAME`)
///   4. CLI flag (`cli_profile`)
pub fn load_config(root: &Path, cli_profile: Option<&str>) -> Result<BuildConfig> {
    // Layers 1+2: project config with serde defaults filling the gaps
    let mut config = load_project_config(root)?.unwrap_or_default();

    // Layer 3: environment variables
    load_env_overrides(&mut config);

    // Layer 4: CLI profile (highest priority)
    if let Some(profile_str) = cli_profile {
        if let Some(profile) = ProfileName::from_str_loose(profile_str) {
            config.profile = profile;
        } else {
            warn!(profile = profile_str, "unknown profile name on CLI, ignoring");
        }
    }

    Ok(config)
}

/// Load project config from `.jarhook.yaml` in the given directory.
///
/// A missing file is `Ok(None)`; an unparseable one is a hard error, since
/// silently running the build with defaults would mask a typo in the file.
pub fn load_project_config(root: &Path) -> Result<Option<BuildConfig>> {
    let path = root.join(PROJECT_CONFIG_FILE);
    let contents = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(_) => return Ok(None),
    };
    let config = serde_yaml::from_str(&contents).map_err(HookError::Config)?;
    Ok(Some(config))
}

/// Apply environment variable overrides to a config in place.
///
/// Supported variables:
/// - `JARHOOK_PROFILE` — override the profile name
/// - `JARHOOK_SOURCES_DIR` — override the sources directory
/// - `JARHOOK_ARTIFACT_NAME` — override the artifact base name
pub fn load_env_overrides(config: &mut BuildConfig) {
    if let Ok(val) = std::env::var("JARHOOK_PROFILE") {
        if let Some(profile) = ProfileName::from_str_loose(&val) {
            config.profile = profile;
        }
    }

    if let Ok(val) = std::env::var("JARHOOK_SOURCES_DIR") {
        if !val.trim().is_empty() {
            config.paths.sources_dir = val;
        }
    }

    if let Ok(val) = std::env::var("JARHOOK_ARTIFACT_NAME") {
        if !val.trim().is_empty() {
            config.artifact.name = val;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
