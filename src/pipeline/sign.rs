//! Signing stage.
//!
//! Reads the one-line keystore secret and hands it to the signing tool via
//! an environment variable scoped to the child process (`-storepass:env`),
//! so the secret never appears on a command line or in any log.

use std::path::Path;

use crate::config::BuildConfig;
use crate::error::{HookError, Result};
use crate::pipeline::{StageKind, StageReport};
use crate::tool::run_tool_with_env;

/// Environment variable the signer reads the keystore password from.
pub const STOREPASS_ENV: &str = "JARHOOK_STOREPASS";

/// Run the signing stage against the primary artifact.
pub fn run(root: &Path, config: &BuildConfig) -> Result<StageReport> {
    let storepass_path = root.join(&config.signing.storepass_file);
    let secret = std::fs::read_to_string(&storepass_path)?;
    let secret = secret.lines().next().unwrap_or("").trim();
    if secret.is_empty() {
        return Err(HookError::Other(format!(
            "Storepass file is empty: {}",
            storepass_path.display()
        )));
    }

    let jar_name = config.jar_name();
    if !root.join(&jar_name).is_file() {
        return Err(HookError::Other(format!(
            "Nothing to sign: {jar_name} not found"
        )));
    }

    run_tool_with_env(
        &config.tools.signer,
        &[
            "-keystore",
            &config.signing.keystore,
            "-storepass:env",
            STOREPASS_ENV,
            &jar_name,
            &config.signing.alias,
        ],
        root,
        &[(STOREPASS_ENV, secret)],
    )?;

    Ok(StageReport {
        stage: StageKind::Sign,
        artifacts: vec![],
        detail: format!("signed {jar_name} as {}", config.signing.alias),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
