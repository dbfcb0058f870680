//! License-copy and packaging stages.

use std::path::Path;

use crate::config::BuildConfig;
use crate::error::{HookError, Result};
use crate::pipeline::{StageKind, StageReport};
use crate::tool::run_tool;

/// Copy the fixed-name license file into the scratch directory so it is
/// packed into the artifact. A missing license is a hard error.
pub fn copy_license(root: &Path, config: &BuildConfig) -> Result<StageReport> {
    let license = root.join(&config.paths.license_file);
    if !license.is_file() {
        return Err(HookError::Other(format!(
            "License file missing: {}",
            license.display()
        )));
    }

    let scratch = root.join(&config.paths.scratch_dir);
    std::fs::create_dir_all(&scratch)?;

    let file_name = license
        .file_name()
        .ok_or_else(|| HookError::Other(format!("Bad license path: {}", license.display())))?;
    std::fs::copy(&license, scratch.join(file_name))?;

    Ok(StageReport {
        stage: StageKind::License,
        artifacts: vec![],
        detail: format!("copied {}", config.paths.license_file),
    })
}

/// Run the packaging stage: pack the scratch directory into the primary
/// jar at the repository root, then remove the scratch directory.
pub fn run(root: &Path, config: &BuildConfig) -> Result<StageReport> {
    let jar_name = config.jar_name();
    let scratch_rel = config.paths.scratch_dir.as_str();

    let args: Vec<&str> = match config.artifact.manifest.as_deref() {
        Some(manifest) => vec!["-cfm", &jar_name, manifest, "-C", scratch_rel, "."],
        None => vec!["-cf", &jar_name, "-C", scratch_rel, "."],
    };
    run_tool(&config.tools.archiver, &args, root)?;

    let scratch = root.join(scratch_rel);
    if scratch.is_dir() {
        std::fs::remove_dir_all(&scratch)?;
    }

    Ok(StageReport {
        stage: StageKind::Package,
        artifacts: vec![root.join(&jar_name)],
        detail: format!("packed {jar_name}"),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
