//! Delegated build stage.
//!
//! Hands compile+package+docs to the external build tool, then relocates
//! its jar outputs from the build output directory to the repository root.
//! Outputs are classified purely by filename convention: `*-sources.jar`,
//! `*-javadoc.jar`, and everything else as the primary artifact. Each jar
//! is copied to the root (overwriting any prior copy) and the original is
//! deleted.

use std::path::Path;

use crate::config::BuildConfig;
use crate::error::{HookError, Result};
use crate::pipeline::{StageKind, StageReport};
use crate::tool::run_tool;

/// Run the delegated build and relocate its artifacts.
pub fn run(root: &Path, config: &BuildConfig) -> Result<StageReport> {
    let args: Vec<&str> = config.tools.build_args.iter().map(String::as_str).collect();
    run_tool(&config.tools.build_tool, &args, root)?;

    let out_dir = root.join(&config.paths.build_output_dir);
    if !out_dir.is_dir() {
        return Err(HookError::Other(format!(
            "Build output directory missing after {}: {}",
            config.tools.build_tool,
            out_dir.display()
        )));
    }

    let mut entries: Vec<_> = std::fs::read_dir(&out_dir)?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.file_name());

    let mut artifacts = Vec::new();
    for entry in entries {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if !name.ends_with(".jar") || !entry.path().is_file() {
            continue;
        }

        let dest_name = if name.ends_with("-sources.jar") {
            config.sources_jar_name()
        } else if name.ends_with("-javadoc.jar") {
            config.javadoc_jar_name()
        } else {
            config.jar_name()
        };

        let dest = root.join(&dest_name);
        std::fs::copy(entry.path(), &dest)?;
        std::fs::remove_file(entry.path())?;
        artifacts.push(dest);
    }

    if artifacts.is_empty() {
        return Err(HookError::Other(format!(
            "{} produced no jar artifacts in {}",
            config.tools.build_tool,
            config.paths.build_output_dir
        )));
    }

    Ok(StageReport {
        stage: StageKind::MavenBuild,
        detail: format!("relocated {} artifacts", artifacts.len()),
        artifacts,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
