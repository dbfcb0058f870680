//! Resource-copy stage.
//!
//! Copies every non-source file under the sources tree flat into the
//! scratch directory, excluding the configured ignorable filenames. The
//! flat layout means identically named files in different subdirectories
//! overwrite each other; that matches the original hook's behavior and is
//! surfaced as a warning rather than fixed.

use std::path::Path;

use ignore::WalkBuilder;
use tracing::warn;

use crate::config::BuildConfig;
use crate::error::{HookError, Result};
use crate::pipeline::{StageKind, StageReport};

/// Run the resource-copy stage.
pub fn run(root: &Path, config: &BuildConfig) -> Result<StageReport> {
    let sources_dir = root.join(&config.paths.sources_dir);
    let scratch = root.join(&config.paths.scratch_dir);
    std::fs::create_dir_all(&scratch)?;

    let source_ext = config.sources.extension.as_str();
    let mut copied = 0;

    for entry in WalkBuilder::new(&sources_dir).standard_filters(false).build() {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) == Some(source_ext) {
            continue;
        }

        let file_name = path
            .file_name()
            .ok_or_else(|| HookError::Other(format!("Bad resource path: {}", path.display())))?;
        let name = file_name.to_string_lossy();
        if config.sources.resource_ignore.iter().any(|i| i.as_str() == name.as_ref()) {
            continue;
        }

        let dest = scratch.join(file_name);
        if dest.exists() {
            warn!(file = %name, "flat resource copy overwrites an earlier file of the same name");
        }
        std::fs::copy(path, &dest)?;
        copied += 1;
    }

    Ok(StageReport {
        stage: StageKind::Resources,
        artifacts: vec![],
        detail: format!("copied {copied} resources"),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
