//! Hook installer — the post-merge flow.
//!
//! Copies every file from the hooks-source directory into `.git/hooks`,
//! skipping implementation sources (the configured skip extension), and
//! marks each installed file executable. Copies are unconditional
//! overwrites, so running the installer twice produces the same
//! destination state.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::debug;

use crate::config::BuildConfig;
use crate::error::{HookError, Result};

/// Summary of an installer run.
#[derive(Debug, Clone)]
pub struct InstallReport {
    /// Paths of the installed hook files inside `.git/hooks`.
    pub installed: Vec<PathBuf>,
    /// Number of source files skipped by extension.
    pub skipped: usize,
}

/// Install the repository's hook shims into `.git/hooks`.
///
/// - Every file under the hooks-source directory is copied flat into the
///   hooks directory, except files with the configured skip extension.
/// - Existing destination files are overwritten, no diffing, no backup.
/// - Each installed file gets owner read/write/execute added to its
///   pre-existing permission bits.
/// - Any filesystem error aborts installation immediately.
///
/// On success the caller is expected to emit exactly one confirmation
/// message; this function only logs at debug level.
pub fn install_hooks(root: &Path, config: &BuildConfig) -> Result<InstallReport> {
    let source_dir = root.join(&config.paths.hooks_dir);
    let git_dir = root.join(".git");

    if !git_dir.is_dir() {
        return Err(HookError::Other(format!(
            "Not a git repository: {}",
            root.display()
        )));
    }
    if !source_dir.is_dir() {
        return Err(HookError::Other(format!(
            "Hooks source directory missing: {}",
            source_dir.display()
        )));
    }

    let hooks_dir = git_dir.join("hooks");
    fs::create_dir_all(&hooks_dir)?;

    let skip_ext = config.hooks.skip_extension.as_str();
    let mut installed = Vec::new();
    let mut skipped = 0;

    for entry in WalkBuilder::new(&source_dir).standard_filters(false).build() {
        let entry = entry.map_err(|e| HookError::Other(e.to_string()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) == Some(skip_ext) {
            skipped += 1;
            continue;
        }

        // Flat copy: nested shims land directly in .git/hooks by filename.
        let file_name = path
            .file_name()
            .ok_or_else(|| HookError::Other(format!("Bad hook path: {}", path.display())))?;
        let dest = hooks_dir.join(file_name);
        fs::copy(path, &dest)?;
        make_executable(&dest)?;

        debug!(hook = %dest.display(), "installed hook");
        installed.push(dest);
    }

    installed.sort();
    Ok(InstallReport { installed, skipped })
}

/// Add owner read/write/execute to a file's existing permission bits.
fn make_executable(path: &Path) -> Result<()> {
    let metadata = fs::metadata(path)?;
    let mut permissions = metadata.permissions();
    permissions.set_mode(permissions.mode() | 0o700);
    fs::set_permissions(path, permissions)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
