//! Staging stage — `git add` once per produced artifact path.

use std::path::{Path, PathBuf};

use crate::config::BuildConfig;
use crate::error::Result;
use crate::pipeline::{StageKind, StageReport};
use crate::tool::{run_git, validate_input};

/// Stage every produced artifact so the in-progress commit includes the
/// newly built outputs. Paths are passed to git relative to the repository
/// root when possible.
pub fn run(root: &Path, config: &BuildConfig, artifacts: &[PathBuf]) -> Result<StageReport> {
    for path in artifacts {
        let rel = path.strip_prefix(root).unwrap_or(path);
        let rel_str = rel.to_string_lossy();
        validate_input(&rel_str, "staged path")?;
        run_git(&config.tools.git, root, &["add", &rel_str])?;
    }

    Ok(StageReport {
        stage: StageKind::GitStage,
        artifacts: vec![],
        detail: format!("staged {} paths", artifacts.len()),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn stub_git(tmp: &TempDir) -> BuildConfig {
        // Records one line per invocation.
        let path = tmp.path().join("git-stub");
        fs::write(&path, "#!/bin/sh\necho \"$@\" >> git-calls.txt\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

        let mut config = BuildConfig::default();
        config.tools.git = path.to_string_lossy().into_owned();
        config
    }

    #[test]
    fn adds_each_artifact_relative_to_root() {
        let tmp = TempDir::new().unwrap();
        let config = stub_git(&tmp);

        let artifacts = vec![
            tmp.path().join("utilities.jar"),
            tmp.path().join("buildNumber.properties"),
            tmp.path().join("javadoc"),
        ];
        let report = run(tmp.path(), &config, &artifacts).unwrap();
        assert_eq!(report.detail, "staged 3 paths");

        let calls = fs::read_to_string(tmp.path().join("git-calls.txt")).unwrap();
        let lines: Vec<&str> = calls.lines().collect();
        assert_eq!(
            lines,
            vec![
                "add utilities.jar",
                "add buildNumber.properties",
                "add javadoc",
            ]
        );
    }

    #[test]
    fn nothing_to_stage_is_fine() {
        let tmp = TempDir::new().unwrap();
        let config = stub_git(&tmp);

        let report = run(tmp.path(), &config, &[]).unwrap();
        assert_eq!(report.detail, "staged 0 paths");
        assert!(!tmp.path().join("git-calls.txt").exists());
    }

    #[test]
    fn git_failure_aborts() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("git-stub");
        fs::write(&path, "#!/bin/sh\nexit 128\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

        let mut config = BuildConfig::default();
        config.tools.git = path.to_string_lossy().into_owned();

        let artifacts = vec![tmp.path().join("utilities.jar")];
        assert!(run(tmp.path(), &config, &artifacts).is_err());
    }
}
