//! Compile stage — source discovery and compiler invocation.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::warn;

use crate::config::BuildConfig;
use crate::error::Result;
use crate::pipeline::{StageKind, StageReport};
use crate::tool::run_tool;

/// Recursively collect all files under `dir` with the given extension
/// (without dot), sorted for deterministic tool invocations.
pub fn collect_sources(dir: &Path, extension: &str) -> Vec<PathBuf> {
    let mut sources: Vec<PathBuf> = WalkBuilder::new(dir)
        .standard_filters(false)
        .build()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(extension)
        })
        .collect();
    sources.sort();
    sources
}

/// Run the compile stage: invoke the compiler with the full source list and
/// the scratch directory as output. The exit status is checked; a failed
/// compile aborts the pipeline before anything gets packaged.
pub fn run(root: &Path, config: &BuildConfig) -> Result<StageReport> {
    let sources_dir = root.join(&config.paths.sources_dir);
    let sources = collect_sources(&sources_dir, &config.sources.extension);

    if sources.is_empty() {
        warn!(dir = %sources_dir.display(), "no sources found, compiler not invoked");
        return Ok(StageReport {
            stage: StageKind::Compile,
            artifacts: vec![],
            detail: "no sources found".to_string(),
        });
    }

    let scratch = root.join(&config.paths.scratch_dir);
    std::fs::create_dir_all(&scratch)?;

    let mut args: Vec<String> = vec!["-d".to_string(), config.paths.scratch_dir.clone()];
    args.extend(
        sources
            .iter()
            .map(|p| p.to_string_lossy().into_owned()),
    );
    let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
    run_tool(&config.tools.compiler, &arg_refs, root)?;

    Ok(StageReport {
        stage: StageKind::Compile,
        artifacts: vec![],
        detail: format!("compiled {} sources", sources.len()),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HookError;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    /// Helper: write an executable stub tool that records its arguments.
    fn write_stub(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn collect_sources_finds_nested_files_sorted() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("src/com/util")).unwrap();
        fs::write(tmp.path().join("src/Zeta.java"), "").unwrap();
        fs::write(tmp.path().join("src/com/util/Alpha.java"), "").unwrap();
        fs::write(tmp.path().join("src/readme.txt"), "").unwrap();

        let sources = collect_sources(&tmp.path().join("src"), "java");
        assert_eq!(sources.len(), 2);
        assert!(sources[0].ends_with("src/Zeta.java"));
        assert!(sources[1].ends_with("src/com/util/Alpha.java"));
    }

    #[test]
    fn collect_sources_on_missing_dir_is_empty() {
        let tmp = TempDir::new().unwrap();
        assert!(collect_sources(&tmp.path().join("absent"), "java").is_empty());
    }

    #[test]
    fn compile_invokes_tool_with_sources_and_creates_scratch() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("src")).unwrap();
        fs::write(tmp.path().join("src/Main.java"), "class Main {}").unwrap();

        let stub = write_stub(tmp.path(), "javac-stub", r#"echo "$@" > compile-args.txt"#);
        let mut config = BuildConfig::default();
        config.tools.compiler = stub.to_string_lossy().into_owned();

        let report = run(tmp.path(), &config).unwrap();
        assert_eq!(report.detail, "compiled 1 sources");
        assert!(tmp.path().join("tmp").is_dir());

        let args = fs::read_to_string(tmp.path().join("compile-args.txt")).unwrap();
        assert!(args.starts_with("-d tmp "));
        assert!(args.contains("Main.java"));
    }

    #[test]
    fn compile_failure_surfaces_tool_error() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("src")).unwrap();
        fs::write(tmp.path().join("src/Broken.java"), "class {").unwrap();

        let stub = write_stub(tmp.path(), "javac-stub", "echo 'syntax error' >&2; exit 1");
        let mut config = BuildConfig::default();
        config.tools.compiler = stub.to_string_lossy().into_owned();

        let result = run(tmp.path(), &config);
        assert!(matches!(result, Err(HookError::Tool { status: 1, .. })));
    }

    #[test]
    fn no_sources_skips_compiler() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("src")).unwrap();

        let mut config = BuildConfig::default();
        config.tools.compiler = "this-tool-must-not-run".to_string();

        let report = run(tmp.path(), &config).unwrap();
        assert_eq!(report.detail, "no sources found");
        assert!(!tmp.path().join("tmp").exists());
    }
}
