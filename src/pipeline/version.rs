//! Version-marker bump stage.
//!
//! Scans the marker file line by line; the first line whose key matches the
//! configured prefix (followed by `=` or `:`) has the trailing digit run of
//! its value incremented by one. Every other byte passes through unchanged.
//! The rewrite is atomic: a temp file in the marker's directory is renamed
//! over the original, so an interrupted run can never corrupt the file.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::config::BuildConfig;
use crate::error::{HookError, Result};
use crate::pipeline::{StageKind, StageReport};

/// Run the bump stage. The marker file itself is the stage's artifact so
/// the staging stage includes it in the commit.
pub fn run(root: &Path, config: &BuildConfig) -> Result<StageReport> {
    let path = root.join(&config.bump.file);
    let new_value = bump_version_file(&path, &config.bump.key)?;

    Ok(StageReport {
        stage: StageKind::Bump,
        artifacts: vec![path],
        detail: format!("{} -> {}", config.bump.key, new_value),
    })
}

/// Bump the marker in `path`, returning the new number.
pub fn bump_version_file(path: &Path, key: &str) -> Result<u64> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        HookError::Version(format!("cannot read {}: {e}", path.display()))
    })?;

    let (rewritten, new_value) = bump_content(&content, key)?;

    let parent = path.parent().ok_or_else(|| {
        HookError::Version(format!("{} has no parent directory", path.display()))
    })?;
    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(rewritten.as_bytes())?;
    tmp.persist(path).map_err(|e| HookError::Io(e.error))?;

    Ok(new_value)
}

/// Rewrite `content`, bumping the first matching marker line.
///
/// Line endings and all non-matching lines are preserved byte for byte.
fn bump_content(content: &str, key: &str) -> Result<(String, u64)> {
    let mut out = String::with_capacity(content.len() + 1);
    let mut bumped: Option<u64> = None;

    for line in content.split_inclusive('\n') {
        if bumped.is_none() {
            if let Some((new_line, value)) = bump_line(line, key) {
                out.push_str(&new_line);
                bumped = Some(value);
                continue;
            }
        }
        out.push_str(line);
    }

    match bumped {
        Some(value) => Ok((out, value)),
        None => Err(HookError::Version(format!(
            "no bumpable marker line for key '{key}'"
        ))),
    }
}

/// Bump a single line if it is a marker line for `key`.
///
/// A marker line starts with the key, followed (after optional spaces) by
/// `=` or `:`, and ends in a run of ASCII digits. The digit run is replaced
/// with its increment; everything else — separator, spacing, any
/// non-numeric value prefix like `1.0.`, the line ending — is kept.
fn bump_line(line: &str, key: &str) -> Option<(String, u64)> {
    let stripped = line.trim_end_matches(['\r', '\n']);
    let ending = &line[stripped.len()..];

    let rest = stripped.strip_prefix(key)?;
    let sep = rest.trim_start().chars().next()?;
    if sep != '=' && sep != ':' {
        return None;
    }

    let no_trail_ws = stripped.trim_end();
    let ws_tail = &stripped[no_trail_ws.len()..];
    let digits_len = no_trail_ws
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return None;
    }

    let (prefix, digits) = no_trail_ws.split_at(no_trail_ws.len() - digits_len);
    let value: u64 = digits.parse().ok()?;
    let new = value.checked_add(1)?;

    Some((format!("{prefix}{new}{ws_tail}{ending}"), new))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;
    use test_case::test_case;

    #[test_case("buildNumber=41", "buildNumber=42" ; "properties style")]
    #[test_case("buildNumber = 41", "buildNumber = 42" ; "spaced equals")]
    #[test_case("buildNumber: 41", "buildNumber: 42" ; "manifest style")]
    #[test_case("buildNumber=1.0.41", "buildNumber=1.0.42" ; "dotted value bumps last run")]
    #[test_case("buildNumber=9", "buildNumber=10" ; "digit count grows")]
    #[test_case("buildNumber=41  ", "buildNumber=42  " ; "trailing spaces kept")]
    fn bump_content_single_line(input: &str, expected: &str) {
        let (out, _) = bump_content(input, "buildNumber").unwrap();
        assert_eq!(out, expected);
    }

    #[test]
    fn other_lines_pass_through_byte_identical() {
        let input = "# build metadata\nname=utilities\nbuildNumber=41\n# end\n";
        let (out, value) = bump_content(input, "buildNumber").unwrap();
        assert_eq!(out, "# build metadata\nname=utilities\nbuildNumber=42\n# end\n");
        assert_eq!(value, 42);
    }

    #[test]
    fn only_first_matching_line_is_bumped() {
        let input = "buildNumber=1\nbuildNumber=2\n";
        let (out, _) = bump_content(input, "buildNumber").unwrap();
        assert_eq!(out, "buildNumber=2\nbuildNumber=2\n");
    }

    #[test]
    fn crlf_endings_preserved() {
        let input = "name=x\r\nbuildNumber=7\r\n";
        let (out, _) = bump_content(input, "buildNumber").unwrap();
        assert_eq!(out, "name=x\r\nbuildNumber=8\r\n");
    }

    #[test]
    fn no_trailing_newline_preserved() {
        let input = "buildNumber=41";
        let (out, _) = bump_content(input, "buildNumber").unwrap();
        assert_eq!(out, "buildNumber=42");
    }

    #[test]
    fn missing_key_is_version_error() {
        let result = bump_content("name=utilities\n", "buildNumber");
        assert!(matches!(result, Err(HookError::Version(_))));
    }

    #[test]
    fn non_numeric_value_is_version_error() {
        let result = bump_content("buildNumber=abc\n", "buildNumber");
        assert!(matches!(result, Err(HookError::Version(_))));
    }

    #[test]
    fn value_at_u64_max_is_version_error_not_panic() {
        let input = format!("buildNumber={}\n", u64::MAX);
        let result = bump_content(&input, "buildNumber");
        assert!(matches!(result, Err(HookError::Version(_))));
    }

    #[test]
    fn key_without_separator_does_not_match() {
        let result = bump_content("buildNumberLegacy 41\n", "buildNumber");
        assert!(result.is_err());
    }

    #[test]
    fn bump_file_rewrites_atomically_in_place() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("buildNumber.properties");
        std::fs::write(&path, "buildNumber=41\n").unwrap();

        let value = bump_version_file(&path, "buildNumber").unwrap();
        assert_eq!(value, 42);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "buildNumber=42\n"
        );

        // No temp litter left behind.
        let entries: Vec<_> = std::fs::read_dir(tmp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn run_reports_marker_as_artifact() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("buildNumber.properties"), "buildNumber=41\n").unwrap();

        let report = run(tmp.path(), &BuildConfig::default()).unwrap();
        assert_eq!(report.stage, StageKind::Bump);
        assert_eq!(report.artifacts, vec![tmp.path().join("buildNumber.properties")]);
        assert_eq!(report.detail, "buildNumber -> 42");
    }

    #[test]
    fn missing_file_is_version_error() {
        let tmp = TempDir::new().unwrap();
        let result = bump_version_file(&tmp.path().join("absent.properties"), "buildNumber");
        assert!(matches!(result, Err(HookError::Version(_))));
    }
}
