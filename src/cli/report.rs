//! Styled terminal output for hook runs.

use std::path::Path;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::pipeline::BuildReport;

/// Create a spinner for indeterminate operations (compiles, delegated
/// builds).
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Print the post-build summary: one line per stage, then the artifact list.
pub fn print_build_summary(root: &Path, report: &BuildReport) {
    println!();
    println!("  {}", style("Build complete!").green().bold());
    println!();
    for stage in &report.stages {
        println!(
            "  {} {} — {}",
            style("✓").green(),
            style(stage.stage.as_str()).bold(),
            stage.detail
        );
    }

    let artifacts = report.artifacts();
    if !artifacts.is_empty() {
        println!();
        println!("  {}", style("Staged artifacts:").bold());
        for artifact in artifacts {
            let rel = artifact.strip_prefix(root).unwrap_or(artifact);
            println!("    {}", rel.display());
        }
    }
    println!();
    println!("  {} in {}ms", style("→").cyan().bold(), report.duration_ms);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{StageKind, StageReport};
    use std::path::PathBuf;

    #[test]
    fn create_spinner_does_not_panic() {
        let pb = create_spinner("building...");
        pb.finish_and_clear();
    }

    #[test]
    fn print_summary_does_not_panic() {
        let report = BuildReport {
            stages: vec![StageReport {
                stage: StageKind::Package,
                artifacts: vec![PathBuf::from("/repo/library.jar")],
                detail: "packed library.jar".to_string(),
            }],
            duration_ms: 12,
        };
        print_build_summary(Path::new("/repo"), &report);
    }

    #[test]
    fn print_summary_empty_does_not_panic() {
        let report = BuildReport {
            stages: vec![],
            duration_ms: 0,
        };
        print_build_summary(Path::new("/repo"), &report);
    }
}
