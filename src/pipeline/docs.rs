//! Documentation stage.
//!
//! Removes any previously generated documentation directory, runs the
//! documentation generator over the source list, and optionally archives
//! the directory into `{name}-javadoc.jar`.

use std::path::Path;

use tracing::warn;

use crate::config::BuildConfig;
use crate::error::Result;
use crate::pipeline::compile::collect_sources;
use crate::pipeline::{StageKind, StageReport};
use crate::tool::run_tool;

/// Run the documentation stage.
pub fn run(root: &Path, config: &BuildConfig) -> Result<StageReport> {
    let docs_dir = root.join(&config.paths.docs_dir);
    if docs_dir.is_dir() {
        std::fs::remove_dir_all(&docs_dir)?;
    }

    let sources_dir = root.join(&config.paths.sources_dir);
    let sources = collect_sources(&sources_dir, &config.sources.extension);
    if sources.is_empty() {
        warn!(dir = %sources_dir.display(), "no sources found, documentation not generated");
        return Ok(StageReport {
            stage: StageKind::Docs,
            artifacts: vec![],
            detail: "no sources found".to_string(),
        });
    }

    let mut args: Vec<String> = vec!["-d".to_string(), config.paths.docs_dir.clone()];
    args.extend(sources.iter().map(|p| p.to_string_lossy().into_owned()));
    let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
    run_tool(&config.tools.doc_generator, &arg_refs, root)?;

    let mut artifacts = vec![docs_dir];
    if config.docs.archive {
        let jar_name = config.javadoc_jar_name();
        run_tool(
            &config.tools.archiver,
            &["-cf", &jar_name, "-C", &config.paths.docs_dir, "."],
            root,
        )?;
        artifacts.push(root.join(jar_name));
    }

    Ok(StageReport {
        stage: StageKind::Docs,
        detail: format!("documented {} sources", sources.len()),
        artifacts,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
