//! External tool invocation.
//!
//! Uses `std::process::Command` to call the compiler, archiver, signer,
//! documentation generator, and git CLI. Every invocation is checked: a
//! non-zero exit status becomes [`HookError::Tool`] and aborts the pipeline.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{HookError, Result};

/// Validate user-supplied input to prevent argument injection.
pub(crate) fn validate_input(input: &str, name: &str) -> Result<()> {
    if input.starts_with('-') {
        return Err(HookError::Other(format!(
            "Invalid {name}: cannot start with '-'"
        )));
    }
    if input.contains('\0') {
        return Err(HookError::Other(format!(
            "Invalid {name}: cannot contain null bytes"
        )));
    }
    Ok(())
}

/// Run an external tool in `cwd`, returning stdout on success.
pub fn run_tool(program: &str, args: &[&str], cwd: &Path) -> Result<String> {
    run_tool_with_env(program, args, cwd, &[])
}

/// Run an external tool with extra environment variables scoped to the
/// child process only. Used by the signing stage to hand over the keystore
/// secret without putting it on the command line.
///
/// The values in `envs` are never logged.
pub fn run_tool_with_env(
    program: &str,
    args: &[&str],
    cwd: &Path,
    envs: &[(&str, &str)],
) -> Result<String> {
    debug!(tool = program, ?args, "invoking external tool");

    let mut command = Command::new(program);
    command
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null());
    for (key, value) in envs {
        command.env(key, value);
    }

    let output = command
        .output()
        .map_err(|e| HookError::Other(format!("Failed to run {program}: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(HookError::Tool {
            tool: program.to_string(),
            status: output.status.code().unwrap_or(-1),
            stderr: stderr.trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Run a git command in `repo_path`, returning stdout on success.
pub fn run_git(git: &str, repo_path: &Path, args: &[&str]) -> Result<String> {
    run_tool(git, args, repo_path)
}
