use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};
use console::style;

use jarhook::cli::report::{create_spinner, print_build_summary};
use jarhook::config::{all_profiles, load_config};
use jarhook::error::Result;
use jarhook::hooks::install_hooks;
use jarhook::observability::init_logging;
use jarhook::pipeline::{version, Pipeline, PipelineOutcome};

#[derive(Parser)]
#[command(name = "jarhook")]
#[command(version, about = "Git hook automation — hook installation and the pre-commit release pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install the repository's hook shims into .git/hooks (post-merge)
    Install {
        /// Repository root (default: current dir)
        #[arg(default_value = ".")]
        directory: String,
    },
    /// Run the release pipeline (pre-commit)
    Build {
        /// Repository root (default: current dir)
        #[arg(default_value = ".")]
        directory: String,
        /// Pipeline profile: classic, release, or maven
        #[arg(long)]
        profile: Option<String>,
    },
    /// Run only the version-bump stage
    Bump {
        /// Repository root (default: current dir)
        #[arg(default_value = ".")]
        directory: String,
    },
    /// List the built-in pipeline profiles
    Profiles,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Install { directory } => cmd_install(&directory),
        Commands::Build { directory, profile } => cmd_build(&directory, profile.as_deref()),
        Commands::Bump { directory } => cmd_bump(&directory),
        Commands::Profiles => cmd_profiles(),
    };

    if let Err(e) = result {
        eprintln!("{} {e}", style("error:").red().bold());
        process::exit(1);
    }
}

fn cmd_install(directory: &str) -> Result<()> {
    let root = Path::new(directory);
    let config = load_config(root, None)?;
    let report = install_hooks(root, &config)?;

    println!(
        "{} Installed {} git hooks into .git/hooks.",
        style("✓").green(),
        report.installed.len()
    );
    Ok(())
}

fn cmd_build(directory: &str, profile: Option<&str>) -> Result<()> {
    let root = Path::new(directory);
    let config = load_config(root, profile)?;
    let profile_name = config.profile;

    let spinner = create_spinner(&format!("running {profile_name} pipeline..."));
    let outcome = Pipeline::new(root, config).run();
    spinner.finish_and_clear();

    match outcome? {
        PipelineOutcome::Completed(report) => {
            print_build_summary(root, &report);
        }
        PipelineOutcome::SkippedMissingCredential => {
            // Exactly one message, exit code 0: an absent keystore password
            // means "nothing to do", not failure.
            println!("No keystore password found, skipping the release build.");
        }
    }
    Ok(())
}

fn cmd_bump(directory: &str) -> Result<()> {
    let root = Path::new(directory);
    let config = load_config(root, None)?;
    let report = version::run(root, &config)?;

    println!(
        "{} Bumped {}: {}",
        style("✓").green(),
        config.bump.file,
        report.detail
    );
    Ok(())
}

fn cmd_profiles() -> Result<()> {
    for profile in all_profiles() {
        println!(
            "{}  {}",
            style(profile.name.as_str()).cyan().bold(),
            profile.description
        );
        let stages: Vec<&str> = profile.stages.iter().map(|s| s.as_str()).collect();
        println!("         {}", style(stages.join(" → ")).dim());
    }
    Ok(())
}
