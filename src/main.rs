use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use version_tag_check::check::{run_check, Baseline, CheckRequest};
use version_tag_check::git::Git2TagSource;
use version_tag_check::{config, logging, ui};

#[derive(clap::Parser)]
#[command(
    name = "version-tag-check",
    about = "Check that a version tag is well formed and a valid increment over existing tags"
)]
struct Args {
    #[arg(short, long, env = "INPUT_VERSION_TAG", help = "Version tag to check, e.g. v1.2.3-RC1")]
    tag: Option<String>,

    #[arg(
        long,
        env = "INPUT_SHOULD_EXIST",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = parse_switch,
        help = "Only check that the tag already exists"
    )]
    should_exist: Option<Switch>,

    #[arg(short, long, env = "INPUT_REPOSITORY_PATH", help = "Path inside the git repository")]
    repo: Option<PathBuf>,

    #[arg(long, value_enum, help = "Existing version to compare against")]
    baseline: Option<Baseline>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Enable debug logging")]
    verbose: bool,

    #[arg(short = 'V', long, help = "Print version information")]
    version: bool,
}

/// Boolean input that may be given empty, as CI runners pass unset inputs
#[derive(Debug, Clone, Copy, PartialEq)]
struct Switch(Option<bool>);

fn parse_switch(value: &str) -> std::result::Result<Switch, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" => Ok(Switch(None)),
        "true" | "yes" | "y" | "on" | "1" => Ok(Switch(Some(true))),
        "false" | "no" | "n" | "off" | "0" => Ok(Switch(Some(false))),
        other => Err(format!("expected true or false, got '{}'", other)),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("version-tag-check {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logging::init_logging(args.verbose);

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let tag = match args.tag {
        Some(tag) if !tag.is_empty() => tag,
        _ => {
            ui::display_error("Failure: VERSION_TAG is not set correctly.");
            std::process::exit(1);
        }
    };

    let request = CheckRequest {
        tag,
        should_exist: args
            .should_exist
            .and_then(|switch| switch.0)
            .unwrap_or(config.check.should_exist),
        baseline: args.baseline.unwrap_or(config.check.baseline),
    };
    let repo_path = args.repo.unwrap_or(config.repository.path);
    debug!(?request, repo = %repo_path.display(), "starting tag check");

    let source = match Git2TagSource::open(&repo_path) {
        Ok(source) => source,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    ui::display_status(&format!("Checking tag {}", request.tag));
    let report = match run_check(&source, &request) {
        Ok(report) => report,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    ui::display_report(&report);
    if !report.passed() {
        std::process::exit(1);
    }

    Ok(())
}
