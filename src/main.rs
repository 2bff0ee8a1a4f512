mod adapters;
mod application;
mod cli;
mod config;
mod outdated_check;
mod ports;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::{FileSystemReader, StdoutPresenter};
use adapters::outbound::formatters::TableFormatter;
use adapters::outbound::process::{PackageManagerLookup, PathBinaryLocator};
use application::dto::CheckRequest;
use application::use_cases::CheckOutdatedUseCase;
use cli::Args;
use config::ConfigFile;
use ports::outbound::{OutputPresenter, ReportFormatter};
use shared::error::{ExitCode, OutdatedError};
use shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run() -> Result<ExitCode> {
    // Parse command-line arguments (clap exits with code 2 on invalid input)
    let args = Args::parse_args();

    // Validate project directory
    let project_dir = args.path.as_deref().unwrap_or(".");
    let project_path = PathBuf::from(project_dir);

    validate_project_path(&project_path)?;

    // Load config file (explicit path or auto-discovery)
    let config = load_config(&args, &project_path)?;

    let request = build_request(args, config, project_path)?;

    // Create adapters (Dependency Injection)
    let use_case = CheckOutdatedUseCase::new(
        FileSystemReader::new(),
        PackageManagerLookup::new(),
        PathBinaryLocator::new(),
        StderrProgressReporter::new(),
    );

    let report = use_case.execute(request).await?;

    let output = TableFormatter::new().format(&report)?;
    StdoutPresenter::new().present(&output)?;

    if report.has_outdated() {
        Ok(ExitCode::OutdatedPackagesFound)
    } else {
        Ok(ExitCode::Success)
    }
}

fn load_config(args: &Args, project_path: &Path) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(config_path) => config::load_config_from_path(config_path).map(Some),
        None => config::discover_config(project_path),
    }
}

/// Merges CLI arguments with the config file; CLI values win and exclusions are combined
fn build_request(
    args: Args,
    config: Option<ConfigFile>,
    project_path: PathBuf,
) -> Result<CheckRequest> {
    let config = config.unwrap_or_default();

    let package_manager = match args.package_manager {
        Some(manager) => Some(manager),
        None => config.package_manager()?,
    };

    let mut exclude_patterns = config.exclude_packages.unwrap_or_default();
    for pattern in args.exclude {
        if !exclude_patterns.contains(&pattern) {
            exclude_patterns.push(pattern);
        }
    }

    let lookup_timeout = args
        .timeout
        .or(config.lookup_timeout_secs)
        .map(Duration::from_secs);

    Ok(CheckRequest::new(project_path)
        .with_package_manager(package_manager)
        .with_exclude_patterns(exclude_patterns)
        .with_lookup_timeout(lookup_timeout))
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(OutdatedError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata =
        std::fs::symlink_metadata(path).map_err(|e| OutdatedError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read path metadata: {}", e),
        })?;

    if metadata.is_symlink() {
        return Err(OutdatedError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(OutdatedError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
