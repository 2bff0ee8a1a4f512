use clap::Parser;
use std::path::PathBuf;

use crate::outdated_check::domain::PackageManager;

/// Check package.json dependencies against the latest published versions
#[derive(Parser, Debug)]
#[command(name = "npm-outdated-check")]
#[command(version)]
#[command(
    about = "Check package.json dependencies against the latest published versions",
    long_about = "Check package.json dependencies against the latest published versions.\n\n\
                  Lookups are delegated to the project's package manager (npm, pnpm or yarn), \
                  detected from the packageManager field or the lockfile unless given explicitly.\n\n\
                  Exit codes: 0 = all up to date, 1 = outdated packages found, \
                  2 = invalid arguments, 3 = application error."
)]
pub struct Args {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Package manager used for lookups: npm, pnpm or yarn (detected when omitted)
    #[arg(short = 'm', long = "package-manager", value_name = "MANAGER")]
    pub package_manager: Option<PackageManager>,

    /// Exclude packages matching patterns (supports wildcards: *)
    /// Can be specified multiple times: -e "@types/*" -e "eslint-*"
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Give up on a single lookup after this many seconds (no limit by default)
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Path to a config file (defaults to npm-outdated-check.config.yml in the project directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
