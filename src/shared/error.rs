use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to tell an outdated project apart from
/// a run that could not be completed at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every checked package is up to date
    Success = 0,
    /// At least one package has a newer published version
    OutdatedPackagesFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Setup error (manifest unreadable, package manager missing, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::OutdatedPackagesFound => write!(f, "Outdated Packages Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Setup errors that abort the whole run before any lookup is dispatched.
#[derive(Debug, Error)]
pub enum OutdatedError {
    #[error("package.json not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse package.json: {path}\nDetails: {details}\n\n💡 Hint: Please verify that package.json contains valid JSON")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Unsupported package manager: '{name}'\n\n💡 Hint: Supported package managers are npm, pnpm and yarn")]
    UnsupportedPackageManager { name: String },

    #[error("Package manager '{binary}' not found\n\n💡 Hint: Install {binary} or make sure it is on your PATH")]
    PackageManagerNotFound { binary: String },

    /// Validation error for user supplied values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },
}

/// Per-package failure of a registry lookup.
///
/// These never abort a run: the dispatch pool records them and reports an
/// empty latest version for the affected package.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("failed to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("command '{command}' failed with {status}, output: {output}")]
    CommandFailed {
        command: String,
        status: String,
        output: String,
    },

    #[error("failed to parse package info for {package}: {details}")]
    InvalidResponse { package: String, details: String },

    #[error("package info for {package} has no dist-tags.latest field")]
    MissingLatestTag { package: String },

    #[error("lookup for {package} timed out after {}s", .timeout.as_secs())]
    TimedOut { package: String, timeout: Duration },
}
