//! npm-outdated-check - Latest-version checker for JavaScript projects
//!
//! This library reads a project's package.json, asks the project's package
//! manager (npm, pnpm or yarn) for the latest published version of every
//! dependency concurrently, and reports which packages are behind, following
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`outdated_check`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases, DTOs and the dispatch pool
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use npm_outdated_check::prelude::*;
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create use case with adapters
//! let use_case = CheckOutdatedUseCase::new(
//!     FileSystemReader::new(),
//!     PackageManagerLookup::new(),
//!     PathBinaryLocator::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = CheckRequest::new(PathBuf::from("."));
//! let report = use_case.execute(request).await?;
//!
//! // Format output
//! let output = TableFormatter::new().format(&report)?;
//! print!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod outdated_check;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemReader, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::TableFormatter;
    pub use crate::adapters::outbound::process::{PackageManagerLookup, PathBinaryLocator};
    pub use crate::application::dispatch_pool::DispatchPool;
    pub use crate::application::dto::{CheckRequest, OutdatedReport, OutdatedRow};
    pub use crate::application::use_cases::CheckOutdatedUseCase;
    pub use crate::outdated_check::domain::{
        DependencyKind, Package, PackageManager, PackageName, ProgressEvent, VersionDiff,
    };
    pub use crate::outdated_check::services::{
        PackageFilter, PackageManagerResolver, VersionClassifier, VersionError,
    };
    pub use crate::ports::outbound::{
        BinaryLocator, ManifestReader, OutputPresenter, PackageManifest, ProgressReporter,
        ReportFormatter, VersionLookup,
    };
    pub use crate::shared::error::{ExitCode, LookupError, OutdatedError};
    pub use crate::shared::Result;
}
