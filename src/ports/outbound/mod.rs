/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, subprocesses, console, etc.).
pub mod binary_locator;
pub mod formatter;
pub mod manifest_reader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod version_lookup;

pub use binary_locator::BinaryLocator;
pub use formatter::ReportFormatter;
pub use manifest_reader::{ManifestReader, PackageManifest};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use version_lookup::VersionLookup;
