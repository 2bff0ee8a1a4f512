/// Mock implementations for testing
mod mock_binary_locator;
mod mock_manifest_reader;
mod mock_progress_reporter;
mod mock_version_lookup;

pub use mock_binary_locator::MockBinaryLocator;
pub use mock_manifest_reader::MockManifestReader;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_version_lookup::MockVersionLookup;
