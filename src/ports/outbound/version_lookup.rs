use crate::outdated_check::domain::PackageManager;
use crate::shared::error::LookupError;
use async_trait::async_trait;

/// VersionLookup port for asking the registry for a package's latest version
///
/// Implementations must be `Send + Sync`: the dispatch pool shares a single
/// instance between all of its concurrent tasks.
#[async_trait]
pub trait VersionLookup: Send + Sync {
    /// Performs exactly one lookup of the latest published version of `package_name`
    ///
    /// # Errors
    /// Returns a [`LookupError`] if the package manager cannot be run, exits
    /// unsuccessfully, or prints something without a `dist-tags.latest` field
    async fn latest_version(
        &self,
        manager: PackageManager,
        package_name: &str,
    ) -> Result<String, LookupError>;
}
