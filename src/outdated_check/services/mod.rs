pub mod package_filter;
pub mod package_manager_resolver;
pub mod version_classifier;

pub use package_filter::PackageFilter;
pub use package_manager_resolver::{PackageManagerResolver, Resolution, ResolutionSource};
pub use version_classifier::{VersionClassifier, VersionError, VersionTriple};
