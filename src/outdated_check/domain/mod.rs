pub mod package;
pub mod package_manager;
pub mod progress_event;
pub mod version_diff;

pub use package::{DependencyKind, Package, PackageName};
pub use package_manager::PackageManager;
pub use progress_event::ProgressEvent;
pub use version_diff::VersionDiff;
