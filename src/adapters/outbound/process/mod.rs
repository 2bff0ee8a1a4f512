/// Process adapters: running the package manager and finding it on PATH
mod package_manager_lookup;
mod path_locator;

pub use package_manager_lookup::PackageManagerLookup;
pub use path_locator::PathBinaryLocator;
