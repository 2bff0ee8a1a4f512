use crate::shared::Result;
use std::collections::BTreeMap;
use std::path::Path;

/// The parts of package.json the outdated check needs
///
/// Dependency maps are ordered by name so every run dispatches in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageManifest {
    /// Raw `packageManager` field, e.g. `pnpm@8.15.4`
    pub package_manager: Option<String>,
    /// `dependencies`: name to declared version range
    pub dependencies: BTreeMap<String, String>,
    /// `devDependencies`: name to declared version range
    pub dev_dependencies: BTreeMap<String, String>,
}

/// ManifestReader port for reading the project manifest
///
/// This port abstracts the file system access needed to load package.json
/// and to probe for lockfiles during package manager detection.
pub trait ManifestReader {
    /// Reads and parses package.json from the project directory
    ///
    /// # Errors
    /// Returns an error if:
    /// - package.json does not exist
    /// - The file cannot be read or is not valid JSON
    fn read_manifest(&self, project_path: &Path) -> Result<PackageManifest>;

    /// Returns true if `file_name` exists in the project directory
    fn has_file(&self, project_path: &Path, file_name: &str) -> bool;
}
