use npm_outdated_check::prelude::*;
use std::path::Path;

/// Mock ManifestReader serving an in-memory package.json and lockfile list
pub struct MockManifestReader {
    manifest: PackageManifest,
    files: Vec<String>,
}

impl MockManifestReader {
    pub fn new() -> Self {
        Self {
            manifest: PackageManifest::default(),
            files: Vec::new(),
        }
    }

    pub fn with_dependency(mut self, name: &str, version: &str) -> Self {
        self.manifest
            .dependencies
            .insert(name.to_string(), version.to_string());
        self
    }

    pub fn with_dev_dependency(mut self, name: &str, version: &str) -> Self {
        self.manifest
            .dev_dependencies
            .insert(name.to_string(), version.to_string());
        self
    }

    pub fn with_package_manager_field(mut self, value: &str) -> Self {
        self.manifest.package_manager = Some(value.to_string());
        self
    }

    pub fn with_file(mut self, file_name: &str) -> Self {
        self.files.push(file_name.to_string());
        self
    }
}

impl ManifestReader for MockManifestReader {
    fn read_manifest(&self, _project_path: &Path) -> Result<PackageManifest> {
        Ok(self.manifest.clone())
    }

    fn has_file(&self, _project_path: &Path, file_name: &str) -> bool {
        self.files.iter().any(|f| f == file_name)
    }
}
