use crate::ports::outbound::{ManifestReader, PackageManifest};
use crate::shared::error::OutdatedError;
use crate::shared::security::read_text_file;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

const MANIFEST_FILENAME: &str = "package.json";

/// Subset of package.json that is deserialized; everything else is ignored
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageJson {
    #[serde(default)]
    package_manager: Option<String>,
    #[serde(default)]
    dependencies: BTreeMap<String, String>,
    #[serde(default)]
    dev_dependencies: BTreeMap<String, String>,
}

/// FileSystemReader adapter for reading files from the file system
///
/// This adapter implements the ManifestReader port, providing file system
/// access for reading package.json and probing for lockfiles.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for FileSystemReader {
    fn read_manifest(&self, project_path: &Path) -> Result<PackageManifest> {
        let manifest_path = project_path.join(MANIFEST_FILENAME);

        if !manifest_path.exists() {
            return Err(OutdatedError::ManifestNotFound {
                path: manifest_path,
                suggestion: format!(
                    "package.json does not exist in project directory \"{}\".\n   \
                     Please run in the root directory of a JavaScript project, or specify the correct path with the --path option.",
                    project_path.display()
                ),
            }
            .into());
        }

        let content = read_text_file(&manifest_path, MANIFEST_FILENAME).map_err(|e| {
            OutdatedError::FileReadError {
                path: manifest_path.clone(),
                details: e.to_string(),
            }
        })?;

        let package_json: PackageJson =
            serde_json::from_str(&content).map_err(|e| OutdatedError::ManifestParseError {
                path: manifest_path,
                details: e.to_string(),
            })?;

        Ok(PackageManifest {
            package_manager: package_json.package_manager,
            dependencies: package_json.dependencies,
            dev_dependencies: package_json.dev_dependencies,
        })
    }

    fn has_file(&self, project_path: &Path, file_name: &str) -> bool {
        project_path.join(file_name).is_file()
    }
}
