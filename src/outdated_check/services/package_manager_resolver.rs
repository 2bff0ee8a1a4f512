use crate::outdated_check::domain::package_manager::LOCKFILES;
use crate::outdated_check::domain::PackageManager;

/// Where the resolved package manager came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// `--package-manager` flag or config file
    Explicit,
    /// `packageManager` field of package.json
    ManifestField,
    /// Presence of the named lockfile
    Lockfile(&'static str),
    /// Nothing matched; npm is assumed
    Default,
}

/// Outcome of package manager resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub manager: PackageManager,
    pub source: ResolutionSource,
    /// Set when the `packageManager` field was present but unusable
    pub warning: Option<String>,
}

/// PackageManagerResolver - decides which package manager performs lookups
///
/// Order: explicit choice, then the `packageManager` field, then lockfiles
/// in [`LOCKFILES`] order, then npm.
pub struct PackageManagerResolver;

impl PackageManagerResolver {
    /// Resolves the package manager
    ///
    /// # Arguments
    /// * `explicit` - Manager chosen on the command line or in the config file
    /// * `manifest_field` - Raw `packageManager` value from package.json
    /// * `has_lockfile` - Returns true if the named lockfile exists in the project
    pub fn resolve(
        explicit: Option<PackageManager>,
        manifest_field: Option<&str>,
        has_lockfile: impl Fn(&str) -> bool,
    ) -> Resolution {
        if let Some(manager) = explicit {
            return Resolution {
                manager,
                source: ResolutionSource::Explicit,
                warning: None,
            };
        }

        let mut warning = None;
        if let Some(field) = manifest_field.filter(|f| !f.is_empty()) {
            match PackageManager::from_manifest_field(field) {
                Some(manager) => {
                    return Resolution {
                        manager,
                        source: ResolutionSource::ManifestField,
                        warning: None,
                    }
                }
                None => {
                    warning = Some(format!(
                        "⚠️  Warning: failed to parse packageManager field '{}': unknown package manager",
                        field
                    ));
                }
            }
        }

        let (manager, source) = LOCKFILES
            .iter()
            .find(|(lockfile, _)| has_lockfile(*lockfile))
            .map(|(lockfile, manager)| (*manager, ResolutionSource::Lockfile(*lockfile)))
            .unwrap_or((PackageManager::Npm, ResolutionSource::Default));

        Resolution {
            manager,
            source,
            warning,
        }
    }
}
