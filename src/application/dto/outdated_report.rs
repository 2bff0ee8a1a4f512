use crate::outdated_check::domain::{DependencyKind, PackageManager};

/// One row of an outdated table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutdatedRow {
    pub name: String,
    pub current: String,
    /// Latest version as reported by the registry (empty if the lookup failed)
    pub latest: String,
    /// `latest` with severity coloring, or the raw value if it could not be classified
    pub formatted_latest: String,
}

/// OutdatedReport - Response DTO of the outdated check use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutdatedReport {
    /// Package manager that performed the lookups
    pub package_manager: PackageManager,
    /// Outdated `dependencies`, sorted by name
    pub dependencies: Vec<OutdatedRow>,
    /// Outdated `devDependencies`, sorted by name
    pub dev_dependencies: Vec<OutdatedRow>,
    /// Number of packages that were checked
    pub total_packages: usize,
    /// `(package, error)` for every lookup that failed
    pub lookup_failures: Vec<(String, String)>,
}

impl OutdatedReport {
    pub fn rows(&self, kind: DependencyKind) -> &[OutdatedRow] {
        match kind {
            DependencyKind::Dependency => &self.dependencies,
            DependencyKind::DevDependency => &self.dev_dependencies,
        }
    }

    pub fn outdated_count(&self) -> usize {
        self.dependencies.len() + self.dev_dependencies.len()
    }

    pub fn has_outdated(&self) -> bool {
        self.outdated_count() > 0
    }
}
