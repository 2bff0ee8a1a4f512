use crate::outdated_check::domain::PackageManager;
use std::path::PathBuf;
use std::time::Duration;

/// CheckRequest - Internal request DTO for the outdated check use case
#[derive(Debug, Clone)]
pub struct CheckRequest {
    /// Path to the project directory containing package.json
    pub project_path: PathBuf,
    /// Package manager chosen explicitly; detection runs when `None`
    pub package_manager: Option<PackageManager>,
    /// Patterns for excluding packages from the check
    pub exclude_patterns: Vec<String>,
    /// Deadline for each registry lookup; unbounded when `None`
    pub lookup_timeout: Option<Duration>,
}

impl CheckRequest {
    pub fn new(project_path: PathBuf) -> Self {
        Self {
            project_path,
            package_manager: None,
            exclude_patterns: Vec::new(),
            lookup_timeout: None,
        }
    }

    pub fn with_package_manager(mut self, package_manager: Option<PackageManager>) -> Self {
        self.package_manager = package_manager;
        self
    }

    pub fn with_exclude_patterns(mut self, exclude_patterns: Vec<String>) -> Self {
        self.exclude_patterns = exclude_patterns;
        self
    }

    pub fn with_lookup_timeout(mut self, lookup_timeout: Option<Duration>) -> Self {
        self.lookup_timeout = lookup_timeout;
        self
    }
}
