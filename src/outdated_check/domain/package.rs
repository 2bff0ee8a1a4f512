use crate::shared::Result;
use std::fmt;

/// npm's own limit on package name length
const MAX_PACKAGE_NAME_LENGTH: usize = 214;

/// NewType wrapper for an npm package name with validation
///
/// Names end up as an argument to a package manager subprocess, so anything
/// that could be read as a flag or shell syntax is rejected up front.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            anyhow::bail!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            );
        }

        if name.starts_with('-') {
            anyhow::bail!("Package name '{}' must not start with '-'", name);
        }

        // Scoped names look like @scope/name
        if !name.chars().all(|c| {
            c.is_ascii_alphanumeric()
                || c == '-'
                || c == '_'
                || c == '.'
                || c == '~'
                || c == '@'
                || c == '/'
        }) {
            anyhow::bail!(
                "Package name '{}' contains invalid characters. Only alphanumeric, hyphens, underscores, dots, tildes, '@' and '/' are allowed.",
                name
            );
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A declared dependency: its name and the version from package.json with
/// any range operator already stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    name: PackageName,
    declared_version: String,
}

impl Package {
    pub fn new(name: String, declared_version: String) -> Result<Self> {
        Ok(Self {
            name: PackageName::new(name)?,
            declared_version,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn declared_version(&self) -> &str {
        &self.declared_version
    }
}

/// Which section of package.json a package was declared in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyKind {
    Dependency,
    DevDependency,
}

impl DependencyKind {
    /// Header for the first column of the report table
    pub fn table_header(self) -> &'static str {
        match self {
            DependencyKind::Dependency => "DEPENDENCY",
            DependencyKind::DevDependency => "DEV DEPENDENCY",
        }
    }
}
