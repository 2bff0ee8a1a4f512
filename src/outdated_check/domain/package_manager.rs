use std::fmt;
use std::str::FromStr;

/// The package manager used to query the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
}

/// Lockfiles in detection priority order
pub const LOCKFILES: [(&str, PackageManager); 3] = [
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("yarn.lock", PackageManager::Yarn),
    ("package-lock.json", PackageManager::Npm),
];

impl PackageManager {
    /// Name of the executable that must be on PATH
    pub fn binary(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
        }
    }

    /// Arguments for a single `info` lookup of `package_name`
    pub fn info_args(self, package_name: &str) -> Vec<String> {
        let mut args = match self {
            PackageManager::Npm | PackageManager::Pnpm => vec!["info".to_string()],
            PackageManager::Yarn => vec!["npm".to_string(), "info".to_string()],
        };
        args.push(package_name.to_string());
        args.push("--json".to_string());
        args
    }

    /// Parses the `packageManager` field of package.json, e.g. `pnpm@8.15.4`
    ///
    /// Matching is by prefix, so any version suffix is accepted.
    pub fn from_manifest_field(value: &str) -> Option<Self> {
        if value.starts_with("pnpm") {
            Some(PackageManager::Pnpm)
        } else if value.starts_with("npm") {
            Some(PackageManager::Npm)
        } else if value.starts_with("yarn") {
            Some(PackageManager::Yarn)
        } else {
            None
        }
    }
}

impl FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "npm" => Ok(PackageManager::Npm),
            "pnpm" => Ok(PackageManager::Pnpm),
            "yarn" => Ok(PackageManager::Yarn),
            _ => Err(format!(
                "Invalid package manager: {}. Please specify 'npm', 'pnpm' or 'yarn'",
                s
            )),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary())
    }
}
