use npm_outdated_check::prelude::*;

/// Mock BinaryLocator with a fixed set of installed package managers
pub struct MockBinaryLocator {
    installed: Vec<String>,
}

impl MockBinaryLocator {
    /// npm, pnpm and yarn are all installed
    pub fn all() -> Self {
        Self::with_installed(&["npm", "pnpm", "yarn"])
    }

    pub fn with_installed(binaries: &[&str]) -> Self {
        Self {
            installed: binaries.iter().map(|b| b.to_string()).collect(),
        }
    }
}

impl BinaryLocator for MockBinaryLocator {
    fn is_available(&self, binary: &str) -> bool {
        self.installed.iter().any(|b| b == binary)
    }
}
