use crate::ports::outbound::BinaryLocator;
use std::env;
use std::ffi::OsString;
use std::path::Path;

/// PathBinaryLocator adapter that searches the `PATH` environment variable
///
/// On Windows the usual executable extensions are tried as well, since npm,
/// pnpm and yarn are installed as `.cmd` shims there.
pub struct PathBinaryLocator {
    search_path: Option<OsString>,
}

impl PathBinaryLocator {
    /// Creates a locator over the current process `PATH`
    pub fn new() -> Self {
        Self {
            search_path: env::var_os("PATH"),
        }
    }

    /// Creates a locator over an explicit search path
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }
}

impl Default for PathBinaryLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl BinaryLocator for PathBinaryLocator {
    fn is_available(&self, binary: &str) -> bool {
        let Some(search_path) = &self.search_path else {
            return false;
        };
        env::split_paths(search_path).any(|dir| is_executable_in(&dir, binary))
    }
}

#[cfg(windows)]
fn is_executable_in(dir: &Path, binary: &str) -> bool {
    ["", ".exe", ".cmd", ".bat"]
        .iter()
        .any(|ext| dir.join(format!("{binary}{ext}")).is_file())
}

#[cfg(not(windows))]
fn is_executable_in(dir: &Path, binary: &str) -> bool {
    use std::os::unix::fs::PermissionsExt;

    dir.join(binary)
        .metadata()
        .map(|metadata| metadata.is_file() && metadata.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}
