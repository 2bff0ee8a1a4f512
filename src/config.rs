//! Configuration file support for npm-outdated-check.
//!
//! Provides YAML-based configuration through `npm-outdated-check.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::outdated_check::domain::PackageManager;
use crate::shared::error::OutdatedError;
use crate::shared::security::read_text_file;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "npm-outdated-check.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub package_manager: Option<String>,
    pub exclude_packages: Option<Vec<String>>,
    pub lookup_timeout_secs: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parses the configured package manager, if any
    pub fn package_manager(&self) -> Result<Option<PackageManager>> {
        self.package_manager
            .as_deref()
            .map(|name| {
                name.parse::<PackageManager>().map_err(|_| {
                    anyhow::Error::from(OutdatedError::UnsupportedPackageManager {
                        name: name.to_string(),
                    })
                })
            })
            .transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_text_file(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file is a valid, empty config
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Err(e) = config.package_manager() {
        bail!("Invalid config: package_manager: {}", e);
    }

    if config.lookup_timeout_secs == Some(0) {
        bail!(
            "Invalid config: lookup_timeout_secs must be greater than 0.\n\n\
             💡 Hint: Remove the field to let lookups run without a deadline."
        );
    }

    if let Some(ref patterns) = config.exclude_packages {
        for (i, pattern) in patterns.iter().enumerate() {
            if pattern.trim().is_empty() {
                bail!(
                    "Invalid config: exclude_packages[{}] must not be empty.\n\n\
                     💡 Hint: Each entry must be a package name or a pattern such as \"@types/*\".",
                    i
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<_> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
