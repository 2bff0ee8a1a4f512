use crate::outdated_check::domain::PackageManager;
use crate::ports::outbound::VersionLookup;
use crate::shared::error::LookupError;
use async_trait::async_trait;
use serde::Deserialize;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct RegistryInfo {
    #[serde(default, rename = "dist-tags")]
    dist_tags: Option<DistTags>,
}

#[derive(Debug, Deserialize)]
struct DistTags {
    #[serde(default)]
    latest: Option<String>,
}

/// PackageManagerLookup adapter that asks the package manager for the latest version
///
/// This adapter implements the VersionLookup port by spawning
/// `<manager> info <name> --json` (`yarn npm info` for yarn) and reading
/// `dist-tags.latest` from the JSON it prints. Registry access,
/// authentication and proxies are whatever the package manager is configured
/// with.
pub struct PackageManagerLookup;

impl PackageManagerLookup {
    pub fn new() -> Self {
        Self
    }

    /// Extracts `dist-tags.latest` from the `info --json` output
    fn parse_latest(package_name: &str, stdout: &[u8]) -> Result<String, LookupError> {
        let info: RegistryInfo =
            serde_json::from_slice(stdout).map_err(|e| LookupError::InvalidResponse {
                package: package_name.to_string(),
                details: e.to_string(),
            })?;

        info.dist_tags
            .and_then(|tags| tags.latest)
            .map(|latest| latest.trim().to_string())
            .filter(|latest| !latest.is_empty())
            .ok_or_else(|| LookupError::MissingLatestTag {
                package: package_name.to_string(),
            })
    }
}

impl Default for PackageManagerLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VersionLookup for PackageManagerLookup {
    async fn latest_version(
        &self,
        manager: PackageManager,
        package_name: &str,
    ) -> Result<String, LookupError> {
        let args = manager.info_args(package_name);
        let command_line = format!("{} {}", manager.binary(), args.join(" "));
        debug!(command = %command_line, "running package info");

        let output = Command::new(manager.binary())
            .args(&args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| LookupError::Spawn {
                command: command_line.clone(),
                source,
            })?;

        if !output.status.success() {
            let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
            combined.push_str(&String::from_utf8_lossy(&output.stderr));
            return Err(LookupError::CommandFailed {
                command: command_line,
                status: output.status.to_string(),
                output: combined.trim().to_string(),
            });
        }

        Self::parse_latest(package_name, &output.stdout)
    }
}
