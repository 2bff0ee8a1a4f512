use async_trait::async_trait;
use npm_outdated_check::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock VersionLookup that answers from a table of latest versions
///
/// Unknown packages fail with `MissingLatestTag`. Every call is recorded
/// together with the package manager it was made for, and the highest number
/// of lookups running at the same time is tracked.
#[derive(Clone, Default)]
pub struct MockVersionLookup {
    versions: HashMap<String, String>,
    delay: Option<Duration>,
    pub calls: Arc<Mutex<Vec<(PackageManager, String)>>>,
    in_flight: Arc<AtomicUsize>,
    pub max_in_flight: Arc<AtomicUsize>,
}

impl MockVersionLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latest(mut self, name: &str, latest: &str) -> Self {
        self.versions.insert(name.to_string(), latest.to_string());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn called_packages(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, name)| name.clone())
            .collect();
        names.sort();
        names
    }
}

#[async_trait]
impl VersionLookup for MockVersionLookup {
    async fn latest_version(
        &self,
        manager: PackageManager,
        package_name: &str,
    ) -> std::result::Result<String, LookupError> {
        self.calls
            .lock()
            .unwrap()
            .push((manager, package_name.to_string()));

        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        self.versions
            .get(package_name)
            .cloned()
            .ok_or_else(|| LookupError::MissingLatestTag {
                package: package_name.to_string(),
            })
    }
}
