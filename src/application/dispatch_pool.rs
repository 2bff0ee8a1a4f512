use crate::outdated_check::domain::{Package, PackageManager, ProgressEvent};
use crate::ports::outbound::VersionLookup;
use crate::shared::error::LookupError;
use dashmap::DashMap;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, warn};

/// Concurrent lookups allowed per logical processor
pub const CONCURRENCY_PER_CPU: usize = 2;

/// Default concurrency ceiling: `CONCURRENCY_PER_CPU` times the number of
/// logical processors available to this process
pub fn default_concurrency() -> usize {
    let cpus = std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1);
    cpus * CONCURRENCY_PER_CPU
}

/// DispatchPool - bounded concurrent fan-out of registry lookups
///
/// Every submitted package gets its own task. The tasks share one
/// semaphore (the concurrency ceiling) and one atomic sequence counter, and
/// each delivers exactly one [`ProgressEvent`] to the callback it was
/// submitted with. Failed lookups are recorded and reported with an empty
/// `latest`, so one bad package never stalls or aborts the batch.
///
/// Several batches may be submitted against the same pool; they share the
/// ceiling and the counter. [`DispatchPool::join`] waits for all of them.
pub struct DispatchPool<L: VersionLookup + 'static> {
    lookup: Arc<L>,
    manager: PackageManager,
    capacity: usize,
    gate: Arc<Semaphore>,
    counter: Arc<AtomicI64>,
    tasks: Mutex<JoinSet<()>>,
    lookup_timeout: Option<Duration>,
    failures: Arc<DashMap<String, Vec<String>>>,
}

impl<L: VersionLookup + 'static> DispatchPool<L> {
    /// Creates a pool with the [`default_concurrency`] ceiling
    pub fn new(lookup: Arc<L>, manager: PackageManager) -> Self {
        Self::with_capacity(lookup, manager, default_concurrency())
    }

    /// Creates a pool allowing at most `capacity` lookups in flight (at least one)
    pub fn with_capacity(lookup: Arc<L>, manager: PackageManager, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lookup,
            manager,
            capacity,
            gate: Arc::new(Semaphore::new(capacity)),
            counter: Arc::new(AtomicI64::new(0)),
            tasks: Mutex::new(JoinSet::new()),
            lookup_timeout: None,
            failures: Arc::new(DashMap::new()),
        }
    }

    /// Sets a deadline for each individual lookup
    ///
    /// `None` (the default) waits for the package manager indefinitely. A
    /// lookup that misses its deadline is treated like any other failed lookup.
    pub fn with_lookup_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.lookup_timeout = timeout;
        self
    }

    /// Spawns one lookup task per package and returns immediately
    ///
    /// Each task acquires a slot, performs one lookup, releases the slot,
    /// compares the declared and latest versions as plain strings, takes the
    /// next sequence value and then calls `on_progress`.
    ///
    /// # Panics
    /// Panics if called outside of a Tokio runtime.
    pub fn submit<F>(&self, packages: Vec<Package>, on_progress: F)
    where
        F: Fn(ProgressEvent) + Send + Sync + 'static,
    {
        let on_progress = Arc::new(on_progress);
        let mut tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);

        debug!(
            count = packages.len(),
            manager = %self.manager,
            capacity = self.capacity,
            "dispatching lookups"
        );

        for package in packages {
            let task = self.lookup_task();
            let on_progress = Arc::clone(&on_progress);
            tasks.spawn(async move {
                let event = task.run(package).await;
                on_progress(event);
            });
        }
    }

    /// Waits until every task submitted so far has finished
    ///
    /// A task that panics (for example inside the progress callback) is
    /// logged and does not stop the remaining tasks from being awaited.
    pub async fn join(&self) {
        loop {
            let mut pending = std::mem::replace(
                &mut *self.tasks.lock().unwrap_or_else(PoisonError::into_inner),
                JoinSet::new(),
            );
            if pending.is_empty() {
                break;
            }

            while let Some(result) = pending.join_next().await {
                if let Err(e) = result {
                    error!(error = %e, "lookup task did not complete");
                }
            }
        }
    }

    /// Current value of the shared sequence counter
    pub fn current_count(&self) -> i64 {
        self.counter.load(Ordering::SeqCst)
    }

    /// Sets the sequence counter back to zero
    ///
    /// Only meaningful between phases; calling it while tasks are in flight
    /// leaves the sequence values of those tasks unspecified.
    pub fn reset(&self) {
        self.counter.store(0, Ordering::SeqCst);
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Lookup failures recorded so far as `(package, error)`, sorted by package name
    ///
    /// One entry per failed lookup, so a name submitted in two batches that
    /// fails both times appears twice.
    pub fn lookup_failures(&self) -> Vec<(String, String)> {
        let mut failures: Vec<(String, String)> = self
            .failures
            .iter()
            .flat_map(|entry| {
                let package = entry.key().clone();
                entry
                    .value()
                    .iter()
                    .map(move |error| (package.clone(), error.clone()))
                    .collect::<Vec<_>>()
            })
            .collect();
        failures.sort();
        failures
    }

    fn lookup_task(&self) -> LookupTask<L> {
        LookupTask {
            lookup: Arc::clone(&self.lookup),
            manager: self.manager,
            gate: Arc::clone(&self.gate),
            counter: Arc::clone(&self.counter),
            lookup_timeout: self.lookup_timeout,
            failures: Arc::clone(&self.failures),
        }
    }
}

/// Everything a single spawned task needs, detached from the pool's lifetime
struct LookupTask<L: VersionLookup> {
    lookup: Arc<L>,
    manager: PackageManager,
    gate: Arc<Semaphore>,
    counter: Arc<AtomicI64>,
    lookup_timeout: Option<Duration>,
    failures: Arc<DashMap<String, Vec<String>>>,
}

impl<L: VersionLookup> LookupTask<L> {
    async fn run(self, package: Package) -> ProgressEvent {
        let result = {
            // The gate is never closed, so acquire cannot fail
            let _permit = self.gate.acquire().await.ok();
            self.fetch_latest(package.name()).await
        };

        let latest = match result {
            Ok(latest) => latest,
            Err(e) => {
                warn!(package = package.name(), error = %e, "error processing package");
                self.failures
                    .entry(package.name().to_string())
                    .or_default()
                    .push(e.to_string());
                String::new()
            }
        };

        let is_outdated = package.declared_version() != latest;
        let sequence = self.counter.fetch_add(1, Ordering::SeqCst) + 1;

        ProgressEvent {
            name: package.name().to_string(),
            current: package.declared_version().to_string(),
            latest,
            is_outdated,
            sequence,
        }
    }

    async fn fetch_latest(&self, package_name: &str) -> Result<String, LookupError> {
        let lookup = self.lookup.latest_version(self.manager, package_name);
        match self.lookup_timeout {
            Some(timeout) => tokio::time::timeout(timeout, lookup)
                .await
                .unwrap_or_else(|_| {
                    Err(LookupError::TimedOut {
                        package: package_name.to_string(),
                        timeout,
                    })
                }),
            None => lookup.await,
        }
    }
}
