use crate::application::dispatch_pool::DispatchPool;
use crate::application::dto::{CheckRequest, OutdatedReport, OutdatedRow};
use crate::outdated_check::domain::{DependencyKind, Package, PackageManager, ProgressEvent};
use crate::outdated_check::services::{
    PackageFilter, PackageManagerResolver, ResolutionSource, VersionClassifier,
};
use crate::ports::outbound::{
    BinaryLocator, ManifestReader, PackageManifest, ProgressReporter, VersionLookup,
};
use crate::shared::error::OutdatedError;
use crate::shared::Result;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tracing::debug;

/// Rows collected concurrently by the progress callbacks
type SharedRows = Arc<Mutex<Vec<OutdatedRow>>>;

/// CheckOutdatedUseCase - Core use case for the outdated check
///
/// Reads package.json, settles on a package manager, makes sure it can be
/// run, then fans the registry lookups out over a [`DispatchPool`] and
/// collects the outdated packages into an [`OutdatedReport`].
///
/// # Type Parameters
/// * `MR` - ManifestReader implementation
/// * `VL` - VersionLookup implementation
/// * `BL` - BinaryLocator implementation
/// * `PR` - ProgressReporter implementation
pub struct CheckOutdatedUseCase<MR, VL, BL, PR> {
    manifest_reader: MR,
    version_lookup: Arc<VL>,
    binary_locator: BL,
    progress_reporter: Arc<PR>,
}

impl<MR, VL, BL, PR> CheckOutdatedUseCase<MR, VL, BL, PR>
where
    MR: ManifestReader,
    VL: VersionLookup + 'static,
    BL: BinaryLocator,
    PR: ProgressReporter + 'static,
{
    /// Creates a new CheckOutdatedUseCase with injected dependencies
    pub fn new(
        manifest_reader: MR,
        version_lookup: VL,
        binary_locator: BL,
        progress_reporter: PR,
    ) -> Self {
        Self {
            manifest_reader,
            version_lookup: Arc::new(version_lookup),
            binary_locator,
            progress_reporter: Arc::new(progress_reporter),
        }
    }

    /// Executes the outdated check
    ///
    /// # Errors
    /// Only setup problems are errors: an unreadable manifest, invalid
    /// exclusion patterns, or a package manager that is not installed.
    /// Individual lookup failures end up in the report instead.
    pub async fn execute(&self, request: CheckRequest) -> Result<OutdatedReport> {
        // Step 1: Read package.json
        let manifest = self.read_and_report_manifest(&request)?;

        // Step 2: Decide which package manager performs the lookups
        let manager = self.resolve_package_manager(&request, &manifest);

        // Step 3: Fail before dispatching anything if it cannot be run
        self.ensure_package_manager_available(manager)?;

        // Step 4: Build the package lists, applying exclusions
        let filter = Self::build_filter(&request)?;
        let dependencies = self.build_packages(&manifest.dependencies, filter.as_ref());
        let dev_dependencies = self.build_packages(&manifest.dev_dependencies, filter.as_ref());
        if let Some(filter) = &filter {
            self.report_unmatched_patterns(filter);
        }

        // Step 5: Look up latest versions concurrently
        let total_packages = dependencies.len() + dev_dependencies.len();
        let (dependencies, dev_dependencies, lookup_failures) = self
            .check_latest_versions(
                manager,
                dependencies,
                dev_dependencies,
                request.lookup_timeout,
            )
            .await;

        Ok(OutdatedReport {
            package_manager: manager,
            dependencies,
            dev_dependencies,
            total_packages,
            lookup_failures,
        })
    }

    fn read_and_report_manifest(&self, request: &CheckRequest) -> Result<PackageManifest> {
        self.progress_reporter.report(&format!(
            "📖 Loading package.json from: {}",
            request.project_path.display()
        ));

        let manifest = self.manifest_reader.read_manifest(&request.project_path)?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} dependencies and {} devDependencies",
            manifest.dependencies.len(),
            manifest.dev_dependencies.len()
        ));

        Ok(manifest)
    }

    fn resolve_package_manager(
        &self,
        request: &CheckRequest,
        manifest: &PackageManifest,
    ) -> PackageManager {
        let resolution = PackageManagerResolver::resolve(
            request.package_manager,
            manifest.package_manager.as_deref(),
            |file_name| {
                self.manifest_reader
                    .has_file(&request.project_path, file_name)
            },
        );

        if let Some(warning) = &resolution.warning {
            self.progress_reporter.report_error(warning);
        }

        match resolution.source {
            ResolutionSource::Lockfile(lockfile) => self.progress_reporter.report(&format!(
                "📦 Package manager detected from {}: {}",
                lockfile, resolution.manager
            )),
            ResolutionSource::Default => self.progress_reporter.report(&format!(
                "📦 No lockfile found, defaulting to {}",
                resolution.manager
            )),
            ResolutionSource::Explicit | ResolutionSource::ManifestField => {
                debug!(manager = %resolution.manager, source = ?resolution.source, "package manager resolved")
            }
        }

        resolution.manager
    }

    fn ensure_package_manager_available(&self, manager: PackageManager) -> Result<()> {
        if !self.binary_locator.is_available(manager.binary()) {
            return Err(OutdatedError::PackageManagerNotFound {
                binary: manager.binary().to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn build_filter(request: &CheckRequest) -> Result<Option<PackageFilter>> {
        if request.exclude_patterns.is_empty() {
            return Ok(None);
        }
        PackageFilter::new(request.exclude_patterns.clone())
            .map(Some)
            .map_err(|e| {
                OutdatedError::Validation {
                    message: e.to_string(),
                }
                .into()
            })
    }

    /// Sanitizes declared versions and drops excluded or unusable entries
    fn build_packages(
        &self,
        declared: &BTreeMap<String, String>,
        filter: Option<&PackageFilter>,
    ) -> Vec<Package> {
        let mut packages = Vec::with_capacity(declared.len());
        for (name, version) in declared {
            match Package::new(name.clone(), VersionClassifier::sanitize(version)) {
                Ok(package) => packages.push(package),
                Err(e) => self
                    .progress_reporter
                    .report_error(&format!("⚠️  Warning: Skipping '{}': {}", name, e)),
            }
        }

        match filter {
            Some(filter) => {
                let before = packages.len();
                let packages = filter.filter_packages(packages);
                let excluded = before - packages.len();
                if excluded > 0 {
                    self.progress_reporter.report(&format!(
                        "🚫 Excluded {} package(s) based on filters",
                        excluded
                    ));
                }
                packages
            }
            None => packages,
        }
    }

    fn report_unmatched_patterns(&self, filter: &PackageFilter) {
        for pattern in filter.unmatched_patterns() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Exclude pattern '{}' did not match any dependencies.",
                pattern
            ));
        }
    }

    /// Runs both batches through one pool and returns the sorted outdated rows
    async fn check_latest_versions(
        &self,
        manager: PackageManager,
        dependencies: Vec<Package>,
        dev_dependencies: Vec<Package>,
        lookup_timeout: Option<Duration>,
    ) -> (Vec<OutdatedRow>, Vec<OutdatedRow>, Vec<(String, String)>) {
        let total = dependencies.len() + dev_dependencies.len();
        if total == 0 {
            return (Vec::new(), Vec::new(), Vec::new());
        }

        self.progress_reporter.report(&format!(
            "🔍 Checking latest versions with {}...",
            manager
        ));

        let pool = DispatchPool::new(Arc::clone(&self.version_lookup), manager)
            .with_lookup_timeout(lookup_timeout);
        let dependency_rows: SharedRows = Arc::default();
        let dev_dependency_rows: SharedRows = Arc::default();

        pool.submit(
            dependencies,
            self.progress_callback(DependencyKind::Dependency, total, Arc::clone(&dependency_rows)),
        );
        pool.submit(
            dev_dependencies,
            self.progress_callback(
                DependencyKind::DevDependency,
                total,
                Arc::clone(&dev_dependency_rows),
            ),
        );
        pool.join().await;

        let lookup_failures = pool.lookup_failures();
        for (package, error) in &lookup_failures {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Failed to fetch the latest version of {}: {}",
                package, error
            ));
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Version check complete: {} package(s) checked, {} lookup(s) failed",
            total,
            lookup_failures.len()
        ));

        (
            take_sorted(&dependency_rows),
            take_sorted(&dev_dependency_rows),
            lookup_failures,
        )
    }

    /// Callback for one batch: drives the progress bar and records outdated rows
    fn progress_callback(
        &self,
        kind: DependencyKind,
        total: usize,
        rows: SharedRows,
    ) -> impl Fn(ProgressEvent) + Send + Sync + 'static {
        let reporter = Arc::clone(&self.progress_reporter);
        move |event: ProgressEvent| {
            let completed = usize::try_from(event.sequence).unwrap_or_default();
            reporter.report_progress(completed, total, Some(&event.name));

            if !event.is_outdated {
                return;
            }

            let formatted_latest =
                VersionClassifier::format_comparison(&event.current, &event.latest)
                    .unwrap_or_else(|e| {
                        debug!(package = %event.name, ?kind, error = %e, "showing unformatted latest version");
                        event.latest.clone()
                    });

            rows.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(OutdatedRow {
                    name: event.name,
                    current: event.current,
                    latest: event.latest,
                    formatted_latest,
                });
        }
    }
}

fn take_sorted(rows: &SharedRows) -> Vec<OutdatedRow> {
    let mut rows = std::mem::take(&mut *rows.lock().unwrap_or_else(PoisonError::into_inner));
    rows.sort_by(|a, b| a.name.cmp(&b.name));
    rows
}

#[cfg(test)]
mod tests;
