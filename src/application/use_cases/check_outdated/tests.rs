use super::*;
use crate::shared::error::LookupError;
use async_trait::async_trait;
use owo_colors::OwoColorize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

// Mock implementations for testing
struct MockManifestReader {
    manifest: Option<PackageManifest>,
    files: Vec<&'static str>,
}

impl MockManifestReader {
    fn new(manifest: PackageManifest) -> Self {
        Self {
            manifest: Some(manifest),
            files: Vec::new(),
        }
    }

    fn with_files(mut self, files: &[&'static str]) -> Self {
        self.files = files.to_vec();
        self
    }
}

impl ManifestReader for MockManifestReader {
    fn read_manifest(&self, project_path: &Path) -> Result<PackageManifest> {
        self.manifest.clone().ok_or_else(|| {
            OutdatedError::ManifestNotFound {
                path: project_path.join("package.json"),
                suggestion: "Create a package.json first".to_string(),
            }
            .into()
        })
    }

    fn has_file(&self, _project_path: &Path, file_name: &str) -> bool {
        self.files.contains(&file_name)
    }
}

#[derive(Clone, Default)]
struct MockVersionLookup {
    versions: HashMap<String, String>,
    calls: Arc<Mutex<Vec<(PackageManager, String)>>>,
}

impl MockVersionLookup {
    fn with_versions(versions: &[(&str, &str)]) -> Self {
        Self {
            versions: versions
                .iter()
                .map(|(name, version)| (name.to_string(), version.to_string()))
                .collect(),
            calls: Arc::default(),
        }
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
        self.versions
            .get(package_name)
            .cloned()
            .ok_or_else(|| LookupError::MissingLatestTag {
                package: package_name.to_string(),
            })
    }
}

struct MockBinaryLocator {
    available: Vec<&'static str>,
}

impl MockBinaryLocator {
    fn all() -> Self {
        Self {
            available: vec!["npm", "pnpm", "yarn"],
        }
    }
}

impl BinaryLocator for MockBinaryLocator {
    fn is_available(&self, binary: &str) -> bool {
        self.available.contains(&binary)
    }
}

#[derive(Clone, Default)]
struct MockProgressReporter {
    messages: Arc<Mutex<Vec<String>>>,
    errors: Arc<Mutex<Vec<String>>>,
    progress: Arc<Mutex<Vec<(usize, usize)>>>,
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
        self.progress.lock().unwrap().push((current, total));
    }

    fn report_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

fn manifest(dependencies: &[(&str, &str)], dev_dependencies: &[(&str, &str)]) -> PackageManifest {
    let to_map = |entries: &[(&str, &str)]| {
        entries
            .iter()
            .map(|(name, version)| (name.to_string(), version.to_string()))
            .collect()
    };
    PackageManifest {
        package_manager: None,
        dependencies: to_map(dependencies),
        dev_dependencies: to_map(dev_dependencies),
    }
}

fn request() -> CheckRequest {
    CheckRequest::new(PathBuf::from("/project"))
}

#[tokio::test]
async fn test_execute_reports_outdated_dependency() {
    let use_case = CheckOutdatedUseCase::new(
        MockManifestReader::new(manifest(&[("lodash", "^4.17.20")], &[])),
        MockVersionLookup::with_versions(&[("lodash", "4.17.21")]),
        MockBinaryLocator::all(),
        MockProgressReporter::default(),
    );

    let report = use_case.execute(request()).await.unwrap();

    assert_eq!(report.package_manager, PackageManager::Npm);
    assert_eq!(report.total_packages, 1);
    assert_eq!(report.dependencies.len(), 1);
    let row = &report.dependencies[0];
    assert_eq!(row.name, "lodash");
    assert_eq!(row.current, "4.17.20");
    assert_eq!(row.latest, "4.17.21");
    assert_eq!(row.formatted_latest, format!("4.17.{}", "21".green()));
    assert!(report.dev_dependencies.is_empty());
    assert!(report.lookup_failures.is_empty());
}

#[tokio::test]
async fn test_execute_up_to_date_package_produces_no_row() {
    let use_case = CheckOutdatedUseCase::new(
        MockManifestReader::new(manifest(&[("react", "18.2.0")], &[])),
        MockVersionLookup::with_versions(&[("react", "18.2.0")]),
        MockBinaryLocator::all(),
        MockProgressReporter::default(),
    );

    let report = use_case.execute(request()).await.unwrap();

    assert!(!report.has_outdated());
    assert_eq!(report.total_packages, 1);
}

#[tokio::test]
async fn test_execute_failed_lookup_is_reported_as_outdated() {
    let reporter = MockProgressReporter::default();
    let use_case = CheckOutdatedUseCase::new(
        MockManifestReader::new(manifest(&[("left-pad", "1.3.0")], &[])),
        MockVersionLookup::default(),
        MockBinaryLocator::all(),
        reporter.clone(),
    );

    let report = use_case.execute(request()).await.unwrap();

    assert_eq!(report.dependencies.len(), 1);
    let row = &report.dependencies[0];
    assert_eq!(row.latest, "");
    assert_eq!(row.formatted_latest, "");
    assert_eq!(report.lookup_failures.len(), 1);
    assert_eq!(report.lookup_failures[0].0, "left-pad");

    let errors = reporter.errors.lock().unwrap();
    assert!(errors.iter().any(|e| e.contains("left-pad")));
}

#[tokio::test]
async fn test_execute_splits_and_sorts_dependency_kinds() {
    let use_case = CheckOutdatedUseCase::new(
        MockManifestReader::new(manifest(
            &[("zod", "3.0.0"), ("axios", "0.27.0")],
            &[("vitest", "0.34.0"), ("eslint", "8.0.0")],
        )),
        MockVersionLookup::with_versions(&[
            ("zod", "3.23.8"),
            ("axios", "1.7.2"),
            ("vitest", "1.6.0"),
            ("eslint", "9.4.0"),
        ]),
        MockBinaryLocator::all(),
        MockProgressReporter::default(),
    );

    let report = use_case.execute(request()).await.unwrap();

    let names = |rows: &[OutdatedRow]| rows.iter().map(|r| r.name.clone()).collect::<Vec<_>>();
    assert_eq!(names(&report.dependencies), vec!["axios", "zod"]);
    assert_eq!(names(&report.dev_dependencies), vec!["eslint", "vitest"]);
    assert_eq!(report.total_packages, 4);
    assert_eq!(report.outdated_count(), 4);
}

#[tokio::test]
async fn test_execute_progress_counts_up_to_total() {
    let reporter = MockProgressReporter::default();
    let use_case = CheckOutdatedUseCase::new(
        MockManifestReader::new(manifest(
            &[("a", "1.0.0"), ("b", "1.0.0")],
            &[("c", "1.0.0")],
        )),
        MockVersionLookup::with_versions(&[("a", "1.0.0"), ("b", "1.0.0"), ("c", "1.0.0")]),
        MockBinaryLocator::all(),
        reporter.clone(),
    );

    use_case.execute(request()).await.unwrap();

    let mut progress = reporter.progress.lock().unwrap().clone();
    progress.sort();
    assert_eq!(progress, vec![(1, 3), (2, 3), (3, 3)]);
}

#[tokio::test]
async fn test_execute_fails_when_binary_missing() {
    let lookup = MockVersionLookup::with_versions(&[("lodash", "4.17.21")]);
    let calls = Arc::clone(&lookup.calls);
    let use_case = CheckOutdatedUseCase::new(
        MockManifestReader::new(manifest(&[("lodash", "4.17.20")], &[]))
            .with_files(&["pnpm-lock.yaml"]),
        lookup,
        MockBinaryLocator {
            available: vec!["npm"],
        },
        MockProgressReporter::default(),
    );

    let error = use_case.execute(request()).await.unwrap_err();

    assert!(error.to_string().contains("'pnpm' not found"));
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_execute_uses_explicit_package_manager() {
    let lookup = MockVersionLookup::with_versions(&[("lodash", "4.17.21")]);
    let calls = Arc::clone(&lookup.calls);
    let use_case = CheckOutdatedUseCase::new(
        MockManifestReader::new(manifest(&[("lodash", "4.17.20")], &[]))
            .with_files(&["pnpm-lock.yaml"]),
        lookup,
        MockBinaryLocator::all(),
        MockProgressReporter::default(),
    );

    let report = use_case
        .execute(request().with_package_manager(Some(PackageManager::Yarn)))
        .await
        .unwrap();

    assert_eq!(report.package_manager, PackageManager::Yarn);
    assert_eq!(
        calls.lock().unwrap().as_slice(),
        &[(PackageManager::Yarn, "lodash".to_string())]
    );
}

#[tokio::test]
async fn test_execute_detects_package_manager_from_lockfile() {
    let reporter = MockProgressReporter::default();
    let use_case = CheckOutdatedUseCase::new(
        MockManifestReader::new(manifest(&[], &[])).with_files(&["yarn.lock"]),
        MockVersionLookup::default(),
        MockBinaryLocator::all(),
        reporter.clone(),
    );

    let report = use_case.execute(request()).await.unwrap();

    assert_eq!(report.package_manager, PackageManager::Yarn);
    let messages = reporter.messages.lock().unwrap();
    assert!(messages.iter().any(|m| m.contains("yarn.lock")));
}

#[tokio::test]
async fn test_execute_uses_manifest_package_manager_field() {
    let mut manifest = manifest(&[], &[]);
    manifest.package_manager = Some("pnpm@8.15.4".to_string());
    let use_case = CheckOutdatedUseCase::new(
        MockManifestReader::new(manifest).with_files(&["package-lock.json"]),
        MockVersionLookup::default(),
        MockBinaryLocator::all(),
        MockProgressReporter::default(),
    );

    let report = use_case.execute(request()).await.unwrap();

    assert_eq!(report.package_manager, PackageManager::Pnpm);
}

#[tokio::test]
async fn test_execute_warns_on_unknown_manifest_package_manager() {
    let mut manifest = manifest(&[], &[]);
    manifest.package_manager = Some("bun@1.1.0".to_string());
    let reporter = MockProgressReporter::default();
    let use_case = CheckOutdatedUseCase::new(
        MockManifestReader::new(manifest),
        MockVersionLookup::default(),
        MockBinaryLocator::all(),
        reporter.clone(),
    );

    let report = use_case.execute(request()).await.unwrap();

    assert_eq!(report.package_manager, PackageManager::Npm);
    let errors = reporter.errors.lock().unwrap();
    assert!(errors.iter().any(|e| e.contains("bun@1.1.0")));
}

#[tokio::test]
async fn test_execute_applies_exclusions() {
    let lookup = MockVersionLookup::with_versions(&[("vite", "5.2.0")]);
    let calls = Arc::clone(&lookup.calls);
    let reporter = MockProgressReporter::default();
    let use_case = CheckOutdatedUseCase::new(
        MockManifestReader::new(manifest(
            &[("vite", "4.0.0")],
            &[("@types/node", "18.0.0"), ("@types/react", "18.0.0")],
        )),
        lookup,
        MockBinaryLocator::all(),
        reporter.clone(),
    );

    let report = use_case
        .execute(request().with_exclude_patterns(vec![
            "@types/*".to_string(),
            "left-pad".to_string(),
        ]))
        .await
        .unwrap();

    assert_eq!(report.total_packages, 1);
    assert_eq!(calls.lock().unwrap().len(), 1);
    assert!(report.dev_dependencies.is_empty());

    let errors = reporter.errors.lock().unwrap();
    assert!(errors
        .iter()
        .any(|e| e.contains("'left-pad' did not match")));
}

#[tokio::test]
async fn test_execute_rejects_invalid_exclusion_pattern() {
    let use_case = CheckOutdatedUseCase::new(
        MockManifestReader::new(manifest(&[("vite", "4.0.0")], &[])),
        MockVersionLookup::default(),
        MockBinaryLocator::all(),
        MockProgressReporter::default(),
    );

    let result = use_case
        .execute(request().with_exclude_patterns(vec!["bad pattern".to_string()]))
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_execute_propagates_manifest_error() {
    let use_case = CheckOutdatedUseCase::new(
        MockManifestReader {
            manifest: None,
            files: Vec::new(),
        },
        MockVersionLookup::default(),
        MockBinaryLocator::all(),
        MockProgressReporter::default(),
    );

    let error = use_case.execute(request()).await.unwrap_err();

    assert!(error.downcast_ref::<OutdatedError>().is_some());
}

#[tokio::test]
async fn test_execute_skips_invalid_package_names() {
    let lookup = MockVersionLookup::with_versions(&[("lodash", "4.17.20")]);
    let calls = Arc::clone(&lookup.calls);
    let reporter = MockProgressReporter::default();
    let use_case = CheckOutdatedUseCase::new(
        MockManifestReader::new(manifest(&[("lodash", "4.17.20"), ("--evil", "1.0.0")], &[])),
        lookup,
        MockBinaryLocator::all(),
        reporter.clone(),
    );

    let report = use_case.execute(request()).await.unwrap();

    assert_eq!(report.total_packages, 1);
    assert_eq!(calls.lock().unwrap().len(), 1);
    assert!(reporter
        .errors
        .lock()
        .unwrap()
        .iter()
        .any(|e| e.contains("--evil")));
}

#[tokio::test]
async fn test_execute_marks_prerelease_latest() {
    let use_case = CheckOutdatedUseCase::new(
        MockManifestReader::new(manifest(&[("next", "14.2.0")], &[])),
        MockVersionLookup::with_versions(&[("next", "15.0.0-rc.0")]),
        MockBinaryLocator::all(),
        MockProgressReporter::default(),
    );

    let report = use_case.execute(request()).await.unwrap();

    assert_eq!(
        report.dependencies[0].formatted_latest,
        format!("{} (pre-release)", "15.0.0-rc.0".yellow())
    );
}

#[tokio::test]
async fn test_execute_unparsable_current_falls_back_to_raw_latest() {
    let use_case = CheckOutdatedUseCase::new(
        MockManifestReader::new(manifest(&[("my-lib", "github:me/my-lib")], &[])),
        MockVersionLookup::with_versions(&[("my-lib", "2.0.0")]),
        MockBinaryLocator::all(),
        MockProgressReporter::default(),
    );

    let report = use_case.execute(request()).await.unwrap();

    assert_eq!(report.dependencies[0].formatted_latest, "2.0.0");
}

#[tokio::test]
async fn test_execute_empty_manifest_skips_dispatch() {
    let reporter = MockProgressReporter::default();
    let use_case = CheckOutdatedUseCase::new(
        MockManifestReader::new(manifest(&[], &[])),
        MockVersionLookup::default(),
        MockBinaryLocator::all(),
        reporter.clone(),
    );

    let report = use_case.execute(request()).await.unwrap();

    assert_eq!(report.total_packages, 0);
    assert!(!report.has_outdated());
    assert!(reporter.progress.lock().unwrap().is_empty());
}
