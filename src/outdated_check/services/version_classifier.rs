use crate::outdated_check::domain::version_diff::Emphasis;
use crate::outdated_check::domain::VersionDiff;
use owo_colors::OwoColorize;
use std::fmt;
use thiserror::Error;

/// Range operators stripped from declared versions, longest first where prefixes overlap
const RANGE_OPERATORS: [&str; 7] = ["^", "~", ">=", "<=", ">", "<", "="];

/// Substrings that mark a version as not being a stable release (matched case-insensitively)
const PRERELEASE_MARKERS: [&str; 4] = ["-rc", ".rc", "-alpha", "-beta"];

/// Errors produced while parsing a strict `major.minor.patch` version
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("invalid version format: '{0}'")]
    InvalidFormat(String),

    #[error("invalid {component} version: '{value}'")]
    InvalidComponent {
        component: &'static str,
        value: String,
    },

    #[error("error parsing current version: {0}")]
    Current(Box<VersionError>),

    #[error("error parsing latest version: {0}")]
    Latest(Box<VersionError>),
}

/// A strictly parsed `major.minor.patch` triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionTriple {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl VersionTriple {
    /// Parses `[v]major.minor.patch[-anything]`
    ///
    /// Surrounding whitespace and one leading `v` are ignored, and everything
    /// from the first `-` on is discarded. Exactly three numeric components
    /// must remain.
    pub fn parse(version: &str) -> Result<Self, VersionError> {
        let trimmed = version.trim();
        let without_prefix = trimmed.strip_prefix('v').unwrap_or(trimmed);
        let numeric = match without_prefix.find('-') {
            Some(idx) => &without_prefix[..idx],
            None => without_prefix,
        };

        let parts: Vec<&str> = numeric.split('.').collect();
        let [major, minor, patch] = parts.as_slice() else {
            return Err(VersionError::InvalidFormat(numeric.to_string()));
        };

        Ok(Self {
            major: parse_component("major", major)?,
            minor: parse_component("minor", minor)?,
            patch: parse_component("patch", patch)?,
        })
    }
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

fn parse_component(component: &'static str, value: &str) -> Result<u64, VersionError> {
    value
        .parse::<u64>()
        .map_err(|_| VersionError::InvalidComponent {
            component,
            value: value.to_string(),
        })
}

/// VersionClassifier - turns a declared/latest version pair into a
/// severity and a colored display string
///
/// All functions are pure; nothing here touches shared state or I/O.
pub struct VersionClassifier;

impl VersionClassifier {
    /// Strips surrounding whitespace and at most one leading range operator
    ///
    /// `"^4.17.20"` becomes `"4.17.20"`, `">= 1.0.0"` becomes `"1.0.0"`.
    /// Input without an operator is only trimmed.
    pub fn sanitize(raw_version: &str) -> String {
        let trimmed = raw_version.trim();
        let stripped = RANGE_OPERATORS
            .iter()
            .find_map(|op| trimmed.strip_prefix(op))
            .unwrap_or(trimmed);
        stripped.trim().to_string()
    }

    /// Whether `version` carries a pre-release marker
    pub fn is_prerelease(version: &str) -> bool {
        let lowered = version.to_lowercase();
        PRERELEASE_MARKERS
            .iter()
            .any(|marker| lowered.contains(marker))
    }

    /// Classifies the difference between `current` and `latest`
    ///
    /// A pre-release `latest` wins before either side is parsed. Otherwise
    /// both must be strict `major.minor.patch` versions and the most
    /// significant differing component decides the result.
    ///
    /// # Errors
    /// Returns a [`VersionError`] if either version fails to parse
    pub fn classify(current: &str, latest: &str) -> Result<VersionDiff, VersionError> {
        if Self::is_prerelease(latest) {
            return Ok(VersionDiff::LatestIsPrerelease);
        }

        let current =
            VersionTriple::parse(current).map_err(|e| VersionError::Current(Box::new(e)))?;
        let latest = VersionTriple::parse(latest).map_err(|e| VersionError::Latest(Box::new(e)))?;

        if current == latest {
            return Ok(VersionDiff::CurrentIsLatest);
        }

        let diff = if current.major != latest.major {
            VersionDiff::Major
        } else if current.minor != latest.minor {
            VersionDiff::Minor
        } else {
            VersionDiff::Patch
        };
        Ok(diff)
    }

    /// Renders `latest` with the segments relevant to `diff` emphasized
    ///
    /// - `CurrentIsLatest`: whole version green, followed by `(up to date)`
    /// - `LatestIsPrerelease`: raw string yellow, followed by `(pre-release)`
    /// - `Patch`: only the patch number green
    /// - `Minor`: minor and patch yellow
    /// - `Major`: whole version red
    /// - `None`: `latest` unchanged
    ///
    /// # Errors
    /// Returns a [`VersionError`] if `latest` must be parsed and is not a
    /// strict `major.minor.patch` version
    pub fn render(latest: &str, diff: VersionDiff) -> Result<String, VersionError> {
        let Some(emphasis) = diff.emphasis() else {
            return Ok(latest.to_string());
        };

        if diff == VersionDiff::LatestIsPrerelease {
            return Ok(format!("{} (pre-release)", emphasize(latest, emphasis)));
        }

        let version = VersionTriple::parse(latest)?;
        let rendered = match diff {
            VersionDiff::CurrentIsLatest => {
                format!("{} (up to date)", emphasize(&version.to_string(), emphasis))
            }
            VersionDiff::Patch => format!(
                "{}.{}.{}",
                version.major,
                version.minor,
                emphasize(&version.patch.to_string(), emphasis)
            ),
            VersionDiff::Minor => format!(
                "{}.{}",
                version.major,
                emphasize(&format!("{}.{}", version.minor, version.patch), emphasis)
            ),
            _ => emphasize(&version.to_string(), emphasis),
        };
        Ok(rendered)
    }

    /// Classifies and renders in one step
    pub fn format_comparison(current: &str, latest: &str) -> Result<String, VersionError> {
        let diff = Self::classify(current, latest)?;
        Self::render(latest, diff)
    }
}

fn emphasize(text: &str, emphasis: Emphasis) -> String {
    match emphasis {
        Emphasis::Safe => text.green().to_string(),
        Emphasis::Caution => text.yellow().to_string(),
        Emphasis::Danger => text.red().to_string(),
    }
}
