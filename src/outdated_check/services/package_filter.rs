use crate::outdated_check::domain::Package;
use crate::shared::Result;
use std::cell::Cell;

/// Maximum number of exclude patterns
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclude pattern
const MAX_PATTERN_LENGTH: usize = 255;

/// PackageFilter - Removes packages matching exclusion patterns before lookup
///
/// `*` matches zero or more characters; everything else is literal and
/// case-sensitive. `@types/*` excludes every DefinitelyTyped package.
#[derive(Debug)]
pub struct PackageFilter {
    patterns: Vec<ExcludePattern>,
}

impl PackageFilter {
    /// Creates a filter from raw pattern strings
    ///
    /// # Errors
    /// - More than `MAX_EXCLUDE_PATTERNS` patterns
    /// - An empty, overlong, wildcard-only or otherwise invalid pattern
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            anyhow::bail!(
                "Too many exclusion patterns: {} (maximum: {})",
                patterns.len(),
                MAX_EXCLUDE_PATTERNS
            );
        }

        let patterns = patterns
            .into_iter()
            .map(ExcludePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Returns only the packages that match no pattern
    pub fn filter_packages(&self, packages: Vec<Package>) -> Vec<Package> {
        packages
            .into_iter()
            .filter(|pkg| !self.matches(pkg.name()))
            .collect()
    }

    fn matches(&self, package_name: &str) -> bool {
        // Evaluate every pattern so each one records whether it was used
        self.patterns
            .iter()
            .fold(false, |hit, p| p.matches(package_name) || hit)
    }

    /// Patterns that have not matched any package filtered so far
    pub fn unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| p.original.clone())
            .collect()
    }
}

#[derive(Debug)]
struct ExcludePattern {
    original: String,
    segments: Vec<String>,
    matched: Cell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;
        let segments = pattern.split('*').map(str::to_string).collect();
        Ok(Self {
            original: pattern,
            segments,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, package_name: &str) -> bool {
        let is_match = glob_matches(&self.segments, package_name);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }
}

/// Matches `name` against a pattern pre-split on `*`
///
/// The first segment is anchored at the start, the last at the end, and the
/// ones in between must appear in order.
fn glob_matches(segments: &[String], name: &str) -> bool {
    let [first, rest @ ..] = segments else {
        return false;
    };
    let Some(mut remaining) = name.strip_prefix(first.as_str()) else {
        return false;
    };
    let Some((last, middle)) = rest.split_last() else {
        return remaining.is_empty();
    };

    for part in middle {
        match remaining.find(part.as_str()) {
            Some(pos) => remaining = &remaining[pos + part.len()..],
            None => return false,
        }
    }
    remaining.ends_with(last.as_str())
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        anyhow::bail!("Exclusion pattern cannot be empty");
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        anyhow::bail!(
            "Exclusion pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        );
    }

    if let Some(ch) = pattern.chars().find(|c| !is_valid_pattern_char(*c)) {
        anyhow::bail!(
            "Exclusion pattern contains invalid character '{}' in pattern '{}'. \
             Only alphanumeric, hyphens, underscores, dots, tildes, '@', '/' and asterisks (*) are allowed.",
            ch,
            pattern
        );
    }

    if pattern.chars().all(|c| c == '*') {
        anyhow::bail!(
            "Exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        );
    }

    Ok(())
}

fn is_valid_pattern_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~' | '@' | '/' | '*')
}
