/// Relationship between a declared version and the latest published one
///
/// Exactly one variant applies per comparison. `LatestIsPrerelease` takes
/// priority over every numeric comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionDiff {
    None,
    Patch,
    Minor,
    Major,
    CurrentIsLatest,
    LatestIsPrerelease,
}

/// Display emphasis applied to the relevant version segments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Safe,
    Caution,
    Danger,
}

impl VersionDiff {
    /// The emphasis used when rendering this difference, if any
    pub fn emphasis(self) -> Option<Emphasis> {
        match self {
            VersionDiff::None => None,
            VersionDiff::Patch | VersionDiff::CurrentIsLatest => Some(Emphasis::Safe),
            VersionDiff::Minor | VersionDiff::LatestIsPrerelease => Some(Emphasis::Caution),
            VersionDiff::Major => Some(Emphasis::Danger),
        }
    }
}
