/// Result of one package lookup, delivered to the progress callback
///
/// `sequence` is unique and strictly increasing across every batch that
/// shares a pool, but follows completion order rather than submission order.
/// A failed lookup is reported with an empty `latest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEvent {
    pub name: String,
    pub current: String,
    pub latest: String,
    pub is_outdated: bool,
    pub sequence: i64,
}

impl ProgressEvent {
    /// Whether the registry lookup for this package failed
    pub fn lookup_failed(&self) -> bool {
        self.latest.is_empty()
    }
}
