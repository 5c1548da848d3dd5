use super::Coordinate;

/// One entry of a catalog search page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub id: String,
    pub group: String,
    pub artifact: String,
    pub version: String,
    pub packaging: String,
    /// Publication time in epoch milliseconds.
    pub timestamp: i64,
}

impl SearchHit {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(&self.group, &self.artifact, &self.version)
    }
}
