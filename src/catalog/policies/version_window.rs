use std::collections::HashSet;

/// VersionWindow policy bounding how many releases of a library are resolved.
///
/// Resolving a release costs at least one descriptor fetch plus the variant
/// walk, so only the most recent releases are resolved by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionWindow {
    /// The last `n` distinct versions of the history.
    Recent(usize),
    All,
}

impl VersionWindow {
    pub const DEFAULT_SIZE: usize = 5;

    /// `0` selects every version.
    pub fn from_size(size: usize) -> Self {
        if size == 0 {
            VersionWindow::All
        } else {
            VersionWindow::Recent(size)
        }
    }

    /// Versions to resolve, in history order.
    ///
    /// Duplicate version strings keep their first occurrence before the window
    /// is applied.
    pub fn select(&self, versions: &[String]) -> Vec<String> {
        let mut seen = HashSet::new();
        let distinct: Vec<String> = versions
            .iter()
            .filter(|version| seen.insert(version.as_str()))
            .cloned()
            .collect();

        match self {
            VersionWindow::All => distinct,
            VersionWindow::Recent(size) => {
                let skip = distinct.len().saturating_sub(*size);
                distinct.into_iter().skip(skip).collect()
            }
        }
    }
}

impl Default for VersionWindow {
    fn default() -> Self {
        VersionWindow::Recent(Self::DEFAULT_SIZE)
    }
}
