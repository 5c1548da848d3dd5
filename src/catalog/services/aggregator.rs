use crate::catalog::domain::LibraryRecord;
use std::cmp::Ordering;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// A resolved library record together with the search hit it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub source_id: String,
    pub record: LibraryRecord,
}

impl Candidate {
    pub fn new(source_id: impl Into<String>, record: LibraryRecord) -> Self {
        Self {
            source_id: source_id.into(),
            record,
        }
    }

    /// Ordering used to pick one candidate per path: more versions wins,
    /// then the lexicographically smaller source hit id.
    fn preference(&self, other: &Candidate) -> Ordering {
        self.record
            .versions()
            .len()
            .cmp(&other.record.versions().len())
            .then_with(|| other.source_id.cmp(&self.source_id))
    }
}

/// Aggregator service producing the final record list.
///
/// Several search hits (for example the root module and its platform
/// modules) resolve to the same canonical path; exactly one record per path
/// survives. The winner does not depend on the order in which concurrent
/// resolutions finished.
pub struct Aggregator;

impl Aggregator {
    /// Deduplicates by `path` and sorts the survivors by `path`.
    pub fn aggregate(candidates: impl IntoIterator<Item = Candidate>) -> Vec<LibraryRecord> {
        let mut by_path: BTreeMap<String, Candidate> = BTreeMap::new();

        for candidate in candidates {
            match by_path.entry(candidate.record.path().to_string()) {
                Entry::Vacant(slot) => {
                    slot.insert(candidate);
                }
                Entry::Occupied(mut slot) => {
                    if candidate.preference(slot.get()) == Ordering::Greater {
                        slot.insert(candidate);
                    }
                }
            }
        }

        by_path
            .into_values()
            .map(|candidate| candidate.record)
            .collect()
    }
}
