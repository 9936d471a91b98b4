use crate::normalize::Keyword;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

/// One keyword hit: the document it occurred in and how many times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub document: String,
    pub frequency: u32,
}

impl Occurrence {
    pub fn new(document: impl Into<String>, frequency: u32) -> Self {
        Self {
            document: document.into(),
            frequency,
        }
    }
}

/// Occurrences of one keyword, ordered by non-increasing frequency.
///
/// The vector is private: lists are created and grown only through
/// `Index::merge_document`, so the ordering invariant cannot be broken
/// from outside.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct PostingList {
    entries: Vec<Occurrence>,
}

impl PostingList {
    fn single(occurrence: Occurrence) -> Self {
        Self {
            entries: vec![occurrence],
        }
    }

    pub fn entries(&self) -> &[Occurrence] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends `occurrence`, then moves it into its frequency slot.
    ///
    /// Returns the midpoints the placement search probed, oldest first, or
    /// `None` when the list held no prior entry and no search ran. An empty
    /// trace means the searched prefix was a single entry.
    pub fn insert_descending(&mut self, occurrence: Occurrence) -> Option<Vec<usize>> {
        self.entries.push(occurrence);
        if self.entries.len() == 1 {
            return None;
        }
        let (slot, midpoints) = locate_slot(&self.entries);
        let appended = self.entries.remove(self.entries.len() - 1);
        self.entries.insert(slot, appended);
        Some(midpoints)
    }
}

/// Binary-searches the sorted prefix (all but the appended last entry) for
/// where that entry belongs, recording every probed midpoint.
///
/// A probe that lands on an equal frequency ends the search with the slot
/// right after it. Otherwise the converged `lo` is the slot, shifted one
/// right when the entry there outranks the newcomer. Equal neighbours the
/// search never probes stay after the newcomer.
fn locate_slot(entries: &[Occurrence]) -> (usize, Vec<usize>) {
    let target = entries[entries.len() - 1].frequency;
    let mut lo = 0;
    let mut hi = entries.len() - 2;
    let mut midpoints = Vec::new();
    while lo < hi {
        let mid = (lo + hi) / 2;
        midpoints.push(mid);
        let probed = entries[mid].frequency;
        if probed == target {
            return (mid + 1, midpoints);
        }
        if probed > target {
            lo = mid + 1;
        } else {
            // mid can be 0 only when lo is 0, where the loop ends regardless
            hi = mid.saturating_sub(1);
        }
    }
    let slot = if entries[lo].frequency > target {
        lo + 1
    } else {
        lo
    };
    (slot, midpoints)
}

/// The global index: every keyword seen so far maps to its posting list.
#[derive(Debug, Default, Serialize)]
pub struct Index {
    keywords: HashMap<Keyword, PostingList>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one document's keyword map into the index.
    ///
    /// Unknown keywords start a fresh single-entry list; known keywords get
    /// the occurrence placed into frequency order. This is the only path
    /// that creates or reorders posting lists.
    pub fn merge_document(&mut self, keywords: HashMap<Keyword, Occurrence>) {
        for (keyword, occurrence) in keywords {
            match self.keywords.entry(keyword) {
                Entry::Occupied(mut entry) => {
                    entry.get_mut().insert_descending(occurrence);
                }
                Entry::Vacant(entry) => {
                    entry.insert(PostingList::single(occurrence));
                }
            }
        }
    }

    pub fn postings(&self, keyword: &str) -> Option<&PostingList> {
        self.keywords.get(keyword)
    }

    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Keyword-sorted copy of the whole mapping, for inspection and dumps.
    pub fn snapshot(&self) -> BTreeMap<Keyword, Vec<Occurrence>> {
        self.keywords
            .iter()
            .map(|(keyword, list)| (keyword.clone(), list.entries.to_vec()))
            .collect()
    }
}
