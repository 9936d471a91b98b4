use crate::index::{Index, Occurrence};

/// Upper bound on the number of documents a query returns.
pub const RESULT_LIMIT: usize = 5;

/// Ranked "keyword1 OR keyword2" search over the index.
///
/// Walks both posting lists from their highest-frequency ends, emitting the
/// document with the strictly higher frequency at each step; an exact tie
/// emits from `keyword1`'s list. A document present in both lists appears
/// once and does not burn capacity twice. `None` only when neither keyword
/// is indexed.
pub fn top5(index: &Index, keyword1: &str, keyword2: &str) -> Option<Vec<String>> {
    let first = keyword1.trim().to_lowercase();
    let second = keyword2.trim().to_lowercase();
    match (index.postings(&first), index.postings(&second)) {
        (None, None) => None,
        (Some(only), None) | (None, Some(only)) => Some(leading_documents(only.entries())),
        (Some(left), Some(right)) => Some(merge_walk(left.entries(), right.entries())),
    }
}

/// The head of a single surviving list, already in rank order.
fn leading_documents(entries: &[Occurrence]) -> Vec<String> {
    entries
        .iter()
        .take(RESULT_LIMIT)
        .map(|occurrence| occurrence.document.clone())
        .collect()
}

/// Two-cursor bounded merge with cross-list deduplication.
fn merge_walk(left: &[Occurrence], right: &[Occurrence]) -> Vec<String> {
    let mut ranked: Vec<String> = Vec::with_capacity(RESULT_LIMIT);
    let mut i = 0;
    let mut j = 0;
    while ranked.len() < RESULT_LIMIT {
        let emitted = match (left.get(i), right.get(j)) {
            (None, None) => break,
            (Some(occurrence), None) => {
                i += 1;
                occurrence
            }
            (None, Some(occurrence)) => {
                j += 1;
                occurrence
            }
            (Some(a), Some(b)) => {
                if a.frequency >= b.frequency {
                    i += 1;
                    a
                } else {
                    j += 1;
                    b
                }
            }
        };
        if !ranked.iter().any(|document| document == &emitted.document) {
            ranked.push(emitted.document.clone());
        }
    }
    ranked
}
