use crate::document::scan_document;
use crate::index::{Index, Occurrence};
use crate::normalize::{Keyword, NoiseWords, Normalizer};
use crate::query;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use tracing::debug;

/// Shared handle over the index: one writer during merges, any number of
/// concurrent readers during queries.
pub struct SearchEngine {
    normalizer: Normalizer,
    index: RwLock<Index>,
}

impl SearchEngine {
    pub fn new(noise_words: NoiseWords) -> Self {
        Self {
            normalizer: Normalizer::new(noise_words),
            index: RwLock::new(Index::new()),
        }
    }

    /// Scans one document and merges it into the index.
    ///
    /// Scanning runs outside the lock; only the merge takes the write lock.
    /// Returns the number of distinct keywords the document contributed.
    pub fn index_document<I>(&self, document: &str, tokens: I) -> usize
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let keywords = scan_document(document, tokens, &self.normalizer);
        let contributed = keywords.len();
        if !keywords.is_empty() {
            self.index.write().merge_document(keywords);
        }
        debug!(document, keywords = contributed, "indexed document");
        contributed
    }

    /// Ranked OR search over two keywords; at most five documents.
    pub fn top5(&self, keyword1: &str, keyword2: &str) -> Option<Vec<String>> {
        query::top5(&self.index.read(), keyword1, keyword2)
    }

    pub fn keyword_count(&self) -> usize {
        self.index.read().keyword_count()
    }

    /// Keyword-sorted view of the index, for inspection and dumps.
    pub fn snapshot(&self) -> BTreeMap<Keyword, Vec<Occurrence>> {
        self.index.read().snapshot()
    }
}
