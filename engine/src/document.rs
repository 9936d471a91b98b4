use crate::index::Occurrence;
use crate::normalize::{Keyword, Normalizer};
use std::collections::HashMap;

/// Scans one document's token stream into a keyword to occurrence map.
///
/// Every accepted token bumps the occurrence bound to `document`; rejected
/// tokens contribute nothing. The global index is untouched, merging the
/// returned map is a separate step.
pub fn scan_document<I>(
    document: &str,
    tokens: I,
    normalizer: &Normalizer,
) -> HashMap<Keyword, Occurrence>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut found: HashMap<Keyword, Occurrence> = HashMap::new();
    for token in tokens {
        if let Some(keyword) = normalizer.normalize(token.as_ref()) {
            found
                .entry(keyword)
                .and_modify(|occurrence| occurrence.frequency += 1)
                .or_insert_with(|| Occurrence::new(document, 1));
        }
    }
    found
}
