//! In-memory keyword search. Documents are folded into an inverted index
//! whose posting lists stay sorted by descending frequency; two-keyword OR
//! queries return at most five ranked documents.

pub mod corpus;
pub mod document;
pub mod index;
pub mod normalize;
pub mod query;
pub mod search;

pub use corpus::{build_from_files, BuildStats};
pub use document::scan_document;
pub use index::{Index, Occurrence, PostingList};
pub use normalize::{Keyword, NoiseWords, Normalizer};
pub use query::{top5, RESULT_LIMIT};
pub use search::SearchEngine;
