use crate::normalize::NoiseWords;
use crate::search::SearchEngine;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Summary of one corpus build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildStats {
    pub documents: usize,
    pub keywords: usize,
}

/// Reads a noise-word file: whitespace-separated raw words.
pub fn load_noise_words(path: &Path) -> Result<NoiseWords> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("noise word source not found: {}", path.display()))?;
    Ok(NoiseWords::from_words(text.split_whitespace()))
}

/// Reads the ordered document list: whitespace-separated document names.
pub fn read_document_list(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("document list not found: {}", path.display()))?;
    Ok(text.split_whitespace().map(str::to_string).collect())
}

/// Indexes the named documents in the order given.
///
/// Each name is both the document identifier and the path read from disk;
/// file contents split on whitespace form the token stream. Duplicate names
/// are skipped so a document lands in a posting list at most once.
pub fn index_documents(engine: &SearchEngine, documents: &[String]) -> Result<BuildStats> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut indexed = 0;
    for name in documents {
        if !seen.insert(name.as_str()) {
            warn!(document = %name, "duplicate document entry skipped");
            continue;
        }
        let text = fs::read_to_string(name)
            .with_context(|| format!("document source not found: {name}"))?;
        engine.index_document(name, text.split_whitespace());
        indexed += 1;
    }
    Ok(BuildStats {
        documents: indexed,
        keywords: engine.keyword_count(),
    })
}

/// Builds a fresh engine from a document list file and an optional
/// noise-word file, falling back to the built-in list.
pub fn build_from_files(
    docs: &Path,
    noise_words: Option<&Path>,
) -> Result<(SearchEngine, BuildStats)> {
    let noise = match noise_words {
        Some(path) => load_noise_words(path)?,
        None => NoiseWords::builtin(),
    };
    let engine = SearchEngine::new(noise);
    let documents = read_document_list(docs)?;
    let stats = index_documents(&engine, &documents)?;
    info!(
        documents = stats.documents,
        keywords = stats.keywords,
        "index build complete"
    );
    Ok((engine, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn builds_from_list_and_noise_files() {
        let dir = tempdir().unwrap();
        let doc_a = dir.path().join("a.txt");
        let doc_b = dir.path().join("b.txt");
        fs::write(&doc_a, "orbit orbit orbit the lander").unwrap();
        fs::write(&doc_b, "orbit (lander) lander, the").unwrap();
        let noise = dir.path().join("noise.txt");
        fs::write(&noise, "the a an").unwrap();
        let docs = dir.path().join("docs.txt");
        fs::write(&docs, format!("{}\n{}\n", doc_a.display(), doc_b.display())).unwrap();

        let (engine, stats) = build_from_files(&docs, Some(&noise)).unwrap();
        assert_eq!(stats.documents, 2);
        assert_eq!(stats.keywords, 2);

        let hits = engine.top5("orbit", "lander").unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0], doc_a.display().to_string());
        assert_eq!(hits[1], doc_b.display().to_string());
    }

    #[test]
    fn missing_document_aborts_the_build() {
        let engine = SearchEngine::new(NoiseWords::default());
        let err = index_documents(&engine, &["no-such-document.txt".to_string()]).unwrap_err();
        assert!(format!("{err:#}").contains("document source not found"));
    }

    #[test]
    fn duplicate_names_are_indexed_once() {
        let dir = tempdir().unwrap();
        let doc = dir.path().join("dup.txt");
        fs::write(&doc, "echo echo").unwrap();
        let name = doc.display().to_string();

        let engine = SearchEngine::new(NoiseWords::default());
        let stats = index_documents(&engine, &[name.clone(), name]).unwrap();
        assert_eq!(stats.documents, 1);
        assert_eq!(engine.snapshot()["echo"].len(), 1);
    }

    #[test]
    fn missing_noise_source_is_an_error() {
        let err = load_noise_words(Path::new("no-such-noise.txt")).unwrap_err();
        assert!(format!("{err:#}").contains("noise word source not found"));
    }

    #[test]
    fn builtin_noise_words_apply_when_no_file_given() {
        let dir = tempdir().unwrap();
        let doc = dir.path().join("plain.txt");
        fs::write(&doc, "the cat and the hat").unwrap();
        let docs = dir.path().join("docs.txt");
        fs::write(&docs, doc.display().to_string()).unwrap();

        let (engine, stats) = build_from_files(&docs, None).unwrap();
        assert_eq!(stats.keywords, 2);
        assert!(engine.top5("the", "and").is_none());
        assert!(engine.top5("cat", "hat").is_some());
    }
}
