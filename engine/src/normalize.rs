use lazy_static::lazy_static;
use std::collections::HashSet;

/// A normalized index term: non-empty, lowercase, purely alphabetic.
pub type Keyword = String;

lazy_static! {
    static ref BUILTIN_NOISE_WORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","cannot","could",
            "did","do","does","doing","down","during",
            "each","few","for","from","further",
            "had","has","have","having","he","her","here","hers","herself","him","himself","his","how",
            "i","if","in","into","is","it","its","itself",
            "me","more","most","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","she","should","so","some","such",
            "than","that","the","their","theirs","them","themselves","then","there","these","they","this","those","through","to","too",
            "under","until","up","very",
            "was","we","were","what","when","where","which","while","who","whom","why","with","would",
            "you","your","yours","yourself","yourselves",
        ];
        words.iter().copied().collect()
    };
}

/// Case-folded noise words excluded from indexing.
#[derive(Debug, Clone, Default)]
pub struct NoiseWords {
    words: HashSet<String>,
}

impl NoiseWords {
    /// Builds a set from raw words, folding each entry to lowercase.
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// The bundled English list, for callers that bring no file of their own.
    pub fn builtin() -> Self {
        Self {
            words: BUILTIN_NOISE_WORDS.iter().map(|word| (*word).to_string()).collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Turns raw tokens into canonical keywords.
#[derive(Debug, Clone)]
pub struct Normalizer {
    noise: NoiseWords,
}

impl Normalizer {
    pub fn new(noise: NoiseWords) -> Self {
        Self { noise }
    }

    /// Normalize a raw token into a keyword, or reject it.
    ///
    /// The token is trimmed and lowercased, loses at most one leading `(`/`{`
    /// and one trailing `)`/`}`, then trailing sentence punctuation
    /// (`. , ? : ; !`) until a letter remains. Anything left that is empty,
    /// not purely alphabetic, or a noise word is rejected.
    pub fn normalize(&self, token: &str) -> Option<Keyword> {
        let mut word = token.trim().to_lowercase();
        if word.starts_with(['(', '{']) {
            word.remove(0);
        }
        if word.ends_with([')', '}']) {
            word.pop();
        }
        loop {
            match word.chars().last() {
                None => return None,
                Some(c) if c.is_alphabetic() => break,
                Some('.' | ',' | '?' | ':' | ';' | '!') => {
                    word.pop();
                }
                Some(_) => return None,
            }
        }
        if !word.chars().all(char::is_alphabetic) {
            return None;
        }
        if self.noise.contains(&word) {
            return None;
        }
        Some(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Normalizer {
        Normalizer::new(NoiseWords::default())
    }

    #[test]
    fn strips_trailing_punctuation() {
        assert_eq!(plain().normalize("Hello."), Some("hello".to_string()));
        assert_eq!(plain().normalize("world!!,"), Some("world".to_string()));
        assert_eq!(plain().normalize("why?"), Some("why".to_string()));
    }

    #[test]
    fn strips_brackets_once() {
        assert_eq!(plain().normalize("(IT)"), Some("it".to_string()));
        assert_eq!(plain().normalize("{braces}"), Some("braces".to_string()));
        assert_eq!(plain().normalize("(open"), Some("open".to_string()));
    }

    #[test]
    fn bracket_behind_punctuation_is_not_strippable() {
        assert_eq!(plain().normalize("hello.)"), Some("hello".to_string()));
        assert_eq!(plain().normalize("(hello)."), None);
    }

    #[test]
    fn rejects_pure_punctuation_without_panicking() {
        assert_eq!(plain().normalize("..."), None);
        assert_eq!(plain().normalize(""), None);
        assert_eq!(plain().normalize("   "), None);
        assert_eq!(plain().normalize("("), None);
        assert_eq!(plain().normalize("()"), None);
    }

    #[test]
    fn rejects_non_alphabetic() {
        assert_eq!(plain().normalize("A1"), None);
        assert_eq!(plain().normalize("it's"), None);
        assert_eq!(plain().normalize("end-to-end"), None);
        assert_eq!(plain().normalize("2024"), None);
    }

    #[test]
    fn rejects_noise_words_case_insensitively() {
        let normalizer = Normalizer::new(NoiseWords::from_words(["The", "AND"]));
        assert_eq!(normalizer.normalize("THE"), None);
        assert_eq!(normalizer.normalize("the."), None);
        assert_eq!(normalizer.normalize("and"), None);
        assert_eq!(normalizer.normalize("cat"), Some("cat".to_string()));
    }

    #[test]
    fn single_letter_survives() {
        assert_eq!(plain().normalize("x"), Some("x".to_string()));
    }

    #[test]
    fn builtin_list_is_populated_and_folded() {
        let normalizer = Normalizer::new(NoiseWords::builtin());
        assert!(!NoiseWords::builtin().is_empty());
        assert_eq!(normalizer.normalize("The"), None);
        assert_eq!(normalizer.normalize("BETWEEN"), None);
        assert_eq!(normalizer.normalize("keyword"), Some("keyword".to_string()));
    }
}
