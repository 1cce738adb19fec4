use std::collections::HashSet;

/// Normalized, stop-word and length filtered set of tokens derived from a text
pub type KeywordSet = HashSet<String>;

/// Words carrying no signal for skill matching
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "and", "the", "is", "in", "at", "of", "for", "to", "a", "an", "with", "on", "by",
];

/// Tokens shorter than this (in characters) are discarded
pub const DEFAULT_MIN_KEYWORD_LENGTH: usize = 3;

/// Turns free text into a keyword set
///
/// The stop-word list and minimum length are fixed at construction, so one
/// extractor can be shared freely between workers.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    stop_words: HashSet<String>,
    min_length: usize,
}

impl KeywordExtractor {
    pub fn new<I, S>(stop_words: I, min_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stop_words: stop_words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
            min_length,
        }
    }

    pub fn stop_words(&self) -> &HashSet<String> {
        &self.stop_words
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Extract the keyword set of `text`
    ///
    /// Tokens are maximal runs of letters, digits and underscores taken from
    /// the lower-cased text. Stop words and tokens shorter than the minimum
    /// length are dropped. Empty text yields an empty set.
    pub fn extract(&self, text: &str) -> KeywordSet {
        if text.is_empty() {
            return KeywordSet::new();
        }

        text.to_lowercase()
            .split(|c: char| !is_word_char(c))
            .filter(|token| !token.is_empty())
            .filter(|token| !self.stop_words.contains(*token))
            .filter(|token| token.chars().count() >= self.min_length)
            .map(str::to_owned)
            .collect()
    }

    /// Same as [`extract`](Self::extract), treating absent text as empty
    pub fn extract_opt(&self, text: Option<&str>) -> KeywordSet {
        text.map(|t| self.extract(t)).unwrap_or_default()
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_STOP_WORDS.iter().copied(), DEFAULT_MIN_KEYWORD_LENGTH)
    }
}

/// Letters (including alphabetic combining marks), digits and underscore
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Keywords in a stable, alphabetical order for display
pub fn sorted_keywords(keywords: &KeywordSet) -> Vec<String> {
    let mut sorted: Vec<String> = keywords.iter().cloned().collect();
    sorted.sort_unstable();
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> KeywordSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_extract_basic() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.extract("Backend Development Internship using Python and Flask");

        assert_eq!(
            keywords,
            set(&["backend", "development", "internship", "using", "python", "flask"])
        );
    }

    #[test]
    fn test_extract_empty() {
        let extractor = KeywordExtractor::default();
        assert!(extractor.extract("").is_empty());
        assert!(extractor.extract_opt(None).is_empty());
        assert!(extractor.extract("   \t\n").is_empty());
    }

    #[test]
    fn test_punctuation_separates_tokens() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.extract("Python,Flask;rust/go-lang (C++)");

        // "go" and "c" are too short
        assert_eq!(keywords, set(&["python", "flask", "rust", "lang"]));
    }

    #[test]
    fn test_underscore_and_digits_are_word_chars() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.extract("snake_case web3 2024");

        assert_eq!(keywords, set(&["snake_case", "web3", "2024"]));
    }

    #[test]
    fn test_short_tokens_dropped() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.extract("AI ML UX API");

        assert_eq!(keywords, set(&["api"]));
    }

    #[test]
    fn test_duplicates_collapse() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.extract("Python python PYTHON");

        assert_eq!(keywords, set(&["python"]));
    }

    #[test]
    fn test_unicode_letters() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.extract("Données Élève");

        assert_eq!(keywords, set(&["données", "élève"]));
    }

    #[test]
    fn test_spacing_vowel_signs_stay_in_token() {
        let extractor = KeywordExtractor::default();

        // U+093F and U+093E are alphabetic vowel signs, not separators
        let keywords = extractor.extract("किताब");

        assert_eq!(keywords, set(&["किताब"]));
    }

    #[test]
    fn test_custom_stop_words() {
        let extractor = KeywordExtractor::new(["Using", "internship"], 3);
        let keywords = extractor.extract("Backend internship using Python and Flask");

        // "and" is not a stop word for this extractor
        assert_eq!(keywords, set(&["backend", "python", "and", "flask"]));
        assert!(extractor.stop_words().contains("using"));
    }

    #[test]
    fn test_sorted_keywords() {
        let keywords = set(&["flask", "backend", "python"]);
        assert_eq!(sorted_keywords(&keywords), vec!["backend", "flask", "python"]);
    }
}
