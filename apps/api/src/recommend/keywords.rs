//! Keyword extraction — turns free text into an ordered sequence of stemmed keywords.
//!
//! Pipeline: lower-case → word tokenize → drop stopwords → English stem → keep
//! ASCII-alphabetic stems only. Source order is preserved throughout.

use std::collections::HashSet;
use std::sync::OnceLock;

use rust_stemmers::{Algorithm, Stemmer};

/// English stopword table, matched against lower-cased tokens before stemming.
const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any",
    "are", "aren't", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "can", "cannot", "could", "couldn't", "did", "didn't",
    "do", "does", "doesn't", "doing", "don't", "down", "during", "each", "few", "for",
    "from", "further", "had", "hadn't", "has", "hasn't", "have", "haven't", "having", "he",
    "her", "here", "hers", "herself", "him", "himself", "his", "how", "i", "if", "in",
    "into", "is", "isn't", "it", "its", "itself", "just", "let's", "me", "more", "most",
    "mustn't", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "ought", "our", "ours", "ourselves", "out", "over", "own",
    "same", "shan't", "she", "should", "shouldn't", "so", "some", "such", "than", "that",
    "the", "their", "theirs", "them", "themselves", "then", "there", "these", "they",
    "this", "those", "through", "to", "too", "under", "until", "up", "us", "very", "was",
    "wasn't", "we", "were", "weren't", "what", "when", "where", "which", "while", "who",
    "whom", "why", "will", "with", "won't", "would", "wouldn't", "you", "your", "yours",
    "yourself", "yourselves",
];

fn stopwords() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOPWORDS.iter().copied().collect())
}

pub fn is_stopword(token: &str) -> bool {
    stopwords().contains(token)
}

/// Stopword check applied to stems entering the TF-IDF corpus. Stricter than
/// [`is_stopword`]: every single letter is dropped too, so possessive and
/// contraction tails ("master's" → `s`, "don't" → `t`) and one-letter skills
/// never become terms.
pub fn is_corpus_stopword(term: &str) -> bool {
    let mut chars = term.chars();
    let single_letter = matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if c.is_ascii_alphabetic()
    );
    single_letter || is_stopword(term)
}

/// Word characters: ASCII alphanumerics, underscore and the basic Cyrillic block.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || matches!(c, 'А'..='Я' | 'а'..='я')
}

/// Splits text on every run of non-word characters, discarding empty pieces.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|t| !t.is_empty())
        .collect()
}

/// Extracts normalized keyword stems from raw text.
///
/// Absent or empty input yields an empty sequence. Tokens containing digits,
/// underscores or non-ASCII letters are dropped after stemming.
pub fn extract_keywords(text: Option<&str>) -> Vec<String> {
    let text = match text {
        Some(t) if !t.is_empty() => t.to_lowercase(),
        _ => return Vec::new(),
    };

    let stemmer = Stemmer::create(Algorithm::English);

    tokenize(&text)
        .into_iter()
        .filter(|token| !is_stopword(token))
        .map(|token| stemmer.stem(token).into_owned())
        .filter(|stem| !stem.is_empty() && stem.chars().all(|c| c.is_ascii_alphabetic()))
        .collect()
}
