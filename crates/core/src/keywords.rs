//! Naive keyword frequency ranking.
//!
//! Text is lowercased and split on Unicode word boundaries. Tokens at or
//! above [`KeywordConfig::min_length`] characters are counted and the most
//! frequent ones are returned. Equal counts keep the order in which the
//! terms first appeared in the text.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").expect("word pattern is valid"));

/// Configuration for keyword ranking.
#[derive(Debug, Clone)]
pub struct KeywordConfig {
    /// Minimum token length in characters (default: 4, i.e. longer than 3).
    pub min_length: usize,
    /// Maximum number of ranked keywords (default: 10).
    pub max_keywords: usize,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self { min_length: 4, max_keywords: 10 }
    }
}

/// A ranked term and how many times it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Keyword {
    pub term: String,
    pub count: usize,
}

/// Ranks the most frequent qualifying terms in `text`.
///
/// # Example
///
/// ```rust
/// use seolens_core::keywords::{KeywordConfig, rank_keywords};
///
/// let ranked = rank_keywords("Rust rust crate", &KeywordConfig::default());
/// assert_eq!(ranked[0].term, "rust");
/// assert_eq!(ranked[0].count, 2);
/// assert_eq!(ranked[1].term, "crate");
/// ```
pub fn rank_keywords(text: &str, config: &KeywordConfig) -> Vec<Keyword> {
    let lowered = text.to_lowercase();

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<Keyword> = Vec::new();

    for token in WORD_PATTERN.find_iter(&lowered).map(|m| m.as_str()) {
        if token.chars().count() < config.min_length {
            continue;
        }

        match index.get(token) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                index.insert(token, counts.len());
                counts.push(Keyword { term: token.to_string(), count: 1 });
            }
        }
    }

    // stable: ties stay in first-seen order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(config.max_keywords);
    counts
}

/// Joins ranked keywords with `", "`, or `None` when nothing qualified.
pub fn join_keywords(keywords: &[Keyword]) -> Option<String> {
    if keywords.is_empty() {
        return None;
    }

    Some(keywords.iter().map(|k| k.term.as_str()).collect::<Vec<_>>().join(", "))
}
