//! Word pool and word-frequency extraction for the word cloud panel.
//!
//! The word pool is every tweet for one sentiment joined with spaces. The
//! cloud itself is driven by [`word_frequencies`], which tokenizes the pool,
//! drops stopwords and ranks what is left.

// Weights intentionally convert usize to f64
#![allow(clippy::cast_precision_loss)]

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::dataset::Dataset;

/// Default number of words shown in the cloud
pub const DEFAULT_WORD_LIMIT: usize = 60;

/// English stopwords excluded from the cloud.
pub const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "can't", "cannot", "com", "could", "couldn't", "did", "didn't",
    "do", "does", "doesn't", "doing", "don't", "down", "during", "each", "else", "ever", "few",
    "for", "from", "further", "get", "had", "hadn't", "has", "hasn't", "have", "haven't",
    "having", "he", "he'd", "he'll", "he's", "hence", "her", "here", "here's", "hers", "herself",
    "him", "himself", "his", "how", "how's", "however", "http", "i", "i'd", "i'll", "i'm", "i've",
    "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself", "just", "k", "let's", "like",
    "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not", "of", "off", "on", "once",
    "only", "or", "other", "otherwise", "ought", "our", "ours", "ourselves", "out", "over", "own",
    "r", "same", "shall", "shan't", "she", "she'd", "she'll", "she's", "should", "shouldn't",
    "since", "so", "some", "such", "than", "that", "that's", "the", "their", "theirs", "them",
    "themselves", "then", "there", "there's", "therefore", "these", "they", "they'd", "they'll",
    "they're", "they've", "this", "those", "through", "to", "too", "under", "until", "up", "very",
    "was", "wasn't", "we", "we'd", "we'll", "we're", "we've", "were", "weren't", "what", "what's",
    "when", "when's", "where", "where's", "which", "while", "who", "who's", "whom", "why", "why's",
    "with", "won't", "would", "wouldn't", "www", "you", "you'd", "you'll", "you're", "you've",
    "your", "yours", "yourself", "yourselves",
];

static STOPWORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| STOPWORDS.iter().copied().collect());

/// Words of two or more characters, apostrophes allowed after the first
static WORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w[\w']+").expect("valid regex"));

/// Lookup set built from [`STOPWORDS`]
#[must_use]
pub fn default_stopwords() -> &'static HashSet<&'static str> {
    &STOPWORD_SET
}

/// A ranked word and its relative size in the cloud.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
    /// `count / top_count`, in `(0.0, 1.0]`
    pub weight: f64,
}

/// Concatenate the text of every record labelled `label`, in row order,
/// separated by single spaces. Returns an empty string when nothing matches.
#[must_use]
pub fn word_pool(dataset: &Dataset, label: &str) -> String {
    dataset
        .records
        .iter()
        .filter(|r| r.airline_sentiment == label)
        .map(|r| r.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Minimum likelihood-ratio score for a bigram to be kept as one phrase
pub const COLLOCATION_THRESHOLD: f64 = 30.0;

struct Token {
    word: String,
    stop: bool,
}

/// Rank the words of `pool`, most frequent first, keeping at most `limit`.
///
/// Words are lowercased and a trailing possessive `'s` is dropped before
/// counting. Single characters and pure numbers are removed; stopwords are
/// not counted and break phrases. Adjacent word pairs that collocate strongly
/// (see [`COLLOCATION_THRESHOLD`]) are ranked as one phrase such as
/// `"customer service"`, and their occurrences are taken off the single words.
/// Ties are broken alphabetically so the cloud is stable between redraws.
#[must_use]
pub fn word_frequencies(
    pool: &str,
    stopwords: &HashSet<&str>,
    limit: usize,
) -> Vec<WordFrequency> {
    let tokens = tokenize(pool, stopwords);
    let counts = collocated_counts(&tokens);

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);

    let top = ranked.first().map_or(1, |(_, count)| *count) as f64;
    ranked
        .into_iter()
        .map(|(word, count)| WordFrequency { word, count, weight: count as f64 / top })
        .collect()
}

fn tokenize(pool: &str, stopwords: &HashSet<&str>) -> Vec<Token> {
    WORD_REGEX
        .find_iter(pool)
        .filter_map(|token| {
            let lower = token.as_str().to_lowercase();
            let word = lower.strip_suffix("'s").unwrap_or(&lower);
            if word.chars().count() < 2 || word.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            let stop = stopwords.contains(lower.as_str()) || stopwords.contains(word);
            Some(Token { word: word.to_string(), stop })
        })
        .collect()
}

/// Unigram counts with strongly collocated bigrams merged in.
fn collocated_counts(tokens: &[Token]) -> HashMap<String, usize> {
    let mut unigrams: HashMap<&str, usize> = HashMap::new();
    for token in tokens.iter().filter(|t| !t.stop) {
        *unigrams.entry(token.word.as_str()).or_insert(0) += 1;
    }
    let n_words: usize = unigrams.values().sum();

    let mut bigrams: HashMap<(&str, &str), usize> = HashMap::new();
    for pair in tokens.windows(2) {
        if !pair[0].stop && !pair[1].stop {
            *bigrams.entry((pair[0].word.as_str(), pair[1].word.as_str())).or_insert(0) += 1;
        }
    }

    let mut counts: HashMap<String, usize> =
        unigrams.iter().map(|(word, count)| ((*word).to_string(), *count)).collect();

    for (&(first, second), &together) in &bigrams {
        let score = collocation_score(together, unigrams[first], unigrams[second], n_words);
        if score > COLLOCATION_THRESHOLD {
            for word in [first, second] {
                if let Some(count) = counts.get_mut(word) {
                    *count = count.saturating_sub(together);
                }
            }
            counts.insert(format!("{first} {second}"), together);
        }
    }

    counts.retain(|_, count| *count > 0);
    counts
}

/// Dunning log-likelihood ratio for `first second` appearing `together` times.
#[allow(clippy::similar_names)]
fn collocation_score(together: usize, first: usize, second: usize, n_words: usize) -> f64 {
    fn log_likelihood(k: f64, n: f64, x: f64) -> f64 {
        x.max(1e-10).ln() * k + (1.0 - x).max(1e-10).ln() * (n - k)
    }

    if n_words <= first {
        return 0.0;
    }
    let (c12, c1, c2, n) = (together as f64, first as f64, second as f64, n_words as f64);
    let p = c2 / n;
    let p1 = c12 / c1;
    let p2 = (c2 - c12) / (n - c1);

    -2.0 * (log_likelihood(c12, c1, p) + log_likelihood(c2 - c12, n - c1, p)
        - log_likelihood(c12, c1, p1)
        - log_likelihood(c2 - c12, n - c1, p2))
}
