//! Heuristic relevance scoring.
//!
//! ```text
//! score = 10 · [query ⊆ text]
//!       +  5 · |{ word ∈ query : word ⊆ text }|
//!       +  2 · jaccard(bigrams(text), bigrams(query))
//! ```
//!
//! All comparisons are on lowercased strings. The score is not normalized or
//! capped.

use rustc_hash::FxHashSet;

/// Bonus when the whole query appears verbatim.
const PHRASE_BONUS: f64 = 10.0;
/// Bonus per query word that appears in the text.
const WORD_BONUS: f64 = 5.0;
/// Weight of the bigram similarity term.
const SIMILARITY_WEIGHT: f64 = 2.0;

/// Score `text` against `query`.
pub fn relevance(text: &str, query: &str) -> f64 {
    let text = text.to_lowercase();
    let query = query.to_lowercase();

    let mut score = 0.0;

    if text.contains(&query) {
        score += PHRASE_BONUS;
    }

    let words = query
        .split_whitespace()
        .filter(|word| text.contains(word))
        .count();
    score += WORD_BONUS * words as f64;

    score + SIMILARITY_WEIGHT * jaccard_similarity(&text, &query)
}

/// Intersection over union of the two strings' character-bigram sets.
///
/// Two strings with no bigrams between them score 0.
pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    let left = bigrams(a);
    let right = bigrams(b);

    let intersection = left.intersection(&right).count();
    let union = left.len() + right.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

fn bigrams(s: &str) -> FxHashSet<(char, char)> {
    let chars: Vec<char> = s.chars().collect();
    chars.windows(2).map(|pair| (pair[0], pair[1])).collect()
}
