use std::collections::HashSet;
use std::hash::Hash;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("static pattern is valid"));

/// Split on runs of non-word characters, dropping empty tokens.
#[must_use]
pub fn tokenize(text: &str) -> Vec<&str> {
    NON_WORD.split(text).filter(|t| !t.is_empty()).collect()
}

/// Frequency of every sliding window of `n` consecutive tokens of `text`.
#[must_use]
pub fn ngrams(text: &str, n: usize) -> IndexMap<String, usize> {
    ngrams_from_tokens(&tokenize(text), n)
}

/// Same as [`ngrams`] over an existing token sequence. Grams are the tokens
/// joined by a single space, in first-occurrence order.
#[must_use]
pub fn ngrams_from_tokens<S: AsRef<str>>(tokens: &[S], n: usize) -> IndexMap<String, usize> {
    let mut table = IndexMap::new();
    if n == 0 || tokens.len() < n {
        return table;
    }
    for window in tokens.windows(n) {
        let gram = window
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");
        *table.entry(gram).or_insert(0) += 1;
    }
    table
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedGram {
    pub gram: String,
    pub count: usize,
}

/// The `k` most frequent grams; ties keep first-occurrence order.
#[must_use]
pub fn top_ngrams(table: &IndexMap<String, usize>, k: usize) -> Vec<RankedGram> {
    let mut ranked: Vec<_> = table.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1));
    ranked
        .into_iter()
        .take(k)
        .map(|(gram, &count)| RankedGram {
            gram: gram.clone(),
            count,
        })
        .collect()
}

/// Shannon entropy in bits of the empirical token distribution.
///
/// Counts are accumulated in first-occurrence order so the floating-point sum
/// is identical across runs.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn entropy<S: AsRef<str>>(tokens: &[S]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for token in tokens {
        *counts.entry(token.as_ref()).or_insert(0) += 1;
    }
    let total = tokens.len() as f64;
    counts.values().fold(0.0, |acc, &count| {
        let p = count as f64 / total;
        acc - p * p.log2()
    })
}

/// `|A ∩ B| / |A ∪ B|`; zero when both sets are empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn jaccard_sets<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = small.iter().filter(|t| large.contains(*t)).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Jaccard similarity of two token sequences; repeated tokens count once.
#[must_use]
pub fn jaccard<S: AsRef<str>>(a: &[S], b: &[S]) -> f64 {
    let set_a: HashSet<&str> = a.iter().map(AsRef::as_ref).collect();
    let set_b: HashSet<&str> = b.iter().map(AsRef::as_ref).collect();
    jaccard_sets(&set_a, &set_b)
}
