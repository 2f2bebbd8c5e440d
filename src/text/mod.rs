mod normalize;
mod stats;

pub use normalize::normalize;
pub use stats::{
    RankedGram, entropy, jaccard, jaccard_sets, ngrams, ngrams_from_tokens, tokenize, top_ngrams,
};

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
