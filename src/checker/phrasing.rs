use crate::text::{ngrams_from_tokens, tokenize, top_ngrams};

use super::{Check, CheckContext, CheckInfo, CheckResult, CheckStatus, MetricValue};

const TOP_K: usize = 5;
/// Count of the most frequent trigram above which the check warns.
const TRIGRAM_WARN: usize = 5;

pub const INFO: CheckInfo = CheckInfo {
    id: "repetitive-phrasing",
    title: "Repetitive Phrasing",
    description: "Recurring word sequences across comments and commit messages",
};

#[derive(Debug, Default)]
pub struct RepetitivePhrasing;

impl RepetitivePhrasing {
    /// Comment lines first, then commit messages, lower-cased as one text.
    fn combined_text(ctx: &CheckContext<'_>) -> String {
        let comments = ctx.added_comments().map(|(_, line)| line);
        let messages = ctx.corpus.commits().iter().map(|c| c.message.as_str());
        comments
            .chain(messages)
            .collect::<Vec<_>>()
            .join("\n")
            .to_lowercase()
    }
}

impl Check for RepetitivePhrasing {
    fn info(&self) -> &'static CheckInfo {
        &INFO
    }

    #[allow(clippy::cast_precision_loss)]
    fn run(&self, ctx: &CheckContext<'_>) -> CheckResult {
        let text = Self::combined_text(ctx);
        let tokens = tokenize(&text);
        let top_bigrams = top_ngrams(&ngrams_from_tokens(&tokens, 2), TOP_K);
        let top_trigrams = top_ngrams(&ngrams_from_tokens(&tokens, 3), TOP_K);

        let bigram_ratio = match top_bigrams.first() {
            Some(top) if !tokens.is_empty() => top.count as f64 / tokens.len() as f64,
            _ => 0.0,
        };
        let top_trigram_count = top_trigrams.first().map_or(0, |t| t.count);

        let mut result = CheckResult::new(&INFO);
        let ratio_warn = bigram_ratio > ctx.settings.bigram_warn;
        let trigram_warn = top_trigram_count > TRIGRAM_WARN;
        if ratio_warn && let Some(top) = top_bigrams.first() {
            result.push_detail(format!(
                "Bigram \"{}\" makes up {:.1}% of {} tokens",
                top.gram,
                bigram_ratio * 100.0,
                tokens.len()
            ));
        }
        if trigram_warn && let Some(top) = top_trigrams.first() {
            result.push_detail(format!(
                "Trigram \"{}\" repeated {} times",
                top.gram, top.count
            ));
        }

        result.set_metric("tokens", MetricValue::Count(tokens.len()));
        result.set_metric("bigram_ratio", MetricValue::Ratio(bigram_ratio));
        result.set_metric("top_trigram_count", MetricValue::Count(top_trigram_count));
        result.set_metric("top_bigrams", MetricValue::Ranking(top_bigrams));
        result.set_metric("top_trigrams", MetricValue::Ranking(top_trigrams));

        // Only the bigram ratio can fail; the trigram signal tops out at a warning.
        let status = if bigram_ratio > ctx.settings.bigram_fail {
            CheckStatus::Fail
        } else if ratio_warn || trigram_warn {
            CheckStatus::Warning
        } else {
            CheckStatus::Pass
        };
        result.with_status(status)
    }
}
