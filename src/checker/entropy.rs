use indexmap::IndexSet;

use crate::text::{entropy, tokenize};

use super::{Check, CheckContext, CheckInfo, CheckResult, CheckStatus, MetricValue};

/// Token counts the population must exceed before each threshold applies.
const WARN_MIN_TOKENS: usize = 50;
const FAIL_MIN_TOKENS: usize = 200;

pub const INFO: CheckInfo = CheckInfo {
    id: "comment-entropy",
    title: "Comment Entropy",
    description: "Vocabulary diversity of added comments; low entropy means formulaic wording",
};

#[derive(Debug, Default)]
pub struct CommentEntropy;

impl Check for CommentEntropy {
    fn info(&self) -> &'static CheckInfo {
        &INFO
    }

    fn run(&self, ctx: &CheckContext<'_>) -> CheckResult {
        let tokens: Vec<String> = ctx
            .added_comments()
            .flat_map(|(_, line)| tokenize(line))
            .map(str::to_lowercase)
            .collect();
        let distinct = tokens.iter().collect::<IndexSet<_>>().len();
        let bits = entropy(&tokens);

        let mut result = CheckResult::new(&INFO);
        result.set_metric("tokens", MetricValue::Count(tokens.len()));
        result.set_metric("distinct_tokens", MetricValue::Count(distinct));
        result.set_metric("entropy", MetricValue::Ratio(bits));

        let status = if tokens.len() > FAIL_MIN_TOKENS && bits < ctx.settings.entropy_fail {
            CheckStatus::Fail
        } else if tokens.len() > WARN_MIN_TOKENS && bits < ctx.settings.entropy_warn {
            CheckStatus::Warning
        } else {
            CheckStatus::Pass
        };
        if status != CheckStatus::Pass {
            result.push_detail(format!(
                "Comment vocabulary entropy {bits:.2} bits over {} tokens ({distinct} distinct)",
                tokens.len()
            ));
        }
        result.with_status(status)
    }
}
