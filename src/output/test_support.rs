//! Report fixtures shared by the formatter tests.

use crate::checker::{AnalysisReport, CheckInfo, CheckResult, CheckStatus, MetricValue};
use crate::config::Settings;
use crate::corpus::test_fixtures::{added_patch, change, commit, corpus};

const DENSITY: CheckInfo = CheckInfo {
    id: "comment-density",
    title: "Comment Density",
    description: "Share of added lines that are comments",
};

const BOILERPLATE: CheckInfo = CheckInfo {
    id: "boilerplate",
    title: "Repeated Boilerplate",
    description: "Identical added blocks repeated across several files",
};

pub fn sample_report() -> AnalysisReport {
    let c = corpus(vec![(
        commit("c1", "Add files"),
        vec![
            change("a.rs", &added_patch(&["fn a() {}"])),
            change("b.rs", &added_patch(&["fn b() {}"])),
        ],
    )]);

    let mut density = CheckResult::new(&DENSITY);
    density.set_metric("comment_ratio", MetricValue::Ratio(0.05));

    let mut boilerplate = CheckResult::new(&BOILERPLATE).with_status(CheckStatus::Fail);
    for i in 0..8 {
        boilerplate.push_detail(format!("Block {i} | repeated"));
    }
    boilerplate.set_metric("duplicate_groups", MetricValue::Count(8));

    AnalysisReport::new(&c, Settings::default(), vec![density, boilerplate])
}
