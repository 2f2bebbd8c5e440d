use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_eq!(EXIT_SUCCESS, 0);
    assert_eq!(EXIT_SUSPICIOUS, 1);
    assert_eq!(EXIT_CONFIG_ERROR, 2);
}

#[test]
fn exit_code_follows_overall_status() {
    assert_eq!(exit_code_for(CheckStatus::Pass, false), EXIT_SUCCESS);
    assert_eq!(exit_code_for(CheckStatus::Warning, false), EXIT_SUCCESS);
    assert_eq!(exit_code_for(CheckStatus::Fail, false), EXIT_SUSPICIOUS);
}

#[test]
fn strict_turns_warnings_into_failures() {
    assert_eq!(exit_code_for(CheckStatus::Pass, true), EXIT_SUCCESS);
    assert_eq!(exit_code_for(CheckStatus::Warning, true), EXIT_SUSPICIOUS);
    assert_eq!(exit_code_for(CheckStatus::Fail, true), EXIT_SUSPICIOUS);
}
