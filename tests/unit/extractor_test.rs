//! Parameterized extractor tests using test-case

use giticket::core::models::Mode;
use giticket::core::services::{DEFAULT_TICKET_PATTERN, extract, find_all};
use regex::Regex;
use test_case::test_case;

fn pattern() -> Regex {
    Regex::new(DEFAULT_TICKET_PATTERN).unwrap()
}

// =============================================================================
// Underscore split
// =============================================================================

#[test_case("JIRA-123_fix-crash", &["JIRA-123"] ; "ticket then description")]
#[test_case("JIRA-123", &["JIRA-123"] ; "ticket only")]
#[test_case("ABC-1_DEF-2_rest", &["ABC-1"] ; "several tickets keep first segment")]
#[test_case("feature/JIRA-7_login", &["feature/JIRA-7"] ; "prefix stays in segment")]
#[test_case("wip_JIRA-7", &["wip"] ; "ticket after underscore only gates")]
#[test_case("main", &[] ; "no ticket")]
#[test_case("jira-123_lowercase", &[] ; "lowercase key does not match")]
#[test_case("", &[] ; "empty branch")]
fn test_underscore_split(branch: &str, expected: &[&str]) {
    let tickets = extract(branch, &pattern(), Mode::UnderscoreSplit);
    assert_eq!(tickets.as_slice(), expected, "branch={branch:?}");
}

// =============================================================================
// Regex match
// =============================================================================

#[test_case("JIRA-123_fix-crash", &["JIRA-123"] ; "single ticket")]
#[test_case("ABC-1_DEF-2_rest", &["ABC-1", "DEF-2"] ; "two tickets in order")]
#[test_case("ABC-1-ABC-1", &["ABC-1", "ABC-1"] ; "duplicates kept")]
#[test_case("feature/JIRA-7_login", &["JIRA-7"] ; "prefix dropped")]
#[test_case("main", &[] ; "no ticket")]
fn test_regex_match(branch: &str, expected: &[&str]) {
    let tickets = extract(branch, &pattern(), Mode::RegexMatch);
    assert_eq!(tickets.as_slice(), expected, "branch={branch:?}");
}

// =============================================================================
// Custom patterns
// =============================================================================

#[test_case(r"#\d+", "fix_#42_and_#7", &["#42", "#7"] ; "hash numbers")]
#[test_case(r"(?i)[a-z]+-\d+", "jira-9_x", &["jira-9"] ; "case insensitive")]
#[test_case(r"x*", "abc", &[] ; "only empty matches")]
#[test_case(r"issue-(\d+)", "issue-12_issue-13", &["12", "13"] ; "capture group")]
fn test_find_all_custom(re: &str, branch: &str, expected: &[&str]) {
    let re = Regex::new(re).unwrap();
    assert_eq!(find_all(&re, branch), expected);
}
