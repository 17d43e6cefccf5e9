//! Property-based tests for extraction and composition
//!
//! Uses proptest to verify properties that should hold for all inputs.

use giticket::config::Config;
use giticket::core::models::{Mode, Outcome};
use giticket::core::services::{DEFAULT_TICKET_PATTERN, Rewriter, extract, split_ticket_number};
use proptest::prelude::*;
use regex::Regex;

fn pattern() -> Regex {
    Regex::new(DEFAULT_TICKET_PATTERN).unwrap()
}

fn rewriter(config: Config) -> Rewriter {
    Rewriter::new(config.into_rules().unwrap())
}

proptest! {
    /// Both modes agree on the primary ticket for "<TICKET>_<rest>" branches
    #[test]
    fn modes_agree_on_single_ticket_branch(
        key in "[A-Z]{1,6}",
        num in "[0-9]{1,6}",
        rest in "[a-z-]{0,20}"
    ) {
        let branch = format!("{key}-{num}_{rest}");
        let split = extract(&branch, &pattern(), Mode::UnderscoreSplit);
        let matched = extract(&branch, &pattern(), Mode::RegexMatch);
        let expected = format!("{key}-{num}");
        prop_assert_eq!(split.primary(), matched.primary());
        prop_assert_eq!(split.primary(), Some(expected.as_str()));
    }

    /// A line produced by the rewriter is never rewritten a second time
    #[test]
    fn rewritten_line_is_already_present(
        key in "[A-Z]{1,6}",
        num in "[0-9]{1,6}",
        rest in "[a-z-]{0,20}",
        msg in "[ -~]{0,60}",
        mode in prop_oneof![Just(Mode::UnderscoreSplit), Just(Mode::RegexMatch)],
        format in prop_oneof![
            Just("{ticket} {commit_msg}"),
            Just("[{ticket}] {commit_msg}"),
            Just("{tickets}: {commit_msg}"),
        ]
    ) {
        let branch = format!("{key}-{num}_{rest}");
        let rewriter = rewriter(Config {
            mode: Some(mode),
            format: Some(format.to_string()),
            ..Config::default()
        });

        let first = rewriter.rewrite(&branch, &msg).outcome;
        let Outcome::Rewritten(line) = first else {
            // The random message already carried the ticket up front
            return Ok(());
        };
        let second = rewriter.rewrite(&branch, &line).outcome;
        prop_assert!(matches!(second, Outcome::AlreadyPresent { .. }), "second = {:?}", second);
    }

    /// Branches with nothing ticket-shaped are always rejected
    #[test]
    fn branch_without_ticket_is_rejected(branch in "[a-z0-9/_-]{0,30}", msg in "[ -~]{0,40}") {
        for mode in Mode::ALL {
            let rewriter = rewriter(Config { mode: Some(mode), ..Config::default() });
            prop_assert_eq!(rewriter.rewrite(&branch, &msg).outcome, Outcome::NoTicketsFound);
        }
    }

    /// Stripping removes every occurrence of the number pattern
    #[test]
    fn number_strip_removes_all_digits(key in "[A-Z]{1,6}", num in "[0-9]{1,6}", tail in "[A-Z0-9]{0,6}") {
        let primary = format!("{key}-{num}{tail}");
        let digits = Regex::new(r"\d+").unwrap();
        let (number, stripped) = split_ticket_number(&digits, &primary).unwrap();

        prop_assert!(number.starts_with(&num));
        prop_assert!(!stripped.chars().any(|c| c.is_ascii_digit()));
        prop_assert_eq!(stripped, digits.replace_all(&primary, "").into_owned());
    }
}
