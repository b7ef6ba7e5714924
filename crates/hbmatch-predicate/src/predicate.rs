//! Pattern compilation and branch dispatch.

use fancy_regex::{Regex, RegexBuilder};
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("invalid pattern '{pattern}': {source}")]
    Compile {
        pattern: String,
        #[source]
        source: fancy_regex::Error,
    },

    #[error("pattern '{pattern}' failed while matching: {source}")]
    Match {
        pattern: String,
        #[source]
        source: fancy_regex::Error,
    },
}

/// The two arms of a conditional block.
///
/// Each arm receives the render context by value; only one of them is ever
/// called for a given evaluation.
pub struct Branches<M, N> {
    pub on_match: M,
    pub on_no_match: N,
}

impl<M, N> Branches<M, N> {
    pub fn new(on_match: M, on_no_match: N) -> Self {
        Self {
            on_match,
            on_no_match,
        }
    }
}

/// Compile `pattern` with case-insensitive matching.
///
/// Look-around and backreferences are supported.
pub fn compile(pattern: &str) -> Result<Regex, PatternError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| {
            debug!(pattern, error = %source, "pattern failed to compile");
            PatternError::Compile {
                pattern: pattern.to_string(),
                source,
            }
        })
}

/// Whether `pattern` matches anywhere in `subject`, ignoring case.
pub fn is_match(subject: &str, pattern: &str) -> Result<bool, PatternError> {
    let regex = compile(pattern)?;
    regex
        .is_match(subject)
        .map_err(|source| PatternError::Match {
            pattern: pattern.to_string(),
            source,
        })
}

/// Test `subject` against `pattern` and run the matching branch with `context`.
///
/// The pattern is compiled on every call. On a compile error neither branch
/// runs and the error is returned as is.
pub fn evaluate<C, T, M, N>(
    context: C,
    subject: &str,
    pattern: &str,
    branches: Branches<M, N>,
) -> Result<T, PatternError>
where
    M: FnOnce(C) -> T,
    N: FnOnce(C) -> T,
{
    let matched = is_match(subject, pattern)?;
    trace!(pattern, matched, "pattern evaluated");

    if matched {
        Ok((branches.on_match)(context))
    } else {
        Ok((branches.on_no_match)(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn pick(subject: &str, pattern: &str) -> Result<&'static str, PatternError> {
        evaluate((), subject, pattern, Branches::new(|_| "yes", |_| "no"))
    }

    #[test]
    fn test_case_insensitive_match() {
        assert_eq!(pick("HELLO", "hello").unwrap(), "yes");
        assert_eq!(pick("hello", "HeLLo").unwrap(), "yes");
    }

    #[test]
    fn test_substring_match_is_unanchored() {
        assert_eq!(pick("the quick brown fox", "quick").unwrap(), "yes");
        assert_eq!(pick("v1.2.3-beta", r"beta$").unwrap(), "yes");
    }

    #[test]
    fn test_no_match() {
        assert_eq!(pick("the quick brown fox", "slow").unwrap(), "no");
        assert_eq!(pick("abc", "^b").unwrap(), "no");
    }

    #[test]
    fn test_empty_subject() {
        assert_eq!(pick("", ".*").unwrap(), "yes");
        assert_eq!(pick("", "a").unwrap(), "no");
    }

    #[test]
    fn test_empty_pattern_matches_everything() {
        assert_eq!(pick("anything", "").unwrap(), "yes");
        assert_eq!(pick("", "").unwrap(), "yes");
    }

    #[test]
    fn test_unbalanced_group_is_error() {
        let err = pick("(", "(").unwrap_err();
        match &err {
            PatternError::Compile { pattern, .. } => assert_eq!(pattern, "("),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().starts_with("invalid pattern '('"));
    }

    #[test]
    fn test_error_invokes_no_branch() {
        let calls = Cell::new(0);
        let result = evaluate(
            (),
            "subject",
            "[a-",
            Branches::new(|_| calls.set(calls.get() + 1), |_| calls.set(calls.get() + 1)),
        );
        assert!(result.is_err());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_context_is_passed_through() {
        let mut log = Vec::new();
        let branches = Branches::new(
            |log: &mut Vec<&str>| log.push("match"),
            |log: &mut Vec<&str>| log.push("no match"),
        );
        evaluate(&mut log, "Error: disk full", "error", branches).unwrap();
        assert_eq!(log, vec!["match"]);
    }

    #[test]
    fn test_branch_result_returned_unchanged() {
        let branches = Branches::new(|n: i32| n * 2, |n: i32| n);
        let out = evaluate(21, "42", r"^\d+$", branches).unwrap();
        assert_eq!(out, 42);
    }

    #[test]
    fn test_compile_sets_case_insensitive() {
        let regex = compile("abc").unwrap();
        assert!(regex.is_match("xxABCxx").unwrap());
    }

    #[test]
    fn test_negative_lookahead() {
        assert_eq!(pick("Hello", "^(?!draft)").unwrap(), "yes");
        assert_eq!(pick("Draft post", "^(?!draft)").unwrap(), "no");
    }

    #[test]
    fn test_positive_lookahead_and_lookbehind() {
        assert_eq!(pick("price: 40 USD", r"\d+(?= usd)").unwrap(), "yes");
        assert_eq!(pick("price: 40 EUR", r"(?<=price: )\d+ usd").unwrap(), "no");
    }

    #[test]
    fn test_backreference() {
        assert_eq!(pick("xaax", r"(a)\1").unwrap(), "yes");
        assert_eq!(pick("xabx", r"(a)\1").unwrap(), "no");
    }

    #[test]
    fn test_unicode_case_folding() {
        assert!(is_match("ÉCOLE", "école").unwrap());
    }
}
