//! Case-insensitive regex predicate with branch dispatch.
//!
//! The predicate compiles a pattern, tests a subject against it and hands a
//! caller-supplied context to exactly one of two continuations. It knows
//! nothing about templates; renderers plug their own branches in.
//!
//! # Example
//!
//! ```
//! use hbmatch_predicate::{evaluate, Branches, PatternError};
//!
//! let greeting = evaluate(
//!     "world",
//!     "Hello, World",
//!     "hello",
//!     Branches::new(|who: &str| format!("hi {who}"), |_| String::from("nope")),
//! )
//! .unwrap();
//! assert_eq!(greeting, "hi world");
//!
//! // Matching is unanchored: any hit anywhere in the subject counts
//! assert!(hbmatch_predicate::is_match("release-2024.1", r"\d{4}").unwrap());
//!
//! // Look-around and backreferences are available
//! assert!(hbmatch_predicate::is_match("Hello", "^(?!draft)").unwrap());
//!
//! // Invalid patterns never reach a branch
//! assert!(matches!(
//!     evaluate((), "x", "(", Branches::new(|_| 1, |_| 0)),
//!     Err(PatternError::Compile { .. })
//! ));
//! ```

mod predicate;

pub use predicate::{compile, evaluate, is_match, Branches, PatternError};
