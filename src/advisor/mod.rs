//! Rule-based recommendations for a single machine
//!
//! The advisor turns an [`OperatingSnapshot`] into an ordered list of
//! [`Suggestion`]s. Suggestions are recomputed on every call and never stored.

pub mod rules;
pub mod suggestion;

pub use rules::{generate_suggestions, rule_order, runtime_reduction_percent, OperatingSnapshot};
pub use suggestion::{Impact, Severity, Suggestion, SuggestionKind};
