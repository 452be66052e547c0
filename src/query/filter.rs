//! # Filter Predicates
//!
//! A [`FilterSet`] is a conjunction of constraints over analyzed records.
//! Both the structured parameters and natural-language queries reduce to
//! one, so list semantics are identical on either path.

use serde::{Deserialize, Serialize};

use crate::analyzer::AnalyzedRecord;

/// A single constraint on a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// `is_palindrome` equals the value
    Palindrome(bool),

    /// `length >= n`
    MinLength(i64),

    /// `length <= n`
    MaxLength(i64),

    /// `word_count == n`
    WordCount(i64),

    /// Character occurs in `original_value`, ignoring case
    ContainsCharacter(char),
}

impl Constraint {
    /// Name of the filter parameter this constraint came from
    pub fn param(&self) -> &'static str {
        match self {
            Constraint::Palindrome(_) => "is_palindrome",
            Constraint::MinLength(_) => "min_length",
            Constraint::MaxLength(_) => "max_length",
            Constraint::WordCount(_) => "word_count",
            Constraint::ContainsCharacter(_) => "contains_character",
        }
    }

    /// Check if a record satisfies this constraint
    pub fn matches(&self, record: &AnalyzedRecord) -> bool {
        let analysis = &record.analysis;
        match *self {
            Constraint::Palindrome(expected) => analysis.is_palindrome == expected,
            Constraint::MinLength(n) => as_i64(analysis.length) >= n,
            Constraint::MaxLength(n) => as_i64(analysis.length) <= n,
            Constraint::WordCount(n) => as_i64(analysis.word_count) == n,
            Constraint::ContainsCharacter(c) => contains_ignore_case(&analysis.original_value, c),
        }
    }
}

fn as_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

fn contains_ignore_case(haystack: &str, needle: char) -> bool {
    let needle: String = needle.to_lowercase().collect();
    haystack.to_lowercase().contains(&needle)
}

/// A set of constraints combined with AND logic.
///
/// Serializes as the map of applied parameters to their coerced values;
/// absent constraints are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no constraint is set
    pub fn is_empty(&self) -> bool {
        self.constraints().is_empty()
    }

    /// The set's constraints in parameter order
    pub fn constraints(&self) -> Vec<Constraint> {
        [
            self.is_palindrome.map(Constraint::Palindrome),
            self.min_length.map(Constraint::MinLength),
            self.max_length.map(Constraint::MaxLength),
            self.word_count.map(Constraint::WordCount),
            self.contains_character.map(Constraint::ContainsCharacter),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Check if a record matches all constraints
    pub fn matches(&self, record: &AnalyzedRecord) -> bool {
        self.constraints().iter().all(|c| c.matches(record))
    }

    /// Keep the records that match, preserving input order
    pub fn apply(&self, records: Vec<AnalyzedRecord>) -> Vec<AnalyzedRecord> {
        let constraints = self.constraints();
        records
            .into_iter()
            .filter(|r| constraints.iter().all(|c| c.matches(r)))
            .collect()
    }
}
