//! # Natural-Language Interpretation
//!
//! Free-text queries are matched against a fixed table of trigger phrases.
//! Each rule is independent: every trigger present in the lowercased query
//! contributes its constraint, and a rule whose value cannot be extracted
//! contributes nothing.

use super::errors::{QueryError, QueryResult};
use super::filter::FilterSet;

/// How a trigger derives its constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Derivation {
    /// `is_palindrome = true`
    Palindromic,
    /// `word_count = 1`
    SingleWord,
    /// First token after the phrase is `N`; `min_length = N + 1`
    LongerThan,
    /// First character after the last occurrence of the phrase
    ContainingLetter,
}

#[derive(Debug, Clone, Copy)]
struct TriggerRule {
    phrase: &'static str,
    derivation: Derivation,
}

const RULES: [TriggerRule; 4] = [
    TriggerRule {
        phrase: "palindromic",
        derivation: Derivation::Palindromic,
    },
    TriggerRule {
        phrase: "single word",
        derivation: Derivation::SingleWord,
    },
    TriggerRule {
        phrase: "longer than",
        derivation: Derivation::LongerThan,
    },
    TriggerRule {
        phrase: "containing the letter",
        derivation: Derivation::ContainingLetter,
    },
];

impl TriggerRule {
    fn apply(&self, query: &str, filters: &mut FilterSet) {
        if !query.contains(self.phrase) {
            return;
        }
        match self.derivation {
            Derivation::Palindromic => filters.is_palindrome = Some(true),
            Derivation::SingleWord => filters.word_count = Some(1),
            Derivation::LongerThan => {
                if let Some(n) = longer_than_bound(query, self.phrase) {
                    filters.min_length = Some(n);
                }
            }
            Derivation::ContainingLetter => {
                if let Some(c) = letter_after(query, self.phrase) {
                    filters.contains_character = Some(c);
                }
            }
        }
    }
}

/// Strictly-longer-than bound taken from the text following the first
/// occurrence of `phrase`
fn longer_than_bound(query: &str, phrase: &str) -> Option<i64> {
    let (_, rest) = query.split_once(phrase)?;
    let n: i64 = rest.split_whitespace().next()?.parse().ok()?;
    n.checked_add(1)
}

/// First character of the trimmed text after the last occurrence of `phrase`
fn letter_after(query: &str, phrase: &str) -> Option<char> {
    let (_, rest) = query.rsplit_once(phrase)?;
    rest.trim().chars().next()
}

/// Derive a filter set from a free-text query.
///
/// Fails with [`QueryError::UnparsableQuery`] when no rule contributes a
/// constraint.
pub fn interpret(query: &str) -> QueryResult<FilterSet> {
    let lowered = query.to_lowercase();
    let mut filters = FilterSet::new();

    for rule in &RULES {
        rule.apply(&lowered, &mut filters);
    }

    if filters.is_empty() {
        return Err(QueryError::UnparsableQuery);
    }
    Ok(filters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palindromic_longer_than() {
        let filters = interpret("find palindromic strings longer than 5 characters").unwrap();

        assert_eq!(
            filters,
            FilterSet {
                is_palindrome: Some(true),
                min_length: Some(6),
                ..FilterSet::new()
            }
        );
    }

    #[test]
    fn test_single_word_palindromic() {
        let filters = interpret("all single word palindromic strings").unwrap();

        assert_eq!(filters.is_palindrome, Some(true));
        assert_eq!(filters.word_count, Some(1));
    }

    #[test]
    fn test_triggers_are_case_insensitive() {
        let filters = interpret("Strings LONGER THAN 10").unwrap();
        assert_eq!(filters.min_length, Some(11));
    }

    #[test]
    fn test_containing_the_letter() {
        let filters = interpret("strings containing the letter Z").unwrap();
        assert_eq!(filters.contains_character, Some('z'));
    }

    #[test]
    fn test_containing_the_letter_uses_last_occurrence() {
        let filters =
            interpret("containing the letter a or containing the letter q please").unwrap();
        assert_eq!(filters.contains_character, Some('q'));
    }

    #[test]
    fn test_containing_the_letter_without_letter_sets_nothing() {
        let filters = interpret("palindromic strings containing the letter   ").unwrap();

        assert_eq!(filters.contains_character, None);
        assert_eq!(filters.is_palindrome, Some(true));
    }

    #[test]
    fn test_longer_than_without_number_is_skipped() {
        let filters = interpret("single word strings longer than five").unwrap();

        assert_eq!(filters.min_length, None);
        assert_eq!(filters.word_count, Some(1));
    }

    #[test]
    fn test_longer_than_overflow_is_skipped() {
        let query = format!("palindromic longer than {}", i64::MAX);
        assert_eq!(interpret(&query).unwrap().min_length, None);
    }

    #[test]
    fn test_only_failed_extractions_is_unparsable() {
        assert_eq!(
            interpret("longer than lots containing the letter").unwrap_err(),
            QueryError::UnparsableQuery
        );
    }

    #[test]
    fn test_no_trigger_is_unparsable() {
        assert_eq!(interpret("show me everything").unwrap_err(), QueryError::UnparsableQuery);
        assert_eq!(interpret("").unwrap_err(), QueryError::UnparsableQuery);
    }

    #[test]
    fn test_never_sets_palindrome_false() {
        let filters = interpret("non-palindromic strings").unwrap();
        assert_eq!(filters.is_palindrome, Some(true));
    }
}
