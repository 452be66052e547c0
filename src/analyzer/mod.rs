//! # String Analyzer
//!
//! Pure analysis of submitted strings.
//!
//! Every derived property is computed from the trimmed value: leading and
//! trailing whitespace is stripped once, nothing else is normalized. The
//! content identifier is a SHA-256 digest of the trimmed value, so two
//! submissions that differ only in surrounding whitespace share an identifier.
//!
//! # Usage
//!
//! ```
//! use strand_analyzer::analyzer::analyze;
//!
//! let analysis = analyze(" Racecar ");
//! assert!(analysis.is_palindrome);
//! assert_eq!(analysis.length, 7);
//! ```

mod digest;
mod frequency;
mod record;

pub use digest::content_id;
pub use frequency::CharacterFrequency;
pub use record::{AnalyzedRecord, StringAnalysis};

use std::collections::HashSet;

/// Analyze a raw string.
///
/// Total over every input, including the empty string. The same trimmed
/// input always yields an identical analysis.
pub fn analyze(raw: &str) -> StringAnalysis {
    let trimmed = raw.trim();

    StringAnalysis {
        id: content_id(trimmed),
        original_value: raw.to_string(),
        length: trimmed.chars().count(),
        is_palindrome: is_palindrome(trimmed),
        unique_characters: trimmed.chars().collect::<HashSet<_>>().len(),
        word_count: trimmed.split_whitespace().count(),
        character_frequency_map: CharacterFrequency::from_str_chars(trimmed),
    }
}

/// Case-insensitive symmetry check. The empty string is a palindrome.
///
/// Reverses before lowercasing: some characters lowercase to several, so
/// reversing the lowered form would split them.
fn is_palindrome(value: &str) -> bool {
    let reversed: String = value.chars().rev().collect();
    value.to_lowercase() == reversed.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_properties() {
        let analysis = analyze("hello world");

        assert_eq!(analysis.length, 11);
        assert!(!analysis.is_palindrome);
        assert_eq!(analysis.unique_characters, 8);
        assert_eq!(analysis.word_count, 2);
        assert_eq!(analysis.character_frequency_map.get('l'), Some(3));
        assert_eq!(analysis.character_frequency_map.get(' '), Some(1));
    }

    #[test]
    fn test_palindrome_is_case_insensitive() {
        assert!(analyze("Racecar").is_palindrome);
        assert!(analyze(" racecar ").is_palindrome);
        assert!(!analyze("race car").is_palindrome);
        assert!(!analyze("hello").is_palindrome);
    }

    #[test]
    fn test_palindrome_with_multi_char_lowercase() {
        // 'İ' lowercases to 'i' plus a combining dot
        assert!(analyze("İ").is_palindrome);
        assert!(analyze("aİa").is_palindrome);
        assert!(analyze("ẞ").is_palindrome);
        assert!(!analyze("İa").is_palindrome);
    }

    #[test]
    fn test_empty_string() {
        let analysis = analyze("");

        assert_eq!(analysis.length, 0);
        assert!(analysis.is_palindrome);
        assert_eq!(analysis.unique_characters, 0);
        assert_eq!(analysis.word_count, 0);
        assert!(analysis.character_frequency_map.is_empty());
    }

    #[test]
    fn test_whitespace_only_trims_to_empty() {
        let analysis = analyze("   \t\n ");

        assert_eq!(analysis.length, 0);
        assert_eq!(analysis.word_count, 0);
        assert_eq!(analysis.id, analyze("").id);
        assert_eq!(analysis.original_value, "   \t\n ");
    }

    #[test]
    fn test_original_value_is_untrimmed() {
        let analysis = analyze("  padded  ");

        assert_eq!(analysis.original_value, "  padded  ");
        assert_eq!(analysis.length, 6);
    }

    #[test]
    fn test_word_count_collapses_whitespace_runs() {
        assert_eq!(analyze("a   b\t\tc\nd").word_count, 4);
    }

    #[test]
    fn test_unique_characters_case_sensitive() {
        assert_eq!(analyze("aA").unique_characters, 2);
        assert_eq!(analyze("a a").unique_characters, 2);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let analysis = analyze("héllo");

        assert_eq!(analysis.length, 5);
        assert_eq!(analysis.character_frequency_map.get('é'), Some(1));
    }

    #[test]
    fn test_frequency_sums_to_length() {
        for value in ["", "a", "banana split", "  Mississippi  ", "ÄÖÜ äöü"] {
            let analysis = analyze(value);
            assert_eq!(analysis.character_frequency_map.total(), analysis.length);
        }
    }
}
