//! Analyzer Property Tests
//!
//! Tests for analysis invariants:
//! - Identifier depends only on the trimmed value
//! - Analysis is deterministic
//! - Frequency counts sum to length

use strand_analyzer::analyzer::{analyze, content_id};

// =============================================================================
// Helper Functions
// =============================================================================

fn samples() -> Vec<&'static str> {
    vec![
        "",
        " ",
        "a",
        "Racecar",
        " racecar ",
        "race car",
        "hello world",
        "\tTabbed\tand  spaced\n",
        "A man a plan a canal Panama",
        "Ünïcödé strings çount chars",
        "12321",
    ]
}

// =============================================================================
// Identifier Tests
// =============================================================================

/// Whitespace around the value does not change the identifier.
#[test]
fn test_identifier_ignores_surrounding_whitespace() {
    for value in samples() {
        let padded = format!("  \n{}\t ", value);
        assert_eq!(analyze(value).id, analyze(&padded).id, "{:?}", value);
    }
}

/// Interior whitespace does change the identifier.
#[test]
fn test_identifier_sensitive_to_interior_whitespace() {
    assert_ne!(analyze("ab").id, analyze("a b").id);
}

/// Identifier is the SHA-256 of the trimmed value.
#[test]
fn test_identifier_is_digest_of_trimmed() {
    assert_eq!(analyze("  abc  ").id, content_id("abc"));
    assert_eq!(analyze("abc").id.len(), 64);
}

/// Case is significant for identifiers.
#[test]
fn test_identifier_case_sensitive() {
    assert_ne!(analyze("Abc").id, analyze("abc").id);
}

// =============================================================================
// Determinism Tests
// =============================================================================

/// Same input yields identical analysis and identical serialized bytes.
#[test]
fn test_analysis_deterministic() {
    for value in samples() {
        let first = analyze(value);
        let first_bytes = serde_json::to_vec(&first).unwrap();

        for _ in 0..20 {
            let again = analyze(value);
            assert_eq!(first, again);
            assert_eq!(first_bytes, serde_json::to_vec(&again).unwrap());
        }
    }
}

// =============================================================================
// Property Tests
// =============================================================================

/// Frequency counts always sum to the trimmed length.
#[test]
fn test_frequency_sums_to_length() {
    for value in samples() {
        let analysis = analyze(value);
        assert_eq!(analysis.character_frequency_map.total(), analysis.length, "{:?}", value);
    }
}

/// Distinct characters equal the number of frequency keys.
#[test]
fn test_unique_characters_match_frequency_keys() {
    for value in samples() {
        let analysis = analyze(value);
        assert_eq!(analysis.unique_characters, analysis.character_frequency_map.len());
    }
}

/// Palindrome checks are case-insensitive and literal about spaces.
#[test]
fn test_palindrome_cases() {
    assert!(analyze("Racecar").is_palindrome);
    assert!(analyze(" racecar ").is_palindrome);
    assert!(!analyze("race car").is_palindrome);
    assert!(!analyze("hello").is_palindrome);
    assert!(!analyze("A man a plan a canal Panama").is_palindrome);
    assert!(analyze("12321").is_palindrome);
    assert!(analyze("").is_palindrome);
}

/// Frequency map serializes in first-occurrence order.
#[test]
fn test_frequency_map_json_order() {
    let json = serde_json::to_string(&analyze("mississippi").character_frequency_map).unwrap();
    assert_eq!(json, r#"{"m":1,"i":4,"s":4,"p":2}"#);
}
