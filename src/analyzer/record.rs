//! Analysis results and stored records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CharacterFrequency;

/// Properties derived from a submitted string.
///
/// Produced by [`super::analyze`]; carries no storage state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringAnalysis {
    /// SHA-256 hex digest of the trimmed value
    pub id: String,

    /// The string exactly as submitted
    pub original_value: String,

    /// Character count of the trimmed value
    pub length: usize,

    /// Case-insensitive palindrome check on the trimmed value
    pub is_palindrome: bool,

    /// Distinct characters in the trimmed value (case-sensitive)
    pub unique_characters: usize,

    /// Maximal non-whitespace runs in the trimmed value
    pub word_count: usize,

    /// Per-character counts in first-occurrence order
    pub character_frequency_map: CharacterFrequency,
}

/// A stored analysis.
///
/// Write-once: the store may drop a record but never changes one in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedRecord {
    #[serde(flatten)]
    pub analysis: StringAnalysis,

    /// When the record entered the store
    pub created_at: DateTime<Utc>,
}

impl AnalyzedRecord {
    /// Stamp an analysis with its storage time
    pub fn new(analysis: StringAnalysis, created_at: DateTime<Utc>) -> Self {
        Self {
            analysis,
            created_at,
        }
    }

    /// The record's primary key
    pub fn id(&self) -> &str {
        &self.analysis.id
    }
}
