//! # Query Results
//!
//! Result shapes for filtered listings.

use serde::{Deserialize, Serialize};

use crate::analyzer::AnalyzedRecord;

use super::filter::FilterSet;

/// Listing produced by structured filter parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilteredList {
    pub data: Vec<AnalyzedRecord>,
    pub count: usize,
    pub filters_applied: FilterSet,
}

impl FilteredList {
    pub fn new(data: Vec<AnalyzedRecord>, filters_applied: FilterSet) -> Self {
        let count = data.len();
        Self {
            data,
            count,
            filters_applied,
        }
    }
}

/// Echo of a natural-language query and what it was read as
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: FilterSet,
}

/// Listing produced by a natural-language query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretedList {
    pub data: Vec<AnalyzedRecord>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

impl InterpretedList {
    pub fn new(data: Vec<AnalyzedRecord>, original: impl Into<String>, parsed_filters: FilterSet) -> Self {
        let count = data.len();
        Self {
            data,
            count,
            interpreted_query: InterpretedQuery {
                original: original.into(),
                parsed_filters,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filtered_list_serialization() {
        let filters = FilterSet {
            word_count: Some(1),
            ..FilterSet::new()
        };
        let list = FilteredList::new(Vec::new(), filters);

        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["count"], 0);
        assert_eq!(json["data"], serde_json::json!([]));
        assert_eq!(json["filters_applied"], serde_json::json!({"word_count": 1}));
    }

    #[test]
    fn test_interpreted_list_serialization() {
        let filters = FilterSet {
            is_palindrome: Some(true),
            ..FilterSet::new()
        };
        let list = InterpretedList::new(Vec::new(), "Palindromic strings", filters);

        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["interpreted_query"]["original"], "Palindromic strings");
        assert_eq!(
            json["interpreted_query"]["parsed_filters"],
            serde_json::json!({"is_palindrome": true})
        );
    }
}
