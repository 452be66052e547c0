//! # Query Engine
//!
//! Turns structured filter parameters or a free-text query into a
//! [`FilterSet`] and applies it over a full record scan.
//!
//! Both entry points are pure: they take the scanned records and return the
//! matches together with an echo of what was applied.

pub mod errors;
pub mod filter;
pub mod natural;
pub mod parser;
pub mod response;

pub use errors::{QueryError, QueryResult};
pub use filter::{Constraint, FilterSet};
pub use natural::interpret;
pub use parser::FILTER_PARAMS;
pub use response::{FilteredList, InterpretedList, InterpretedQuery};

use std::collections::HashMap;

use crate::analyzer::AnalyzedRecord;

/// Filter `records` by raw structured parameters
pub fn filter_by_params(
    records: Vec<AnalyzedRecord>,
    params: &HashMap<String, String>,
) -> QueryResult<FilteredList> {
    let filters = FilterSet::parse(params)?;
    let data = filters.apply(records);
    Ok(FilteredList::new(data, filters))
}

/// Filter `records` by a natural-language query
pub fn filter_by_natural_language(
    records: Vec<AnalyzedRecord>,
    query: &str,
) -> QueryResult<InterpretedList> {
    let filters = interpret(query)?;
    let data = filters.apply(records);
    Ok(InterpretedList::new(data, query, filters))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;
    use chrono::Utc;

    fn records(values: &[&str]) -> Vec<AnalyzedRecord> {
        values
            .iter()
            .map(|v| AnalyzedRecord::new(analyze(v), Utc::now()))
            .collect()
    }

    fn values(list: &[AnalyzedRecord]) -> Vec<&str> {
        list.iter().map(|r| r.analysis.original_value.as_str()).collect()
    }

    #[test]
    fn test_exact_length_window() {
        let mut params = HashMap::new();
        params.insert("min_length".to_string(), "5".to_string());
        params.insert("max_length".to_string(), "5".to_string());

        let list = filter_by_params(records(&["four", "fives", "sixsix", "level"]), &params).unwrap();

        assert_eq!(values(&list.data), vec!["fives", "level"]);
        assert_eq!(list.count, 2);
        assert_eq!(list.filters_applied.min_length, Some(5));
        assert_eq!(list.filters_applied.max_length, Some(5));
    }

    #[test]
    fn test_no_params_returns_everything() {
        let list = filter_by_params(records(&["a", "b"]), &HashMap::new()).unwrap();

        assert_eq!(list.count, 2);
        assert!(list.filters_applied.is_empty());
    }

    #[test]
    fn test_natural_language_filters() {
        let list = filter_by_natural_language(
            records(&["racecar", "noon", "rotator", "not one"]),
            "palindromic strings longer than 5 characters",
        )
        .unwrap();

        assert_eq!(values(&list.data), vec!["racecar", "rotator"]);
        assert_eq!(list.interpreted_query.original, "palindromic strings longer than 5 characters");
    }

    #[test]
    fn test_natural_language_unparsable() {
        let err = filter_by_natural_language(records(&["x"]), "gibberish").unwrap_err();
        assert_eq!(err, QueryError::UnparsableQuery);
    }
}
