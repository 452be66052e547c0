//! # Filter Parameter Parser
//!
//! Coerces raw list-query parameters into a [`FilterSet`].

use std::collections::HashMap;

use super::errors::{QueryError, QueryResult};
use super::filter::FilterSet;

/// Parameters that carry filter meaning; anything else is ignored
pub const FILTER_PARAMS: [&str; 5] = [
    "is_palindrome",
    "min_length",
    "max_length",
    "word_count",
    "contains_character",
];

const TRUTHY: [&str; 5] = ["true", "1", "yes", "y", "t"];
const FALSY: [&str; 5] = ["false", "0", "no", "n", "f"];

impl FilterSet {
    /// Parse filter parameters from a HashMap.
    ///
    /// Parameters are checked in a fixed order, so the first reported
    /// failure does not depend on map iteration order.
    pub fn parse(params: &HashMap<String, String>) -> QueryResult<Self> {
        let mut filters = FilterSet::new();

        for key in FILTER_PARAMS {
            let Some(value) = params.get(key) else {
                continue;
            };
            match key {
                "is_palindrome" => filters.is_palindrome = Some(parse_bool(key, value)?),
                "min_length" => filters.min_length = Some(parse_int(key, value)?),
                "max_length" => filters.max_length = Some(parse_int(key, value)?),
                "word_count" => filters.word_count = Some(parse_int(key, value)?),
                "contains_character" => {
                    filters.contains_character = Some(parse_single_char(key, value)?)
                }
                _ => {}
            }
        }

        Ok(filters)
    }
}

fn parse_bool(param: &str, value: &str) -> QueryResult<bool> {
    let lowered = value.to_lowercase();
    if TRUTHY.contains(&lowered.as_str()) {
        Ok(true)
    } else if FALSY.contains(&lowered.as_str()) {
        Ok(false)
    } else {
        Err(QueryError::invalid_filter(
            param,
            format!("expected a boolean, got '{}'", value),
        ))
    }
}

fn parse_int(param: &str, value: &str) -> QueryResult<i64> {
    value.trim().parse::<i64>().map_err(|_| {
        QueryError::invalid_filter(param, format!("expected an integer, got '{}'", value))
    })
}

fn parse_single_char(param: &str, value: &str) -> QueryResult<char> {
    let mut chars = value.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(QueryError::invalid_filter(
            param,
            format!("expected exactly one character, got '{}'", value),
        )),
    }
}
