//! # String Service
//!
//! Orchestrates the analyzer, the query engine and an injected
//! [`RecordStore`].
//!
//! Lookup and delete take the raw string, not an identifier: the service
//! re-derives the identifier through the analyzer, so `" abc "` and `"abc"`
//! address the same record.

mod errors;

pub use errors::{ServiceError, ServiceResult};

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::analyzer::{analyze, content_id, AnalyzedRecord};
use crate::observability::MetricsRegistry;
use crate::query::{self, FilteredList, InterpretedList};
use crate::store::RecordStore;

/// Body field carrying the string to analyze
pub const VALUE_FIELD: &str = "value";

/// Request orchestration over a shared store
#[derive(Clone)]
pub struct StringService {
    store: Arc<dyn RecordStore>,
    metrics: Arc<MetricsRegistry>,
}

impl StringService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self::with_metrics(store, Arc::new(MetricsRegistry::new()))
    }

    pub fn with_metrics(store: Arc<dyn RecordStore>, metrics: Arc<MetricsRegistry>) -> Self {
        Self { store, metrics }
    }

    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }

    /// Shared handle to the counters, for exposing them elsewhere
    pub fn metrics_handle(&self) -> Arc<MetricsRegistry> {
        Arc::clone(&self.metrics)
    }

    /// Create from a JSON request body `{ "value": <string> }`
    pub fn create(&self, body: &Value) -> ServiceResult<AnalyzedRecord> {
        let value = match body.get(VALUE_FIELD) {
            None | Some(Value::Null) => {
                return Err(ServiceError::MissingField(VALUE_FIELD.to_string()))
            }
            Some(Value::String(s)) => s,
            Some(_) => {
                return Err(ServiceError::InvalidType {
                    field: VALUE_FIELD.to_string(),
                    expected: "string".to_string(),
                })
            }
        };
        self.create_value(value)
    }

    /// Analyze and store `raw`; fails with `Conflict` if its content exists
    pub fn create_value(&self, raw: &str) -> ServiceResult<AnalyzedRecord> {
        let record = AnalyzedRecord::new(analyze(raw), Utc::now());

        match self.store.insert_if_absent(record.clone()) {
            Ok(()) => {
                self.metrics.increment_created();
                info!(id = %record.id(), length = record.analysis.length, "string record created");
                Ok(record)
            }
            Err(err) if err.is_duplicate() => {
                self.metrics.increment_conflicts();
                debug!(id = %record.id(), "duplicate string rejected");
                Err(ServiceError::Conflict)
            }
            Err(err) => {
                warn!(error = %err, "store insert failed");
                Err(err.into())
            }
        }
    }

    /// Fetch the record whose content matches `raw`
    pub fn get_by_value(&self, raw: &str) -> ServiceResult<AnalyzedRecord> {
        let id = content_id(raw.trim());
        let found = self.store.get(&id)?;
        self.metrics.record_lookup(found.is_some());
        found.ok_or(ServiceError::NotFound)
    }

    /// Delete the record whose content matches `raw`
    pub fn delete_by_value(&self, raw: &str) -> ServiceResult<()> {
        let id = content_id(raw.trim());
        if !self.store.delete(&id)? {
            return Err(ServiceError::NotFound);
        }
        self.metrics.increment_deleted();
        info!(id = %id, "string record deleted");
        Ok(())
    }

    /// List records matching structured filter parameters
    pub fn list(&self, params: &HashMap<String, String>) -> ServiceResult<FilteredList> {
        let records = self.scan_ordered()?;
        match query::filter_by_params(records, params) {
            Ok(list) => {
                self.metrics.increment_queries_executed();
                debug!(count = list.count, "structured filter applied");
                Ok(list)
            }
            Err(err) => {
                self.metrics.increment_queries_rejected();
                debug!(error = %err, "structured filter rejected");
                Err(err.into())
            }
        }
    }

    /// List records matching a natural-language query
    pub fn list_natural(&self, query_text: &str) -> ServiceResult<InterpretedList> {
        let records = self.scan_ordered()?;
        match query::filter_by_natural_language(records, query_text) {
            Ok(list) => {
                self.metrics.increment_queries_executed();
                info!(
                    query = query_text,
                    filters = ?list.interpreted_query.parsed_filters,
                    count = list.count,
                    "natural language query interpreted"
                );
                Ok(list)
            }
            Err(err) => {
                self.metrics.increment_queries_rejected();
                debug!(query = query_text, "natural language query not understood");
                Err(err.into())
            }
        }
    }

    /// Full scan in creation order, identifier as tie-break
    fn scan_ordered(&self) -> ServiceResult<Vec<AnalyzedRecord>> {
        let mut records = self.store.scan()?;
        records.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id().cmp(b.id()))
        });
        Ok(records)
    }
}
