//! # Record Store
//!
//! Keyed storage for analyzed records.
//!
//! The service only ever talks to [`RecordStore`]; the store is injected,
//! never a process-wide singleton. Creation goes through
//! [`RecordStore::insert_if_absent`], which checks and inserts as one atomic
//! step so concurrent creates of the same content cannot both succeed.

mod errors;
mod memory;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;

use crate::analyzer::AnalyzedRecord;

/// Keyed record storage
pub trait RecordStore: Send + Sync {
    /// Whether a record with `id` exists
    fn exists(&self, id: &str) -> StoreResult<bool>;

    /// Insert `record` unless its identifier is already present.
    ///
    /// Fails with [`StoreError::DuplicateKey`] when the key exists; the
    /// existing record is left untouched.
    fn insert_if_absent(&self, record: AnalyzedRecord) -> StoreResult<()>;

    /// Fetch a record by identifier
    fn get(&self, id: &str) -> StoreResult<Option<AnalyzedRecord>>;

    /// Remove a record; returns whether anything was removed
    fn delete(&self, id: &str) -> StoreResult<bool>;

    /// Every stored record, in no particular order
    fn scan(&self) -> StoreResult<Vec<AnalyzedRecord>>;

    /// Number of stored records
    fn len(&self) -> StoreResult<usize> {
        Ok(self.scan()?.len())
    }
}
