//! In-memory record store

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::analyzer::AnalyzedRecord;

use super::{RecordStore, StoreError, StoreResult};

/// Hash-map backed store guarded by a single `RwLock`
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, AnalyzedRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, HashMap<String, AnalyzedRecord>>> {
        self.records
            .read()
            .map_err(|_| StoreError::Unavailable("record lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, HashMap<String, AnalyzedRecord>>> {
        self.records
            .write()
            .map_err(|_| StoreError::Unavailable("record lock poisoned".to_string()))
    }
}

impl RecordStore for MemoryStore {
    fn exists(&self, id: &str) -> StoreResult<bool> {
        Ok(self.read()?.contains_key(id))
    }

    fn insert_if_absent(&self, record: AnalyzedRecord) -> StoreResult<()> {
        let mut records = self.write()?;
        if records.contains_key(record.id()) {
            return Err(StoreError::DuplicateKey(record.id().to_string()));
        }
        records.insert(record.id().to_string(), record);
        Ok(())
    }

    fn get(&self, id: &str) -> StoreResult<Option<AnalyzedRecord>> {
        Ok(self.read()?.get(id).cloned())
    }

    fn delete(&self, id: &str) -> StoreResult<bool> {
        Ok(self.write()?.remove(id).is_some())
    }

    fn scan(&self) -> StoreResult<Vec<AnalyzedRecord>> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }
}
