//! Calculation history log
//!
//! Newest-first list of past valuations kept in a key-value store under a
//! single key. Reads that fail or find malformed data count as an empty log.

use std::collections::HashMap;

use crate::error::{HistoryError, StorageError};
use crate::models::HistoryEntry;

/// Key the browser tool stores its history under
pub const DEFAULT_HISTORY_KEY: &str = "gardenCalculations";

/// Number of entries kept
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// String key-value persistence (browser `localStorage` or similar)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-process store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Capped, newest-first history of valuations
#[derive(Debug, Clone)]
pub struct HistoryLog<S> {
    store: S,
    key: String,
    capacity: usize,
}

impl<S: KeyValueStore> HistoryLog<S> {
    pub fn new(store: S) -> Self {
        Self::with_settings(store, DEFAULT_HISTORY_KEY, DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_settings(store: S, key: &str, capacity: usize) -> Self {
        Self {
            store,
            key: key.to_string(),
            capacity,
        }
    }

    pub fn reconfigure(&mut self, key: &str, capacity: usize) {
        self.key = key.to_string();
        self.capacity = capacity;
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Read the stored entries; an absent or blank value is an empty log
    pub fn load(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        match self.store.get(&self.key)? {
            Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(&raw)?),
            _ => Ok(Vec::new()),
        }
    }

    /// Entries newest first, empty when the store cannot be read
    pub fn list(&self) -> Vec<HistoryEntry> {
        self.load().unwrap_or_else(|err| {
            tracing::warn!(key = %self.key, error = %err, "discarding unreadable history");
            Vec::new()
        })
    }

    /// Prepend an entry and drop anything beyond capacity
    pub fn record(&mut self, entry: HistoryEntry) {
        let mut entries = self.list();
        entries.insert(0, entry);
        entries.truncate(self.capacity);

        let written = serde_json::to_string(&entries)
            .map_err(HistoryError::from)
            .and_then(|json| self.store.set(&self.key, &json).map_err(HistoryError::from));
        match written {
            Ok(()) => tracing::debug!(key = %self.key, entries = entries.len(), "history recorded"),
            Err(err) => tracing::warn!(key = %self.key, error = %err, "failed to persist history"),
        }
    }

    pub fn clear(&mut self) -> Result<(), HistoryError> {
        self.store.remove(&self.key)?;
        Ok(())
    }
}
