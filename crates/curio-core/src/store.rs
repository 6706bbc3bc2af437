//! Insertion-ordered record store with JSON file persistence
//!
//! The store keeps records in memory in the order they were created and
//! mirrors them to a single JSON file. Callers decide when to persist;
//! mutations themselves never touch the disk.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::record::{ModelId, ModelRecord};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("model not found: {0}")]
    NotFound(ModelId),
    #[error("model URL must not be empty")]
    EmptyUrl,
}

/// The persisted catalog of model records
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordStore {
    /// Records in insertion order
    records: Vec<ModelRecord>,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from a file
    pub fn from_file(path: &Path) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path)?;
        let store: RecordStore = serde_json::from_str(&content)?;
        Ok(store)
    }

    /// Load a store or create an empty one if the file doesn't exist
    pub fn load_or_create(path: &Path) -> Result<Self, StoreError> {
        if path.exists() {
            let store = Self::from_file(path)?;
            info!(path = %path.display(), count = store.len(), "Loaded record store");
            Ok(store)
        } else {
            info!(path = %path.display(), "Record store not found, starting empty");
            Ok(Self::new())
        }
    }

    /// Save the store to a file
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Create a new record and append it to the catalog
    pub fn create(
        &mut self,
        name: Option<String>,
        description: Option<String>,
        url: String,
    ) -> Result<ModelRecord, StoreError> {
        if url.trim().is_empty() {
            return Err(StoreError::EmptyUrl);
        }
        let record = ModelRecord::new(name, description, url);
        self.records.push(record.clone());
        Ok(record)
    }

    /// All records, in insertion order
    pub fn list(&self) -> &[ModelRecord] {
        &self.records
    }

    /// Look up a record by id
    pub fn get(&self, id: &ModelId) -> Option<&ModelRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    /// Remove a record by id, returning it
    pub fn delete(&mut self, id: &ModelId) -> Result<ModelRecord, StoreError> {
        match self.records.iter().position(|r| &r.id == id) {
            Some(index) => Ok(self.records.remove(index)),
            None => Err(StoreError::NotFound(id.clone())),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
