//! Application state management

use anyhow::Result;
use curio_core::{ModelId, ModelRecord, RecordStore, StoreError};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::config::Config;

/// Shared application state
pub struct AppState {
    /// Persisted model catalog
    store: RwLock<RecordStore>,
    /// Path the store is mirrored to
    store_path: PathBuf,
    /// Configuration
    pub config: Config,
}

impl AppState {
    /// Create new application state, loading the store from disk
    pub fn new(config: Config) -> Result<Arc<Self>> {
        let store_path = PathBuf::from(&config.store.path);
        let store = RecordStore::load_or_create(&store_path)?;
        info!(count = store.len(), "Catalog ready");

        Ok(Arc::new(Self {
            store: RwLock::new(store),
            store_path,
            config,
        }))
    }

    /// All records, in insertion order
    pub async fn list_models(&self) -> Vec<ModelRecord> {
        self.store.read().await.list().to_vec()
    }

    /// Create a record and persist the store
    pub async fn create_model(
        &self,
        name: Option<String>,
        description: Option<String>,
        url: String,
    ) -> Result<ModelRecord, StoreError> {
        let mut store = self.store.write().await;
        let record = store.create(name, description, url)?;
        self.persist(&mut store)?;
        Ok(record)
    }

    /// Delete a record and persist the store
    pub async fn delete_model(&self, id: &ModelId) -> Result<ModelRecord, StoreError> {
        let mut store = self.store.write().await;
        let record = store.delete(id)?;
        self.persist(&mut store)?;
        Ok(record)
    }

    /// Save under the held write lock; on failure reload from disk so the
    /// in-memory catalog never diverges from what was actually persisted
    fn persist(&self, store: &mut RecordStore) -> Result<(), StoreError> {
        if let Err(e) = store.save(&self.store_path) {
            error!(path = %self.store_path.display(), error = %e, "Failed to save catalog");
            *store = reload(&self.store_path);
            return Err(e);
        }
        Ok(())
    }
}

fn reload(path: &Path) -> RecordStore {
    RecordStore::load_or_create(path).unwrap_or_else(|e| {
        error!(path = %path.display(), error = %e, "Failed to reload catalog, starting empty");
        RecordStore::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tempfile::TempDir;

    fn test_state(dir: &TempDir) -> Arc<AppState> {
        let mut config = Config::default();
        config.store.path = dir
            .path()
            .join("catalog.json")
            .to_string_lossy()
            .into_owned();
        AppState::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_create_persists_to_disk() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);

        let record = state
            .create_model(Some("Cube".into()), None, "https://x/cube.glb".into())
            .await
            .unwrap();

        // A fresh state over the same file sees the record
        let reopened = test_state(&dir);
        let records = reopened.list_models().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, record.id);
    }

    #[tokio::test]
    async fn test_delete_unknown_id() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);
        state
            .create_model(None, None, "https://x/a.glb".into())
            .await
            .unwrap();

        let result = state.delete_model(&ModelId::from("missing")).await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
        assert_eq!(state.list_models().await.len(), 1);
    }
}
