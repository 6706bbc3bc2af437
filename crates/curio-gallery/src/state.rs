//! Gallery list state
//!
//! Mirrors the catalog on the client side. Records are only removed from
//! the local list after the server confirms a delete, so a failed delete
//! never needs a rollback.

use curio_core::{ModelId, ModelRecord};
use tracing::warn;

use crate::client::{ApiClient, ClientError};

/// Client-side view of the catalog list
#[derive(Debug, Default)]
pub struct GalleryState {
    pub records: Vec<ModelRecord>,
    pub loading: bool,
    pub error: Option<String>,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn fetch_succeeded(&mut self, records: Vec<ModelRecord>) {
        self.records = records;
        self.loading = false;
        self.error = None;
    }

    pub fn fetch_failed(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    pub fn record(&self, id: &ModelId) -> Option<&ModelRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    /// Remove a record from the local list; call only after the server
    /// confirmed the delete
    pub fn remove(&mut self, id: &ModelId) {
        self.records.retain(|r| &r.id != id);
    }
}

/// Gallery combining the API client with list state
pub struct Gallery {
    pub client: ApiClient,
    pub state: GalleryState,
}

impl Gallery {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: GalleryState::new(),
        }
    }

    /// Refresh the record list from the server
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        self.state.begin_fetch();
        match self.client.list_models().await {
            Ok(records) => {
                self.state.fetch_succeeded(records);
                Ok(())
            }
            Err(e) => {
                self.state.fetch_failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Delete a record after a blocking user confirmation
    ///
    /// `confirm` is the caller's prompt; when it declines, nothing happens.
    /// The record leaves the local list only after the API call succeeds,
    /// so a server failure leaves the gallery unchanged.
    pub async fn delete<F>(&mut self, id: &ModelId, confirm: F) -> Result<bool, ClientError>
    where
        F: FnOnce(&ModelRecord) -> bool,
    {
        let Some(record) = self.state.record(id) else {
            return Ok(false);
        };
        if !confirm(record) {
            return Ok(false);
        }

        match self.client.delete_model(id).await {
            Ok(()) => {
                self.state.remove(id);
                Ok(true)
            }
            Err(e) => {
                warn!(id = %id, error = %e, "Delete failed");
                self.state.error = Some(e.to_string());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ApiConfig;

    fn records(n: usize) -> Vec<ModelRecord> {
        (0..n)
            .map(|i| {
                ModelRecord::new(
                    Some(format!("model-{}", i)),
                    None,
                    format!("https://x/m{}.glb", i),
                )
            })
            .collect()
    }

    #[test]
    fn test_fetch_lifecycle() {
        let mut state = GalleryState::new();
        state.begin_fetch();
        assert!(state.loading);

        state.fetch_succeeded(records(2));
        assert!(!state.loading);
        assert_eq!(state.records.len(), 2);

        state.begin_fetch();
        state.fetch_failed("connection refused");
        assert!(!state.loading);
        assert!(state.error.is_some());
        // Prior records stay visible alongside the error
        assert_eq!(state.records.len(), 2);
    }

    #[test]
    fn test_remove_only_targets_one_record() {
        let mut state = GalleryState::new();
        state.fetch_succeeded(records(3));
        let id = state.records[1].id.clone();
        state.remove(&id);
        assert_eq!(state.records.len(), 2);
        assert!(state.record(&id).is_none());
    }

    #[tokio::test]
    async fn test_declined_confirmation_leaves_list_unchanged() {
        let client = ApiClient::new(ApiConfig::new("http://localhost:8080")).unwrap();
        let mut gallery = Gallery::new(client);
        gallery.state.fetch_succeeded(records(2));
        let id = gallery.state.records[0].id.clone();

        // Declining the prompt returns before any network call
        let deleted = gallery.delete(&id, |_| false).await.unwrap();
        assert!(!deleted);
        assert_eq!(gallery.state.records.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_a_noop() {
        let client = ApiClient::new(ApiConfig::new("http://localhost:8080")).unwrap();
        let mut gallery = Gallery::new(client);
        gallery.state.fetch_succeeded(records(1));

        let deleted = gallery
            .delete(&ModelId::from("no-such-id"), |_| true)
            .await
            .unwrap();
        assert!(!deleted);
        assert_eq!(gallery.state.records.len(), 1);
    }
}
