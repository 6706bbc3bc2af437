//! Model record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a registered model, assigned by the server
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelId(pub String);

impl ModelId {
    /// Generate a fresh id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ModelId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A registered 3D model in the Curio catalog
///
/// Records are immutable once created; there is no update operation. The
/// `url` is an opaque absolute or server-relative URL whose content type is
/// only checked at load time by the asset loader.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRecord {
    /// Unique record identifier
    pub id: ModelId,
    /// Human-readable name
    pub name: Option<String>,
    /// Free-form description
    pub description: Option<String>,
    /// Source URL of the model asset (glTF/GLB)
    pub url: String,
    /// When the record was created
    pub upload_date: DateTime<Utc>,
}

impl ModelRecord {
    /// Create a new record with a generated id and the current timestamp
    pub fn new(name: Option<String>, description: Option<String>, url: String) -> Self {
        Self {
            id: ModelId::generate(),
            name,
            description,
            url,
            upload_date: Utc::now(),
        }
    }
}
