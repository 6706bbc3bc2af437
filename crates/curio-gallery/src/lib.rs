//! Curio Gallery - Catalog client and gallery UI state
//!
//! The thin plumbing around the viewer: an HTTP client for the catalog API,
//! the gallery list state with confirmed-delete semantics, and the upload
//! form state machine. Rendering is left to the embedding frontend; this
//! crate only models the behavior.

pub mod client;
pub mod form;
pub mod state;

pub use client::{ApiClient, ApiConfig, ClientError, UploadResponse};
pub use form::{UploadForm, UploadStatus};
pub use state::{Gallery, GalleryState};
