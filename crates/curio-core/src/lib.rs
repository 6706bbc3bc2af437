//! Curio Core - Record types and the persisted model store
//!
//! This crate provides the foundational types for the Curio catalog:
//! - Model records describing registered 3D assets
//! - An insertion-ordered record store with JSON file persistence

pub mod record;
pub mod store;

pub use record::{ModelId, ModelRecord};
pub use store::{RecordStore, StoreError};
