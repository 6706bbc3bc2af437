//! Curio Scene - Scene-graph types and viewing-frame normalization
//!
//! This crate provides the model-normalization half of the viewer core:
//! - A minimal scene graph as produced by an external asset loader
//! - World-space bounding volume computation
//! - `normalize`, which fits an arbitrary scene into the canonical viewing
//!   frame (centered at the origin, bounding diagonal of 3 units) and
//!   applies consistent shading defaults

pub mod bounds;
pub mod graph;
pub mod normalize;

pub use bounds::Aabb;
pub use graph::{Material, NodeKind, SceneGraph, SceneNode, Transform};
pub use normalize::{normalize, world_bounds, NormalizeError, NormalizedScene, TARGET_SIZE};
