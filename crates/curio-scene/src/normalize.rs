//! Viewing-frame normalization
//!
//! Given an arbitrary loaded scene, compute the transform that fits it into
//! the canonical viewing frame: bounding diagonal of [`TARGET_SIZE`] units,
//! centroid at the world origin. Runs exactly once per successful load; the
//! caller must not render a scene whose normalization failed.

use glam::Vec3;
use thiserror::Error;
use tracing::debug;

use crate::bounds::Aabb;
use crate::graph::{NodeKind, SceneGraph};

/// Diagonal length of the canonical viewing frame, chosen to fit a viewport
/// with the camera at distance 5 and a 45 degree field of view
pub const TARGET_SIZE: f32 = 3.0;

/// Shading defaults applied to every mesh material, giving a consistent
/// matte-plastic look regardless of source authoring
const DEFAULT_ROUGHNESS: f32 = 0.7;
const DEFAULT_METALNESS: f32 = 0.3;

/// Bounds smaller than this are treated as degenerate
const MIN_DIAGONAL: f32 = 1e-6;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormalizeError {
    #[error("scene contains no renderable geometry")]
    EmptyScene,
    #[error("scene bounding box is degenerate (zero size)")]
    DegenerateBounds,
}

/// A scene fitted into the canonical viewing frame
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedScene {
    pub graph: SceneGraph,
    /// Half the original bounding diagonal
    pub bounding_radius: f32,
    /// World-space offset subtracted from the root to recenter the scene
    pub center_offset: Vec3,
    /// Uniform scale applied to the root
    pub scale_factor: f32,
}

/// Compute the world-space bounding box over all mesh geometry
pub fn world_bounds(graph: &SceneGraph) -> Aabb {
    let mut bounds = Aabb::EMPTY;
    graph.visit(|node, world| {
        if let NodeKind::Mesh { aabb, .. } = &node.kind {
            if !aabb.is_empty() {
                for corner in aabb.corners() {
                    bounds.union_point(world.transform_point(corner));
                }
            }
        }
    });
    bounds
}

/// Fit a loaded scene into the canonical viewing frame
///
/// Scales the root uniformly so the bounding diagonal equals [`TARGET_SIZE`],
/// recenters the bounding box at the origin, and applies shading defaults to
/// every mesh. Fails without producing a renderable result when the scene
/// has no geometry or a zero-size bounding box.
pub fn normalize(mut graph: SceneGraph) -> Result<NormalizedScene, NormalizeError> {
    let bounds = world_bounds(&graph);
    if bounds.is_empty() {
        return Err(NormalizeError::EmptyScene);
    }

    let size = bounds.diagonal();
    if size < MIN_DIAGONAL {
        return Err(NormalizeError::DegenerateBounds);
    }

    let scale_factor = TARGET_SIZE / size;
    graph.root.transform.scale *= scale_factor;

    // Center of the scaled box; subtracting it puts the centroid at origin
    let center_offset = world_bounds(&graph).center();
    graph.root.transform.translation -= center_offset;

    graph.visit_mut(|node| {
        if let NodeKind::Mesh { material, .. } = &mut node.kind {
            if let Some(material) = material {
                material.roughness = DEFAULT_ROUGHNESS;
                material.metalness = DEFAULT_METALNESS;
                material.cast_shadow = true;
                material.receive_shadow = true;
            }
        }
    });

    debug!(size, scale_factor, "Normalized scene");

    Ok(NormalizedScene {
        graph,
        bounding_radius: size * 0.5,
        center_offset,
        scale_factor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Material, SceneNode, Transform};
    use approx::assert_relative_eq;
    use glam::Quat;

    fn two_box_scene() -> SceneGraph {
        let a = SceneNode::mesh(
            "a",
            Aabb::new(Vec3::splat(-0.5), Vec3::splat(0.5)),
            Some(Material::default()),
        )
        .with_transform(Transform::from_translation(Vec3::new(4.0, 0.0, 0.0)));
        let b = SceneNode::mesh(
            "b",
            Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0)),
            Some(Material::default()),
        )
        .with_transform(Transform::from_translation(Vec3::new(-2.0, 3.0, 1.0)));
        SceneGraph::new(SceneNode::group("root").with_children(vec![a, b]))
    }

    #[test]
    fn test_normalized_diagonal_is_target_size() {
        let normalized = normalize(two_box_scene()).unwrap();
        let bounds = world_bounds(&normalized.graph);
        assert_relative_eq!(bounds.diagonal(), TARGET_SIZE, epsilon = 1e-4);
    }

    #[test]
    fn test_normalized_center_is_origin() {
        let normalized = normalize(two_box_scene()).unwrap();
        let center = world_bounds(&normalized.graph).center();
        assert!(center.length() < 1e-4, "center = {:?}", center);
    }

    #[test]
    fn test_normalize_with_rotated_root() {
        let mut graph = two_box_scene();
        graph.root.transform.rotation = Quat::from_rotation_y(0.7);
        graph.root.transform.translation = Vec3::new(10.0, -5.0, 2.0);

        let normalized = normalize(graph).unwrap();
        let bounds = world_bounds(&normalized.graph);
        assert_relative_eq!(bounds.diagonal(), TARGET_SIZE, epsilon = 1e-3);
        assert!(bounds.center().length() < 1e-3);
    }

    #[test]
    fn test_empty_scene_fails() {
        let graph = SceneGraph::new(SceneNode::group("root"));
        assert_eq!(normalize(graph), Err(NormalizeError::EmptyScene));
    }

    #[test]
    fn test_degenerate_scene_fails() {
        // Single mesh whose bounds collapse to a point
        let point = SceneNode::mesh("point", Aabb::new(Vec3::ZERO, Vec3::ZERO), None);
        let graph = SceneGraph::new(SceneNode::group("root").with_children(vec![point]));
        assert_eq!(normalize(graph), Err(NormalizeError::DegenerateBounds));
    }

    #[test]
    fn test_material_defaults_applied() {
        let normalized = normalize(two_box_scene()).unwrap();
        let mut seen = 0;
        normalized.graph.visit(|node, _| {
            if let NodeKind::Mesh {
                material: Some(m), ..
            } = &node.kind
            {
                assert_eq!(m.roughness, 0.7);
                assert_eq!(m.metalness, 0.3);
                assert!(m.cast_shadow);
                assert!(m.receive_shadow);
                seen += 1;
            }
        });
        assert_eq!(seen, 2);
    }

    #[test]
    fn test_scale_factor_matches_original_size() {
        let graph = two_box_scene();
        let size = world_bounds(&graph).diagonal();
        let normalized = normalize(graph).unwrap();
        assert_relative_eq!(normalized.scale_factor, TARGET_SIZE / size, epsilon = 1e-6);
        assert_relative_eq!(normalized.bounding_radius, size * 0.5, epsilon = 1e-6);
    }
}
