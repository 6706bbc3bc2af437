//! Scene-graph types as handed over by an external asset loader
//!
//! Format decoding is entirely the loader's responsibility; this crate only
//! sees the decoded hierarchy of transforms and mesh bounds.

use glam::{Quat, Vec3};

use crate::bounds::Aabb;

/// Local TRS transform of a scene node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Apply scale, rotation, then translation to a point
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.translation + self.rotation * (self.scale * point)
    }

    /// Compose with a child transform (self is the parent)
    pub fn mul_transform(&self, child: &Transform) -> Transform {
        Transform {
            translation: self.transform_point(child.translation),
            rotation: self.rotation * child.rotation,
            scale: self.scale * child.scale,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Surface material parameters carried by a mesh node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub roughness: f32,
    pub metalness: f32,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            roughness: 0.5,
            metalness: 0.0,
            cast_shadow: false,
            receive_shadow: false,
        }
    }
}

/// Closed capability set for scene nodes: a node either carries renderable
/// geometry or only groups children
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Non-renderable grouping node
    Group,
    /// Renderable mesh with local-space bounds and an optional material
    Mesh {
        aabb: Aabb,
        material: Option<Material>,
    },
}

/// A node in the loaded scene hierarchy
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub name: String,
    pub transform: Transform,
    pub kind: NodeKind,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// Create an empty grouping node
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::IDENTITY,
            kind: NodeKind::Group,
            children: Vec::new(),
        }
    }

    /// Create a mesh node with the given local bounds
    pub fn mesh(name: impl Into<String>, aabb: Aabb, material: Option<Material>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::IDENTITY,
            kind: NodeKind::Mesh { aabb, material },
            children: Vec::new(),
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_children(mut self, children: Vec<SceneNode>) -> Self {
        self.children = children;
        self
    }
}

/// A complete loaded scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneGraph {
    pub root: SceneNode,
}

impl SceneGraph {
    pub fn new(root: SceneNode) -> Self {
        Self { root }
    }

    /// Depth-first visit of every node with its accumulated world transform
    pub fn visit<F>(&self, mut f: F)
    where
        F: FnMut(&SceneNode, &Transform),
    {
        visit_node(&self.root, &Transform::IDENTITY, &mut f);
    }

    /// Depth-first mutable visit of every node
    pub fn visit_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut SceneNode),
    {
        visit_node_mut(&mut self.root, &mut f);
    }
}

fn visit_node<F>(node: &SceneNode, parent: &Transform, f: &mut F)
where
    F: FnMut(&SceneNode, &Transform),
{
    let world = parent.mul_transform(&node.transform);
    f(node, &world);
    for child in &node.children {
        visit_node(child, &world, f);
    }
}

fn visit_node_mut<F>(node: &mut SceneNode, f: &mut F)
where
    F: FnMut(&mut SceneNode),
{
    f(node);
    for child in &mut node.children {
        visit_node_mut(child, f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_point() {
        let t = Transform {
            translation: Vec3::new(1.0, 0.0, 0.0),
            rotation: Quat::IDENTITY,
            scale: Vec3::splat(2.0),
        };
        assert_eq!(t.transform_point(Vec3::ONE), Vec3::new(3.0, 2.0, 2.0));
    }

    #[test]
    fn test_visit_accumulates_transforms() {
        let child = SceneNode::mesh("leaf", Aabb::new(Vec3::ZERO, Vec3::ONE), None)
            .with_transform(Transform::from_translation(Vec3::new(0.0, 1.0, 0.0)));
        let root = SceneNode::group("root")
            .with_transform(Transform::from_translation(Vec3::new(1.0, 0.0, 0.0)))
            .with_children(vec![child]);
        let graph = SceneGraph::new(root);

        let mut leaf_world = None;
        graph.visit(|node, world| {
            if node.name == "leaf" {
                leaf_world = Some(world.translation);
            }
        });
        assert_eq!(leaf_world, Some(Vec3::new(1.0, 1.0, 0.0)));
    }
}
