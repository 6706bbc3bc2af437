//! Fixed camera and lighting configuration
//!
//! The viewer's camera and lights are a constant configuration, not tunable
//! parameters: a single perspective camera in front of the normalized scene
//! plus ambient light and three directional fills.

use glam::Vec3;
use std::f32::consts::PI;

/// Perspective camera placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub position: Vec3,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Orbit elevation clamp (polar angle, radians)
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
    /// Orbit gestures rotate only; zoom and pan are disabled
    pub zoom_enabled: bool,
    pub pan_enabled: bool,
}

/// One directional light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub position: Vec3,
    pub intensity: f32,
    pub cast_shadow: bool,
}

/// Ambient plus directional lights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightRig {
    pub ambient_intensity: f32,
    pub directional: [DirectionalLight; 3],
}

/// Camera at distance 5 with a 45 degree field of view; together with the
/// normalizer's 3-unit target diagonal this frames any model fully in view
pub const CAMERA_RIG: CameraRig = CameraRig {
    position: Vec3::new(0.0, 0.0, 5.0),
    fov_degrees: 45.0,
    min_polar_angle: PI / 6.0,
    max_polar_angle: PI / 1.5,
    zoom_enabled: false,
    pan_enabled: false,
};

/// Key light from the upper right with two softer fills
pub const LIGHT_RIG: LightRig = LightRig {
    ambient_intensity: 0.5,
    directional: [
        DirectionalLight {
            position: Vec3::new(5.0, 5.0, 5.0),
            intensity: 1.0,
            cast_shadow: true,
        },
        DirectionalLight {
            position: Vec3::new(-5.0, 5.0, 5.0),
            intensity: 0.5,
            cast_shadow: false,
        },
        DirectionalLight {
            position: Vec3::new(0.0, -5.0, 0.0),
            intensity: 0.2,
            cast_shadow: false,
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polar_clamp_is_a_valid_range() {
        assert!(CAMERA_RIG.min_polar_angle < CAMERA_RIG.max_polar_angle);
        assert!(CAMERA_RIG.max_polar_angle < PI);
    }
}
