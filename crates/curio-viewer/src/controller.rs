//! Viewer interaction controller
//!
//! Drives the continuous render loop for one normalized scene: idle
//! auto-rotation while no orbit gesture is in progress, suspension of the
//! auto-rotation for the duration of a gesture, and the one-time usage hint.
//!
//! In-flight loads are guarded by an explicit generation counter: changing
//! the source URL bumps the generation, and a completion carrying a stale
//! generation is discarded rather than overwriting current state.

use glam::Quat;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use curio_scene::{normalize, NormalizedScene, SceneGraph};

use crate::session::{ViewerPhase, ViewerSession};

/// Idle yaw increment per frame, in radians
pub const YAW_STEP: f32 = 0.01;
/// Idle pitch increment per frame, in radians
pub const PITCH_STEP: f32 = 0.002;
/// How long the "click and drag" hint stays up before auto-hiding
pub const HINT_DURATION: Duration = Duration::from_secs(3);

/// Token identifying one load attempt; stale tokens are rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadGeneration(u64);

/// Failure reported by the external asset loader
#[derive(Error, Debug, Clone)]
#[error("failed to load model: {0}")]
pub struct LoadError(pub String);

/// Owns the session, scene, and animation state of one viewer instance
///
/// All resources are released on drop: the hint timer lives inside the
/// controller, so teardown cannot leave a callback touching a destroyed
/// session.
#[derive(Debug, Default)]
pub struct ViewerController {
    session: ViewerSession,
    scene: Option<NormalizedScene>,
    source: Option<String>,
    generation: u64,
    yaw: f32,
    pitch: f32,
    hint_remaining: Option<Duration>,
}

impl ViewerController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the source URL, discarding any prior scene and session state
    ///
    /// Returns the generation token that must accompany the eventual
    /// [`finish_load`](Self::finish_load) for this source.
    pub fn set_source(&mut self, url: impl Into<String>) -> LoadGeneration {
        self.generation += 1;
        self.source = Some(url.into());
        self.scene = None;
        self.session = ViewerSession::default();
        self.yaw = 0.0;
        self.pitch = 0.0;
        self.hint_remaining = None;
        LoadGeneration(self.generation)
    }

    /// Complete a load started by [`set_source`](Self::set_source)
    ///
    /// A stale generation (the URL changed while the load was in flight) is
    /// ignored. On success the scene is normalized exactly once; a
    /// normalization failure or loader error transitions to the error phase
    /// without producing a renderable scene.
    pub fn finish_load(
        &mut self,
        generation: LoadGeneration,
        result: Result<SceneGraph, LoadError>,
    ) {
        if generation.0 != self.generation {
            debug!(
                stale = generation.0,
                current = self.generation,
                "Discarding stale load result"
            );
            return;
        }

        match result {
            Ok(graph) => match normalize(graph) {
                Ok(scene) => {
                    self.scene = Some(scene);
                    self.session.phase = ViewerPhase::Ready;
                    self.session.hint_visible = true;
                    self.hint_remaining = Some(HINT_DURATION);
                }
                Err(e) => {
                    self.session.phase = ViewerPhase::Error(e.to_string());
                }
            },
            Err(e) => {
                self.session.phase = ViewerPhase::Error(e.to_string());
            }
        }
    }

    /// One render-loop step
    ///
    /// No-op unless the session is ready. Applies the idle rotation only
    /// while no orbit gesture is in progress, and counts down the hint
    /// timer.
    pub fn advance(&mut self, dt: Duration) {
        if !self.session.is_ready() {
            return;
        }

        if !self.session.is_user_interacting {
            self.yaw += YAW_STEP;
            self.pitch += PITCH_STEP;
        }

        if let Some(remaining) = self.hint_remaining {
            if remaining <= dt {
                self.hint_remaining = None;
                self.session.hint_visible = false;
            } else {
                self.hint_remaining = Some(remaining - dt);
            }
        }
    }

    /// Orbit gesture began: suspend auto-rotation, hide the hint
    pub fn gesture_started(&mut self) {
        self.session.is_user_interacting = true;
        self.session.hint_visible = false;
        self.hint_remaining = None;
    }

    /// Orbit gesture ended: resume auto-rotation
    pub fn gesture_ended(&mut self) {
        self.session.is_user_interacting = false;
    }

    pub fn session(&self) -> &ViewerSession {
        &self.session
    }

    /// The normalized scene, present only in the ready phase
    pub fn scene(&self) -> Option<&NormalizedScene> {
        self.scene.as_ref()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Current idle-rotation orientation for the model root
    pub fn model_rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw) * Quat::from_rotation_x(self.pitch)
    }
}
