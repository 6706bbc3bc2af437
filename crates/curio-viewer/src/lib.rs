//! Curio Viewer - Render-loop and orbit-interaction control
//!
//! This crate owns the interactive half of the viewer core: a per-viewer
//! session state machine (loading / ready / error), a frame-stepped
//! controller that alternates between idle auto-rotation and user-driven
//! orbit without conflict, and the fixed camera/light configuration.
//!
//! The rendering substrate and the asset loader are external collaborators:
//! the embedder calls [`ViewerController::set_source`], resolves the load
//! however it likes, hands the result to [`ViewerController::finish_load`],
//! and calls [`ViewerController::advance`] once per frame.

pub mod controller;
pub mod rig;
pub mod session;

pub use controller::{LoadError, LoadGeneration, ViewerController, HINT_DURATION, PITCH_STEP, YAW_STEP};
pub use rig::{CameraRig, DirectionalLight, LightRig, CAMERA_RIG, LIGHT_RIG};
pub use session::{ViewerPhase, ViewerSession};
