pub mod camera;
pub mod controller;
pub mod touch;
pub mod tween;

pub use camera::Camera;
pub use controller::{CameraController, CameraPhase, CameraSettings, ZoomMode};
pub use touch::{Pinch, PinchPhase, Touch, TouchState};
pub use tween::Animated;
