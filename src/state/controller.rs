//! Camera controller: turns gestures into camera moves.
//!
//! Two behaviours are supported, picked by [`ZoomMode`]:
//!
//! - [`ZoomMode::DoubleTapToggle`]: a double tap toggles between resting and
//!   zoomed on the tapped point, one-finger drags pan within half a viewport
//!   of the origin, and pinching scales the camera continuously.
//! - [`ZoomMode::PressToZoom`]: zoom in while a finger is held down, pan
//!   freely while it moves, and zoom back out on release.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::model::{Point, Size};
use crate::state::camera::Camera;
use crate::state::touch::{Pinch, PinchPhase};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomMode {
    #[default]
    DoubleTapToggle,
    PressToZoom,
}

impl ZoomMode {
    pub fn label(&self) -> &'static str {
        match self {
            ZoomMode::DoubleTapToggle => "Double-tap to zoom",
            ZoomMode::PressToZoom => "Press to zoom",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraPhase {
    Resting,
    Zoomed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraSettings {
    pub mode: ZoomMode,
    /// Scale applied when zooming in; 0.25 shows a quarter of the viewport.
    pub zoom_factor: f64,
    /// Seconds.
    pub animation_duration: f64,
    pub viewport: Size,
}

#[derive(Debug, Clone)]
pub struct CameraController {
    camera: Camera,
    zoomed: bool,
    settings: CameraSettings,
}

impl CameraController {
    pub fn new(settings: CameraSettings) -> Self {
        Self {
            camera: Camera::default(),
            zoomed: false,
            settings,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn mode(&self) -> ZoomMode {
        self.settings.mode
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    pub fn phase(&self) -> CameraPhase {
        if self.zoomed {
            CameraPhase::Zoomed
        } else {
            CameraPhase::Resting
        }
    }

    /// Switches behaviour and drops straight back to the resting camera.
    pub fn set_mode(&mut self, mode: ZoomMode) {
        self.settings.mode = mode;
        self.zoomed = false;
        self.camera.set_scale(1.0);
        self.camera.set_position(Point::ORIGIN);
    }

    pub fn touch_began(&mut self, point: Point, tap_count: u32) {
        match self.settings.mode {
            ZoomMode::DoubleTapToggle => {
                if tap_count == 2 {
                    self.double_tap(point);
                }
            }
            ZoomMode::PressToZoom => self.press(point),
        }
    }

    pub fn touch_moved(&mut self, previous: Point, current: Point) {
        self.drag(previous, current);
    }

    pub fn touch_ended(&mut self) {
        if self.settings.mode == ZoomMode::PressToZoom {
            self.release();
        }
    }

    pub fn touch_cancelled(&mut self) {
        self.touch_ended();
    }

    pub fn double_tap(&mut self, point: Point) {
        self.zoomed = !self.zoomed;
        if self.zoomed {
            self.zoom_in_on(point);
        } else {
            self.zoom_out();
        }
    }

    /// Zoom toggle for on-screen controls, routed through the active mode.
    pub fn toggle_zoom(&mut self, point: Point) {
        match self.settings.mode {
            ZoomMode::DoubleTapToggle => self.double_tap(point),
            ZoomMode::PressToZoom if self.zoomed => self.release(),
            ZoomMode::PressToZoom => self.press(point),
        }
    }

    pub fn press(&mut self, point: Point) {
        if self.zoomed {
            return;
        }
        self.zoomed = true;
        let duration = self.settings.animation_duration;
        self.camera.scale_by(self.settings.zoom_factor, duration);
        self.camera.move_to(point, duration);
        debug!("camera: press zoom at ({:.1}, {:.1})", point.x, point.y);
    }

    pub fn release(&mut self) {
        if !self.zoomed {
            return;
        }
        self.zoomed = false;
        let duration = self.settings.animation_duration;
        self.camera.scale_by(1.0 / self.settings.zoom_factor, duration);
        self.camera.move_to(Point::ORIGIN, duration);
        debug!("camera: press released");
    }

    /// Pans by `previous - current` while zoomed. In toggle mode each axis
    /// is clamped to half the viewport around the origin.
    pub fn drag(&mut self, previous: Point, current: Point) {
        if !self.zoomed {
            return;
        }
        let mut next = self.camera.position() + (previous - current);
        if self.settings.mode == ZoomMode::DoubleTapToggle {
            let vp = self.settings.viewport;
            next.x = next.x.clamp(-vp.half_width(), vp.half_width());
            next.y = next.y.clamp(-vp.half_height(), vp.half_height());
        }
        self.camera.set_position(next);
    }

    /// Applies one pinch tick and resets `pinch.scale` to 1 so the next tick
    /// only carries its own delta.
    pub fn pinch(&mut self, pinch: &mut Pinch) {
        if self.settings.mode != ZoomMode::DoubleTapToggle {
            return;
        }
        // Checking the quotient also rejects factors that are finite but
        // would underflow the scale to 0 or overflow it to inf.
        let next = self.camera.scale() / pinch.scale;
        if next.is_finite() && next > 0.0 {
            self.camera.set_scale(next);
        } else {
            warn!("ignoring pinch factor {}", pinch.scale);
        }
        pinch.scale = 1.0;

        if pinch.phase == PinchPhase::Ended {
            self.zoomed = self.camera.scale() < 1.0;
            if self.zoomed {
                let here = self.camera.position();
                self.camera.move_to(here, self.settings.animation_duration);
            } else {
                self.zoom_out();
            }
            debug!("camera: pinch ended at scale {:.3}", self.camera.scale());
        }
    }

    pub fn zoom_in_on(&mut self, point: Point) {
        let duration = self.settings.animation_duration;
        self.camera.scale_to(self.settings.zoom_factor, duration);
        self.camera.move_to(point, duration);
        debug!("camera: zoom in at ({:.1}, {:.1})", point.x, point.y);
    }

    pub fn zoom_out(&mut self) {
        let duration = self.settings.animation_duration;
        self.camera.scale_to(1.0, duration);
        self.camera.move_to(Point::ORIGIN, duration);
        debug!("camera: zoom out");
    }

    pub fn update(&mut self, dt: f64) {
        self.camera.advance(dt);
    }
}
