//! The demo scene: a grid of blocks viewed through one camera.

use log::info;

use crate::config::DemoConfig;
use crate::grid::{build_grid, cells_per_row};
use crate::model::{Cell, Point, Size};
use crate::state::{Camera, CameraController, CameraPhase, Pinch, Touch, ZoomMode};

/// Input hooks a host loop calls on the active scene. Touch locations are in
/// view coordinates; an empty slice is ignored.
pub trait SceneInput {
    fn on_touch_begin(&mut self, touches: &[Touch]);
    fn on_touch_move(&mut self, touches: &[Touch]);
    fn on_touch_end(&mut self, touches: &[Touch]);
    fn on_touch_cancel(&mut self, touches: &[Touch]);
    fn on_pinch(&mut self, pinch: &mut Pinch);
    /// Called once per frame with the elapsed seconds.
    fn on_update(&mut self, dt: f64);
}

pub struct GameScene {
    viewport: Size,
    cells: Vec<Cell>,
    controller: CameraController,
}

impl GameScene {
    pub fn new(config: &DemoConfig, viewport: Size) -> Self {
        let cells = build_grid(config.block_count, config.cell_size, viewport, &config.palette);
        info!(
            "scene: {} blocks, {} per row, in {}x{} viewport ({:?})",
            cells.len(),
            cells_per_row(config.cell_size, viewport),
            viewport.width,
            viewport.height,
            config.mode
        );
        Self {
            viewport,
            cells,
            controller: CameraController::new(config.camera_settings(viewport)),
        }
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn camera(&self) -> &Camera {
        self.controller.camera()
    }

    pub fn controller(&self) -> &CameraController {
        &self.controller
    }

    pub fn phase(&self) -> CameraPhase {
        self.controller.phase()
    }

    pub fn set_mode(&mut self, mode: ZoomMode) {
        self.controller.set_mode(mode);
    }

    /// Zoom toggle for on-screen buttons, centered on the current camera
    /// position.
    pub fn toggle_zoom(&mut self) {
        let here = self.camera().position();
        self.controller.toggle_zoom(here);
    }

    pub fn reset_camera(&mut self) {
        let mode = self.controller.mode();
        self.controller.set_mode(mode);
    }

    /// Cells overlapping the camera's visible rectangle.
    pub fn visible_cells(&self) -> impl Iterator<Item = &Cell> {
        let view = self.camera().visible_rect(self.viewport);
        self.cells.iter().filter(move |c| c.bounds().intersects(&view))
    }

    pub fn to_scene(&self, view: Point) -> Point {
        self.camera().view_to_scene(view, self.viewport)
    }
}

impl SceneInput for GameScene {
    fn on_touch_begin(&mut self, touches: &[Touch]) {
        let Some(touch) = touches.first() else { return };
        let point = self.to_scene(touch.location);
        self.controller.touch_began(point, touch.tap_count);
    }

    fn on_touch_move(&mut self, touches: &[Touch]) {
        let Some(touch) = touches.first() else { return };
        let previous = self.to_scene(touch.previous_location);
        let current = self.to_scene(touch.location);
        self.controller.touch_moved(previous, current);
    }

    fn on_touch_end(&mut self, touches: &[Touch]) {
        if touches.is_empty() {
            return;
        }
        self.controller.touch_ended();
    }

    fn on_touch_cancel(&mut self, touches: &[Touch]) {
        if touches.is_empty() {
            return;
        }
        self.controller.touch_cancelled();
    }

    fn on_pinch(&mut self, pinch: &mut Pinch) {
        self.controller.pinch(pinch);
    }

    fn on_update(&mut self, dt: f64) {
        self.controller.update(dt);
    }
}
