// Camera node: animated position + uniform scale over the scene.
use crate::model::{Point, Rect, Size};
use crate::state::tween::Animated;

/// A scale below 1 magnifies: the camera sees `viewport * scale` of the scene.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Animated<Point>,
    scale: Animated<f64>,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Animated::new(Point::ORIGIN),
            scale: Animated::new(1.0),
        }
    }
}

impl Camera {
    pub fn position(&self) -> Point {
        self.position.value()
    }

    pub fn scale(&self) -> f64 {
        self.scale.value()
    }

    pub fn target_position(&self) -> Point {
        self.position.target()
    }

    pub fn target_scale(&self) -> f64 {
        self.scale.target()
    }

    pub fn is_animating(&self) -> bool {
        self.position.is_animating() || self.scale.is_animating()
    }

    pub fn set_position(&mut self, position: Point) {
        self.position.set(position);
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.scale.set(scale);
    }

    pub fn move_to(&mut self, position: Point, duration: f64) {
        self.position.animate_to(position, duration);
    }

    pub fn scale_to(&mut self, scale: f64, duration: f64) {
        self.scale.animate_to(scale, duration);
    }

    /// Scales relative to where the scale is heading, so an interrupted
    /// zoom in followed by the matching zoom out lands back where it began.
    pub fn scale_by(&mut self, factor: f64, duration: f64) {
        let target = self.scale.target() * factor;
        self.scale.animate_to(target, duration);
    }

    pub fn advance(&mut self, dt: f64) {
        self.position.advance(dt);
        self.scale.advance(dt);
    }

    /// Canvas pixel (origin top-left, y down) to scene coordinates.
    pub fn view_to_scene(&self, view: Point, viewport: Size) -> Point {
        let s = self.scale();
        let c = self.position();
        Point::new(
            c.x + (view.x - viewport.half_width()) * s,
            c.y + (viewport.half_height() - view.y) * s,
        )
    }

    pub fn scene_to_view(&self, scene: Point, viewport: Size) -> Point {
        let s = self.scale();
        let c = self.position();
        Point::new(
            (scene.x - c.x) / s + viewport.half_width(),
            viewport.half_height() - (scene.y - c.y) / s,
        )
    }

    /// Scene-space region currently on screen.
    pub fn visible_rect(&self, viewport: Size) -> Rect {
        let s = self.scale();
        Rect::new(
            self.position(),
            Size::new(viewport.width * s, viewport.height * s),
        )
    }
}
