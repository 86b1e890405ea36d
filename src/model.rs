//! Core data models for the block view demo.
//! Geometry is expressed in scene space (origin at the viewport center, y up)
//! unless a type says otherwise.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }
}

/// Axis-aligned rectangle described by its center, matching how cells and
/// the camera are positioned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub center: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(center: Point, size: Size) -> Self {
        Self { center, size }
    }

    pub fn min_x(&self) -> f64 {
        self.center.x - self.size.half_width()
    }

    pub fn max_x(&self) -> f64 {
        self.center.x + self.size.half_width()
    }

    pub fn min_y(&self) -> f64 {
        self.center.y - self.size.half_height()
    }

    pub fn max_y(&self) -> f64 {
        self.center.y + self.size.half_height()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.min_x() < other.max_x()
            && other.min_x() < self.max_x()
            && self.min_y() < other.max_y()
            && other.min_y() < self.max_y()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const ORANGE: Color = Color::rgb(255, 128, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex notation, e.g. `#ff8000`.
    pub fn css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Ordered, non-empty list of block colors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Palette(Vec<Color>);

impl Palette {
    pub fn new(colors: Vec<Color>) -> Result<Self, ConfigError> {
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(Self(colors))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Color for the cell at `index`, cycling through the palette.
    pub fn color_for(&self, index: usize) -> Color {
        self.0[index % self.0.len()]
    }

    pub fn colors(&self) -> &[Color] {
        &self.0
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(vec![
            Color::RED,
            Color::YELLOW,
            Color::BLUE,
            Color::GREEN,
            Color::GRAY,
            Color::WHITE,
            Color::CYAN,
            Color::PURPLE,
            Color::MAGENTA,
            Color::ORANGE,
        ])
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = ConfigError;

    fn try_from(colors: Vec<Color>) -> Result<Self, Self::Error> {
        Palette::new(colors)
    }
}

impl From<Palette> for Vec<Color> {
    fn from(palette: Palette) -> Self {
        palette.0
    }
}

/// One colored, labelled block of the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub index: usize,
    /// Center of the block in scene space.
    pub position: Point,
    pub size: Size,
    pub color: Color,
    pub label: String,
}

impl Cell {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_rejects_empty() {
        assert!(matches!(Palette::new(vec![]), Err(ConfigError::EmptyPalette)));
        assert!(serde_json::from_str::<Palette>("[]").is_err());
    }

    #[test]
    fn palette_cycles() {
        let p = Palette::new(vec![Color::RED, Color::BLUE]).unwrap();
        assert_eq!(p.color_for(0), Color::RED);
        assert_eq!(p.color_for(3), Color::BLUE);
        assert_eq!(p.color_for(4), Color::RED);
    }

    #[test]
    fn css_hex() {
        assert_eq!(Color::ORANGE.css(), "#ff8000");
        assert_eq!(Color::GRAY.css(), "#808080");
    }

    #[test]
    fn rect_intersection_excludes_touching_edges() {
        let a = Rect::new(Point::new(0.0, 0.0), Size::new(10.0, 10.0));
        let b = Rect::new(Point::new(10.0, 0.0), Size::new(10.0, 10.0));
        let c = Rect::new(Point::new(9.0, 9.0), Size::new(10.0, 10.0));
        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));
    }
}
