//! Points and sizes in diagram space.
//!
//! Coordinates follow SVG: the origin is the top-left corner, x grows to the
//! right and y grows downward. Rungs are therefore stacked with increasing y.

use serde::Serialize;

/// A position in diagram space.
///
/// ```
/// # use ladderview_core::geometry::Point;
/// let coil = Point::new(720.0, 65.0);
/// assert_eq!((coil.x(), coil.y()), (720.0, 65.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> f32 {
        self.x
    }

    pub fn y(self) -> f32 {
        self.y
    }
}

/// Overall extent of a laid out diagram.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }
}
