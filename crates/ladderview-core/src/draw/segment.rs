//! Straight connector segments.

use serde::Serialize;

use crate::geometry::Point;

/// What a connector segment represents in the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SegmentKind {
    /// Horizontal wire between rails, glyphs and branch points.
    Wire,
    /// Vertical line where parallel branches fan out after the left rail.
    Split,
    /// Vertical line where parallel branches rejoin before the coil.
    Merge,
}

/// A straight line between two absolute points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    start: Point,
    end: Point,
    kind: SegmentKind,
}

impl Segment {
    pub fn new(start: Point, end: Point, kind: SegmentKind) -> Self {
        Self { start, end, kind }
    }

    /// A horizontal wire at height `y` from `x1` to `x2`.
    pub fn wire(x1: f32, x2: f32, y: f32) -> Self {
        Self::new(Point::new(x1, y), Point::new(x2, y), SegmentKind::Wire)
    }

    /// A vertical line at `x` from `y1` to `y2`.
    pub fn vertical(x: f32, y1: f32, y2: f32, kind: SegmentKind) -> Self {
        Self::new(Point::new(x, y1), Point::new(x, y2), kind)
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    pub fn length(&self) -> f32 {
        (self.end.x() - self.start.x()).hypot(self.end.y() - self.start.y())
    }
}
