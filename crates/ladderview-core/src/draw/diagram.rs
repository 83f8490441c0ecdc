//! Diagram, rung and branch layouts.

use serde::Serialize;

use crate::{
    draw::{ContactGlyph, Segment},
    geometry::{Point, Size},
};

/// The vertical band a rung occupies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct VerticalSpan {
    top: f32,
    height: f32,
}

impl VerticalSpan {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    pub fn top(&self) -> f32 {
        self.top
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Vertical midpoint, the anchor for the coil and the branch fan-out.
    pub fn mid(&self) -> f32 {
        self.top + self.height / 2.0
    }
}

/// One parallel branch of a rung, laid out on a single horizontal line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchLine {
    y: f32,
    glyphs: Vec<ContactGlyph>,
    wires: Vec<Segment>,
    connects_to_split: bool,
    connects_to_merge: bool,
}

impl BranchLine {
    pub fn new(y: f32, glyphs: Vec<ContactGlyph>, wires: Vec<Segment>) -> Self {
        Self {
            y,
            glyphs,
            wires,
            connects_to_split: false,
            connects_to_merge: false,
        }
    }

    /// Marks this branch as attached to the rung's split and merge connectors.
    pub fn with_junctions(mut self, connected: bool) -> Self {
        self.connects_to_split = connected;
        self.connects_to_merge = connected;
        self
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// Contacts of this branch, left to right.
    pub fn glyphs(&self) -> &[ContactGlyph] {
        &self.glyphs
    }

    /// Horizontal wires joining the rail, the glyphs and the merge point.
    pub fn wires(&self) -> &[Segment] {
        &self.wires
    }

    pub fn connects_to_split(&self) -> bool {
        self.connects_to_split
    }

    pub fn connects_to_merge(&self) -> bool {
        self.connects_to_merge
    }
}

/// Geometry of one rung.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RungLayout {
    vertical_span: VerticalSpan,
    coil: ContactGlyph,
    branch_lines: Vec<BranchLine>,
    connectors: Vec<Segment>,
}

impl RungLayout {
    pub fn new(
        vertical_span: VerticalSpan,
        coil: ContactGlyph,
        branch_lines: Vec<BranchLine>,
        connectors: Vec<Segment>,
    ) -> Self {
        Self {
            vertical_span,
            coil,
            branch_lines,
            connectors,
        }
    }

    pub fn vertical_span(&self) -> VerticalSpan {
        self.vertical_span
    }

    pub fn coil(&self) -> &ContactGlyph {
        &self.coil
    }

    pub fn coil_position(&self) -> Point {
        self.coil.position()
    }

    pub fn branch_lines(&self) -> &[BranchLine] {
        &self.branch_lines
    }

    /// Rung-level connectors: split/merge verticals and the coil wires.
    pub fn connectors(&self) -> &[Segment] {
        &self.connectors
    }
}

/// A fully laid out ladder diagram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagram {
    width: f32,
    height: f32,
    rails: [f32; 2],
    rungs: Vec<RungLayout>,
}

impl Diagram {
    pub fn new(size: Size, rails: [f32; 2], rungs: Vec<RungLayout>) -> Self {
        Self {
            width: size.width(),
            height: size.height(),
            rails,
            rungs,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// X positions of the left and right power rails.
    pub fn rails(&self) -> [f32; 2] {
        self.rails
    }

    pub fn left_rail_x(&self) -> f32 {
        self.rails[0]
    }

    pub fn right_rail_x(&self) -> f32 {
        self.rails[1]
    }

    pub fn rungs(&self) -> &[RungLayout] {
        &self.rungs
    }

    /// Returns `true` when there is nothing to draw between the rails.
    ///
    /// Renderers show a placeholder for empty diagrams.
    pub fn is_empty(&self) -> bool {
        self.rungs.is_empty()
    }
}
