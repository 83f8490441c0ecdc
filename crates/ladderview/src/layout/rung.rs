//! Placement of a single rung between the power rails.

use ladderview_core::{
    draw::{BranchLine, ContactGlyph, GlyphKind, RungLayout, Segment, SegmentKind, VerticalSpan},
    geometry::Point,
    semantic::{Branch, Rung},
};

use crate::config::LayoutConfig;

/// Horizontal anchors shared by every rung of one diagram.
#[derive(Debug, Clone, Copy)]
pub(super) struct RungPlacer<'a> {
    config: &'a LayoutConfig,
    left_x: f32,
    right_x: f32,
}

impl<'a> RungPlacer<'a> {
    pub(super) fn new(config: &'a LayoutConfig, rails: [f32; 2]) -> Self {
        Self {
            config,
            left_x: rails[0],
            right_x: rails[1],
        }
    }

    /// Height reserved for a rung with `branch_count` branches.
    ///
    /// A rung without branches still reserves one branch slot.
    pub(super) fn rung_height(&self, branch_count: usize) -> f32 {
        branch_count.max(1) as f32 * self.config.branch_spacing() + self.config.rung_spacing()
    }

    /// X where parallel branches fan out.
    pub(super) fn split_x(&self) -> f32 {
        self.left_x + self.config.element_width() / 2.0
    }

    /// X where parallel branches rejoin before the coil.
    pub(super) fn merge_x(&self) -> f32 {
        self.right_x - self.config.element_width()
    }

    /// Center x of the coil.
    pub(super) fn coil_x(&self) -> f32 {
        self.right_x - self.config.element_width() / 2.0
    }

    /// Center x of the contact at `index` in its branch.
    pub(super) fn contact_x(&self, index: usize) -> f32 {
        self.left_x + self.config.element_width() * (index as f32 + 1.0)
    }

    pub(super) fn place(&self, rung: &Rung, top: f32) -> RungLayout {
        let branches = rung.branches();
        let span = VerticalSpan::new(top, self.rung_height(branches.len()));
        let mid = span.mid();
        let half_symbol = self.config.symbol_width() / 2.0;
        let spacing = self.config.branch_spacing();
        let parallel = branches.len() > 1;

        // Centered on `mid`; the guard keeps zero-branch rungs from dividing.
        let first_offset = if branches.is_empty() {
            0.0
        } else {
            (branches.len() - 1) as f32 / 2.0
        };

        let branch_lines: Vec<BranchLine> = branches
            .iter()
            .enumerate()
            .map(|(index, branch)| {
                let y = mid + (index as f32 - first_offset) * spacing;
                self.place_branch(branch, y).with_junctions(parallel)
            })
            .collect();

        let coil = ContactGlyph::new(
            Point::new(self.coil_x(), mid),
            rung.coil_variable(),
            rung.coil_negated(),
            GlyphKind::Coil,
        );

        let mut connectors = Vec::with_capacity(4);
        if let [first, .., last] = branch_lines.as_slice() {
            connectors.push(Segment::vertical(
                self.split_x(),
                first.y(),
                last.y(),
                SegmentKind::Split,
            ));
            connectors.push(Segment::vertical(
                self.merge_x(),
                first.y(),
                last.y(),
                SegmentKind::Merge,
            ));
        }
        if !branch_lines.is_empty() {
            connectors.push(Segment::wire(self.merge_x(), coil.x() - half_symbol, mid));
        }
        connectors.push(Segment::wire(coil.x() + half_symbol, self.right_x, mid));

        RungLayout::new(span, coil, branch_lines, connectors)
    }

    fn place_branch(&self, branch: &Branch, y: f32) -> BranchLine {
        let half_symbol = self.config.symbol_width() / 2.0;

        let glyphs: Vec<ContactGlyph> = branch
            .iter()
            .enumerate()
            .map(|(index, contact)| {
                ContactGlyph::from_contact(contact, Point::new(self.contact_x(index), y))
            })
            .collect();

        let mut wires = Vec::with_capacity(glyphs.len() + 1);
        let mut from_x = self.left_x;
        for glyph in &glyphs {
            wires.push(Segment::wire(from_x, glyph.x() - half_symbol, y));
            from_x = glyph.x() + half_symbol;
        }
        wires.push(Segment::wire(from_x, self.merge_x(), y));

        BranchLine::new(y, glyphs, wires)
    }
}
