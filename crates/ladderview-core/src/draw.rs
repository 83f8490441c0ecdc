//! Positioned layout primitives for ladder diagrams.
//!
//! These types are the output of the layout stage and the only input of the
//! export backends. They carry absolute coordinates and nothing else: a
//! renderer maps each primitive onto whatever drawing surface it owns.
//!
//! - [`Diagram`]: overall size, rail positions and one [`RungLayout`] per rung
//! - [`BranchLine`]: one horizontal branch with its glyphs and wires
//! - [`ContactGlyph`]: a contact or coil symbol at a position
//! - [`Segment`]: a straight connector line (wire, split or merge)

mod diagram;
mod glyph;
mod segment;

pub use diagram::{BranchLine, Diagram, RungLayout, VerticalSpan};
pub use glyph::{ContactGlyph, GlyphKind};
pub use segment::{Segment, SegmentKind};
