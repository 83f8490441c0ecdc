//! Contact and coil glyph placements.

use serde::Serialize;

use crate::{
    geometry::Point,
    semantic::{ContactRef, ElementKind},
};

/// The symbol a renderer draws for a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GlyphKind {
    /// Two short vertical strokes, `-| |-`.
    Contact,
    /// A pair of arcs, `-( )-`.
    Coil,
}

impl From<ElementKind> for GlyphKind {
    fn from(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Coil => Self::Coil,
            _ => Self::Contact,
        }
    }
}

/// A contact or coil symbol centred at an absolute position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactGlyph {
    position: Point,
    variable: String,
    negated: bool,
    kind: GlyphKind,
}

impl ContactGlyph {
    pub fn new(position: Point, variable: impl Into<String>, negated: bool, kind: GlyphKind) -> Self {
        Self {
            position,
            variable: variable.into(),
            negated,
            kind,
        }
    }

    /// Places a branch entry at `position`, keeping its variable, negation and kind.
    pub fn from_contact(contact: &ContactRef, position: Point) -> Self {
        Self::new(
            position,
            contact.variable(),
            contact.negated(),
            contact.kind().into(),
        )
    }

    /// Center of the symbol.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn x(&self) -> f32 {
        self.position.x()
    }

    pub fn y(&self) -> f32 {
        self.position.y()
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    pub fn negated(&self) -> bool {
        self.negated
    }

    pub fn kind(&self) -> GlyphKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_glyph_from_contact_keeps_negation() {
        let contact = ContactRef::contact("Stop", true);
        let glyph = ContactGlyph::from_contact(&contact, Point::new(160.0, 75.0));

        assert_eq!(glyph.variable(), "Stop");
        assert!(glyph.negated());
        assert_eq!(glyph.kind(), GlyphKind::Contact);
        assert_approx_eq!(f32, glyph.x(), 160.0);
        assert_approx_eq!(f32, glyph.y(), 75.0);
    }

    #[test]
    fn test_glyph_kind_from_element_kind() {
        assert_eq!(GlyphKind::from(ElementKind::Coil), GlyphKind::Coil);
        assert_eq!(GlyphKind::from(ElementKind::Contact), GlyphKind::Contact);
    }
}
