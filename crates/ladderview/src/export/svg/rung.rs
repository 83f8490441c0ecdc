//! SVG rendering for rungs, their glyphs and connectors.

use svg::node::element::{self as svg_element, path::Data};

use ladderview_core::draw::{ContactGlyph, GlyphKind, RungLayout, Segment};

use super::Svg;

/// Gap between a symbol and its label.
const LABEL_GAP: f32 = 4.0;

impl Svg {
    pub(super) fn render_rung(&self, rung: &RungLayout) -> svg_element::Group {
        let mut group = svg_element::Group::new().set("class", "rung");

        for line in rung.branch_lines() {
            for wire in line.wires() {
                group = group.add(self.render_segment(wire));
            }
            for glyph in line.glyphs() {
                group = group.add(self.render_glyph(glyph));
            }
        }

        for connector in rung.connectors() {
            group = group.add(self.render_segment(connector));
        }

        group.add(self.render_glyph(rung.coil()))
    }

    fn render_segment(&self, segment: &Segment) -> svg_element::Line {
        self.render_line(
            segment.start().x(),
            segment.start().y(),
            segment.end().x(),
            segment.end().y(),
        )
    }

    fn render_glyph(&self, glyph: &ContactGlyph) -> svg_element::Group {
        let half = self.symbol_width / 2.0;
        let symbol = match glyph.kind() {
            GlyphKind::Contact => self.render_contact(glyph, half),
            GlyphKind::Coil => self.render_coil(glyph, half),
        };

        symbol.add(self.render_label(glyph, half))
    }

    /// `-| |-`, with a diagonal stroke when negated.
    fn render_contact(&self, glyph: &ContactGlyph, half: f32) -> svg_element::Group {
        let (x, y) = (glyph.x(), glyph.y());
        let reach = half * 0.8;

        let mut group = svg_element::Group::new()
            .set("class", "contact")
            .add(self.render_line(x - half, y - reach, x - half, y + reach))
            .add(self.render_line(x + half, y - reach, x + half, y + reach));

        if glyph.negated() {
            let slash = self.render_line(x - half * 0.6, y + reach, x + half * 0.6, y - reach);
            group = group.add(slash);
        }

        group
    }

    /// `-( )-`, with a slash when negated.
    fn render_coil(&self, glyph: &ContactGlyph, half: f32) -> svg_element::Group {
        let (x, y) = (glyph.x(), glyph.y());

        // Two arcs of radius `half` through the terminals, bowing outward.
        let arcs = Data::new()
            .move_to((x - half, y - half))
            .elliptical_arc_to((half, half, 0, 0, 0, x - half, y + half))
            .move_to((x + half, y - half))
            .elliptical_arc_to((half, half, 0, 0, 1, x + half, y + half));

        let mut group = svg_element::Group::new()
            .set("class", "coil")
            .add(svg_element::Path::new().set("d", arcs));

        if glyph.negated() {
            let slash = self.render_line(
                x - half * 0.4,
                y + half * 0.7,
                x + half * 0.4,
                y - half * 0.7,
            );
            group = group.add(slash);
        }

        group
    }

    fn render_label(&self, glyph: &ContactGlyph, half: f32) -> svg_element::Text {
        svg_element::Text::new(glyph.variable())
            .set("x", glyph.x())
            .set("y", glyph.y() - half - LABEL_GAP)
            .set("text-anchor", "middle")
            .set("font-family", "sans-serif")
            .set("font-size", self.font_size)
            .set("stroke", "none")
            .set("fill", self.stroke.to_string())
            .set("fill-opacity", self.stroke.alpha())
    }
}

#[cfg(test)]
mod tests {
    use ladderview_core::geometry::Point;

    use super::*;
    use crate::{config::StyleConfig, export::svg::SvgBuilder};

    fn svg() -> Svg {
        SvgBuilder::new()
            .with_style(&StyleConfig::default())
            .build()
            .unwrap()
    }

    #[test]
    fn test_negated_contact_has_extra_stroke() {
        let plain = ContactGlyph::new(Point::new(120.0, 65.0), "A", false, GlyphKind::Contact);
        let negated = ContactGlyph::new(Point::new(120.0, 65.0), "A", true, GlyphKind::Contact);

        let plain = svg().render_glyph(&plain).to_string();
        let negated = svg().render_glyph(&negated).to_string();

        assert_eq!(plain.matches("<line").count(), 2);
        assert_eq!(negated.matches("<line").count(), 3);
    }

    #[test]
    fn test_coil_is_drawn_with_arcs() {
        let coil = ContactGlyph::new(Point::new(720.0, 65.0), "Motor", false, GlyphKind::Coil);

        let rendered = svg().render_glyph(&coil).to_string();

        assert!(rendered.contains("<path"));
        assert!(rendered.contains("M710,55 A10,10,0,0,0,710,75"));
        assert!(rendered.contains("M730,55 A10,10,0,0,1,730,75"));
        assert!(rendered.contains("Motor"));
        assert!(!rendered.contains("<line"));
    }

    #[test]
    fn test_negated_coil_has_slash() {
        let coil = ContactGlyph::new(Point::new(720.0, 65.0), "Reset", true, GlyphKind::Coil);

        let rendered = svg().render_glyph(&coil).to_string();

        assert_eq!(rendered.matches("<line").count(), 1);
    }
}
