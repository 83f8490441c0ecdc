use log::{debug, info};
use svg::{Document, node::element as svg_element};

use ladderview_core::{color::Color, draw::Diagram, geometry::Size};

use crate::{config::StyleConfig, export};

mod rung;

const PLACEHOLDER_TEXT: &str = "Ladder diagram will be rendered here.";

/// Builder for an [`Svg`] exporter.
///
/// Style colors are parsed when building, so an invalid configuration is
/// reported before anything is rendered.
#[derive(Debug)]
pub struct SvgBuilder {
    style: StyleConfig,
    symbol_width: f32,
}

impl Default for SvgBuilder {
    fn default() -> Self {
        Self {
            style: StyleConfig::default(),
            symbol_width: 20.0,
        }
    }
}

impl SvgBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: &StyleConfig) -> Self {
        self.style = style.clone();
        self
    }

    /// Width of contact and coil symbols. Must match the layout, since wires
    /// end at the symbol edges.
    pub fn with_symbol_width(mut self, symbol_width: f32) -> Self {
        self.symbol_width = symbol_width;
        self
    }

    /// Resolves the style and creates the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] when a configured color is invalid.
    pub fn build(self) -> Result<Svg, export::Error> {
        let background = self
            .style
            .background_color()
            .map_err(export::Error::Render)?;
        let stroke = self.style.stroke_color().map_err(export::Error::Render)?;

        Ok(Svg {
            background,
            stroke,
            stroke_width: self.style.stroke_width(),
            font_size: self.style.font_size(),
            symbol_width: self.symbol_width,
        })
    }
}

/// SVG exporter drawing rails, wires, contacts and coils.
#[derive(Debug, Clone)]
pub struct Svg {
    background: Option<Color>,
    stroke: Color,
    stroke_width: f32,
    font_size: f32,
    symbol_width: f32,
}

impl Svg {
    /// Renders the complete diagram to an SVG document.
    pub fn render_diagram(&self, diagram: &Diagram) -> Document {
        let size = diagram.size();
        let doc = Document::new()
            .set("viewBox", format!("0 0 {} {}", size.width(), size.height()))
            .set("width", size.width())
            .set("height", size.height());
        let doc = self.add_background(doc, size);

        if diagram.is_empty() {
            debug!("Empty diagram, rendering placeholder");
            return doc.add(self.render_placeholder(size));
        }

        let mut main_group = svg_element::Group::new()
            .set("stroke", self.stroke.to_string())
            .set("stroke-opacity", self.stroke.alpha())
            .set("stroke-width", self.stroke_width)
            .set("fill", "none");

        for rail_x in diagram.rails() {
            main_group = main_group.add(self.render_line(rail_x, 0.0, rail_x, size.height()));
        }

        for rung_layout in diagram.rungs() {
            main_group = main_group.add(self.render_rung(rung_layout));
        }

        doc.add(main_group)
    }

    fn add_background(&self, doc: Document, size: Size) -> Document {
        let Some(color) = self.background else {
            return doc;
        };

        let background = svg_element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", size.width())
            .set("height", size.height())
            .set("fill", color.to_string())
            .set("fill-opacity", color.alpha());

        doc.add(background)
    }

    fn render_placeholder(&self, size: Size) -> svg_element::Text {
        svg_element::Text::new(PLACEHOLDER_TEXT)
            .set("x", size.width() / 2.0)
            .set("y", size.height() / 2.0)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", "sans-serif")
            .set("font-size", self.font_size)
            .set("fill", self.stroke.to_string())
    }

    fn render_line(&self, x1: f32, y1: f32, x2: f32, y2: f32) -> svg_element::Line {
        svg_element::Line::new()
            .set("x1", x1)
            .set("y1", y1)
            .set("x2", x2)
            .set("y2", y2)
    }
}

impl export::Exporter for Svg {
    fn export(&self, diagram: &Diagram) -> Result<String, export::Error> {
        let doc = self.render_diagram(diagram);
        debug!("SVG document rendered");

        let mut buffer = Vec::new();
        svg::write(&mut buffer, &doc).map_err(export::Error::Io)?;
        let content = String::from_utf8(buffer)
            .map_err(|err| export::Error::Render(format!("SVG output is not UTF-8: {err}")))?;

        info!(bytes = content.len(); "SVG exported");
        Ok(content)
    }
}
