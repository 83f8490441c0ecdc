//! Ladderview - reconstruction and layout of PLCopen ladder logic diagrams.
//!
//! Reads the ladder body of a PLCopen XML document, recovers its rungs and
//! parallel branches, and lays them out between two power rails. The laid
//! out [`Diagram`](draw::Diagram) can be rendered to SVG or serialized to
//! JSON.
//!
//! ```text
//! XML ─► parse ─► ElementMap ─► reconstruct ─► Vec<Rung> ─► layout ─► Diagram ─► export
//! ```
//!
//! Every stage is a pure function of its input: the same document always
//! produces the same diagram.

pub mod config;
pub mod export;
pub mod layout;
pub mod structure;

mod error;

pub use ladderview_core::{color, draw, geometry, semantic};

pub use error::LadderError;

use std::{fmt, str::FromStr};

use log::{debug, info, trace, warn};

use config::AppConfig;
use draw::Diagram;
use export::Exporter;
use semantic::{ElementMap, Rung};

/// Output formats supported by [`DiagramBuilder::render`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Svg,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "json" => Ok(Self::Json),
            _ => Err(format!("unknown output format `{s}` (expected `svg` or `json`)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Svg => write!(f, "svg"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Builder for parsing, laying out and rendering ladder diagrams.
///
/// This provides an API for processing PLCopen ladder bodies through the
/// parsing, reconstruction, layout and rendering stages.
///
/// # Examples
///
/// ```rust
/// use ladderview::{DiagramBuilder, config::AppConfig};
///
/// let source = r#"<LD>
///     <leftPowerRail localId="1"/>
///     <contact localId="2">
///         <connectionPointIn><connection refLocalId="1"/></connectionPointIn>
///         <variable>Start</variable>
///     </contact>
///     <coil localId="3">
///         <connectionPointIn><connection refLocalId="2"/></connectionPointIn>
///         <variable>Motor</variable>
///     </coil>
/// </LD>"#;
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// let elements = builder.parse(source);
/// let rungs = builder.reconstruct(&elements);
/// let diagram = builder.layout(&rungs);
///
/// let svg = builder.render_svg(&diagram)
///     .expect("Failed to render");
/// assert!(svg.contains("Motor"));
///
/// // Or use default config
/// let builder = DiagramBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a PLCopen document into its element graph.
    ///
    /// Never fails: documents that cannot be read produce an empty graph,
    /// which renders as an empty diagram.
    pub fn parse(&self, source: &str) -> ElementMap {
        info!("Parsing ladder body");

        let elements = ladderview_parser::build(source);

        debug!(elements_count = elements.len(); "Ladder body parsed");
        trace!(elements:?; "Parsed elements");

        elements
    }

    /// Parse a PLCopen document, failing when it cannot be read.
    ///
    /// Warnings found while reading are logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns [`LadderError::Parse`] with the source text attached when the
    /// document is not well-formed XML or has no ladder body.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ladderview::{DiagramBuilder, LadderError};
    ///
    /// let result = DiagramBuilder::default().try_parse("<project/>");
    /// assert!(matches!(result, Err(LadderError::Parse { .. })));
    /// ```
    pub fn try_parse(&self, source: &str) -> Result<ElementMap, LadderError> {
        info!("Parsing ladder body");

        let output = ladderview_parser::try_build(source)
            .map_err(|err| LadderError::new_parse_error(err, source))?;

        for warning in output.warnings() {
            warn!(warning:% = warning; "Ladder body warning");
        }

        let elements = output.into_elements();
        debug!(elements_count = elements.len(); "Ladder body parsed");
        trace!(elements:?; "Parsed elements");

        Ok(elements)
    }

    /// Rebuild rungs and branches from the element graph.
    pub fn reconstruct(&self, elements: &ElementMap) -> Vec<Rung> {
        structure::reconstruct(elements)
    }

    /// Compute positions for rungs using the configured spacing.
    pub fn layout(&self, rungs: &[Rung]) -> Diagram {
        layout::layout(rungs, self.config.layout())
    }

    /// Render a laid out diagram to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`LadderError::Export`] when the style configuration holds an
    /// invalid color or rendering fails.
    pub fn render_svg(&self, diagram: &Diagram) -> Result<String, LadderError> {
        info!(rungs_count = diagram.rungs().len(); "Rendering SVG");

        let svg = export::svg::SvgBuilder::new()
            .with_style(self.config.style())
            .with_symbol_width(self.config.layout().symbol_width())
            .build()?;

        Ok(svg.export(diagram)?)
    }

    /// Serialize a laid out diagram to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`LadderError::Export`] if serialization fails.
    pub fn render_json(&self, diagram: &Diagram) -> Result<String, LadderError> {
        info!(rungs_count = diagram.rungs().len(); "Rendering JSON");

        Ok(export::json::Json.export(diagram)?)
    }

    /// Run the lenient pipeline from source text to the requested format.
    ///
    /// # Errors
    ///
    /// Only rendering can fail; see [`DiagramBuilder::render_svg`].
    pub fn render(&self, source: &str, format: OutputFormat) -> Result<String, LadderError> {
        let elements = self.parse(source);
        let rungs = self.reconstruct(&elements);
        let diagram = self.layout(&rungs);

        match format {
            OutputFormat::Svg => self.render_svg(&diagram),
            OutputFormat::Json => self.render_json(&diagram),
        }
    }
}
