//! Configuration types for ladder diagram layout and rendering.
//!
//! This module provides configuration structures that control how rungs are
//! laid out and styled. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources; every field is optional and
//! falls back to its default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining layout and style settings.
//! - [`LayoutConfig`] - Spacing constants used by the layout engine.
//! - [`StyleConfig`] - Controls visual styling options such as colors and stroke width.
//!
//! # Example
//!
//! ```
//! # use ladderview::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.layout().element_width(), 80.0);
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use ladderview_core::color::Color;

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Checks both sections, reporting the first invalid setting.
    ///
    /// # Errors
    ///
    /// See [`LayoutConfig::validate`] and [`StyleConfig::validate`].
    pub fn validate(&self) -> Result<(), String> {
        self.layout.validate()?;
        self.style.validate()
    }
}

/// Spacing constants for the ladder layout, in SVG user units.
///
/// ```toml
/// [layout]
/// element_width = 100
/// branch_spacing = 40
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal slot taken by each contact or coil.
    element_width: f32,
    /// Vertical distance between parallel branches.
    branch_spacing: f32,
    /// Fixed vertical margin every rung adds beyond its branches.
    rung_spacing: f32,
    /// Padding on every side of the diagram.
    padding: f32,
    /// Minimum diagram width.
    viewport_width: f32,
    /// Width of a contact or coil symbol body.
    symbol_width: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            element_width: 80.0,
            branch_spacing: 30.0,
            rung_spacing: 20.0,
            padding: 40.0,
            viewport_width: 800.0,
            symbol_width: 20.0,
        }
    }
}

impl LayoutConfig {
    pub fn with_element_width(mut self, element_width: f32) -> Self {
        self.element_width = element_width;
        self
    }

    pub fn with_branch_spacing(mut self, branch_spacing: f32) -> Self {
        self.branch_spacing = branch_spacing;
        self
    }

    pub fn with_rung_spacing(mut self, rung_spacing: f32) -> Self {
        self.rung_spacing = rung_spacing;
        self
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_viewport_width(mut self, viewport_width: f32) -> Self {
        self.viewport_width = viewport_width;
        self
    }

    pub fn with_symbol_width(mut self, symbol_width: f32) -> Self {
        self.symbol_width = symbol_width;
        self
    }

    pub fn element_width(&self) -> f32 {
        self.element_width
    }

    pub fn branch_spacing(&self) -> f32 {
        self.branch_spacing
    }

    pub fn rung_spacing(&self) -> f32 {
        self.rung_spacing
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn symbol_width(&self) -> f32 {
        self.symbol_width
    }

    /// Checks that the spacing constants describe a drawable layout.
    ///
    /// Layout itself never fails, so configurations from outside the program
    /// should be checked here first.
    ///
    /// # Errors
    ///
    /// Returns a message naming the offending field when a value is not
    /// finite, a slot or spacing is not positive, a margin is negative, or
    /// symbols are wider than their slot.
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("element_width", self.element_width),
            ("branch_spacing", self.branch_spacing),
            ("rung_spacing", self.rung_spacing),
            ("padding", self.padding),
            ("viewport_width", self.viewport_width),
            ("symbol_width", self.symbol_width),
        ];
        if let Some((name, value)) = fields.into_iter().find(|(_, value)| !value.is_finite()) {
            return Err(format!("layout.{name} must be a finite number, got {value}"));
        }

        for (name, value) in [
            ("element_width", self.element_width),
            ("branch_spacing", self.branch_spacing),
            ("symbol_width", self.symbol_width),
        ] {
            if value <= 0.0 {
                return Err(format!("layout.{name} must be positive, got {value}"));
            }
        }

        for (name, value) in [
            ("rung_spacing", self.rung_spacing),
            ("padding", self.padding),
            ("viewport_width", self.viewport_width),
        ] {
            if value < 0.0 {
                return Err(format!("layout.{name} must not be negative, got {value}"));
            }
        }

        if self.symbol_width > self.element_width {
            return Err(format!(
                "layout.symbol_width ({}) must not exceed layout.element_width ({})",
                self.symbol_width, self.element_width
            ));
        }

        Ok(())
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Colors are kept as strings and parsed on access. [`StyleConfig::validate`]
/// parses them up front; otherwise an invalid color surfaces when rendering.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Background [`Color`] for diagrams, transparent when unset.
    background_color: Option<String>,
    /// [`Color`] of rails, wires and symbols.
    stroke_color: String,
    stroke_width: f32,
    /// Font size of variable labels.
    font_size: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            stroke_color: "black".to_string(),
            stroke_width: 1.5,
            font_size: 12.0,
        }
    }
}

impl StyleConfig {
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn with_stroke_color(mut self, color: impl Into<String>) -> Self {
        self.stroke_color = color.into();
        self
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the parsed stroke [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn stroke_color(&self) -> Result<Color, String> {
        Color::new(&self.stroke_color)
            .map_err(|err| format!("Invalid stroke color in config: {err}"))
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Checks that colors parse and sizes are usable.
    ///
    /// # Errors
    ///
    /// Returns the color parse error, or a message naming a size that is
    /// negative or not finite.
    pub fn validate(&self) -> Result<(), String> {
        self.background_color()?;
        self.stroke_color()?;

        for (name, value) in [
            ("stroke_width", self.stroke_width),
            ("font_size", self.font_size),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!(
                    "style.{name} must be a non-negative number, got {value}"
                ));
            }
        }

        Ok(())
    }
}
