//! CSS colors for diagram styling.
//!
//! [`Color`] wraps the `color` crate's `DynamicColor`. Style configuration
//! keeps colors as strings and resolves them through [`Color::new`] when a
//! renderer is built.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// A parsed CSS color.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Parses a CSS color such as `"#333"`, `"rgb(255, 0, 0)"` or `"red"`.
    ///
    /// # Errors
    ///
    /// Returns a message quoting the input when it is not a CSS color.
    ///
    /// # Examples
    ///
    /// ```
    /// use ladderview_core::color::Color;
    ///
    /// let wire = Color::new("#333333").unwrap();
    /// assert_eq!(wire.alpha(), 1.0);
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        DynamicColor::from_str(color_str)
            .map(|color| Self { color })
            .map_err(|err| format!("invalid color `{color_str}`: {err}"))
    }

    /// Opacity between 0.0 and 1.0, emitted as the SVG `*-opacity` attribute.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_css_colors() {
        assert!(Color::new("#333").is_ok());
        assert!(Color::new("rgb(10, 20, 30)").is_ok());

        let err = Color::new("not-a-color").unwrap_err();
        assert!(err.contains("not-a-color"));
    }

    #[test]
    fn test_alpha_from_css() {
        let translucent = Color::new("rgba(0, 0, 0, 0.25)").unwrap();
        assert!((translucent.alpha() - 0.25).abs() < 0.001);
        assert_eq!(Color::new("black").unwrap().to_string(), "black");
    }
}
