//! Export functionality for laid out ladder diagrams.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! converting a [`Diagram`] into an output format. It is the final stage in
//! the Ladderview processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! PLCopen XML
//!     ↓ parse
//! ElementMap
//!     ↓ structure
//! Vec<Rung>
//!     ↓ layout
//! Diagram
//!     ↓ export (this module)
//! Output text
//! ```
//!
//! # Available Backends
//!
//! - [`svg`]: SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]
//! - [`json`]: the diagram geometry as pretty-printed JSON
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`LadderError::Export`] at the crate
//! boundary.
//!
//! [`LadderError::Export`]: crate::LadderError::Export

pub mod json;
/// SVG export backend.
pub mod svg;

use ladderview_core::draw::Diagram;

/// Abstraction for diagram export backends.
///
/// Implementors convert a [`Diagram`] into the text of a specific output
/// format. Backends never modify the diagram.
pub trait Exporter {
    /// Exports a laid out diagram to the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the diagram cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export(&self, diagram: &Diagram) -> Result<String, Error>;
}

/// Errors that can occur during diagram export.
///
/// This type is converted into [`LadderError::Export`] at the crate
/// boundary via the [`From`] implementation in [`crate::error`].
///
/// [`LadderError::Export`]: crate::LadderError::Export
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
