//! Error types for Ladderview operations.
//!
//! This module provides the main error type [`LadderError`] which wraps
//! the error conditions that can occur while turning a PLCopen document
//! into a rendered diagram.

use std::io;

use thiserror::Error;

use ladderview_parser::error::ParseError;

/// The main error type for Ladderview operations.
///
/// Reconstruction and layout never fail on well-typed input; errors come
/// from strict parsing, invalid style configuration and export backends.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text next to the structured
/// diagnostics so callers can render source snippets.
#[derive(Debug, Error)]
pub enum LadderError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for LadderError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl LadderError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
