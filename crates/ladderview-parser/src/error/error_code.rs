//! Error codes for the ladder body diagnostics.
//!
//! Codes are organized by what they concern:
//! - `E0xx` - Document errors
//! - `E1xx` - Ladder body structure
//! - `E2xx` - Elements and references

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Document Errors (E0xx)
    // =========================================================================
    /// Malformed XML.
    ///
    /// The input is not a well-formed XML document.
    E001,

    // =========================================================================
    // Body Errors (E1xx)
    // =========================================================================
    /// Missing ladder body.
    ///
    /// The document has no `LD` element, so there is nothing to reconstruct.
    E100,

    // =========================================================================
    // Element Errors (E2xx)
    // =========================================================================
    /// Element without identifier.
    ///
    /// A ladder body child has no `localId` attribute and is skipped.
    E200,

    /// Duplicate identifier.
    ///
    /// Two ladder body children share a `localId`; the later one wins.
    E201,

    /// Connection without reference.
    ///
    /// A `connection` element has no `refLocalId` attribute and is skipped.
    E202,

    /// Dangling reference.
    ///
    /// A connection names an element that does not exist. Branch tracing
    /// stops there.
    E203,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E100 => "E100",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
