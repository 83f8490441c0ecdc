//! Error and diagnostic system for the ladder body reader.
//!
//! This module provides:
//! - Error codes for documentation and searchability
//! - Multiple labeled spans into the XML source
//! - Severity levels
//! - A diagnostic collector for accumulating warnings alongside errors
//!
//! # Overview
//!
//! A [`Diagnostic`] is a single error or warning with an optional error code,
//! labeled source locations and help text. Fatal diagnostics are returned in a
//! [`ParseError`]; warnings travel with the successful
//! [`BuildOutput`](crate::BuildOutput).
//!
//! # Example
//!
//! ```
//! # use ladderview_parser::error::{Diagnostic, ErrorCode};
//! # use ladderview_parser::Span;
//!
//! let diag = Diagnostic::warning("element `4` is defined multiple times")
//!     .with_code(ErrorCode::E201)
//!     .with_label(Span::new(120..160), "duplicate definition")
//!     .with_secondary_label(Span::new(40..80), "first defined here")
//!     .with_help("give every ladder element a unique `localId`");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
