//! # Ladderview Parser
//!
//! Reads the ladder body of a PLCopen XML document into the element graph
//! consumed by rung reconstruction.
//!
//! Two entry points are provided:
//!
//! - [`build`] is lenient: it always returns a map, empty when the document
//!   cannot be read.
//! - [`try_build`] reports why a document could not be read and returns
//!   the non-fatal warnings alongside the map.
//!
//! ## Usage
//!
//! ```
//! # use ladderview_parser::{try_build, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//!         <body><LD>
//!             <leftPowerRail localId="1"/>
//!             <contact localId="2">
//!                 <connectionPointIn><connection refLocalId="1"/></connectionPointIn>
//!                 <variable>Start</variable>
//!             </contact>
//!         </LD></body>
//!     "#;
//!
//!     let output = try_build(source)?;
//!     assert_eq!(output.elements().len(), 2);
//!     Ok(())
//! }
//! ```

mod builder;
pub mod error;
mod span;

pub use span::Span;

use log::{debug, warn};

use ladderview_core::semantic::ElementMap;

use builder::Builder;
use error::Diagnostic;

/// The element graph of a successfully read document, with the warnings
/// produced while reading it.
#[derive(Debug, Default)]
pub struct BuildOutput {
    elements: ElementMap,
    warnings: Vec<Diagnostic>,
}

impl BuildOutput {
    pub(crate) fn new(elements: ElementMap, warnings: Vec<Diagnostic>) -> Self {
        Self { elements, warnings }
    }

    /// Elements in document order.
    pub fn elements(&self) -> &ElementMap {
        &self.elements
    }

    /// Non-fatal problems found while reading, in document order.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    pub fn into_elements(self) -> ElementMap {
        self.elements
    }
}

/// Read a ladder body, reporting why the document could not be read.
///
/// Empty or whitespace-only input is not an error and yields an empty map.
///
/// # Errors
///
/// Returns a [`ParseError`](error::ParseError) when the source is not
/// well-formed XML or contains no `LD` element.
pub fn try_build(source: &str) -> Result<BuildOutput, error::ParseError> {
    Builder::new(source).build()
}

/// Read a ladder body, falling back to an empty map.
///
/// Warnings are logged at debug level and fatal errors at warn level; the
/// caller always gets a usable (possibly empty) [`ElementMap`].
///
/// # Example
///
/// ```
/// # use ladderview_parser::build;
/// assert!(build("this is not xml").is_empty());
/// assert!(build("<project/>").is_empty());
/// ```
pub fn build(source: &str) -> ElementMap {
    match try_build(source) {
        Ok(output) => {
            for warning in output.warnings() {
                debug!(warning:% = warning; "Ladder body warning");
            }
            output.into_elements()
        }
        Err(err) => {
            warn!(err:err; "Could not read ladder body, using an empty element graph");
            ElementMap::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use ladderview_core::semantic::ElementKind;

    use super::*;
    use crate::error::ErrorCode;

    const MOTOR: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://www.plcopen.org/xml/tc6_0201">
  <types><pous><pou name="Main" pouType="program"><body>
    <LD>
      <leftPowerRail localId="1"/>
      <contact localId="2" negated="false">
        <connectionPointIn><connection refLocalId="1"/></connectionPointIn>
        <variable>Start</variable>
      </contact>
      <contact localId="3" negated="true">
        <connectionPointIn><connection refLocalId="2"/></connectionPointIn>
        <variable>Stop</variable>
      </contact>
      <coil localId="4">
        <connectionPointIn><connection refLocalId="3"/></connectionPointIn>
        <variable>Motor</variable>
      </coil>
    </LD>
  </body></pou></pous></types>
</project>"#;

    fn codes(output: &BuildOutput) -> Vec<ErrorCode> {
        output.warnings().iter().filter_map(Diagnostic::code).collect()
    }

    #[test]
    fn test_reads_motor_rung() {
        let output = try_build(MOTOR).unwrap();
        let elements = output.elements();

        assert!(output.warnings().is_empty());
        assert_eq!(
            elements.keys().map(|id| id.as_str()).collect::<Vec<_>>(),
            ["1", "2", "3", "4"]
        );

        let stop = &elements["3"];
        assert_eq!(stop.kind(), ElementKind::Contact);
        assert_eq!(stop.variable(), "Stop");
        assert!(stop.negated());
        assert_eq!(stop.primary_input().map(|id| id.as_str()), Some("2"));

        assert_eq!(elements["1"].kind(), ElementKind::LeftRail);
        assert_eq!(elements["4"].kind(), ElementKind::Coil);
        assert!(!elements["2"].negated());
    }

    #[test]
    fn test_empty_input() {
        let output = try_build("  \n\t").unwrap();

        assert!(output.elements().is_empty());
        assert!(output.warnings().is_empty());
    }

    #[test]
    fn test_malformed_xml() {
        let err = try_build("<project><LD></project>").unwrap_err();

        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E001));
        assert!(build("<project><LD></project>").is_empty());
    }

    #[test]
    fn test_missing_ladder_body() {
        let err = try_build("<project><FBD/></project>").unwrap_err();
        let diag = &err.diagnostics()[0];

        assert_eq!(diag.code(), Some(ErrorCode::E100));
        assert_eq!(diag.labels()[0].span().start(), 0);
    }

    #[test]
    fn test_missing_local_id_is_skipped() {
        let output = try_build(
            r#"<LD><contact><variable>A</variable></contact><coil localId=""/></LD>"#,
        )
        .unwrap();

        assert!(output.elements().is_empty());
        assert_eq!(codes(&output), [ErrorCode::E200, ErrorCode::E200]);
    }

    #[test]
    fn test_duplicate_id_keeps_first_position() {
        let output = try_build(
            r#"<LD>
                <contact localId="5"><variable>Old</variable></contact>
                <coil localId="6"/>
                <contact localId="5"><variable>New</variable></contact>
            </LD>"#,
        )
        .unwrap();
        let elements = output.elements();

        assert_eq!(elements.len(), 2);
        assert_eq!(elements.get_index(0).unwrap().1.variable(), "New");
        assert_eq!(codes(&output), [ErrorCode::E201]);
        assert_eq!(output.warnings()[0].labels().len(), 2);
    }

    #[test]
    fn test_connection_without_reference() {
        let output = try_build(
            r#"<LD><coil localId="1"><connectionPointIn><connection/></connectionPointIn></coil></LD>"#,
        )
        .unwrap();

        assert!(output.elements()["1"].inputs().is_empty());
        assert_eq!(codes(&output), [ErrorCode::E202]);
    }

    #[test]
    fn test_dangling_reference_is_kept() {
        let output = try_build(
            r#"<LD><coil localId="1"><connectionPointIn><connection refLocalId="9"/></connectionPointIn></coil></LD>"#,
        )
        .unwrap();

        assert_eq!(output.elements()["1"].inputs().len(), 1);
        assert_eq!(codes(&output), [ErrorCode::E203]);
    }

    #[test]
    fn test_variable_is_trimmed_and_negated_accepts_one() {
        let output = try_build(
            r#"<LD><contact localId="1" negated="1"><variable>
                Sensor_1
            </variable></contact></LD>"#,
        )
        .unwrap();
        let contact = &output.elements()["1"];

        assert_eq!(contact.variable(), "Sensor_1");
        assert!(contact.negated());
    }

    #[test]
    fn test_unknown_tags_are_other() {
        let output = try_build(r#"<LD><rightPowerRail localId="7"/><block localId="8"/></LD>"#)
            .unwrap();

        assert!(
            output
                .elements()
                .values()
                .all(|element| element.kind() == ElementKind::Other)
        );
        assert_eq!(output.elements()["7"].tag(), "rightPowerRail");
    }

    #[test]
    fn test_only_connection_point_in_connections_count() {
        let output = try_build(
            r#"<LD><contact localId="2">
                <connectionPointIn><connection refLocalId="1"/><connection refLocalId="3"/></connectionPointIn>
                <connectionPointOut><connection refLocalId="4"/></connectionPointOut>
            </contact><leftPowerRail localId="1"/><contact localId="3"/></LD>"#,
        )
        .unwrap();

        let inputs: Vec<_> = output.elements()["2"]
            .inputs()
            .iter()
            .map(|id| id.as_str())
            .collect();
        assert_eq!(inputs, ["1", "3"]);
        assert!(output.warnings().is_empty());
    }

    mod proptest_tests {
        use proptest::prelude::*;

        use super::*;

        // ====================================================================
        // Strategies
        // ====================================================================

        fn arbitrary_markup() -> impl Strategy<Value = String> {
            prop::collection::vec(
                prop_oneof![
                    Just("<LD>".to_string()),
                    Just("</LD>".to_string()),
                    Just(r#"<contact localId="1">"#.to_string()),
                    Just("</contact>".to_string()),
                    Just(r#"<connection refLocalId="1"/>"#.to_string()),
                    Just("<connectionPointIn>".to_string()),
                    Just("</connectionPointIn>".to_string()),
                    "[a-zA-Z0-9 <>/=\"&;]{0,12}",
                ],
                0..24,
            )
            .prop_map(|parts| parts.concat())
        }

        // ====================================================================
        // Property Check Functions
        // ====================================================================

        fn check_build_never_panics(source: &str) -> Result<(), TestCaseError> {
            let lenient = build(source);
            match try_build(source) {
                Ok(output) => prop_assert_eq!(output.elements().len(), lenient.len()),
                Err(err) => {
                    prop_assert!(lenient.is_empty());
                    prop_assert!(!err.diagnostics().is_empty());
                }
            }
            Ok(())
        }

        fn check_spans_within_source(source: &str) -> Result<(), TestCaseError> {
            let diagnostics = match try_build(source) {
                Ok(output) => output.warnings().to_vec(),
                Err(err) => err.diagnostics().to_vec(),
            };
            for label in diagnostics.iter().flat_map(|diag| diag.labels()) {
                prop_assert!(label.span().end() <= source.len());
            }
            Ok(())
        }

        // ====================================================================
        // Property Tests
        // ====================================================================

        proptest! {
            #[test]
            fn build_never_panics(source in ".{0,64}") {
                check_build_never_panics(&source)?;
            }

            #[test]
            fn build_never_panics_on_markup(source in arbitrary_markup()) {
                check_build_never_panics(&source)?;
            }

            #[test]
            fn diagnostic_spans_within_source(source in arbitrary_markup()) {
                check_spans_within_source(&source)?;
            }
        }
    }
}
