//! Reads the `LD` body of a PLCopen document into the element graph.
//!
//! Every direct element child of the ladder body becomes one [`Element`]:
//!
//! ```xml
//! <contact localId="2" negated="true">
//!   <connectionPointIn>
//!     <connection refLocalId="1"/>
//!   </connectionPointIn>
//!   <variable>Stop</variable>
//! </contact>
//! ```
//!
//! Problems that only affect part of the body are reported as warnings and
//! the affected piece is skipped. A document that is not XML, or has no
//! ladder body at all, is an error.

use std::collections::HashMap;

use log::{debug, trace};
use roxmltree::{Document, Node};

use ladderview_core::semantic::{Element, ElementId, ElementKind, ElementMap};

use crate::{
    BuildOutput,
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::Span,
};

const LADDER_BODY_TAG: &str = "LD";
const VARIABLE_TAG: &str = "variable";
const CONNECTION_POINT_IN_TAG: &str = "connectionPointIn";
const CONNECTION_TAG: &str = "connection";

const LOCAL_ID_ATTR: &str = "localId";
const NEGATED_ATTR: &str = "negated";
const REF_LOCAL_ID_ATTR: &str = "refLocalId";

/// Single-use reader turning XML source into an [`ElementMap`].
pub(crate) struct Builder<'src> {
    source: &'src str,
    collector: DiagnosticCollector,
}

impl<'src> Builder<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Self {
            source,
            collector: DiagnosticCollector::new(),
        }
    }

    pub(crate) fn build(mut self) -> Result<BuildOutput, ParseError> {
        if self.source.trim().is_empty() {
            debug!("Empty document, no ladder elements to read");
            return Ok(BuildOutput::default());
        }

        let document = Document::parse(self.source).map_err(|err| {
            let pos = err.pos();
            let span = Span::at_position(self.source, pos.row, pos.col);
            Diagnostic::error(format!("malformed XML: {err}"))
                .with_code(ErrorCode::E001)
                .with_label(span, "reading stopped here")
                .with_help("the input must be a well-formed PLCopen XML document")
        })?;

        let Some(body) = document
            .descendants()
            .find(|node| node.has_tag_name(LADDER_BODY_TAG))
        else {
            let root = document.root_element();
            return Err(Diagnostic::error("document has no ladder body")
                .with_code(ErrorCode::E100)
                .with_label(
                    Self::start_tag_span(root),
                    format!("`{}` contains no `<LD>` element", root.tag_name().name()),
                )
                .with_help("ladder programs are read from the `<LD>` element of a POU body")
                .into());
        };

        let elements = self.read_body(body);
        let warnings = self.collector.finish()?;

        debug!(
            elements_count = elements.len(),
            warnings_count = warnings.len();
            "Ladder body read"
        );

        Ok(BuildOutput::new(elements, warnings))
    }

    fn read_body(&mut self, body: Node<'_, '_>) -> ElementMap {
        let mut elements = ElementMap::new();
        let mut first_seen: HashMap<ElementId, Span> = HashMap::new();
        let mut references: Vec<(ElementId, Span)> = Vec::new();

        for node in body.children().filter(Node::is_element) {
            let span = Self::start_tag_span(node);
            let tag = node.tag_name().name();

            let Some(local_id) = node.attribute(LOCAL_ID_ATTR).filter(|id| !id.is_empty()) else {
                self.collector.emit(
                    Diagnostic::warning(format!("`{tag}` element has no identifier"))
                        .with_code(ErrorCode::E200)
                        .with_label(span, "skipped")
                        .with_help("add a `localId` attribute so other elements can refer to it"),
                );
                continue;
            };

            let id = ElementId::new(local_id);
            let inputs = self.read_inputs(node, &mut references);
            let element = Element::new(id.clone(), ElementKind::from_tag(tag))
                .with_tag(tag)
                .with_variable(Self::variable_text(node))
                .with_negated(Self::is_negated(node))
                .with_inputs(inputs);

            trace!(element:?; "Read ladder element");

            if let Some(first) = first_seen.get(&id) {
                self.collector.emit(
                    Diagnostic::warning(format!("element `{id}` is defined multiple times"))
                        .with_code(ErrorCode::E201)
                        .with_label(span, "this definition replaces the first one")
                        .with_secondary_label(*first, "first defined here")
                        .with_help("give every ladder element a unique `localId`"),
                );
            } else {
                first_seen.insert(id.clone(), span);
            }

            elements.insert(id, element);
        }

        for (reference, span) in references {
            if !elements.contains_key(&reference) {
                self.collector.emit(
                    Diagnostic::warning(format!(
                        "connection refers to unknown element `{reference}`"
                    ))
                    .with_code(ErrorCode::E203)
                    .with_label(span, "no element with this id")
                    .with_help("branch tracing stops at this reference"),
                );
            }
        }

        elements
    }

    /// Upstream ids from `connectionPointIn > connection`, in document order.
    fn read_inputs(
        &mut self,
        node: Node<'_, '_>,
        references: &mut Vec<(ElementId, Span)>,
    ) -> Vec<ElementId> {
        let mut inputs = Vec::new();

        let connections = node.descendants().filter(|child| {
            child.has_tag_name(CONNECTION_TAG)
                && child
                    .parent_element()
                    .is_some_and(|parent| parent.has_tag_name(CONNECTION_POINT_IN_TAG))
        });

        for connection in connections {
            let span = Span::from(connection.range());
            match connection
                .attribute(REF_LOCAL_ID_ATTR)
                .filter(|id| !id.is_empty())
            {
                Some(reference) => {
                    let reference = ElementId::new(reference);
                    references.push((reference.clone(), span));
                    inputs.push(reference);
                }
                None => self.collector.emit(
                    Diagnostic::warning("connection has no reference")
                        .with_code(ErrorCode::E202)
                        .with_label(span, "skipped")
                        .with_help("add a `refLocalId` attribute naming the upstream element"),
                ),
            }
        }

        inputs
    }

    /// Trimmed text of the first nested `<variable>` element.
    fn variable_text(node: Node<'_, '_>) -> String {
        node.descendants()
            .skip(1)
            .find(|child| child.has_tag_name(VARIABLE_TAG))
            .map(|variable| {
                variable
                    .descendants()
                    .filter(Node::is_text)
                    .filter_map(|text| text.text())
                    .collect::<String>()
                    .trim()
                    .to_string()
            })
            .unwrap_or_default()
    }

    /// `negated` is an xsd:boolean, so both `true` and `1` count.
    fn is_negated(node: Node<'_, '_>) -> bool {
        matches!(node.attribute(NEGATED_ATTR), Some("true" | "1"))
    }

    /// Span of the opening tag only, so labels stay on one line.
    fn start_tag_span(node: Node<'_, '_>) -> Span {
        let range = node.range();
        let end = node
            .first_child()
            .map_or(range.end, |child| child.range().start);
        Span::new(range.start..end)
    }
}
