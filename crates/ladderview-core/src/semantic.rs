//! Semantic model types for ladder programs.
//!
//! Two layers live here:
//!
//! - The element graph ([`Element`], [`ElementMap`]): one record per ladder
//!   body child, linked to its upstream elements by [`ElementId`].
//! - The reconstructed rung model ([`Rung`], [`Branch`], [`ContactRef`]):
//!   one rung per coil, each branch a series chain read from the left rail
//!   toward the coil.

use std::{borrow::Borrow, fmt};

use indexmap::IndexMap;
use serde::Serialize;

/// Identifier of an element within one ladder body (`localId` in PLCopen).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Creates an identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for ElementId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The kind of a ladder element, derived from its tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementKind {
    /// A contact testing a boolean variable.
    Contact,
    /// A coil driven by the rung logic.
    Coil,
    /// The left power rail, the always-true source of every branch.
    LeftRail,
    /// Any other element (right rail, function blocks, ...). Traversal passes
    /// through these without recording them.
    Other,
}

impl ElementKind {
    /// Maps a PLCopen tag name to an element kind, ignoring ASCII case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ladderview_core::semantic::ElementKind;
    /// assert_eq!(ElementKind::from_tag("leftPowerRail"), ElementKind::LeftRail);
    /// assert_eq!(ElementKind::from_tag("CONTACT"), ElementKind::Contact);
    /// assert_eq!(ElementKind::from_tag("block"), ElementKind::Other);
    /// ```
    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("contact") {
            Self::Contact
        } else if tag.eq_ignore_ascii_case("coil") {
            Self::Coil
        } else if tag.eq_ignore_ascii_case("leftPowerRail") {
            Self::LeftRail
        } else {
            Self::Other
        }
    }

    /// Returns `true` for kinds that appear as glyphs inside a branch.
    pub fn is_branch_element(self) -> bool {
        matches!(self, Self::Contact | Self::Coil)
    }
}

/// One node of the ladder element graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    id: ElementId,
    kind: ElementKind,
    tag: String,
    variable: String,
    negated: bool,
    inputs: Vec<ElementId>,
}

impl Element {
    /// Creates an element with no variable, no negation and no inputs.
    ///
    /// The raw tag name defaults to the empty string; see [`Element::with_tag`].
    pub fn new(id: impl Into<ElementId>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
            tag: String::new(),
            variable: String::new(),
            negated: false,
            inputs: Vec::new(),
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = variable.into();
        self
    }

    pub fn with_negated(mut self, negated: bool) -> Self {
        self.negated = negated;
        self
    }

    pub fn with_inputs<I, T>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ElementId>,
    {
        self.inputs = inputs.into_iter().map(Into::into).collect();
        self
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// The tag name this element was read from, as written in the document.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    pub fn negated(&self) -> bool {
        self.negated
    }

    /// Upstream elements feeding this element, primary predecessor first.
    pub fn inputs(&self) -> &[ElementId] {
        &self.inputs
    }

    /// The primary predecessor, if any.
    pub fn primary_input(&self) -> Option<&ElementId> {
        self.inputs.first()
    }
}

/// Insertion-ordered element arena keyed by id.
///
/// Document order is preserved so that every stage iterating the map is
/// deterministic.
pub type ElementMap = IndexMap<ElementId, Element>;

/// A contact (or series coil) as it appears inside a branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRef {
    variable: String,
    negated: bool,
    kind: ElementKind,
}

impl ContactRef {
    pub fn new(variable: impl Into<String>, negated: bool, kind: ElementKind) -> Self {
        Self {
            variable: variable.into(),
            negated,
            kind,
        }
    }

    /// Shorthand for a [`ElementKind::Contact`] reference.
    pub fn contact(variable: impl Into<String>, negated: bool) -> Self {
        Self::new(variable, negated, ElementKind::Contact)
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    pub fn negated(&self) -> bool {
        self.negated
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }
}

impl From<&Element> for ContactRef {
    fn from(element: &Element) -> Self {
        Self::new(element.variable(), element.negated(), element.kind())
    }
}

/// A series chain of contacts, ordered from the left rail toward the coil.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Branch(Vec<ContactRef>);

impl Branch {
    pub fn contacts(&self) -> &[ContactRef] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContactRef> {
        self.0.iter()
    }
}

impl From<Vec<ContactRef>> for Branch {
    fn from(contacts: Vec<ContactRef>) -> Self {
        Self(contacts)
    }
}

impl<'a> IntoIterator for &'a Branch {
    type Item = &'a ContactRef;
    type IntoIter = std::slice::Iter<'a, ContactRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One horizontal logic row energizing a single coil.
///
/// Branches are OR-ed together; contacts within a branch are AND-ed. A rung
/// may carry zero branches when every trace from its coil ended at the rail
/// immediately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rung {
    coil_variable: String,
    coil_negated: bool,
    branches: Vec<Branch>,
}

impl Rung {
    pub fn new(coil_variable: impl Into<String>, branches: Vec<Branch>) -> Self {
        Self {
            coil_variable: coil_variable.into(),
            coil_negated: false,
            branches,
        }
    }

    pub fn with_coil_negated(mut self, negated: bool) -> Self {
        self.coil_negated = negated;
        self
    }

    pub fn coil_variable(&self) -> &str {
        &self.coil_variable
    }

    pub fn coil_negated(&self) -> bool {
        self.coil_negated
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    /// Length of the longest branch, zero for a rung without branches.
    pub fn max_branch_len(&self) -> usize {
        self.branches.iter().map(Branch::len).max().unwrap_or(0)
    }
}
