//! Backward branch tracing from a coil input toward the left rail.

use std::collections::HashSet;

use log::{debug, trace};

use ladderview_core::semantic::{Branch, ContactRef, ElementId, ElementKind, ElementMap};

/// Why a trace stopped walking upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TraceEnd {
    /// Reached the left power rail.
    Rail,
    /// The next id names no element.
    Dangling,
    /// The next id was already visited in this trace.
    Cycle,
    /// The last element has no inputs.
    Open,
}

/// Walks upstream from `seed` along primary inputs.
///
/// Contacts and coils met on the way are recorded; other kinds are passed
/// through. The returned branch reads from the rail toward the coil.
pub(crate) fn trace_branch(elements: &ElementMap, seed: &ElementId) -> (Branch, TraceEnd) {
    let mut visited: HashSet<&ElementId> = HashSet::new();
    let mut recorded = Vec::new();
    let mut current = seed;

    let end = loop {
        if !visited.insert(current) {
            debug!(element_id:% = current; "Cycle detected while tracing branch");
            break TraceEnd::Cycle;
        }

        let Some(element) = elements.get(current) else {
            trace!(element_id:% = current; "Branch trace reached a dangling reference");
            break TraceEnd::Dangling;
        };

        match element.kind() {
            ElementKind::LeftRail => break TraceEnd::Rail,
            kind if kind.is_branch_element() => recorded.push(ContactRef::from(element)),
            _ => {}
        }

        match element.primary_input() {
            Some(next) => current = next,
            None => break TraceEnd::Open,
        }
    };

    recorded.reverse();
    (Branch::from(recorded), end)
}

#[cfg(test)]
mod tests {
    use ladderview_core::semantic::Element;

    use super::*;

    fn map(elements: Vec<Element>) -> ElementMap {
        elements
            .into_iter()
            .map(|element| (element.id().clone(), element))
            .collect()
    }

    fn variables(branch: &Branch) -> Vec<&str> {
        branch.iter().map(ContactRef::variable).collect()
    }

    #[test]
    fn test_trace_reaches_rail() {
        let elements = map(vec![
            Element::new("0", ElementKind::LeftRail),
            Element::new("1", ElementKind::Contact)
                .with_variable("A")
                .with_inputs(["0"]),
            Element::new("2", ElementKind::Contact)
                .with_variable("B")
                .with_inputs(["1"]),
        ]);

        let (branch, end) = trace_branch(&elements, &ElementId::from("2"));

        assert_eq!(variables(&branch), ["A", "B"]);
        assert_eq!(end, TraceEnd::Rail);
    }

    #[test]
    fn test_trace_passes_through_other_elements() {
        let elements = map(vec![
            Element::new("0", ElementKind::LeftRail),
            Element::new("1", ElementKind::Contact)
                .with_variable("A")
                .with_inputs(["0"]),
            Element::new("2", ElementKind::Other)
                .with_variable("TON_1")
                .with_inputs(["1"]),
            Element::new("3", ElementKind::Contact)
                .with_variable("B")
                .with_inputs(["2"]),
        ]);

        let (branch, end) = trace_branch(&elements, &ElementId::from("3"));

        assert_eq!(variables(&branch), ["A", "B"]);
        assert_eq!(end, TraceEnd::Rail);
    }

    #[test]
    fn test_trace_records_series_coil() {
        let elements = map(vec![
            Element::new("1", ElementKind::Contact)
                .with_variable("A")
                .with_inputs(["0"]),
            Element::new("2", ElementKind::Coil)
                .with_variable("Mid")
                .with_inputs(["1"]),
        ]);

        let (branch, end) = trace_branch(&elements, &ElementId::from("2"));

        assert_eq!(branch.contacts()[1].kind(), ElementKind::Coil);
        assert_eq!(end, TraceEnd::Dangling);
    }

    #[test]
    fn test_trace_stops_on_cycle() {
        let elements = map(vec![
            Element::new("x", ElementKind::Contact)
                .with_variable("X")
                .with_inputs(["y"]),
            Element::new("y", ElementKind::Contact)
                .with_variable("Y")
                .with_inputs(["x"]),
        ]);

        let (branch, end) = trace_branch(&elements, &ElementId::from("x"));

        assert_eq!(variables(&branch), ["Y", "X"]);
        assert_eq!(end, TraceEnd::Cycle);
    }

    #[test]
    fn test_trace_self_loop() {
        let elements = map(vec![
            Element::new("s", ElementKind::Contact)
                .with_variable("S")
                .with_inputs(["s"]),
        ]);

        let (branch, end) = trace_branch(&elements, &ElementId::from("s"));

        assert_eq!(variables(&branch), ["S"]);
        assert_eq!(end, TraceEnd::Cycle);
    }

    #[test]
    fn test_trace_open_end() {
        let elements = map(vec![Element::new("1", ElementKind::Contact).with_variable("A")]);

        let (branch, end) = trace_branch(&elements, &ElementId::from("1"));

        assert_eq!(variables(&branch), ["A"]);
        assert_eq!(end, TraceEnd::Open);
    }

    #[test]
    fn test_trace_from_dangling_seed() {
        let (branch, end) = trace_branch(&ElementMap::new(), &ElementId::from("missing"));

        assert!(branch.is_empty());
        assert_eq!(end, TraceEnd::Dangling);
    }
}
