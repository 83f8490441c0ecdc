//! Rung reconstruction from the ladder element graph.
//!
//! The element graph only records, for every element, which elements feed
//! it. Rungs are recovered by starting at each coil and walking those
//! references backwards to the left power rail:
//!
//! - every coil becomes one [`Rung`], in element-map order;
//! - every input of the coil seeds one candidate [`Branch`];
//! - past the first hop only the primary input is followed, so secondary
//!   predecessors of intermediate elements are not represented.
//!
//! Traces terminate at the rail, at a dangling reference, at an element
//! without inputs, or when an element repeats within the same trace.

mod trace;

use log::{debug, info, trace};

use ladderview_core::semantic::{ElementKind, ElementMap, Rung};

use trace::{TraceEnd, trace_branch};

/// Rebuilds the rung structure of a ladder body.
///
/// Empty branches are dropped, but a coil whose branches are all empty still
/// yields a rung (with no branches), so every coil stays visible.
///
/// # Examples
///
/// ```
/// # use ladderview::structure::reconstruct;
/// # use ladderview::semantic::{Element, ElementKind, ElementMap};
/// let mut elements = ElementMap::new();
/// for element in [
///     Element::new("0", ElementKind::LeftRail),
///     Element::new("1", ElementKind::Contact).with_variable("Start").with_inputs(["0"]),
///     Element::new("2", ElementKind::Coil).with_variable("Motor").with_inputs(["1"]),
/// ] {
///     elements.insert(element.id().clone(), element);
/// }
///
/// let rungs = reconstruct(&elements);
/// assert_eq!(rungs.len(), 1);
/// assert_eq!(rungs[0].coil_variable(), "Motor");
/// assert_eq!(rungs[0].branches()[0].contacts()[0].variable(), "Start");
/// ```
pub fn reconstruct(elements: &ElementMap) -> Vec<Rung> {
    info!(elements_count = elements.len(); "Reconstructing rungs");

    let rungs: Vec<Rung> = elements
        .values()
        .filter(|element| element.kind() == ElementKind::Coil)
        .map(|coil| {
            let branches = coil
                .inputs()
                .iter()
                .filter_map(|input| {
                    let (branch, end) = trace_branch(elements, input);
                    if end != TraceEnd::Rail {
                        debug!(
                            coil_id:% = coil.id(),
                            input_id:% = input,
                            end:?;
                            "Branch does not reach the left rail"
                        );
                    }
                    (!branch.is_empty()).then_some(branch)
                })
                .collect();

            Rung::new(coil.variable(), branches).with_coil_negated(coil.negated())
        })
        .collect();

    debug!(rungs_count = rungs.len(); "Rungs reconstructed");
    trace!(rungs:?; "Reconstructed rungs");

    rungs
}
