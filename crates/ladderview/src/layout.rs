//! Layout engine for reconstructed rungs.
//!
//! This module turns a list of [`Rung`]s into a [`Diagram`] of absolute
//! positions ready for rendering.
//!
//! # Pipeline Position
//!
//! ```text
//! ElementMap
//!     ↓ structure
//! Vec<Rung>
//!     ↓ layout (this module)
//! Diagram
//!     ↓ export
//! SVG / JSON
//! ```
//!
//! # Geometry
//!
//! Rungs are stacked top to bottom starting at the top padding. Each rung
//! reserves `max(1, n) * branch_spacing + rung_spacing`, where `n` is its
//! branch count. Branches are centred on the rung's vertical midpoint, and
//! the coil always sits on that midpoint next to the right rail.
//!
//! The diagram is at least `viewport_width` wide, and grows when the
//! longest branch would otherwise run past the merge point.

mod rung;

use log::{debug, info, trace};

use ladderview_core::{draw::Diagram, geometry::Size, semantic::Rung};

use crate::config::LayoutConfig;

use rung::RungPlacer;

/// Contact slots beyond the longest branch: the leading slot before the
/// first contact plus room for the merge point.
const EXTRA_SLOTS: f32 = 1.5;

/// Lays out rungs between two power rails.
///
/// The input is only read; the same rungs and config always produce an
/// identical diagram.
///
/// # Examples
///
/// ```
/// # use ladderview::{config::LayoutConfig, layout::layout};
/// let diagram = layout(&[], &LayoutConfig::default());
///
/// assert!(diagram.is_empty());
/// assert_eq!(diagram.height(), 80.0);
/// assert_eq!(diagram.width(), 800.0);
/// ```
pub fn layout(rungs: &[Rung], config: &LayoutConfig) -> Diagram {
    info!(rungs_count = rungs.len(); "Laying out rungs");

    let padding = config.padding();
    let longest_branch = rungs.iter().map(Rung::max_branch_len).max().unwrap_or(0);
    let content_width =
        2.0 * padding + config.element_width() * (longest_branch as f32 + EXTRA_SLOTS);
    let width = config.viewport_width().max(content_width);
    if width > config.viewport_width() {
        debug!(
            width = width,
            longest_branch = longest_branch;
            "Diagram widened beyond the viewport"
        );
    }

    let rails = [padding, width - padding];
    let placer = RungPlacer::new(config, rails);

    let mut top = padding;
    let rung_layouts = rungs
        .iter()
        .map(|rung| {
            let rung_layout = placer.place(rung, top);
            top = rung_layout.vertical_span().bottom();
            rung_layout
        })
        .collect();

    let diagram = Diagram::new(Size::new(width, top + padding), rails, rung_layouts);

    debug!(width = diagram.width(), height = diagram.height(); "Layout calculated");
    trace!(diagram:?; "Laid out diagram");

    diagram
}
