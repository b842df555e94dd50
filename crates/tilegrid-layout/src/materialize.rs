#![forbid(unsafe_code)]

//! Dense materialization of sparse element sets.
//!
//! Rendering wants one element per slot, in order. The materializer takes
//! the sparse placed set and fills every uncovered slot with a synthesized
//! single-column blank, so the result can be handed straight to whatever
//! renders the grid.
//!
//! # Invariants
//!
//! 1. Output length follows the projector's rule: it covers the highest
//!    declared position and is never shorter than
//!    `GridOptions::max_positions`.
//! 2. Every entry's `position` equals its index in the result. Placed
//!    elements land at the index equal to their declared position, not
//!    their insertion order; blanks are synthesized carrying their slot
//!    index.
//! 3. Caller payloads pass through untouched; blanks carry `P::default()`.

use tilegrid_core::{Element, GridOptions};

use crate::project::dense_len;

/// Materialize a complete ordered layout from sparsely placed elements.
///
/// Slots not covered by an input element are filled with synthesized
/// single-column blanks ([`Element::blank`]).
#[must_use]
pub fn layout_elements<P: Clone + Default>(
    elements: &[Element<P>],
    opts: &GridOptions,
) -> Vec<Element<P>> {
    let mut layout: Vec<Element<P>> = (0..dense_len(elements, opts)).map(Element::blank).collect();
    for element in elements {
        layout[element.position] = element.clone();
    }
    layout
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
