#![forbid(unsafe_code)]

//! Dense span projection at a simulated column width.
//!
//! Placed elements are sparse: a position index and a span each. Balance
//! checking needs the dense per-position view, so the projector expands a
//! collection into one span value per slot, with the implicit single-column
//! filler `1` everywhere no element sits.
//!
//! # Invariants
//!
//! 1. The output covers every declared position and is never shorter than
//!    `GridOptions::max_positions`.
//! 2. A position covered by an element holds `min(span, column_width)`
//!    (responsive collapse); every other position holds `1`.
//! 3. The input collection is never mutated and its order is irrelevant.

use tilegrid_core::{Element, GridOptions};

/// Dense layout length for a set of placed elements.
///
/// Covers the highest declared position and is never shorter than the
/// configured minimum.
pub(crate) fn dense_len<P>(elements: &[Element<P>], opts: &GridOptions) -> usize {
    elements
        .iter()
        .map(|e| e.position + 1)
        .max()
        .unwrap_or(0)
        .max(opts.max_positions())
}

/// Project placed elements into a dense per-position span sequence at a
/// simulated column width.
///
/// An element wider than the simulated grid collapses to fill the whole
/// row; see [`Span::collapsed_to`](tilegrid_core::Span::collapsed_to).
#[must_use]
pub fn project_spans<P>(
    elements: &[Element<P>],
    column_width: u16,
    opts: &GridOptions,
) -> Vec<u16> {
    let mut spans = vec![1u16; dense_len(elements, opts)];
    for element in elements {
        spans[element.position] = element.span.collapsed_to(column_width);
    }
    spans
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
