#![forbid(unsafe_code)]

//! Element injection and placement validity.
//!
//! [`inject_element`] is the sole placement-conflict check in the system:
//! every higher-level validity decision is built on top of it.
//! [`is_valid`] composes injection, projection and balance checking across
//! the full range of simulated column widths.
//!
//! # Usage
//!
//! ```
//! use tilegrid_layout::{is_valid, Element, GridOptions, Span};
//!
//! let placed = vec![Element::<()>::new(0, Span::THREE)];
//! let opts = GridOptions::three_column(6);
//!
//! // A full-width element at the start of the next row keeps every
//! // simulated width balanced.
//! let candidate = Element::new(1, Span::THREE);
//! assert_eq!(is_valid(&candidate, &placed, &opts), Ok(true));
//! ```
//!
//! # Invariants
//!
//! 1. A colliding candidate is never valid; the collision error propagates
//!    unchanged for the caller to report.
//! 2. Validity requires balance at every width in `2..=max_columns`.
//!    Testing more widths can only make validity harder to satisfy.
//! 3. Width 1 is never tested: a single column is trivially always
//!    balanced and carries no information.
//!
//! # Failure Modes
//!
//! - [`GridError::PositionCollision`] when the candidate's position is
//!   already occupied.

use tilegrid_core::{Element, GridError, GridOptions};

use crate::balance::is_balanced;
use crate::project::project_spans;

/// Return a new collection equal to `existing` plus `new_element` appended.
///
/// Fails with [`GridError::PositionCollision`] when an existing element
/// already holds the requested position. The input slice is never mutated;
/// on success the caller owns a fresh copy.
pub fn inject_element<P: Clone>(
    new_element: Element<P>,
    existing: &[Element<P>],
) -> Result<Vec<Element<P>>, GridError> {
    if existing.iter().any(|e| e.position == new_element.position) {
        return Err(GridError::PositionCollision {
            position: new_element.position,
        });
    }
    let mut merged = existing.to_vec();
    merged.push(new_element);
    Ok(merged)
}

/// Check whether inserting `new_element` keeps the layout balanced at every
/// simulated column width from 2 to `max_columns` inclusive.
///
/// The merged layout is projected and balance-checked once per width; the
/// candidate is valid only if every width passes.
pub fn is_valid<P: Clone>(
    new_element: &Element<P>,
    existing: &[Element<P>],
    opts: &GridOptions,
) -> Result<bool, GridError> {
    let merged = inject_element(new_element.clone(), existing)?;

    for width in 2..=opts.max_columns() {
        let spans = project_spans(&merged, width, opts);
        if !is_balanced(&spans, width) {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                position = new_element.position,
                span = new_element.span.get(),
                width,
                "placement unbalanced at simulated width"
            );
            return Ok(false);
        }
    }

    Ok(true)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tilegrid_core::Span;

    fn placed(pairs: &[(usize, u16)]) -> Vec<Element> {
        pairs
            .iter()
            .map(|&(position, span)| Element::new(position, Span::new(span).unwrap()))
            .collect()
    }

    // ---- inject_element ----

    #[test]
    fn inject_appends_to_a_copy() {
        let existing = placed(&[(0, 1), (2, 2)]);
        let merged = inject_element(Element::new(1, Span::ONE), &existing).unwrap();
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[2].position, 1);
        // The original is untouched.
        assert_eq!(existing.len(), 2);
    }

    #[test]
    fn inject_rejects_occupied_position() {
        let existing = placed(&[(1, 2), (5, 2), (10, 3)]);
        let err = inject_element(Element::new(5, Span::TWO), &existing).unwrap_err();
        assert_eq!(err, GridError::PositionCollision { position: 5 });
    }

    #[test]
    fn inject_collision_is_idempotent() {
        let existing = placed(&[(3, 1)]);
        let first = inject_element(Element::new(3, Span::ONE), &existing);
        let second = inject_element(Element::new(3, Span::ONE), &existing);
        assert_eq!(first, second);
        assert!(first.is_err());
    }

    #[test]
    fn inject_into_empty_collection() {
        let merged = inject_element(Element::<()>::new(0, Span::THREE), &[]).unwrap();
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn inject_preserves_payloads() {
        let existing = vec![Element::<()>::new(0, Span::ONE).with_payload("a")];
        let merged =
            inject_element(Element::<()>::new(1, Span::ONE).with_payload("b"), &existing).unwrap();
        assert_eq!(merged[0].payload, "a");
        assert_eq!(merged[1].payload, "b");
    }

    // ---- is_valid ----

    #[test]
    fn reference_invalid_candidate() {
        let existing = placed(&[(1, 2)]);
        let opts = GridOptions::three_column(15);
        let candidate = Element::new(8, Span::TWO);
        assert_eq!(is_valid(&candidate, &existing, &opts), Ok(false));
    }

    #[test]
    fn collision_propagates_unchanged() {
        let existing = placed(&[(4, 1)]);
        let opts = GridOptions::three_column(10);
        let candidate = Element::new(4, Span::ONE);
        assert_eq!(
            is_valid(&candidate, &existing, &opts),
            Err(GridError::PositionCollision { position: 4 })
        );
    }

    #[test]
    fn single_column_filler_valid_on_empty_grid() {
        let opts = GridOptions::three_column(6);
        let candidate = Element::<()>::new(2, Span::ONE);
        assert_eq!(is_valid(&candidate, &[], &opts), Ok(true));
    }

    #[test]
    fn full_row_element_valid_at_row_start_only() {
        let opts = GridOptions::three_column(12);
        // Positions at multiples of 6 start a row at both width 2 and 3.
        assert_eq!(is_valid(&Element::<()>::new(0, Span::THREE), &[], &opts), Ok(true));
        assert_eq!(is_valid(&Element::<()>::new(6, Span::THREE), &[], &opts), Ok(true));
        // Position 3 starts a row at width 3 but splits one at width 2.
        assert_eq!(is_valid(&Element::<()>::new(3, Span::THREE), &[], &opts), Ok(false));
    }

    #[test]
    fn wider_grids_only_tighten_validity() {
        // Valid when widths 2..=4 are all tested, hence also valid at 2..=3
        // and 2..=2 (monotonicity).
        let candidate = Element::<()>::new(0, Span::ONE);
        for max_columns in [4u16, 3, 2] {
            let opts = GridOptions::new(max_columns, 8).unwrap();
            assert_eq!(is_valid(&candidate, &[], &opts), Ok(true));
        }
    }

    #[test]
    fn existing_imbalance_fails_every_candidate() {
        // The placed element at position 1 already splits a width-2 row, so
        // no candidate anywhere can rescue the layout.
        let existing = placed(&[(1, 2)]);
        let opts = GridOptions::three_column(15);
        for position in [0usize, 2, 6, 12] {
            let candidate = Element::new(position, Span::ONE);
            assert_eq!(is_valid(&candidate, &existing, &opts), Ok(false));
        }
    }
}
