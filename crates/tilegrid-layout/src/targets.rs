#![forbid(unsafe_code)]

//! Valid-position maps: where a new element of each span may be dropped.
//!
//! For every span the standard grid supports (1, 2 and 3 columns) the
//! generator tests each free position with the placement validator and
//! collects the ones that keep the layout balanced at every simulated
//! width.
//!
//! The moment the placed-element set changes, a previously generated map
//! is stale in its entirety and must be regenerated. No caching or
//! incremental update happens here; that is a correctness requirement of
//! the map, not an optimization left on the table.
//!
//! # Usage
//!
//! ```
//! use tilegrid_layout::{generate_valid_positions, Span};
//!
//! let map = generate_valid_positions::<()>(&[], 6);
//! assert_eq!(map.positions(Span::ONE).len(), 6);
//! assert_eq!(map.positions(Span::THREE), &[0]);
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tilegrid_core::{Element, GridOptions, Span};

use crate::placement::is_valid;

/// Spans the map is generated for, in result order.
const TARGET_SPANS: [Span; 3] = [Span::ONE, Span::TWO, Span::THREE];

/// Positions where an element of each span (1..=3) can be legally inserted
/// into the current layout.
///
/// Position lists are in ascending order. The map is a snapshot of one
/// placed-element set; see [`generate_valid_positions`] for the
/// regeneration contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidPositionMap {
    spans: [Vec<usize>; 3],
}

impl ValidPositionMap {
    /// Valid positions for a span, in ascending order.
    ///
    /// Spans outside the generated 1..=3 range have no valid positions.
    #[must_use]
    pub fn positions(&self, span: Span) -> &[usize] {
        match span.get() {
            1..=3 => &self.spans[span.get() as usize - 1],
            _ => &[],
        }
    }

    /// Iterate `(span, positions)` pairs in ascending span order.
    pub fn iter(&self) -> impl Iterator<Item = (Span, &[usize])> {
        TARGET_SPANS
            .into_iter()
            .zip(self.spans.iter().map(Vec::as_slice))
    }

    /// Total number of valid `(span, position)` pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spans.iter().map(Vec::len).sum()
    }

    /// True when no span has any valid position.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(Vec::is_empty)
    }
}

impl Default for ValidPositionMap {
    fn default() -> Self {
        Self {
            spans: [Vec::new(), Vec::new(), Vec::new()],
        }
    }
}

/// Generate the map of valid insert positions for each span size.
///
/// Every unoccupied position below `max_positions` is tested against the
/// placement validator on the standard three-column grid
/// ([`GridOptions::three_column`]). Occupied positions are skipped
/// outright.
///
/// The result must be regenerated in full whenever the placed-element set
/// changes; any mutation invalidates the whole map.
#[must_use]
pub fn generate_valid_positions<P: Clone + Default>(
    elements: &[Element<P>],
    max_positions: usize,
) -> ValidPositionMap {
    let occupied: FxHashSet<usize> = elements.iter().map(|e| e.position).collect();
    let opts = GridOptions::three_column(max_positions);
    let mut map = ValidPositionMap::default();

    for (slot, span) in TARGET_SPANS.into_iter().enumerate() {
        for position in 0..max_positions {
            if occupied.contains(&position) {
                continue;
            }
            let candidate = Element::<P>::new(position, span);
            // Collision is unreachable: occupied positions were skipped.
            if is_valid(&candidate, elements, &opts).unwrap_or(false) {
                map.spans[slot].push(position);
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        elements = elements.len(),
        max_positions,
        targets = map.len(),
        "generated valid-position map"
    );

    map
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
