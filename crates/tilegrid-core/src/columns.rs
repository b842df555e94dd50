//! Grid sizing options and container-width classification.
//!
//! [`GridOptions`] carries the two numbers every solver needs: the largest
//! simulated column width to validate against and the minimum length of any
//! generated dense layout. [`ColumnBreakpoints`] maps a container width to
//! the number of columns the grid shows at that width, the step the host's
//! stylesheet otherwise performs.
//!
//! # Invariants
//!
//! 1. `GridOptions::max_columns` is always at least 2. A single column is
//!    trivially always balanced and carries no information, so validation
//!    starts at width two.
//! 2. `ColumnBreakpoints` thresholds are strictly increasing, so
//!    classification is monotonic in the container width.

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Validation and materialization options for a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridOptions {
    max_columns: u16,
    max_positions: usize,
}

impl GridOptions {
    /// Create options, rejecting grids narrower than two columns.
    pub fn new(max_columns: u16, max_positions: usize) -> Result<Self, GridError> {
        if max_columns < 2 {
            return Err(GridError::InvalidColumnCount { found: max_columns });
        }
        Ok(Self {
            max_columns,
            max_positions,
        })
    }

    /// Options for the standard three-column content grid.
    #[must_use]
    pub const fn three_column(max_positions: usize) -> Self {
        Self {
            max_columns: 3,
            max_positions,
        }
    }

    /// Largest simulated column width to validate against.
    #[must_use]
    pub const fn max_columns(self) -> u16 {
        self.max_columns
    }

    /// Minimum length of any generated dense layout.
    ///
    /// A layout is never shorter than this, but may be longer when an
    /// element's position lies beyond it.
    #[must_use]
    pub const fn max_positions(self) -> usize {
        self.max_positions
    }
}

/// Container-width thresholds deciding how many columns the grid shows.
///
/// Below `two_column_min` the grid renders one column; from `two_column_min`
/// two; from `three_column_min` three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnBreakpoints {
    two_column_min: u32,
    three_column_min: u32,
}

impl ColumnBreakpoints {
    /// Default thresholds (768/1024, the usual tablet and desktop cut points).
    pub const DEFAULT: Self = Self {
        two_column_min: 768,
        three_column_min: 1024,
    };

    /// Create thresholds, rejecting a misordered pair.
    pub fn new(two_column_min: u32, three_column_min: u32) -> Result<Self, GridError> {
        if two_column_min >= three_column_min {
            return Err(GridError::InvalidBreakpoints {
                two_column_min,
                three_column_min,
            });
        }
        Ok(Self {
            two_column_min,
            three_column_min,
        })
    }

    /// Number of grid columns shown at a given container width.
    #[must_use]
    pub const fn classify_width(self, width: u32) -> u16 {
        if width >= self.three_column_min {
            3
        } else if width >= self.two_column_min {
            2
        } else {
            1
        }
    }

    /// Whether a width change crosses a column-count boundary.
    ///
    /// Returns `Some((old, new))` when the column count changed. A change
    /// means every previously generated valid-position map is stale and
    /// the host should re-validate placements at the new width set.
    #[must_use]
    pub const fn detect_transition(self, old_width: u32, new_width: u32) -> Option<(u16, u16)> {
        let old = self.classify_width(old_width);
        let new = self.classify_width(new_width);
        if old != new { Some((old, new)) } else { None }
    }
}

impl Default for ColumnBreakpoints {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// =========================================================================
// Tests
// =========================================================================
