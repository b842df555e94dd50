//! Element records placed on the grid.
//!
//! An [`Element`] is a position on the conceptual one-dimensional slot
//! sequence plus the number of columns it spans, with an arbitrary
//! caller-defined payload riding along. The payload is opaque to every
//! solver: it is carried through injection and materialization untouched.

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Number of grid columns an element occupies.
///
/// `0` is invalid so spans are always at least one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Span(u16);

impl Span {
    /// Single-column span, the implicit filler width.
    pub const ONE: Self = Self(1);
    /// Two-column span.
    pub const TWO: Self = Self(2);
    /// Three-column span, a full row on the standard grid.
    pub const THREE: Self = Self(3);

    /// Create a span, rejecting zero.
    pub fn new(columns: u16) -> Result<Self, GridError> {
        if columns == 0 {
            return Err(GridError::ZeroSpan);
        }
        Ok(Self(columns))
    }

    /// Get the raw column count.
    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Width as rendered at a simulated column width.
    ///
    /// An element wider than the grid collapses to fill the whole row
    /// (responsive collapse).
    #[must_use]
    pub const fn collapsed_to(self, column_width: u16) -> u16 {
        if self.0 > column_width {
            column_width
        } else {
            self.0
        }
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::ONE
    }
}

/// A placed grid element.
///
/// `position` is a zero-based index into the slot sequence. No two elements
/// of a collection may share a position; that invariant is enforced by the
/// injector at insert time, not by this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element<P = ()> {
    /// Zero-based slot index.
    pub position: usize,
    /// Columns occupied when the grid is at least that wide.
    pub span: Span,
    /// Caller-defined payload, untouched by every solver.
    pub payload: P,
}

impl<P: Default> Element<P> {
    /// Create an element with a default payload.
    #[must_use]
    pub fn new(position: usize, span: Span) -> Self {
        Self {
            position,
            span,
            payload: P::default(),
        }
    }

    /// Synthesized single-column blank used to fill uncovered slots.
    #[must_use]
    pub fn blank(position: usize) -> Self {
        Self {
            position,
            span: Span::ONE,
            payload: P::default(),
        }
    }
}

impl<P> Element<P> {
    /// Attach a payload, replacing the current one (builder pattern).
    #[must_use]
    pub fn with_payload<Q>(self, payload: Q) -> Element<Q> {
        Element {
            position: self.position,
            span: self.span,
            payload,
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
