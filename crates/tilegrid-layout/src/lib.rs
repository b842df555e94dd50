#![forbid(unsafe_code)]

//! Placement solvers for the Tilegrid responsive content grid.
//!
//! A grid layout is a sparse set of [`Element`]s, each holding a zero-based
//! position and a column span. The solvers answer three questions about
//! such a set:
//!
//! - **Is a placement valid?** [`is_valid`] injects a candidate
//!   ([`inject_element`]), projects the merged set into a dense span
//!   sequence per simulated width ([`project_spans`]) and checks row
//!   balance at each ([`is_balanced`]).
//! - **Where can a new element go?** [`generate_valid_positions`] builds
//!   the per-span map of legal insert positions.
//! - **What does the full grid look like?** [`layout_elements`]
//!   materializes the dense ordered sequence, blanks included.
//!
//! Everything is a pure function over owned data; concurrent callers on
//! disjoint inputs need no synchronization.
//!
//! ```
//! use tilegrid_layout::{generate_valid_positions, layout_elements};
//! use tilegrid_layout::{Element, GridOptions, Span};
//!
//! let placed = vec![Element::<()>::new(0, Span::THREE)];
//!
//! // A full-width element occupies the first row; the next full-width
//! // slot is the start of the second row.
//! let map = generate_valid_positions(&placed, 6);
//! assert_eq!(map.positions(Span::THREE), &[1]);
//!
//! // Materialization fills the remaining slots with blanks.
//! let dense = layout_elements(&placed, &GridOptions::three_column(6));
//! assert_eq!(dense.len(), 6);
//! assert_eq!(dense[3].span, Span::ONE);
//! ```

pub mod audit;
pub mod balance;
pub mod materialize;
pub mod placement;
pub mod project;
pub mod targets;

pub use audit::{AuditCode, AuditIssue, AuditReport, AuditSeverity, audit_elements};
pub use balance::is_balanced;
pub use materialize::layout_elements;
pub use placement::{inject_element, is_valid};
pub use project::project_spans;
pub use targets::{ValidPositionMap, generate_valid_positions};
pub use tilegrid_core::{ColumnBreakpoints, Element, GridError, GridOptions, Span};
