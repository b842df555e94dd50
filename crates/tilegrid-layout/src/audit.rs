#![forbid(unsafe_code)]

//! Structural diagnostics over placed-element collections.
//!
//! Malformed collections are not a designed error path of the solvers
//! (the injector catches duplicate positions at insert time), but hosts
//! ingesting element sets from elsewhere want a way to check them before
//! handing them over. [`audit_elements`] reports findings without failing;
//! callers decide what to do with warnings.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tilegrid_core::{Element, GridOptions};

/// Severity of one audit finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditSeverity {
    Error,
    Warning,
}

/// Stable code for audit findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditCode {
    /// Two or more elements share a position.
    DuplicatePosition,
    /// An element is wider than the grid's largest simulated width.
    OversizedSpan,
    /// An element sits at or beyond the configured position count.
    OutOfRangePosition,
}

/// One audit finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditIssue {
    pub code: AuditCode,
    pub severity: AuditSeverity,
    /// Position of the element the finding is about.
    pub position: usize,
    pub message: String,
}

/// Structured audit report over a placed-element collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    pub issues: Vec<AuditIssue>,
}

impl AuditReport {
    /// True if any error-level finding exists.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.severity == AuditSeverity::Error)
    }

    /// True when the collection produced no findings at all.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Audit a placed-element collection against a grid configuration.
///
/// Duplicate positions are errors: the injector invariant is broken and
/// solver results over such a collection are unspecified. Oversized spans
/// and out-of-range positions are warnings; both are legal (spans collapse
/// responsively, layouts extend past `max_positions`) but often indicate a
/// host-side mistake.
#[must_use]
pub fn audit_elements<P>(elements: &[Element<P>], opts: &GridOptions) -> AuditReport {
    let mut issues = Vec::new();
    let mut seen = FxHashSet::default();

    for element in elements {
        if !seen.insert(element.position) {
            issues.push(AuditIssue {
                code: AuditCode::DuplicatePosition,
                severity: AuditSeverity::Error,
                position: element.position,
                message: format!("more than one element at position {}", element.position),
            });
        }
        if element.span.get() > opts.max_columns() {
            issues.push(AuditIssue {
                code: AuditCode::OversizedSpan,
                severity: AuditSeverity::Warning,
                position: element.position,
                message: format!(
                    "span {} exceeds the {}-column grid and collapses at every width",
                    element.span.get(),
                    opts.max_columns()
                ),
            });
        }
        if element.position >= opts.max_positions() {
            issues.push(AuditIssue {
                code: AuditCode::OutOfRangePosition,
                severity: AuditSeverity::Warning,
                position: element.position,
                message: format!(
                    "position {} lies beyond the configured {} slots; the layout will extend",
                    element.position,
                    opts.max_positions()
                ),
            });
        }
    }

    AuditReport { issues }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
