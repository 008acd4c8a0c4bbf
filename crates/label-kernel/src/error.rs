//! Error types for label operations.
//!
//! Generation itself is total. Errors only arise at the edges: the
//! completeness gate in front of generation and parsing of textual options.

/// Errors raised by the completeness gate and option parsers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LabelError {
    /// One or more mandatory configuration values are empty.
    #[error("missing required configuration values: {}", missing.join(", "))]
    IncompleteConfig { missing: Vec<&'static str> },

    /// A segment policy name did not match any known policy.
    #[error("unknown segment policy: {0} (expected drop-first or full-split)")]
    InvalidSegmentPolicy(String),
}
