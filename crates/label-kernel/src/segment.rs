//! Workspace segmentation.
//!
//! A workspace name such as `data-sales-api` carries the "domain" of every
//! resource deployed from it. The segmenter splits the name on
//! [`WORKSPACE_SEPARATOR`] and decides which pieces become domain segments.
//!
//! Two policies are supported:
//!
//! - **DropFirst**: the first piece is a category prefix (`data`, `dms`,
//!   `eks`, ...) and is discarded. A workspace with no separator has no
//!   domain at all.
//! - **FullSplit**: every piece is a domain segment.

use crate::error::LabelError;

/// Separator between workspace pieces.
pub const WORKSPACE_SEPARATOR: char = '-';

/// How a workspace name is decomposed into domain segments.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum SegmentPolicy {
    /// Discard the leading category piece.
    ///
    /// `data-sales-api` yields `["sales", "api"]`; `vpc` yields `[]`.
    #[default]
    DropFirst,

    /// Keep every piece.
    ///
    /// `sales-api` yields `["sales", "api"]`; `vpc` yields `["vpc"]`.
    FullSplit,
}

impl SegmentPolicy {
    /// Domain segments of `workspace` under this policy.
    pub fn segment(self, workspace: &str) -> Vec<&str> {
        segment(workspace, self)
    }
}

impl std::fmt::Display for SegmentPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DropFirst => write!(f, "drop-first"),
            Self::FullSplit => write!(f, "full-split"),
        }
    }
}

impl std::str::FromStr for SegmentPolicy {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "drop-first" | "drop_first" => Ok(Self::DropFirst),
            "full-split" | "full_split" => Ok(Self::FullSplit),
            _ => Err(LabelError::InvalidSegmentPolicy(s.to_string())),
        }
    }
}

/// Split `workspace` into ordered domain segments.
///
/// Total over every input, including the empty string. Pieces are returned
/// verbatim: nothing is trimmed, lowercased or re-split.
pub fn segment(workspace: &str, policy: SegmentPolicy) -> Vec<&str> {
    if workspace.is_empty() {
        return Vec::new();
    }

    let pieces = workspace.split(WORKSPACE_SEPARATOR);
    match policy {
        SegmentPolicy::FullSplit => pieces.collect(),
        SegmentPolicy::DropFirst => pieces.skip(1).collect(),
    }
}
