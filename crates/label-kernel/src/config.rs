//! Workspace-scoped naming facts.
//!
//! A [`LabelConfig`] is built once per session by the calling layer and then
//! only ever borrowed by generation calls. The core never reads environment
//! variables or files; resolving where each value comes from is the caller's
//! job.

use crate::error::LabelError;
use crate::segment::SegmentPolicy;
use serde::{Deserialize, Serialize};

/// Join character used when neither the call nor the record sets one.
pub const DEFAULT_DELIMITER: &str = "-";

/// Names of the mandatory fields, in reporting order.
pub const REQUIRED_FIELDS: [&str; 4] = ["tenant", "environment", "stage", "workspace"];

/// The naming facts shared by every resource in a workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Organizational unit, e.g. `dpl`.
    pub tenant: String,

    /// Deployment environment, e.g. `ane2`.
    pub environment: String,

    /// Lifecycle stage, e.g. `dev` or `prd`.
    pub stage: String,

    /// Workspace name; the source of domain segments.
    pub workspace: String,

    /// Optional; only surfaces as the `Namespace` tag.
    pub namespace: String,

    /// Default identifier join. Empty means [`DEFAULT_DELIMITER`].
    pub delimiter: String,

    /// How `workspace` is decomposed.
    pub segment_policy: SegmentPolicy,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            tenant: String::new(),
            environment: String::new(),
            stage: String::new(),
            workspace: String::new(),
            namespace: String::new(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            segment_policy: SegmentPolicy::default(),
        }
    }
}

impl LabelConfig {
    pub fn new(
        tenant: impl Into<String>,
        environment: impl Into<String>,
        stage: impl Into<String>,
        workspace: impl Into<String>,
    ) -> Self {
        Self {
            tenant: tenant.into(),
            environment: environment.into(),
            stage: stage.into(),
            workspace: workspace.into(),
            ..Self::default()
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_segment_policy(mut self, policy: SegmentPolicy) -> Self {
        self.segment_policy = policy;
        self
    }

    /// Resolve the join for an identifier.
    ///
    /// A non-empty per-call override wins, then the record's delimiter, then
    /// [`DEFAULT_DELIMITER`].
    pub fn effective_delimiter<'a>(&'a self, override_delimiter: Option<&'a str>) -> &'a str {
        match override_delimiter {
            Some(d) if !d.is_empty() => d,
            _ if !self.delimiter.is_empty() => &self.delimiter,
            _ => DEFAULT_DELIMITER,
        }
    }

    /// Domain segments of this record's workspace.
    pub fn domain(&self) -> Vec<&str> {
        self.segment_policy.segment(&self.workspace)
    }

    /// Mandatory fields that are currently empty, in [`REQUIRED_FIELDS`] order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let values = [
            &self.tenant,
            &self.environment,
            &self.stage,
            &self.workspace,
        ];
        REQUIRED_FIELDS
            .iter()
            .zip(values)
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| *name)
            .collect()
    }

    /// Precondition gate for generation.
    ///
    /// Reports every missing field at once rather than stopping at the first.
    pub fn ensure_complete(&self) -> Result<(), LabelError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(LabelError::IncompleteConfig { missing })
        }
    }
}
