//! Configuration resolution.
//!
//! Per field, the first non-empty value wins:
//! 1. command-line flag or `LABEL_*` environment variable (clap merges both);
//! 2. the `--config` TOML file;
//! 3. the kernel default.

use crate::cli::ConfigArgs;
use label_kernel::{DEFAULT_DELIMITER, LabelConfig, SegmentPolicy};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One layer of configuration values; absent and empty are the same.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    pub tenant: Option<String>,
    pub environment: Option<String>,
    pub stage: Option<String>,
    pub workspace: Option<String>,
    pub namespace: Option<String>,
    pub delimiter: Option<String>,
    pub segment_policy: Option<String>,
}

impl From<&ConfigArgs> for ConfigLayer {
    fn from(args: &ConfigArgs) -> Self {
        Self {
            tenant: args.tenant.clone(),
            environment: args.environment.clone(),
            stage: args.stage.clone(),
            workspace: args.workspace.clone(),
            namespace: args.namespace.clone(),
            delimiter: args.default_delimiter.clone(),
            segment_policy: args.segment_policy.clone(),
        }
    }
}

impl ConfigLayer {
    pub fn from_toml_str(input: &str) -> Result<Self, String> {
        toml::from_str(input).map_err(|e| e.to_string())
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("failed to read config file {}: {e}", path.display()))?;
        Self::from_toml_str(&text)
            .map_err(|e| format!("failed to parse config file {}: {e}", path.display()))
    }
}

fn pick(field: &str, primary: Option<String>, fallback: Option<String>) -> Option<String> {
    let primary = primary.filter(|v| !v.is_empty());
    let fallback = fallback.filter(|v| !v.is_empty());
    match (primary, fallback) {
        (Some(value), _) => {
            tracing::debug!(field, source = "flag/env", "resolved");
            Some(value)
        }
        (None, Some(value)) => {
            tracing::debug!(field, source = "config file", "resolved");
            Some(value)
        }
        (None, None) => {
            tracing::debug!(field, "unset");
            None
        }
    }
}

/// Merge `primary` over `fallback` into a full record.
///
/// Missing mandatory fields stay empty; the completeness gate reports them.
pub fn layer(primary: ConfigLayer, fallback: ConfigLayer) -> Result<LabelConfig, String> {
    let segment_policy = match pick("segment_policy", primary.segment_policy, fallback.segment_policy)
    {
        Some(raw) => raw.parse::<SegmentPolicy>().map_err(|e| e.to_string())?,
        None => SegmentPolicy::default(),
    };

    Ok(LabelConfig {
        tenant: pick("tenant", primary.tenant, fallback.tenant).unwrap_or_default(),
        environment: pick("environment", primary.environment, fallback.environment)
            .unwrap_or_default(),
        stage: pick("stage", primary.stage, fallback.stage).unwrap_or_default(),
        workspace: pick("workspace", primary.workspace, fallback.workspace).unwrap_or_default(),
        namespace: pick("namespace", primary.namespace, fallback.namespace).unwrap_or_default(),
        delimiter: pick("delimiter", primary.delimiter, fallback.delimiter)
            .unwrap_or_else(|| DEFAULT_DELIMITER.to_string()),
        segment_policy,
    })
}

/// Build the record for this invocation from parsed arguments.
pub fn resolve(args: &ConfigArgs) -> Result<LabelConfig, String> {
    let file = match &args.config_file {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config file");
            ConfigLayer::load(path)?
        }
        None => ConfigLayer::default(),
    };
    layer(ConfigLayer::from(args), file)
}
