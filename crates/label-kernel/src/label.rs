//! Identifier and tag assembly.
//!
//! An identifier is the fixed head `tenant, environment, resource_type,
//! stage` followed by the attribute segments `qualifier, domain...,
//! instance_key`, joined with the effective delimiter. The `Attributes` tag
//! is the same attribute segments joined with `-`, whatever delimiter the
//! identifier used.

use crate::config::LabelConfig;
use crate::descriptor::ResourceDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Generated tags, keyed by fixed tag names.
pub type Tags = BTreeMap<String, String>;

pub const TAG_NAME: &str = "Name";
pub const TAG_TENANT: &str = "Tenant";
pub const TAG_ENVIRONMENT: &str = "Environment";
pub const TAG_STAGE: &str = "Stage";
pub const TAG_NAMESPACE: &str = "Namespace";
pub const TAG_ATTRIBUTES: &str = "Attributes";

/// Join used for the `Attributes` tag.
pub const ATTRIBUTES_SEPARATOR: &str = "-";

/// Identifier plus tags for one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: String,
    pub tags: Tags,
}

impl Label {
    /// Tags minus `Name`, for tag blocks where the name is set separately.
    pub fn tags_without_name(&self) -> Tags {
        self.tags
            .iter()
            .filter(|(key, _)| key.as_str() != TAG_NAME)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

/// Optional segments in order: qualifier, domain, instance key.
///
/// Absent optionals contribute nothing. Domain pieces are kept verbatim,
/// including empty ones produced by doubled separators in the workspace.
fn attribute_segments<'a>(
    config: &'a LabelConfig,
    descriptor: &'a ResourceDescriptor,
) -> Vec<&'a str> {
    let mut segments = Vec::new();
    segments.extend(descriptor.qualifier());
    segments.extend(config.domain());
    segments.extend(descriptor.instance_key());
    segments
}

/// Build the identifier for `descriptor` under `config`.
///
/// Never fails. Segments are joined as-is: a segment that already contains
/// the delimiter is not escaped or split.
pub fn generate_id(config: &LabelConfig, descriptor: &ResourceDescriptor) -> String {
    let delimiter = config.effective_delimiter(descriptor.delimiter());

    let mut segments = vec![
        config.tenant.as_str(),
        config.environment.as_str(),
        descriptor.resource_type.as_str(),
        config.stage.as_str(),
    ];
    segments.extend(attribute_segments(config, descriptor));

    segments.join(delimiter)
}

/// Build the tag map for `descriptor` under `config`.
///
/// `Name` always equals [`generate_id`] for the same arguments. `Namespace`
/// appears only for a non-empty namespace, `Attributes` only when the joined
/// attribute string is non-empty.
pub fn generate_tags(config: &LabelConfig, descriptor: &ResourceDescriptor) -> Tags {
    let name = generate_id(config, descriptor);
    let attributes = attribute_segments(config, descriptor).join(ATTRIBUTES_SEPARATOR);

    let mut tags = Tags::new();
    tags.insert(TAG_NAME.to_string(), name);
    tags.insert(TAG_TENANT.to_string(), config.tenant.clone());
    tags.insert(TAG_ENVIRONMENT.to_string(), config.environment.clone());
    tags.insert(TAG_STAGE.to_string(), config.stage.clone());

    if !config.namespace.is_empty() {
        tags.insert(TAG_NAMESPACE.to_string(), config.namespace.clone());
    }
    if !attributes.is_empty() {
        tags.insert(TAG_ATTRIBUTES.to_string(), attributes);
    }

    tags
}

/// Identifier and tags in one call.
pub fn label(config: &LabelConfig, descriptor: &ResourceDescriptor) -> Label {
    Label {
        id: generate_id(config, descriptor),
        tags: generate_tags(config, descriptor),
    }
}
