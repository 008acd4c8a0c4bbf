//! Per-call resource descriptors.

use serde::{Deserialize, Serialize};

/// What is being named in a single generation call.
///
/// Optional fields holding an empty string behave exactly like absent ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    /// Short type code, e.g. `sg`, `role`, `emr`.
    pub resource_type: String,

    /// Disambiguating segment placed right after the stage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<String>,

    /// Trailing disambiguator for multiple instances of one type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_key: Option<String>,

    /// Identifier join for this call only; tags are unaffected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
}

impl ResourceDescriptor {
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            ..Self::default()
        }
    }

    pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }

    pub fn with_instance_key(mut self, instance_key: impl Into<String>) -> Self {
        self.instance_key = Some(instance_key.into());
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    pub fn qualifier(&self) -> Option<&str> {
        non_empty(self.qualifier.as_deref())
    }

    pub fn instance_key(&self) -> Option<&str> {
        non_empty(self.instance_key.as_deref())
    }

    pub fn delimiter(&self) -> Option<&str> {
        non_empty(self.delimiter.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_optionals_read_as_absent() {
        let descriptor = ResourceDescriptor::new("sg")
            .with_qualifier("")
            .with_instance_key("")
            .with_delimiter("");
        assert_eq!(descriptor.qualifier(), None);
        assert_eq!(descriptor.instance_key(), None);
        assert_eq!(descriptor.delimiter(), None);
    }

    #[test]
    fn deserializes_without_optionals() {
        let descriptor: ResourceDescriptor =
            serde_json::from_str(r#"{"resource_type":"sg","qualifier":"emr"}"#).unwrap();
        assert_eq!(descriptor, ResourceDescriptor::new("sg").with_qualifier("emr"));
    }
}
