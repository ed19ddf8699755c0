//! Pipeline resource model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Kind of a pipeline resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Git,
    Image,
    Cluster,
    Storage,
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResourceType::Git => "git",
            ResourceType::Image => "image",
            ResourceType::Cluster => "cluster",
            ResourceType::Storage => "storage",
        };
        f.write_str(s)
    }
}

/// A concrete resource a step can consume or produce
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineResource {
    /// Resource name, the target of a binding's `resource_ref`
    pub name: String,

    /// Resource kind
    #[serde(rename = "type")]
    pub resource_type: ResourceType,

    /// Type-specific parameters (url, revision, ...)
    #[serde(default)]
    pub params: BTreeMap<String, String>,
}

impl PipelineResource {
    pub fn new(name: impl Into<String>, resource_type: ResourceType) -> Self {
        Self {
            name: name.into(),
            resource_type,
            params: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Get a parameter value
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}
