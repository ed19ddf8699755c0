//! Step template and step run spec models

use crate::core::{pipeline::default_namespace, resource::ResourceType};
use serde::{Deserialize, Serialize};

/// A resource slot declared by a step template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDeclaration {
    /// Slot name
    pub name: String,

    /// Kind of resource the slot expects
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
}

/// Reusable workload template referenced by pipeline steps and step runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepTemplate {
    /// Template name
    pub name: String,

    /// Namespace the template lives in
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Declared input slots
    #[serde(default)]
    pub inputs: Vec<ResourceDeclaration>,

    /// Declared output slots
    #[serde(default)]
    pub outputs: Vec<ResourceDeclaration>,
}

impl StepTemplate {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            description: None,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }
}

/// A named slot mapped to the resource that fills it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceBinding {
    /// Binding (slot) name
    pub name: String,

    /// Name of the concrete resource
    pub resource_ref: String,
}

impl ResourceBinding {
    pub fn new(name: impl Into<String>, resource_ref: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resource_ref: resource_ref.into(),
        }
    }
}

/// What a step run asks for: a template and its resource bindings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRunSpec {
    /// Namespace to look the template up in
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Name of the template to run
    pub template_ref: String,

    /// Input bindings, in declaration order
    #[serde(default)]
    pub inputs: Vec<ResourceBinding>,

    /// Output bindings, in declaration order
    #[serde(default)]
    pub outputs: Vec<ResourceBinding>,
}

impl StepRunSpec {
    pub fn new(namespace: impl Into<String>, template_ref: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            template_ref: template_ref.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    pub fn with_input(mut self, name: impl Into<String>, resource_ref: impl Into<String>) -> Self {
        self.inputs.push(ResourceBinding::new(name, resource_ref));
        self
    }

    pub fn with_output(mut self, name: impl Into<String>, resource_ref: impl Into<String>) -> Self {
        self.outputs.push(ResourceBinding::new(name, resource_ref));
        self
    }
}
