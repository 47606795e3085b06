//! The I/O Docs output tree.
//!
//! Field declaration order is the emitted order, and every map is an [`IndexMap`], so the
//! serialized document is stable across runs. Absent optional fields are omitted rather than
//! written as `null`.

use crate::model::DefaultValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Name of the single resource group all methods are listed under.
pub const RESOURCE_NAME: &str = "Product Methods";

/// Top-level I/O Docs document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub name: String,
    pub title: String,
    pub description: String,
    pub version: String,
    pub base_path: String,
    /// Always `"rest"`
    pub protocol: String,
    pub auth: Auth,
    pub resources: IndexMap<String, Resource>,
}

/// Authentication block: an API key passed as a query parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auth {
    pub key: AuthKey,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthKey {
    pub location: String,
    pub param: String,
}

impl Default for Auth {
    fn default() -> Self {
        Self {
            key: AuthKey {
                location: "query".to_string(),
                param: "api_key".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub methods: IndexMap<String, MethodEntry>,
}

/// One rendered method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodEntry {
    pub http_method: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Omitted entirely for methods without parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<IndexMap<String, ParameterEntry>>,
}

/// One rendered parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterEntry {
    #[serde(rename = "type")]
    pub param_type: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,
    /// Only ever `Some(true)`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enumeration: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_descriptions: Option<Vec<String>>,
}

impl Document {
    /// Methods of the single resource group, in insertion order.
    pub fn methods(&self) -> Option<&IndexMap<String, MethodEntry>> {
        self.resources.get(RESOURCE_NAME).map(|resource| &resource.methods)
    }
}
