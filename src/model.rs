//! Normalized documentation model shared by the scanner, the extension pass and the
//! synthesizer.

use crate::tags::HttpVerb;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel name (and output key) of the request-body parameter.
pub const REQUEST_BODY: &str = "requestBody";

/// Where a parameter is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    #[serde(rename = "query")]
    Query,
    /// Substituted into the path. The portal calls this `pathReplace`.
    #[serde(rename = "pathReplace", alias = "path")]
    Path,
    #[serde(rename = "header")]
    Header,
    #[serde(rename = "body")]
    Body,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Query => "query",
            Location::Path => "pathReplace",
            Location::Header => "header",
            Location::Body => "body",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic parameter type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Int,
    /// Rendered as a `"true"`/`"false"` string enumeration
    Boolean,
    Textarea,
}

impl ParamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Int => "int",
            ParamType::Boolean => "boolean",
            ParamType::Textarea => "textarea",
        }
    }

    /// Type as it appears in the document: booleans are string choices.
    pub fn document_type(self) -> ParamType {
        match self {
            ParamType::Boolean => ParamType::String,
            other => other,
        }
    }
}

/// A parameter default, kept as the scalar kind it was declared with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Integer(i64),
    String(String),
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        DefaultValue::String(value.to_string())
    }
}

impl From<i64> for DefaultValue {
    fn from(value: i64) -> Self {
        DefaultValue::Integer(value)
    }
}

/// One documented input of a method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub description: Option<String>,
    pub location: Location,
    pub param_type: ParamType,
    pub required: bool,
    pub default_value: Option<DefaultValue>,
    pub enumeration: Vec<String>,
    pub enum_descriptions: Vec<String>,
}

impl Parameter {
    /// Creates a parameter with no description, default or enumeration.
    pub fn new(name: impl Into<String>, location: Location, param_type: ParamType) -> Self {
        Self {
            name: name.into(),
            description: None,
            location,
            param_type,
            required: false,
            default_value: None,
            enumeration: Vec::new(),
            enum_descriptions: Vec::new(),
        }
    }

    /// Key under which the parameter is rendered in its method's `parameters` map.
    pub fn output_key(&self) -> String {
        match self.location {
            Location::Body => REQUEST_BODY.to_string(),
            Location::Path => format!(":{}", self.name),
            Location::Query | Location::Header => self.name.clone(),
        }
    }
}

/// One documented operation, as found by the endpoint scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub name: String,
    pub http_method: HttpVerb,
    pub path: String,
    pub description: Option<String>,
    pub parameters: Vec<Parameter>,
}

/// A caller-supplied reference parameter used to fill gaps in matching scanned parameters.
///
/// Extension parameters are usually loaded from a YAML or JSON file, see
/// [`config::load_extension_parameters`](crate::config::load_extension_parameters).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionParameter {
    pub name: String,
    pub location: Location,
    #[serde(rename = "type")]
    pub param_type: ParamType,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub default: Option<DefaultValue>,
    #[serde(default, rename = "enum")]
    pub enumeration: Vec<String>,
    #[serde(default)]
    pub enum_descriptions: Vec<String>,
}

impl ExtensionParameter {
    pub fn new(name: impl Into<String>, location: Location, param_type: ParamType) -> Self {
        Self {
            name: name.into(),
            location,
            param_type,
            description: None,
            required: false,
            default: None,
            enumeration: Vec::new(),
            enum_descriptions: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_default(mut self, default: impl Into<DefaultValue>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_enum<I, S>(mut self, values: I, descriptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enumeration = values.into_iter().map(Into::into).collect();
        self.enum_descriptions = descriptions.into_iter().map(Into::into).collect();
        self
    }

    /// Exact (name, type, location) match, comparing types as documented.
    pub fn matches(&self, parameter: &Parameter) -> bool {
        self.name == parameter.name
            && self.param_type.document_type() == parameter.param_type.document_type()
            && self.location == parameter.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_key_by_location() {
        assert_eq!(
            Parameter::new("pathParam", Location::Path, ParamType::String).output_key(),
            ":pathParam"
        );
        assert_eq!(
            Parameter::new("anything", Location::Body, ParamType::Textarea).output_key(),
            "requestBody"
        );
        assert_eq!(
            Parameter::new("Accept", Location::Header, ParamType::String).output_key(),
            "Accept"
        );
        assert_eq!(
            Parameter::new("q", Location::Query, ParamType::Int).output_key(),
            "q"
        );
    }

    #[test]
    fn test_matches_requires_name_type_and_location() {
        let parameter = Parameter::new("Accept", Location::Header, ParamType::String);

        assert!(ExtensionParameter::new("Accept", Location::Header, ParamType::String).matches(&parameter));
        assert!(!ExtensionParameter::new("accept", Location::Header, ParamType::String).matches(&parameter));
        assert!(!ExtensionParameter::new("Accept", Location::Query, ParamType::String).matches(&parameter));
        assert!(!ExtensionParameter::new("Accept", Location::Header, ParamType::Int).matches(&parameter));
    }

    #[test]
    fn test_boolean_matches_as_string() {
        let flag = Parameter::new("flag", Location::Query, ParamType::Boolean);

        assert!(ExtensionParameter::new("flag", Location::Query, ParamType::String).matches(&flag));
        assert!(ExtensionParameter::new("flag", Location::Query, ParamType::Boolean).matches(&flag));
        assert!(!ExtensionParameter::new("flag", Location::Query, ParamType::Int).matches(&flag));
    }

    #[test]
    fn test_extension_parameter_from_yaml() {
        let yaml = r#"
name: Accept
location: header
type: string
description: Accept mime-type
required: true
default: text/plain
enum: [text/plain]
enumDescriptions: [Plain text]
"#;
        let extension: ExtensionParameter = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(
            extension,
            ExtensionParameter::new("Accept", Location::Header, ParamType::String)
                .with_description("Accept mime-type")
                .with_required(true)
                .with_default("text/plain")
                .with_enum(vec!["text/plain"], vec!["Plain text"])
        );
    }

    #[test]
    fn test_extension_parameter_defaults_and_aliases() {
        let json = r#"{"name": "id", "location": "path", "type": "int", "default": 7}"#;
        let extension: ExtensionParameter = serde_json::from_str(json).unwrap();

        assert_eq!(extension.location, Location::Path);
        assert_eq!(extension.param_type, ParamType::Int);
        assert_eq!(extension.default, Some(DefaultValue::Integer(7)));
        assert!(!extension.required);
        assert!(extension.enumeration.is_empty());
    }
}
