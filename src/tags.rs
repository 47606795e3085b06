//! The closed vocabulary of metadata tags the engine understands.
//!
//! Tags are produced by an [`EndpointSource`](crate::extractor::EndpointSource) (from source
//! attributes or explicit registration) and consumed by the endpoint scanner and the parameter
//! normalizer. Nothing downstream of this module knows how a tag was written.

use std::fmt;

/// HTTP verbs a documented method can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl HttpVerb {
    /// Parses a verb from an attribute name such as `get` or `POST`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "get" => Some(HttpVerb::Get),
            "post" => Some(HttpVerb::Post),
            "put" => Some(HttpVerb::Put),
            "delete" => Some(HttpVerb::Delete),
            "patch" => Some(HttpVerb::Patch),
            "head" => Some(HttpVerb::Head),
            "options" => Some(HttpVerb::Options),
            _ => None,
        }
    }

    /// Upper-case wire name, as emitted in `httpMethod`.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Post => "POST",
            HttpVerb::Put => "PUT",
            HttpVerb::Delete => "DELETE",
            HttpVerb::Patch => "PATCH",
            HttpVerb::Head => "HEAD",
            HttpVerb::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tags attached to a method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodTag {
    /// Binds the method to an HTTP verb
    Verb(HttpVerb),
    /// Method-level path fragment, appended to the class prefix
    Path(String),
    /// One description fragment; a method may carry several
    Description(String),
    /// Explicit document name, replacing `<Class>_<method>`
    Name(String),
    /// Removes the method from the document
    Ignore,
}

/// Tags attached to a single method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamTag {
    Query(String),
    Path(String),
    Header(String),
    Description(String),
    Required,
    Ignore,
    DefaultBoolean(bool),
    DefaultInteger(i64),
    DefaultString(String),
    Enum(Vec<String>),
    EnumDescriptions(Vec<String>),
    /// Accepted and carried, but not consulted by synthesis.
    DoNotExtend,
}

/// What a parameter was declared as, reduced to the distinctions the normalizer cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredType {
    Integer,
    Boolean,
    Text,
    Bytes,
    Stream,
    /// Generic structured payloads: JSON values, forms, multi-valued maps
    Structured,
    /// Any other type, by its last path segment
    Other(String),
}

impl DeclaredType {
    /// Whether an untagged parameter of this type can carry the request body.
    pub fn is_body_capable(&self) -> bool {
        matches!(
            self,
            DeclaredType::Text | DeclaredType::Bytes | DeclaredType::Stream | DeclaredType::Structured
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_from_name_is_case_insensitive() {
        assert_eq!(HttpVerb::from_name("get"), Some(HttpVerb::Get));
        assert_eq!(HttpVerb::from_name("DELETE"), Some(HttpVerb::Delete));
        assert_eq!(HttpVerb::from_name("Options"), Some(HttpVerb::Options));
        assert_eq!(HttpVerb::from_name("trace"), None);
    }

    #[test]
    fn test_verb_wire_name() {
        assert_eq!(HttpVerb::Put.to_string(), "PUT");
        assert_eq!(HttpVerb::Head.as_str(), "HEAD");
    }

    #[test]
    fn test_body_capable_types() {
        assert!(DeclaredType::Text.is_body_capable());
        assert!(DeclaredType::Bytes.is_body_capable());
        assert!(DeclaredType::Stream.is_body_capable());
        assert!(DeclaredType::Structured.is_body_capable());
        assert!(!DeclaredType::Integer.is_body_capable());
        assert!(!DeclaredType::Boolean.is_body_capable());
        assert!(!DeclaredType::Other("Request".to_string()).is_body_capable());
    }
}
