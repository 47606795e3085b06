//! Endpoint descriptor extraction.
//!
//! This module defines the descriptors the synthesis engine consumes (endpoint classes, their
//! methods and method parameters, each carrying tags from [`crate::tags`]) and the
//! [`EndpointSource`] trait that produces them. How descriptors are obtained is up to the
//! source:
//!
//! - [`attributes::AttributeExtractor`] reads attributes on `impl` blocks in Rust source files
//! - [`registry::EndpointRegistry`] holds descriptors registered explicitly in code
//!
//! # Example
//!
//! ```no_run
//! use iodocs_from_source::extractor::{EndpointSource, attributes::AttributeExtractor};
//! use iodocs_from_source::parser::AstParser;
//! use std::path::Path;
//!
//! let parsed = AstParser::parse_file(Path::new("src/api.rs")).unwrap();
//! let extractor = AttributeExtractor::new(vec![parsed]);
//! let classes = extractor.endpoint_classes();
//! println!("Found {} endpoint classes", classes.len());
//! ```

pub mod attributes;
pub mod registry;

use crate::tags::{DeclaredType, MethodTag, ParamTag};

/// Trait for anything that can describe endpoint classes.
pub trait EndpointSource {
    /// Returns every endpoint class, in a stable order.
    fn endpoint_classes(&self) -> Vec<EndpointClass>;
}

/// A handler type exposing documented operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointClass {
    /// Simple type name, used for synthesized method names
    pub name: String,
    /// Class-level path prefix
    pub path: Option<String>,
    /// Exposed methods in declaration order
    pub methods: Vec<EndpointMethod>,
}

/// A method exposed by an endpoint class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointMethod {
    pub name: String,
    pub tags: Vec<MethodTag>,
    pub params: Vec<EndpointParam>,
}

/// One declared method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointParam {
    /// Binding name in the handler signature (only used for diagnostics)
    pub binding: String,
    pub declared_type: DeclaredType,
    pub tags: Vec<ParamTag>,
}

impl EndpointClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            methods: Vec::new(),
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn method(mut self, method: EndpointMethod) -> Self {
        self.methods.push(method);
        self
    }
}

impl EndpointMethod {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: Vec::new(),
            params: Vec::new(),
        }
    }

    pub fn tag(mut self, tag: MethodTag) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn param(mut self, param: EndpointParam) -> Self {
        self.params.push(param);
        self
    }

    pub fn is_ignored(&self) -> bool {
        self.tags.iter().any(|tag| matches!(tag, MethodTag::Ignore))
    }
}

impl EndpointParam {
    pub fn new(binding: impl Into<String>, declared_type: DeclaredType) -> Self {
        Self {
            binding: binding.into(),
            declared_type,
            tags: Vec::new(),
        }
    }

    pub fn tag(mut self, tag: ParamTag) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn is_ignored(&self) -> bool {
        self.tags.iter().any(|tag| matches!(tag, ParamTag::Ignore))
    }
}
