//! I/O Docs Generator - Mashery I/O Docs from annotated Rust API handlers.
//!
//! Handler types are described as endpoint classes: methods tagged with an HTTP verb, a path,
//! descriptions, and parameters tagged with where they are read from. The engine turns those
//! descriptions into an I/O Docs JSON document listing every documented method and its
//! parameters.
//!
//! # Architecture
//!
//! 1. [`scanner`] - Recursively scans project directories for Rust files
//! 2. [`parser`] - Parses Rust source files into syntax trees
//! 3. [`extractor`] - Produces endpoint class descriptors, from attributes or explicit registration
//! 4. [`endpoint_scanner`] - Turns endpoint classes into method descriptors
//! 5. [`normalizer`] - Turns one tagged parameter into a documented [`model::Parameter`]
//! 6. [`extension`] - Fills parameter gaps from caller-supplied extension parameters
//! 7. [`synthesizer`] - Assembles and renders the [`document::Document`]
//! 8. [`serializer`] - Serializes the document to JSON or YAML
//!
//! # Example Usage
//!
//! ```
//! use iodocs_from_source::extractor::{EndpointClass, EndpointMethod};
//! use iodocs_from_source::generate;
//! use iodocs_from_source::tags::{HttpVerb, MethodTag};
//!
//! let ping = EndpointClass::new("PingApi").path("/ping").method(
//!     EndpointMethod::new("ping")
//!         .tag(MethodTag::Verb(HttpVerb::Get))
//!         .tag(MethodTag::Description("Check that the API is active".to_string())),
//! );
//!
//! let json = generate("name", "title", "description", "1.0", "http://api.com/", &[ping], &[]).unwrap();
//! assert!(json.contains("\"PingApi_ping\""));
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module which provides a complete CLI application.

pub mod cli;
pub mod config;
pub mod document;
pub mod endpoint_scanner;
pub mod error;
pub mod extension;
pub mod extractor;
pub mod model;
pub mod normalizer;
pub mod parser;
pub mod scanner;
pub mod serializer;
pub mod synthesizer;
pub mod tags;

pub use synthesizer::{generate, synthesize};
