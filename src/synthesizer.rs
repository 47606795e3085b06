//! Document synthesis: endpoint classes and extension parameters in, I/O Docs document out.
//!
//! Synthesis is a pure function of its inputs. It never fails: unresolvable parameters are
//! dropped during scanning, enumeration size mismatches become inline `warning` fields, and
//! duplicate method names overwrite earlier entries in place.

use crate::config::ApiInfo;
use crate::document::{Auth, Document, MethodEntry, ParameterEntry, Resource, RESOURCE_NAME};
use crate::endpoint_scanner::scan_classes;
use crate::extension::extend;
use crate::extractor::EndpointClass;
use crate::model::{ExtensionParameter, Location, MethodDescriptor, ParamType, Parameter};
use crate::serializer::serialize_json;
use anyhow::Result;
use indexmap::IndexMap;
use log::{debug, info, warn};

const PROTOCOL: &str = "rest";

/// Builds the document for `classes`, scanned in the given order.
pub fn synthesize(
    info: &ApiInfo,
    classes: &[EndpointClass],
    extensions: &[ExtensionParameter],
) -> Document {
    let mut methods: IndexMap<String, MethodEntry> = IndexMap::new();

    for descriptor in scan_classes(classes) {
        let entry = render_method(&descriptor, extensions);
        debug!("Documenting {} {} as {}", descriptor.http_method, descriptor.path, descriptor.name);
        // Same name twice: the later method replaces the earlier one at its original position
        if methods.insert(descriptor.name.clone(), entry).is_some() {
            warn!(
                "Duplicate method name {}, keeping the last definition",
                descriptor.name
            );
        }
    }
    info!("Documented {} methods", methods.len());

    let mut resources = IndexMap::new();
    resources.insert(RESOURCE_NAME.to_string(), Resource { methods });

    Document {
        name: info.name.clone(),
        title: info.title.clone(),
        description: info.description.clone(),
        version: info.version.clone(),
        base_path: info.base_path.clone(),
        protocol: PROTOCOL.to_string(),
        auth: Auth::default(),
        resources,
    }
}

/// Synthesizes and pretty-prints the document as JSON.
pub fn generate(
    name: &str,
    title: &str,
    description: &str,
    version: &str,
    base_path: &str,
    classes: &[EndpointClass],
    extensions: &[ExtensionParameter],
) -> Result<String> {
    let info = ApiInfo::new(name, title, description, version, base_path);
    serialize_json(&synthesize(&info, classes, extensions))
}

/// Renders one method, extending its parameters first.
pub fn render_method(descriptor: &MethodDescriptor, extensions: &[ExtensionParameter]) -> MethodEntry {
    let parameters: IndexMap<String, ParameterEntry> = descriptor
        .parameters
        .iter()
        .map(|parameter| {
            let extended = extend(parameter.clone(), extensions);
            (extended.output_key(), render_parameter(&extended))
        })
        .collect();

    MethodEntry {
        http_method: descriptor.http_method.to_string(),
        path: descriptor.path.clone(),
        description: descriptor.description.clone(),
        parameters: if parameters.is_empty() {
            None
        } else {
            Some(parameters)
        },
    }
}

/// Renders one (already extended) parameter.
pub fn render_parameter(parameter: &Parameter) -> ParameterEntry {
    // Booleans always render as the canonical two-value choice
    let (enumeration, enum_descriptions) = if parameter.param_type == ParamType::Boolean {
        (
            vec!["true".to_string(), "false".to_string()],
            vec!["True".to_string(), "False".to_string()],
        )
    } else {
        (parameter.enumeration.clone(), parameter.enum_descriptions.clone())
    };

    let param_type = match (parameter.location, parameter.param_type) {
        (Location::Body, _) => ParamType::Textarea,
        (_, other) => other.document_type(),
    };

    let warning = if !enum_descriptions.is_empty() && enumeration.len() != enum_descriptions.len() {
        let message = format!(
            "Enumeration size ({}) is not equal to enumeration description size ({})",
            enumeration.len(),
            enum_descriptions.len()
        );
        warn!("Parameter {}: {}", parameter.name, message);
        Some(message)
    } else {
        None
    };

    let has_enumeration = !enumeration.is_empty();
    let has_descriptions = has_enumeration && !enum_descriptions.is_empty();

    ParameterEntry {
        param_type: param_type.as_str().to_string(),
        location: parameter.location.as_str().to_string(),
        description: parameter.description.clone(),
        default: parameter.default_value.clone(),
        required: parameter.required.then_some(true),
        warning,
        enumeration: has_enumeration.then_some(enumeration),
        enum_descriptions: has_descriptions.then_some(enum_descriptions),
    }
}
