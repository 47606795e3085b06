//! Endpoint scanning: endpoint classes in, method descriptors out.

use crate::extractor::{EndpointClass, EndpointMethod};
use crate::model::{MethodDescriptor, Parameter};
use crate::normalizer::normalize;
use crate::tags::MethodTag;
use log::debug;

/// Delimiter between the description fragments of one method.
const DESCRIPTION_DELIMITER: &str = ", ";

/// Scans classes in order and returns one descriptor per documented method.
pub fn scan_classes(classes: &[EndpointClass]) -> Vec<MethodDescriptor> {
    classes.iter().flat_map(scan_class).collect()
}

/// Scans one class.
///
/// Ignored methods are skipped outright; methods with no verb tag are dropped since no HTTP
/// action can be determined for them.
pub fn scan_class(class: &EndpointClass) -> Vec<MethodDescriptor> {
    let prefix = class.path.as_deref().unwrap_or("");

    class
        .methods
        .iter()
        .filter_map(|method| {
            if method.is_ignored() {
                debug!("Ignoring {}::{}", class.name, method.name);
                return None;
            }
            let descriptor = scan_method(&class.name, prefix, method);
            if descriptor.is_none() {
                debug!("{}::{} has no HTTP verb, not documented", class.name, method.name);
            }
            descriptor
        })
        .collect()
}

fn scan_method(class_name: &str, prefix: &str, method: &EndpointMethod) -> Option<MethodDescriptor> {
    let mut name = None;
    let mut verb = None;
    let mut path_fragment = None;
    let mut descriptions = Vec::new();

    for tag in &method.tags {
        match tag {
            MethodTag::Verb(v) => {
                if verb.is_none() {
                    verb = Some(*v);
                }
            }
            MethodTag::Path(fragment) => path_fragment = Some(fragment.as_str()),
            MethodTag::Description(text) => descriptions.push(text.as_str()),
            MethodTag::Name(explicit) => name = Some(explicit.clone()),
            MethodTag::Ignore => {}
        }
    }

    let http_method = verb?;
    let description = descriptions.join(DESCRIPTION_DELIMITER);

    Some(MethodDescriptor {
        name: name.unwrap_or_else(|| format!("{}_{}", class_name, method.name)),
        http_method,
        path: format!("{}{}", prefix, path_fragment.unwrap_or("")),
        description: if description.trim().is_empty() {
            None
        } else {
            Some(description)
        },
        parameters: scan_parameters(method),
    })
}

fn scan_parameters(method: &EndpointMethod) -> Vec<Parameter> {
    method
        .params
        .iter()
        .filter(|param| {
            if param.is_ignored() {
                debug!("Ignoring parameter {} of {}", param.binding, method.name);
            }
            !param.is_ignored()
        })
        .filter_map(|param| normalize(&param.declared_type, &param.tags))
        .collect()
}
