use crate::extractor::{EndpointClass, EndpointSource};
use log::debug;

/// Endpoint classes registered explicitly in code.
///
/// Useful when handlers are not available as source, or in tests:
///
/// ```
/// use iodocs_from_source::extractor::{EndpointClass, EndpointMethod, EndpointSource};
/// use iodocs_from_source::extractor::registry::EndpointRegistry;
/// use iodocs_from_source::tags::{HttpVerb, MethodTag};
///
/// let registry = EndpointRegistry::new().register(
///     EndpointClass::new("PingApi")
///         .path("/ping")
///         .method(EndpointMethod::new("ping").tag(MethodTag::Verb(HttpVerb::Get))),
/// );
/// assert_eq!(registry.endpoint_classes().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EndpointRegistry {
    classes: Vec<EndpointClass>,
}

impl EndpointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, class: EndpointClass) -> Self {
        debug!("Registering endpoint class {}", class.name);
        self.classes.push(class);
        self
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl EndpointSource for EndpointRegistry {
    fn endpoint_classes(&self) -> Vec<EndpointClass> {
        self.classes.clone()
    }
}

impl FromIterator<EndpointClass> for EndpointRegistry {
    fn from_iter<T: IntoIterator<Item = EndpointClass>>(iter: T) -> Self {
        Self {
            classes: iter.into_iter().collect(),
        }
    }
}
