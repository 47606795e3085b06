//! Parameter normalization: one declared parameter plus its tags in, one [`Parameter`] out.

use crate::model::{DefaultValue, Location, ParamType, Parameter, REQUEST_BODY};
use crate::tags::{DeclaredType, ParamTag};
use log::{debug, warn};

/// Parameter under construction. Name and location stay unset until a location tag is seen.
struct Draft {
    name: Option<String>,
    location: Option<Location>,
    param_type: ParamType,
    description: Option<String>,
    required: bool,
    default_value: Option<DefaultValue>,
    enumeration: Vec<String>,
    enum_descriptions: Vec<String>,
}

impl Draft {
    fn seeded(declared_type: &DeclaredType) -> Self {
        let param_type = semantic_type(declared_type);
        let mut draft = Self {
            name: None,
            location: None,
            param_type,
            description: None,
            required: false,
            default_value: None,
            enumeration: Vec::new(),
            enum_descriptions: Vec::new(),
        };

        // Booleans are documented as a "true"/"false" choice; enum tags may replace it
        if param_type == ParamType::Boolean {
            draft.enumeration = vec!["true".to_string(), "false".to_string()];
            draft.enum_descriptions = vec!["true".to_string(), "false".to_string()];
        }
        draft
    }

    fn set_location(&mut self, name: &str, location: Location) {
        if let Some(previous) = self.location {
            warn!(
                "Parameter {} has several location tags ({} then {}), using the last",
                name, previous, location
            );
        }
        self.name = Some(name.to_string());
        self.location = Some(location);
    }

    /// Explicit enum tags turn a boolean into a plain string choice, so they survive rendering.
    fn drop_boolean(&mut self) {
        if self.param_type == ParamType::Boolean {
            self.param_type = ParamType::String;
        }
    }

    fn set_default(&mut self, value: DefaultValue) {
        if let Some(previous) = &self.default_value {
            warn!("Several default tags ({:?} then {:?}), using the last", previous, value);
        }
        self.default_value = Some(value);
    }

    fn apply(&mut self, tag: &ParamTag) {
        match tag {
            ParamTag::Query(name) => self.set_location(name, Location::Query),
            ParamTag::Path(name) => self.set_location(name, Location::Path),
            ParamTag::Header(name) => self.set_location(name, Location::Header),
            ParamTag::Description(text) => self.description = Some(text.clone()),
            ParamTag::Required => self.required = true,
            ParamTag::DefaultBoolean(value) => self.set_default(DefaultValue::String(value.to_string())),
            ParamTag::DefaultInteger(value) => self.set_default(DefaultValue::Integer(*value)),
            ParamTag::DefaultString(value) => self.set_default(DefaultValue::String(value.clone())),
            ParamTag::Enum(values) => {
                self.drop_boolean();
                self.enumeration = values.clone();
            }
            ParamTag::EnumDescriptions(values) => {
                self.drop_boolean();
                self.enum_descriptions = values.clone();
            }
            ParamTag::Ignore | ParamTag::DoNotExtend => {}
        }
    }
}

/// Maps a declared type onto the documented type.
pub fn semantic_type(declared_type: &DeclaredType) -> ParamType {
    match declared_type {
        DeclaredType::Integer => ParamType::Int,
        DeclaredType::Boolean => ParamType::Boolean,
        _ => ParamType::String,
    }
}

/// Normalizes one parameter.
///
/// Returns `None` when no name can be resolved: the parameter has no query, path or header
/// tag and its declared type cannot carry a request body. Such parameters are not documented.
/// Ignore tags are the caller's concern and have no effect here.
pub fn normalize(declared_type: &DeclaredType, tags: &[ParamTag]) -> Option<Parameter> {
    let mut draft = Draft::seeded(declared_type);
    for tag in tags {
        draft.apply(tag);
    }

    if draft.location.is_none() && declared_type.is_body_capable() {
        draft.name = Some(REQUEST_BODY.to_string());
        draft.param_type = ParamType::Textarea;
        draft.location = Some(Location::Body);
    }

    let (Some(name), Some(location)) = (draft.name, draft.location) else {
        debug!("Dropping parameter of type {:?}: no location and not a body type", declared_type);
        return None;
    };

    Some(Parameter {
        name,
        description: draft.description,
        location,
        param_type: draft.param_type,
        required: draft.required,
        default_value: draft.default_value,
        enumeration: draft.enumeration,
        enum_descriptions: draft.enum_descriptions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_semantic_types() {
        assert_eq!(semantic_type(&DeclaredType::Integer), ParamType::Int);
        assert_eq!(semantic_type(&DeclaredType::Boolean), ParamType::Boolean);
        assert_eq!(semantic_type(&DeclaredType::Text), ParamType::String);
        assert_eq!(semantic_type(&DeclaredType::Other("Uuid".to_string())), ParamType::String);
    }

    #[test]
    fn test_query_parameter_with_all_tags() {
        let parameter = normalize(
            &DeclaredType::Integer,
            &[
                ParamTag::Description("Param1 does something".to_string()),
                ParamTag::Query("param1".to_string()),
                ParamTag::Required,
                ParamTag::DefaultInteger(2),
            ],
        )
        .unwrap();

        assert_eq!(
            parameter,
            Parameter {
                name: "param1".to_string(),
                description: Some("Param1 does something".to_string()),
                location: Location::Query,
                param_type: ParamType::Int,
                required: true,
                default_value: Some(DefaultValue::Integer(2)),
                enumeration: Vec::new(),
                enum_descriptions: Vec::new(),
            }
        );
    }

    #[test]
    fn test_boolean_is_seeded_with_lower_case_enumeration() {
        let parameter = normalize(
            &DeclaredType::Boolean,
            &[ParamTag::Query("flag".to_string()), ParamTag::DefaultBoolean(true)],
        )
        .unwrap();

        assert_eq!(parameter.param_type, ParamType::Boolean);
        assert_eq!(parameter.enumeration, strings(&["true", "false"]));
        assert_eq!(parameter.enum_descriptions, strings(&["true", "false"]));
        assert_eq!(parameter.default_value, Some(DefaultValue::String("true".to_string())));
    }

    #[test]
    fn test_enum_tags_replace_boolean_seed() {
        let parameter = normalize(
            &DeclaredType::Boolean,
            &[
                ParamTag::Query("enum".to_string()),
                ParamTag::Enum(strings(&["a", "b"])),
                ParamTag::EnumDescriptions(strings(&["Letter a", "Letter b"])),
            ],
        )
        .unwrap();

        assert_eq!(parameter.param_type, ParamType::String);
        assert_eq!(parameter.enumeration, strings(&["a", "b"]));
        assert_eq!(parameter.enum_descriptions, strings(&["Letter a", "Letter b"]));
    }

    #[test]
    fn test_enum_descriptions_alone_keep_boolean_values() {
        let parameter = normalize(
            &DeclaredType::Boolean,
            &[
                ParamTag::Query("flag".to_string()),
                ParamTag::EnumDescriptions(strings(&["Yes", "No"])),
            ],
        )
        .unwrap();

        assert_eq!(parameter.param_type, ParamType::String);
        assert_eq!(parameter.enumeration, strings(&["true", "false"]));
        assert_eq!(parameter.enum_descriptions, strings(&["Yes", "No"]));
    }

    #[test]
    fn test_enum_size_mismatch_is_kept() {
        let parameter = normalize(
            &DeclaredType::Text,
            &[
                ParamTag::Query("Enum mismatch".to_string()),
                ParamTag::Enum(strings(&["a", "b"])),
                ParamTag::EnumDescriptions(strings(&["a", "b", "c"])),
            ],
        )
        .unwrap();

        assert_eq!(parameter.enumeration.len(), 2);
        assert_eq!(parameter.enum_descriptions.len(), 3);
    }

    #[test]
    fn test_path_and_header_locations() {
        let path = normalize(&DeclaredType::Text, &[ParamTag::Path("pathParam".to_string())]).unwrap();
        assert_eq!(path.location, Location::Path);
        assert_eq!(path.name, "pathParam");

        let header = normalize(&DeclaredType::Text, &[ParamTag::Header("Accept".to_string())]).unwrap();
        assert_eq!(header.location, Location::Header);
        assert_eq!(header.param_type, ParamType::String);
    }

    #[test]
    fn test_untagged_text_becomes_request_body() {
        let parameter = normalize(&DeclaredType::Text, &[]).unwrap();

        assert_eq!(parameter.name, REQUEST_BODY);
        assert_eq!(parameter.location, Location::Body);
        assert_eq!(parameter.param_type, ParamType::Textarea);
    }

    #[test]
    fn test_untagged_body_keeps_description_and_required() {
        let parameter = normalize(
            &DeclaredType::Bytes,
            &[ParamTag::Description("Upload".to_string()), ParamTag::Required],
        )
        .unwrap();

        assert_eq!(parameter.location, Location::Body);
        assert_eq!(parameter.description.as_deref(), Some("Upload"));
        assert!(parameter.required);
    }

    #[test]
    fn test_unresolvable_parameters_are_dropped() {
        assert_eq!(normalize(&DeclaredType::Other("Request".to_string()), &[]), None);
        assert_eq!(normalize(&DeclaredType::Integer, &[ParamTag::Required]), None);
        assert_eq!(normalize(&DeclaredType::Boolean, &[]), None);
    }

    #[test]
    fn test_last_location_tag_wins() {
        let parameter = normalize(
            &DeclaredType::Text,
            &[ParamTag::Query("q".to_string()), ParamTag::Header("X-Q".to_string())],
        )
        .unwrap();

        assert_eq!(parameter.name, "X-Q");
        assert_eq!(parameter.location, Location::Header);
    }

    #[test]
    fn test_default_string() {
        let parameter = normalize(
            &DeclaredType::Text,
            &[ParamTag::Query("format".to_string()), ParamTag::DefaultString("json".to_string())],
        )
        .unwrap();

        assert_eq!(parameter.default_value, Some(DefaultValue::String("json".to_string())));
    }
}
