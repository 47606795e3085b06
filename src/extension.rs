//! Parameter extension: filling documentation gaps from caller-supplied reference parameters.
//!
//! A scanned parameter inherits from every extension parameter with the same name, type and
//! location, in list order. Only gaps are filled (absent description, empty enumeration,
//! `required == false`, absent default), so an earlier match always wins a field over a later
//! one and applying the same list twice changes nothing.

use crate::model::{ExtensionParameter, Parameter};
use log::debug;

/// Fills the gaps of `base` from `extension` if the two match; returns `base` unchanged otherwise.
pub fn merge(base: Parameter, extension: &ExtensionParameter) -> Parameter {
    if !extension.matches(&base) {
        return base;
    }
    debug!("Extending parameter {} ({})", base.name, base.location);

    let mut merged = base;
    if merged.description.is_none() {
        merged.description = extension.description.clone();
    }
    // Enumeration and its descriptions travel as a pair
    if merged.enumeration.is_empty() {
        merged.enumeration = extension.enumeration.clone();
        merged.enum_descriptions = extension.enum_descriptions.clone();
    }
    if !merged.required {
        merged.required = extension.required;
    }
    if merged.default_value.is_none() {
        merged.default_value = extension.default.clone();
    }
    merged
}

/// Applies every extension parameter in order.
pub fn extend(parameter: Parameter, extensions: &[ExtensionParameter]) -> Parameter {
    extensions.iter().fold(parameter, merge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DefaultValue, Location, ParamType};
    use pretty_assertions::assert_eq;

    fn accept_extension() -> ExtensionParameter {
        ExtensionParameter::new("Accept", Location::Header, ParamType::String)
            .with_description("Accept mime-type")
            .with_required(true)
            .with_default("text/plain")
            .with_enum(vec!["text/plain"], vec!["Plain text"])
    }

    #[test]
    fn test_fills_every_gap() {
        let parameter = Parameter::new("Accept", Location::Header, ParamType::String);

        let extended = extend(parameter, &[accept_extension()]);

        assert_eq!(extended.description.as_deref(), Some("Accept mime-type"));
        assert!(extended.required);
        assert_eq!(extended.default_value, Some(DefaultValue::String("text/plain".to_string())));
        assert_eq!(extended.enumeration, vec!["text/plain".to_string()]);
        assert_eq!(extended.enum_descriptions, vec!["Plain text".to_string()]);
    }

    #[test]
    fn test_populated_fields_are_kept() {
        let mut parameter = Parameter::new("Accept", Location::Header, ParamType::String);
        parameter.description = Some("Own description".to_string());
        parameter.default_value = Some(DefaultValue::String("application/json".to_string()));
        parameter.enumeration = vec!["application/json".to_string()];

        let extended = extend(parameter, &[accept_extension()]);

        assert_eq!(extended.description.as_deref(), Some("Own description"));
        assert_eq!(
            extended.default_value,
            Some(DefaultValue::String("application/json".to_string()))
        );
        assert_eq!(extended.enumeration, vec!["application/json".to_string()]);
        assert!(extended.enum_descriptions.is_empty());
        assert!(extended.required);
    }

    #[test]
    fn test_non_matching_extension_is_ignored() {
        let parameter = Parameter::new("Accept", Location::Query, ParamType::String);

        let extended = extend(parameter.clone(), &[accept_extension()]);

        assert_eq!(extended, parameter);
    }

    #[test]
    fn test_later_matches_fill_remaining_gaps() {
        let first = ExtensionParameter::new("id", Location::Path, ParamType::Int).with_description("First");
        let second = ExtensionParameter::new("id", Location::Path, ParamType::Int)
            .with_description("Second")
            .with_default(1i64);

        let extended = extend(Parameter::new("id", Location::Path, ParamType::Int), &[first, second]);

        assert_eq!(extended.description.as_deref(), Some("First"));
        assert_eq!(extended.default_value, Some(DefaultValue::Integer(1)));
    }

    #[test]
    fn test_extension_is_idempotent() {
        let extensions = vec![
            accept_extension(),
            ExtensionParameter::new("Accept", Location::Header, ParamType::String).with_description("Other"),
        ];
        let parameter = Parameter::new("Accept", Location::Header, ParamType::String);

        let once = extend(parameter, &extensions);
        let twice = extend(once.clone(), &extensions);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_seeded_boolean_enumeration_is_not_replaced() {
        let mut parameter = Parameter::new("flag", Location::Query, ParamType::Boolean);
        parameter.enumeration = vec!["true".to_string(), "false".to_string()];
        let extension = ExtensionParameter::new("flag", Location::Query, ParamType::Boolean)
            .with_enum(vec!["yes", "no"], vec!["Yes", "No"])
            .with_description("A flag");

        let extended = extend(parameter, &[extension]);

        assert_eq!(extended.enumeration, vec!["true".to_string(), "false".to_string()]);
        assert_eq!(extended.description.as_deref(), Some("A flag"));
    }
}
