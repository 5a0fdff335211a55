//! Synthesis of the `Modifier` pseudo-type.
//!
//! Modifier keywords appear in many unrelated declarations as an untyped
//! "list of tokens" field. Rather than have the schema declare them, one
//! shared rule is derived from the declaration-modifier enumeration, keeping
//! only names that are real token kinds.

use super::{Field, TreeType};
use crate::config::GeneratorConfig;

/// Builds the `Modifier` type from the configured modifier enumeration.
///
/// Each modifier `M` becomes the kind `MKeyword`; kinds that are not part of
/// the token-kind enumeration are dropped. Returns `None` if no modifier
/// survives the filter.
#[must_use]
pub fn synthesize_modifier(config: &GeneratorConfig) -> Option<TreeType> {
    let kinds: Vec<String> = config
        .modifier_names
        .iter()
        .map(|m| format!("{m}Keyword"))
        .filter(|kind| config.is_token_kind(kind))
        .collect();

    if kinds.is_empty() {
        return None;
    }

    Some(
        TreeType::new(config.list_fields.modifier_rule.as_str())
            .with_child(Field::token(config.list_fields.modifier_rule.as_str()).with_kinds(kinds)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Constituent;

    #[test]
    fn test_modifier_filters_unknown_keywords() {
        let modifier = synthesize_modifier(&GeneratorConfig::csharp()).unwrap();
        assert_eq!(modifier.name, "Modifier");

        let [Constituent::Field(field)] = modifier.children.as_slice() else {
            panic!("expected a single field");
        };
        assert!(field.kinds.contains(&"StaticKeyword".to_string()));
        assert!(field.kinds.contains(&"PublicKeyword".to_string()));
        assert!(!field.kinds.contains(&"NoneKeyword".to_string()));
        assert!(!field.kinds.contains(&"IndexerKeyword".to_string()));
        assert!(modifier.is_token_union());
    }

    #[test]
    fn test_no_modifiers() {
        let mut config = GeneratorConfig::csharp();
        config.modifier_names = vec!["Indexer".to_string()];
        assert!(synthesize_modifier(&config).is_none());
    }
}
