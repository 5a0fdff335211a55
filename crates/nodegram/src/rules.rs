//! The rule table: every rule name mapped to its productions.
//!
//! The table is the only mutable structure in generation. Base types gain
//! alternatives by having a reference appended under their name while each
//! derived type is processed, so no type ever points back at its parent.

use std::collections::{BTreeMap, HashSet};

use crate::config::{GeneratorConfig, LEXICAL_PLACEHOLDER};
use crate::error::GrammarError;
use crate::production::{Production, ProductionBuilder};
use crate::schema::TreeType;

/// Raw rule names mapped to their productions, in alphabetical key order.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: BTreeMap<String, Vec<Production>>,
}

impl RuleTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table for `types` in a single pass.
    ///
    /// Every type gets an entry. A type with a base (other than the root
    /// type) adds a reference to itself under the base's entry, and its own
    /// children become productions under its own entry. Every configured
    /// lexical rule that no type defines then receives a placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`GrammarError::DuplicateType`] if two types share a name,
    /// [`GrammarError::UnresolvedReference`] if a base or field names an
    /// unknown type, and [`GrammarError::UnmappedTokenKind`] if a token
    /// cannot be spelled.
    pub fn build(types: &[TreeType], config: &GeneratorConfig) -> Result<Self, GrammarError> {
        let mut table = Self::new();
        for ty in types {
            if !table.declare(&ty.name) {
                return Err(GrammarError::DuplicateType(ty.name.clone()));
            }
        }

        let known: HashSet<String> = table.rules.keys().cloned().collect();
        let builder = ProductionBuilder::new(config, &known);

        for ty in types {
            if let Some(base) = ty.base.as_deref().filter(|b| *b != config.root_type) {
                if !known.contains(base) {
                    return Err(GrammarError::UnresolvedReference {
                        name: base.to_string(),
                        context: ty.name.clone(),
                    });
                }
                table.push(base, Production::reference(&ty.name, &config.rule_suffix));
            }

            for production in builder.build(ty)? {
                table.push(&ty.name, production);
            }
        }

        table.insert_lexical_placeholders(config);
        Ok(table)
    }

    /// Adds an empty entry for `name`. Returns `false` if it already existed.
    pub fn declare(&mut self, name: &str) -> bool {
        if self.rules.contains_key(name) {
            return false;
        }
        self.rules.insert(name.to_string(), Vec::new());
        true
    }

    /// Appends `production` to the entry for `name`, creating it if needed.
    ///
    /// Returns `false` if the rule already had a production with the same text.
    pub fn push(&mut self, name: &str, production: Production) -> bool {
        let productions = self.rules.entry(name.to_string()).or_default();
        if productions.contains(&production) {
            return false;
        }
        productions.push(production);
        true
    }

    /// Returns `true` if `name` has an entry.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// The productions of `name`, in insertion order.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[Production]> {
        self.rules.get(name).map(Vec::as_slice)
    }

    /// All rule names, alphabetically.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// All rules with their productions, alphabetically by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Production])> {
        self.rules
            .iter()
            .map(|(name, productions)| (name.as_str(), productions.as_slice()))
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the table has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn insert_lexical_placeholders(&mut self, config: &GeneratorConfig) {
        for name in &config.lexical_rules {
            if self.rules.get(name).is_none_or(Vec::is_empty) {
                self.push(name, Production::new(LEXICAL_PLACEHOLDER));
            }
        }
    }
}
