//! Consistency checks over a built [`RuleTable`](crate::rules::RuleTable).
//!
//! These run between building and emitting. They enforce the invariants the
//! emitter relies on: every referenced rule exists and has content, and no two
//! raw names share a displayed name (which would silently merge rules).

use crate::config::GeneratorConfig;
use crate::error::GrammarError;
use crate::normalize::normalize_rule_name;
use crate::rules::RuleTable;
use std::collections::HashMap;

/// Performs semantic validation of a built rule table.
///
/// - Checks that all referenced rules are defined.
/// - Checks that no referenced rule is empty.
/// - Checks that normalized rule names are unique.
///
/// # Errors
///
/// Returns the first [`GrammarError`] found.
pub fn validate(table: &RuleTable, config: &GeneratorConfig) -> Result<(), GrammarError> {
    check_undefined_references(table)?;
    check_empty_references(table)?;
    check_name_collisions(table, config)?;
    Ok(())
}

fn check_undefined_references(table: &RuleTable) -> Result<(), GrammarError> {
    for (rule_name, productions) in table.iter() {
        for name in productions.iter().flat_map(|p| p.references()) {
            if !table.contains(name) {
                return Err(GrammarError::UnresolvedReference {
                    name: name.clone(),
                    context: rule_name.to_string(),
                });
            }
        }
    }
    Ok(())
}

fn check_empty_references(table: &RuleTable) -> Result<(), GrammarError> {
    for (_, productions) in table.iter() {
        for name in productions.iter().flat_map(|p| p.references()) {
            if table.get(name).is_some_and(<[_]>::is_empty) {
                return Err(GrammarError::EmptyRule(name.clone()));
            }
        }
    }
    Ok(())
}

fn check_name_collisions(table: &RuleTable, config: &GeneratorConfig) -> Result<(), GrammarError> {
    let mut displayed: HashMap<String, &str> = HashMap::new();

    // Names arrive alphabetically, so `first` is always the smaller raw name.
    for name in table.names() {
        let normalized = normalize_rule_name(name, &config.rule_suffix);
        if let Some(first) = displayed.insert(normalized.clone(), name) {
            return Err(GrammarError::NameCollision {
                normalized,
                first: first.to_string(),
                second: name.to_string(),
            });
        }
    }
    Ok(())
}
