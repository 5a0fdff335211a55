//! Generate ANTLR-style grammars from syntax-node schemas.
//!
//! Given a [`Schema`] describing a language's syntax tree (node kinds, their
//! base types, and the typed constituents of each node), [`generate`] produces
//! a deterministic, deduplicated, readable context-free grammar of the
//! concrete syntax those nodes represent.
//!
//! ```
//! use nodegram::{generate, Field, GeneratorConfig, Schema, TreeType};
//!
//! let schema = Schema::new(vec![
//!     TreeType::new("StatementSyntax"),
//!     TreeType::new("BreakStatementSyntax")
//!         .with_base("StatementSyntax")
//!         .with_child(Field::token("BreakKeyword").with_kinds(["BreakKeyword"]))
//!         .with_child(Field::token("SemicolonToken")),
//! ]);
//!
//! let grammar = generate(&schema, &GeneratorConfig::csharp()).unwrap();
//! assert!(grammar.contains("statement\n  : break_statement\n  ;\n"));
//! assert!(grammar.contains("break_statement\n  : 'break' ';'\n  ;\n"));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::multiple_crate_versions)]

/// Constant configuration data: token spellings, lexical rule names, major
/// sections and the modifier enumeration.
pub mod config;

/// Ordered serialization of rules into the final document.
pub mod emit;

/// The single fatal error type of the generator.
pub mod error;

/// Conversion of `PascalCase` type names to grammar rule names.
pub mod normalize;

/// Productions and the builder that derives them from schema constituents.
pub mod production;

/// The rule table accumulated during generation.
pub mod rules;

/// The syntax-node schema a grammar is generated from.
///
/// This is the input side of the pipeline: an immutable description of node
/// kinds that the generator reads but never mutates.
pub mod schema;

/// Consistency checks run between building and emitting.
pub mod validate;

pub use config::GeneratorConfig;
pub use emit::{emit, EmittedRule, GrammarDocument};
pub use error::GrammarError;
pub use normalize::normalize_rule_name;
pub use production::{Production, ProductionBuilder};
pub use rules::RuleTable;
pub use schema::{parse_schema, Constituent, Field, FieldType, Schema, TreeType};
pub use validate::validate;

/// Builds the rule table for `schema`, including the synthesized `Modifier`
/// type, without emitting it.
///
/// # Errors
///
/// Returns the first [`GrammarError`] raised while building the table.
pub fn build_rules(schema: &Schema, config: &GeneratorConfig) -> Result<RuleTable, GrammarError> {
    let mut types: Vec<TreeType> = schema.rule_types(&config.root_type).cloned().collect();
    types.extend(schema::synthesize_modifier(config));
    RuleTable::build(&types, config)
}

/// Generates the ordered grammar document for `schema`.
///
/// # Errors
///
/// Returns a [`GrammarError`] if the schema is inconsistent: a duplicate type,
/// an unresolved reference, an unmapped token kind, a referenced rule with no
/// productions, or two rule names that normalize identically.
pub fn generate_document(
    schema: &Schema,
    config: &GeneratorConfig,
) -> Result<GrammarDocument, GrammarError> {
    let table = build_rules(schema, config)?;
    validate(&table, config)?;
    emit(&table, config)
}

/// Generates the grammar text for `schema`.
///
/// The output is a pure function of `(schema, config)`: generating twice from
/// the same inputs yields identical text.
///
/// # Errors
///
/// See [`generate_document`].
pub fn generate(schema: &Schema, config: &GeneratorConfig) -> Result<String, GrammarError> {
    generate_document(schema, config).map(|doc| doc.to_string())
}
