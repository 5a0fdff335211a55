//! Productions and the builder that derives them from schema constituents.
//!
//! A [`Production`] is one alternative of a rule: its grammar text plus the
//! raw names of every rule that text references. The [`ProductionBuilder`]
//! turns a [`TreeType`]'s children into productions, resolving field types
//! to rule references and token kinds to quoted literals.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use crate::config::{GeneratorConfig, EOF_MARKER, EPSILON};
use crate::error::GrammarError;
use crate::normalize::normalize_rule_name;
use crate::schema::{Constituent, Field, FieldType, TreeType};

/// One alternative of a grammar rule.
///
/// Equality and ordering consider the text only; two productions with the
/// same text are the same alternative regardless of how they were built.
#[derive(Debug, Clone)]
pub struct Production {
    text: String,
    references: Vec<String>,
}

impl Production {
    /// Creates a production that references no rules.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            references: Vec::new(),
        }
    }

    /// A production with no text.
    #[must_use]
    pub fn empty() -> Self {
        Self::new("")
    }

    /// Creates a reference to the rule for `raw_name`, displayed under its
    /// normalized name.
    #[must_use]
    pub fn reference(raw_name: &str, suffix: &str) -> Self {
        Self {
            text: normalize_rule_name(raw_name, suffix),
            references: vec![raw_name.to_string()],
        }
    }

    /// The grammar text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Raw names of referenced rules, in order of first appearance.
    #[must_use]
    pub fn references(&self) -> &[String] {
        &self.references
    }

    /// Returns `true` if the production has no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Joins the non-empty productions with `delim`, merging their references.
    pub fn join(delim: &str, productions: impl IntoIterator<Item = Production>) -> Self {
        let mut joined = Production::empty();
        for production in productions.into_iter().filter(|p| !p.is_empty()) {
            if !joined.is_empty() {
                joined.text.push_str(delim);
            }
            joined.text.push_str(&production.text);
            joined.merge_references(production.references);
        }
        joined
    }

    fn merge_references(&mut self, references: Vec<String>) {
        for name in references {
            if !self.references.contains(&name) {
                self.references.push(name);
            }
        }
    }

    #[must_use]
    fn suffix(mut self, suffix: &str, when: bool) -> Self {
        if when && !self.is_empty() {
            self.text.push_str(suffix);
        }
        self
    }

    #[must_use]
    fn parenthesize(mut self, when: bool) -> Self {
        if when && !self.is_empty() {
            self.text = format!("({})", self.text);
        }
        self
    }
}

impl PartialEq for Production {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Production {}

impl PartialOrd for Production {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Production {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Quotes a token's spelling as a grammar literal.
///
/// Backslashes and single quotes are escaped so the quoting stays balanced.
#[must_use]
pub fn quote_literal(text: &str) -> String {
    let escaped = text.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}

/// Converts tree types into productions.
///
/// `known` is the set of raw rule names a reference may resolve to; anything
/// else, unless it is a lexical rule, is an unresolved reference.
pub struct ProductionBuilder<'a> {
    config: &'a GeneratorConfig,
    known: &'a HashSet<String>,
}

impl<'a> ProductionBuilder<'a> {
    /// Creates a builder resolving references against `known`.
    #[must_use]
    pub fn new(config: &'a GeneratorConfig, known: &'a HashSet<String>) -> Self {
        Self { config, known }
    }

    /// Builds the productions a type contributes to its own rule.
    ///
    /// A type whose only child is a multi-kind token field contributes one
    /// literal production per kind; any other type with children contributes
    /// a single production. Types without children contribute nothing.
    ///
    /// # Errors
    ///
    /// Returns [`GrammarError::UnresolvedReference`] or
    /// [`GrammarError::UnmappedTokenKind`] if a field cannot be resolved.
    pub fn build(&self, ty: &TreeType) -> Result<Vec<Production>, GrammarError> {
        match ty.children.as_slice() {
            [] => Ok(Vec::new()),
            [Constituent::Field(field)] if ty.is_token_union() => {
                let mut productions = Vec::with_capacity(field.kinds.len());
                for kind in &field.kinds {
                    let production = self.token(kind)?;
                    if !production.is_empty() {
                        productions.push(production);
                    }
                }
                Ok(productions)
            }
            children => {
                let production = self.children(children, " ", &ty.name)?;
                Ok(if production.is_empty() {
                    Vec::new()
                } else {
                    vec![production]
                })
            }
        }
    }

    /// A reference to `name`, checked against the known and lexical rules.
    ///
    /// # Errors
    ///
    /// Returns [`GrammarError::UnresolvedReference`] if `name` is neither.
    pub fn rule_reference(&self, name: &str, context: &str) -> Result<Production, GrammarError> {
        if self.known.contains(name) || self.config.is_lexical(name) {
            Ok(Production::reference(name, &self.config.rule_suffix))
        } else {
            Err(GrammarError::UnresolvedReference {
                name: name.to_string(),
                context: context.to_string(),
            })
        }
    }

    fn children(
        &self,
        children: &[Constituent],
        delim: &str,
        context: &str,
    ) -> Result<Production, GrammarError> {
        let parts = children
            .iter()
            .map(|child| self.constituent(child, context))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Production::join(delim, parts))
    }

    fn constituent(&self, child: &Constituent, context: &str) -> Result<Production, GrammarError> {
        match child {
            Constituent::Choice { children, optional } => Ok(self
                .children(children, " | ", context)?
                .parenthesize(true)
                .suffix("?", *optional)),
            Constituent::Sequence { children } => {
                Ok(self.children(children, " ", context)?.parenthesize(true))
            }
            Constituent::Field(field) => {
                Ok(self.field(field, context)?.suffix("?", field.optional))
            }
        }
    }

    fn field(&self, field: &Field, context: &str) -> Result<Production, GrammarError> {
        match &field.field_type {
            FieldType::Bool => Ok(Production::empty()),
            FieldType::Token => self.token_field(field),
            FieldType::Node(ty) => self.rule_reference(ty, context),
            FieldType::SeparatedList(element) => self.separated_list(field, element, context),
            FieldType::List(element) => self.list(field, element, context),
        }
    }

    fn separated_list(
        &self,
        field: &Field,
        element: &str,
        context: &str,
    ) -> Result<Production, GrammarError> {
        let item = self.rule_reference(element, context)?;
        let repeat = if field.min_count.is_some_and(|n| n >= 2) {
            "+"
        } else {
            "*"
        };
        let text = item.text().to_string();
        let empty_allowed = field.min_count.is_none();

        Ok(item
            .suffix(&format!(" (',' {text}){repeat}"), true)
            .suffix(" ','?", field.allow_trailing_separator)
            .parenthesize(empty_allowed)
            .suffix("?", empty_allowed))
    }

    fn list(
        &self,
        field: &Field,
        element: &str,
        context: &str,
    ) -> Result<Production, GrammarError> {
        let lists = &self.config.list_fields;
        let item = if field.name == lists.commas {
            Production::new("','")
        } else if field.name == lists.modifiers {
            self.rule_reference(&lists.modifier_rule, context)?
        } else if field.name == lists.text_tokens {
            self.rule_reference(&lists.text_token_rule, context)?
        } else if field.name == lists.tokens || element == self.config.token_type {
            self.rule_reference(&lists.token_rule, context)?
        } else {
            self.rule_reference(element, context)?
        };

        let repeat = if field.min_count.is_some() { "+" } else { "*" };
        Ok(item.suffix(repeat, true))
    }

    fn token_field(&self, field: &Field) -> Result<Production, GrammarError> {
        match field.kinds.as_slice() {
            [] if self.config.is_token_kind(&field.name) => self.token(&field.name),
            [] => self.token(&format!("{}Token", field.name)),
            [kind] => self.token(kind),
            kinds => {
                let mut literals = kinds
                    .iter()
                    .map(|kind| self.token(kind))
                    .collect::<Result<Vec<_>, _>>()?;
                literals.sort();
                Ok(Production::join(" | ", literals).parenthesize(true))
            }
        }
    }

    /// Renders a single token kind.
    ///
    /// # Errors
    ///
    /// Returns [`GrammarError::UnmappedTokenKind`] if the kind has no special
    /// rendering and no spelling.
    pub fn token(&self, kind: &str) -> Result<Production, GrammarError> {
        let specials = &self.config.special_tokens;
        if kind == specials.end_of_file {
            return Ok(Production::new(EOF_MARKER));
        }
        if specials.dropped.iter().any(|k| k == kind) {
            return Ok(Production::empty());
        }
        if specials.omitted.iter().any(|k| k == kind) {
            return Ok(Production::new(EPSILON));
        }
        if self.config.is_lexical(kind) {
            return Ok(Production::reference(kind, &self.config.rule_suffix));
        }

        match self.config.token_text(kind) {
            Some(text) if !text.is_empty() => Ok(Production::new(quote_literal(text))),
            _ => Err(GrammarError::UnmappedTokenKind(kind.to_string())),
        }
    }
}
