//! Ordered serialization of a rule table into a grammar document.
//!
//! Major-section rules are emitted first, each followed depth-first by the
//! rules it references, so related rules sit next to each other. Major
//! sections are never entered from another rule's neighborhood, which keeps
//! the categories from interleaving. Whatever remains is emitted afterwards in
//! alphabetical order.

use std::collections::HashSet;
use std::fmt;

use crate::config::GeneratorConfig;
use crate::error::GrammarError;
use crate::normalize::normalize_rule_name;
use crate::production::Production;
use crate::rules::RuleTable;

/// One rule block of the output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedRule {
    /// The normalized rule name.
    pub name: String,
    /// Production texts, sorted.
    pub productions: Vec<String>,
}

/// The finished grammar: a header plus rule blocks in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarDocument {
    /// The fixed header text, ending in a newline.
    pub header: String,
    /// Rule blocks, in emission order.
    pub rules: Vec<EmittedRule>,
}

impl GrammarDocument {
    /// Looks up an emitted rule by its normalized name.
    #[must_use]
    pub fn rule(&self, name: &str) -> Option<&EmittedRule> {
        self.rules.iter().find(|rule| rule.name == name)
    }
}

impl fmt::Display for EmittedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        for (i, production) in self.productions.iter().enumerate() {
            let lead = if i == 0 { ':' } else { '|' };
            writeln!(f, "  {lead} {production}")?;
        }
        writeln!(f, "  ;")
    }
}

impl fmt::Display for GrammarDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header)?;
        for rule in &self.rules {
            writeln!(f)?;
            write!(f, "{rule}")?;
        }
        Ok(())
    }
}

/// Orders and serializes the rules of a validated table.
///
/// # Errors
///
/// Returns [`GrammarError::EmptyRule`] if a referenced rule has no
/// productions, or [`GrammarError::UnresolvedReference`] if a referenced rule
/// is missing from the table.
pub fn emit(table: &RuleTable, config: &GeneratorConfig) -> Result<GrammarDocument, GrammarError> {
    let mut emitter = Emitter::new(table, config);

    for name in &config.major_sections {
        emitter.process(name)?;
    }
    for name in table.names() {
        emitter.process(name)?;
    }

    Ok(GrammarDocument {
        header: config.header(),
        rules: emitter.output,
    })
}

struct Emitter<'a> {
    table: &'a RuleTable,
    config: &'a GeneratorConfig,
    seen: HashSet<&'a str>,
    output: Vec<EmittedRule>,
}

impl<'a> Emitter<'a> {
    fn new(table: &'a RuleTable, config: &'a GeneratorConfig) -> Self {
        Self {
            table,
            config,
            seen: HashSet::new(),
            output: Vec::new(),
        }
    }

    /// Emits `start` and, depth-first, every rule it reaches.
    ///
    /// `start` itself may be absent or empty (a major section the schema does
    /// not use, or an abstract type nothing derives from); it is then skipped.
    /// Rules reached through a reference must exist and have productions.
    fn process(&mut self, start: &'a str) -> Result<(), GrammarError> {
        // Entries are (rule, referenced_from). Children are pushed in reverse
        // so they pop in reference order, matching recursive pre-order.
        let table = self.table;
        let mut stack: Vec<(&'a str, Option<&'a str>)> = vec![(start, None)];

        while let Some((name, referenced_from)) = stack.pop() {
            if self.seen.contains(name) {
                continue;
            }

            let Some(productions) = table.get(name) else {
                match referenced_from {
                    None => continue,
                    Some(context) => {
                        return Err(GrammarError::UnresolvedReference {
                            name: name.to_string(),
                            context: context.to_string(),
                        })
                    }
                }
            };
            self.seen.insert(name);

            if productions.is_empty() {
                if referenced_from.is_some() {
                    return Err(GrammarError::EmptyRule(name.to_string()));
                }
                continue;
            }

            let mut sorted: Vec<_> = productions.iter().collect();
            sorted.sort();

            self.output.push(EmittedRule {
                name: normalize_rule_name(name, &self.config.rule_suffix),
                productions: sorted.iter().map(|p| p.text().to_string()).collect(),
            });

            let mut referenced: Vec<&'a str> = Vec::new();
            for reference in sorted.iter().copied().flat_map(Production::references) {
                let reference = reference.as_str();
                if !self.config.is_major_section(reference) && !referenced.contains(&reference) {
                    referenced.push(reference);
                }
            }
            stack.extend(referenced.into_iter().rev().map(|r| (r, Some(name))));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GeneratorConfig {
        GeneratorConfig::csharp().with_grammar_name("test")
    }

    #[test]
    fn test_render_block() {
        let rule = EmittedRule {
            name: "statement".to_string(),
            productions: vec!["block".to_string(), "break_statement".to_string()],
        };
        assert_eq!(rule.to_string(), "statement\n  : block\n  | break_statement\n  ;\n");
    }

    #[test]
    fn test_depth_first_order() {
        let mut table = RuleTable::new();
        table.push("StatementSyntax", Production::reference("IfStatementSyntax", "Syntax"));
        table.push("StatementSyntax", Production::reference("BlockSyntax", "Syntax"));
        table.push("BlockSyntax", Production::new("'{' statement* '}'"));
        table.push(
            "IfStatementSyntax",
            Production::join(
                " ",
                [
                    Production::new("'if'"),
                    Production::reference("ElseClauseSyntax", "Syntax"),
                ],
            ),
        );
        table.push("ElseClauseSyntax", Production::new("'else'"));
        table.push("AardvarkSyntax", Production::new("'aardvark'"));

        let doc = emit(&table, &config()).unwrap();
        let names: Vec<_> = doc.rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["statement", "block", "if_statement", "else_clause", "aardvark"]);
        assert_eq!(doc.rules[0].productions, ["block", "if_statement"]);
    }

    #[test]
    fn test_major_sections_not_entered() {
        let mut table = RuleTable::new();
        table.push(
            "ExpressionSyntax",
            Production::reference("ParenthesizedExpressionSyntax", "Syntax"),
        );
        table.push(
            "ParenthesizedExpressionSyntax",
            Production::new("'(' expression ')'"),
        );
        table.push("StatementSyntax", Production::reference("ExpressionStatementSyntax", "Syntax"));
        table.push(
            "ExpressionStatementSyntax",
            Production::join(
                " ",
                [
                    Production::reference("ExpressionSyntax", "Syntax"),
                    Production::new("';'"),
                ],
            ),
        );

        let doc = emit(&table, &config()).unwrap();
        let names: Vec<_> = doc.rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            ["statement", "expression_statement", "expression", "parenthesized_expression"]
        );
    }

    #[test]
    fn test_unreferenced_empty_rule_skipped() {
        let mut table = RuleTable::new();
        table.declare("TypeSyntax");
        table.push("AttributeSyntax", Production::new("'['"));
        let doc = emit(&table, &config()).unwrap();
        assert_eq!(doc.rules.len(), 1);
        assert_eq!(
            doc.to_string(),
            "// <auto-generated />\ngrammar test;\n\nattribute\n  : '['\n  ;\n"
        );
    }

    #[test]
    fn test_referenced_empty_rule_fails() {
        let mut table = RuleTable::new();
        table.push("ArgumentSyntax", Production::reference("ExpressionSyntax", "Syntax"));
        table.declare("ExpressionSyntax");
        let mut config = config();
        config.major_sections.clear();
        assert_eq!(
            emit(&table, &config),
            Err(GrammarError::EmptyRule("ExpressionSyntax".to_string()))
        );
    }
}
