//! The syntax-node schema a grammar is generated from.
//!
//! A [`Schema`] is an already-materialized description of a language's syntax
//! tree: every node kind, the base type it specializes, and the ordered
//! constituents that make up its concrete syntax. It can be built in code or
//! deserialized from JSON with [`facet_json`] via [`parse_schema`].

use facet::Facet;

use crate::error::GrammarError;

pub mod modifier;

pub use modifier::synthesize_modifier;

/// A complete schema: the set of node-kind definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Facet)]
pub struct Schema {
    /// All tree types, in declaration order.
    pub types: Vec<TreeType>,
}

/// One syntax-node-kind definition.
///
/// Types with a `base` contribute themselves as an alternative of the base
/// type's rule. Types with no children produce no production of their own;
/// they only collect the alternatives of their derived types.
#[derive(Debug, Clone, PartialEq, Eq, Facet)]
pub struct TreeType {
    /// Unique identifier of the type (e.g. `"BreakStatementSyntax"`).
    pub name: String,

    /// Name of the parent type whose rule this type is an alternative of.
    #[facet(default)]
    pub base: Option<String>,

    /// Ordered constituents that make up the node's concrete syntax.
    #[facet(default)]
    pub children: Vec<Constituent>,
}

/// A single piece of a node's concrete syntax.
#[derive(Debug, Clone, PartialEq, Eq, Facet)]
#[repr(u8)]
pub enum Constituent {
    /// A named, typed slot of the node.
    Field(Field),

    /// Exactly one of the children appears (alternation).
    Choice {
        /// The alternatives, in declaration order.
        children: Vec<Constituent>,
        /// Whether the whole alternation may be absent.
        #[facet(default)]
        optional: bool,
    },

    /// All of the children appear, in order (concatenation).
    Sequence {
        /// The concatenated parts.
        children: Vec<Constituent>,
    },
}

/// A named, typed slot of a node.
#[derive(Debug, Clone, PartialEq, Eq, Facet)]
pub struct Field {
    /// Field name (e.g. `"SemicolonToken"`, `"Modifiers"`).
    pub name: String,

    /// What the field holds.
    #[facet(rename = "type")]
    pub field_type: FieldType,

    /// Concrete token kinds this field is restricted to.
    #[facet(default)]
    pub kinds: Vec<String>,

    /// Whether the field may be absent.
    #[facet(default)]
    pub optional: bool,

    /// Minimum element count for list fields. `None` means zero-or-more.
    #[facet(default)]
    pub min_count: Option<u32>,

    /// Whether a separated list may end with a separator.
    #[facet(default)]
    pub allow_trailing_separator: bool,
}

/// The type tag of a [`Field`].
#[derive(Debug, Clone, PartialEq, Eq, Facet)]
#[repr(u8)]
pub enum FieldType {
    /// A flag with no concrete syntax.
    Bool,
    /// A single token.
    Token,
    /// A reference to another tree type.
    Node(String),
    /// A list of the named element type.
    List(String),
    /// A comma-separated list of the named element type.
    SeparatedList(String),
}

impl Schema {
    /// Creates a schema from a list of types.
    #[must_use]
    pub fn new(types: Vec<TreeType>) -> Self {
        Self { types }
    }

    /// Returns every type except the designated abstract root.
    pub fn rule_types<'a>(&'a self, root: &'a str) -> impl Iterator<Item = &'a TreeType> + 'a {
        self.types.iter().filter(move |ty| ty.name != root)
    }

    /// Looks up a type by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TreeType> {
        self.types.iter().find(|ty| ty.name == name)
    }
}

impl TreeType {
    /// Creates a type with no base and no children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: None,
            children: Vec::new(),
        }
    }

    /// Sets the base type.
    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Appends a child constituent.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<Constituent>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Returns `true` if this type's only child is a token field restricted
    /// to more than one kind.
    #[must_use]
    pub fn is_token_union(&self) -> bool {
        match self.children.as_slice() {
            [Constituent::Field(field)] => field.is_token() && field.kinds.len() > 1,
            _ => false,
        }
    }
}

impl Field {
    fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            kinds: Vec::new(),
            optional: false,
            min_count: None,
            allow_trailing_separator: false,
        }
    }

    /// A single-token field.
    pub fn token(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Token)
    }

    /// A reference to another tree type.
    pub fn node(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self::new(name, FieldType::Node(ty.into()))
    }

    /// A list of `element`.
    pub fn list(name: impl Into<String>, element: impl Into<String>) -> Self {
        Self::new(name, FieldType::List(element.into()))
    }

    /// A comma-separated list of `element`.
    pub fn separated_list(name: impl Into<String>, element: impl Into<String>) -> Self {
        Self::new(name, FieldType::SeparatedList(element.into()))
    }

    /// A flag field.
    pub fn flag(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Bool)
    }

    /// Restricts the field to the given token kinds.
    #[must_use]
    pub fn with_kinds<I, S>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.kinds = kinds.into_iter().map(Into::into).collect();
        self
    }

    /// Marks the field optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Sets the minimum element count of a list field.
    #[must_use]
    pub fn with_min_count(mut self, min_count: u32) -> Self {
        self.min_count = Some(min_count);
        self
    }

    /// Allows a separated list to end with a separator.
    #[must_use]
    pub fn allow_trailing_separator(mut self) -> Self {
        self.allow_trailing_separator = true;
        self
    }

    /// Returns `true` if the field holds a single token.
    #[must_use]
    pub fn is_token(&self) -> bool {
        matches!(self.field_type, FieldType::Token)
    }
}

impl Constituent {
    /// An alternation of `children`.
    #[must_use]
    pub fn choice(children: Vec<Constituent>) -> Self {
        Constituent::Choice {
            children,
            optional: false,
        }
    }

    /// An alternation of `children` that may be absent.
    #[must_use]
    pub fn optional_choice(children: Vec<Constituent>) -> Self {
        Constituent::Choice {
            children,
            optional: true,
        }
    }

    /// A concatenation of `children`.
    #[must_use]
    pub fn sequence(children: Vec<Constituent>) -> Self {
        Constituent::Sequence { children }
    }
}

impl From<Field> for Constituent {
    fn from(field: Field) -> Self {
        Constituent::Field(field)
    }
}

/// Parse a JSON schema definition into a strongly typed [`Schema`].
///
/// # Errors
///
/// Returns [`GrammarError::JsonParse`] if the provided string is not valid JSON
/// or fails deserialization.
pub fn parse_schema(json: &str) -> Result<Schema, GrammarError> {
    facet_json::from_str(json).map_err(|e| GrammarError::JsonParse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_schema() {
        let json = r#"{
            "types": [
                { "name": "StatementSyntax" },
                {
                    "name": "BreakStatementSyntax",
                    "base": "StatementSyntax",
                    "children": [
                        {
                            "Field": {
                                "name": "BreakKeyword",
                                "type": "Token",
                                "kinds": ["BreakKeyword"]
                            }
                        },
                        { "Field": { "name": "SemicolonToken", "type": "Token" } }
                    ]
                }
            ]
        }"#;

        let schema = parse_schema(json).unwrap();
        assert_eq!(schema.types.len(), 2);

        let brk = schema.get("BreakStatementSyntax").unwrap();
        assert_eq!(brk.base.as_deref(), Some("StatementSyntax"));
        assert_eq!(brk.children.len(), 2);
        assert_eq!(
            brk.children[0],
            Constituent::Field(Field::token("BreakKeyword").with_kinds(["BreakKeyword"]))
        );
    }

    #[test]
    fn test_parse_choice_without_optional() {
        let json = r#"{
            "types": [
                {
                    "name": "AccessorDeclarationSyntax",
                    "children": [
                        {
                            "Choice": {
                                "children": [
                                    { "Field": { "name": "SemicolonToken", "type": "Token" } },
                                    { "Field": { "name": "CommaToken", "type": "Token" } }
                                ]
                            }
                        }
                    ]
                }
            ]
        }"#;

        let schema = parse_schema(json).unwrap();
        let accessor = schema.get("AccessorDeclarationSyntax").unwrap();
        assert_eq!(
            accessor.children,
            [Constituent::choice(vec![
                Field::token("SemicolonToken").into(),
                Field::token("CommaToken").into(),
            ])]
        );
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_schema("{ not json").unwrap_err();
        assert!(matches!(err, GrammarError::JsonParse(_)));
    }

    #[test]
    fn test_rule_types_skip_root() {
        let schema = Schema::new(vec![
            TreeType::new("CSharpSyntaxNode"),
            TreeType::new("ExpressionSyntax").with_base("CSharpSyntaxNode"),
        ]);
        let names: Vec<_> = schema
            .rule_types("CSharpSyntaxNode")
            .map(|ty| ty.name.as_str())
            .collect();
        assert_eq!(names, ["ExpressionSyntax"]);
    }

    #[test]
    fn test_token_union() {
        let union = TreeType::new("PredefinedTypeSyntax")
            .with_child(Field::token("Keyword").with_kinds(["IntKeyword", "BoolKeyword"]));
        let single = TreeType::new("BreakStatementSyntax")
            .with_child(Field::token("BreakKeyword").with_kinds(["BreakKeyword"]));
        assert!(union.is_token_union());
        assert!(!single.is_token_union());
    }
}
