//! Constant configuration data for grammar generation.
//!
//! Everything the generator treats as "fixed" (the major sections, the
//! lexical placeholder names, the modifier enumeration, the token spellings)
//! lives in a [`GeneratorConfig`] value passed into each stage, so generation
//! stays a pure function of `(schema, config)`.

pub mod csharp;

/// Grammar text for the end-of-file token.
pub const EOF_MARKER: &str = "EOF";

/// Grammar text for tokens that are deliberately omitted from the source.
pub const EPSILON: &str = "/* epsilon */";

/// Body of rules that bottom out in the lexical grammar.
pub const LEXICAL_PLACEHOLDER: &str = "/* see lexical specification */";

/// Configuration for one grammar generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Name in the `grammar <name>;` header.
    pub grammar_name: String,

    /// The abstract root of the type hierarchy, never emitted as a rule.
    pub root_type: String,

    /// Conventional suffix stripped from type names before normalization.
    pub rule_suffix: String,

    /// Element type name that marks a list as a list of raw tokens.
    pub token_type: String,

    /// Rules emitted first, in order, to group the document by category.
    pub major_sections: Vec<String>,

    /// Token-level rules rendered as a reference to a placeholder rule.
    pub lexical_rules: Vec<String>,

    /// The declaration-modifier enumeration used to build the `Modifier` rule.
    pub modifier_names: Vec<String>,

    /// Spelling of every token kind with fixed text.
    pub token_kinds: Vec<TokenKind>,

    /// Token kinds with special renderings.
    pub special_tokens: SpecialTokens,

    /// Token-list fields rendered by name rather than by element type.
    pub list_fields: ListFields,
}

/// A token kind and its fixed spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenKind {
    /// The kind name (e.g. `"SemicolonToken"`).
    pub name: String,
    /// The source text of the token (e.g. `";"`).
    pub text: String,
}

/// Token kinds that do not render as quoted literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialTokens {
    /// Renders as [`EOF_MARKER`].
    pub end_of_file: String,
    /// End-of-trivia kinds, rendered as nothing.
    pub dropped: Vec<String>,
    /// Omitted kinds, rendered as [`EPSILON`].
    pub omitted: Vec<String>,
}

/// Field names that override a token list's element type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFields {
    /// Field holding comma separators, rendered as `','`.
    pub commas: String,
    /// Field holding declaration modifiers.
    pub modifiers: String,
    /// Rule the modifiers field references (the synthesized pseudo-type).
    pub modifier_rule: String,
    /// Field holding arbitrary tokens.
    pub tokens: String,
    /// Generic lexical rule for arbitrary tokens.
    pub token_rule: String,
    /// Field holding text-literal tokens.
    pub text_tokens: String,
    /// Lexical rule for text-literal tokens.
    pub text_token_rule: String,
}

impl GeneratorConfig {
    /// Overrides the grammar name in the header.
    #[must_use]
    pub fn with_grammar_name(mut self, name: impl Into<String>) -> Self {
        self.grammar_name = name.into();
        self
    }

    /// Overrides the abstract root type.
    #[must_use]
    pub fn with_root_type(mut self, root: impl Into<String>) -> Self {
        self.root_type = root.into();
        self
    }

    /// The fixed document header.
    #[must_use]
    pub fn header(&self) -> String {
        format!("// <auto-generated />\ngrammar {};\n", self.grammar_name)
    }

    /// Returns `true` if `name` is a major-section rule.
    #[must_use]
    pub fn is_major_section(&self, name: &str) -> bool {
        self.major_sections.iter().any(|m| m == name)
    }

    /// Returns `true` if `name` is a lexical placeholder rule.
    #[must_use]
    pub fn is_lexical(&self, name: &str) -> bool {
        self.lexical_rules.iter().any(|l| l == name)
    }

    /// Returns the fixed spelling of a token kind, if it has one.
    #[must_use]
    pub fn token_text(&self, kind: &str) -> Option<&str> {
        self.token_kinds
            .iter()
            .find(|k| k.name == kind)
            .map(|k| k.text.as_str())
    }

    /// Returns `true` if `kind` is a member of the full token-kind enumeration.
    #[must_use]
    pub fn is_token_kind(&self, kind: &str) -> bool {
        self.token_text(kind).is_some()
            || self.is_lexical(kind)
            || self.special_tokens.end_of_file == kind
            || self.special_tokens.dropped.iter().any(|k| k == kind)
            || self.special_tokens.omitted.iter().any(|k| k == kind)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::csharp()
    }
}

impl TokenKind {
    /// Creates a token kind entry.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}
