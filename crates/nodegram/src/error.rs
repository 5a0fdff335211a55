//! The fatal error type shared by every generation stage.
//!
//! Generation is all-or-nothing: the first inconsistency aborts the run and no
//! partial grammar is returned.

/// Possible errors raised while loading a schema or generating a grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    /// The input JSON was syntactically invalid or structurally mismatched.
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// Two tree types share a name.
    #[error("type '{0}' is declared more than once")]
    DuplicateType(String),

    /// A field type or base link names a rule that does not exist.
    #[error("unresolved rule reference '{name}' in '{context}'")]
    UnresolvedReference {
        /// The missing rule name.
        name: String,
        /// The type whose definition contains the reference.
        context: String,
    },

    /// A token kind has no textual spelling and no special rendering.
    #[error("unmapped token kind '{0}'")]
    UnmappedTokenKind(String),

    /// A rule selected for emission has no productions.
    #[error("rule '{0}' has no productions")]
    EmptyRule(String),

    /// Two distinct raw rule names normalize to the same displayed name.
    #[error("rule names '{first}' and '{second}' both normalize to '{normalized}'")]
    NameCollision {
        /// The shared normalized name.
        normalized: String,
        /// The alphabetically first raw name.
        first: String,
        /// The alphabetically second raw name.
        second: String,
    },
}
