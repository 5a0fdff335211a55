//! Default tables for a C#-flavoured syntax schema.

use super::{GeneratorConfig, ListFields, SpecialTokens, TokenKind};

const MAJOR_SECTIONS: &[&str] = &[
    "CompilationUnitSyntax",
    "MemberDeclarationSyntax",
    "TypeSyntax",
    "StatementSyntax",
    "ExpressionSyntax",
    "XmlNodeSyntax",
    "StructuredTriviaSyntax",
];

const LEXICAL_RULES: &[&str] = &[
    "IdentifierToken",
    "CharacterLiteralToken",
    "StringLiteralToken",
    "NumericLiteralToken",
    "InterpolatedStringTextToken",
    "SingleLineRawStringLiteralToken",
    "MultiLineRawStringLiteralToken",
    "Utf8StringLiteralToken",
    "Utf8SingleLineRawStringLiteralToken",
    "Utf8MultiLineRawStringLiteralToken",
    "InterpolatedRawStringEndToken",
    "XmlTextLiteralToken",
    "XmlTextLiteralNewLineToken",
    "XmlEntityLiteralToken",
    "Token",
];

// Declaration modifiers; entries without a keyword are filtered at synthesis.
const MODIFIERS: &[&str] = &[
    "None",
    "Abstract",
    "Sealed",
    "Static",
    "New",
    "Public",
    "Protected",
    "Internal",
    "Private",
    "ReadOnly",
    "Const",
    "Volatile",
    "Indexer",
    "Extern",
    "Partial",
    "Unsafe",
    "Fixed",
    "Virtual",
    "Override",
    "Async",
    "Ref",
    "Required",
    "Scoped",
    "File",
];

const PUNCTUATION: &[(&str, &str)] = &[
    ("TildeToken", "~"),
    ("ExclamationToken", "!"),
    ("DollarToken", "$"),
    ("PercentToken", "%"),
    ("CaretToken", "^"),
    ("AmpersandToken", "&"),
    ("AsteriskToken", "*"),
    ("OpenParenToken", "("),
    ("CloseParenToken", ")"),
    ("MinusToken", "-"),
    ("PlusToken", "+"),
    ("EqualsToken", "="),
    ("OpenBraceToken", "{"),
    ("CloseBraceToken", "}"),
    ("OpenBracketToken", "["),
    ("CloseBracketToken", "]"),
    ("BarToken", "|"),
    ("BackslashToken", "\\"),
    ("ColonToken", ":"),
    ("SemicolonToken", ";"),
    ("DoubleQuoteToken", "\""),
    ("SingleQuoteToken", "'"),
    ("LessThanToken", "<"),
    ("CommaToken", ","),
    ("GreaterThanToken", ">"),
    ("DotToken", "."),
    ("QuestionToken", "?"),
    ("HashToken", "#"),
    ("SlashToken", "/"),
    ("DotDotToken", ".."),
    ("SlashGreaterThanToken", "/>"),
    ("LessThanSlashToken", "</"),
    ("XmlCommentStartToken", "<!--"),
    ("XmlCommentEndToken", "-->"),
    ("XmlCDataStartToken", "<![CDATA["),
    ("XmlCDataEndToken", "]]>"),
    ("XmlProcessingInstructionStartToken", "<?"),
    ("XmlProcessingInstructionEndToken", "?>"),
    ("BarBarToken", "||"),
    ("AmpersandAmpersandToken", "&&"),
    ("MinusMinusToken", "--"),
    ("PlusPlusToken", "++"),
    ("ColonColonToken", "::"),
    ("QuestionQuestionToken", "??"),
    ("MinusGreaterThanToken", "->"),
    ("ExclamationEqualsToken", "!="),
    ("EqualsEqualsToken", "=="),
    ("EqualsGreaterThanToken", "=>"),
    ("LessThanEqualsToken", "<="),
    ("LessThanLessThanToken", "<<"),
    ("LessThanLessThanEqualsToken", "<<="),
    ("GreaterThanEqualsToken", ">="),
    ("GreaterThanGreaterThanToken", ">>"),
    ("GreaterThanGreaterThanEqualsToken", ">>="),
    ("GreaterThanGreaterThanGreaterThanToken", ">>>"),
    ("GreaterThanGreaterThanGreaterThanEqualsToken", ">>>="),
    ("SlashEqualsToken", "/="),
    ("AsteriskEqualsToken", "*="),
    ("BarEqualsToken", "|="),
    ("AmpersandEqualsToken", "&="),
    ("PlusEqualsToken", "+="),
    ("MinusEqualsToken", "-="),
    ("CaretEqualsToken", "^="),
    ("PercentEqualsToken", "%="),
    ("QuestionQuestionEqualsToken", "??="),
    ("InterpolatedStringStartToken", "$\""),
    ("InterpolatedVerbatimStringStartToken", "$@\""),
    ("InterpolatedStringEndToken", "\""),
];

// Keyword kinds are spelled `<Word>Keyword`; the text is listed once here.
const KEYWORDS: &[(&str, &str)] = &[
    ("Bool", "bool"),
    ("Byte", "byte"),
    ("SByte", "sbyte"),
    ("Short", "short"),
    ("UShort", "ushort"),
    ("Int", "int"),
    ("UInt", "uint"),
    ("Long", "long"),
    ("ULong", "ulong"),
    ("Double", "double"),
    ("Float", "float"),
    ("Decimal", "decimal"),
    ("String", "string"),
    ("Char", "char"),
    ("Void", "void"),
    ("Object", "object"),
    ("TypeOf", "typeof"),
    ("SizeOf", "sizeof"),
    ("Null", "null"),
    ("True", "true"),
    ("False", "false"),
    ("If", "if"),
    ("Else", "else"),
    ("While", "while"),
    ("For", "for"),
    ("ForEach", "foreach"),
    ("Do", "do"),
    ("Switch", "switch"),
    ("Case", "case"),
    ("Default", "default"),
    ("Try", "try"),
    ("Catch", "catch"),
    ("Finally", "finally"),
    ("Lock", "lock"),
    ("Goto", "goto"),
    ("Break", "break"),
    ("Continue", "continue"),
    ("Return", "return"),
    ("Throw", "throw"),
    ("Public", "public"),
    ("Private", "private"),
    ("Internal", "internal"),
    ("Protected", "protected"),
    ("Static", "static"),
    ("ReadOnly", "readonly"),
    ("Sealed", "sealed"),
    ("Const", "const"),
    ("Fixed", "fixed"),
    ("StackAlloc", "stackalloc"),
    ("Volatile", "volatile"),
    ("New", "new"),
    ("Override", "override"),
    ("Abstract", "abstract"),
    ("Virtual", "virtual"),
    ("Event", "event"),
    ("Extern", "extern"),
    ("Ref", "ref"),
    ("Out", "out"),
    ("In", "in"),
    ("Is", "is"),
    ("As", "as"),
    ("Params", "params"),
    ("ArgList", "__arglist"),
    ("MakeRef", "__makeref"),
    ("RefType", "__reftype"),
    ("RefValue", "__refvalue"),
    ("This", "this"),
    ("Base", "base"),
    ("Namespace", "namespace"),
    ("Using", "using"),
    ("Class", "class"),
    ("Struct", "struct"),
    ("Interface", "interface"),
    ("Enum", "enum"),
    ("Delegate", "delegate"),
    ("Checked", "checked"),
    ("Unchecked", "unchecked"),
    ("Unsafe", "unsafe"),
    ("Operator", "operator"),
    ("Explicit", "explicit"),
    ("Implicit", "implicit"),
    // contextual
    ("Yield", "yield"),
    ("Partial", "partial"),
    ("Alias", "alias"),
    ("Global", "global"),
    ("Assembly", "assembly"),
    ("Module", "module"),
    ("Type", "type"),
    ("Field", "field"),
    ("Method", "method"),
    ("Param", "param"),
    ("Property", "property"),
    ("TypeVar", "typevar"),
    ("Get", "get"),
    ("Set", "set"),
    ("Add", "add"),
    ("Remove", "remove"),
    ("Where", "where"),
    ("From", "from"),
    ("Group", "group"),
    ("Join", "join"),
    ("Into", "into"),
    ("Let", "let"),
    ("By", "by"),
    ("Select", "select"),
    ("OrderBy", "orderby"),
    ("On", "on"),
    ("Equals", "equals"),
    ("Ascending", "ascending"),
    ("Descending", "descending"),
    ("NameOf", "nameof"),
    ("Async", "async"),
    ("Await", "await"),
    ("When", "when"),
    ("Or", "or"),
    ("And", "and"),
    ("Not", "not"),
    ("With", "with"),
    ("Init", "init"),
    ("Record", "record"),
    ("Managed", "managed"),
    ("Unmanaged", "unmanaged"),
    ("Required", "required"),
    ("Scoped", "scoped"),
    ("File", "file"),
    ("Var", "var"),
    // preprocessor
    ("Elif", "elif"),
    ("EndIf", "endif"),
    ("Region", "region"),
    ("EndRegion", "endregion"),
    ("Define", "define"),
    ("Undef", "undef"),
    ("Warning", "warning"),
    ("Error", "error"),
    ("Line", "line"),
    ("Pragma", "pragma"),
    ("Hidden", "hidden"),
    ("Checksum", "checksum"),
    ("Disable", "disable"),
    ("Restore", "restore"),
    ("Reference", "r"),
    ("Load", "load"),
    ("Nullable", "nullable"),
    ("Enable", "enable"),
    ("Warnings", "warnings"),
    ("Annotations", "annotations"),
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn token_kinds() -> Vec<TokenKind> {
    let punctuation = PUNCTUATION
        .iter()
        .map(|(name, text)| TokenKind::new(*name, *text));
    let keywords = KEYWORDS
        .iter()
        .map(|(word, text)| TokenKind::new(format!("{word}Keyword"), *text));
    punctuation.chain(keywords).collect()
}

impl GeneratorConfig {
    /// The configuration for a C#-flavoured syntax schema.
    #[must_use]
    pub fn csharp() -> Self {
        Self {
            grammar_name: "csharp".to_string(),
            root_type: "CSharpSyntaxNode".to_string(),
            rule_suffix: "Syntax".to_string(),
            token_type: "SyntaxToken".to_string(),
            major_sections: strings(MAJOR_SECTIONS),
            lexical_rules: strings(LEXICAL_RULES),
            modifier_names: strings(MODIFIERS),
            token_kinds: token_kinds(),
            special_tokens: SpecialTokens {
                end_of_file: "EndOfFileToken".to_string(),
                dropped: strings(&["EndOfDirectiveToken", "EndOfDocumentationCommentToken"]),
                omitted: strings(&["OmittedTypeArgumentToken", "OmittedArraySizeExpressionToken"]),
            },
            list_fields: ListFields {
                commas: "Commas".to_string(),
                modifiers: "Modifiers".to_string(),
                modifier_rule: "Modifier".to_string(),
                tokens: "Tokens".to_string(),
                token_rule: "Token".to_string(),
                text_tokens: "TextTokens".to_string(),
                text_token_rule: "XmlTextLiteralToken".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_token_names_unique() {
        let kinds = token_kinds();
        let names: HashSet<_> = kinds.iter().map(|k| k.name.as_str()).collect();
        assert_eq!(names.len(), kinds.len());
        assert!(kinds.iter().all(|k| !k.text.is_empty()));
    }

    #[test]
    fn test_keyword_spelling() {
        let config = GeneratorConfig::csharp();
        assert_eq!(config.token_text("BreakKeyword"), Some("break"));
        assert_eq!(config.token_text("ReadOnlyKeyword"), Some("readonly"));
    }
}
