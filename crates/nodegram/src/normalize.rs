//! Canonicalization of `PascalCase` type names into `snake_case` rule names.

/// Converts a raw type name into its grammar rule name.
///
/// `suffix` is stripped if the name ends with it, then an underscore is
/// inserted at every word boundary and the result is lowercased:
///
/// - between an uppercase run and a following capitalized word (`IOStream` → `io_stream`),
/// - before an uppercase letter that follows anything else
///   (`BreakStatement` → `break_statement`),
/// - after a letter followed by a non-letter (`Utf8` → `utf_8`).
///
/// ```
/// use nodegram::normalize_rule_name;
///
/// assert_eq!(normalize_rule_name("BreakStatementSyntax", "Syntax"), "break_statement");
/// assert_eq!(normalize_rule_name("XmlTextLiteralToken", "Syntax"), "xml_text_literal_token");
/// ```
#[must_use]
pub fn normalize_rule_name(name: &str, suffix: &str) -> String {
    let stem = name.strip_suffix(suffix).unwrap_or(name);
    let chars: Vec<char> = stem.chars().collect();

    let mut out = String::with_capacity(stem.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && is_boundary(chars[i - 1], c, chars.get(i + 1).copied()) {
            out.push('_');
        }
        out.extend(c.to_lowercase());
    }
    out
}

fn is_boundary(prev: char, cur: char, next: Option<char>) -> bool {
    let acronym_end = prev.is_ascii_uppercase()
        && cur.is_ascii_uppercase()
        && next.is_some_and(|n| n.is_ascii_lowercase());
    let word_start = !prev.is_ascii_uppercase() && cur.is_ascii_uppercase();
    let word_end = prev.is_ascii_alphabetic() && !cur.is_ascii_alphabetic();

    acronym_end || word_start || word_end
}
