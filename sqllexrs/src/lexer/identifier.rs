//! Identifier safety rules: when a name needs backtick quoting.

use std::borrow::Cow;

use crate::lexer::keywords::{Categories, KeywordTables};

// MySQL's unquoted-identifier charset.
fn is_safe_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// True when the identifier cannot be echoed into generated SQL unquoted:
/// empty, leading digit, a character outside `[A-Za-z0-9_$]`, or a
/// case-insensitive collision with a reserved or forbidden word.
pub(crate) fn requires_quoting(tables: &KeywordTables, identifier: &str) -> bool {
    if identifier.is_empty() {
        return true;
    }
    if identifier.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return true;
    }
    if !identifier.chars().all(is_safe_char) {
        return true;
    }
    tables.contains(Categories::RESERVED | Categories::FORBIDDEN, identifier)
}

/// Backtick-quotes the identifier when it needs it, doubling embedded
/// backticks; safe names come back borrowed and untouched.
pub(crate) fn quote<'a>(tables: &KeywordTables, identifier: &'a str) -> Cow<'a, str> {
    if !requires_quoting(tables, identifier) {
        return Cow::Borrowed(identifier);
    }
    let mut quoted = String::with_capacity(identifier.len() + 2);
    quoted.push('`');
    for c in identifier.chars() {
        if c == '`' {
            quoted.push('`');
        }
        quoted.push(c);
    }
    quoted.push('`');
    Cow::Owned(quoted)
}
