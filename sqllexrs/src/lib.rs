#![doc = include_str!("../README.md")]
//!
//! ## API Guide
//!
//! Most callers want the top-level functions, which run against the
//! builtin MySQL 5.5 tables:
//!
//! - [`tokenize`] - split a statement or script into classified tokens
//! - [`is_reserved_word`] - reserved-word membership test
//! - [`requires_quoting`] - does an identifier need backtick quoting?
//! - [`quote_identifier`] - backtick-quote an identifier when needed
//!
//! Callers that need a non-default delimiter, preserved whitespace, a
//! different MySQL release's word lists or custom tables build a
//! [`Lexer`] instead:
//!
//! - [`Lexer`] - configurable handle over the same operations
//! - [`KeywordTables`] - the classification tables themselves
//!
//! The tables are immutable once built and safe to share across threads;
//! every tokenization call owns its own scan state.

use std::borrow::Cow;

pub mod lexer;

#[cfg(test)]
mod tests;

pub use lexer::{Categories, KeywordTables, Lexer, MysqlVersion, Token, TokenKind};

/// A failed tokenization.
///
/// Lexing errors are terminal for the call - there is no partial-result
/// recovery - and carry the byte offset where the offending construct
/// opened, so a UI can highlight the exact failure location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A quote opened and never closed.
    #[error("unterminated string or quoted identifier opened at byte {offset}")]
    UnterminatedLiteral { offset: usize },
    /// A block comment opened and never closed.
    #[error("unterminated block comment opened at byte {offset}")]
    UnterminatedComment { offset: usize },
    /// The configured delimiter (or a mid-stream `DELIMITER` directive
    /// argument) is empty or collides with quote/comment rules.
    #[error("invalid delimiter: {reason}")]
    InvalidDelimiter { reason: &'static str },
}

/// Splits `sql` into classified tokens with the default configuration:
/// `";"` delimiter, whitespace skipped, builtin MySQL 5.5 tables.
///
/// # Examples
///
/// ```
/// use sqllexrs::{tokenize, TokenKind};
///
/// let tokens = tokenize("SELECT * FROM t;")?;
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Keyword,
///         TokenKind::Operator,
///         TokenKind::Keyword,
///         TokenKind::Identifier,
///         TokenKind::Delimiter,
///     ]
/// );
/// # Ok::<(), sqllexrs::LexError>(())
/// ```
pub fn tokenize(sql: &str) -> Result<Vec<Token<'_>>, LexError> {
    Lexer::new().tokenize(sql)
}

/// Whether `text` is a MySQL reserved word, matched case-insensitively.
///
/// # Examples
///
/// ```
/// use sqllexrs::is_reserved_word;
///
/// assert!(is_reserved_word("select"));
/// assert!(is_reserved_word("SeLeCt"));
/// assert!(!is_reserved_word("customers"));
/// ```
pub fn is_reserved_word(text: &str) -> bool {
    Lexer::new().is_reserved_word(text)
}

/// Whether `identifier` must be backtick-quoted before being echoed into
/// generated SQL.
///
/// # Examples
///
/// ```
/// use sqllexrs::requires_quoting;
///
/// assert!(!requires_quoting("my_table"));
/// assert!(requires_quoting("my-table")); // unsafe character
/// assert!(requires_quoting("1abc")); // leading digit
/// assert!(requires_quoting("order")); // reserved word
/// ```
pub fn requires_quoting(identifier: &str) -> bool {
    Lexer::new().requires_quoting(identifier)
}

/// Backtick-quotes `identifier` when it needs quoting, doubling embedded
/// backticks; safe names come back borrowed and untouched.
///
/// # Examples
///
/// ```
/// use sqllexrs::quote_identifier;
///
/// assert_eq!(quote_identifier("my_table"), "my_table");
/// assert_eq!(quote_identifier("my table"), "`my table`");
/// assert_eq!(quote_identifier("a`b"), "`a``b`");
/// ```
pub fn quote_identifier(identifier: &str) -> Cow<'_, str> {
    Lexer::new().quote_identifier(identifier)
}

/// Returns the version of the sqllexrs library.
///
/// # Examples
///
/// ```
/// use sqllexrs::version;
///
/// println!("sqllexrs version: {}", version());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
