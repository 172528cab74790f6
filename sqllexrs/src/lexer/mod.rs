//! MySQL lexical analysis: keyword tables, tokenizer and identifier rules.

use std::borrow::Cow;

use crate::LexError;

mod chars;
mod identifier;
mod keywords;
mod tokenizer;


pub use keywords::{
    Categories, KeywordTables, MysqlVersion, COLUMN_ATTRIBUTES, COLUMN_TYPES, FORBIDDEN_WORDS,
    FUNCTION_NAMES, RESERVED_WORDS, RESERVED_WORDS_5_6,
};
pub use tokenizer::{Token, TokenKind};

use tokenizer::{validate_delimiter, Tokenizer};

/// Configurable lexer handle.
///
/// Holds the statement delimiter, the whitespace policy and the keyword
/// table set; tokenization itself is stateless across calls, so one
/// `Lexer` may serve arbitrarily many concurrent callers.
///
/// # Examples
///
/// ```
/// use sqllexrs::{Lexer, TokenKind};
///
/// let lexer = Lexer::new().with_delimiter("//");
/// let tokens = lexer.tokenize("SELECT 1// SELECT 2//")?;
/// let statements = tokens.iter().filter(|t| t.kind == TokenKind::Delimiter).count();
/// assert_eq!(statements, 2);
/// # Ok::<(), sqllexrs::LexError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Lexer {
    delimiter: String,
    preserve_whitespace: bool,
    tables: Cow<'static, KeywordTables>,
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexer {
    /// A lexer with the `";"` delimiter, whitespace skipping and the
    /// builtin MySQL 5.5 tables.
    pub fn new() -> Self {
        Self {
            delimiter: ";".to_owned(),
            preserve_whitespace: false,
            tables: Cow::Borrowed(KeywordTables::builtin()),
        }
    }

    /// Overrides the statement delimiter; multi-character strings are
    /// fine. Validation happens on the next [`Lexer::tokenize`] call.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Emit whitespace runs as tokens instead of skipping them. Syntax
    /// highlighters want this on; pure classification wants it off.
    pub fn preserve_whitespace(mut self, preserve: bool) -> Self {
        self.preserve_whitespace = preserve;
        self
    }

    /// Selects a builtin table variant by MySQL release.
    pub fn with_version(mut self, version: MysqlVersion) -> Self {
        self.tables = match version {
            MysqlVersion::V5_5 => Cow::Borrowed(KeywordTables::builtin()),
            MysqlVersion::V5_6 => Cow::Owned(KeywordTables::mysql_5_6()),
        };
        self
    }

    /// Installs a caller-supplied table set, e.g. one built with
    /// [`KeywordTables::from_word_lists`].
    pub fn with_tables(mut self, tables: KeywordTables) -> Self {
        self.tables = Cow::Owned(tables);
        self
    }

    /// The table set this lexer classifies against.
    pub fn tables(&self) -> &KeywordTables {
        &self.tables
    }

    /// Splits `sql` into its classified token stream.
    ///
    /// With whitespace preserved the tokens partition the input exactly;
    /// otherwise whitespace runs are dropped and everything else keeps its
    /// byte offsets. Fails on unterminated quotes/comments and on invalid
    /// delimiter configuration; errors carry the offending offset.
    pub fn tokenize<'a>(&self, sql: &'a str) -> Result<Vec<Token<'a>>, LexError> {
        validate_delimiter(self.delimiter.as_bytes())?;
        Tokenizer::new(
            sql,
            self.delimiter.as_bytes(),
            self.preserve_whitespace,
            self.tables.as_ref(),
        )
        .tokenize()
    }

    /// Whether `text` is a reserved word under this lexer's tables.
    pub fn is_reserved_word(&self, text: &str) -> bool {
        self.tables.contains(Categories::RESERVED, text)
    }

    /// Whether `identifier` needs backtick quoting under this lexer's
    /// tables (reserved/forbidden collision, unsafe characters, leading
    /// digit or empty).
    pub fn requires_quoting(&self, identifier: &str) -> bool {
        identifier::requires_quoting(self.tables.as_ref(), identifier)
    }

    /// Backtick-quotes `identifier` when [`Lexer::requires_quoting`] says
    /// it needs it; otherwise returns it borrowed and untouched.
    pub fn quote_identifier<'a>(&self, identifier: &'a str) -> Cow<'a, str> {
        identifier::quote(self.tables.as_ref(), identifier)
    }
}
