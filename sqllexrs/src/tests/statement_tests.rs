#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use crate::{tokenize, LexError, Lexer, TokenKind};

fn kinds(sql: &str) -> Vec<TokenKind> {
    tokenize(sql).unwrap().iter().map(|t| t.kind).collect()
}

#[test]
fn select_star_classification_and_offsets() {
    let tokens = tokenize("SELECT * FROM t;").unwrap();
    let summary: Vec<_> = tokens
        .iter()
        .map(|t| (t.kind, t.lexeme, t.start, t.end))
        .collect();
    assert_eq!(
        summary,
        [
            (TokenKind::Keyword, "SELECT", 0, 6),
            (TokenKind::Operator, "*", 7, 8),
            (TokenKind::Keyword, "FROM", 9, 13),
            (TokenKind::Identifier, "t", 14, 15),
            (TokenKind::Delimiter, ";", 15, 16),
        ]
    );
}

#[test]
fn semicolon_inside_string_does_not_split() {
    let tokens = tokenize("SELECT 'a;b' FROM t;").unwrap();
    let strings: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::StringLiteral)
        .collect();
    assert_eq!(strings.len(), 1);
    assert_eq!(strings[0].lexeme, "'a;b'");
    assert_eq!((strings[0].start, strings[0].end), (7, 12));
    let delimiters: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Delimiter)
        .collect();
    assert_eq!(delimiters.len(), 1);
    assert_eq!(delimiters[0].start, 19);
}

#[test]
fn semicolon_inside_block_comment_does_not_split() {
    let tokens = tokenize("SELECT 1 /* comment ; */ FROM t;").unwrap();
    let comments: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Comment)
        .collect();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].lexeme, "/* comment ; */");
    assert_eq!((comments[0].start, comments[0].end), (9, 24));
    let delimiters = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Delimiter)
        .count();
    assert_eq!(delimiters, 1);
}

#[test]
fn unterminated_string_reports_opening_offset() {
    assert_eq!(
        tokenize("SELECT 'unterminated"),
        Err(LexError::UnterminatedLiteral { offset: 7 })
    );
}

#[test]
fn unterminated_backtick_reports_opening_offset() {
    assert_eq!(
        tokenize("SELECT `broken"),
        Err(LexError::UnterminatedLiteral { offset: 7 })
    );
}

#[test]
fn unterminated_block_comment_reports_opening_offset() {
    assert_eq!(
        tokenize("SELECT /* never closed"),
        Err(LexError::UnterminatedComment { offset: 7 })
    );
}

#[test]
fn multi_character_delimiter_splits_statements() {
    let lexer = Lexer::new().with_delimiter("//");
    let tokens = lexer.tokenize("SELECT 1// SELECT 2//").unwrap();
    let delimiters: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Delimiter)
        .map(|t| (t.lexeme, t.start))
        .collect();
    assert_eq!(delimiters, [("//", 8), ("//", 19)]);
}

#[test]
fn doubled_quote_escapes_inside_string() {
    let tokens = tokenize("SELECT 'it''s';").unwrap();
    assert_eq!(tokens[1].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[1].lexeme, "'it''s'");
    assert_eq!(tokens[2].kind, TokenKind::Delimiter);
}

#[test]
fn backslash_escapes_inside_string() {
    let tokens = tokenize(r"SELECT 'a\'b';").unwrap();
    assert_eq!(tokens[1].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[1].lexeme, r"'a\'b'");
}

#[test]
fn backslash_escapes_inside_backticks() {
    let tokens = tokenize(r"SELECT `a\`b`;").unwrap();
    assert_eq!(tokens[1].kind, TokenKind::QuotedIdentifier);
    assert_eq!(tokens[1].lexeme, r"`a\`b`");
}

#[test]
fn line_comment_swallows_semicolon() {
    let tokens = tokenize("SELECT 1 -- tail ;\nFROM t;").unwrap();
    let comments: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Comment)
        .collect();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].lexeme, "-- tail ;");
    let delimiters = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Delimiter)
        .count();
    assert_eq!(delimiters, 1);
}

#[test]
fn double_dash_without_whitespace_is_two_operators() {
    assert_eq!(
        kinds("SELECT 1--2;"),
        [
            TokenKind::Keyword,
            TokenKind::Number,
            TokenKind::Operator,
            TokenKind::Operator,
            TokenKind::Number,
            TokenKind::Delimiter,
        ]
    );
}

#[test]
fn double_dash_at_end_of_input_is_a_comment() {
    let tokens = tokenize("SELECT 1 --").unwrap();
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Comment));
}

#[test]
fn hash_opens_a_line_comment() {
    let tokens = tokenize("# top\nSELECT 1;").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Comment);
    assert_eq!(tokens[0].lexeme, "# top");
    assert_eq!(tokens[1].kind, TokenKind::Keyword);
}

#[test]
fn backtick_quoted_identifier_keeps_quotes() {
    let tokens = tokenize("SELECT `from` FROM t;").unwrap();
    assert_eq!(tokens[1].kind, TokenKind::QuotedIdentifier);
    assert_eq!(tokens[1].lexeme, "`from`");
    assert_eq!((tokens[1].start, tokens[1].end), (7, 13));
}

#[test]
fn delimiter_directive_switches_mid_script() {
    let sql = "DELIMITER //\nSELECT 1//\nDELIMITER ;\nSELECT 2;";
    let tokens = tokenize(sql).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Keyword);
    assert_eq!(tokens[0].lexeme, "DELIMITER");
    let delimiters: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Delimiter)
        .map(|t| t.lexeme)
        .collect();
    // Directive arguments and statement terminators both surface as
    // delimiter tokens.
    assert_eq!(delimiters, ["//", "//", ";", ";"]);
}

#[test]
fn delimiter_directive_is_case_insensitive() {
    let tokens = tokenize("delimiter $$\nSELECT 1$$").unwrap();
    let delimiters = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Delimiter)
        .count();
    assert_eq!(delimiters, 2);
}

#[test]
fn word_class_delimiter_still_splits_adjacent_words() {
    let lexer = Lexer::new().with_delimiter("$$");
    let tokens = lexer.tokenize("END$$").unwrap();
    let summary: Vec<_> = tokens.iter().map(|t| (t.kind, t.lexeme)).collect();
    assert_eq!(
        summary,
        [(TokenKind::Keyword, "END"), (TokenKind::Delimiter, "$$")]
    );
}

#[test]
fn delimiter_word_mid_statement_is_a_plain_identifier() {
    let tokens = tokenize("SELECT delimiter FROM t;").unwrap();
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].lexeme, "delimiter");
}

#[test]
fn delimiter_directive_without_argument_fails() {
    assert!(matches!(
        tokenize("DELIMITER \nSELECT 1;"),
        Err(LexError::InvalidDelimiter { .. })
    ));
}

#[test]
fn invalid_configured_delimiters_fail() {
    for delimiter in ["", "a b", "'", "--", "/*x", "#"] {
        let lexer = Lexer::new().with_delimiter(delimiter);
        assert!(
            matches!(
                lexer.tokenize("SELECT 1"),
                Err(LexError::InvalidDelimiter { .. })
            ),
            "delimiter {delimiter:?} should be rejected"
        );
    }
}

#[test]
fn digit_leading_identifier_is_one_token() {
    let tokens = tokenize("SELECT 1abc;").unwrap();
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].lexeme, "1abc");
}

#[test]
fn numeric_literal_forms() {
    let tokens = tokenize("SELECT 1, 1.5, 2e3, 1.5e-2, 0xFF;").unwrap();
    let numbers: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Number)
        .map(|t| t.lexeme)
        .collect();
    assert_eq!(numbers, ["1", "1.5", "2e3", "1.5e-2", "0xFF"]);
}

#[test]
fn dot_before_non_digit_stays_an_operator() {
    let tokens = tokenize("SELECT t.col FROM t;").unwrap();
    let summary: Vec<_> = tokens.iter().map(|t| (t.kind, t.lexeme)).collect();
    assert_eq!(summary[1], (TokenKind::Identifier, "t"));
    assert_eq!(summary[2], (TokenKind::Operator, "."));
    assert_eq!(summary[3], (TokenKind::Identifier, "col"));
}

#[test]
fn multi_byte_operators_take_longest_match() {
    let tokens = tokenize("a <=> b != c <> d || e << 2").unwrap();
    let operators: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Operator)
        .map(|t| t.lexeme)
        .collect();
    assert_eq!(operators, ["<=>", "!=", "<>", "||", "<<"]);
}

#[test]
fn keyword_function_and_type_kinds() {
    let tokens = tokenize("SELECT COUNT(c) FROM t;").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Keyword);
    assert_eq!(tokens[1].kind, TokenKind::Function);
    assert_eq!(tokens[1].lexeme, "COUNT");

    let tokens = tokenize("CREATE TABLE t (c INT, n VARCHAR(10));").unwrap();
    let types: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Type)
        .map(|t| t.lexeme)
        .collect();
    assert_eq!(types, ["INT", "VARCHAR"]);
}

#[test]
fn classification_is_position_independent() {
    // The same bare word classifies the same wherever it appears.
    let tokens = tokenize("select select;").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Keyword);
    assert_eq!(tokens[1].kind, TokenKind::Keyword);
}

#[test]
fn empty_input_yields_no_tokens() {
    assert!(tokenize("").unwrap().is_empty());
}

#[test]
fn whitespace_only_input() {
    assert!(tokenize("  \t\n").unwrap().is_empty());
    let tokens = Lexer::new()
        .preserve_whitespace(true)
        .tokenize("  \t\n")
        .unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Whitespace);
}

#[test]
fn version_variant_changes_token_kind() {
    use crate::MysqlVersion;

    let sql = "SELECT get FROM t;";
    let v55 = Lexer::new().tokenize(sql).unwrap();
    assert_eq!(v55[1].kind, TokenKind::Identifier);
    let v56 = Lexer::new()
        .with_version(MysqlVersion::V5_6)
        .tokenize(sql)
        .unwrap();
    assert_eq!(v56[1].kind, TokenKind::Keyword);
}
