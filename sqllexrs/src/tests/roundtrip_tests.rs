#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use crate::{Lexer, TokenKind};

const CORPUS: &[&str] = &[
    "",
    "   \t \n ",
    "SELECT * FROM t;",
    "SELECT 'a;b' FROM t;",
    "SELECT 1 /* comment ; */ FROM t;",
    "SELECT 1 -- tail ;\nFROM t;",
    "# header\nSELECT `weird``name`, 'it''s', \"dq\" FROM x;",
    r"INSERT INTO t VALUES ('a\'b', 2e3, 0xFF);",
    "DELIMITER //\nCREATE PROCEDURE p() BEGIN SELECT 1; END//\nDELIMITER ;\n",
    "SELECT a <=> b, c != d, e || f FROM t WHERE x <> 1;",
    "SELECT 'h\u{e9}llo' FROM t\u{fc}ndra;",
    "UPDATE t SET a = 1 WHERE b := 2;",
    "SELECT 1abc, 2, 3.14 FROM 9lives;",
];

#[test]
fn preserved_whitespace_reproduces_the_input() {
    let lexer = Lexer::new().preserve_whitespace(true);
    for input in CORPUS {
        let tokens = lexer.tokenize(input).unwrap();
        let rebuilt: String = tokens.iter().map(|t| t.lexeme).collect();
        assert_eq!(&rebuilt, input, "lost bytes in {input:?}");
    }
}

#[test]
fn preserved_whitespace_offsets_are_gapless() {
    let lexer = Lexer::new().preserve_whitespace(true);
    for input in CORPUS {
        let tokens = lexer.tokenize(input).unwrap();
        let mut cursor = 0;
        for token in &tokens {
            assert_eq!(token.start, cursor, "gap before {token:?} in {input:?}");
            assert!(token.end > token.start, "empty token in {input:?}");
            assert_eq!(&input[token.start..token.end], token.lexeme);
            cursor = token.end;
        }
        assert_eq!(cursor, input.len(), "tail not covered in {input:?}");
    }
}

#[test]
fn skipped_whitespace_drops_only_whitespace() {
    let plain = Lexer::new();
    let preserving = Lexer::new().preserve_whitespace(true);
    for input in CORPUS {
        let skipped = plain.tokenize(input).unwrap();
        let kept: Vec<_> = preserving
            .tokenize(input)
            .unwrap()
            .into_iter()
            .filter(|t| t.kind != TokenKind::Whitespace)
            .collect();
        assert_eq!(skipped, kept, "whitespace policy changed tokens in {input:?}");
    }
}

#[test]
fn lexemes_match_their_offsets_without_whitespace() {
    let lexer = Lexer::new();
    for input in CORPUS {
        let tokens = lexer.tokenize(input).unwrap();
        let mut cursor = 0;
        for token in &tokens {
            assert!(token.start >= cursor, "overlap at {token:?} in {input:?}");
            assert_eq!(&input[token.start..token.end], token.lexeme);
            cursor = token.end;
        }
    }
}
