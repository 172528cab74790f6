use sqllexrs::{quote_identifier, requires_quoting, tokenize};

fn main() {
    let statements = [
        ("SELECT * FROM users WHERE id = 1;", "Plain query"),
        ("SELECT 'a;b' FROM t;", "Delimiter inside a string"),
        ("DELIMITER //\nSELECT 1//", "Delimiter directive"),
        ("SELECT 'oops", "Unterminated literal"),
    ];

    println!("=== Tokenization ===");
    for (sql, description) in &statements {
        println!("\n{}: {:?}", description, sql);
        match tokenize(sql) {
            Ok(tokens) => {
                for token in tokens {
                    println!(
                        "  {:>3}..{:<3} {:<18} {:?}",
                        token.start,
                        token.end,
                        token.kind.name(),
                        token.lexeme
                    );
                }
            }
            Err(err) => println!("  error: {err}"),
        }
    }

    println!("\n=== Identifier quoting ===");
    for identifier in ["customers", "order", "my-table", "1abc"] {
        println!(
            "  {:<10} requires_quoting={:<5} quoted={}",
            identifier,
            requires_quoting(identifier),
            quote_identifier(identifier)
        );
    }
}
