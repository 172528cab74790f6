#![no_main]
use libfuzzer_sys::fuzz_target;
use sqllexrs::Lexer;

fuzz_target!(|data: &[u8]| {
    let Ok(sql) = std::str::from_utf8(data) else {
        return;
    };
    // With whitespace preserved, a successful tokenization partitions the
    // input exactly.
    let lexer = Lexer::new().preserve_whitespace(true);
    if let Ok(tokens) = lexer.tokenize(sql) {
        let rebuilt: String = tokens.iter().map(|t| t.lexeme).collect();
        assert_eq!(rebuilt, sql);
    }
});
