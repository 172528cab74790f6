#![no_main]
use libfuzzer_sys::fuzz_target;
use sqllexrs::tokenize;

fuzz_target!(|data: &[u8]| {
    // Tokenization must never panic on arbitrary UTF-8 input.
    if let Ok(sql) = std::str::from_utf8(data) {
        let _ = tokenize(sql);
    }
});
