mod roundtrip_tests;
mod statement_tests;
