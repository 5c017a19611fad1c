//! Shared fixtures for unit tests.

use serde_json::json;
use wordroll_core::{Wordlist, WORDLIST_SIZE};

/// A valid 7776-entry list: `w0`, `w1`, ... `w7775`.
pub fn synthetic_wordlist() -> Wordlist {
    Wordlist::from_words((0..WORDLIST_SIZE).map(|i| format!("w{i}")).collect()).unwrap()
}

/// A successful `generateIntegers` response carrying `data`.
pub fn integers_body(data: &[i64]) -> serde_json::Value {
    json!({
        "jsonrpc": "2.0",
        "result": {
            "random": { "data": data, "completionTime": "2026-10-19 12:00:00Z" },
            "bitsUsed": 13,
            "bitsLeft": 249987,
            "requestsLeft": 999,
            "advisoryDelay": 0
        },
        "id": 42
    })
}
