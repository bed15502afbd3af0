//! Fuzz target for query-string decoding.
//!
//! Arbitrary bytes are decoded as a query string and folded both ways.
//! Coercion failures are expected; panics are not.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_query_string
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use sift::{ConditionSet, Record};

#[derive(Debug, Default, Record)]
struct Account {
    name: String,
    balance: f64,
    visits: i64,
    active: bool,
    referrer: Option<String>,
}

fuzz_target!(|data: &[u8]| {
    let Ok(query) = std::str::from_utf8(data) else {
        return;
    };

    let set = ConditionSet::<Account>::from_query_str(query);
    let account = Account::default();

    if let Ok(predicate) = set.to_and_predicate() {
        let _ = predicate.evaluate(&account);
    }
    if let Ok(predicate) = set.to_or_predicate() {
        let _ = predicate.evaluate(&account);
    }
});
