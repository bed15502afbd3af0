//! Fuzz target for condition set configuration.
//!
//! Generates raw pairs with arbitrary JSON-like values, applies arbitrary
//! operator overrides and removals, then builds and evaluates predicates.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_condition_set
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use serde_json::Value;
use sift::{ConditionSet, Operator, Record};

#[derive(Debug, Default, Record)]
struct Account {
    name: String,
    balance: f64,
    visits: i64,
    active: bool,
    referrer: Option<String>,
}

/// A fuzzable raw value.
#[derive(Debug, Arbitrary)]
enum FuzzValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<String>),
}

impl From<FuzzValue> for Value {
    fn from(val: FuzzValue) -> Self {
        match val {
            FuzzValue::Null => Value::Null,
            FuzzValue::Bool(b) => Value::Bool(b),
            FuzzValue::Int(i) => Value::from(i),
            FuzzValue::Float(f) => Value::from(f),
            FuzzValue::Text(s) => Value::String(s),
            FuzzValue::List(items) => Value::from(items),
        }
    }
}

/// A fuzzable configuration step.
#[derive(Debug, Arbitrary)]
enum FuzzStep {
    Ignore(String),
    Operator(String, u8),
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    pairs: Vec<(String, FuzzValue)>,
    steps: Vec<FuzzStep>,
    record: (String, f64, i64, bool, Option<String>),
}

fuzz_target!(|input: FuzzInput| {
    let pairs = input.pairs.into_iter().map(|(k, v)| (k, Value::from(v)));
    let mut set = ConditionSet::<Account>::new(pairs);

    for step in input.steps.into_iter().take(16) {
        let _ = match step {
            FuzzStep::Ignore(selector) => set.ignore_for(selector).map(|_| ()),
            FuzzStep::Operator(selector, op) => {
                let operator = Operator::ALL[op as usize % Operator::ALL.len()];
                set.operator_for(selector, operator).map(|_| ())
            }
        };
    }

    let (name, balance, visits, active, referrer) = input.record;
    let account = Account {
        name,
        balance,
        visits,
        active,
        referrer,
    };

    if let Ok(predicate) = set.to_and_predicate() {
        let _ = predicate.evaluate(&account);
    }
    if let Ok(predicate) = set.to_or_predicate() {
        let _ = predicate.evaluate(&account);
    }
});
