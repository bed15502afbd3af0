//! # sift-query
//!
//! Turn loosely-typed name/value input into typed, composable record filters.
//!
//! A [`ConditionSet`] is built from raw pairs, such as query-string parameters
//! or a JSON object. Each pair whose name matches a field of the target
//! [`Record`] becomes a [`Condition`]; the rest are ignored. Conditions can
//! then be dropped or re-targeted to another [`Operator`] per field, and the
//! whole set is folded into one [`Predicate`] with AND or OR.
//!
//! ```rust,ignore
//! use sift::prelude::*;
//!
//! #[derive(Record)]
//! struct Person {
//!     name: String,
//!     age: i32,
//! }
//!
//! let mut set = ConditionSet::<Person>::from_query_str("name=Ali&age=30&page=2");
//! set.operator_for(Person::NAME, Operator::StartsWith)?;
//! set.operator_for(Person::AGE, Operator::LessThan)?;
//!
//! let predicate = set.to_and_predicate()?;
//! let matches: Vec<&Person> = people.iter().filter(|p| predicate.evaluate(p)).collect();
//! ```
//!
//! ## Values
//!
//! Raw values are [`serde_json::Value`]s and stay untyped until a predicate is
//! built. At that point each is coerced to its field's [`FieldType`]:
//!
//! ```rust
//! use serde_json::json;
//! use sift_query::value::coerce;
//! use sift_query::{FieldType, FieldValue};
//!
//! assert_eq!(coerce(&json!("42"), FieldType::Int, false).unwrap(), FieldValue::Int(42));
//! assert_eq!(coerce(&json!(""), FieldType::Int, true).unwrap(), FieldValue::Null);
//! assert!(coerce(&json!("forty"), FieldType::Int, false).is_err());
//! ```
//!
//! ## Operators
//!
//! ```rust
//! use sift_query::Operator;
//!
//! let op: Operator = "gte".parse().unwrap();
//! assert_eq!(op, Operator::GreaterThanOrEqual);
//! assert_eq!(op.to_string(), ">=");
//! ```
//!
//! ## Errors
//!
//! Selectors that name no field fail with [`ErrorCode::InvalidSelector`].
//! Coercion and operator/type mismatches fail when the predicate is built,
//! never while it is evaluated.

pub mod condition;
pub mod condition_set;
pub mod config;
pub mod error;
pub mod field;
pub mod logging;
pub mod operator;
pub mod predicate;
pub mod value;

pub use condition::Condition;
pub use condition_set::ConditionSet;
pub use config::ParseOptions;
pub use error::{ErrorCode, ErrorContext, QueryError, QueryResult, Suggestion};
pub use field::{Field, FieldKey, FieldSelector, FieldSet, Record};
pub use operator::Operator;
pub use predicate::Predicate;
pub use value::{FieldKind, FieldType, FieldValue};

// Re-export logging utilities
pub use logging::{get_log_format, get_log_level, init as init_logging, init_debug, init_with_level, is_debug_enabled};

// Used by the logging macros
#[doc(hidden)]
pub use tracing;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::condition::Condition;
    pub use crate::condition_set::ConditionSet;
    pub use crate::config::ParseOptions;
    pub use crate::error::{QueryError, QueryResult};
    pub use crate::field::{FieldKey, FieldSelector, Record};
    pub use crate::operator::Operator;
    pub use crate::predicate::Predicate;
    pub use crate::value::{FieldType, FieldValue};
}
