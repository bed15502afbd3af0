//! Procedural macros for sift.
//!
//! # Macros
//!
//! - [`Record`] - Derive the field table a `ConditionSet` filters on
//!
//! # Example
//!
//! ```rust,ignore
//! #[derive(sift::Record)]
//! struct User {
//!     id: i64,
//!     #[sift(rename = "EmailAddress")]
//!     email: String,
//!     nickname: Option<String>,
//!     #[sift(skip)]
//!     roles: Vec<String>,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive `sift::Record` for a struct with named fields.
///
/// Every field must implement `sift::FieldKind` unless it is skipped. Field
/// names default to the Rust identifier and are matched against raw input
/// ignoring case.
///
/// For each field an associated `FieldKey` constant is generated, named
/// after the field in upper snake case (`created_at` becomes `CREATED_AT`).
///
/// # Attributes
///
/// ## Struct-level
/// - `#[sift(crate = "path")]` - Path to the sift crate (default `::sift`)
///
/// ## Field-level
/// - `#[sift(rename = "Name")]` - Match raw keys against a different name
/// - `#[sift(skip)]` - Leave the field out of the table
///
/// # Example
///
/// ```rust,ignore
/// #[derive(sift::Record)]
/// struct Order {
///     number: String,
///     total: rust_decimal::Decimal,
///     placed_at: chrono::DateTime<chrono::Utc>,
/// }
///
/// let mut set = ConditionSet::<Order>::from_query_str("total=100");
/// set.operator_for(Order::TOTAL, Operator::GreaterThanOrEqual)?;
/// ```
#[proc_macro_derive(Record, attributes(sift))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive::derive_record_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
