//! # Sift
//!
//! Typed filter predicates built from loosely-typed key/value input.
//!
//! Sift provides:
//! - `#[derive(Record)]` to describe which fields of a struct can be filtered
//! - Condition sets built from query strings, JSON objects, or raw pairs
//! - Per-field operator selection and removal
//! - AND/OR folding into a single reusable, thread-safe predicate
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sift::prelude::*;
//!
//! #[derive(Debug, Record)]
//! pub struct Product {
//!     pub name: String,
//!     pub price: f64,
//!     pub in_stock: bool,
//! }
//!
//! fn search(query: &str, catalog: &[Product]) -> QueryResult<Vec<&Product>> {
//!     let mut conditions = ConditionSet::<Product>::from_query_str(query);
//!     conditions
//!         .operator_for(Product::NAME, Operator::Contains)?
//!         .operator_for(Product::PRICE, Operator::LessThanOrEqual)?;
//!
//!     let predicate = conditions.to_and_predicate()?;
//!     Ok(predicate.filter(catalog))
//! }
//!
//! // "name=lamp&price=40&in_stock=true&page=2"
//! // keeps in-stock products whose name contains "lamp" and that cost at most 40.
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through `tracing` and are enabled with `SIFT_DEBUG=true`.
//! Enable the `logging` feature to let [`init_logging`] install a subscriber.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub use sift_query::*;

// Re-export proc macros
pub use sift_codegen::Record;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use sift_query::prelude::*;
    pub use sift_codegen::Record;
}
