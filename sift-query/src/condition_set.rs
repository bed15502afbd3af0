//! Ordered sets of conditions folded into one predicate.
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
//! let mut set = ConditionSet::<Person>::new([("Name", "Alice"), ("Age", "30"), ("page", "2")]);
//! set.operator_for(Person::AGE, Operator::GreaterThanOrEqual)?;
//!
//! let predicate = set.to_and_predicate()?;
//! let adults_named_alice = predicate.filter(&people);
//! ```

use std::fmt;

use serde_json::{Map, Value};
use smallvec::SmallVec;

use crate::condition::Condition;
use crate::config::ParseOptions;
use crate::error::QueryResult;
use crate::field::{FieldSelector, Record};
use crate::operator::Operator;
use crate::predicate::Predicate;

/// Inline capacity before conditions spill to the heap.
const INLINE_CONDITIONS: usize = 8;

/// An ordered collection of conditions over `T`.
///
/// Several conditions may target the same field; each is evaluated on its own.
pub struct ConditionSet<T: 'static> {
    conditions: SmallVec<[Condition<T>; INLINE_CONDITIONS]>,
}

impl<T: Record> ConditionSet<T> {
    /// Build a set from raw `(name, value)` pairs.
    ///
    /// Names are matched to fields of `T` ignoring case. Each match becomes an
    /// `Equals` condition holding the raw value; names that match no field are
    /// skipped without error.
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let fields = T::fields();
        let mut conditions = SmallVec::new();
        let mut skipped = 0usize;

        for (name, value) in pairs {
            match fields.find(name.as_ref()) {
                Some(field) => conditions.push(Condition::new(field, value)),
                None => skipped += 1,
            }
        }

        crate::sift_debug!(
            record = T::TYPE_NAME,
            matched = conditions.len(),
            skipped = skipped,
            "built condition set"
        );

        Self { conditions }
    }

    /// Build a set from optional raw pairs; `None` yields an empty set.
    pub fn from_optional_pairs<I, K, V>(pairs: Option<I>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        pairs.map(Self::new).unwrap_or_default()
    }

    /// Build a set from conditions constructed elsewhere.
    pub fn from_conditions(items: impl IntoIterator<Item = Condition<T>>) -> Self {
        Self {
            conditions: items.into_iter().collect(),
        }
    }

    /// Build a set from optional conditions; `None` yields an empty set.
    pub fn from_optional_conditions<I>(items: Option<I>) -> Self
    where
        I: IntoIterator<Item = Condition<T>>,
    {
        items.map(Self::from_conditions).unwrap_or_default()
    }

    /// Build a set from an `application/x-www-form-urlencoded` query string.
    ///
    /// A leading `?` is ignored. Uses [`ParseOptions::default`].
    pub fn from_query_str(query: &str) -> Self {
        Self::from_query_str_with(query, &ParseOptions::default())
    }

    /// Build a set from a query string with explicit parse options.
    pub fn from_query_str_with(query: &str, options: &ParseOptions) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes())
            .filter_map(|(key, value)| {
                options
                    .apply(&key, &value)
                    .map(|(key, value)| (key.to_string(), value.to_string()))
            })
            .collect();
        Self::new(pairs)
    }

    /// Build a set from the members of a JSON object, keeping their JSON types.
    pub fn from_json_object(object: &Map<String, Value>) -> Self {
        Self::new(object.iter().map(|(key, value)| (key.as_str(), value.clone())))
    }

    /// Remove every condition on the selected field.
    ///
    /// Returns the same set for chaining. Fails with `InvalidSelector` when
    /// the selector does not identify a field of `T`.
    pub fn ignore_for(&mut self, selector: impl FieldSelector<T>) -> QueryResult<&mut Self> {
        let field = selector.select()?;
        self.conditions.retain(|condition| condition.field() != field);
        Ok(self)
    }

    /// Set the operator of every condition on the selected field.
    ///
    /// Returns the same set for chaining. Fails with `InvalidSelector` when
    /// the selector does not identify a field of `T`.
    pub fn operator_for(
        &mut self,
        selector: impl FieldSelector<T>,
        operator: Operator,
    ) -> QueryResult<&mut Self> {
        let field = selector.select()?;
        self.conditions
            .iter_mut()
            .filter(|condition| condition.field() == field)
            .for_each(|condition| condition.set_operator(operator));
        Ok(self)
    }

    /// Whether any condition targets the selected field.
    pub fn contains_field(&self, selector: impl FieldSelector<T>) -> QueryResult<bool> {
        let field = selector.select()?;
        Ok(self.conditions.iter().any(|condition| condition.field() == field))
    }

    /// Append a condition.
    pub fn push(&mut self, condition: Condition<T>) {
        self.conditions.push(condition);
    }

    /// Combine every condition with AND, in storage order.
    ///
    /// An empty set yields a predicate that accepts everything.
    pub fn to_and_predicate(&self) -> QueryResult<Predicate<T>> {
        self.fold(Predicate::all)
    }

    /// Combine every condition with OR, in storage order.
    ///
    /// An empty set yields a predicate that rejects everything.
    pub fn to_or_predicate(&self) -> QueryResult<Predicate<T>> {
        self.fold(Predicate::any)
    }

    fn fold(&self, combine: fn(Vec<Predicate<T>>) -> Predicate<T>) -> QueryResult<Predicate<T>> {
        let predicates = self
            .conditions
            .iter()
            .map(Condition::to_predicate)
            .collect::<QueryResult<Vec<_>>>()?;
        Ok(combine(predicates))
    }
}

impl<T: 'static> ConditionSet<T> {
    /// Number of conditions.
    #[inline]
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Whether the set holds no conditions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Iterate conditions in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, Condition<T>> {
        self.conditions.iter()
    }
}

impl<T: 'static> Default for ConditionSet<T> {
    fn default() -> Self {
        Self {
            conditions: SmallVec::new(),
        }
    }
}

impl<T: 'static> Clone for ConditionSet<T> {
    fn clone(&self) -> Self {
        Self {
            conditions: self.conditions.clone(),
        }
    }
}

impl<T: 'static> fmt::Debug for ConditionSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.conditions.iter()).finish()
    }
}

impl<T: Record> FromIterator<Condition<T>> for ConditionSet<T> {
    fn from_iter<I: IntoIterator<Item = Condition<T>>>(iter: I) -> Self {
        Self::from_conditions(iter)
    }
}

impl<T: Record> From<Vec<Condition<T>>> for ConditionSet<T> {
    fn from(items: Vec<Condition<T>>) -> Self {
        Self::from_conditions(items)
    }
}

impl<T: 'static> Extend<Condition<T>> for ConditionSet<T> {
    fn extend<I: IntoIterator<Item = Condition<T>>>(&mut self, iter: I) {
        self.conditions.extend(iter);
    }
}

impl<'a, T: 'static> IntoIterator for &'a ConditionSet<T> {
    type Item = &'a Condition<T>;
    type IntoIter = std::slice::Iter<'a, Condition<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.conditions.iter()
    }
}
