//! Record field tables and field selectors.
//!
//! A [`Record`] exposes its fields once through a `&'static` [`FieldSet`],
//! usually generated by `#[derive(Record)]`. Condition sets resolve raw keys
//! against that table by case-insensitive name, and resolve
//! [`FieldSelector`]s when conditions are ignored or reconfigured.
//!
//! # Hand-written field tables
//!
//! ```rust
//! use std::sync::OnceLock;
//! use sift_query::{Field, FieldKey, FieldKind, FieldSet, Record};
//!
//! struct Person {
//!     name: String,
//!     age: i32,
//! }
//!
//! impl Person {
//!     const NAME: FieldKey<Person> = FieldKey::new(0, "Name");
//!     const AGE: FieldKey<Person> = FieldKey::new(1, "Age");
//! }
//!
//! impl Record for Person {
//!     const TYPE_NAME: &'static str = "Person";
//!
//!     fn fields() -> &'static FieldSet<Self> {
//!         static FIELDS: OnceLock<FieldSet<Person>> = OnceLock::new();
//!         FIELDS.get_or_init(|| {
//!             FieldSet::new([
//!                 Field::of::<String>("Name", |p: &Person| p.name.to_field_value()),
//!                 Field::of::<i32>("Age", |p: &Person| p.age.to_field_value()),
//!             ])
//!         })
//!     }
//! }
//!
//! assert!(Person::fields().find("age").is_some());
//! assert!(Person::fields().find("nickname").is_none());
//! ```

use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;

use crate::error::{QueryError, QueryResult};
use crate::value::{FieldKind, FieldType, FieldValue};

/// A record type whose fields can be filtered on.
pub trait Record: Sized + 'static {
    /// Type name used in diagnostics.
    const TYPE_NAME: &'static str;

    /// The field table, computed once and shared by every condition set.
    fn fields() -> &'static FieldSet<Self>;
}

/// One named, typed, readable field of `T`.
pub struct Field<T> {
    index: usize,
    name: &'static str,
    field_type: FieldType,
    nullable: bool,
    accessor: fn(&T) -> FieldValue,
}

impl<T> Field<T> {
    /// Create a field. The index is assigned by [`FieldSet::new`].
    pub const fn new(
        name: &'static str,
        field_type: FieldType,
        nullable: bool,
        accessor: fn(&T) -> FieldValue,
    ) -> Self {
        Self {
            index: 0,
            name,
            field_type,
            nullable,
            accessor,
        }
    }

    /// Create a field whose type and nullability come from the Rust type `V`.
    pub const fn of<V: FieldKind>(name: &'static str, accessor: fn(&T) -> FieldValue) -> Self {
        Self::new(name, V::FIELD_TYPE, V::NULLABLE, accessor)
    }

    /// Position of this field in its table.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Field name as matched against raw keys.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Comparison type of the field.
    #[inline]
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Whether the field may hold null.
    #[inline]
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Read this field from a record.
    #[inline]
    pub fn read(&self, record: &T) -> FieldValue {
        (self.accessor)(record)
    }
}

impl<T> PartialEq for Field<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.name == other.name
    }
}

impl<T> Eq for Field<T> {}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("index", &self.index)
            .field("name", &self.name)
            .field("field_type", &self.field_type)
            .field("nullable", &self.nullable)
            .finish()
    }
}

/// The ordered field table of a record type.
pub struct FieldSet<T> {
    fields: Vec<Field<T>>,
    by_name: IndexMap<String, usize>,
}

impl<T> FieldSet<T> {
    /// Build a field table. Fields are indexed by position.
    ///
    /// When two names differ only by case, lookups resolve to the first.
    pub fn new(fields: impl IntoIterator<Item = Field<T>>) -> Self {
        let mut fields: Vec<Field<T>> = fields.into_iter().collect();
        let mut by_name = IndexMap::with_capacity(fields.len());
        for (index, field) in fields.iter_mut().enumerate() {
            field.index = index;
            by_name.entry(fold_case(field.name)).or_insert(index);
        }
        Self { fields, by_name }
    }

    /// Find a field by name, ignoring case.
    ///
    /// Case is folded one character at a time to its simple uppercase form,
    /// so compatibility characters such as the Kelvin sign stay distinct
    /// from their ASCII look-alikes.
    pub fn find(&self, name: &str) -> Option<&Field<T>> {
        self.by_name
            .get(fold_case(name).as_str())
            .map(|&index| &self.fields[index])
    }

    /// Get a field by position.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Field<T>> {
        self.fields.get(index)
    }

    /// Iterate fields in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Field<T>> {
        self.fields.iter()
    }

    /// Field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }

    /// Number of fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the table has no fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<T> fmt::Debug for FieldSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.fields.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a FieldSet<T> {
    type Item = &'a Field<T>;
    type IntoIter = std::slice::Iter<'a, Field<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// A typed handle to one field of `T`.
///
/// `#[derive(Record)]` generates one associated constant per field,
/// e.g. `Person::AGE`.
pub struct FieldKey<T> {
    index: usize,
    name: &'static str,
    _record: PhantomData<fn() -> T>,
}

impl<T> FieldKey<T> {
    /// Create a key for the field at `index` named `name`.
    pub const fn new(index: usize, name: &'static str) -> Self {
        Self {
            index,
            name,
            _record: PhantomData,
        }
    }

    /// Field position.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for FieldKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldKey<T> {}

impl<T> PartialEq for FieldKey<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.name == other.name
    }
}

impl<T> Eq for FieldKey<T> {}

impl<T> fmt::Debug for FieldKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldKey")
            .field("index", &self.index)
            .field("name", &self.name)
            .finish()
    }
}

/// Identifies exactly one field of `T`.
pub trait FieldSelector<T: Record> {
    /// Resolve to a field, or fail with an invalid selector error.
    fn select(&self) -> QueryResult<&'static Field<T>>;
}

impl<T: Record> FieldSelector<T> for FieldKey<T> {
    fn select(&self) -> QueryResult<&'static Field<T>> {
        T::fields()
            .get(self.index)
            .filter(|field| field.name == self.name)
            .ok_or_else(|| QueryError::invalid_selector(T::TYPE_NAME, self.name))
    }
}

impl<T: Record> FieldSelector<T> for &str {
    fn select(&self) -> QueryResult<&'static Field<T>> {
        T::fields()
            .find(self)
            .ok_or_else(|| QueryError::invalid_selector(T::TYPE_NAME, *self))
    }
}

impl<T: Record> FieldSelector<T> for String {
    fn select(&self) -> QueryResult<&'static Field<T>> {
        self.as_str().select()
    }
}

impl<T: Record> FieldSelector<T> for &'static Field<T> {
    fn select(&self) -> QueryResult<&'static Field<T>> {
        let field: &'static Field<T> = *self;
        T::fields()
            .get(field.index)
            .filter(|known| *known == field)
            .ok_or_else(|| QueryError::invalid_selector(T::TYPE_NAME, field.name))
    }
}

fn fold_case(name: &str) -> String {
    name.chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => u,
                _ => c,
            }
        })
        .collect()
}
