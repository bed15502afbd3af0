//! A single-field condition: field + operator + raw value.
//!
//! The raw value is kept untyped until [`Condition::to_predicate`], where it
//! is coerced to the field's type and the operator is checked against that
//! type. Failures surface there, when the predicate is built, and never
//! while the predicate runs.

use std::cmp::Ordering;
use std::fmt;

use serde_json::Value;

use crate::error::{QueryError, QueryResult};
use crate::field::{Field, FieldSelector, Record};
use crate::operator::Operator;
use crate::predicate::Predicate;
use crate::value::{CoercionError, FieldValue, coerce, coerce_list};

/// One condition of a [`ConditionSet`](crate::ConditionSet).
pub struct Condition<T: 'static> {
    field: &'static Field<T>,
    operator: Operator,
    raw_value: Value,
}

impl<T: Record> Condition<T> {
    /// Create an `Equals` condition on `field`.
    pub fn new(field: &'static Field<T>, raw_value: impl Into<Value>) -> Self {
        Self::with_operator(field, Operator::Equals, raw_value)
    }

    /// Create a condition with an explicit operator.
    pub fn with_operator(field: &'static Field<T>, operator: Operator, raw_value: impl Into<Value>) -> Self {
        Self {
            field,
            operator,
            raw_value: raw_value.into(),
        }
    }

    /// Create a condition on the field identified by `selector`.
    ///
    /// ```rust
    /// # use sift_query::{Condition, Operator};
    /// # fn demo<T: sift_query::Record>() -> sift_query::QueryResult<()> {
    /// let adults = Condition::<T>::select("age", Operator::GreaterThanOrEqual, 18)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn select(
        selector: impl FieldSelector<T>,
        operator: Operator,
        raw_value: impl Into<Value>,
    ) -> QueryResult<Self> {
        Ok(Self::with_operator(selector.select()?, operator, raw_value))
    }

    /// The targeted field.
    #[inline]
    pub fn field(&self) -> &'static Field<T> {
        self.field
    }

    /// The comparison operator.
    #[inline]
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Replace the comparison operator.
    #[inline]
    pub fn set_operator(&mut self, operator: Operator) {
        self.operator = operator;
    }

    /// The untyped input value.
    #[inline]
    pub fn raw_value(&self) -> &Value {
        &self.raw_value
    }

    /// Build the single-field predicate for this condition.
    ///
    /// Fails with `UnsupportedOperator` when the operator does not apply to
    /// the field's type, and with `ValueCoercion` when the raw value cannot
    /// be converted.
    pub fn to_predicate(&self) -> QueryResult<Predicate<T>> {
        let field = self.field;
        let ty = field.field_type();

        if !self.operator.supports(ty) {
            return Err(QueryError::unsupported_operator(
                T::TYPE_NAME,
                field.name(),
                self.operator,
                ty,
            )
            .with_value(self.raw_value.to_string()));
        }

        let predicate = if self.operator.is_membership() {
            let values = coerce_list(&self.raw_value, ty, field.is_nullable())
                .map_err(|e| self.coercion_error(e))?;
            membership(field, self.operator, values)
        } else {
            let value = coerce(&self.raw_value, ty, field.is_nullable())
                .map_err(|e| self.coercion_error(e))?;
            if self.operator.is_text() {
                let FieldValue::String(needle) = value else {
                    return Err(self.coercion_error(CoercionError::NullOperand(self.operator)));
                };
                text(field, self.operator, needle)
            } else {
                comparison(field, self.operator, value)
            }
        };

        crate::sift_trace!(record = T::TYPE_NAME, predicate = %predicate, "built condition predicate");
        Ok(predicate)
    }

    fn coercion_error(&self, source: CoercionError) -> QueryError {
        QueryError::value_coercion(
            T::TYPE_NAME,
            self.field.name(),
            self.field.field_type(),
            self.raw_value.to_string(),
        )
        .with_operator(self.operator.to_string())
        .with_source(source)
    }
}

fn comparison<T: Record>(field: &'static Field<T>, operator: Operator, value: FieldValue) -> Predicate<T> {
    let expr = format!("{} {} {}", field.name(), operator, value);
    let accept: fn(Ordering) -> bool = match operator {
        Operator::Equals => {
            return Predicate::new(expr, move |record: &T| field.read(record).matches(&value));
        }
        Operator::NotEquals => {
            return Predicate::new(expr, move |record: &T| !field.read(record).matches(&value));
        }
        Operator::LessThan => Ordering::is_lt,
        Operator::LessThanOrEqual => Ordering::is_le,
        Operator::GreaterThan => Ordering::is_gt,
        Operator::GreaterThanOrEqual => Ordering::is_ge,
        // Text and membership operators are dispatched before reaching here.
        _ => return Predicate::always_false(),
    };
    Predicate::new(expr, move |record: &T| {
        field.read(record).compare(&value).is_some_and(accept)
    })
}

fn text<T: Record>(field: &'static Field<T>, operator: Operator, needle: String) -> Predicate<T> {
    let expr = format!("{} {} {:?}", field.name(), operator, needle);
    let test: fn(&str, &str) -> bool = match operator {
        Operator::Contains | Operator::NotContains => |haystack, needle| haystack.contains(needle),
        Operator::StartsWith => |haystack, needle| haystack.starts_with(needle),
        Operator::EndsWith => |haystack, needle| haystack.ends_with(needle),
        _ => return Predicate::always_false(),
    };
    let negate = operator == Operator::NotContains;
    Predicate::new(expr, move |record: &T| {
        let found = field
            .read(record)
            .as_str()
            .is_some_and(|haystack| test(haystack, needle.as_str()));
        found != negate
    })
}

fn membership<T: Record>(field: &'static Field<T>, operator: Operator, values: Vec<FieldValue>) -> Predicate<T> {
    let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
    let expr = format!("{} {} ({})", field.name(), operator, rendered.join(", "));
    let negate = operator == Operator::NotIn;
    Predicate::new(expr, move |record: &T| {
        let actual = field.read(record);
        values.iter().any(|v| actual.matches(v)) != negate
    })
}

impl<T: 'static> Clone for Condition<T> {
    fn clone(&self) -> Self {
        Self {
            field: self.field,
            operator: self.operator,
            raw_value: self.raw_value.clone(),
        }
    }
}

impl<T: 'static> fmt::Debug for Condition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition")
            .field("field", &self.field.name())
            .field("operator", &self.operator)
            .field("raw_value", &self.raw_value)
            .finish()
    }
}

impl<T: 'static> fmt::Display for Condition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field.name(), self.operator, self.raw_value)
    }
}
