//! Field types, typed field values and raw value coercion.
//!
//! Raw input arrives as [`serde_json::Value`]: query strings and form
//! payloads produce `Value::String`, JSON payloads keep their own types.
//! [`coerce`] turns a raw value into a [`FieldValue`] of the field's
//! [`FieldType`] when a predicate is built.
//!
//! ```rust
//! use sift_query::value::{FieldType, FieldValue, coerce};
//!
//! let value = coerce(&"30".into(), FieldType::Int, false).unwrap();
//! assert_eq!(value, FieldValue::Int(30));
//!
//! let value = coerce(&serde_json::Value::Null, FieldType::Int, true).unwrap();
//! assert!(value.is_null());
//! ```

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::operator::Operator;

/// The type of a record field, as seen by comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Boolean.
    Bool,
    /// Integer of any width, held exactly.
    Int,
    /// Floating point (stored as `f64`).
    Float,
    /// Exact decimal.
    Decimal,
    /// Text.
    String,
    /// UUID.
    Uuid,
    /// UTC timestamp.
    DateTime,
    /// Calendar date.
    Date,
}

impl FieldType {
    /// Whether ordering operators (`<`, `>=`, ...) apply to this type.
    pub fn is_ordered(&self) -> bool {
        !matches!(self, Self::Bool | Self::Uuid)
    }

    /// Whether text operators (`CONTAINS`, `STARTS WITH`, ...) apply to this type.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::String)
    }

    /// Human-readable type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "integer",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::String => "string",
            Self::Uuid => "uuid",
            Self::DateTime => "datetime",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed value read from a record or coerced from raw input.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Absent value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i128),
    /// Unsigned integer above `i128::MAX`.
    UInt(u128),
    /// Float value.
    Float(f64),
    /// Decimal value.
    Decimal(Decimal),
    /// String value.
    String(String),
    /// UUID value.
    Uuid(Uuid),
    /// Timestamp value.
    DateTime(DateTime<Utc>),
    /// Date value.
    Date(NaiveDate),
}

impl FieldValue {
    /// Check if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrow the text of a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Compare two values of the same type.
    ///
    /// Returns `None` when either side is null or the variants differ.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => Some(a.cmp(b)),
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            (Self::UInt(a), Self::UInt(b)) => Some(a.cmp(b)),
            (Self::Int(a), Self::UInt(b)) => Some(compare_mixed_int(*a, *b)),
            (Self::UInt(a), Self::Int(b)) => Some(compare_mixed_int(*b, *a).reverse()),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
            (Self::Decimal(a), Self::Decimal(b)) => Some(a.cmp(b)),
            (Self::String(a), Self::String(b)) => Some(a.as_str().cmp(b.as_str())),
            (Self::Uuid(a), Self::Uuid(b)) => Some(a.cmp(b)),
            (Self::DateTime(a), Self::DateTime(b)) => Some(a.cmp(b)),
            (Self::Date(a), Self::Date(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Equality where null equals null.
    pub fn matches(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Null, _) | (_, Self::Null) => false,
            _ => self.compare(other) == Some(Ordering::Equal),
        }
    }
}

fn compare_mixed_int(signed: i128, unsigned: u128) -> Ordering {
    u128::try_from(signed).map_or(Ordering::Less, |signed| signed.cmp(&unsigned))
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Bool(v) => write!(f, "{}", v),
            Self::Int(v) => write!(f, "{}", v),
            Self::UInt(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Decimal(v) => write!(f, "{}", v),
            Self::String(v) => write!(f, "{:?}", v),
            Self::Uuid(v) => write!(f, "{}", v),
            Self::DateTime(v) => write!(f, "{}", v.to_rfc3339()),
            Self::Date(v) => write!(f, "{}", v),
        }
    }
}

/// Types that can be stored in a record field and read as a [`FieldValue`].
///
/// `Option<T>` marks a field as nullable.
pub trait FieldKind {
    /// The comparison type of the field.
    const FIELD_TYPE: FieldType;
    /// Whether the field may hold null.
    const NULLABLE: bool = false;

    /// Read this value for comparison.
    fn to_field_value(&self) -> FieldValue;
}

macro_rules! int_field_kind {
    ($($ty:ty),*) => {
        $(
            impl FieldKind for $ty {
                const FIELD_TYPE: FieldType = FieldType::Int;

                #[inline]
                fn to_field_value(&self) -> FieldValue {
                    FieldValue::Int(i128::from(*self))
                }
            }
        )*
    };
}

int_field_kind!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

// Pointer-sized integers are at most 64 bits wide, so `i128` holds them.
impl FieldKind for isize {
    const FIELD_TYPE: FieldType = FieldType::Int;

    #[inline]
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Int(*self as i128)
    }
}

impl FieldKind for usize {
    const FIELD_TYPE: FieldType = FieldType::Int;

    #[inline]
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Int(*self as i128)
    }
}

impl FieldKind for u128 {
    const FIELD_TYPE: FieldType = FieldType::Int;

    fn to_field_value(&self) -> FieldValue {
        i128::try_from(*self).map_or(FieldValue::UInt(*self), FieldValue::Int)
    }
}

impl FieldKind for char {
    const FIELD_TYPE: FieldType = FieldType::String;

    fn to_field_value(&self) -> FieldValue {
        FieldValue::String(self.to_string())
    }
}

impl FieldKind for f32 {
    const FIELD_TYPE: FieldType = FieldType::Float;

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Float(f64::from(*self))
    }
}

impl FieldKind for f64 {
    const FIELD_TYPE: FieldType = FieldType::Float;

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Float(*self)
    }
}

impl FieldKind for bool {
    const FIELD_TYPE: FieldType = FieldType::Bool;

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Bool(*self)
    }
}

impl FieldKind for String {
    const FIELD_TYPE: FieldType = FieldType::String;

    fn to_field_value(&self) -> FieldValue {
        FieldValue::String(self.clone())
    }
}

impl FieldKind for Decimal {
    const FIELD_TYPE: FieldType = FieldType::Decimal;

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Decimal(*self)
    }
}

impl FieldKind for Uuid {
    const FIELD_TYPE: FieldType = FieldType::Uuid;

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Uuid(*self)
    }
}

impl FieldKind for DateTime<Utc> {
    const FIELD_TYPE: FieldType = FieldType::DateTime;

    fn to_field_value(&self) -> FieldValue {
        FieldValue::DateTime(*self)
    }
}

impl FieldKind for NaiveDate {
    const FIELD_TYPE: FieldType = FieldType::Date;

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Date(*self)
    }
}

impl<T: FieldKind> FieldKind for Option<T> {
    const FIELD_TYPE: FieldType = T::FIELD_TYPE;
    const NULLABLE: bool = true;

    fn to_field_value(&self) -> FieldValue {
        match self {
            Some(v) => v.to_field_value(),
            None => FieldValue::Null,
        }
    }
}

/// Why a raw value could not be coerced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoercionError {
    /// Null given for a field that cannot hold null.
    #[error("null is not allowed for a non-nullable {0} field")]
    NullNotAllowed(FieldType),
    /// Null given as the operand of a text operator.
    #[error("{0} needs a non-null value")]
    NullOperand(Operator),
    /// The value has the wrong shape or does not parse.
    #[error("cannot parse {value} as {expected}")]
    Invalid {
        /// Expected field type.
        expected: FieldType,
        /// Raw value rendered as JSON.
        value: String,
    },
}

fn invalid(expected: FieldType, raw: &Value) -> CoercionError {
    CoercionError::Invalid {
        expected,
        value: raw.to_string(),
    }
}

/// Coerce a raw value to a typed value of `ty`.
pub fn coerce(raw: &Value, ty: FieldType, nullable: bool) -> Result<FieldValue, CoercionError> {
    let null = || {
        if nullable {
            Ok(FieldValue::Null)
        } else {
            Err(CoercionError::NullNotAllowed(ty))
        }
    };

    match raw {
        Value::Null => null(),
        Value::String(s) if ty == FieldType::String => Ok(FieldValue::String(s.clone())),
        Value::String(s) if s.trim().is_empty() => {
            if nullable {
                Ok(FieldValue::Null)
            } else {
                Err(invalid(ty, raw))
            }
        }
        Value::String(s) => coerce_text(s.trim(), ty).ok_or_else(|| invalid(ty, raw)),
        Value::Number(n) => coerce_number(n, ty).ok_or_else(|| invalid(ty, raw)),
        Value::Bool(b) => match ty {
            FieldType::Bool => Ok(FieldValue::Bool(*b)),
            FieldType::String => Ok(FieldValue::String(b.to_string())),
            _ => Err(invalid(ty, raw)),
        },
        Value::Array(_) | Value::Object(_) => Err(invalid(ty, raw)),
    }
}

/// Coerce a raw value to a list of typed values for membership tests.
///
/// Arrays are coerced element by element; text is split on `,`.
pub fn coerce_list(raw: &Value, ty: FieldType, nullable: bool) -> Result<Vec<FieldValue>, CoercionError> {
    match raw {
        Value::Array(items) => items.iter().map(|item| coerce(item, ty, nullable)).collect(),
        Value::String(s) if s.is_empty() => Ok(Vec::new()),
        Value::String(s) => s
            .split(',')
            .map(|part| coerce(&Value::String(part.to_string()), ty, nullable))
            .collect(),
        other => Ok(vec![coerce(other, ty, nullable)?]),
    }
}

fn coerce_text(s: &str, ty: FieldType) -> Option<FieldValue> {
    match ty {
        FieldType::Bool => parse_bool(s).map(FieldValue::Bool),
        FieldType::Int => parse_int(s),
        FieldType::Float => s.parse().ok().map(FieldValue::Float),
        FieldType::Decimal => s.parse().ok().map(FieldValue::Decimal),
        FieldType::String => Some(FieldValue::String(s.to_string())),
        FieldType::Uuid => Uuid::parse_str(s).ok().map(FieldValue::Uuid),
        FieldType::DateTime => parse_datetime(s).map(FieldValue::DateTime),
        FieldType::Date => parse_date(s).map(FieldValue::Date),
    }
}

fn coerce_number(n: &serde_json::Number, ty: FieldType) -> Option<FieldValue> {
    match ty {
        FieldType::Int => n
            .as_i64()
            .map(i128::from)
            .or_else(|| n.as_u64().map(i128::from))
            .or_else(|| n.as_f64().and_then(integral_f64))
            .map(FieldValue::Int),
        FieldType::Float => n.as_f64().map(FieldValue::Float),
        FieldType::Decimal => n
            .as_i64()
            .map(Decimal::from)
            .or_else(|| n.as_u64().map(Decimal::from))
            .or_else(|| n.as_f64().and_then(Decimal::from_f64))
            .map(FieldValue::Decimal),
        FieldType::Bool => match n.as_i64() {
            Some(0) => Some(FieldValue::Bool(false)),
            Some(1) => Some(FieldValue::Bool(true)),
            _ => None,
        },
        FieldType::String => Some(FieldValue::String(n.to_string())),
        FieldType::Uuid | FieldType::DateTime | FieldType::Date => None,
    }
}

fn parse_int(s: &str) -> Option<FieldValue> {
    match s.parse::<i128>() {
        Ok(v) => Some(FieldValue::Int(v)),
        Err(_) => s.parse::<u128>().ok().map(FieldValue::UInt),
    }
}

/// 2^127, the first float past `i128::MAX`.
const I128_LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// The exact integer a float holds, if it has no fraction and fits `i128`.
fn integral_f64(f: f64) -> Option<i128> {
    (f.fract() == 0.0 && (-I128_LIMIT..I128_LIMIT).contains(&f)).then_some(f as i128)
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    parse_date(s)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_coerce_text_to_int() {
        assert_eq!(coerce(&json!("30"), FieldType::Int, false), Ok(FieldValue::Int(30)));
        assert_eq!(coerce(&json!(" 42 "), FieldType::Int, false), Ok(FieldValue::Int(42)));
        assert!(coerce(&json!("thirty"), FieldType::Int, false).is_err());
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce(&json!(30), FieldType::Int, false), Ok(FieldValue::Int(30)));
        assert_eq!(coerce(&json!(30.0), FieldType::Int, false), Ok(FieldValue::Int(30)));
        assert!(coerce(&json!(30.5), FieldType::Int, false).is_err());
        assert_eq!(coerce(&json!(2.5), FieldType::Float, false), Ok(FieldValue::Float(2.5)));
        assert_eq!(
            coerce(&json!(7), FieldType::String, false),
            Ok(FieldValue::String("7".to_string()))
        );
    }

    #[test]
    fn test_coerce_integer_boundaries() {
        let max = i128::from(i64::MAX);
        assert_eq!(coerce(&json!(i64::MAX), FieldType::Int, false), Ok(FieldValue::Int(max)));
        assert_eq!(
            coerce(&json!(9_223_372_036_854_775_808u64), FieldType::Int, false),
            Ok(FieldValue::Int(max + 1))
        );
        assert_eq!(
            coerce(&json!(u64::MAX), FieldType::Int, false),
            Ok(FieldValue::Int(i128::from(u64::MAX)))
        );
        assert_eq!(
            coerce(&json!(1e19), FieldType::Int, false),
            Ok(FieldValue::Int(10_000_000_000_000_000_000))
        );
        assert_eq!(
            coerce(&json!(-9.223372036854775808e18), FieldType::Int, false),
            Ok(FieldValue::Int(i128::from(i64::MIN)))
        );
        assert!(coerce(&json!(1.7014118346046923e38), FieldType::Int, false).is_err());
        assert!(coerce(&json!(1e300), FieldType::Int, false).is_err());
    }

    #[test]
    fn test_coerce_integer_text_boundaries() {
        assert_eq!(
            coerce(&json!("9223372036854775808"), FieldType::Int, false),
            Ok(FieldValue::Int(i128::from(i64::MAX) + 1))
        );
        assert_eq!(
            coerce(&json!(u128::MAX.to_string()), FieldType::Int, false),
            Ok(FieldValue::UInt(u128::MAX))
        );
        assert!(coerce(&json!("340282366920938463463374607431768211456"), FieldType::Int, false).is_err());
        assert!(coerce(&json!("-170141183460469231731687303715884105729"), FieldType::Int, false).is_err());
    }

    #[test]
    fn test_values_past_i64_never_match_i64_max() {
        let above = coerce(&json!(9_223_372_036_854_775_808u64), FieldType::Int, false).unwrap();
        let at_max = i64::MAX.to_field_value();
        assert!(!at_max.matches(&above));
        assert_eq!(at_max.compare(&above), Some(Ordering::Less));
    }

    #[test]
    fn test_coerce_decimal_from_large_unsigned() {
        assert_eq!(
            coerce(&json!(u64::MAX), FieldType::Decimal, false),
            Ok(FieldValue::Decimal(Decimal::from(u64::MAX)))
        );
    }

    #[test]
    fn test_coerce_null() {
        assert_eq!(coerce(&Value::Null, FieldType::Int, true), Ok(FieldValue::Null));
        assert_eq!(
            coerce(&Value::Null, FieldType::Int, false),
            Err(CoercionError::NullNotAllowed(FieldType::Int))
        );
    }

    #[test]
    fn test_coerce_empty_text() {
        assert_eq!(coerce(&json!(""), FieldType::Int, true), Ok(FieldValue::Null));
        assert!(coerce(&json!(""), FieldType::Int, false).is_err());
        assert_eq!(
            coerce(&json!(""), FieldType::String, false),
            Ok(FieldValue::String(String::new()))
        );
    }

    #[test]
    fn test_string_fields_keep_whitespace() {
        assert_eq!(
            coerce(&json!(" Alice "), FieldType::String, false),
            Ok(FieldValue::String(" Alice ".to_string()))
        );
    }

    #[test]
    fn test_coerce_bool() {
        assert_eq!(coerce(&json!("TRUE"), FieldType::Bool, false), Ok(FieldValue::Bool(true)));
        assert_eq!(coerce(&json!("off"), FieldType::Bool, false), Ok(FieldValue::Bool(false)));
        assert_eq!(coerce(&json!(1), FieldType::Bool, false), Ok(FieldValue::Bool(true)));
        assert_eq!(coerce(&json!(false), FieldType::Bool, false), Ok(FieldValue::Bool(false)));
        assert!(coerce(&json!(2), FieldType::Bool, false).is_err());
    }

    #[test]
    fn test_coerce_decimal() {
        let value = coerce(&json!("19.99"), FieldType::Decimal, false).unwrap();
        assert_eq!(value, FieldValue::Decimal("19.99".parse().unwrap()));
    }

    #[test]
    fn test_coerce_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(
            coerce(&json!(id.to_string()), FieldType::Uuid, false),
            Ok(FieldValue::Uuid(id))
        );
        assert!(coerce(&json!("not-a-uuid"), FieldType::Uuid, false).is_err());
    }

    #[test]
    fn test_coerce_datetime_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap()
            .and_utc();

        assert_eq!(
            coerce(&json!("2024-03-01T12:30:00Z"), FieldType::DateTime, false),
            Ok(FieldValue::DateTime(expected))
        );
        assert_eq!(
            coerce(&json!("2024-03-01T14:30:00+02:00"), FieldType::DateTime, false),
            Ok(FieldValue::DateTime(expected))
        );
        assert_eq!(
            coerce(&json!("2024-03-01 12:30:00"), FieldType::DateTime, false),
            Ok(FieldValue::DateTime(expected))
        );

        let midnight = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc();
        assert_eq!(
            coerce(&json!("2024-03-01"), FieldType::DateTime, false),
            Ok(FieldValue::DateTime(midnight))
        );
    }

    #[test]
    fn test_coerce_rejects_composites() {
        assert!(coerce(&json!([1, 2]), FieldType::Int, false).is_err());
        assert!(coerce(&json!({"a": 1}), FieldType::String, false).is_err());
    }

    #[test]
    fn test_coerce_list() {
        assert_eq!(
            coerce_list(&json!("1,2, 3"), FieldType::Int, false),
            Ok(vec![FieldValue::Int(1), FieldValue::Int(2), FieldValue::Int(3)])
        );
        assert_eq!(
            coerce_list(&json!(["a", "b"]), FieldType::String, false),
            Ok(vec![
                FieldValue::String("a".to_string()),
                FieldValue::String("b".to_string())
            ])
        );
        assert_eq!(coerce_list(&json!(""), FieldType::Int, false), Ok(vec![]));
        assert_eq!(coerce_list(&json!(5), FieldType::Int, false), Ok(vec![FieldValue::Int(5)]));
        assert!(coerce_list(&json!("1,x"), FieldType::Int, false).is_err());
    }

    #[test]
    fn test_compare_and_matches() {
        assert_eq!(FieldValue::Int(1).compare(&FieldValue::Int(2)), Some(Ordering::Less));
        assert_eq!(FieldValue::Int(1).compare(&FieldValue::Null), None);
        assert_eq!(FieldValue::Int(1).compare(&FieldValue::Float(1.0)), None);
        assert!(FieldValue::Null.matches(&FieldValue::Null));
        assert!(!FieldValue::Null.matches(&FieldValue::Int(0)));
        assert!(FieldValue::String("a".into()).matches(&FieldValue::String("a".into())));
    }

    #[test]
    fn test_field_kind_option() {
        assert_eq!(<Option<i32> as FieldKind>::FIELD_TYPE, FieldType::Int);
        assert!(<Option<i32> as FieldKind>::NULLABLE);
        assert!(!<i32 as FieldKind>::NULLABLE);
        assert_eq!(None::<i32>.to_field_value(), FieldValue::Null);
        assert_eq!(Some(5u8).to_field_value(), FieldValue::Int(5));
    }

    #[test]
    fn test_field_kind_wide_integers() {
        assert_eq!(u64::MAX.to_field_value(), FieldValue::Int(i128::from(u64::MAX)));
        assert_eq!(usize::MAX.to_field_value(), FieldValue::Int(usize::MAX as i128));
        assert_eq!(isize::MIN.to_field_value(), FieldValue::Int(isize::MIN as i128));
        assert_eq!(i128::MIN.to_field_value(), FieldValue::Int(i128::MIN));
        assert_eq!(7u128.to_field_value(), FieldValue::Int(7));
        assert_eq!(u128::MAX.to_field_value(), FieldValue::UInt(u128::MAX));
        assert_eq!(<u128 as FieldKind>::FIELD_TYPE, FieldType::Int);
    }

    #[test]
    fn test_mixed_integer_ordering() {
        let big = FieldValue::UInt(u128::MAX);
        assert_eq!(FieldValue::Int(-1).compare(&big), Some(Ordering::Less));
        assert_eq!(big.compare(&FieldValue::Int(i128::MAX)), Some(Ordering::Greater));
        assert!(FieldValue::UInt(5).matches(&FieldValue::Int(5)));
    }

    #[test]
    fn test_field_kind_char() {
        assert_eq!(<char as FieldKind>::FIELD_TYPE, FieldType::String);
        assert_eq!('x'.to_field_value(), FieldValue::String("x".to_string()));
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldValue::String("Alice".into()).to_string(), "\"Alice\"");
        assert_eq!(FieldValue::Int(30).to_string(), "30");
        assert_eq!(FieldValue::Null.to_string(), "NULL");
        assert_eq!(FieldType::DateTime.to_string(), "datetime");
    }
}
