//! Comparison operators applied between a field value and a condition value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;
use crate::value::FieldType;

/// The comparison a condition applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// `field = value`
    #[default]
    Equals,
    /// `field != value`
    NotEquals,
    /// `field < value`
    LessThan,
    /// `field <= value`
    LessThanOrEqual,
    /// `field > value`
    GreaterThan,
    /// `field >= value`
    GreaterThanOrEqual,
    /// Field text contains the value.
    Contains,
    /// Field text does not contain the value.
    NotContains,
    /// Field text starts with the value.
    StartsWith,
    /// Field text ends with the value.
    EndsWith,
    /// Field equals one of the listed values.
    In,
    /// Field equals none of the listed values.
    NotIn,
}

impl Operator {
    /// All operators, in declaration order.
    pub const ALL: [Operator; 12] = [
        Self::Equals,
        Self::NotEquals,
        Self::LessThan,
        Self::LessThanOrEqual,
        Self::GreaterThan,
        Self::GreaterThanOrEqual,
        Self::Contains,
        Self::NotContains,
        Self::StartsWith,
        Self::EndsWith,
        Self::In,
        Self::NotIn,
    ];

    /// The symbol or keyword used when rendering predicates.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equals => "=",
            Self::NotEquals => "!=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::Contains => "CONTAINS",
            Self::NotContains => "NOT CONTAINS",
            Self::StartsWith => "STARTS WITH",
            Self::EndsWith => "ENDS WITH",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
        }
    }

    /// Whether this operator compares by ordering.
    pub fn is_ordering(&self) -> bool {
        matches!(
            self,
            Self::LessThan | Self::LessThanOrEqual | Self::GreaterThan | Self::GreaterThanOrEqual
        )
    }

    /// Whether this operator works on text only.
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            Self::Contains | Self::NotContains | Self::StartsWith | Self::EndsWith
        )
    }

    /// Whether the condition value is a list.
    pub fn is_membership(&self) -> bool {
        matches!(self, Self::In | Self::NotIn)
    }

    /// Whether this operator can be applied to a field of type `ty`.
    pub fn supports(&self, ty: FieldType) -> bool {
        if self.is_ordering() {
            ty.is_ordered()
        } else if self.is_text() {
            ty.is_text()
        } else {
            true
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = QueryError;

    /// Parse an operator name, short alias or symbol, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        let op = match normalized.as_str() {
            "=" | "==" | "eq" | "equal" | "equals" => Self::Equals,
            "!=" | "<>" | "ne" | "neq" | "notequal" | "notequals" => Self::NotEquals,
            "<" | "lt" | "lessthan" => Self::LessThan,
            "<=" | "lte" | "le" | "lessthanorequal" => Self::LessThanOrEqual,
            ">" | "gt" | "greaterthan" => Self::GreaterThan,
            ">=" | "gte" | "ge" | "greaterthanorequal" => Self::GreaterThanOrEqual,
            "contains" | "like" => Self::Contains,
            "notcontains" | "notlike" => Self::NotContains,
            "startswith" | "prefix" => Self::StartsWith,
            "endswith" | "suffix" => Self::EndsWith,
            "in" => Self::In,
            "notin" | "nin" => Self::NotIn,
            _ => return Err(QueryError::invalid_operator(s)),
        };
        Ok(op)
    }
}
