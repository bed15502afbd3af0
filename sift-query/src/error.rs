//! Error types for condition sets and predicate construction.
//!
//! Every error carries:
//! - An error code for programmatic handling
//! - Context about the record, field, operator and raw value involved
//! - Actionable suggestions and help text
//!
//! # Error Codes
//!
//! Error codes follow a pattern: S{category}{number}
//! - 1xxx: Selector and operator errors
//! - 2xxx: Value errors (coercion, parsing)
//!
//! Keys that match no field are not errors; they are skipped when a
//! condition set is built.
//!
//! ```rust
//! use sift_query::{ErrorCode, QueryError};
//!
//! let err = QueryError::invalid_operator("between");
//! assert_eq!(err.code, ErrorCode::InvalidOperator);
//! assert!(err.to_string().contains("between"));
//! ```

use std::fmt;

use owo_colors::OwoColorize;
use thiserror::Error;

/// Result type for condition and predicate operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Error codes for programmatic error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Selector and operator errors (1xxx)
    /// Selector does not identify exactly one field (S1001).
    InvalidSelector = 1001,
    /// Operator cannot be applied to the field's type (S1002).
    UnsupportedOperator = 1002,

    // Value errors (2xxx)
    /// Raw value cannot be coerced to the field's type (S2001).
    ValueCoercion = 2001,
    /// Operator text is not a known operator (S2002).
    InvalidOperator = 2002,
}

impl ErrorCode {
    /// Get the error code string (e.g., "S1001").
    pub fn code(&self) -> String {
        format!("S{}", *self as u16)
    }

    /// Get a short description of the error code.
    pub fn description(&self) -> &'static str {
        match self {
            Self::InvalidSelector => "Invalid field selector",
            Self::UnsupportedOperator => "Unsupported operator for field type",
            Self::ValueCoercion => "Value coercion failed",
            Self::InvalidOperator => "Unknown operator",
        }
    }

    /// Get the documentation URL for this error.
    pub fn docs_url(&self) -> String {
        format!("https://docs.rs/sift/latest/sift/errors/{}", self.code())
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Suggestion for fixing an error.
#[derive(Debug, Clone)]
pub struct Suggestion {
    /// The suggestion text.
    pub text: String,
    /// Optional code example.
    pub code: Option<String>,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            code: None,
        }
    }

    /// Add a code example.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// Additional context for an error.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The record type involved.
    pub record: Option<String>,
    /// The field involved.
    pub field: Option<String>,
    /// The operator involved.
    pub operator: Option<String>,
    /// The raw input value, rendered as JSON.
    pub value: Option<String>,
    /// Suggestions for fixing the error.
    pub suggestions: Vec<Suggestion>,
    /// Help text.
    pub help: Option<String>,
}

/// Errors raised while configuring a condition set or building predicates.
#[derive(Error, Debug)]
pub struct QueryError {
    /// The error code.
    pub code: ErrorCode,
    /// The error message.
    pub message: String,
    /// Additional context.
    pub context: ErrorContext,
    /// The source error (if any).
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)
    }
}

impl QueryError {
    /// Create a new error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add a suggestion for fixing the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.context.suggestions.push(Suggestion::new(suggestion));
        self
    }

    /// Add a code suggestion.
    pub fn with_code_suggestion(mut self, text: impl Into<String>, code: impl Into<String>) -> Self {
        self.context.suggestions.push(Suggestion::new(text).with_code(code));
        self
    }

    /// Add help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.context.help = Some(help.into());
        self
    }

    /// Set the record type.
    pub fn with_record(mut self, record: impl Into<String>) -> Self {
        self.context.record = Some(record.into());
        self
    }

    /// Set the field.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.context.field = Some(field.into());
        self
    }

    /// Set the operator.
    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.context.operator = Some(operator.into());
        self
    }

    /// Set the raw value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.context.value = Some(value.into());
        self
    }

    /// Set the source error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // ============== Constructor Functions ==============

    /// Create an invalid selector error.
    pub fn invalid_selector(record: impl Into<String>, selector: impl Into<String>) -> Self {
        let record = record.into();
        let selector = selector.into();
        Self::new(
            ErrorCode::InvalidSelector,
            format!("Selector '{}' does not identify a field of {}", selector, record),
        )
        .with_record(&record)
        .with_field(&selector)
        .with_suggestion("Check the field name for typos")
        .with_code_suggestion(
            "Use the generated field key instead of a name",
            format!("set.ignore_for({}::{})?", record, selector.to_uppercase()),
        )
    }

    /// Create a value coercion error.
    pub fn value_coercion(
        record: impl Into<String>,
        field: impl Into<String>,
        expected: impl fmt::Display,
        value: impl Into<String>,
    ) -> Self {
        let record = record.into();
        let field = field.into();
        let value = value.into();
        Self::new(
            ErrorCode::ValueCoercion,
            format!("Cannot convert {} to {} for {}.{}", value, expected, record, field),
        )
        .with_record(&record)
        .with_field(&field)
        .with_value(&value)
        .with_suggestion(format!("Provide a value that parses as {}", expected))
    }

    /// Create an unsupported operator error.
    pub fn unsupported_operator(
        record: impl Into<String>,
        field: impl Into<String>,
        operator: impl fmt::Display,
        field_type: impl fmt::Display,
    ) -> Self {
        let record = record.into();
        let field = field.into();
        let operator = operator.to_string();
        Self::new(
            ErrorCode::UnsupportedOperator,
            format!(
                "Operator {} cannot be applied to {}.{} of type {}",
                operator, record, field, field_type
            ),
        )
        .with_record(&record)
        .with_field(&field)
        .with_operator(&operator)
        .with_help("Text operators apply to string fields; ordering operators to numbers, text and dates")
    }

    /// Create an invalid operator error.
    pub fn invalid_operator(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::new(ErrorCode::InvalidOperator, format!("Unknown operator '{}'", text))
            .with_operator(&text)
            .with_suggestion("Use a name such as eq, ne, lt, lte, gt, gte, contains, starts_with, ends_with, in")
    }

    // ============== Error Checks ==============

    /// Check if this is an invalid selector error.
    pub fn is_invalid_selector(&self) -> bool {
        self.code == ErrorCode::InvalidSelector
    }

    /// Check if this error comes from converting a raw value.
    pub fn is_coercion_error(&self) -> bool {
        self.code == ErrorCode::ValueCoercion
    }

    /// Check if this error is a caller mistake rather than bad input data.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::InvalidSelector | ErrorCode::UnsupportedOperator
        )
    }

    // ============== Display Functions ==============

    /// Get the documentation URL for this error.
    pub fn docs_url(&self) -> String {
        self.code.docs_url()
    }

    /// Display the full error with all context and suggestions.
    pub fn display_full(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Error [{}]: {}\n", self.code.code(), self.message));

        if let Some(ref record) = self.context.record {
            output.push_str(&format!("  → Record: {}\n", record));
        }
        if let Some(ref field) = self.context.field {
            output.push_str(&format!("  → Field: {}\n", field));
        }
        if let Some(ref operator) = self.context.operator {
            output.push_str(&format!("  → Operator: {}\n", operator));
        }
        if let Some(ref value) = self.context.value {
            let value_display = if value.len() > 80 {
                format!("{}...", value.chars().take(80).collect::<String>())
            } else {
                value.clone()
            };
            output.push_str(&format!("  → Value: {}\n", value_display));
        }

        if !self.context.suggestions.is_empty() {
            output.push_str("\nSuggestions:\n");
            for (i, suggestion) in self.context.suggestions.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, suggestion.text));
                if let Some(ref code) = suggestion.code {
                    output.push_str(&format!("     ```\n     {}\n     ```\n", code.replace('\n', "\n     ")));
                }
            }
        }

        if let Some(ref help) = self.context.help {
            output.push_str(&format!("\nHelp: {}\n", help));
        }

        output.push_str(&format!("\nMore info: {}\n", self.docs_url()));

        output
    }

    /// Display error with ANSI colors for terminal output.
    pub fn display_colored(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}: {}\n",
            format!("Error [{}]", self.code.code()).red().bold(),
            self.message.bold()
        ));

        if let Some(ref record) = self.context.record {
            output.push_str(&format!("  {} {}\n", "→ Record:".dimmed(), record));
        }
        if let Some(ref field) = self.context.field {
            output.push_str(&format!("  {} {}\n", "→ Field:".dimmed(), field));
        }
        if let Some(ref operator) = self.context.operator {
            output.push_str(&format!("  {} {}\n", "→ Operator:".dimmed(), operator));
        }

        if !self.context.suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for (i, suggestion) in self.context.suggestions.iter().enumerate() {
                output.push_str(&format!("  {} {}\n", format!("{}.", i + 1).yellow(), suggestion.text));
                if let Some(ref code) = suggestion.code {
                    output.push_str(&format!(
                        "     {}\n     {}\n     {}\n",
                        "```".dimmed(),
                        code.replace('\n', "\n     ").cyan(),
                        "```".dimmed()
                    ));
                }
            }
        }

        if let Some(ref help) = self.context.help {
            output.push_str(&format!("\n{} {}\n", "Help:".cyan().bold(), help));
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "More info:".dimmed(),
            self.docs_url().blue().underline()
        ));

        output
    }
}

/// Helper for creating errors with context.
#[macro_export]
macro_rules! query_error {
    ($code:expr, $msg:expr) => {
        $crate::error::QueryError::new($code, $msg)
    };
    ($code:expr, $msg:expr, $($key:ident = $value:expr),+ $(,)?) => {{
        let mut err = $crate::error::QueryError::new($code, $msg);
        $(
            err = err.$key($value);
        )+
        err
    }};
}
