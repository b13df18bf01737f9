//! Error types for the payroll roster engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every validation failure a payroll record can raise.

use thiserror::Error;

/// The main error type for the payroll roster engine.
///
/// Record validation only ever produces [`PayrollError::MissingValue`] or
/// [`PayrollError::InvalidValue`]. The roster variants are raised by the
/// YAML roster loader alone.
///
/// # Example
///
/// ```
/// use payroll_roster::error::PayrollError;
///
/// let error = PayrollError::invalid("employee_id", "Bad value passed in for employeeId: 999");
/// assert_eq!(
///     error.to_string(),
///     "Invalid value for 'employee_id': Bad value passed in for employeeId: 999"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayrollError {
    /// A required value was absent.
    #[error("Missing value for '{field}': {message}")]
    MissingValue {
        /// The field that was absent.
        field: String,
        /// A description of what was missing.
        message: String,
    },

    /// A value was present but violated a range, shape or capacity constraint.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// The field that was invalid.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// Roster file was not found at the specified path.
    #[error("Roster file not found: {path}")]
    RosterNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Roster file could not be parsed.
    #[error("Failed to parse roster file '{path}': {message}")]
    RosterParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A department could not be rendered as roster YAML.
    #[error("Failed to serialize roster: {message}")]
    RosterSerializeError {
        /// A description of the serialization error.
        message: String,
    },
}

impl PayrollError {
    /// Builds a [`PayrollError::MissingValue`].
    pub fn missing(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MissingValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Builds a [`PayrollError::InvalidValue`].
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the offending field for validation errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingValue { field, .. } | Self::InvalidValue { field, .. } => Some(field),
            Self::RosterNotFound { .. }
            | Self::RosterParseError { .. }
            | Self::RosterSerializeError { .. } => None,
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
