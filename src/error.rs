// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by every fallible [`LocalTime`](crate::LocalTime) operation.

/// Convenience alias used throughout the crate.
pub type Result<T, E = TimeError> = std::result::Result<T, E>;

/// Errors raised while constructing, querying or transforming a
/// [`LocalTime`](crate::LocalTime).
///
/// Every variant is a usage error scoped to the call that produced it. No
/// operation clamps or defaults a rejected value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    /// A field value fell outside its closed range.
    #[error("invalid value for {field} (valid values {min} - {max}): {value}")]
    Range {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// The field is recognized but cannot be applied to a time-of-day.
    #[error("unsupported field: {0}")]
    UnsupportedField(String),

    /// The unit is recognized but cannot be applied to a time-of-day.
    #[error("unsupported unit: {0}")]
    UnsupportedUnit(String),

    /// The unit cannot be used to truncate a time-of-day.
    #[error("unable to truncate: {0}")]
    Truncation(String),

    /// A temporal value could not yield a time-of-day.
    #[error("unable to obtain LocalTime from {source_type}: {reason}")]
    Conversion {
        source_type: &'static str,
        reason: String,
    },

    /// Text did not follow the expected layout.
    #[error("text '{input}' could not be parsed: {reason}")]
    Parse { input: String, reason: String },

    /// Text ended before a required component.
    #[error("text '{input}' is missing the {component} component")]
    MissingComponent {
        component: &'static str,
        input: String,
    },

    /// The formatter collaborator failed to render a value.
    #[error("unable to format: {0}")]
    Format(String),
}

impl TimeError {
    pub(crate) fn conversion(source_type: &'static str, reason: impl Into<String>) -> Self {
        TimeError::Conversion {
            source_type,
            reason: reason.into(),
        }
    }

    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        TimeError::Parse {
            input: input.to_owned(),
            reason: reason.into(),
        }
    }
}
