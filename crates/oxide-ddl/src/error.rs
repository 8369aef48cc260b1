//! Error types for SQL generation.

use crate::database::DialectId;
use crate::statement::StatementKind;
use crate::validation::ValidationError;

/// Errors returned when a statement cannot be turned into SQL.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// No generator handles this statement on this database.
    #[error("{statement} is not supported on {dialect}")]
    UnsupportedStatement {
        statement: StatementKind,
        dialect: DialectId,
    },

    /// The database cannot express one of the statement's parameters.
    #[error("{statement} on {dialect} does not support {feature}")]
    UnsupportedFeature {
        statement: StatementKind,
        dialect: DialectId,
        feature: String,
    },

    /// The statement failed validation.
    #[error("{statement} is invalid on {dialect}:\n{}", .errors.iter().map(|e| format!("  - {e}")).collect::<Vec<_>>().join("\n"))]
    Validation {
        statement: StatementKind,
        dialect: DialectId,
        errors: Vec<ValidationError>,
    },
}

impl GenerateError {
    /// Returns the name of the unsupported feature, if that is the cause.
    #[must_use]
    pub fn unsupported_feature(&self) -> Option<&str> {
        match self {
            Self::UnsupportedFeature { feature, .. } => Some(feature),
            _ => None,
        }
    }
}

/// Result type for SQL generation.
pub type Result<T> = std::result::Result<T, GenerateError>;
