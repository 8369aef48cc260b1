//! Statement validation.
//!
//! Validation runs before any SQL is assembled. Errors block generation,
//! warnings are reported and generation continues.

use serde::Serialize;

use crate::database::{Capability, Database, DialectId};
use crate::statement::ForeignKeyAction;

/// A blocking validation problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ValidationError {
    /// A field that must be set is empty.
    #[error("'{field}' is required")]
    RequiredField { field: &'static str },

    /// A field is set that the database does not accept.
    #[error("'{field}' is not allowed on {dialect}")]
    DisallowedField {
        field: &'static str,
        dialect: DialectId,
    },

    /// The database cannot express a requested feature.
    #[error("{feature} is not supported on {dialect}")]
    UnsupportedFeature { feature: String, dialect: DialectId },

    /// Any other inconsistency in the statement.
    #[error("{message}")]
    Invalid { message: String },
}

/// Whether a field counts as set.
pub trait Present {
    fn is_present(&self) -> bool;
}

impl Present for str {
    fn is_present(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl Present for String {
    fn is_present(&self) -> bool {
        self.as_str().is_present()
    }
}

impl Present for bool {
    fn is_present(&self) -> bool {
        *self
    }
}

impl Present for Option<String> {
    fn is_present(&self) -> bool {
        self.as_deref().is_some_and(Present::is_present)
    }
}

impl Present for Option<&str> {
    fn is_present(&self) -> bool {
        self.is_some_and(Present::is_present)
    }
}

/// Optional scalars count as set whenever they hold a value, `Some(false)` included.
macro_rules! present_when_some {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Present for Option<$ty> {
                fn is_present(&self) -> bool {
                    self.is_some()
                }
            }
        )*
    };
}

present_when_some!(bool, i64, u32, u64, ForeignKeyAction);

impl<T> Present for [T] {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Present for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

/// Accumulated errors and warnings for one statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
    warnings: Vec<String>,
}

impl ValidationResult {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error if `value` is not set.
    pub fn check_required<T: Present + ?Sized>(&mut self, field: &'static str, value: &T) {
        if !value.is_present() {
            self.errors.push(ValidationError::RequiredField { field });
        }
    }

    /// Like [`check_required`](Self::check_required), only on `dialects`.
    pub fn check_required_on<T: Present + ?Sized>(
        &mut self,
        field: &'static str,
        value: &T,
        database: &Database,
        dialects: &[DialectId],
    ) {
        if database.is_any(dialects) {
            self.check_required(field, value);
        }
    }

    /// Records an error if `value` is set on one of `dialects`.
    pub fn check_disallowed<T: Present + ?Sized>(
        &mut self,
        field: &'static str,
        value: &T,
        database: &Database,
        dialects: &[DialectId],
    ) {
        if value.is_present() && database.is_any(dialects) {
            self.errors.push(ValidationError::DisallowedField {
                field,
                dialect: database.id(),
            });
        }
    }

    /// Records an error if `value` is set anywhere but on `dialects`.
    pub fn check_allowed_only<T: Present + ?Sized>(
        &mut self,
        field: &'static str,
        value: &T,
        database: &Database,
        dialects: &[DialectId],
    ) {
        if value.is_present() && !database.is_any(dialects) {
            self.errors.push(ValidationError::DisallowedField {
                field,
                dialect: database.id(),
            });
        }
    }

    /// Records an error if `value` is set and the database lacks `capability`.
    pub fn check_disallowed_without<T: Present + ?Sized>(
        &mut self,
        field: &'static str,
        value: &T,
        database: &Database,
        capability: Capability,
    ) {
        if value.is_present() && !database.supports(capability) {
            self.errors.push(ValidationError::DisallowedField {
                field,
                dialect: database.id(),
            });
        }
    }

    /// Records an unsupported feature if it is requested and the database
    /// lacks `capability`.
    pub fn check_feature(
        &mut self,
        feature: &str,
        requested: bool,
        database: &Database,
        capability: Capability,
    ) {
        if requested && !database.supports(capability) {
            self.unsupported(feature, database);
        }
    }

    pub fn unsupported(&mut self, feature: &str, database: &Database) {
        self.errors.push(ValidationError::UnsupportedFeature {
            feature: feature.to_string(),
            dialect: database.id(),
        });
    }

    pub fn invalid(&mut self, message: impl Into<String>) {
        self.errors.push(ValidationError::Invalid {
            message: message.into(),
        });
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Appends everything from `other`.
    pub fn merge(&mut self, other: Self) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    #[must_use]
    pub fn into_parts(self) -> (Vec<ValidationError>, Vec<String>) {
        (self.errors, self.warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        let mut result = ValidationResult::new();
        result.check_required("tableName", "");
        result.check_required("columnName", "name");
        result.check_required("columns", &Vec::<String>::new());
        assert_eq!(
            result.errors(),
            &[
                ValidationError::RequiredField { field: "tableName" },
                ValidationError::RequiredField { field: "columns" },
            ]
        );
    }

    #[test]
    fn test_required_on_dialects() {
        let mysql = Database::new(DialectId::MySql);
        let pg = Database::new(DialectId::Postgres);
        let mut result = ValidationResult::new();
        result.check_required_on("columnDataType", &None::<String>, &pg, &[DialectId::MySql]);
        assert!(!result.has_errors());
        result.check_required_on("columnDataType", &None::<String>, &mysql, &[DialectId::MySql]);
        assert!(result.has_errors());
    }

    #[test]
    fn test_blank_optional_string_is_missing() {
        let mysql = Database::new(DialectId::MySql);
        let mut result = ValidationResult::new();
        result.check_required_on("tableName", &Some(String::new()), &mysql, &[DialectId::MySql]);
        result.check_required("columnDataType", &Some("  ".to_string()));
        assert_eq!(
            result.errors(),
            &[
                ValidationError::RequiredField { field: "tableName" },
                ValidationError::RequiredField { field: "columnDataType" },
            ]
        );
    }

    #[test]
    fn test_optional_scalars_count_when_set() {
        let firebird = Database::new(DialectId::Firebird);
        let mut result = ValidationResult::new();
        result.check_disallowed("cycle", &Some(false), &firebird, &[DialectId::Firebird]);
        result.check_disallowed("cacheSize", &Some(0_u64), &firebird, &[DialectId::Firebird]);
        result.check_disallowed("minValue", &None::<i64>, &firebird, &[DialectId::Firebird]);
        assert_eq!(result.errors().len(), 2);
    }

    #[test]
    fn test_disallowed_and_features() {
        let sqlite = Database::new(DialectId::Sqlite);
        let mut result = ValidationResult::new();
        result.check_disallowed_without("tablespace", &Some("ts"), &sqlite, Capability::Tablespaces);
        result.check_feature("deferrable", false, &sqlite, Capability::Sequences);
        result.check_feature("sequences", true, &sqlite, Capability::Sequences);
        result.add_warning("careful");
        let (errors, warnings) = result.into_parts();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].to_string(), "'tablespace' is not allowed on sqlite");
        assert_eq!(errors[1].to_string(), "sequences is not supported on sqlite");
        assert_eq!(warnings, vec!["careful".to_string()]);
    }
}
