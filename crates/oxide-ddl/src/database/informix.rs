//! Informix dialect.
//!
//! Informix has no auto-increment clause; the column type itself becomes
//! `SERIAL` or `SERIAL8`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use enumflags2::BitFlags;

use super::dialect::{Capability, Dialect, DialectId, IdentifierCase};
use super::reserved;
use crate::types::{self, DataType};

/// IBM Informix.
#[derive(Debug, Clone, Copy, Default)]
pub struct InformixDialect;

impl Dialect for InformixDialect {
    fn id(&self) -> DialectId {
        DialectId::Informix
    }

    fn product_name(&self) -> &'static str {
        "Informix Dynamic Server"
    }

    fn capabilities(&self) -> BitFlags<Capability> {
        Capability::Sequences
            | Capability::Tablespaces
            | Capability::AutoIncrement
            | Capability::Schemas
            | Capability::DropTableCascade
            | Capability::NamedPrimaryKeys
            | Capability::NamedUniqueConstraints
            | Capability::BatchUpdates
            | Capability::DropIfExists
    }

    fn identifier_case(&self) -> IdentifierCase {
        IdentifierCase::Lower
    }

    fn reserved_words(&self) -> &'static [&'static str] {
        reserved::INFORMIX
    }

    fn auto_increment_base(&self, _generation_type: Option<&str>, _default_on_null: bool) -> String {
        String::new()
    }

    fn emits_auto_increment_parameters(&self) -> bool {
        false
    }

    fn auto_increment_type(&self, data_type: &DataType) -> Option<String> {
        match data_type {
            DataType::BigInt => Some("SERIAL8".to_string()),
            DataType::TinyInt | DataType::SmallInt | DataType::Integer => {
                Some("SERIAL".to_string())
            }
            _ => None,
        }
    }

    fn true_literal(&self) -> &'static str {
        "'t'"
    }

    fn false_literal(&self) -> &'static str {
        "'f'"
    }

    fn date_literal(&self, value: NaiveDate) -> String {
        format!("DATETIME ({}) YEAR TO DAY", value.format("%Y-%m-%d"))
    }

    fn time_literal(&self, value: NaiveTime) -> String {
        format!("DATETIME ({}) HOUR TO SECOND", value.format("%H:%M:%S"))
    }

    fn date_time_literal(&self, value: NaiveDateTime) -> String {
        format!(
            "DATETIME ({}) YEAR TO SECOND",
            value.format("%Y-%m-%d %H:%M:%S")
        )
    }

    fn current_date_time_function(&self) -> &'static str {
        "CURRENT YEAR TO FRACTION(5)"
    }

    fn sequence_next_value(&self, sequence: &str) -> String {
        format!("{sequence}.NEXTVAL")
    }

    fn map_data_type(&self, data_type: &DataType) -> String {
        match data_type {
            DataType::TinyInt => "SMALLINT".to_string(),
            DataType::BigInt => "INT8".to_string(),
            DataType::Float => "SMALLFLOAT".to_string(),
            DataType::Double => "FLOAT".to_string(),
            DataType::DateTime | DataType::Timestamp => "DATETIME YEAR TO FRACTION(5)".to_string(),
            DataType::Time => "INTERVAL HOUR TO FRACTION(5)".to_string(),
            DataType::Uuid => "CHAR(36)".to_string(),
            DataType::NVarchar(len) => types::sized("NVARCHAR", *len),
            other => types::standard_name(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_types() {
        let dialect = InformixDialect;
        assert_eq!(
            dialect.auto_increment_type(&DataType::Integer).as_deref(),
            Some("SERIAL")
        );
        assert_eq!(
            dialect.auto_increment_type(&DataType::BigInt).as_deref(),
            Some("SERIAL8")
        );
        assert_eq!(dialect.auto_increment_type(&DataType::Varchar(None)), None);
    }

    #[test]
    fn test_informix_literals() {
        let dialect = InformixDialect;
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(dialect.date_literal(date), "DATETIME (2024-01-31) YEAR TO DAY");
        assert_eq!(dialect.true_literal(), "'t'");
    }
}
