//! H2 dialect.

use enumflags2::BitFlags;

use super::dialect::{Capability, Dialect, DialectId, IdentifierCase};
use super::reserved;
use crate::types::{self, DataType};

/// H2 database engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct H2Dialect;

impl Dialect for H2Dialect {
    fn id(&self) -> DialectId {
        DialectId::H2
    }

    fn product_name(&self) -> &'static str {
        "H2"
    }

    fn capabilities(&self) -> BitFlags<Capability> {
        Capability::Sequences
            | Capability::AutoIncrement
            | Capability::Schemas
            | Capability::DropTableCascade
            | Capability::NamedPrimaryKeys
            | Capability::NamedUniqueConstraints
            | Capability::NamedNotNullConstraints
            | Capability::BatchUpdates
            | Capability::Remarks
            | Capability::DropIfExists
    }

    fn identifier_case(&self) -> IdentifierCase {
        IdentifierCase::Upper
    }

    fn reserved_words(&self) -> &'static [&'static str] {
        reserved::H2
    }

    fn auto_increment_base(&self, _generation_type: Option<&str>, _default_on_null: bool) -> String {
        "AUTO_INCREMENT".to_string()
    }

    fn auto_increment_requires_both(&self) -> bool {
        true
    }

    fn auto_increment_start_with(&self, value: i64) -> String {
        value.to_string()
    }

    fn auto_increment_by(&self, value: i64) -> String {
        value.to_string()
    }

    fn current_date_time_function(&self) -> &'static str {
        "NOW()"
    }

    fn map_data_type(&self, data_type: &DataType) -> String {
        match data_type {
            DataType::DateTime => "TIMESTAMP".to_string(),
            DataType::NVarchar(len) => types::sized("VARCHAR", *len),
            other => types::standard_name(other),
        }
    }
}
