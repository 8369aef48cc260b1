//! Firebird dialect.

use enumflags2::BitFlags;

use super::dialect::{Capability, DefaultPlacement, Dialect, DialectId, IdentifierCase};
use super::reserved;
use crate::types::{self, DataType};

/// Firebird dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirebirdDialect;

impl Dialect for FirebirdDialect {
    fn id(&self) -> DialectId {
        DialectId::Firebird
    }

    fn product_name(&self) -> &'static str {
        "Firebird"
    }

    fn capabilities(&self) -> BitFlags<Capability> {
        Capability::Sequences
            | Capability::NamedPrimaryKeys
            | Capability::NamedUniqueConstraints
            | Capability::NamedNotNullConstraints
            | Capability::BatchUpdates
            | Capability::Remarks
    }

    fn identifier_case(&self) -> IdentifierCase {
        IdentifierCase::Upper
    }

    fn reserved_words(&self) -> &'static [&'static str] {
        reserved::FIREBIRD
    }

    fn max_identifier_length(&self) -> usize {
        31
    }

    fn default_placement(&self) -> DefaultPlacement {
        DefaultPlacement::BeforeNotNull
    }

    fn true_literal(&self) -> &'static str {
        "1"
    }

    fn false_literal(&self) -> &'static str {
        "0"
    }

    fn map_data_type(&self, data_type: &DataType) -> String {
        match data_type {
            DataType::TinyInt => "SMALLINT".to_string(),
            DataType::Integer => "INTEGER".to_string(),
            DataType::Boolean => "SMALLINT".to_string(),
            DataType::Double => "DOUBLE PRECISION".to_string(),
            DataType::Clob => "BLOB SUB_TYPE TEXT".to_string(),
            DataType::DateTime => "TIMESTAMP".to_string(),
            DataType::Uuid => "CHAR(16) CHARACTER SET OCTETS".to_string(),
            DataType::NVarchar(len) => types::sized("VARCHAR", *len),
            other => types::standard_name(other),
        }
    }
}
