//! Sybase Adaptive Server Enterprise dialect.

use enumflags2::BitFlags;

use super::dialect::{Capability, Dialect, DialectId};
use super::reserved;
use crate::types::{self, DataType};

/// Sybase ASE.
#[derive(Debug, Clone, Copy, Default)]
pub struct SybaseDialect;

impl Dialect for SybaseDialect {
    fn id(&self) -> DialectId {
        DialectId::Sybase
    }

    fn product_name(&self) -> &'static str {
        "Sybase SQL Server"
    }

    fn capabilities(&self) -> BitFlags<Capability> {
        Capability::Tablespaces
            | Capability::AutoIncrement
            | Capability::Schemas
            | Capability::Catalogs
            | Capability::NamedPrimaryKeys
            | Capability::NamedUniqueConstraints
            | Capability::BatchUpdates
    }

    fn quote_open(&self) -> char {
        '['
    }

    fn quote_close(&self) -> char {
        ']'
    }

    fn reserved_words(&self) -> &'static [&'static str] {
        reserved::MSSQL
    }

    fn default_schema_name(&self) -> Option<&'static str> {
        Some("dbo")
    }

    fn max_identifier_length(&self) -> usize {
        30
    }

    fn qualifies_index_names(&self) -> bool {
        false
    }

    fn auto_increment_base(&self, _generation_type: Option<&str>, _default_on_null: bool) -> String {
        "IDENTITY".to_string()
    }

    fn emits_auto_increment_parameters(&self) -> bool {
        false
    }

    fn true_literal(&self) -> &'static str {
        "1"
    }

    fn false_literal(&self) -> &'static str {
        "0"
    }

    fn current_date_time_function(&self) -> &'static str {
        "GETDATE()"
    }

    fn procedure_end_delimiter(&self) -> &'static str {
        "\nGO"
    }

    fn map_data_type(&self, data_type: &DataType) -> String {
        match data_type {
            DataType::Boolean => "BIT".to_string(),
            DataType::Clob => "TEXT".to_string(),
            DataType::Blob => "IMAGE".to_string(),
            DataType::Uuid => "CHAR(36)".to_string(),
            DataType::Timestamp => "DATETIME".to_string(),
            DataType::Double => "DOUBLE PRECISION".to_string(),
            DataType::NVarchar(len) => types::sized("NVARCHAR", *len),
            other => types::standard_name(other),
        }
    }
}
