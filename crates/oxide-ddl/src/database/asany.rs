//! SAP SQL Anywhere dialect.

use enumflags2::BitFlags;

use super::dialect::{Capability, Dialect, DialectId};
use crate::types::{self, DataType};

/// SQL Anywhere, formerly Sybase Adaptive Server Anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct SybaseAsaDialect;

impl Dialect for SybaseAsaDialect {
    fn id(&self) -> DialectId {
        DialectId::SybaseAsa
    }

    fn product_name(&self) -> &'static str {
        "SQL Anywhere"
    }

    fn capabilities(&self) -> BitFlags<Capability> {
        Capability::Sequences
            | Capability::Tablespaces
            | Capability::AutoIncrement
            | Capability::Schemas
            | Capability::NamedUniqueConstraints
            | Capability::BatchUpdates
            | Capability::Remarks
            | Capability::DropIfExists
    }

    fn default_schema_name(&self) -> Option<&'static str> {
        Some("DBA")
    }

    fn auto_increment_base(&self, _generation_type: Option<&str>, _default_on_null: bool) -> String {
        "DEFAULT AUTOINCREMENT".to_string()
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
        "NOW()"
    }

    fn sequence_next_value(&self, sequence: &str) -> String {
        format!("{sequence}.nextval")
    }

    fn map_data_type(&self, data_type: &DataType) -> String {
        match data_type {
            DataType::Boolean => "BIT".to_string(),
            DataType::Integer => "INTEGER".to_string(),
            DataType::Clob => "LONG VARCHAR".to_string(),
            DataType::Blob => "LONG BINARY".to_string(),
            DataType::Uuid => "UNIQUEIDENTIFIER".to_string(),
            other => types::standard_name(other),
        }
    }
}
