//! Microsoft SQL Server dialect.

use chrono::NaiveDateTime;
use enumflags2::BitFlags;

use super::dialect::{Capability, Dialect, DialectId};
use super::reserved;
use crate::types::{self, DataType};

/// SQL Server dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct MssqlDialect;

impl Dialect for MssqlDialect {
    fn id(&self) -> DialectId {
        DialectId::Mssql
    }

    fn product_name(&self) -> &'static str {
        "Microsoft SQL Server"
    }

    fn capabilities(&self) -> BitFlags<Capability> {
        Capability::Sequences
            | Capability::Tablespaces
            | Capability::AutoIncrement
            | Capability::Schemas
            | Capability::Catalogs
            | Capability::NamedPrimaryKeys
            | Capability::NamedUniqueConstraints
            | Capability::BatchUpdates
            | Capability::Remarks
            | Capability::DropIfExists
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

    fn qualifies_index_names(&self) -> bool {
        false
    }

    fn auto_increment_base(&self, _generation_type: Option<&str>, _default_on_null: bool) -> String {
        "IDENTITY".to_string()
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

    fn true_literal(&self) -> &'static str {
        "1"
    }

    fn false_literal(&self) -> &'static str {
        "0"
    }

    fn date_time_literal(&self, value: NaiveDateTime) -> String {
        format!("'{}'", value.format("%Y-%m-%dT%H:%M:%S"))
    }

    fn current_date_time_function(&self) -> &'static str {
        "GETDATE()"
    }

    fn default_constraint_name(&self, table: &str, column: &str) -> Option<String> {
        Some(format!("DF_{table}_{column}"))
    }

    fn procedure_end_delimiter(&self) -> &'static str {
        "\nGO"
    }

    fn map_data_type(&self, data_type: &DataType) -> String {
        match data_type {
            DataType::Boolean => "BIT".to_string(),
            DataType::Double => "FLOAT(53)".to_string(),
            DataType::Clob => "VARCHAR(MAX)".to_string(),
            DataType::Blob => "VARBINARY(MAX)".to_string(),
            DataType::Uuid => "UNIQUEIDENTIFIER".to_string(),
            DataType::Timestamp => "DATETIME2".to_string(),
            DataType::NVarchar(None) => "NVARCHAR(MAX)".to_string(),
            other => types::standard_name(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mssql_types() {
        let dialect = MssqlDialect;
        assert_eq!(dialect.map_data_type(&DataType::Boolean), "BIT");
        assert_eq!(dialect.map_data_type(&DataType::Integer), "INT");
        assert_eq!(dialect.map_data_type(&DataType::Uuid), "UNIQUEIDENTIFIER");
    }
}
