//! PostgreSQL dialect.

use enumflags2::BitFlags;

use super::dialect::{Capability, Dialect, DialectId, IdentifierCase};
use super::reserved;
use crate::types::{self, DataType};

/// PostgreSQL dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresDialect;

impl Dialect for PostgresDialect {
    fn id(&self) -> DialectId {
        DialectId::Postgres
    }

    fn product_name(&self) -> &'static str {
        "PostgreSQL"
    }

    fn capabilities(&self) -> BitFlags<Capability> {
        Capability::Sequences
            | Capability::Tablespaces
            | Capability::AutoIncrement
            | Capability::InitiallyDeferrableColumns
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
        IdentifierCase::Lower
    }

    fn reserved_words(&self) -> &'static [&'static str] {
        reserved::POSTGRES
    }

    fn default_schema_name(&self) -> Option<&'static str> {
        Some("public")
    }

    fn max_identifier_length(&self) -> usize {
        63
    }

    fn qualifies_index_names(&self) -> bool {
        false
    }

    // Identity options are a space separated list.
    fn auto_increment_separator(&self) -> &'static str {
        " "
    }

    fn current_date_time_function(&self) -> &'static str {
        "NOW()"
    }

    fn sequence_next_value(&self, sequence: &str) -> String {
        format!("nextval('{}')", sequence.replace('\'', "''"))
    }

    fn primary_key_name(&self, table: &str) -> String {
        format!("{}_pkey", table.to_lowercase())
    }

    fn map_data_type(&self, data_type: &DataType) -> String {
        match data_type {
            DataType::TinyInt => "SMALLINT".to_string(),
            DataType::Integer => "INTEGER".to_string(),
            DataType::Double => "DOUBLE PRECISION".to_string(),
            DataType::NChar(len) => types::sized("CHAR", *len),
            DataType::NVarchar(len) => types::sized("VARCHAR", *len),
            DataType::Clob => "TEXT".to_string(),
            DataType::Blob => "BYTEA".to_string(),
            DataType::DateTime => "TIMESTAMP WITHOUT TIME ZONE".to_string(),
            other => types::standard_name(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgres_data_types() {
        let dialect = PostgresDialect;
        assert_eq!(dialect.map_data_type(&DataType::Integer), "INTEGER");
        assert_eq!(dialect.map_data_type(&DataType::Blob), "BYTEA");
        assert_eq!(
            dialect.map_data_type(&DataType::DateTime),
            "TIMESTAMP WITHOUT TIME ZONE"
        );
    }

    #[test]
    fn test_postgres_names() {
        let dialect = PostgresDialect;
        assert_eq!(dialect.primary_key_name("Orders"), "orders_pkey");
        assert_eq!(
            dialect.sequence_next_value("public.seq_id"),
            "nextval('public.seq_id')"
        );
    }
}
