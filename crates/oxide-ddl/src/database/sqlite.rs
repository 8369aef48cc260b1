//! SQLite dialect.
//!
//! SQLite has almost no ALTER TABLE support; most column and constraint
//! changes are refused by the generators.

use enumflags2::BitFlags;

use super::dialect::{Capability, Dialect, DialectId};
use crate::types::{self, DataType};

/// SQLite dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteDialect;

impl Dialect for SqliteDialect {
    fn id(&self) -> DialectId {
        DialectId::Sqlite
    }

    fn product_name(&self) -> &'static str {
        "SQLite"
    }

    fn capabilities(&self) -> BitFlags<Capability> {
        Capability::AutoIncrement
            | Capability::InitiallyDeferrableColumns
            | Capability::NamedPrimaryKeys
            | Capability::NamedUniqueConstraints
            | Capability::DropIfExists
    }

    fn auto_increment_base(&self, _generation_type: Option<&str>, _default_on_null: bool) -> String {
        "AUTOINCREMENT".to_string()
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

    fn map_data_type(&self, data_type: &DataType) -> String {
        match data_type {
            DataType::TinyInt | DataType::SmallInt | DataType::Integer | DataType::BigInt => {
                "INTEGER".to_string()
            }
            DataType::Float | DataType::Double => "REAL".to_string(),
            DataType::Clob | DataType::Uuid => "TEXT".to_string(),
            other => types::standard_name(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_data_types() {
        let dialect = SqliteDialect;
        assert_eq!(dialect.map_data_type(&DataType::Integer), "INTEGER");
        assert_eq!(dialect.map_data_type(&DataType::BigInt), "INTEGER");
        assert_eq!(dialect.map_data_type(&DataType::Clob), "TEXT");
        assert_eq!(
            dialect.map_data_type(&DataType::Varchar(Some(255))),
            "VARCHAR(255)"
        );
    }
}
