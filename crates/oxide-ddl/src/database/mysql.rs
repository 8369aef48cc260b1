//! MySQL and MariaDB dialects.
//!
//! MariaDB shares MySQL's syntax for everything this crate emits, so both
//! products are one struct with a flag; only the identity and the sequence
//! support differ.

use enumflags2::BitFlags;

use super::dialect::{Capability, Dialect, DialectId};
use super::reserved;
use crate::types::{self, DataType};

/// MySQL family dialect.
#[derive(Debug, Clone, Copy)]
pub struct MySqlDialect {
    mariadb: bool,
}

pub(crate) static MYSQL: MySqlDialect = MySqlDialect { mariadb: false };
pub(crate) static MARIADB: MySqlDialect = MySqlDialect { mariadb: true };

impl MySqlDialect {
    /// Returns true for the MariaDB flavour.
    #[must_use]
    pub const fn is_mariadb(&self) -> bool {
        self.mariadb
    }
}

impl Dialect for MySqlDialect {
    fn id(&self) -> DialectId {
        if self.mariadb {
            DialectId::MariaDb
        } else {
            DialectId::MySql
        }
    }

    fn product_name(&self) -> &'static str {
        if self.mariadb {
            "MariaDB"
        } else {
            "MySQL"
        }
    }

    fn capabilities(&self) -> BitFlags<Capability> {
        let common = Capability::AutoIncrement
            | Capability::Catalogs
            | Capability::DropTableCascade
            | Capability::NamedUniqueConstraints
            | Capability::BatchUpdates
            | Capability::Remarks
            | Capability::DropIfExists;
        if self.mariadb {
            common | Capability::Sequences
        } else {
            common
        }
    }

    fn quote_open(&self) -> char {
        '`'
    }

    fn quote_close(&self) -> char {
        '`'
    }

    fn reserved_words(&self) -> &'static [&'static str] {
        reserved::MYSQL
    }

    fn max_identifier_length(&self) -> usize {
        64
    }

    fn qualifies_index_names(&self) -> bool {
        false
    }

    fn auto_increment_base(&self, _generation_type: Option<&str>, _default_on_null: bool) -> String {
        "AUTO_INCREMENT".to_string()
    }

    // The start value goes into a separate table option.
    fn emits_auto_increment_parameters(&self) -> bool {
        false
    }

    fn true_literal(&self) -> &'static str {
        "1"
    }

    fn false_literal(&self) -> &'static str {
        "0"
    }

    fn escape_string(&self, value: &str) -> String {
        value.replace('\\', "\\\\").replace('\'', "''")
    }

    fn current_date_time_function(&self) -> &'static str {
        "NOW()"
    }

    fn map_data_type(&self, data_type: &DataType) -> String {
        match data_type {
            DataType::Boolean => "BIT(1)".to_string(),
            DataType::Clob => "LONGTEXT".to_string(),
            DataType::Blob => "LONGBLOB".to_string(),
            DataType::Uuid => "CHAR(36)".to_string(),
            DataType::NVarchar(len) => types::sized("VARCHAR", *len),
            DataType::NChar(len) => types::sized("CHAR", *len),
            other => types::standard_name(other),
        }
    }
}
