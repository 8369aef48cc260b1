//! IBM DB2 dialect.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use enumflags2::BitFlags;

use super::dialect::{Capability, DefaultPlacement, Dialect, DialectId, IdentifierCase};
use super::reserved;
use crate::types::{self, DataType};

/// DB2 for LUW.
#[derive(Debug, Clone, Copy, Default)]
pub struct Db2Dialect;

impl Dialect for Db2Dialect {
    fn id(&self) -> DialectId {
        DialectId::Db2
    }

    fn product_name(&self) -> &'static str {
        "DB2"
    }

    fn capabilities(&self) -> BitFlags<Capability> {
        Capability::Sequences
            | Capability::Tablespaces
            | Capability::AutoIncrement
            | Capability::Schemas
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
        reserved::DB2
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

    fn date_literal(&self, value: NaiveDate) -> String {
        format!("DATE('{}')", value.format("%Y-%m-%d"))
    }

    fn time_literal(&self, value: NaiveTime) -> String {
        format!("TIME('{}')", value.format("%H:%M:%S"))
    }

    fn date_time_literal(&self, value: NaiveDateTime) -> String {
        format!("TIMESTAMP('{}')", value.format("%Y-%m-%d %H:%M:%S"))
    }

    fn current_date_time_function(&self) -> &'static str {
        "CURRENT TIMESTAMP"
    }

    fn map_data_type(&self, data_type: &DataType) -> String {
        match data_type {
            DataType::TinyInt | DataType::Boolean => "SMALLINT".to_string(),
            DataType::Integer => "INTEGER".to_string(),
            DataType::DateTime => "TIMESTAMP".to_string(),
            DataType::Uuid => "CHAR(36)".to_string(),
            DataType::NVarchar(len) => types::sized("VARGRAPHIC", *len),
            DataType::NChar(len) => types::sized("GRAPHIC", *len),
            other => types::standard_name(other),
        }
    }
}
