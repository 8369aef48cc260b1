//! Apache Derby dialect.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use enumflags2::BitFlags;

use super::dialect::{Capability, DefaultPlacement, Dialect, DialectId, IdentifierCase};
use crate::types::{self, DataType};

/// Derby embedded database.
#[derive(Debug, Clone, Copy, Default)]
pub struct DerbyDialect;

impl Dialect for DerbyDialect {
    fn id(&self) -> DialectId {
        DialectId::Derby
    }

    fn product_name(&self) -> &'static str {
        "Apache Derby"
    }

    fn capabilities(&self) -> BitFlags<Capability> {
        Capability::Sequences
            | Capability::AutoIncrement
            | Capability::Schemas
            | Capability::NamedPrimaryKeys
            | Capability::NamedUniqueConstraints
            | Capability::BatchUpdates
    }

    fn identifier_case(&self) -> IdentifierCase {
        IdentifierCase::Upper
    }

    fn default_placement(&self) -> DefaultPlacement {
        DefaultPlacement::BeforeNotNull
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

    fn map_data_type(&self, data_type: &DataType) -> String {
        match data_type {
            DataType::TinyInt => "SMALLINT".to_string(),
            DataType::Integer => "INTEGER".to_string(),
            DataType::DateTime => "TIMESTAMP".to_string(),
            DataType::Uuid => "CHAR(36)".to_string(),
            DataType::NVarchar(len) => types::sized("VARCHAR", *len),
            DataType::NChar(len) => types::sized("CHAR", *len),
            other => types::standard_name(other),
        }
    }
}
