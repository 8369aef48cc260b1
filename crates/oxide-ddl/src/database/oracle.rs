//! Oracle dialect.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use enumflags2::BitFlags;

use super::dialect::{Capability, DefaultPlacement, Dialect, DialectId, IdentifierCase};
use super::reserved;
use crate::types::{self, DataType};

/// Oracle Database.
#[derive(Debug, Clone, Copy, Default)]
pub struct OracleDialect;

impl Dialect for OracleDialect {
    fn id(&self) -> DialectId {
        DialectId::Oracle
    }

    fn product_name(&self) -> &'static str {
        "Oracle"
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
    }

    fn identifier_case(&self) -> IdentifierCase {
        IdentifierCase::Upper
    }

    fn reserved_words(&self) -> &'static [&'static str] {
        reserved::ORACLE
    }

    fn auto_increment_base(&self, generation_type: Option<&str>, default_on_null: bool) -> String {
        let generation = generation_type.map_or_else(|| "BY DEFAULT".to_string(), str::to_uppercase);
        if default_on_null {
            format!("GENERATED {generation} ON NULL AS IDENTITY")
        } else {
            format!("GENERATED {generation} AS IDENTITY")
        }
    }

    fn auto_increment_separator(&self) -> &'static str {
        " "
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
        format!("TO_DATE('{}', 'YYYY-MM-DD')", value.format("%Y-%m-%d"))
    }

    fn time_literal(&self, value: NaiveTime) -> String {
        format!("TO_DATE('{}', 'HH24:MI:SS')", value.format("%H:%M:%S"))
    }

    fn date_time_literal(&self, value: NaiveDateTime) -> String {
        format!(
            "TO_TIMESTAMP('{}', 'YYYY-MM-DD HH24:MI:SS')",
            value.format("%Y-%m-%d %H:%M:%S")
        )
    }

    fn current_date_time_function(&self) -> &'static str {
        "SYSTIMESTAMP"
    }

    fn sequence_next_value(&self, sequence: &str) -> String {
        format!("{sequence}.nextval")
    }

    fn procedure_end_delimiter(&self) -> &'static str {
        "\n/"
    }

    fn map_data_type(&self, data_type: &DataType) -> String {
        match data_type {
            DataType::TinyInt => "NUMBER(3)".to_string(),
            DataType::SmallInt => "NUMBER(5)".to_string(),
            DataType::Integer => "INTEGER".to_string(),
            DataType::BigInt => "NUMBER(38, 0)".to_string(),
            DataType::Boolean => "NUMBER(1)".to_string(),
            DataType::Decimal { precision, scale } => types::decimal("NUMBER", *precision, *scale),
            DataType::Double => "FLOAT(24)".to_string(),
            DataType::Varchar(len) => types::sized("VARCHAR2", *len),
            DataType::NVarchar(len) => types::sized("NVARCHAR2", *len),
            DataType::Time | DataType::DateTime => "TIMESTAMP".to_string(),
            DataType::Uuid => "RAW(16)".to_string(),
            other => types::standard_name(other),
        }
    }
}
