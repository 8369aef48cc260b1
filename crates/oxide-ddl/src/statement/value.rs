//! Literal values.

use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::database::{Database, DialectId};
use crate::types::DataType;

/// A literal written into generated SQL, such as a column default or an
/// inserted value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LiteralValue {
    #[default]
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Time(NaiveTime),
    /// A function call or other expression written verbatim.
    Function(String),
    /// The next value of a sequence.
    SequenceNextValue {
        sequence: String,
        #[serde(default)]
        schema: Option<String>,
    },
}

/// Spellings of "now" that are rewritten to the dialect's own function.
const CURRENT_TIMESTAMP_ALIASES: &[&str] = &[
    "CURRENT_TIMESTAMP",
    "CURRENT TIMESTAMP",
    "CURRENT_DATETIME",
    "NOW",
    "NOW()",
    "SYSDATE",
    "SYSTIMESTAMP",
    "GETDATE()",
];

fn numeric_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^-?\d+(\.\d+)?([eE][-+]?\d+)?$").expect("Invalid numeric literal regex")
    })
}

impl LiteralValue {
    /// Shorthand for a string value.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Shorthand for a computed value.
    #[must_use]
    pub fn function(value: impl Into<String>) -> Self {
        Self::Function(value.into())
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether the value has a SQL spelling. NaN and infinities do not.
    #[must_use]
    pub fn is_representable(&self) -> bool {
        match self {
            Self::Float(f) => f.is_finite(),
            _ => true,
        }
    }

    /// Renders the literal for `database`.
    ///
    /// When the column type is known, string values are coerced: numeric
    /// text on a numeric column is written bare, `true`/`false` on a
    /// boolean column become the dialect's boolean literals, and national
    /// character columns on SQL Server get an `N` prefix.
    #[must_use]
    pub fn to_sql(&self, database: &Database, column_type: Option<&DataType>) -> String {
        let dialect = database.dialect();
        match self {
            Self::Null => "NULL".to_string(),
            Self::Boolean(b) => database.boolean_literal(*b).to_string(),
            Self::Integer(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::String(s) => Self::string_to_sql(s, database, column_type),
            Self::Date(d) => dialect.date_literal(*d),
            Self::DateTime(dt) => dialect.date_time_literal(*dt),
            Self::Time(t) => dialect.time_literal(*t),
            Self::Function(f) => {
                let trimmed = f.trim();
                if CURRENT_TIMESTAMP_ALIASES
                    .iter()
                    .any(|alias| alias.eq_ignore_ascii_case(trimmed))
                {
                    dialect.current_date_time_function().to_string()
                } else {
                    f.clone()
                }
            }
            Self::SequenceNextValue { sequence, schema } => {
                let name = database.escape_sequence_name(None, schema.as_deref(), sequence);
                dialect.sequence_next_value(&name)
            }
        }
    }

    fn string_to_sql(value: &str, database: &Database, column_type: Option<&DataType>) -> String {
        match column_type {
            Some(t) if t.is_numeric() && numeric_pattern().is_match(value.trim()) => {
                value.trim().to_string()
            }
            Some(t) if t.is_boolean() => match value.trim().to_ascii_lowercase().as_str() {
                "true" | "t" | "1" => database.boolean_literal(true).to_string(),
                "false" | "f" | "0" => database.boolean_literal(false).to_string(),
                _ => database.string_literal(value),
            },
            Some(t) if t.is_unicode() && database.id() == DialectId::Mssql => {
                format!("N{}", database.string_literal(value))
            }
            _ => database.string_literal(value),
        }
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int() -> DataType {
        DataType::Integer
    }

    #[test]
    fn test_numeric_string_is_unquoted_on_numeric_column() {
        let db = Database::new(DialectId::Oracle);
        assert_eq!(LiteralValue::string("0").to_sql(&db, Some(&int())), "0");
        assert_eq!(LiteralValue::string("-1.5").to_sql(&db, Some(&int())), "-1.5");
        assert_eq!(LiteralValue::string("abc").to_sql(&db, Some(&int())), "'abc'");
        assert_eq!(LiteralValue::string("0").to_sql(&db, None), "'0'");
    }

    #[test]
    fn test_boolean_literals() {
        let mssql = Database::new(DialectId::Mssql);
        let pg = Database::new(DialectId::Postgres);
        assert_eq!(LiteralValue::Boolean(true).to_sql(&mssql, None), "1");
        assert_eq!(LiteralValue::Boolean(true).to_sql(&pg, None), "TRUE");
        assert_eq!(
            LiteralValue::string("false").to_sql(&pg, Some(&DataType::Boolean)),
            "FALSE"
        );
    }

    #[test]
    fn test_string_escaping() {
        let db = Database::new(DialectId::Generic);
        assert_eq!(LiteralValue::string("O'Brien").to_sql(&db, None), "'O''Brien'");
        let mssql = Database::new(DialectId::Mssql);
        assert_eq!(
            LiteralValue::string("x").to_sql(&mssql, Some(&DataType::NVarchar(Some(10)))),
            "N'x'"
        );
    }

    #[test]
    fn test_current_timestamp_mapping() {
        let mssql = Database::new(DialectId::Mssql);
        let oracle = Database::new(DialectId::Oracle);
        let now = LiteralValue::function("now()");
        assert_eq!(now.to_sql(&mssql, None), "GETDATE()");
        assert_eq!(now.to_sql(&oracle, None), "SYSTIMESTAMP");
        assert_eq!(
            LiteralValue::function("UPPER('x')").to_sql(&oracle, None),
            "UPPER('x')"
        );
    }

    #[test]
    fn test_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let value = LiteralValue::Date(date);
        assert_eq!(value.to_sql(&Database::new(DialectId::Generic), None), "'2024-01-31'");
        assert_eq!(value.to_sql(&Database::new(DialectId::Db2), None), "DATE('2024-01-31')");
    }

    #[test]
    fn test_sequence_next_value() {
        let value = LiteralValue::SequenceNextValue {
            sequence: "seq_id".to_string(),
            schema: Some("app".to_string()),
        };
        assert_eq!(
            value.to_sql(&Database::new(DialectId::Postgres), None),
            "nextval('app.seq_id')"
        );
        assert_eq!(
            value.to_sql(&Database::new(DialectId::Oracle), None),
            "app.seq_id.nextval"
        );
        assert_eq!(
            value.to_sql(&Database::new(DialectId::Mssql), None),
            "NEXT VALUE FOR app.seq_id"
        );
    }

    #[test]
    fn test_deserialize() {
        let value: LiteralValue = serde_json::from_str(r#"{"date": "2024-01-31"}"#).unwrap();
        assert_eq!(
            value,
            LiteralValue::Date(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())
        );
        let value: LiteralValue = serde_json::from_str(r#""null""#).unwrap();
        assert!(value.is_null());
    }
}
