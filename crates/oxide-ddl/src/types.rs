//! Column data types.
//!
//! Statements carry column types as free-form descriptions (`"int"`,
//! `"varchar(255)"`, `"decimal(10, 2)"`). [`DataType::parse`] turns a
//! description into a tagged value that each dialect spells its own way
//! through [`crate::database::Dialect::map_data_type`]. Descriptions that
//! are not recognised pass through verbatim.

use std::sync::OnceLock;

use regex::Regex;

/// A parsed column data type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    Boolean,
    Decimal {
        precision: Option<u32>,
        scale: Option<u32>,
    },
    Float,
    Double,
    Char(Option<u32>),
    Varchar(Option<u32>),
    NChar(Option<u32>),
    NVarchar(Option<u32>),
    Clob,
    Blob,
    Date,
    Time,
    DateTime,
    Timestamp,
    Uuid,
    /// Anything else, kept exactly as written.
    Custom(String),
}

fn description_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*([A-Za-z_][A-Za-z0-9_ ]*?)\s*(?:\(\s*(\d+)\s*(?:,\s*(\d+)\s*)?\))?\s*$")
            .expect("Invalid type description regex")
    })
}

impl DataType {
    /// Parses a type description.
    #[must_use]
    pub fn parse(description: &str) -> Self {
        let custom = || Self::Custom(description.trim().to_string());
        let Some(caps) = description_pattern().captures(description) else {
            return custom();
        };
        let name = caps
            .get(1)
            .map(|m| m.as_str().to_ascii_lowercase())
            .unwrap_or_default();
        let first = caps.get(2).and_then(|m| m.as_str().parse::<u32>().ok());
        let second = caps.get(3).and_then(|m| m.as_str().parse::<u32>().ok());
        let has_args = first.is_some();

        match name.as_str() {
            "tinyint" if second.is_none() => Self::TinyInt,
            "smallint" | "int2" if second.is_none() => Self::SmallInt,
            "int" | "integer" | "int4" if second.is_none() => Self::Integer,
            "bigint" | "int8" | "long" if second.is_none() => Self::BigInt,
            "boolean" | "bool" if !has_args => Self::Boolean,
            "bit" if first.is_none() || first == Some(1) => Self::Boolean,
            "decimal" | "numeric" | "number" => Self::Decimal {
                precision: first,
                scale: second,
            },
            "float" | "real" if !has_args => Self::Float,
            "double" | "double precision" if !has_args => Self::Double,
            "char" | "character" if second.is_none() => Self::Char(first),
            "varchar" | "varchar2" | "character varying" if second.is_none() => {
                Self::Varchar(first)
            }
            "nchar" if second.is_none() => Self::NChar(first),
            "nvarchar" | "nvarchar2" if second.is_none() => Self::NVarchar(first),
            "clob" | "text" | "longtext" | "longvarchar" if !has_args => Self::Clob,
            "blob" | "bytea" | "longblob" | "image" if !has_args => Self::Blob,
            "date" if !has_args => Self::Date,
            "time" if !has_args => Self::Time,
            "datetime" if !has_args => Self::DateTime,
            "timestamp" if !has_args => Self::Timestamp,
            "uuid" | "uniqueidentifier" if !has_args => Self::Uuid,
            _ => custom(),
        }
    }

    /// Whether literals of this type are written unquoted.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::TinyInt
                | Self::SmallInt
                | Self::Integer
                | Self::BigInt
                | Self::Decimal { .. }
                | Self::Float
                | Self::Double
        )
    }

    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::TinyInt | Self::SmallInt | Self::Integer | Self::BigInt
        )
    }

    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean)
    }

    /// Whether the type stores national (unicode) characters.
    #[must_use]
    pub const fn is_unicode(&self) -> bool {
        matches!(self, Self::NChar(_) | Self::NVarchar(_))
    }
}

/// Spells a type with an optional length suffix.
#[must_use]
pub fn sized(name: &str, length: Option<u32>) -> String {
    match length {
        Some(n) => format!("{name}({n})"),
        None => name.to_string(),
    }
}

/// Spells a decimal-like type.
#[must_use]
pub fn decimal(name: &str, precision: Option<u32>, scale: Option<u32>) -> String {
    match (precision, scale) {
        (Some(p), Some(s)) => format!("{name}({p}, {s})"),
        (Some(p), None) => format!("{name}({p})"),
        _ => name.to_string(),
    }
}

/// The ANSI-ish spelling shared by dialects that do not override a type.
#[must_use]
pub fn standard_name(data_type: &DataType) -> String {
    match data_type {
        DataType::TinyInt => "TINYINT".to_string(),
        DataType::SmallInt => "SMALLINT".to_string(),
        DataType::Integer => "INT".to_string(),
        DataType::BigInt => "BIGINT".to_string(),
        DataType::Boolean => "BOOLEAN".to_string(),
        DataType::Decimal { precision, scale } => decimal("DECIMAL", *precision, *scale),
        DataType::Float => "FLOAT".to_string(),
        DataType::Double => "DOUBLE".to_string(),
        DataType::Char(len) => sized("CHAR", *len),
        DataType::Varchar(len) => sized("VARCHAR", *len),
        DataType::NChar(len) => sized("NCHAR", *len),
        DataType::NVarchar(len) => sized("NVARCHAR", *len),
        DataType::Clob => "CLOB".to_string(),
        DataType::Blob => "BLOB".to_string(),
        DataType::Date => "DATE".to_string(),
        DataType::Time => "TIME".to_string(),
        DataType::DateTime => "DATETIME".to_string(),
        DataType::Timestamp => "TIMESTAMP".to_string(),
        DataType::Uuid => "UUID".to_string(),
        DataType::Custom(raw) => raw.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        assert_eq!(DataType::parse("int"), DataType::Integer);
        assert_eq!(DataType::parse(" INTEGER "), DataType::Integer);
        assert_eq!(DataType::parse("bigint"), DataType::BigInt);
        assert_eq!(DataType::parse("boolean"), DataType::Boolean);
        assert_eq!(DataType::parse("bit(1)"), DataType::Boolean);
        assert_eq!(DataType::parse("datetime"), DataType::DateTime);
    }

    #[test]
    fn test_parse_with_arguments() {
        assert_eq!(DataType::parse("varchar(255)"), DataType::Varchar(Some(255)));
        assert_eq!(DataType::parse("VARCHAR2(20)"), DataType::Varchar(Some(20)));
        assert_eq!(
            DataType::parse("decimal(10, 2)"),
            DataType::Decimal {
                precision: Some(10),
                scale: Some(2)
            }
        );
        assert_eq!(
            DataType::parse("number(5)"),
            DataType::Decimal {
                precision: Some(5),
                scale: None
            }
        );
    }

    #[test]
    fn test_parse_unknown_is_custom() {
        assert_eq!(
            DataType::parse("varchar(max)"),
            DataType::Custom("varchar(max)".to_string())
        );
        assert_eq!(
            DataType::parse("geometry"),
            DataType::Custom("geometry".to_string())
        );
    }

    #[test]
    fn test_standard_names() {
        assert_eq!(standard_name(&DataType::Integer), "INT");
        assert_eq!(standard_name(&DataType::Varchar(Some(10))), "VARCHAR(10)");
        assert_eq!(
            standard_name(&DataType::Decimal {
                precision: Some(10),
                scale: Some(2)
            }),
            "DECIMAL(10, 2)"
        );
    }

    #[test]
    fn test_classification() {
        assert!(DataType::parse("int").is_numeric());
        assert!(DataType::parse("decimal(3,1)").is_numeric());
        assert!(!DataType::parse("varchar(3)").is_numeric());
        assert!(DataType::parse("nvarchar(3)").is_unicode());
        assert!(DataType::parse("bool").is_boolean());
    }
}
