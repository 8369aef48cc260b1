//! The dialect contract.
//!
//! Every supported database product is a unit struct implementing
//! [`Dialect`]. The trait carries the formatting primitives and feature
//! flags generators consult; default method bodies describe the ANSI-ish
//! behaviour and each dialect overrides only what deviates.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use enumflags2::{bitflags, BitFlags};
use serde::{Deserialize, Serialize};

use super::{asany, db2, derby, firebird, generic, h2, hsql, informix, mssql, mysql, oracle};
use super::{postgres, reserved, sqlite, sybase};
use crate::types::{self, DataType};

// =============================================================================
// Capabilities
// =============================================================================

/// A feature a dialect may or may not support.
#[bitflags]
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    Sequences = 1 << 0,
    Tablespaces = 1 << 1,
    AutoIncrement = 1 << 2,
    InitiallyDeferrableColumns = 1 << 3,
    Schemas = 1 << 4,
    Catalogs = 1 << 5,
    DropTableCascade = 1 << 6,
    NamedPrimaryKeys = 1 << 7,
    NamedUniqueConstraints = 1 << 8,
    NamedNotNullConstraints = 1 << 9,
    BatchUpdates = 1 << 10,
    Remarks = 1 << 11,
    DropIfExists = 1 << 12,
}

impl Capability {
    /// Returns a human readable name for the capability.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sequences => "sequences",
            Self::Tablespaces => "tablespaces",
            Self::AutoIncrement => "auto-increment",
            Self::InitiallyDeferrableColumns => "deferrable constraints",
            Self::Schemas => "schemas",
            Self::Catalogs => "catalogs",
            Self::DropTableCascade => "drop cascade",
            Self::NamedPrimaryKeys => "named primary keys",
            Self::NamedUniqueConstraints => "named unique constraints",
            Self::NamedNotNullConstraints => "named not-null constraints",
            Self::BatchUpdates => "batch updates",
            Self::Remarks => "remarks",
            Self::DropIfExists => "drop if exists",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a dialect folds unquoted identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierCase {
    Upper,
    Lower,
    Preserve,
}

/// Where the DEFAULT clause of a column definition sits relative to NOT NULL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultPlacement {
    BeforeNotNull,
    AfterNotNull,
}

// =============================================================================
// Dialect identity
// =============================================================================

/// Stable discriminant of a dialect. Generator lookup is keyed on it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum DialectId {
    #[serde(rename = "generic")]
    Generic,
    #[serde(rename = "oracle")]
    Oracle,
    #[serde(rename = "mysql")]
    MySql,
    #[serde(rename = "mariadb")]
    MariaDb,
    #[serde(rename = "postgresql")]
    Postgres,
    #[serde(rename = "mssql")]
    Mssql,
    #[serde(rename = "db2")]
    Db2,
    #[serde(rename = "derby")]
    Derby,
    #[serde(rename = "h2")]
    H2,
    #[serde(rename = "hsqldb")]
    Hsql,
    #[serde(rename = "sybase")]
    Sybase,
    #[serde(rename = "asany")]
    SybaseAsa,
    #[serde(rename = "informix")]
    Informix,
    #[serde(rename = "sqlite")]
    Sqlite,
    #[serde(rename = "firebird")]
    Firebird,
}

impl DialectId {
    /// Every known dialect, in a fixed order.
    pub const ALL: [Self; 15] = [
        Self::Generic,
        Self::Oracle,
        Self::MySql,
        Self::MariaDb,
        Self::Postgres,
        Self::Mssql,
        Self::Db2,
        Self::Derby,
        Self::H2,
        Self::Hsql,
        Self::Sybase,
        Self::SybaseAsa,
        Self::Informix,
        Self::Sqlite,
        Self::Firebird,
    ];

    /// Returns the short name used on the command line and in serialized
    /// statements.
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Oracle => "oracle",
            Self::MySql => "mysql",
            Self::MariaDb => "mariadb",
            Self::Postgres => "postgresql",
            Self::Mssql => "mssql",
            Self::Db2 => "db2",
            Self::Derby => "derby",
            Self::H2 => "h2",
            Self::Hsql => "hsqldb",
            Self::Sybase => "sybase",
            Self::SybaseAsa => "asany",
            Self::Informix => "informix",
            Self::Sqlite => "sqlite",
            Self::Firebird => "firebird",
        }
    }

    /// Returns the dialect descriptor for this id.
    #[must_use]
    pub fn dialect(self) -> &'static dyn Dialect {
        match self {
            Self::Generic => &generic::GenericDialect,
            Self::Oracle => &oracle::OracleDialect,
            Self::MySql => &mysql::MYSQL,
            Self::MariaDb => &mysql::MARIADB,
            Self::Postgres => &postgres::PostgresDialect,
            Self::Mssql => &mssql::MssqlDialect,
            Self::Db2 => &db2::Db2Dialect,
            Self::Derby => &derby::DerbyDialect,
            Self::H2 => &h2::H2Dialect,
            Self::Hsql => &hsql::HsqlDialect,
            Self::Sybase => &sybase::SybaseDialect,
            Self::SybaseAsa => &asany::SybaseAsaDialect,
            Self::Informix => &informix::InformixDialect,
            Self::Sqlite => &sqlite::SqliteDialect,
            Self::Firebird => &firebird::FirebirdDialect,
        }
    }

    /// Returns true if this id is one of `ids`.
    #[must_use]
    pub fn is_any(self, ids: &[Self]) -> bool {
        ids.contains(&self)
    }
}

impl fmt::Display for DialectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Returned when a dialect name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown database dialect '{0}'")]
pub struct ParseDialectError(pub String);

impl FromStr for DialectId {
    type Err = ParseDialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let id = match lower.as_str() {
            "generic" | "ansi" => Self::Generic,
            "oracle" => Self::Oracle,
            "mysql" => Self::MySql,
            "mariadb" => Self::MariaDb,
            "postgresql" | "postgres" | "pg" => Self::Postgres,
            "mssql" | "sqlserver" => Self::Mssql,
            "db2" => Self::Db2,
            "derby" => Self::Derby,
            "h2" => Self::H2,
            "hsqldb" | "hsql" => Self::Hsql,
            "sybase" => Self::Sybase,
            "asany" | "sqlanywhere" => Self::SybaseAsa,
            "informix" => Self::Informix,
            "sqlite" => Self::Sqlite,
            "firebird" => Self::Firebird,
            _ => return Err(ParseDialectError(s.to_string())),
        };
        Ok(id)
    }
}

// =============================================================================
// Dialect trait
// =============================================================================

/// Formatting primitives and feature flags of one database product.
///
/// Implementations are stateless; all per-run configuration lives on
/// [`super::Database`].
pub trait Dialect: Send + Sync + fmt::Debug {
    /// Returns the dialect id.
    fn id(&self) -> DialectId;

    /// Returns the product name used in diagnostics.
    fn product_name(&self) -> &'static str;

    /// Returns the set of supported capabilities.
    fn capabilities(&self) -> BitFlags<Capability>;

    // -------------------------------------------------------------------------
    // Identifiers
    // -------------------------------------------------------------------------

    /// Character opening a quoted identifier.
    fn quote_open(&self) -> char {
        '"'
    }

    /// Character closing a quoted identifier.
    fn quote_close(&self) -> char {
        '"'
    }

    /// Case folding applied to unquoted identifiers.
    fn identifier_case(&self) -> IdentifierCase {
        IdentifierCase::Preserve
    }

    /// Reserved words beyond the shared SQL:2003 list, uppercase.
    fn reserved_words(&self) -> &'static [&'static str] {
        &[]
    }

    /// Returns true if `word` needs quoting because it is reserved.
    fn is_reserved_word(&self, word: &str) -> bool {
        reserved::contains(reserved::SQL_2003, word) || reserved::contains(self.reserved_words(), word)
    }

    /// Schema used when none is given, if the product has a fixed one.
    fn default_schema_name(&self) -> Option<&'static str> {
        None
    }

    /// Maximum length of an identifier.
    fn max_identifier_length(&self) -> usize {
        128
    }

    /// Whether index names may carry a schema qualifier.
    fn qualifies_index_names(&self) -> bool {
        true
    }

    // -------------------------------------------------------------------------
    // Auto-increment
    // -------------------------------------------------------------------------

    /// The auto-increment keyword(s) without start/increment parameters.
    fn auto_increment_base(&self, generation_type: Option<&str>, _default_on_null: bool) -> String {
        let generation = generation_type.map_or_else(|| "BY DEFAULT".to_string(), str::to_uppercase);
        format!("GENERATED {generation} AS IDENTITY")
    }

    /// Whether start/increment parameters are ever emitted.
    fn emits_auto_increment_parameters(&self) -> bool {
        true
    }

    /// Whether both parameters must be given as soon as one is.
    fn auto_increment_requires_both(&self) -> bool {
        false
    }

    fn auto_increment_opening(&self) -> &'static str {
        " ("
    }

    fn auto_increment_closing(&self) -> &'static str {
        ")"
    }

    fn auto_increment_separator(&self) -> &'static str {
        ", "
    }

    fn auto_increment_start_with(&self, value: i64) -> String {
        format!("START WITH {value}")
    }

    fn auto_increment_by(&self, value: i64) -> String {
        format!("INCREMENT BY {value}")
    }

    /// Replacement column type for auto-increment columns, if the product
    /// expresses auto-increment through the type itself.
    fn auto_increment_type(&self, _data_type: &DataType) -> Option<String> {
        None
    }

    // -------------------------------------------------------------------------
    // Clause placement
    // -------------------------------------------------------------------------

    fn default_placement(&self) -> DefaultPlacement {
        DefaultPlacement::AfterNotNull
    }

    /// Whether an inline PRIMARY KEY goes after NOT NULL.
    fn primary_key_after_not_null(&self) -> bool {
        false
    }

    // -------------------------------------------------------------------------
    // Literals
    // -------------------------------------------------------------------------

    fn true_literal(&self) -> &'static str {
        "TRUE"
    }

    fn false_literal(&self) -> &'static str {
        "FALSE"
    }

    fn date_literal(&self, value: NaiveDate) -> String {
        format!("'{}'", value.format("%Y-%m-%d"))
    }

    fn time_literal(&self, value: NaiveTime) -> String {
        format!("'{}'", value.format("%H:%M:%S"))
    }

    fn date_time_literal(&self, value: NaiveDateTime) -> String {
        format!("'{}'", value.format("%Y-%m-%d %H:%M:%S"))
    }

    /// Escapes the body of a string literal.
    fn escape_string(&self, value: &str) -> String {
        value.replace('\'', "''")
    }

    /// Function returning the current timestamp.
    fn current_date_time_function(&self) -> &'static str {
        "CURRENT_TIMESTAMP"
    }

    /// Expression fetching the next value of an already escaped sequence.
    fn sequence_next_value(&self, sequence: &str) -> String {
        format!("NEXT VALUE FOR {sequence}")
    }

    fn line_comment(&self) -> &'static str {
        "--"
    }

    // -------------------------------------------------------------------------
    // Naming
    // -------------------------------------------------------------------------

    /// Name given to a primary key created without an explicit name.
    fn primary_key_name(&self, table: &str) -> String {
        format!("PK_{}", table.to_uppercase())
    }

    /// Name given to a default-value constraint, for products that name them.
    fn default_constraint_name(&self, _table: &str, _column: &str) -> Option<String> {
        None
    }

    /// Terminator for procedure bodies.
    fn procedure_end_delimiter(&self) -> &'static str {
        ";"
    }

    // -------------------------------------------------------------------------
    // Types
    // -------------------------------------------------------------------------

    /// Maps a parsed column type to this product's spelling.
    fn map_data_type(&self, data_type: &DataType) -> String {
        types::standard_name(data_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_names_round_trip() {
        for id in DialectId::ALL {
            assert_eq!(id.short_name().parse::<DialectId>(), Ok(id));
            assert_eq!(id.dialect().id(), id);
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("Postgres".parse::<DialectId>(), Ok(DialectId::Postgres));
        assert_eq!("sqlserver".parse::<DialectId>(), Ok(DialectId::Mssql));
        assert_eq!(
            "access".parse::<DialectId>(),
            Err(ParseDialectError("access".to_string()))
        );
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&DialectId::SybaseAsa).unwrap();
        assert_eq!(json, "\"asany\"");
        let id: DialectId = serde_json::from_str("\"hsqldb\"").unwrap();
        assert_eq!(id, DialectId::Hsql);
    }

    #[test]
    fn test_default_auto_increment_base() {
        let dialect = DialectId::Generic.dialect();
        assert_eq!(
            dialect.auto_increment_base(None, false),
            "GENERATED BY DEFAULT AS IDENTITY"
        );
        assert_eq!(
            dialect.auto_increment_base(Some("always"), false),
            "GENERATED ALWAYS AS IDENTITY"
        );
    }
}
