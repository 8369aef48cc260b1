//! Database descriptors.
//!
//! A [`Database`] pairs a stateless [`Dialect`] with the per-run settings a
//! migration needs: default catalog and schema, whether defaults are
//! written out, and the identifier quoting strategy. Generators never touch
//! a dialect directly for naming; they go through the descriptor so that the
//! settings apply uniformly.

mod asany;
mod db2;
mod derby;
mod dialect;
mod firebird;
mod generic;
mod h2;
mod hsql;
mod informix;
mod mssql;
mod mysql;
mod oracle;
mod postgres;
pub mod reserved;
mod sqlite;
mod sybase;

use std::fmt;
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

pub use asany::SybaseAsaDialect;
pub use db2::Db2Dialect;
pub use derby::DerbyDialect;
pub use dialect::{
    Capability, DefaultPlacement, Dialect, DialectId, IdentifierCase, ParseDialectError,
};
pub use firebird::FirebirdDialect;
pub use generic::GenericDialect;
pub use h2::H2Dialect;
pub use hsql::HsqlDialect;
pub use informix::InformixDialect;
pub use mssql::MssqlDialect;
pub use mysql::MySqlDialect;
pub use oracle::OracleDialect;
pub use postgres::PostgresDialect;
pub use sqlite::SqliteDialect;
pub use sybase::SybaseDialect;

use crate::types::DataType;

/// How identifiers are quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuotingStrategy {
    /// Quote only names that need it: reserved words, names starting with a
    /// digit, and names containing anything but word characters.
    #[default]
    Legacy,
    /// Quote every object name.
    QuoteAllObjects,
}

/// Kind of object an identifier names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Table,
    View,
    Column,
    Index,
    Sequence,
    Constraint,
    Procedure,
}

/// Per-run settings of a database descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DatabaseSettings {
    pub default_catalog: Option<String>,
    pub default_schema: Option<String>,
    /// Write the default schema out even when it is implied.
    pub output_default_schema: bool,
    /// Write the default catalog out even when it is implied.
    pub output_default_catalog: bool,
    pub quoting_strategy: QuotingStrategy,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            default_catalog: None,
            default_schema: None,
            output_default_schema: true,
            output_default_catalog: true,
            quoting_strategy: QuotingStrategy::Legacy,
        }
    }
}

/// A target database: a dialect plus settings.
#[derive(Clone)]
pub struct Database {
    dialect: &'static dyn Dialect,
    settings: DatabaseSettings,
}

impl fmt::Debug for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Database")
            .field("dialect", &self.dialect.id())
            .field("settings", &self.settings)
            .finish()
    }
}

impl Database {
    /// Creates a descriptor with default settings.
    #[must_use]
    pub fn new(id: DialectId) -> Self {
        Self::with_settings(id, DatabaseSettings::default())
    }

    #[must_use]
    pub fn with_settings(id: DialectId, settings: DatabaseSettings) -> Self {
        Self {
            dialect: id.dialect(),
            settings,
        }
    }

    #[must_use]
    pub fn id(&self) -> DialectId {
        self.dialect.id()
    }

    #[must_use]
    pub fn dialect(&self) -> &'static dyn Dialect {
        self.dialect
    }

    #[must_use]
    pub const fn settings(&self) -> &DatabaseSettings {
        &self.settings
    }

    #[must_use]
    pub fn supports(&self, capability: Capability) -> bool {
        self.dialect.capabilities().contains(capability)
    }

    /// Returns true if the dialect is one of `ids`.
    #[must_use]
    pub fn is_any(&self, ids: &[DialectId]) -> bool {
        self.id().is_any(ids)
    }

    // =========================================================================
    // Quoting strategy
    // =========================================================================

    #[must_use]
    pub const fn quoting_strategy(&self) -> QuotingStrategy {
        self.settings.quoting_strategy
    }

    /// Returns a copy of this descriptor using `strategy`.
    #[must_use]
    pub fn with_quoting_strategy(&self, strategy: QuotingStrategy) -> Self {
        let mut copy = self.clone();
        copy.settings.quoting_strategy = strategy;
        copy
    }

    /// Switches the quoting strategy until the returned guard is dropped.
    ///
    /// The guard holds the only borrow of the descriptor, so nothing else can
    /// generate against it while the override is active. The previous
    /// strategy is restored on every exit path, unwinding included.
    #[must_use]
    pub fn override_quoting_strategy(&mut self, strategy: QuotingStrategy) -> QuotingOverride<'_> {
        let previous = std::mem::replace(&mut self.settings.quoting_strategy, strategy);
        QuotingOverride {
            database: self,
            previous,
        }
    }

    // =========================================================================
    // Identifiers
    // =========================================================================

    /// Quotes `name` if the current strategy requires it.
    #[must_use]
    pub fn quote_identifier(&self, name: &str) -> String {
        if self.is_quoted(name) || !self.needs_quoting(name) {
            return name.to_string();
        }
        self.quote(name)
    }

    /// Wraps `name` in quote characters unconditionally.
    #[must_use]
    pub fn quote(&self, name: &str) -> String {
        let open = self.dialect.quote_open();
        let close = self.dialect.quote_close();
        let mut escaped_close = String::with_capacity(2);
        escaped_close.push(close);
        escaped_close.push(close);
        let body = name.replace(close, &escaped_close);
        format!("{open}{body}{close}")
    }

    fn is_quoted(&self, name: &str) -> bool {
        name.len() >= 2
            && name.starts_with(self.dialect.quote_open())
            && name.ends_with(self.dialect.quote_close())
    }

    fn needs_quoting(&self, name: &str) -> bool {
        if self.settings.quoting_strategy == QuotingStrategy::QuoteAllObjects {
            return true;
        }
        name.contains('-')
            || name.starts_with(|c: char| c.is_ascii_digit())
            || self.dialect.is_reserved_word(name)
            || name.chars().any(|c| !(c.is_alphanumeric() || c == '_'))
    }

    /// Escapes a possibly qualified object name.
    ///
    /// Catalog and schema segments are written only when the dialect
    /// supports them. A segment equal to the configured default is dropped
    /// when writing defaults is disabled. Columns and constraints are never
    /// qualified.
    #[must_use]
    pub fn escape_qualified_name(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        name: &str,
        object_type: ObjectType,
    ) -> String {
        let object = self.quote_identifier(name);
        let qualifiable = match object_type {
            ObjectType::Column | ObjectType::Constraint => false,
            ObjectType::Index => self.dialect.qualifies_index_names(),
            _ => true,
        };
        if !qualifiable {
            return object;
        }

        let mut segments = Vec::with_capacity(3);
        let schema = self.effective_schema(schema);
        if let Some(catalog) = self.effective_catalog(catalog) {
            segments.push(self.quote_identifier(catalog));
            if self.supports(Capability::Schemas) {
                // Catalog-qualified names on schema-aware products need the
                // middle segment.
                let middle = schema.or_else(|| self.implied_schema());
                match middle {
                    Some(s) => segments.push(self.quote_identifier(s)),
                    None => segments.clear(),
                }
            }
        } else if let Some(schema) = schema {
            segments.push(self.quote_identifier(schema));
        }
        segments.push(object);
        segments.join(".")
    }

    fn implied_schema(&self) -> Option<&str> {
        self.settings
            .default_schema
            .as_deref()
            .or_else(|| self.dialect.default_schema_name())
    }

    fn effective_schema<'a>(&'a self, schema: Option<&'a str>) -> Option<&'a str> {
        if !self.supports(Capability::Schemas) {
            return None;
        }
        let schema = schema.or(self.settings.default_schema.as_deref())?;
        let is_default = self
            .implied_schema()
            .is_some_and(|d| d.eq_ignore_ascii_case(schema));
        if is_default && !self.settings.output_default_schema {
            return None;
        }
        Some(schema)
    }

    fn effective_catalog<'a>(&'a self, catalog: Option<&'a str>) -> Option<&'a str> {
        if !self.supports(Capability::Catalogs) {
            return None;
        }
        let catalog = catalog.or(self.settings.default_catalog.as_deref())?;
        let is_default = self
            .settings
            .default_catalog
            .as_deref()
            .is_some_and(|d| d.eq_ignore_ascii_case(catalog));
        if is_default && !self.settings.output_default_catalog {
            return None;
        }
        Some(catalog)
    }

    #[must_use]
    pub fn escape_table_name(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        table: &str,
    ) -> String {
        self.escape_qualified_name(catalog, schema, table, ObjectType::Table)
    }

    #[must_use]
    pub fn escape_view_name(&self, catalog: Option<&str>, schema: Option<&str>, view: &str) -> String {
        self.escape_qualified_name(catalog, schema, view, ObjectType::View)
    }

    #[must_use]
    pub fn escape_sequence_name(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        sequence: &str,
    ) -> String {
        self.escape_qualified_name(catalog, schema, sequence, ObjectType::Sequence)
    }

    #[must_use]
    pub fn escape_index_name(&self, catalog: Option<&str>, schema: Option<&str>, index: &str) -> String {
        self.escape_qualified_name(catalog, schema, index, ObjectType::Index)
    }

    #[must_use]
    pub fn escape_column_name(&self, column: &str) -> String {
        self.escape_qualified_name(None, None, column, ObjectType::Column)
    }

    #[must_use]
    pub fn escape_constraint_name(&self, constraint: &str) -> String {
        self.escape_qualified_name(None, None, constraint, ObjectType::Constraint)
    }

    /// Escapes and comma-joins a list of column names.
    #[must_use]
    pub fn escape_column_list<S: AsRef<str>>(&self, columns: &[S]) -> String {
        columns
            .iter()
            .map(|c| self.escape_column_name(c.as_ref()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Applies the dialect's case folding and length limit to a generated
    /// object name.
    #[must_use]
    pub fn correct_object_name(&self, name: &str) -> String {
        let folded = match self.dialect.identifier_case() {
            IdentifierCase::Upper => name.to_uppercase(),
            IdentifierCase::Lower => name.to_lowercase(),
            IdentifierCase::Preserve => name.to_string(),
        };
        folded
            .chars()
            .take(self.dialect.max_identifier_length())
            .collect()
    }

    // =========================================================================
    // Clauses and literals
    // =========================================================================

    /// Renders the auto-increment clause.
    ///
    /// Start and increment are written only when they differ from 1.
    #[must_use]
    pub fn auto_increment_clause(
        &self,
        start_with: Option<i64>,
        increment_by: Option<i64>,
        generation_type: Option<&str>,
        default_on_null: bool,
    ) -> String {
        let dialect = self.dialect;
        let base = dialect.auto_increment_base(generation_type, default_on_null);
        let start = start_with.filter(|n| *n != 1);
        let increment = increment_by.filter(|n| *n != 1);
        if !dialect.emits_auto_increment_parameters() || (start.is_none() && increment.is_none()) {
            return base;
        }

        let parameters: Vec<String> = if dialect.auto_increment_requires_both() {
            vec![
                dialect.auto_increment_start_with(start_with.unwrap_or(1)),
                dialect.auto_increment_by(increment_by.unwrap_or(1)),
            ]
        } else {
            start
                .map(|n| dialect.auto_increment_start_with(n))
                .into_iter()
                .chain(increment.map(|n| dialect.auto_increment_by(n)))
                .collect()
        };
        format!(
            "{base}{}{}{}",
            dialect.auto_increment_opening(),
            parameters.join(dialect.auto_increment_separator()),
            dialect.auto_increment_closing()
        )
    }

    /// Renders a column type description for this dialect.
    #[must_use]
    pub fn data_type(&self, description: &str, auto_increment: bool) -> String {
        let parsed = DataType::parse(description);
        if auto_increment {
            if let Some(serial) = self.dialect.auto_increment_type(&parsed) {
                return serial;
            }
        }
        self.dialect.map_data_type(&parsed)
    }

    /// Quotes and escapes a string literal.
    #[must_use]
    pub fn string_literal(&self, value: &str) -> String {
        format!("'{}'", self.dialect.escape_string(value))
    }

    /// Returns the boolean literal for `value`.
    #[must_use]
    pub fn boolean_literal(&self, value: bool) -> &'static str {
        if value {
            self.dialect.true_literal()
        } else {
            self.dialect.false_literal()
        }
    }

    /// Prefixes `text` with the dialect's line comment marker.
    #[must_use]
    pub fn line_comment(&self, text: &str) -> String {
        format!("{} {text}", self.dialect.line_comment())
    }
}

/// Restores the previous quoting strategy when dropped.
#[derive(Debug)]
pub struct QuotingOverride<'a> {
    database: &'a mut Database,
    previous: QuotingStrategy,
}

impl Deref for QuotingOverride<'_> {
    type Target = Database;

    fn deref(&self) -> &Database {
        self.database
    }
}

impl DerefMut for QuotingOverride<'_> {
    fn deref_mut(&mut self) -> &mut Database {
        self.database
    }
}

impl Drop for QuotingOverride<'_> {
    fn drop(&mut self) {
        self.database.settings.quoting_strategy = self.previous;
    }
}
