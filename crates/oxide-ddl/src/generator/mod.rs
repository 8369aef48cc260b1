//! Statement-to-SQL generators.
//!
//! Every statement kind has a generic generator that works on any dialect,
//! with per-dialect branches where the syntax differs. Dialects whose syntax
//! differs wholesale get their own generator, registered for just those
//! dialects; the registry prefers it over the generic one.

/// Escaped, qualified name of the table a statement targets.
macro_rules! table_of {
    ($database:expr, $statement:expr) => {
        $database.escape_table_name(
            $statement.catalog_name.as_deref(),
            $statement.schema_name.as_deref(),
            &$statement.table_name,
        )
    };
}

mod clause;
mod column;
mod constraint;
mod data;
mod index;
mod registry;
mod sequence;
mod table;
mod view;

pub use clause::Clauses;
pub use registry::{default_registry, Generated, GeneratorRegistry};

use crate::database::{Capability, Database, DialectId};
use crate::error::{GenerateError, Result};
use crate::sql::Sql;
use crate::statement::{ReorganizeTable, Statement, StatementKind, StatementVariant};
use crate::validation::ValidationResult;

/// Default priority of a generator.
pub const PRIORITY_DEFAULT: i32 = 1;

/// Priority for generators that override another for the same dialects.
pub const PRIORITY_OVERRIDE: i32 = 5;

/// One step of generated output.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Finished SQL.
    Sql(Sql),
    /// A statement to generate and emit at this point.
    Statement(Box<Statement>),
}

/// Ordered output of a generator.
///
/// Follow-up statements are generated by the registry in place, so the
/// final SQL keeps the order in which steps were added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Output {
    steps: Vec<Step>,
}

impl Output {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sql: Sql) {
        self.steps.push(Step::Sql(sql));
    }

    /// Pushes a statement ended by the default delimiter.
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.push(Sql::new(text));
    }

    /// Queues another statement to be generated after what is already here.
    pub fn follow_with(&mut self, statement: impl Into<Statement>) {
        self.steps.push(Step::Statement(Box::new(statement.into())));
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[must_use]
    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

impl From<Sql> for Output {
    fn from(sql: Sql) -> Self {
        Self {
            steps: vec![Step::Sql(sql)],
        }
    }
}

impl From<String> for Output {
    fn from(text: String) -> Self {
        Sql::new(text).into()
    }
}

/// Renders one statement kind.
pub trait SqlGenerator: Send + Sync + 'static {
    type Statement: StatementVariant;

    fn name(&self) -> &'static str;

    /// Dialects this generator is written for. Empty means all of them.
    fn dialects(&self) -> &'static [DialectId] {
        &[]
    }

    fn priority(&self) -> i32 {
        PRIORITY_DEFAULT
    }

    /// Whether this generator can render `statement` for `database` at all.
    fn supports(&self, _statement: &Self::Statement, _database: &Database) -> bool {
        true
    }

    fn validate(&self, _statement: &Self::Statement, _database: &Database) -> ValidationResult {
        ValidationResult::new()
    }

    fn generate(&self, statement: &Self::Statement, database: &Database) -> Result<Output>;
}

/// Object-safe view of a [`SqlGenerator`] over any [`Statement`].
pub trait DynGenerator: Send + Sync {
    fn name(&self) -> &'static str;

    fn kind(&self) -> StatementKind;

    fn dialects(&self) -> &'static [DialectId];

    fn priority(&self) -> i32;

    fn supports(&self, statement: &Statement, database: &Database) -> bool;

    fn validate(&self, statement: &Statement, database: &Database) -> ValidationResult;

    fn generate(&self, statement: &Statement, database: &Database) -> Result<Output>;
}

impl<G: SqlGenerator> DynGenerator for G {
    fn name(&self) -> &'static str {
        SqlGenerator::name(self)
    }

    fn kind(&self) -> StatementKind {
        G::Statement::KIND
    }

    fn dialects(&self) -> &'static [DialectId] {
        SqlGenerator::dialects(self)
    }

    fn priority(&self) -> i32 {
        SqlGenerator::priority(self)
    }

    fn supports(&self, statement: &Statement, database: &Database) -> bool {
        G::Statement::from_statement(statement)
            .is_some_and(|s| SqlGenerator::supports(self, s, database))
    }

    fn validate(&self, statement: &Statement, database: &Database) -> ValidationResult {
        match G::Statement::from_statement(statement) {
            Some(s) => SqlGenerator::validate(self, s, database),
            None => {
                let mut result = ValidationResult::new();
                result.invalid(format!(
                    "{} cannot handle {}",
                    SqlGenerator::name(self),
                    statement.kind()
                ));
                result
            }
        }
    }

    fn generate(&self, statement: &Statement, database: &Database) -> Result<Output> {
        let s = G::Statement::from_statement(statement).ok_or(
            GenerateError::UnsupportedStatement {
                statement: statement.kind(),
                dialect: database.id(),
            },
        )?;
        SqlGenerator::generate(self, s, database)
    }
}

/// Registers every built-in generator.
pub fn register_defaults(registry: &mut GeneratorRegistry) {
    column::register(registry);
    table::register(registry);
    constraint::register(registry);
    index::register(registry);
    sequence::register(registry);
    view::register(registry);
    data::register(registry);
}

// =============================================================================
// Helpers shared by the generators
// =============================================================================

/// Queues a DB2 `REORG TABLE` after statements that leave the table in
/// reorg-pending state.
fn reorganize_on_db2(
    output: &mut Output,
    database: &Database,
    catalog: Option<&String>,
    schema: Option<&String>,
    table: &str,
) {
    if database.id() == DialectId::Db2 {
        output.follow_with(ReorganizeTable {
            catalog_name: catalog.cloned(),
            schema_name: schema.cloned(),
            table_name: table.to_string(),
        });
    }
}

/// Where a tablespace clause is going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TablespaceTarget {
    Table,
    Index,
    /// The index backing a primary key or unique constraint.
    ConstraintIndex,
}

/// Renders the tablespace clause, or `None` where the dialect has no place
/// for it.
fn tablespace_clause(
    database: &Database,
    tablespace: Option<&str>,
    target: TablespaceTarget,
) -> Option<String> {
    let tablespace = tablespace?;
    if !database.supports(Capability::Tablespaces) {
        return None;
    }
    let name = database.quote_identifier(tablespace);
    match (database.id(), target) {
        (DialectId::Mssql | DialectId::Sybase, _) => Some(format!("ON {name}")),
        (DialectId::Db2, TablespaceTarget::ConstraintIndex) => None,
        (DialectId::Db2 | DialectId::Informix, _) => Some(format!("IN {name}")),
        (_, TablespaceTarget::ConstraintIndex) => Some(format!("USING INDEX TABLESPACE {name}")),
        (_, TablespaceTarget::Table | TablespaceTarget::Index) => {
            Some(format!("TABLESPACE {name}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tablespace_keywords() {
        let ts = Some("fast");
        let clause = |id, target| tablespace_clause(&Database::new(id), ts, target);
        assert_eq!(clause(DialectId::Mssql, TablespaceTarget::Table).as_deref(), Some("ON fast"));
        assert_eq!(clause(DialectId::Db2, TablespaceTarget::Table).as_deref(), Some("IN fast"));
        assert_eq!(clause(DialectId::Db2, TablespaceTarget::ConstraintIndex), None);
        assert_eq!(
            clause(DialectId::Oracle, TablespaceTarget::ConstraintIndex).as_deref(),
            Some("USING INDEX TABLESPACE fast")
        );
        assert_eq!(
            clause(DialectId::Postgres, TablespaceTarget::Index).as_deref(),
            Some("TABLESPACE fast")
        );
        assert_eq!(clause(DialectId::Sqlite, TablespaceTarget::Table), None);
    }

    #[test]
    fn test_output_keeps_order() {
        let mut output = Output::from(Sql::new("A"));
        output.follow_with(ReorganizeTable::new("t"));
        output.push_text("B");
        assert_eq!(output.steps().len(), 3);
        assert!(matches!(output.steps()[1], Step::Statement(_)));
    }
}
