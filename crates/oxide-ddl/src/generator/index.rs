//! Index generators.

use super::{tablespace_clause, Clauses, GeneratorRegistry, Output, SqlGenerator, TablespaceTarget};
use crate::database::{Capability, Database, DialectId};
use crate::error::Result;
use crate::statement::{CreateIndex, DropIndex};
use crate::validation::ValidationResult;

pub(super) fn register(registry: &mut GeneratorRegistry) {
    registry.register(CreateIndexGenerator);
    registry.register(DropIndexGenerator);
}

#[derive(Debug)]
struct CreateIndexGenerator;

impl SqlGenerator for CreateIndexGenerator {
    type Statement = CreateIndex;

    fn name(&self) -> &'static str {
        "create_index"
    }

    fn validate(&self, s: &CreateIndex, database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("indexName", &s.index_name);
        result.check_required("tableName", &s.table_name);
        result.check_required("columns", &s.columns);
        result.check_allowed_only(
            "clustered",
            &s.clustered,
            database,
            &[DialectId::Mssql, DialectId::Sybase, DialectId::Postgres],
        );
        result.check_disallowed_without(
            "tablespace",
            &s.tablespace,
            database,
            Capability::Tablespaces,
        );
        result
    }

    fn generate(&self, s: &CreateIndex, database: &Database) -> Result<Output> {
        let table = table_of!(database, s);
        let index = database.escape_index_name(
            s.catalog_name.as_deref(),
            s.schema_name.as_deref(),
            &s.index_name,
        );
        // Firebird orders a whole index, not single columns.
        let firebird = database.id() == DialectId::Firebird;
        let descending_index = firebird && s.columns.iter().any(|c| c.descending);
        let clustered = s
            .clustered
            .filter(|_| database.is_any(&[DialectId::Mssql, DialectId::Sybase]))
            .map(|c| if c { "CLUSTERED" } else { "NONCLUSTERED" });

        let columns = s
            .columns
            .iter()
            .map(|c| {
                let name = if c.computed {
                    c.name.clone()
                } else {
                    database.escape_column_name(&c.name)
                };
                if c.descending && !firebird {
                    format!("{name} DESC")
                } else {
                    name
                }
            })
            .collect::<Vec<_>>();

        let sql = Clauses::with("CREATE")
            .push_if(s.unique, "UNIQUE")
            .push_opt(clustered)
            .push_if(descending_index, "DESCENDING")
            .push(format!("INDEX {index} ON {table}({})", columns.join(", ")))
            .push_opt(tablespace_clause(
                database,
                s.tablespace.as_deref(),
                TablespaceTarget::Index,
            ))
            .build();
        let mut output = Output::from(sql);

        if database.id() == DialectId::Postgres && s.clustered == Some(true) {
            output.push_text(format!(
                "CLUSTER {table} USING {}",
                database.quote_identifier(&s.index_name)
            ));
        }
        Ok(output)
    }
}

#[derive(Debug)]
struct DropIndexGenerator;

impl SqlGenerator for DropIndexGenerator {
    type Statement = DropIndex;

    fn name(&self) -> &'static str {
        "drop_index"
    }

    fn validate(&self, s: &DropIndex, database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("indexName", &s.index_name);
        result.check_required_on(
            "tableName",
            &s.table_name,
            database,
            &[
                DialectId::MySql,
                DialectId::MariaDb,
                DialectId::Mssql,
                DialectId::Sybase,
            ],
        );
        result
    }

    fn generate(&self, s: &DropIndex, database: &Database) -> Result<Output> {
        let catalog = s.catalog_name.as_deref();
        let schema = s.schema_name.as_deref();
        let table = s
            .table_name
            .as_deref()
            .map(|t| database.escape_table_name(catalog, schema, t));
        let sql = match (database.id(), table) {
            (DialectId::MySql | DialectId::MariaDb | DialectId::Mssql, Some(table)) => format!(
                "DROP INDEX {} ON {table}",
                database.quote_identifier(&s.index_name)
            ),
            (DialectId::Sybase, Some(table)) => format!(
                "DROP INDEX {table}.{}",
                database.quote_identifier(&s.index_name)
            ),
            _ => format!(
                "DROP INDEX {}",
                database.escape_index_name(catalog, schema, &s.index_name)
            ),
        };
        Ok(sql.into())
    }
}
