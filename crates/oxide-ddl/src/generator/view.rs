//! View and stored procedure generators.

use super::{GeneratorRegistry, Output, SqlGenerator};
use crate::database::{Capability, Database, DialectId, ObjectType};
use crate::error::Result;
use crate::sql::Sql;
use crate::statement::{CreateProcedure, CreateView, DropProcedure, DropView, RenameView};
use crate::validation::ValidationResult;

pub(super) fn register(registry: &mut GeneratorRegistry) {
    registry.register(CreateViewGenerator);
    registry.register(CreateViewMssqlGenerator);
    registry.register(DropViewGenerator);
    registry.register(RenameViewGenerator);
    registry.register(CreateProcedureGenerator);
    registry.register(DropProcedureGenerator);
}

fn view_name(database: &Database, s: &CreateView) -> String {
    database.escape_view_name(
        s.catalog_name.as_deref(),
        s.schema_name.as_deref(),
        &s.view_name,
    )
}

fn validate_view(s: &CreateView, database: &Database) -> ValidationResult {
    let mut result = ValidationResult::new();
    result.check_required("viewName", &s.view_name);
    result.check_required("selectQuery", &s.select_query);
    result.check_disallowed(
        "replaceIfExists",
        &s.replace_if_exists,
        database,
        &[DialectId::Derby, DialectId::Sybase],
    );
    result
}

// =============================================================================
// Views
// =============================================================================

#[derive(Debug)]
struct CreateViewGenerator;

impl SqlGenerator for CreateViewGenerator {
    type Statement = CreateView;

    fn name(&self) -> &'static str {
        "create_view"
    }

    fn validate(&self, s: &CreateView, database: &Database) -> ValidationResult {
        validate_view(s, database)
    }

    fn generate(&self, s: &CreateView, database: &Database) -> Result<Output> {
        let query = s.select_query.trim();
        if s.full_definition {
            return Ok(query.to_string().into());
        }
        let view = view_name(database, s);
        if !s.replace_if_exists {
            return Ok(format!("CREATE VIEW {view} AS {query}").into());
        }
        let output = match database.id() {
            DialectId::Firebird => format!("CREATE OR ALTER VIEW {view} AS {query}").into(),
            DialectId::Sqlite | DialectId::Hsql => {
                let mut output = Output::from(format!("DROP VIEW IF EXISTS {view}"));
                output.push_text(format!("CREATE VIEW {view} AS {query}"));
                output
            }
            _ => format!("CREATE OR REPLACE VIEW {view} AS {query}").into(),
        };
        Ok(output)
    }
}

/// SQL Server has no CREATE OR REPLACE VIEW; a stub view is created if
/// missing and then altered.
#[derive(Debug)]
struct CreateViewMssqlGenerator;

impl SqlGenerator for CreateViewMssqlGenerator {
    type Statement = CreateView;

    fn name(&self) -> &'static str {
        "create_view_mssql"
    }

    fn dialects(&self) -> &'static [DialectId] {
        &[DialectId::Mssql]
    }

    fn validate(&self, s: &CreateView, database: &Database) -> ValidationResult {
        validate_view(s, database)
    }

    fn generate(&self, s: &CreateView, database: &Database) -> Result<Output> {
        let query = s.select_query.trim();
        if s.full_definition {
            return Ok(query.to_string().into());
        }
        let view = view_name(database, s);
        if !s.replace_if_exists {
            return Ok(format!("CREATE VIEW {view} AS {query}").into());
        }
        let literal = database.dialect().escape_string(&view);
        let mut output = Output::from(format!(
            "IF NOT EXISTS (SELECT * FROM sys.views WHERE object_id = OBJECT_ID(N'{literal}')) \
             EXEC sp_executesql N'CREATE VIEW {literal} AS SELECT ''stub'' AS stub'"
        ));
        output.push_text(format!("ALTER VIEW {view} AS {query}"));
        Ok(output)
    }
}

#[derive(Debug)]
struct DropViewGenerator;

impl SqlGenerator for DropViewGenerator {
    type Statement = DropView;

    fn name(&self) -> &'static str {
        "drop_view"
    }

    fn validate(&self, s: &DropView, database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("viewName", &s.view_name);
        result.check_disallowed_without("ifExists", &s.if_exists, database, Capability::DropIfExists);
        result
    }

    fn generate(&self, s: &DropView, database: &Database) -> Result<Output> {
        let view = database.escape_view_name(
            s.catalog_name.as_deref(),
            s.schema_name.as_deref(),
            &s.view_name,
        );
        let sql = if s.if_exists {
            format!("DROP VIEW IF EXISTS {view}")
        } else {
            format!("DROP VIEW {view}")
        };
        Ok(sql.into())
    }
}

#[derive(Debug)]
struct RenameViewGenerator;

impl SqlGenerator for RenameViewGenerator {
    type Statement = RenameView;

    fn name(&self) -> &'static str {
        "rename_view"
    }

    fn supports(&self, _s: &RenameView, database: &Database) -> bool {
        database.is_any(&[
            DialectId::Generic,
            DialectId::Postgres,
            DialectId::Oracle,
            DialectId::Mssql,
            DialectId::MySql,
            DialectId::MariaDb,
        ])
    }

    fn validate(&self, s: &RenameView, _database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("oldViewName", &s.old_view_name);
        result.check_required("newViewName", &s.new_view_name);
        result
    }

    fn generate(&self, s: &RenameView, database: &Database) -> Result<Output> {
        let old = database.escape_view_name(
            s.catalog_name.as_deref(),
            s.schema_name.as_deref(),
            &s.old_view_name,
        );
        let new = database.quote_identifier(&s.new_view_name);
        let sql = match database.id() {
            DialectId::Oracle => format!("RENAME {old} TO {new}"),
            DialectId::Mssql => format!(
                "exec sp_rename {}, {}",
                database.string_literal(&old),
                database.string_literal(&s.new_view_name)
            ),
            DialectId::MySql | DialectId::MariaDb => format!("RENAME TABLE {old} TO {new}"),
            _ => format!("ALTER VIEW {old} RENAME TO {new}"),
        };
        Ok(sql.into())
    }
}

// =============================================================================
// Procedures
// =============================================================================

#[derive(Debug)]
struct CreateProcedureGenerator;

impl SqlGenerator for CreateProcedureGenerator {
    type Statement = CreateProcedure;

    fn name(&self) -> &'static str {
        "create_procedure"
    }

    fn supports(&self, _s: &CreateProcedure, database: &Database) -> bool {
        database.id() != DialectId::Sqlite
    }

    fn validate(&self, s: &CreateProcedure, _database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("procedureText", &s.procedure_text);
        result
    }

    fn generate(&self, s: &CreateProcedure, database: &Database) -> Result<Output> {
        let delimiter = s
            .end_delimiter
            .clone()
            .unwrap_or_else(|| database.dialect().procedure_end_delimiter().to_string());
        Ok(Sql::new(s.procedure_text.trim_end())
            .with_delimiter(delimiter)
            .into())
    }
}

#[derive(Debug)]
struct DropProcedureGenerator;

impl SqlGenerator for DropProcedureGenerator {
    type Statement = DropProcedure;

    fn name(&self) -> &'static str {
        "drop_procedure"
    }

    fn supports(&self, _s: &DropProcedure, database: &Database) -> bool {
        database.id() != DialectId::Sqlite
    }

    fn validate(&self, s: &DropProcedure, _database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("procedureName", &s.procedure_name);
        result
    }

    fn generate(&self, s: &DropProcedure, database: &Database) -> Result<Output> {
        Ok(format!(
            "DROP PROCEDURE {}",
            database.escape_qualified_name(
                s.catalog_name.as_deref(),
                s.schema_name.as_deref(),
                &s.procedure_name,
                ObjectType::Procedure,
            )
        )
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::default_registry;
    use crate::statement::Statement;

    fn sql(statement: impl Into<Statement>, id: DialectId) -> Vec<Sql> {
        default_registry()
            .generate_sql(&statement.into(), &Database::new(id))
            .unwrap()
    }

    fn texts(statement: impl Into<Statement>, id: DialectId) -> Vec<String> {
        sql(statement, id).into_iter().map(|s| s.text).collect()
    }

    #[test]
    fn test_create_view_replace() {
        let stmt = CreateView::new("v_person", "SELECT id, name FROM person").replace_if_exists();
        assert_eq!(
            texts(stmt.clone(), DialectId::Postgres),
            vec!["CREATE OR REPLACE VIEW v_person AS SELECT id, name FROM person"]
        );
        assert_eq!(
            texts(stmt.clone(), DialectId::Firebird),
            vec!["CREATE OR ALTER VIEW v_person AS SELECT id, name FROM person"]
        );
        assert_eq!(
            texts(stmt.clone(), DialectId::Sqlite),
            vec![
                "DROP VIEW IF EXISTS v_person",
                "CREATE VIEW v_person AS SELECT id, name FROM person",
            ]
        );
        let mssql = texts(stmt.clone(), DialectId::Mssql);
        assert_eq!(mssql.len(), 2);
        assert!(mssql[0].starts_with("IF NOT EXISTS"));
        assert_eq!(mssql[1], "ALTER VIEW v_person AS SELECT id, name FROM person");
        assert!(default_registry()
            .generate(&stmt.into(), &Database::new(DialectId::Derby))
            .is_err());
    }

    #[test]
    fn test_full_definition_passes_through() {
        let stmt = CreateView {
            full_definition: true,
            ..CreateView::new("v", "CREATE VIEW v (a) AS SELECT 1")
        };
        assert_eq!(texts(stmt, DialectId::H2), vec!["CREATE VIEW v (a) AS SELECT 1"]);
    }

    #[test]
    fn test_rename_view() {
        let stmt = RenameView::new("v_old", "v_new");
        assert_eq!(
            texts(stmt.clone(), DialectId::Postgres),
            vec!["ALTER VIEW v_old RENAME TO v_new"]
        );
        assert_eq!(texts(stmt.clone(), DialectId::MySql), vec!["RENAME TABLE v_old TO v_new"]);
        assert!(!default_registry().supports(&stmt.into(), &Database::new(DialectId::Db2)));
    }

    #[test]
    fn test_rename_view_escapes_sp_rename_arguments() {
        assert_eq!(
            texts(RenameView::new("v_old", "v_'new"), DialectId::Mssql),
            vec!["exec sp_rename 'v_old', 'v_''new'"]
        );
    }

    #[test]
    fn test_procedure_delimiters() {
        let body = "CREATE PROCEDURE p AS BEGIN SELECT 1; END";
        let oracle = sql(CreateProcedure::new(body).named("p"), DialectId::Oracle);
        assert_eq!(
            oracle[0].end_delimiter,
            DialectId::Oracle.dialect().procedure_end_delimiter()
        );
        let custom = CreateProcedure {
            end_delimiter: Some("$$".to_string()),
            ..CreateProcedure::new(body)
        };
        assert_eq!(sql(custom, DialectId::Postgres)[0].to_string(), format!("{body}$$"));
        assert_eq!(texts(DropProcedure::new("p"), DialectId::Postgres), vec!["DROP PROCEDURE p"]);
    }
}
