//! Data manipulation and pass-through generators.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::{GeneratorRegistry, Output, SqlGenerator};
use crate::database::{Database, DialectId};
use crate::error::Result;
use crate::sql::Sql;
use crate::statement::{
    ColumnValue, Comment, CopyRows, Delete, Insert, InsertOrUpdate, RawSql, Update, WhereClause,
};
use crate::types::DataType;
use crate::validation::ValidationResult;

pub(super) fn register(registry: &mut GeneratorRegistry) {
    registry.register(InsertGenerator);
    registry.register(UpdateGenerator);
    registry.register(DeleteGenerator);
    registry.register(InsertOrUpdateGenerator);
    registry.register(CopyRowsGenerator);
    registry.register(RawSqlGenerator);
    registry.register(CommentGenerator);
}

// =============================================================================
// Values and conditions
// =============================================================================

fn render_value(database: &Database, value: &ColumnValue) -> String {
    let hint = value.column_type.as_deref().map(DataType::parse);
    value.value.to_sql(database, hint.as_ref())
}

fn column_names(database: &Database, values: &[ColumnValue]) -> String {
    let names = values.iter().map(|v| v.name.as_str()).collect::<Vec<_>>();
    database.escape_column_list(&names)
}

fn rendered_values(database: &Database, values: &[ColumnValue]) -> String {
    values
        .iter()
        .map(|v| render_value(database, v))
        .collect::<Vec<_>>()
        .join(", ")
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r":(name|value)\b").expect("Invalid placeholder regex"))
}

/// Checks that the condition has exactly one column or parameter for each
/// placeholder.
fn validate_where(clause: Option<&WhereClause>, result: &mut ValidationResult) {
    let Some(clause) = clause else {
        return;
    };
    result.check_required("where", &clause.condition);
    let (mut names, mut values) = (0, 0);
    for captures in placeholder_pattern().captures_iter(&clause.condition) {
        if &captures[1] == "name" {
            names += 1;
        } else {
            values += 1;
        }
    }
    if names != clause.column_names.len() {
        result.invalid(format!(
            "where clause has {names} :name placeholders but {} column names",
            clause.column_names.len()
        ));
    }
    if values != clause.parameters.len() {
        result.invalid(format!(
            "where clause has {values} :value placeholders but {} parameters",
            clause.parameters.len()
        ));
    }
}

/// Substitutes placeholders in order. Validation guarantees the counts
/// match.
fn render_where(database: &Database, clause: &WhereClause) -> String {
    let mut columns = clause.column_names.iter();
    let mut parameters = clause.parameters.iter();
    placeholder_pattern()
        .replace_all(&clause.condition, |captures: &Captures<'_>| {
            if &captures[1] == "name" {
                columns
                    .next()
                    .map(|c| database.escape_column_name(c))
                    .unwrap_or_default()
            } else {
                parameters
                    .next()
                    .map(|p| p.to_sql(database, None))
                    .unwrap_or_default()
            }
        })
        .into_owned()
}

fn where_suffix(database: &Database, clause: Option<&WhereClause>) -> String {
    clause
        .map(|c| format!(" WHERE {}", render_where(database, c)))
        .unwrap_or_default()
}

// =============================================================================
// Insert, update, delete
// =============================================================================

#[derive(Debug)]
struct InsertGenerator;

impl SqlGenerator for InsertGenerator {
    type Statement = Insert;

    fn name(&self) -> &'static str {
        "insert"
    }

    fn validate(&self, s: &Insert, _database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("tableName", &s.table_name);
        result.check_required("values", &s.values);
        result
    }

    fn generate(&self, s: &Insert, database: &Database) -> Result<Output> {
        Ok(format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table_of!(database, s),
            column_names(database, &s.values),
            rendered_values(database, &s.values)
        )
        .into())
    }
}

#[derive(Debug)]
struct UpdateGenerator;

impl SqlGenerator for UpdateGenerator {
    type Statement = Update;

    fn name(&self) -> &'static str {
        "update"
    }

    fn validate(&self, s: &Update, _database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("tableName", &s.table_name);
        result.check_required("values", &s.values);
        validate_where(s.where_clause.as_ref(), &mut result);
        result
    }

    fn generate(&self, s: &Update, database: &Database) -> Result<Output> {
        let assignments = s
            .values
            .iter()
            .map(|v| {
                format!(
                    "{} = {}",
                    database.escape_column_name(&v.name),
                    render_value(database, v)
                )
            })
            .collect::<Vec<_>>();
        Ok(format!(
            "UPDATE {} SET {}{}",
            table_of!(database, s),
            assignments.join(", "),
            where_suffix(database, s.where_clause.as_ref())
        )
        .into())
    }
}

#[derive(Debug)]
struct DeleteGenerator;

impl SqlGenerator for DeleteGenerator {
    type Statement = Delete;

    fn name(&self) -> &'static str {
        "delete"
    }

    fn validate(&self, s: &Delete, _database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("tableName", &s.table_name);
        validate_where(s.where_clause.as_ref(), &mut result);
        result
    }

    fn generate(&self, s: &Delete, database: &Database) -> Result<Output> {
        Ok(format!(
            "DELETE FROM {}{}",
            table_of!(database, s),
            where_suffix(database, s.where_clause.as_ref())
        )
        .into())
    }
}

// =============================================================================
// Upsert
// =============================================================================

/// Insert-or-update, spelled with each product's native upsert.
#[derive(Debug)]
struct InsertOrUpdateGenerator;

impl InsertOrUpdateGenerator {
    fn merge(s: &InsertOrUpdate, database: &Database, table: &str) -> String {
        let source = s
            .values
            .iter()
            .map(|v| {
                format!(
                    "{} AS {}",
                    render_value(database, v),
                    database.escape_column_name(&v.name)
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        let from = match database.id() {
            DialectId::Oracle => " FROM dual",
            DialectId::Db2 => " FROM SYSIBM.SYSDUMMY1",
            DialectId::Hsql => " FROM (VALUES(0))",
            _ => "",
        };
        let on = s
            .primary_key_columns
            .iter()
            .map(|k| {
                let k = database.escape_column_name(k);
                format!("tgt.{k} = src.{k}")
            })
            .collect::<Vec<_>>()
            .join(" AND ");
        let updates = s
            .non_key_values()
            .map(|v| {
                let c = database.escape_column_name(&v.name);
                format!("tgt.{c} = src.{c}")
            })
            .collect::<Vec<_>>();
        let inserted = s
            .values
            .iter()
            .map(|v| format!("src.{}", database.escape_column_name(&v.name)))
            .collect::<Vec<_>>()
            .join(", ");

        let mut sql = format!("MERGE INTO {table} tgt USING (SELECT {source}{from}) src ON ({on})");
        if !updates.is_empty() {
            sql.push_str(&format!(" WHEN MATCHED THEN UPDATE SET {}", updates.join(", ")));
        }
        sql.push_str(&format!(
            " WHEN NOT MATCHED THEN INSERT ({}) VALUES ({inserted})",
            column_names(database, &s.values)
        ));
        sql
    }
}

impl SqlGenerator for InsertOrUpdateGenerator {
    type Statement = InsertOrUpdate;

    fn name(&self) -> &'static str {
        "insert_or_update"
    }

    fn supports(&self, _s: &InsertOrUpdate, database: &Database) -> bool {
        database.is_any(&[
            DialectId::MySql,
            DialectId::MariaDb,
            DialectId::Postgres,
            DialectId::Sqlite,
            DialectId::H2,
            DialectId::Firebird,
            DialectId::Oracle,
            DialectId::Mssql,
            DialectId::Db2,
            DialectId::Hsql,
        ])
    }

    fn validate(&self, s: &InsertOrUpdate, _database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("tableName", &s.table_name);
        result.check_required("primaryKeyColumns", &s.primary_key_columns);
        result.check_required("values", &s.values);
        for key in &s.primary_key_columns {
            if !s.values.iter().any(|v| &v.name == key) {
                result.invalid(format!("primary key column '{key}' has no value"));
            }
        }
        result
    }

    fn generate(&self, s: &InsertOrUpdate, database: &Database) -> Result<Output> {
        let table = table_of!(database, s);
        let columns = column_names(database, &s.values);
        let values = rendered_values(database, &s.values);
        let keys = database.escape_column_list(&s.primary_key_columns);
        let non_keys = s
            .non_key_values()
            .map(|v| database.escape_column_name(&v.name))
            .collect::<Vec<_>>();

        let sql = match database.id() {
            DialectId::MySql | DialectId::MariaDb if non_keys.is_empty() => {
                format!("INSERT IGNORE INTO {table} ({columns}) VALUES ({values})")
            }
            DialectId::MySql | DialectId::MariaDb => {
                let updates = non_keys
                    .iter()
                    .map(|c| format!("{c} = VALUES({c})"))
                    .collect::<Vec<_>>();
                format!(
                    "INSERT INTO {table} ({columns}) VALUES ({values}) ON DUPLICATE KEY UPDATE {}",
                    updates.join(", ")
                )
            }
            DialectId::Postgres => {
                let action = if non_keys.is_empty() {
                    "DO NOTHING".to_string()
                } else {
                    let updates = non_keys
                        .iter()
                        .map(|c| format!("{c} = EXCLUDED.{c}"))
                        .collect::<Vec<_>>();
                    format!("DO UPDATE SET {}", updates.join(", "))
                };
                format!("INSERT INTO {table} ({columns}) VALUES ({values}) ON CONFLICT ({keys}) {action}")
            }
            DialectId::Sqlite => {
                format!("INSERT OR REPLACE INTO {table} ({columns}) VALUES ({values})")
            }
            DialectId::H2 => format!("MERGE INTO {table} ({columns}) KEY ({keys}) VALUES ({values})"),
            DialectId::Firebird => format!(
                "UPDATE OR INSERT INTO {table} ({columns}) VALUES ({values}) MATCHING ({keys})"
            ),
            _ => Self::merge(s, database, &table),
        };
        Ok(sql.into())
    }
}

// =============================================================================
// Copy, raw SQL and comments
// =============================================================================

#[derive(Debug)]
struct CopyRowsGenerator;

impl SqlGenerator for CopyRowsGenerator {
    type Statement = CopyRows;

    fn name(&self) -> &'static str {
        "copy_rows"
    }

    fn validate(&self, s: &CopyRows, _database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("sourceTableName", &s.source_table_name);
        result.check_required("targetTableName", &s.target_table_name);
        result.check_required("columns", &s.columns);
        result
    }

    fn generate(&self, s: &CopyRows, database: &Database) -> Result<Output> {
        let catalog = s.catalog_name.as_deref();
        let schema = s.schema_name.as_deref();
        let targets = s.columns.iter().map(|c| c.target.as_str()).collect::<Vec<_>>();
        let sources = s.columns.iter().map(|c| c.source.as_str()).collect::<Vec<_>>();
        Ok(format!(
            "INSERT INTO {} ({}) SELECT {} FROM {}",
            database.escape_table_name(catalog, schema, &s.target_table_name),
            database.escape_column_list(&targets),
            database.escape_column_list(&sources),
            database.escape_table_name(catalog, schema, &s.source_table_name)
        )
        .into())
    }
}

#[derive(Debug)]
struct RawSqlGenerator;

impl SqlGenerator for RawSqlGenerator {
    type Statement = RawSql;

    fn name(&self) -> &'static str {
        "raw_sql"
    }

    fn validate(&self, s: &RawSql, _database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("sql", &s.sql);
        result
    }

    fn generate(&self, s: &RawSql, _database: &Database) -> Result<Output> {
        let sql = Sql::new(s.sql.trim());
        Ok(match &s.end_delimiter {
            Some(delimiter) => sql.with_delimiter(delimiter.clone()),
            None => sql,
        }
        .into())
    }
}

#[derive(Debug)]
struct CommentGenerator;

impl SqlGenerator for CommentGenerator {
    type Statement = Comment;

    fn name(&self) -> &'static str {
        "comment"
    }

    fn validate(&self, s: &Comment, _database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("text", &s.text);
        result
    }

    fn generate(&self, s: &Comment, database: &Database) -> Result<Output> {
        let mut output = Output::new();
        for line in s.text.lines() {
            output.push(Sql::comment(database.line_comment(line.trim_end())));
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::default_registry;
    use crate::statement::Statement;

    fn sql(statement: impl Into<Statement>, id: DialectId) -> Vec<String> {
        default_registry()
            .generate_sql(&statement.into(), &Database::new(id))
            .unwrap()
            .into_iter()
            .map(|s| s.text)
            .collect()
    }

    #[test]
    fn test_insert_uses_type_hints() {
        let mut stmt = Insert::new("person").value("name", "O'Brien").value("age", 42_i64);
        stmt.values.push(ColumnValue {
            column_type: Some("boolean".to_string()),
            ..ColumnValue::new("active", "true")
        });
        assert_eq!(
            sql(stmt.clone(), DialectId::Postgres),
            vec!["INSERT INTO person (name, age, active) VALUES ('O''Brien', 42, TRUE)"]
        );
        assert_eq!(
            sql(stmt, DialectId::Mssql),
            vec!["INSERT INTO person (name, age, active) VALUES ('O''Brien', 42, 1)"]
        );
    }

    #[test]
    fn test_update_and_delete_where() {
        let filter = WhereClause::new(":name = :value").column("id").parameter(7_i64);
        let update = Update::new("person").set("name", "Ann").filter(filter.clone());
        assert_eq!(
            sql(update, DialectId::Generic),
            vec!["UPDATE person SET name = 'Ann' WHERE id = 7"]
        );
        assert_eq!(
            sql(Delete::new("person").filter(filter), DialectId::Generic),
            vec!["DELETE FROM person WHERE id = 7"]
        );
        assert_eq!(sql(Delete::new("person"), DialectId::Generic), vec!["DELETE FROM person"]);
    }

    #[test]
    fn test_where_placeholder_mismatch() {
        let stmt = Delete::new("person").filter(WhereClause::new(":name = :value").column("id"));
        let err = default_registry()
            .generate(&stmt.into(), &Database::new(DialectId::Generic))
            .unwrap_err();
        assert!(err.to_string().contains("1 :value placeholders but 0 parameters"));
    }

    #[test]
    fn test_insert_or_update_per_dialect() {
        let stmt = InsertOrUpdate::new("person", ["id"])
            .value("id", 1_i64)
            .value("name", "Ann");
        assert_eq!(
            sql(stmt.clone(), DialectId::Postgres),
            vec!["INSERT INTO person (id, name) VALUES (1, 'Ann') ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name"]
        );
        assert_eq!(
            sql(stmt.clone(), DialectId::MySql),
            vec!["INSERT INTO person (id, name) VALUES (1, 'Ann') ON DUPLICATE KEY UPDATE name = VALUES(name)"]
        );
        assert_eq!(
            sql(stmt.clone(), DialectId::H2),
            vec!["MERGE INTO person (id, name) KEY (id) VALUES (1, 'Ann')"]
        );
        assert_eq!(
            sql(stmt.clone(), DialectId::Oracle),
            vec![
                "MERGE INTO person tgt USING (SELECT 1 AS id, 'Ann' AS name FROM dual) src \
                 ON (tgt.id = src.id) WHEN MATCHED THEN UPDATE SET tgt.name = src.name \
                 WHEN NOT MATCHED THEN INSERT (id, name) VALUES (src.id, src.name)"
            ]
        );
        assert!(!default_registry().supports(&stmt.into(), &Database::new(DialectId::Informix)));
    }

    #[test]
    fn test_insert_or_update_requires_key_value() {
        let stmt = InsertOrUpdate::new("person", ["id"]).value("name", "Ann");
        let err = default_registry()
            .generate(&stmt.into(), &Database::new(DialectId::Postgres))
            .unwrap_err();
        assert!(err.to_string().contains("primary key column 'id' has no value"));
    }

    #[test]
    fn test_copy_rows_raw_sql_and_comments() {
        let copy = CopyRows::new("person_old", "person").column("nm", "name");
        assert_eq!(
            sql(copy, DialectId::Generic),
            vec!["INSERT INTO person (name) SELECT nm FROM person_old"]
        );

        let raw = default_registry()
            .generate_sql(
                &RawSql::new("  EXEC something  ").end_delimiter("\nGO").into(),
                &Database::new(DialectId::Mssql),
            )
            .unwrap();
        assert_eq!(raw[0].to_string(), "EXEC something\nGO");

        let comments = default_registry()
            .generate_sql(
                &Comment::new("first\nsecond").into(),
                &Database::new(DialectId::MySql),
            )
            .unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[1].to_string(), "-- second");
    }
}
