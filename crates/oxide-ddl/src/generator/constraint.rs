//! Primary key, unique and foreign key generators.

use super::{
    reorganize_on_db2, tablespace_clause, Clauses, GeneratorRegistry, Output, SqlGenerator,
    TablespaceTarget,
};
use crate::database::{Capability, Database, DialectId};
use crate::error::Result;
use crate::statement::{
    AddForeignKeyConstraint, AddPrimaryKey, AddUniqueConstraint, DropForeignKeyConstraint,
    DropPrimaryKey, DropUniqueConstraint, ForeignKeyAction,
};
use crate::validation::ValidationResult;

pub(super) fn register(registry: &mut GeneratorRegistry) {
    registry.register(AddPrimaryKeyGenerator);
    registry.register(DropPrimaryKeyGenerator);
    registry.register(AddUniqueConstraintGenerator);
    registry.register(DropUniqueConstraintGenerator);
    registry.register(AddForeignKeyConstraintGenerator);
    registry.register(DropForeignKeyConstraintGenerator);
}

/// SQLite cannot alter constraints on an existing table.
fn not_sqlite(database: &Database) -> bool {
    database.id() != DialectId::Sqlite
}

/// `ALTER TABLE t ADD [CONSTRAINT n] <body>`. Informix writes
/// `ADD CONSTRAINT <body> CONSTRAINT n` instead.
fn add_constraint(database: &Database, table: &str, name: Option<&str>, body: String) -> String {
    let name = name.map(|n| database.escape_constraint_name(n));
    match (database.id(), name) {
        (DialectId::Informix, Some(name)) => {
            format!("ALTER TABLE {table} ADD CONSTRAINT {body} CONSTRAINT {name}")
        }
        (DialectId::Informix, None) => format!("ALTER TABLE {table} ADD CONSTRAINT {body}"),
        (_, Some(name)) => format!("ALTER TABLE {table} ADD CONSTRAINT {name} {body}"),
        (_, None) => format!("ALTER TABLE {table} ADD {body}"),
    }
}

fn clustered_keyword(database: &Database, clustered: Option<bool>) -> Option<&'static str> {
    if !database.is_any(&[DialectId::Mssql, DialectId::Sybase]) {
        return None;
    }
    clustered.map(|c| if c { "CLUSTERED" } else { "NONCLUSTERED" })
}

// =============================================================================
// Foreign key clause
// =============================================================================

/// `FOREIGN KEY (...) REFERENCES ...`, shared by CREATE TABLE and
/// ADD CONSTRAINT.
#[derive(Debug, Clone, Copy)]
pub(super) struct ForeignKeyClause<'a> {
    pub columns: &'a [String],
    pub referenced_catalog: Option<&'a str>,
    pub referenced_schema: Option<&'a str>,
    pub referenced_table: &'a str,
    pub referenced_columns: &'a [String],
    pub on_delete: Option<ForeignKeyAction>,
    pub on_update: Option<ForeignKeyAction>,
    pub deferrable: bool,
    pub initially_deferred: bool,
}

impl ForeignKeyClause<'_> {
    pub fn render(&self, database: &Database) -> String {
        let referenced = database.escape_table_name(
            self.referenced_catalog,
            self.referenced_schema,
            self.referenced_table,
        );
        let deferrable = database.supports(Capability::InitiallyDeferrableColumns);
        Clauses::with(format!(
            "FOREIGN KEY ({}) REFERENCES {referenced} ({})",
            database.escape_column_list(self.columns),
            database.escape_column_list(self.referenced_columns)
        ))
        .push_opt(
            self.on_update
                .filter(|_| database.id() != DialectId::Oracle)
                .map(|a| format!("ON UPDATE {}", a.as_sql())),
        )
        .push_opt(self.on_delete.map(|a| format!("ON DELETE {}", a.as_sql())))
        .push_if(deferrable && self.deferrable, "DEFERRABLE")
        .push_if(deferrable && self.initially_deferred, "INITIALLY DEFERRED")
        .build()
    }
}

// =============================================================================
// Primary keys
// =============================================================================

#[derive(Debug)]
struct AddPrimaryKeyGenerator;

impl SqlGenerator for AddPrimaryKeyGenerator {
    type Statement = AddPrimaryKey;

    fn name(&self) -> &'static str {
        "add_primary_key"
    }

    fn supports(&self, _s: &AddPrimaryKey, database: &Database) -> bool {
        not_sqlite(database)
    }

    fn validate(&self, s: &AddPrimaryKey, database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("tableName", &s.table_name);
        result.check_required("columnNames", &s.column_names);
        result.check_disallowed_without(
            "tablespace",
            &s.tablespace,
            database,
            Capability::Tablespaces,
        );
        result.check_allowed_only(
            "clustered",
            &s.clustered,
            database,
            &[DialectId::Mssql, DialectId::Sybase],
        );
        result.check_allowed_only("forIndexName", &s.for_index_name, database, &[DialectId::Oracle]);
        result
    }

    fn generate(&self, s: &AddPrimaryKey, database: &Database) -> Result<Output> {
        let table = table_of!(database, s);
        let name = s
            .constraint_name
            .as_deref()
            .filter(|_| database.supports(Capability::NamedPrimaryKeys));
        let index = match &s.for_index_name {
            Some(index) => Some(format!("USING INDEX {}", database.quote_identifier(index))),
            None => tablespace_clause(
                database,
                s.tablespace.as_deref(),
                TablespaceTarget::ConstraintIndex,
            ),
        };
        let body = Clauses::with("PRIMARY KEY")
            .push_opt(clustered_keyword(database, s.clustered))
            .push(format!("({})", database.escape_column_list(&s.column_names)))
            .push_opt(index)
            .build();
        let mut output = Output::from(add_constraint(database, &table, name, body));
        reorganize_on_db2(
            &mut output,
            database,
            s.catalog_name.as_ref(),
            s.schema_name.as_ref(),
            &s.table_name,
        );
        Ok(output)
    }
}

#[derive(Debug)]
struct DropPrimaryKeyGenerator;

impl SqlGenerator for DropPrimaryKeyGenerator {
    type Statement = DropPrimaryKey;

    fn name(&self) -> &'static str {
        "drop_primary_key"
    }

    fn supports(&self, _s: &DropPrimaryKey, database: &Database) -> bool {
        not_sqlite(database)
    }

    fn validate(&self, s: &DropPrimaryKey, database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("tableName", &s.table_name);
        result.check_required_on(
            "constraintName",
            &s.constraint_name,
            database,
            &[
                DialectId::Mssql,
                DialectId::Sybase,
                DialectId::Firebird,
                DialectId::Informix,
            ],
        );
        result
    }

    fn generate(&self, s: &DropPrimaryKey, database: &Database) -> Result<Output> {
        let table = table_of!(database, s);
        let named = s
            .constraint_name
            .as_deref()
            .filter(|_| database.supports(Capability::NamedPrimaryKeys));
        let action = match (database.id(), named) {
            (_, Some(name)) => format!("DROP CONSTRAINT {}", database.escape_constraint_name(name)),
            (DialectId::Oracle, None) => "DROP PRIMARY KEY DROP INDEX".to_string(),
            (DialectId::Postgres, None) => {
                let generated = database
                    .correct_object_name(&database.dialect().primary_key_name(&s.table_name));
                format!("DROP CONSTRAINT {}", database.escape_constraint_name(&generated))
            }
            (_, None) => "DROP PRIMARY KEY".to_string(),
        };
        Ok(format!("ALTER TABLE {table} {action}").into())
    }
}

// =============================================================================
// Unique constraints
// =============================================================================

#[derive(Debug)]
struct AddUniqueConstraintGenerator;

impl SqlGenerator for AddUniqueConstraintGenerator {
    type Statement = AddUniqueConstraint;

    fn name(&self) -> &'static str {
        "add_unique_constraint"
    }

    fn supports(&self, _s: &AddUniqueConstraint, database: &Database) -> bool {
        not_sqlite(database)
    }

    fn validate(&self, s: &AddUniqueConstraint, database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("tableName", &s.table_name);
        result.check_required("columnNames", &s.column_names);
        result.check_feature(
            "deferrable",
            s.deferrable || s.initially_deferred,
            database,
            Capability::InitiallyDeferrableColumns,
        );
        result.check_allowed_only("disabled", &s.disabled, database, &[DialectId::Oracle]);
        result.check_allowed_only(
            "clustered",
            &s.clustered,
            database,
            &[DialectId::Mssql, DialectId::Sybase],
        );
        result.check_disallowed_without(
            "tablespace",
            &s.tablespace,
            database,
            Capability::Tablespaces,
        );
        result
    }

    fn generate(&self, s: &AddUniqueConstraint, database: &Database) -> Result<Output> {
        let table = table_of!(database, s);
        let name = s
            .constraint_name
            .as_deref()
            .filter(|_| database.supports(Capability::NamedUniqueConstraints));
        let body = Clauses::with("UNIQUE")
            .push_opt(clustered_keyword(database, s.clustered))
            .push(format!("({})", database.escape_column_list(&s.column_names)))
            .push_if(s.deferrable, "DEFERRABLE")
            .push_if(s.initially_deferred, "INITIALLY DEFERRED")
            .push_if(s.disabled, "DISABLE")
            .push_opt(tablespace_clause(
                database,
                s.tablespace.as_deref(),
                TablespaceTarget::ConstraintIndex,
            ))
            .build();
        Ok(add_constraint(database, &table, name, body).into())
    }
}

#[derive(Debug)]
struct DropUniqueConstraintGenerator;

impl SqlGenerator for DropUniqueConstraintGenerator {
    type Statement = DropUniqueConstraint;

    fn name(&self) -> &'static str {
        "drop_unique_constraint"
    }

    fn supports(&self, _s: &DropUniqueConstraint, database: &Database) -> bool {
        not_sqlite(database)
    }

    fn validate(&self, s: &DropUniqueConstraint, database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("tableName", &s.table_name);
        // Oracle can find the constraint by its columns.
        if database.id() == DialectId::Oracle && s.constraint_name.is_none() {
            result.check_required("columnNames", &s.column_names);
        } else {
            result.check_required("constraintName", &s.constraint_name);
        }
        result
    }

    fn generate(&self, s: &DropUniqueConstraint, database: &Database) -> Result<Output> {
        let table = table_of!(database, s);
        let action = match (database.id(), s.constraint_name.as_deref()) {
            (DialectId::Oracle, None) => {
                format!("DROP UNIQUE ({})", database.escape_column_list(&s.column_names))
            }
            (DialectId::MySql | DialectId::MariaDb, name) => format!(
                "DROP KEY {}",
                database.escape_constraint_name(name.unwrap_or_default())
            ),
            (_, name) => format!(
                "DROP CONSTRAINT {}",
                database.escape_constraint_name(name.unwrap_or_default())
            ),
        };
        Ok(format!("ALTER TABLE {table} {action}").into())
    }
}

// =============================================================================
// Foreign keys
// =============================================================================

#[derive(Debug)]
struct AddForeignKeyConstraintGenerator;

impl SqlGenerator for AddForeignKeyConstraintGenerator {
    type Statement = AddForeignKeyConstraint;

    fn name(&self) -> &'static str {
        "add_foreign_key_constraint"
    }

    fn supports(&self, _s: &AddForeignKeyConstraint, database: &Database) -> bool {
        not_sqlite(database)
    }

    fn validate(&self, s: &AddForeignKeyConstraint, database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("tableName", &s.table_name);
        result.check_required("columnNames", &s.column_names);
        result.check_required("referencedTableName", &s.referenced_table_name);
        result.check_required("referencedColumnNames", &s.referenced_column_names);
        if s.column_names.len() != s.referenced_column_names.len() {
            result.invalid(format!(
                "foreign key has {} columns but references {}",
                s.column_names.len(),
                s.referenced_column_names.len()
            ));
        }
        result.check_disallowed("onUpdate", &s.on_update, database, &[DialectId::Oracle]);
        result.check_allowed_only("novalidate", &s.novalidate, database, &[DialectId::Oracle]);
        result.check_feature(
            "deferrable",
            s.deferrable || s.initially_deferred,
            database,
            Capability::InitiallyDeferrableColumns,
        );
        result
    }

    fn generate(&self, s: &AddForeignKeyConstraint, database: &Database) -> Result<Output> {
        let table = table_of!(database, s);
        let clause = ForeignKeyClause {
            columns: &s.column_names,
            referenced_catalog: s.referenced_catalog_name.as_deref(),
            referenced_schema: s.referenced_schema_name.as_deref(),
            referenced_table: &s.referenced_table_name,
            referenced_columns: &s.referenced_column_names,
            on_delete: s.on_delete,
            on_update: s.on_update,
            deferrable: s.deferrable,
            initially_deferred: s.initially_deferred,
        };
        let body = Clauses::with(clause.render(database))
            .push_if(s.novalidate, "ENABLE NOVALIDATE")
            .build();
        Ok(add_constraint(database, &table, s.constraint_name.as_deref(), body).into())
    }
}

#[derive(Debug)]
struct DropForeignKeyConstraintGenerator;

impl SqlGenerator for DropForeignKeyConstraintGenerator {
    type Statement = DropForeignKeyConstraint;

    fn name(&self) -> &'static str {
        "drop_foreign_key_constraint"
    }

    fn supports(&self, _s: &DropForeignKeyConstraint, database: &Database) -> bool {
        not_sqlite(database)
    }

    fn validate(&self, s: &DropForeignKeyConstraint, _database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("tableName", &s.table_name);
        result.check_required("constraintName", &s.constraint_name);
        result
    }

    fn generate(&self, s: &DropForeignKeyConstraint, database: &Database) -> Result<Output> {
        let keyword = if database.is_any(&[DialectId::MySql, DialectId::MariaDb]) {
            "DROP FOREIGN KEY"
        } else {
            "DROP CONSTRAINT"
        };
        Ok(format!(
            "ALTER TABLE {} {keyword} {}",
            table_of!(database, s),
            database.escape_constraint_name(&s.constraint_name)
        )
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerateError;
    use crate::generator::default_registry;
    use crate::statement::{Statement, StatementKind};

    fn sql(statement: impl Into<Statement>, id: DialectId) -> Vec<String> {
        default_registry()
            .generate_sql(&statement.into(), &Database::new(id))
            .unwrap()
            .into_iter()
            .map(|s| s.text)
            .collect()
    }

    #[test]
    fn test_add_primary_key_unnamed_on_mysql() {
        let stmt = AddPrimaryKey::new("orders", ["id"]);
        assert_eq!(sql(stmt.clone(), DialectId::MySql), vec!["ALTER TABLE orders ADD PRIMARY KEY (id)"]);
        assert_eq!(
            sql(stmt.constraint_name("pk_orders"), DialectId::MySql),
            vec!["ALTER TABLE orders ADD PRIMARY KEY (id)"]
        );
    }

    #[test]
    fn test_add_primary_key_dialect_options() {
        let stmt = AddPrimaryKey::new("orders", ["id"])
            .constraint_name("pk_orders")
            .tablespace("idx");
        assert_eq!(
            sql(stmt.clone(), DialectId::Oracle),
            vec!["ALTER TABLE orders ADD CONSTRAINT pk_orders PRIMARY KEY (id) USING INDEX TABLESPACE idx"]
        );
        assert_eq!(
            sql(stmt.clone(), DialectId::Db2),
            vec![
                "ALTER TABLE orders ADD CONSTRAINT pk_orders PRIMARY KEY (id)",
                "CALL SYSPROC.ADMIN_CMD ('REORG TABLE orders')",
            ]
        );
        let clustered = AddPrimaryKey {
            clustered: Some(false),
            tablespace: None,
            ..stmt
        };
        assert_eq!(
            sql(clustered.clone(), DialectId::Mssql),
            vec!["ALTER TABLE orders ADD CONSTRAINT pk_orders PRIMARY KEY NONCLUSTERED (id)"]
        );
        assert_eq!(
            sql(AddPrimaryKey { clustered: None, ..clustered }, DialectId::Informix),
            vec!["ALTER TABLE orders ADD CONSTRAINT PRIMARY KEY (id) CONSTRAINT pk_orders"]
        );
    }

    #[test]
    fn test_drop_primary_key() {
        let stmt = DropPrimaryKey::new("orders");
        assert_eq!(sql(stmt.clone(), DialectId::MySql), vec!["ALTER TABLE orders DROP PRIMARY KEY"]);
        assert_eq!(
            sql(stmt.clone(), DialectId::Postgres),
            vec!["ALTER TABLE orders DROP CONSTRAINT orders_pkey"]
        );
        assert_eq!(
            sql(stmt.clone(), DialectId::Oracle),
            vec!["ALTER TABLE orders DROP PRIMARY KEY DROP INDEX"]
        );
        let err = default_registry()
            .generate(&stmt.into(), &Database::new(DialectId::Mssql))
            .unwrap_err();
        assert!(matches!(err, GenerateError::Validation { .. }));
    }

    #[test]
    fn test_unique_constraints() {
        let stmt = AddUniqueConstraint::new("person", ["email"]).constraint_name("uq_email");
        assert_eq!(
            sql(stmt, DialectId::Postgres),
            vec!["ALTER TABLE person ADD CONSTRAINT uq_email UNIQUE (email)"]
        );
        assert_eq!(
            sql(DropUniqueConstraint::new("person", "uq_email"), DialectId::MySql),
            vec!["ALTER TABLE person DROP KEY uq_email"]
        );
        let by_columns = DropUniqueConstraint {
            table_name: "person".to_string(),
            column_names: vec!["email".to_string()],
            ..DropUniqueConstraint::default()
        };
        assert_eq!(
            sql(by_columns, DialectId::Oracle),
            vec!["ALTER TABLE person DROP UNIQUE (email)"]
        );
    }

    #[test]
    fn test_foreign_key_clauses() {
        let stmt = AddForeignKeyConstraint {
            on_delete: Some(ForeignKeyAction::Cascade),
            on_update: Some(ForeignKeyAction::Restrict),
            ..AddForeignKeyConstraint::new("orders", ["customer_id"], "customer", ["id"])
                .constraint_name("fk_orders_customer")
        };
        assert_eq!(
            sql(stmt, DialectId::Postgres),
            vec![
                "ALTER TABLE orders ADD CONSTRAINT fk_orders_customer FOREIGN KEY (customer_id) \
                 REFERENCES customer (id) ON UPDATE RESTRICT ON DELETE CASCADE"
            ]
        );
        assert_eq!(
            sql(DropForeignKeyConstraint::new("orders", "fk_orders_customer"), DialectId::MySql),
            vec!["ALTER TABLE orders DROP FOREIGN KEY fk_orders_customer"]
        );
    }

    #[test]
    fn test_deferrable_foreign_key_fails_loudly() {
        let stmt = AddForeignKeyConstraint {
            deferrable: true,
            ..AddForeignKeyConstraint::new("orders", ["customer_id"], "customer", ["id"])
        };
        let err = default_registry()
            .generate(&stmt.clone().into(), &Database::new(DialectId::Mssql))
            .unwrap_err();
        assert!(matches!(
            err,
            GenerateError::UnsupportedFeature {
                statement: StatementKind::AddForeignKeyConstraint,
                ..
            }
        ));
        assert_eq!(err.unsupported_feature(), Some("deferrable"));
        assert_eq!(
            sql(stmt, DialectId::Postgres),
            vec!["ALTER TABLE orders ADD FOREIGN KEY (customer_id) REFERENCES customer (id) DEFERRABLE"]
        );
    }

    #[test]
    fn test_sqlite_has_no_constraint_alters() {
        let sqlite = Database::new(DialectId::Sqlite);
        let stmt = Statement::from(AddPrimaryKey::new("t", ["id"]));
        assert!(!default_registry().supports(&stmt, &sqlite));
    }
}
