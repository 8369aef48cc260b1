//! Table generators.

use super::column::{column_definition, mssql_extended_property, PrimaryKeyStyle};
use super::constraint::ForeignKeyClause;
use super::{tablespace_clause, Clauses, GeneratorRegistry, Output, SqlGenerator, TablespaceTarget};
use crate::database::{Capability, Database, DialectId};
use crate::error::Result;
use crate::statement::{
    ColumnDefinition, ConstraintSet, CreateTable, DropTable, RenameTable, ReorganizeTable,
    SetColumnRemarks, SetTableRemarks,
};
use crate::validation::ValidationResult;

pub(super) fn register(registry: &mut GeneratorRegistry) {
    registry.register(CreateTableGenerator);
    registry.register(DropTableGenerator);
    registry.register(RenameTableGenerator);
    registry.register(SetTableRemarksGenerator);
    registry.register(SetTableRemarksMySqlGenerator);
    registry.register(SetTableRemarksMssqlGenerator);
    registry.register(ReorganizeTableGenerator);
}

// =============================================================================
// Create table
// =============================================================================

#[derive(Debug)]
struct CreateTableGenerator;

impl CreateTableGenerator {
    /// The single auto-increment primary key SQLite declares inline.
    fn sqlite_rowid_column<'a>(s: &'a CreateTable, database: &Database) -> Option<&'a str> {
        if database.id() != DialectId::Sqlite {
            return None;
        }
        let mut keys = s.columns.iter().filter(|c| c.is_primary_key());
        match (keys.next(), keys.next()) {
            (Some(column), None) if column.is_auto_increment() => Some(&column.name),
            _ => None,
        }
    }

    fn primary_key_name(s: &CreateTable, database: &Database) -> Option<String> {
        if !database.supports(Capability::NamedPrimaryKeys) {
            return None;
        }
        s.primary_key_name
            .clone()
            .or_else(|| {
                s.columns
                    .iter()
                    .find_map(|c| c.primary_key_constraint().and_then(|pk| pk.name.clone()))
            })
            .or_else(|| {
                Some(
                    database
                        .correct_object_name(&database.dialect().primary_key_name(&s.table_name)),
                )
            })
    }

    fn column(
        s: &CreateTable,
        column: &ColumnDefinition,
        database: &Database,
        rowid: Option<&str>,
    ) -> String {
        let style = if rowid == Some(column.name.as_str()) {
            PrimaryKeyStyle::SqliteAutoIncrement
        } else {
            PrimaryKeyStyle::Omit
        };
        Clauses::with(column_definition(database, &s.table_name, column, style))
            .push_opt(
                column
                    .remarks
                    .as_deref()
                    .filter(|_| database.is_any(&[DialectId::MySql, DialectId::MariaDb]))
                    .map(|r| format!("COMMENT {}", database.string_literal(r))),
            )
            .build()
    }

    /// `[CONSTRAINT name] <body>`, with Informix putting the name last.
    fn named_constraint(database: &Database, name: Option<&str>, body: String) -> String {
        let Some(name) = name else {
            return body;
        };
        let name = database.escape_constraint_name(name);
        if database.id() == DialectId::Informix {
            format!("{body} CONSTRAINT {name}")
        } else {
            format!("CONSTRAINT {name} {body}")
        }
    }
}

impl SqlGenerator for CreateTableGenerator {
    type Statement = CreateTable;

    fn name(&self) -> &'static str {
        "create_table"
    }

    fn validate(&self, s: &CreateTable, database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("tableName", &s.table_name);
        result.check_required("columns", &s.columns);
        for column in &s.columns {
            result.check_required("columnName", &column.name);
            result.check_required("columnType", &column.column_type);
            result.check_feature(
                "auto-increment",
                column.is_auto_increment(),
                database,
                Capability::AutoIncrement,
            );
            for fk in column.foreign_key_constraints() {
                result.check_feature(
                    "deferrable",
                    fk.deferrable || fk.initially_deferred,
                    database,
                    Capability::InitiallyDeferrableColumns,
                );
                result.check_disallowed("onUpdate", &fk.on_update, database, &[DialectId::Oracle]);
            }
        }
        if database.id() == DialectId::Sqlite
            && s.columns.iter().any(|c| c.is_auto_increment())
            && Self::sqlite_rowid_column(s, database).is_none()
        {
            result.unsupported(
                "auto-increment outside a single-column primary key",
                database,
            );
        }
        result.check_disallowed_without(
            "tablespace",
            &s.tablespace,
            database,
            Capability::Tablespaces,
        );
        let has_remarks = s.remarks.is_some() || s.columns.iter().any(|c| c.remarks.is_some());
        if has_remarks && !database.supports(Capability::Remarks) {
            result.add_warning(format!(
                "remarks are not supported on {} and were left out",
                database.id()
            ));
        }
        result
    }

    fn generate(&self, s: &CreateTable, database: &Database) -> Result<Output> {
        let table = table_of!(database, s);
        let mysql = database.is_any(&[DialectId::MySql, DialectId::MariaDb]);
        let rowid = Self::sqlite_rowid_column(s, database);

        let mut definitions = s
            .columns
            .iter()
            .map(|c| Self::column(s, c, database, rowid))
            .collect::<Vec<_>>();

        let primary_keys = s
            .columns
            .iter()
            .filter(|c| c.is_primary_key())
            .map(|c| c.name.clone())
            .collect::<Vec<_>>();
        if !primary_keys.is_empty() && rowid.is_none() {
            let name = Self::primary_key_name(s, database);
            definitions.push(Self::named_constraint(
                database,
                name.as_deref(),
                format!("PRIMARY KEY ({})", database.escape_column_list(&primary_keys)),
            ));
        }

        let column_uniques = s
            .columns
            .iter()
            .filter_map(|c| c.unique_constraint().map(|u| (u.name.clone(), vec![c.name.clone()])));
        let table_uniques = s
            .unique_constraints
            .iter()
            .map(|u| (u.constraint_name.clone(), u.column_names.clone()));
        for (name, columns) in column_uniques.chain(table_uniques) {
            let name = name.filter(|_| database.supports(Capability::NamedUniqueConstraints));
            definitions.push(Self::named_constraint(
                database,
                name.as_deref(),
                format!("UNIQUE ({})", database.escape_column_list(&columns)),
            ));
        }

        for column in &s.columns {
            for fk in column.foreign_key_constraints() {
                let clause = ForeignKeyClause {
                    columns: std::slice::from_ref(&column.name),
                    referenced_catalog: fk.references_catalog.as_deref(),
                    referenced_schema: fk.references_schema.as_deref(),
                    referenced_table: &fk.references_table,
                    referenced_columns: std::slice::from_ref(&fk.references_column),
                    on_delete: fk.on_delete,
                    on_update: fk.on_update,
                    deferrable: fk.deferrable,
                    initially_deferred: fk.initially_deferred,
                };
                definitions.push(Self::named_constraint(
                    database,
                    fk.name.as_deref(),
                    clause.render(database),
                ));
            }
        }

        let auto_increment_start = s
            .columns
            .iter()
            .find_map(|c| c.auto_increment_constraint().and_then(|ai| ai.start_with));
        let sql = Clauses::with(format!("CREATE TABLE {table} ({})", definitions.join(", ")))
            .push_opt(
                s.remarks
                    .as_deref()
                    .filter(|_| mysql)
                    .map(|r| format!("COMMENT={}", database.string_literal(r))),
            )
            .push_opt(
                auto_increment_start
                    .filter(|_| mysql)
                    .map(|n| format!("AUTO_INCREMENT={n}")),
            )
            .push_opt(tablespace_clause(
                database,
                s.tablespace.as_deref(),
                TablespaceTarget::Table,
            ))
            .build();
        let mut output = Output::from(sql);

        if mysql || !database.supports(Capability::Remarks) {
            return Ok(output);
        }
        if let Some(remarks) = &s.remarks {
            output.follow_with(SetTableRemarks {
                catalog_name: s.catalog_name.clone(),
                schema_name: s.schema_name.clone(),
                table_name: s.table_name.clone(),
                remarks: remarks.clone(),
            });
        }
        for column in &s.columns {
            if let Some(remarks) = &column.remarks {
                output.follow_with(SetColumnRemarks {
                    catalog_name: s.catalog_name.clone(),
                    schema_name: s.schema_name.clone(),
                    table_name: s.table_name.clone(),
                    column_name: column.name.clone(),
                    remarks: remarks.clone(),
                    column_data_type: Some(column.column_type.clone()),
                });
            }
        }
        Ok(output)
    }
}

// =============================================================================
// Drop and rename
// =============================================================================

#[derive(Debug)]
struct DropTableGenerator;

impl SqlGenerator for DropTableGenerator {
    type Statement = DropTable;

    fn name(&self) -> &'static str {
        "drop_table"
    }

    fn validate(&self, s: &DropTable, database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("tableName", &s.table_name);
        result.check_disallowed_without("ifExists", &s.if_exists, database, Capability::DropIfExists);
        if s.cascade_constraints && !database.supports(Capability::DropTableCascade) {
            result.add_warning(format!(
                "cascade is not supported on {}, dropping {} without it",
                database.id(),
                s.table_name
            ));
        }
        result
    }

    fn generate(&self, s: &DropTable, database: &Database) -> Result<Output> {
        let cascade = (s.cascade_constraints && database.supports(Capability::DropTableCascade))
            .then(|| {
                if database.id() == DialectId::Oracle {
                    "CASCADE CONSTRAINTS"
                } else {
                    "CASCADE"
                }
            });
        let sql = Clauses::with("DROP TABLE")
            .push_if(s.if_exists, "IF EXISTS")
            .push(table_of!(database, s))
            .push_opt(cascade)
            .build();
        Ok(sql.into())
    }
}

#[derive(Debug)]
struct RenameTableGenerator;

impl SqlGenerator for RenameTableGenerator {
    type Statement = RenameTable;

    fn name(&self) -> &'static str {
        "rename_table"
    }

    fn supports(&self, _s: &RenameTable, database: &Database) -> bool {
        database.id() != DialectId::Firebird
    }

    fn validate(&self, s: &RenameTable, _database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("oldTableName", &s.old_table_name);
        result.check_required("newTableName", &s.new_table_name);
        result
    }

    fn generate(&self, s: &RenameTable, database: &Database) -> Result<Output> {
        let old = database.escape_table_name(
            s.catalog_name.as_deref(),
            s.schema_name.as_deref(),
            &s.old_table_name,
        );
        let new = database.quote_identifier(&s.new_table_name);
        let sql = match database.id() {
            DialectId::MySql | DialectId::MariaDb | DialectId::SybaseAsa => {
                format!("ALTER TABLE {old} RENAME {new}")
            }
            DialectId::Mssql | DialectId::Sybase => {
                format!(
                    "exec sp_rename {}, {}",
                    database.string_literal(&old),
                    database.string_literal(&s.new_table_name)
                )
            }
            DialectId::Db2 | DialectId::Derby | DialectId::Informix => {
                format!("RENAME TABLE {old} TO {new}")
            }
            _ => format!("ALTER TABLE {old} RENAME TO {new}"),
        };
        Ok(sql.into())
    }
}

// =============================================================================
// Remarks
// =============================================================================

fn validate_remarks(s: &SetTableRemarks) -> ValidationResult {
    let mut result = ValidationResult::new();
    result.check_required("tableName", &s.table_name);
    result
}

#[derive(Debug)]
struct SetTableRemarksGenerator;

impl SqlGenerator for SetTableRemarksGenerator {
    type Statement = SetTableRemarks;

    fn name(&self) -> &'static str {
        "set_table_remarks"
    }

    fn validate(&self, s: &SetTableRemarks, _database: &Database) -> ValidationResult {
        validate_remarks(s)
    }

    fn generate(&self, s: &SetTableRemarks, database: &Database) -> Result<Output> {
        Ok(format!(
            "COMMENT ON TABLE {} IS {}",
            table_of!(database, s),
            database.string_literal(&s.remarks)
        )
        .into())
    }
}

#[derive(Debug)]
struct SetTableRemarksMySqlGenerator;

impl SqlGenerator for SetTableRemarksMySqlGenerator {
    type Statement = SetTableRemarks;

    fn name(&self) -> &'static str {
        "set_table_remarks_mysql"
    }

    fn dialects(&self) -> &'static [DialectId] {
        &[DialectId::MySql, DialectId::MariaDb]
    }

    fn validate(&self, s: &SetTableRemarks, _database: &Database) -> ValidationResult {
        validate_remarks(s)
    }

    fn generate(&self, s: &SetTableRemarks, database: &Database) -> Result<Output> {
        Ok(format!(
            "ALTER TABLE {} COMMENT = {}",
            table_of!(database, s),
            database.string_literal(&s.remarks)
        )
        .into())
    }
}

#[derive(Debug)]
struct SetTableRemarksMssqlGenerator;

impl SqlGenerator for SetTableRemarksMssqlGenerator {
    type Statement = SetTableRemarks;

    fn name(&self) -> &'static str {
        "set_table_remarks_mssql"
    }

    fn dialects(&self) -> &'static [DialectId] {
        &[DialectId::Mssql]
    }

    fn validate(&self, s: &SetTableRemarks, _database: &Database) -> ValidationResult {
        validate_remarks(s)
    }

    fn generate(&self, s: &SetTableRemarks, database: &Database) -> Result<Output> {
        Ok(mssql_extended_property(
            database,
            s.schema_name.as_deref(),
            &s.table_name,
            None,
            &s.remarks,
        )
        .into())
    }
}

/// DB2 `REORG TABLE`, needed after some ALTERs before the table is usable.
#[derive(Debug)]
struct ReorganizeTableGenerator;

impl SqlGenerator for ReorganizeTableGenerator {
    type Statement = ReorganizeTable;

    fn name(&self) -> &'static str {
        "reorganize_table"
    }

    fn dialects(&self) -> &'static [DialectId] {
        &[DialectId::Db2]
    }

    fn validate(&self, s: &ReorganizeTable, _database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("tableName", &s.table_name);
        result
    }

    fn generate(&self, s: &ReorganizeTable, database: &Database) -> Result<Output> {
        Ok(format!(
            "CALL SYSPROC.ADMIN_CMD ('REORG TABLE {}')",
            table_of!(database, s)
        )
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::default_registry;
    use crate::statement::{ColumnConstraint, Statement};

    fn sql(statement: impl Into<Statement>, id: DialectId) -> Vec<String> {
        default_registry()
            .generate_sql(&statement.into(), &Database::new(id))
            .unwrap()
            .into_iter()
            .map(|s| s.text)
            .collect()
    }

    fn person() -> CreateTable {
        CreateTable::new("person")
            .column(ColumnDefinition::new("id", "int").primary_key().auto_increment())
            .column(ColumnDefinition::new("name", "varchar(50)").not_null())
    }

    #[test]
    fn test_create_table_named_primary_key() {
        assert_eq!(
            sql(person(), DialectId::Postgres),
            vec![
                "CREATE TABLE person (id INTEGER NOT NULL GENERATED BY DEFAULT AS IDENTITY, \
                 name VARCHAR(50) NOT NULL, CONSTRAINT person_pkey PRIMARY KEY (id))"
            ]
        );
        assert_eq!(
            sql(person(), DialectId::MySql),
            vec![
                "CREATE TABLE person (id INT NOT NULL AUTO_INCREMENT, name VARCHAR(50) NOT NULL, \
                 PRIMARY KEY (id))"
            ]
        );
    }

    #[test]
    fn test_create_table_sqlite_rowid() {
        assert_eq!(
            sql(person(), DialectId::Sqlite),
            vec!["CREATE TABLE person (id INTEGER PRIMARY KEY AUTOINCREMENT, name VARCHAR(50) NOT NULL)"]
        );
    }

    #[test]
    fn test_create_table_constraints_and_remarks() {
        let stmt = CreateTable::new("orders")
            .column(ColumnDefinition::new("id", "int").primary_key())
            .column(
                ColumnDefinition::new("customer_id", "int")
                    .constraint(ColumnConstraint::references("customer", "id"))
                    .remarks("Buyer"),
            )
            .unique(Some("uq_orders"), ["customer_id"])
            .remarks("Orders");
        assert_eq!(
            sql(stmt, DialectId::Oracle),
            vec![
                "CREATE TABLE orders (id INTEGER NOT NULL, customer_id INTEGER, \
                 CONSTRAINT PK_ORDERS PRIMARY KEY (id), CONSTRAINT uq_orders UNIQUE (customer_id), \
                 FOREIGN KEY (customer_id) REFERENCES customer (id))",
                "COMMENT ON TABLE orders IS 'Orders'",
                "COMMENT ON COLUMN orders.customer_id IS 'Buyer'",
            ]
        );
    }

    #[test]
    fn test_drop_table_cascade_degrades() {
        let stmt: Statement = DropTable::new("t").cascade().into();
        let generated = default_registry()
            .generate(&stmt, &Database::new(DialectId::Mssql))
            .unwrap();
        assert_eq!(generated.sql[0].text, "DROP TABLE t");
        assert_eq!(generated.warnings.len(), 1);

        assert_eq!(sql(stmt.clone(), DialectId::Postgres), vec!["DROP TABLE t CASCADE"]);
        assert_eq!(
            sql(stmt, DialectId::Oracle),
            vec!["DROP TABLE t CASCADE CONSTRAINTS"]
        );
    }

    #[test]
    fn test_drop_table_if_exists() {
        assert_eq!(
            sql(DropTable::new("t").if_exists(), DialectId::Postgres),
            vec!["DROP TABLE IF EXISTS t"]
        );
        let err = default_registry()
            .generate(
                &DropTable::new("t").if_exists().into(),
                &Database::new(DialectId::Oracle),
            )
            .unwrap_err();
        assert!(err.to_string().contains("'ifExists' is not allowed on oracle"));
    }

    #[test]
    fn test_rename_table() {
        let stmt = RenameTable::new("person", "people");
        assert_eq!(
            sql(stmt.clone(), DialectId::Postgres),
            vec!["ALTER TABLE person RENAME TO people"]
        );
        assert_eq!(sql(stmt.clone(), DialectId::MySql), vec!["ALTER TABLE person RENAME people"]);
        assert_eq!(sql(stmt.clone(), DialectId::Db2), vec!["RENAME TABLE person TO people"]);
        assert_eq!(
            sql(stmt.clone(), DialectId::Mssql),
            vec!["exec sp_rename 'person', 'people'"]
        );
        assert!(!default_registry().supports(&stmt.into(), &Database::new(DialectId::Firebird)));
    }

    #[test]
    fn test_rename_table_escapes_sp_rename_arguments() {
        assert_eq!(
            sql(RenameTable::new("person", "pe'ople"), DialectId::Sybase),
            vec!["exec sp_rename 'person', 'pe''ople'"]
        );
        assert_eq!(
            sql(RenameTable::new("pe'ople", "people"), DialectId::Mssql),
            vec!["exec sp_rename '[pe''ople]', 'people'"]
        );
    }

    #[test]
    fn test_table_remarks_per_dialect() {
        let stmt = SetTableRemarks::new("person", "People");
        assert_eq!(
            sql(stmt.clone(), DialectId::MySql),
            vec!["ALTER TABLE person COMMENT = 'People'"]
        );
        assert!(sql(stmt, DialectId::Mssql)[0].contains("@level1name = N'person'"));
    }
}
