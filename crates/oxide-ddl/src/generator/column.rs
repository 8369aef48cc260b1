//! Column generators.

use super::{reorganize_on_db2, Clauses, GeneratorRegistry, Output, SqlGenerator};
use crate::database::{Capability, Database, DefaultPlacement, DialectId};
use crate::error::Result;
use crate::statement::{
    AddAutoIncrement, AddColumn, AddColumns, AddDefaultValue, AddForeignKeyConstraint,
    AddUniqueConstraint, ColumnDefinition, ConstraintSet, DropColumn, DropDefaultValue,
    LiteralValue, ModifyDataType, RenameColumn, SetColumnRemarks, SetNullable,
};
use crate::types::DataType;
use crate::validation::ValidationResult;

use DialectId::{
    Db2, Derby, Firebird, Generic, Hsql, Informix, MariaDb, Mssql, MySql, Oracle, Postgres,
    Sqlite, Sybase, SybaseAsa, H2,
};

const MYSQL_FAMILY: &[DialectId] = &[MySql, MariaDb];

pub(super) fn register(registry: &mut GeneratorRegistry) {
    registry.register(AddColumnGenerator);
    registry.register(AddColumnsGenerator);
    registry.register(AddColumnsMySqlGenerator);
    registry.register(DropColumnGenerator);
    registry.register(RenameColumnGenerator);
    registry.register(ModifyDataTypeGenerator);
    registry.register(SetNullableGenerator);
    registry.register(AddDefaultValueGenerator);
    registry.register(DropDefaultValueGenerator);
    registry.register(DropDefaultValueMssqlGenerator);
    registry.register(AddAutoIncrementGenerator);
    registry.register(AddAutoIncrementMySqlGenerator);
    registry.register(AddAutoIncrementPostgresGenerator);
    registry.register(AddAutoIncrementDb2Generator);
    registry.register(AddAutoIncrementHsqlGenerator);
    registry.register(AddAutoIncrementInformixGenerator);
    registry.register(SetColumnRemarksGenerator);
    registry.register(SetColumnRemarksMySqlGenerator);
    registry.register(SetColumnRemarksMssqlGenerator);
}

// =============================================================================
// Column definitions
// =============================================================================

/// How a column definition treats a primary key on the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum PrimaryKeyStyle {
    /// Declared elsewhere, e.g. as a table constraint.
    Omit,
    Inline,
    /// SQLite's `PRIMARY KEY AUTOINCREMENT`, which must stay together.
    SqliteAutoIncrement,
}

/// Renders `name type [default] [not null] [auto-increment]` with the
/// dialect's clause order.
pub(super) fn column_definition(
    database: &Database,
    table: &str,
    column: &ColumnDefinition,
    style: PrimaryKeyStyle,
) -> String {
    let dialect = database.dialect();
    let name = if column.computed {
        column.name.clone()
    } else {
        database.escape_column_name(&column.name)
    };
    let auto_increment = column
        .auto_increment_constraint()
        .filter(|_| database.supports(Capability::AutoIncrement));
    let data_type = database.data_type(&column.column_type, auto_increment.is_some());
    if style == PrimaryKeyStyle::SqliteAutoIncrement {
        return format!("{name} {data_type} PRIMARY KEY AUTOINCREMENT");
    }

    let primary_key = style == PrimaryKeyStyle::Inline && column.is_primary_key();
    let primary_key_last = dialect.primary_key_after_not_null();
    let default = column
        .default_value
        .as_ref()
        .map(|value| default_clause(database, table, &column.name, &column.column_type, value));
    let not_null = Clauses::new()
        .push_if(primary_key && !primary_key_last, "PRIMARY KEY")
        .push_opt(nullability_clause(database, column))
        .build();
    let (first, second) = match dialect.default_placement() {
        DefaultPlacement::BeforeNotNull => (default, Some(not_null)),
        DefaultPlacement::AfterNotNull => (Some(not_null), default),
    };

    Clauses::with(name)
        .push(data_type)
        .push_opt(first)
        .push_opt(second)
        .push_opt(auto_increment.map(|ai| {
            database.auto_increment_clause(
                ai.start_with,
                ai.increment_by,
                ai.generation_type.as_deref(),
                ai.default_on_null,
            )
        }))
        .push_if(primary_key && primary_key_last, "PRIMARY KEY")
        .build()
}

/// `NOT NULL` for non-nullable columns, or an explicit `NULL` on products
/// that default to not null.
fn nullability_clause(database: &Database, column: &ColumnDefinition) -> Option<String> {
    if column.is_nullable() {
        return database
            .is_any(&[MySql, MariaDb, Sybase, SybaseAsa])
            .then(|| "NULL".to_string());
    }
    let constraint = column.not_null_constraint();
    let name = constraint
        .and_then(|nn| nn.name.as_deref())
        .filter(|_| database.supports(Capability::NamedNotNullConstraints));
    let novalidate = database.id() == Oracle && constraint.is_some_and(|nn| nn.novalidate);
    Some(
        Clauses::new()
            .push_opt(name.map(|n| format!("CONSTRAINT {}", database.escape_constraint_name(n))))
            .push("NOT NULL")
            .push_if(novalidate, "ENABLE NOVALIDATE")
            .build(),
    )
}

fn default_clause(
    database: &Database,
    table: &str,
    column: &str,
    column_type: &str,
    value: &LiteralValue,
) -> String {
    let rendered = value.to_sql(database, Some(&DataType::parse(column_type)));
    match database.dialect().default_constraint_name(table, column) {
        Some(name) => format!(
            "CONSTRAINT {} DEFAULT {rendered}",
            database.escape_constraint_name(&name)
        ),
        None => format!("DEFAULT {rendered}"),
    }
}

fn type_hint(column_data_type: Option<&String>) -> Option<DataType> {
    column_data_type.map(|t| DataType::parse(t))
}

fn data_type_or_empty(database: &Database, column_data_type: Option<&String>) -> String {
    column_data_type
        .map(|t| database.data_type(t, false))
        .unwrap_or_default()
}

// =============================================================================
// Add column
// =============================================================================

#[derive(Debug)]
struct AddColumnGenerator;

impl SqlGenerator for AddColumnGenerator {
    type Statement = AddColumn;

    fn name(&self) -> &'static str {
        "add_column"
    }

    fn validate(&self, s: &AddColumn, database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("tableName", &s.table_name);
        result.check_required("columnName", &s.column.name);
        result.check_required("columnType", &s.column.column_type);

        if s.is_primary_key() && database.is_any(&[H2, Db2, Derby, Sqlite]) {
            result.unsupported("adding primary key columns", database);
        }
        result.check_feature(
            "auto-increment",
            s.is_auto_increment(),
            database,
            Capability::AutoIncrement,
        );
        if s.is_auto_increment() {
            if database.id() == Sqlite {
                result.unsupported("adding auto-increment columns", database);
            } else if database.is_any(MYSQL_FAMILY) && !s.is_primary_key() {
                result.unsupported("auto-increment on non-primary-key columns", database);
            }
        }
        for fk in s.foreign_key_constraints() {
            result.check_feature(
                "deferrable",
                fk.deferrable || fk.initially_deferred,
                database,
                Capability::InitiallyDeferrableColumns,
            );
        }
        result.check_allowed_only("afterColumn", &s.after_column, database, MYSQL_FAMILY);
        result.check_allowed_only("beforeColumn", &s.before_column, database, &[H2, Hsql]);
        result.check_allowed_only("position", &s.position, database, &[Firebird]);
        if s.column.remarks.is_some() && !database.supports(Capability::Remarks) {
            result.add_warning(format!(
                "column remarks are not supported on {} and were left out",
                database.id()
            ));
        }
        result
    }

    fn generate(&self, s: &AddColumn, database: &Database) -> Result<Output> {
        let table = table_of!(database, s);
        let mysql = database.is_any(MYSQL_FAMILY);
        let remarks = s.column.remarks.as_deref();

        let sql = Clauses::with(format!("ALTER TABLE {table} ADD"))
            .push(column_definition(
                database,
                &s.table_name,
                &s.column,
                PrimaryKeyStyle::Inline,
            ))
            .push_opt(
                remarks
                    .filter(|_| mysql)
                    .map(|r| format!("COMMENT {}", database.string_literal(r))),
            )
            .push_opt(
                s.after_column
                    .as_deref()
                    .map(|c| format!("AFTER {}", database.escape_column_name(c))),
            )
            .push_opt(
                s.before_column
                    .as_deref()
                    .map(|c| format!("BEFORE {}", database.escape_column_name(c))),
            )
            .build();
        let mut output = Output::from(sql);

        if let Some(position) = s.position {
            output.push_text(format!(
                "ALTER TABLE {table} ALTER COLUMN {} POSITION {position}",
                database.escape_column_name(&s.column.name)
            ));
        }
        if mysql {
            if let Some(start) = s.auto_increment_constraint().and_then(|ai| ai.start_with) {
                output.push_text(format!("ALTER TABLE {table} AUTO_INCREMENT={start}"));
            }
        }
        if let Some(remarks) = remarks.filter(|_| !mysql && database.supports(Capability::Remarks))
        {
            output.follow_with(SetColumnRemarks {
                catalog_name: s.catalog_name.clone(),
                schema_name: s.schema_name.clone(),
                table_name: s.table_name.clone(),
                column_name: s.column.name.clone(),
                remarks: remarks.to_string(),
                column_data_type: Some(s.column.column_type.clone()),
            });
        }
        if let Some(unique) = s.unique_constraint() {
            output.follow_with(AddUniqueConstraint {
                catalog_name: s.catalog_name.clone(),
                schema_name: s.schema_name.clone(),
                table_name: s.table_name.clone(),
                column_names: vec![s.column.name.clone()],
                constraint_name: unique.name.clone(),
                ..AddUniqueConstraint::default()
            });
        }
        for fk in s.foreign_key_constraints() {
            output.follow_with(AddForeignKeyConstraint {
                catalog_name: s.catalog_name.clone(),
                schema_name: s.schema_name.clone(),
                table_name: s.table_name.clone(),
                column_names: vec![s.column.name.clone()],
                referenced_catalog_name: fk.references_catalog.clone(),
                referenced_schema_name: fk.references_schema.clone(),
                referenced_table_name: fk.references_table.clone(),
                referenced_column_names: vec![fk.references_column.clone()],
                constraint_name: fk.name.clone(),
                on_delete: fk.on_delete,
                on_update: fk.on_update,
                deferrable: fk.deferrable,
                initially_deferred: fk.initially_deferred,
                novalidate: false,
            });
        }
        Ok(output)
    }
}

/// One ALTER per column.
#[derive(Debug)]
struct AddColumnsGenerator;

impl SqlGenerator for AddColumnsGenerator {
    type Statement = AddColumns;

    fn name(&self) -> &'static str {
        "add_columns"
    }

    fn validate(&self, s: &AddColumns, _database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("tableName", &s.table_name);
        result.check_required("columns", &s.columns);
        result
    }

    fn generate(&self, s: &AddColumns, _database: &Database) -> Result<Output> {
        let mut output = Output::new();
        for column in s.to_single_columns() {
            output.follow_with(column);
        }
        Ok(output)
    }
}

/// MySQL adds every column in a single ALTER.
#[derive(Debug)]
struct AddColumnsMySqlGenerator;

impl SqlGenerator for AddColumnsMySqlGenerator {
    type Statement = AddColumns;

    fn name(&self) -> &'static str {
        "add_columns_mysql"
    }

    fn dialects(&self) -> &'static [DialectId] {
        MYSQL_FAMILY
    }

    fn validate(&self, s: &AddColumns, database: &Database) -> ValidationResult {
        let mut result = AddColumnsGenerator.validate(s, database);
        for column in s.to_single_columns() {
            result.merge(AddColumnGenerator.validate(&column, database));
        }
        result
    }

    fn generate(&self, s: &AddColumns, database: &Database) -> Result<Output> {
        let table = table_of!(database, s);
        let additions = s
            .columns
            .iter()
            .map(|column| {
                Clauses::with("ADD")
                    .push(column_definition(
                        database,
                        &s.table_name,
                        column,
                        PrimaryKeyStyle::Inline,
                    ))
                    .push_opt(
                        column
                            .remarks
                            .as_deref()
                            .map(|r| format!("COMMENT {}", database.string_literal(r))),
                    )
                    .build()
            })
            .collect::<Vec<_>>();
        Ok(format!("ALTER TABLE {table} {}", additions.join(", ")).into())
    }
}

// =============================================================================
// Drop and rename
// =============================================================================

#[derive(Debug)]
struct DropColumnGenerator;

impl SqlGenerator for DropColumnGenerator {
    type Statement = DropColumn;

    fn name(&self) -> &'static str {
        "drop_column"
    }

    fn validate(&self, s: &DropColumn, _database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("tableName", &s.table_name);
        result.check_required("columnNames", &s.column_names);
        result
    }

    fn generate(&self, s: &DropColumn, database: &Database) -> Result<Output> {
        let table = table_of!(database, s);
        let columns = &s.column_names;
        let mut output = Output::new();
        match database.id() {
            MySql | MariaDb if columns.len() > 1 => {
                let drops = columns
                    .iter()
                    .map(|c| format!("DROP COLUMN {}", database.escape_column_name(c)))
                    .collect::<Vec<_>>();
                output.push_text(format!("ALTER TABLE {table} {}", drops.join(", ")));
            }
            Oracle if columns.len() > 1 => {
                output.push_text(format!(
                    "ALTER TABLE {table} DROP ({})",
                    database.escape_column_list(columns)
                ));
            }
            id => {
                let keyword = if matches!(id, Informix | Firebird | Sybase | SybaseAsa) {
                    "DROP"
                } else {
                    "DROP COLUMN"
                };
                for column in columns {
                    output.push_text(format!(
                        "ALTER TABLE {table} {keyword} {}",
                        database.escape_column_name(column)
                    ));
                }
            }
        }
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
struct RenameColumnGenerator;

impl SqlGenerator for RenameColumnGenerator {
    type Statement = RenameColumn;

    fn name(&self) -> &'static str {
        "rename_column"
    }

    fn validate(&self, s: &RenameColumn, database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("tableName", &s.table_name);
        result.check_required("oldColumnName", &s.old_column_name);
        result.check_required("newColumnName", &s.new_column_name);
        // MySQL re-declares the column while renaming it.
        result.check_required_on("columnDataType", &s.column_data_type, database, MYSQL_FAMILY);
        result
    }

    fn generate(&self, s: &RenameColumn, database: &Database) -> Result<Output> {
        let table = table_of!(database, s);
        let old = database.escape_column_name(&s.old_column_name);
        let new = database.escape_column_name(&s.new_column_name);
        let sql = match database.id() {
            MySql | MariaDb => Clauses::with(format!("ALTER TABLE {table} CHANGE {old} {new}"))
                .push(data_type_or_empty(database, s.column_data_type.as_ref()))
                .push_opt(
                    s.remarks
                        .as_deref()
                        .map(|r| format!("COMMENT {}", database.string_literal(r))),
                )
                .build(),
            Mssql => format!(
                "exec sp_rename {}, {}, 'COLUMN'",
                database.string_literal(&format!("{table}.{old}")),
                database.string_literal(&s.new_column_name)
            ),
            Sybase => format!(
                "exec sp_rename {}, {}",
                database.string_literal(&format!("{table}.{old}")),
                database.string_literal(&s.new_column_name)
            ),
            H2 | Hsql => format!("ALTER TABLE {table} ALTER COLUMN {old} RENAME TO {new}"),
            SybaseAsa => format!("ALTER TABLE {table} RENAME {old} TO {new}"),
            Informix | Derby => format!("RENAME COLUMN {table}.{old} TO {new}"),
            Firebird => format!("ALTER TABLE {table} ALTER COLUMN {old} TO {new}"),
            Generic | Oracle | Postgres | Db2 | Sqlite => {
                format!("ALTER TABLE {table} RENAME COLUMN {old} TO {new}")
            }
        };
        Ok(sql.into())
    }
}

// =============================================================================
// Type and nullability
// =============================================================================

#[derive(Debug)]
struct ModifyDataTypeGenerator;

impl SqlGenerator for ModifyDataTypeGenerator {
    type Statement = ModifyDataType;

    fn name(&self) -> &'static str {
        "modify_data_type"
    }

    fn supports(&self, _s: &ModifyDataType, database: &Database) -> bool {
        database.id() != Sqlite
    }

    fn validate(&self, s: &ModifyDataType, database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("tableName", &s.table_name);
        result.check_required("columnName", &s.column_name);
        result.check_required("newDataType", &s.new_data_type);
        if database.is_any(MYSQL_FAMILY) {
            result.add_warning(
                "modifying a column type on MySQL drops its primary key, auto-increment \
                 and not-null flags unless they are specified again",
            );
        }
        result
    }

    fn generate(&self, s: &ModifyDataType, database: &Database) -> Result<Output> {
        let table = table_of!(database, s);
        let column = database.escape_column_name(&s.column_name);
        let data_type = database.data_type(&s.new_data_type, false);
        let sql = match database.id() {
            Postgres | Firebird => {
                format!("ALTER TABLE {table} ALTER COLUMN {column} TYPE {data_type}")
            }
            Oracle | MySql | MariaDb | Sybase | SybaseAsa => {
                format!("ALTER TABLE {table} MODIFY {column} {data_type}")
            }
            Informix => format!("ALTER TABLE {table} MODIFY ({column} {data_type})"),
            Mssql | H2 | Hsql => format!("ALTER TABLE {table} ALTER COLUMN {column} {data_type}"),
            Generic | Db2 | Derby | Sqlite => {
                format!("ALTER TABLE {table} ALTER COLUMN {column} SET DATA TYPE {data_type}")
            }
        };
        let mut output = Output::from(sql);
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
struct SetNullableGenerator;

impl SqlGenerator for SetNullableGenerator {
    type Statement = SetNullable;

    fn name(&self) -> &'static str {
        "set_nullable"
    }

    fn supports(&self, _s: &SetNullable, database: &Database) -> bool {
        database.id() != Sqlite
    }

    fn validate(&self, s: &SetNullable, database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("tableName", &s.table_name);
        result.check_required("columnName", &s.column_name);
        result.check_required_on(
            "columnDataType",
            &s.column_data_type,
            database,
            &[MySql, MariaDb, Mssql, Informix],
        );
        result.check_allowed_only("constraintName", &s.constraint_name, database, &[Oracle]);
        result.check_allowed_only("novalidate", &s.novalidate, database, &[Oracle]);
        result
    }

    fn generate(&self, s: &SetNullable, database: &Database) -> Result<Output> {
        let table = table_of!(database, s);
        let column = database.escape_column_name(&s.column_name);
        let data_type = data_type_or_empty(database, s.column_data_type.as_ref());
        let keyword = if s.nullable { "NULL" } else { "NOT NULL" };
        let sql = match database.id() {
            Oracle => Clauses::with(format!("ALTER TABLE {table} MODIFY {column}"))
                .push_opt(
                    s.constraint_name
                        .as_deref()
                        .filter(|_| !s.nullable)
                        .map(|n| format!("CONSTRAINT {}", database.escape_constraint_name(n))),
                )
                .push(keyword)
                .push_if(!s.nullable && s.novalidate, "ENABLE NOVALIDATE")
                .build(),
            MySql | MariaDb => format!("ALTER TABLE {table} MODIFY {column} {data_type} {keyword}"),
            Mssql => format!("ALTER TABLE {table} ALTER COLUMN {column} {data_type} {keyword}"),
            Sybase => format!("ALTER TABLE {table} MODIFY {column} {keyword}"),
            SybaseAsa => format!("ALTER TABLE {table} ALTER {column} {keyword}"),
            Derby => format!("ALTER TABLE {table} ALTER COLUMN {column} {keyword}"),
            H2 | Hsql => format!("ALTER TABLE {table} ALTER COLUMN {column} SET {keyword}"),
            Informix => Clauses::with(format!("ALTER TABLE {table} MODIFY ({column}"))
                .push(data_type)
                .push_if(!s.nullable, "NOT NULL")
                .build()
                + ")",
            Generic | Postgres | Db2 | Firebird | Sqlite => {
                let action = if s.nullable { "DROP NOT NULL" } else { "SET NOT NULL" };
                format!("ALTER TABLE {table} ALTER COLUMN {column} {action}")
            }
        };
        let mut output = Output::from(sql);
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

// =============================================================================
// Default values
// =============================================================================

#[derive(Debug)]
struct AddDefaultValueGenerator;

impl SqlGenerator for AddDefaultValueGenerator {
    type Statement = AddDefaultValue;

    fn name(&self) -> &'static str {
        "add_default_value"
    }

    fn supports(&self, _s: &AddDefaultValue, database: &Database) -> bool {
        database.id() != Sqlite
    }

    fn validate(&self, s: &AddDefaultValue, database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("tableName", &s.table_name);
        result.check_required("columnName", &s.column_name);
        result.check_required_on("columnDataType", &s.column_data_type, database, &[Informix]);
        result.check_allowed_only("constraintName", &s.constraint_name, database, &[Mssql]);
        result
    }

    fn generate(&self, s: &AddDefaultValue, database: &Database) -> Result<Output> {
        let table = table_of!(database, s);
        let column = database.escape_column_name(&s.column_name);
        let hint = type_hint(s.column_data_type.as_ref());
        let value = s.default_value.to_sql(database, hint.as_ref());
        let sql = match database.id() {
            Oracle => format!("ALTER TABLE {table} MODIFY {column} DEFAULT {value}"),
            MySql | MariaDb => format!("ALTER TABLE {table} ALTER {column} SET DEFAULT {value}"),
            Mssql => {
                let name = s
                    .constraint_name
                    .clone()
                    .or_else(|| {
                        database
                            .dialect()
                            .default_constraint_name(&s.table_name, &s.column_name)
                    })
                    .unwrap_or_default();
                format!(
                    "ALTER TABLE {table} ADD CONSTRAINT {} DEFAULT {value} FOR {column}",
                    database.escape_constraint_name(&name)
                )
            }
            Sybase => format!("ALTER TABLE {table} REPLACE {column} DEFAULT {value}"),
            SybaseAsa => format!("ALTER TABLE {table} ALTER {column} DEFAULT {value}"),
            Derby => format!("ALTER TABLE {table} ALTER COLUMN {column} DEFAULT {value}"),
            Informix => format!(
                "ALTER TABLE {table} MODIFY ({column} {} DEFAULT {value})",
                data_type_or_empty(database, s.column_data_type.as_ref())
            ),
            Generic | Postgres | Db2 | H2 | Hsql | Firebird | Sqlite => {
                format!("ALTER TABLE {table} ALTER COLUMN {column} SET DEFAULT {value}")
            }
        };
        Ok(sql.into())
    }
}

#[derive(Debug)]
struct DropDefaultValueGenerator;

impl SqlGenerator for DropDefaultValueGenerator {
    type Statement = DropDefaultValue;

    fn name(&self) -> &'static str {
        "drop_default_value"
    }

    fn supports(&self, _s: &DropDefaultValue, database: &Database) -> bool {
        database.id() != Sqlite
    }

    fn validate(&self, s: &DropDefaultValue, database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("tableName", &s.table_name);
        result.check_required("columnName", &s.column_name);
        result.check_required_on("columnDataType", &s.column_data_type, database, &[Informix]);
        result
    }

    fn generate(&self, s: &DropDefaultValue, database: &Database) -> Result<Output> {
        let table = table_of!(database, s);
        let column = database.escape_column_name(&s.column_name);
        let sql = match database.id() {
            Oracle => format!("ALTER TABLE {table} MODIFY {column} DEFAULT NULL"),
            MySql | MariaDb | SybaseAsa => format!("ALTER TABLE {table} ALTER {column} DROP DEFAULT"),
            Postgres | H2 | Hsql | Db2 | Firebird => {
                format!("ALTER TABLE {table} ALTER COLUMN {column} DROP DEFAULT")
            }
            Sybase => format!("ALTER TABLE {table} REPLACE {column} DEFAULT NULL"),
            Derby => format!("ALTER TABLE {table} ALTER COLUMN {column} DEFAULT NULL"),
            Informix => format!(
                "ALTER TABLE {table} MODIFY ({column} {})",
                data_type_or_empty(database, s.column_data_type.as_ref())
            ),
            Generic | Mssql | Sqlite => {
                format!("ALTER TABLE {table} ALTER COLUMN {column} SET DEFAULT NULL")
            }
        };
        Ok(sql.into())
    }
}

/// SQL Server drops defaults by constraint name, looking the name up in the
/// catalog when it is not given.
#[derive(Debug)]
struct DropDefaultValueMssqlGenerator;

impl SqlGenerator for DropDefaultValueMssqlGenerator {
    type Statement = DropDefaultValue;

    fn name(&self) -> &'static str {
        "drop_default_value_mssql"
    }

    fn dialects(&self) -> &'static [DialectId] {
        &[Mssql]
    }

    fn validate(&self, s: &DropDefaultValue, database: &Database) -> ValidationResult {
        DropDefaultValueGenerator.validate(s, database)
    }

    fn generate(&self, s: &DropDefaultValue, database: &Database) -> Result<Output> {
        let table = table_of!(database, s);
        if let Some(name) = &s.constraint_name {
            return Ok(format!(
                "ALTER TABLE {table} DROP CONSTRAINT {}",
                database.escape_constraint_name(name)
            )
            .into());
        }
        let escape = |value: &str| database.dialect().escape_string(value);
        let sql = format!(
            "DECLARE @sql [nvarchar](MAX)\n\
             SELECT @sql = N'ALTER TABLE {table_literal} DROP CONSTRAINT ' + QUOTENAME([df].[name]) \
             FROM [sys].[columns] AS [c] \
             INNER JOIN [sys].[default_constraints] AS [df] ON [df].[object_id] = [c].[default_object_id] \
             WHERE [c].[object_id] = OBJECT_ID(N'{table_literal}') AND [c].[name] = N'{column}'\n\
             EXEC sp_executesql @sql",
            table_literal = escape(&table),
            column = escape(&s.column_name),
        );
        Ok(sql.into())
    }
}

// =============================================================================
// Auto-increment
// =============================================================================

fn auto_increment_clause(s: &AddAutoIncrement, database: &Database) -> String {
    database.auto_increment_clause(
        s.start_with,
        s.increment_by,
        s.generation_type.as_deref(),
        s.default_on_null,
    )
}

fn validate_auto_increment(s: &AddAutoIncrement) -> ValidationResult {
    let mut result = ValidationResult::new();
    result.check_required("tableName", &s.table_name);
    result.check_required("columnName", &s.column_name);
    result.check_required("columnDataType", &s.column_data_type);
    result
}

/// `ALTER TABLE t MODIFY c type <auto-increment>`.
#[derive(Debug)]
struct AddAutoIncrementGenerator;

impl SqlGenerator for AddAutoIncrementGenerator {
    type Statement = AddAutoIncrement;

    fn name(&self) -> &'static str {
        "add_auto_increment"
    }

    fn supports(&self, _s: &AddAutoIncrement, database: &Database) -> bool {
        !database.is_any(&[Mssql, Derby, Sqlite, Firebird])
    }

    fn validate(&self, s: &AddAutoIncrement, _database: &Database) -> ValidationResult {
        validate_auto_increment(s)
    }

    fn generate(&self, s: &AddAutoIncrement, database: &Database) -> Result<Output> {
        let sql = Clauses::with(format!(
            "ALTER TABLE {} MODIFY {}",
            table_of!(database, s),
            database.escape_column_name(&s.column_name)
        ))
        .push(database.data_type(&s.column_data_type, true))
        .push(auto_increment_clause(s, database))
        .build();
        Ok(sql.into())
    }
}

/// MySQL sets the start value as a table option.
#[derive(Debug)]
struct AddAutoIncrementMySqlGenerator;

impl SqlGenerator for AddAutoIncrementMySqlGenerator {
    type Statement = AddAutoIncrement;

    fn name(&self) -> &'static str {
        "add_auto_increment_mysql"
    }

    fn dialects(&self) -> &'static [DialectId] {
        MYSQL_FAMILY
    }

    fn validate(&self, s: &AddAutoIncrement, _database: &Database) -> ValidationResult {
        validate_auto_increment(s)
    }

    fn generate(&self, s: &AddAutoIncrement, database: &Database) -> Result<Output> {
        let table = table_of!(database, s);
        let mut output = Output::from(format!(
            "ALTER TABLE {table} MODIFY {} {} {}",
            database.escape_column_name(&s.column_name),
            database.data_type(&s.column_data_type, true),
            auto_increment_clause(s, database)
        ));
        if let Some(start) = s.start_with {
            output.push_text(format!("ALTER TABLE {table} AUTO_INCREMENT={start}"));
        }
        Ok(output)
    }
}

#[derive(Debug)]
struct AddAutoIncrementPostgresGenerator;

impl SqlGenerator for AddAutoIncrementPostgresGenerator {
    type Statement = AddAutoIncrement;

    fn name(&self) -> &'static str {
        "add_auto_increment_postgres"
    }

    fn dialects(&self) -> &'static [DialectId] {
        &[Postgres]
    }

    fn validate(&self, s: &AddAutoIncrement, _database: &Database) -> ValidationResult {
        validate_auto_increment(s)
    }

    fn generate(&self, s: &AddAutoIncrement, database: &Database) -> Result<Output> {
        Ok(format!(
            "ALTER TABLE {} ALTER COLUMN {} ADD {}",
            table_of!(database, s),
            database.escape_column_name(&s.column_name),
            auto_increment_clause(s, database)
        )
        .into())
    }
}

#[derive(Debug)]
struct AddAutoIncrementDb2Generator;

impl SqlGenerator for AddAutoIncrementDb2Generator {
    type Statement = AddAutoIncrement;

    fn name(&self) -> &'static str {
        "add_auto_increment_db2"
    }

    fn dialects(&self) -> &'static [DialectId] {
        &[Db2]
    }

    fn validate(&self, s: &AddAutoIncrement, _database: &Database) -> ValidationResult {
        validate_auto_increment(s)
    }

    fn generate(&self, s: &AddAutoIncrement, database: &Database) -> Result<Output> {
        let mut output = Output::from(format!(
            "ALTER TABLE {} ALTER COLUMN {} SET {}",
            table_of!(database, s),
            database.escape_column_name(&s.column_name),
            auto_increment_clause(s, database)
        ));
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
struct AddAutoIncrementHsqlGenerator;

impl SqlGenerator for AddAutoIncrementHsqlGenerator {
    type Statement = AddAutoIncrement;

    fn name(&self) -> &'static str {
        "add_auto_increment_hsql"
    }

    fn dialects(&self) -> &'static [DialectId] {
        &[H2, Hsql]
    }

    fn validate(&self, s: &AddAutoIncrement, _database: &Database) -> ValidationResult {
        validate_auto_increment(s)
    }

    fn generate(&self, s: &AddAutoIncrement, database: &Database) -> Result<Output> {
        Ok(format!(
            "ALTER TABLE {} ALTER COLUMN {} {} {}",
            table_of!(database, s),
            database.escape_column_name(&s.column_name),
            database.data_type(&s.column_data_type, true),
            auto_increment_clause(s, database)
        )
        .into())
    }
}

/// Informix swaps the column to a serial type.
#[derive(Debug)]
struct AddAutoIncrementInformixGenerator;

impl SqlGenerator for AddAutoIncrementInformixGenerator {
    type Statement = AddAutoIncrement;

    fn name(&self) -> &'static str {
        "add_auto_increment_informix"
    }

    fn dialects(&self) -> &'static [DialectId] {
        &[Informix]
    }

    fn validate(&self, s: &AddAutoIncrement, _database: &Database) -> ValidationResult {
        validate_auto_increment(s)
    }

    fn generate(&self, s: &AddAutoIncrement, database: &Database) -> Result<Output> {
        Ok(format!(
            "ALTER TABLE {} MODIFY ({} {})",
            table_of!(database, s),
            database.escape_column_name(&s.column_name),
            database.data_type(&s.column_data_type, true)
        )
        .into())
    }
}

// =============================================================================
// Remarks
// =============================================================================

#[derive(Debug)]
struct SetColumnRemarksGenerator;

impl SqlGenerator for SetColumnRemarksGenerator {
    type Statement = SetColumnRemarks;

    fn name(&self) -> &'static str {
        "set_column_remarks"
    }

    fn validate(&self, s: &SetColumnRemarks, _database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("tableName", &s.table_name);
        result.check_required("columnName", &s.column_name);
        result
    }

    fn generate(&self, s: &SetColumnRemarks, database: &Database) -> Result<Output> {
        Ok(format!(
            "COMMENT ON COLUMN {}.{} IS {}",
            table_of!(database, s),
            database.escape_column_name(&s.column_name),
            database.string_literal(&s.remarks)
        )
        .into())
    }
}

#[derive(Debug)]
struct SetColumnRemarksMySqlGenerator;

impl SqlGenerator for SetColumnRemarksMySqlGenerator {
    type Statement = SetColumnRemarks;

    fn name(&self) -> &'static str {
        "set_column_remarks_mysql"
    }

    fn dialects(&self) -> &'static [DialectId] {
        MYSQL_FAMILY
    }

    fn validate(&self, s: &SetColumnRemarks, database: &Database) -> ValidationResult {
        let mut result = SetColumnRemarksGenerator.validate(s, database);
        result.check_required("columnDataType", &s.column_data_type);
        result
    }

    fn generate(&self, s: &SetColumnRemarks, database: &Database) -> Result<Output> {
        Ok(format!(
            "ALTER TABLE {} MODIFY {} {} COMMENT {}",
            table_of!(database, s),
            database.escape_column_name(&s.column_name),
            data_type_or_empty(database, s.column_data_type.as_ref()),
            database.string_literal(&s.remarks)
        )
        .into())
    }
}

#[derive(Debug)]
struct SetColumnRemarksMssqlGenerator;

impl SqlGenerator for SetColumnRemarksMssqlGenerator {
    type Statement = SetColumnRemarks;

    fn name(&self) -> &'static str {
        "set_column_remarks_mssql"
    }

    fn dialects(&self) -> &'static [DialectId] {
        &[Mssql]
    }

    fn validate(&self, s: &SetColumnRemarks, database: &Database) -> ValidationResult {
        SetColumnRemarksGenerator.validate(s, database)
    }

    fn generate(&self, s: &SetColumnRemarks, database: &Database) -> Result<Output> {
        Ok(mssql_extended_property(
            database,
            s.schema_name.as_deref(),
            &s.table_name,
            Some(&s.column_name),
            &s.remarks,
        )
        .into())
    }
}

/// `sp_addextendedproperty` call that stores a description on SQL Server.
pub(super) fn mssql_extended_property(
    database: &Database,
    schema: Option<&str>,
    table: &str,
    column: Option<&str>,
    remarks: &str,
) -> String {
    let escape = |value: &str| database.dialect().escape_string(value);
    let schema = schema
        .or(database.settings().default_schema.as_deref())
        .or_else(|| database.dialect().default_schema_name())
        .unwrap_or("dbo");
    let mut sql = format!(
        "EXEC sp_addextendedproperty @name = N'MS_Description', @value = N'{}', \
         @level0type = N'SCHEMA', @level0name = N'{}', \
         @level1type = N'TABLE', @level1name = N'{}'",
        escape(remarks),
        escape(schema),
        escape(table)
    );
    if let Some(column) = column {
        sql.push_str(&format!(
            ", @level2type = N'COLUMN', @level2name = N'{}'",
            escape(column)
        ));
    }
    sql
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

    #[test]
    fn test_add_column_default_placement() {
        let stmt = AddColumn::new("person", "age", "int")
            .default_value("0")
            .constraint(ColumnConstraint::not_null());
        assert_eq!(
            sql(stmt.clone(), Oracle),
            vec!["ALTER TABLE person ADD age INTEGER DEFAULT 0 NOT NULL"]
        );
        assert_eq!(
            sql(stmt.clone(), Postgres),
            vec!["ALTER TABLE person ADD age INTEGER NOT NULL DEFAULT 0"]
        );
        assert_eq!(
            sql(stmt, Mssql),
            vec!["ALTER TABLE person ADD age INT NOT NULL CONSTRAINT DF_person_age DEFAULT 0"]
        );
    }

    #[test]
    fn test_add_column_primary_key_placement() {
        let stmt = AddColumn::new("person", "id", "int")
            .constraint(ColumnConstraint::primary_key())
            .constraint(ColumnConstraint::auto_increment());
        assert_eq!(
            sql(stmt.clone(), Hsql),
            vec!["ALTER TABLE person ADD id INT NOT NULL GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY"]
        );
        assert_eq!(
            sql(stmt, Postgres),
            vec!["ALTER TABLE person ADD id INTEGER PRIMARY KEY NOT NULL GENERATED BY DEFAULT AS IDENTITY"]
        );
    }

    #[test]
    fn test_add_column_mysql_extras() {
        let stmt = AddColumn::new("person", "nick", "varchar(20)")
            .remarks("Nickname")
            .after("name");
        assert_eq!(
            sql(stmt, MySql),
            vec!["ALTER TABLE person ADD nick VARCHAR(20) NULL COMMENT 'Nickname' AFTER name"]
        );

        let stmt = AddColumn::from_definition(
            "person",
            ColumnDefinition::new("id", "bigint").primary_key().constraint(
                ColumnConstraint::AutoIncrement(crate::statement::AutoIncrementConstraint {
                    start_with: Some(100),
                    ..Default::default()
                }),
            ),
        );
        assert_eq!(
            sql(stmt, MySql),
            vec![
                "ALTER TABLE person ADD id BIGINT PRIMARY KEY NOT NULL AUTO_INCREMENT",
                "ALTER TABLE person AUTO_INCREMENT=100",
            ]
        );
    }

    #[test]
    fn test_add_column_follow_ups() {
        let stmt = AddColumn::new("orders", "customer_id", "int")
            .constraint(ColumnConstraint::references("customer", "id"));
        assert_eq!(
            sql(stmt, Postgres),
            vec![
                "ALTER TABLE orders ADD customer_id INTEGER",
                "ALTER TABLE orders ADD FOREIGN KEY (customer_id) REFERENCES customer (id)",
            ]
        );
    }

    #[test]
    fn test_add_primary_key_column_refused() {
        let stmt: Statement = AddColumn::new("t", "id", "int")
            .constraint(ColumnConstraint::primary_key())
            .into();
        for id in [H2, Db2, Derby, Sqlite] {
            let err = default_registry()
                .generate(&stmt, &Database::new(id))
                .unwrap_err();
            assert_eq!(err.unsupported_feature(), Some("adding primary key columns"));
        }
        assert!(default_registry()
            .generate(&stmt, &Database::new(Oracle))
            .is_ok());
    }

    #[test]
    fn test_add_columns_mysql_single_statement() {
        let stmt = AddColumns::new(
            "person",
            vec![
                ColumnDefinition::new("a", "int"),
                ColumnDefinition::new("b", "int").not_null(),
            ],
        );
        assert_eq!(
            sql(stmt.clone(), MySql),
            vec!["ALTER TABLE person ADD a INT NULL, ADD b INT NOT NULL"]
        );
        assert_eq!(
            sql(stmt, Generic),
            vec!["ALTER TABLE person ADD a INT", "ALTER TABLE person ADD b INT NOT NULL"]
        );
    }

    #[test]
    fn test_drop_columns() {
        let stmt = DropColumn::multiple("person", ["a", "b"]);
        assert_eq!(sql(stmt.clone(), Oracle), vec!["ALTER TABLE person DROP (a, b)"]);
        assert_eq!(
            sql(stmt.clone(), MySql),
            vec!["ALTER TABLE person DROP COLUMN a, DROP COLUMN b"]
        );
        assert_eq!(
            sql(DropColumn::new("person", "a"), Db2),
            vec![
                "ALTER TABLE person DROP COLUMN a",
                "CALL SYSPROC.ADMIN_CMD ('REORG TABLE person')",
            ]
        );
    }

    #[test]
    fn test_rename_column_escapes_sp_rename_arguments() {
        assert_eq!(
            sql(RenameColumn::new("person", "name", "o'brien"), Mssql),
            vec!["exec sp_rename 'person.name', 'o''brien', 'COLUMN'"]
        );
        assert_eq!(
            sql(RenameColumn::new("person", "name", "o'brien"), Sybase),
            vec!["exec sp_rename 'person.name', 'o''brien'"]
        );
        assert_eq!(
            sql(RenameColumn::new("person", "o'brien", "name"), Mssql),
            vec!["exec sp_rename 'person.[o''brien]', 'name', 'COLUMN'"]
        );
    }

    #[test]
    fn test_rename_column() {
        let stmt = RenameColumn::new("person", "name", "full_name");
        assert_eq!(
            sql(stmt.clone(), Postgres),
            vec!["ALTER TABLE person RENAME COLUMN name TO full_name"]
        );
        assert_eq!(
            sql(stmt.clone(), Mssql),
            vec!["exec sp_rename 'person.name', 'full_name', 'COLUMN'"]
        );
        assert_eq!(
            sql(stmt.clone().column_data_type("varchar(50)"), MySql),
            vec!["ALTER TABLE person CHANGE name full_name VARCHAR(50)"]
        );
        let err = default_registry()
            .generate(&stmt.into(), &Database::new(MySql))
            .unwrap_err();
        assert!(err.to_string().contains("'columnDataType' is required"));
    }

    #[test]
    fn test_set_nullable() {
        let stmt = SetNullable::new("person", "name", false);
        assert_eq!(
            sql(stmt.clone(), Postgres),
            vec!["ALTER TABLE person ALTER COLUMN name SET NOT NULL"]
        );
        assert_eq!(sql(stmt.clone(), Oracle), vec!["ALTER TABLE person MODIFY name NOT NULL"]);
        assert_eq!(
            sql(stmt.column_data_type("varchar(10)"), Mssql),
            vec!["ALTER TABLE person ALTER COLUMN name VARCHAR(10) NOT NULL"]
        );
    }

    #[test]
    fn test_drop_default_value() {
        let stmt = DropDefaultValue::new("person", "age");
        assert_eq!(
            sql(stmt.clone(), Generic),
            vec!["ALTER TABLE person ALTER COLUMN age SET DEFAULT NULL"]
        );
        assert_eq!(
            sql(stmt.clone(), Postgres),
            vec!["ALTER TABLE person ALTER COLUMN age DROP DEFAULT"]
        );
        assert_eq!(
            sql(stmt.clone().constraint_name("DF_age"), Mssql),
            vec!["ALTER TABLE person DROP CONSTRAINT DF_age"]
        );
        let lookup = sql(stmt, Mssql);
        assert!(lookup[0].starts_with("DECLARE @sql"));
        assert!(lookup[0].contains("OBJECT_ID(N'person') AND [c].[name] = N'age'"));
    }

    #[test]
    fn test_add_auto_increment_variants() {
        let stmt = AddAutoIncrement::new("person", "id", "int").start_with(10);
        assert_eq!(
            sql(stmt.clone(), Postgres),
            vec!["ALTER TABLE person ALTER COLUMN id ADD GENERATED BY DEFAULT AS IDENTITY (START WITH 10)"]
        );
        assert_eq!(
            sql(stmt.clone(), MySql),
            vec![
                "ALTER TABLE person MODIFY id INT AUTO_INCREMENT",
                "ALTER TABLE person AUTO_INCREMENT=10",
            ]
        );
        assert_eq!(
            sql(stmt.clone(), Informix),
            vec!["ALTER TABLE person MODIFY (id SERIAL)"]
        );
        let unsupported = default_registry().generate(&stmt.into(), &Database::new(Mssql));
        assert!(unsupported.is_err());
    }

    #[test]
    fn test_column_remarks() {
        let stmt = SetColumnRemarks::new("person", "name", "Full name");
        assert_eq!(
            sql(stmt.clone(), Oracle),
            vec!["COMMENT ON COLUMN person.name IS 'Full name'"]
        );
        assert!(sql(stmt, Mssql)[0].contains("@level2name = N'name'"));
    }
}
