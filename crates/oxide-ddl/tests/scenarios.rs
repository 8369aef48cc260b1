//! Concrete end-to-end generation scenarios.

mod common;

use common::{database, generate_err, sql};
use oxide_ddl::prelude::*;

#[test]
fn test_plain_add_column_on_generic() {
    let stmt = AddColumn::new("person", "age", "int");
    assert_eq!(sql(stmt, DialectId::Generic), vec!["ALTER TABLE person ADD age INT"]);
}

#[test]
fn test_default_before_not_null() {
    let stmt = AddColumn::new("person", "age", "int")
        .default_value("0")
        .constraint(ColumnConstraint::not_null());
    for id in [
        DialectId::Oracle,
        DialectId::Hsql,
        DialectId::Derby,
        DialectId::Db2,
        DialectId::Firebird,
    ] {
        let text = sql(stmt.clone(), id).remove(0);
        assert!(text.contains("DEFAULT 0 NOT NULL"), "{id}: {text}");
    }
}

#[test]
fn test_unnamed_primary_key_on_mysql() {
    let stmt = AddPrimaryKey::new("orders", ["id"]);
    let texts = sql(stmt, DialectId::MySql);
    assert_eq!(texts, vec!["ALTER TABLE orders ADD PRIMARY KEY (id)"]);
    assert!(!texts[0].contains("CONSTRAINT"));
}

#[test]
fn test_named_primary_key_ignored_on_mysql() {
    let stmt = AddPrimaryKey::new("orders", ["id"]).constraint_name("pk_orders");
    assert_eq!(
        sql(stmt.clone(), DialectId::MySql),
        vec!["ALTER TABLE orders ADD PRIMARY KEY (id)"]
    );
    assert_eq!(
        sql(stmt, DialectId::Postgres),
        vec!["ALTER TABLE orders ADD CONSTRAINT pk_orders PRIMARY KEY (id)"]
    );
}

#[test]
fn test_cascade_drop_degrades_with_warning() {
    let stmt = Statement::from(DropTable::new("t").cascade());
    let generated = default_registry()
        .generate(&stmt, &database(DialectId::Mssql))
        .unwrap();
    let texts = generated.sql.iter().map(|s| s.text.as_str()).collect::<Vec<_>>();
    assert_eq!(texts, vec!["DROP TABLE t"]);
    assert_eq!(generated.warnings.len(), 1);
    assert!(generated.warnings[0].contains("cascade"));

    assert_eq!(
        sql(DropTable::new("t").cascade(), DialectId::Oracle),
        vec!["DROP TABLE t CASCADE CONSTRAINTS"]
    );
    assert_eq!(
        sql(DropTable::new("t").cascade(), DialectId::Postgres),
        vec!["DROP TABLE t CASCADE"]
    );
}

#[test]
fn test_deferrable_foreign_key_is_unsupported() {
    let stmt = AddForeignKeyConstraint::new("orders", ["customer_id"], "customer", ["id"])
        .constraint_name("fk_orders_customer")
        .deferrable(false);
    for id in [DialectId::MySql, DialectId::Mssql] {
        let err = generate_err(stmt.clone(), id);
        assert_eq!(err.unsupported_feature(), Some("deferrable"), "{id}");
    }
    let texts = sql(stmt, DialectId::Postgres);
    assert!(texts[0].ends_with("DEFERRABLE"));
}

#[test]
fn test_is_nullable() {
    assert!(AddColumn::new("person", "age", "int").is_nullable());
    assert!(AddColumn::new("person", "id", "int")
        .constraint(ColumnConstraint::auto_increment())
        .is_nullable());
    assert!(!AddColumn::new("person", "age", "int")
        .constraint(ColumnConstraint::not_null())
        .is_nullable());
    assert!(!AddColumn::new("person", "id", "int")
        .constraint(ColumnConstraint::primary_key())
        .is_nullable());
}

#[test]
fn test_statements_from_json() {
    let json = r#"[
        {"type": "createTable", "tableName": "person", "columns": [
            {"name": "id", "type": "int", "constraints": [{"type": "primaryKey"}]},
            {"name": "name", "type": "varchar(50)"}
        ]},
        {"type": "createIndex", "indexName": "idx_person_name", "tableName": "person",
         "columns": [{"name": "name"}]}
    ]"#;
    let statements: Vec<Statement> = serde_json::from_str(json).unwrap();
    let generated = default_registry()
        .generate_all(&statements, &database(DialectId::Postgres))
        .unwrap();
    let texts = generated.sql.iter().map(|s| s.text.as_str()).collect::<Vec<_>>();
    assert_eq!(
        texts,
        vec![
            "CREATE TABLE person (id INTEGER NOT NULL, name VARCHAR(50), CONSTRAINT person_pkey PRIMARY KEY (id))",
            "CREATE INDEX idx_person_name ON person(name)",
        ]
    );
}

#[test]
fn test_rollback_reverses_order() {
    let forward = vec![
        Statement::from(CreateTable::new("person").column(ColumnDefinition::new("id", "int"))),
        Statement::from(AddColumn::new("person", "age", "int")),
    ];
    let backward = inverse_all(&forward).unwrap();
    let generated = default_registry()
        .generate_all(&backward, &database(DialectId::Postgres))
        .unwrap();
    let texts = generated.sql.iter().map(|s| s.text.as_str()).collect::<Vec<_>>();
    assert_eq!(texts, vec!["ALTER TABLE person DROP COLUMN age", "DROP TABLE person"]);
}
