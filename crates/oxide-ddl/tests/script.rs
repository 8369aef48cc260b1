//! Writing generated SQL to script files.

mod common;

use std::fs;
use std::io::Write;

use common::database;
use oxide_ddl::prelude::*;

#[test]
fn test_script_file_for_mssql() {
    let statements = vec![
        Statement::from(Comment::new("Add people")),
        Statement::from(
            CreateTable::new("person").column(ColumnDefinition::new("id", "int").not_null()),
        ),
        Statement::from(CreateProcedure::new("CREATE PROCEDURE p AS SELECT 1")),
    ];
    let generated = default_registry()
        .generate_all(&statements, &database(DialectId::Mssql))
        .unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write_script(&mut file, &generated.sql).unwrap();
    file.flush().unwrap();

    let delimiter = DialectId::Mssql.dialect().procedure_end_delimiter();
    let script = fs::read_to_string(file.path()).unwrap();
    assert_eq!(
        script,
        format!(
            "-- Add people\nCREATE TABLE person (id INT NOT NULL);\n\n\
             CREATE PROCEDURE p AS SELECT 1{delimiter}\n\n"
        )
    );
}

#[test]
fn test_script_round_trips_from_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("changes.json");
    fs::write(
        &input,
        r#"[{"type": "dropTable", "tableName": "person", "ifExists": true}]"#,
    )
    .unwrap();

    let statements: Vec<Statement> =
        serde_json::from_str(&fs::read_to_string(&input).unwrap()).unwrap();
    let generated = default_registry()
        .generate_all(&statements, &database(DialectId::Postgres))
        .unwrap();

    let output = dir.path().join("changes.sql");
    let mut file = fs::File::create(&output).unwrap();
    write_script(&mut file, &generated.sql).unwrap();
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "DROP TABLE IF EXISTS person;\n\n"
    );
}
