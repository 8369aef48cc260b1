//! Properties that hold across every dialect and statement kind.

mod common;

use std::collections::BTreeSet;

use common::{database, samples, schemaless_dialects, sql};
use oxide_ddl::database::DefaultPlacement;
use oxide_ddl::prelude::*;

#[test]
fn test_samples_cover_every_kind() {
    let kinds = samples().iter().map(Statement::kind).collect::<BTreeSet<_>>();
    assert_eq!(kinds.len(), StatementKind::ALL.len());
}

#[test]
fn test_supported_statements_generate() {
    for id in DialectId::ALL {
        let db = database(id);
        for statement in samples() {
            if !statement.supports_database(&db) {
                continue;
            }
            let generated = default_registry()
                .generate_sql(&statement, &db)
                .unwrap_or_else(|e| panic!("{} on {id}: {e}", statement.kind()));
            assert!(!generated.is_empty(), "{} on {id}", statement.kind());
            assert!(
                generated.iter().all(|s| !s.text.trim().is_empty()),
                "{} on {id}",
                statement.kind()
            );
        }
    }
}

#[test]
fn test_unsupported_statements_fail_cleanly() {
    for id in DialectId::ALL {
        let db = database(id);
        for statement in samples() {
            if statement.supports_database(&db) {
                continue;
            }
            assert!(
                default_registry().generate(&statement, &db).is_err(),
                "{} on {id}",
                statement.kind()
            );
        }
    }
}

#[test]
fn test_blank_comment_is_rejected_everywhere() {
    for id in DialectId::ALL {
        let db = database(id);
        for text in ["", "   "] {
            let statement = Statement::from(Comment::new(text));
            assert!(
                default_registry().generate_sql(&statement, &db).is_err(),
                "{text:?} on {id}"
            );
        }
        let generated = default_registry()
            .generate_sql(&Comment::new("Add people").into(), &db)
            .unwrap();
        assert_eq!(generated.len(), 1, "{id}");
        assert!(generated[0].text.ends_with("Add people"), "{id}");
    }
}

#[test]
fn test_generation_is_idempotent() {
    for id in DialectId::ALL {
        let db = database(id);
        for statement in samples() {
            let first = default_registry().generate(&statement, &db).ok();
            let second = default_registry().generate(&statement, &db).ok();
            assert_eq!(first, second, "{} on {id}", statement.kind());
        }
    }
}

#[test]
fn test_no_schema_segment_without_schema_support() {
    let qualified: Vec<Statement> = vec![
        CreateTable::new("person")
            .in_schema("audit")
            .column(ColumnDefinition::new("id", "int"))
            .into(),
        AddColumn::new("person", "age", "int").in_schema("audit").into(),
        DropTable::new("person").in_schema("audit").into(),
        CreateView::new("v_person", "SELECT 1").in_schema("audit").into(),
        Insert::new("person").in_schema("audit").value("id", 1_i64).into(),
        DropSequence::new("seq_person").in_schema("audit").into(),
    ];
    let schemaless = schemaless_dialects();
    assert!(schemaless.contains(&DialectId::MySql));
    assert!(schemaless.contains(&DialectId::Sqlite));

    for id in schemaless {
        let settings = DatabaseSettings {
            default_schema: Some("audit".to_string()),
            ..DatabaseSettings::default()
        };
        for db in [database(id), Database::with_settings(id, settings)] {
            for statement in &qualified {
                let Ok(generated) = default_registry().generate_sql(statement, &db) else {
                    continue;
                };
                for s in generated {
                    assert!(!s.text.contains("audit"), "{id}: {}", s.text);
                }
            }
        }
    }
}

#[test]
fn test_schema_segment_with_schema_support() {
    let statement = DropTable::new("person").in_schema("audit");
    assert_eq!(sql(statement.clone(), DialectId::Postgres), vec!["DROP TABLE audit.person"]);
    assert_eq!(sql(statement, DialectId::MySql), vec!["DROP TABLE person"]);
}

#[test]
fn test_default_and_not_null_ordering() {
    let statement = AddColumn::new("person", "age", "int")
        .default_value(0_i64)
        .constraint(ColumnConstraint::not_null());
    for id in DialectId::ALL {
        let placement = id.dialect().default_placement();
        let Ok(generated) = default_registry().generate_sql(&statement.clone().into(), &database(id))
        else {
            continue;
        };
        let text = &generated[0].text;
        let (Some(default), Some(not_null)) = (text.find("DEFAULT"), text.find("NOT NULL")) else {
            panic!("{id}: {text}");
        };
        match placement {
            DefaultPlacement::BeforeNotNull => assert!(default < not_null, "{id}: {text}"),
            DefaultPlacement::AfterNotNull => assert!(default > not_null, "{id}: {text}"),
        }
    }
}

#[test]
fn test_quote_all_objects() {
    let db = Database::new(DialectId::Postgres).with_quoting_strategy(QuotingStrategy::QuoteAllObjects);
    let generated = default_registry()
        .generate_sql(&AddColumn::new("person", "age", "int").into(), &db)
        .unwrap();
    assert_eq!(generated[0].text, r#"ALTER TABLE "person" ADD "age" INTEGER"#);

    let mssql = Database::new(DialectId::Mssql).with_quoting_strategy(QuotingStrategy::QuoteAllObjects);
    let generated = default_registry()
        .generate_sql(&DropTable::new("person").into(), &mssql)
        .unwrap();
    assert_eq!(generated[0].text, "DROP TABLE [person]");
}

#[test]
fn test_reserved_words_are_quoted() {
    assert_eq!(
        sql(AddColumn::new("order", "select", "int"), DialectId::Postgres),
        vec![r#"ALTER TABLE "order" ADD "select" INTEGER"#]
    );
    assert_eq!(
        sql(AddColumn::new("order", "select", "int"), DialectId::MySql),
        vec!["ALTER TABLE `order` ADD `select` INT NULL"]
    );
}
