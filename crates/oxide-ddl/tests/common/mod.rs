#![allow(dead_code)]

use oxide_ddl::prelude::*;

pub fn database(id: DialectId) -> Database {
    Database::new(id)
}

/// Generated SQL texts, panicking on failure.
pub fn sql(statement: impl Into<Statement>, id: DialectId) -> Vec<String> {
    let statement = statement.into();
    default_registry()
        .generate_sql(&statement, &database(id))
        .unwrap_or_else(|e| panic!("Failed to generate {} on {id}: {e}", statement.kind()))
        .into_iter()
        .map(|s| s.text)
        .collect()
}

pub fn generate_err(statement: impl Into<Statement>, id: DialectId) -> GenerateError {
    let statement = statement.into();
    default_registry()
        .generate(&statement, &database(id))
        .expect_err(&format!("Expected {} to fail on {id}", statement.kind()))
}

/// One statement of every kind, filled in so that it validates on every
/// dialect that supports it.
pub fn samples() -> Vec<Statement> {
    vec![
        AddAutoIncrement::new("person", "id", "int").into(),
        AddColumn::new("person", "age", "int").into(),
        AddColumns::new(
            "person",
            vec![
                ColumnDefinition::new("nick", "varchar(20)"),
                ColumnDefinition::new("score", "int"),
            ],
        )
        .into(),
        AddDefaultValue::new("person", "age", 0_i64)
            .column_data_type("int")
            .into(),
        AddForeignKeyConstraint::new("orders", ["customer_id"], "customer", ["id"])
            .constraint_name("fk_orders_customer")
            .into(),
        AddPrimaryKey::new("orders", ["id"])
            .constraint_name("pk_orders")
            .into(),
        AddUniqueConstraint::new("person", ["email"])
            .constraint_name("uq_person_email")
            .into(),
        AlterSequence::new("seq_person").min_value(5).into(),
        Comment::new("schema changes").into(),
        CopyRows::new("person_old", "person").column("nm", "name").into(),
        CreateIndex::new("idx_person_name", "person").column("name").into(),
        CreateProcedure::new("CREATE PROCEDURE p AS SELECT 1").into(),
        CreateSequence::new("seq_person").into(),
        CreateTable::new("person")
            .column(ColumnDefinition::new("id", "int").primary_key())
            .column(ColumnDefinition::new("name", "varchar(50)").not_null())
            .into(),
        CreateView::new("v_person", "SELECT id, name FROM person").into(),
        Delete::new("person").into(),
        DropColumn::new("person", "age").into(),
        DropDefaultValue::new("person", "age")
            .column_data_type("int")
            .constraint_name("df_person_age")
            .into(),
        DropForeignKeyConstraint::new("orders", "fk_orders_customer").into(),
        DropIndex::new("idx_person_name").on_table("person").into(),
        DropPrimaryKey::new("orders").constraint_name("pk_orders").into(),
        DropProcedure::new("p").into(),
        DropSequence::new("seq_person").into(),
        DropTable::new("person").into(),
        DropUniqueConstraint::new("person", "uq_person_email").into(),
        DropView::new("v_person").into(),
        Insert::new("person").value("id", 1_i64).into(),
        InsertOrUpdate::new("person", ["id"])
            .value("id", 1_i64)
            .value("name", "Ann")
            .into(),
        ModifyDataType::new("person", "name", "varchar(100)").into(),
        RawSql::new("SELECT 1").into(),
        RenameColumn::new("person", "nm", "name")
            .column_data_type("varchar(50)")
            .into(),
        RenameSequence::new("seq_person", "seq_people").into(),
        RenameTable::new("person", "people").into(),
        RenameView::new("v_person", "v_people").into(),
        ReorganizeTable::new("person").into(),
        SetColumnRemarks::new("person", "name", "Full name")
            .column_data_type("varchar(50)")
            .into(),
        SetNullable::new("person", "name", false)
            .column_data_type("varchar(50)")
            .into(),
        SetTableRemarks::new("person", "People").into(),
        Update::new("person").set("name", "Ann").into(),
    ]
}

/// Dialects without schema support.
pub fn schemaless_dialects() -> Vec<DialectId> {
    DialectId::ALL
        .into_iter()
        .filter(|&id| !database(id).supports(Capability::Schemas))
        .collect()
}
