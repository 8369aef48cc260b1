//! Rollback statements.

use super::{
    AddColumn, AddForeignKeyConstraint, AddPrimaryKey, AddUniqueConstraint, CreateProcedure,
    CreateSequence, CreateView, DropColumn, DropDefaultValue, DropForeignKeyConstraint, DropIndex,
    DropPrimaryKey, DropProcedure, DropSequence, DropTable, DropUniqueConstraint, DropView,
    RenameColumn, RenameSequence, RenameTable, RenameView, SetNullable, Statement,
};

impl Statement {
    /// Returns the statement that undoes this one, if there is one.
    ///
    /// Drops lose the definition of what they remove and are not reversible.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let inverse: Self = match self {
            Self::CreateTable(s) => DropTable {
                catalog_name: s.catalog_name.clone(),
                schema_name: s.schema_name.clone(),
                table_name: s.table_name.clone(),
                ..DropTable::default()
            }
            .into(),
            Self::RenameTable(s) => RenameTable {
                catalog_name: s.catalog_name.clone(),
                schema_name: s.schema_name.clone(),
                old_table_name: s.new_table_name.clone(),
                new_table_name: s.old_table_name.clone(),
            }
            .into(),
            Self::AddColumn(s) => drop_column(s).into(),
            Self::AddColumns(s) => DropColumn {
                catalog_name: s.catalog_name.clone(),
                schema_name: s.schema_name.clone(),
                table_name: s.table_name.clone(),
                column_names: s.columns.iter().map(|c| c.name.clone()).collect(),
            }
            .into(),
            Self::RenameColumn(s) => RenameColumn {
                old_column_name: s.new_column_name.clone(),
                new_column_name: s.old_column_name.clone(),
                ..s.clone()
            }
            .into(),
            Self::SetNullable(s) => SetNullable {
                nullable: !s.nullable,
                ..s.clone()
            }
            .into(),
            Self::AddDefaultValue(s) => DropDefaultValue {
                catalog_name: s.catalog_name.clone(),
                schema_name: s.schema_name.clone(),
                table_name: s.table_name.clone(),
                column_name: s.column_name.clone(),
                column_data_type: s.column_data_type.clone(),
                constraint_name: s.constraint_name.clone(),
            }
            .into(),
            Self::AddPrimaryKey(s) => drop_primary_key(s).into(),
            Self::AddUniqueConstraint(s) => drop_unique(s).into(),
            Self::AddForeignKeyConstraint(s) => drop_foreign_key(s)?.into(),
            Self::CreateIndex(s) => DropIndex {
                catalog_name: s.catalog_name.clone(),
                schema_name: s.schema_name.clone(),
                index_name: s.index_name.clone(),
                table_name: Some(s.table_name.clone()),
            }
            .into(),
            Self::CreateSequence(s) => drop_sequence(s).into(),
            Self::RenameSequence(s) => RenameSequence {
                catalog_name: s.catalog_name.clone(),
                schema_name: s.schema_name.clone(),
                old_sequence_name: s.new_sequence_name.clone(),
                new_sequence_name: s.old_sequence_name.clone(),
            }
            .into(),
            Self::CreateView(s) => drop_view(s).into(),
            Self::RenameView(s) => RenameView {
                catalog_name: s.catalog_name.clone(),
                schema_name: s.schema_name.clone(),
                old_view_name: s.new_view_name.clone(),
                new_view_name: s.old_view_name.clone(),
            }
            .into(),
            Self::CreateProcedure(s) => drop_procedure(s)?.into(),
            _ => return None,
        };
        Some(inverse)
    }
}

/// Inverts a list of statements, last first.
///
/// Returns `None` if any statement has no inverse.
#[must_use]
pub fn inverse_all(statements: &[Statement]) -> Option<Vec<Statement>> {
    statements.iter().rev().map(Statement::inverse).collect()
}

fn drop_column(s: &AddColumn) -> DropColumn {
    DropColumn {
        catalog_name: s.catalog_name.clone(),
        schema_name: s.schema_name.clone(),
        table_name: s.table_name.clone(),
        column_names: vec![s.column.name.clone()],
    }
}

fn drop_primary_key(s: &AddPrimaryKey) -> DropPrimaryKey {
    DropPrimaryKey {
        catalog_name: s.catalog_name.clone(),
        schema_name: s.schema_name.clone(),
        table_name: s.table_name.clone(),
        constraint_name: s.constraint_name.clone(),
    }
}

fn drop_unique(s: &AddUniqueConstraint) -> DropUniqueConstraint {
    DropUniqueConstraint {
        catalog_name: s.catalog_name.clone(),
        schema_name: s.schema_name.clone(),
        table_name: s.table_name.clone(),
        constraint_name: s.constraint_name.clone(),
        column_names: s.column_names.clone(),
    }
}

fn drop_foreign_key(s: &AddForeignKeyConstraint) -> Option<DropForeignKeyConstraint> {
    Some(DropForeignKeyConstraint {
        catalog_name: s.catalog_name.clone(),
        schema_name: s.schema_name.clone(),
        table_name: s.table_name.clone(),
        constraint_name: s.constraint_name.clone()?,
    })
}

fn drop_sequence(s: &CreateSequence) -> DropSequence {
    DropSequence {
        catalog_name: s.catalog_name.clone(),
        schema_name: s.schema_name.clone(),
        sequence_name: s.sequence_name.clone(),
    }
}

fn drop_view(s: &CreateView) -> DropView {
    DropView {
        catalog_name: s.catalog_name.clone(),
        schema_name: s.schema_name.clone(),
        view_name: s.view_name.clone(),
        if_exists: false,
    }
}

fn drop_procedure(s: &CreateProcedure) -> Option<DropProcedure> {
    Some(DropProcedure {
        catalog_name: s.catalog_name.clone(),
        schema_name: s.schema_name.clone(),
        procedure_name: s.procedure_name.clone()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::{ColumnDefinition, CreateTable, StatementKind};

    #[test]
    fn test_create_table_inverse() {
        let create = Statement::from(
            CreateTable::new("person")
                .in_schema("app")
                .column(ColumnDefinition::new("id", "int").primary_key()),
        );
        let Some(Statement::DropTable(drop)) = create.inverse() else {
            panic!("expected drop table");
        };
        assert_eq!(drop.table_name, "person");
        assert_eq!(drop.schema_name.as_deref(), Some("app"));
    }

    #[test]
    fn test_rename_swaps_names() {
        let rename = Statement::from(RenameColumn::new("person", "name", "full_name"));
        let Some(Statement::RenameColumn(back)) = rename.inverse() else {
            panic!("expected rename column");
        };
        assert_eq!(back.old_column_name, "full_name");
        assert_eq!(back.new_column_name, "name");
    }

    #[test]
    fn test_set_nullable_flips() {
        let stmt = Statement::from(SetNullable::new("person", "name", false));
        let Some(Statement::SetNullable(back)) = stmt.inverse() else {
            panic!("expected set nullable");
        };
        assert!(back.nullable);
    }

    #[test]
    fn test_drops_are_irreversible() {
        assert!(Statement::from(DropTable::new("t")).inverse().is_none());
        assert!(
            Statement::from(AddForeignKeyConstraint::new("a", ["b_id"], "b", ["id"]))
                .inverse()
                .is_none()
        );
    }

    #[test]
    fn test_inverse_all_reverses_order() {
        let statements = vec![
            Statement::from(CreateTable::new("a")),
            Statement::from(AddColumn::new("a", "x", "int")),
        ];
        let inverse = inverse_all(&statements).unwrap();
        assert_eq!(inverse[0].kind(), StatementKind::DropColumn);
        assert_eq!(inverse[1].kind(), StatementKind::DropTable);

        let with_drop = vec![
            Statement::from(CreateTable::new("a")),
            Statement::from(DropTable::new("b")),
        ];
        assert!(inverse_all(&with_drop).is_none());
    }
}
