//! Table, constraint and index statements.

use serde::{Deserialize, Serialize};

use super::column::ColumnDefinition;
use super::constraint::ForeignKeyAction;

fn names<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

/// A table-level unique constraint of CREATE TABLE.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableUniqueConstraint {
    pub constraint_name: Option<String>,
    pub column_names: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateTable {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub table_name: String,
    pub columns: Vec<ColumnDefinition>,
    /// Name of the primary key built from primary-key columns.
    pub primary_key_name: Option<String>,
    pub unique_constraints: Vec<TableUniqueConstraint>,
    pub tablespace: Option<String>,
    pub remarks: Option<String>,
}

impl CreateTable {
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table_name: table.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn column(mut self, column: ColumnDefinition) -> Self {
        self.columns.push(column);
        self
    }

    #[must_use]
    pub fn primary_key_name(mut self, name: impl Into<String>) -> Self {
        self.primary_key_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn unique<I, S>(mut self, name: Option<&str>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unique_constraints.push(TableUniqueConstraint {
            constraint_name: name.map(ToString::to_string),
            column_names: names(columns),
        });
        self
    }

    #[must_use]
    pub fn tablespace(mut self, tablespace: impl Into<String>) -> Self {
        self.tablespace = Some(tablespace.into());
        self
    }

    #[must_use]
    pub fn remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DropTable {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub table_name: String,
    pub cascade_constraints: bool,
    pub if_exists: bool,
}

impl DropTable {
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table_name: table.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn cascade(mut self) -> Self {
        self.cascade_constraints = true;
        self
    }

    #[must_use]
    pub const fn if_exists(mut self) -> Self {
        self.if_exists = true;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenameTable {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub old_table_name: String,
    pub new_table_name: String,
}

impl RenameTable {
    #[must_use]
    pub fn new(old_name: impl Into<String>, new_name: impl Into<String>) -> Self {
        Self {
            old_table_name: old_name.into(),
            new_table_name: new_name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SetTableRemarks {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub table_name: String,
    pub remarks: String,
}

impl SetTableRemarks {
    #[must_use]
    pub fn new(table: impl Into<String>, remarks: impl Into<String>) -> Self {
        Self {
            table_name: table.into(),
            remarks: remarks.into(),
            ..Self::default()
        }
    }
}

/// Rebuilds a table after a structural change (DB2 `REORG`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReorganizeTable {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub table_name: String,
}

impl ReorganizeTable {
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table_name: table.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddPrimaryKey {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub table_name: String,
    pub column_names: Vec<String>,
    pub constraint_name: Option<String>,
    pub tablespace: Option<String>,
    pub clustered: Option<bool>,
    /// Existing index to enforce the key with (Oracle `USING INDEX`).
    pub for_index_name: Option<String>,
}

impl AddPrimaryKey {
    #[must_use]
    pub fn new<I, S>(table: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            table_name: table.into(),
            column_names: names(columns),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn constraint_name(mut self, name: impl Into<String>) -> Self {
        self.constraint_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn tablespace(mut self, tablespace: impl Into<String>) -> Self {
        self.tablespace = Some(tablespace.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DropPrimaryKey {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub table_name: String,
    pub constraint_name: Option<String>,
}

impl DropPrimaryKey {
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table_name: table.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn constraint_name(mut self, name: impl Into<String>) -> Self {
        self.constraint_name = Some(name.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddUniqueConstraint {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub table_name: String,
    pub column_names: Vec<String>,
    pub constraint_name: Option<String>,
    pub tablespace: Option<String>,
    pub clustered: Option<bool>,
    pub deferrable: bool,
    pub initially_deferred: bool,
    pub disabled: bool,
}

impl AddUniqueConstraint {
    #[must_use]
    pub fn new<I, S>(table: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            table_name: table.into(),
            column_names: names(columns),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn constraint_name(mut self, name: impl Into<String>) -> Self {
        self.constraint_name = Some(name.into());
        self
    }

    #[must_use]
    pub const fn deferrable(mut self, initially_deferred: bool) -> Self {
        self.deferrable = true;
        self.initially_deferred = initially_deferred;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DropUniqueConstraint {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub table_name: String,
    pub constraint_name: Option<String>,
    /// Columns of the constraint, for products that drop by column list.
    pub column_names: Vec<String>,
}

impl DropUniqueConstraint {
    #[must_use]
    pub fn new(table: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self {
            table_name: table.into(),
            constraint_name: Some(constraint.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddForeignKeyConstraint {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub table_name: String,
    pub column_names: Vec<String>,
    pub referenced_catalog_name: Option<String>,
    pub referenced_schema_name: Option<String>,
    pub referenced_table_name: String,
    pub referenced_column_names: Vec<String>,
    pub constraint_name: Option<String>,
    pub on_delete: Option<ForeignKeyAction>,
    pub on_update: Option<ForeignKeyAction>,
    pub deferrable: bool,
    pub initially_deferred: bool,
    pub novalidate: bool,
}

impl AddForeignKeyConstraint {
    #[must_use]
    pub fn new<I, J, S, T>(
        table: impl Into<String>,
        columns: I,
        referenced_table: impl Into<String>,
        referenced_columns: J,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        J: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            table_name: table.into(),
            column_names: names(columns),
            referenced_table_name: referenced_table.into(),
            referenced_column_names: names(referenced_columns),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn constraint_name(mut self, name: impl Into<String>) -> Self {
        self.constraint_name = Some(name.into());
        self
    }

    #[must_use]
    pub const fn on_delete(mut self, action: ForeignKeyAction) -> Self {
        self.on_delete = Some(action);
        self
    }

    #[must_use]
    pub const fn on_update(mut self, action: ForeignKeyAction) -> Self {
        self.on_update = Some(action);
        self
    }

    #[must_use]
    pub const fn deferrable(mut self, initially_deferred: bool) -> Self {
        self.deferrable = true;
        self.initially_deferred = initially_deferred;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DropForeignKeyConstraint {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub table_name: String,
    pub constraint_name: String,
}

impl DropForeignKeyConstraint {
    #[must_use]
    pub fn new(table: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self {
            table_name: table.into(),
            constraint_name: constraint.into(),
            ..Self::default()
        }
    }
}

/// One column of an index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndexColumn {
    pub name: String,
    pub descending: bool,
    /// An expression rather than a column name; written unquoted.
    pub computed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateIndex {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub table_name: String,
    pub index_name: String,
    pub columns: Vec<IndexColumn>,
    pub unique: bool,
    pub tablespace: Option<String>,
    pub clustered: Option<bool>,
}

impl CreateIndex {
    #[must_use]
    pub fn new(index: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            index_name: index.into(),
            table_name: table.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn column(mut self, name: impl Into<String>) -> Self {
        self.columns.push(IndexColumn {
            name: name.into(),
            ..IndexColumn::default()
        });
        self
    }

    #[must_use]
    pub fn descending(mut self, name: impl Into<String>) -> Self {
        self.columns.push(IndexColumn {
            name: name.into(),
            descending: true,
            computed: false,
        });
        self
    }

    #[must_use]
    pub fn computed(mut self, expression: impl Into<String>) -> Self {
        self.columns.push(IndexColumn {
            name: expression.into(),
            descending: false,
            computed: true,
        });
        self
    }

    #[must_use]
    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    #[must_use]
    pub fn tablespace(mut self, tablespace: impl Into<String>) -> Self {
        self.tablespace = Some(tablespace.into());
        self
    }

    #[must_use]
    pub const fn clustered(mut self, clustered: bool) -> Self {
        self.clustered = Some(clustered);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DropIndex {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub index_name: String,
    /// Required on products where indexes live inside a table's namespace.
    pub table_name: Option<String>,
}

impl DropIndex {
    #[must_use]
    pub fn new(index: impl Into<String>) -> Self {
        Self {
            index_name: index.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn on_table(mut self, table: impl Into<String>) -> Self {
        self.table_name = Some(table.into());
        self
    }
}

qualified!(
    CreateTable,
    DropTable,
    RenameTable,
    SetTableRemarks,
    ReorganizeTable,
    AddPrimaryKey,
    DropPrimaryKey,
    AddUniqueConstraint,
    DropUniqueConstraint,
    AddForeignKeyConstraint,
    DropForeignKeyConstraint,
    CreateIndex,
    DropIndex,
);
