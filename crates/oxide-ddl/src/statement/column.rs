//! Column definitions and column-level statements.

use serde::{Deserialize, Serialize};

use super::constraint::{ColumnConstraint, ConstraintSet};
use super::value::LiteralValue;

/// A column as declared by CREATE TABLE or ADD COLUMN.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
    pub default_value: Option<LiteralValue>,
    pub constraints: Vec<ColumnConstraint>,
    pub remarks: Option<String>,
    /// The name is an expression and is written unquoted.
    pub computed: bool,
}

impl ColumnDefinition {
    /// Creates a new column definition.
    #[must_use]
    pub fn new(name: impl Into<String>, column_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn default_value(mut self, value: impl Into<LiteralValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Adds a constraint unless an identical one is already present.
    #[must_use]
    pub fn constraint(mut self, constraint: ColumnConstraint) -> Self {
        if !self.constraints.contains(&constraint) {
            self.constraints.push(constraint);
        }
        self
    }

    #[must_use]
    pub fn not_null(self) -> Self {
        self.constraint(ColumnConstraint::not_null())
    }

    #[must_use]
    pub fn primary_key(self) -> Self {
        self.constraint(ColumnConstraint::primary_key())
    }

    #[must_use]
    pub fn unique(self) -> Self {
        self.constraint(ColumnConstraint::unique())
    }

    #[must_use]
    pub fn auto_increment(self) -> Self {
        self.constraint(ColumnConstraint::auto_increment())
    }

    #[must_use]
    pub fn remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }
}

impl ConstraintSet for ColumnDefinition {
    fn constraints(&self) -> &[ColumnConstraint] {
        &self.constraints
    }
}

/// ALTER TABLE ... ADD a single column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddColumn {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub table_name: String,
    pub column: ColumnDefinition,
    pub after_column: Option<String>,
    pub before_column: Option<String>,
    pub position: Option<u32>,
}

impl AddColumn {
    #[must_use]
    pub fn new(
        table: impl Into<String>,
        column: impl Into<String>,
        column_type: impl Into<String>,
    ) -> Self {
        Self::from_definition(table, ColumnDefinition::new(column, column_type))
    }

    #[must_use]
    pub fn from_definition(table: impl Into<String>, column: ColumnDefinition) -> Self {
        Self {
            table_name: table.into(),
            column,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn default_value(mut self, value: impl Into<LiteralValue>) -> Self {
        self.column = self.column.default_value(value);
        self
    }

    #[must_use]
    pub fn constraint(mut self, constraint: ColumnConstraint) -> Self {
        self.column = self.column.constraint(constraint);
        self
    }

    #[must_use]
    pub fn remarks(mut self, remarks: impl Into<String>) -> Self {
        self.column = self.column.remarks(remarks);
        self
    }

    #[must_use]
    pub fn after(mut self, column: impl Into<String>) -> Self {
        self.after_column = Some(column.into());
        self
    }

    #[must_use]
    pub fn before(mut self, column: impl Into<String>) -> Self {
        self.before_column = Some(column.into());
        self
    }

    #[must_use]
    pub const fn position(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }
}

impl ConstraintSet for AddColumn {
    fn constraints(&self) -> &[ColumnConstraint] {
        &self.column.constraints
    }
}

/// Several columns added to one table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddColumns {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub table_name: String,
    pub columns: Vec<ColumnDefinition>,
}

impl AddColumns {
    #[must_use]
    pub fn new(table: impl Into<String>, columns: Vec<ColumnDefinition>) -> Self {
        Self {
            table_name: table.into(),
            columns,
            ..Self::default()
        }
    }

    /// Splits into one [`AddColumn`] per column.
    #[must_use]
    pub fn to_single_columns(&self) -> Vec<AddColumn> {
        self.columns
            .iter()
            .map(|c| AddColumn {
                catalog_name: self.catalog_name.clone(),
                schema_name: self.schema_name.clone(),
                table_name: self.table_name.clone(),
                column: c.clone(),
                ..AddColumn::default()
            })
            .collect()
    }
}

/// ALTER TABLE ... DROP one or more columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DropColumn {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub table_name: String,
    pub column_names: Vec<String>,
}

impl DropColumn {
    #[must_use]
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::multiple(table, [column])
    }

    #[must_use]
    pub fn multiple<I, S>(table: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            table_name: table.into(),
            column_names: columns.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenameColumn {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub table_name: String,
    pub old_column_name: String,
    pub new_column_name: String,
    /// Needed where the rename re-declares the column.
    pub column_data_type: Option<String>,
    pub remarks: Option<String>,
}

impl RenameColumn {
    #[must_use]
    pub fn new(
        table: impl Into<String>,
        old_name: impl Into<String>,
        new_name: impl Into<String>,
    ) -> Self {
        Self {
            table_name: table.into(),
            old_column_name: old_name.into(),
            new_column_name: new_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn column_data_type(mut self, data_type: impl Into<String>) -> Self {
        self.column_data_type = Some(data_type.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModifyDataType {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub table_name: String,
    pub column_name: String,
    pub new_data_type: String,
}

impl ModifyDataType {
    #[must_use]
    pub fn new(
        table: impl Into<String>,
        column: impl Into<String>,
        new_data_type: impl Into<String>,
    ) -> Self {
        Self {
            table_name: table.into(),
            column_name: column.into(),
            new_data_type: new_data_type.into(),
            ..Self::default()
        }
    }
}

/// Adds or removes NOT NULL on an existing column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SetNullable {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub table_name: String,
    pub column_name: String,
    pub column_data_type: Option<String>,
    pub nullable: bool,
    pub constraint_name: Option<String>,
    pub novalidate: bool,
}

impl SetNullable {
    #[must_use]
    pub fn new(table: impl Into<String>, column: impl Into<String>, nullable: bool) -> Self {
        Self {
            table_name: table.into(),
            column_name: column.into(),
            nullable,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn column_data_type(mut self, data_type: impl Into<String>) -> Self {
        self.column_data_type = Some(data_type.into());
        self
    }

    #[must_use]
    pub fn constraint_name(mut self, name: impl Into<String>) -> Self {
        self.constraint_name = Some(name.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddDefaultValue {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub table_name: String,
    pub column_name: String,
    pub column_data_type: Option<String>,
    pub default_value: LiteralValue,
    pub constraint_name: Option<String>,
}

impl AddDefaultValue {
    #[must_use]
    pub fn new(
        table: impl Into<String>,
        column: impl Into<String>,
        value: impl Into<LiteralValue>,
    ) -> Self {
        Self {
            table_name: table.into(),
            column_name: column.into(),
            default_value: value.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn column_data_type(mut self, data_type: impl Into<String>) -> Self {
        self.column_data_type = Some(data_type.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DropDefaultValue {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub table_name: String,
    pub column_name: String,
    pub column_data_type: Option<String>,
    pub constraint_name: Option<String>,
}

impl DropDefaultValue {
    #[must_use]
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table_name: table.into(),
            column_name: column.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn column_data_type(mut self, data_type: impl Into<String>) -> Self {
        self.column_data_type = Some(data_type.into());
        self
    }

    #[must_use]
    pub fn constraint_name(mut self, name: impl Into<String>) -> Self {
        self.constraint_name = Some(name.into());
        self
    }
}

/// Turns an existing column into an auto-increment column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddAutoIncrement {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub table_name: String,
    pub column_name: String,
    pub column_data_type: String,
    pub start_with: Option<i64>,
    pub increment_by: Option<i64>,
    pub generation_type: Option<String>,
    pub default_on_null: bool,
}

impl AddAutoIncrement {
    #[must_use]
    pub fn new(
        table: impl Into<String>,
        column: impl Into<String>,
        column_data_type: impl Into<String>,
    ) -> Self {
        Self {
            table_name: table.into(),
            column_name: column.into(),
            column_data_type: column_data_type.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn start_with(mut self, value: i64) -> Self {
        self.start_with = Some(value);
        self
    }

    #[must_use]
    pub const fn increment_by(mut self, value: i64) -> Self {
        self.increment_by = Some(value);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SetColumnRemarks {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub table_name: String,
    pub column_name: String,
    pub remarks: String,
    pub column_data_type: Option<String>,
}

impl SetColumnRemarks {
    #[must_use]
    pub fn new(
        table: impl Into<String>,
        column: impl Into<String>,
        remarks: impl Into<String>,
    ) -> Self {
        Self {
            table_name: table.into(),
            column_name: column.into(),
            remarks: remarks.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn column_data_type(mut self, data_type: impl Into<String>) -> Self {
        self.column_data_type = Some(data_type.into());
        self
    }
}

qualified!(
    AddColumn,
    AddColumns,
    DropColumn,
    RenameColumn,
    ModifyDataType,
    SetNullable,
    AddDefaultValue,
    DropDefaultValue,
    AddAutoIncrement,
    SetColumnRemarks,
);
