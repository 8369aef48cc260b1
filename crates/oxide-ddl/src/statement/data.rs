//! Data statements and pass-through SQL.

use serde::{Deserialize, Serialize};

use super::value::LiteralValue;

/// A column paired with the value written to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnValue {
    pub name: String,
    pub value: LiteralValue,
    /// Type hint used to coerce string values.
    #[serde(rename = "type")]
    pub column_type: Option<String>,
}

impl ColumnValue {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<LiteralValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            column_type: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Insert {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub table_name: String,
    pub values: Vec<ColumnValue>,
}

impl Insert {
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table_name: table.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn value(mut self, column: impl Into<String>, value: impl Into<LiteralValue>) -> Self {
        self.values.push(ColumnValue::new(column, value));
        self
    }
}

/// A WHERE clause with `:name` and `:value` placeholders.
///
/// Each `:name` is replaced, in order, by the next escaped column name from
/// `column_names`; each `:value` by the next rendered literal from
/// `parameters`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WhereClause {
    pub condition: String,
    pub column_names: Vec<String>,
    pub parameters: Vec<LiteralValue>,
}

impl WhereClause {
    #[must_use]
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn column(mut self, name: impl Into<String>) -> Self {
        self.column_names.push(name.into());
        self
    }

    #[must_use]
    pub fn parameter(mut self, value: impl Into<LiteralValue>) -> Self {
        self.parameters.push(value.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Update {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub table_name: String,
    pub values: Vec<ColumnValue>,
    #[serde(rename = "where")]
    pub where_clause: Option<WhereClause>,
}

impl Update {
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table_name: table.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn set(mut self, column: impl Into<String>, value: impl Into<LiteralValue>) -> Self {
        self.values.push(ColumnValue::new(column, value));
        self
    }

    #[must_use]
    pub fn filter(mut self, clause: WhereClause) -> Self {
        self.where_clause = Some(clause);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Delete {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub table_name: String,
    #[serde(rename = "where")]
    pub where_clause: Option<WhereClause>,
}

impl Delete {
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table_name: table.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn filter(mut self, clause: WhereClause) -> Self {
        self.where_clause = Some(clause);
        self
    }
}

/// Inserts a row, or updates it when the key already exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InsertOrUpdate {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub table_name: String,
    pub values: Vec<ColumnValue>,
    pub primary_key_columns: Vec<String>,
}

impl InsertOrUpdate {
    #[must_use]
    pub fn new<I, S>(table: impl Into<String>, key_columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            table_name: table.into(),
            primary_key_columns: key_columns.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn value(mut self, column: impl Into<String>, value: impl Into<LiteralValue>) -> Self {
        self.values.push(ColumnValue::new(column, value));
        self
    }

    /// Values of non-key columns.
    pub fn non_key_values(&self) -> impl Iterator<Item = &ColumnValue> {
        self.values
            .iter()
            .filter(|v| !self.primary_key_columns.contains(&v.name))
    }
}

/// A source to target column mapping of [`CopyRows`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnMapping {
    pub source: String,
    pub target: String,
}

/// INSERT ... SELECT between two tables of one schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CopyRows {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub source_table_name: String,
    pub target_table_name: String,
    pub columns: Vec<ColumnMapping>,
}

impl CopyRows {
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source_table_name: source.into(),
            target_table_name: target.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn column(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.columns.push(ColumnMapping {
            source: source.into(),
            target: target.into(),
        });
        self
    }
}

/// SQL passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSql {
    pub sql: String,
    pub end_delimiter: Option<String>,
}

impl RawSql {
    #[must_use]
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            end_delimiter: None,
        }
    }

    #[must_use]
    pub fn end_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.end_delimiter = Some(delimiter.into());
        self
    }
}

/// A line comment in the generated script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Comment {
    pub text: String,
}

impl Comment {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

qualified!(Insert, Update, Delete, InsertOrUpdate, CopyRows);
