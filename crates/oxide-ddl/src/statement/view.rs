//! View and stored procedure statements.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateView {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub view_name: String,
    pub select_query: String,
    pub replace_if_exists: bool,
    /// `select_query` already holds the complete CREATE VIEW statement.
    pub full_definition: bool,
}

impl CreateView {
    #[must_use]
    pub fn new(view: impl Into<String>, select_query: impl Into<String>) -> Self {
        Self {
            view_name: view.into(),
            select_query: select_query.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn replace_if_exists(mut self) -> Self {
        self.replace_if_exists = true;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DropView {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub view_name: String,
    pub if_exists: bool,
}

impl DropView {
    #[must_use]
    pub fn new(view: impl Into<String>) -> Self {
        Self {
            view_name: view.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenameView {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub old_view_name: String,
    pub new_view_name: String,
}

impl RenameView {
    #[must_use]
    pub fn new(old_name: impl Into<String>, new_name: impl Into<String>) -> Self {
        Self {
            old_view_name: old_name.into(),
            new_view_name: new_name.into(),
            ..Self::default()
        }
    }
}

/// A stored procedure body passed through as written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateProcedure {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub procedure_name: Option<String>,
    pub procedure_text: String,
    pub end_delimiter: Option<String>,
}

impl CreateProcedure {
    #[must_use]
    pub fn new(procedure_text: impl Into<String>) -> Self {
        Self {
            procedure_text: procedure_text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.procedure_name = Some(name.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DropProcedure {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub procedure_name: String,
}

impl DropProcedure {
    #[must_use]
    pub fn new(procedure: impl Into<String>) -> Self {
        Self {
            procedure_name: procedure.into(),
            ..Self::default()
        }
    }
}

qualified!(CreateView, DropView, RenameView, CreateProcedure, DropProcedure);
