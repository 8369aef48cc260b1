//! Column constraints.
//!
//! A column carries a set of constraints, any number of kinds at once.
//! Code asks the set whether it holds a kind instead of assuming one
//! constraint per column.

use serde::{Deserialize, Serialize};

/// Foreign key referential action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ForeignKeyAction {
    NoAction,
    Restrict,
    Cascade,
    SetNull,
    SetDefault,
}

impl ForeignKeyAction {
    /// Returns the SQL representation of the action.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::NoAction => "NO ACTION",
            Self::Restrict => "RESTRICT",
            Self::Cascade => "CASCADE",
            Self::SetNull => "SET NULL",
            Self::SetDefault => "SET DEFAULT",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrimaryKeyConstraint {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotNullConstraint {
    pub name: Option<String>,
    /// Skip checking existing rows (Oracle `ENABLE NOVALIDATE`).
    pub novalidate: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UniqueConstraint {
    pub name: Option<String>,
}

/// A column-level reference to another table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForeignKeyConstraint {
    pub name: Option<String>,
    pub references_catalog: Option<String>,
    pub references_schema: Option<String>,
    pub references_table: String,
    pub references_column: String,
    pub on_delete: Option<ForeignKeyAction>,
    pub on_update: Option<ForeignKeyAction>,
    pub deferrable: bool,
    pub initially_deferred: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutoIncrementConstraint {
    pub start_with: Option<i64>,
    pub increment_by: Option<i64>,
    /// `ALWAYS` or `BY DEFAULT`, for products that distinguish them.
    pub generation_type: Option<String>,
    pub default_on_null: bool,
}

/// One constraint on a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ColumnConstraint {
    PrimaryKey(PrimaryKeyConstraint),
    NotNull(NotNullConstraint),
    Unique(UniqueConstraint),
    ForeignKey(ForeignKeyConstraint),
    AutoIncrement(AutoIncrementConstraint),
}

impl ColumnConstraint {
    #[must_use]
    pub fn primary_key() -> Self {
        Self::PrimaryKey(PrimaryKeyConstraint::default())
    }

    #[must_use]
    pub fn not_null() -> Self {
        Self::NotNull(NotNullConstraint::default())
    }

    #[must_use]
    pub fn unique() -> Self {
        Self::Unique(UniqueConstraint::default())
    }

    #[must_use]
    pub fn auto_increment() -> Self {
        Self::AutoIncrement(AutoIncrementConstraint::default())
    }

    #[must_use]
    pub fn references(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::ForeignKey(ForeignKeyConstraint {
            references_table: table.into(),
            references_column: column.into(),
            ..ForeignKeyConstraint::default()
        })
    }
}

/// Derived queries over a column's constraint set.
///
/// Implemented for slices so that statements and column definitions share
/// one set of rules.
pub trait ConstraintSet {
    fn constraints(&self) -> &[ColumnConstraint];

    fn is_primary_key(&self) -> bool {
        self.constraints()
            .iter()
            .any(|c| matches!(c, ColumnConstraint::PrimaryKey(_)))
    }

    fn is_auto_increment(&self) -> bool {
        self.constraints()
            .iter()
            .any(|c| matches!(c, ColumnConstraint::AutoIncrement(_)))
    }

    fn is_unique(&self) -> bool {
        self.constraints()
            .iter()
            .any(|c| matches!(c, ColumnConstraint::Unique(_)))
    }

    /// False if the column is a primary key or carries NOT NULL; true
    /// otherwise, including when there are no constraints at all.
    fn is_nullable(&self) -> bool {
        !self.constraints().iter().any(|c| {
            matches!(
                c,
                ColumnConstraint::PrimaryKey(_) | ColumnConstraint::NotNull(_)
            )
        })
    }

    fn primary_key_constraint(&self) -> Option<&PrimaryKeyConstraint> {
        self.constraints().iter().find_map(|c| match c {
            ColumnConstraint::PrimaryKey(pk) => Some(pk),
            _ => None,
        })
    }

    fn not_null_constraint(&self) -> Option<&NotNullConstraint> {
        self.constraints().iter().find_map(|c| match c {
            ColumnConstraint::NotNull(nn) => Some(nn),
            _ => None,
        })
    }

    fn unique_constraint(&self) -> Option<&UniqueConstraint> {
        self.constraints().iter().find_map(|c| match c {
            ColumnConstraint::Unique(u) => Some(u),
            _ => None,
        })
    }

    fn auto_increment_constraint(&self) -> Option<&AutoIncrementConstraint> {
        self.constraints().iter().find_map(|c| match c {
            ColumnConstraint::AutoIncrement(ai) => Some(ai),
            _ => None,
        })
    }

    fn foreign_key_constraints(&self) -> Vec<&ForeignKeyConstraint> {
        self.constraints()
            .iter()
            .filter_map(|c| match c {
                ColumnConstraint::ForeignKey(fk) => Some(fk),
                _ => None,
            })
            .collect()
    }
}

impl ConstraintSet for [ColumnConstraint] {
    fn constraints(&self) -> &[ColumnConstraint] {
        self
    }
}

impl ConstraintSet for Vec<ColumnConstraint> {
    fn constraints(&self) -> &[ColumnConstraint] {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nullable_without_constraints() {
        let constraints: Vec<ColumnConstraint> = Vec::new();
        assert!(constraints.is_nullable());
        assert!(!constraints.is_primary_key());
    }

    #[test]
    fn test_nullable_with_auto_increment_only() {
        let constraints = vec![ColumnConstraint::auto_increment()];
        assert!(constraints.is_nullable());
        assert!(constraints.is_auto_increment());
    }

    #[test]
    fn test_not_nullable() {
        assert!(!vec![ColumnConstraint::not_null()].is_nullable());
        assert!(!vec![ColumnConstraint::primary_key()].is_nullable());
        let several = vec![
            ColumnConstraint::auto_increment(),
            ColumnConstraint::unique(),
            ColumnConstraint::primary_key(),
        ];
        assert!(!several.is_nullable());
        assert!(several.is_primary_key());
        assert!(several.is_unique());
    }

    #[test]
    fn test_constraint_serde() {
        let json = r#"[{"type": "notNull"}, {"type": "autoIncrement", "startWith": 5}]"#;
        let constraints: Vec<ColumnConstraint> = serde_json::from_str(json).unwrap();
        assert_eq!(constraints[0], ColumnConstraint::not_null());
        assert_eq!(
            constraints.auto_increment_constraint().and_then(|a| a.start_with),
            Some(5)
        );
    }
}
