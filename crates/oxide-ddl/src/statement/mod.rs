//! Statement model.
//!
//! One plain struct per operation, wrapped by [`Statement`] for dispatch.
//! Statements never touch a connection and can be rendered for any
//! number of databases.

/// Adds `in_catalog`/`in_schema` builders to statements that carry
/// `catalog_name` and `schema_name` fields.
macro_rules! qualified {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $ty {
                #[must_use]
                pub fn in_catalog(mut self, catalog: impl Into<String>) -> Self {
                    self.catalog_name = Some(catalog.into());
                    self
                }

                #[must_use]
                pub fn in_schema(mut self, schema: impl Into<String>) -> Self {
                    self.schema_name = Some(schema.into());
                    self
                }
            }
        )+
    };
}

mod column;
mod constraint;
mod data;
mod inverse;
mod sequence;
mod table;
mod value;
mod view;

use std::fmt;

use enumflags2::BitFlags;
use serde::{Deserialize, Serialize};

pub use column::{
    AddAutoIncrement, AddColumn, AddColumns, AddDefaultValue, ColumnDefinition, DropColumn,
    DropDefaultValue, ModifyDataType, RenameColumn, SetColumnRemarks, SetNullable,
};
pub use constraint::{
    AutoIncrementConstraint, ColumnConstraint, ConstraintSet, ForeignKeyAction,
    ForeignKeyConstraint, NotNullConstraint, PrimaryKeyConstraint, UniqueConstraint,
};
pub use data::{
    ColumnMapping, ColumnValue, Comment, CopyRows, Delete, Insert, InsertOrUpdate, RawSql, Update,
    WhereClause,
};
pub use inverse::inverse_all;
pub use sequence::{AlterSequence, CreateSequence, DropSequence, RenameSequence};
pub use table::{
    AddForeignKeyConstraint, AddPrimaryKey, AddUniqueConstraint, CreateIndex, CreateTable,
    DropForeignKeyConstraint, DropIndex, DropPrimaryKey, DropTable, DropUniqueConstraint,
    IndexColumn, RenameTable, ReorganizeTable, SetTableRemarks, TableUniqueConstraint,
};
pub use value::LiteralValue;
pub use view::{CreateProcedure, CreateView, DropProcedure, DropView, RenameView};

use crate::database::{Capability, Database};

/// Implemented by every concrete statement struct.
pub trait StatementVariant: Sized {
    const KIND: StatementKind;

    /// Borrows the concrete statement out of `statement` if the kinds match.
    fn from_statement(statement: &Statement) -> Option<&Self>;
}

macro_rules! statements {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// Any statement, tagged by kind.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "type", rename_all = "camelCase")]
        pub enum Statement {
            $($variant($variant),)+
        }

        /// Discriminant of [`Statement`].
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(rename_all = "camelCase")]
        pub enum StatementKind {
            $($variant,)+
        }

        impl StatementKind {
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }

        impl Statement {
            #[must_use]
            pub const fn kind(&self) -> StatementKind {
                match self {
                    $(Self::$variant(_) => StatementKind::$variant,)+
                }
            }
        }

        $(
            impl From<$variant> for Statement {
                fn from(statement: $variant) -> Self {
                    Self::$variant(statement)
                }
            }

            impl StatementVariant for $variant {
                const KIND: StatementKind = StatementKind::$variant;

                fn from_statement(statement: &Statement) -> Option<&Self> {
                    match statement {
                        Statement::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )+
    };
}

statements! {
    AddAutoIncrement => "addAutoIncrement",
    AddColumn => "addColumn",
    AddColumns => "addColumns",
    AddDefaultValue => "addDefaultValue",
    AddForeignKeyConstraint => "addForeignKeyConstraint",
    AddPrimaryKey => "addPrimaryKey",
    AddUniqueConstraint => "addUniqueConstraint",
    AlterSequence => "alterSequence",
    Comment => "comment",
    CopyRows => "copyRows",
    CreateIndex => "createIndex",
    CreateProcedure => "createProcedure",
    CreateSequence => "createSequence",
    CreateTable => "createTable",
    CreateView => "createView",
    Delete => "delete",
    DropColumn => "dropColumn",
    DropDefaultValue => "dropDefaultValue",
    DropForeignKeyConstraint => "dropForeignKeyConstraint",
    DropIndex => "dropIndex",
    DropPrimaryKey => "dropPrimaryKey",
    DropProcedure => "dropProcedure",
    DropSequence => "dropSequence",
    DropTable => "dropTable",
    DropUniqueConstraint => "dropUniqueConstraint",
    DropView => "dropView",
    Insert => "insert",
    InsertOrUpdate => "insertOrUpdate",
    ModifyDataType => "modifyDataType",
    RawSql => "rawSql",
    RenameColumn => "renameColumn",
    RenameSequence => "renameSequence",
    RenameTable => "renameTable",
    RenameView => "renameView",
    ReorganizeTable => "reorganizeTable",
    SetColumnRemarks => "setColumnRemarks",
    SetNullable => "setNullable",
    SetTableRemarks => "setTableRemarks",
    Update => "update",
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl StatementKind {
    /// Capabilities a database must have for this kind to make sense at all.
    #[must_use]
    pub fn required_capabilities(self) -> BitFlags<Capability> {
        match self {
            Self::CreateSequence | Self::AlterSequence | Self::DropSequence | Self::RenameSequence => {
                Capability::Sequences.into()
            }
            Self::AddAutoIncrement => Capability::AutoIncrement.into(),
            Self::SetTableRemarks | Self::SetColumnRemarks => Capability::Remarks.into(),
            _ => BitFlags::empty(),
        }
    }
}

impl Statement {
    /// Cheap check of whether `database` can run this statement.
    ///
    /// Looks at capabilities and at whether any default generator accepts
    /// the pair. Does not validate the statement's fields.
    #[must_use]
    pub fn supports_database(&self, database: &Database) -> bool {
        let required = self.kind().required_capabilities();
        database.dialect().capabilities().contains(required)
            && crate::generator::default_registry().supports(self, database)
    }

    /// Literals the statement writes into SQL: column defaults, assigned
    /// values and WHERE parameters.
    #[must_use]
    pub fn literal_values(&self) -> Vec<&LiteralValue> {
        fn defaults(columns: &[ColumnDefinition]) -> impl Iterator<Item = &LiteralValue> {
            columns.iter().filter_map(|c| c.default_value.as_ref())
        }
        fn assigned(values: &[ColumnValue]) -> impl Iterator<Item = &LiteralValue> {
            values.iter().map(|v| &v.value)
        }
        fn parameters(clause: Option<&WhereClause>) -> impl Iterator<Item = &LiteralValue> {
            clause.into_iter().flat_map(|w| &w.parameters)
        }

        match self {
            Self::AddColumn(s) => defaults(std::slice::from_ref(&s.column)).collect(),
            Self::AddColumns(s) => defaults(&s.columns).collect(),
            Self::CreateTable(s) => defaults(&s.columns).collect(),
            Self::AddDefaultValue(s) => vec![&s.default_value],
            Self::Insert(s) => assigned(&s.values).collect(),
            Self::InsertOrUpdate(s) => assigned(&s.values).collect(),
            Self::Update(s) => assigned(&s.values)
                .chain(parameters(s.where_clause.as_ref()))
                .collect(),
            Self::Delete(s) => parameters(s.where_clause.as_ref()).collect(),
            _ => Vec::new(),
        }
    }
}
