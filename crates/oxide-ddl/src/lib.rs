//! Dialect-aware SQL generation for schema changes.
//!
//! `oxide-ddl` turns database-agnostic change statements into the SQL a
//! particular database product accepts:
//! - Fifteen dialects, each described by a [`Dialect`](database::Dialect)
//!   implementation with capability flags and syntax knobs
//! - Around forty statement kinds covering tables, columns, constraints,
//!   indexes, sequences, views, procedures and data changes
//! - Validation before generation, with dialect-specific required and
//!   disallowed fields
//! - A registry that picks the most specific generator for each statement
//!   and dialect
//!
//! # Architecture
//!
//! - **Database** - A dialect plus per-run settings (default schema,
//!   quoting strategy)
//! - **Statement** - Plain structs describing one change each
//! - **Generator** - Renders one statement kind; dialect-specific
//!   generators override generic ones
//! - **Registry** - Resolves, validates and generates, expanding follow-up
//!   statements in place
//! - **Probe** - Asks every dialect whether it can handle a statement
//!
//! # Example
//!
//! ```rust
//! use oxide_ddl::prelude::*;
//!
//! let statement = Statement::from(
//!     AddColumn::new("person", "age", "int").default_value(0_i64),
//! );
//! let sql = default_registry()
//!     .generate_sql(&statement, &Database::new(DialectId::Postgres))
//!     .unwrap();
//! assert_eq!(sql[0].text, "ALTER TABLE person ADD age INTEGER DEFAULT 0");
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Print the SQL for a list of statements
//! oxide-ddl sql --dialect postgresql changes.json
//!
//! # Print the rollback SQL
//! oxide-ddl sql --dialect oracle --rollback changes.json
//!
//! # Show which dialects accept each statement
//! oxide-ddl probe changes.json
//! ```

pub mod database;
pub mod error;
pub mod generator;
pub mod probe;
pub mod script;
pub mod sql;
pub mod statement;
pub mod types;
pub mod validation;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::database::{
        Capability, Database, DatabaseSettings, Dialect, DialectId, QuotingStrategy,
    };
    pub use crate::error::{GenerateError, Result};
    pub use crate::generator::{default_registry, Generated, GeneratorRegistry, SqlGenerator};
    pub use crate::probe::{probe, DialectSupport, Support};
    pub use crate::script::write_script;
    pub use crate::sql::Sql;
    pub use crate::statement::*;
    pub use crate::types::DataType;
    pub use crate::validation::{ValidationError, ValidationResult};
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_generate_many_keeps_order() {
        let statements = vec![
            Statement::from(CreateSequence::new("seq_person")),
            Statement::from(DropTable::new("person_old")),
        ];
        let generated = default_registry()
            .generate_all(&statements, &Database::new(DialectId::Postgres))
            .unwrap();
        let texts = generated.sql.iter().map(|s| s.text.as_str()).collect::<Vec<_>>();
        assert_eq!(texts, vec!["CREATE SEQUENCE seq_person", "DROP TABLE person_old"]);
        assert!(generated.warnings.is_empty());
    }
}
