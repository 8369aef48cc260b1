//! Sequence generators.

use super::{Clauses, GeneratorRegistry, Output, SqlGenerator};
use crate::database::{Database, DialectId};
use crate::error::Result;
use crate::statement::{AlterSequence, CreateSequence, DropSequence, RenameSequence};
use crate::validation::ValidationResult;

use DialectId::{
    Db2, Derby, Firebird, Generic, Hsql, Informix, MariaDb, Mssql, Oracle, Postgres, H2,
};

pub(super) fn register(registry: &mut GeneratorRegistry) {
    registry.register(CreateSequenceGenerator);
    registry.register(AlterSequenceGenerator);
    registry.register(DropSequenceGenerator);
    registry.register(RenameSequenceGenerator);
}

fn sequence_name(
    database: &Database,
    catalog: Option<&String>,
    schema: Option<&String>,
    name: &str,
) -> String {
    database.escape_sequence_name(catalog.map(String::as_str), schema.map(String::as_str), name)
}

/// The cache, cycle and order options shared by CREATE and ALTER.
#[derive(Debug, Clone, Copy)]
struct SequenceOptions {
    cache_size: Option<u64>,
    cycle: Option<bool>,
    ordered: Option<bool>,
}

impl SequenceOptions {
    fn append(self, database: &Database, clauses: &mut Clauses) {
        // Products that spell the negations as one word.
        let one_word = database.is_any(&[Oracle, MariaDb, Informix]);
        match self.cache_size {
            Some(0) if one_word || database.id() == H2 => clauses.append("NOCACHE"),
            Some(0) => clauses.append("NO CACHE"),
            Some(size) => clauses.append(format!("CACHE {size}")),
            None => {}
        }
        match self.cycle {
            Some(true) => clauses.append("CYCLE"),
            Some(false) if one_word => clauses.append("NOCYCLE"),
            Some(false) => clauses.append("NO CYCLE"),
            None => {}
        }
        match (database.id(), self.ordered) {
            (_, Some(true)) => clauses.append("ORDER"),
            (Oracle, Some(false)) => clauses.append("NOORDER"),
            (_, Some(false)) => clauses.append("NO ORDER"),
            (_, None) => {}
        }
    }
}

// =============================================================================
// Create and alter
// =============================================================================

#[derive(Debug)]
struct CreateSequenceGenerator;

impl SqlGenerator for CreateSequenceGenerator {
    type Statement = CreateSequence;

    fn name(&self) -> &'static str {
        "create_sequence"
    }

    fn validate(&self, s: &CreateSequence, database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("sequenceName", &s.sequence_name);
        result.check_allowed_only(
            "dataType",
            &s.data_type,
            database,
            &[Postgres, Mssql, Db2, Derby, Hsql, H2],
        );
        result.check_disallowed("cacheSize", &s.cache_size, database, &[Derby, Firebird]);
        result.check_disallowed("minValue", &s.min_value, database, &[Firebird]);
        result.check_disallowed("maxValue", &s.max_value, database, &[Firebird]);
        result.check_disallowed("cycle", &s.cycle, database, &[Firebird]);
        result.check_allowed_only("ordered", &s.ordered, database, &[Oracle, Db2]);
        if let (Some(min), Some(max)) = (s.min_value, s.max_value) {
            if min > max {
                result.invalid(format!("minValue {min} is greater than maxValue {max}"));
            }
        }
        result
    }

    fn generate(&self, s: &CreateSequence, database: &Database) -> Result<Output> {
        let name = sequence_name(
            database,
            s.catalog_name.as_ref(),
            s.schema_name.as_ref(),
            &s.sequence_name,
        );
        let mut clauses = Clauses::with(format!("CREATE SEQUENCE {name}"))
            .push_opt(
                s.data_type
                    .as_deref()
                    .map(|t| format!("AS {}", database.data_type(t, false))),
            )
            .push_opt(s.start_value.map(|n| format!("START WITH {n}")))
            .push_opt(s.increment_by.map(|n| format!("INCREMENT BY {n}")))
            .push_opt(s.min_value.map(|n| format!("MINVALUE {n}")))
            .push_opt(s.max_value.map(|n| format!("MAXVALUE {n}")));
        SequenceOptions {
            cache_size: s.cache_size,
            cycle: s.cycle,
            ordered: s.ordered,
        }
        .append(database, &mut clauses);
        Ok(clauses.build().into())
    }
}

#[derive(Debug)]
struct AlterSequenceGenerator;

impl SqlGenerator for AlterSequenceGenerator {
    type Statement = AlterSequence;

    fn name(&self) -> &'static str {
        "alter_sequence"
    }

    fn supports(&self, _s: &AlterSequence, database: &Database) -> bool {
        database.id() != Derby
    }

    fn validate(&self, s: &AlterSequence, database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("sequenceName", &s.sequence_name);
        result.check_disallowed("incrementBy", &s.increment_by, database, &[Firebird]);
        result.check_disallowed("maxValue", &s.max_value, database, &[Firebird]);
        result.check_disallowed("cycle", &s.cycle, database, &[Firebird]);
        result.check_disallowed("cacheSize", &s.cache_size, database, &[Firebird]);
        result.check_allowed_only("ordered", &s.ordered, database, &[Oracle, Db2]);
        let changes_something = s.increment_by.is_some()
            || s.min_value.is_some()
            || s.max_value.is_some()
            || s.ordered.is_some()
            || s.cycle.is_some()
            || s.cache_size.is_some();
        if !changes_something {
            result.invalid("alterSequence changes nothing");
        }
        result
    }

    fn generate(&self, s: &AlterSequence, database: &Database) -> Result<Output> {
        let name = sequence_name(
            database,
            s.catalog_name.as_ref(),
            s.schema_name.as_ref(),
            &s.sequence_name,
        );
        let mut clauses = Clauses::with(format!("ALTER SEQUENCE {name}"));
        if database.id() == Firebird {
            clauses.append(
                s.min_value
                    .map(|n| format!("RESTART WITH {n}"))
                    .unwrap_or_default(),
            );
            return Ok(clauses.build().into());
        }
        clauses = clauses
            .push_opt(s.increment_by.map(|n| format!("INCREMENT BY {n}")))
            .push_opt(s.min_value.map(|n| format!("MINVALUE {n}")))
            .push_opt(s.max_value.map(|n| format!("MAXVALUE {n}")));
        SequenceOptions {
            cache_size: s.cache_size,
            cycle: s.cycle,
            ordered: s.ordered,
        }
        .append(database, &mut clauses);
        Ok(clauses.build().into())
    }
}

// =============================================================================
// Drop and rename
// =============================================================================

#[derive(Debug)]
struct DropSequenceGenerator;

impl SqlGenerator for DropSequenceGenerator {
    type Statement = DropSequence;

    fn name(&self) -> &'static str {
        "drop_sequence"
    }

    fn validate(&self, s: &DropSequence, _database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("sequenceName", &s.sequence_name);
        result
    }

    fn generate(&self, s: &DropSequence, database: &Database) -> Result<Output> {
        let name = sequence_name(
            database,
            s.catalog_name.as_ref(),
            s.schema_name.as_ref(),
            &s.sequence_name,
        );
        let sql = Clauses::with(format!("DROP SEQUENCE {name}"))
            .push_if(database.id() == Derby, "RESTRICT")
            .build();
        Ok(sql.into())
    }
}

#[derive(Debug)]
struct RenameSequenceGenerator;

impl SqlGenerator for RenameSequenceGenerator {
    type Statement = RenameSequence;

    fn name(&self) -> &'static str {
        "rename_sequence"
    }

    fn supports(&self, _s: &RenameSequence, database: &Database) -> bool {
        database.is_any(&[Generic, Postgres, Hsql, Oracle, Mssql, Informix, MariaDb])
    }

    fn validate(&self, s: &RenameSequence, _database: &Database) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.check_required("oldSequenceName", &s.old_sequence_name);
        result.check_required("newSequenceName", &s.new_sequence_name);
        result
    }

    fn generate(&self, s: &RenameSequence, database: &Database) -> Result<Output> {
        let old = sequence_name(
            database,
            s.catalog_name.as_ref(),
            s.schema_name.as_ref(),
            &s.old_sequence_name,
        );
        let new = database.quote_identifier(&s.new_sequence_name);
        let sql = match database.id() {
            Oracle => format!("RENAME {old} TO {new}"),
            Mssql => format!(
                "exec sp_rename {}, {}",
                database.string_literal(&old),
                database.string_literal(&s.new_sequence_name)
            ),
            Informix => format!("RENAME SEQUENCE {old} TO {new}"),
            MariaDb => format!("RENAME TABLE {old} TO {new}"),
            _ => format!("ALTER SEQUENCE {old} RENAME TO {new}"),
        };
        Ok(sql.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::default_registry;
    use crate::statement::Statement;

    fn sql(statement: impl Into<Statement>, id: DialectId) -> String {
        default_registry()
            .generate_sql(&statement.into(), &Database::new(id))
            .unwrap()
            .remove(0)
            .text
    }

    #[test]
    fn test_rename_sequence_escapes_sp_rename_arguments() {
        assert_eq!(
            sql(RenameSequence::new("seq_person", "seq_o'brien"), Mssql),
            "exec sp_rename 'seq_person', 'seq_o''brien'"
        );
        assert_eq!(
            sql(RenameSequence::new("seq_person", "seq_people"), Postgres),
            "ALTER SEQUENCE seq_person RENAME TO seq_people"
        );
    }

    #[test]
    fn test_create_sequence_options() {
        let stmt = CreateSequence::new("seq_person")
            .start_value(100)
            .increment_by(5)
            .cycle(false)
            .cache_size(0);
        assert_eq!(
            sql(stmt.clone(), Oracle),
            "CREATE SEQUENCE seq_person START WITH 100 INCREMENT BY 5 NOCACHE NOCYCLE"
        );
        assert_eq!(
            sql(stmt, Postgres),
            "CREATE SEQUENCE seq_person START WITH 100 INCREMENT BY 5 NO CACHE NO CYCLE"
        );
    }

    #[test]
    fn test_create_sequence_restrictions() {
        let typed = CreateSequence {
            data_type: Some("bigint".to_string()),
            ..CreateSequence::new("seq")
        };
        assert_eq!(sql(typed.clone(), Postgres), "CREATE SEQUENCE seq AS BIGINT");
        assert!(default_registry()
            .generate(&typed.into(), &Database::new(Oracle))
            .is_err());

        let sqlite = default_registry().generate(
            &CreateSequence::new("seq").into(),
            &Database::new(DialectId::Sqlite),
        );
        assert_eq!(sqlite.unwrap_err().unsupported_feature(), Some("sequences"));
    }

    #[test]
    fn test_alter_sequence() {
        assert_eq!(
            sql(AlterSequence::new("seq").increment_by(2).max_value(1000), Postgres),
            "ALTER SEQUENCE seq INCREMENT BY 2 MAXVALUE 1000"
        );
        assert_eq!(
            sql(AlterSequence::new("seq").min_value(50), Firebird),
            "ALTER SEQUENCE seq RESTART WITH 50"
        );
        assert!(default_registry()
            .generate(&AlterSequence::new("seq").into(), &Database::new(Postgres))
            .is_err());
    }

    #[test]
    fn test_drop_and_rename_sequence() {
        assert_eq!(sql(DropSequence::new("seq"), Derby), "DROP SEQUENCE seq RESTRICT");
        assert_eq!(sql(DropSequence::new("seq"), H2), "DROP SEQUENCE seq");
        let rename = RenameSequence::new("seq", "seq_new");
        assert_eq!(sql(rename.clone(), Oracle), "RENAME seq TO seq_new");
        assert_eq!(sql(rename.clone(), Postgres), "ALTER SEQUENCE seq RENAME TO seq_new");
        assert!(!default_registry().supports(&rename.into(), &Database::new(Db2)));
    }
}
