//! Generator registry and dispatcher.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use tracing::{debug, warn};

use super::{register_defaults, DynGenerator, SqlGenerator, Step};
use crate::database::{Database, DialectId};
use crate::error::{GenerateError, Result};
use crate::sql::Sql;
use crate::statement::{Statement, StatementKind};
use crate::validation::{ValidationError, ValidationResult};

/// SQL generated for one or more statements, plus the warnings raised on
/// the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generated {
    pub sql: Vec<Sql>,
    pub warnings: Vec<String>,
}

/// Generators keyed by statement kind and dialect.
///
/// Candidates for each key are ordered once, when a generator is
/// registered: generators written for specific dialects come before
/// generic ones, then higher priority first, then registration order.
#[derive(Default)]
pub struct GeneratorRegistry {
    generators: Vec<Box<dyn DynGenerator>>,
    table: HashMap<(StatementKind, DialectId), Vec<usize>>,
}

impl fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field(
                "generators",
                &self.generators.iter().map(|g| g.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl GeneratorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in generator.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        register_defaults(&mut registry);
        registry
    }

    pub fn register<G: SqlGenerator>(&mut self, generator: G) {
        let index = self.generators.len();
        let kind = DynGenerator::kind(&generator);
        let dialects = DynGenerator::dialects(&generator);
        self.generators.push(Box::new(generator));

        for id in DialectId::ALL {
            if !dialects.is_empty() && !dialects.contains(&id) {
                continue;
            }
            let candidates = self.table.entry((kind, id)).or_default();
            candidates.push(index);
            let generators = &self.generators;
            candidates.sort_by_key(|&i| {
                let g = &generators[i];
                (g.dialects().is_empty(), Reverse(g.priority()), i)
            });
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Names of the candidates for a kind and dialect, best first.
    #[must_use]
    pub fn candidates(&self, kind: StatementKind, dialect: DialectId) -> Vec<&'static str> {
        self.table
            .get(&(kind, dialect))
            .map(|indices| indices.iter().map(|&i| self.generators[i].name()).collect())
            .unwrap_or_default()
    }

    /// Picks the generator for `statement` on `database`.
    pub fn resolve(&self, statement: &Statement, database: &Database) -> Result<&dyn DynGenerator> {
        self.table
            .get(&(statement.kind(), database.id()))
            .into_iter()
            .flatten()
            .map(|&i| self.generators[i].as_ref())
            .find(|g| g.supports(statement, database))
            .ok_or(GenerateError::UnsupportedStatement {
                statement: statement.kind(),
                dialect: database.id(),
            })
    }

    /// Whether any generator accepts `statement` on `database`.
    #[must_use]
    pub fn supports(&self, statement: &Statement, database: &Database) -> bool {
        self.resolve(statement, database).is_ok()
    }

    /// Validates `statement` with the generator that would render it.
    pub fn validate(&self, statement: &Statement, database: &Database) -> Result<ValidationResult> {
        check_capabilities(statement, database)?;
        let generator = self.resolve(statement, database)?;
        Ok(validate_with(generator, statement, database))
    }

    /// Generates SQL for one statement.
    ///
    /// Fails without returning any SQL if the statement or one of its
    /// follow-up statements is unsupported or invalid.
    pub fn generate(&self, statement: &Statement, database: &Database) -> Result<Generated> {
        let mut generated = Generated::default();
        self.generate_into(statement, database, &mut generated)?;
        Ok(generated)
    }

    /// Generates SQL for one statement, dropping the warnings.
    pub fn generate_sql(&self, statement: &Statement, database: &Database) -> Result<Vec<Sql>> {
        Ok(self.generate(statement, database)?.sql)
    }

    /// Generates SQL for several statements in order.
    pub fn generate_all(&self, statements: &[Statement], database: &Database) -> Result<Generated> {
        let mut generated = Generated::default();
        for statement in statements {
            self.generate_into(statement, database, &mut generated)?;
        }
        Ok(generated)
    }

    fn generate_into(
        &self,
        statement: &Statement,
        database: &Database,
        generated: &mut Generated,
    ) -> Result<()> {
        let kind = statement.kind();
        let dialect = database.id();
        check_capabilities(statement, database)?;

        let generator = self.resolve(statement, database)?;
        debug!(
            generator = generator.name(),
            statement = %kind,
            dialect = %dialect,
            "Selected generator"
        );

        let (errors, warnings) = validate_with(generator, statement, database).into_parts();
        let unsupported = errors.iter().find_map(|e| match e {
            ValidationError::UnsupportedFeature { feature, .. } => Some(feature.clone()),
            _ => None,
        });
        if let Some(feature) = unsupported {
            return Err(GenerateError::UnsupportedFeature {
                statement: kind,
                dialect,
                feature,
            });
        }
        if !errors.is_empty() {
            return Err(GenerateError::Validation {
                statement: kind,
                dialect,
                errors,
            });
        }
        for warning in &warnings {
            warn!(statement = %kind, dialect = %dialect, "{warning}");
        }
        generated.warnings.extend(warnings);

        for step in generator.generate(statement, database)?.into_steps() {
            match step {
                Step::Sql(sql) => {
                    debug!(sql = %sql.text, "Generated SQL");
                    generated.sql.push(sql);
                }
                Step::Statement(follow_up) => {
                    self.generate_into(&follow_up, database, generated)?;
                }
            }
        }
        Ok(())
    }
}

/// Runs the generator's own checks plus those every statement shares.
fn validate_with(
    generator: &dyn DynGenerator,
    statement: &Statement,
    database: &Database,
) -> ValidationResult {
    let mut result = generator.validate(statement, database);
    for value in statement.literal_values() {
        if !value.is_representable() {
            result.invalid(format!("{value:?} cannot be written as a SQL literal"));
        }
    }
    result
}

/// Fails if the database lacks a capability the statement kind needs.
fn check_capabilities(statement: &Statement, database: &Database) -> Result<()> {
    let kind = statement.kind();
    let missing = kind.required_capabilities() & !database.dialect().capabilities();
    match missing.iter().next() {
        Some(capability) => Err(GenerateError::UnsupportedFeature {
            statement: kind,
            dialect: database.id(),
            feature: capability.name().to_string(),
        }),
        None => Ok(()),
    }
}

/// The process-wide registry of built-in generators.
pub fn default_registry() -> &'static GeneratorRegistry {
    static REGISTRY: OnceLock<GeneratorRegistry> = OnceLock::new();
    REGISTRY.get_or_init(GeneratorRegistry::with_defaults)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{Output, PRIORITY_OVERRIDE};
    use crate::statement::{AddColumn, DropTable, LiteralValue, RawSql, Update, WhereClause};

    struct Fixed {
        name: &'static str,
        dialects: &'static [DialectId],
        priority: i32,
    }

    impl SqlGenerator for Fixed {
        type Statement = RawSql;

        fn name(&self) -> &'static str {
            self.name
        }

        fn dialects(&self) -> &'static [DialectId] {
            self.dialects
        }

        fn priority(&self) -> i32 {
            self.priority
        }

        fn generate(&self, _statement: &RawSql, _database: &Database) -> Result<Output> {
            Ok(Sql::new(self.name).into())
        }
    }

    fn raw() -> Statement {
        RawSql::new("SELECT 1").into()
    }

    #[test]
    fn test_specific_beats_generic() {
        let mut registry = GeneratorRegistry::new();
        registry.register(Fixed {
            name: "generic",
            dialects: &[],
            priority: PRIORITY_OVERRIDE,
        });
        registry.register(Fixed {
            name: "oracle",
            dialects: &[DialectId::Oracle],
            priority: 1,
        });

        let oracle = Database::new(DialectId::Oracle);
        let pg = Database::new(DialectId::Postgres);
        assert_eq!(registry.resolve(&raw(), &oracle).unwrap().name(), "oracle");
        assert_eq!(registry.resolve(&raw(), &pg).unwrap().name(), "generic");
    }

    #[test]
    fn test_priority_then_registration_order() {
        let mut registry = GeneratorRegistry::new();
        for (name, priority) in [("first", 1), ("high", 3), ("second", 1)] {
            registry.register(Fixed {
                name,
                dialects: &[DialectId::H2],
                priority,
            });
        }
        assert_eq!(
            registry.candidates(StatementKind::RawSql, DialectId::H2),
            vec!["high", "first", "second"]
        );
    }

    #[test]
    fn test_unsupported_statement() {
        let registry = GeneratorRegistry::new();
        let err = registry
            .generate(&DropTable::new("t").into(), &Database::new(DialectId::H2))
            .unwrap_err();
        assert!(matches!(
            err,
            GenerateError::UnsupportedStatement {
                statement: StatementKind::DropTable,
                dialect: DialectId::H2,
            }
        ));
        assert_eq!(err.to_string(), "dropTable is not supported on h2");
    }

    #[test]
    fn test_default_registry_covers_every_kind() {
        let registry = default_registry();
        let generic = Database::new(DialectId::Generic);
        for kind in StatementKind::ALL {
            let has_candidates = DialectId::ALL
                .iter()
                .any(|&id| !registry.candidates(*kind, id).is_empty());
            assert!(has_candidates, "no generator for {kind}");
        }
        assert!(registry.supports(&raw(), &generic));
    }

    #[test]
    fn test_non_finite_floats_are_invalid() {
        let db = Database::new(DialectId::Generic);
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let statements: [Statement; 2] = [
                AddColumn::new("t", "x", "float")
                    .default_value(LiteralValue::Float(value))
                    .into(),
                Update::new("t")
                    .set("x", 1_i64)
                    .filter(
                        WhereClause::new(":name = :value")
                            .column("y")
                            .parameter(LiteralValue::Float(value)),
                    )
                    .into(),
            ];
            for statement in &statements {
                let err = default_registry().generate(statement, &db).unwrap_err();
                assert!(matches!(err, GenerateError::Validation { .. }), "{err}");
                assert!(default_registry().validate(statement, &db).unwrap().has_errors());
            }
        }

        let finite = Statement::from(
            AddColumn::new("t", "x", "float").default_value(LiteralValue::Float(1.5)),
        );
        let generated = default_registry().generate_sql(&finite, &db).unwrap();
        assert!(generated[0].text.ends_with("DEFAULT 1.5"), "{}", generated[0].text);
    }
}
