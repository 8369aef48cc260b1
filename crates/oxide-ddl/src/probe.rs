//! Capability probing across dialects.
//!
//! A probe runs a statement through the full validate-and-generate path for
//! every known dialect, which answers both "is this supported?" and "does
//! this dialect accept this parameter?" without keeping a separate table
//! of facts that could drift from the generators.

use serde::Serialize;

use crate::database::{Database, DialectId};
use crate::error::GenerateError;
use crate::generator::GeneratorRegistry;
use crate::statement::Statement;
use crate::validation::ValidationError;

/// Outcome of probing one dialect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Support {
    Supported,
    /// The dialect handles the statement kind but rejects these fields.
    Invalid { errors: Vec<ValidationError> },
    /// The dialect cannot handle the statement at all.
    Unsupported { reason: String },
}

impl Support {
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        matches!(self, Self::Supported)
    }
}

/// Support of one dialect for a probed statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialectSupport {
    pub dialect: DialectId,
    #[serde(flatten)]
    pub support: Support,
}

/// Probes `statement` against every dialect, in [`DialectId::ALL`] order.
#[must_use]
pub fn probe(registry: &GeneratorRegistry, statement: &Statement) -> Vec<DialectSupport> {
    DialectId::ALL
        .iter()
        .map(|&dialect| DialectSupport {
            dialect,
            support: probe_one(registry, statement, &Database::new(dialect)),
        })
        .collect()
}

/// Probes `statement` against one database.
#[must_use]
pub fn probe_one(registry: &GeneratorRegistry, statement: &Statement, database: &Database) -> Support {
    match registry.generate(statement, database) {
        Ok(_) => Support::Supported,
        Err(GenerateError::Validation { errors, .. }) => Support::Invalid { errors },
        Err(err) => Support::Unsupported {
            reason: err.to_string(),
        },
    }
}

/// Dialects where `base` generates but `with_parameter` does not.
///
/// This is how callers ask whether a dialect can express one particular
/// parameter: probe the statement with and without it.
#[must_use]
pub fn rejects_parameter(
    registry: &GeneratorRegistry,
    base: &Statement,
    with_parameter: &Statement,
) -> Vec<DialectId> {
    DialectId::ALL
        .iter()
        .copied()
        .filter(|&dialect| {
            let database = Database::new(dialect);
            registry.generate(base, &database).is_ok()
                && registry.generate(with_parameter, &database).is_err()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::default_registry;
    use crate::statement::{AddUniqueConstraint, CreateSequence, DropTable};

    fn support_of(results: &[DialectSupport], dialect: DialectId) -> &Support {
        &results
            .iter()
            .find(|r| r.dialect == dialect)
            .unwrap()
            .support
    }

    #[test]
    fn test_probe_covers_every_dialect() {
        let results = probe(default_registry(), &DropTable::new("person").into());
        assert_eq!(results.len(), DialectId::ALL.len());
        assert!(results.iter().all(|r| r.support.is_supported()));
    }

    #[test]
    fn test_probe_reports_unsupported_and_invalid() {
        let results = probe(default_registry(), &CreateSequence::new("seq").into());
        assert!(support_of(&results, DialectId::Postgres).is_supported());
        assert!(matches!(
            support_of(&results, DialectId::MySql),
            Support::Unsupported { .. }
        ));

        let results = probe(default_registry(), &CreateSequence::new("").into());
        assert!(matches!(
            support_of(&results, DialectId::Postgres),
            Support::Invalid { .. }
        ));
    }

    #[test]
    fn test_probe_is_deterministic() {
        let statement = DropTable::new("person").cascade().into();
        assert_eq!(
            probe(default_registry(), &statement),
            probe(default_registry(), &statement)
        );
    }

    #[test]
    fn test_rejects_parameter() {
        let base = AddUniqueConstraint::new("person", ["email"]);
        let deferrable = base.clone().deferrable(true);
        let rejecting = rejects_parameter(default_registry(), &base.into(), &deferrable.into());
        assert!(rejecting.contains(&DialectId::MySql));
        assert!(!rejecting.contains(&DialectId::Postgres));
        assert!(!rejecting.contains(&DialectId::Sqlite));
    }
}
