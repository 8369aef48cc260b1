//! HyperSQL dialect.

use enumflags2::BitFlags;

use super::dialect::{Capability, DefaultPlacement, Dialect, DialectId, IdentifierCase};
use crate::types::{self, DataType};

/// HSQLDB.
#[derive(Debug, Clone, Copy, Default)]
pub struct HsqlDialect;

impl Dialect for HsqlDialect {
    fn id(&self) -> DialectId {
        DialectId::Hsql
    }

    fn product_name(&self) -> &'static str {
        "HSQL Database Engine"
    }

    fn capabilities(&self) -> BitFlags<Capability> {
        Capability::Sequences
            | Capability::AutoIncrement
            | Capability::Schemas
            | Capability::DropTableCascade
            | Capability::NamedPrimaryKeys
            | Capability::NamedUniqueConstraints
            | Capability::NamedNotNullConstraints
            | Capability::BatchUpdates
            | Capability::Remarks
            | Capability::DropIfExists
    }

    fn identifier_case(&self) -> IdentifierCase {
        IdentifierCase::Upper
    }

    fn default_placement(&self) -> DefaultPlacement {
        DefaultPlacement::BeforeNotNull
    }

    fn primary_key_after_not_null(&self) -> bool {
        true
    }

    fn current_date_time_function(&self) -> &'static str {
        "NOW"
    }

    fn map_data_type(&self, data_type: &DataType) -> String {
        match data_type {
            DataType::DateTime => "TIMESTAMP".to_string(),
            DataType::NVarchar(len) => types::sized("VARCHAR", *len),
            other => types::standard_name(other),
        }
    }
}
