//! Generic ANSI-style dialect.
//!
//! Used for previews and as the fallback when the target product is unknown.
//! Every knob keeps its default.

use enumflags2::BitFlags;

use super::dialect::{Capability, Dialect, DialectId};

/// ANSI SQL dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericDialect;

impl Dialect for GenericDialect {
    fn id(&self) -> DialectId {
        DialectId::Generic
    }

    fn product_name(&self) -> &'static str {
        "Generic SQL"
    }

    fn capabilities(&self) -> BitFlags<Capability> {
        Capability::Sequences
            | Capability::AutoIncrement
            | Capability::InitiallyDeferrableColumns
            | Capability::Schemas
            | Capability::DropTableCascade
            | Capability::NamedPrimaryKeys
            | Capability::NamedUniqueConstraints
            | Capability::BatchUpdates
            | Capability::Remarks
            | Capability::DropIfExists
    }
}
