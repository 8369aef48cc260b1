//! Sequence statements.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateSequence {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub sequence_name: String,
    pub start_value: Option<i64>,
    pub increment_by: Option<i64>,
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
    pub ordered: Option<bool>,
    pub cycle: Option<bool>,
    /// Zero means NOCACHE.
    pub cache_size: Option<u64>,
    pub data_type: Option<String>,
}

impl CreateSequence {
    #[must_use]
    pub fn new(sequence: impl Into<String>) -> Self {
        Self {
            sequence_name: sequence.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn start_value(mut self, value: i64) -> Self {
        self.start_value = Some(value);
        self
    }

    #[must_use]
    pub const fn increment_by(mut self, value: i64) -> Self {
        self.increment_by = Some(value);
        self
    }

    #[must_use]
    pub const fn min_value(mut self, value: i64) -> Self {
        self.min_value = Some(value);
        self
    }

    #[must_use]
    pub const fn max_value(mut self, value: i64) -> Self {
        self.max_value = Some(value);
        self
    }

    #[must_use]
    pub const fn cycle(mut self, cycle: bool) -> Self {
        self.cycle = Some(cycle);
        self
    }

    #[must_use]
    pub const fn cache_size(mut self, size: u64) -> Self {
        self.cache_size = Some(size);
        self
    }

    #[must_use]
    pub const fn ordered(mut self, ordered: bool) -> Self {
        self.ordered = Some(ordered);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlterSequence {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub sequence_name: String,
    pub increment_by: Option<i64>,
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
    pub ordered: Option<bool>,
    pub cycle: Option<bool>,
    pub cache_size: Option<u64>,
}

impl AlterSequence {
    #[must_use]
    pub fn new(sequence: impl Into<String>) -> Self {
        Self {
            sequence_name: sequence.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn increment_by(mut self, value: i64) -> Self {
        self.increment_by = Some(value);
        self
    }

    #[must_use]
    pub const fn min_value(mut self, value: i64) -> Self {
        self.min_value = Some(value);
        self
    }

    #[must_use]
    pub const fn max_value(mut self, value: i64) -> Self {
        self.max_value = Some(value);
        self
    }

    #[must_use]
    pub const fn cycle(mut self, cycle: bool) -> Self {
        self.cycle = Some(cycle);
        self
    }

    #[must_use]
    pub const fn cache_size(mut self, size: u64) -> Self {
        self.cache_size = Some(size);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DropSequence {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub sequence_name: String,
}

impl DropSequence {
    #[must_use]
    pub fn new(sequence: impl Into<String>) -> Self {
        Self {
            sequence_name: sequence.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenameSequence {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub old_sequence_name: String,
    pub new_sequence_name: String,
}

impl RenameSequence {
    #[must_use]
    pub fn new(old_name: impl Into<String>, new_name: impl Into<String>) -> Self {
        Self {
            old_sequence_name: old_name.into(),
            new_sequence_name: new_name.into(),
            ..Self::default()
        }
    }
}

qualified!(CreateSequence, AlterSequence, DropSequence, RenameSequence);
