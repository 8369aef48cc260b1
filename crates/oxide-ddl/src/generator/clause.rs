//! Clause list builder.

use std::fmt;

/// Space-separated SQL fragments, assembled left to right.
///
/// Empty fragments are skipped, so optional clauses can be pushed without
/// leaving stray separators behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clauses {
    parts: Vec<String>,
}

impl Clauses {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a list with `lead`.
    #[must_use]
    pub fn with(lead: impl Into<String>) -> Self {
        Self::new().push(lead)
    }

    #[must_use]
    pub fn push(mut self, part: impl Into<String>) -> Self {
        self.append(part);
        self
    }

    #[must_use]
    pub fn push_if(self, condition: bool, part: impl Into<String>) -> Self {
        if condition {
            self.push(part)
        } else {
            self
        }
    }

    #[must_use]
    pub fn push_opt(mut self, part: Option<impl Into<String>>) -> Self {
        if let Some(part) = part {
            self.append(part);
        }
        self
    }

    pub fn append(&mut self, part: impl Into<String>) {
        let part = part.into();
        if !part.trim().is_empty() {
            self.parts.push(part);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    #[must_use]
    pub fn build(self) -> String {
        self.parts.join(" ")
    }
}

impl fmt::Display for Clauses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_empty_parts() {
        let sql = Clauses::with("ALTER TABLE t")
            .push("ADD c INT")
            .push("")
            .push_if(false, "NOT NULL")
            .push_opt(None::<String>)
            .push_opt(Some("DEFAULT 0"))
            .build();
        assert_eq!(sql, "ALTER TABLE t ADD c INT DEFAULT 0");
    }

    #[test]
    fn test_empty() {
        assert!(Clauses::new().push("  ").is_empty());
        assert_eq!(Clauses::new().build(), "");
    }
}
