//! Generated SQL.

use std::fmt;

use serde::Serialize;

/// One generated SQL statement and the delimiter that ends it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sql {
    pub text: String,
    pub end_delimiter: String,
}

impl Sql {
    /// A statement ended by `;`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            end_delimiter: ";".to_string(),
        }
    }

    /// A line comment, which takes no delimiter.
    #[must_use]
    pub fn comment(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            end_delimiter: String::new(),
        }
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.end_delimiter = delimiter.into();
        self
    }
}

impl fmt::Display for Sql {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.text, self.end_delimiter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_appends_delimiter() {
        assert_eq!(Sql::new("DROP TABLE t").to_string(), "DROP TABLE t;");
        assert_eq!(Sql::new("GO").with_delimiter("").to_string(), "GO");
        assert_eq!(Sql::comment("-- hi").to_string(), "-- hi");
    }
}
