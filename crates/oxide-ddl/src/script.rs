//! Writing generated SQL out as a script.

use std::io::{self, Write};

use crate::sql::Sql;

/// Writes each statement followed by its end delimiter and a blank line.
///
/// Comments carry no delimiter and are written on their own line without
/// the blank line, so a comment stays attached to the statement after it.
pub fn write_script<W: Write>(writer: &mut W, statements: &[Sql]) -> io::Result<()> {
    for sql in statements {
        if sql.end_delimiter.is_empty() {
            writeln!(writer, "{}", sql.text)?;
        } else {
            writeln!(writer, "{sql}")?;
            writeln!(writer)?;
        }
    }
    writer.flush()
}

/// Renders a script into a string.
#[must_use]
pub fn to_script(statements: &[Sql]) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_script(&mut buffer, statements);
    String::from_utf8_lossy(&buffer).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_layout() {
        let script = to_script(&[
            Sql::comment("-- people"),
            Sql::new("CREATE TABLE person (id INT)"),
            Sql::new("CREATE PROCEDURE p AS SELECT 1").with_delimiter("\nGO"),
        ]);
        assert_eq!(
            script,
            "-- people\nCREATE TABLE person (id INT);\n\nCREATE PROCEDURE p AS SELECT 1\nGO\n\n"
        );
    }

    #[test]
    fn test_empty_script() {
        assert_eq!(to_script(&[]), "");
    }
}
