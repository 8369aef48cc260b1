//! Reserved word lists.

/// Reserved words of SQL:2003 shared by every dialect.
pub const SQL_2003: &[&str] = &[
    "ABS", "ALL", "ALLOCATE", "ALTER", "AND", "ANY", "ARE", "ARRAY", "AS", "ASENSITIVE",
    "ASYMMETRIC", "AT", "ATOMIC", "AUTHORIZATION", "AVG", "BEGIN", "BETWEEN", "BIGINT", "BINARY",
    "BLOB", "BOOLEAN", "BOTH", "BY", "CALL", "CALLED", "CASCADED", "CASE", "CAST", "CEIL",
    "CEILING", "CHAR", "CHARACTER", "CHECK", "CLOB", "CLOSE", "COLLATE", "COLLECT", "COLUMN",
    "COMMIT", "CONDITION", "CONNECT", "CONSTRAINT", "CONVERT", "CORR", "CORRESPONDING", "COUNT",
    "CREATE", "CROSS", "CUBE", "CURRENT", "CURRENT_DATE", "CURRENT_TIME", "CURRENT_TIMESTAMP",
    "CURRENT_USER", "CURSOR", "CYCLE", "DATE", "DAY", "DEALLOCATE", "DEC", "DECIMAL", "DECLARE",
    "DEFAULT", "DELETE", "DEREF", "DESCRIBE", "DETERMINISTIC", "DISCONNECT", "DISTINCT", "DOUBLE",
    "DROP", "DYNAMIC", "EACH", "ELEMENT", "ELSE", "END", "ESCAPE", "EVERY", "EXCEPT", "EXEC",
    "EXECUTE", "EXISTS", "EXP", "EXTERNAL", "EXTRACT", "FALSE", "FETCH", "FILTER", "FLOAT",
    "FLOOR", "FOR", "FOREIGN", "FREE", "FROM", "FULL", "FUNCTION", "FUSION", "GET", "GLOBAL",
    "GRANT", "GROUP", "GROUPING", "HAVING", "HOLD", "HOUR", "IDENTITY", "IN", "INDICATOR",
    "INNER", "INOUT", "INSENSITIVE", "INSERT", "INT", "INTEGER", "INTERSECT", "INTERSECTION",
    "INTERVAL", "INTO", "IS", "JOIN", "LANGUAGE", "LARGE", "LATERAL", "LEADING", "LEFT", "LIKE",
    "LN", "LOCAL", "LOCALTIME", "LOCALTIMESTAMP", "LOWER", "MATCH", "MAX", "MEMBER", "MERGE",
    "METHOD", "MIN", "MINUTE", "MOD", "MODIFIES", "MODULE", "MONTH", "MULTISET", "NATIONAL",
    "NATURAL", "NCHAR", "NCLOB", "NEW", "NO", "NONE", "NORMALIZE", "NOT", "NULL", "NULLIF",
    "NUMERIC", "OF", "OLD", "ON", "ONLY", "OPEN", "OR", "ORDER", "OUT", "OUTER", "OVER",
    "OVERLAPS", "OVERLAY", "PARAMETER", "PARTITION", "POSITION", "POWER", "PRECISION", "PREPARE",
    "PRIMARY", "PROCEDURE", "RANGE", "RANK", "READS", "REAL", "RECURSIVE", "REF", "REFERENCES",
    "REFERENCING", "RELEASE", "RESULT", "RETURN", "RETURNS", "REVOKE", "RIGHT", "ROLLBACK",
    "ROLLUP", "ROW", "ROWS", "SAVEPOINT", "SCOPE", "SCROLL", "SEARCH", "SECOND", "SELECT",
    "SENSITIVE", "SESSION_USER", "SET", "SIMILAR", "SMALLINT", "SOME", "SPECIFIC",
    "SPECIFICTYPE", "SQL", "SQLEXCEPTION", "SQLSTATE", "SQLWARNING", "SQRT", "START", "STATIC",
    "SUBMULTISET", "SUBSTRING", "SUM", "SYMMETRIC", "SYSTEM", "SYSTEM_USER", "TABLE",
    "TABLESAMPLE", "THEN", "TIME", "TIMESTAMP", "TIMEZONE_HOUR", "TIMEZONE_MINUTE", "TO",
    "TRAILING", "TRANSLATE", "TRANSLATION", "TREAT", "TRIGGER", "TRIM", "TRUE", "UESCAPE",
    "UNION", "UNIQUE", "UNKNOWN", "UNNEST", "UPDATE", "UPPER", "USER", "USING", "VALUE",
    "VALUES", "VARCHAR", "VARYING", "WHEN", "WHENEVER", "WHERE", "WIDTH_BUCKET", "WINDOW",
    "WITH", "WITHIN", "WITHOUT", "YEAR",
];

pub const ORACLE: &[&str] = &[
    "ACCESS", "AUDIT", "CLUSTER", "COMMENT", "COMPRESS", "EXCLUSIVE", "FILE", "IDENTIFIED",
    "INCREMENT", "INDEX", "INITIAL", "LEVEL", "LOCK", "LONG", "MAXEXTENTS", "MINUS", "MODE",
    "NOAUDIT", "NOCOMPRESS", "NOWAIT", "NUMBER", "OFFLINE", "ONLINE", "PCTFREE", "PRIOR",
    "RAW", "RENAME", "RESOURCE", "ROWID", "ROWNUM", "SESSION", "SHARE", "SIZE", "SYNONYM",
    "SYSDATE", "UID", "VALIDATE", "VARCHAR2", "VIEW",
];

pub const MYSQL: &[&str] = &[
    "ACCESSIBLE", "ANALYZE", "ASC", "CHANGE", "DATABASE", "DATABASES", "DELAYED", "DESC",
    "DISTINCTROW", "DIV", "DUAL", "ENCLOSED", "ESCAPED", "EXPLAIN", "FORCE", "FULLTEXT",
    "HIGH_PRIORITY", "IGNORE", "INDEX", "INFILE", "KEY", "KEYS", "KILL", "LIMIT", "LINES",
    "LOAD", "LOCK", "LONG", "LOW_PRIORITY", "OPTIMIZE", "OPTION", "OUTFILE", "PURGE", "READ",
    "REGEXP", "RENAME", "REPLACE", "REQUIRE", "RLIKE", "SCHEMA", "SEPARATOR", "SHOW",
    "SPATIAL", "STRAIGHT_JOIN", "TERMINATED", "UNLOCK", "UNSIGNED", "USAGE", "USE", "WRITE",
    "XOR", "ZEROFILL",
];

pub const POSTGRES: &[&str] = &[
    "ANALYSE", "ANALYZE", "ASC", "CONCURRENTLY", "DESC", "DO", "FREEZE", "ILIKE", "ISNULL",
    "LIMIT", "NOTNULL", "OFFSET", "PLACING", "RETURNING", "USER", "VARIADIC", "VERBOSE",
];

pub const MSSQL: &[&str] = &[
    "BACKUP", "BREAK", "BROWSE", "BULK", "CHECKPOINT", "CLUSTERED", "COMPUTE", "CONTAINS",
    "CONTAINSTABLE", "DATABASE", "DBCC", "DENY", "DISK", "DISTRIBUTED", "DUMP", "ERRLVL",
    "EXIT", "FILE", "FILLFACTOR", "FREETEXT", "FREETEXTTABLE", "GOTO", "HOLDLOCK",
    "IDENTITYCOL", "IDENTITY_INSERT", "INDEX", "KEY", "KILL", "LINENO", "LOAD", "NOCHECK",
    "NONCLUSTERED", "OFF", "OFFSETS", "OPENDATASOURCE", "OPENQUERY", "OPENROWSET", "OPENXML",
    "OPTION", "PERCENT", "PIVOT", "PLAN", "PRINT", "PROC", "PUBLIC", "RAISERROR", "READTEXT",
    "RECONFIGURE", "REPLICATION", "RESTORE", "RESTRICT", "REVERT", "ROWCOUNT", "ROWGUIDCOL",
    "RULE", "SAVE", "SCHEMA", "SETUSER", "SHUTDOWN", "STATISTICS", "TEXTSIZE", "TOP", "TRAN",
    "TRANSACTION", "TRUNCATE", "TSEQUAL", "UNPIVOT", "UPDATETEXT", "USE", "WAITFOR", "WHILE",
    "WRITETEXT",
];

pub const DB2: &[&str] = &[
    "ACTIVATE", "ALIAS", "ASSOCIATE", "AUX", "AUXILIARY", "BUFFERPOOL", "CAPTURE", "CCSID",
    "CLUSTER", "COLLECTION", "COLLID", "CONCAT", "DATABASE", "DAYS", "DB2GENERAL", "DBINFO",
    "EDITPROC", "FENCED", "FIELDPROC", "HOURS", "IMMEDIATE", "INDEX", "INTEGRITY", "ISOBID",
    "LOCKMAX", "LOCKSIZE", "MICROSECONDS", "MINUTES", "MONTHS", "NUMPARTS", "OBID", "PACKAGE",
    "PIECESIZE", "PLAN", "PRIQTY", "RRN", "SECONDS", "SECQTY", "STOGROUP", "SUBPAGES",
    "TABLESPACE", "VALIDPROC", "VCAT", "VOLUMES", "YEARS",
];

pub const H2: &[&str] = &[
    "INTERSECTS", "LIMIT", "MINUS", "OFFSET", "QUALIFY", "REGEXP", "ROWNUM", "SYSDATE",
    "SYSTIME", "SYSTIMESTAMP", "TODAY", "TOP", "_ROWID_",
];

pub const INFORMIX: &[&str] = &[
    "DATABASE", "FRACTION", "IFX_INT8", "INT8", "LVARCHAR", "SERIAL", "SERIAL8", "SMALLFLOAT",
];

pub const FIREBIRD: &[&str] = &[
    "BIT_LENGTH", "CHAR_LENGTH", "CHARACTER_LENGTH", "GDSCODE", "OCTET_LENGTH", "PLAN",
    "POST_EVENT", "RDB$DB_KEY", "RECORD_VERSION", "RECREATE", "ROWS", "SQLCODE", "VARIABLE",
];

/// Case-insensitive membership test.
#[must_use]
pub fn contains(words: &[&str], candidate: &str) -> bool {
    words.iter().any(|w| w.eq_ignore_ascii_case(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignores_case() {
        assert!(contains(SQL_2003, "select"));
        assert!(contains(SQL_2003, "User"));
        assert!(!contains(SQL_2003, "person"));
        assert!(contains(MYSQL, "key"));
    }
}
