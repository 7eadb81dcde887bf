use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Reserved words from ANSI SQL and the MySQL/MariaDB dialects
pub static SQL_RESERVED_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    RESERVED_WORDS.iter().copied().collect()
});

/// Case-insensitive reserved-word test
pub fn is_reserved_word(word: &str) -> bool {
    SQL_RESERVED_WORDS.contains(word.to_uppercase().as_str())
}

/// Column type names upper-cased when a CREATE TABLE statement is displayed
pub const SQL_TYPES: &[&str] = &[
    "bigint", "blob", "date", "datetime", "decimal", "double", "enum", "float",
    "longblob", "longtext", "mediumblob", "mediumint", "mediumtext", "set",
    "smallint", "text", "time", "timestamp", "tinyint", "tinytext", "unsigned",
    "varchar", "int", "char", "year",
];

const RESERVED_WORDS: &[&str] = &[
    "A", "ABORT", "ABS", "ABSOLUTE", "ACCESS", "ACTION", "ADA", "ADD", "ADDDATE",
    "ADDTIME", "ADMIN", "AES_DECRYPT", "AES_ENCRYPT", "AFTER", "AGGREGATE", "ALIAS",
    "ALL", "ALLOCATE", "ALSO", "ALTER", "ALWAYS", "ANALYSE", "ANALYZE", "AND", "ANY",
    "ANY_VALUE", "ARE", "ARRAY", "AS", "ASC", "ASCII", "ASENSITIVE", "ASSERTION",
    "ASSIGNMENT", "ASYMMETRIC", "AT", "ATOMIC", "ATTRIBUTE", "ATTRIBUTES", "AUDIT",
    "AUTHORIZATION", "AUTO_INCREMENT", "AVG", "AVG_ROW_LENGTH",
    "BACKUP", "BACKWARD", "BEFORE", "BEGIN", "BERNOULLI", "BETWEEN", "BIGINT", "BIN",
    "BINARY", "BIT", "BIT_AND", "BIT_COUNT", "BIT_LENGTH", "BIT_OR", "BIT_XOR",
    "BITVAR", "BLOB", "BOOL", "BOOLEAN", "BOTH", "BREADTH", "BREAK", "BROWSE", "BULK",
    "BY",
    "C", "CACHE", "CALL", "CALLED", "CARDINALITY", "CASCADE", "CASCADED", "CASE",
    "CAST", "CATALOG", "CATALOG_NAME", "CEIL", "CEILING", "CHAIN", "CHANGE", "CHAR",
    "CHAR_LENGTH", "CHARACTER", "CHARACTER_LENGTH", "CHARACTER_SET_CATALOG",
    "CHARACTER_SET_NAME", "CHARACTER_SET_SCHEMA", "CHARACTERISTICS", "CHARACTERS",
    "CHARSET", "CHECK", "CHECKED", "CHECKPOINT", "CHECKSUM", "CLASS", "CLASS_ORIGIN",
    "CLOB", "CLOSE", "CLUSTER", "CLUSTERED", "COALESCE", "COBOL", "COERCIBILITY",
    "COLLATE", "COLLATION", "COLLATION_CATALOG", "COLLATION_NAME", "COLLATION_SCHEMA",
    "COLLECT", "COLUMN", "COLUMN_NAME", "COLUMNS", "COMMAND_FUNCTION",
    "COMMAND_FUNCTION_CODE", "COMMENT", "COMMIT", "COMMITTED", "COMPLETION",
    "COMPRESS", "COMPUTE", "CONCAT", "CONCAT_WS", "CONDITION", "CONDITION_NUMBER",
    "CONNECT", "CONNECTION", "CONNECTION_NAME", "CONSTRAINT", "CONSTRAINT_CATALOG",
    "CONSTRAINT_NAME", "CONSTRAINT_SCHEMA", "CONSTRAINTS", "CONSTRUCTOR", "CONTAINS",
    "CONTAINSTABLE", "CONTINUE", "CONV", "CONVERSION", "CONVERT", "COPY", "CORR",
    "CORRESPONDING", "COUNT", "COVAR_POP", "COVAR_SAMP", "CREATE", "CREATEDB",
    "CREATEROLE", "CREATEUSER", "CRC32", "CROSS", "CSV", "CUBE", "CUME_DIST",
    "CURDATE", "CURRENT", "CURRENT_DATE", "CURRENT_DEFAULT_TRANSFORM_GROUP",
    "CURRENT_PATH", "CURRENT_ROLE", "CURRENT_TIME", "CURRENT_TIMESTAMP",
    "CURRENT_TRANSFORM_GROUP_FOR_TYPE", "CURRENT_USER", "CURSOR", "CURSOR_NAME",
    "CURTIME", "CYCLE",
    "DATA", "DATABASE", "DATABASES", "DATE", "DATE_ADD", "DATE_FORMAT", "DATE_SUB",
    "DATEDIFF", "DATETIME", "DATETIME_INTERVAL_CODE", "DATETIME_INTERVAL_PRECISION",
    "DAY", "DAY_HOUR", "DAY_MICROSECOND", "DAY_MINUTE", "DAY_SECOND", "DAYNAME",
    "DAYOFMONTH", "DAYOFWEEK", "DAYOFYEAR", "DBCC", "DEALLOCATE", "DEC", "DECIMAL",
    "DECLARE", "DEFAULT", "DEFAULTS", "DEFERRABLE", "DEFERRED", "DEFINED", "DEFINER",
    "DEGREE", "DELAY_KEY_WRITE", "DELAYED", "DELETE", "DELIMITER", "DELIMITERS",
    "DENSE_RANK", "DENY", "DEPTH", "DEREF", "DERIVED", "DESC", "DESCRIBE",
    "DESCRIPTOR", "DESTROY", "DESTRUCTOR", "DETERMINISTIC", "DIAGNOSTICS",
    "DICTIONARY", "DISABLE", "DISCONNECT", "DISK", "DISPATCH", "DISTINCT",
    "DISTINCTROW", "DISTRIBUTED", "DIV", "DO", "DOMAIN", "DOUBLE", "DROP", "DUAL",
    "DUMMY", "DUMP", "DYNAMIC", "DYNAMIC_FUNCTION", "DYNAMIC_FUNCTION_CODE",
    "EACH", "ELEMENT", "ELSE", "ELSEIF", "ELT", "ENABLE", "ENCLOSED", "ENCODING",
    "ENCRYPTED", "END", "ENUM", "EQUALS", "ERRLVL", "ESCAPE", "ESCAPED", "EVERY",
    "EXCEPT", "EXCEPTION", "EXCLUDE", "EXCLUDING", "EXCLUSIVE", "EXEC", "EXECUTE",
    "EXISTING", "EXISTS", "EXIT", "EXP", "EXPLAIN", "EXTERNAL", "EXTRACT",
    "FALSE", "FETCH", "FIELD", "FIELDS", "FILE", "FILLFACTOR", "FILTER", "FINAL",
    "FIND_IN_SET", "FIRST", "FLOAT", "FLOAT4", "FLOAT8", "FLOOR", "FLUSH",
    "FOLLOWING", "FOR", "FORCE", "FOREIGN", "FORMAT", "FORTRAN", "FORWARD", "FOUND",
    "FOUND_ROWS", "FREE", "FREETEXT", "FREETEXTTABLE", "FREEZE", "FROM",
    "FROM_BASE64", "FROM_DAYS", "FROM_UNIXTIME", "FULL", "FULLTEXT", "FUNCTION",
    "FUSION",
    "G", "GENERAL", "GENERATED", "GET", "GET_FORMAT", "GET_LOCK", "GLOBAL", "GO",
    "GOTO", "GRANT", "GRANTED", "GRANTS", "GREATEST", "GROUP", "GROUP_CONCAT",
    "GROUPING",
    "HANDLER", "HAVING", "HEADER", "HEAP", "HEX", "HIERARCHY", "HIGH_PRIORITY",
    "HOLD", "HOLDLOCK", "HOST", "HOSTS", "HOUR", "HOUR_MICROSECOND", "HOUR_MINUTE",
    "HOUR_SECOND",
    "IDENTIFIED", "IDENTITY", "IDENTITY_INSERT", "IDENTITYCOL", "IF", "IFNULL",
    "IGNORE", "ILIKE", "IMMEDIATE", "IMMUTABLE", "IMPLEMENTATION", "IMPLICIT", "IN",
    "INCLUDE", "INCLUDING", "INCREMENT", "INDEX", "INDICATOR", "INFILE", "INFIX",
    "INHERIT", "INHERITS", "INITIAL", "INITIALIZE", "INITIALLY", "INNER", "INOUT",
    "INPUT", "INSENSITIVE", "INSERT", "INSERT_ID", "INSTANCE", "INSTANTIABLE",
    "INSTEAD", "INSTR", "INT", "INT1", "INT2", "INT3", "INT4", "INT8", "INTEGER",
    "INTERSECT", "INTERSECTION", "INTERVAL", "INTO", "INVOKER", "IS", "IS_FREE_LOCK",
    "IS_IPV4", "IS_IPV4_COMPAT", "IS_IPV4_MAPPED", "IS_IPV6", "IS_USED_LOCK", "ISAM",
    "ISNULL", "ISOLATION", "ITERATE",
    "JOIN", "JSON_APPEND", "JSON_ARRAY", "JSON_ARRAY_APPEND", "JSON_ARRAY_INSERT",
    "JSON_CONTAINS", "JSON_CONTAINS_PATH", "JSON_DEPTH", "JSON_EXTRACT",
    "JSON_INSERT", "JSON_KEYS", "JSON_LENGTH", "JSON_MERGE", "JSON_MERGE_PRESERVE",
    "JSON_OBJECT", "JSON_QUOTE", "JSON_REMOVE", "JSON_REPLACE", "JSON_SEARCH",
    "JSON_SET", "JSON_TYPE", "JSON_UNQUOTE", "JSON_VALID",
    "K", "KEY", "KEY_MEMBER", "KEY_TYPE", "KEYS", "KILL",
    "LANCOMPILER", "LANGUAGE", "LARGE", "LAST", "LAST_DAY", "LAST_INSERT_ID",
    "LATERAL", "LCASE", "LEADING", "LEAST", "LEAVE", "LEFT", "LENGTH", "LESS",
    "LEVEL", "LIKE", "LIMIT", "LINENO", "LINES", "LISTEN", "LN", "LOAD", "LOCAL",
    "LOCALTIME", "LOCALTIMESTAMP", "LOCATE", "LOCATION", "LOCATOR", "LOCK", "LOGIN",
    "LOGS", "LONG", "LONGBLOB", "LONGTEXT", "LOOP", "LOW_PRIORITY", "LOWER", "LPAD",
    "LTRIM",
    "M", "MAKE_SET", "MAKEDATE", "MAKETIME", "MAP", "MATCH", "MATCHED", "MAX",
    "MAX_ROWS", "MAXEXTENTS", "MAXVALUE", "MEDIUMBLOB", "MEDIUMINT", "MEDIUMTEXT",
    "MEMBER", "MERGE", "MESSAGE_LENGTH", "MESSAGE_OCTET_LENGTH", "MESSAGE_TEXT",
    "METHOD", "MICROSECOND", "MIDDLEINT", "MIN", "MIN_ROWS", "MINUS", "MINUTE",
    "MINUTE_MICROSECOND", "MINUTE_SECOND", "MINVALUE", "MLSLABEL", "MOD", "MODE",
    "MODIFIES", "MODIFY", "MODULE", "MONTH", "MONTHNAME", "MORE", "MOVE", "MULTISET",
    "MUMPS", "MYISAM",
    "NAME", "NAMES", "NATIONAL", "NATURAL", "NCHAR", "NCLOB", "NESTING", "NEW",
    "NEXT", "NO", "NO_WRITE_TO_BINLOG", "NOAUDIT", "NOCHECK", "NOCOMPRESS",
    "NOCREATEDB", "NOCREATEROLE", "NOCREATEUSER", "NOINHERIT", "NOLOGIN",
    "NONCLUSTERED", "NONE", "NORMALIZE", "NORMALIZED", "NOSUPERUSER", "NOT",
    "NOTHING", "NOTIFY", "NOTNULL", "NOWAIT", "NULL", "NULLABLE", "NULLIF", "NULLS",
    "NUMBER", "NUMERIC",
    "OBJECT", "OCT", "OCTET_LENGTH", "OCTETS", "OF", "OFF", "OFFLINE", "OFFSET",
    "OFFSETS", "OIDS", "OLD", "ON", "ONLINE", "ONLY", "OPEN", "OPENDATASOURCE",
    "OPENQUERY", "OPENROWSET", "OPENXML", "OPERATION", "OPERATOR", "OPTIMIZE",
    "OPTION", "OPTIONALLY", "OPTIONS", "OR", "ORD", "ORDER", "ORDERING",
    "ORDINALITY", "OTHERS", "OUT", "OUTER", "OUTFILE", "OUTPUT", "OVER", "OVERLAPS",
    "OVERLAY", "OVERRIDING", "OWNER",
    "PACK_KEYS", "PAD", "PARAMETER", "PARAMETER_MODE", "PARAMETER_NAME",
    "PARAMETER_ORDINAL_POSITION", "PARAMETER_SPECIFIC_CATALOG",
    "PARAMETER_SPECIFIC_NAME", "PARAMETER_SPECIFIC_SCHEMA", "PARAMETERS", "PARTIAL",
    "PARTITION", "PASCAL", "PASSWORD", "PATH", "PCTFREE", "PERCENT", "PERCENT_RANK",
    "PERCENTILE_CONT", "PERCENTILE_DISC", "PERIOD_ADD", "PERIOD_DIFF", "PLACING",
    "PLAN", "PLI", "POSITION", "POSTFIX", "POWER", "PRECEDING", "PRECISION",
    "PREFIX", "PREORDER", "PREPARE", "PREPARED", "PRESERVE", "PRIMARY", "PRINT",
    "PRIOR", "PRIVILEGES", "PROC", "PROCEDURAL", "PROCEDURE", "PROCESS",
    "PROCESSLIST", "PUBLIC", "PURGE",
    "QUARTER", "QUOTE",
    "RAID0", "RAISERROR", "RAND", "RANDOM_BYTES", "RANGE", "RANK", "RAW", "READ",
    "READS", "READTEXT", "REAL", "RECHECK", "RECONFIGURE", "RECURSIVE", "REF",
    "REFERENCES", "REFERENCING", "REGEXP", "REGR_AVGX", "REGR_AVGY", "REGR_COUNT",
    "REGR_INTERCEPT", "REGR_R2", "REGR_SLOPE", "REGR_SXX", "REGR_SXY", "REGR_SYY",
    "REINDEX", "RELATIVE", "RELEASE", "RELEASE_ALL_LOCKS", "RELEASE_LOCK", "RELOAD",
    "RENAME", "REPEAT", "REPEATABLE", "REPLACE", "REPLICATION", "REQUIRE", "RESET",
    "RESIGNAL", "RESOURCE", "RESTART", "RESTORE", "RESTRICT", "RESULT", "RETURN",
    "RETURNED_CARDINALITY", "RETURNED_LENGTH", "RETURNED_OCTET_LENGTH",
    "RETURNED_SQLSTATE", "RETURNS", "REVERSE", "REVOKE", "RIGHT", "RLIKE", "ROLE",
    "ROLLBACK", "ROLLUP", "ROUND", "ROUTINE", "ROUTINE_CATALOG", "ROUTINE_NAME",
    "ROUTINE_SCHEMA", "ROW", "ROW_COUNT", "ROW_NUMBER", "ROWCOUNT", "ROWGUIDCOL",
    "ROWID", "ROWNUM", "RPAD", "RTRIM", "ROWS", "RULE",
    "SAVE", "SAVEPOINT", "SCALE", "SCHEMA", "SCHEMA_NAME", "SCHEMAS", "SCOPE",
    "SCOPE_CATALOG", "SCOPE_NAME", "SCOPE_SCHEMA", "SCROLL", "SEARCH", "SEC_TO_TIME",
    "SECOND", "SECOND_MICROSECOND", "SECTION", "SECURITY", "SELECT", "SELF",
    "SENSITIVE", "SEPARATOR", "SEQUENCE", "SERIALIZABLE", "SERVER_NAME", "SESSION",
    "SESSION_USER", "SET", "SETOF", "SETS", "SETUSER", "SHARE", "SHOW", "SHUTDOWN",
    "SIGN", "SIGNAL", "SIMILAR", "SIMPLE", "SIZE", "SLEEP", "SMALLINT", "SOME",
    "SONAME", "SOUNDEX", "SOUNDS_LIKE", "SOURCE", "SPACE", "SPATIAL", "SPECIFIC",
    "SPECIFIC_NAME", "SPECIFICTYPE", "SQL", "SQL_BIG_RESULT", "SQL_BIG_SELECTS",
    "SQL_BIG_TABLES", "SQL_CALC_FOUND_ROWS", "SQL_LOG_OFF", "SQL_LOG_UPDATE",
    "SQL_LOW_PRIORITY_UPDATES", "SQL_SELECT_LIMIT", "SQL_SMALL_RESULT",
    "SQL_WARNINGS", "SQLCA", "SQLCODE", "SQLERROR", "SQLEXCEPTION", "SQLSTATE",
    "SQLWARNING", "SQRT", "SSL", "STABLE", "START", "STARTING", "STATE", "STATEMENT",
    "STATIC", "STATISTICS", "STATUS", "STDDEV", "STDDEV_POP", "STDDEV_SAMP", "STDIN",
    "STDOUT", "STORAGE", "STR_TO_DATE", "STRAIGHT_JOIN", "STRCMP", "STRICT",
    "STRING", "STRUCTURE", "STYLE", "SUBCLASS_ORIGIN", "SUBDATE", "SUBLIST",
    "SUBMULTISET", "SUBSTR", "SUBSTRING", "SUBSTRING_INDEX", "SUBTIME", "SUCCESSFUL",
    "SUM", "SUPERUSER", "SYMMETRIC", "SYNONYM", "SYSDATE", "SYSID", "SYSTEM",
    "SYSTEM_USER",
    "TABLE", "TABLE_NAME", "TABLES", "TABLESAMPLE", "TABLESPACE", "TEMP", "TEMPLATE",
    "TEMPORARY", "TERMINATE", "TERMINATED", "TEXT", "TEXTSIZE", "THAN", "THEN",
    "TIES", "TIME", "TIME_FORMAT", "TIME_TO_SEC", "TIMEDIFF", "TIMESTAMP",
    "TIMESTAMPADD", "TIMESTAMPDIFF", "TIMEZONE_HOUR", "TIMEZONE_MINUTE", "TINYBLOB",
    "TINYINT", "TINYTEXT", "TO", "TO_BASE64", "TO_DAYS", "TO_SECONDS", "TOAST",
    "TOP", "TOP_LEVEL_COUNT", "TRAILING", "TRAN", "TRANSACTION",
    "TRANSACTION_ACTIVE", "TRANSACTIONS_COMMITTED", "TRANSACTIONS_ROLLED_BACK",
    "TRANSFORM", "TRANSFORMS", "TRANSLATE", "TRANSLATION", "TREAT", "TRIGGER",
    "TRIGGER_CATALOG", "TRIGGER_NAME", "TRIGGER_SCHEMA", "TRIM", "TRUE", "TRUNCATE",
    "TRUSTED", "TSEQUAL", "TYPE",
    "UCASE", "UESCAPE", "UID", "UNBOUNDED", "UNCOMMITTED", "UNDER", "UNDO",
    "UNENCRYPTED", "UNHEX", "UNION", "UNIQUE", "UNKNOWN", "UNLISTEN", "UNLOCK",
    "UNNAMED", "UNNEST", "UNSIGNED", "UNTIL", "UPDATE", "UPDATETEXT", "UPPER",
    "USAGE", "USE", "USER", "USER_DEFINED_TYPE_CATALOG", "USER_DEFINED_TYPE_CODE",
    "USER_DEFINED_TYPE_NAME", "USER_DEFINED_TYPE_SCHEMA", "USING", "UTC_DATE",
    "UTC_TIME", "UTC_TIMESTAMP", "UUID", "UUID_SHORT",
    "VACUUM", "VALID", "VALIDATE", "VALIDATOR", "VALUE", "VALUES", "VAR_POP",
    "VAR_SAMP", "VARBINARY", "VARCHAR", "VARCHAR2", "VARCHARACTER", "VARIABLE",
    "VARIABLES", "VARIANCE", "VARYING", "VERBOSE", "VERSION", "VIEW", "VOLATILE",
    "WAITFOR", "WEEK", "WEEKDAY", "WEEKOFYEAR", "WHEN", "WHENEVER", "WHERE", "WHILE",
    "WIDTH_BUCKET", "WINDOW", "WITH", "WITHIN", "WITHOUT", "WORK", "WRITE",
    "WRITETEXT",
    "X509", "XOR",
    "YEAR", "YEAR_MONTH", "YEARWEEK",
    "ZEROFILL", "ZONE",
];
