//! MySQL keyword classification tables.
//!
//! Five independent word sets drive token classification: function names,
//! column attributes, reserved words, forbidden words and column types. A
//! word may appear in several sets at once (`CHAR` is a function, a column
//! type and a forbidden word), so classification returns a tag set rather
//! than a single category.
//!
//! The word lists follow the MySQL reference manual. Reserved words track
//! the 5.5 manual; the forbidden list is the stricter 5.6 identifier
//! blocklist, kept as its own category because its consumer (identifier
//! quoting) differs from the reserved list's (syntax display).

use std::collections::HashSet;

use once_cell::sync::Lazy;
use smallvec::SmallVec;

bitflags::bitflags! {
    /// Classification tags for a bare word.
    ///
    /// Categories are independent; membership in one says nothing about the
    /// others. An empty set means the word is a plain identifier.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Categories: u8 {
        /// Callable function name (`COUNT`, `NOW`, ...).
        const FUNCTION = 1 << 0;
        /// Column attribute or storage-engine word (`UNSIGNED`, `ZEROFILL`, ...).
        const ATTRIBUTE = 1 << 1;
        /// Reserved word per the SQL grammar (`SELECT`, `FROM`, ...).
        const RESERVED = 1 << 2;
        /// Word that may not name a column or table without quotes.
        const FORBIDDEN = 1 << 3;
        /// Column data type (`INT`, `VARCHAR`, ...).
        const TYPE = 1 << 4;
    }
}

/// MySQL server release whose word inventory a builtin table set mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MysqlVersion {
    /// MySQL 5.5 word lists (the default set).
    #[default]
    V5_5,
    /// MySQL 5.6 word lists: 5.5 plus the words 5.6 newly reserves.
    V5_6,
}

// Longest table entry is MASTER_SSL_VERIFY_SERVER_CERT (29 bytes); anything
// longer cannot match and skips the lookup entirely.
const MAX_WORD_LEN: usize = 32;

/// Immutable set of classification tables, shared read-only by all
/// classification calls.
///
/// Construction happens once (per version variant or custom word lists);
/// lookups are case-insensitive and O(1).
#[derive(Debug, Clone)]
pub struct KeywordTables {
    functions: HashSet<String>,
    attributes: HashSet<String>,
    reserved: HashSet<String>,
    forbidden: HashSet<String>,
    types: HashSet<String>,
}

impl KeywordTables {
    /// The builtin table set for the given MySQL release.
    pub fn for_version(version: MysqlVersion) -> Self {
        match version {
            MysqlVersion::V5_5 => Self::mysql_5_5(),
            MysqlVersion::V5_6 => Self::mysql_5_6(),
        }
    }

    /// The MySQL 5.5 table set.
    pub fn mysql_5_5() -> Self {
        Self::from_word_lists(
            FUNCTION_NAMES,
            COLUMN_ATTRIBUTES,
            RESERVED_WORDS,
            FORBIDDEN_WORDS,
            COLUMN_TYPES,
        )
    }

    /// The MySQL 5.6 table set: 5.5 plus [`RESERVED_WORDS_5_6`].
    pub fn mysql_5_6() -> Self {
        let mut tables = Self::mysql_5_5();
        for word in RESERVED_WORDS_5_6 {
            tables.reserved.insert((*word).to_owned());
        }
        tables
    }

    /// The process-wide default table set (MySQL 5.5), built on first use
    /// and shared read-only afterwards.
    pub fn builtin() -> &'static KeywordTables {
        static BUILTIN: Lazy<KeywordTables> = Lazy::new(KeywordTables::mysql_5_5);
        &BUILTIN
    }

    /// Builds a table set from caller-supplied word lists, e.g. for a MySQL
    /// release without a builtin variant. Words are trimmed and matched
    /// case-insensitively.
    pub fn from_word_lists(
        functions: &[&str],
        attributes: &[&str],
        reserved: &[&str],
        forbidden: &[&str],
        types: &[&str],
    ) -> Self {
        fn build(words: &[&str]) -> HashSet<String> {
            words.iter().map(|w| w.trim().to_ascii_uppercase()).collect()
        }
        Self {
            functions: build(functions),
            attributes: build(attributes),
            reserved: build(reserved),
            forbidden: build(forbidden),
            types: build(types),
        }
    }

    /// Whether `text` (trimmed, case-folded) belongs to any of the named
    /// categories. Unknown words are simply absent from every set.
    pub fn contains(&self, categories: Categories, text: &str) -> bool {
        self.classify(text).intersects(categories)
    }

    /// Classifies a bare word into its category tag set.
    ///
    /// Matching is case-insensitive over the trimmed word; the empty set
    /// means "plain identifier". Quoted strings and numbers never reach
    /// this function - the tokenizer recognizes them first.
    pub fn classify(&self, lexeme: &str) -> Categories {
        let mut tags = Categories::empty();
        let Some(key) = upper_key(lexeme.trim()) else {
            return tags;
        };
        let Ok(key) = core::str::from_utf8(&key) else {
            return tags;
        };
        if self.functions.contains(key) {
            tags |= Categories::FUNCTION;
        }
        if self.attributes.contains(key) {
            tags |= Categories::ATTRIBUTE;
        }
        if self.reserved.contains(key) {
            tags |= Categories::RESERVED;
        }
        if self.forbidden.contains(key) {
            tags |= Categories::FORBIDDEN;
        }
        if self.types.contains(key) {
            tags |= Categories::TYPE;
        }
        tags
    }
}

// Uppercases into a stack buffer. None when the word is empty or too long
// to match any table entry.
fn upper_key(word: &str) -> Option<SmallVec<[u8; MAX_WORD_LEN]>> {
    if word.is_empty() || word.len() > MAX_WORD_LEN {
        return None;
    }
    Some(word.bytes().map(|b| b.to_ascii_uppercase()).collect())
}

/// Words MySQL 5.6 reserves on top of the 5.5 list.
pub const RESERVED_WORDS_5_6: &[&str] = &[
    "GET", "IO_AFTER_GTIDS", "IO_BEFORE_GTIDS", "MASTER_BIND",
    "SQL_AFTER_GTIDS", "SQL_BEFORE_GTIDS",
];

/// MySQL function names.
pub const FUNCTION_NAMES: &[&str] = &[
    "ABS", "ACOS", "ADDDATE", "ADDTIME", "AES_DECRYPT", "AES_ENCRYPT",
    "AREA", "ASBINARY", "ASCII", "ASIN", "ASTEXT", "ATAN", "ATAN2", "AVG",
    "BDMPOLYFROMTEXT", "BDMPOLYFROMWKB", "BDPOLYFROMTEXT", "BDPOLYFROMWKB",
    "BENCHMARK", "BIN", "BIT_AND", "BIT_COUNT", "BIT_LENGTH", "BIT_OR",
    "BIT_XOR", "BOUNDARY", "BUFFER", "CAST", "CEIL", "CEILING", "CENTROID",
    "CHAR", "CHARACTER_LENGTH", "CHARSET", "CHAR_LENGTH", "COALESCE",
    "COERCIBILITY", "COLLATION", "COMPRESS", "CONCAT", "CONCAT_WS",
    "CONNECTION_ID", "CONTAINS", "CONV", "CONVERT", "CONVERT_TZ",
    "CONVEXHULL", "COS", "COT", "COUNT", "CRC32", "CROSSES", "CURDATE",
    "CURRENT_DATE", "CURRENT_TIME", "CURRENT_TIMESTAMP", "CURRENT_USER",
    "CURTIME", "DATABASE", "DATE", "DATEDIFF", "DATE_ADD", "DATE_DIFF",
    "DATE_FORMAT", "DATE_SUB", "DAY", "DAYNAME", "DAYOFMONTH", "DAYOFWEEK",
    "DAYOFYEAR", "DECODE", "DEFAULT", "DEGREES", "DES_DECRYPT",
    "DES_ENCRYPT", "DIFFERENCE", "DIMENSION", "DISJOINT", "DISTANCE", "ELT",
    "ENCODE", "ENCRYPT", "ENDPOINT", "ENVELOPE", "EQUALS", "EXP",
    "EXPORT_SET", "EXTERIORRING", "EXTRACT", "EXTRACTVALUE", "FIELD",
    "FIND_IN_SET", "FLOOR", "FORMAT", "FOUND_ROWS", "FROM_DAYS",
    "FROM_UNIXTIME", "GEOMCOLLFROMTEXT", "GEOMCOLLFROMWKB",
    "GEOMETRYCOLLECTION", "GEOMETRYCOLLECTIONFROMTEXT",
    "GEOMETRYCOLLECTIONFROMWKB", "GEOMETRYFROMTEXT", "GEOMETRYFROMWKB",
    "GEOMETRYN", "GEOMETRYTYPE", "GEOMFROMTEXT", "GEOMFROMWKB",
    "GET_FORMAT", "GET_LOCK", "GLENGTH", "GREATEST", "GROUP_CONCAT",
    "GROUP_UNIQUE_USERS", "HEX", "HOUR", "IF", "IFNULL", "INET_ATON",
    "INET_NTOA", "INSERT", "INSTR", "INTERIORRINGN", "INTERSECTION",
    "INTERSECTS", "INTERVAL", "ISCLOSED", "ISEMPTY", "ISNULL", "ISRING",
    "ISSIMPLE", "IS_FREE_LOCK", "IS_USED_LOCK", "LAST_DAY",
    "LAST_INSERT_ID", "LCASE", "LEAST", "LEFT", "LENGTH", "LINEFROMTEXT",
    "LINEFROMWKB", "LINESTRING", "LINESTRINGFROMTEXT", "LINESTRINGFROMWKB",
    "LN", "LOAD_FILE", "LOCALTIME", "LOCALTIMESTAMP", "LOCATE", "LOG",
    "LOG10", "LOG2", "LOWER", "LPAD", "LTRIM", "MAKEDATE", "MAKETIME",
    "MAKE_SET", "MASTER_POS_WAIT", "MAX", "MBRCONTAINS", "MBRDISJOINT",
    "MBREQUAL", "MBRINTERSECTS", "MBROVERLAPS", "MBRTOUCHES", "MBRWITHIN",
    "MD5", "MICROSECOND", "MID", "MIN", "MINUTE", "MLINEFROMTEXT",
    "MLINEFROMWKB", "MOD", "MONTH", "MONTHNAME", "MPOINTFROMTEXT",
    "MPOINTFROMWKB", "MPOLYFROMTEXT", "MPOLYFROMWKB", "MULTILINESTRING",
    "MULTILINESTRINGFROMTEXT", "MULTILINESTRINGFROMWKB", "MULTIPOINT",
    "MULTIPOINTFROMTEXT", "MULTIPOINTFROMWKB", "MULTIPOLYGON",
    "MULTIPOLYGONFROMTEXT", "MULTIPOLYGONFROMWKB", "NAME_CONST", "NOW",
    "NULLIF", "NUMGEOMETRIES", "NUMINTERIORRINGS", "NUMPOINTS", "OCT",
    "OCTET_LENGTH", "OLD_PASSWORD", "ORD", "OVERLAPS", "PASSWORD",
    "PERIOD_ADD", "PERIOD_DIFF", "PI", "POINT", "POINTFROMTEXT",
    "POINTFROMWKB", "POINTN", "POINTONSURFACE", "POLYFROMTEXT",
    "POLYFROMWKB", "POLYGON", "POLYGONFROMTEXT", "POLYGONFROMWKB",
    "POSITION", "POW", "POWER", "QUARTER", "QUOTE", "RADIANS", "RAND",
    "RELATED", "RELEASE_LOCK", "REPEAT", "REPLACE", "REVERSE", "RIGHT",
    "ROUND", "ROW_COUNT", "RPAD", "RTRIM", "SCHEMA", "SECOND",
    "SEC_TO_TIME", "SESSION_USER", "SHA", "SHA1", "SIGN", "SIN", "SLEEP",
    "SOUNDEX", "SPACE", "SQRT", "SRID", "STARTPOINT", "STD", "STDDEV",
    "STDDEV_POP", "STDDEV_SAMP", "STRCMP", "STR_TO_DATE", "SUBDATE",
    "SUBSTR", "SUBSTRING", "SUBSTRING_INDEX", "SUBTIME", "SUM",
    "SYMDIFFERENCE", "SYSDATE", "SYSTEM_USER", "TAN", "TIME", "TIMEDIFF",
    "TIMESTAMP", "TIMESTAMPADD", "TIMESTAMPDIFF", "TIME_FORMAT",
    "TIME_TO_SEC", "TOUCHES", "TO_DAYS", "TRIM", "TRUNCATE", "UCASE",
    "UNCOMPRESS", "UNCOMPRESSED_LENGTH", "UNHEX", "UNIQUE_USERS",
    "UNIX_TIMESTAMP", "UPDATEXML", "UPPER", "USER", "UTC_DATE", "UTC_TIME",
    "UTC_TIMESTAMP", "UUID", "VARIANCE", "VAR_POP", "VAR_SAMP", "VERSION",
    "WEEK", "WEEKDAY", "WEEKOFYEAR", "WITHIN", "X", "Y", "YEAR", "YEARWEEK",
];

/// MySQL column attributes and storage-engine words.
pub const COLUMN_ATTRIBUTES: &[&str] = &[
    "ARCHIVE", "ASCII", "AUTO_INCREMENT", "BDB", "BERKELEYDB", "BINARY",
    "BLACKHOLE", "CSV", "DEFAULT", "EXAMPLE", "FEDERATED", "HEAP",
    "INNOBASE", "INNODB", "ISAM", "MARIA", "MEMORY", "MERGE", "MRG_ISAM",
    "MRG_MYISAM", "MYISAM", "NATIONAL", "NDB", "NDBCLUSTER", "PRECISION",
    "UNDEFINED", "UNICODE", "UNSIGNED", "VARYING", "ZEROFILL",
];

/// Words reserved by the MySQL 5.5 grammar; unusable unquoted as identifiers.
pub const RESERVED_WORDS: &[&str] = &[
    "ACCESSIBLE", "ACTION", "ADD", "AFTER", "AGAINST", "AGGREGATE",
    "ALGORITHM", "ALL", "ALTER", "ANALYSE", "ANALYZE", "AND", "AS", "ASC",
    "AUTOCOMMIT", "AUTO_INCREMENT", "AVG_ROW_LENGTH", "BACKUP", "BEFORE",
    "BEGIN", "BETWEEN", "BINLOG", "BOTH", "BY", "CALL", "CASCADE", "CASE",
    "CHANGE", "CHANGED", "CHARSET", "CHECK", "CHECKSUM", "COLLATE",
    "COLLATION", "COLUMN", "COLUMNS", "COMMENT", "COMMIT", "COMMITTED",
    "COMPRESSED", "CONCURRENT", "CONSTRAINT", "CONTAINS", "CONVERT",
    "CREATE", "CROSS", "CURRENT_TIMESTAMP", "DATABASE", "DATABASES", "DAY",
    "DAY_HOUR", "DAY_MINUTE", "DAY_SECOND", "DECLARE", "DEFINER", "DELAYED",
    "DELAY_KEY_WRITE", "DELETE", "DESC", "DESCRIBE", "DETERMINISTIC",
    "DISTINCT", "DISTINCTROW", "DIV", "DO", "DROP", "DUMPFILE", "DUPLICATE",
    "DYNAMIC", "EACH", "ELSE", "ELSEIF", "ENCLOSED", "END", "ENGINE",
    "ENGINES", "ESCAPE", "ESCAPED", "EVENTS", "EXECUTE", "EXISTS", "EXIT",
    "EXPLAIN", "EXTENDED", "FALSE", "FAST", "FIELDS", "FILE", "FIRST",
    "FIXED", "FLUSH", "FOR", "FORCE", "FOREIGN", "FROM", "FULL", "FULLTEXT",
    "FUNCTION", "GEMINI", "GEMINI_SPIN_RETRIES", "GENERAL", "GLOBAL",
    "GRANT", "GRANTS", "GROUP", "HAVING", "HEAP", "HIGH_PRIORITY", "HOSTS",
    "HOUR", "HOUR_MINUTE", "HOUR_SECOND", "IDENTIFIED", "IF", "IGNORE",
    "IGNORE_SERVER_IDS", "IN", "INDEX", "INDEXES", "INFILE", "INNER",
    "INOUT", "INSERT", "INSERT_ID", "INSERT_METHOD", "INTERVAL", "INTO",
    "INVOKER", "IS", "ISOLATION", "JOIN", "KEY", "KEYS", "KILL",
    "LAST_INSERT_ID", "LEADING", "LEFT", "LIKE", "LIMIT", "LINEAR", "LINES",
    "LOAD", "LOCAL", "LOCK", "LOCKS", "LOGS", "LOW_PRIORITY", "MARIA",
    "MASTER_CONNECT_RETRY", "MASTER_HEARTBEAT_PERIOD", "MASTER_HOST",
    "MASTER_LOG_FILE", "MASTER_LOG_POS", "MASTER_PASSWORD", "MASTER_PORT",
    "MASTER_USER", "MATCH", "MAXVALUE", "MAX_CONNECTIONS_PER_HOUR",
    "MAX_QUERIES_PER_HOUR", "MAX_ROWS", "MAX_UPDATES_PER_HOUR",
    "MAX_USER_CONNECTIONS", "MEDIUM", "MERGE", "MINUTE", "MINUTE_SECOND",
    "MIN_ROWS", "MODE", "MODIFIES", "MODIFY", "MONTH", "MRG_MYISAM",
    "MYISAM", "NAMES", "NATURAL", "NOT", "NULL", "OFFSET", "ON", "OPEN",
    "OPTIMIZE", "OPTION", "OPTIONALLY", "OR", "ORDER", "OUT", "OUTER",
    "OUTFILE", "PACK_KEYS", "PAGE", "PAGE_CHECKSUM", "PARTIAL", "PARTITION",
    "PARTITIONS", "PASSWORD", "PRIMARY", "PRIVILEGES", "PROCEDURE",
    "PROCESS", "PROCESSLIST", "PURGE", "QUICK", "RAID0", "RAID_CHUNKS",
    "RAID_CHUNKSIZE", "RAID_TYPE", "RANGE", "READ", "READS", "READ_ONLY",
    "READ_WRITE", "REFERENCES", "REGEXP", "RELOAD", "RENAME", "REPAIR",
    "REPEATABLE", "REPLACE", "REPLICATION", "RESET", "RESIGNAL", "RESTORE",
    "RESTRICT", "RETURN", "RETURNS", "REVOKE", "RIGHT", "RLIKE", "ROLLBACK",
    "ROW", "ROWS", "ROW_FORMAT", "SECOND", "SECURITY", "SELECT",
    "SEPARATOR", "SERIALIZABLE", "SESSION", "SHARE", "SHOW", "SHUTDOWN",
    "SIGNAL", "SLAVE", "SLOW", "SONAME", "SOUNDS", "SQL",
    "SQL_AUTO_IS_NULL", "SQL_BIG_RESULT", "SQL_BIG_SELECTS",
    "SQL_BIG_TABLES", "SQL_BUFFER_RESULT", "SQL_CACHE",
    "SQL_CALC_FOUND_ROWS", "SQL_LOG_BIN", "SQL_LOG_OFF", "SQL_LOG_UPDATE",
    "SQL_LOW_PRIORITY_UPDATES", "SQL_MAX_JOIN_SIZE", "SQL_NO_CACHE",
    "SQL_QUOTE_SHOW_CREATE", "SQL_SAFE_UPDATES", "SQL_SELECT_LIMIT",
    "SQL_SLAVE_SKIP_COUNTER", "SQL_SMALL_RESULT", "SQL_WARNINGS", "START",
    "STARTING", "STATUS", "STOP", "STORAGE", "STRAIGHT_JOIN", "STRING",
    "STRIPED", "SUPER", "TABLE", "TABLES", "TEMPORARY", "TERMINATED",
    "THEN", "TO", "TRAILING", "TRANSACTIONAL", "TRIGGER", "TRUE",
    "TRUNCATE", "TYPE", "TYPES", "UNCOMMITTED", "UNION", "UNIQUE", "UNLOCK",
    "UPDATE", "USAGE", "USE", "USING", "VALUES", "VARIABLES", "VIEW",
    "WHEN", "WHERE", "WITH", "WORK", "WRITE", "XOR", "YEAR_MONTH",
];

/// Words that may not name a column or table without quotes (5.6 manual).
pub const FORBIDDEN_WORDS: &[&str] = &[
    "ACCESSIBLE", "ADD", "ALL", "ALTER", "ANALYZE", "AND", "AS", "ASC",
    "ASENSITIVE", "BEFORE", "BETWEEN", "BIGINT", "BINARY", "BLOB", "BOTH",
    "BY", "CALL", "CASCADE", "CASE", "CHANGE", "CHAR", "CHARACTER", "CHECK",
    "COLLATE", "COLUMN", "CONDITION", "CONSTRAINT", "CONTINUE", "CONVERT",
    "CREATE", "CROSS", "CURRENT_DATE", "CURRENT_TIME", "CURRENT_TIMESTAMP",
    "CURRENT_USER", "CURSOR", "DATABASE", "DATABASES", "DAY_HOUR",
    "DAY_MICROSECOND", "DAY_MINUTE", "DAY_SECOND", "DEC", "DECIMAL",
    "DECLARE", "DEFAULT", "DELAYED", "DELETE", "DESC", "DESCRIBE",
    "DETERMINISTIC", "DISTINCT", "DISTINCTROW", "DIV", "DOUBLE", "DROP",
    "DUAL", "EACH", "ELSE", "ELSEIF", "ENCLOSED", "ESCAPED", "EXISTS",
    "EXIT", "EXPLAIN", "FALSE", "FETCH", "FLOAT", "FLOAT4", "FLOAT8", "FOR",
    "FORCE", "FOREIGN", "FROM", "FULLTEXT", "GENERAL", "GET", "GRANT",
    "GROUP", "HAVING", "HIGH_PRIORITY", "HOUR_MICROSECOND", "HOUR_MINUTE",
    "HOUR_SECOND", "IF", "IGNORE", "IGNORE_SERVER_IDS", "IN", "INDEX",
    "INFILE", "INNER", "INOUT", "INSENSITIVE", "INSERT", "INT", "INT1",
    "INT2", "INT3", "INT4", "INT8", "INTEGER", "INTERVAL", "INTO",
    "IO_AFTER_GTIDS", "IO_BEFORE_GTIDS", "IS", "ITERATE", "JOIN", "KEY",
    "KEYS", "KILL", "LEADING", "LEAVE", "LEFT", "LIKE", "LIMIT", "LINEAR",
    "LINES", "LOAD", "LOCALTIME", "LOCALTIMESTAMP", "LOCK", "LONG",
    "LONGBLOB", "LONGTEXT", "LOOP", "LOW_PRIORITY", "MASTER_BIND",
    "MASTER_HEARTBEAT_PERIOD", "MASTER_SSL_VERIFY_SERVER_CERT", "MATCH",
    "MAXVALUE", "MEDIUMBLOB", "MEDIUMINT", "MEDIUMTEXT", "MIDDLEINT",
    "MINUTE_MICROSECOND", "MINUTE_SECOND", "MOD", "MODIFIES", "NATURAL",
    "NOT", "NO_WRITE_TO_BINLOG", "NULL", "NUMERIC", "ON", "ONE_SHOT",
    "OPTIMIZE", "OPTION", "OPTIONALLY", "OR", "ORDER", "OUT", "OUTER",
    "OUTFILE", "PARTITION", "PRECISION", "PRIMARY", "PROCEDURE", "PURGE",
    "RANGE", "READ", "READS", "READ_WRITE", "REAL", "REFERENCES", "REGEXP",
    "RELEASE", "RENAME", "REPEAT", "REPLACE", "REQUIRE", "RESIGNAL",
    "RESTRICT", "RETURN", "REVOKE", "RIGHT", "RLIKE", "SCHEMA", "SCHEMAS",
    "SECOND_MICROSECOND", "SELECT", "SENSITIVE", "SEPARATOR", "SET", "SHOW",
    "SIGNAL", "SLOW", "SMALLINT", "SPATIAL", "SPECIFIC", "SQL",
    "SQLEXCEPTION", "SQLSTATE", "SQLWARNING", "SQL_AFTER_GTIDS",
    "SQL_BEFORE_GTIDS", "SQL_BIG_RESULT", "SQL_CALC_FOUND_ROWS",
    "SQL_SMALL_RESULT", "SSL", "STARTING", "STRAIGHT_JOIN", "TABLE",
    "TERMINATED", "THEN", "TINYBLOB", "TINYINT", "TINYTEXT", "TO",
    "TRAILING", "TRIGGER", "TRUE", "UNDO", "UNION", "UNIQUE", "UNLOCK",
    "UNSIGNED", "UPDATE", "USAGE", "USE", "USING", "UTC_DATE", "UTC_TIME",
    "UTC_TIMESTAMP", "VALUES", "VARBINARY", "VARCHAR", "VARCHARACTER",
    "VARYING", "WHEN", "WHERE", "WHILE", "WITH", "WRITE", "XOR",
    "YEAR_MONTH", "ZEROFILL",
];

/// MySQL column data types.
pub const COLUMN_TYPES: &[&str] = &[
    "BIGINT", "BINARY", "BIT", "BLOB", "BOOL", "BOOLEAN", "CHAR",
    "CHARACTER", "DATE", "DATETIME", "DEC", "DECIMAL", "DOUBLE", "ENUM",
    "FLOAT", "FLOAT4", "FLOAT8", "GEOMETRY", "GEOMETRYCOLLECTION", "INT",
    "INT1", "INT2", "INT3", "INT4", "INT8", "INTEGER", "LINESTRING", "LONG",
    "LONGBLOB", "LONGTEXT", "MEDIUMBLOB", "MEDIUMINT", "MEDIUMTEXT",
    "MIDDLEINT", "MULTILINESTRING", "MULTIPOINT", "MULTIPOLYGON", "NCHAR",
    "NUMERIC", "POINT", "POLYGON", "REAL", "SERIAL", "SET", "SMALLINT",
    "TEXT", "TIME", "TIMESTAMP", "TINYBLOB", "TINYINT", "TINYTEXT",
    "VARBINARY", "VARCHAR", "YEAR",
];
