use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Column-type classification, used to pick the decode path for each
/// result column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DataType {
    Decimal,
    NewDecimal,
    Short,
    ShortUnsigned,
    Long,
    LongLong,
    Int,
    Int4,
    IntUnsigned,
    Float,
    Double,
    Boolean,
    Null,
    Date,
    Timestamp,
    Time,
    Year,
    VarChar,
    Char,
    String,
    Bit,
    Json,
    Enum,
    Set,
    TinyBlob,
    MediumBlob,
    LongBlob,
    Blob,
    Binary,
    VarBinary,
    Bytea,
    Geometry,
    Uuid,
}

lazy_static! {
    static ref MYSQL_TYPE_MAP: HashMap<&'static str, DataType> = build_mysql_type_map();
    static ref POSTGRES_TYPE_MAP: HashMap<&'static str, DataType> = build_postgres_type_map();
}

impl DataType {
    pub fn from_mysql_type(type_name: &str) -> Result<Self, String> {
        let normalized = Self::normalize_type_name(type_name);
        MYSQL_TYPE_MAP
            .get(normalized.as_str())
            .cloned()
            .ok_or_else(|| format!("Unknown MySQL column type: {type_name}"))
    }

    pub fn from_postgres_type(type_name: &str) -> Result<Self, String> {
        let normalized = Self::normalize_type_name(type_name);
        POSTGRES_TYPE_MAP
            .get(normalized.as_str())
            .cloned()
            .ok_or_else(|| format!("Unknown Postgres column type: {type_name}"))
    }

    fn normalize_type_name(type_name: &str) -> String {
        type_name.trim().to_uppercase()
    }
}

fn build_mysql_type_map() -> HashMap<&'static str, DataType> {
    use DataType::*;

    let entries = [
        ("BOOLEAN", Boolean),
        ("BOOL", Boolean),
        ("TINYINT", Short),
        ("SMALLINT", Short),
        ("TINYINT UNSIGNED", ShortUnsigned),
        ("SMALLINT UNSIGNED", ShortUnsigned),
        ("MEDIUMINT", Int),
        ("MEDIUMINT UNSIGNED", IntUnsigned),
        ("INT", Int),
        ("INTEGER", Int),
        ("INT UNSIGNED", IntUnsigned),
        ("INTEGER UNSIGNED", IntUnsigned),
        ("BIGINT", Long),
        ("BIGINT UNSIGNED", LongLong),
        ("FLOAT", Float),
        ("DOUBLE", Double),
        ("DOUBLE PRECISION", Double),
        ("DECIMAL", Decimal),
        ("NUMERIC", Decimal),
        ("NEWDECIMAL", NewDecimal),
        ("NULL", Null),
        ("TIMESTAMP", Timestamp),
        ("DATETIME", Timestamp),
        ("DATE", Date),
        ("TIME", Time),
        ("YEAR", Year),
        ("BIT", Bit),
        ("ENUM", Enum),
        ("SET", Set),
        ("JSON", Json),
        ("GEOMETRY", Geometry),
        ("CHAR", Char),
        ("CHARACTER", Char),
        ("VARCHAR", VarChar),
        ("CHARACTER VARYING", VarChar),
        ("TEXT", String),
        ("TINYTEXT", String),
        ("MEDIUMTEXT", String),
        ("LONGTEXT", String),
        ("BINARY", Binary),
        ("VARBINARY", VarBinary),
        ("TINYBLOB", TinyBlob),
        ("BLOB", Blob),
        ("MEDIUMBLOB", MediumBlob),
        ("LONGBLOB", LongBlob),
    ];

    let mut map = HashMap::new();
    for (name, data_type) in entries {
        map.insert(name, data_type);
    }
    map
}

fn build_postgres_type_map() -> HashMap<&'static str, DataType> {
    use DataType::*;

    let entries = [
        ("BOOLEAN", Boolean),
        ("BOOL", Boolean),
        ("SMALLINT", Short),
        ("INT2", Short),
        ("INTEGER", Int),
        ("INT", Int),
        ("INT4", Int4),
        ("INT8", Long),
        ("BIGINT", Long),
        ("OID", IntUnsigned),
        ("FLOAT4", Float),
        ("REAL", Float),
        ("FLOAT8", Double),
        ("DOUBLE PRECISION", Double),
        ("NUMERIC", Decimal),
        ("DECIMAL", Decimal),
        ("JSONB", Json),
        ("JSON", Json),
        ("TEXT", String),
        ("NAME", String),
        ("XML", String),
        ("CHARACTER VARYING", VarChar),
        ("VARCHAR", VarChar),
        ("CHARACTER", Char),
        ("CHAR", Char),
        ("BPCHAR", Char),
        ("UUID", Uuid),
        ("BYTEA", Bytea),
        ("BIT", Bit),
        ("DATE", Date),
        ("TIME", Time),
        ("TIME WITHOUT TIME ZONE", Time),
        ("TIME WITH TIME ZONE", Time),
        ("TIMETZ", Time),
        ("TIMESTAMP", Timestamp),
        ("TIMESTAMP WITHOUT TIME ZONE", Timestamp),
        ("TIMESTAMP WITH TIME ZONE", Timestamp),
        ("TIMESTAMPTZ", Timestamp),
        ("GEOMETRY", Geometry),
    ];

    let mut map = HashMap::new();
    for (name, data_type) in entries {
        map.insert(name, data_type);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mysql_type_lookup_is_case_insensitive() {
        assert_eq!(DataType::from_mysql_type("bigint"), Ok(DataType::Long));
        assert_eq!(DataType::from_mysql_type(" VARCHAR "), Ok(DataType::VarChar));
    }

    #[test]
    fn test_postgres_type_lookup() {
        assert_eq!(DataType::from_postgres_type("int4"), Ok(DataType::Int4));
        assert_eq!(DataType::from_postgres_type("timestamptz"), Ok(DataType::Timestamp));
        assert_eq!(DataType::from_postgres_type("uuid"), Ok(DataType::Uuid));
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        assert!(DataType::from_mysql_type("POINTLESS").is_err());
        assert!(DataType::from_postgres_type("_int4").is_err());
    }
}
