use mysql_async::consts::{ColumnFlags, ColumnType};

/// Canonical type name for a MySQL result column, suitable for
/// `DataType::from_mysql_type`. The wire protocol collapses several SQL
/// types into one column type, so the column flags are needed to tell
/// text from blobs and signed from unsigned.
pub fn mysql_type_name(column_type: ColumnType, flags: ColumnFlags) -> &'static str {
    let unsigned = flags.contains(ColumnFlags::UNSIGNED_FLAG);
    let binary = flags.contains(ColumnFlags::BINARY_FLAG);

    match column_type {
        ColumnType::MYSQL_TYPE_DECIMAL | ColumnType::MYSQL_TYPE_NEWDECIMAL => "DECIMAL",
        ColumnType::MYSQL_TYPE_TINY => {
            if unsigned {
                "TINYINT UNSIGNED"
            } else {
                "TINYINT"
            }
        }
        ColumnType::MYSQL_TYPE_SHORT => {
            if unsigned {
                "SMALLINT UNSIGNED"
            } else {
                "SMALLINT"
            }
        }
        ColumnType::MYSQL_TYPE_INT24 => {
            if unsigned {
                "MEDIUMINT UNSIGNED"
            } else {
                "MEDIUMINT"
            }
        }
        ColumnType::MYSQL_TYPE_LONG => {
            if unsigned {
                "INT UNSIGNED"
            } else {
                "INT"
            }
        }
        ColumnType::MYSQL_TYPE_LONGLONG => {
            if unsigned {
                "BIGINT UNSIGNED"
            } else {
                "BIGINT"
            }
        }
        ColumnType::MYSQL_TYPE_FLOAT => "FLOAT",
        ColumnType::MYSQL_TYPE_DOUBLE => "DOUBLE",
        ColumnType::MYSQL_TYPE_NULL => "NULL",
        ColumnType::MYSQL_TYPE_TIMESTAMP | ColumnType::MYSQL_TYPE_TIMESTAMP2 => "TIMESTAMP",
        ColumnType::MYSQL_TYPE_DATETIME | ColumnType::MYSQL_TYPE_DATETIME2 => "DATETIME",
        ColumnType::MYSQL_TYPE_DATE | ColumnType::MYSQL_TYPE_NEWDATE => "DATE",
        ColumnType::MYSQL_TYPE_TIME | ColumnType::MYSQL_TYPE_TIME2 => "TIME",
        ColumnType::MYSQL_TYPE_YEAR => "YEAR",
        ColumnType::MYSQL_TYPE_BIT => "BIT",
        ColumnType::MYSQL_TYPE_JSON => "JSON",
        ColumnType::MYSQL_TYPE_ENUM => "ENUM",
        ColumnType::MYSQL_TYPE_SET => "SET",
        ColumnType::MYSQL_TYPE_TINY_BLOB => {
            if binary {
                "TINYBLOB"
            } else {
                "TINYTEXT"
            }
        }
        ColumnType::MYSQL_TYPE_MEDIUM_BLOB => {
            if binary {
                "MEDIUMBLOB"
            } else {
                "MEDIUMTEXT"
            }
        }
        ColumnType::MYSQL_TYPE_LONG_BLOB => {
            if binary {
                "LONGBLOB"
            } else {
                "LONGTEXT"
            }
        }
        ColumnType::MYSQL_TYPE_BLOB => {
            if binary {
                "BLOB"
            } else {
                "TEXT"
            }
        }
        ColumnType::MYSQL_TYPE_VARCHAR | ColumnType::MYSQL_TYPE_VAR_STRING => {
            if binary {
                "VARBINARY"
            } else {
                "VARCHAR"
            }
        }
        ColumnType::MYSQL_TYPE_STRING => {
            // ENUM and SET values arrive as STRING with a marker flag
            if flags.contains(ColumnFlags::ENUM_FLAG) {
                "ENUM"
            } else if flags.contains(ColumnFlags::SET_FLAG) {
                "SET"
            } else if binary {
                "BINARY"
            } else {
                "CHAR"
            }
        }
        ColumnType::MYSQL_TYPE_GEOMETRY => "GEOMETRY",
        _ => "VARCHAR",
    }
}
