use crate::sql::mysql::data_type::mysql_type_name;
use bigdecimal::ToPrimitive as _;
use model::{
    core::{
        data_type::DataType,
        value::{FieldValue, Value},
    },
    records::row::RowData,
};
use mysql_async::Row as MySqlRow;
use rust_decimal::prelude::ToPrimitive as _;
use tokio_postgres::{Row as PgRow, types::Json as PgJson};
use tracing::warn;

/// A borrowed driver row, decoded column by column into the shared
/// `RowData` model.
pub enum DbRow<'a> {
    MySql(&'a MySqlRow),
    Postgres(&'a PgRow),
}

impl DbRow<'_> {
    pub fn to_row_data(&self, entity: &str) -> RowData {
        let field_values = match self {
            DbRow::MySql(row) => row
                .columns_ref()
                .iter()
                .map(|col| {
                    let name = col.name_str().into_owned();
                    let type_name = mysql_type_name(col.column_type(), col.flags());
                    self.field_value(name, DataType::from_mysql_type(type_name))
                })
                .collect(),
            DbRow::Postgres(row) => row
                .columns()
                .iter()
                .map(|col| {
                    let name = col.name().to_string();
                    let type_name = col.type_().name();
                    self.field_value(name, DataType::from_postgres_type(type_name))
                })
                .collect(),
        };

        RowData::new(entity, field_values)
    }

    fn field_value(&self, name: String, classified: Result<DataType, String>) -> FieldValue {
        let data_type = classified.unwrap_or_else(|err| {
            warn!("{err}, decoding column '{name}' as text");
            DataType::String
        });
        let value = self.get_value(&data_type, &name);
        FieldValue {
            name,
            value,
            data_type,
        }
    }

    pub fn get_value(&self, data_type: &DataType, name: &str) -> Option<Value> {
        match data_type {
            DataType::Short => self.try_get_i16(name).map(|v| Value::Int(v as i64)),
            DataType::Int | DataType::Int4 => self.try_get_i32(name).map(|v| Value::Int(v as i64)),
            DataType::Long | DataType::Year => self.try_get_i64(name).map(Value::Int),
            DataType::ShortUnsigned | DataType::IntUnsigned | DataType::LongLong => {
                self.try_get_u64(name).map(Value::Uint)
            }
            DataType::Float => self.try_get_f32(name).map(|v| Value::Float(v as f64)),
            DataType::Double => self.try_get_f64(name).map(Value::Float),
            DataType::Decimal | DataType::NewDecimal => {
                self.try_get_decimal(name).map(Value::Float)
            }
            DataType::Boolean => self.try_get_bool(name).map(Value::Boolean),
            DataType::String
            | DataType::VarChar
            | DataType::Char
            | DataType::Enum
            | DataType::Set => self.try_get_string(name).map(Value::String),
            DataType::Json => self.try_get_json(name).map(Value::Json),
            DataType::Uuid => self.try_get_uuid(name).map(Value::Uuid),
            DataType::Timestamp => self.try_get_timestamp(name).map(Value::Timestamp),
            DataType::Date => self.try_get_date(name).map(Value::Date),
            DataType::Bytea
            | DataType::Blob
            | DataType::TinyBlob
            | DataType::MediumBlob
            | DataType::LongBlob
            | DataType::Binary
            | DataType::VarBinary
            | DataType::Geometry
            | DataType::Bit => self.try_get_bytes(name).map(Value::Bytes),
            DataType::Time | DataType::Null => None,
        }
    }

    fn try_get_i16(&self, name: &str) -> Option<i16> {
        match self {
            DbRow::MySql(row) => row.get_opt::<i16, _>(name).and_then(|res| res.ok()),
            DbRow::Postgres(row) => row.try_get::<_, i16>(name).ok(),
        }
    }

    fn try_get_i32(&self, name: &str) -> Option<i32> {
        match self {
            DbRow::MySql(row) => row.get_opt::<i32, _>(name).and_then(|res| res.ok()),
            DbRow::Postgres(row) => row.try_get::<_, i32>(name).ok(),
        }
    }

    fn try_get_i64(&self, name: &str) -> Option<i64> {
        match self {
            DbRow::MySql(row) => row.get_opt::<i64, _>(name).and_then(|res| res.ok()),
            DbRow::Postgres(row) => row.try_get::<_, i64>(name).ok(),
        }
    }

    fn try_get_u64(&self, name: &str) -> Option<u64> {
        match self {
            DbRow::MySql(row) => row.get_opt::<u64, _>(name).and_then(|res| res.ok()),
            // Postgres has no unsigned integers; this arm only sees OID columns.
            DbRow::Postgres(row) => row.try_get::<_, u32>(name).map(u64::from).ok(),
        }
    }

    fn try_get_f32(&self, name: &str) -> Option<f32> {
        match self {
            DbRow::MySql(row) => row.get_opt::<f32, _>(name).and_then(|res| res.ok()),
            DbRow::Postgres(row) => row.try_get::<_, f32>(name).ok(),
        }
    }

    fn try_get_f64(&self, name: &str) -> Option<f64> {
        match self {
            DbRow::MySql(row) => row.get_opt::<f64, _>(name).and_then(|res| res.ok()),
            DbRow::Postgres(row) => row.try_get::<_, f64>(name).ok(),
        }
    }

    fn try_get_decimal(&self, name: &str) -> Option<f64> {
        match self {
            DbRow::MySql(row) => row
                .get_opt::<bigdecimal::BigDecimal, _>(name)
                .and_then(|res| res.ok())
                .and_then(|v| v.to_f64()),
            DbRow::Postgres(row) => row
                .try_get::<_, rust_decimal::Decimal>(name)
                .ok()
                .and_then(|v| v.to_f64()),
        }
    }

    fn try_get_string(&self, name: &str) -> Option<String> {
        match self {
            DbRow::MySql(row) => row.get_opt::<String, _>(name).and_then(|res| res.ok()),
            DbRow::Postgres(row) => row.try_get::<_, String>(name).ok(),
        }
    }

    fn try_get_bool(&self, name: &str) -> Option<bool> {
        match self {
            DbRow::MySql(row) => row.get_opt::<bool, _>(name).and_then(|res| res.ok()),
            DbRow::Postgres(row) => row.try_get::<_, bool>(name).ok(),
        }
    }

    fn try_get_json(&self, name: &str) -> Option<serde_json::Value> {
        match self {
            DbRow::MySql(row) => row
                .get_opt::<serde_json::Value, _>(name)
                .and_then(|res| res.ok()),
            DbRow::Postgres(row) => row
                .try_get::<_, PgJson<serde_json::Value>>(name)
                .ok()
                .map(|json| json.0),
        }
    }

    fn try_get_uuid(&self, name: &str) -> Option<uuid::Uuid> {
        match self {
            DbRow::MySql(_) => None,
            DbRow::Postgres(row) => row.try_get::<_, uuid::Uuid>(name).ok(),
        }
    }

    fn try_get_timestamp(&self, name: &str) -> Option<chrono::DateTime<chrono::Utc>> {
        match self {
            DbRow::MySql(row) => row
                .get_opt::<chrono::NaiveDateTime, _>(name)
                .and_then(|res| res.ok())
                .map(|naive| chrono::DateTime::from_naive_utc_and_offset(naive, chrono::Utc)),
            DbRow::Postgres(row) => row
                .try_get::<_, chrono::DateTime<chrono::Utc>>(name)
                .ok()
                .or_else(|| {
                    // TIMESTAMP WITHOUT TIME ZONE decodes as a naive value
                    row.try_get::<_, chrono::NaiveDateTime>(name)
                        .ok()
                        .map(|naive| {
                            chrono::DateTime::from_naive_utc_and_offset(naive, chrono::Utc)
                        })
                }),
        }
    }

    fn try_get_date(&self, name: &str) -> Option<chrono::NaiveDate> {
        match self {
            DbRow::MySql(row) => row
                .get_opt::<chrono::NaiveDate, _>(name)
                .and_then(|res| res.ok()),
            DbRow::Postgres(row) => row.try_get::<_, chrono::NaiveDate>(name).ok(),
        }
    }

    fn try_get_bytes(&self, name: &str) -> Option<Vec<u8>> {
        match self {
            DbRow::MySql(row) => row.get_opt::<Vec<u8>, _>(name).and_then(|res| res.ok()),
            DbRow::Postgres(row) => row.try_get::<_, Vec<u8>>(name).ok(),
        }
    }
}
