use model::records::row::RowData;
use std::str::FromStr;

/// Row output format, selected with `--output-format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Flat `key=value` pairs joined by single spaces, no escaping.
    Dbx,
    /// One single-line JSON object per row, keys in column order.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dbx" => Ok(OutputFormat::Dbx),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {other}")),
        }
    }
}

impl OutputFormat {
    pub fn format_row(&self, row: &RowData) -> String {
        match self {
            OutputFormat::Dbx => dbx_line(row),
            OutputFormat::Json => json_line(row),
        }
    }
}

fn dbx_line(row: &RowData) -> String {
    row.field_values
        .iter()
        .map(|field| {
            let value = field
                .value
                .as_ref()
                .map(|v| v.to_string())
                .unwrap_or_default();
            format!("{}={}", field.name, value)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn json_line(row: &RowData) -> String {
    let mut object = serde_json::Map::new();
    for field in &row.field_values {
        let value = field
            .value
            .as_ref()
            .map(|v| v.to_json())
            .unwrap_or(serde_json::Value::Null);
        object.insert(field.name.clone(), value);
    }
    serde_json::Value::Object(object).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::core::{
        data_type::DataType,
        value::{FieldValue, Value},
    };

    fn make_row() -> RowData {
        RowData::new(
            "users",
            vec![
                FieldValue {
                    name: "id".to_string(),
                    value: Some(Value::Int(3)),
                    data_type: DataType::Long,
                },
                FieldValue {
                    name: "name".to_string(),
                    value: Some(Value::String("c".to_string())),
                    data_type: DataType::VarChar,
                },
                FieldValue {
                    name: "active".to_string(),
                    value: Some(Value::Boolean(true)),
                    data_type: DataType::Boolean,
                },
            ],
        )
    }

    #[test]
    fn test_format_name_selection() {
        assert_eq!(OutputFormat::from_str("dbx"), Ok(OutputFormat::Dbx));
        assert_eq!(OutputFormat::from_str("JSON"), Ok(OutputFormat::Json));
        assert!(OutputFormat::from_str("xml").is_err());
    }

    #[test]
    fn test_dbx_joins_columns_in_order() {
        let line = OutputFormat::Dbx.format_row(&make_row());
        assert_eq!(line, "id=3 name=c active=true");
    }

    #[test]
    fn test_dbx_does_not_escape_values() {
        let row = RowData::new(
            "",
            vec![FieldValue {
                name: "note".to_string(),
                value: Some(Value::String("has spaces and = signs".to_string())),
                data_type: DataType::String,
            }],
        );
        assert_eq!(
            OutputFormat::Dbx.format_row(&row),
            "note=has spaces and = signs"
        );
    }

    #[test]
    fn test_dbx_null_renders_empty() {
        let row = RowData::new(
            "",
            vec![FieldValue {
                name: "gone".to_string(),
                value: Some(Value::Null),
                data_type: DataType::Null,
            }],
        );
        assert_eq!(OutputFormat::Dbx.format_row(&row), "gone=");
    }

    #[test]
    fn test_json_line_parses_back_to_the_row() {
        let line = OutputFormat::Json.format_row(&make_row());
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!({"id": 3, "name": "c", "active": true})
        );
    }

    #[test]
    fn test_json_keeps_column_order() {
        let line = OutputFormat::Json.format_row(&make_row());
        assert_eq!(line, r#"{"id":3,"name":"c","active":true}"#);
    }
}
