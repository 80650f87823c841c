use crate::core::value::{FieldValue, Value};
use serde::{Deserialize, Serialize};

/// One result row: the originating entity (table name, or empty for an
/// ad-hoc query) plus its columns in result-set order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowData {
    pub entity: String,
    pub field_values: Vec<FieldValue>,
}

impl RowData {
    pub fn new(entity: &str, field_values: Vec<FieldValue>) -> Self {
        RowData {
            entity: entity.to_string(),
            field_values,
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.field_values
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(field))
    }

    pub fn get_value(&self, field: &str) -> Value {
        self.get(field)
            .and_then(|f| f.value.clone())
            .unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data_type::DataType;

    fn make_row() -> RowData {
        RowData::new(
            "users",
            vec![
                FieldValue {
                    name: "id".to_string(),
                    value: Some(Value::Int(1)),
                    data_type: DataType::Long,
                },
                FieldValue {
                    name: "name".to_string(),
                    value: Some(Value::String("a".to_string())),
                    data_type: DataType::VarChar,
                },
            ],
        )
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let row = make_row();
        assert!(row.get("ID").is_some());
        assert!(row.get("missing").is_none());
    }

    #[test]
    fn test_get_value_defaults_to_null() {
        let row = make_row();
        assert_eq!(row.get_value("id"), Value::Int(1));
        assert_eq!(row.get_value("missing"), Value::Null);
    }

    #[test]
    fn test_column_order_is_preserved() {
        let row = make_row();
        let names: Vec<&str> = row.field_values.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "name"]);
    }
}
