use crate::error::CliError;
use model::{core::value::Value, records::row::RowData};

/// Tracks the high-water mark of the index column over one run and applies
/// the exclusive offset filter. Holds no state between invocations; the
/// caller feeds the emitted checkpoint back as the next run's offset.
pub struct CheckpointTracker {
    column: String,
    offset: Option<f64>,
    max: Option<Max>,
}

struct Max {
    coerced: f64,
    raw: Value,
}

impl CheckpointTracker {
    pub fn new(column: String, offset: Option<f64>) -> Self {
        CheckpointTracker {
            column,
            offset,
            max: None,
        }
    }

    /// Returns the raw index value when the row passes the offset filter,
    /// `None` when the row is at or below the offset. The maximum only
    /// tracks rows that pass.
    pub fn observe(&mut self, row: &RowData) -> Result<Option<Value>, CliError> {
        let field = row
            .get(&self.column)
            .ok_or_else(|| CliError::IndexMissing(self.column.clone()))?;
        let raw = field.value.clone().unwrap_or(Value::Null);
        let coerced = raw.as_f64().ok_or_else(|| CliError::IndexNotNumeric {
            column: self.column.clone(),
            value: raw.to_string(),
        })?;

        if let Some(offset) = self.offset
            && coerced <= offset
        {
            return Ok(None);
        }

        match &self.max {
            Some(max) if coerced <= max.coerced => {}
            _ => {
                self.max = Some(Max {
                    coerced,
                    raw: raw.clone(),
                });
            }
        }

        Ok(Some(raw))
    }

    /// The raw value of the maximum admitted index, for the CHECKPOINT line.
    pub fn checkpoint(&self) -> Option<&Value> {
        self.max.as_ref().map(|max| &max.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::core::{data_type::DataType, value::FieldValue};

    fn make_row(id: i64, name: &str) -> RowData {
        RowData::new(
            "users",
            vec![
                FieldValue {
                    name: "id".to_string(),
                    value: Some(Value::Int(id)),
                    data_type: DataType::Long,
                },
                FieldValue {
                    name: "name".to_string(),
                    value: Some(Value::String(name.to_string())),
                    data_type: DataType::VarChar,
                },
            ],
        )
    }

    #[test]
    fn test_tracks_maximum_without_offset() {
        let mut tracker = CheckpointTracker::new("id".to_string(), None);
        for (id, name) in [(1, "a"), (3, "c"), (2, "b")] {
            assert!(tracker.observe(&make_row(id, name)).unwrap().is_some());
        }
        assert_eq!(tracker.checkpoint(), Some(&Value::Int(3)));
    }

    #[test]
    fn test_offset_filter_is_strictly_greater() {
        let mut tracker = CheckpointTracker::new("id".to_string(), Some(2.0));
        assert_eq!(tracker.observe(&make_row(1, "a")).unwrap(), None);
        assert_eq!(tracker.observe(&make_row(2, "b")).unwrap(), None);
        assert_eq!(
            tracker.observe(&make_row(3, "c")).unwrap(),
            Some(Value::Int(3))
        );
        assert_eq!(tracker.checkpoint(), Some(&Value::Int(3)));
    }

    #[test]
    fn test_no_checkpoint_when_everything_filtered() {
        let mut tracker = CheckpointTracker::new("id".to_string(), Some(10.0));
        assert_eq!(tracker.observe(&make_row(3, "c")).unwrap(), None);
        assert_eq!(tracker.checkpoint(), None);
    }

    #[test]
    fn test_no_checkpoint_on_empty_result() {
        let tracker = CheckpointTracker::new("id".to_string(), None);
        assert_eq!(tracker.checkpoint(), None);
    }

    #[test]
    fn test_missing_index_column_is_an_error() {
        let mut tracker = CheckpointTracker::new("nope".to_string(), None);
        let err = tracker.observe(&make_row(1, "a")).unwrap_err();
        assert!(matches!(err, CliError::IndexMissing(_)));
    }

    #[test]
    fn test_non_numeric_index_is_an_error() {
        let mut tracker = CheckpointTracker::new("name".to_string(), None);
        let err = tracker.observe(&make_row(1, "a")).unwrap_err();
        assert!(matches!(err, CliError::IndexNotNumeric { .. }));
    }

    #[test]
    fn test_string_index_values_coerce() {
        let row = RowData::new(
            "",
            vec![FieldValue {
                name: "seq".to_string(),
                value: Some(Value::String("41".to_string())),
                data_type: DataType::VarChar,
            }],
        );
        let mut tracker = CheckpointTracker::new("seq".to_string(), Some(40.0));
        assert_eq!(
            tracker.observe(&row).unwrap(),
            Some(Value::String("41".to_string()))
        );
        assert_eq!(tracker.checkpoint(), Some(&Value::String("41".to_string())));
    }
}
