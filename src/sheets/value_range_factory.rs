use std::borrow::Cow;

use google_sheets4::api::ValueRange;
use serde_json::Value;

pub trait ValueRangeFactory {
    fn from_single_row<'a, T: Into<Cow<'a, str>> + Clone>(cells: &[T]) -> Self;
}

fn wrap_value<'a, T: Into<Cow<'a, str>>>(value: T) -> Value {
    Value::String(value.into().into_owned())
}

impl ValueRangeFactory for ValueRange {
    /// A single row of string cells. An empty slice still produces one empty
    /// row, so the update call is issued rather than skipped.
    fn from_single_row<'a, T: Into<Cow<'a, str>> + Clone>(cells: &[T]) -> Self {
        let row: Vec<Value> = cells.iter().map(|cell| wrap_value(cell.clone())).collect();

        Self {
            major_dimension: Some("ROWS".to_string()),
            range: None,
            values: Some(vec![row]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_value() {
        let value = wrap_value("1");
        assert_eq!(value, Value::String("1".to_string()));
    }

    #[test]
    fn test_from_single_row() {
        let value_range = ValueRange::from_single_row(&["1", "2.5", "3"]);

        assert_eq!(
            value_range.major_dimension,
            Some("ROWS".to_string()),
            "Major dimension should be ROWS"
        );
        assert_eq!(value_range.range, None, "Range should be None");
        assert_eq!(
            value_range.values,
            Some(vec![vec![
                Value::String("1".to_string()),
                Value::String("2.5".to_string()),
                Value::String("3".to_string())
            ]]),
            "Values should be a single row, one cell per input"
        );
    }

    #[test]
    fn test_from_single_row_empty() {
        let value_range = ValueRange::from_single_row::<&str>(&[]);

        assert_eq!(
            value_range.values,
            Some(vec![vec![]]),
            "An empty input should still produce one row"
        );
    }
}
