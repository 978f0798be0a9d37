// File: crates/history-charts/src/extract.rs
// Summary: Projects one field across the dataset into a nullable numeric series.

use serde_json::Value;
use tracing::warn;

use crate::model::{Field, HistoryDataset};

/// One value per record, aligned by index with the dataset; `None` is a gap.
pub type Series = Vec<Option<f64>>;

/// Numeric value of a present field.
///
/// Numbers pass through, strings are trimmed and parsed as decimals, booleans
/// become `1`/`0`. Anything else (unparseable or empty strings, arrays,
/// objects, non-finite results) has no numeric value and is plotted as a gap.
pub fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    };
    n.filter(|v| v.is_finite())
}

/// Project `field` across every record. Absent and null values stay `None`,
/// never zero.
pub fn extract_series(dataset: &HistoryDataset, field: Field) -> Series {
    dataset
        .iter()
        .map(|record| {
            let raw = record.value(field)?;
            let n = coerce_number(raw);
            if n.is_none() {
                warn!(date = %record.date, %field, value = %raw, "non-numeric value plotted as a gap");
            }
            n
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coercion_rules() {
        assert_eq!(coerce_number(&json!(42)), Some(42.0));
        assert_eq!(coerce_number(&json!(1.5)), Some(1.5));
        assert_eq!(coerce_number(&json!(" 1200 ")), Some(1200.0));
        assert_eq!(coerce_number(&json!(true)), Some(1.0));
        assert_eq!(coerce_number(&json!(false)), Some(0.0));
        assert_eq!(coerce_number(&json!("")), None);
        assert_eq!(coerce_number(&json!("1,234")), None);
        assert_eq!(coerce_number(&json!("abc")), None);
        assert_eq!(coerce_number(&json!("inf")), None);
        assert_eq!(coerce_number(&json!([1])), None);
        assert_eq!(coerce_number(&json!({"n": 1})), None);
        assert_eq!(coerce_number(&Value::Null), None);
    }
}
