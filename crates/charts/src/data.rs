//! The name and value pairs a pie series is made of.

use serde::Serialize;
use serde_json::Value;

/// A single wedge of a pie series: a category name and its value.
///
/// The value is kept opaque and forwarded to the chart as-is; it is only
/// interpreted when a sorted build needs to order entries, see
/// [coerced_value].
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PieSlice {
    /// Category name, shown on the wedge label and in the legend.
    pub name: String,
    /// Wedge value.
    pub value: Value,
}

impl PieSlice {
    /// Creates a slice from a name and any value that converts to JSON.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> PieSlice {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Converts an opaque value into an `f64` for ordering.
///
/// Numbers convert to themselves, numeric strings are parsed and booleans
/// map to one and zero. Everything else, including strings that do not
/// parse, converts to `0.0`; the fallback is logged at debug level rather
/// than raised, so sorting never fails on odd data.
pub fn coerced_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.parse().unwrap_or_else(|_| {
            log::debug!("value {s:?} is not numeric, ordering it as 0.0");
            0.0
        }),
        Value::Bool(true) => 1.0,
        Value::Bool(false) => 0.0,
        _ => 0.0,
    }
}
