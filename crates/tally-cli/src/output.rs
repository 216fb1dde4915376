//! Rendering of calculation results.

use serde::{Serialize, Serializer};
use tally_types::Operation;

/// Renders a value the way the driver prints it.
///
/// Uses the `Debug` float form so integral values keep their trailing `.0`
/// (`8.0`, not `8`).
pub fn format_value(value: f64) -> String {
    format!("{value:?}")
}

/// `"<Label>: <value>"`, e.g. `Addition: 8.0`.
pub fn format_line(operation: Operation, value: f64) -> String {
    format!("{}: {}", operation.label(), format_value(value))
}

/// JSON payload written by `tally calc --json`
///
/// Non-finite numbers have no JSON form, so they are written as the strings
/// `"inf"`, `"-inf"` and `"NaN"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationOutput {
    pub operation: Operation,
    #[serde(serialize_with = "serialize_number")]
    pub x: f64,
    #[serde(serialize_with = "serialize_number")]
    pub y: f64,
    #[serde(serialize_with = "serialize_number")]
    pub value: f64,
}

fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_str(&format_value(*value))
    }
}
