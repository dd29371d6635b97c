//! Monetary rounding and CSV formatting.

use serde::Serializer;

/// Round to two decimal places, the precision of every monetary column.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Serialize a monetary amount with a fixed scale of two.
pub fn two_decimals<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{value:.2}"))
}
