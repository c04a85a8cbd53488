//! Averages over a list of records.

use serde::Serialize;

use crate::record::EnvironmentalRecord;

/// Mean values across a set of records.
///
/// Temperature, humidity and pressure are rounded to one decimal place; the
/// air quality index is rounded to a whole number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aggregate {
    /// Mean temperature.
    pub temperature: f64,
    /// Mean humidity.
    pub humidity: f64,
    /// Mean pressure.
    pub pressure: f64,
    /// Mean air quality index.
    pub air_quality_index: f64,
    /// Number of records averaged.
    pub total_records: usize,
}

/// Average the four measured fields across `records`.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn aggregate(records: &[EnvironmentalRecord]) -> Option<Aggregate> {
    if records.is_empty() {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    let n = records.len() as f64;
    let mean =
        |value: fn(&EnvironmentalRecord) -> f64| records.iter().map(value).sum::<f64>() / n;

    Some(Aggregate {
        temperature: round_to(mean(|r| r.temperature), 1),
        humidity: round_to(mean(|r| r.humidity), 1),
        pressure: round_to(mean(|r| r.pressure), 1),
        air_quality_index: round_to(mean(|r| r.air_quality_index), 0),
        total_records: records.len(),
    })
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
