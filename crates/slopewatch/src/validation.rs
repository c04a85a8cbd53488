//! Validation of raw environmental readings.
//!
//! Inputs arrive as the text the user typed. [`validate`] checks them in a
//! fixed order and reports only the first failure: presence of all four
//! fields, then temperature parses, then the humidity, pressure and air
//! quality ranges.

use std::fmt;
use std::ops::RangeInclusive;

use thiserror::Error;

/// Accepted relative humidity, in percent.
pub const HUMIDITY_RANGE: RangeInclusive<f64> = 0.0..=100.0;

/// Accepted atmospheric pressure, in hPa.
pub const PRESSURE_RANGE: RangeInclusive<f64> = 800.0..=1200.0;

/// Accepted air quality index.
pub const AIR_QUALITY_RANGE: RangeInclusive<f64> = 0.0..=500.0;

/// One of the four measured fields of a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Air temperature in degrees Celsius.
    Temperature,
    /// Relative humidity in percent.
    Humidity,
    /// Atmospheric pressure in hPa.
    Pressure,
    /// Air quality index.
    AirQuality,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "temperature"),
            Self::Humidity => write!(f, "humidity"),
            Self::Pressure => write!(f, "pressure"),
            Self::AirQuality => write!(f, "air quality"),
        }
    }
}

/// Why a reading was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The field was left blank.
    #[error("please provide the {0}")]
    Missing(Field),

    /// The field does not hold a number.
    #[error("{0} must be a valid number")]
    NotANumber(Field),

    /// The field is not a number inside its accepted range.
    #[error("{field} must be a number between {min} and {max}")]
    OutOfRange {
        /// The offending field.
        field: Field,
        /// Lowest accepted value.
        min: f64,
        /// Highest accepted value.
        max: f64,
    },
}

impl ValidationError {
    /// The field that failed.
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::Missing(field) | Self::NotANumber(field) => *field,
            Self::OutOfRange { field, .. } => *field,
        }
    }
}

/// The four text inputs of the data-entry form, as typed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawReading<'a> {
    /// Temperature input.
    pub temperature: &'a str,
    /// Humidity input.
    pub humidity: &'a str,
    /// Pressure input.
    pub pressure: &'a str,
    /// Air quality input.
    pub air_quality_index: &'a str,
}

/// A reading whose four values passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Pressure in hPa.
    pub pressure: f64,
    /// Air quality index.
    pub air_quality_index: f64,
}

/// Validate the four raw inputs, failing fast on the first problem.
///
/// # Errors
///
/// Returns the first [`ValidationError`] in check order.
pub fn validate(raw: &RawReading<'_>) -> Result<Reading, ValidationError> {
    let fields = [
        (Field::Temperature, raw.temperature),
        (Field::Humidity, raw.humidity),
        (Field::Pressure, raw.pressure),
        (Field::AirQuality, raw.air_quality_index),
    ];
    if let Some((field, _)) = fields.iter().find(|(_, input)| input.trim().is_empty()) {
        return Err(ValidationError::Missing(*field));
    }

    let temperature =
        parse_number(raw.temperature).ok_or(ValidationError::NotANumber(Field::Temperature))?;
    let humidity = parse_in_range(Field::Humidity, raw.humidity, &HUMIDITY_RANGE)?;
    let pressure = parse_in_range(Field::Pressure, raw.pressure, &PRESSURE_RANGE)?;
    let air_quality_index =
        parse_in_range(Field::AirQuality, raw.air_quality_index, &AIR_QUALITY_RANGE)?;

    Ok(Reading {
        temperature,
        humidity,
        pressure,
        air_quality_index,
    })
}

/// Parse a trimmed decimal; `NaN` and infinities are not numbers here.
fn parse_number(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn parse_in_range(
    field: Field,
    input: &str,
    range: &RangeInclusive<f64>,
) -> Result<f64, ValidationError> {
    parse_number(input)
        .filter(|value| range.contains(value))
        .ok_or(ValidationError::OutOfRange {
            field,
            min: *range.start(),
            max: *range.end(),
        })
}
