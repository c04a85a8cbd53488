//! State behind the environmental data entry screen.

use tracing::{debug, info};

use crate::error::Result;
use crate::record::EnvironmentalRecord;
use crate::storage::RecordStore;
use crate::validation::{validate, RawReading};

/// The four text inputs of the data entry form.
///
/// Inputs survive a failed submission untouched and are only cleared once a
/// record has been stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataEntryForm {
    /// Temperature input.
    pub temperature: String,
    /// Humidity input.
    pub humidity: String,
    /// Pressure input.
    pub pressure: String,
    /// Air quality input.
    pub air_quality_index: String,
}

impl DataEntryForm {
    /// Create an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a form pre-filled with the given inputs.
    #[must_use]
    pub fn with_inputs(
        temperature: impl Into<String>,
        humidity: impl Into<String>,
        pressure: impl Into<String>,
        air_quality_index: impl Into<String>,
    ) -> Self {
        Self {
            temperature: temperature.into(),
            humidity: humidity.into(),
            pressure: pressure.into(),
            air_quality_index: air_quality_index.into(),
        }
    }

    /// The inputs as a raw reading.
    #[must_use]
    pub fn raw(&self) -> RawReading<'_> {
        RawReading {
            temperature: &self.temperature,
            humidity: &self.humidity,
            pressure: &self.pressure,
            air_quality_index: &self.air_quality_index,
        }
    }

    /// Empty all four inputs.
    pub fn reset(&mut self) {
        self.temperature.clear();
        self.humidity.clear();
        self.pressure.clear();
        self.air_quality_index.clear();
    }

    /// Validate the inputs and append a new record to `store`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Validation`] without touching the store when an
    /// input is rejected, or [`crate::Error::Storage`] when the append fails.
    /// The inputs are kept in both cases.
    pub async fn submit(&mut self, store: &RecordStore) -> Result<EnvironmentalRecord> {
        let reading = validate(&self.raw())?;

        let record = store.append(EnvironmentalRecord::new(reading)).await?;
        info!("Environmental data saved as record {}", record.id);
        self.reset();
        debug!("Entry form cleared");
        Ok(record)
    }
}
