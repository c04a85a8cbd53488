//! The environmental record persisted by the history store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::validation::Reading;

/// One saved reading of temperature, humidity, pressure and air quality.
///
/// Serialized with camel-case field names. The Portuguese field names used by
/// the mobile app's history list are accepted when reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalRecord {
    /// Identifier derived from the creation time, in epoch milliseconds.
    pub id: String,

    /// Temperature in degrees Celsius.
    #[serde(alias = "temperatura", deserialize_with = "number_or_string")]
    pub temperature: f64,

    /// Relative humidity in percent.
    #[serde(alias = "umidade", deserialize_with = "number_or_string")]
    pub humidity: f64,

    /// Atmospheric pressure in hPa.
    #[serde(alias = "pressao", deserialize_with = "number_or_string")]
    pub pressure: f64,

    /// Air quality index.
    #[serde(alias = "qualidadeAr", deserialize_with = "number_or_string")]
    pub air_quality_index: f64,

    /// When the reading was recorded.
    #[serde(alias = "dataHora")]
    pub recorded_at: DateTime<Utc>,
}

impl EnvironmentalRecord {
    /// Create a record for a validated reading, stamped with the current time.
    #[must_use]
    pub fn new(reading: Reading) -> Self {
        Self::recorded_at(reading, Utc::now())
    }

    /// Create a record for a reading taken at the given time.
    #[must_use]
    pub fn recorded_at(reading: Reading, recorded_at: DateTime<Utc>) -> Self {
        Self {
            id: recorded_at.timestamp_millis().to_string(),
            temperature: reading.temperature,
            humidity: reading.humidity,
            pressure: reading.pressure,
            air_quality_index: reading.air_quality_index,
            recorded_at,
        }
    }

    /// The four measured values of this record.
    #[must_use]
    pub fn reading(&self) -> Reading {
        Reading {
            temperature: self.temperature,
            humidity: self.humidity,
            pressure: self.pressure,
            air_quality_index: self.air_quality_index,
        }
    }
}

/// Accept a finite JSON number, or a string holding one.
///
/// Lists written by the mobile app kept the raw text inputs. Non-finite values
/// are refused since they cannot be written back as JSON numbers.
fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Value {
        Number(f64),
        Text(String),
    }

    let value = match Value::deserialize(deserializer)? {
        Value::Number(n) => Some(n),
        Value::Text(s) => s.trim().parse::<f64>().ok(),
    };
    value
        .filter(|n| n.is_finite())
        .ok_or_else(|| serde::de::Error::custom("expected a finite number"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_reading() -> Reading {
        Reading {
            temperature: 22.5,
            humidity: 45.0,
            pressure: 1013.2,
            air_quality_index: 42.0,
        }
    }

    #[test]
    fn test_id_from_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let record = EnvironmentalRecord::recorded_at(sample_reading(), at);
        assert_eq!(record.id, at.timestamp_millis().to_string());
        assert_eq!(record.recorded_at, at);
        assert_eq!(record.reading(), sample_reading());
    }

    #[test]
    fn test_new_uses_current_time() {
        let before = Utc::now();
        let record = EnvironmentalRecord::new(sample_reading());
        assert!(record.recorded_at >= before);
        assert!(record.recorded_at <= Utc::now());
    }

    #[test]
    fn test_serialized_field_names() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let record = EnvironmentalRecord::recorded_at(sample_reading(), at);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["id"], "1705320000000");
        assert_eq!(json["airQualityIndex"], 42.0);
        assert_eq!(json["recordedAt"], "2024-01-15T12:00:00Z");
        assert!(json.get("air_quality_index").is_none());
    }

    #[test]
    fn test_deserialize_numbers_as_strings() {
        let json = r#"{
            "id": "1705320000000",
            "temperature": "25.5",
            "humidity": "60",
            "pressure": " 1013.25",
            "airQualityIndex": 50,
            "recordedAt": "2024-01-15T12:00:00.000Z"
        }"#;
        let record: EnvironmentalRecord = serde_json::from_str(json).unwrap();
        assert!((record.temperature - 25.5).abs() < f64::EPSILON);
        assert!((record.pressure - 1013.25).abs() < f64::EPSILON);
        assert!((record.air_quality_index - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deserialize_rejects_garbage_number() {
        let json = r#"{
            "id": "1",
            "temperature": "hot",
            "humidity": 1,
            "pressure": 900,
            "airQualityIndex": 1,
            "recordedAt": "2024-01-15T12:00:00Z"
        }"#;
        assert!(serde_json::from_str::<EnvironmentalRecord>(json).is_err());
    }

    #[test]
    fn test_deserialize_mobile_field_names() {
        let json = r#"{
            "id": "1705305600000",
            "temperatura": "25.5",
            "umidade": "60",
            "pressao": "1013.25",
            "qualidadeAr": "50",
            "dataHora": "2024-01-15T08:00:00.000Z"
        }"#;
        let record: EnvironmentalRecord = serde_json::from_str(json).unwrap();
        assert!((record.temperature - 25.5).abs() < f64::EPSILON);
        assert!((record.humidity - 60.0).abs() < f64::EPSILON);
        assert!((record.pressure - 1013.25).abs() < f64::EPSILON);
        assert!((record.air_quality_index - 50.0).abs() < f64::EPSILON);
        assert_eq!(
            record.recorded_at,
            Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap()
        );

        // written back under the current names
        let written = serde_json::to_value(&record).unwrap();
        assert_eq!(written["temperature"], 25.5);
        assert!(written.get("temperatura").is_none());
    }

    #[test]
    fn test_deserialize_rejects_non_finite_text() {
        for text in ["NaN", "inf", "-Infinity"] {
            let json = format!(
                r#"{{"id":"1","temperature":"{text}","humidity":1,"pressure":900,
                    "airQualityIndex":1,"recordedAt":"2024-01-15T12:00:00Z"}}"#
            );
            assert!(
                serde_json::from_str::<EnvironmentalRecord>(&json).is_err(),
                "{text} accepted"
            );
        }
    }
}
