//! Qualitative bands for display.
//!
//! These carry no persisted state; front ends use them to label and colour
//! temperature and air-quality values.

use serde::Serialize;

/// Qualitative temperature band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureBand {
    /// Below 15 °C.
    Cold,
    /// 15 °C to 25 °C.
    Pleasant,
    /// Above 25 °C up to 35 °C.
    Warm,
    /// Above 35 °C.
    VeryHot,
}

impl TemperatureBand {
    /// Band for a temperature in degrees Celsius.
    #[must_use]
    pub fn of(celsius: f64) -> Self {
        if celsius < 15.0 {
            Self::Cold
        } else if celsius <= 25.0 {
            Self::Pleasant
        } else if celsius <= 35.0 {
            Self::Warm
        } else {
            Self::VeryHot
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Cold => "Cold",
            Self::Pleasant => "Pleasant",
            Self::Warm => "Warm",
            Self::VeryHot => "Very hot",
        }
    }

    /// Display colour as a hex string.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Cold => "#2196F3",
            Self::Pleasant => "#4CAF50",
            Self::Warm => "#FFA500",
            Self::VeryHot => "#D32F2F",
        }
    }
}

impl std::fmt::Display for TemperatureBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Qualitative air quality band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AirQualityBand {
    /// Index up to 50.
    Good,
    /// Index up to 100.
    Moderate,
    /// Index up to 150.
    Unhealthy,
    /// Index above 150.
    Hazardous,
}

impl AirQualityBand {
    /// Band for an air quality index.
    ///
    /// The fractional part is dropped before banding, so 50.9 is still good.
    #[must_use]
    pub fn of(index: f64) -> Self {
        let index = index.trunc();
        if index <= 50.0 {
            Self::Good
        } else if index <= 100.0 {
            Self::Moderate
        } else if index <= 150.0 {
            Self::Unhealthy
        } else {
            Self::Hazardous
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Unhealthy => "Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }

    /// Display colour as a hex string.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Good => "#4CAF50",
            Self::Moderate => "#FFA500",
            Self::Unhealthy => "#FF5722",
            Self::Hazardous => "#D32F2F",
        }
    }
}

impl std::fmt::Display for AirQualityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_bands() {
        assert_eq!(TemperatureBand::of(-5.0), TemperatureBand::Cold);
        assert_eq!(TemperatureBand::of(14.9), TemperatureBand::Cold);
        assert_eq!(TemperatureBand::of(15.0), TemperatureBand::Pleasant);
        assert_eq!(TemperatureBand::of(25.0), TemperatureBand::Pleasant);
        assert_eq!(TemperatureBand::of(25.1), TemperatureBand::Warm);
        assert_eq!(TemperatureBand::of(35.0), TemperatureBand::Warm);
        assert_eq!(TemperatureBand::of(35.5), TemperatureBand::VeryHot);
    }

    #[test]
    fn test_air_quality_bands() {
        assert_eq!(AirQualityBand::of(0.0), AirQualityBand::Good);
        assert_eq!(AirQualityBand::of(50.0), AirQualityBand::Good);
        assert_eq!(AirQualityBand::of(51.0), AirQualityBand::Moderate);
        assert_eq!(AirQualityBand::of(100.0), AirQualityBand::Moderate);
        assert_eq!(AirQualityBand::of(150.0), AirQualityBand::Unhealthy);
        assert_eq!(AirQualityBand::of(151.0), AirQualityBand::Hazardous);
        assert_eq!(AirQualityBand::of(500.0), AirQualityBand::Hazardous);
    }

    #[test]
    fn test_air_quality_truncates() {
        assert_eq!(AirQualityBand::of(50.9), AirQualityBand::Good);
        assert_eq!(AirQualityBand::of(150.99), AirQualityBand::Unhealthy);
    }

    #[test]
    fn test_labels_and_colors() {
        assert_eq!(TemperatureBand::VeryHot.to_string(), "Very hot");
        assert_eq!(TemperatureBand::Cold.color(), "#2196F3");
        assert_eq!(AirQualityBand::Unhealthy.to_string(), "Unhealthy");
        assert_eq!(AirQualityBand::Hazardous.color(), "#D32F2F");
    }
}
