//! Monitored risk areas and their summary statistics.

use chrono::NaiveDate;
use serde::Serialize;

/// Assessed landslide risk of an area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Preventive monitoring only.
    Low,
    /// Some contributing factors present.
    Medium,
    /// Likely to slide under adverse conditions.
    High,
    /// Immediate action needed.
    Critical,
}

impl RiskLevel {
    /// All levels, most severe first.
    pub const ALL: [Self; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    /// Display colour as a hex string.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Low => "#4CAF50",
            Self::Medium => "#FFA500",
            Self::High => "#FF5722",
            Self::Critical => "#D32F2F",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// A monitored hillside area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskArea {
    /// Identifier.
    pub id: u32,
    /// Area name.
    pub name: String,
    /// Assessed risk level.
    pub level: RiskLevel,
    /// Estimated landslide probability, in percent.
    pub probability: u8,
    /// Date of the last assessment.
    pub last_assessment: NaiveDate,
    /// Contributing factors.
    pub risk_factors: Vec<String>,
    /// Number of people who would be affected.
    pub affected_population: u32,
}

/// Counts across a set of risk areas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RiskSummary {
    /// Number of areas.
    pub total: usize,
    /// Areas at critical risk.
    pub critical: usize,
    /// Areas at high risk.
    pub high: usize,
    /// Areas at medium risk.
    pub medium: usize,
    /// Areas at low risk.
    pub low: usize,
    /// People affected across all areas.
    pub affected_population: u64,
}

impl RiskSummary {
    /// Number of areas at `level`.
    #[must_use]
    pub fn count(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::Critical => self.critical,
            RiskLevel::High => self.high,
            RiskLevel::Medium => self.medium,
            RiskLevel::Low => self.low,
        }
    }
}

/// The set of monitored areas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskMap {
    areas: Vec<RiskArea>,
}

impl Default for RiskMap {
    fn default() -> Self {
        Self::new(default_areas())
    }
}

impl RiskMap {
    /// Create a map over the given areas.
    #[must_use]
    pub fn new(areas: Vec<RiskArea>) -> Self {
        Self { areas }
    }

    /// All areas.
    #[must_use]
    pub fn areas(&self) -> &[RiskArea] {
        &self.areas
    }

    /// Areas at the given level, or all of them for `None`.
    #[must_use]
    pub fn filter(&self, level: Option<RiskLevel>) -> Vec<&RiskArea> {
        self.areas
            .iter()
            .filter(|area| level.map_or(true, |level| area.level == level))
            .collect()
    }

    /// Per-level counts and total affected population over all areas.
    #[must_use]
    pub fn summary(&self) -> RiskSummary {
        self.areas
            .iter()
            .fold(RiskSummary::default(), |mut summary, area| {
                summary.total += 1;
                match area.level {
                    RiskLevel::Critical => summary.critical += 1,
                    RiskLevel::High => summary.high += 1,
                    RiskLevel::Medium => summary.medium += 1,
                    RiskLevel::Low => summary.low += 1,
                }
                summary.affected_population += u64::from(area.affected_population);
                summary
            })
    }
}

fn area(
    id: u32,
    name: &str,
    level: RiskLevel,
    probability: u8,
    last_assessment: (i32, u32, u32),
    risk_factors: &[&str],
    affected_population: u32,
) -> RiskArea {
    let (y, m, d) = last_assessment;
    RiskArea {
        id,
        name: name.to_string(),
        level,
        probability,
        last_assessment: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        risk_factors: risk_factors.iter().map(ToString::to_string).collect(),
        affected_population,
    }
}

fn default_areas() -> Vec<RiskArea> {
    vec![
        area(
            1,
            "North Slope - Sector A",
            RiskLevel::Critical,
            85,
            (2024, 1, 15),
            &["Heavy rainfall", "Saturated soil", "Deforestation"],
            120,
        ),
        area(
            2,
            "Morro do Sol",
            RiskLevel::High,
            72,
            (2024, 1, 14),
            &["Erosion", "Irregular construction"],
            85,
        ),
        area(
            3,
            "Vale Verde",
            RiskLevel::Medium,
            45,
            (2024, 1, 13),
            &["Inadequate drainage"],
            60,
        ),
        area(
            4,
            "West Hill",
            RiskLevel::Low,
            25,
            (2024, 1, 12),
            &["Preventive monitoring"],
            30,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_map() {
        let map = RiskMap::default();
        assert_eq!(map.areas().len(), 4);
        assert_eq!(
            map.areas()[0].last_assessment,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_filter_all() {
        let map = RiskMap::default();
        assert_eq!(map.filter(None).len(), 4);
    }

    #[test]
    fn test_filter_by_level() {
        let map = RiskMap::default();
        let critical = map.filter(Some(RiskLevel::Critical));
        assert_eq!(critical.len(), 1);
        assert_eq!(critical[0].probability, 85);
    }

    #[test]
    fn test_filter_no_match() {
        let map = RiskMap::new(Vec::new());
        assert!(map.filter(Some(RiskLevel::Low)).is_empty());
    }

    #[test]
    fn test_summary() {
        let summary = RiskMap::default().summary();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.critical, 1);
        assert_eq!(summary.high, 1);
        assert_eq!(summary.medium, 1);
        assert_eq!(summary.low, 1);
        assert_eq!(summary.affected_population, 295);
        assert_eq!(summary.count(RiskLevel::High), 1);
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(RiskMap::new(Vec::new()).summary(), RiskSummary::default());
    }

    #[test]
    fn test_level_display_and_order() {
        assert_eq!(RiskLevel::Critical.to_string(), "critical");
        assert!(RiskLevel::Critical > RiskLevel::Low);
        assert_eq!(RiskLevel::ALL[0], RiskLevel::Critical);
        assert_eq!(RiskLevel::Medium.color(), "#FFA500");
    }
}
