use crate::error::{PitchError, PitchResult};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    Sunny,
    Cloudy,
    Rainy,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Moisture {
    Low,
    Medium,
    High,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Cracking {
    Minimal,
    Moderate,
    Extensive,
}

/// Everything the engine knows about a surface. Numeric fields are taken as
/// given; the scorer clamps them into range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchConditions {
    pub weather: Weather,
    #[serde(alias = "grassCoverage")]
    pub grass_coverage_percent: i64,
    pub moisture: Moisture,
    pub cracking: Cracking,
    #[serde(default, alias = "venue", skip_serializing_if = "Option::is_none")]
    pub venue_name: Option<String>,
    #[serde(default, alias = "recentMatches")]
    pub recent_matches_played: i64,
}

impl PitchConditions {
    pub fn new(weather: Weather, grass: i64, moisture: Moisture, cracking: Cracking) -> Self {
        Self {
            weather,
            grass_coverage_percent: grass,
            moisture,
            cracking,
            venue_name: None,
            recent_matches_played: 0,
        }
    }

    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue_name = Some(venue.into());
        self
    }

    pub fn with_recent_matches(mut self, matches: i64) -> Self {
        self.recent_matches_played = matches;
        self
    }

    #[inline]
    pub fn clamped_grass(&self) -> i64 {
        self.grass_coverage_percent.clamp(0, 100)
    }

    /// Lowercased venue name, `None` when absent or blank.
    pub fn venue_key(&self) -> Option<String> {
        self.venue_name
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_lowercase)
    }
}

/// Parses one of the condition enums, rejecting anything outside the declared set.
pub fn parse_choice<T>(field: &'static str, raw: &str) -> PitchResult<T>
where
    T: FromStr + IntoEnumIterator + Display,
{
    T::from_str(raw.trim()).map_err(|_| PitchError::UnknownValue {
        field,
        value: raw.to_string(),
        expected: T::iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", "),
    })
}
