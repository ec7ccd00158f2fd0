//! Service layer sitting between callers (CLI, an HTTP handler, a batch job)
//! and the scorer. This is where presence validation and enum parsing live;
//! the scorer itself never fails.

use crate::conditions::{parse_choice, Cracking, Moisture, PitchConditions, Weather};
use crate::config::Config;
use crate::error::{PitchError, PitchResult};
use crate::scorer::{AnalysisResult, PitchScorer, Ratings, Ruleset};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Caller-supplied fields, all optional until validated. Also used as the row
/// type for CSV batches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    #[serde(default)]
    pub weather: Option<String>,
    #[serde(default, alias = "grassCoverage")]
    pub grass_coverage_percent: Option<i64>,
    #[serde(default)]
    pub moisture: Option<String>,
    #[serde(default)]
    pub cracking: Option<String>,
    #[serde(default, alias = "venue")]
    pub venue_name: Option<String>,
    #[serde(default, alias = "recentMatches")]
    pub recent_matches_played: Option<i64>,
}

impl AnalysisRequest {
    pub fn into_conditions(self) -> PitchResult<PitchConditions> {
        let weather: Weather =
            parse_choice("weather", required(self.weather.as_deref(), "weather")?)?;
        let grass = self
            .grass_coverage_percent
            .ok_or(PitchError::MissingField("grassCoveragePercent"))?;
        let moisture: Moisture =
            parse_choice("moisture", required(self.moisture.as_deref(), "moisture")?)?;
        let cracking: Cracking =
            parse_choice("cracking", required(self.cracking.as_deref(), "cracking")?)?;

        Ok(PitchConditions {
            weather,
            grass_coverage_percent: grass,
            moisture,
            cracking,
            venue_name: self.venue_name.filter(|v| !v.trim().is_empty()),
            recent_matches_played: self.recent_matches_played.unwrap_or(0),
        })
    }

    /// Fields present here replace those of `previous`; absent ones are kept.
    pub fn apply_to(&self, previous: &PitchConditions) -> PitchResult<PitchConditions> {
        let mut next = previous.clone();

        if let Some(raw) = self.weather.as_deref() {
            next.weather = parse_choice("weather", raw)?;
        }
        if let Some(grass) = self.grass_coverage_percent {
            next.grass_coverage_percent = grass;
        }
        if let Some(raw) = self.moisture.as_deref() {
            next.moisture = parse_choice("moisture", raw)?;
        }
        if let Some(raw) = self.cracking.as_deref() {
            next.cracking = parse_choice("cracking", raw)?;
        }
        if let Some(venue) = self.venue_name.as_deref() {
            next.venue_name = Some(venue.to_string()).filter(|v| !v.trim().is_empty());
        }
        if let Some(matches) = self.recent_matches_played {
            next.recent_matches_played = matches;
        }

        Ok(next)
    }
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> PitchResult<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(PitchError::MissingField(field)),
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub ruleset: Ruleset,
    pub conditions: PitchConditions,
    pub analysis: AnalysisResult,
    pub ratings: Ratings,
}

/// Holds its configuration explicitly; nothing is read from globals.
pub struct PitchAnalysisService {
    scorer: PitchScorer,
}

impl PitchAnalysisService {
    pub fn new(config: Config) -> PitchResult<Self> {
        let scorer = PitchScorer::new(config)?;
        info!("Pitch analysis service ready (ruleset: {})", scorer.ruleset());
        Ok(Self { scorer })
    }

    pub fn scorer(&self) -> &PitchScorer {
        &self.scorer
    }

    pub fn analyze_conditions(&self, conditions: PitchConditions) -> AnalysisReport {
        let analysis = self.scorer.analyze(&conditions);
        AnalysisReport {
            ruleset: self.scorer.ruleset(),
            ratings: analysis.scores.ratings(),
            conditions,
            analysis,
        }
    }

    pub fn analyze_request(&self, request: AnalysisRequest) -> PitchResult<AnalysisReport> {
        let conditions = request.into_conditions()?;
        Ok(self.analyze_conditions(conditions))
    }

    /// Re-runs an earlier analysis with some inputs changed.
    pub fn revise_request(
        &self,
        previous: &PitchConditions,
        patch: &AnalysisRequest,
    ) -> PitchResult<AnalysisReport> {
        let conditions = patch.apply_to(previous)?;
        Ok(self.analyze_conditions(conditions))
    }

    /// Results come back in input order; a bad row does not stop the rest.
    pub fn analyze_batch(&self, requests: &[AnalysisRequest]) -> Vec<PitchResult<AnalysisReport>> {
        let results: Vec<_> = requests
            .par_iter()
            .map(|req| self.analyze_request(req.clone()))
            .collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            warn!("{} of {} batch rows were rejected", failed, requests.len());
        }
        results
    }
}
