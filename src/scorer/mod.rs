pub mod calibration;
pub mod classify;
pub mod engine;
pub mod projection;
pub mod strategy;
pub mod types;
pub mod venues;

pub use self::calibration::{Adjustment, Calibration, Ruleset};
pub use self::types::{AnalysisResult, Archetype, Ratings, RunRange, ScoreBreakdown, ScoreBundle};
use crate::conditions::PitchConditions;
use crate::config::Config;
use crate::error::PitchResult;

/// Stateless scorer. Cheap to clone and safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct PitchScorer {
    config: Config,
}

impl PitchScorer {
    pub fn new(config: Config) -> PitchResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn with_ruleset(ruleset: Ruleset) -> Self {
        let mut config = Config::default();
        config.engine.ruleset = ruleset;
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ruleset(&self) -> Ruleset {
        self.config.engine.ruleset
    }

    pub fn calibration(&self) -> &'static Calibration {
        self.config.engine.ruleset.calibration()
    }

    /// Clamped balance scores only.
    pub fn score(&self, conditions: &PitchConditions) -> ScoreBundle {
        engine::score(self, conditions)
    }

    /// Per-factor contributions for reports.
    pub fn score_debug(&self, conditions: &PitchConditions) -> ScoreBreakdown {
        engine::score_debug(self, conditions)
    }

    pub fn analyze(&self, conditions: &PitchConditions) -> AnalysisResult {
        engine::analyze(self, conditions)
    }
}

/// Analyses with the default (extended) calibration.
pub fn analyze(conditions: &PitchConditions) -> AnalysisResult {
    PitchScorer::default().analyze(conditions)
}
