use crate::error::{PitchError, PitchResult};
use crate::scorer::Ruleset;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub engine: EngineParams,
    #[command(flatten)]
    pub projection: ProjectionParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineParams {
    #[arg(long, value_enum, default_value_t = Ruleset::Extended)]
    pub ruleset: Ruleset,

    // === MATCH WEAR (extended only) ===
    #[arg(long, default_value_t = 10)]
    pub max_recent_matches: i64,
    #[arg(long, default_value_t = 2.5)]
    pub wear_spin_per_match: f32,
    #[arg(long, default_value_t = 1.5)]
    pub wear_pace_per_match: f32,
    #[arg(long, default_value_t = 1.5)]
    pub wear_batting_per_match: f32,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            ruleset: Ruleset::Extended,
            max_recent_matches: 10,
            wear_spin_per_match: 2.5,
            wear_pace_per_match: 1.5,
            wear_batting_per_match: 1.5,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProjectionParams {
    // 250-300 is par in most conditions
    #[arg(long, default_value_t = 275.0)]
    pub base_runs: f32,
    #[arg(long, default_value_t = 2.5)]
    pub runs_per_point: f32,
    #[arg(long, default_value_t = 20.0)]
    pub venue_swing: f32,
    #[arg(long, default_value_t = 150.0)]
    pub min_runs: f32,
    #[arg(long, default_value_t = 450.0)]
    pub max_runs: f32,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            base_runs: 275.0,
            runs_per_point: 2.5,
            venue_swing: 20.0,
            min_runs: 150.0,
            max_runs: 450.0,
        }
    }
}

macro_rules! update_if_present {
    ($target:ident, $cli:ident, $matches:ident, $($field:ident),+ $(,)?) => {
        $(
            if $matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                $target.$field = $cli.$field.clone();
            }
        )+
    };
}

impl EngineParams {
    pub fn merge_from_cli(&mut self, cli: &EngineParams, matches: &ArgMatches) {
        update_if_present!(
            self,
            cli,
            matches,
            ruleset,
            max_recent_matches,
            wear_spin_per_match,
            wear_pace_per_match,
            wear_batting_per_match,
        );
    }

    fn validate(&self) -> PitchResult<()> {
        if self.max_recent_matches < 0 {
            return Err(PitchError::Config(format!(
                "max_recent_matches must be >= 0 (got {})",
                self.max_recent_matches
            )));
        }
        for (name, v) in [
            ("wear_spin_per_match", self.wear_spin_per_match),
            ("wear_pace_per_match", self.wear_pace_per_match),
            ("wear_batting_per_match", self.wear_batting_per_match),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(PitchError::Config(format!(
                    "{} must be a finite, non-negative number (got {})",
                    name, v
                )));
            }
        }
        Ok(())
    }
}

/// Upper bound for every projection parameter. Keeps the projected range well
/// inside `i32`.
pub const MAX_PROJECTION_PARAM: f32 = 10_000.0;

impl ProjectionParams {
    pub fn merge_from_cli(&mut self, cli: &ProjectionParams, matches: &ArgMatches) {
        update_if_present!(
            self,
            cli,
            matches,
            base_runs,
            runs_per_point,
            venue_swing,
            min_runs,
            max_runs,
        );
    }

    fn validate(&self) -> PitchResult<()> {
        for (name, v) in [
            ("base_runs", self.base_runs),
            ("runs_per_point", self.runs_per_point),
            ("venue_swing", self.venue_swing),
            ("min_runs", self.min_runs),
            ("max_runs", self.max_runs),
        ] {
            if !v.is_finite() || !(0.0..=MAX_PROJECTION_PARAM).contains(&v) {
                return Err(PitchError::Config(format!(
                    "{} must be between 0 and {} (got {})",
                    name, MAX_PROJECTION_PARAM, v
                )));
            }
        }
        if self.min_runs >= self.max_runs {
            return Err(PitchError::Config(format!(
                "min_runs ({}) must be below max_runs ({})",
                self.min_runs, self.max_runs
            )));
        }
        Ok(())
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> PitchResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Overlays only the flags the user actually typed; defaults never win
    /// over values loaded from a profile.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        self.engine.merge_from_cli(&cli.engine, matches);
        self.projection.merge_from_cli(&cli.projection, matches);
    }

    pub fn validate(&self) -> PitchResult<()> {
        self.engine.validate()?;
        self.projection.validate()
    }
}
