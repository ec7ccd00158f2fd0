use super::calibration::Adjustment;
use super::classify::{classify, ClassifyInput};
use super::projection::expected_run_range;
use super::strategy::{batting_table, bowling_table, StrategyContext};
use super::types::{AnalysisResult, ScoreBreakdown, ScoreBundle};
use super::venues::{ground_tendency, match_pitch_venue};
use super::PitchScorer;
use crate::conditions::PitchConditions;
use tracing::debug;

/// Every score starts here before any adjustment.
pub const BASELINE: f32 = 50.0;

const NEUTRAL: Adjustment = Adjustment::new(BASELINE, BASELINE, BASELINE, BASELINE);

/// Detailed path: keeps each factor's contribution.
pub fn score_debug(scorer: &PitchScorer, c: &PitchConditions) -> ScoreBreakdown {
    let cal = scorer.calibration();
    let engine = &scorer.config().engine;

    let grass = c.clamped_grass();
    let mut d = ScoreBreakdown {
        effective_grass: grass,
        ..Default::default()
    };

    d.weather = cal.weather(c.weather);
    d.grass = cal.grass(grass);
    d.moisture = cal.moisture(c.moisture);
    d.cracking = cal.cracking(c.cracking);

    if cal.match_wear {
        let matches = c
            .recent_matches_played
            .clamp(0, engine.max_recent_matches.max(0));
        d.effective_matches = matches;

        let m = matches as f32;
        d.wear = Adjustment::new(
            -m * engine.wear_batting_per_match,
            0.0,
            m * engine.wear_spin_per_match,
            -m * engine.wear_pace_per_match,
        );
    }

    if cal.venue_aware {
        if let Some(key) = c.venue_key() {
            match match_pitch_venue(&key) {
                Some(profile) => {
                    debug!("Venue '{}' matched profile '{}'", key, profile.name);
                    d.venue = profile.shift;
                    d.matched_venue = Some(profile.name);
                }
                None => debug!("Venue '{}' has no pitch profile", key),
            }
        }
    }

    let mut raw = NEUTRAL;
    for factor in [d.weather, d.grass, d.moisture, d.cracking, d.wear, d.venue] {
        raw += factor;
    }
    d.raw = raw;
    d.totals = raw.clamped(0.0, 100.0);
    d.scores = ScoreBundle::from_raw(&d.totals);
    d
}

/// Fast path: only the clamped bundle.
pub fn score(scorer: &PitchScorer, c: &PitchConditions) -> ScoreBundle {
    score_debug(scorer, c).scores
}

/// Classification, projection and strategy all read the clamped totals;
/// rounding happens only for the emitted scores.
pub fn analyze(scorer: &PitchScorer, c: &PitchConditions) -> AnalysisResult {
    let d = score_debug(scorer, c);
    let (totals, scores) = (d.totals, d.scores);
    let ruleset = scorer.ruleset();

    let archetype = classify(&ClassifyInput {
        totals,
        grass: c.clamped_grass(),
        moisture: c.moisture,
        cracking: c.cracking,
    });

    let tendency = if scorer.calibration().venue_aware {
        c.venue_key().and_then(|key| ground_tendency(&key))
    } else {
        None
    };
    let range = expected_run_range(&totals, tendency, &scorer.config().projection);

    let ctx = StrategyContext { totals, archetype };
    let batting = batting_table(ruleset).pick(&ctx);
    let bowling = bowling_table(ruleset).pick(&ctx);

    debug!(
        "Analysis [{}]: {:?} -> {} ({})",
        ruleset, scores, archetype, range
    );

    AnalysisResult {
        scores,
        pitch_archetype: archetype,
        expected_first_innings_run_range: range,
        batting_strategy_text: batting.to_string(),
        bowling_strategy_text: bowling.to_string(),
    }
}
