use super::calibration::Adjustment;
use super::types::RunRange;
use super::venues::GroundTendency;
use crate::config::ProjectionParams;

/// Fixed uncertainty either side of the projected total.
pub const RANGE_HALF_WIDTH: i32 = 20;

/// Projected first-innings midpoint before it is turned into a range.
/// `totals` are the clamped balance totals, not the rounded scores.
pub fn expected_midpoint(
    totals: &Adjustment,
    tendency: Option<GroundTendency>,
    params: &ProjectionParams,
) -> i32 {
    let batting_impact = (totals.batting - 50.0) * params.runs_per_point;
    let bowling_impact = (totals.bowling - 50.0) * params.runs_per_point;

    let venue_flat = match tendency {
        Some(GroundTendency::HighScoring) => params.venue_swing,
        Some(GroundTendency::LowScoring) => -params.venue_swing,
        None => 0.0,
    };

    let adjusted = params.base_runs + batting_impact - bowling_impact + venue_flat;
    adjusted.clamp(params.min_runs, params.max_runs).round() as i32
}

pub fn expected_run_range(
    totals: &Adjustment,
    tendency: Option<GroundTendency>,
    params: &ProjectionParams,
) -> RunRange {
    let mid = expected_midpoint(totals, tendency, params);
    RunRange {
        low: mid - RANGE_HALF_WIDTH,
        high: mid + RANGE_HALF_WIDTH,
    }
}
