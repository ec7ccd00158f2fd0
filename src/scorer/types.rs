use super::calibration::Adjustment;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBundle {
    pub batting_score: u8,
    pub bowling_score: u8,
    pub spin_score: u8,
    pub pace_score: u8,
}

/// The 0-10 bar values shown next to each score.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ratings {
    pub favors_batsmen: u8,
    pub favors_bowlers: u8,
    pub spin_friendliness: u8,
    pub pace_friendliness: u8,
}

impl ScoreBundle {
    /// Clamps each raw total to [0,100] and rounds to the nearest point.
    pub fn from_raw(raw: &Adjustment) -> Self {
        Self {
            batting_score: clamp_score(raw.batting),
            bowling_score: clamp_score(raw.bowling),
            spin_score: clamp_score(raw.spin),
            pace_score: clamp_score(raw.pace),
        }
    }

    pub fn ratings(&self) -> Ratings {
        let rate = |s: u8| ((s as f32) / 10.0).round() as u8;
        Ratings {
            favors_batsmen: rate(self.batting_score),
            favors_bowlers: rate(self.bowling_score),
            spin_friendliness: rate(self.spin_score),
            pace_friendliness: rate(self.pace_score),
        }
    }

    pub fn as_array(&self) -> [u8; 4] {
        [
            self.batting_score,
            self.bowling_score,
            self.spin_score,
            self.pace_score,
        ]
    }
}

#[inline(always)]
fn clamp_score(v: f32) -> u8 {
    v.clamp(0.0, 100.0).round() as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
pub enum Archetype {
    #[strum(serialize = "Green Seamer")]
    #[serde(rename = "Green Seamer")]
    GreenSeamer,
    #[strum(serialize = "Rank Turner")]
    #[serde(rename = "Rank Turner")]
    RankTurner,
    #[strum(serialize = "Dustbowl")]
    #[serde(rename = "Dustbowl")]
    Dustbowl,
    #[strum(serialize = "Flat Road (Batting Paradise)")]
    #[serde(rename = "Flat Road (Batting Paradise)")]
    FlatRoad,
    #[strum(serialize = "Pace-friendly Balanced Pitch")]
    #[serde(rename = "Pace-friendly Balanced Pitch")]
    PaceFriendly,
    #[strum(serialize = "Spin-friendly Balanced Pitch")]
    #[serde(rename = "Spin-friendly Balanced Pitch")]
    SpinFriendly,
    #[strum(serialize = "Slightly Bowler-friendly Pitch")]
    #[serde(rename = "Slightly Bowler-friendly Pitch")]
    SlightlyBowlerFriendly,
    #[strum(serialize = "Slightly Batting-friendly Pitch")]
    #[serde(rename = "Slightly Batting-friendly Pitch")]
    SlightlyBattingFriendly,
    #[strum(serialize = "Minefield (Very Difficult for Batting)")]
    #[serde(rename = "Minefield (Very Difficult for Batting)")]
    Minefield,
    #[strum(serialize = "True Pitch (Perfectly Balanced)")]
    #[serde(rename = "True Pitch (Perfectly Balanced)")]
    TruePitch,
    #[strum(serialize = "Standard Balanced Pitch")]
    #[serde(rename = "Standard Balanced Pitch")]
    StandardBalanced,
}

impl Archetype {
    pub fn is_balanced(&self) -> bool {
        matches!(
            self,
            Archetype::PaceFriendly
                | Archetype::SpinFriendly
                | Archetype::SlightlyBowlerFriendly
                | Archetype::SlightlyBattingFriendly
                | Archetype::TruePitch
                | Archetype::StandardBalanced
        )
    }

    pub fn is_spin_track(&self) -> bool {
        matches!(self, Archetype::RankTurner | Archetype::Dustbowl)
    }
}

/// Expected first-innings total as an inclusive `[low, high]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "[i32; 2]", from = "[i32; 2]")]
pub struct RunRange {
    pub low: i32,
    pub high: i32,
}

impl RunRange {
    pub fn midpoint(&self) -> i32 {
        (self.low + self.high) / 2
    }
}

impl From<RunRange> for [i32; 2] {
    fn from(r: RunRange) -> Self {
        [r.low, r.high]
    }
}

impl From<[i32; 2]> for RunRange {
    fn from(pair: [i32; 2]) -> Self {
        Self {
            low: pair[0],
            high: pair[1],
        }
    }
}

impl std::fmt::Display for RunRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(flatten)]
    pub scores: ScoreBundle,
    pub pitch_archetype: Archetype,
    pub expected_first_innings_run_range: RunRange,
    pub batting_strategy_text: String,
    pub bowling_strategy_text: String,
}

/// Per-factor contributions behind a `ScoreBundle`.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub weather: Adjustment,
    pub grass: Adjustment,
    pub moisture: Adjustment,
    pub cracking: Adjustment,
    pub wear: Adjustment,
    pub venue: Adjustment,

    // Baseline plus every contribution, before clamping.
    pub raw: Adjustment,
    // `raw` clamped to [0,100], unrounded. The rules read these.
    pub totals: Adjustment,
    pub scores: ScoreBundle,

    pub matched_venue: Option<&'static str>,
    pub effective_grass: i64,
    pub effective_matches: i64,
}
