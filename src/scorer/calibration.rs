use crate::conditions::{Cracking, Moisture, Weather};
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};
use strum_macros::{Display, EnumIter, EnumString};

/// Which of the two calibrations the scorer runs.
///
/// `Basic` is the four-factor model (weather, grass, moisture, cracking).
/// `Extended` adds match wear and the venue tables and is the default.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Ruleset {
    Basic,
    #[default]
    Extended,
}

impl Ruleset {
    pub fn calibration(self) -> &'static Calibration {
        match self {
            Ruleset::Basic => &BASIC,
            Ruleset::Extended => &EXTENDED,
        }
    }
}

/// Additive shift applied to the four balance scores.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct Adjustment {
    pub batting: f32,
    pub bowling: f32,
    pub spin: f32,
    pub pace: f32,
}

impl Adjustment {
    pub const ZERO: Adjustment = Adjustment::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(batting: f32, bowling: f32, spin: f32, pace: f32) -> Self {
        Self {
            batting,
            bowling,
            spin,
            pace,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Every component clamped into `[lo, hi]`.
    pub fn clamped(&self, lo: f32, hi: f32) -> Self {
        Self::new(
            self.batting.clamp(lo, hi),
            self.bowling.clamp(lo, hi),
            self.spin.clamp(lo, hi),
            self.pace.clamp(lo, hi),
        )
    }
}

impl Add for Adjustment {
    type Output = Adjustment;

    fn add(self, rhs: Adjustment) -> Adjustment {
        Adjustment::new(
            self.batting + rhs.batting,
            self.bowling + rhs.bowling,
            self.spin + rhs.spin,
            self.pace + rhs.pace,
        )
    }
}

impl AddAssign for Adjustment {
    fn add_assign(&mut self, rhs: Adjustment) {
        *self = *self + rhs;
    }
}

/// A grass band applies when coverage is strictly above `above`.
#[derive(Debug, Clone, Copy)]
pub struct GrassBand {
    pub above: i64,
    pub shift: Adjustment,
}

pub struct Calibration {
    pub sunny: Adjustment,
    pub cloudy: Adjustment,
    pub rainy: Adjustment,

    // Ordered from the highest threshold down.
    pub grass_bands: &'static [GrassBand],
    pub bare_pitch: Adjustment,

    pub moisture_high: Adjustment,
    pub moisture_medium: Adjustment,
    pub moisture_low: Adjustment,

    pub cracking_extensive: Adjustment,
    pub cracking_moderate: Adjustment,

    pub match_wear: bool,
    pub venue_aware: bool,
}

impl Calibration {
    pub fn weather(&self, weather: Weather) -> Adjustment {
        match weather {
            Weather::Sunny => self.sunny,
            Weather::Cloudy => self.cloudy,
            Weather::Rainy => self.rainy,
        }
    }

    pub fn grass(&self, coverage: i64) -> Adjustment {
        self.grass_bands
            .iter()
            .find(|band| coverage > band.above)
            .map(|band| band.shift)
            .unwrap_or(self.bare_pitch)
    }

    pub fn moisture(&self, moisture: Moisture) -> Adjustment {
        match moisture {
            Moisture::High => self.moisture_high,
            Moisture::Medium => self.moisture_medium,
            Moisture::Low => self.moisture_low,
        }
    }

    pub fn cracking(&self, cracking: Cracking) -> Adjustment {
        match cracking {
            Cracking::Extensive => self.cracking_extensive,
            Cracking::Moderate => self.cracking_moderate,
            Cracking::Minimal => Adjustment::ZERO,
        }
    }
}

// Columns: batting, bowling, spin, pace.

pub static BASIC: Calibration = Calibration {
    sunny: Adjustment::new(10.0, 0.0, 5.0, -5.0),
    cloudy: Adjustment::new(-5.0, 10.0, 0.0, 10.0),
    rainy: Adjustment::new(-10.0, 15.0, -10.0, 15.0),

    grass_bands: &[
        GrassBand {
            above: 70,
            shift: Adjustment::new(-15.0, 15.0, -10.0, 15.0),
        },
        GrassBand {
            above: 30,
            shift: Adjustment::new(0.0, 5.0, 0.0, 5.0),
        },
    ],
    bare_pitch: Adjustment::new(10.0, 0.0, 10.0, -5.0),

    moisture_high: Adjustment::new(-15.0, 15.0, -5.0, 15.0),
    moisture_medium: Adjustment::new(-5.0, 5.0, 0.0, 5.0),
    moisture_low: Adjustment::new(10.0, 0.0, 10.0, -5.0),

    cracking_extensive: Adjustment::new(-15.0, 10.0, 20.0, 0.0),
    cracking_moderate: Adjustment::new(-5.0, 5.0, 10.0, 0.0),

    match_wear: false,
    venue_aware: false,
};

pub static EXTENDED: Calibration = Calibration {
    sunny: Adjustment::new(15.0, 0.0, 8.0, -5.0),
    cloudy: Adjustment::new(-10.0, 12.0, 0.0, 15.0),
    // Wet ball is hard to grip.
    rainy: Adjustment::new(-15.0, 20.0, -12.0, 18.0),

    grass_bands: &[
        GrassBand {
            above: 75,
            shift: Adjustment::new(-20.0, 20.0, -15.0, 25.0),
        },
        GrassBand {
            above: 50,
            shift: Adjustment::new(-10.0, 12.0, -8.0, 15.0),
        },
        GrassBand {
            above: 25,
            shift: Adjustment::new(0.0, 5.0, -3.0, 5.0),
        },
    ],
    bare_pitch: Adjustment::new(15.0, 0.0, 18.0, -12.0),

    moisture_high: Adjustment::new(-18.0, 18.0, -10.0, 20.0),
    moisture_medium: Adjustment::new(-5.0, 8.0, 0.0, 10.0),
    moisture_low: Adjustment::new(12.0, 0.0, 15.0, -10.0),

    cracking_extensive: Adjustment::new(-20.0, 15.0, 25.0, 0.0),
    cracking_moderate: Adjustment::new(-8.0, 8.0, 15.0, 0.0),

    match_wear: true,
    venue_aware: true,
};
