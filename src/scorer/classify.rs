use super::calibration::Adjustment;
use super::types::Archetype;
use crate::conditions::{Cracking, Moisture};

/// What the archetype rules look at: totals clamped to [0,100] but not yet
/// rounded, plus the clamped grass coverage and the moisture/cracking descriptors.
#[derive(Debug, Clone, Copy)]
pub struct ClassifyInput {
    pub totals: Adjustment,
    pub grass: i64,
    pub moisture: Moisture,
    pub cracking: Cracking,
}

impl ClassifyInput {
    #[inline(always)]
    fn bat(&self) -> f32 {
        self.totals.batting
    }
    #[inline(always)]
    fn bowl(&self) -> f32 {
        self.totals.bowling
    }
    #[inline(always)]
    fn spin(&self) -> f32 {
        self.totals.spin
    }
    #[inline(always)]
    fn pace(&self) -> f32 {
        self.totals.pace
    }
}

pub struct ArchetypeRule {
    pub archetype: Archetype,
    pub matches: fn(&ClassifyInput) -> bool,
}

fn green_seamer(c: &ClassifyInput) -> bool {
    c.grass > 70 && c.pace() > 65.0 && c.bat() < 40.0
}

fn rank_turner(c: &ClassifyInput) -> bool {
    c.cracking == Cracking::Extensive && c.spin() > 70.0 && c.bat() < 45.0
}

fn dustbowl(c: &ClassifyInput) -> bool {
    c.moisture == Moisture::Low && c.cracking != Cracking::Minimal && c.spin() > 75.0
}

fn flat_road(c: &ClassifyInput) -> bool {
    c.bat() > 70.0 && c.bowl() < 40.0
}

fn pace_friendly(c: &ClassifyInput) -> bool {
    c.pace() > c.spin() && c.pace() > 60.0 && c.pace() < 75.0
}

fn spin_friendly(c: &ClassifyInput) -> bool {
    c.spin() > c.pace() && c.spin() > 60.0 && c.spin() < 75.0
}

fn slightly_bowler_friendly(c: &ClassifyInput) -> bool {
    c.bowl() > c.bat() && c.bowl() < 65.0
}

fn slightly_batting_friendly(c: &ClassifyInput) -> bool {
    c.bat() > c.bowl() && c.bat() < 65.0
}

fn minefield(c: &ClassifyInput) -> bool {
    c.bowl() > 75.0 && c.bat() < 30.0
}

fn true_pitch(c: &ClassifyInput) -> bool {
    (c.bat() - c.bowl()).abs() < 10.0 && (c.spin() - c.pace()).abs() < 10.0
}

/// Priority order. Earlier rules shadow later ones (a minefield that also
/// qualifies as a green seamer is reported as a green seamer).
pub static ARCHETYPE_RULES: &[ArchetypeRule] = &[
    ArchetypeRule {
        archetype: Archetype::GreenSeamer,
        matches: green_seamer,
    },
    ArchetypeRule {
        archetype: Archetype::RankTurner,
        matches: rank_turner,
    },
    ArchetypeRule {
        archetype: Archetype::Dustbowl,
        matches: dustbowl,
    },
    ArchetypeRule {
        archetype: Archetype::FlatRoad,
        matches: flat_road,
    },
    ArchetypeRule {
        archetype: Archetype::PaceFriendly,
        matches: pace_friendly,
    },
    ArchetypeRule {
        archetype: Archetype::SpinFriendly,
        matches: spin_friendly,
    },
    ArchetypeRule {
        archetype: Archetype::SlightlyBowlerFriendly,
        matches: slightly_bowler_friendly,
    },
    ArchetypeRule {
        archetype: Archetype::SlightlyBattingFriendly,
        matches: slightly_batting_friendly,
    },
    ArchetypeRule {
        archetype: Archetype::Minefield,
        matches: minefield,
    },
    ArchetypeRule {
        archetype: Archetype::TruePitch,
        matches: true_pitch,
    },
];

pub fn classify(input: &ClassifyInput) -> Archetype {
    ARCHETYPE_RULES
        .iter()
        .find(|rule| (rule.matches)(input))
        .map(|rule| rule.archetype)
        .unwrap_or(Archetype::StandardBalanced)
}
