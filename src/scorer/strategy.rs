use super::calibration::{Adjustment, Ruleset};
use super::types::Archetype;

/// Clamped, unrounded totals plus the archetype they were classified as.
#[derive(Debug, Clone, Copy)]
pub struct StrategyContext {
    pub totals: Adjustment,
    pub archetype: Archetype,
}

impl StrategyContext {
    fn bat(&self) -> f32 {
        self.totals.batting
    }
    fn bowl(&self) -> f32 {
        self.totals.bowling
    }
    fn spin(&self) -> f32 {
        self.totals.spin
    }
    fn pace(&self) -> f32 {
        self.totals.pace
    }

    fn extreme_spin(&self) -> bool {
        self.spin() > 75.0 && self.spin() > self.pace() + 20.0
    }

    fn extreme_pace(&self) -> bool {
        self.pace() > 75.0 && self.pace() > self.spin() + 20.0
    }
}

pub struct StrategyRule {
    pub applies: fn(&StrategyContext) -> bool,
    pub advice: &'static str,
}

/// Ordered rules; the first that applies wins, otherwise `fallback`.
pub struct StrategyTable {
    pub rules: &'static [StrategyRule],
    pub fallback: &'static str,
}

impl StrategyTable {
    pub fn pick(&self, ctx: &StrategyContext) -> &'static str {
        self.rules
            .iter()
            .find(|r| (r.applies)(ctx))
            .map(|r| r.advice)
            .unwrap_or(self.fallback)
    }
}

pub static EXTENDED_BATTING: StrategyTable = StrategyTable {
    rules: &[
        StrategyRule {
            applies: |c| c.bat() > 70.0,
            advice: "Play positively from the start. Look to dominate the bowling and set up a big total. Good pitch to play your shots freely.",
        },
        StrategyRule {
            applies: |c| c.extreme_spin(),
            advice: "Use your feet to get to the pitch of the ball. Sweep shots are crucial. Avoid playing with hard hands. Look to build partnerships and rotate strike.",
        },
        StrategyRule {
            applies: |c| c.extreme_pace(),
            advice: "Watch the ball carefully and play late. Avoid driving on the up early in your innings. Be prepared for short-pitched bowling and variable bounce.",
        },
        StrategyRule {
            applies: |c| c.bowl() > 70.0,
            advice: "Survival mode is key. Grit and determination required. Focus on batting time rather than scoring rate. Every run is valuable.",
        },
        StrategyRule {
            applies: |c| c.archetype == Archetype::GreenSeamer,
            advice: "Play defensively in the first hour. Leave balls outside off stump. Wait for loose deliveries. Be patient as conditions will improve as the ball gets older.",
        },
        StrategyRule {
            applies: |c| c.archetype.is_spin_track(),
            advice: "Be positive against spin. Use your feet and sweep shots. Don't let spinners settle. Try to disrupt their rhythm with calculated aggression.",
        },
        StrategyRule {
            applies: |c| c.archetype == Archetype::PaceFriendly,
            advice: "Respect good balls, punish the bad ones. Build your innings gradually. The pitch should get better for batting as the game progresses.",
        },
        StrategyRule {
            applies: |c| c.archetype == Archetype::SpinFriendly,
            advice: "Start positively while the ball is new. Be prepared for increasing spin as the game progresses. Use the crease well against spinners.",
        },
    ],
    fallback: "Play normal cricket. Assess conditions as you bat. Build partnerships and look to capitalize after getting set.",
};

pub static EXTENDED_BOWLING: StrategyTable = StrategyTable {
    rules: &[
        StrategyRule {
            applies: |c| c.extreme_spin(),
            advice: "Attack with multiple spin options. Set aggressive fields with close catchers. Pace bowlers should focus on reverse swing with the older ball.",
        },
        StrategyRule {
            applies: |c| c.extreme_pace(),
            advice: "Aggressive pace bowling with attacking lines. Use the short ball tactically. Set fields for edges. Spinners play a holding role.",
        },
        StrategyRule {
            applies: |c| c.archetype == Archetype::GreenSeamer,
            advice: "Attack with pace bowlers. Bowl fuller lengths to exploit movement. Set fields for edges to slips and gully. Minimal role for spinners.",
        },
        StrategyRule {
            applies: |c| c.archetype.is_spin_track(),
            advice: "Lead with quality spin bowling. Attack with close fielders. Pace bowlers should look for reverse swing and bowl cutters. Rotate your spinners from both ends.",
        },
        StrategyRule {
            applies: |c| c.archetype == Archetype::PaceFriendly,
            advice: "Start with your best pace bowlers. Mix lengths but focus on good line and length. Spinners should look to contain initially, then attack as the pitch wears.",
        },
        StrategyRule {
            applies: |c| c.archetype == Archetype::SpinFriendly,
            advice: "Use pace with the new ball, then switch to spin as the ball gets older. Keep close catchers for spinners. Patience is key - build pressure and wait for mistakes.",
        },
        StrategyRule {
            applies: |c| c.archetype == Archetype::FlatRoad,
            advice: "Disciplined bowling required. Focus on containment rather than wicket-taking. Change pace and use variations. Set defensive fields and build pressure through dot balls.",
        },
    ],
    fallback: "Balanced attack with both pace and spin. Bowl to your fields and be patient. Build pressure through consistent bowling.",
};

pub static BASIC_BATTING: StrategyTable = StrategyTable {
    rules: &[
        StrategyRule {
            applies: |c| c.bat() > 60.0,
            advice: "Aggressive batting favorable",
        },
        StrategyRule {
            applies: |c| c.bat() < 40.0,
            advice: "Defensive batting recommended",
        },
    ],
    fallback: "Balanced approach",
};

pub static BASIC_BOWLING: StrategyTable = StrategyTable {
    rules: &[
        StrategyRule {
            applies: |c| c.spin() > c.pace() + 15.0,
            advice: "Spin dominant attack recommended",
        },
        StrategyRule {
            applies: |c| c.pace() > c.spin() + 15.0,
            advice: "Pace dominant attack recommended",
        },
    ],
    fallback: "Mixed bowling attack",
};

pub fn batting_table(ruleset: Ruleset) -> &'static StrategyTable {
    match ruleset {
        Ruleset::Basic => &BASIC_BATTING,
        Ruleset::Extended => &EXTENDED_BATTING,
    }
}

pub fn bowling_table(ruleset: Ruleset) -> &'static StrategyTable {
    match ruleset {
        Ruleset::Basic => &BASIC_BOWLING,
        Ruleset::Extended => &EXTENDED_BOWLING,
    }
}
