//! Static venue knowledge. Lookups take an already lowercased venue name and
//! match aliases as substrings, so "M. Chinnaswamy Stadium, Bangalore" hits
//! the Chinnaswamy entry.

use super::calibration::Adjustment;
use serde::Serialize;
use strum_macros::Display;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct VenueProfile {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub shift: Adjustment,
}

impl VenueProfile {
    fn matches(&self, venue_key: &str) -> bool {
        self.aliases.iter().any(|alias| venue_key.contains(alias))
    }
}

const fn venue(
    name: &'static str,
    aliases: &'static [&'static str],
    shift: Adjustment,
) -> VenueProfile {
    VenueProfile {
        name,
        aliases,
        shift,
    }
}

// First match wins. "oval" sits before "kensington" so Kensington Oval
// resolves to The Oval entry; keep the order when adding grounds.
pub static PITCH_VENUES: &[VenueProfile] = &[
    // Subcontinent
    venue(
        "Wankhede Stadium",
        &["wankhede", "mumbai"],
        Adjustment::new(0.0, 0.0, 5.0, 5.0),
    ),
    venue(
        "Eden Gardens",
        &["eden", "kolkata"],
        Adjustment::new(0.0, 0.0, 8.0, -3.0),
    ),
    venue(
        "Chepauk",
        &["chepauk", "chennai"],
        Adjustment::new(0.0, 0.0, 15.0, -8.0),
    ),
    venue(
        "Chinnaswamy Stadium",
        &["chinnaswamy", "bangalore"],
        Adjustment::new(10.0, 0.0, 0.0, 0.0),
    ),
    venue(
        "Dharamsala",
        &["dharamsala"],
        Adjustment::new(0.0, 0.0, 0.0, 12.0),
    ),
    venue(
        "Feroz Shah Kotla",
        &["feroz shah", "kotla", "delhi"],
        Adjustment::new(0.0, 0.0, 10.0, -8.0),
    ),
    // Australia
    venue(
        "The Gabba",
        &["gabba", "brisbane"],
        Adjustment::new(0.0, 0.0, -10.0, 15.0),
    ),
    venue(
        "Adelaide Oval",
        &["adelaide"],
        Adjustment::new(5.0, 0.0, 5.0, 0.0),
    ),
    venue(
        "Melbourne Cricket Ground",
        &["mcg", "melbourne"],
        Adjustment::new(0.0, 0.0, 0.0, 8.0),
    ),
    venue(
        "Sydney Cricket Ground",
        &["scg", "sydney"],
        Adjustment::new(0.0, 0.0, 10.0, 0.0),
    ),
    venue(
        "WACA / Perth Stadium",
        &["waca", "perth"],
        Adjustment::new(0.0, 0.0, -15.0, 20.0),
    ),
    // England
    venue(
        "Lord's",
        &["lord", "lords"],
        Adjustment::new(0.0, 0.0, 0.0, 12.0),
    ),
    venue(
        "The Oval",
        &["oval"],
        Adjustment::new(8.0, 0.0, 5.0, 0.0),
    ),
    venue(
        "Trent Bridge",
        &["trent bridge", "nottingham"],
        Adjustment::new(-10.0, 0.0, 0.0, 15.0),
    ),
    venue(
        "Old Trafford",
        &["old trafford", "manchester"],
        Adjustment::new(0.0, 0.0, 8.0, 8.0),
    ),
    // Elsewhere
    venue(
        "The Wanderers",
        &["wanderers", "johannesburg"],
        Adjustment::new(0.0, 0.0, -10.0, 15.0),
    ),
    venue(
        "Newlands",
        &["newlands", "cape town"],
        Adjustment::new(0.0, 0.0, 0.0, 10.0),
    ),
    venue(
        "Kensington Oval",
        &["kensington", "barbados"],
        Adjustment::new(0.0, 0.0, 0.0, 12.0),
    ),
    venue(
        "Galle International Stadium",
        &["galle"],
        Adjustment::new(0.0, 0.0, 20.0, -15.0),
    ),
];

/// Historical scoring tendency of a ground, independent of its pitch profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum GroundTendency {
    #[strum(serialize = "high-scoring")]
    HighScoring,
    #[strum(serialize = "low-scoring")]
    LowScoring,
}

pub static HIGH_SCORING_GROUNDS: &[&str] = &[
    "chinnaswamy",
    "bangalore",
    "wankhede",
    "mumbai",
    "bellerive",
    "hobart",
    "adelaide",
];

pub static LOW_SCORING_GROUNDS: &[&str] = &[
    "eden park",
    "auckland",
    "dharamsala",
    "southampton",
    "hamilton",
];

pub fn match_pitch_venue(venue_key: &str) -> Option<&'static VenueProfile> {
    if venue_key.is_empty() {
        return None;
    }
    PITCH_VENUES.iter().find(|v| v.matches(venue_key))
}

pub fn ground_tendency(venue_key: &str) -> Option<GroundTendency> {
    if venue_key.is_empty() {
        return None;
    }
    if HIGH_SCORING_GROUNDS.iter().any(|g| venue_key.contains(g)) {
        Some(GroundTendency::HighScoring)
    } else if LOW_SCORING_GROUNDS.iter().any(|g| venue_key.contains(g)) {
        Some(GroundTendency::LowScoring)
    } else {
        None
    }
}
