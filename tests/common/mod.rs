#![allow(dead_code)]

use pitchforge::conditions::{Cracking, Moisture, PitchConditions, Weather};

pub fn neutral() -> PitchConditions {
    PitchConditions::new(Weather::Sunny, 50, Moisture::Medium, Cracking::Minimal)
        .with_venue("")
        .with_recent_matches(0)
}

pub fn green_seamer() -> PitchConditions {
    PitchConditions::new(Weather::Cloudy, 90, Moisture::High, Cracking::Minimal)
}

pub fn dry_turner() -> PitchConditions {
    PitchConditions::new(Weather::Sunny, 10, Moisture::Low, Cracking::Extensive)
        .with_recent_matches(8)
}

/// Every modifier that lowers batting, stacked.
pub fn worst_for_batting() -> PitchConditions {
    PitchConditions::new(Weather::Rainy, 100, Moisture::High, Cracking::Extensive)
        .with_venue("Trent Bridge")
        .with_recent_matches(50)
}
