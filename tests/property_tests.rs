use pitchforge::conditions::{Cracking, Moisture, PitchConditions, Weather};
use pitchforge::scorer::{PitchScorer, Ruleset};
use proptest::prelude::*;

// --- STRATEGIES ---

fn arb_weather() -> impl Strategy<Value = Weather> {
    prop_oneof![
        Just(Weather::Sunny),
        Just(Weather::Cloudy),
        Just(Weather::Rainy)
    ]
}

fn arb_moisture() -> impl Strategy<Value = Moisture> {
    prop_oneof![
        Just(Moisture::Low),
        Just(Moisture::Medium),
        Just(Moisture::High)
    ]
}

fn arb_cracking() -> impl Strategy<Value = Cracking> {
    prop_oneof![
        Just(Cracking::Minimal),
        Just(Cracking::Moderate),
        Just(Cracking::Extensive)
    ]
}

fn arb_ruleset() -> impl Strategy<Value = Ruleset> {
    prop_oneof![Just(Ruleset::Basic), Just(Ruleset::Extended)]
}

fn arb_venue() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some("Galle".to_string())),
        Just(Some("WACA, Perth".to_string())),
        Just(Some("M. Chinnaswamy Stadium".to_string())),
        Just(Some("Eden Park, Auckland".to_string())),
        "[a-zA-Z ]{0,24}".prop_map(Some),
    ]
}

prop_compose! {
    fn arb_conditions()(
        weather in arb_weather(),
        grass in -50i64..200,
        moisture in arb_moisture(),
        cracking in arb_cracking(),
        venue_name in arb_venue(),
        recent in -5i64..40,
    ) -> PitchConditions {
        PitchConditions {
            weather,
            grass_coverage_percent: grass,
            moisture,
            cracking,
            venue_name,
            recent_matches_played: recent,
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_scores_always_in_range(c in arb_conditions(), ruleset in arb_ruleset()) {
        let res = PitchScorer::with_ruleset(ruleset).analyze(&c);
        for s in res.scores.as_array() {
            prop_assert!(s <= 100, "score out of range: {:?}", res.scores);
        }
    }

    #[test]
    fn test_analysis_is_deterministic(c in arb_conditions(), ruleset in arb_ruleset()) {
        let scorer = PitchScorer::with_ruleset(ruleset);
        prop_assert_eq!(scorer.analyze(&c), scorer.analyze(&c.clone()));
    }

    #[test]
    fn test_run_range_has_fixed_spread(c in arb_conditions(), ruleset in arb_ruleset()) {
        let r = PitchScorer::with_ruleset(ruleset)
            .analyze(&c)
            .expected_first_innings_run_range;
        prop_assert_eq!(r.low, r.high - 40);
        prop_assert!(r.midpoint() >= 150 && r.midpoint() <= 450);
    }

    #[test]
    fn test_grass_monotonicity(c in arb_conditions(), ruleset in arb_ruleset()) {
        let scorer = PitchScorer::with_ruleset(ruleset);
        let mut prev: Option<(u8, u8)> = None;

        for grass in 0..=100 {
            let mut probe = c.clone();
            probe.grass_coverage_percent = grass;
            let s = scorer.score(&probe);

            if let Some((prev_bat, prev_pace)) = prev {
                prop_assert!(s.batting_score <= prev_bat, "batting rose at grass {}", grass);
                prop_assert!(s.pace_score >= prev_pace, "pace fell at grass {}", grass);
            }
            prev = Some((s.batting_score, s.pace_score));
        }
    }

    #[test]
    fn test_unmatched_venue_is_neutral(c in arb_conditions()) {
        let scorer = PitchScorer::default();
        let mut anon = c.clone();
        anon.venue_name = Some("Zzz Qqq Ground".to_string());
        let mut none = c;
        none.venue_name = None;
        prop_assert_eq!(scorer.analyze(&anon), scorer.analyze(&none));
    }
}
