use pitchforge::api::{AnalysisRequest, PitchAnalysisService};
use pitchforge::conditions::{Cracking, Moisture, PitchConditions, Weather};
use pitchforge::config::Config;
use pitchforge::error::PitchError;
use pitchforge::scorer::{Archetype, Ruleset};
use rstest::rstest;

fn full_request() -> AnalysisRequest {
    AnalysisRequest {
        weather: Some("cloudy".to_string()),
        grass_coverage_percent: Some(90),
        moisture: Some("high".to_string()),
        cracking: Some("minimal".to_string()),
        venue_name: Some("Lord's".to_string()),
        recent_matches_played: None,
    }
}

fn service() -> PitchAnalysisService {
    PitchAnalysisService::new(Config::default()).expect("default config is valid")
}

#[test]
fn test_request_into_conditions() {
    let c = full_request().into_conditions().unwrap();
    assert_eq!(c.weather, Weather::Cloudy);
    assert_eq!(c.grass_coverage_percent, 90);
    assert_eq!(c.moisture, Moisture::High);
    assert_eq!(c.cracking, Cracking::Minimal);
    assert_eq!(c.venue_name.as_deref(), Some("Lord's"));
    assert_eq!(c.recent_matches_played, 0);
}

#[rstest]
#[case::weather(AnalysisRequest { weather: None, ..full_request() }, "weather")]
#[case::blank_weather(AnalysisRequest { weather: Some("  ".into()), ..full_request() }, "weather")]
#[case::grass(AnalysisRequest { grass_coverage_percent: None, ..full_request() }, "grassCoveragePercent")]
#[case::moisture(AnalysisRequest { moisture: None, ..full_request() }, "moisture")]
#[case::cracking(AnalysisRequest { cracking: None, ..full_request() }, "cracking")]
fn test_missing_required_field(#[case] req: AnalysisRequest, #[case] field: &str) {
    match req.into_conditions() {
        Err(PitchError::MissingField(f)) => assert_eq!(f, field),
        other => panic!("expected MissingField({}), got {:?}", field, other),
    }
}

#[test]
fn test_unknown_enum_rejected() {
    let req = AnalysisRequest {
        weather: Some("foggy".to_string()),
        ..full_request()
    };
    match req.into_conditions() {
        Err(PitchError::UnknownValue {
            field,
            value,
            expected,
        }) => {
            assert_eq!(field, "weather");
            assert_eq!(value, "foggy");
            assert_eq!(expected, "sunny, cloudy, rainy");
        }
        other => panic!("expected UnknownValue, got {:?}", other),
    }
}

#[test]
fn test_enum_parsing_is_case_insensitive() {
    let req = AnalysisRequest {
        weather: Some(" SUNNY ".to_string()),
        cracking: Some("Extensive".to_string()),
        ..full_request()
    };
    let c = req.into_conditions().unwrap();
    assert_eq!(c.weather, Weather::Sunny);
    assert_eq!(c.cracking, Cracking::Extensive);
}

#[test]
fn test_zero_grass_is_present() {
    let req = AnalysisRequest {
        grass_coverage_percent: Some(0),
        ..full_request()
    };
    assert_eq!(req.into_conditions().unwrap().grass_coverage_percent, 0);
}

#[test]
fn test_request_accepts_short_field_names() {
    let json = r#"{
        "weather": "rainy",
        "grassCoverage": 40,
        "moisture": "medium",
        "cracking": "moderate",
        "venue": "Galle",
        "recentMatches": 3
    }"#;
    let req: AnalysisRequest = serde_json::from_str(json).unwrap();
    let c = req.into_conditions().unwrap();
    assert_eq!(c.grass_coverage_percent, 40);
    assert_eq!(c.venue_name.as_deref(), Some("Galle"));
    assert_eq!(c.recent_matches_played, 3);
}

#[test]
fn test_analyze_request() {
    let report = service().analyze_request(full_request()).unwrap();
    assert_eq!(report.ruleset, Ruleset::Extended);
    assert_eq!(report.analysis.pitch_archetype, Archetype::GreenSeamer);
    assert_eq!(report.ratings, report.analysis.scores.ratings());
}

#[test]
fn test_revise_keeps_absent_fields() {
    let svc = service();
    let previous = full_request().into_conditions().unwrap();

    let patch = AnalysisRequest {
        weather: Some("sunny".to_string()),
        recent_matches_played: Some(4),
        ..Default::default()
    };
    let report = svc.revise_request(&previous, &patch).unwrap();

    assert_eq!(report.conditions.weather, Weather::Sunny);
    assert_eq!(report.conditions.recent_matches_played, 4);
    assert_eq!(report.conditions.grass_coverage_percent, 90);
    assert_eq!(report.conditions.moisture, Moisture::High);
    assert_eq!(report.conditions.venue_name.as_deref(), Some("Lord's"));
}

#[test]
fn test_revise_rejects_bad_patch() {
    let previous = PitchConditions::new(Weather::Sunny, 20, Moisture::Low, Cracking::Minimal);
    let patch = AnalysisRequest {
        moisture: Some("soggy".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        service().revise_request(&previous, &patch),
        Err(PitchError::UnknownValue { field: "moisture", .. })
    ));
}

#[test]
fn test_batch_preserves_order_and_isolates_errors() {
    let good = full_request();
    let bad = AnalysisRequest {
        cracking: Some("shattered".to_string()),
        ..full_request()
    };
    let sunny = AnalysisRequest {
        weather: Some("sunny".to_string()),
        grass_coverage_percent: Some(10),
        moisture: Some("low".to_string()),
        ..full_request()
    };

    let results = service().analyze_batch(&[good, bad, sunny]);
    assert_eq!(results.len(), 3);
    assert_eq!(
        results[0].as_ref().unwrap().conditions.weather,
        Weather::Cloudy
    );
    assert!(results[1].is_err());
    assert_eq!(
        results[2].as_ref().unwrap().conditions.weather,
        Weather::Sunny
    );
}

#[test]
fn test_service_rejects_bad_config() {
    let mut config = Config::default();
    config.projection.min_runs = 500.0;
    assert!(matches!(
        PitchAnalysisService::new(config),
        Err(PitchError::Config(_))
    ));
}

#[test]
fn test_report_serializes() {
    let report = service().analyze_request(full_request()).unwrap();
    let v = serde_json::to_value(&report).unwrap();
    assert_eq!(v["ruleset"], "extended");
    assert_eq!(v["conditions"]["grassCoveragePercent"], 90);
    assert_eq!(v["analysis"]["pitchArchetype"], "Green Seamer");
    assert!(v["ratings"]["favorsBowlers"].is_number());
}
