use criterion::{criterion_group, criterion_main, Criterion};
use pitchforge::api::{AnalysisRequest, PitchAnalysisService};
use pitchforge::conditions::{Cracking, Moisture, PitchConditions, Weather};
use pitchforge::config::Config;
use pitchforge::scorer::{PitchScorer, Ruleset};
use std::hint::black_box;

fn sample_conditions() -> PitchConditions {
    PitchConditions::new(Weather::Sunny, 15, Moisture::Low, Cracking::Extensive)
        .with_venue("Galle International Stadium")
        .with_recent_matches(6)
}

fn sample_requests(n: usize) -> Vec<AnalysisRequest> {
    let weathers = ["sunny", "cloudy", "rainy"];
    let moistures = ["low", "medium", "high"];
    let crackings = ["minimal", "moderate", "extensive"];
    let venues = ["Galle", "Lord's", "WACA", "Eden Gardens", "Unknown Park"];

    (0..n)
        .map(|i| AnalysisRequest {
            weather: Some(weathers[i % 3].to_string()),
            grass_coverage_percent: Some((i * 7 % 101) as i64),
            moisture: Some(moistures[(i / 3) % 3].to_string()),
            cracking: Some(crackings[(i / 9) % 3].to_string()),
            venue_name: Some(venues[i % venues.len()].to_string()),
            recent_matches_played: Some((i % 12) as i64),
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let conditions = sample_conditions();

    for ruleset in [Ruleset::Basic, Ruleset::Extended] {
        let scorer = PitchScorer::with_ruleset(ruleset);
        c.bench_function(&format!("analyze ({})", ruleset), |b| {
            b.iter(|| scorer.analyze(black_box(&conditions)))
        });
    }

    let scorer = PitchScorer::default();
    c.bench_function("score_debug", |b| {
        b.iter(|| scorer.score_debug(black_box(&conditions)))
    });

    let service = PitchAnalysisService::new(Config::default()).expect("default config is valid");
    let requests = sample_requests(1000);
    c.bench_function("analyze_batch (1k rows)", |b| {
        b.iter(|| service.analyze_batch(black_box(&requests)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
