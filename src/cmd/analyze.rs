use crate::reports;
use clap::Args;
use pitchforge::api::{AnalysisRequest, PitchAnalysisService};
use pitchforge::config::Config;
use pitchforge::error::PitchResult;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub config: Config,

    /// sunny, cloudy or rainy
    #[arg(short, long)]
    pub weather: String,

    /// Grass coverage in percent (clamped to 0-100)
    #[arg(short, long, allow_negative_numbers = true)]
    pub grass: i64,

    /// low, medium or high
    #[arg(short, long)]
    pub moisture: String,

    /// minimal, moderate or extensive
    #[arg(short, long)]
    pub cracking: String,

    #[arg(long)]
    pub venue: Option<String>,

    /// Matches played on this surface recently (capped by --max-recent-matches)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub recent_matches: i64,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl AnalyzeArgs {
    fn to_request(&self) -> AnalysisRequest {
        AnalysisRequest {
            weather: Some(self.weather.clone()),
            grass_coverage_percent: Some(self.grass),
            moisture: Some(self.moisture.clone()),
            cracking: Some(self.cracking.clone()),
            venue_name: self.venue.clone(),
            recent_matches_played: Some(self.recent_matches),
        }
    }
}

pub fn run(args: AnalyzeArgs, service: &PitchAnalysisService, debug: bool) -> PitchResult<()> {
    let report = service.analyze_request(args.to_request())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    reports::print_analysis_report(&report);
    if debug {
        let breakdown = service.scorer().score_debug(&report.conditions);
        reports::print_breakdown(&breakdown);
    }
    Ok(())
}
