use crate::reports;
use clap::Args;
use pitchforge::api::PitchAnalysisService;
use pitchforge::config::Config;
use pitchforge::error::{PitchError, PitchResult};
use pitchforge::loader::load_requests_from_file;
use serde_json::json;

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub config: Config,

    /// .csv (header row) or .json (array of requests)
    #[arg(short, long)]
    pub input: String,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: BatchArgs, service: &PitchAnalysisService) -> PitchResult<()> {
    let requests = load_requests_from_file(&args.input)?;
    let results = service.analyze_batch(&requests);

    if args.json {
        let rows: Vec<_> = results
            .iter()
            .enumerate()
            .map(|(i, r)| match r {
                Ok(report) => json!({ "row": i + 1, "report": report }),
                Err(e) => json!({ "row": i + 1, "error": e.to_string() }),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        reports::print_batch_report(&results);
    }

    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        return Err(PitchError::Validation(format!(
            "{} of {} rows could not be analysed",
            failed,
            results.len()
        )));
    }
    Ok(())
}
