use crate::api::AnalysisRequest;
use crate::error::{PitchError, PitchResult};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

/// CSV with a header row; empty cells count as absent.
pub fn load_requests_csv<R: Read>(reader: R) -> PitchResult<Vec<AnalysisRequest>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut requests = Vec::new();
    for result in rdr.deserialize() {
        let row: AnalysisRequest = result?;
        requests.push(row);
    }
    Ok(requests)
}

/// A JSON array of request objects.
pub fn load_requests_json<R: Read>(reader: R) -> PitchResult<Vec<AnalysisRequest>> {
    let requests: Vec<AnalysisRequest> = serde_json::from_reader(reader)?;
    Ok(requests)
}

pub fn load_requests_from_file<P: AsRef<Path>>(path: P) -> PitchResult<Vec<AnalysisRequest>> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let format = match ext.as_deref() {
        Some("csv") => "csv",
        Some("json") => "json",
        _ => {
            return Err(PitchError::Config(format!(
                "Unsupported batch file '{}' (expected .csv or .json)",
                path.display()
            )))
        }
    };

    let reader = BufReader::new(File::open(path)?);
    let requests = match format {
        "csv" => load_requests_csv(reader)?,
        _ => load_requests_json(reader)?,
    };

    if requests.is_empty() {
        return Err(PitchError::Validation(format!(
            "Batch file '{}' contains no rows",
            path.display()
        )));
    }

    info!(
        "📂 Loaded {} requests from {}",
        requests.len(),
        path.display()
    );
    Ok(requests)
}
