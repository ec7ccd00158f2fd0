use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use pitchforge::api::PitchAnalysisService;
use pitchforge::config::Config;
use std::process;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with engine/projection parameters.
    #[arg(global = true, short, long)]
    profile: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a single set of pitch conditions.
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Score every row of a CSV or JSON file.
    Batch(cmd::batch::BatchArgs),
    /// List the venue tables.
    Venues,
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let outcome = match cli.command {
        Commands::Analyze(args) => {
            let service = build_service(
                cli.profile.as_deref(),
                &args.config,
                matches.subcommand_matches("analyze"),
                cli.debug,
            );
            cmd::analyze::run(args, &service, cli.debug)
        }
        Commands::Batch(args) => {
            let service = build_service(
                cli.profile.as_deref(),
                &args.config,
                matches.subcommand_matches("batch"),
                cli.debug,
            );
            cmd::batch::run(args, &service)
        }
        Commands::Venues => {
            reports::print_venue_tables();
            Ok(())
        }
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}

/// Defaults < profile file < flags typed on the command line.
fn build_service(
    profile: Option<&str>,
    cli_config: &Config,
    sub_matches: Option<&ArgMatches>,
    debug: bool,
) -> PitchAnalysisService {
    let config = match (profile, sub_matches) {
        (Some(path), Some(sub)) => {
            info!("⚖️  Loading profile from: {}", path);
            let mut file_config = Config::load_from_file(path).unwrap_or_else(|e| {
                error!("❌ Failed to load profile '{}': {}", path, e);
                process::exit(1);
            });
            file_config.merge_from_cli(cli_config, sub);
            file_config
        }
        _ => {
            if debug {
                warn!("⚠️  No profile loaded. Using embedded defaults.");
            }
            cli_config.clone()
        }
    };

    PitchAnalysisService::new(config).unwrap_or_else(|e| {
        error!("❌ FATAL ERROR INITIALIZING SCORER: {}", e);
        process::exit(1);
    })
}
