use crate::server;
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use ghost_job_analyzer::config::{load_scoring_file, AppConfig, TelemetryConfig};
use ghost_job_analyzer::error::AppError;
use ghost_job_analyzer::telemetry::{self, LogTarget};
use ghost_job_analyzer::workflows::ghost_jobs::report::{render_flagged, write_reports};
use ghost_job_analyzer::workflows::ghost_jobs::{canonicalize_link, BatchClassifier, ReportError};
use ghost_job_analyzer::workflows::intake::JobIntake;
use serde_json::json;
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser, Debug)]
#[command(
    name = "ghost-job-analyzer",
    about = "Score scraped job postings for ghost-job risk",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Analyse a JSON job export and write the report set
    Analyze(AnalyzeArgs),
    /// Print the canonical job-view URL for a link, id, or path
    Link(LinkArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// JSON export: an array of jobs or an object with a `jobs` array
    input: PathBuf,
    /// Directory for the timestamped reports (defaults to GHOST_REPORT_DIR)
    #[arg(long)]
    report_dir: Option<PathBuf>,
    /// TOML file overriding scoring thresholds, weights and keywords
    #[arg(long)]
    scoring_config: Option<PathBuf>,
    /// Print the batch summary as JSON instead of the flagged listing
    #[arg(long)]
    json: bool,
    /// Only log warnings and errors
    #[arg(long)]
    quiet: bool,
}

#[derive(Args, Debug)]
struct LinkArgs {
    value: String,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Analyze(args) => run_analyze(args),
        Command::Link(args) => {
            println!("{}", canonicalize_link(&args.value));
            Ok(())
        }
    }
}

fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;

    let telemetry = if args.quiet {
        TelemetryConfig {
            log_level: "warn".to_string(),
        }
    } else {
        config.telemetry.clone()
    };
    telemetry::init_with(&telemetry, LogTarget::Stderr)?;

    let scoring = match &args.scoring_config {
        Some(path) => load_scoring_file(path)?,
        None => config.scoring.load()?,
    };

    let intake = JobIntake::from_path(&args.input)?;
    if !intake.skipped.is_empty() {
        warn!(
            skipped = intake.skipped.len(),
            input = %args.input.display(),
            "some job entries were skipped"
        );
    }

    let classifier = BatchClassifier::new(scoring);
    let outcome = classifier.classify(intake.jobs);

    let report_dir = args.report_dir.unwrap_or(config.reports.directory);
    let written = write_reports(&report_dir, &outcome, Local::now().naive_local())?;

    if args.json {
        let payload = json!({
            "summary": outcome.summary,
            "skipped": intake.skipped,
            "reports": {
                "flagged": written.flagged,
                "all": written.full,
                "master": written.master,
            },
        });
        let rendered = serde_json::to_string_pretty(&payload).map_err(ReportError::from)?;
        println!("{rendered}");
    } else {
        print!("{}", render_flagged(&outcome.jobs));
        println!();
        println!(
            "Analysed {} postings: {} flagged, {} locale matches",
            outcome.summary.total, outcome.summary.flagged, outcome.summary.locale_matches
        );
        if let Some(path) = &written.flagged {
            println!("Flagged report: {}", path.display());
        }
        println!("Full analysis:  {}", written.full.display());
        println!("Master report:  {}", written.master.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["ghost-job-analyzer"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn analyze_accepts_overrides() {
        let cli = Cli::try_parse_from([
            "ghost-job-analyzer",
            "analyze",
            "jobs.json",
            "--report-dir",
            "out",
            "--scoring-config",
            "scoring.toml",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Analyze(args)) => {
                assert_eq!(args.input, PathBuf::from("jobs.json"));
                assert_eq!(args.report_dir, Some(PathBuf::from("out")));
                assert_eq!(args.scoring_config, Some(PathBuf::from("scoring.toml")));
                assert!(args.json);
                assert!(!args.quiet);
            }
            other => panic!("expected analyze command, got {other:?}"),
        }
    }

    #[test]
    fn link_takes_a_positional_value() {
        let cli = Cli::try_parse_from(["ghost-job-analyzer", "link", "1234567"]).expect("parses");
        match cli.command {
            Some(Command::Link(args)) => assert_eq!(args.value, "1234567"),
            other => panic!("expected link command, got {other:?}"),
        }
    }
}
