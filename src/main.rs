mod advice;
mod catalog;
mod cli;
mod error;
mod report;
mod responses;
mod scoring;
mod snapshot;
mod types;

use crate::error::BedsideError;
use crate::types::report::{AssessmentReport, Recommendation};
use clap::Parser;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const FLAGGED: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 2;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let fallback = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init();
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn run() -> Result<i32, BedsideError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let catalog = catalog::Catalog::builtin();
    catalog.validate()?;
    advice::validate_advice_coverage(&catalog)?;

    match cli.command {
        cli::Commands::Questions(cmd) => {
            match cmd.format {
                cli::ReportFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&catalog)?)
                }
                cli::ReportFormat::Md => {
                    println!("{}", report::md::catalog_to_markdown(&catalog))
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Init(cmd) => {
            responses::write_template(&catalog, &cmd.path, cmd.force)?;
            println!("template written: {}", cmd.path.display());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Score(cmd) => {
            let responses = responses::load_responses(&cmd.path)?;
            tracing::debug!(path = %cmd.path.display(), "responses loaded");

            let scores = scoring::score(&catalog, &responses)?;
            let recommendations = advice::recommend(&catalog, &scores);
            let flagged = recommendations
                .iter()
                .any(|recommendation| matches!(recommendation, Recommendation::Category { .. }));
            let assessment = AssessmentReport {
                overall_score: scores.overall,
                tier: advice::overall_tier(scores.overall),
                category_scores: scores.categories,
                recommendations,
            };

            let rendered = report::render(&assessment, output_format(&cmd.format))?;
            println!("{rendered}");

            if flagged {
                Ok(exit_code::FLAGGED)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Export(cmd) => {
            let responses = responses::load_responses(&cmd.path)?;
            let scores = scoring::score(&catalog, &responses)?;
            let snapshot =
                snapshot::AssessmentSnapshot::new(&responses, &scores, chrono::Utc::now());
            let path = snapshot::write_snapshot(&cmd.out, &snapshot)?;
            tracing::info!(path = %path.display(), "assessment exported");
            println!("snapshot written: {}", path.display());
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
