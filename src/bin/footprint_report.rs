//! Footprint report CLI
//!
//! Usage: footprint_report <survey.json> [--format markdown|json]
//!
//! The survey file holds one survey object or an array of them. Environment:
//! - FACTORS_PATH: optional JSON factor table overriding the built-in values
//! - REPORT_FORMAT: markdown (default) or json, overridden by --format

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use carbon_footprint_engine::{
    EmissionFactors, EmissionReport, EmissionsCalculator, JsonFormatter, MarkdownFormatter,
    SurveyInput,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, PartialEq)]
enum ReportFormat {
    Markdown,
    Json,
}

impl ReportFormat {
    fn parse(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            other => bail!("Unknown report format '{}' (expected markdown or json)", other),
        }
    }
}

fn parse_args() -> Result<(PathBuf, ReportFormat)> {
    let mut survey_path: Option<PathBuf> = None;
    let mut format = match std::env::var("REPORT_FORMAT") {
        Ok(name) => ReportFormat::parse(&name)?,
        Err(_) => ReportFormat::Markdown,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format" | "-f" => match args.next() {
                Some(name) => format = ReportFormat::parse(&name)?,
                None => bail!("--format requires a value"),
            },
            "--help" | "-h" => {
                println!("Usage: footprint_report <survey.json> [--format markdown|json]");
                std::process::exit(0);
            }
            path if survey_path.is_none() => survey_path = Some(PathBuf::from(path)),
            extra => bail!("Unexpected argument '{}'", extra),
        }
    }

    match survey_path {
        Some(path) => Ok((path, format)),
        None => bail!("Usage: footprint_report <survey.json> [--format markdown|json]"),
    }
}

fn main() -> Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "carbon_footprint_engine=info,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let (survey_path, format) = parse_args()?;

    let factors = match std::env::var("FACTORS_PATH") {
        Ok(path) => EmissionFactors::load(Path::new(&path))?,
        Err(_) => {
            tracing::info!("Using built-in emission factors");
            EmissionFactors::default()
        }
    };
    let calculator = EmissionsCalculator::new(factors);

    let surveys = SurveyInput::load(&survey_path)?.into_surveys();
    tracing::info!("Loaded {} survey(s) from {:?}", surveys.len(), survey_path);

    let results = calculator.calculate_batch(&surveys);
    let reports: Vec<EmissionReport> = surveys
        .iter()
        .zip(&results)
        .map(|(survey, result)| EmissionReport::build(&survey.company, result))
        .collect();

    match format {
        ReportFormat::Markdown => {
            let rendered: Vec<String> = reports.iter().map(MarkdownFormatter::format).collect();
            println!("{}", rendered.join("\n---\n\n"));
        }
        ReportFormat::Json => println!("{}", JsonFormatter::format_all(&reports)?),
    }

    Ok(())
}
