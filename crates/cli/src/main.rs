mod config;
mod demo;
mod report;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{CliConfig, OutputFormat};
use dxr_core::{intake, Assessment, DiagnosticService, Disease, Patient};
use report::{ExplanationView, Report, RuleTable};

#[derive(Parser)]
#[command(name = "dxr")]
#[command(about = "Respiratory diagnosis rule engine CLI")]
struct Cli {
    /// Enable debug logging (overrides RUST_LOG and DXR_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess one or more patient files (.yaml, .yml or .json)
    Assess {
        /// Patient files
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Output format (defaults to DXR_FORMAT, then text)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Explain why a disease was or was not diagnosed
    Explain {
        /// Patient file
        file: PathBuf,
        /// Disease name or slug (for example "COVID-19" or "covid19")
        disease: Disease,
    },
    /// List the registered diagnostic rules
    Rules,
    /// Assess the built-in sample patients
    Demo {
        /// Output format (defaults to DXR_FORMAT, then text)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
}

/// Entry point for the dxr CLI
///
/// # Environment Variables
/// - `RUST_LOG` / `DXR_LOG`: tracing filter (default: "dxr=info")
/// - `DXR_FORMAT`: output format for `assess` and `demo` ("text" or "json")
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let format_flag = match &cli.command {
        Some(Commands::Assess { format, .. }) | Some(Commands::Demo { format }) => *format,
        _ => None,
    };
    let config = CliConfig::from_env(format_flag, cli.verbose)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(config.log_filter())?)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let service = DiagnosticService::new();

    match cli.command {
        Some(Commands::Assess { files, .. }) => {
            let patients = files
                .iter()
                .map(|path| load_patient(path))
                .collect::<anyhow::Result<Vec<_>>>()?;
            tracing::info!(patients = patients.len(), "assessing patient files");
            print_assessments(&service, &patients, config.format())?;
        }
        Some(Commands::Explain { file, disease }) => {
            let patient = load_patient(&file)?;
            let diagnosis = service.explain(&patient, disease);
            print!("{}", ExplanationView::new(disease, diagnosis.as_ref()));
        }
        Some(Commands::Rules) => {
            print!("{}", RuleTable::new(service.engine()));
        }
        Some(Commands::Demo { .. }) => {
            let patients = demo::sample_patients();
            tracing::info!(patients = patients.len(), "assessing sample patients");
            match config.format() {
                OutputFormat::Json => print_assessments(&service, &patients, OutputFormat::Json)?,
                OutputFormat::Text => {
                    for (index, patient) in patients.iter().enumerate() {
                        let assessment = service.assess(patient);
                        print!("{}", Report::new(patient, &assessment));
                        if index == 0 {
                            let diagnosis = assessment.diagnosis(Disease::Covid19);
                            print!("{}", ExplanationView::new(Disease::Covid19, diagnosis));
                        }
                    }
                }
            }
        }
        None => {
            println!("Use 'dxr --help' for commands");
        }
    }

    Ok(())
}

fn load_patient(path: &Path) -> anyhow::Result<Patient> {
    intake::load(path).with_context(|| format!("failed to load patient from {}", path.display()))
}

fn print_assessments(
    service: &DiagnosticService,
    patients: &[Patient],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for patient in patients {
                let assessment = service.assess(patient);
                print!("{}", Report::new(patient, &assessment));
            }
        }
        OutputFormat::Json => {
            let assessments: Vec<Assessment> =
                patients.iter().map(|p| service.assess(p)).collect();
            println!("{}", serde_json::to_string_pretty(&assessments)?);
        }
    }
    Ok(())
}
