use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cv_matcher::core::ServiceClient;
use cv_matcher::render::{render, terminal};
use cv_matcher::{start_web_server, AnalysisForm, CandidateDocument, ClientConfig, ServerSettings, SubmitOutcome};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;

use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE_ENV: &str = "CV_MATCHY_LOG_FILE";

#[derive(Parser)]
#[command(name = "cv-matchy")]
#[command(about = "Match a CV against a job description")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the analysis API server
    Serve {
        /// Port to listen on (overrides PORT and cv_matchy.yaml)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Submit a CV and a job description for analysis
    Analyze {
        /// CV document (PDF)
        #[arg(long)]
        cv: PathBuf,
        /// Job description text
        #[arg(long, conflicts_with = "job_file", required_unless_present = "job_file")]
        job: Option<String>,
        /// Read the job description from a file
        #[arg(long)]
        job_file: Option<PathBuf>,
        /// Analysis API base URL (overrides CV_MATCHY_API_URL)
        #[arg(long)]
        api_url: Option<String>,
        /// Print the raw analysis JSON instead of the formatted view
        #[arg(long)]
        json: bool,
    },
    /// Check that the analysis API is up
    Health {
        #[arg(long)]
        api_url: Option<String>,
    },
}

fn init_logging(default_filter: &str) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let json_layer = match std::env::var(LOG_FILE_ENV) {
        Ok(path) => {
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true) // Clear file on startup
                .open(&path)
                .with_context(|| format!("Failed to open log file: {}", path))?;
            Some(
                fmt::layer()
                    .json()
                    .with_writer(Mutex::new(file))
                    .with_span_list(false),
            )
        }
        Err(_) => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(json_layer)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Command::Serve { port } => {
            init_logging("cv_matcher=info,rocket::server=off")?;

            let mut settings = ServerSettings::load()?;
            if let Some(port) = port {
                settings.port = port;
            }

            start_web_server(settings).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Analyze {
            cv,
            job,
            job_file,
            api_url,
            json,
        } => {
            init_logging("cv_matcher=warn")?;

            let job_description = match (job, job_file) {
                (Some(text), _) => text,
                (None, Some(path)) => tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("Failed to read job description: {}", path.display()))?,
                (None, None) => String::new(),
            };

            let document = CandidateDocument::from_path(&cv).await?;
            let client = ServiceClient::new(ClientConfig::resolve(api_url))?;
            info!("Using analysis API at {}", client.base_url());

            let mut form = AnalysisForm::new();
            form.select_document(Some(document));
            form.set_job_description(job_description);

            let outcome = form.submit_if_ready(&client).await;

            if json && outcome == SubmitOutcome::Completed {
                if let Some(result) = form.result() {
                    println!("{}", serde_json::to_string_pretty(result)?);
                }
            } else {
                terminal::print_view(&render(&form));
            }

            Ok(match outcome {
                SubmitOutcome::Completed => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            })
        }
        Command::Health { api_url } => {
            init_logging("cv_matcher=warn")?;

            let client = ServiceClient::new(ClientConfig::resolve(api_url))?;
            let health = client.health().await?;
            println!("{}: {}", health.status, health.message);
            Ok(ExitCode::SUCCESS)
        }
    }
}
