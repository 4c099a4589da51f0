use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

use oui_compact::app::App;
use oui_compact::config::{DEFAULT_OUTPUT, DEFAULT_URL, RunConfig};
use oui_compact::error::OuiError;
use oui_compact::output::OutputMode;
use oui_compact::source::OuiHttpClient;

#[derive(Parser)]
#[command(name = "oui-compact")]
#[command(about = "Create a compact OUI CSV with only assignment and vendor name")]
#[command(version)]
struct Cli {
    /// Path to an IEEE (or already compact) OUI CSV; downloads from --url when omitted
    #[arg(long)]
    input: Option<Utf8PathBuf>,

    /// IEEE source URL
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,

    /// Output CSV path
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: Utf8PathBuf,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    if let Err(report) = run() {
        eprintln!("{report:?}");
        if let Some(error) = report.downcast_ref::<OuiError>() {
            return ExitCode::from(map_exit_code(error));
        }
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn map_exit_code(error: &OuiError) -> u8 {
    match error {
        OuiError::InputRead { .. } | OuiError::EmptyInput => 2,
        OuiError::Http(_) | OuiError::HttpStatus { .. } => 3,
        _ => 1,
    }
}

fn run() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };

    let config = RunConfig::from_args(cli.input, Some(cli.url), Some(cli.output))?;
    let app = App::new(OuiHttpClient::new());
    let summary = app.run(&config)?;
    output_mode.print_summary(&summary).into_diagnostic()?;
    Ok(())
}
