//! Shared command-line plumbing for the skillcheck tools.
//!
//! Every tool binary is `tool [PATH]`: load one JSON object from `PATH` or
//! stdin, evaluate it, print the envelope to stdout, exit 0/1. Load and
//! output failures exit with [`EXIT_ABORTED`].

pub mod error;
pub mod logging;
pub mod settings;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Args, CommandFactory, FromArgMatches, Parser};
use skillcheck_core::{Validator, envelope_json_schema, load_document, write_envelope};

pub use error::{CliError, CliResult};
pub use logging::init_logging;
pub use settings::{LogFormat, LogSettings};

/// Exit status when the input could not be loaded or the output written.
pub const EXIT_ABORTED: u8 = 2;

/// Input location shared by every tool.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// JSON document to validate; reads stdin when omitted.
    #[arg(value_name = "PATH")]
    pub input: Option<PathBuf>,
}

#[derive(Parser, Debug)]
#[command(version)]
struct ToolCli {
    #[command(flatten)]
    input: InputArgs,
}

/// Entry point for a standalone tool binary.
pub fn run_tool<V: Validator>(validator: &V) -> ExitCode {
    let matches = ToolCli::command()
        .name(validator.tool())
        .about(format!("Run the {} contract check", validator.tool()))
        .get_matches();
    let cli = match ToolCli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };

    finish(init_from_env().and_then(|()| execute(validator, cli.input.input.as_deref())))
}

/// Load settings from the environment and install logging.
pub fn init_from_env() -> CliResult<()> {
    let settings = LogSettings::from_env()?;
    init_logging(&settings)
}

/// Load, evaluate, and report. Returns the exit status for the envelope.
pub fn execute<V: Validator>(validator: &V, input: Option<&Path>) -> CliResult<u8> {
    let timer = Instant::now();
    let source = input
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "-".to_string());
    tracing::info!(event = "run_started", tool = validator.tool(), input = %source);

    let document = load_document(input)?;
    let envelope = validator.check(&document);

    let mut stdout = io::stdout().lock();
    write_envelope(&envelope, &mut stdout)?;

    tracing::info!(
        event = "run_finished",
        tool = validator.tool(),
        ok = envelope.ok,
        duration_ms = timer.elapsed().as_millis()
    );
    Ok(envelope.exit_code())
}

/// Print the envelope JSON Schema to stdout.
pub fn print_envelope_schema() -> CliResult<u8> {
    let schema = envelope_json_schema();
    let rendered = serde_json::to_string_pretty(&schema).map_err(skillcheck_core::ReportError::from)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(skillcheck_core::EXIT_OK)
}

/// Map a run outcome onto the process exit status.
pub fn finish(outcome: CliResult<u8>) -> ExitCode {
    match outcome {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            tracing::debug!(event = "run_aborted", error = %err);
            eprintln!("error: {err}");
            ExitCode::from(EXIT_ABORTED)
        }
    }
}
