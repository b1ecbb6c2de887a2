//! `global-logger` command line.
//!
//! Emits entries and times programs through the global logger, using the
//! same configuration file the library reads.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode, ExitStatus};

use clap::{Parser, Subcommand};

use global_logger::config::{load_config, LoggerConfig};
use global_logger::{call_site, Level, Metadata, MetadataValue};

#[derive(Parser)]
#[command(name = "global-logger")]
#[command(about = "Emit and time log entries through the global logger", long_about = None)]
struct Cli {
    /// Configuration file (TOML).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit a single log entry
    Emit {
        #[arg(short, long, default_value = "info")]
        level: Level,

        /// Metadata as key=value; JSON values are kept structured
        #[arg(short, long = "meta", value_parser = parse_key_value)]
        meta: Vec<(String, MetadataValue)>,

        message: String,
    },
    /// Run a program and log how long it took
    Time {
        #[arg(short, long, default_value = "trace")]
        level: Level,

        #[arg(short, long, default_value = "elapsed")]
        message: String,

        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
    /// Validate a config file and print the effective settings
    Check { path: PathBuf },
}

#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} exited with {status}")]
    Exit { program: String, status: ExitStatus },
}

fn parse_key_value(s: &str) -> Result<(String, MetadataValue), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{}`", s))?;
    let value = serde_json::from_str::<serde_json::Value>(value)
        .map(MetadataValue::from)
        .unwrap_or_else(|_| MetadataValue::from(value));
    Ok((key.to_string(), value))
}

fn run_program(program: &str, args: &[String]) -> Result<(), RunError> {
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|source| RunError::Spawn {
            program: program.to_string(),
            source,
        })?;
    if status.success() {
        Ok(())
    } else {
        Err(RunError::Exit {
            program: program.to_string(),
            status,
        })
    }
}

/// Exit status the CLI reports for a failed program.
///
/// The program's own code when it has one, 1 when it was killed by a
/// signal, 127 when it could not be started.
fn exit_status(err: &RunError) -> u8 {
    match err {
        RunError::Exit { status, .. } => status
            .code()
            .and_then(|code| u8::try_from(code).ok())
            .unwrap_or(1),
        RunError::Spawn { .. } => 127,
    }
}

fn check(path: &Path) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = load_config(path)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(ExitCode::SUCCESS)
}

fn execute(command: Commands) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match command {
        Commands::Emit {
            level,
            meta,
            message,
        } => {
            let metadata: Metadata = meta.into_iter().collect();
            global_logger::log(
                level,
                || message,
                || (!metadata.is_empty()).then_some(metadata),
                call_site!(),
            );
            Ok(ExitCode::SUCCESS)
        }
        Commands::Time {
            level,
            message,
            command,
        } => {
            let (program, args) = command.split_first().ok_or("missing program")?;
            let result = global_logger::log_elapsed_time(
                || message,
                level,
                || Some(global_logger::metadata! { "program" => program.as_str() }),
                call_site!(),
                || run_program(program, args),
            );
            match result {
                Ok(()) => Ok(ExitCode::SUCCESS),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    Ok(ExitCode::from(exit_status(&e)))
                }
            }
        }
        Commands::Check { path } => check(&path),
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    if let Commands::Check { path } = &cli.command {
        return check(path);
    }

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LoggerConfig::default(),
    };
    global_logger::init(&config)?;
    execute(cli.command)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
