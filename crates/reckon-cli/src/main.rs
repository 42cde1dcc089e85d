//! `reckon` -- interactive decimal calculator.
//!
//! Without arguments, starts the read-eval-print loop on stdin/stdout.
//! With `-c <line>`, dispatches that single line and exits.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use reckon_core::App;
use reckon_core::commands::BUILTIN_COMMANDS;
use reckon_platform::NativeEnvironment;

/// Interactive calculator with arbitrary-precision decimal arithmetic.
#[derive(Parser)]
#[command(name = "reckon", about = "Interactive decimal calculator", version)]
struct Cli {
    /// Enable verbose (debug-level) logging on stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Load environment variables from this dotenv file (default: ./.env if present).
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// Deployment environment name, overriding the ENVIRONMENT variable.
    #[arg(long, value_name = "NAME")]
    environment: Option<String>,

    /// Run a single command line (e.g. "add 5 3") and exit.
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    command: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Before the subscriber, so a dotenv file may set RUST_LOG.
    let env_file = load_env_file(cli.env_file.as_deref())?;

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(cli.verbose).into()),
        )
        .init();

    if let Some(path) = &env_file {
        tracing::debug!(path = %path.display(), "loaded environment file");
    }

    let app = match cli.environment {
        Some(name) => App::with_commands(name, BUILTIN_COMMANDS),
        None => App::new(&NativeEnvironment),
    }
    .context("failed to load calculator commands")?;

    if let Some(line) = cli.command {
        if let Some(text) = app.session().dispatch(&line).render() {
            println!("{text}");
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    app.start(stdin.lock(), &mut stdout)
        .context("terminal I/O failed")?;
    Ok(())
}

/// Log filter used when `RUST_LOG` is unset.
fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Load a dotenv file into the process environment.
///
/// An explicitly named file must exist; the implicit `./.env` is optional.
/// Returns the path that was loaded, if any.
fn load_env_file(path: Option<&Path>) -> anyhow::Result<Option<PathBuf>> {
    match path {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("failed to load env file {}", path.display()))?;
            Ok(Some(path.to_path_buf()))
        }
        None => match dotenvy::dotenv() {
            Ok(path) => Ok(Some(path)),
            Err(err) if err.not_found() => Ok(None),
            Err(err) => Err(err).context("failed to load .env"),
        },
    }
}
