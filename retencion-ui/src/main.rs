use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use retencion_core::TaxRegimeConfig;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Invoice withholding calculator for the Ecuadorian general regime.
///
/// Opens an interactive terminal session: type a tax-inclusive invoice
/// total and the subtotal, VAT, withholdings, and net payable update as
/// you type.
#[derive(Debug, Parser)]
struct Cli {
    /// Append log output to this file.
    /// Without it, log records are discarded so they cannot corrupt the
    /// terminal UI.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set, falling back to `info`.
/// * Writes to the requested file only; no subscriber is installed when
///   the UI owns the terminal and no file was given.
fn init_tracing(log_file: Option<&Path>) -> anyhow::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| anyhow::anyhow!("cannot open log file '{}': {e}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    debug!("launching calculator");
    retencion_ui::run_app(TaxRegimeConfig::default())
}
