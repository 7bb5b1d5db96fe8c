use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tally_core::{RawRow, SkipReason, Transaction, reconcile_rows};
use tally_ingest::{read_ledger_csv, read_ledger_json};

mod config;

#[derive(Parser, Debug)]
#[command(name = "tally", version, about = "Statement transaction reconciliation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Reconcile a ledger file and print transactions as JSON
    Extract {
        /// Ledger file: .json wire payload or .csv table dump
        #[arg(long)]
        ledger: PathBuf,

        /// Also report skipped rows with reasons on stderr
        #[arg(long)]
        skipped: bool,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Ingest a ledger and report reconciliation counts without extracting
    Check {
        /// Ledger file: .json or .csv
        #[arg(long)]
        ledger: PathBuf,
    },

    /// Config file management
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default ~/.tally/config.toml if none exists
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Extract {
            ledger,
            skipped,
            pretty,
        } => extract(&ledger, skipped, pretty)?,

        Command::Check { ledger } => check(&ledger)?,

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
        },
    }

    Ok(())
}

/// Pick the reader by file extension.
fn load_rows(path: &Path) -> Result<Vec<RawRow>> {
    if !path.exists() {
        bail!("ledger not found: {}", path.display());
    }
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => read_ledger_json(path),
        Some("csv") => read_ledger_csv(path),
        _ => bail!(
            "unsupported ledger format: {} (expected .json or .csv)",
            path.display()
        ),
    }
}

fn extract(path: &Path, skipped: bool, pretty: bool) -> Result<()> {
    let cfg = config::load_config()?;
    let pretty = pretty || cfg.output.pretty;
    let skipped = skipped || cfg.output.include_skipped;

    let rows = load_rows(path)?;
    let outcomes = reconcile_rows(&rows);

    if skipped {
        for (i, outcome) in outcomes.iter().enumerate() {
            if let Err(reason) = outcome {
                let reference = rows[i].reference.as_deref().unwrap_or("-");
                eprintln!("row {:>3} [{}] skipped: {}", i + 1, reference, reason.as_str());
            }
        }
    }

    let transactions: Vec<Transaction> = outcomes.into_iter().filter_map(Result::ok).collect();
    let json = if pretty {
        serde_json::to_string_pretty(&transactions)?
    } else {
        serde_json::to_string(&transactions)?
    };
    println!("{json}");
    Ok(())
}

fn check(path: &Path) -> Result<()> {
    let rows = load_rows(path).with_context(|| format!("ingesting {}", path.display()))?;
    let outcomes = reconcile_rows(&rows);

    let reconciled = outcomes.iter().filter(|o| o.is_ok()).count();
    let settled = outcomes
        .iter()
        .filter(|o| matches!(o, Ok(t) if !t.settlement_date.is_empty()))
        .count();
    let unclassified = outcomes
        .iter()
        .filter(|o| matches!(o, Err(SkipReason::UnclassifiedReference)))
        .count();
    let unparseable = outcomes
        .iter()
        .filter(|o| matches!(o, Err(SkipReason::UnparseableDescription)))
        .count();

    println!("Rows:       {}", rows.len());
    println!("Reconciled: {reconciled} ({settled} with settlement date)");
    println!(
        "Skipped:    {} (non-trade reference: {unclassified}, unparseable description: {unparseable})",
        unclassified + unparseable
    );
    Ok(())
}
