use anyhow::{Context, Result};
use billsift_core::{Bank, Outcome, Transaction};
use billsift_finance::pipeline::{process_statement, PipelineOptions, PipelineRun};
use clap::{Parser, Subcommand};
use log::debug;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

mod config;
mod setup;
mod state;
mod vendors;

#[derive(Parser, Debug)]
#[command(
    name = "billsift",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BILLSIFT_BUILD_SHA"), ")"),
    about = "Parse credit card statement text and categorize the transactions"
)]
struct Cli {
    /// Vendor database (overrides config.toml)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// More logging (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a statement, categorize it and export it as CSV
    Parse {
        /// Statement text file
        file: PathBuf,

        /// Issuing bank (case-insensitive)
        bank: String,

        /// CSV output (default from config: transactions.csv)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Skip malformed lines instead of rejecting the statement
        #[arg(long)]
        keep_going: bool,

        /// Categorize against a snapshot of the directory; register nothing, export nothing
        #[arg(long)]
        dry_run: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage the vendor directory
    Vendors {
        #[command(subcommand)]
        command: VendorCommand,
    },

    /// List supported banks
    Banks,

    /// Inspect or create ~/.billsift/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// One-time interactive setup: write config.toml and create the vendor database
    Setup,
}

#[derive(Subcommand, Debug)]
enum VendorCommand {
    /// Create the vendor table and list the tables present
    Init,

    /// List every vendor
    List {
        #[arg(long)]
        json: bool,
    },

    /// Add a vendor keyed by its raw statement text
    Add {
        key: String,
        short_name: String,
        category: String,

        /// Provenance recorded with the entry
        #[arg(long, default_value = "manual")]
        source: String,
    },

    /// Delete a vendor by its raw statement text
    Delete { key: String },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config.toml if missing
    Init,
    /// Print the effective configuration
    Show,
}

#[derive(Serialize)]
struct ParseJson<'a> {
    #[serde(flatten)]
    outcome: &'a Outcome,
    transactions: &'a [Transaction],
    skipped: Vec<String>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cfg = config::load_config()?;

    let outcome = match cli.command {
        Command::Parse { file, bank, out, keep_going, dry_run, json } => {
            let store_path = cfg.store_path(cli.db.as_deref())?;
            let export_path = (!dry_run).then(|| cfg.export_path(out.as_deref()));
            debug!("export path {:?}", export_path);

            if !json {
                println!("Parsing the credit card bill...");
                println!("Bank: {}", bank);
                println!("File: {}", file.display());
            }

            let opts = PipelineOptions { export_path, keep_going };
            let run = match vendors::open_store(&store_path) {
                Err(outcome) => PipelineRun::failed(outcome),
                Ok(store) if dry_run => match vendors::snapshot(&store) {
                    Ok(mut snapshot) => process_statement(&file, &bank, &mut snapshot, &opts),
                    Err(outcome) => PipelineRun::failed(outcome),
                },
                Ok(mut store) => process_statement(&file, &bank, &mut store, &opts),
            };

            print_run(&run, json)?;
            if json {
                return Ok(exit_code(&run.outcome));
            }
            if !run.outcome.is_error() {
                if let Some(p) = &opts.export_path {
                    println!("Transactions exported to {}", p.display());
                }
            }
            run.outcome
        }

        Command::Vendors { command } => {
            let store_path = cfg.store_path(cli.db.as_deref())?;
            match vendors::open_store(&store_path) {
                Err(outcome) => outcome,
                Ok(mut store) => match command {
                    VendorCommand::Init => vendors::init(&store, &store_path),
                    VendorCommand::List { json } => match vendors::fetch_sorted(&store) {
                        Err(outcome) => outcome,
                        Ok(list) if json => {
                            println!("{}", serde_json::to_string_pretty(&list)?);
                            return Ok(ExitCode::SUCCESS);
                        }
                        Ok(list) => {
                            for v in &list {
                                println!(
                                    "{} | {} | {} | {}",
                                    v.key, v.short_name, v.category, v.name_source
                                );
                            }
                            Outcome::info(format!("{} vendors", list.len()))
                        }
                    },
                    VendorCommand::Add { key, short_name, category, source } => {
                        vendors::add(&mut store, &key, &short_name, &category, &source)
                    }
                    VendorCommand::Delete { key } => vendors::delete(&mut store, &key),
                },
            }
        }

        Command::Banks => {
            for bank in Bank::ALL {
                println!("{:<6} {}", bank.id(), bank.label());
            }
            Outcome::info(format!("Supported banks: {}", Bank::supported_ids().join(", ")))
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => {
                config::init_config()?;
                return Ok(ExitCode::SUCCESS);
            }
            ConfigCommand::Show => {
                println!("# {}", config::config_path()?.display());
                println!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
                return Ok(ExitCode::SUCCESS);
            }
        },

        Command::Setup => {
            setup::run_setup()?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    Ok(report(&outcome))
}

fn print_run(run: &PipelineRun, json: bool) -> Result<()> {
    if json {
        let report = ParseJson {
            outcome: &run.outcome,
            transactions: &run.transactions,
            skipped: run.skipped.iter().map(ToString::to_string).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for t in &run.transactions {
        println!(
            "{} | {:<14} | {:>12} {:<2} | {:<9} | {}",
            t.date.format("%d/%m/%Y"),
            t.category.as_deref().unwrap_or("-"),
            t.amount,
            if t.is_refund() { "Cr" } else { "" },
            t.source,
            t.vendor
        );
    }
    for fault in &run.skipped {
        eprintln!("skipped: {}", fault);
    }
    Ok(())
}

fn exit_code(outcome: &Outcome) -> ExitCode {
    if outcome.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Print the outcome and pick the exit code.
fn report(outcome: &Outcome) -> ExitCode {
    if outcome.is_error() {
        eprintln!("{}", outcome.message);
    } else {
        println!("{}", outcome.message);
    }
    exit_code(outcome)
}
