// propfile/src/main.rs

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use propfile::PropertiesStore;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "propfile")]
#[command(about = "Inspect and update Java-style .properties files", long_about = None)]
#[command(version)]
struct Cli {
    /// Properties file to operate on
    #[arg(value_name = "FILE")]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every key-value pair, later duplicates winning
    Show,
    /// Print the value of one key
    Get { key: String },
    /// Update or add KEY=VALUE pairs and save the file
    Set {
        #[arg(value_name = "KEY=VALUE", required = true, value_parser = parse_pair)]
        pairs: Vec<(String, String)>,
    },
}

fn parse_pair(s: &str) -> std::result::Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))
}

fn entrypoint() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let mut store = PropertiesStore::open(&cli.file)
        .context(format!("Failed to load {}", cli.file.display()))?;

    match cli.command {
        Commands::Show => {
            for (key, value) in store.get_all() {
                println!("{}={}", key, value);
            }
        }
        Commands::Get { key } => println!("{}", store.get(&key)?),
        Commands::Set { pairs } => {
            let count = store.set(pairs)?;
            store.save()?;
            println!("Set {} properties in {}", count, cli.file.display());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    match entrypoint() {
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
    }
}
