use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::{ArgAction, Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use tally_core::ImportSummary;
use tally_ingest::parse_statement_text_on;
use tracing::info;

mod config;
mod output;
mod state;
mod taxonomy_file;

use config::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "tally", version, about = "Import pasted statement text as typed finance entries")]
struct Cli {
    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a statement export or pasted text and print the entries
    Import {
        /// Input file; `-` or omitted reads stdin
        file: Option<PathBuf>,

        /// Taxonomy file (overrides config)
        #[arg(long)]
        taxonomy: Option<PathBuf>,

        /// Output format (overrides config)
        #[arg(long, value_enum)]
        output: Option<OutputFormat>,

        /// Date used for rows without a usable date (default: today)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Config file commands
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Category taxonomy commands
    Taxonomy {
        #[command(subcommand)]
        command: TaxonomyCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write ~/.tally/config.toml with defaults
    Init,
    /// Print the effective config
    Show,
}

#[derive(Subcommand, Debug)]
enum TaxonomyCommand {
    /// Write the built-in taxonomy to ~/.tally/taxonomy.toml
    Init,
    /// Print the effective taxonomy as TOML
    Show {
        #[arg(long)]
        taxonomy: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Command::Import {
            file,
            taxonomy,
            output,
            today,
        } => {
            let cfg = config::load_config()?;
            let taxonomy_path = taxonomy.or(cfg.import.taxonomy_path);
            let taxonomy = taxonomy_file::load_taxonomy(taxonomy_path.as_deref())?;

            let (label, text) = read_input(file.as_ref())?;
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            let entries = parse_statement_text_on(&text, &taxonomy, today);

            let summary = ImportSummary::from_entries(&entries);
            info!(source = %label, total = summary.total(), "import finished");
            if summary.is_empty() {
                bail!("No importable data found in {}", label);
            }

            let format = output.unwrap_or(cfg.import.output);
            println!("{}", output::render(&entries, format)?);
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                println!("# {}", config::config_path()?.display());
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },

        Command::Taxonomy { command } => match command {
            TaxonomyCommand::Init => {
                taxonomy_file::init_taxonomy()?;
            }
            TaxonomyCommand::Show { taxonomy } => {
                let cfg = config::load_config()?;
                let path = taxonomy.or(cfg.import.taxonomy_path);
                let tax = taxonomy_file::load_taxonomy(path.as_deref())?;
                print!("{}", toml::to_string_pretty(&tax).context("serialize taxonomy")?);
            }
        },
    }

    Ok(())
}

fn read_input(file: Option<&PathBuf>) -> Result<(String, String)> {
    match file {
        Some(p) if p.as_os_str() != "-" => {
            let text = std::fs::read_to_string(p)
                .with_context(|| format!("reading {}", p.display()))?;
            Ok((p.display().to_string(), text))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(("stdin".to_string(), text))
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tally_ingest={level},tally_cli={level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
