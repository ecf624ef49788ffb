//! `securecheck` — command-line surface over the SecureCheck engine.

mod render;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use securecheck_analysis::{describe, estimate, InsightCategory, InsightRegistry};
use securecheck_core::config::{AppConfig, DatabaseConfig};
use securecheck_core::errors::{SecureCheckError, SecureCheckResult};
use securecheck_core::telemetry;
use securecheck_core::traits::StopStore;
use securecheck_core::types::query::StopQuery;
use securecheck_core::types::stop::Gender;
use securecheck_storage::StorageEngine;

/// Default config file looked up in the working directory.
const CONFIG_FILE: &str = "securecheck.toml";

#[derive(Parser)]
#[command(name = "securecheck", version, about = "Traffic-stop analytics over a SQLite registry")]
struct Cli {
    /// Path to the config file (default: ./securecheck.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Database path, overriding the config file
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the available insights
    Insights {
        /// Only show one category (vehicle, demographic, time, violation,
        /// location, advanced)
        #[arg(long, value_parser = parse_category)]
        category: Option<InsightCategory>,
    },
    /// Run one insight and render its result table
    Run {
        /// Insight id (see `insights`)
        id: String,
    },
    /// Show the dashboard headline metrics
    Summary,
    /// Preview the most recent log entries
    Logs {
        /// Number of entries to show
        #[arg(long, default_value_t = 20)]
        limit: u32,
    },
    /// List the stop duration labels observed in the dataset
    Durations,
    /// Estimate outcome and violation for a new stop, and print its log summary
    Estimate(EstimateArgs),
    /// Import a stops dataset from a CSV file
    Import {
        /// CSV file with a traffic_stops header row
        path: PathBuf,
    },
}

#[derive(Args)]
struct EstimateArgs {
    /// Driver gender: "Male" or "Female"
    #[arg(long, value_parser = parse_gender)]
    gender: String,

    /// Driver age
    #[arg(long)]
    age: i64,

    /// A search was conducted during the stop
    #[arg(long)]
    searched: bool,

    /// Search type, when a search was conducted
    #[arg(long)]
    search_type: Option<String>,

    /// Stop duration label, e.g. "0-15 Min" (see `durations`)
    #[arg(long)]
    duration: String,

    /// The stop was drug-related
    #[arg(long)]
    drugs: bool,

    /// Stop date (YYYY-MM-DD)
    #[arg(long)]
    date: NaiveDate,

    /// County name for the log summary
    #[arg(long)]
    county: String,

    /// Vehicle registration number
    #[arg(long)]
    vehicle: String,
}

fn parse_gender(literal: &str) -> Result<String, String> {
    Gender::parse(literal)
        .map(|_| literal.to_string())
        .map_err(|e| e.to_string())
}

fn parse_category(label: &str) -> Result<InsightCategory, String> {
    match label.to_ascii_lowercase().as_str() {
        "vehicle" => Ok(InsightCategory::Vehicle),
        "demographic" => Ok(InsightCategory::Demographic),
        "time" => Ok(InsightCategory::TimeAndDuration),
        "violation" => Ok(InsightCategory::Violation),
        "location" => Ok(InsightCategory::Location),
        "advanced" => Ok(InsightCategory::Advanced),
        other => Err(format!(
            "unknown category {other:?}: expected vehicle, demographic, time, violation, location, or advanced"
        )),
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> SecureCheckResult<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    telemetry::init_tracing(&config.telemetry.filter);

    match cli.command {
        Command::Insights { category } => {
            let registry = InsightRegistry::builtin();
            match category {
                Some(category) => {
                    for insight in registry.by_category(category) {
                        println!("{:<36} {}", insight.id, insight.label);
                    }
                }
                None => {
                    for category in InsightCategory::ALL {
                        println!("{category}");
                        for insight in registry.by_category(category) {
                            println!("  {:<34} {}", insight.id, insight.label);
                        }
                    }
                }
            }
        }
        Command::Run { id } => {
            let engine = open_engine(&config.database)?;
            let registry = InsightRegistry::builtin();
            let insight = registry
                .get(&id)
                .ok_or_else(|| SecureCheckError::UnknownInsight { id: id.clone() })?;
            let table = registry.run(&engine, &id)?;

            if table.is_empty() {
                println!("No results found.");
                return Ok(());
            }
            println!("{}", insight.label);
            println!("{}", render::render_table(&table));
            if let Some(hint) = render::render_chart_spec(&insight.chart) {
                println!("{hint}");
            }
        }
        Command::Summary => {
            let engine = open_engine(&config.database)?;
            println!("{}", render::render_summary(&engine.summary()?));
        }
        Command::Logs { limit } => {
            let engine = open_engine(&config.database)?;
            let table = engine.table(&format!(
                "SELECT id, stop_date, stop_time, country_name, driver_gender, driver_age,
                        violation, stop_duration, stop_outcome, vehicle_number
                 FROM traffic_stops ORDER BY id DESC LIMIT {limit}"
            ))?;
            if table.is_empty() {
                println!("No data available in the table.");
            } else {
                println!("{}", render::render_table(&table));
            }
        }
        Command::Durations => {
            let engine = open_engine(&config.database)?;
            for duration in engine.distinct_stop_durations()? {
                println!("{duration}");
            }
        }
        Command::Estimate(args) => {
            let engine = open_engine(&config.database)?;
            let reference = engine.fetch_all()?;
            let query = StopQuery {
                driver_gender: args.gender,
                driver_age: args.age,
                search_conducted: args.searched,
                stop_duration: args.duration,
                drugs_related_stop: args.drugs,
                stop_date: args.date,
                county_name: args.county,
                search_type: args.search_type,
                vehicle_number: args.vehicle,
            };

            let result = estimate(&query, &reference)?;
            println!("Violation: {}", result.violation);
            println!("Stop Outcome: {}", result.outcome);
            println!();
            println!("{}", describe(&query));
        }
        Command::Import { path } => {
            let engine = open_engine(&config.database)?;
            let count = engine.import_csv(&path)?;
            println!("Imported {count} stops from {}", path.display());
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> SecureCheckResult<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None if std::path::Path::new(CONFIG_FILE).exists() => AppConfig::load(CONFIG_FILE)?,
        None => AppConfig::default(),
    };
    if let Some(db) = &cli.db {
        config.database.path = db.clone();
    }
    Ok(config)
}

fn open_engine(database: &DatabaseConfig) -> SecureCheckResult<StorageEngine> {
    debug!(path = %database.path.display(), "opening storage engine");
    Ok(StorageEngine::open(database)?)
}
