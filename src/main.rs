use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use market_scout::calculate;
use market_scout::config::AppConfig;
use market_scout::models::reference_competitions;
use market_scout::report;
use market_scout::storage;
use market_scout::wizard::form::FormDriver;

#[derive(Parser)]
#[command(name = "market-scout")]
#[command(about = "Market value calculator for competitive Free Fire players")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./market-scout.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive valuation wizard
    Wizard {
        /// Save the finished profile to this JSON file
        #[arg(long)]
        save_profile: Option<PathBuf>,

        /// Write the full report to this file
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Evaluate a profile JSON file and print the score summary
    Evaluate {
        /// Path to the profile JSON file
        profile: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the full report for a profile JSON file
    Report {
        /// Path to the profile JSON file
        profile: PathBuf,

        /// Write the report to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// List the reference competition table
    Competitions,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli.config);
    let log_level = cli.log_level.unwrap_or_else(|| config.log_level.clone());

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::debug!("Starting market-scout v{}", env!("CARGO_PKG_VERSION"));

    let currency = config.report.currency.clone();

    match cli.command {
        Commands::Wizard { save_profile, out } => {
            let stdin = io::stdin();
            let mut driver =
                FormDriver::new(stdin.lock(), io::stdout()).with_currency(currency.clone());

            match driver.run()? {
                Some((profile, result)) => {
                    if let Some(path) = save_profile {
                        storage::save_profile(&path, &profile)?;
                        println!("Profile saved to {}", path.display());
                    }
                    if let Some(path) = out {
                        let rendered =
                            report::render_full_report(&profile, &result, currency.as_deref());
                        storage::export_report(&path, &rendered)?;
                        println!("Report written to {}", path.display());
                    }
                }
                None => println!("Aborted, nothing evaluated."),
            }
        }
        Commands::Evaluate { profile, json } => {
            let profile = storage::load_profile(&profile)?;
            warn_on_issues(&profile);

            let result = calculate::evaluate(&profile);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!(
                    "{}",
                    report::render_summary(&profile, &result, currency.as_deref())
                );
            }
        }
        Commands::Report { profile, out } => {
            let profile = storage::load_profile(&profile)?;
            warn_on_issues(&profile);

            let result = calculate::evaluate(&profile);
            let rendered = report::render_full_report(&profile, &result, currency.as_deref());

            match out {
                Some(path) => {
                    storage::export_report(&path, &rendered)?;
                    println!("Report written to {}", path.display());
                }
                None => print!("{}", rendered),
            }
        }
        Commands::Competitions => {
            print!("{}", report::render_competitions(&reference_competitions()));
        }
    }

    Ok(())
}

/// Load the config file if it exists, falling back to defaults.
fn load_config(path: &str) -> AppConfig {
    let path = PathBuf::from(path);
    if !path.exists() {
        return AppConfig::default();
    }
    match AppConfig::from_file(&path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Ignoring config {}: {}", path.display(), e);
            AppConfig::default()
        }
    }
}

/// Surface validation issues without refusing to evaluate; the engine is
/// total and scores whatever it is given.
fn warn_on_issues(profile: &market_scout::models::PlayerProfile) {
    for issue in profile.validate() {
        tracing::warn!("{}", issue);
    }
}
