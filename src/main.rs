//! ML Conflict - Systemic Features and Interstate Conflict Prediction
//!
//! Command-line entry point. The `evaluate` subcommand runs the full
//! comparison pipeline and prints one line with the systemic-over-baseline
//! mean ROC-AUC ratio; `features` shows which columns each model would use.

use clap::{Parser, Subcommand};
use ml_conflict::data::DataTable;
use ml_conflict::features::{FeatureSelector, TARGET_COLUMN};
use ml_conflict::ml::{compare_feature_sets, EvalConfig};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "ml_conflict")]
#[command(about = "Systemic features and interstate conflict prediction")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare systemic against baseline features under cross-validation
    Evaluate {
        /// Path to the dyad-year CSV table
        #[arg(short, long)]
        data: PathBuf,

        /// Number of cross-validation folds
        #[arg(short, long, default_value = "5")]
        folds: usize,

        /// Random seed for fold splitting and weight initialization
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },

    /// Show the feature columns each model would select
    Features {
        /// Path to the dyad-year CSV table
        #[arg(short, long)]
        data: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the reported result
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate { data, folds, seed } => {
            info!("Loading {:?}", data);
            let table = DataTable::from_csv(&data)?;
            info!("Loaded {} rows, {} columns", table.n_rows(), table.n_cols());

            let table = table.drop_missing();
            let config = EvalConfig { folds, seed };
            let report = compare_feature_sets(&table, &config)?;

            info!("baseline: {}", report.baseline.summary());
            info!("systemic: {}", report.systemic.summary());
            println!("{}", report.summary_line());
        }

        Commands::Features { data } => {
            let table = DataTable::from_csv(&data)?;
            let names = table.column_names();

            for selector in [FeatureSelector::baseline(), FeatureSelector::systemic()] {
                let columns = selector.select(names, TARGET_COLUMN);
                println!("\n{} model ({} columns)", selector.label(), columns.len());
                println!("================");
                for column in &columns {
                    println!("{column}");
                }
            }
        }
    }

    Ok(())
}
