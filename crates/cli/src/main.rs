//! Workouts CLI - browse the catalog and estimate workout durations.

use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use workouts_catalog::{builtin_catalog, Catalog, JsonCatalogSource};
use workouts_duration::{estimate_document, format_duration};

mod render;

#[derive(Parser)]
#[command(name = "workouts")]
#[command(about = "Workout catalog and duration estimator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON catalog file (defaults to the built-in catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List workouts with their estimated duration
    List,
    /// Show a workout by slug
    Show {
        /// Workout slug, e.g. push-ups-lvl-1
        slug: String,
    },
    /// List exercises
    Exercises,
    /// Estimate the duration of loops stored in a JSON file
    Estimate {
        /// File holding a loop array or a workout object
        file: PathBuf,
    },
}

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let loaded;
    let catalog: &Catalog = match &cli.catalog {
        Some(path) => {
            let source = JsonCatalogSource::new(path);
            loaded = Catalog::load(&source)
                .await
                .with_context(|| format!("Failed to load catalog {}", path.display()))?;
            &loaded
        }
        None => {
            debug!("Using built-in catalog");
            builtin_catalog()
        }
    };

    match cli.command {
        Commands::List => {
            print!("{}", render::workout_list(catalog));
        }
        Commands::Show { slug } => {
            let Some(workout) = catalog.find_workout_by_slug(&slug) else {
                anyhow::bail!("Workout not found: {}", slug);
            };
            info!(id = %workout.id, "Showing workout");
            print!("{}", render::workout(catalog, workout));
        }
        Commands::Exercises => {
            print!("{}", render::exercise_list(catalog));
        }
        Commands::Estimate { file } => {
            let json = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let value: serde_json::Value = serde_json::from_str(&json)
                .with_context(|| format!("Invalid JSON in {}", file.display()))?;

            let seconds = estimate_document(&value);
            println!("Estimated duration: {} ({}s)", format_duration(seconds), seconds);
        }
    }

    Ok(())
}
