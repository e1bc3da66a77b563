//! Command-line front end for axis resolution and inset placement.
//!
//! - `axes`: classify a variable's dimensions from a dataset description and
//!   resolve longitude/latitude/vertical/time values to indices
//! - `place`: lay out insets over a plotted scene, reserving each placed
//!   area before the next
//!
//! Inputs are JSON; results are printed to stdout as JSON.

mod axes;
mod config;
mod scene;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use axes::{run_axes, AxesQuery};
use cf_axes::{Dataset, LonLatBox};
use config::load_placer_config;
use scene::{run_scene, Scene};

#[derive(Parser, Debug)]
#[command(name = "layout-probe")]
#[command(about = "Resolve CF coordinate axes and place inset plots")]
struct Args {
    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info", global = true)]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify dimensions and resolve coordinate values to indices
    Axes {
        /// Dataset description (JSON)
        #[arg(long)]
        dataset: PathBuf,

        /// Data variable to resolve
        #[arg(long)]
        variable: String,

        /// Longitude, in either -180..180 or 0..360
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,

        /// Latitude
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Vertical coordinate in the axis's own units
        #[arg(long, allow_hyphen_values = true)]
        vertical: Option<f64>,

        /// Raw time-axis value
        #[arg(long, allow_hyphen_values = true, conflicts_with = "time_iso")]
        time: Option<f64>,

        /// Time as an ISO 8601 instant, converted through the axis units
        #[arg(long)]
        time_iso: Option<String>,

        /// Bounding box as min_lon,min_lat,max_lon,max_lat
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        bbox: Option<Vec<f64>>,
    },

    /// Place insets over a scene
    Place {
        /// Scene description (JSON)
        #[arg(long)]
        scene: PathBuf,

        /// Placer configuration (YAML); defaults to INSET_* environment variables
        #[arg(long, env = "INSET_CONFIG")]
        config: Option<PathBuf>,
    },
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse JSON: {:?}", path))
}

fn parse_bbox(values: &[f64]) -> Result<LonLatBox> {
    match values {
        [min_lon, min_lat, max_lon, max_lat] => {
            Ok(LonLatBox::new(*min_lon, *min_lat, *max_lon, *max_lat))
        }
        _ => bail!("--bbox takes 4 values, got {}", values.len()),
    }
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Logs go to stderr so stdout stays valid JSON.
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);
    if args.log_json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }

    let output = match args.command {
        Command::Axes {
            dataset,
            variable,
            lon,
            lat,
            vertical,
            time,
            time_iso,
            bbox,
        } => {
            info!(dataset = %dataset.display(), variable = %variable, "Resolving axes");
            let ds: Dataset = read_json(&dataset)?;
            let query = AxesQuery {
                lon,
                lat,
                vertical,
                time,
                time_iso,
                bbox: bbox.as_deref().map(parse_bbox).transpose()?,
            };
            serde_json::to_string_pretty(&run_axes(&ds, &variable, &query)?)?
        }
        Command::Place { scene, config } => {
            info!(scene = %scene.display(), "Placing insets");
            let config = load_placer_config(config.as_deref())?;
            let scene: Scene = read_json(&scene)?;
            serde_json::to_string_pretty(&run_scene(scene, config)?)?
        }
    };

    println!("{}", output);
    Ok(())
}
