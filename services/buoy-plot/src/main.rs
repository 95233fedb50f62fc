//! Buoy observation plotter.
//!
//! Fetches the latest NDBC observation for every station, drops stations
//! missing the requested variable, and renders a colored scatter map with a
//! horizontal color bar. The figure is either saved as
//! `buoys_<YYYYMMDD_HHMMZ>.<format>` in the current directory or handed to
//! the platform image viewer.
//!
//! One-shot and fail-fast: any fetch, parse or write failure terminates the
//! run with a non-zero status.

mod figure;
mod output;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use buoy_common::Variable;
use ndbc::NdbcClient;

#[derive(Parser, Debug)]
#[command(name = "buoy-plot")]
#[command(about = "Plot the latest buoy observations on a map")]
struct Args {
    /// Color map for the station markers
    #[arg(long, default_value = "Oranges")]
    cmap: String,

    /// Observation variable to plot
    #[arg(long = "var", default_value = "water_temperature")]
    var: String,

    /// Save the figure instead of displaying it
    #[arg(long)]
    savefig: bool,

    /// Image format when saving
    #[arg(long, default_value = "png")]
    imgformat: String,

    /// Fixed lower bound for the color scale (default: data minimum)
    #[arg(long)]
    min: Option<i32>,

    /// Fixed upper bound for the color scale (default: data maximum)
    #[arg(long)]
    max: Option<i32>,

    /// Marker size in pixels
    #[arg(long, default_value = "5")]
    msize: u32,

    /// Observation feed endpoint
    #[arg(long, env = "NDBC_URL", default_value = ndbc::client::DEFAULT_URL)]
    url: String,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing; diagnostics go to stderr so the progress lines on
    // stdout stay scrapeable
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    println!("Downloading data...");
    let client = NdbcClient::with_url(args.url.clone())?;
    let mut table = client.latest_observations().await?;
    println!("Complete. {} stations", table.len());

    // The variable lookup happens after the fetch, so an unknown name fails
    // at the filter stage rather than before the download
    let var = Variable::from_name(&args.var)?;
    let kept = table.retain_present(var);
    println!("{} stations with variable {}", kept, args.var);
    println!("Plotting...");

    let canvas = figure::render(
        &table,
        var,
        &args.cmap,
        args.min.map(f64::from),
        args.max.map(f64::from),
        args.msize,
    )?;

    if args.savefig {
        let path = output::save_timestamped(&canvas, &args.imgformat, Utc::now())?;
        info!(path = %path.display(), "Figure saved");
    } else {
        output::display(&canvas)?;
    }

    Ok(())
}
