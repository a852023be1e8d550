mod dataset;
mod export;
mod geocode;
mod render;
mod search;
mod shell;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use radiusos_geocode::{GeocoderConfig, NominatimClient};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "radiusos")]
#[command(about = "Facility radius search over an uploaded spreadsheet")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Geocode every facility that lacks coordinates and list the table
    Geocode {
        /// CSV with an address column or facility_name, city and state
        input: PathBuf,
        /// Write the geocoded table as CSV
        #[arg(long)]
        output: Option<PathBuf>,
        /// Write map markers as JSON
        #[arg(long)]
        markers: Option<PathBuf>,
    },
    /// Find facilities within a radius of an address, nearest first
    Search {
        input: PathBuf,
        /// Free-text search address
        #[arg(long, short)]
        address: String,
        /// Radius in miles (defaults to RADIUSOS_DEFAULT_RADIUS_MILES)
        #[arg(long, short, value_parser = parse_radius)]
        radius: Option<f64>,
        /// Write the filtered results as CSV with a distance_miles column
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long)]
        markers: Option<PathBuf>,
        /// Use only coordinates already present in the input file
        #[arg(long)]
        skip_geocode: bool,
    },
    /// Load and geocode a dataset once, then answer searches read from stdin
    Shell { input: PathBuf },
}

fn parse_radius(raw: &str) -> Result<f64, String> {
    let value = raw
        .parse::<f64>()
        .map_err(|e| format!("invalid radius '{raw}': {e}"))?;
    radiusos_core::RadiusQuery::validate_radius(value).map_err(|e| e.to_string())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = radiusos_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let geocoder_config = GeocoderConfig::from_app_config(&config);
    tracing::debug!(?geocoder_config, env = %config.env, "starting radiusos");
    let geocoder =
        NominatimClient::new(&geocoder_config).context("failed to build geocoding client")?;

    match cli.command {
        Commands::Geocode {
            input,
            output,
            markers,
        } => {
            geocode::run_geocode(
                &geocoder,
                &input,
                output.as_deref(),
                markers.as_deref(),
            )
            .await
        }
        Commands::Search {
            input,
            address,
            radius,
            output,
            markers,
            skip_geocode,
        } => {
            let request = search::SearchRequest {
                input,
                address,
                radius_miles: radius.unwrap_or(config.default_radius_miles),
                output,
                markers,
                skip_geocode,
            };
            search::run_search(&geocoder, &request).await
        }
        Commands::Shell { input } => {
            shell::run_shell(&geocoder, &input, config.default_radius_miles).await
        }
    }
}

#[cfg(test)]
mod tests;
