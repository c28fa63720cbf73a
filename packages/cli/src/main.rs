#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line explorer for the skyscraper dataset.
//!
//! Loads the skyscraper CSV once, then prints one derived view: map
//! markers, a city table, the tallest-building summary, the construction
//! timeline, or the status distribution. Every view can be emitted as
//! pretty JSON with `--json`. Without a subcommand an interactive menu is
//! shown instead.

mod defaults;
mod interactive;
mod render;
mod selection;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use skyline_map_analytics::{
    RecordStore, build_city_detail, build_map_view, build_timeline, summarize_tallest,
    tally_statuses,
};
use skyline_map_analytics_models::{CityDetailParams, MapViewParams, TimelineParams};
use skyline_map_building_models::CoarseStatus;

use crate::defaults::Defaults;
use crate::selection::{parse_coarse_status, resolve_city, resolve_data_path, resolve_start_year};

#[derive(Parser)]
#[command(name = "skyline_map", about = "Explore the world's skyscrapers")]
struct Cli {
    /// Path to the skyscraper CSV (`.csv` is appended when missing)
    #[arg(long, global = true)]
    data: Option<PathBuf>,
    /// Print the view as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show map markers for the selected statuses
    Map {
        /// Status to show (repeatable): completed, incomplete, planned,
        /// "topped out", demolished
        #[arg(long = "status", value_parser = parse_coarse_status)]
        statuses: Vec<CoarseStatus>,
        /// Show the map with no status selected
        #[arg(long, conflicts_with = "statuses")]
        no_status: bool,
    },
    /// Show the skyscraper table for a city
    City {
        /// City name, or a picker label such as "Chicago (12)"
        #[arg(long)]
        city: Option<String>,
    },
    /// Describe the tallest skyscraper in a city
    Summary {
        /// City name, or a picker label such as "Chicago (12)"
        #[arg(long)]
        city: Option<String>,
    },
    /// Count construction starts per year bucket
    Timeline {
        /// Bucket width in years (1-10)
        #[arg(long)]
        bucket: Option<u8>,
        /// Ignore buildings that started before this year (up to 2000)
        #[arg(long)]
        start_year: Option<i32>,
    },
    /// Count skyscrapers per construction status
    Tally,
    /// List cities with their skyscraper counts
    Cities,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();
    let defaults = defaults::defaults();

    let data_path = resolve_data_path(cli.data.as_deref().unwrap_or(&defaults.data_path));
    let store = skyline_map_ingest::load_store(&data_path)?;

    let Some(command) = cli.command else {
        return interactive::run(&store, &defaults, cli.json);
    };

    run_command(&command, &store, &defaults, cli.json)
}

/// Derives and prints the view a command asks for.
fn run_command(
    command: &Commands,
    store: &RecordStore,
    defaults: &Defaults,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Map {
            statuses,
            no_status,
        } => {
            let statuses = if *no_status {
                Vec::new()
            } else if statuses.is_empty() {
                defaults.statuses.clone()
            } else {
                statuses.clone()
            };
            let view = build_map_view(store, &MapViewParams { statuses });
            emit(json, &view, render::map_view)?;
        }
        Commands::City { city } => {
            let Some(city) = resolve_city(city.as_deref(), defaults, store) else {
                println!("No cities available.");
                return Ok(());
            };
            let detail = build_city_detail(store, &CityDetailParams { city })?;
            emit(json, &detail, render::city_detail)?;
        }
        Commands::Summary { city } => {
            let Some(city) = resolve_city(city.as_deref(), defaults, store) else {
                println!("No cities available.");
                return Ok(());
            };
            let detail = build_city_detail(store, &CityDetailParams { city })?;
            let summary = summarize_tallest(store, &detail)?;
            emit(json, &summary, render::summary)?;
        }
        Commands::Timeline { bucket, start_year } => {
            let params = TimelineParams {
                bucket_width: bucket.unwrap_or(defaults.bucket_width),
                start_year: resolve_start_year(*start_year, defaults, store),
            };
            let buckets = build_timeline(store, &params)?;
            emit(json, buckets.as_slice(), |b| {
                render::timeline(b, params.bucket_width)
            })?;
        }
        Commands::Tally => emit(json, tally_statuses(store).as_slice(), render::tally)?,
        Commands::Cities => emit(json, store.city_options().as_slice(), render::cities)?,
    }

    Ok(())
}

fn emit<T: Serialize + ?Sized>(
    json: bool,
    view: &T,
    text: impl FnOnce(&T) -> String,
) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(view)?);
    } else {
        print!("{}", text(view));
    }
    Ok(())
}
