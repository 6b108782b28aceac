use std::path::PathBuf;

use arrival_common::LngLat;
use clap::Parser;

/// Arrival: parking lot, entrance and live driver position on one map.
#[derive(Parser, Debug)]
#[command(name = "arrival", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `arrival=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use a fixed driver position (`lng,lat`) instead of browser geolocation.
    #[arg(long, value_name = "LNG,LAT", allow_hyphen_values = true)]
    pub driver: Option<LngLat>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
