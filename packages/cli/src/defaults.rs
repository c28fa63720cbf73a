//! Built-in option defaults, embedded from `defaults.toml` at compile time.

use std::path::PathBuf;

use serde::Deserialize;
use skyline_map_building_models::CoarseStatus;

const DEFAULTS_TOML: &str = include_str!("../defaults.toml");

/// Values used for every option the user leaves unset.
#[derive(Debug, Clone, Deserialize)]
pub struct Defaults {
    /// Skyscraper CSV location.
    pub data_path: PathBuf,
    /// Coarse statuses preselected on the map.
    pub statuses: Vec<CoarseStatus>,
    /// Preferred city for the detail table and summary.
    pub city: String,
    /// Timeline bucket width in years.
    pub bucket_width: u8,
    /// Timeline start year. `None` means the earliest start in the data.
    #[serde(default)]
    pub start_year: Option<i32>,
}

/// Parses the embedded defaults.
///
/// # Panics
///
/// Panics if the embedded `defaults.toml` is malformed.
#[must_use]
pub fn defaults() -> Defaults {
    toml::de::from_str(DEFAULTS_TOML)
        .unwrap_or_else(|e| panic!("Failed to parse embedded defaults.toml: {e}"))
}
