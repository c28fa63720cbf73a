//! Column names in the flattened skyscraper CSV.

use skyline_map_building_models::Purpose;

pub const ID: &str = "id";
pub const NAME: &str = "name";
pub const CITY: &str = "location.city";
pub const LATITUDE: &str = "location.latitude";
pub const LONGITUDE: &str = "location.longitude";
pub const HEIGHT: &str = "statistics.height";
pub const RANK: &str = "statistics.rank";
pub const FLOORS_ABOVE: &str = "statistics.floors above";
pub const CURRENT_STATUS: &str = "status.current";
pub const STARTED_YEAR: &str = "status.started.year";
pub const COMPLETED_YEAR: &str = "status.completed.year";

/// Columns that must be present in the header row.
pub const REQUIRED_COLUMNS: &[&str] = &[
    ID,
    NAME,
    CITY,
    LATITUDE,
    LONGITUDE,
    HEIGHT,
    RANK,
    FLOORS_ABOVE,
    CURRENT_STATUS,
    STARTED_YEAR,
    COMPLETED_YEAR,
];

/// Header of the boolean column for a purpose, e.g. `purposes.office`.
#[must_use]
pub fn purpose_column(purpose: Purpose) -> String {
    format!("purposes.{purpose}")
}
