#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Skyscraper record types, status vocabulary, and purpose taxonomy.
//!
//! This crate defines the canonical shape of one skyscraper record as it is
//! held in the record store, along with the closed vocabularies the rest of
//! the system filters on: the nine raw construction statuses, the five
//! coarse filter labels shown to users, and the purpose flags used when
//! describing a building.

use std::collections::BTreeSet;
use std::str::FromStr as _;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Fine-grained construction status as stored on each record.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum BuildingStatus {
    /// Construction finished and the building stands.
    #[serde(rename = "completed")]
    #[strum(serialize = "completed")]
    Completed,
    /// Construction is actively underway.
    #[serde(rename = "under construction")]
    #[strum(serialize = "under construction")]
    UnderConstruction,
    /// Construction started but is paused.
    #[serde(rename = "on hold")]
    #[strum(serialize = "on hold")]
    OnHold,
    /// Construction started and was abandoned.
    #[serde(rename = "never completed")]
    #[strum(serialize = "never completed")]
    NeverCompleted,
    /// A concept with no formal proposal yet.
    #[serde(rename = "vision")]
    #[strum(serialize = "vision")]
    Vision,
    /// Formally proposed but not started.
    #[serde(rename = "proposed")]
    #[strum(serialize = "proposed")]
    Proposed,
    /// Spire or crown installed, interior unfinished.
    #[serde(rename = "architecturally topped out")]
    #[strum(serialize = "architecturally topped out")]
    ArchitecturallyToppedOut,
    /// Highest structural element in place.
    #[serde(rename = "structurally topped out")]
    #[strum(serialize = "structurally topped out")]
    StructurallyToppedOut,
    /// Torn down.
    #[serde(rename = "demolished")]
    #[strum(serialize = "demolished")]
    Demolished,
}

impl BuildingStatus {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Completed,
            Self::UnderConstruction,
            Self::OnHold,
            Self::NeverCompleted,
            Self::Vision,
            Self::Proposed,
            Self::ArchitecturallyToppedOut,
            Self::StructurallyToppedOut,
            Self::Demolished,
        ]
    }

    /// Whether the building only exists on paper (no construction date can
    /// be meaningful yet).
    #[must_use]
    pub const fn is_planning(self) -> bool {
        matches!(self, Self::Vision | Self::Proposed)
    }
}

/// User-facing filter label that groups several [`BuildingStatus`] values.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum CoarseStatus {
    /// Standing buildings.
    #[serde(rename = "completed")]
    #[strum(serialize = "completed")]
    Completed,
    /// Started but not finished, for any reason.
    #[serde(rename = "incomplete")]
    #[strum(serialize = "incomplete")]
    Incomplete,
    /// Not yet started.
    #[serde(rename = "planned")]
    #[strum(serialize = "planned")]
    Planned,
    /// Structure or architecture topped out.
    #[serde(rename = "topped out")]
    #[strum(serialize = "topped out")]
    ToppedOut,
    /// Torn down.
    #[serde(rename = "demolished")]
    #[strum(serialize = "demolished")]
    Demolished,
}

impl CoarseStatus {
    /// Returns all variants of this enum, in selection-list order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Completed,
            Self::Incomplete,
            Self::Planned,
            Self::ToppedOut,
            Self::Demolished,
        ]
    }
}

/// Grouping used when a building's purposes are described in prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurposeCategory {
    /// Purposes that make the building a destination ("serves as a hotel").
    Location,
    /// Purposes describing general use ("has retail purposes").
    Other,
}

impl PurposeCategory {
    /// Returns the purposes belonging to this category in their fixed
    /// description order.
    #[must_use]
    pub const fn purposes(self) -> &'static [Purpose] {
        match self {
            Self::Location => &[
                Purpose::Museum,
                Purpose::Casino,
                Purpose::Library,
                Purpose::AirTrafficControlTower,
                Purpose::Hotel,
                Purpose::Office,
            ],
            Self::Other => &[
                Purpose::Retail,
                Purpose::Industrial,
                Purpose::Residential,
                Purpose::Commercial,
            ],
        }
    }
}

/// A named purpose flag on a record.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Purpose {
    // ── Location ────────────────────────────────────────
    /// Museum
    #[serde(rename = "museum")]
    #[strum(serialize = "museum")]
    Museum,
    /// Casino
    #[serde(rename = "casino")]
    #[strum(serialize = "casino")]
    Casino,
    /// Library
    #[serde(rename = "library")]
    #[strum(serialize = "library")]
    Library,
    /// Air traffic control tower
    #[serde(rename = "air traffic control tower")]
    #[strum(serialize = "air traffic control tower")]
    AirTrafficControlTower,
    /// Hotel
    #[serde(rename = "hotel")]
    #[strum(serialize = "hotel")]
    Hotel,
    /// Office space
    #[serde(rename = "office")]
    #[strum(serialize = "office")]
    Office,

    // ── Other ───────────────────────────────────────────
    /// Retail
    #[serde(rename = "retail")]
    #[strum(serialize = "retail")]
    Retail,
    /// Industrial
    #[serde(rename = "industrial")]
    #[strum(serialize = "industrial")]
    Industrial,
    /// Residential
    #[serde(rename = "residential")]
    #[strum(serialize = "residential")]
    Residential,
    /// Commercial
    #[serde(rename = "commercial")]
    #[strum(serialize = "commercial")]
    Commercial,
}

impl Purpose {
    /// Returns the description category this purpose belongs to.
    #[must_use]
    pub const fn category(self) -> PurposeCategory {
        match self {
            Self::Museum
            | Self::Casino
            | Self::Library
            | Self::AirTrafficControlTower
            | Self::Hotel
            | Self::Office => PurposeCategory::Location,
            Self::Retail | Self::Industrial | Self::Residential | Self::Commercial => {
                PurposeCategory::Other
            }
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Museum,
            Self::Casino,
            Self::Library,
            Self::AirTrafficControlTower,
            Self::Hotel,
            Self::Office,
            Self::Retail,
            Self::Industrial,
            Self::Residential,
            Self::Commercial,
        ]
    }
}

/// Where a building stands.
///
/// A latitude/longitude of exactly `(0, 0)` means the location is unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// City name as stored in the dataset (e.g. "New York City").
    pub city: String,
    /// Latitude (WGS84).
    pub latitude: f64,
    /// Longitude (WGS84).
    pub longitude: f64,
}

impl Location {
    /// Whether this location carries real coordinates rather than the
    /// `(0, 0)` unknown-location sentinel.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn has_coordinates(&self) -> bool {
        !(self.latitude == 0.0 && self.longitude == 0.0)
    }
}

/// Physical statistics of a building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Height in meters.
    pub height: f64,
    /// Global height rank.
    pub rank: u32,
    /// Floors above ground.
    pub floors_above: u32,
}

/// Construction status and milestone years.
///
/// A year of `0` means the milestone is unknown or has not happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusInfo {
    /// Raw status string exactly as stored. Usually one of the
    /// [`BuildingStatus`] values but not guaranteed to be.
    pub current: String,
    /// Year construction started, `0` if unknown or unstarted.
    pub started_year: i32,
    /// Year construction completed, `0` if not completed.
    pub completed_year: i32,
}

impl StatusInfo {
    /// Parses [`Self::current`] into the known status vocabulary.
    ///
    /// Returns `None` for values outside the vocabulary.
    #[must_use]
    pub fn parsed(&self) -> Option<BuildingStatus> {
        BuildingStatus::from_str(&self.current).ok()
    }

    /// A completion year without a start year is inconsistent source data.
    #[must_use]
    pub const fn is_anomalous(&self) -> bool {
        self.completed_year > 0 && self.started_year <= 0
    }
}

/// One skyscraper as loaded into the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Dataset identifier, unique across the store.
    pub id: u32,
    /// Building name.
    pub name: String,
    /// Where the building stands.
    pub location: Location,
    /// Height, rank, and floor count.
    pub statistics: Statistics,
    /// Construction status and milestone years.
    pub status: StatusInfo,
    /// Purpose flags that are set on this record.
    pub purposes: BTreeSet<Purpose>,
}

impl Record {
    /// Creates a record with the given identifier and name, an unknown
    /// location, zeroed statistics, and a `completed` status with unknown
    /// years.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            location: Location {
                city: String::new(),
                latitude: 0.0,
                longitude: 0.0,
            },
            statistics: Statistics {
                height: 0.0,
                rank: 0,
                floors_above: 0,
            },
            status: StatusInfo {
                current: BuildingStatus::Completed.to_string(),
                started_year: 0,
                completed_year: 0,
            },
            purposes: BTreeSet::new(),
        }
    }

    /// Sets the city and coordinates.
    #[must_use]
    pub fn with_location(mut self, city: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        self.location = Location {
            city: city.into(),
            latitude,
            longitude,
        };
        self
    }

    /// Sets height, rank, and floors above ground.
    #[must_use]
    pub const fn with_statistics(mut self, height: f64, rank: u32, floors_above: u32) -> Self {
        self.statistics = Statistics {
            height,
            rank,
            floors_above,
        };
        self
    }

    /// Sets the raw status string and milestone years.
    #[must_use]
    pub fn with_status(
        mut self,
        current: impl Into<String>,
        started_year: i32,
        completed_year: i32,
    ) -> Self {
        self.status = StatusInfo {
            current: current.into(),
            started_year,
            completed_year,
        };
        self
    }

    /// Sets a purpose flag.
    #[must_use]
    pub fn with_purpose(mut self, purpose: Purpose) -> Self {
        self.purposes.insert(purpose);
        self
    }

    /// Whether the given purpose flag is set.
    #[must_use]
    pub fn has_purpose(&self, purpose: Purpose) -> bool {
        self.purposes.contains(&purpose)
    }

    /// Returns the purposes of `category` that are set on this record, in
    /// the category's fixed order.
    #[must_use]
    pub fn purposes_in(&self, category: PurposeCategory) -> Vec<Purpose> {
        category
            .purposes()
            .iter()
            .copied()
            .filter(|p| self.has_purpose(*p))
            .collect()
    }
}
