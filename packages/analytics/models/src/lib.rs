#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Parameter and result types for the derived skyscraper views.
//!
//! Every view the analytics crate produces (map markers, city detail table,
//! tallest-building summary, construction timeline, status tally) has its
//! input and output types defined here so that rendering code can depend on
//! the shapes without pulling in the derivation logic.

use serde::{Deserialize, Serialize};
use skyline_map_building_models::CoarseStatus;
use strum_macros::{AsRefStr, Display, EnumString};

/// Zoom level the map is rendered at.
pub const DEFAULT_ZOOM: u8 = 3;

/// Marker color on the map.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MarkerColor {
    /// Completed buildings.
    Green,
    /// Started but unfinished buildings.
    Red,
    /// Buildings that only exist on paper.
    Grey,
    /// Topped-out buildings.
    Yellow,
    /// Demolished buildings.
    White,
    /// Any status outside the known vocabulary.
    Black,
}

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinate {
    /// Latitude (WGS84).
    pub latitude: f64,
    /// Longitude (WGS84).
    pub longitude: f64,
}

impl Coordinate {
    /// The fallback map center when there is nothing to show.
    pub const ORIGIN: Self = Self {
        latitude: 0.0,
        longitude: 0.0,
    };
}

/// Parameters for building the map view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapViewParams {
    /// Selected coarse status labels. Empty means nothing is shown.
    pub statuses: Vec<CoarseStatus>,
}

/// One map pin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    /// Identifier of the record this marker was derived from.
    pub id: u32,
    /// Building name, for tooltips.
    pub name: String,
    /// Latitude (WGS84).
    pub latitude: f64,
    /// Longitude (WGS84).
    pub longitude: f64,
    /// Pin color derived from the raw status.
    pub color: MarkerColor,
}

/// The filtered, colorized marker subset plus viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    /// Markers to place. Empty means the base map is drawn without pins.
    pub markers: Vec<Marker>,
    /// Map center: mean marker position, or [`Coordinate::ORIGIN`].
    pub center: Coordinate,
    /// Zoom level.
    pub zoom: u8,
}

impl MapView {
    /// A view with no markers, centered on the origin.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            markers: Vec::new(),
            center: Coordinate::ORIGIN,
            zoom: DEFAULT_ZOOM,
        }
    }

    /// Whether marker placement should be skipped entirely.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// Display label for the completion year column of the city table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum YearCompletedLabel {
    /// Completed in the given year.
    Year(i32),
    /// No completion year recorded.
    Uncompleted,
    /// Still a vision or proposal.
    Planning,
}

impl std::fmt::Display for YearCompletedLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Year(year) => write!(f, "{year}"),
            Self::Uncompleted => write!(f, "Uncompleted"),
            Self::Planning => write!(f, "planning"),
        }
    }
}

impl From<YearCompletedLabel> for String {
    fn from(value: YearCompletedLabel) -> Self {
        value.to_string()
    }
}

/// Error returned when a string is not a valid [`YearCompletedLabel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidYearLabelError {
    /// The rejected label.
    pub value: String,
}

impl std::fmt::Display for InvalidYearLabelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid completion label '{}': expected a year, 'Uncompleted', or 'planning'",
            self.value
        )
    }
}

impl std::error::Error for InvalidYearLabelError {}

impl TryFrom<String> for YearCompletedLabel {
    type Error = InvalidYearLabelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "Uncompleted" => Ok(Self::Uncompleted),
            "planning" => Ok(Self::Planning),
            other => other
                .parse::<i32>()
                .map(Self::Year)
                .map_err(|_| InvalidYearLabelError {
                    value: other.to_string(),
                }),
        }
    }
}

/// Parameters for the per-city detail table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityDetailParams {
    /// City name exactly as stored in the dataset.
    pub city: String,
}

/// One row of the per-city detail table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityDetailRow {
    /// Identifier of the underlying record.
    pub id: u32,
    /// Building name.
    pub name: String,
    /// Height in meters.
    pub height: f64,
    /// Global height rank.
    pub rank: u32,
    /// Completion year label.
    pub year_completed: YearCompletedLabel,
    /// Raw current status.
    pub current_status: String,
}

/// Detail table for one city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityDetail {
    /// The selected city.
    pub city: String,
    /// Rows sorted ascending by name.
    pub rows: Vec<CityDetailRow>,
    /// Tallest rows first, truncated for the ranking chart.
    pub top_heights: Vec<CityDetailRow>,
}

/// Which branch of the tallest-building narrative produced the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeCase {
    /// Never started and not completed.
    PlanningStage,
    /// Started but not completed.
    InProgress,
    /// Started and completed.
    CompletedWithSpan,
    /// No start year but marked completed; only the headline is known.
    HeadlineOnly,
}

/// Natural-language description of the tallest building in a city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TallestSummary {
    /// The selected city.
    pub city: String,
    /// Identifier of the record the text describes.
    pub record_id: u32,
    /// Branch that produced the text.
    pub case: NarrativeCase,
    /// The paragraph.
    pub text: String,
}

/// Parameters for the construction-start timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineParams {
    /// Bucket width in years (1-10).
    pub bucket_width: u8,
    /// Records that started before this year are excluded.
    pub start_year: i32,
}

/// Number of construction starts in one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearBucket {
    /// First year of the bucket (a multiple of the bucket width).
    pub bucket: i32,
    /// Construction starts in the bucket.
    pub count: u64,
}

/// Fixed category of the status distribution chart.
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
pub enum TallySlot {
    /// `completed`
    #[serde(rename = "completed")]
    #[strum(serialize = "completed")]
    Completed,
    /// `on hold`
    #[serde(rename = "on hold")]
    #[strum(serialize = "on hold")]
    OnHold,
    /// `demolished`
    #[serde(rename = "demolished")]
    #[strum(serialize = "demolished")]
    Demolished,
    /// `under construction`
    #[serde(rename = "under construction")]
    #[strum(serialize = "under construction")]
    UnderConstruction,
    /// Both topped-out statuses combined.
    #[serde(rename = "topped out")]
    #[strum(serialize = "topped out")]
    ToppedOut,
}

impl TallySlot {
    /// Returns all variants in chart order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Completed,
            Self::OnHold,
            Self::Demolished,
            Self::UnderConstruction,
            Self::ToppedOut,
        ]
    }

    /// Bar color for this slot in the distribution chart.
    #[must_use]
    pub const fn chart_color(self) -> &'static str {
        match self {
            Self::Completed => "green",
            Self::OnHold => "orange",
            Self::Demolished => "black",
            Self::UnderConstruction => "blue",
            Self::ToppedOut => "yellow",
        }
    }
}

/// Count of records in one tally slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    /// The slot.
    pub status: TallySlot,
    /// Records in the slot.
    pub count: u64,
}

/// A selectable city with its record count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityOption {
    /// City name as stored.
    pub city: String,
    /// Number of records in the city.
    pub count: u64,
}

impl CityOption {
    /// Recovers the city name from a `"<city> (<count>)"` label.
    ///
    /// Labels without a count suffix are returned trimmed.
    #[must_use]
    pub fn parse_label(label: &str) -> &str {
        label
            .rsplit_once(" (")
            .map_or(label, |(city, _)| city)
            .trim_end()
    }
}

impl std::fmt::Display for CityOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.city, self.count)
    }
}
