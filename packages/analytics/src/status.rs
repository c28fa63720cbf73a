//! Status lookup tables.
//!
//! Maps raw construction statuses to marker colors and expands the coarse
//! filter labels shown to users into the raw statuses they cover. Both
//! tables are fixed at compile time; together they define the closed set of
//! statuses the rest of the pipeline filters on.

use std::collections::BTreeSet;
use std::str::FromStr as _;

use skyline_map_analytics_models::MarkerColor;
use skyline_map_building_models::{BuildingStatus, CoarseStatus};

use crate::AnalyticsError;

/// Marker color for every known raw status.
const STATUS_COLORS: [(BuildingStatus, MarkerColor); 9] = [
    (BuildingStatus::Completed, MarkerColor::Green),
    (BuildingStatus::UnderConstruction, MarkerColor::Red),
    (BuildingStatus::OnHold, MarkerColor::Red),
    (BuildingStatus::NeverCompleted, MarkerColor::Red),
    (BuildingStatus::Vision, MarkerColor::Grey),
    (BuildingStatus::Proposed, MarkerColor::Grey),
    (BuildingStatus::ArchitecturallyToppedOut, MarkerColor::Yellow),
    (BuildingStatus::StructurallyToppedOut, MarkerColor::Yellow),
    (BuildingStatus::Demolished, MarkerColor::White),
];

/// Color used for statuses outside the known vocabulary.
pub const UNKNOWN_STATUS_COLOR: MarkerColor = MarkerColor::Black;

/// Raw statuses covered by each coarse filter label.
const COARSE_EXPANSIONS: [(CoarseStatus, &[BuildingStatus]); 5] = [
    (CoarseStatus::Completed, &[BuildingStatus::Completed]),
    (
        CoarseStatus::Incomplete,
        &[
            BuildingStatus::OnHold,
            BuildingStatus::UnderConstruction,
            BuildingStatus::NeverCompleted,
        ],
    ),
    (
        CoarseStatus::Planned,
        &[BuildingStatus::Vision, BuildingStatus::Proposed],
    ),
    (
        CoarseStatus::ToppedOut,
        &[
            BuildingStatus::ArchitecturallyToppedOut,
            BuildingStatus::StructurallyToppedOut,
        ],
    ),
    (CoarseStatus::Demolished, &[BuildingStatus::Demolished]),
];

/// Returns the marker color for a known status.
#[must_use]
pub fn color_for(status: BuildingStatus) -> MarkerColor {
    STATUS_COLORS
        .iter()
        .find(|(s, _)| *s == status)
        .map_or(UNKNOWN_STATUS_COLOR, |(_, color)| *color)
}

/// Returns the marker color for a raw status string, falling back to
/// [`UNKNOWN_STATUS_COLOR`] for anything outside the vocabulary.
#[must_use]
pub fn status_color(raw: &str) -> MarkerColor {
    BuildingStatus::from_str(raw).map_or(UNKNOWN_STATUS_COLOR, color_for)
}

/// Returns the raw statuses a coarse label expands to.
#[must_use]
pub fn expand(label: CoarseStatus) -> &'static [BuildingStatus] {
    COARSE_EXPANSIONS
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, statuses)| *statuses)
        .unwrap_or_default()
}

/// Parses one of the five coarse selection labels.
///
/// # Errors
///
/// Returns [`AnalyticsError::UnknownCoarseStatus`] if `label` is not one of
/// the five selection labels.
pub fn parse_coarse_label(label: &str) -> Result<CoarseStatus, AnalyticsError> {
    CoarseStatus::from_str(label.trim()).map_err(|_| AnalyticsError::UnknownCoarseStatus {
        label: label.to_string(),
    })
}

/// Union of the raw statuses covered by every selected label.
#[must_use]
pub fn expand_selection(labels: &[CoarseStatus]) -> BTreeSet<BuildingStatus> {
    labels
        .iter()
        .flat_map(|label| expand(*label).iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_has_a_color() {
        for status in BuildingStatus::all() {
            assert!(
                STATUS_COLORS.iter().any(|(s, _)| s == status),
                "{status:?} has no color entry"
            );
        }
    }

    #[test]
    fn raw_status_colors() {
        assert_eq!(status_color("completed"), MarkerColor::Green);
        assert_eq!(status_color("never completed"), MarkerColor::Red);
        assert_eq!(status_color("proposed"), MarkerColor::Grey);
        assert_eq!(status_color("structurally topped out"), MarkerColor::Yellow);
        assert_eq!(status_color("demolished"), MarkerColor::White);
    }

    #[test]
    fn unknown_status_is_black() {
        assert_eq!(status_color("rumoured"), MarkerColor::Black);
        assert_eq!(status_color(""), MarkerColor::Black);
        assert_eq!(status_color("Completed"), MarkerColor::Black);
    }

    #[test]
    fn coarse_expansion_partitions_raw_statuses() {
        for status in BuildingStatus::all() {
            let owners: Vec<CoarseStatus> = CoarseStatus::all()
                .iter()
                .copied()
                .filter(|label| expand(*label).contains(status))
                .collect();
            assert_eq!(
                owners.len(),
                1,
                "{status:?} belongs to {owners:?}, expected exactly one coarse label"
            );
        }
    }

    #[test]
    fn expand_incomplete() {
        assert_eq!(
            expand(CoarseStatus::Incomplete),
            &[
                BuildingStatus::OnHold,
                BuildingStatus::UnderConstruction,
                BuildingStatus::NeverCompleted,
            ]
        );
    }

    #[test]
    fn unknown_coarse_label_is_an_error() {
        assert_eq!(
            parse_coarse_label(" topped out ").unwrap(),
            CoarseStatus::ToppedOut
        );
        let err = parse_coarse_label("finished").unwrap_err();
        assert!(matches!(err, AnalyticsError::UnknownCoarseStatus { label } if label == "finished"));
    }

    #[test]
    fn selection_union() {
        let union = expand_selection(&[CoarseStatus::Completed, CoarseStatus::Planned]);
        let expected: BTreeSet<BuildingStatus> = [
            BuildingStatus::Completed,
            BuildingStatus::Vision,
            BuildingStatus::Proposed,
        ]
        .into_iter()
        .collect();
        assert_eq!(union, expected);
        assert!(expand_selection(&[]).is_empty());
    }
}
