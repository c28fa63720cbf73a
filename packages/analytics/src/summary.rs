//! Narrative description of the tallest building in a city.
//!
//! The narrative branches on which construction milestones are known. Each
//! record is first classified into a [`NarrativeCase`], and each case maps
//! to its own sentence templates:
//!
//! | started | completed | status        | case                |
//! |---------|-----------|---------------|---------------------|
//! | 0       | any       | not completed | `PlanningStage`     |
//! | 0       | any       | completed     | `HeadlineOnly`      |
//! | > 0     | > 0       | any           | `CompletedWithSpan` |
//! | > 0     | 0         | any           | `InProgress`        |

use skyline_map_analytics_models::{CityDetail, NarrativeCase, TallestSummary};
use skyline_map_building_models::{BuildingStatus, Purpose, PurposeCategory, Record, StatusInfo};

use crate::{AnalyticsError, RecordStore};

/// Whether purposes are described as current or planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tense {
    /// The building exists and serves its purposes.
    Present,
    /// The building is unfinished; purposes are planned.
    Future,
}

/// Describes the tallest building of a city detail table.
///
/// The tallest row is the one with the greatest height; ties go to the
/// record that comes first in the store.
///
/// # Errors
///
/// * [`AnalyticsError::EmptyCity`] if the table has no rows.
/// * [`AnalyticsError::MissingRecord`] if a row does not resolve to a record
///   in `store` (the table was built from a different store).
pub fn summarize_tallest(
    store: &RecordStore,
    detail: &CityDetail,
) -> Result<TallestSummary, AnalyticsError> {
    let record = tallest_record(store, detail)?;
    let case = classify(&record.status);

    let city = detail.city.as_str();
    let sentences: Vec<String> = match case {
        NarrativeCase::PlanningStage => vec![planning_stage(city, record)],
        NarrativeCase::HeadlineOnly => vec![headline(city, record)],
        NarrativeCase::CompletedWithSpan => {
            [headline(city, record), construction_span(&record.status)]
                .into_iter()
                .chain(purpose_sentences(record, Tense::Present))
                .collect()
        }
        NarrativeCase::InProgress => [headline(city, record), in_progress(&record.status)]
            .into_iter()
            .chain(purpose_sentences(record, Tense::Future))
            .collect(),
    };

    log::debug!("Tallest in {city}: record {} ({case:?})", record.id);

    Ok(TallestSummary {
        city: city.to_string(),
        record_id: record.id,
        case,
        text: sentences.join(" "),
    })
}

/// Picks the narrative branch for a record's milestones.
#[must_use]
pub fn classify(status: &StatusInfo) -> NarrativeCase {
    if status.started_year == 0 {
        if status.parsed() == Some(BuildingStatus::Completed) {
            NarrativeCase::HeadlineOnly
        } else {
            NarrativeCase::PlanningStage
        }
    } else if status.completed_year != 0 {
        NarrativeCase::CompletedWithSpan
    } else {
        NarrativeCase::InProgress
    }
}

fn tallest_record<'a>(
    store: &'a RecordStore,
    detail: &CityDetail,
) -> Result<&'a Record, AnalyticsError> {
    let mut candidates: Vec<(usize, &Record)> = Vec::with_capacity(detail.rows.len());
    for row in &detail.rows {
        let position = store
            .position(row.id)
            .ok_or(AnalyticsError::MissingRecord { id: row.id })?;
        candidates.push((position, &store.records()[position]));
    }

    // Equal heights resolve to the earliest position in the store.
    candidates
        .into_iter()
        .max_by(|(pos_a, a), (pos_b, b)| {
            a.statistics
                .height
                .total_cmp(&b.statistics.height)
                .then_with(|| pos_b.cmp(pos_a))
        })
        .map(|(_, record)| record)
        .ok_or_else(|| AnalyticsError::EmptyCity {
            city: detail.city.clone(),
        })
}

fn headline(city: &str, record: &Record) -> String {
    format!(
        "The tallest skyscraper in {city} is the '{}' standing at {:.2} meters, or {} floors above sea level.",
        record.name, record.statistics.height, record.statistics.floors_above
    )
}

fn planning_stage(city: &str, record: &Record) -> String {
    let name = &record.name;
    format!(
        "The {name} is currently in the early planning stage, but it is set to be the tallest \
         skyscraper in {city} at {:.2} meters, or {} floors above sea level. However, the {name} \
         is in the {} stage, so it's unsure whether it will live up to the expectations.",
        record.statistics.height, record.statistics.floors_above, record.status.current
    )
}

fn construction_span(status: &StatusInfo) -> String {
    format!(
        "The building began construction in {} and was finished {} years later in {}.",
        status.started_year,
        i64::from(status.completed_year) - i64::from(status.started_year),
        status.completed_year
    )
}

fn in_progress(status: &StatusInfo) -> String {
    format!(
        "The building has not completed and is currently {}.",
        status.current
    )
}

fn purpose_sentences(record: &Record, tense: Tense) -> Vec<String> {
    [PurposeCategory::Location, PurposeCategory::Other]
        .into_iter()
        .filter_map(|category| purpose_sentence(category, tense, &record.purposes_in(category)))
        .collect()
}

/// Describes the purposes of one category, or `None` when there are none.
#[must_use]
pub fn purpose_sentence(
    category: PurposeCategory,
    tense: Tense,
    purposes: &[Purpose],
) -> Option<String> {
    if purposes.is_empty() {
        return None;
    }

    let names: Vec<&str> = purposes.iter().map(AsRef::<str>::as_ref).collect();

    Some(match (category, tense) {
        (PurposeCategory::Location, Tense::Present) => {
            format!("The building serves as {}.", location_list(&names))
        }
        (PurposeCategory::Location, Tense::Future) => {
            format!("It is planned to serve as {}.", location_list(&names))
        }
        (PurposeCategory::Other, Tense::Present) => {
            format!("Additionally, it has {} purposes.", join_list(&names))
        }
        (PurposeCategory::Other, Tense::Future) => {
            format!(
                "Additionally, it is planned to have {} purposes.",
                join_list(&names)
            )
        }
    })
}

/// A lone location purpose always reads `"a <purpose>"`, whatever its
/// first letter.
fn location_list(names: &[&str]) -> String {
    match names {
        [single] => format!("a {single}"),
        _ => join_list(names),
    }
}

/// Joins items as `"a"`, or `"a, b, and c"` with a comma before the final
/// `and` for any list of two or more.
#[must_use]
pub fn join_list(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [single] => (*single).to_string(),
        [rest @ .., last] => format!("{}, and {last}", rest.join(", ")),
    }
}
