//! Per-city detail table and height ranking.

use std::str::FromStr as _;

use skyline_map_analytics_models::{CityDetail, CityDetailParams, CityDetailRow, YearCompletedLabel};
use skyline_map_building_models::{BuildingStatus, Record};

use crate::{AnalyticsError, RecordStore};

/// Number of rows in the height ranking chart.
pub const TOP_HEIGHTS_LIMIT: usize = 24;

/// Builds the detail table for one city.
///
/// Rows are sorted ascending by name (byte-wise, so case-sensitive).
/// [`CityDetail::top_heights`] holds the same rows ordered tallest first,
/// truncated to [`TOP_HEIGHTS_LIMIT`].
///
/// # Errors
///
/// Returns [`AnalyticsError::UnknownCity`] if no record is located in the
/// requested city.
pub fn build_city_detail(
    store: &RecordStore,
    params: &CityDetailParams,
) -> Result<CityDetail, AnalyticsError> {
    if !store.contains_city(&params.city) {
        return Err(AnalyticsError::UnknownCity {
            city: params.city.clone(),
        });
    }

    let mut rows: Vec<CityDetailRow> = store
        .iter()
        .filter(|r| r.location.city == params.city)
        .map(to_row)
        .collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name));

    let top_heights = top_heights(&rows, TOP_HEIGHTS_LIMIT);

    log::debug!("City detail for {}: {} row(s)", params.city, rows.len());

    Ok(CityDetail {
        city: params.city.clone(),
        rows,
        top_heights,
    })
}

/// Derives the completion label shown in the city table.
///
/// A year of `0` reads "Uncompleted"; any other year is shown as-is. Vision
/// and proposed buildings then read "planning" whatever their year.
#[must_use]
pub fn year_completed_label(completed_year: i32, current_status: &str) -> YearCompletedLabel {
    let label = if completed_year == 0 {
        YearCompletedLabel::Uncompleted
    } else {
        YearCompletedLabel::Year(completed_year)
    };

    match BuildingStatus::from_str(current_status) {
        Ok(status) if status.is_planning() => YearCompletedLabel::Planning,
        _ => label,
    }
}

/// Returns up to `limit` rows ordered by height, tallest first.
///
/// Rows of equal height keep their relative order.
#[must_use]
pub fn top_heights(rows: &[CityDetailRow], limit: usize) -> Vec<CityDetailRow> {
    let mut ranked = rows.to_vec();
    ranked.sort_by(|a, b| b.height.total_cmp(&a.height));
    ranked.truncate(limit);
    ranked
}

fn to_row(record: &Record) -> CityDetailRow {
    CityDetailRow {
        id: record.id,
        name: record.name.clone(),
        height: record.statistics.height,
        rank: record.statistics.rank,
        year_completed: year_completed_label(
            record.status.completed_year,
            &record.status.current,
        ),
        current_status: record.status.current.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(store: &RecordStore, city: &str) -> CityDetail {
        build_city_detail(
            store,
            &CityDetailParams {
                city: city.to_string(),
            },
        )
        .unwrap()
    }

    #[test]
    fn uncompleted_and_planning_labels() {
        assert_eq!(
            year_completed_label(0, "under construction"),
            YearCompletedLabel::Uncompleted
        );
        assert_eq!(year_completed_label(0, "vision"), YearCompletedLabel::Planning);
        assert_eq!(
            year_completed_label(2030, "vision"),
            YearCompletedLabel::Planning
        );
        assert_eq!(
            year_completed_label(2031, "proposed"),
            YearCompletedLabel::Planning
        );
        assert_eq!(
            year_completed_label(1931, "completed"),
            YearCompletedLabel::Year(1931)
        );
        assert_eq!(
            year_completed_label(0, "rumoured"),
            YearCompletedLabel::Uncompleted
        );
    }

    #[test]
    fn rows_sorted_by_name_case_sensitive() {
        let store = RecordStore::new(vec![
            Record::new(1, "b tower").with_location("Dubai", 25.2, 55.3),
            Record::new(2, "Burj Khalifa").with_location("Dubai", 25.197, 55.274),
            Record::new(3, "Address Downtown").with_location("Dubai", 25.19, 55.27),
            Record::new(4, "Elsewhere").with_location("Doha", 25.3, 51.5),
        ])
        .unwrap();

        let names: Vec<String> = detail(&store, "Dubai")
            .rows
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Address Downtown", "Burj Khalifa", "b tower"]);
    }

    #[test]
    fn projects_record_fields() {
        let store = RecordStore::new(vec![
            Record::new(9, "Willis Tower")
                .with_location("Chicago", 41.879, -87.636)
                .with_statistics(442.1, 23, 108)
                .with_status("completed", 1970, 1974),
        ])
        .unwrap();

        let row = &detail(&store, "Chicago").rows[0];
        assert_eq!(row.id, 9);
        assert!((row.height - 442.1).abs() < f64::EPSILON);
        assert_eq!(row.rank, 23);
        assert_eq!(row.year_completed, YearCompletedLabel::Year(1974));
        assert_eq!(row.current_status, "completed");
    }

    #[test]
    fn unknown_city_is_an_error() {
        let store = RecordStore::new(vec![Record::new(1, "A").with_location("Chicago", 1.0, 1.0)])
            .unwrap();
        let err = build_city_detail(
            &store,
            &CityDetailParams {
                city: "Atlantis".to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, AnalyticsError::UnknownCity { city } if city == "Atlantis"));
    }

    #[test]
    fn top_heights_is_descending_and_truncated() {
        let records: Vec<Record> = (1..=30u32)
            .map(|i| {
                Record::new(i, format!("Tower {i:02}"))
                    .with_location("Shenzhen", 22.5, 114.0)
                    .with_statistics(f64::from(i) * 10.0, i, i)
            })
            .collect();
        let store = RecordStore::new(records).unwrap();

        let city = detail(&store, "Shenzhen");
        assert_eq!(city.rows.len(), 30);
        assert_eq!(city.top_heights.len(), TOP_HEIGHTS_LIMIT);
        assert_eq!(city.top_heights[0].name, "Tower 30");
        assert!(
            city.top_heights
                .windows(2)
                .all(|w| w[0].height >= w[1].height)
        );
        assert_eq!(city.top_heights.last().unwrap().name, "Tower 07");
    }
}
