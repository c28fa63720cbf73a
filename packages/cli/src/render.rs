//! Plain-text rendering of the derived views.

use std::fmt::Write as _;

use skyline_map_analytics_models::{
    CityDetail, CityOption, MapView, StatusCount, TallestSummary, YearBucket,
};

/// Widest histogram bar, in characters.
const MAX_BAR: u64 = 50;

/// Renders the marker list with the viewport on the first line.
#[must_use]
pub fn map_view(view: &MapView) -> String {
    let mut out = format!(
        "{} marker(s), center ({:.4}, {:.4}), zoom {}\n",
        view.markers.len(),
        view.center.latitude,
        view.center.longitude,
        view.zoom
    );
    if view.is_empty() {
        return out;
    }

    writeln!(out, "{:>6}  {:<6}  {:>9}  {:>10}  NAME", "ID", "COLOR", "LAT", "LON").unwrap();
    for marker in &view.markers {
        writeln!(
            out,
            "{:>6}  {:<6}  {:>9.4}  {:>10.4}  {}",
            marker.id,
            marker.color.as_ref(),
            marker.latitude,
            marker.longitude,
            marker.name
        )
        .unwrap();
    }
    out
}

/// Renders the city table followed by the height ranking.
#[must_use]
pub fn city_detail(detail: &CityDetail) -> String {
    let mut out = format!("{} ({} skyscraper(s))\n", detail.city, detail.rows.len());
    writeln!(
        out,
        "{:<40}  {:>8}  {:>5}  {:<11}  STATUS",
        "NAME", "HEIGHT", "RANK", "COMPLETED"
    )
    .unwrap();
    for row in &detail.rows {
        writeln!(
            out,
            "{:<40}  {:>8.2}  {:>5}  {:<11}  {}",
            row.name,
            row.height,
            row.rank,
            row.year_completed.to_string(),
            row.current_status
        )
        .unwrap();
    }

    if !detail.top_heights.is_empty() {
        writeln!(out, "\nTallest in {}:", detail.city).unwrap();
        for (i, row) in detail.top_heights.iter().enumerate() {
            writeln!(out, "{:>3}. {:<40}  {:>8.2} m", i + 1, row.name, row.height).unwrap();
        }
    }
    out
}

/// Renders the tallest-building paragraph.
#[must_use]
pub fn summary(summary: &TallestSummary) -> String {
    format!("{}\n", summary.text)
}

/// Renders timeline buckets as a horizontal histogram.
#[must_use]
pub fn timeline(buckets: &[YearBucket], bucket_width: u8) -> String {
    if buckets.is_empty() {
        return "No construction starts in range.\n".to_string();
    }

    let max = buckets.iter().map(|b| b.count).max().unwrap_or(1);
    let mut out = String::new();
    for bucket in buckets {
        writeln!(
            out,
            "{:<9}  {:>5}  {}",
            bucket_label(bucket.bucket, bucket_width),
            bucket.count,
            bar(bucket.count, max)
        )
        .unwrap();
    }
    out
}

/// Renders one line per tally slot with its chart color and a bar.
#[must_use]
pub fn tally(counts: &[StatusCount]) -> String {
    let max = counts.iter().map(|c| c.count).max().unwrap_or(0);
    let mut out = String::new();
    for count in counts {
        writeln!(
            out,
            "{:<18}  {:>5}  {:<6}  {}",
            count.status.as_ref(),
            count.count,
            count.status.chart_color(),
            bar(count.count, max)
        )
        .unwrap();
    }
    out
}

/// Renders one `"<city> (<count>)"` picker label per line.
#[must_use]
pub fn cities(options: &[CityOption]) -> String {
    options.iter().fold(String::new(), |mut out, option| {
        writeln!(out, "{option}").unwrap();
        out
    })
}

/// `"1950"` for one-year buckets, `"1950-1959"` otherwise.
fn bucket_label(start: i32, width: u8) -> String {
    if width <= 1 {
        start.to_string()
    } else {
        format!("{start}-{}", start + i32::from(width) - 1)
    }
}

fn bar(count: u64, max: u64) -> String {
    if max == 0 {
        return String::new();
    }
    let len = (count * MAX_BAR).div_ceil(max);
    #[allow(clippy::cast_possible_truncation)]
    "#".repeat(len as usize)
}

#[cfg(test)]
mod tests {
    use skyline_map_analytics_models::{
        CityDetailRow, Coordinate, Marker, MarkerColor, TallySlot, YearCompletedLabel,
    };

    use super::*;

    #[test]
    fn labels_buckets_by_width() {
        assert_eq!(bucket_label(1955, 1), "1955");
        assert_eq!(bucket_label(1950, 10), "1950-1959");
        assert_eq!(bucket_label(1946, 7), "1946-1952");
    }

    #[test]
    fn bars_scale_to_the_largest_count() {
        assert_eq!(bar(10, 10).len(), 50);
        assert_eq!(bar(5, 10).len(), 25);
        assert_eq!(bar(1, 1000).len(), 1);
        assert_eq!(bar(0, 10), "");
        assert_eq!(bar(0, 0), "");
    }

    #[test]
    fn empty_map_has_only_a_header() {
        let text = map_view(&MapView::empty());
        assert_eq!(text, "0 marker(s), center (0.0000, 0.0000), zoom 3\n");
    }

    #[test]
    fn map_lists_each_marker() {
        let view = MapView {
            markers: vec![Marker {
                id: 7,
                name: "Chrysler Building".to_string(),
                latitude: 40.7516,
                longitude: -73.9755,
                color: MarkerColor::Green,
            }],
            center: Coordinate {
                latitude: 40.7516,
                longitude: -73.9755,
            },
            zoom: 3,
        };
        let text = map_view(&view);
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("green"));
        assert!(text.ends_with("Chrysler Building\n"));
    }

    #[test]
    fn city_table_shows_year_labels() {
        let row = CityDetailRow {
            id: 1,
            name: "Hudson Spire".to_string(),
            height: 550.0,
            rank: 0,
            year_completed: YearCompletedLabel::Planning,
            current_status: "vision".to_string(),
        };
        let detail = CityDetail {
            city: "New York City".to_string(),
            rows: vec![row.clone()],
            top_heights: vec![row],
        };
        let text = city_detail(&detail);
        assert!(text.starts_with("New York City (1 skyscraper(s))\n"));
        assert!(text.contains("planning"));
        assert!(text.contains("  1. Hudson Spire"));
    }

    #[test]
    fn empty_timeline_says_so() {
        assert_eq!(timeline(&[], 5), "No construction starts in range.\n");
    }

    #[test]
    fn tally_lists_every_slot() {
        let counts: Vec<StatusCount> = TallySlot::all()
            .iter()
            .map(|&status| StatusCount { status, count: 0 })
            .collect();
        let text = tally(&counts);
        assert_eq!(text.lines().count(), TallySlot::all().len());
        assert!(text.contains("topped out"));
    }

    #[test]
    fn cities_use_picker_labels() {
        let options = vec![
            CityOption {
                city: "Chicago".to_string(),
                count: 2,
            },
            CityOption {
                city: "Denver".to_string(),
                count: 1,
            },
        ];
        assert_eq!(cities(&options), "Chicago (2)\nDenver (1)\n");
    }
}
