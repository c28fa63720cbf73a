//! Construction-start timeline.
//!
//! Buckets are anchored at year 0, not at the earliest year in the data, so
//! a bucket always starts on a multiple of the bucket width.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use skyline_map_analytics_models::{TimelineParams, YearBucket};

use crate::{AnalyticsError, RecordStore};

/// Selectable bucket widths, in years.
pub const BUCKET_WIDTH_RANGE: RangeInclusive<u8> = 1..=10;

/// Latest selectable start-year cutoff.
pub const MAX_START_YEAR: i32 = 2000;

/// Counts construction starts per bucket.
///
/// Records with an unknown start year are ignored, as are records that
/// started before `params.start_year`. Only non-empty buckets are returned,
/// in ascending order.
///
/// # Errors
///
/// * [`AnalyticsError::InvalidBucketWidth`] if the width is outside
///   [`BUCKET_WIDTH_RANGE`].
/// * [`AnalyticsError::InvalidStartYear`] if the cutoff is later than
///   [`MAX_START_YEAR`].
pub fn build_timeline(
    store: &RecordStore,
    params: &TimelineParams,
) -> Result<Vec<YearBucket>, AnalyticsError> {
    if !BUCKET_WIDTH_RANGE.contains(&params.bucket_width) {
        return Err(AnalyticsError::InvalidBucketWidth {
            width: params.bucket_width,
        });
    }
    if params.start_year > MAX_START_YEAR {
        return Err(AnalyticsError::InvalidStartYear {
            year: params.start_year,
            max: MAX_START_YEAR,
        });
    }

    let mut counts: BTreeMap<i32, u64> = BTreeMap::new();
    for started in store
        .iter()
        .map(|r| r.status.started_year)
        .filter(|&year| year > 0 && year >= params.start_year)
    {
        *counts
            .entry(bucket_of(started, params.bucket_width))
            .or_default() += 1;
    }

    log::debug!(
        "Timeline ({}yr buckets from {}): {} bucket(s)",
        params.bucket_width,
        params.start_year,
        counts.len()
    );

    Ok(counts
        .into_iter()
        .map(|(bucket, count)| YearBucket { bucket, count })
        .collect())
}

/// First year of the bucket containing `year`: `floor(year / width) * width`.
#[must_use]
pub fn bucket_of(year: i32, width: u8) -> i32 {
    let width = i32::from(width);
    year.div_euclid(width) * width
}

#[cfg(test)]
mod tests {
    use skyline_map_building_models::Record;

    use super::*;

    fn store_with_starts(years: &[i32]) -> RecordStore {
        let records = years
            .iter()
            .zip(1u32..)
            .map(|(&year, id)| Record::new(id, format!("Tower {id}")).with_status("completed", year, 0))
            .collect();
        RecordStore::new(records).unwrap()
    }

    fn timeline(store: &RecordStore, bucket_width: u8, start_year: i32) -> Vec<YearBucket> {
        build_timeline(
            store,
            &TimelineParams {
                bucket_width,
                start_year,
            },
        )
        .unwrap()
    }

    #[test]
    fn cutoff_applies_to_year_not_bucket() {
        let store = store_with_starts(&[1955, 1949]);
        let buckets = timeline(&store, 10, 1950);
        assert_eq!(buckets, vec![YearBucket { bucket: 1950, count: 1 }]);
    }

    #[test]
    fn buckets_anchor_at_year_zero() {
        assert_eq!(bucket_of(1955, 10), 1950);
        assert_eq!(bucket_of(1955, 7), 1953);
        assert_eq!(bucket_of(1952, 7), 1946);
        assert_eq!(bucket_of(2001, 1), 2001);
    }

    #[test]
    fn unknown_start_years_are_ignored() {
        let store = store_with_starts(&[0, 0, 1990]);
        let buckets = timeline(&store, 5, 1900);
        assert_eq!(buckets, vec![YearBucket { bucket: 1990, count: 1 }]);
    }

    #[test]
    fn empty_buckets_are_omitted_and_sorted() {
        let store = store_with_starts(&[1990, 1930, 1931, 1992, 1930]);
        let buckets = timeline(&store, 10, 1900);
        assert_eq!(
            buckets,
            vec![
                YearBucket { bucket: 1930, count: 3 },
                YearBucket { bucket: 1990, count: 2 },
            ]
        );
    }

    #[test]
    fn bucket_properties_hold_for_every_width() {
        let years = [1885, 1902, 1913, 1929, 1930, 1931, 1964, 1977, 1999, 2004, 2015, 0];
        let store = store_with_starts(&years);
        for width in BUCKET_WIDTH_RANGE {
            for cutoff in [1885, 1930, 1950, 2000] {
                let buckets = timeline(&store, width, cutoff);
                let expected_total = years.iter().filter(|&&y| y != 0 && y >= cutoff).count();
                let total: u64 = buckets.iter().map(|b| b.count).sum();
                assert_eq!(total, expected_total as u64, "width {width}, cutoff {cutoff}");
                for bucket in &buckets {
                    assert_eq!(bucket.bucket % i32::from(width), 0);
                    assert!(bucket.count > 0);
                }
                assert!(buckets.windows(2).all(|w| w[0].bucket < w[1].bucket));
            }
        }
    }

    #[test]
    fn rejects_out_of_range_parameters() {
        let store = store_with_starts(&[1990]);
        let err = build_timeline(
            &store,
            &TimelineParams {
                bucket_width: 0,
                start_year: 1950,
            },
        )
        .unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidBucketWidth { width: 0 }));

        let err = build_timeline(
            &store,
            &TimelineParams {
                bucket_width: 11,
                start_year: 1950,
            },
        )
        .unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidBucketWidth { width: 11 }));

        let err = build_timeline(
            &store,
            &TimelineParams {
                bucket_width: 5,
                start_year: 2001,
            },
        )
        .unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidStartYear { year: 2001, .. }));
    }

    #[test]
    fn empty_store_has_no_buckets() {
        assert!(timeline(&RecordStore::empty(), 1, 1900).is_empty());
    }
}
