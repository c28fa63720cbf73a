//! Resolves user-facing option values against the defaults and the loaded
//! data.

use std::path::{Path, PathBuf};

use skyline_map_analytics::RecordStore;
use skyline_map_analytics::status::parse_coarse_label;
use skyline_map_analytics::timeline::MAX_START_YEAR;
use skyline_map_analytics_models::CityOption;
use skyline_map_building_models::CoarseStatus;
use skyline_map_ingest::resolve_csv_path;

use crate::defaults::Defaults;

/// Clap value parser for `--status`.
///
/// # Errors
///
/// Returns a message listing the accepted labels if `value` is not one of
/// them.
pub fn parse_coarse_status(value: &str) -> Result<CoarseStatus, String> {
    parse_coarse_label(value).map_err(|e| {
        let accepted: Vec<String> = CoarseStatus::all()
            .iter()
            .map(|s| format!("'{s}'"))
            .collect();
        format!("{e} (expected one of {})", accepted.join(", "))
    })
}

/// Appends `.csv` to a data path given without an extension.
#[must_use]
pub fn resolve_data_path(path: &Path) -> PathBuf {
    match path.file_name().and_then(|f| f.to_str()) {
        Some(name) => resolve_csv_path(name, path.parent().unwrap_or_else(|| Path::new(""))),
        None => path.to_path_buf(),
    }
}

/// Picks the city to show.
///
/// An explicit request wins and may be either a plain city name or a
/// `"<city> (<count>)"` picker label. Otherwise the configured city is used
/// when the data contains it, falling back to the store's default. Returns
/// `None` only when the store has no cities at all.
#[must_use]
pub fn resolve_city(
    requested: Option<&str>,
    defaults: &Defaults,
    store: &RecordStore,
) -> Option<String> {
    if let Some(requested) = requested {
        return Some(CityOption::parse_label(requested).to_string());
    }
    if store.contains_city(&defaults.city) {
        return Some(defaults.city.clone());
    }
    store.default_city()
}

/// Picks the timeline start year.
///
/// An explicit year is passed through unchanged so that out-of-range
/// values are reported. Derived defaults are capped at [`MAX_START_YEAR`].
#[must_use]
pub fn resolve_start_year(requested: Option<i32>, defaults: &Defaults, store: &RecordStore) -> i32 {
    if let Some(year) = requested {
        return year;
    }
    defaults
        .start_year
        .or_else(|| store.min_started_year())
        .map_or(MAX_START_YEAR, |year| year.min(MAX_START_YEAR))
}

#[cfg(test)]
mod tests {
    use skyline_map_building_models::Record;

    use super::*;
    use crate::defaults::defaults;

    fn store() -> RecordStore {
        RecordStore::new(vec![
            Record::new(1, "Willis Tower")
                .with_location("Chicago", 41.88, -87.63)
                .with_status("completed", 1970, 1974),
            Record::new(2, "Aon Center")
                .with_location("Chicago", 41.88, -87.62)
                .with_status("completed", 1970, 1973),
            Record::new(3, "Wells Fargo Center")
                .with_location("Denver", 39.74, -104.98)
                .with_status("completed", 1981, 1983),
        ])
        .unwrap()
    }

    #[test]
    fn parses_every_coarse_label() {
        for status in CoarseStatus::all() {
            assert_eq!(parse_coarse_status(&status.to_string()), Ok(*status));
        }
        assert_eq!(
            parse_coarse_status(" topped out "),
            Ok(CoarseStatus::ToppedOut)
        );
    }

    #[test]
    fn rejects_unknown_coarse_label() {
        let err = parse_coarse_status("rumoured").unwrap_err();
        assert!(err.contains("'rumoured'"), "{err}");
        assert!(err.contains("'topped out'"), "{err}");
    }

    #[test]
    fn data_path_gets_csv_extension() {
        assert_eq!(
            resolve_data_path(Path::new("data/skyscrapers")),
            PathBuf::from("data/skyscrapers.csv")
        );
        assert_eq!(
            resolve_data_path(Path::new("skyscrapers.csv")),
            PathBuf::from("skyscrapers.csv")
        );
    }

    #[test]
    fn explicit_city_label_is_parsed() {
        let city = resolve_city(Some("Chicago (2)"), &defaults(), &store());
        assert_eq!(city.as_deref(), Some("Chicago"));
        let city = resolve_city(Some("Denver"), &defaults(), &store());
        assert_eq!(city.as_deref(), Some("Denver"));
    }

    #[test]
    fn missing_default_city_falls_back_to_first_option() {
        let city = resolve_city(None, &defaults(), &store());
        assert_eq!(city.as_deref(), Some("Chicago"));
    }

    #[test]
    fn empty_store_has_no_city() {
        assert!(resolve_city(None, &defaults(), &RecordStore::empty()).is_none());
    }

    #[test]
    fn start_year_defaults_to_earliest_start() {
        assert_eq!(resolve_start_year(None, &defaults(), &store()), 1970);
        assert_eq!(resolve_start_year(Some(1990), &defaults(), &store()), 1990);
        assert_eq!(resolve_start_year(Some(2050), &defaults(), &store()), 2050);
        assert_eq!(
            resolve_start_year(None, &defaults(), &RecordStore::empty()),
            MAX_START_YEAR
        );
    }

    #[test]
    fn derived_start_year_is_capped() {
        let store = RecordStore::new(vec![
            Record::new(1, "New Tower").with_status("under construction", 2019, 0),
        ])
        .unwrap();
        assert_eq!(resolve_start_year(None, &defaults(), &store), MAX_START_YEAR);
    }
}
