//! Immutable in-memory table of skyscraper records.
//!
//! The store is built once after loading and never mutated; every view is
//! derived from a shared reference to it.

use std::collections::BTreeMap;

use skyline_map_analytics_models::CityOption;
use skyline_map_building_models::Record;

use crate::AnalyticsError;

/// City preselected in the city picker when it exists in the data.
pub const PREFERRED_CITY: &str = "New York City";

/// The loaded record table, in source order, indexed by identifier.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    /// record id -> position in `records`
    by_id: BTreeMap<u32, usize>,
}

impl RecordStore {
    /// Builds a store from records in source order.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::DuplicateRecordId`] if two records share an
    /// identifier.
    pub fn new(records: Vec<Record>) -> Result<Self, AnalyticsError> {
        let mut by_id = BTreeMap::new();
        for (position, record) in records.iter().enumerate() {
            if by_id.insert(record.id, position).is_some() {
                return Err(AnalyticsError::DuplicateRecordId { id: record.id });
            }
        }

        let anomalous = records.iter().filter(|r| r.status.is_anomalous()).count();
        if anomalous > 0 {
            log::debug!("{anomalous} record(s) have a completion year but no start year");
        }

        Ok(Self { records, by_id })
    }

    /// A store with no records, used when the data file is unavailable.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in source order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterates records in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Looks up a record by identifier.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Record> {
        self.by_id.get(&id).map(|&position| &self.records[position])
    }

    /// Position of a record in source order.
    #[must_use]
    pub fn position(&self, id: u32) -> Option<usize> {
        self.by_id.get(&id).copied()
    }

    /// Whether any record is located in `city` (exact match).
    #[must_use]
    pub fn contains_city(&self, city: &str) -> bool {
        self.records.iter().any(|r| r.location.city == city)
    }

    /// Distinct non-empty cities with record counts, sorted by their
    /// `"<city> (<count>)"` label.
    #[must_use]
    pub fn city_options(&self) -> Vec<CityOption> {
        let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
        for record in &self.records {
            let city = record.location.city.as_str();
            if !city.is_empty() {
                *counts.entry(city).or_default() += 1;
            }
        }

        let mut options: Vec<CityOption> = counts
            .into_iter()
            .map(|(city, count)| CityOption {
                city: city.to_string(),
                count,
            })
            .collect();
        options.sort_by_cached_key(ToString::to_string);
        options
    }

    /// The city to preselect: [`PREFERRED_CITY`] when present, otherwise
    /// the first city option.
    #[must_use]
    pub fn default_city(&self) -> Option<String> {
        if self.contains_city(PREFERRED_CITY) {
            return Some(PREFERRED_CITY.to_string());
        }
        self.city_options().into_iter().next().map(|o| o.city)
    }

    /// Earliest known construction start year, ignoring the `0` sentinel.
    #[must_use]
    pub fn min_started_year(&self) -> Option<i32> {
        self.records
            .iter()
            .map(|r| r.status.started_year)
            .filter(|&year| year > 0)
            .min()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
