#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CSV loader that builds the skyscraper record store.
//!
//! Reads the flattened skyscraper CSV (dotted column names such as
//! `location.city` and `status.started.year`), converts each row into a
//! [`Record`], and hands the result to [`RecordStore`]. Rows that cannot be
//! parsed are skipped with a warning instead of failing the whole load, and
//! a missing data file degrades to an empty store.

pub mod columns;
pub mod parsing;

use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;
use std::path::{Path, PathBuf};

use skyline_map_analytics::{AnalyticsError, RecordStore};
use skyline_map_building_models::{Purpose, Record};

use crate::columns::{REQUIRED_COLUMNS, purpose_column};
use crate::parsing::{parse_coordinate, parse_count, parse_flag, parse_required_float, parse_year};

/// Errors that can occur while loading the data file.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The data file does not exist.
    #[error("'{file}' not found in '{dir}'")]
    NotFound {
        /// File name that was looked up.
        file: String,
        /// Directory it was looked up in.
        dir: String,
    },

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks a column every record needs.
    #[error("Missing required column '{column}'")]
    MissingColumn {
        /// The absent column name.
        column: String,
    },

    /// The parsed records could not form a store.
    #[error("Store error: {0}")]
    Store(#[from] AnalyticsError),
}

/// Why a single row was skipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    /// A required text cell is blank.
    #[error("blank '{column}'")]
    Blank {
        /// Column name.
        column: &'static str,
    },

    /// A numeric cell holds something that is not a number.
    #[error("invalid '{column}' value '{value}'")]
    Invalid {
        /// Column name.
        column: &'static str,
        /// Offending cell contents.
        value: String,
    },

    /// The identifier was already used by an earlier row.
    #[error("duplicate id {id}")]
    DuplicateId {
        /// The repeated identifier.
        id: u32,
    },
}

/// Records parsed from a CSV source plus how many rows were dropped.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    /// Parsed records in file order.
    pub records: Vec<Record>,
    /// Rows skipped because they were malformed or duplicated.
    pub skipped: usize,
}

/// Resolves a data file name against a directory, appending `.csv` when
/// the name has no such extension.
#[must_use]
pub fn resolve_csv_path(filename: &str, dir: &Path) -> PathBuf {
    let has_csv_extension = Path::new(filename)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if has_csv_extension {
        dir.join(filename)
    } else {
        dir.join(format!("{filename}.csv"))
    }
}

/// Loads the data file at `path` into a [`RecordStore`].
///
/// A missing file is logged and yields an empty store so that the views
/// can still be assembled.
///
/// # Errors
///
/// Returns [`IngestError`] for any failure other than a missing file (an
/// unreadable file, a malformed header row, or a missing required column).
pub fn load_store(path: &Path) -> Result<RecordStore, IngestError> {
    match load_records(path) {
        Ok(outcome) => {
            log::info!(
                "Loaded {} skyscraper(s) from {} ({} row(s) skipped)",
                outcome.records.len(),
                path.display(),
                outcome.skipped
            );
            Ok(RecordStore::new(outcome.records)?)
        }
        Err(e @ IngestError::NotFound { .. }) => {
            log::error!("{e}");
            Ok(RecordStore::empty())
        }
        Err(e) => Err(e),
    }
}

/// Reads every record from the CSV file at `path`.
///
/// # Errors
///
/// Returns [`IngestError::NotFound`] if the file does not exist, or any
/// error from [`load_records_from_reader`].
pub fn load_records(path: &Path) -> Result<LoadOutcome, IngestError> {
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(IngestError::NotFound {
                file: path
                    .file_name()
                    .map_or_else(String::new, |f| f.to_string_lossy().into_owned()),
                dir: path
                    .parent()
                    .map_or_else(String::new, |d| d.display().to_string()),
            });
        }
        Err(e) => return Err(e.into()),
    };
    load_records_from_reader(file)
}

/// Parses records from any CSV source.
///
/// The first row must be a header containing every column in
/// [`REQUIRED_COLUMNS`]. Purpose columns are optional; absent ones read as
/// unset. Malformed rows and rows repeating an earlier identifier are
/// skipped and counted in [`LoadOutcome::skipped`].
///
/// # Errors
///
/// Returns [`IngestError::MissingColumn`] if a required column is absent,
/// or [`IngestError::Csv`] if the header row cannot be read.
pub fn load_records_from_reader<R: Read>(reader: R) -> Result<LoadOutcome, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let header_index: BTreeMap<String, usize> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| (h.trim().to_owned(), i))
        .collect();
    let layout = ColumnLayout::from_headers(&header_index)?;

    let mut outcome = LoadOutcome::default();
    let mut seen_ids = BTreeSet::new();

    for (line, result) in reader.records().enumerate() {
        // Header is line 1.
        let line = line + 2;
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                log::warn!("Skipping CSV line {line}: {e}");
                outcome.skipped += 1;
                continue;
            }
        };

        let parsed = layout.parse_row(&row).and_then(|record| {
            if seen_ids.insert(record.id) {
                Ok(record)
            } else {
                Err(RowError::DuplicateId { id: record.id })
            }
        });

        match parsed {
            Ok(record) => outcome.records.push(record),
            Err(e) => {
                log::warn!("Skipping CSV line {line}: {e}");
                outcome.skipped += 1;
            }
        }
    }

    log::debug!(
        "Parsed {} record(s), skipped {}",
        outcome.records.len(),
        outcome.skipped
    );

    Ok(outcome)
}

/// Column positions resolved from the header row.
struct ColumnLayout {
    required: BTreeMap<&'static str, usize>,
    purposes: Vec<(Purpose, usize)>,
}

impl ColumnLayout {
    fn from_headers(header_index: &BTreeMap<String, usize>) -> Result<Self, IngestError> {
        let mut required = BTreeMap::new();
        for &column in REQUIRED_COLUMNS {
            let idx = header_index
                .get(column)
                .copied()
                .ok_or_else(|| IngestError::MissingColumn {
                    column: column.to_string(),
                })?;
            required.insert(column, idx);
        }

        let purposes: Vec<(Purpose, usize)> = Purpose::all()
            .iter()
            .filter_map(|&p| header_index.get(&purpose_column(p)).map(|&i| (p, i)))
            .collect();

        if purposes.len() < Purpose::all().len() {
            log::debug!(
                "{} of {} purpose column(s) present",
                purposes.len(),
                Purpose::all().len()
            );
        }

        Ok(Self { required, purposes })
    }

    fn cell<'r>(&self, row: &'r csv::StringRecord, column: &'static str) -> &'r str {
        self.required
            .get(column)
            .and_then(|&i| row.get(i))
            .unwrap_or("")
            .trim()
    }

    fn text(&self, row: &csv::StringRecord, column: &'static str) -> Result<String, RowError> {
        let value = self.cell(row, column);
        if value.is_empty() {
            return Err(RowError::Blank { column });
        }
        Ok(value.to_owned())
    }

    fn number<T>(
        &self,
        row: &csv::StringRecord,
        column: &'static str,
        parse: fn(&str) -> Option<T>,
    ) -> Result<T, RowError> {
        let value = self.cell(row, column);
        parse(value).ok_or_else(|| RowError::Invalid {
            column,
            value: value.to_owned(),
        })
    }

    fn parse_row(&self, row: &csv::StringRecord) -> Result<Record, RowError> {
        use crate::columns::{
            CITY, COMPLETED_YEAR, CURRENT_STATUS, FLOORS_ABOVE, HEIGHT, ID, LATITUDE, LONGITUDE,
            NAME, RANK, STARTED_YEAR,
        };

        let id_cell = self.text(row, ID)?;
        let id = parse_count(&id_cell).ok_or(RowError::Invalid {
            column: ID,
            value: id_cell,
        })?;

        let mut record = Record::new(id, self.text(row, NAME)?)
            .with_location(
                self.text(row, CITY)?,
                self.number(row, LATITUDE, parse_coordinate)?,
                self.number(row, LONGITUDE, parse_coordinate)?,
            )
            .with_statistics(
                self.number(row, HEIGHT, parse_required_float)?,
                self.number(row, RANK, parse_count)?,
                self.number(row, FLOORS_ABOVE, parse_count)?,
            )
            .with_status(
                self.cell(row, CURRENT_STATUS),
                self.number(row, STARTED_YEAR, parse_year)?,
                self.number(row, COMPLETED_YEAR, parse_year)?,
            );

        for &(purpose, idx) in &self.purposes {
            if row.get(idx).is_some_and(parse_flag) {
                record = record.with_purpose(purpose);
            }
        }

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "id,name,location.city,location.latitude,location.longitude,\
statistics.height,statistics.rank,statistics.floors above,status.current,\
status.started.year,status.completed.year,purposes.office,purposes.hotel,purposes.retail,\
purposes.air traffic control tower";

    fn load(body: &str) -> LoadOutcome {
        let csv = format!("{HEADER}\n{body}");
        load_records_from_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn parses_a_complete_row() {
        let outcome = load(
            "12,Empire State Building,New York City,40.748,-73.986,381.0,40,102,completed,1930,1931,True,False,True,False\n",
        );
        assert_eq!(outcome.skipped, 0);
        let record = &outcome.records[0];
        assert_eq!(record.id, 12);
        assert_eq!(record.name, "Empire State Building");
        assert_eq!(record.location.city, "New York City");
        assert!((record.statistics.height - 381.0).abs() < f64::EPSILON);
        assert_eq!(record.statistics.rank, 40);
        assert_eq!(record.statistics.floors_above, 102);
        assert_eq!(record.status.current, "completed");
        assert_eq!(record.status.started_year, 1930);
        assert_eq!(record.status.completed_year, 1931);
        assert!(record.has_purpose(Purpose::Office));
        assert!(record.has_purpose(Purpose::Retail));
        assert!(!record.has_purpose(Purpose::Hotel));
    }

    #[test]
    fn blank_years_and_coordinates_become_sentinels() {
        let outcome = load("3,Hudson Spire,New York City,,,550,0,,vision,,,False,False,False,False\n");
        let record = &outcome.records[0];
        assert!(!record.location.has_coordinates());
        assert_eq!(record.status.started_year, 0);
        assert_eq!(record.status.completed_year, 0);
        assert_eq!(record.statistics.floors_above, 0);
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let outcome = load(concat!(
            "1,Good Tower,Chicago,41.8,-87.6,300,10,70,completed,1990,1992,False,False,False,False\n",
            "2,Bad Height,Chicago,41.8,-87.6,tall,11,70,completed,1990,1992,False,False,False,False\n",
            "x,Bad Id,Chicago,41.8,-87.6,300,12,70,completed,1990,1992,False,False,False,False\n",
            "4,,Chicago,41.8,-87.6,300,13,70,completed,1990,1992,False,False,False,False\n",
            "5,Bad Year,Chicago,41.8,-87.6,300,14,70,completed,ninety,1992,False,False,False,False\n",
        ));
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].id, 1);
        assert_eq!(outcome.skipped, 4);
    }

    #[test]
    fn duplicate_ids_keep_first_row() {
        let outcome = load(concat!(
            "1,First,Chicago,41.8,-87.6,300,10,70,completed,1990,1992,False,False,False,False\n",
            "1,Second,Chicago,41.8,-87.6,300,10,70,completed,1990,1992,False,False,False,False\n",
        ));
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].name, "First");
        assert_eq!(outcome.skipped, 1);
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let csv = "id,name,location.city\n1,A,Chicago\n";
        let err = load_records_from_reader(csv.as_bytes()).unwrap_err();
        assert!(
            matches!(err, IngestError::MissingColumn { ref column } if column == "location.latitude"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn absent_purpose_columns_read_as_unset() {
        let csv = "id,name,location.city,location.latitude,location.longitude,statistics.height,\
statistics.rank,statistics.floors above,status.current,status.started.year,status.completed.year\n\
1,Plain Tower,Chicago,41.8,-87.6,300,10,70,completed,1990,1992\n";
        let outcome = load_records_from_reader(csv.as_bytes()).unwrap();
        assert!(outcome.records[0].purposes.is_empty());
    }

    #[test]
    fn resolves_csv_extension() {
        let dir = Path::new("data");
        assert_eq!(
            resolve_csv_path("skyscrapers", dir),
            PathBuf::from("data/skyscrapers.csv")
        );
        assert_eq!(
            resolve_csv_path("skyscrapers.csv", dir),
            PathBuf::from("data/skyscrapers.csv")
        );
    }

    #[test]
    fn missing_file_degrades_to_empty_store() {
        let path = std::env::temp_dir().join("skyline_map_missing_data_file.csv");
        let err = load_records(&path).unwrap_err();
        assert!(matches!(err, IngestError::NotFound { ref file, .. } if file == "skyline_map_missing_data_file.csv"));

        let store = load_store(&path).unwrap();
        assert!(store.is_empty());
    }
}
