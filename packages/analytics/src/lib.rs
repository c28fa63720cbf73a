#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Derivation pipeline for the skyscraper map, table, and chart views.
//!
//! Every public builder is a pure function over an immutable
//! [`RecordStore`]: it takes the store plus the user's current selection
//! and returns a freshly derived view. Nothing here writes back into the
//! store, so views can be rebuilt on every selection change.

pub mod city_detail;
pub mod map_view;
pub mod status;
pub mod store;
pub mod summary;
pub mod tally;
pub mod timeline;

pub use city_detail::build_city_detail;
pub use map_view::build_map_view;
pub use store::RecordStore;
pub use summary::summarize_tallest;
pub use tally::tally_statuses;
pub use timeline::build_timeline;

use thiserror::Error;

/// Errors that can occur while deriving a view.
///
/// These all indicate that the caller passed a value outside a set the
/// pipeline itself defines, so they are not meant to be recovered from.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// The selected city does not occur in the store.
    #[error("Unknown city: {city}")]
    UnknownCity {
        /// The requested city.
        city: String,
    },

    /// A coarse status label outside the fixed selection set.
    #[error("Unknown status filter '{label}'")]
    UnknownCoarseStatus {
        /// The rejected label.
        label: String,
    },

    /// Timeline bucket width outside 1-10.
    #[error("Invalid bucket width {width}: expected 1-10")]
    InvalidBucketWidth {
        /// The rejected width.
        width: u8,
    },

    /// Timeline start year beyond the last selectable year.
    #[error("Invalid start year {year}: must not be later than {max}")]
    InvalidStartYear {
        /// The rejected year.
        year: i32,
        /// Last selectable year.
        max: i32,
    },

    /// A summary was requested for a city table with no rows.
    #[error("No skyscrapers recorded in {city}")]
    EmptyCity {
        /// The selected city.
        city: String,
    },

    /// Two records share an identifier.
    #[error("Duplicate record id {id}")]
    DuplicateRecordId {
        /// The repeated identifier.
        id: u32,
    },

    /// A derived row points at a record the store does not hold.
    #[error("Record {id} is not in the store")]
    MissingRecord {
        /// The dangling identifier.
        id: u32,
    },
}
