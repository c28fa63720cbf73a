//! Map marker derivation.

use skyline_map_analytics_models::{Coordinate, DEFAULT_ZOOM, MapView, MapViewParams, Marker};
use skyline_map_building_models::Record;

use crate::RecordStore;
use crate::status::{expand_selection, status_color};

/// Builds the colorized marker subset for the selected coarse statuses.
///
/// A record gets a marker iff its raw status falls in the expansion of a
/// selected label and its coordinates are not the `(0, 0)` sentinel. When
/// nothing survives, the view is empty and centered on the origin;
/// otherwise it is centered on the mean marker position.
#[must_use]
pub fn build_map_view(store: &RecordStore, params: &MapViewParams) -> MapView {
    let selected = expand_selection(&params.statuses);
    if selected.is_empty() {
        log::debug!("No status filters selected, map view is empty");
        return MapView::empty();
    }

    let markers: Vec<Marker> = store
        .iter()
        .filter(|r| r.status.parsed().is_some_and(|s| selected.contains(&s)))
        .filter(|r| r.location.has_coordinates())
        .map(to_marker)
        .collect();

    log::debug!(
        "Map view: {} marker(s) for filters {:?}",
        markers.len(),
        params.statuses
    );

    let Some(center) = mean_position(&markers) else {
        return MapView::empty();
    };

    MapView {
        markers,
        center,
        zoom: DEFAULT_ZOOM,
    }
}

fn to_marker(record: &Record) -> Marker {
    Marker {
        id: record.id,
        name: record.name.clone(),
        latitude: record.location.latitude,
        longitude: record.location.longitude,
        color: status_color(&record.status.current),
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean_position(markers: &[Marker]) -> Option<Coordinate> {
    if markers.is_empty() {
        return None;
    }
    let n = markers.len() as f64;
    let (lat_sum, lng_sum) = markers.iter().fold((0.0, 0.0), |(lat, lng), m| {
        (lat + m.latitude, lng + m.longitude)
    });
    Some(Coordinate {
        latitude: lat_sum / n,
        longitude: lng_sum / n,
    })
}
