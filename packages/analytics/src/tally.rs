//! Status distribution tally.

use skyline_map_analytics_models::{StatusCount, TallySlot};
use skyline_map_building_models::BuildingStatus;

use crate::RecordStore;

/// Returns the tally slot a status is counted under, if any.
///
/// Vision, proposed, and never-completed buildings are left out of the
/// distribution chart.
#[must_use]
pub const fn slot_for(status: BuildingStatus) -> Option<TallySlot> {
    match status {
        BuildingStatus::Completed => Some(TallySlot::Completed),
        BuildingStatus::OnHold => Some(TallySlot::OnHold),
        BuildingStatus::Demolished => Some(TallySlot::Demolished),
        BuildingStatus::UnderConstruction => Some(TallySlot::UnderConstruction),
        BuildingStatus::ArchitecturallyToppedOut | BuildingStatus::StructurallyToppedOut => {
            Some(TallySlot::ToppedOut)
        }
        BuildingStatus::NeverCompleted | BuildingStatus::Vision | BuildingStatus::Proposed => None,
    }
}

/// Counts records per [`TallySlot`], always returning all five slots in
/// their fixed order.
#[must_use]
pub fn tally_statuses(store: &RecordStore) -> Vec<StatusCount> {
    let mut counts = [0u64; 5];
    for slot in store
        .iter()
        .filter_map(|r| r.status.parsed())
        .filter_map(slot_for)
    {
        counts[slot_index(slot)] += 1;
    }

    TallySlot::all()
        .iter()
        .map(|&status| StatusCount {
            status,
            count: counts[slot_index(status)],
        })
        .collect()
}

const fn slot_index(slot: TallySlot) -> usize {
    match slot {
        TallySlot::Completed => 0,
        TallySlot::OnHold => 1,
        TallySlot::Demolished => 2,
        TallySlot::UnderConstruction => 3,
        TallySlot::ToppedOut => 4,
    }
}
