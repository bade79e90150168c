use crate::catalog::{self, PHASE_COUNT};
use crate::types::{GroupLayout, MoonPhase, PhaseRecord};

static UNKNOWN_PHASE: PhaseRecord = PhaseRecord {
    day: 0,
    name: "Unknown",
    description: "Unknown",
    planting: "Unknown",
    fishing: "Unknown",
};

pub fn clamp_day_index(day_index: i64) -> u32 {
    day_index.clamp(1, PHASE_COUNT as i64) as u32
}

pub fn moon_phase(day_index: i64, layout: GroupLayout) -> MoonPhase {
    let day = clamp_day_index(day_index);
    let record = catalog::phase_record(day).unwrap_or(&UNKNOWN_PHASE);
    let group = catalog::group_for_day(day, layout);

    let preceding: u32 = catalog::groups(layout)
        .iter()
        .take_while(|g| g.kind != group.kind)
        .map(|g| g.night_count())
        .sum();
    let index_in_group = day - group.start + 1;

    MoonPhase {
        day,
        record,
        group,
        grid_position: preceding + index_in_group,
        index_in_group,
    }
}

pub fn next_day_index(day: u32) -> u32 {
    day % PHASE_COUNT + 1
}
