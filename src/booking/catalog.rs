//! Slot catalog
//!
//! The fixed ordered list of four daily consultation shifts, identical for
//! all consultants and all dates.

use chrono::NaiveTime;
use once_cell::sync::Lazy;

use super::types::SlotId;

/// One of the four fixed 2-hour daily consultation shifts
#[derive(Debug, Clone)]
pub struct Slot {
    /// Shift identifier
    pub id: SlotId,
    /// Display label
    pub label: String,
    /// Shift start time
    pub start: NaiveTime,
    /// Shift end time
    pub end: NaiveTime,
}

static CATALOG: Lazy<[Slot; 4]> = Lazy::new(|| {
    let shift = |id: u8, start_hour: u32, end_hour: u32| Slot {
        id: SlotId(id),
        label: format!("{}:00 - {}:00", start_hour, end_hour),
        start: NaiveTime::from_hms_opt(start_hour, 0, 0).expect("valid shift start"),
        end: NaiveTime::from_hms_opt(end_hour, 0, 0).expect("valid shift end"),
    };

    [
        shift(0, 8, 10),
        shift(1, 10, 12),
        shift(2, 13, 15),
        shift(3, 15, 17),
    ]
});

/// All four shifts in order
pub fn slots() -> &'static [Slot; 4] {
    &CATALOG
}

/// Look up a shift by identifier
pub fn slot(id: SlotId) -> Option<&'static Slot> {
    CATALOG.get(id.index())
}

/// Display label for a shift, e.g. `"8:00 - 10:00"`
pub fn time_label(id: SlotId) -> Option<String> {
    slot(id).map(|s| s.label.clone())
}
