//! Core booking types

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// Identifier of one of the four fixed daily consultation shifts (0..=3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(pub u8);

impl SlotId {
    /// All shift identifiers in catalog order
    pub const ALL: [SlotId; 4] = [SlotId(0), SlotId(1), SlotId(2), SlotId(3)];

    /// Index into the slot catalog
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Calendar-day key used to index booked-shift tables.
///
/// Wire form is `day/month/year` without zero padding (`"6/6/2025"`).
/// External shift tables are keyed by exactly this rendering, so `Display`
/// and `FromStr` are the single source of the format and serde goes through
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Wrap a calendar day
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The underlying calendar day
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // No zero padding: 6/6/2025, not 06/06/2025
        write!(f, "{}/{}/{}", self.0.day(), self.0.month(), self.0.year())
    }
}

impl FromStr for DateKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut parts = s.splitn(3, '/');
        let (day, month, year) = match (parts.next(), parts.next(), parts.next()) {
            (Some(d), Some(m), Some(y)) => (d, m, y),
            _ => return Err(format!("Invalid date key: {}", s)),
        };

        let day: u32 = day
            .trim()
            .parse()
            .map_err(|_| format!("Invalid day in date key: {}", s))?;
        let month: u32 = month
            .trim()
            .parse()
            .map_err(|_| format!("Invalid month in date key: {}", s))?;
        let year: i32 = year
            .trim()
            .parse()
            .map_err(|_| format!("Invalid year in date key: {}", s))?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| format!("Date key out of range: {}", s))
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

/// Consultant record as supplied by the external data provider.
///
/// `booked_shifts` is the source-of-truth shift table; this core never
/// mutates it and tracks session-local reservations in a
/// [`ReservationOverlay`] instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultantSchedule {
    /// Consultant ID
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Clinical specialty
    pub specialty: Option<String>,
    /// Booked shifts keyed by calendar day
    #[serde(default)]
    pub booked_shifts: HashMap<DateKey, HashSet<SlotId>>,
}

impl ConsultantSchedule {
    /// Create a consultant record with an empty shift table
    pub fn new<S: Into<String>>(id: Uuid, name: S) -> Self {
        Self {
            id,
            name: name.into(),
            specialty: None,
            booked_shifts: HashMap::new(),
        }
    }

    /// Whether the record itself marks the slot as booked
    pub fn is_shift_booked(&self, date: &DateKey, slot: SlotId) -> bool {
        self.booked_shifts
            .get(date)
            .is_some_and(|slots| slots.contains(&slot))
    }
}

/// Session-local reservations not yet reflected in the consultant record.
///
/// Exclusively owned by the booking flow instance that created it; slots are
/// added once per confirmed booking and never removed (no cancellation flow
/// in scope). Two concurrent sessions are NOT coordinated through this type.
#[derive(Debug, Clone, Default)]
pub struct ReservationOverlay {
    reserved: HashMap<Uuid, HashMap<DateKey, HashSet<SlotId>>>,
}

impl ReservationOverlay {
    /// Create an empty overlay
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the overlay holds a reservation for the given slot
    pub fn contains(&self, consultant_id: Uuid, date: &DateKey, slot: SlotId) -> bool {
        self.reserved
            .get(&consultant_id)
            .and_then(|dates| dates.get(date))
            .is_some_and(|slots| slots.contains(&slot))
    }

    /// Record a reservation. Set semantics: inserting a slot that is already
    /// present is a no-op. Returns `true` when the slot was newly added.
    pub fn reserve(&mut self, consultant_id: Uuid, date: DateKey, slot: SlotId) -> bool {
        self.reserved
            .entry(consultant_id)
            .or_default()
            .entry(date)
            .or_default()
            .insert(slot)
    }

    /// Number of reserved slots across all consultants and dates
    pub fn len(&self) -> usize {
        self.reserved
            .values()
            .flat_map(|dates| dates.values())
            .map(|slots| slots.len())
            .sum()
    }

    /// Whether the overlay holds no reservations
    pub fn is_empty(&self) -> bool {
        self.reserved.is_empty()
    }
}
