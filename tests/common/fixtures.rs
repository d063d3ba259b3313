//! Test fixtures and factories

use caregate::{ConsultantSchedule, DateKey, RoleClaim, Session, SlotId};
use uuid::Uuid;

/// Consultant with a fixed id and an empty shift table
pub fn consultant() -> ConsultantSchedule {
    ConsultantSchedule {
        id: Uuid::new_v4(),
        name: "Dr. Quyen".to_string(),
        specialty: Some("Endocrinology".to_string()),
        booked_shifts: Default::default(),
    }
}

/// Consultant whose shift table marks the given slots booked on the date
pub fn consultant_with_booked(date: &str, slots: &[u8]) -> ConsultantSchedule {
    let mut record = consultant();
    let date: DateKey = date.parse().unwrap();
    record
        .booked_shifts
        .insert(date, slots.iter().map(|s| SlotId(*s)).collect());
    record
}

/// Authenticated session carrying a bare string role claim
pub fn session_with_role(role: &str) -> Session {
    Session::authenticated(RoleClaim::Name(role.to_string()))
}
