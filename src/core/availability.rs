use crate::core::timetable::Timetable;
use crate::core::types::{AvailabilityPolicy, Day, Period};

/// Who can take a slot and who is already teaching elsewhere at that time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Availability {
    /// Directory teachers who may take the slot, in directory order.
    pub free: Vec<String>,
    /// Teachers booked in other rooms at the same time, in scan order.
    pub busy: Vec<String>,
}

impl Availability {
    pub fn is_free(&self, teacher: &str) -> bool {
        self.free.iter().any(|t| t == teacher)
    }

    pub fn is_busy(&self, teacher: &str) -> bool {
        self.busy.iter().any(|t| t == teacher)
    }
}

pub fn available_teachers(
    timetable: &Timetable,
    room: &str,
    day: Day,
    period: Period,
    policy: AvailabilityPolicy,
) -> Availability {
    let busy: Vec<String> = timetable
        .schedule
        .teachers_at(day, period, Some(room))
        .into_iter()
        .map(str::to_string)
        .collect();

    let free = timetable
        .teachers
        .iter()
        .filter(|t| !busy.contains(&t.name))
        .filter(|t| match policy {
            AvailabilityPolicy::Open => true,
            AvailabilityPolicy::Restricted => t.permits(room),
        })
        .map(|t| t.name.clone())
        .collect();

    Availability { free, busy }
}
