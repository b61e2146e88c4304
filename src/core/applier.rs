use crate::core::models::{Assignment, is_teacher_selected};
use crate::core::timetable::Timetable;
use crate::core::types::{Day, PERIOD_COUNT, Period, ProgramTag};
use crate::errors::{Error, Result};

pub const DEFAULT_CELL_CAPACITY: usize = 2;

/// A whole day for one room: each period names a teacher or is left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayBatch {
    slots: [Option<String>; PERIOD_COUNT],
}

impl DayBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Placeholder names ("-", blank) leave the period empty.
    pub fn set(&mut self, period: Period, teacher: &str) {
        self.slots[period.index()] =
            is_teacher_selected(teacher).then(|| teacher.trim().to_string());
    }

    pub fn with(mut self, period: Period, teacher: &str) -> Self {
        self.set(period, teacher);
        self
    }

    pub fn teacher_at(&self, period: Period) -> Option<&str> {
        self.slots[period.index()].as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Named teachers, each once, in first-appearance order.
    pub fn teachers(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for name in self.slots.iter().flatten() {
            if !out.contains(&name.as_str()) {
                out.push(name.as_str());
            }
        }
        out
    }

    pub fn periods_for<'a>(&'a self, teacher: &'a str) -> impl Iterator<Item = Period> + 'a {
        Period::all().filter(move |p| self.teacher_at(*p) == Some(teacher))
    }

    pub fn assigned(&self) -> impl Iterator<Item = (Period, &str)> {
        Period::all().filter_map(move |p| self.teacher_at(p).map(|t| (p, t)))
    }
}

/// Appends one entry to a cell holding fewer than `capacity` entries.
pub fn add_assignment(
    timetable: &mut Timetable,
    room: &str,
    day: Day,
    period: Period,
    teacher: &str,
    program: ProgramTag,
    capacity: usize,
) -> Result<()> {
    if !is_teacher_selected(teacher) {
        return Err(Error::NoTeacherSelected);
    }
    let subject = timetable.subject_of(teacher);
    let grid = timetable
        .schedule
        .grid_mut(room)
        .ok_or_else(|| Error::UnknownRoom(room.to_string()))?;
    let cell = grid.cell_mut(day, period);
    if cell.len() >= capacity {
        return Err(Error::CellAtCapacity {
            room: room.to_string(),
            day: day.to_string(),
            period: period.number(),
            capacity,
        });
    }
    cell.push(Assignment::new(teacher.trim(), subject, program));
    Ok(())
}

/// Overwrites the day for `scope` only. Entries under any other tag stay put.
pub fn apply_day_batch(
    timetable: &mut Timetable,
    room: &str,
    day: Day,
    batch: &DayBatch,
    scope: ProgramTag,
) -> Result<()> {
    let subjects: Vec<(Period, String, String)> = batch
        .assigned()
        .map(|(p, t)| (p, t.to_string(), timetable.subject_of(t)))
        .collect();
    let grid = timetable
        .schedule
        .grid_mut(room)
        .ok_or_else(|| Error::UnknownRoom(room.to_string()))?;

    for period in Period::all() {
        grid.cell_mut(day, period).retain(|a| a.program != scope);
    }
    for (period, teacher, subject) in subjects {
        grid.cell_mut(day, period)
            .push(Assignment::new(teacher, subject, scope));
    }
    Ok(())
}

/// Empties every cell of the room.
pub fn clear_room(timetable: &mut Timetable, room: &str) -> Result<()> {
    timetable
        .schedule
        .grid_mut(room)
        .ok_or_else(|| Error::UnknownRoom(room.to_string()))?
        .clear();
    Ok(())
}
