use crate::core::applier::DayBatch;
use crate::core::timetable::Timetable;
use crate::core::types::{Day, Period, ProgramTag};
use std::fmt;

pub const DEFAULT_MARATHON_THRESHOLD: usize = 3;

/// A teacher's periods for one day and the longest consecutive run in them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FatigueReport {
    pub teacher: String,
    pub day: Day,
    /// Sorted and unique.
    pub periods: Vec<Period>,
    pub max_run: usize,
}

impl FatigueReport {
    fn new(teacher: &str, day: Day, mut periods: Vec<Period>) -> Self {
        periods.sort();
        periods.dedup();
        let max_run = longest_run(&periods);
        Self {
            teacher: teacher.to_string(),
            day,
            periods,
            max_run,
        }
    }

    pub fn is_safe(&self, threshold: usize) -> bool {
        self.max_run < threshold
    }

    pub fn periods_label(&self) -> String {
        self.periods
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for FatigueReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Marathon teaching: '{}' would teach {} consecutive periods on {} (periods {}).",
            self.teacher,
            self.max_run,
            self.day,
            self.periods_label()
        )
    }
}

/// Longest run of numerically consecutive periods in a sorted list.
/// Breaks do not interrupt a run: 4 then 5 counts as consecutive across lunch.
pub fn longest_run(periods: &[Period]) -> usize {
    if periods.is_empty() {
        return 0;
    }
    let (mut best, mut current) = (1, 1);
    for pair in periods.windows(2) {
        if pair[0].is_followed_by(pair[1]) {
            current += 1;
            best = best.max(current);
        } else {
            current = 1;
        }
    }
    best
}

/// The teacher's day across every room, the target room included, plus the candidate.
pub fn check_single(
    timetable: &Timetable,
    day: Day,
    period: Period,
    teacher: &str,
) -> FatigueReport {
    let mut periods = timetable.schedule.periods_of(teacher, day, None);
    periods.push(period);
    FatigueReport::new(teacher, day, periods)
}

/// One report per teacher named in the batch, in first-appearance order.
/// Periods come from the other rooms, the target room's entries outside
/// `scope` (the batch leaves those in place), plus what the batch gives that
/// teacher.
pub fn check_batch(
    timetable: &Timetable,
    room: &str,
    day: Day,
    batch: &DayBatch,
    scope: ProgramTag,
) -> Vec<FatigueReport> {
    batch
        .teachers()
        .into_iter()
        .map(|teacher| {
            let mut periods = timetable.schedule.periods_of(teacher, day, Some(room));
            periods.extend(kept_periods(timetable, room, day, teacher, scope));
            periods.extend(batch.periods_for(teacher));
            FatigueReport::new(teacher, day, periods)
        })
        .collect()
}

fn kept_periods(
    timetable: &Timetable,
    room: &str,
    day: Day,
    teacher: &str,
    scope: ProgramTag,
) -> Vec<Period> {
    let Some(grid) = timetable.schedule.grid(room) else {
        return Vec::new();
    };
    Period::all()
        .filter(|p| {
            grid.cell(day, *p)
                .iter()
                .any(|a| a.teacher == teacher && a.program != scope)
        })
        .collect()
}

/// Reports at or above the threshold.
pub fn unsafe_reports(reports: Vec<FatigueReport>, threshold: usize) -> Vec<FatigueReport> {
    reports
        .into_iter()
        .filter(|r| !r.is_safe(threshold))
        .collect()
}
