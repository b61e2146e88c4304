use crate::config::Config;
use crate::core::availability::Availability;
use crate::core::directory::Sort;
use crate::core::edit::{PendingEdit, Proposal};
use crate::core::models::{Assignment, Classroom};
use crate::core::schedule::RoomGrid;
use crate::core::timetable::Timetable;
use crate::core::types::{BreakKind, Day, Period, Program};
use crate::core::workload::{Workload, workload};
use crate::errors::{Error, Result};
use strum::IntoEnumIterator;

/// Width of the workload bar; a teacher at this many periods fills it.
pub const WORKLOAD_BAR_SCALE: usize = 30;

const EMPTY_CELL: &str = "-";
const ENTRY_SEPARATOR: &str = " / ";

/// A titled table inside a multi-table view or report.
#[derive(Debug, Clone)]
pub struct Section {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Turns timetable state into plain string rows for the printer.
#[derive(Debug, Default, Clone)]
pub struct DisplayDataBuilder;

impl DisplayDataBuilder {
    pub fn new() -> Self {
        Self
    }

    /// `leading` column titles, then one column per period with a break
    /// column wherever a break follows.
    pub fn grid_headers(&self, leading: &[&str]) -> Vec<String> {
        let mut headers: Vec<String> = leading.iter().map(|s| s.to_string()).collect();
        headers.extend(grid_cells(
            |p| {
                let start = p.time_range().split('-').next().unwrap_or_default();
                format!("{} {}", p.number(), start)
            },
            |b| b.to_string(),
        ));
        headers
    }

    /// One row per day. `filter` keeps entries tagged with that program or ALL.
    pub fn room_grid_rows(
        &self,
        timetable: &Timetable,
        room: &str,
        filter: Option<Program>,
    ) -> Result<Vec<Vec<String>>> {
        let grid = room_grid(timetable, room)?;
        Ok(Day::iter()
            .map(|day| {
                let mut row = vec![day.short().to_string()];
                row.extend(grid_cells(
                    |p| {
                        join_entries(
                            grid.cell(day, p)
                                .iter()
                                .filter(|a| a.program.visible_under(filter))
                                .map(slot_label),
                        )
                    },
                    |_| String::new(),
                ));
                row
            })
            .collect())
    }

    /// The teacher's week across every room: "Subject [PROG] @ room".
    pub fn teacher_week_rows(&self, timetable: &Timetable, teacher: &str) -> Vec<Vec<String>> {
        Day::iter()
            .map(|day| {
                let mut row = vec![day.short().to_string()];
                row.extend(grid_cells(
                    |p| {
                        join_entries(timetable.schedule.rooms().flat_map(|rs| {
                            rs.grid
                                .cell(day, p)
                                .iter()
                                .filter(|a| a.teacher == teacher)
                                .map(|a| format!("{} [{}] @ {}", a.subject, a.program, rs.room))
                                .collect::<Vec<_>>()
                        }))
                    },
                    |_| String::new(),
                ));
                row
            })
            .collect()
    }

    /// One row per (room, day) for every room of the grade, in natural order.
    pub fn grade_matrix_rows(&self, timetable: &Timetable, level: &str) -> Result<Vec<Vec<String>>> {
        let rooms = rooms_of_grade(timetable, level)?;
        let mut rows = Vec::new();
        for room in rooms {
            let grid = room_grid(timetable, &room.name)?;
            for day in Day::iter() {
                let label = if day == Day::Monday {
                    format!("{} ({})", room.name, room.programs_label())
                } else {
                    String::new()
                };
                let mut row = vec![label, day.short().to_string()];
                row.extend(grid_cells(
                    |p| join_entries(grid.cell(day, p).iter().map(slot_label)),
                    |_| String::new(),
                ));
                rows.push(row);
            }
        }
        Ok(rows)
    }

    pub fn teacher_rows(&self, timetable: &Timetable) -> Vec<Vec<String>> {
        let load = workload(timetable, None);
        timetable
            .teachers
            .values(Sort::NameAsc)
            .into_iter()
            .map(|t| {
                vec![
                    t.name.clone(),
                    t.subject.clone(),
                    t.rooms_label(),
                    load.periods_of(&t.name).unwrap_or(0).to_string(),
                ]
            })
            .collect()
    }

    pub fn room_rows(&self, timetable: &Timetable) -> Vec<Vec<String>> {
        timetable
            .rooms
            .values(Sort::NameAsc)
            .into_iter()
            .map(|r| {
                let filled = timetable
                    .schedule
                    .grid(&r.name)
                    .map(|g| g.occupied().count())
                    .unwrap_or(0);
                vec![
                    r.name.clone(),
                    r.grade_level().to_string(),
                    r.programs_label(),
                    filled.to_string(),
                ]
            })
            .collect()
    }

    /// FREE rows first, in directory order, then BUSY rows with their rooms.
    pub fn availability_rows(
        &self,
        timetable: &Timetable,
        availability: &Availability,
        day: Day,
        period: Period,
    ) -> Vec<Vec<String>> {
        let free = availability.free.iter().map(|name| {
            vec![
                "free".to_string(),
                name.clone(),
                timetable.subject_of(name),
                String::new(),
            ]
        });
        let busy = availability.busy.iter().map(|name| {
            vec![
                "busy".to_string(),
                name.clone(),
                timetable.subject_of(name),
                timetable
                    .schedule
                    .rooms_teaching(name, day, period, None)
                    .join(", "),
            ]
        });
        free.chain(busy).collect()
    }

    pub fn workload_rows(&self, load: &Workload) -> Vec<Vec<String>> {
        load.rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                vec![
                    (i + 1).to_string(),
                    row.teacher.clone(),
                    row.periods.to_string(),
                    workload_bar(row.periods),
                ]
            })
            .collect()
    }

    pub fn config_rows(&self, config: &Config) -> Vec<Vec<String>> {
        config
            .rows()
            .iter()
            .map(|(k, d, v)| vec![k.clone(), d.clone(), v.clone()])
            .collect()
    }

    pub fn pending_rows(&self, pending: &PendingEdit) -> Vec<Vec<String>> {
        let mut rows = vec![vec!["proposal".to_string(), pending.proposal.to_string()]];
        if let Proposal::Day { batch, .. } = &pending.proposal {
            for (period, teacher) in batch.assigned() {
                rows.push(vec![format!("period {period}"), teacher.to_string()]);
            }
        }
        for w in &pending.warnings {
            rows.push(vec!["warning".to_string(), w.to_string()]);
        }
        rows
    }

    /// One section per directory teacher with their week.
    pub fn teacher_sections(&self, timetable: &Timetable) -> Vec<Section> {
        let headers = self.grid_headers(&["DAY"]);
        timetable
            .teachers
            .iter()
            .enumerate()
            .map(|(i, t)| Section {
                title: format!(
                    "{}. {} (subject: {} | rooms: {})",
                    i + 1,
                    t.name,
                    t.subject,
                    t.rooms_label()
                ),
                headers: headers.clone(),
                rows: self.teacher_week_rows(timetable, &t.name),
            })
            .collect()
    }

    /// One section per room of the grade with its full grid.
    pub fn grade_sections(&self, timetable: &Timetable, level: &str) -> Result<Vec<Section>> {
        let headers = self.grid_headers(&["DAY"]);
        rooms_of_grade(timetable, level)?
            .into_iter()
            .map(|room| {
                Ok(Section {
                    title: format!("Room {} (programs: {})", room.name, room.programs_label()),
                    headers: headers.clone(),
                    rows: self.room_grid_rows(timetable, &room.name, None)?,
                })
            })
            .collect()
    }
}

fn room_grid<'a>(timetable: &'a Timetable, room: &str) -> Result<&'a RoomGrid> {
    timetable
        .schedule
        .grid(room)
        .ok_or_else(|| Error::UnknownRoom(room.to_string()))
}

fn rooms_of_grade<'a>(
    timetable: &'a Timetable,
    level: &str,
) -> Result<Vec<&'a Classroom>> {
    let rooms = timetable.rooms_in_grade(level);
    if rooms.is_empty() {
        return Err(Error::Domain(format!(
            "No rooms in grade '{}'. Known grades: {}",
            level,
            timetable.grade_levels().join(", ")
        )));
    }
    Ok(rooms)
}

/// Period cells from `cell`, with a `gap` cell after each period a break follows.
fn grid_cells(
    cell: impl Fn(Period) -> String,
    gap: impl Fn(BreakKind) -> String,
) -> Vec<String> {
    let mut out = Vec::new();
    for p in Period::all() {
        out.push(cell(p));
        if let Some(kind) = p.break_after() {
            out.push(gap(kind));
        }
    }
    out
}

/// "Math [EEP] (Ben)", or "Math (Ben)" for an ALL entry.
fn slot_label(a: &Assignment) -> String {
    format!("{} ({})", a.cell_label(), a.teacher)
}

fn join_entries(entries: impl Iterator<Item = String>) -> String {
    let joined = entries.collect::<Vec<_>>().join(ENTRY_SEPARATOR);
    if joined.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        joined
    }
}

pub fn workload_bar(periods: usize) -> String {
    let filled = periods.min(WORKLOAD_BAR_SCALE);
    format!(
        "[{}{}]",
        "#".repeat(filled),
        ".".repeat(WORKLOAD_BAR_SCALE - filled)
    )
}
