use crate::core::models::Assignment;
use crate::core::types::{DAY_COUNT, Day, PERIOD_COUNT, Period};
use strum::IntoEnumIterator;

pub type Cell = Vec<Assignment>;

/// A room's week: five days by nine periods, every cell present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomGrid {
    cells: [[Cell; PERIOD_COUNT]; DAY_COUNT],
}

impl RoomGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(&self, day: Day, period: Period) -> &[Assignment] {
        &self.cells[day.index()][period.index()]
    }

    pub fn cell_mut(&mut self, day: Day, period: Period) -> &mut Cell {
        &mut self.cells[day.index()][period.index()]
    }

    pub fn set(&mut self, day: Day, period: Period, entries: Cell) {
        self.cells[day.index()][period.index()] = entries;
    }

    pub fn clear(&mut self) {
        for day in self.cells.iter_mut() {
            for cell in day.iter_mut() {
                cell.clear();
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|c| c.is_empty())
    }

    /// Non-empty cells in day then period order.
    pub fn occupied(&self) -> impl Iterator<Item = (Day, Period, &[Assignment])> {
        Day::iter().flat_map(move |day| {
            Period::all().filter_map(move |period| {
                let cell = self.cell(day, period);
                (!cell.is_empty()).then_some((day, period, cell))
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSchedule {
    pub room: String,
    pub grid: RoomGrid,
}

/// Grids for every registered classroom, kept in classroom directory order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    rooms: Vec<RoomSchedule>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_room(&mut self, room: &str) {
        if self.grid(room).is_none() {
            self.rooms.push(RoomSchedule {
                room: room.to_string(),
                grid: RoomGrid::new(),
            });
        }
    }

    pub fn remove_room(&mut self, room: &str) -> Option<RoomGrid> {
        let idx = self.rooms.iter().position(|r| r.room == room)?;
        Some(self.rooms.remove(idx).grid)
    }

    pub fn grid(&self, room: &str) -> Option<&RoomGrid> {
        self.rooms.iter().find(|r| r.room == room).map(|r| &r.grid)
    }

    pub fn grid_mut(&mut self, room: &str) -> Option<&mut RoomGrid> {
        self.rooms
            .iter_mut()
            .find(|r| r.room == room)
            .map(|r| &mut r.grid)
    }

    pub fn cell(&self, room: &str, day: Day, period: Period) -> Option<&[Assignment]> {
        self.grid(room).map(|g| g.cell(day, period))
    }

    pub fn rooms(&self) -> impl Iterator<Item = &RoomSchedule> {
        self.rooms.iter()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Teachers booked at (day, period) in any room other than `except`, in scan order.
    pub fn teachers_at(&self, day: Day, period: Period, except: Option<&str>) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for rs in self.rooms.iter().filter(|rs| Some(rs.room.as_str()) != except) {
            for entry in rs.grid.cell(day, period) {
                if !out.contains(&entry.teacher.as_str()) {
                    out.push(entry.teacher.as_str());
                }
            }
        }
        out
    }

    /// Rooms where `teacher` is booked at (day, period), skipping `except`.
    pub fn rooms_teaching(
        &self,
        teacher: &str,
        day: Day,
        period: Period,
        except: Option<&str>,
    ) -> Vec<&str> {
        self.rooms
            .iter()
            .filter(|rs| Some(rs.room.as_str()) != except)
            .filter(|rs| rs.grid.cell(day, period).iter().any(|a| a.teacher == teacher))
            .map(|rs| rs.room.as_str())
            .collect()
    }

    /// Sorted, unique periods `teacher` teaches on `day`, skipping `except`.
    pub fn periods_of(&self, teacher: &str, day: Day, except: Option<&str>) -> Vec<Period> {
        let mut periods: Vec<Period> = self
            .rooms
            .iter()
            .filter(|rs| Some(rs.room.as_str()) != except)
            .flat_map(|rs| {
                Period::all().filter(move |p| {
                    rs.grid.cell(day, *p).iter().any(|a| a.teacher == teacher)
                })
            })
            .collect();
        periods.sort();
        periods.dedup();
        periods
    }

    /// Every entry flattened with its coordinates, room by room.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Day, Period, &Assignment)> {
        self.rooms.iter().flat_map(|rs| {
            rs.grid.occupied().flat_map(move |(day, period, cell)| {
                cell.iter().map(move |a| (rs.room.as_str(), day, period, a))
            })
        })
    }
}
