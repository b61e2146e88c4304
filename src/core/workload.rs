use crate::core::timetable::Timetable;
use crate::extensions::string::grade_level;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadRow {
    pub teacher: String,
    pub periods: usize,
}

/// Periods per teacher for a scope, busiest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workload {
    /// `None` for the whole school.
    pub grade: Option<String>,
    pub rows: Vec<WorkloadRow>,
    pub total: usize,
}

impl Workload {
    pub fn scope_label(&self) -> String {
        match &self.grade {
            Some(level) => format!("grade {level}"),
            None => "whole school".to_string(),
        }
    }

    pub fn periods_of(&self, teacher: &str) -> Option<usize> {
        self.rows
            .iter()
            .find(|r| r.teacher == teacher)
            .map(|r| r.periods)
    }
}

/// School-wide scope lists every directory teacher, idle ones included.
/// Grade scope lists only teachers who teach in that grade.
pub fn workload(timetable: &Timetable, grade: Option<&str>) -> Workload {
    let mut rows: Vec<WorkloadRow> = match grade {
        None => timetable
            .teachers
            .iter()
            .map(|t| WorkloadRow {
                teacher: t.name.clone(),
                periods: 0,
            })
            .collect(),
        Some(_) => Vec::new(),
    };

    let mut total = 0;
    for (room, _, _, entry) in timetable.schedule.entries() {
        if let Some(level) = grade {
            if grade_level(room) != level.trim() {
                continue;
            }
        }
        total += 1;
        match rows.iter_mut().find(|r| r.teacher == entry.teacher) {
            Some(row) => row.periods += 1,
            None => rows.push(WorkloadRow {
                teacher: entry.teacher.clone(),
                periods: 1,
            }),
        }
    }

    rows.sort_by(|a, b| b.periods.cmp(&a.periods));
    Workload {
        grade: grade.map(|g| g.trim().to_string()),
        rows,
        total,
    }
}
