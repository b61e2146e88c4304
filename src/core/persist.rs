use crate::core::models::{
    Assignment, Classroom, Teacher, is_storable_room_name, is_teacher_selected,
};
use crate::core::timetable::Timetable;
use crate::core::types::{Day, Period, Program, ProgramTag, StorageBackend};
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub const SEED_GRADES: [&str; 3] = ["P4", "P5", "P6"];
pub const SEED_ROOMS_PER_GRADE: u32 = 13;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherRow {
    pub name: String,
    #[serde(default)]
    pub subject: String,
    /// Comma separated room names, or "-" for unrestricted.
    #[serde(default)]
    pub rooms: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassroomRow {
    pub room: String,
    #[serde(default)]
    pub programs: String,
}

/// One flattened assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub room: String,
    pub day: String,
    pub period: i64,
    pub teacher: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default = "default_program_label")]
    pub program: String,
}

fn default_program_label() -> String {
    ProgramTag::ALL_LABEL.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveFile {
    #[serde(default)]
    pub teachers: Vec<TeacherRow>,
    #[serde(default)]
    pub classrooms: Vec<ClassroomRow>,
    #[serde(default)]
    pub schedule: Vec<ScheduleRow>,
}

/// A loaded timetable plus every persisted row that had to be skipped.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    pub timetable: Timetable,
    pub issues: Vec<String>,
}

pub trait Store: fmt::Debug {
    fn load_all(&mut self) -> Result<LoadOutcome>;
    fn save_all(&mut self, timetable: &Timetable) -> Result<()>;
    fn describe(&self) -> String;
}

pub fn open_store(backend: StorageBackend, data_path: &Path) -> Box<dyn Store> {
    match backend {
        StorageBackend::Json => Box::new(JsonFileStore::new(data_path)),
        StorageBackend::Memory => Box::new(MemoryStore::new()),
    }
}

// =============
// JSON on disk
// =============

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Store for JsonFileStore {
    fn load_all(&mut self) -> Result<LoadOutcome> {
        if !self.path.exists() {
            return Ok(decode(SaveFile::default()));
        }
        let contents = fs::read_to_string(&self.path)?;
        let file: SaveFile = serde_json::from_str(&contents)?;
        Ok(decode(file))
    }

    fn save_all(&mut self, timetable: &Timetable) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(&encode(timetable))?;
        fs::write(&self.path, contents)?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("json file {}", self.path.display())
    }
}

// ==========
// In memory
// ==========

/// Keeps the serialized snapshot for the life of the session.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: Option<String>,
    fail_saves: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following save fail with `Error::Persist`.
    pub fn set_fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    pub fn snapshot(&self) -> Option<&str> {
        self.snapshot.as_deref()
    }
}

impl Store for MemoryStore {
    fn load_all(&mut self) -> Result<LoadOutcome> {
        let file = match &self.snapshot {
            Some(raw) => serde_json::from_str(raw)?,
            None => SaveFile::default(),
        };
        Ok(decode(file))
    }

    fn save_all(&mut self, timetable: &Timetable) -> Result<()> {
        if self.fail_saves {
            return Err(Error::persist("memory store is refusing writes"));
        }
        self.snapshot = Some(serde_json::to_string(&encode(timetable))?);
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory snapshot".to_string()
    }
}

// ===========
// Row codecs
// ===========

pub fn encode(timetable: &Timetable) -> SaveFile {
    let teachers = timetable
        .teachers
        .iter()
        .map(|t| TeacherRow {
            name: t.name.clone(),
            subject: t.subject.clone(),
            rooms: t.rooms_label(),
        })
        .collect();
    let classrooms = timetable
        .rooms
        .iter()
        .map(|r| ClassroomRow {
            room: r.name.clone(),
            programs: r.programs_label(),
        })
        .collect();
    let schedule = timetable
        .schedule
        .entries()
        .map(|(room, day, period, a)| ScheduleRow {
            room: room.to_string(),
            day: day.to_string(),
            period: period.number() as i64,
            teacher: a.teacher.clone(),
            subject: a.subject.clone(),
            program: a.program.to_string(),
        })
        .collect();
    SaveFile {
        teachers,
        classrooms,
        schedule,
    }
}

/// Builds a timetable from persisted rows, seeding empty directories.
pub fn decode(file: SaveFile) -> LoadOutcome {
    let mut timetable = Timetable::new();
    let mut issues = Vec::new();

    if file.classrooms.is_empty() {
        for room in seed_classrooms() {
            timetable.restore_room(room);
        }
    }
    for row in file.classrooms {
        match decode_classroom(&row) {
            Ok(room) => {
                if !timetable.restore_room(room) {
                    issues.push(format!("Skipped duplicate classroom '{}'.", row.room));
                }
            }
            Err(e) => issues.push(format!("Skipped classroom '{}': {}", row.room, e)),
        }
    }

    if file.teachers.is_empty() {
        timetable.restore_teacher(Teacher::sample());
    }
    for row in file.teachers {
        if row.name.trim().is_empty() {
            issues.push("Skipped teacher row without a name.".to_string());
            continue;
        }
        if !is_teacher_selected(&row.name) {
            issues.push(format!("Skipped teacher row named '{}'.", row.name));
            continue;
        }
        let teacher = Teacher::new(row.name.trim(), row.subject.trim(), split_csv(&row.rooms));
        if !timetable.restore_teacher(teacher) {
            issues.push(format!("Skipped duplicate teacher '{}'.", row.name));
        }
    }

    for row in file.schedule {
        if let Err(e) = restore_entry(&mut timetable, &row) {
            issues.push(format!(
                "Skipped schedule row ({} {} {} {}): {}",
                row.room, row.day, row.period, row.teacher, e
            ));
        }
    }

    LoadOutcome { timetable, issues }
}

fn decode_classroom(row: &ClassroomRow) -> Result<Classroom> {
    let name = row.room.trim();
    if name.is_empty() {
        return Err(Error::MissingRoomName);
    }
    if !is_storable_room_name(name) {
        return Err(Error::InvalidRoomName(name.to_string()));
    }
    let programs = if row.programs.trim() == "-" {
        Vec::new()
    } else {
        Program::parse_list(&row.programs)?
    };
    Ok(Classroom::new(name, programs))
}

fn restore_entry(timetable: &mut Timetable, row: &ScheduleRow) -> Result<()> {
    let day = Day::try_from(&row.day)?;
    let period = Period::new(row.period)?;
    let program = ProgramTag::try_from(&row.program)?;
    let grid = timetable
        .schedule
        .grid_mut(row.room.trim())
        .ok_or_else(|| Error::UnknownRoom(row.room.clone()))?;
    grid.cell_mut(day, period)
        .push(Assignment::new(row.teacher.trim(), row.subject.clone(), program));
    Ok(())
}

pub fn seed_classrooms() -> Vec<Classroom> {
    SEED_GRADES
        .iter()
        .flat_map(|grade| {
            (1..=SEED_ROOMS_PER_GRADE)
                .map(move |n| Classroom::new(format!("{grade}/{n}"), vec![Program::Iep]))
        })
        .collect()
}

fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && s != "-")
        .collect()
}
