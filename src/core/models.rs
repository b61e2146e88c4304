use crate::core::types::{Program, ProgramTag};
use crate::extensions::string::grade_level;
use std::fmt;

pub const PLACEHOLDER_TEACHER: &str = "-- Select --";
pub const SAMPLE_TEACHER: &str = "Sample Teacher";
pub const SAMPLE_SUBJECT: &str = "Demo";

/// Anything stored in a `Directory`, addressed by its unique name.
pub trait DirectoryEntry {
    fn name(&self) -> &str;
}

// ========
// Teacher
// ========

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    pub name: String,
    pub subject: String,
    /// Rooms the teacher may be scheduled into. Empty means anywhere.
    pub rooms: Vec<String>,
}

impl Teacher {
    pub fn new(name: impl Into<String>, subject: impl Into<String>, rooms: Vec<String>) -> Self {
        Self {
            name: name.into(),
            subject: subject.into(),
            rooms: normalize_rooms(rooms),
        }
    }

    pub fn sample() -> Self {
        Self::new(SAMPLE_TEACHER, SAMPLE_SUBJECT, Vec::new())
    }

    pub fn modify(&mut self, subject: impl Into<String>, rooms: Vec<String>) -> &Self {
        self.subject = subject.into();
        self.rooms = normalize_rooms(rooms);
        self
    }

    pub fn is_unrestricted(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn permits(&self, room: &str) -> bool {
        self.is_unrestricted() || self.rooms.iter().any(|r| r == room)
    }

    pub fn rooms_label(&self) -> String {
        if self.rooms.is_empty() {
            "-".to_string()
        } else {
            self.rooms.join(", ")
        }
    }
}

impl DirectoryEntry for Teacher {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Teacher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Teacher(name='{}', subject='{}', rooms={})",
            self.name,
            self.subject,
            self.rooms_label()
        )
    }
}

/// A lone "-" in the room list means unrestricted.
fn normalize_rooms(rooms: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for room in rooms {
        let room = room.trim();
        if room.is_empty() || room == "-" {
            continue;
        }
        if !out.iter().any(|r| r == room) {
            out.push(room.to_string());
        }
    }
    out
}

// ==========
// Classroom
// ==========

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classroom {
    pub name: String,
    pub programs: Vec<Program>,
}

impl Classroom {
    pub fn new(name: impl Into<String>, programs: Vec<Program>) -> Self {
        let mut unique: Vec<Program> = Vec::with_capacity(programs.len());
        for p in programs {
            if !unique.contains(&p) {
                unique.push(p);
            }
        }
        Self {
            name: name.into(),
            programs: unique,
        }
    }

    pub fn grade_level(&self) -> &str {
        grade_level(&self.name)
    }

    pub fn offers(&self, program: Program) -> bool {
        self.programs.contains(&program)
    }

    pub fn is_multi_program(&self) -> bool {
        self.programs.len() > 1
    }

    pub fn programs_label(&self) -> String {
        Program::join(&self.programs)
    }
}

impl DirectoryEntry for Classroom {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Classroom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Classroom(name='{}', programs={})",
            self.name,
            self.programs_label()
        )
    }
}

// ===========
// Assignment
// ===========

/// One slot entry. `subject` is copied from the teacher when the entry is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub teacher: String,
    pub subject: String,
    pub program: ProgramTag,
}

impl Assignment {
    pub fn new(
        teacher: impl Into<String>,
        subject: impl Into<String>,
        program: ProgramTag,
    ) -> Self {
        Self {
            teacher: teacher.into(),
            subject: subject.into(),
            program,
        }
    }

    /// Short form used inside grid cells: "Math [EEP]" or "Math".
    pub fn cell_label(&self) -> String {
        match self.program {
            ProgramTag::All => self.subject.clone(),
            ProgramTag::Only(p) => format!("{} [{}]", self.subject, p),
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {})",
            self.teacher, self.subject, self.program
        )
    }
}

/// Permitted-room lists are stored comma separated, so a room name cannot hold one.
pub fn is_storable_room_name(name: &str) -> bool {
    !name.contains(',')
}

/// True when `name` names an actual teacher rather than an empty pick.
pub fn is_teacher_selected(name: &str) -> bool {
    let name = name.trim();
    !(name.is_empty() || name == "-" || name == PLACEHOLDER_TEACHER)
}
