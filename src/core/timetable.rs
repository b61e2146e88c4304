use crate::core::directory::{Directory, Sort};
use crate::core::models::{Classroom, Teacher, is_storable_room_name, is_teacher_selected};
use crate::core::schedule::Schedule;
use crate::core::types::Program;
use crate::errors::{Error, Result};
use crate::extensions::string::grade_level;

/// The whole school state: both directories and the room grids.
#[derive(Debug, Clone, Default)]
pub struct Timetable {
    pub teachers: Directory<Teacher>,
    pub rooms: Directory<Classroom>,
    pub schedule: Schedule,
}

impl Timetable {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- teachers ---------------------------------------------------------

    pub fn add_teacher(&mut self, teacher: Teacher) -> Result<&Teacher> {
        if teacher.name.trim().is_empty() {
            return Err(Error::MissingTeacherName);
        }
        if !is_teacher_selected(&teacher.name) {
            return Err(Error::NoTeacherSelected);
        }
        self.check_rooms_exist(&teacher.rooms)?;
        self.teachers
            .insert(teacher)
            .map_err(|t| Error::DuplicateTeacher(t.name))
    }

    pub fn modify_teacher(
        &mut self,
        name: &str,
        subject: &str,
        rooms: Vec<String>,
    ) -> Result<&Teacher> {
        self.check_rooms_exist(&rooms)?;
        let teacher = self
            .teachers
            .get_mut(name)
            .ok_or_else(|| Error::UnknownTeacher(name.to_string()))?;
        Ok(teacher.modify(subject, rooms))
    }

    /// Existing schedule entries keep the deleted teacher's name.
    pub fn delete_teacher(&mut self, name: &str) -> Result<Teacher> {
        self.teachers
            .remove(name)
            .ok_or_else(|| Error::UnknownTeacher(name.to_string()))
    }

    pub fn teacher(&self, name: &str) -> Result<&Teacher> {
        self.teachers
            .get(name)
            .ok_or_else(|| Error::UnknownTeacher(name.to_string()))
    }

    /// Subject of a directory teacher, or "" for an unknown name.
    pub fn subject_of(&self, name: &str) -> String {
        self.teachers
            .get(name)
            .map(|t| t.subject.clone())
            .unwrap_or_default()
    }

    pub fn is_permitted(&self, teacher: &str, room: &str) -> bool {
        self.teachers
            .get(teacher)
            .map(|t| t.permits(room))
            .unwrap_or(false)
    }

    fn check_rooms_exist(&self, rooms: &[String]) -> Result<()> {
        for room in rooms.iter().map(|r| r.trim()) {
            if room.is_empty() || room == "-" {
                continue;
            }
            if !self.rooms.contains(room) {
                return Err(Error::UnknownRoom(room.to_string()));
            }
        }
        Ok(())
    }

    // ---- rooms ------------------------------------------------------------

    pub fn add_room(&mut self, room: Classroom) -> Result<&Classroom> {
        let name = room.name.trim().to_string();
        if name.is_empty() {
            return Err(Error::MissingRoomName);
        }
        if !is_storable_room_name(&name) {
            return Err(Error::InvalidRoomName(name));
        }
        if room.programs.is_empty() {
            return Err(Error::MissingProgram(name));
        }
        if self.rooms.contains(&name) {
            return Err(Error::DuplicateRoom(name));
        }
        self.schedule.add_room(&name);
        self.rooms
            .insert(Classroom::new(name, room.programs))
            .map_err(|r| Error::DuplicateRoom(r.name))
    }

    pub fn modify_room(&mut self, name: &str, programs: Vec<Program>) -> Result<&Classroom> {
        if programs.is_empty() {
            return Err(Error::MissingProgram(name.to_string()));
        }
        let room = self
            .rooms
            .get_mut(name)
            .ok_or_else(|| Error::UnknownRoom(name.to_string()))?;
        *room = Classroom::new(room.name.clone(), programs);
        Ok(room)
    }

    /// Drops the room and its grid.
    pub fn delete_room(&mut self, name: &str) -> Result<Classroom> {
        let room = self
            .rooms
            .remove(name)
            .ok_or_else(|| Error::UnknownRoom(name.to_string()))?;
        self.schedule.remove_room(&room.name);
        Ok(room)
    }

    pub fn room(&self, name: &str) -> Result<&Classroom> {
        self.rooms
            .get(name)
            .ok_or_else(|| Error::UnknownRoom(name.to_string()))
    }

    /// Program label for a room, or "-" for an unknown name.
    pub fn programs_label_of(&self, room: &str) -> String {
        self.rooms
            .get(room)
            .map(|r| r.programs_label())
            .unwrap_or_else(|| "-".to_string())
    }

    /// Rooms whose grade level is `level`, in natural order.
    pub fn rooms_in_grade(&self, level: &str) -> Vec<&Classroom> {
        let level = level.trim().to_string();
        self.rooms
            .query()
            .r#where(move |r| r.grade_level() == level)
            .order(Sort::NameAsc)
            .collect()
    }

    /// Distinct grade levels of rooms that contain '/', sorted.
    pub fn grade_levels(&self) -> Vec<String> {
        let mut levels: Vec<String> = self
            .rooms
            .iter()
            .filter(|r| r.name.contains('/'))
            .map(|r| grade_level(&r.name).to_string())
            .collect();
        levels.sort();
        levels.dedup();
        levels
    }

    // ---- loading ----------------------------------------------------------

    /// Inserts a persisted room without the input rules. False on a duplicate name.
    pub fn restore_room(&mut self, room: Classroom) -> bool {
        let name = room.name.clone();
        if self.rooms.insert(room).is_err() {
            return false;
        }
        self.schedule.add_room(&name);
        true
    }

    /// Inserts a persisted teacher without the input rules. False on a duplicate name.
    pub fn restore_teacher(&mut self, teacher: Teacher) -> bool {
        self.teachers.insert(teacher).is_ok()
    }

    /// Number of slot entries across all rooms.
    pub fn entry_count(&self) -> usize {
        self.schedule.entries().count()
    }
}
