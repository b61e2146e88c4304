mod display_data_builder_tests;

use crate::core::applier::add_assignment;
use crate::core::models::{Classroom, Teacher};
use crate::core::timetable::Timetable;
use crate::core::types::{Day, Period, Program, ProgramTag};

/// P4/1 (IEP, EEP), P4/2 and P4/10 (IEP); Anna, Ben and Carol.
pub(super) fn sample_timetable() -> Timetable {
    let mut tt = Timetable::new();
    tt.add_room(Classroom::new("P4/1", vec![Program::Iep, Program::Eep]))
        .unwrap();
    tt.add_room(Classroom::new("P4/10", vec![Program::Iep])).unwrap();
    tt.add_room(Classroom::new("P4/2", vec![Program::Iep])).unwrap();
    tt.add_teacher(Teacher::new("Anna", "Math", vec![])).unwrap();
    tt.add_teacher(Teacher::new("Ben", "Science", vec!["P4/1".into()]))
        .unwrap();
    tt.add_teacher(Teacher::new("Carol", "Art", vec![])).unwrap();
    tt
}

pub(super) fn place(tt: &mut Timetable, room: &str, day: Day, period: i64, teacher: &str, tag: ProgramTag) {
    add_assignment(tt, room, day, Period::new(period).unwrap(), teacher, tag, 3).unwrap();
}

pub(super) fn render_to_string<F>(render: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> crate::errors::Result<()>,
{
    let mut buf = Vec::new();
    render(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}
