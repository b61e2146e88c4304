use std::fs;

use timetable::core::persist::{JsonFileStore, Store};
use timetable::core::types::{Day, Period, ProgramTag};

use crate::common::{
    build_context, make_temp_dir, normalized_lines, run_with_input, write_config,
    write_valid_config,
};

#[test]
fn edits_survive_a_restart() {
    let dir = make_temp_dir("persist");
    write_valid_config(&dir);
    let first = run_with_input(
        &dir,
        "teacher \"Anna\" \"Math\"\nroom P7/1 IEP, EEP\nassign P7/1 fri 2 \"Anna\" EEP\nexit\n",
    );
    assert!(first.status.success());
    assert!(dir.join("timetable.json").exists());

    let ctx = build_context(&dir);
    assert_eq!(ctx.timetable.teacher("Anna").unwrap().subject, "Math");
    assert_eq!(ctx.timetable.programs_label_of("P7/1"), "IEP, EEP");
    let cell = ctx
        .timetable
        .schedule
        .cell("P7/1", Day::Friday, Period::new(2).unwrap())
        .unwrap();
    assert_eq!(cell.len(), 1);
    assert_eq!(cell[0].subject, "Math");
    assert_eq!(cell[0].program.to_string(), "EEP");
}

#[test]
fn first_save_writes_the_seeded_school() {
    let dir = make_temp_dir("persist");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "save\nexit\n");
    assert!(output.status.success());

    let outcome = JsonFileStore::new(dir.join("timetable.json"))
        .load_all()
        .unwrap();
    assert!(outcome.issues.is_empty());
    assert_eq!(outcome.timetable.rooms.len(), 39);
    assert!(outcome.timetable.teacher("Sample Teacher").is_ok());
}

#[test]
fn memory_backend_leaves_no_data_file() {
    let dir = make_temp_dir("persist");
    write_config(&dir, "memory", 2);
    let output = run_with_input(&dir, "teacher \"Anna\" \"Math\"\nsave\nexit\n");
    assert!(output.status.success());
    assert!(!dir.join("timetable.json").exists());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Data: in-memory snapshot"));
}

#[test]
fn bad_rows_are_skipped_with_a_warning() {
    let dir = make_temp_dir("persist");
    write_valid_config(&dir);
    let data = r#"{
  "teachers": [{ "name": "Anna", "subject": "Math", "rooms": "-" }],
  "classrooms": [{ "room": "P4/1", "programs": "IEP" }],
  "schedule": [
    { "room": "P4/1", "day": "Monday", "period": 1, "teacher": "Anna", "subject": "Math", "program": "ALL" },
    { "room": "P4/1", "day": "Sunday", "period": 1, "teacher": "Anna", "subject": "Math", "program": "ALL" }
  ]
}"#;
    fs::write(dir.join("timetable.json"), data).unwrap();

    let output = run_with_input(&dir, "reload\nexit\n");
    assert!(output.status.success());
    let stderr_lines = normalized_lines(&output.stderr);
    let warnings = stderr_lines
        .iter()
        .filter(|l| l.starts_with("Skipped schedule row (P4/1 Sunday 1 Anna)"))
        .count();
    assert_eq!(warnings, 2, "once at start-up and once on reload");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1 row(s) skipped."));

    let ctx = build_context(&dir);
    assert_eq!(ctx.timetable.entry_count(), 1);
    let cell = ctx
        .timetable
        .schedule
        .cell("P4/1", Day::Monday, Period::new(1).unwrap())
        .unwrap();
    assert_eq!(cell[0].program, ProgramTag::All);
}

#[test]
fn malformed_data_file_stops_startup() {
    let dir = make_temp_dir("persist");
    write_valid_config(&dir);
    fs::write(dir.join("timetable.json"), "[1, 2").unwrap();

    let output = run_with_input(&dir, "exit\n");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to open timetable"), "stderr was: {stderr}");
}
