use std::fs;

use timetable::core::types::{Day, Period};
use timetable::core::workload::workload;

use crate::common::{
    CommandArgParser, CommandParser, build_context, execute_command, make_temp_dir,
    run_with_input, write_valid_config,
};

fn p(n: i64) -> Period {
    Period::new(n).unwrap()
}

fn report_names(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir.join("reports"))
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().to_string())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}

#[test]
fn reports_are_written_to_reports_dir() {
    let dir = make_temp_dir("core");
    write_valid_config(&dir);
    let input = "\
teacher \"Anna\" \"Math\" P4/1
assign P4/1 mon 1 \"Anna\"
report teachers
report grade \"P4\"
exit
";
    let output = run_with_input(&dir, input);
    assert!(output.status.success());

    let names = report_names(&dir);
    assert_eq!(names.len(), 2, "reports were: {names:?}");
    assert!(names[0].starts_with("grade_P4_report_"));
    assert!(names[1].starts_with("teacher_schedule_"));

    let teachers = fs::read_to_string(dir.join("reports").join(&names[1])).unwrap();
    assert!(teachers.contains("Individual teacher timetables"));
    assert!(teachers.contains("Anna (subject: Math | rooms: P4/1)"));
    assert!(teachers.contains("Math [ALL] @ P4/1"));

    let grade = fs::read_to_string(dir.join("reports").join(&names[0])).unwrap();
    assert!(grade.contains("Class timetables for grade P4"));
    assert!(grade.contains("Room P4/13 (programs: IEP)"));
}

#[test]
fn unknown_grade_report_writes_nothing() {
    let dir = make_temp_dir("core");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "report grade \"P9\"\nexit\n");
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No rooms in grade 'P9'"), "stderr was: {stderr}");
    assert!(report_names(&dir).is_empty());
}

#[test]
fn stats_follow_the_schedule() {
    let dir = make_temp_dir("core");
    write_valid_config(&dir);
    let arg_parser = CommandArgParser::new();
    let command_parser = CommandParser::new();
    let mut ctx = build_context(&dir);

    for line in [
        r#"teacher "Anna" "Math""#,
        r#"assign P4/1 mon 1 "Anna""#,
        r#"assign P5/1 mon 2 "Anna""#,
        r#"assign P5/2 tue 2 "Sample Teacher""#,
        "stats",
        r#"stats grade "P5""#,
    ] {
        execute_command(line, &arg_parser, &command_parser, &mut ctx);
    }

    let school = workload(&ctx.timetable, None);
    assert_eq!(school.total, 3);
    assert_eq!(school.rows[0].teacher, "Anna");
    assert_eq!(school.rows[0].periods, 2);

    let p5 = workload(&ctx.timetable, Some("P5"));
    assert_eq!(p5.total, 2);
    assert_eq!(p5.periods_of("Anna"), Some(1));
}

#[test]
fn clear_empties_only_the_named_room() {
    let dir = make_temp_dir("core");
    write_valid_config(&dir);
    let arg_parser = CommandArgParser::new();
    let command_parser = CommandParser::new();
    let mut ctx = build_context(&dir);

    for line in [
        r#"assign P6/1 wed 5 "Sample Teacher""#,
        r#"assign P6/2 wed 6 "Sample Teacher""#,
        "clear P6/1",
    ] {
        execute_command(line, &arg_parser, &command_parser, &mut ctx);
    }

    let cell = |room: &str, n: i64| {
        ctx.timetable
            .schedule
            .cell(room, Day::Wednesday, p(n))
            .unwrap()
            .len()
    };
    assert_eq!(cell("P6/1", 5), 0);
    assert_eq!(cell("P6/2", 6), 1);
}

#[test]
fn free_lists_busy_teachers_with_their_rooms() {
    let dir = make_temp_dir("core");
    write_valid_config(&dir);
    let input = "\
teacher \"Anna\" \"Math\"
assign P4/2 thu 7 \"Anna\"
free P4/1 thu 7
exit
";
    let output = run_with_input(&dir, input);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Availability P4/1 Thursday period 7 (14:00-14:45)"));
    let busy = stdout
        .lines()
        .find(|l| l.contains("busy"))
        .expect("a busy row");
    assert!(busy.contains("Anna") && busy.contains("P4/2"));
}
