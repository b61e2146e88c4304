use timetable::core::types::{Day, Period};
use timetable::errors::Error;

use crate::common::{
    CommandArgParser, CommandParser, build_context, execute_command, make_temp_dir,
    normalized_lines, read_log_contents, run_with_input, try_command, write_valid_config,
};

fn p(n: i64) -> Period {
    Period::new(n).unwrap()
}

#[test]
fn unknown_command_reports_error_and_continues() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "frobnicate\nexit\n");

    assert!(output.status.success());
    let stderr_lines = normalized_lines(&output.stderr);
    let expected = "Command resolution failed for 'frobnicate'. Unknown command: frobnicate";
    assert!(
        stderr_lines.iter().any(|line| line == expected),
        "stderr did not include expected error. stderr was: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn man_command_prints_general_manual() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "man\nexit\n");

    assert!(output.status.success());
    let stdout_lines = normalized_lines(&output.stdout);
    assert!(stdout_lines.iter().any(|line| line == "NAME"));
    assert!(
        stdout_lines
            .iter()
            .any(|line| line == "timetable - Weekly school timetable editor.")
    );
}

#[test]
fn man_command_prints_assign_synopsis() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "man assign\nexit\n");

    assert!(output.status.success());
    let stdout_lines = normalized_lines(&output.stdout);
    assert!(
        stdout_lines
            .iter()
            .any(|line| line == "assign <room> <day> <period> \"<teacher>\" [program|ALL]")
    );
}

#[test]
fn session_adds_teacher_assigns_and_shows_room() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let input = "teacher \"Anna\" \"Math\"\nassign P4/1 mon 1 \"Anna\"\nshow room P4/1\nexit\n";
    let output = run_with_input(&dir, input);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Applied: assign 'Anna' to P4/1 Monday period 1 [ALL]"));
    assert!(stdout.contains("Room P4/1 (IEP)"));
    assert!(stdout.contains("Math (Anna)"));
}

#[test]
fn usage_error_shows_usage_on_console_only() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "assign P4/1 mon\nexit\n");

    assert!(output.status.success());
    let stderr_lines = normalized_lines(&output.stderr);
    assert!(
        stderr_lines
            .iter()
            .any(|line| line.starts_with("Usage: assign <room>")),
        "stderr was: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let log = read_log_contents(&dir).expect("log file should exist");
    assert!(log.contains("Command execution failed for 'assign'."));
    assert!(!log.contains("Usage:"));
}

#[test]
fn marathon_warning_waits_for_confirm() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let input = "\
teacher \"Dao\" \"History\"
assign P5/2 mon 1 \"Dao\"
assign P5/2 mon 2 \"Dao\"
assign P5/3 mon 3 \"Dao\"
pending
confirm
exit
";
    let output = run_with_input(&dir, input);
    assert!(output.status.success());

    let stderr_lines = normalized_lines(&output.stderr);
    let warning = "Marathon teaching: 'Dao' would teach 3 consecutive periods on Monday (periods 1, 2, 3).";
    assert!(
        stderr_lines.iter().any(|line| line == warning),
        "stderr was: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Pending edit"));
    assert!(stdout.contains("Confirmed: assign 'Dao' to P5/3 Monday period 3 [ALL]"));
}

#[test]
fn teacher_add_modify_and_delete_flow_succeeds() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let arg_parser = CommandArgParser::new();
    let command_parser = CommandParser::new();
    let mut ctx = build_context(&dir);

    execute_command(
        r#"teacher "Anna Lee" "Math" P4/1"#,
        &arg_parser,
        &command_parser,
        &mut ctx,
    );
    let anna = ctx.timetable.teacher("Anna Lee").unwrap();
    assert_eq!(anna.rooms, vec!["P4/1".to_string()]);

    execute_command(
        r#"mod teacher "Anna Lee" "Physics" -"#,
        &arg_parser,
        &command_parser,
        &mut ctx,
    );
    let anna = ctx.timetable.teacher("Anna Lee").unwrap();
    assert_eq!(anna.subject, "Physics");
    assert!(anna.is_unrestricted());

    execute_command(
        r#"assign P4/2 tue 4 "Anna Lee""#,
        &arg_parser,
        &command_parser,
        &mut ctx,
    );
    execute_command(
        r#"del teacher "Anna Lee""#,
        &arg_parser,
        &command_parser,
        &mut ctx,
    );
    assert!(ctx.timetable.teacher("Anna Lee").is_err());
    let cell = ctx.timetable.schedule.cell("P4/2", Day::Tuesday, p(4)).unwrap();
    assert_eq!(cell[0].teacher, "Anna Lee");
}

#[test]
fn day_command_replaces_a_whole_day() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let arg_parser = CommandArgParser::new();
    let command_parser = CommandParser::new();
    let mut ctx = build_context(&dir);

    for line in [
        r#"teacher "Anna" "Math""#,
        r#"teacher "Ben" "Science""#,
        r#"assign P6/4 fri 9 "Anna""#,
        r#"day P6/4 fri 1 "Ben" 2 "Anna" 9 -"#,
    ] {
        execute_command(line, &arg_parser, &command_parser, &mut ctx);
    }

    let teachers = |n: i64| -> Vec<String> {
        ctx.timetable
            .schedule
            .cell("P6/4", Day::Friday, p(n))
            .unwrap()
            .iter()
            .map(|a| a.teacher.clone())
            .collect()
    };
    assert_eq!(teachers(1), vec!["Ben"]);
    assert_eq!(teachers(2), vec!["Anna"]);
    assert!(teachers(9).is_empty());
}

#[test]
fn rejected_proposals_leave_the_timetable_alone() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let arg_parser = CommandArgParser::new();
    let command_parser = CommandParser::new();
    let mut ctx = build_context(&dir);
    let before = ctx.timetable.schedule.clone();

    let err = try_command(
        r#"assign P4/1 mon 1 "Nobody""#,
        &arg_parser,
        &command_parser,
        &mut ctx,
    )
    .unwrap_err();
    assert!(matches!(err, Error::UnknownTeacher(_)));

    let err = try_command(
        r#"assign P9/9 mon 1 "Sample Teacher""#,
        &arg_parser,
        &command_parser,
        &mut ctx,
    )
    .unwrap_err();
    assert!(matches!(err, Error::UnknownRoom(_)));

    let err = try_command("confirm", &arg_parser, &command_parser, &mut ctx).unwrap_err();
    assert!(matches!(err, Error::NothingPending));
    assert_eq!(ctx.timetable.schedule, before);
}
