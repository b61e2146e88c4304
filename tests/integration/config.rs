use std::fs;

use timetable::config::Config;
use timetable::core::types::{AvailabilityPolicy, StorageBackend};

use crate::common::{
    CommandArgParser, CommandParser, build_context, execute_command, make_temp_dir,
    normalized_lines, run_with_input, try_command, write_config, write_valid_config,
};

#[test]
fn main_shows_config_table() {
    let dir = make_temp_dir("config");
    write_valid_config(&dir);

    let output = run_with_input(&dir, "config\nexit\n");
    assert!(output.status.success(), "config run should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Config"));
    assert!(stdout.contains("CELL_CAPACITY"));
    assert!(stdout.contains("MARATHON_THRESHOLD"));
}

#[test]
fn missing_config_is_written_with_defaults() {
    let dir = make_temp_dir("config");
    let output = run_with_input(&dir, "exit\n");
    assert!(output.status.success());

    let cfg = Config::load_from(dir.join("config.json")).expect("config should be created");
    assert_eq!(cfg.cell_capacity(), 2);
    assert_eq!(cfg.marathon_threshold(), 3);
    assert_eq!(cfg.availability_policy(), AvailabilityPolicy::Open);
    assert_eq!(cfg.storage_backend(), StorageBackend::Json);
    assert!(cfg.file_logging_enabled());
}

#[test]
fn config_command_persists_changes() {
    let dir = make_temp_dir("config");
    write_valid_config(&dir);
    let arg_parser = CommandArgParser::new();
    let command_parser = CommandParser::new();
    let mut ctx = build_context(&dir);

    execute_command(
        "config MARATHON_THRESHOLD 4 AVAILABILITY_POLICY restricted",
        &arg_parser,
        &command_parser,
        &mut ctx,
    );

    let cfg = Config::load_from(dir.join("config.json")).expect("config should reload");
    assert_eq!(cfg.marathon_threshold(), 4);
    assert_eq!(cfg.availability_policy(), AvailabilityPolicy::Restricted);
}

#[test]
fn invalid_config_change_is_rejected_whole() {
    let dir = make_temp_dir("config");
    write_valid_config(&dir);
    let arg_parser = CommandArgParser::new();
    let command_parser = CommandParser::new();
    let mut ctx = build_context(&dir);

    assert!(
        try_command(
            "config CELL_CAPACITY 5 MARATHON_THRESHOLD 0",
            &arg_parser,
            &command_parser,
            &mut ctx
        )
        .is_err()
    );
    assert!(
        try_command("config COLOR blue", &arg_parser, &command_parser, &mut ctx).is_err()
    );

    let cfg = Config::load_from(dir.join("config.json")).expect("config should reload");
    assert_eq!(cfg.cell_capacity(), 2);
    assert_eq!(cfg.marathon_threshold(), 3);
}

#[test]
fn cell_capacity_limits_single_assign() {
    let dir = make_temp_dir("config");
    write_config(&dir, "json", 1);
    let input = "\
teacher \"Anna\" \"Math\"
assign P4/1 mon 1 \"Anna\"
assign P4/1 mon 1 \"Sample Teacher\"
exit
";
    let output = run_with_input(&dir, input);
    assert!(output.status.success());
    let stderr_lines = normalized_lines(&output.stderr);
    assert!(
        stderr_lines
            .iter()
            .any(|l| l.contains("Cell P4/1 Monday period 1 is full (1 per cell).")),
        "stderr was: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn file_logging_can_be_switched_off() {
    let dir = make_temp_dir("config");
    let cfg = r#"{
      "file_logging_enabled": { "value": "False", "description": "file logging" }
    }"#;
    fs::write(dir.join("config.json"), cfg).unwrap();

    let output = run_with_input(&dir, "save\nexit\n");
    assert!(output.status.success());
    let has_logs = fs::read_dir(dir.join("logs"))
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false);
    assert!(!has_logs, "no log file should be written");
}

#[test]
fn malformed_config_stops_startup() {
    let dir = make_temp_dir("config");
    fs::write(dir.join("config.json"), "{ not json").unwrap();

    let output = run_with_input(&dir, "exit\n");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid JSON"), "stderr was: {stderr}");
}
