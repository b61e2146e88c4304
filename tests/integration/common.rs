use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};

pub use timetable::arg::arg_parse_strategy::CommandArgParser;
pub use timetable::command::command_parser::CommandParser;
use timetable::command::commands::Command as _;
use timetable::core::cli::CliPaths;
use timetable::core::context::AppContext;
use timetable::errors::Result;
use timetable::logging::Logger;

pub fn binary_path() -> String {
    let raw = PathBuf::from(env!("CARGO_BIN_EXE_timetable"));
    if raw.is_absolute() {
        return raw.to_string_lossy().to_string();
    }
    let from_manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(&raw);
    if from_manifest.exists() {
        return from_manifest.to_string_lossy().to_string();
    }
    raw.to_string_lossy().to_string()
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "timetable-{prefix}-{}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::create_dir_all(&dir);
    dir
}

pub fn paths_in(dir: &Path) -> CliPaths {
    CliPaths {
        config_path: dir.join("config.json"),
        data_path: dir.join("timetable.json"),
        logs_dir: dir.join("logs"),
        reports_dir: dir.join("reports"),
    }
}

pub fn write_config(dir: &Path, backend: &str, capacity: usize) {
    let cfg = format!(
        r#"{{
      "cell_capacity": {{ "value": {capacity}, "description": "capacity" }},
      "marathon_threshold": {{ "value": 3, "description": "threshold" }},
      "availability_policy": {{ "value": "open", "description": "policy" }},
      "storage_backend": {{ "value": "{backend}", "description": "backend" }},
      "file_logging_enabled": {{ "value": "True", "description": "file logging" }}
    }}"#
    );
    fs::write(dir.join("config.json"), cfg).unwrap();
}

pub fn write_valid_config(dir: &Path) {
    write_config(dir, "json", 2);
}

/// Runs the binary from `dir` with every path flag pointing inside it.
pub fn run_with_input(dir: &Path, input: &str) -> Output {
    let paths = paths_in(dir);
    let mut child = Command::new(binary_path())
        .current_dir(dir)
        .arg("--config")
        .arg(&paths.config_path)
        .arg("--data")
        .arg(&paths.data_path)
        .arg("--logs")
        .arg(&paths.logs_dir)
        .arg("--reports")
        .arg(&paths.reports_dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    child.wait_with_output().unwrap()
}

fn strip_ansi_and_control(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            if matches!(chars.peek(), Some('[')) {
                let _ = chars.next();
                for nc in chars.by_ref() {
                    if nc.is_ascii_alphabetic() {
                        break;
                    }
                }
                continue;
            }
        }
        if c.is_control() {
            continue;
        }
        out.push(c);
    }

    out
}

/// Output lines without styling, blank lines or the prompt marker.
pub fn normalized_lines(buf: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(buf)
        .lines()
        .map(|l| {
            let stripped = strip_ansi_and_control(l);
            let trimmed = stripped.trim();
            if let Some(rest) = trimmed.strip_prefix('>') {
                rest.trim().to_string()
            } else {
                trimmed.to_string()
            }
        })
        .filter(|l| !l.is_empty())
        .collect()
}

pub fn build_context(dir: &Path) -> AppContext {
    AppContext::with_logger(paths_in(dir), Logger::quiet()).expect("context should open")
}

pub fn try_command(
    line: &str,
    arg_parser: &CommandArgParser,
    command_parser: &CommandParser,
    ctx: &mut AppContext,
) -> Result<()> {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or("").to_ascii_lowercase();
    let raw_args: Vec<String> = parts.map(|s| s.to_string()).collect();

    let args = arg_parser.parse(&command, &raw_args)?;
    let cmd = command_parser.parse(&command, &args)?;
    cmd.execute(ctx)
}

pub fn execute_command(
    line: &str,
    arg_parser: &CommandArgParser,
    command_parser: &CommandParser,
    ctx: &mut AppContext,
) {
    try_command(line, arg_parser, command_parser, ctx)
        .unwrap_or_else(|e| panic!("command failed for '{}': {}", line, e));
}

pub fn read_log_contents(dir: &Path) -> Option<String> {
    let logs_dir = dir.join("logs");
    let mut entries = fs::read_dir(&logs_dir).ok()?;
    let entry = entries.find_map(|e| e.ok())?;
    fs::read_to_string(entry.path()).ok()
}
