use std::path::PathBuf;

pub const CLI_USAGE: &str =
    "Usage: timetable [--config <file>] [--data <file>] [--logs <dir>] [--reports <dir>]";

/// Files and folders the shell reads and writes. Relative paths resolve
/// against the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliPaths {
    pub config_path: PathBuf,
    pub data_path: PathBuf,
    pub logs_dir: PathBuf,
    pub reports_dir: PathBuf,
}

impl Default for CliPaths {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("config.json"),
            data_path: PathBuf::from("timetable.json"),
            logs_dir: PathBuf::from("logs"),
            reports_dir: PathBuf::from("reports"),
        }
    }
}

impl CliPaths {
    pub fn from_env() -> Result<Self, String> {
        Self::from_args(std::env::args().skip(1))
    }

    /// `--flag value` pairs; a repeated flag keeps its last value.
    pub fn from_args<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut paths = Self::default();
        let mut args = args.into_iter();
        while let Some(flag) = args.next() {
            let slot = paths
                .slot_for(&flag)
                .ok_or_else(|| format!("Unknown argument: {flag}\n{CLI_USAGE}"))?;
            let value = args
                .next()
                .ok_or_else(|| format!("Missing value for {flag}\n{CLI_USAGE}"))?;
            *slot = PathBuf::from(value);
        }
        Ok(paths)
    }

    fn slot_for(&mut self, flag: &str) -> Option<&mut PathBuf> {
        match flag {
            "--config" => Some(&mut self.config_path),
            "--data" => Some(&mut self.data_path),
            "--logs" => Some(&mut self.logs_dir),
            "--reports" => Some(&mut self.reports_dir),
            _ => None,
        }
    }
}
