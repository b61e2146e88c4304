use crate::core::timetable::Timetable;
use crate::errors::Result;
use crate::extensions::string::ToDashSeparators;
use crate::ui::display_data::{DisplayDataBuilder, Section};
use crate::ui::display_manager::DisplayManager;
use chrono::{DateTime, Local};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// A printable text document: title, generation time, one section per
/// teacher or room.
#[derive(Debug, Clone)]
pub struct Report {
    pub title: String,
    pub generated_at: DateTime<Local>,
    pub sections: Vec<Section>,
    file_stem: String,
}

impl Report {
    /// Every directory teacher's week.
    pub fn teachers(timetable: &Timetable, now: DateTime<Local>) -> Self {
        Self {
            title: "Individual teacher timetables".to_string(),
            generated_at: now,
            sections: DisplayDataBuilder::new().teacher_sections(timetable),
            file_stem: "teacher_schedule".to_string(),
        }
    }

    /// Every room of a grade level, in natural order.
    pub fn grade(timetable: &Timetable, level: &str, now: DateTime<Local>) -> Result<Self> {
        let level = level.trim();
        Ok(Self {
            title: format!("Class timetables for grade {level}"),
            generated_at: now,
            sections: DisplayDataBuilder::new().grade_sections(timetable, level)?,
            file_stem: format!("grade_{}_report", level.to_dash_separators()),
        })
    }

    pub fn file_name(&self) -> String {
        format!(
            "{}_{}.txt",
            self.file_stem,
            self.generated_at.format("%Y%m%d-%H%M%S")
        )
    }

    pub fn render<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        let preamble = vec![format!(
            "Generated at {}",
            self.generated_at.format("%d/%m/%Y %H:%M")
        )];
        DisplayManager::new().render_sections(&self.title, &preamble, &self.sections, out)
    }

    /// Writes the report under `dir`, creating it when needed.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name());
        let mut buf: Vec<u8> = Vec::new();
        self.render(&mut buf)?;
        fs::write(&path, buf)?;
        Ok(path)
    }
}
