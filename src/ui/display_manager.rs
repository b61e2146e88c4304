use crate::config::Config;
use crate::core::availability::Availability;
use crate::core::edit::PendingEdit;
use crate::core::timetable::Timetable;
use crate::core::types::{Day, Period, Program};
use crate::core::workload::Workload;
use crate::errors::{Error, Result};
use crate::ui::display_data::{DisplayDataBuilder, Section};
use crate::ui::table_printer::{Table, TablePrinter};
use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

#[derive(Debug, Default, Clone)]
pub struct DisplayManager {
    pub printer: TablePrinter,
    pub util: WidthUtil,
    pub data: DisplayDataBuilder,
}

impl DisplayManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a renderer against stdout.
    pub fn display<F>(&self, render: F) -> Result<()>
    where
        F: FnOnce(&Self, &mut dyn Write) -> Result<()>,
    {
        let mut stdout = io::stdout();
        render(self, &mut stdout)?;
        stdout.flush()?;
        Ok(())
    }

    /// The room's grid. Without a filter, a multi-program room also gets one
    /// grid per program.
    pub fn render_room<W: Write + ?Sized>(
        &self,
        timetable: &Timetable,
        room: &str,
        filter: Option<Program>,
        out: &mut W,
    ) -> Result<()> {
        let classroom = timetable.room(room)?;
        if let Some(p) = filter {
            if !classroom.offers(p) {
                return Err(Error::ProgramNotOffered {
                    room: room.to_string(),
                    program: p.to_string(),
                });
            }
        }
        let headers = self.data.grid_headers(&["DAY"]);

        let mut filters = vec![filter];
        if filter.is_none() && classroom.is_multi_program() {
            filters.extend(classroom.programs.iter().map(|p| Some(*p)));
        }

        for f in filters {
            let rows = self.data.room_grid_rows(timetable, room, f)?;
            let title = match f {
                Some(p) => format!("Room {} [{}]", room, p),
                None => format!("Room {} ({})", room, classroom.programs_label()),
            };
            self.printer.render(&Table::new(&title, &headers, &rows), out)?;
        }
        Ok(())
    }

    /// Orphaned names still in the schedule can be shown too.
    pub fn render_teacher<W: Write + ?Sized>(
        &self,
        timetable: &Timetable,
        teacher: &str,
        out: &mut W,
    ) -> Result<()> {
        let known = timetable.teachers.contains(teacher)
            || timetable.schedule.entries().any(|(_, _, _, a)| a.teacher == teacher);
        if !known {
            return Err(Error::UnknownTeacher(teacher.to_string()));
        }
        let headers = self.data.grid_headers(&["DAY"]);
        let rows = self.data.teacher_week_rows(timetable, teacher);
        let title = format!("Teacher {} ({})", teacher, timetable.subject_of(teacher));
        self.printer.render(&Table::new(&title, &headers, &rows), out)?;
        Ok(())
    }

    pub fn render_grade<W: Write + ?Sized>(
        &self,
        timetable: &Timetable,
        level: &str,
        out: &mut W,
    ) -> Result<()> {
        let headers = self.data.grid_headers(&["ROOM", "DAY"]);
        let rows = self.data.grade_matrix_rows(timetable, level)?;
        let title = format!("Grade {}", level.trim());
        self.printer.render(&Table::new(&title, &headers, &rows), out)?;
        Ok(())
    }

    pub fn render_teachers<W: Write + ?Sized>(&self, timetable: &Timetable, out: &mut W) -> Result<()> {
        let headers = ["NAME", "SUBJECT", "ROOMS", "PERIODS"];
        let rows = self.data.teacher_rows(timetable);
        let table = Table::new("Teachers", &headers, &rows).empty_message("No teachers yet.");
        self.printer.render(&table, out)?;
        Ok(())
    }

    pub fn render_rooms<W: Write + ?Sized>(&self, timetable: &Timetable, out: &mut W) -> Result<()> {
        let headers = ["ROOM", "GRADE", "PROGRAMS", "FILLED SLOTS"];
        let rows = self.data.room_rows(timetable);
        let table = Table::new("Rooms", &headers, &rows).empty_message("No rooms yet.");
        self.printer.render(&table, out)?;
        Ok(())
    }

    pub fn render_availability<W: Write + ?Sized>(
        &self,
        timetable: &Timetable,
        room: &str,
        day: Day,
        period: Period,
        availability: &Availability,
        out: &mut W,
    ) -> Result<()> {
        let headers = ["STATUS", "TEACHER", "SUBJECT", "TEACHING IN"];
        let rows = self
            .data
            .availability_rows(timetable, availability, day, period);
        let title = format!(
            "Availability {} {} period {} ({})",
            room,
            day,
            period,
            period.time_range()
        );
        let table = Table::new(&title, &headers, &rows).empty_message("No teachers in the directory.");
        self.printer.render(&table, out)?;
        Ok(())
    }

    pub fn render_workload<W: Write + ?Sized>(&self, load: &Workload, out: &mut W) -> Result<()> {
        let headers = ["#", "TEACHER", "PERIODS", "LOAD"];
        let rows = self.data.workload_rows(load);
        let title = format!("Workload: {}", load.scope_label());
        let table = Table::new(&title, &headers, &rows).empty_message("No teachers in this scope.");
        self.printer.render(&table, out)?;
        writeln!(out, "Total periods: {}", load.total)?;
        Ok(())
    }

    /// Centered in the terminal, the way the settings screen shows it.
    pub fn render_config<W: Write + ?Sized>(&self, config: &Config, out: &mut W) -> Result<()> {
        let headers = ["KEY", "DESCRIPTION", "VALUE"];
        let rows = self.data.config_rows(config);
        let table = Table::new("Config", &headers, &rows).empty_message("No config items found.");
        let width = self.printer.table_width(&table);
        let printer = self.printer.with_left_pad(self.util.center_pad(width));
        printer.render(&table, out)?;
        Ok(())
    }

    pub fn render_pending<W: Write + ?Sized>(
        &self,
        pending: Option<&PendingEdit>,
        out: &mut W,
    ) -> Result<()> {
        let rows = pending.map(|p| self.data.pending_rows(p)).unwrap_or_default();
        let headers: [&str; 0] = [];
        let table = Table::new("Pending edit", &headers, &rows).empty_message("Nothing is pending.");
        self.printer.render(&table, out)?;
        Ok(())
    }

    /// Sections share one width so a printed document lines up.
    pub fn render_sections<W: Write + ?Sized>(
        &self,
        banner: &str,
        preamble: &[String],
        sections: &[Section],
        out: &mut W,
    ) -> Result<()> {
        let width = sections
            .iter()
            .map(|s| self.printer.table_width(&Table::new(&s.title, &s.headers, &s.rows)))
            .max()
            .unwrap_or(0)
            .max(self.util.visible_width(banner));

        self.printer.render_banner(banner, width, out)?;
        for line in preamble {
            writeln!(out, "{line}")?;
        }
        for s in sections {
            writeln!(out)?;
            let table = Table::new(&s.title, &s.headers, &s.rows).min_width(width);
            self.printer.render(&table, out)?;
        }
        Ok(())
    }
}
