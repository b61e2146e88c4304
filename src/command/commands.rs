use crate::arg::arg_extractor::{
    PeriodArg, ProgramTagArg, RoomRefArg, extract_at, extract_opt,
};
use crate::arg::arg_matcher::ArgMatcher;
use crate::arg::args::{Arg, DayArg, NameArg, ProgramsArg};
use crate::command::manual::ManualCatalog;
use crate::command::policies::flag_policy::{
    FlagDecision, FlagPolicy, FlagRule, HelpAnywhere, HelpAtIdx, MaxArgs,
};
use crate::core::applier::{DayBatch, clear_room};
use crate::core::availability::available_teachers;
use crate::core::context::AppContext;
use crate::core::edit::{Decision, Proposal};
use crate::core::models::{Classroom, Teacher};
use crate::core::types::{EntityActionType, EntityType, Period, Program, ProgramTag, ViewScope};
use crate::core::workload::workload;
use crate::errors::{Error, Result};
use crate::logging::LogTarget;
use crate::ui::display_manager::DisplayManager;
use crate::ui::report::Report;
use chrono::Local;

pub struct CommandCore<'a> {
    pub args: &'a [Arg],
    pub flag_policy: FlagPolicy,
}
impl<'a> CommandCore<'a> {
    pub fn new(args: &'a [Arg], flag_policy: FlagPolicy) -> Self {
        Self { args, flag_policy }
    }
}

mod sealed {
    use super::CommandCore;

    pub trait Sealed<'a> {
        fn core(&self) -> &CommandCore<'a>;
    }
}

macro_rules! sealed_command {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl<'a> sealed::Sealed<'a> for $ty<'a> {
                fn core(&self) -> &CommandCore<'a> {
                    &self.core
                }
            }
        )+
    };
}

pub trait Command<'a>: sealed::Sealed<'a> {
    fn usage(&self) -> String;
    fn perform(&self, ctx: &mut AppContext) -> Result<()>;

    /// Applies the flag policy, then runs. Parse errors carry the usage text.
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let core = self.core();
        let outcome = match core.flag_policy.evaluate(core.args) {
            FlagDecision::ShortCircuitUsage => {
                ctx.logger
                    .info(format!("Usage: {}", self.usage()), LogTarget::ConsoleOnly);
                return Ok(());
            }
            FlagDecision::Continue => self.perform(ctx),
            FlagDecision::Error(e) => Err(e),
        };
        outcome.map_err(|e| match e {
            Error::Parse(msg) => Error::Parse(format!("{msg}\nUsage: {}", self.usage())),
            other => other,
        })
    }
}

pub type CommandDyn<'a> = Box<dyn Command<'a> + 'a>;

fn policy(max_args: usize) -> FlagPolicy {
    FlagPolicy::new(vec![Box::new(HelpAtIdx(0)), Box::new(MaxArgs(max_args))])
}

/// Runs a proposal through the edit session and reports the outcome.
fn submit(ctx: &mut AppContext, proposal: Proposal) -> Result<()> {
    match ctx.propose(proposal)? {
        Decision::Safe(applied) => {
            ctx.logger
                .info(format!("Applied: {applied}"), LogTarget::ConsoleAndFile);
        }
        Decision::PendingConfirmation(warnings) => {
            for w in &warnings {
                ctx.logger.warn(w.to_string(), LogTarget::ConsoleAndFile);
            }
            ctx.logger.info(
                "The edit is on hold. Run 'confirm' to apply it anyway or 'reject' to drop it.",
                LogTarget::ConsoleOnly,
            );
        }
    }
    Ok(())
}

// ==========
// Proposals
// ==========

pub struct AssignCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> AssignCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        Self {
            core: CommandCore::new(args, policy(5)),
        }
    }

    fn proposal(&self) -> Result<Proposal> {
        let args = self.core.args;
        Ok(Proposal::Single {
            room: extract_at::<RoomRefArg>(args, 0)?.clone(),
            day: extract_at::<DayArg>(args, 1)?,
            period: extract_at::<PeriodArg>(args, 2)?,
            teacher: extract_at::<NameArg>(args, 3)?.clone(),
            program: extract_opt::<ProgramTagArg>(args, 4)?.unwrap_or_default(),
        })
    }
}

impl<'a> Command<'a> for AssignCommand<'a> {
    fn usage(&self) -> String {
        "assign <room> <day> <period> \"<teacher>\" [program|ALL]".into()
    }
    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let proposal = self.proposal()?;
        submit(ctx, proposal)
    }
}

pub struct DayCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> DayCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        let policy = FlagPolicy::new(vec![Box::new(HelpAnywhere)]);
        Self {
            core: CommandCore::new(args, policy),
        }
    }

    fn proposal(&self) -> Result<Proposal> {
        let args = self.core.args;
        let room = extract_at::<RoomRefArg>(args, 0)?.clone();
        let day = extract_at::<DayArg>(args, 1)?;
        let (scope, mut idx) = match args.get(2) {
            Some(Arg::Programs(_) | Arg::AllPrograms) => {
                (extract_at::<ProgramTagArg>(args, 2)?, 3)
            }
            _ => (ProgramTag::All, 2),
        };

        let mut batch = DayBatch::new();
        let mut listed: Vec<Period> = Vec::new();
        while idx < args.len() {
            let period = extract_at::<PeriodArg>(args, idx)?;
            if listed.contains(&period) {
                return Err(Error::parse(format!(
                    "Period {period} is listed more than once."
                )));
            }
            listed.push(period);
            if !matches!(args.get(idx + 1), Some(Arg::Dash)) {
                batch.set(period, extract_at::<NameArg>(args, idx + 1)?);
            }
            idx += 2;
        }

        Ok(Proposal::Day {
            room,
            day,
            batch,
            scope,
        })
    }
}

impl<'a> Command<'a> for DayCommand<'a> {
    fn usage(&self) -> String {
        "day <room> <day> [program|ALL] (<period> \"<teacher>\"|<period> -)...".into()
    }
    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let proposal = self.proposal()?;
        submit(ctx, proposal)
    }
}

pub struct ConfirmCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> ConfirmCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        Self {
            core: CommandCore::new(args, FlagPolicy::bare()),
        }
    }
}

impl<'a> Command<'a> for ConfirmCommand<'a> {
    fn usage(&self) -> String {
        "confirm".into()
    }
    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let applied = ctx.confirm()?;
        ctx.logger
            .info(format!("Confirmed: {applied}"), LogTarget::ConsoleAndFile);
        Ok(())
    }
}

pub struct RejectCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> RejectCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        Self {
            core: CommandCore::new(args, FlagPolicy::bare()),
        }
    }
}

impl<'a> Command<'a> for RejectCommand<'a> {
    fn usage(&self) -> String {
        "reject".into()
    }
    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let dropped = ctx.reject()?;
        ctx.logger.info(
            format!("Discarded: {}", dropped.proposal),
            LogTarget::ConsoleAndFile,
        );
        Ok(())
    }
}

pub struct PendingCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> PendingCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        Self {
            core: CommandCore::new(args, FlagPolicy::bare()),
        }
    }
}

impl<'a> Command<'a> for PendingCommand<'a> {
    fn usage(&self) -> String {
        "pending".into()
    }
    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let pending = ctx.edits.pending();
        DisplayManager::new().display(|dm, out| dm.render_pending(pending, out))
    }
}

// ===========
// Slot views
// ===========

pub struct ClearCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> ClearCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        Self {
            core: CommandCore::new(args, policy(1)),
        }
    }
}

impl<'a> Command<'a> for ClearCommand<'a> {
    fn usage(&self) -> String {
        "clear <room>".into()
    }
    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let room = extract_at::<RoomRefArg>(self.core.args, 0)?;
        ctx.commit(|tt| clear_room(tt, room))?;
        ctx.logger.info(
            format!("Cleared every slot of room {room}."),
            LogTarget::ConsoleAndFile,
        );
        Ok(())
    }
}

pub struct FreeCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> FreeCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        Self {
            core: CommandCore::new(args, policy(3)),
        }
    }
}

impl<'a> Command<'a> for FreeCommand<'a> {
    fn usage(&self) -> String {
        "free <room> <day> <period>".into()
    }
    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let args = self.core.args;
        let room = extract_at::<RoomRefArg>(args, 0)?;
        let day = extract_at::<DayArg>(args, 1)?;
        let period = extract_at::<PeriodArg>(args, 2)?;
        ctx.timetable.room(room)?;

        let availability = available_teachers(
            &ctx.timetable,
            room,
            day,
            period,
            ctx.config.availability_policy(),
        );
        let tt = &ctx.timetable;
        DisplayManager::new().display(|dm, out| {
            dm.render_availability(tt, room, day, period, &availability, out)
        })
    }
}

pub struct ShowCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> ShowCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        Self {
            core: CommandCore::new(args, policy(3)),
        }
    }
}

impl<'a> Command<'a> for ShowCommand<'a> {
    fn usage(&self) -> String {
        "show room <room> [program] | show teacher \"<name>\" | show grade \"<level>\" | show teachers | show rooms".into()
    }
    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let args = self.core.args;
        let tt = &ctx.timetable;
        let dm = DisplayManager::new();
        match args.first() {
            Some(Arg::EntityType(EntityType::Room)) => {
                let room = extract_at::<RoomRefArg>(args, 1)?;
                let filter = match extract_opt::<ProgramTagArg>(args, 2)? {
                    Some(ProgramTag::Only(p)) => Some(p),
                    Some(ProgramTag::All) | None => None,
                };
                dm.display(|dm, out| dm.render_room(tt, room, filter, out))
            }
            Some(Arg::EntityType(EntityType::Teacher)) => {
                let teacher = extract_at::<NameArg>(args, 1)?;
                dm.display(|dm, out| dm.render_teacher(tt, teacher, out))
            }
            Some(Arg::View(ViewScope::Grade)) => {
                let level = extract_at::<NameArg>(args, 1)?;
                dm.display(|dm, out| dm.render_grade(tt, level, out))
            }
            Some(Arg::View(ViewScope::Teachers)) => {
                dm.display(|dm, out| dm.render_teachers(tt, out))
            }
            Some(Arg::View(ViewScope::Rooms)) => dm.display(|dm, out| dm.render_rooms(tt, out)),
            Some(other) => Err(Error::parse(format!("Nothing to show for {other}."))),
            None => Err(Error::parse("Missing what to show.")),
        }
    }
}

// ==================
// Reports and stats
// ==================

pub struct ReportCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> ReportCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        Self {
            core: CommandCore::new(args, policy(2)),
        }
    }
}

impl<'a> Command<'a> for ReportCommand<'a> {
    fn usage(&self) -> String {
        "report teachers | report grade \"<level>\"".into()
    }
    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let args = self.core.args;
        let now = Local::now();
        let report = match args.first() {
            Some(Arg::View(ViewScope::Teachers)) => Report::teachers(&ctx.timetable, now),
            Some(Arg::View(ViewScope::Grade)) => {
                let level = extract_at::<NameArg>(args, 1)?;
                Report::grade(&ctx.timetable, level, now)?
            }
            Some(other) => return Err(Error::parse(format!("No report for {other}."))),
            None => return Err(Error::parse("Missing report kind.")),
        };
        let path = report.write_to(&ctx.reports_dir)?;
        ctx.logger.info(
            format!("Wrote report '{}' to {}.", report.title, path.display()),
            LogTarget::ConsoleAndFile,
        );
        Ok(())
    }
}

pub struct StatsCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> StatsCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        Self {
            core: CommandCore::new(args, policy(2)),
        }
    }
}

impl<'a> Command<'a> for StatsCommand<'a> {
    fn usage(&self) -> String {
        "stats [grade \"<level>\"]".into()
    }
    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let args = self.core.args;
        let grade = match args.first() {
            None => None,
            Some(Arg::View(ViewScope::Grade)) => Some(extract_at::<NameArg>(args, 1)?.as_str()),
            Some(other) => return Err(Error::parse(format!("Unexpected scope {other}."))),
        };
        let load = workload(&ctx.timetable, grade);
        DisplayManager::new().display(|dm, out| dm.render_workload(&load, out))
    }
}

// ==========
// Directory
// ==========

pub struct EntityCommand<'a> {
    core: CommandCore<'a>,
    action: EntityActionType,
    entity_type: EntityType,
}

impl<'a> EntityCommand<'a> {
    pub fn new(action: EntityActionType, entity_type: EntityType, args: &'a [Arg]) -> Self {
        let help_idx = match action {
            EntityActionType::Add => 0,
            EntityActionType::Modify | EntityActionType::Delete => 1,
        };
        let mut rules: Vec<Box<dyn FlagRule>> = vec![Box::new(HelpAtIdx(help_idx))];
        if action == EntityActionType::Delete {
            rules.push(Box::new(MaxArgs(2)));
        }
        Self {
            core: CommandCore::new(args, FlagPolicy::new(rules)),
            action,
            entity_type,
        }
    }

    /// Arguments after the entity keyword of `mod` and `del`.
    fn body(&self) -> &'a [Arg] {
        match self.action {
            EntityActionType::Add => self.core.args,
            EntityActionType::Modify | EntityActionType::Delete => {
                self.core.args.get(1..).unwrap_or_default()
            }
        }
    }

    fn handle_add(&self, ctx: &mut AppContext) -> Result<()> {
        let args = self.body();
        if args.is_empty() {
            let tt = &ctx.timetable;
            return DisplayManager::new().display(|dm, out| match self.entity_type {
                EntityType::Teacher => dm.render_teachers(tt, out),
                EntityType::Room => dm.render_rooms(tt, out),
            });
        }
        match self.entity_type {
            EntityType::Teacher => {
                let name = extract_at::<NameArg>(args, 0)?;
                let subject = extract_at::<NameArg>(args, 1)?;
                let teacher = Teacher::new(name.as_str(), subject.as_str(), room_list(args, 2)?);
                let line = format!("Added {teacher}");
                ctx.commit(|tt| tt.add_teacher(teacher).map(|_| ()))?;
                ctx.logger.info(line, LogTarget::ConsoleAndFile);
            }
            EntityType::Room => {
                let name = extract_at::<RoomRefArg>(args, 0)?;
                let room = Classroom::new(name.as_str(), program_list(args, 1)?);
                let line = format!("Added {room}");
                ctx.commit(|tt| tt.add_room(room).map(|_| ()))?;
                ctx.logger.info(line, LogTarget::ConsoleAndFile);
            }
        }
        Ok(())
    }

    fn handle_modify(&self, ctx: &mut AppContext) -> Result<()> {
        let args = self.body();
        let line = match self.entity_type {
            EntityType::Teacher => {
                let name = extract_at::<NameArg>(args, 0)?;
                let subject = extract_at::<NameArg>(args, 1)?;
                let rooms = room_list(args, 2)?;
                ctx.commit(|tt| tt.modify_teacher(name, subject, rooms).map(|_| ()))?;
                format!("Modified {}", ctx.timetable.teacher(name)?)
            }
            EntityType::Room => {
                let name = extract_at::<RoomRefArg>(args, 0)?;
                let programs = program_list(args, 1)?;
                ctx.commit(|tt| tt.modify_room(name, programs).map(|_| ()))?;
                format!("Modified {}", ctx.timetable.room(name)?)
            }
        };
        ctx.logger.info(line, LogTarget::ConsoleAndFile);
        Ok(())
    }

    fn handle_delete(&self, ctx: &mut AppContext) -> Result<()> {
        let args = self.body();
        let line = match self.entity_type {
            EntityType::Teacher => {
                let name = extract_at::<NameArg>(args, 0)?;
                ctx.commit(|tt| tt.delete_teacher(name).map(|_| ()))?;
                format!("Deleted teacher '{name}'. Their existing slot entries are kept.")
            }
            EntityType::Room => {
                let name = extract_at::<RoomRefArg>(args, 0)?;
                ctx.commit(|tt| tt.delete_room(name).map(|_| ()))?;
                format!("Deleted room '{name}' and its timetable.")
            }
        };
        ctx.logger.info(line, LogTarget::ConsoleAndFile);
        Ok(())
    }
}

/// Permitted rooms from `start` on. A lone "-" stands for no restriction.
fn room_list(args: &[Arg], start: usize) -> Result<Vec<String>> {
    let mut rooms = Vec::new();
    for (idx, arg) in args.iter().enumerate().skip(start) {
        if !matches!(arg, Arg::Dash) {
            rooms.push(extract_at::<RoomRefArg>(args, idx)?.clone());
        }
    }
    Ok(rooms)
}

/// Programs from `start` on; "IEP EEP" and "IEP, EEP" read the same.
fn program_list(args: &[Arg], start: usize) -> Result<Vec<Program>> {
    let mut programs = Vec::new();
    for arg in args.iter().skip(start) {
        match arg {
            Arg::Programs(ps) => programs.extend(ps.iter().copied()),
            other => return Err(ProgramsArg::expected_error(other)),
        }
    }
    Ok(programs)
}

impl<'a> Command<'a> for EntityCommand<'a> {
    fn usage(&self) -> String {
        let shape = match self.entity_type {
            EntityType::Teacher => match self.action {
                EntityActionType::Delete => "\"<name>\"",
                _ => "\"<name>\" \"<subject>\" [rooms...|-]",
            },
            EntityType::Room => match self.action {
                EntityActionType::Delete => "<room>",
                _ => "<room> <programs...>",
            },
        };
        match self.action {
            EntityActionType::Add => format!("{} {}", self.entity_type, shape),
            action => format!("{} {} {}", action, self.entity_type, shape),
        }
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        match self.action {
            EntityActionType::Add => self.handle_add(ctx),
            EntityActionType::Modify => self.handle_modify(ctx),
            EntityActionType::Delete => self.handle_delete(ctx),
        }
    }
}

// ========
// Session
// ========

pub struct ConfigCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> ConfigCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        let policy = FlagPolicy::new(vec![Box::new(HelpAtIdx(0))]);
        Self {
            core: CommandCore::new(args, policy),
        }
    }

    fn pairs(&self) -> Result<Vec<(&'a str, &'a str)>> {
        let args = self.core.args;
        if args.len() % 2 != 0 {
            return Err(Error::parse("Expected KEY VALUE pairs."));
        }
        (0..args.len())
            .step_by(2)
            .map(|i| -> Result<(&'a str, &'a str)> {
                Ok((
                    extract_at::<NameArg>(args, i)?.as_str(),
                    extract_at::<NameArg>(args, i + 1)?.as_str(),
                ))
            })
            .collect()
    }
}

impl<'a> Command<'a> for ConfigCommand<'a> {
    fn usage(&self) -> String {
        "config [KEY VALUE]...".into()
    }
    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let pairs = self.pairs()?;
        if pairs.is_empty() {
            let config = &ctx.config;
            return DisplayManager::new().display(|dm, out| dm.render_config(config, out));
        }

        let backend_before = ctx.config.storage_backend();
        match pairs.as_slice() {
            [(key, value)] => {
                ctx.config.set(key, value)?;
                if let Some((key, old, new)) = ctx.config.take_last_change() {
                    ctx.logger.info(
                        format!("Config {key} changed from {old} to {new}."),
                        LogTarget::ConsoleAndFile,
                    );
                }
            }
            many => {
                ctx.config.set_many(many.iter().copied())?;
                let summary = many
                    .iter()
                    .map(|(k, v)| format!("{}={}", k.to_ascii_uppercase(), v))
                    .collect::<Vec<_>>()
                    .join(", ");
                ctx.logger
                    .info(format!("Config updated: {summary}."), LogTarget::ConsoleAndFile);
            }
        }

        ctx.logger
            .set_file_logging_enabled(ctx.config.file_logging_enabled());
        if ctx.config.storage_backend() != backend_before {
            ctx.logger.info(
                "The new storage backend is used from the next start.",
                LogTarget::ConsoleOnly,
            );
        }
        Ok(())
    }
}

pub struct SaveCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> SaveCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        Self {
            core: CommandCore::new(args, FlagPolicy::bare()),
        }
    }
}

impl<'a> Command<'a> for SaveCommand<'a> {
    fn usage(&self) -> String {
        "save".into()
    }
    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        ctx.save()?;
        ctx.logger.info(
            format!("Saved timetable to {}.", ctx.store.describe()),
            LogTarget::ConsoleAndFile,
        );
        Ok(())
    }
}

pub struct ReloadCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> ReloadCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        Self {
            core: CommandCore::new(args, FlagPolicy::bare()),
        }
    }
}

impl<'a> Command<'a> for ReloadCommand<'a> {
    fn usage(&self) -> String {
        "reload".into()
    }
    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        if ctx.edits.has_pending() {
            ctx.logger
                .warn("Dropping the pending edit.", LogTarget::ConsoleAndFile);
        }
        let skipped = ctx.reload()?;
        ctx.logger.info(
            format!(
                "Reloaded {} teacher(s) and {} room(s) from {}; {} row(s) skipped.",
                ctx.timetable.teachers.len(),
                ctx.timetable.rooms.len(),
                ctx.store.describe(),
                skipped
            ),
            LogTarget::ConsoleAndFile,
        );
        Ok(())
    }
}

pub struct LogCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> LogCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        Self {
            core: CommandCore::new(args, FlagPolicy::bare()),
        }
    }
}

impl<'a> Command<'a> for LogCommand<'a> {
    fn usage(&self) -> String {
        "log".into()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let lines = ctx.logger.session_lines()?;
        if lines.is_empty() {
            ctx.logger
                .info("No log lines in this session.", LogTarget::ConsoleOnly);
            return Ok(());
        }
        ctx.logger.info(lines.join("\n"), LogTarget::ConsoleOnly);
        Ok(())
    }
}

pub struct ManCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> ManCommand<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        Self {
            core: CommandCore::new(args, policy(1)),
        }
    }

    fn topic_arg(&self) -> Result<Option<&'a str>> {
        match self.core.args.first() {
            None => Ok(None),
            Some(Arg::Name(name)) => Ok(Some(name.as_str())),
            Some(other) => Err(Error::parse(format!("Unsupported manual topic: {other}."))),
        }
    }
}

impl<'a> Command<'a> for ManCommand<'a> {
    fn usage(&self) -> String {
        "man [topic]".into()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let page = ManualCatalog::new().page_for(self.topic_arg()?)?;
        ctx.logger.info(page.render(), LogTarget::ConsoleOnly);
        Ok(())
    }
}

sealed_command!(
    AssignCommand,
    DayCommand,
    ConfirmCommand,
    RejectCommand,
    PendingCommand,
    ClearCommand,
    FreeCommand,
    ShowCommand,
    ReportCommand,
    StatsCommand,
    EntityCommand,
    ConfigCommand,
    SaveCommand,
    ReloadCommand,
    LogCommand,
    ManCommand,
);
