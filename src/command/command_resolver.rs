use crate::arg::args::Arg;
use crate::command::commands::{
    AssignCommand, ClearCommand, Command, CommandDyn, ConfigCommand, ConfirmCommand, DayCommand,
    EntityCommand, FreeCommand, LogCommand, ManCommand, PendingCommand, RejectCommand,
    ReloadCommand, ReportCommand, SaveCommand, ShowCommand, StatsCommand,
};
use crate::core::types::{EntityActionType, EntityType, GlobalCommand};
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;

pub trait CommandResolver {
    fn can_resolve(&self, command: &str) -> bool;
    fn resolve<'a>(&self, command: &str, args: &'a [Arg]) -> Result<CommandDyn<'a>>;
}

/// `mod <entity> ...` and `del <entity> ...`.
pub struct EntityActionResolver;

impl CommandResolver for EntityActionResolver {
    fn can_resolve(&self, command: &str) -> bool {
        matches!(
            EntityActionType::try_from(command),
            Ok(EntityActionType::Modify | EntityActionType::Delete)
        )
    }

    fn resolve<'a>(&self, command: &str, args: &'a [Arg]) -> Result<CommandDyn<'a>> {
        let action = EntityActionType::try_from(command)?;
        let entity_type = match args.first() {
            Some(Arg::EntityType(t)) => *t,
            _ => {
                return Err(Error::Parse(format!(
                    "Expected entity type as first argument. Valid entity types: {}",
                    valid_csv::<EntityType>()
                )));
            }
        };
        let entity_command = EntityCommand::new(action, entity_type, args);
        if args.len() < 2 {
            return Err(Error::Parse(format!(
                "Missing argument(s).\nUsage: {}",
                entity_command.usage()
            )));
        }
        Ok(Box::new(entity_command))
    }
}

/// `teacher ...` and `room ...` add an entry, or list them without arguments.
pub struct AddEntityResolver;

impl CommandResolver for AddEntityResolver {
    fn can_resolve(&self, command: &str) -> bool {
        EntityType::try_from(command).is_ok()
    }

    fn resolve<'a>(&self, command: &str, args: &'a [Arg]) -> Result<CommandDyn<'a>> {
        let entity_type = EntityType::try_from(command)?;
        Ok(Box::new(EntityCommand::new(
            EntityActionType::Add,
            entity_type,
            args,
        )))
    }
}

pub struct GlobalResolver;

impl CommandResolver for GlobalResolver {
    fn can_resolve(&self, command: &str) -> bool {
        GlobalCommand::try_from(command).is_ok()
    }

    fn resolve<'a>(&self, command: &str, args: &'a [Arg]) -> Result<CommandDyn<'a>> {
        let command_type = GlobalCommand::try_from(command)?;
        Ok(match command_type {
            GlobalCommand::Assign => Box::new(AssignCommand::new(args)),
            GlobalCommand::Day => Box::new(DayCommand::new(args)),
            GlobalCommand::Clear => Box::new(ClearCommand::new(args)),
            GlobalCommand::Confirm => Box::new(ConfirmCommand::new(args)),
            GlobalCommand::Reject => Box::new(RejectCommand::new(args)),
            GlobalCommand::Pending => Box::new(PendingCommand::new(args)),
            GlobalCommand::Free => Box::new(FreeCommand::new(args)),
            GlobalCommand::Show => Box::new(ShowCommand::new(args)),
            GlobalCommand::Report => Box::new(ReportCommand::new(args)),
            GlobalCommand::Stats => Box::new(StatsCommand::new(args)),
            GlobalCommand::Config => Box::new(ConfigCommand::new(args)),
            GlobalCommand::Save => Box::new(SaveCommand::new(args)),
            GlobalCommand::Reload => Box::new(ReloadCommand::new(args)),
            GlobalCommand::Log => Box::new(LogCommand::new(args)),
            GlobalCommand::Man => Box::new(ManCommand::new(args)),
        })
    }
}
