use crate::arg::args::Arg;
use crate::command::command_resolver::{
    AddEntityResolver, CommandResolver, EntityActionResolver, GlobalResolver,
};
use crate::command::commands::CommandDyn;
use crate::errors::{Error, Result};

/// First resolver that claims the command word wins.
pub struct CommandParser {
    registry: Vec<Box<dyn CommandResolver>>,
}

impl CommandParser {
    pub fn new() -> Self {
        Self {
            registry: vec![
                Box::new(EntityActionResolver),
                Box::new(AddEntityResolver),
                Box::new(GlobalResolver),
            ],
        }
    }

    pub fn parse<'a>(&self, command: &str, args: &'a [Arg]) -> Result<CommandDyn<'a>> {
        self.registry
            .iter()
            .find(|r| r.can_resolve(command))
            .ok_or_else(|| Error::UnknownCommand(command.to_string()))?
            .resolve(command, args)
    }
}
