use std::io::{self, Write};

use crate::arg::arg_parse_strategy::CommandArgParser;
use crate::command::command_parser::CommandParser;
use crate::command::manual::ManualCatalog;
use crate::core::context::AppContext;
use crate::core::types::GlobalCommand;
use crate::errors::{Error, Result};
use crate::logging::{LogTarget, Logger};
use crate::prompter::models::{Flow, FlowCtrl};
use crate::ui::ansi::STYLE_RESET;
use crate::ui::chrome::UiChrome;

/// One typed line, split into the lowercased command word and raw arguments.
enum Line<'l> {
    Blank,
    Exit,
    Command {
        word: String,
        args: Vec<String>,
        text: &'l str,
    },
}

impl<'l> Line<'l> {
    fn read(input: &'l str) -> Self {
        let text = input.trim();
        if text.is_empty() {
            return Line::Blank;
        }
        if text.eq_ignore_ascii_case("exit") {
            return Line::Exit;
        }
        let mut parts = text.split_whitespace();
        let word = parts.next().unwrap_or_default().to_ascii_lowercase();
        Line::Command {
            word,
            args: parts.map(str::to_string).collect(),
            text,
        }
    }
}

/// The timetable shell: reads a command line, runs it, reports failures.
/// A failing line never ends the session.
pub struct MainFlow<'a> {
    ctx: &'a mut AppContext,
    arg_parser: CommandArgParser,
    command_parser: CommandParser,
    logger: Logger,
    chrome: UiChrome,
}

impl<'a> MainFlow<'a> {
    pub fn new(ctx: &'a mut AppContext) -> Self {
        let logger = ctx.logger.clone();
        Self {
            ctx,
            arg_parser: CommandArgParser::new(),
            command_parser: CommandParser::new(),
            logger,
            chrome: UiChrome::new(),
        }
    }

    fn print_welcome(&self) {
        self.chrome.print_banner();
        println!();
        println!("Use 'man <topic>' for command-specific details.");
        println!("Available topics: {}", ManualCatalog::new().topics().join(", "));
        println!();
        println!("Config path: {}", self.ctx.config_path.display());
        println!("Data: {}", self.ctx.store.describe());
        println!("Logs path: {}", self.ctx.logs_dir.display());
        println!("Reports path: {}", self.ctx.reports_dir.display());
        if self.ctx.timetable.teachers.is_empty() {
            println!("No teachers yet. Add one with: teacher \"<name>\" \"<subject>\"");
        }
        println!();
    }

    fn dispatch(&mut self, word: &str, raw_args: &[String], text: &str) {
        let args = match self.arg_parser.parse(word, raw_args) {
            Ok(args) => args,
            Err(err) => {
                self.logger.error(
                    format!("Argument parsing failed for '{text}'. {err}"),
                    LogTarget::ConsoleAndFile,
                );
                return;
            }
        };
        let cmd = match self.command_parser.parse(word, &args) {
            Ok(cmd) => cmd,
            Err(err) => {
                self.logger.error(
                    format!("Command resolution failed for '{word}'. {err}"),
                    LogTarget::ConsoleAndFile,
                );
                return;
            }
        };

        // The log view would otherwise list its own invocation.
        if word != GlobalCommand::Log.as_ref() {
            self.logger
                .info(format!("Command run: {text}"), LogTarget::FileOnly);
        }
        if let Err(err) = cmd.execute(self.ctx) {
            self.report_failure(word, &err);
        }
    }

    /// Usage hints go to the console only.
    fn report_failure(&self, word: &str, err: &Error) {
        let prefix = format!("Command execution failed for '{word}'.");
        let text = err.to_string();
        match text.split_once("\nUsage:") {
            Some((head, usage)) => {
                self.logger
                    .error(format!("{prefix} {head}\nUsage:{usage}"), LogTarget::ConsoleOnly);
                self.logger
                    .error(format!("{prefix} {}", head.trim()), LogTarget::FileOnly);
            }
            None => self
                .logger
                .error(format!("{prefix} {text}"), LogTarget::ConsoleAndFile),
        }
    }
}

impl<'a> Flow for MainFlow<'a> {
    fn render(&mut self) -> Result<()> {
        if !self.ctx.startup_displayed {
            self.print_welcome();
            self.ctx.startup_displayed = true;
        }
        self.chrome.print_prompt(self.ctx.edits.has_pending());
        Ok(())
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        print!("{STYLE_RESET}");
        let _ = io::stdout().flush();

        match Line::read(input) {
            Line::Blank => Ok(FlowCtrl::Continue),
            Line::Exit => Ok(FlowCtrl::Finish),
            Line::Command { word, args, text } => {
                self.dispatch(&word, &args, text);
                Ok(FlowCtrl::Continue)
            }
        }
    }
}
