use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display as DisplayDerive, EnumIter as EnumIterDerive, EnumString};

use crate::config::ConfigKey;
use crate::core::types::{EntityType, GlobalCommand, Period};
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, DisplayDerive, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum ManualTopic {
    General,
    Assign,
    Day,
    Clear,
    Confirm,
    Reject,
    Pending,
    Free,
    Teacher,
    Room,
    Show,
    Report,
    Stats,
    Config,
    Save,
    Reload,
    Log,
    Man,
    Periods,
}

impl ManualTopic {
    pub fn try_from(input: &str) -> Result<Self> {
        Self::from_str(input.trim()).map_err(|_| {
            Error::Parse(format!(
                "Unsupported manual topic: '{}'. Valid topics: {}",
                input.trim(),
                valid_csv::<ManualTopic>()
            ))
        })
    }
}

#[derive(Debug, Clone)]
pub struct ManualSection {
    title: String,
    body: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ManualPage {
    name: String,
    summary: String,
    sections: Vec<ManualSection>,
}

impl ManualPage {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_section(
            "NAME",
            &[format!("{} - {}", self.name, self.summary)],
            &mut out,
        );
        for section in &self.sections {
            self.write_section(&section.title, &section.body, &mut out);
        }
        out.trim_end().to_string()
    }

    fn write_section(&self, title: &str, lines: &[String], out: &mut String) {
        out.push_str(&title.to_uppercase());
        out.push('\n');
        for line in lines {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
    }
}

pub struct ManualPageBuilder {
    name: String,
    summary: String,
    sections: Vec<ManualSection>,
}

impl ManualPageBuilder {
    pub fn new(name: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            summary: summary.into(),
            sections: Vec::new(),
        }
    }

    pub fn section(mut self, title: &str, body: Vec<String>) -> Self {
        self.sections.push(ManualSection {
            title: title.to_string(),
            body,
        });
        self
    }

    pub fn see_also(self, commands: &[GlobalCommand]) -> Self {
        let body = vec![
            commands
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        ];
        self.section("SEE ALSO", body)
    }

    pub fn build(self) -> ManualPage {
        ManualPage {
            name: self.name,
            summary: self.summary,
            sections: self.sections,
        }
    }
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[derive(Default)]
pub struct ManualCatalog;

impl ManualCatalog {
    pub fn new() -> Self {
        Self
    }

    pub fn page_for(&self, topic: Option<&str>) -> Result<ManualPage> {
        let topic = match topic {
            None => ManualTopic::General,
            Some(name) => ManualTopic::try_from(name)?,
        };
        Ok(self.build_page(topic))
    }

    pub fn topics(&self) -> Vec<String> {
        ManualTopic::iter().map(|t| t.to_string()).collect()
    }

    fn build_page(&self, topic: ManualTopic) -> ManualPage {
        match topic {
            ManualTopic::General => self.general_page(),
            ManualTopic::Assign => ManualPageBuilder::new("assign", "Place one teacher in one slot.")
                .section(
                    "SYNOPSIS",
                    lines(&["assign <room> <day> <period> \"<teacher>\" [program|ALL]"]),
                )
                .section(
                    "DESCRIPTION",
                    lines(&[
                        "The slot takes the teacher's subject from the directory.",
                        "The program defaults to ALL. A specific program must be offered by the room.",
                        "Rejected when the slot is full or the teacher is busy elsewhere.",
                        "Under the restricted policy the teacher must be permitted in the room.",
                        "A marathon run or a P4/1 split holds the edit until confirm or reject.",
                    ]),
                )
                .section(
                    "EXAMPLES",
                    lines(&[
                        "assign 1/1 mon 3 \"Anna Lee\"",
                        "assign \"3/2\" fri 7 \"Ben Ong\" EEP",
                    ]),
                )
                .see_also(&[GlobalCommand::Day, GlobalCommand::Confirm, GlobalCommand::Free])
                .build(),
            ManualTopic::Day => ManualPageBuilder::new("day", "Replace a room's whole day in one edit.")
                .section(
                    "SYNOPSIS",
                    lines(&["day <room> <day> [program|ALL] (<period> \"<teacher>\"|<period> -)..."]),
                )
                .section(
                    "DESCRIPTION",
                    lines(&[
                        "Every slot of the day in the given scope is cleared first.",
                        "Listed periods are then filled; '-' or an unlisted period stays empty.",
                        "Entries of other programs are left alone unless the scope is ALL.",
                        "Only unknown teachers reject the batch. Warnings hold it for confirmation.",
                    ]),
                )
                .section(
                    "EXAMPLES",
                    lines(&["day 1/1 tue 1 \"Anna Lee\" 2 \"Anna Lee\" 5 -"]),
                )
                .see_also(&[GlobalCommand::Assign, GlobalCommand::Confirm, GlobalCommand::Clear])
                .build(),
            ManualTopic::Clear => self.simple_page(
                "clear",
                "Empty every slot of a room.",
                "clear <room>",
                &["The room and the directory stay as they are."],
            ),
            ManualTopic::Confirm => self.simple_page(
                "confirm",
                "Apply the edit that is waiting on warnings.",
                "confirm",
                &[
                    "The pending edit is applied and saved as one step.",
                    "If saving fails the edit stays pending.",
                ],
            ),
            ManualTopic::Reject => self.simple_page(
                "reject",
                "Drop the edit that is waiting on warnings.",
                "reject",
                &["Nothing is changed."],
            ),
            ManualTopic::Pending => self.simple_page(
                "pending",
                "Show the edit that is waiting on warnings.",
                "pending",
                &["Lists the proposal and every warning it raised."],
            ),
            ManualTopic::Free => self.simple_page(
                "free",
                "List which teachers can take a slot.",
                "free <room> <day> <period>",
                &[
                    "Free teachers are not teaching anywhere at that period.",
                    "Under the restricted policy only teachers permitted in the room are listed.",
                ],
            ),
            ManualTopic::Teacher => self.entity_page(
                EntityType::Teacher,
                "Manage the teacher directory.",
                &[
                    "teacher",
                    "teacher \"<name>\" \"<subject>\" [rooms...|-]",
                    "mod teacher \"<name>\" \"<subject>\" [rooms...|-]",
                    "del teacher \"<name>\"",
                ],
                &[
                    "Without arguments the directory is listed.",
                    "No rooms, or '-', means the teacher may teach anywhere.",
                    "Deleting a teacher keeps their slots; they show as orphaned names.",
                ],
            ),
            ManualTopic::Room => self.entity_page(
                EntityType::Room,
                "Manage rooms and the programs they offer.",
                &[
                    "room",
                    "room <room> <programs...>",
                    "mod room <room> <programs...>",
                    "del room <room>",
                ],
                &[
                    "Room names look like <grade>/<class>, e.g. 2/3.",
                    "Programs are IEP, EEP, or both. Adding a room gives it an empty week.",
                    "Deleting a room drops its slots.",
                ],
            ),
            ManualTopic::Show => ManualPageBuilder::new("show", "Print timetable views.")
                .section(
                    "SYNOPSIS",
                    lines(&[
                        "show room <room> [program]",
                        "show teacher \"<name>\"",
                        "show grade \"<level>\"",
                        "show teachers",
                        "show rooms",
                    ]),
                )
                .section(
                    "DESCRIPTION",
                    lines(&[
                        "Grids have one row per day and one column per period.",
                        "Break columns sit where the school day has a break.",
                    ]),
                )
                .see_also(&[GlobalCommand::Report, GlobalCommand::Stats])
                .build(),
            ManualTopic::Report => self.simple_page(
                "report",
                "Write a printable text report.",
                "report teachers | report grade \"<level>\"",
                &["Reports are written under the reports directory with a timestamped name."],
            ),
            ManualTopic::Stats => self.simple_page(
                "stats",
                "Rank teachers by periods taught.",
                "stats [grade \"<level>\"]",
                &["Directory teachers with no periods are listed with zero."],
            ),
            ManualTopic::Config => ManualPageBuilder::new("config", "View or change settings.")
                .section(
                    "SYNOPSIS",
                    lines(&["config", "config <KEY> <VALUE> [<KEY> <VALUE>...]"]),
                )
                .section(
                    "DESCRIPTION",
                    vec![
                        "Without arguments the current settings are listed.".to_string(),
                        "Several pairs are applied together or not at all.".to_string(),
                        format!("{}: entries per slot, at least 1.", ConfigKey::CellCapacity),
                        format!("{}: consecutive periods that raise a warning.", ConfigKey::MarathonThreshold),
                        format!("{}: open or restricted.", ConfigKey::AvailabilityPolicy),
                        format!("{}: json or memory, used from the next start.", ConfigKey::StorageBackend),
                        format!("{}: true or false.", ConfigKey::FileLoggingEnabled),
                    ],
                )
                .build(),
            ManualTopic::Save => self.simple_page(
                "save",
                "Write the directory and the schedule to storage.",
                "save",
                &["Every applied edit already saves; this writes again on demand."],
            ),
            ManualTopic::Reload => self.simple_page(
                "reload",
                "Read the directory and the schedule back from storage.",
                "reload",
                &["A pending edit is dropped."],
            ),
            ManualTopic::Log => self.simple_page(
                "log",
                "Print the current session log to the console.",
                "log",
                &["Shows the lines logged since the program started."],
            ),
            ManualTopic::Man => ManualPageBuilder::new("man", "Show manual pages for commands and topics.")
                .section("SYNOPSIS", lines(&["man [topic]"]))
                .section(
                    "DESCRIPTION",
                    vec![
                        format!("Topics: {}", self.topics().join(", ")),
                        "Use 'man' with no topic for the general manual.".to_string(),
                    ],
                )
                .build(),
            ManualTopic::Periods => ManualPageBuilder::new("periods", "The school day.")
                .section(
                    "DESCRIPTION",
                    Period::all()
                        .map(|p| match p.break_after() {
                            Some(kind) => format!("{} {} then {}", p.number(), p.time_range(), kind),
                            None => format!("{} {}", p.number(), p.time_range()),
                        })
                        .collect(),
                )
                .build(),
        }
    }

    fn general_page(&self) -> ManualPage {
        ManualPageBuilder::new("timetable", "Weekly school timetable editor.")
            .section("SYNOPSIS", lines(&["<command> [args]"]))
            .section("COMMANDS", general_command_lines())
            .section(
                "TOPICS",
                vec![
                    "Use 'man <topic>' for command-specific details.".to_string(),
                    format!("Available topics: {}", self.topics().join(", ")),
                ],
            )
            .build()
    }

    fn simple_page(&self, name: &str, summary: &str, synopsis: &str, description: &[&str]) -> ManualPage {
        ManualPageBuilder::new(name, summary)
            .section("SYNOPSIS", lines(&[synopsis]))
            .section("DESCRIPTION", lines(description))
            .build()
    }

    fn entity_page(
        &self,
        entity: EntityType,
        summary: &str,
        synopsis: &[&str],
        description: &[&str],
    ) -> ManualPage {
        ManualPageBuilder::new(entity.to_string(), summary)
            .section("SYNOPSIS", lines(synopsis))
            .section("DESCRIPTION", lines(description))
            .see_also(&[GlobalCommand::Show, GlobalCommand::Assign, GlobalCommand::Man])
            .build()
    }
}

fn general_command_lines() -> Vec<String> {
    lines(&[
        "assign <room> <day> <period> \"<teacher>\" [program]  # Fill one slot",
        "day <room> <day> [program] <period> \"<teacher>\"...  # Replace a day",
        "clear <room>                                        # Empty a room",
        "confirm | reject | pending                          # Settle a held edit",
        "free <room> <day> <period>                          # Who can take a slot",
        "teacher | room [...]                                # Add or list entries",
        "mod <entity> ... | del <entity> ...                 # Modify or delete",
        "show room|teacher|grade|teachers|rooms ...          # Print views",
        "report teachers | report grade \"<level>\"           # Write a report",
        "stats [grade \"<level>\"]                             # Workload ranking",
        "config [KEY VALUE]...                               # View or change settings",
        "save | reload                                       # Storage",
        "log                                                 # Print the session log",
        "man [topic]                                         # Show manual pages",
        "exit                                                # Quit",
    ])
}
