use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

pub const DAY_COUNT: usize = 5;
pub const PERIOD_COUNT: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum GlobalCommand {
    #[strum(serialize = "assign", to_string = "assign")]
    Assign,
    #[strum(serialize = "day", to_string = "day")]
    Day,
    #[strum(serialize = "clear", to_string = "clear")]
    Clear,
    #[strum(serialize = "confirm", to_string = "confirm")]
    Confirm,
    #[strum(serialize = "reject", to_string = "reject")]
    Reject,
    #[strum(serialize = "pending", to_string = "pending")]
    Pending,
    #[strum(serialize = "free", to_string = "free")]
    Free,
    #[strum(serialize = "show", to_string = "show")]
    Show,
    #[strum(serialize = "report", to_string = "report")]
    Report,
    #[strum(serialize = "stats", to_string = "stats")]
    Stats,
    #[strum(serialize = "config", to_string = "config")]
    Config,
    #[strum(serialize = "save", to_string = "save")]
    Save,
    #[strum(serialize = "reload", to_string = "reload")]
    Reload,
    #[strum(serialize = "log", to_string = "log")]
    Log,
    #[strum(serialize = "man", to_string = "man")]
    Man,
}

impl GlobalCommand {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Unsupported global command: '{}'. Valid global commands: {}",
                s.trim(),
                valid_csv::<GlobalCommand>()
            ))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum EntityType {
    #[strum(serialize = "teacher", to_string = "teacher")]
    Teacher,
    #[strum(serialize = "room", to_string = "room")]
    Room,
}
impl EntityType {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Unsupported entity type: '{}'. Valid entity types: {}",
                s.trim(),
                valid_csv::<EntityType>()
            ))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, EnumIterDerive, Display)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum EntityActionType {
    #[strum(serialize = "")]
    Add,
    #[strum(serialize = "mod")]
    Modify,
    #[strum(serialize = "del")]
    Delete,
}
impl EntityActionType {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Unsupported action: '{}'. Valid actions: {}",
                s.trim(),
                valid_csv::<EntityActionType>()
            ))
        })
    }
}

/// Keywords for read-only views that are not a single directory entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum ViewScope {
    #[strum(serialize = "grade", to_string = "grade")]
    Grade,
    #[strum(serialize = "teachers", to_string = "teachers")]
    Teachers,
    #[strum(serialize = "rooms", to_string = "rooms")]
    Rooms,
}
impl ViewScope {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Unsupported view: '{}'. Valid views: {}",
                s.trim(),
                valid_csv::<ViewScope>()
            ))
        })
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumString, Display, AsRefStr,
    EnumIterDerive,
)]
#[strum(ascii_case_insensitive)]
pub enum Day {
    #[strum(serialize = "mon", serialize = "monday", serialize = "mon.", to_string = "Monday")]
    Monday,
    #[strum(serialize = "tue", serialize = "tuesday", serialize = "tue.", to_string = "Tuesday")]
    Tuesday,
    #[strum(
        serialize = "wed",
        serialize = "wednesday",
        serialize = "wed.",
        to_string = "Wednesday"
    )]
    Wednesday,
    #[strum(
        serialize = "thu",
        serialize = "thursday",
        serialize = "thu.",
        to_string = "Thursday"
    )]
    Thursday,
    #[strum(serialize = "fri", serialize = "friday", serialize = "fri.", to_string = "Friday")]
    Friday,
}

impl Day {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::Parse(format!(
                "Invalid day: '{}'. Valid days: {}",
                s.trim(),
                valid_csv::<Day>()
            ))
        })
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn short(self) -> &'static str {
        match self {
            Day::Monday => "MON",
            Day::Tuesday => "TUE",
            Day::Wednesday => "WED",
            Day::Thursday => "THU",
            Day::Friday => "FRI",
        }
    }
}

const PERIOD_TIMES: [&str; PERIOD_COUNT] = [
    "08:15-09:00",
    "09:00-09:45",
    "10:00-10:45",
    "10:45-11:30",
    "12:20-13:05",
    "13:05-13:50",
    "14:00-14:45",
    "14:45-15:30",
    "15:45-16:30",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
pub enum BreakKind {
    #[strum(to_string = "15 min")]
    Short,
    #[strum(to_string = "Lunch")]
    Lunch,
    #[strum(to_string = "10 min")]
    Brief,
}

/// One teaching period of the day, 1 through 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Period(u8);

impl Period {
    pub const LAST: Period = Period(PERIOD_COUNT as u8);

    pub fn new(n: i64) -> Result<Self> {
        if (1..=PERIOD_COUNT as i64).contains(&n) {
            Ok(Period(n as u8))
        } else {
            Err(Error::Parse(format!(
                "Invalid period: {n}. Periods run from 1 to {PERIOD_COUNT}."
            )))
        }
    }

    pub fn all() -> impl Iterator<Item = Period> {
        (1..=PERIOD_COUNT as u8).map(Period)
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    pub fn time_range(self) -> &'static str {
        PERIOD_TIMES[self.index()]
    }

    pub fn break_after(self) -> Option<BreakKind> {
        match self.0 {
            2 | 8 => Some(BreakKind::Short),
            4 => Some(BreakKind::Lunch),
            6 => Some(BreakKind::Brief),
            _ => None,
        }
    }

    /// True when `next` is numerically the following period. Breaks are ignored.
    pub fn is_followed_by(self, next: Period) -> bool {
        next.0 == self.0 + 1
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumString, Display, AsRefStr,
    EnumIterDerive,
)]
#[strum(ascii_case_insensitive)]
pub enum Program {
    #[strum(serialize = "IEP")]
    Iep,
    #[strum(serialize = "EEP")]
    Eep,
    #[strum(serialize = "TEP")]
    Tep,
    #[strum(serialize = "TEP+")]
    TepPlus,
    #[strum(serialize = "SMEP")]
    Smep,
    #[strum(serialize = "SMEP+")]
    SmepPlus,
}

impl Program {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::Parse(format!(
                "Invalid program: '{}'. Valid programs: {}",
                s.trim(),
                valid_csv::<Program>()
            ))
        })
    }

    /// Parse a comma separated list such as "IEP, EEP".
    pub fn parse_list(s: &str) -> Result<Vec<Program>> {
        let mut out = Vec::new();
        for seg in s.split(',').map(str::trim).filter(|seg| !seg.is_empty()) {
            let program = Program::try_from(seg)?;
            if !out.contains(&program) {
                out.push(program);
            }
        }
        Ok(out)
    }

    pub fn join(programs: &[Program]) -> String {
        if programs.is_empty() {
            return "-".to_string();
        }
        programs
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Program scope of a slot entry. `All` is the "every track" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgramTag {
    All,
    Only(Program),
}

impl ProgramTag {
    pub const ALL_LABEL: &'static str = "ALL";

    pub fn try_from(s: &str) -> Result<Self> {
        let t = s.trim();
        if t.eq_ignore_ascii_case(Self::ALL_LABEL) || t == "*" {
            return Ok(ProgramTag::All);
        }
        Program::try_from(t).map(ProgramTag::Only).map_err(|_| {
            Error::Parse(format!(
                "Invalid program tag: '{}'. Use {} or one of: {}",
                t,
                Self::ALL_LABEL,
                valid_csv::<Program>()
            ))
        })
    }

    /// An entry tagged `self` is visible in a view filtered to `filter`.
    pub fn visible_under(self, filter: Option<Program>) -> bool {
        match (filter, self) {
            (None, _) => true,
            (Some(_), ProgramTag::All) => true,
            (Some(f), ProgramTag::Only(p)) => f == p,
        }
    }
}

impl Default for ProgramTag {
    fn default() -> Self {
        ProgramTag::All
    }
}

impl fmt::Display for ProgramTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgramTag::All => write!(f, "{}", Self::ALL_LABEL),
            ProgramTag::Only(p) => write!(f, "{p}"),
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "kebab-case")]
pub enum AvailabilityPolicy {
    #[strum(serialize = "open", to_string = "open")]
    Open,
    #[strum(serialize = "restricted", to_string = "restricted")]
    Restricted,
}

impl AvailabilityPolicy {
    pub fn help(&self) -> &'static str {
        match self {
            AvailabilityPolicy::Open => "Any teacher not booked elsewhere is free.",
            AvailabilityPolicy::Restricted => {
                "Free teachers must also list the room among their assigned rooms."
            }
        }
    }

    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Invalid availability policy: '{}'. Allowed policies: {}",
                s.trim(),
                valid_csv::<AvailabilityPolicy>()
            ))
        })
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "kebab-case")]
pub enum StorageBackend {
    #[strum(serialize = "json", to_string = "json")]
    Json,
    #[strum(serialize = "memory", to_string = "memory")]
    Memory,
}

impl StorageBackend {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Invalid storage backend: '{}'. Allowed backends: {}",
                s.trim(),
                valid_csv::<StorageBackend>()
            ))
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIterDerive, AsRefStr, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum BoolFormat {
    #[strum(serialize = "true", serialize = "yes", serialize = "on", to_string = "true")]
    True,
    #[strum(serialize = "false", serialize = "no", serialize = "off", to_string = "false")]
    False,
}

impl BoolFormat {
    fn to_bool(self) -> bool {
        matches!(self, BoolFormat::True)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bool(pub bool);

impl Bool {
    pub fn try_from_str(s: &str) -> Result<Self> {
        BoolFormat::from_str(s.trim())
            .map(|f| Bool(f.to_bool()))
            .map_err(|_| {
                Error::Parse(format!(
                    "Invalid boolean: '{}'. Valid booleans: {}",
                    s.trim(),
                    valid_csv::<BoolFormat>()
                ))
            })
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Text(String),
        }
        match Raw::deserialize(deserializer)? {
            Raw::Flag(b) => Ok(Bool(b)),
            Raw::Text(s) => Bool::try_from_str(&s).map_err(serde::de::Error::custom),
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Flag {
    #[strum(serialize = "-h", serialize = "-help", to_string = "-h")]
    Help,
}

impl Flag {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Invalid flag: '{}'. Valid flags: {}",
                s.trim(),
                valid_csv::<Flag>()
            ))
        })
    }
}
