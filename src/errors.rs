use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure the timetable can report to the shell.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Parsing & Routing --------------------------------------------------
    /// Lexing or positional argument problems.
    #[error("Parse error: {0}")]
    Parse(String),

    /// No resolver matched the command word.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    // ---- Validation ---------------------------------------------------------
    #[error("No teacher selected.")]
    NoTeacherSelected,

    #[error("Cell {room} {day} period {period} is full ({capacity} per cell).")]
    CellAtCapacity {
        room: String,
        day: String,
        period: u8,
        capacity: usize,
    },

    #[error("Room name is required.")]
    MissingRoomName,

    #[error("Teacher name is required.")]
    MissingTeacherName,

    #[error("Room name '{0}' may not contain ','.")]
    InvalidRoomName(String),

    #[error("Select at least one program for room '{0}'.")]
    MissingProgram(String),

    #[error("Room '{0}' already exists.")]
    DuplicateRoom(String),

    #[error("Teacher '{0}' already exists.")]
    DuplicateTeacher(String),

    #[error("Unknown room '{0}'.")]
    UnknownRoom(String),

    #[error("Unknown teacher '{0}'.")]
    UnknownTeacher(String),

    #[error("Teacher '{teacher}' is already teaching in {rooms} at that time.")]
    TeacherBusy { teacher: String, rooms: String },

    #[error("Teacher '{teacher}' is not assigned to room '{room}'.")]
    TeacherNotPermitted { teacher: String, room: String },

    #[error("Room '{room}' does not offer program {program}.")]
    ProgramNotOffered { room: String, program: String },

    #[error("An edit is awaiting confirmation. Run 'confirm' or 'reject' first.")]
    EditPending,

    #[error("There is no edit awaiting confirmation.")]
    NothingPending,

    // ---- Config -------------------------------------------------------------
    /// Any issue initializing/reading config (file missing, invalid JSON, etc.)
    #[error("Config error: {0}")]
    Config(String),

    // ---- Plumbing / Wrappers ------------------------------------------------
    /// Backing store refused or failed the write.
    #[error("Persist error: {0}")]
    Persist(String),

    #[error("{0}")]
    Domain(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
    pub fn unknown<S: Into<String>>(cmd: S) -> Self {
        Error::UnknownCommand(cmd.into())
    }
    pub fn persist<S: Into<String>>(msg: S) -> Self {
        Error::Persist(msg.into())
    }

    /// True for errors caused by user input that left the timetable untouched.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::NoTeacherSelected
                | Error::CellAtCapacity { .. }
                | Error::MissingRoomName
                | Error::MissingTeacherName
                | Error::InvalidRoomName(_)
                | Error::MissingProgram(_)
                | Error::DuplicateRoom(_)
                | Error::DuplicateTeacher(_)
                | Error::UnknownRoom(_)
                | Error::UnknownTeacher(_)
                | Error::TeacherBusy { .. }
                | Error::TeacherNotPermitted { .. }
                | Error::ProgramNotOffered { .. }
                | Error::EditPending
                | Error::NothingPending
        )
    }
}

// ----------------------- Small result helpers --------------------------------

/// Map an `Option<T>` into `Result<T, Error::Parse>` with a custom message.
pub fn require_parse<T, S: Into<String>>(opt: Option<T>, msg: S) -> Result<T> {
    opt.ok_or_else(|| Error::Parse(msg.into()))
}
