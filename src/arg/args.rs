use crate::extensions::enums::valid_csv;
use std::fmt;
use std::marker::PhantomData;

use crate::core::types::{Day, EntityType, Flag, Program, ProgramTag, ViewScope};
use crate::errors::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    Flag(Flag),
    Int(i32),
    /// A lone "-": an empty period or an unrestricted room list.
    Dash,
    Day(Day),
    Programs(Vec<Program>),
    AllPrograms,
    Room(String),
    Name(String),
    EntityType(EntityType),
    View(ViewScope),
}

fn fmt_seq<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    let mut first = true;
    for item in items {
        if !first {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
        first = false;
    }
    Ok(())
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Flag(x) => write!(f, "{x}"),
            Arg::Int(x) => write!(f, "{x}"),
            Arg::Dash => write!(f, "-"),
            Arg::Day(x) => write!(f, "{x}"),
            Arg::Programs(xs) => fmt_seq(f, xs),
            Arg::AllPrograms => write!(f, "{}", ProgramTag::ALL_LABEL),
            Arg::Room(x) => write!(f, "{x}"),
            Arg::Name(x) => write!(f, "\"{x}\""),
            Arg::EntityType(x) => write!(f, "{x}"),
            Arg::View(x) => write!(f, "{x}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TokenStream {
    toks: Vec<String>,
    i: usize,
}
impl TokenStream {
    pub fn new(raw: &[String]) -> Self {
        Self {
            toks: raw.to_vec(),
            i: 0,
        }
    }
    pub fn eof(&self) -> bool {
        self.i >= self.toks.len()
    }
    pub fn peek(&self) -> Result<&str> {
        self.toks
            .get(self.i)
            .map(|s| s.as_str())
            .ok_or_else(|| Error::Parse("EOF".into()))
    }
    pub fn next(&mut self) -> Result<String> {
        let s = self.peek()?.to_string();
        self.i += 1;
        Ok(s)
    }
}

pub trait SingleTokenArg {
    fn accepts(tok: &str) -> bool;
    fn new(tok: &str) -> Result<Arg>;
}

pub trait MultiTokenArg: SingleTokenArg {
    fn starts_sequence(tok: &str) -> bool;
}

pub trait ArgFactory {
    fn can_start(&self, tok: &str) -> bool;
    fn parse(&self, ts: &mut TokenStream) -> Result<Arg>;
}

pub struct SingleTokenFactory<A: SingleTokenArg>(PhantomData<A>);
impl<A: SingleTokenArg> SingleTokenFactory<A> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}
impl<A: SingleTokenArg> ArgFactory for SingleTokenFactory<A> {
    fn can_start(&self, tok: &str) -> bool {
        A::accepts(tok)
    }
    fn parse(&self, ts: &mut TokenStream) -> Result<Arg> {
        let tok = ts.next()?;
        A::new(&tok)
    }
}

pub struct MultiTokenFactory<A: MultiTokenArg>(PhantomData<A>);
impl<A: MultiTokenArg> MultiTokenFactory<A> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}
impl<A: MultiTokenArg> ArgFactory for MultiTokenFactory<A> {
    fn can_start(&self, tok: &str) -> bool {
        A::starts_sequence(tok)
    }
    fn parse(&self, ts: &mut TokenStream) -> Result<Arg> {
        let mut buf: Vec<String> = vec![ts.next()?];
        loop {
            let joined = buf.join(" ");
            if A::accepts(&joined) {
                return A::new(&joined);
            }
            if ts.eof() {
                return A::new(&joined);
            }
            buf.push(ts.next()?);
        }
    }
}

pub struct NameArg;
impl MultiTokenArg for NameArg {
    fn starts_sequence(value: &str) -> bool {
        !value.is_empty() && matches!(value.as_bytes()[0], b'\'' | b'"')
    }
}

impl SingleTokenArg for NameArg {
    fn accepts(value: &str) -> bool {
        if value.len() < 2 {
            return false;
        }
        let q = value.as_bytes()[0] as char;
        if q != '\'' && q != '"' {
            return false;
        }
        if !value.ends_with(q) {
            return false;
        }
        !value[1..value.len() - 1].trim().is_empty()
    }
    fn new(value: &str) -> Result<Arg> {
        if !Self::accepts(value) {
            return Err(Error::Parse(
                "Name must contain text wrapped in single or double quotes.".into(),
            ));
        }
        Ok(Arg::Name(value[1..value.len() - 1].trim().to_string()))
    }
}

/// Program lists: "IEP", "IEP,EEP" or "IEP, EEP".
pub struct ProgramsArg;

impl MultiTokenArg for ProgramsArg {
    fn starts_sequence(tok: &str) -> bool {
        let t = tok.trim().trim_end_matches(',');
        t.split(',')
            .next()
            .is_some_and(|first| Program::try_from(first).is_ok())
    }
}

impl SingleTokenArg for ProgramsArg {
    fn accepts(value: &str) -> bool {
        let mut saw_any = false;
        for seg in value.split(',') {
            let p = seg.trim();
            if p.is_empty() || Program::try_from(p).is_err() {
                return false;
            }
            saw_any = true;
        }
        saw_any
    }

    fn new(value: &str) -> Result<Arg> {
        if !Self::accepts(value) {
            return Err(Error::Parse(format!(
                "Invalid list of programs: '{}'. Valid programs: {}",
                value,
                valid_csv::<Program>(),
            )));
        }
        Ok(Arg::Programs(Program::parse_list(value)?))
    }
}

pub struct AllProgramsArg;
impl SingleTokenArg for AllProgramsArg {
    fn accepts(value: &str) -> bool {
        value.eq_ignore_ascii_case(ProgramTag::ALL_LABEL)
    }
    fn new(_: &str) -> Result<Arg> {
        Ok(Arg::AllPrograms)
    }
}

pub struct DayArg;
impl SingleTokenArg for DayArg {
    fn accepts(value: &str) -> bool {
        Day::try_from(value).is_ok()
    }
    fn new(value: &str) -> Result<Arg> {
        Ok(Arg::Day(Day::try_from(value)?))
    }
}

/// Bare room identifiers such as P4/3. Anything without '/' must be quoted.
pub struct RoomArg;
impl SingleTokenArg for RoomArg {
    fn accepts(value: &str) -> bool {
        value.contains('/')
            && !value.starts_with('/')
            && !value.ends_with('/')
            && !value.contains(|c: char| c.is_whitespace() || c == '"' || c == '\'' || c == ',')
    }
    fn new(value: &str) -> Result<Arg> {
        if !Self::accepts(value) {
            return Err(Error::Parse(format!(
                "Invalid room: '{}'. Write rooms as <grade>/<number>, e.g. P4/1.",
                value
            )));
        }
        Ok(Arg::Room(value.to_string()))
    }
}

pub struct DashArg;
impl SingleTokenArg for DashArg {
    fn accepts(value: &str) -> bool {
        value == "-"
    }
    fn new(_: &str) -> Result<Arg> {
        Ok(Arg::Dash)
    }
}

pub struct EntityTypeArg;
impl SingleTokenArg for EntityTypeArg {
    fn accepts(value: &str) -> bool {
        EntityType::try_from(value).is_ok()
    }
    fn new(value: &str) -> Result<Arg> {
        Ok(Arg::EntityType(EntityType::try_from(value)?))
    }
}

pub struct ViewArg;
impl SingleTokenArg for ViewArg {
    fn accepts(value: &str) -> bool {
        ViewScope::try_from(value).is_ok()
    }
    fn new(value: &str) -> Result<Arg> {
        Ok(Arg::View(ViewScope::try_from(value)?))
    }
}

pub struct FlagArg;
impl SingleTokenArg for FlagArg {
    fn accepts(value: &str) -> bool {
        Flag::try_from(value).is_ok()
    }
    fn new(value: &str) -> Result<Arg> {
        Ok(Arg::Flag(Flag::try_from(value).map_err(|_| {
            Error::Parse(format!(
                "Invalid flag: {}. Valid flags: {}",
                value,
                valid_csv::<Flag>()
            ))
        })?))
    }
}

pub struct IntArg;
impl SingleTokenArg for IntArg {
    fn accepts(value: &str) -> bool {
        !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
    }
    fn new(value: &str) -> Result<Arg> {
        value
            .parse::<i32>()
            .map(Arg::Int)
            .map_err(|_| Error::Parse(format!("Expected an integer, got '{}'", value)))
    }
}
