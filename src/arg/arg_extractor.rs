use crate::arg::arg_matcher::ArgMatcher;
use crate::arg::args::{
    AllProgramsArg, Arg, DashArg, DayArg, EntityTypeArg, IntArg, NameArg, ProgramsArg, RoomArg,
    ViewArg,
};
use crate::core::types::{Day, EntityType, Period, Program, ProgramTag, ViewScope};
use crate::errors::{Error, Result};

pub trait ArgExtractor<'a>: ArgMatcher {
    type Out;

    fn try_extract(actual: &'a Arg) -> Option<Self::Out>;
}

/// The argument at `idx` as `E`, or a parse error naming what was expected.
pub fn extract_at<'a, E: ArgExtractor<'a>>(args: &'a [Arg], idx: usize) -> Result<E::Out> {
    let a = args.get(idx).ok_or_else(|| {
        Error::Parse(format!("Missing argument at position {}.", idx + 1))
    })?;
    E::try_extract(a).ok_or_else(|| E::expected_error(a))
}

/// Like `extract_at`, but `None` when the position is past the end.
pub fn extract_opt<'a, E: ArgExtractor<'a>>(
    args: &'a [Arg],
    idx: usize,
) -> Result<Option<E::Out>> {
    if idx >= args.len() {
        return Ok(None);
    }
    extract_at::<E>(args, idx).map(Some)
}

impl<'a> ArgExtractor<'a> for NameArg {
    type Out = &'a String;
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::Name(s) => Some(s),
            _ => None,
        }
    }
}

impl<'a> ArgExtractor<'a> for IntArg {
    type Out = i32;
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl<'a> ArgExtractor<'a> for DashArg {
    type Out = ();
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        DashArg::matches_variant(a).then_some(())
    }
}

impl<'a> ArgExtractor<'a> for DayArg {
    type Out = Day;
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::Day(d) => Some(*d),
            _ => None,
        }
    }
}

impl<'a> ArgExtractor<'a> for ProgramsArg {
    type Out = &'a Vec<Program>;
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::Programs(v) => Some(v),
            _ => None,
        }
    }
}

impl<'a> ArgExtractor<'a> for AllProgramsArg {
    type Out = ();
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        AllProgramsArg::matches_variant(a).then_some(())
    }
}

impl<'a> ArgExtractor<'a> for RoomArg {
    type Out = &'a String;
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::Room(r) => Some(r),
            _ => None,
        }
    }
}

impl<'a> ArgExtractor<'a> for EntityTypeArg {
    type Out = EntityType; // Copy
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::EntityType(t) => Some(*t),
            _ => None,
        }
    }
}

impl<'a> ArgExtractor<'a> for ViewArg {
    type Out = ViewScope; // Copy
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::View(v) => Some(*v),
            _ => None,
        }
    }
}

/// A period number, checked against the grid.
pub struct PeriodArg;

impl ArgMatcher for PeriodArg {
    fn matches_variant(actual: &Arg) -> bool {
        IntArg::matches_variant(actual)
    }
    fn expected_error(provided: &Arg) -> Error {
        match provided {
            Arg::Int(n) => match Period::new(*n as i64) {
                Err(e) => e,
                Ok(_) => Error::Parse(format!("Unexpected period {n}.")),
            },
            other => Error::Parse(format!("Expected a period number 1-9, got {}", other)),
        }
    }
}

impl<'a> ArgExtractor<'a> for PeriodArg {
    type Out = Period;
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::Int(n) => Period::new(*n as i64).ok(),
            _ => None,
        }
    }
}

/// A single program or ALL.
pub struct ProgramTagArg;

impl ArgMatcher for ProgramTagArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::AllPrograms)
            || matches!(actual, Arg::Programs(ps) if ps.len() == 1)
    }
    fn expected_error(provided: &Arg) -> Error {
        Error::Parse(format!(
            "Expected one program or {}, got {}.",
            ProgramTag::ALL_LABEL,
            provided
        ))
    }
}

impl<'a> ArgExtractor<'a> for ProgramTagArg {
    type Out = ProgramTag;
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::AllPrograms => Some(ProgramTag::All),
            Arg::Programs(ps) if ps.len() == 1 => Some(ProgramTag::Only(ps[0])),
            _ => None,
        }
    }
}

/// A room written bare (P4/1) or quoted ("Gym").
pub struct RoomRefArg;

impl ArgMatcher for RoomRefArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::Room(_) | Arg::Name(_))
    }
    fn expected_error(provided: &Arg) -> Error {
        RoomArg::expected_error(provided)
    }
}

impl<'a> ArgExtractor<'a> for RoomRefArg {
    type Out = &'a String;
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::Room(r) | Arg::Name(r) => Some(r),
            _ => None,
        }
    }
}
