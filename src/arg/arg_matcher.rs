use crate::arg::args::{
    AllProgramsArg, Arg, DashArg, DayArg, EntityTypeArg, FlagArg, IntArg, NameArg, ProgramsArg,
    RoomArg, ViewArg,
};
use crate::core::types::{Day, EntityType, Flag, Program, ViewScope};
use crate::errors::Error;
use crate::extensions::enums::valid_csv;

pub trait ArgMatcher {
    fn matches_variant(actual: &Arg) -> bool;
    fn expected_error(provided: &Arg) -> Error;
}

impl ArgMatcher for NameArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::Name(_))
    }
    fn expected_error(provided: &Arg) -> Error {
        Error::Parse(format!("Expected a quoted name, got {}", provided))
    }
}

impl ArgMatcher for IntArg {
    fn matches_variant(a: &Arg) -> bool {
        matches!(a, Arg::Int(_))
    }
    fn expected_error(provided: &Arg) -> Error {
        Error::Parse(format!("Expected an integer, got {}", provided))
    }
}

impl ArgMatcher for FlagArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::Flag(_))
    }
    fn expected_error(provided: &Arg) -> Error {
        Error::Parse(format!(
            "Expected a flag, got {}. Valid flags: {}",
            provided,
            valid_csv::<Flag>()
        ))
    }
}

impl ArgMatcher for DashArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::Dash)
    }
    fn expected_error(provided: &Arg) -> Error {
        Error::Parse(format!("Expected '-', got {}.", provided))
    }
}

impl ArgMatcher for DayArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::Day(_))
    }
    fn expected_error(provided: &Arg) -> Error {
        Error::Parse(format!(
            "Expected a day, got {}. Valid days: {}",
            provided,
            valid_csv::<Day>()
        ))
    }
}

impl ArgMatcher for ProgramsArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::Programs(_))
    }
    fn expected_error(provided: &Arg) -> Error {
        Error::Parse(format!(
            "Expected one or more programs, got {}. Valid programs: {}",
            provided,
            valid_csv::<Program>()
        ))
    }
}

impl ArgMatcher for AllProgramsArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::AllPrograms)
    }
    fn expected_error(provided: &Arg) -> Error {
        Error::Parse(format!("Expected ALL, got {}.", provided))
    }
}

impl ArgMatcher for RoomArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::Room(_))
    }
    fn expected_error(provided: &Arg) -> Error {
        Error::Parse(format!(
            "Expected a room such as P4/1, got {}.",
            provided
        ))
    }
}

impl ArgMatcher for EntityTypeArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::EntityType(_))
    }
    fn expected_error(provided: &Arg) -> Error {
        Error::Parse(format!(
            "Expected an entity type, got {}. Valid entity types: {}",
            provided,
            valid_csv::<EntityType>()
        ))
    }
}

impl ArgMatcher for ViewArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::View(_))
    }
    fn expected_error(provided: &Arg) -> Error {
        Error::Parse(format!(
            "Expected a view, got {}. Valid views: {}",
            provided,
            valid_csv::<ViewScope>()
        ))
    }
}
