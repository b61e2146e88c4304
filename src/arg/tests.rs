use super::{arg_extractor::*, arg_matcher::*, arg_parser::*, args::*};
use crate::arg::arg_parse_strategy::{
    ArgParseStrategy, CommandArgParser, ConfigArgParser, ManArgParser,
};
use crate::core::types::{Day, EntityType, Period, Program, ProgramTag, ViewScope};
use crate::errors::Error;
use crate::extensions::enums::valid_csv;

fn toks(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

// ---------- args.rs ----------
#[test]
fn token_stream_walks_tokens() {
    let raw = toks(&["one", "two"]);
    let mut ts = TokenStream::new(&raw);
    assert!(!ts.eof());
    assert_eq!(ts.peek().unwrap(), "one");
    assert_eq!(ts.next().unwrap(), "one");
    assert_eq!(ts.peek().unwrap(), "two");
    assert_eq!(ts.next().unwrap(), "two");
    assert!(ts.eof());
    assert!(ts.peek().is_err());
}

#[test]
fn name_arg_requires_quotes_and_strips_them() {
    let raw = "\"Anna Lee\"";
    assert!(NameArg::accepts(raw));
    match NameArg::new(raw).unwrap() {
        Arg::Name(s) => assert_eq!(s, "Anna Lee"),
        _ => panic!("expected name arg"),
    }
    assert!(!NameArg::accepts("NoQuotes"));
    assert!(!NameArg::accepts("\"  \""));
    assert!(NameArg::new("NoQuotes").is_err());
}

#[test]
fn programs_arg_accepts_lists() {
    assert!(ProgramsArg::starts_sequence("IEP,"));
    assert!(ProgramsArg::starts_sequence("tep+"));
    assert!(!ProgramsArg::starts_sequence("XYZ"));

    match ProgramsArg::new("IEP, SMEP+").unwrap() {
        Arg::Programs(ps) => assert_eq!(ps, vec![Program::Iep, Program::SmepPlus]),
        _ => panic!("expected programs"),
    }
    assert!(!ProgramsArg::accepts("IEP,"));
    assert!(ProgramsArg::new("IEP, foo").is_err());
}

#[test]
fn room_arg_needs_a_slash() {
    assert!(RoomArg::accepts("P4/1"));
    assert!(!RoomArg::accepts("P4"));
    assert!(!RoomArg::accepts("/1"));
    assert!(!RoomArg::accepts("P4/"));
    assert!(!RoomArg::accepts("P6/1,2"));
    assert!(RoomArg::new("Gym").is_err());
    assert_eq!(RoomArg::new("P6/13").unwrap(), Arg::Room("P6/13".into()));
}

#[test]
fn day_and_dash_args_parse() {
    assert_eq!(DayArg::new("mon").unwrap(), Arg::Day(Day::Monday));
    assert_eq!(DayArg::new("Friday").unwrap(), Arg::Day(Day::Friday));
    assert!(!DayArg::accepts("sat"));
    assert!(DashArg::accepts("-"));
    assert!(!DashArg::accepts("--"));
}

#[test]
fn factories_parse_single_and_multi_token_args() {
    let mut ts = TokenStream::new(&toks(&["\"Sample", "Teacher\""]));
    let name_factory = MultiTokenFactory::<NameArg>::new();
    assert!(name_factory.can_start("\"Sample"));
    let arg = name_factory.parse(&mut ts).unwrap();
    assert!(matches!(arg, Arg::Name(ref s) if s == "Sample Teacher"));

    let mut ts = TokenStream::new(&toks(&["IEP,", "EEP"]));
    let programs = MultiTokenFactory::<ProgramsArg>::new();
    assert_eq!(
        programs.parse(&mut ts).unwrap(),
        Arg::Programs(vec![Program::Iep, Program::Eep])
    );
}

#[test]
fn entity_and_view_args_parse() {
    assert!(EntityTypeArg::accepts("teacher"));
    assert_eq!(
        EntityTypeArg::new("Room").unwrap(),
        Arg::EntityType(EntityType::Room)
    );
    assert_eq!(ViewArg::new("grade").unwrap(), Arg::View(ViewScope::Grade));
    assert!(!ViewArg::accepts("teacher"));
}

// ---------- arg_parser.rs ----------
#[test]
fn parses_assign_sequence() {
    let parser = ArgParser::new();
    let raw = toks(&["P4/1", "mon", "3", "\"Anna", "Lee\"", "EEP"]);

    let args = parser.parse(&raw).expect("parse should succeed");
    assert_eq!(
        args,
        vec![
            Arg::Room("P4/1".into()),
            Arg::Day(Day::Monday),
            Arg::Int(3),
            Arg::Name("Anna Lee".into()),
            Arg::Programs(vec![Program::Eep]),
        ]
    );
}

#[test]
fn parses_day_batch_sequence() {
    let parser = ArgParser::new();
    let raw = toks(&["P4/1", "tue", "ALL", "1", "\"Dao\"", "2", "-", "-h"]);
    let args = parser.parse(&raw).unwrap();
    assert_eq!(args[2], Arg::AllPrograms);
    assert_eq!(args[4], Arg::Name("Dao".into()));
    assert_eq!(args[6], Arg::Dash);
    assert!(matches!(args[7], Arg::Flag(_)));
}

#[test]
fn errors_on_unrecognized_argument() {
    let parser = ArgParser::new();
    let err = parser.parse(&toks(&["Anna"])).unwrap_err();
    match err {
        Error::Parse(msg) => {
            assert!(msg.contains("Unrecognized argument: 'Anna'"));
            assert!(msg.contains("wrap it in quotes"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

// ---------- arg_matcher.rs ----------
#[test]
fn matches_variant_checks_correct_type() {
    assert!(NameArg::matches_variant(&Arg::Name("x".into())));
    assert!(!NameArg::matches_variant(&Arg::Int(1)));
    assert!(RoomArg::matches_variant(&Arg::Room("P4/1".into())));
    assert!(ProgramTagArg::matches_variant(&Arg::AllPrograms));
    assert!(ProgramTagArg::matches_variant(&Arg::Programs(vec![Program::Tep])));
    assert!(!ProgramTagArg::matches_variant(&Arg::Programs(vec![
        Program::Tep,
        Program::Iep
    ])));
}

#[test]
fn expected_error_messages_are_descriptive() {
    match DayArg::expected_error(&Arg::Int(4)) {
        Error::Parse(msg) => {
            assert!(msg.contains("Expected a day, got 4"));
            assert!(msg.contains(&valid_csv::<Day>()));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
    match RoomArg::expected_error(&Arg::Name("Gym".into())) {
        Error::Parse(msg) => assert_eq!(msg, "Expected a room such as P4/1, got \"Gym\"."),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn period_arg_rejects_out_of_range() {
    match PeriodArg::expected_error(&Arg::Int(10)) {
        Error::Parse(msg) => assert!(msg.contains("Periods run from 1 to 9")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

// ---------- arg_extractor.rs ----------
#[test]
fn extract_at_returns_expected_variants() {
    let args = vec![
        Arg::Room("P5/2".into()),
        Arg::Day(Day::Wednesday),
        Arg::Int(9),
        Arg::Name("Ben".into()),
        Arg::AllPrograms,
    ];
    assert_eq!(extract_at::<RoomArg>(&args, 0).unwrap(), "P5/2");
    assert_eq!(extract_at::<DayArg>(&args, 1).unwrap(), Day::Wednesday);
    assert_eq!(extract_at::<PeriodArg>(&args, 2).unwrap(), Period::LAST);
    assert_eq!(extract_at::<NameArg>(&args, 3).unwrap(), "Ben");
    assert_eq!(extract_at::<ProgramTagArg>(&args, 4).unwrap(), ProgramTag::All);
}

#[test]
fn extract_at_errors_on_mismatch_or_missing() {
    let args = vec![Arg::Int(0)];
    assert!(matches!(
        extract_at::<PeriodArg>(&args, 0),
        Err(Error::Parse(_))
    ));
    assert!(matches!(extract_at::<NameArg>(&args, 0), Err(Error::Parse(_))));
    match extract_at::<NameArg>(&args, 3) {
        Err(Error::Parse(msg)) => assert_eq!(msg, "Missing argument at position 4."),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn extract_opt_is_none_past_end() {
    let args = vec![Arg::Programs(vec![Program::Eep])];
    assert_eq!(
        extract_opt::<ProgramTagArg>(&args, 0).unwrap(),
        Some(ProgramTag::Only(Program::Eep))
    );
    assert_eq!(extract_opt::<ProgramTagArg>(&args, 1).unwrap(), None);
}

// ---------- arg_parse_strategy.rs ----------
#[test]
fn command_arg_parser_uses_default_parser() {
    let parser = CommandArgParser::new();
    let args = parser.parse("assign", &toks(&["P4/1", "fri", "2"])).unwrap();
    assert_eq!(args[0], Arg::Room("P4/1".into()));
}

#[test]
fn command_arg_parser_uses_config_parser() {
    let parser = CommandArgParser::new();
    let args = parser
        .parse("CONFIG", &toks(&["CELL_CAPACITY", "3"]))
        .unwrap();
    assert_eq!(
        args,
        vec![Arg::Name("CELL_CAPACITY".into()), Arg::Name("3".into())]
    );
}

#[test]
fn config_arg_parser_strips_quotes() {
    let args = ConfigArgParser
        .parse(&toks(&["\"AVAILABILITY_POLICY\"", "open"]))
        .unwrap();
    assert_eq!(args[0], Arg::Name("AVAILABILITY_POLICY".into()));
    assert_eq!(args[1], Arg::Name("open".into()));
}

#[test]
fn man_arg_parser_returns_empty_when_no_args() {
    let args = ManArgParser.parse(&[]).unwrap();
    assert!(args.is_empty());
}

#[test]
fn man_arg_parser_joins_multiple_tokens() {
    let parser = CommandArgParser::new();
    let args = parser.parse("man", &toks(&["\"day", "batch\""])).unwrap();
    match &args[..] {
        [Arg::Name(name)] => assert_eq!(name, "day batch"),
        other => panic!("expected single name arg, got {other:?}"),
    }
}
