use super::{place, sample_timetable};
use crate::config::Config;
use crate::core::availability::available_teachers;
use crate::core::edit::{EditRules, EditSession, Proposal};
use crate::core::types::{AvailabilityPolicy, Day, Period, Program, ProgramTag};
use crate::core::workload::workload;
use crate::errors::Error;
use crate::ui::display_data::{DisplayDataBuilder, WORKLOAD_BAR_SCALE, workload_bar};

fn p(n: i64) -> Period {
    Period::new(n).unwrap()
}

#[test]
fn grid_headers_put_breaks_between_periods() {
    let headers = DisplayDataBuilder::new().grid_headers(&["DAY"]);
    assert_eq!(
        headers,
        vec![
            "DAY", "1 08:15", "2 09:00", "15 min", "3 10:00", "4 10:45", "Lunch", "5 12:20",
            "6 13:05", "10 min", "7 14:00", "8 14:45", "15 min", "9 15:45",
        ]
    );
}

#[test]
fn room_rows_follow_header_columns() {
    let mut tt = sample_timetable();
    place(&mut tt, "P4/1", Day::Monday, 3, "Anna", ProgramTag::Only(Program::Iep));
    place(&mut tt, "P4/1", Day::Monday, 3, "Ben", ProgramTag::Only(Program::Eep));

    let rows = DisplayDataBuilder::new()
        .room_grid_rows(&tt, "P4/1", None)
        .unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].len(), 14);
    assert_eq!(rows[0][0], "MON");
    assert_eq!(rows[0][4], "Math [IEP] (Anna) / Science [EEP] (Ben)");
    assert_eq!(rows[0][3], "");
    assert_eq!(rows[1][4], "-");
}

#[test]
fn program_filter_keeps_matching_and_all_entries() {
    let mut tt = sample_timetable();
    place(&mut tt, "P4/1", Day::Friday, 1, "Anna", ProgramTag::Only(Program::Iep));
    place(&mut tt, "P4/1", Day::Friday, 1, "Ben", ProgramTag::Only(Program::Eep));
    place(&mut tt, "P4/1", Day::Friday, 2, "Carol", ProgramTag::All);

    let rows = DisplayDataBuilder::new()
        .room_grid_rows(&tt, "P4/1", Some(Program::Eep))
        .unwrap();
    assert_eq!(rows[4][1], "Science [EEP] (Ben)");
    assert_eq!(rows[4][2], "Art (Carol)");
}

#[test]
fn unknown_room_grid_is_an_error() {
    let tt = sample_timetable();
    assert!(matches!(
        DisplayDataBuilder::new().room_grid_rows(&tt, "P9/9", None),
        Err(Error::UnknownRoom(_))
    ));
}

#[test]
fn teacher_week_names_the_room() {
    let mut tt = sample_timetable();
    place(&mut tt, "P4/2", Day::Tuesday, 9, "Anna", ProgramTag::All);
    let rows = DisplayDataBuilder::new().teacher_week_rows(&tt, "Anna");
    assert_eq!(rows[1][13], "Math [ALL] @ P4/2");
    assert_eq!(rows[0][13], "-");
}

#[test]
fn grade_matrix_uses_natural_room_order() {
    let tt = sample_timetable();
    let rows = DisplayDataBuilder::new().grade_matrix_rows(&tt, "P4").unwrap();
    assert_eq!(rows.len(), 15);
    assert_eq!(rows[0][0], "P4/1 (IEP, EEP)");
    assert_eq!(rows[1][0], "");
    assert_eq!(rows[5][0], "P4/2 (IEP)");
    assert_eq!(rows[10][0], "P4/10 (IEP)");
}

#[test]
fn unknown_grade_lists_known_ones() {
    let tt = sample_timetable();
    match DisplayDataBuilder::new().grade_matrix_rows(&tt, "P7") {
        Err(Error::Domain(msg)) => assert!(msg.contains("Known grades: P4")),
        other => panic!("expected domain error, got {other:?}"),
    }
}

#[test]
fn teacher_rows_show_rooms_and_periods() {
    let mut tt = sample_timetable();
    place(&mut tt, "P4/1", Day::Monday, 1, "Ben", ProgramTag::All);
    place(&mut tt, "P4/1", Day::Monday, 2, "Ben", ProgramTag::All);
    let rows = DisplayDataBuilder::new().teacher_rows(&tt);
    let ben = rows.iter().find(|r| r[0] == "Ben").unwrap();
    assert_eq!(ben, &vec!["Ben", "Science", "P4/1", "2"]);
    let anna = rows.iter().find(|r| r[0] == "Anna").unwrap();
    assert_eq!(anna[3], "0");
}

#[test]
fn room_rows_count_filled_slots() {
    let mut tt = sample_timetable();
    place(&mut tt, "P4/2", Day::Monday, 1, "Anna", ProgramTag::All);
    let rows = DisplayDataBuilder::new().room_rows(&tt);
    let names: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(names, vec!["P4/1", "P4/2", "P4/10"]);
    assert_eq!(rows[1], vec!["P4/2", "P4", "IEP", "1"]);
}

#[test]
fn availability_rows_list_free_then_busy() {
    let mut tt = sample_timetable();
    place(&mut tt, "P4/2", Day::Monday, 4, "Carol", ProgramTag::All);
    let availability =
        available_teachers(&tt, "P4/1", Day::Monday, p(4), AvailabilityPolicy::Open);
    let rows = DisplayDataBuilder::new().availability_rows(&tt, &availability, Day::Monday, p(4));
    assert_eq!(rows[0], vec!["free", "Anna", "Math", ""]);
    assert_eq!(rows[1][1], "Ben");
    assert_eq!(rows[2], vec!["busy", "Carol", "Art", "P4/2"]);
}

#[test]
fn workload_rows_rank_and_draw_bars() {
    let mut tt = sample_timetable();
    place(&mut tt, "P4/2", Day::Monday, 1, "Carol", ProgramTag::All);
    let rows = DisplayDataBuilder::new().workload_rows(&workload(&tt, None));
    assert_eq!(rows[0][0], "1");
    assert_eq!(rows[0][1], "Carol");
    assert_eq!(rows[0][3], workload_bar(1));
}

#[test]
fn workload_bar_is_capped() {
    assert_eq!(workload_bar(0).len(), WORKLOAD_BAR_SCALE + 2);
    assert!(workload_bar(2).starts_with("[##."));
    assert_eq!(workload_bar(99), format!("[{}]", "#".repeat(WORKLOAD_BAR_SCALE)));
}

#[test]
fn pending_rows_list_batch_and_warnings() {
    let mut tt = sample_timetable();
    place(&mut tt, "P4/2", Day::Monday, 1, "Anna", ProgramTag::All);
    place(&mut tt, "P4/2", Day::Monday, 2, "Anna", ProgramTag::All);
    let rules = EditRules {
        capacity: 2,
        threshold: 3,
        policy: AvailabilityPolicy::Open,
    };
    let mut session = EditSession::new();
    let proposal = Proposal::Single {
        room: "P4/1".into(),
        day: Day::Monday,
        period: p(3),
        teacher: "Anna".into(),
        program: ProgramTag::All,
    };
    session.propose(&tt, proposal, &rules).unwrap();

    let rows = DisplayDataBuilder::new().pending_rows(session.pending().unwrap());
    assert_eq!(rows[0][0], "proposal");
    assert_eq!(rows[1][0], "warning");
    assert!(rows[1][1].contains("3 consecutive periods"));
}

#[test]
fn config_rows_follow_key_order() {
    let dir = std::env::temp_dir().join(format!(
        "timetable-ui-config-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let config = Config::load_or_init(dir.join("config.json")).unwrap();
    let rows = DisplayDataBuilder::new().config_rows(&config);
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0][0], "CELL_CAPACITY");
    assert_eq!(rows[0][2], "2");
}

#[test]
fn sections_cover_directory_and_grade() {
    let tt = sample_timetable();
    let builder = DisplayDataBuilder::new();
    let teachers = builder.teacher_sections(&tt);
    assert_eq!(teachers.len(), 3);
    assert!(teachers[1].title.starts_with("2. Ben (subject: Science"));

    let rooms = builder.grade_sections(&tt, "P4").unwrap();
    assert_eq!(rooms.len(), 3);
    assert_eq!(rooms[2].title, "Room P4/10 (programs: IEP)");
    assert_eq!(rooms[0].rows.len(), 5);
}
