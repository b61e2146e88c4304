use super::{
    enums::valid_csv,
    string::{ToDashSeparators, grade_level, natural_cmp, natural_key},
};
use crate::core::types::{Day, Program};

#[test]
fn valid_csv_lists_enum_variants_as_strings() {
    let csv = valid_csv::<Program>();
    assert_eq!(csv, "IEP, EEP, TEP, TEP+, SMEP, SMEP+");

    let days = valid_csv::<Day>();
    assert!(days.contains("Monday"));
    assert!(days.contains("Friday"));
}

#[test]
fn to_dash_separators_replaces_and_trims() {
    let s = " P4/10 ";
    assert_eq!(s.to_dash_separators(), "P4-10");

    let owned = "a/b/c".to_string();
    assert_eq!(owned.to_dash_separators(), "a-b-c");
}

#[test]
fn natural_key_splits_prefix_and_number() {
    assert_eq!(natural_key("P4/10"), ("P4".to_string(), 10));
    assert_eq!(natural_key("Lab"), ("Lab".to_string(), 0));
    assert_eq!(natural_key("P5/x"), ("P5".to_string(), 0));
}

#[test]
fn natural_cmp_orders_numeric_suffixes() {
    let mut rooms = vec!["P4/10", "P5/1", "P4/2", "P4/1"];
    rooms.sort_by(|a, b| natural_cmp(a, b));
    assert_eq!(rooms, vec!["P4/1", "P4/2", "P4/10", "P5/1"]);
}

#[test]
fn grade_level_is_prefix_before_slash() {
    assert_eq!(grade_level("P4/10"), "P4");
    assert_eq!(grade_level("Gym"), "Gym");
}
