//! Tests for coefficient table loading and matching

use carbontrace::emissions::matcher::{CoefficientMatcher, MatchError, MatchMode};
use carbontrace::emissions::table::EmissionsTable;
use carbontrace::parser::schema::BomLineItem;

fn item(part_number: &str, designator: &str, quantity: u32) -> BomLineItem {
    BomLineItem {
        part_number: part_number.to_string(),
        designator: designator.to_string(),
        quantity,
    }
}

#[test]
fn test_table_parse_headerless() {
    let text = "PN-1,0.5\nPN-2,1.2\n";
    let table = EmissionsTable::parse(text, false).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.get("PN-1"), Some("0.5"));
    assert_eq!(table.get("PN-2"), Some("1.2"));
}

#[test]
fn test_table_parse_skips_header_row() {
    let text = "Category,Coefficient\nR,0.5\nC,1.2\n";
    let table = EmissionsTable::parse(text, true).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.get("Category"), None, "header row must not be an entry");
    assert_eq!(table.get("R"), Some("0.5"));
}

#[test]
fn test_table_duplicate_keys_last_write_wins() {
    let text = "PN-1,0.5\nPN-1,9.9\n";
    let table = EmissionsTable::parse(text, false).unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.get("PN-1"), Some("9.9"));
}

#[test]
fn test_table_parse_is_idempotent() {
    let text = "PN-1,0.5\nPN-2,1.2\nPN-1,0.7\n";
    let first = EmissionsTable::parse(text, false).unwrap();
    let second = EmissionsTable::parse(text, false).unwrap();

    assert_eq!(first, second, "same text must yield the same mapping");
}

#[test]
fn test_table_short_record_is_fatal() {
    let text = "PN-1,0.5\nPN-2\n";
    let result = EmissionsTable::parse(text, false);

    assert!(result.is_err(), "a record with fewer than 2 fields is fatal");
}

#[test]
fn test_table_values_are_stored_raw() {
    // A space before the quote keeps the quote characters in the field;
    // the loader must not clean them up.
    let text = "PN-1, \"0.25\"\n";
    let table = EmissionsTable::parse(text, false).unwrap();

    assert_eq!(table.get("PN-1"), Some(" \"0.25\""));
}

#[test]
fn test_part_number_match_strips_quotes() {
    let table: EmissionsTable = [("PN-1".to_string(), " \"0.25\"".to_string())]
        .into_iter()
        .collect();
    let matcher = CoefficientMatcher::new(table, MatchMode::PartNumber);

    let coefficient = matcher.coefficient_for(&item("PN-1", "R1", 4)).unwrap();
    assert_eq!(coefficient, 0.25);
}

#[test]
fn test_part_number_miss_is_zero_not_error() {
    let table: EmissionsTable = [("PN-1".to_string(), "0.5".to_string())]
        .into_iter()
        .collect();
    let matcher = CoefficientMatcher::new(table, MatchMode::PartNumber);

    let coefficient = matcher.coefficient_for(&item("UNKNOWN", "R1", 4)).unwrap();
    assert_eq!(coefficient, 0.0);
}

#[test]
fn test_designator_match_uses_category() {
    let table: EmissionsTable = [
        ("R".to_string(), "0.5".to_string()),
        ("C".to_string(), "1.2".to_string()),
    ]
    .into_iter()
    .collect();
    let matcher = CoefficientMatcher::new(table, MatchMode::Designator);

    assert_eq!(matcher.coefficient_for(&item("P1", "R101", 1)).unwrap(), 0.5);
    assert_eq!(matcher.coefficient_for(&item("P2", "C220", 1)).unwrap(), 1.2);
}

#[test]
fn test_designator_miss_is_zero_not_error() {
    let table: EmissionsTable = [("R".to_string(), "0.5".to_string())].into_iter().collect();
    let matcher = CoefficientMatcher::new(table, MatchMode::Designator);

    let coefficient = matcher.coefficient_for(&item("P1", "U3", 2)).unwrap();
    assert_eq!(coefficient, 0.0);
}

#[test]
fn test_designator_without_prefix_is_fatal() {
    let table = EmissionsTable::default();
    let matcher = CoefficientMatcher::new(table, MatchMode::Designator);

    let err = matcher.coefficient_for(&item("P1", "101", 1)).unwrap_err();
    assert!(matches!(err, MatchError::UnclassifiableDesignator(_)));
}

#[test]
fn test_unparseable_coefficient_is_fatal() {
    let table: EmissionsTable = [("PN-1".to_string(), "n/a".to_string())]
        .into_iter()
        .collect();
    let matcher = CoefficientMatcher::new(table, MatchMode::PartNumber);

    let err = matcher.coefficient_for(&item("PN-1", "R1", 1)).unwrap_err();
    assert!(matches!(err, MatchError::BadCoefficient { .. }));
}

#[test]
fn test_mode_decides_source_header() {
    assert!(!MatchMode::PartNumber.table_has_header());
    assert!(MatchMode::Designator.table_has_header());
}
