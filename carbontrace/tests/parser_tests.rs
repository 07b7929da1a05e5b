//! Tests for BOM CSV parsing

use carbontrace::parser::bom::{BomParseError, BomParser};

#[test]
fn test_parse_well_formed_bom() {
    let text = "\
Part Number,Designator,Quantity
PN-100,R1,2
PN-200,C7,10
PN-300,U3,1
";
    let items = BomParser::parse_str(text).unwrap();

    assert_eq!(items.len(), 3, "one line item per data row");
    assert_eq!(items[0].part_number, "PN-100");
    assert_eq!(items[1].designator, "C7");
    assert_eq!(items[2].quantity, 1);
}

#[test]
fn test_order_matches_input_order() {
    let text = "Part Number,Designator,Quantity\nZ,U9,1\nA,R1,1\nM,C4,1\n";
    let items = BomParser::parse_str(text).unwrap();

    let parts: Vec<&str> = items.iter().map(|i| i.part_number.as_str()).collect();
    assert_eq!(parts, vec!["Z", "A", "M"], "BOM order must be preserved");
}

#[test]
fn test_columns_resolved_by_name_not_position() {
    // Same data, shuffled physical columns.
    let text = "Designator,Quantity,Part Number\nR1,2,PN-100\n";
    let items = BomParser::parse_str(text).unwrap();

    assert_eq!(items[0].part_number, "PN-100");
    assert_eq!(items[0].designator, "R1");
    assert_eq!(items[0].quantity, 2);
}

#[test]
fn test_header_match_is_case_insensitive() {
    let text = "PART NUMBER,designator,qUaNtItY\nPN-1,C2,4\n";
    let items = BomParser::parse_str(text).unwrap();

    assert_eq!(items[0].quantity, 4);
}

#[test]
fn test_quoted_fields_decode() {
    let text = "Part Number,Designator,Quantity\n\"PN,COMMA\",R1,2\n";
    let items = BomParser::parse_str(text).unwrap();

    assert_eq!(items[0].part_number, "PN,COMMA");
}

#[test]
fn test_missing_required_column_is_fatal() {
    let text = "Part Number,Designator\nPN-1,R1\n";
    let err = BomParser::parse_str(text).unwrap_err();

    assert!(matches!(err, BomParseError::MissingColumn("Quantity")));
    assert!(err.to_string().contains("Quantity"));
}

#[test]
fn test_short_row_is_fatal() {
    let text = "Part Number,Designator,Quantity\nPN-1,R1\n";
    let err = BomParser::parse_str(text).unwrap_err();

    assert!(matches!(err, BomParseError::MalformedRow { row: 2, .. }));
}

#[test]
fn test_non_numeric_quantity_is_fatal() {
    let text = "Part Number,Designator,Quantity\nPN-1,R1,two\n";
    let err = BomParser::parse_str(text).unwrap_err();

    assert!(matches!(err, BomParseError::BadQuantity { row: 2, .. }));
}

#[test]
fn test_negative_quantity_is_fatal() {
    let text = "Part Number,Designator,Quantity\nPN-1,R1,-2\n";
    let err = BomParser::parse_str(text).unwrap_err();

    assert!(matches!(err, BomParseError::BadQuantity { .. }));
}

#[test]
fn test_header_only_bom_is_empty() {
    let text = "Part Number,Designator,Quantity\n";
    let items = BomParser::parse_str(text).unwrap();

    assert!(items.is_empty());
}

#[test]
fn test_parse_nonexistent_file() {
    let result = BomParser::parse_file(std::path::Path::new("not_a_real_file.csv"));
    assert!(result.is_err(), "Should fail on nonexistent file");
}
