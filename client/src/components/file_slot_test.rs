use super::*;

#[test]
fn filled_wins_over_missing() {
    assert_eq!(zone_class(true, true), "file-slot file-slot--filled");
    assert_eq!(zone_class(true, false), "file-slot file-slot--filled");
}

#[test]
fn missing_marks_empty_zone() {
    assert_eq!(zone_class(false, true), "file-slot file-slot--missing");
    assert_eq!(zone_class(false, false), "file-slot");
}
