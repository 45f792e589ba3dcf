use super::*;

#[test]
fn format_short_es_handles_rfc3339() {
    assert_eq!(format_short_es("2024-01-05T10:30:00Z"), "05 ene 2024");
    assert_eq!(format_short_es("2023-12-31T23:00:00-05:00"), "31 dic 2023");
}

#[test]
fn format_short_es_handles_naive_timestamps_and_dates() {
    assert_eq!(format_short_es("2024-09-15T08:00:00.123456"), "15 sept 2024");
    assert_eq!(format_short_es("2024-09-15 08:00:00"), "15 sept 2024");
    assert_eq!(format_short_es("2024-03-01"), "01 mar 2024");
}

#[test]
fn format_short_es_renders_empty_for_garbage() {
    assert_eq!(format_short_es("mañana"), "");
    assert_eq!(format_short_es(""), "");
    assert_eq!(format_short_es("2024-13-40"), "");
}
