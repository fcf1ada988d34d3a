use super::*;

#[test]
fn file_size_zero() {
    assert_eq!(format_file_size(0), "0 Bytes");
}

#[test]
fn file_size_bytes_and_kilobytes() {
    assert_eq!(format_file_size(500), "500 Bytes");
    assert_eq!(format_file_size(1024), "1 KB");
    assert_eq!(format_file_size(1536), "1.5 KB");
}

#[test]
fn file_size_rounds_to_two_decimals() {
    assert_eq!(format_file_size(1_234_567), "1.18 MB");
    assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
}

#[test]
fn file_size_caps_at_gigabytes() {
    assert_eq!(format_file_size(2048 * 1024 * 1024 * 1024), "2048 GB");
}

#[test]
fn capitalize_first_letter() {
    assert_eq!(capitalize("pending"), "Pending");
    assert_eq!(capitalize(""), "");
}
