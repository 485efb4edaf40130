use cvdsim::util::*;

#[test]
fn test_string_is_valid_hex() {
    assert!(string_is_valid_hex("1a2B3c"));
    assert!(string_is_valid_hex("ff"));
    assert!(!string_is_valid_hex(""));
    assert!(!string_is_valid_hex("12g4"));
    assert!(!string_is_valid_hex("#ff0000"));
}

#[test]
fn test_parse_hex_color() {
    assert_eq!(parse_hex_color("#ff8000").unwrap(), (255, 128, 0));
    assert_eq!(parse_hex_color("FF8000").unwrap(), (255, 128, 0));
    assert_eq!(parse_hex_color("#000000").unwrap(), (0, 0, 0));

    assert!(parse_hex_color("#fff").is_err());
    assert!(parse_hex_color("ff80001").is_err());
    assert!(parse_hex_color("zzzzzz").is_err());
    assert!(parse_hex_color("").is_err());
}

#[test]
fn test_format_hex_color() {
    assert_eq!(format_hex_color((255, 128, 0)), "#ff8000");
    assert_eq!(format_hex_color((0, 0, 0)), "#000000");
}

#[test]
fn test_hex_round_trip() {
    let rgb = parse_hex_color("#1a2b3c").unwrap();
    assert_eq!(format_hex_color(rgb), "#1a2b3c");
}

#[test]
fn test_clamp_channel() {
    assert_eq!(clamp_channel(-20.0), 0);
    assert_eq!(clamp_channel(0.4), 0);
    assert_eq!(clamp_channel(127.5), 128);
    assert_eq!(clamp_channel(255.0), 255);
    assert_eq!(clamp_channel(279.03), 255);
}
