mod common;

use cvdsim::cvd::DeficiencyType;
use cvdsim::palette::{Palette, SimulationRecord};

#[test]
fn test_palette_hex_parsing() {
    let p = Palette::from_hex_strings(&["#1a2b3c", "FF8000"]).unwrap();
    assert_eq!(p.len(), 2);
    assert_eq!(p.colors[0].to_rgb8().unwrap(), (0x1a, 0x2b, 0x3c));
    assert_eq!(p.colors[1].to_rgb8().unwrap(), (255, 128, 0));

    assert!(Palette::from_hex_strings(&["#1a2b3"]).is_err());
    assert!(Palette::from_hex_strings(&["#1a2b3g"]).is_err());
    assert!(Palette::from_hex_strings(&["1a2b3c4d"]).is_err());
}

#[test]
fn test_palette_set_line_round_trip() {
    let p = Palette::from_set_line("1a2b3c ff8000 000000").unwrap();
    assert_eq!(p.len(), 3);
    assert_eq!(p.to_set_line().unwrap(), "#1a2b3c #ff8000 #000000");

    assert!(Palette::from_set_line("   ").is_err());
}

#[test]
fn test_palette_simulate_matches_per_color_transform() {
    let p = Palette::from_hex_strings(&["#ff0000", "#00ff00", "#0000ff"]).unwrap();
    let s = p.simulate(DeficiencyType::Deuteranomaly, 80).unwrap();
    assert_eq!(s.len(), p.len());

    for (original, simulated) in p.colors.iter().zip(s.colors.iter()) {
        let expected = cvdsim::cvd::simulate(original, DeficiencyType::Deuteranomaly, 80).unwrap();
        assert_eq!(simulated.value, expected.value);
    }
}

#[test]
fn test_palette_simulate_zero_severity_preserves_set() {
    let p = Palette::from_set_line("123456 abcdef").unwrap();
    let s = p.simulate(DeficiencyType::Protanomaly, 0).unwrap();
    assert_eq!(s.to_set_line().unwrap(), "#123456 #abcdef");
}

#[test]
fn test_sort_hue_chroma_luminance() {
    // Raw atan2 hue keys: blue is negative, red slightly positive, green
    // largest
    let p = Palette::from_hex_strings(&["#00ff00", "#ff0000", "#0000ff"]).unwrap();
    let sorted = p.sort_hue_chroma_luminance().unwrap();
    assert_eq!(
        sorted.to_set_line().unwrap(),
        "#0000ff #ff0000 #00ff00"
    );
}

#[test]
fn test_sort_is_stable_for_identical_colors() {
    let p = Palette::from_set_line("808080 808080").unwrap();
    let sorted = p.sort_hue_chroma_luminance().unwrap();
    assert_eq!(sorted.to_set_line().unwrap(), "#808080 #808080");
}

#[test]
fn test_min_simulated_distance_separates_distinct_colors() {
    let p = Palette::from_hex_strings(&["#ff0000", "#0000ff"]).unwrap();
    let dist = p.min_simulated_distance(100).unwrap();
    assert!(dist > 10.0);
}

#[test]
fn test_min_simulated_distance_zero_for_duplicates() {
    let p = Palette::from_hex_strings(&["#ff0000", "#ff0000", "#0000ff"]).unwrap();
    let dist = p.min_simulated_distance(50).unwrap();
    assert_delta!(dist, 0.0, 1e-9);
}

#[test]
fn test_min_simulated_distance_input_validation() {
    let single = Palette::from_hex_strings(&["#ff0000"]).unwrap();
    assert!(single.min_simulated_distance(100).is_err());

    let p = Palette::from_hex_strings(&["#ff0000", "#0000ff"]).unwrap();
    assert!(p.min_simulated_distance(0).is_err());
}

#[test]
fn test_simulation_record_round_trip() {
    let p = Palette::from_hex_strings(&["#ff0000", "#00ff00"]).unwrap();
    let record = SimulationRecord::new(&p, DeficiencyType::Tritanomaly, 60).unwrap();
    assert_eq!(record.severity, 60);
    assert_eq!(record.colors.len(), 2);
    assert_eq!(
        record.colors,
        p.simulate(DeficiencyType::Tritanomaly, 60)
            .unwrap()
            .to_hex_strings()
            .unwrap()
    );

    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains("\"tritanomaly\""));

    let parsed: SimulationRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.deficiency, DeficiencyType::Tritanomaly);
    assert_eq!(parsed.colors, record.colors);
    assert_eq!(parsed.to_palette().unwrap().len(), 2);
}
