// Host-side tests for scale-degree classification and palettes.

use fretboard_core::*;

fn e_major() -> Vec<String> {
    ["E", "F#", "G#", "A", "B", "C#", "D#"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[test]
fn positional_degrees_of_a_diatonic_scale() {
    let scale = e_major();
    assert_eq!(classify(&scale[0], &scale), Degree::Root);
    assert_eq!(classify(&scale[2], &scale), Degree::Third);
    assert_eq!(classify(&scale[4], &scale), Degree::Fifth);
    assert_eq!(classify(&scale[6], &scale), Degree::Seventh);
    for idx in [1, 3, 5] {
        assert_eq!(classify(&scale[idx], &scale), Degree::Other, "index {idx}");
    }
}

#[test]
fn octave_suffix_is_ignored() {
    let scale = e_major();
    assert_eq!(classify("E2", &scale), Degree::Root);
    assert_eq!(classify("E4", &scale), Degree::Root);
    assert_eq!(classify("G#3", &scale), Degree::Third);
    assert_eq!(classify("D#-1", &scale), Degree::Seventh);
}

#[test]
fn enharmonic_spellings_match() {
    let bb_major = ["Bb", "C", "D", "Eb", "F", "G", "A"];
    assert_eq!(classify("A#4", &bb_major), Degree::Root);
    assert_eq!(classify("A#", &bb_major), Degree::Root);
    assert_eq!(classify("D#3", &bb_major), Degree::Other);
    assert_eq!(classify("F5", &bb_major), Degree::Fifth);
}

#[test]
fn short_and_empty_scales() {
    let pentatonic = ["A", "C", "D", "E", "G"];
    assert_eq!(classify("A", &pentatonic), Degree::Root);
    assert_eq!(classify("D", &pentatonic), Degree::Third);
    assert_eq!(classify("G", &pentatonic), Degree::Fifth);
    // no seventh entry in a five-note scale
    assert_eq!(classify("G#", &pentatonic), Degree::Other);

    let empty: [&str; 0] = [];
    assert_eq!(classify("E", &empty), Degree::Other);
    assert_eq!(classify("", &e_major()), Degree::Other);
}

#[test]
fn unparseable_names_compare_as_text() {
    let odd = ["X1", "Y", "Z"];
    assert_eq!(classify("X", &odd), Degree::Root);
    assert_eq!(classify("Z7", &odd), Degree::Third);
    assert_eq!(classify("Q", &odd), Degree::Other);
}

#[test]
fn color_lookup_by_degree() {
    let map = DegreeColorMap::default();
    assert_eq!(color_for(Degree::Root, &map), map.root);
    assert_eq!(color_for(Degree::Seventh, &map), map.seventh);
    assert_eq!(color_for(Degree::Other, &map), Color::from_array(OTHER_COLOR));
    assert_eq!(map.empty_color(), Color::from_array(EMPTY_COLOR));
}

struct PartialTheme;

impl ThemeProvider for PartialTheme {
    fn swatch(&self, degree: Degree) -> Option<Color> {
        match degree {
            Degree::Root => Some(Color::rgb(255, 0, 0)),
            Degree::Fifth => Some(Color::rgb(0, 0, 255)),
            _ => None,
        }
    }
}

#[test]
fn theme_swatches_override_fallbacks() {
    let map = DegreeColorMap::from_theme(&PartialTheme);
    let fallback = DegreeColorMap::default();
    assert_eq!(map.root, Color::rgb(255, 0, 0));
    assert_eq!(map.fifth, Color::rgb(0, 0, 255));
    assert_eq!(map.third, fallback.third);
    assert_eq!(map.seventh, fallback.seventh);
    assert_eq!(map.other, fallback.other);
}

#[test]
fn css_color_parsing() {
    assert_eq!(Color::parse_css("#fff"), Some(Color::rgb(255, 255, 255)));
    assert_eq!(Color::parse_css("#e04f5f"), Some(Color::rgb(0xe0, 0x4f, 0x5f)));
    assert_eq!(Color::parse_css("rgb(1, 2, 3)"), Some(Color::rgb(1, 2, 3)));
    assert_eq!(Color::parse_css("rgba(10, 20, 30, 0.5)"), Some(Color::rgb(10, 20, 30)));
    assert_eq!(Color::parse_css("rgb(10 20 30 / 1)"), Some(Color::rgb(10, 20, 30)));
    assert_eq!(Color::parse_css("rgba(0, 0, 0, 0)"), None);
    assert_eq!(Color::parse_css("transparent"), None);
    assert_eq!(Color::parse_css("#12345"), None);
    assert_eq!(Color::rgb(0xe0, 0x4f, 0x5f).to_css(), "#e04f5f");
}

#[test]
fn colors_wrap_srgb() {
    let c = Color::from(palette::Srgb::new(0x12u8, 0x34, 0x56));
    assert_eq!(c, Color::rgb(0x12, 0x34, 0x56));
    assert_eq!(c.0.green, 0x34);
    assert_eq!(c.to_string(), "#123456");
    assert_eq!(Color::parse_css("  #123456 "), Some(c));
    // bare hex is not a computed-style form
    assert_eq!(Color::parse_css("123456"), None);
    assert_eq!(Color::parse_css("rgb(1, 2)"), None);
    assert_eq!(Color::parse_css("rgb(300, -4, 2.6)"), Some(Color::rgb(255, 0, 3)));
}
