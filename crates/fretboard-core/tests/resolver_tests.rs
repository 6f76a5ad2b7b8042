// Host-side tests for the built-in scale/tuning resolver.

use fretboard_core::*;

#[test]
fn scale_notes_follow_intervals() {
    let r = TheoryResolver::new();
    assert_eq!(
        r.scale_notes("E", "major"),
        vec!["E", "F#", "G#", "A", "B", "C#", "D#"]
    );
    assert_eq!(
        r.scale_notes("A", "minor"),
        vec!["A", "B", "C", "D", "E", "F", "G"]
    );
    assert_eq!(r.scale_notes("Bb", "major pentatonic"), vec!["A#", "C", "D", "F", "G"]);
    assert_eq!(r.scale_notes("c", "Dorian")[2], "D#");
}

#[test]
fn unknown_key_or_scale_yields_no_notes() {
    let r = TheoryResolver::new();
    assert!(r.scale_notes("H", "major").is_empty());
    assert!(r.scale_notes("E", "hexatonic wobble").is_empty());
}

#[test]
fn catalogs() {
    let r = TheoryResolver::new();
    let keys = r.key_names();
    assert_eq!(keys.len(), 12);
    assert_eq!(keys[0], "C");
    assert_eq!(keys[11], "B");
    let scales = r.scale_names();
    assert_eq!(scales[0], "major");
    assert!(scales.iter().any(|s| s == "minor pentatonic"));
    for name in &scales {
        assert!(!r.scale_notes("C", name).is_empty(), "{name} resolves");
    }
    assert!(r.has_tuning("guitar"));
    assert!(r.has_tuning("Drop D"));
    assert!(!r.has_tuning("banjo"));
    assert!(r.tuning_names().contains(&"ukulele".to_string()));
}

#[test]
fn guitar_grid_in_e_major() {
    let r = TheoryResolver::new();
    let notes = r.scale_notes("E", "major");
    let grid = r.fret_grid("guitar", 0, 15, &notes);
    assert!(grid.has_shape(6, 16));

    // low E string: open E2 and the octave at fret 12
    assert_eq!(grid.cell(0, 0), Note::parse("E2"));
    assert_eq!(grid.cell(0, 12), Note::parse("E3"));
    // F is not in E major
    assert_eq!(grid.cell(0, 1), None);
    assert_eq!(grid.cell(0, 2), Note::parse("F#2"));
    // high E string
    assert_eq!(grid.cell(5, 0), Note::parse("E4"));
    // out of range reads as empty
    assert_eq!(grid.cell(6, 0), None);
    assert_eq!(grid.cell(0, 16), None);
}

#[test]
fn every_grid_note_is_in_scale() {
    let r = TheoryResolver::new();
    let notes = r.scale_notes("G", "mixolydian");
    let grid = r.fret_grid("guitar", 0, 17, &notes);
    for row in grid.rows() {
        for note in row.iter().flatten() {
            assert!(notes.iter().any(|n| n == note.pitch.name()), "{note} not in scale");
        }
    }
}

#[test]
fn start_fret_shifts_the_window() {
    let r = TheoryResolver::new();
    let notes = r.scale_notes("C", "chromatic");
    let grid = r.fret_grid("guitar", 5, 4, &notes);
    assert!(grid.has_shape(6, 5));
    assert_eq!(grid.cell(0, 0), Note::parse("A2"));
    assert_eq!(grid.cell(0, 4), Note::parse("C#3"));
}

#[test]
fn other_tunings_have_their_own_string_counts() {
    let r = TheoryResolver::new();
    let notes = r.scale_notes("C", "major");
    assert_eq!(r.fret_grid("bass", 0, 12, &notes).num_rows(), 4);
    assert_eq!(r.fret_grid("seven-string", 0, 12, &notes).num_rows(), 7);
    assert!(r.fret_grid("banjo", 0, 12, &notes).is_empty());
}

#[test]
fn empty_scale_gives_all_empty_cells() {
    let r = TheoryResolver::new();
    let grid = r.fret_grid("guitar", 0, 5, &[]);
    assert!(grid.has_shape(6, 6));
    assert!(grid.rows().iter().all(|row| row.iter().all(Option::is_none)));
}

#[test]
fn note_parsing_and_display() {
    let n = Note::parse("Bb3").unwrap();
    assert_eq!(n.pitch, PitchClass::parse("A#").unwrap());
    assert_eq!(n.octave, 3);
    assert_eq!(n.to_string(), "A#3");
    assert_eq!(Note::parse("E2").unwrap().semitone(), 40);
    assert_eq!(Note::parse("B3").unwrap().transpose(1).to_string(), "C4");
    assert_eq!(Note::parse("C-1").unwrap().semitone(), 0);
    assert_eq!(Note::parse("E"), None);
    assert_eq!(strip_octave("A#4"), "A#");
    assert_eq!(pitch_class_of("Cb"), PitchClass::parse("B"));
}

#[test]
fn out_of_range_fret_window_gives_empty_grid() {
    let r = TheoryResolver::new();
    let notes = r.scale_notes("C", "chromatic");
    assert!(r.fret_grid("guitar", usize::MAX - 1, 15, &notes).is_empty());
    assert!(r.fret_grid("guitar", 30, 15, &notes).is_empty());
    assert!(r.fret_grid("guitar", 21, 15, &notes).has_shape(6, 16));
}

#[test]
fn ukulele_keeps_its_reentrant_string_order() {
    let r = TheoryResolver::new();
    let notes = r.scale_notes("C", "chromatic");
    let grid = r.fret_grid("ukulele", 0, 3, &notes);
    assert!(grid.has_shape(4, 4));
    assert_eq!(grid.cell(0, 0), Note::parse("G4"));
    assert_eq!(grid.cell(1, 0), Note::parse("C4"));
    assert_eq!(grid.cell(3, 0), Note::parse("A4"));
}
