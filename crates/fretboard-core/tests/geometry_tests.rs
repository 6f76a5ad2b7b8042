// Host-side tests for board layout.

use fretboard_core::*;

fn guitar(frets: usize) -> BoardConfig {
    BoardConfig::new(frets, 6, "guitar").unwrap()
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn positive_sizes_give_positive_evenly_spaced_frets() {
    let configs = [
        guitar(1),
        guitar(15),
        guitar(24),
        BoardConfig::new(12, 4, "bass").unwrap(),
        BoardConfig::new(17, 1, "guitar").unwrap(),
    ];
    let sizes = [(100.0, 50.0), (800.0, 200.0), (1920.0, 320.0), (64.0, 900.0)];
    for config in &configs {
        for (w, h) in sizes {
            let g = compute_geometry(w, h, config);
            assert!(g.fret_width > 0.0, "fret width for {w}x{h}");
            assert!(g.string_height > 0.0, "string height for {w}x{h}");
            let xs: Vec<f32> = g.fret_xs().collect();
            assert_eq!(xs.len(), config.num_frets());
            for pair in xs.windows(2) {
                assert!(pair[1] > pair[0], "fret lines not increasing: {pair:?}");
                assert!(approx(pair[1] - pair[0], g.fret_width));
            }
        }
    }
}

#[test]
fn standard_board_dimensions() {
    let g = compute_geometry(800.0, 200.0, &guitar(15));
    assert!(approx(g.fret_width, (800.0 - 15.0) / 15.0));
    assert!(approx(g.string_padding, 20.0));
    assert!(approx(g.string_height, 30.0));
    assert!(approx(g.note_radius, g.fret_width / 4.0));
    assert!(approx(g.fret_x(0), ZERO_FRET_OFFSET));
    assert!(approx(g.fret_x(3), 3.0 * g.fret_width + 15.0));
}

#[test]
fn non_positive_sizes_are_degenerate() {
    for (w, h) in [(0.0, 0.0), (0.0, 200.0), (800.0, 0.0), (-5.0, 100.0), (f32::NAN, 10.0)] {
        let g = compute_geometry(w, h, &guitar(15));
        assert!(g.is_degenerate());
        assert_eq!(g.width, 0.0);
        assert_eq!(g.height, 0.0);
        assert_eq!(g.fret_width, 0.0);
        assert_eq!(g.string_height, 0.0);
        assert_eq!(g.note_radius, 0.0);
    }
}

#[test]
fn open_string_marker_sits_left_of_nut_at_half_size() {
    let g = compute_geometry(800.0, 200.0, &guitar(15));
    let open = g.marker(2, 0);
    assert!(open.open);
    assert!(approx(open.center.x, ZERO_FRET_OFFSET / 2.0));
    assert!(approx(open.radius, g.note_radius / 2.0));

    let fretted = g.marker(2, 12);
    assert!(!fretted.open);
    assert!(approx(fretted.center.x, 12.0 * g.fret_width + 15.0 - g.fret_width / 2.0));
    assert!(approx(fretted.radius, g.note_radius));
    assert!(approx(fretted.center.y, open.center.y));
}

#[test]
fn fretted_markers_sit_between_fret_lines() {
    let g = compute_geometry(800.0, 200.0, &guitar(15));
    for j in 1..=15 {
        let x = g.marker(0, j).center.x;
        assert!(x > g.fret_x(j - 1));
        if j < 15 {
            assert!(x < g.fret_x(j));
        }
    }
}

#[test]
fn string_order_inverts_rows() {
    let low_top = BoardConfig::builder()
        .string_order(StringOrder::LowAtTop)
        .build()
        .unwrap();
    let high_top = BoardConfig::builder()
        .string_order(StringOrder::HighAtTop)
        .build()
        .unwrap();
    let lo = compute_geometry(800.0, 200.0, &low_top);
    let hi = compute_geometry(800.0, 200.0, &high_top);

    assert!(approx(lo.string_y(0), lo.string_padding));
    assert!(approx(hi.string_y(0), 5.0 * hi.string_height + hi.string_padding));
    for i in 0..6 {
        assert!(approx(lo.string_y(i), hi.string_y(5 - i)));
        assert!(approx(lo.marker(i, 3).center.y, hi.marker(5 - i, 3).center.y));
    }
}

#[test]
fn six_string_markers_line_up_with_strings() {
    let g = compute_geometry(800.0, 200.0, &guitar(15));
    for i in 0..6 {
        assert!(approx(g.marker(i, 5).center.y, g.string_y(i)));
    }
}

#[test]
fn resize_rescales_layout_without_changing_counts() {
    let config = guitar(15);
    let big = compute_geometry(800.0, 200.0, &config);
    let small = compute_geometry(400.0, 100.0, &config);

    assert_eq!(small.num_frets, big.num_frets);
    assert_eq!(small.num_strings, big.num_strings);
    assert!(approx(small.string_height, big.string_height / 2.0));
    assert!(approx(small.string_padding, big.string_padding / 2.0));
    for i in 0..6 {
        assert!(approx(small.string_y(i), big.string_y(i) / 2.0));
    }
    // The zero-fret offset is fixed in pixels, so fret width halves up to that term.
    assert!(approx(small.fret_width, (400.0 - 15.0) / 15.0));
    assert!(approx(2.0 * small.fret_width - big.fret_width, -15.0 / 15.0));
}
