//! Scale/tuning resolution: turns a key + scale into pitch classes and a
//! tuning + fret window into a [`NoteGrid`].
//!
//! The core only depends on the [`ScaleResolver`] trait so tests and hosts can
//! swap in their own music-theory source. [`TheoryResolver`] is the built-in
//! implementation backed by the tables in [`crate::theory`].

use crate::constants::MAX_FRETS;
use crate::theory::{pitch_class_of, Note, PitchClass, KEY_NAMES, SCALES, TUNINGS};
use fnv::FnvHashMap;
use smallvec::SmallVec;

/// One fretted position: a note in the requested scale, or `None` when the
/// position is outside it.
pub type Cell = Option<Note>;

/// Cells of one string, fret 0 (open) first.
pub type GridRow = SmallVec<[Cell; 24]>;

/// Resolver output: one row per string, bass-side string first.
///
/// Grids are replaced wholesale on every selection change and never patched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoteGrid {
    rows: Vec<GridRow>,
}

impl NoteGrid {
    pub fn new(rows: Vec<GridRow>) -> Self {
        Self { rows }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Bounds-safe lookup; anything outside the grid reads as empty.
    #[inline]
    pub fn cell(&self, string: usize, fret: usize) -> Cell {
        self.rows.get(string).and_then(|r| r.get(fret)).copied().flatten()
    }

    /// True when the grid has exactly `rows` rows of `cols` cells each.
    pub fn has_shape(&self, rows: usize, cols: usize) -> bool {
        self.rows.len() == rows && self.rows.iter().all(|r| r.len() == cols)
    }
}

pub trait ScaleResolver {
    /// Ordered pitch-class names of `scale` rooted at `key`. Unknown
    /// combinations yield an empty list.
    fn scale_notes(&self, key: &str, scale: &str) -> Vec<String>;

    /// Note grid for frets `start_fret..=start_fret + fret_count` of every
    /// string in `tuning`.
    fn fret_grid(
        &self,
        tuning: &str,
        start_fret: usize,
        fret_count: usize,
        scale_notes: &[String],
    ) -> NoteGrid;

    /// Catalog of scale names, in display order.
    fn scale_names(&self) -> Vec<String>;

    fn key_names(&self) -> Vec<String> {
        KEY_NAMES.iter().map(|k| k.to_string()).collect()
    }

    fn has_tuning(&self, tuning: &str) -> bool;
}

/// Built-in resolver over the static scale and tuning tables.
pub struct TheoryResolver {
    scales: FnvHashMap<String, &'static [u8]>,
    tunings: FnvHashMap<String, Vec<Note>>,
}

impl TheoryResolver {
    pub fn new() -> Self {
        let scales = SCALES
            .iter()
            .map(|(name, intervals)| (name.to_string(), *intervals))
            .collect();
        let tunings = TUNINGS
            .iter()
            .map(|(name, open)| {
                let notes = open.iter().filter_map(|n| Note::parse(n)).collect();
                (name.to_string(), notes)
            })
            .collect();
        Self { scales, tunings }
    }

    pub fn tuning_names(&self) -> Vec<String> {
        TUNINGS.iter().map(|(n, _)| n.to_string()).collect()
    }

    fn open_strings(&self, tuning: &str) -> Option<&[Note]> {
        self.tunings.get(&normalize(tuning)).map(Vec::as_slice)
    }
}

impl Default for TheoryResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ScaleResolver for TheoryResolver {
    fn scale_notes(&self, key: &str, scale: &str) -> Vec<String> {
        let Some(root) = PitchClass::parse(key) else {
            log::warn!("[resolver] unknown key `{}`", key);
            return Vec::new();
        };
        let Some(intervals) = self.scales.get(&normalize(scale)) else {
            log::warn!("[resolver] unknown scale `{}`", scale);
            return Vec::new();
        };
        intervals
            .iter()
            .map(|&iv| root.transpose(iv as i32).name().to_string())
            .collect()
    }

    fn fret_grid(
        &self,
        tuning: &str,
        start_fret: usize,
        fret_count: usize,
        scale_notes: &[String],
    ) -> NoteGrid {
        let Some(open) = self.open_strings(tuning) else {
            log::warn!("[resolver] unknown tuning `{}`", tuning);
            return NoteGrid::empty();
        };
        if start_fret.saturating_add(fret_count) > MAX_FRETS {
            log::warn!(
                "[resolver] frets {}..={} are out of range",
                start_fret,
                start_fret.saturating_add(fret_count)
            );
            return NoteGrid::empty();
        }
        let mut in_scale = [false; 12];
        for name in scale_notes {
            if let Some(pc) = pitch_class_of(name) {
                in_scale[pc.index() as usize] = true;
            }
        }
        let rows = open
            .iter()
            .map(|&open_note| {
                (0..=fret_count)
                    .map(|j| {
                        let note = open_note.transpose((start_fret + j) as i32);
                        in_scale[note.pitch.index() as usize].then_some(note)
                    })
                    .collect::<GridRow>()
            })
            .collect();
        NoteGrid::new(rows)
    }

    fn scale_names(&self) -> Vec<String> {
        SCALES.iter().map(|(n, _)| n.to_string()).collect()
    }

    fn has_tuning(&self, tuning: &str) -> bool {
        self.open_strings(tuning).is_some()
    }
}

#[inline]
fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}
