//! Session state, the event reducer and the controller that ties the
//! reducer to the renderer.
//!
//! State transitions are computed by [`reduce`] without touching any drawing
//! surface; [`Fretboard`] applies a transition and then repaints when the
//! transition asks for it.

use crate::config::{BoardConfig, ConfigError};
use crate::degree::{DegreeColorMap, ThemeProvider};
use crate::geometry::{compute_geometry, BoardGeometry};
use crate::render::render;
use crate::resolver::{NoteGrid, ScaleResolver};
use crate::surface::Surface;
use crate::theory::PitchClass;
use instant::Instant;

/// Current pixel size of the element hosting the drawing surface.
pub trait SizeProvider {
    fn size(&self) -> (f32, f32);
}

impl SizeProvider for (f32, f32) {
    fn size(&self) -> (f32, f32) {
        *self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScaleSelection {
    pub key: String,
    pub scale: String,
}

impl ScaleSelection {
    pub fn new(key: &str, scale: &str) -> Self {
        Self {
            key: key.to_string(),
            scale: scale.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub config: BoardConfig,
    pub selection: ScaleSelection,
    pub geometry: BoardGeometry,
    pub scale_notes: Vec<String>,
    pub grid: NoteGrid,
    pub settings_open: bool,
}

impl AppState {
    /// Initial state: lays out the board and fetches the first grid.
    pub fn initial(
        config: BoardConfig,
        selection: ScaleSelection,
        size: (f32, f32),
        resolver: &dyn ScaleResolver,
    ) -> Self {
        let geometry = compute_geometry(size.0, size.1, &config);
        let mut state = Self {
            config,
            selection,
            geometry,
            scale_notes: Vec::new(),
            grid: NoteGrid::empty(),
            settings_open: false,
        };
        state.refetch(resolver);
        state
    }

    fn refetch(&mut self, resolver: &dyn ScaleResolver) {
        let c = &self.config;
        self.scale_notes = resolver.scale_notes(&self.selection.key, &self.selection.scale);
        self.grid = resolver.fret_grid(c.tuning(), c.start_fret(), c.num_frets(), &self.scale_notes);
        if !self.grid.has_shape(c.num_strings(), c.num_frets() + 1) {
            log::warn!(
                "[state] grid for `{}` has {} rows, expected {}x{}; missing positions draw empty",
                c.tuning(),
                self.grid.num_rows(),
                c.num_strings(),
                c.num_frets() + 1
            );
        }
        log::debug!(
            "[state] fetched {} {}: {:?}",
            self.selection.key,
            self.selection.scale,
            self.scale_notes
        );
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Resize { width: f32, height: f32 },
    SetKey(String),
    SetScale(String),
    SetSelection(ScaleSelection),
    ToggleSettings,
}

/// Result of applying one [`Event`].
#[derive(Clone, Debug)]
pub struct Transition {
    pub state: AppState,
    /// The board must be cleared and repainted.
    pub repaint: bool,
    /// A new grid was requested from the resolver.
    pub fetched: bool,
}

impl Transition {
    fn unchanged(state: &AppState) -> Self {
        Self {
            state: state.clone(),
            repaint: false,
            fetched: false,
        }
    }
}

/// Canonical key name (sharp spelling), or `None` for unknown keys.
pub fn canonical_key(key: &str) -> Option<&'static str> {
    PitchClass::parse(key).map(PitchClass::name)
}

pub fn reduce(state: &AppState, event: &Event, resolver: &dyn ScaleResolver) -> Transition {
    match event {
        Event::Resize { width, height } => {
            let geometry = compute_geometry(*width, *height, &state.config);
            if geometry == state.geometry {
                return Transition::unchanged(state);
            }
            let mut next = state.clone();
            next.geometry = geometry;
            Transition {
                state: next,
                repaint: true,
                fetched: false,
            }
        }
        Event::SetKey(key) => {
            let selection = ScaleSelection {
                key: key.clone(),
                scale: state.selection.scale.clone(),
            };
            select(state, selection, resolver)
        }
        Event::SetScale(scale) => {
            let selection = ScaleSelection {
                key: state.selection.key.clone(),
                scale: scale.clone(),
            };
            select(state, selection, resolver)
        }
        Event::SetSelection(selection) => select(state, selection.clone(), resolver),
        Event::ToggleSettings => {
            let mut next = state.clone();
            next.settings_open = !next.settings_open;
            Transition {
                state: next,
                repaint: false,
                fetched: false,
            }
        }
    }
}

fn select(state: &AppState, selection: ScaleSelection, resolver: &dyn ScaleResolver) -> Transition {
    let Some(key) = canonical_key(&selection.key) else {
        log::warn!("[state] ignoring unknown key `{}`", selection.key);
        return Transition::unchanged(state);
    };
    let selection = ScaleSelection {
        key: key.to_string(),
        scale: selection.scale.trim().to_string(),
    };
    if selection == state.selection {
        return Transition::unchanged(state);
    }
    let mut next = state.clone();
    next.selection = selection;
    next.refetch(resolver);
    Transition {
        state: next,
        repaint: true,
        fetched: true,
    }
}

/// Owns the session: state, resolver and the cached palette.
pub struct Fretboard<R: ScaleResolver> {
    state: AppState,
    resolver: R,
    colors: DegreeColorMap,
    fetches: usize,
    repaints: usize,
}

impl<R: ScaleResolver> Fretboard<R> {
    /// Reads the theme once and the initial size, then fetches the first grid.
    pub fn new(
        config: BoardConfig,
        selection: ScaleSelection,
        resolver: R,
        theme: &dyn ThemeProvider,
        size: &dyn SizeProvider,
    ) -> Result<Self, ConfigError> {
        if !resolver.has_tuning(config.tuning()) {
            return Err(ConfigError::UnknownTuning(config.tuning().to_string()));
        }
        let selection = ScaleSelection {
            key: canonical_key(&selection.key)
                .map(str::to_string)
                .unwrap_or(selection.key),
            scale: selection.scale,
        };
        let state = AppState::initial(config, selection, size.size(), &resolver);
        Ok(Self {
            state,
            resolver,
            colors: DegreeColorMap::from_theme(theme),
            fetches: 1,
            repaints: 0,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn colors(&self) -> &DegreeColorMap {
        &self.colors
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches
    }

    pub fn repaint_count(&self) -> usize {
        self.repaints
    }

    /// Apply `event`; repaints `surface` when the transition requires it.
    /// Returns whether a repaint happened.
    pub fn dispatch(&mut self, event: Event, surface: &mut dyn Surface) -> bool {
        let Transition {
            state,
            repaint,
            fetched,
        } = reduce(&self.state, &event, &self.resolver);
        self.state = state;
        if fetched {
            self.fetches += 1;
            log::info!(
                "[fretboard] selection {} {}",
                self.state.selection.key,
                self.state.selection.scale
            );
        }
        if repaint {
            self.repaint(surface);
        }
        repaint
    }

    /// Re-read the surface size and repaint if the layout changed.
    pub fn resize(&mut self, size: &dyn SizeProvider, surface: &mut dyn Surface) -> bool {
        let (width, height) = size.size();
        self.dispatch(Event::Resize { width, height }, surface)
    }

    /// Unconditional clear-and-repaint of the current state.
    pub fn repaint(&mut self, surface: &mut dyn Surface) {
        let started = Instant::now();
        let s = &self.state;
        render(surface, &s.geometry, &s.grid, &s.scale_notes, &self.colors, &s.config);
        self.repaints += 1;
        log::debug!(
            "[fretboard] repaint #{} {:.0}x{:.0} in {:?}",
            self.repaints,
            s.geometry.width,
            s.geometry.height,
            started.elapsed()
        );
    }
}
