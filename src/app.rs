use crate::canvas::CanvasSurface;
use crate::constants::{KEY_SELECT_ID, SCALE_SELECT_ID};
use crate::providers::ContainerSize;
use crate::settings;
use crate::shortcuts::hint_text;
use fretboard_core::{Event, Fretboard, SizeProvider, TheoryResolver};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub type SharedApp = Rc<RefCell<App>>;

/// Top-level controller: the fretboard session plus the page it lives in.
pub struct App {
    pub board: Fretboard<TheoryResolver>,
    pub surface: CanvasSurface,
    pub size: ContainerSize,
    pub document: web::Document,
}

impl App {
    /// Apply an event and bring the page controls in line with the new state.
    pub fn dispatch(&mut self, event: Event) {
        let selection_event = matches!(
            event,
            Event::SetKey(_) | Event::SetScale(_) | Event::SetSelection(_)
        );
        let settings_event = matches!(event, Event::ToggleSettings);
        self.board.dispatch(event, &mut self.surface);
        if selection_event {
            self.sync_controls();
        }
        if settings_event {
            settings::set_open(&self.document, self.board.state().settings_open);
        }
    }

    /// Re-read the container size; repaint if layout or backing store changed.
    pub fn resize(&mut self) {
        let (w, h) = self.size.size();
        let wiped = self.surface.fit_to(w, h);
        let repainted = self.board.resize(&self.size, &mut self.surface);
        if wiped && !repainted {
            self.board.repaint(&mut self.surface);
        }
    }

    pub fn repaint(&mut self) {
        self.board.repaint(&mut self.surface);
    }

    /// Mirror the current selection into the selects and the hint line.
    pub fn sync_controls(&self) {
        let state = self.board.state();
        crate::dom::set_select_value(&self.document, KEY_SELECT_ID, &state.selection.key);
        crate::dom::set_select_value(&self.document, SCALE_SELECT_ID, &state.selection.scale);
        settings::update_hint(
            &self.document,
            &hint_text(
                &state.selection.key,
                &state.selection.scale,
                state.config.tuning(),
            ),
        );
    }
}
