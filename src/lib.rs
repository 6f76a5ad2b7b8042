#![cfg(target_arch = "wasm32")]
use crate::app::App;
use crate::constants::{CANVAS_ID, CONTAINER_ID, INITIAL_VALUE_ATTR, KEY_SELECT_ID, SCALE_SELECT_ID};
use crate::providers::{ContainerSize, DomTheme};
use fretboard_core::{
    canonical_key, Fretboard, ScaleResolver, ScaleSelection, SizeProvider, TheoryResolver,
    DEFAULT_KEY, DEFAULT_SCALE,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod app;
mod canvas;
mod config;
mod constants;
mod dom;
mod events;
mod providers;
mod settings;
mod shortcuts;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fretboard-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let container: web::HtmlElement = dom::element_by_id(&document, CONTAINER_ID)?;
    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?;

    let board_config = config::board_config_from_attrs(|name| container.get_attribute(name))?;
    let resolver = TheoryResolver::new();

    // Selection controls, preselected from `data-initial` when present
    let key = dom::initial_value(&document, KEY_SELECT_ID, INITIAL_VALUE_ATTR)
        .and_then(|k| canonical_key(&k).map(str::to_string))
        .unwrap_or_else(|| DEFAULT_KEY.to_string());
    let scale = dom::initial_value(&document, SCALE_SELECT_ID, INITIAL_VALUE_ATTR)
        .unwrap_or_else(|| DEFAULT_SCALE.to_string());
    dom::populate_select(&document, KEY_SELECT_ID, &resolver.key_names(), &key)?;
    dom::populate_select(&document, SCALE_SELECT_ID, &resolver.scale_names(), &scale)?;

    // Theme swatches are read once here and cached by the board
    let theme = DomTheme::new(window.clone(), document.clone());
    let size = ContainerSize::new(container.clone());
    let mut surface = canvas::CanvasSurface::new(canvas)?;
    let (w, h) = size.size();
    surface.fit_to(w, h);

    let board = Fretboard::new(
        board_config,
        ScaleSelection::new(&key, &scale),
        resolver,
        &theme,
        &size,
    )?;
    log::info!(
        "[init] {} frets, {} strings, tuning {}, {}x{}",
        board.state().config.num_frets(),
        board.state().config.num_strings(),
        board.state().config.tuning(),
        w,
        h
    );

    let app = Rc::new(RefCell::new(App {
        board,
        surface,
        size,
        document: document.clone(),
    }));
    {
        let mut a = app.borrow_mut();
        a.repaint();
        a.sync_controls();
        settings::set_open(&document, a.board.state().settings_open);
    }

    events::wire_selects(&app, &document);
    events::wire_settings_toggle(&app, &document);
    events::wire_global_keydown(&app);
    events::wire_resize(&app, &container)?;
    Ok(())
}
