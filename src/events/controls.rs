use crate::app::SharedApp;
use crate::constants::{KEY_SELECT_ID, RESIZE_DEBOUNCE_MS, SCALE_SELECT_ID, SETTINGS_TOGGLE_ID};
use crate::dom;
use fretboard_core::Event;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_selects(app: &SharedApp, document: &web::Document) {
    let app_key = app.clone();
    dom::add_change_listener(document, KEY_SELECT_ID, move |value| {
        log::info!("[controls] key -> {}", value);
        app_key.borrow_mut().dispatch(Event::SetKey(value));
    });
    let app_scale = app.clone();
    dom::add_change_listener(document, SCALE_SELECT_ID, move |value| {
        log::info!("[controls] scale -> {}", value);
        app_scale.borrow_mut().dispatch(Event::SetScale(value));
    });
}

pub fn wire_settings_toggle(app: &SharedApp, document: &web::Document) {
    let app = app.clone();
    dom::add_click_listener(document, SETTINGS_TOGGLE_ID, move || {
        app.borrow_mut().dispatch(Event::ToggleSettings);
    });
}

/// Resize the board when its container changes size, trailing-edge debounced.
///
/// Observes the container itself and also listens to window resizes for
/// browsers without `ResizeObserver`.
pub fn wire_resize(app: &SharedApp, container: &web::HtmlElement) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let pending_fire = pending.clone();
    let app_fire = app.clone();
    let fire = Closure::wrap(Box::new(move || {
        pending_fire.set(None);
        app_fire.borrow_mut().resize();
    }) as Box<dyn FnMut()>);

    let schedule: Rc<dyn Fn()> = {
        let window = window.clone();
        Rc::new(move || {
            if let Some(handle) = pending.take() {
                window.clear_timeout_with_handle(handle);
            }
            match window.set_timeout_with_callback_and_timeout_and_arguments_0(
                fire.as_ref().unchecked_ref(),
                RESIZE_DEBOUNCE_MS,
            ) {
                Ok(handle) => pending.set(Some(handle)),
                Err(e) => log::warn!("[resize] setTimeout failed: {:?}", e),
            }
        })
    };

    let schedule_observer = schedule.clone();
    let on_observe = Closure::wrap(Box::new(move |_entries: js_sys::Array, _obs: web::ResizeObserver| {
        schedule_observer();
    }) as Box<dyn FnMut(js_sys::Array, web::ResizeObserver)>);
    match web::ResizeObserver::new(on_observe.as_ref().unchecked_ref()) {
        Ok(observer) => {
            observer.observe(container);
            // lives for the whole session
            std::mem::forget(observer);
        }
        Err(e) => log::warn!("[resize] ResizeObserver unavailable: {:?}", e),
    }
    on_observe.forget();

    let on_window_resize = Closure::wrap(Box::new(move || schedule()) as Box<dyn FnMut()>);
    _ = window
        .add_event_listener_with_callback("resize", on_window_resize.as_ref().unchecked_ref());
    on_window_resize.forget();
    Ok(())
}
