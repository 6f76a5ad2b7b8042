use crate::app::SharedApp;
use crate::shortcuts::{random_selection, shortcut_for, Shortcut};
use fretboard_core::{Event, ScaleResolver, ScaleSelection};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, app: &SharedApp) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    // leave typing into form controls alone
    let in_control = ev
        .target()
        .is_some_and(|t| t.dyn_ref::<web::HtmlSelectElement>().is_some());
    if in_control {
        return;
    }
    let Some(shortcut) = shortcut_for(&ev.key()) else {
        return;
    };
    let event = match shortcut {
        Shortcut::Key(key) => Event::SetKey(key.to_string()),
        Shortcut::Scale(scale) => Event::SetScale(scale.to_string()),
        Shortcut::ToggleSettings => Event::ToggleSettings,
        Shortcut::RandomSelection => {
            let (keys, scales) = {
                let a = app.borrow();
                (a.board.resolver().key_names(), a.board.resolver().scale_names())
            };
            let Some((key, scale)) = random_selection(&mut rand::thread_rng(), &keys, &scales)
            else {
                return;
            };
            log::info!("[keys] random selection {} {}", key, scale);
            Event::SetSelection(ScaleSelection::new(&key, &scale))
        }
    };
    app.borrow_mut().dispatch(event);
    ev.prevent_default();
}

pub fn wire_global_keydown(app: &SharedApp) {
    if let Some(window) = web::window() {
        let app = app.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &app);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
