use crate::constants::{
    HIDDEN_CLASS, HINT_ID, PANEL_DISPLAY_PROPERTY, PANEL_HIDDEN_DISPLAY, SETTINGS_PANEL_ID,
    SETTINGS_TOGGLE_ID,
};
use wasm_bindgen::JsCast;
use web_sys as web;

fn panel(document: &web::Document) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(SETTINGS_PANEL_ID)?
        .dyn_into::<web::HtmlElement>()
        .ok()
}

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = panel(document) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
        // fallback for pages without the CSS class
        _ = el.style().remove_property(PANEL_DISPLAY_PROPERTY);
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = panel(document) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        _ = el.style().set_property(PANEL_DISPLAY_PROPERTY, PANEL_HIDDEN_DISPLAY);
    }
}

/// Show or hide the panel and mirror the state on the toggle button.
pub fn set_open(document: &web::Document, open: bool) {
    if open {
        show(document);
    } else {
        hide(document);
    }
    if let Some(btn) = document.get_element_by_id(SETTINGS_TOGGLE_ID) {
        _ = btn.set_attribute("aria-expanded", if open { "true" } else { "false" });
    }
}

pub fn update_hint(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        el.set_text_content(Some(text));
    }
}
