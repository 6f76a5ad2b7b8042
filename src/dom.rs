use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has the wrong element type: {:?}", id, e))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Call `handler` with the new value whenever the `<select>` changes.
pub fn add_change_listener(
    document: &web::Document,
    select_id: &str,
    mut handler: impl FnMut(String) + 'static,
) {
    let Some(el) = document.get_element_by_id(select_id) else {
        log::warn!("[dom] missing #{}", select_id);
        return;
    };
    let Ok(select) = el.dyn_into::<web::HtmlSelectElement>() else {
        log::warn!("[dom] #{} is not a <select>", select_id);
        return;
    };
    let target = select.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        handler(target.value());
    }) as Box<dyn FnMut(_)>);
    _ = select.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Replace the options of a `<select>` and select `selected` when present.
pub fn populate_select(
    document: &web::Document,
    select_id: &str,
    options: &[String],
    selected: &str,
) -> anyhow::Result<()> {
    let select: web::HtmlSelectElement = element_by_id(document, select_id)?;
    select.set_inner_html("");
    for value in options {
        let option = web::HtmlOptionElement::new_with_text_and_value(value, value)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        select
            .append_child(&option)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    select.set_value(selected);
    Ok(())
}

#[inline]
pub fn set_select_value(document: &web::Document, select_id: &str, value: &str) {
    if let Ok(select) = element_by_id::<web::HtmlSelectElement>(document, select_id) {
        select.set_value(value);
    }
}

/// Optional preselection carried on a `<select>` as a data attribute.
#[inline]
pub fn initial_value(document: &web::Document, select_id: &str, attr: &str) -> Option<String> {
    document
        .get_element_by_id(select_id)?
        .get_attribute(attr)
        .filter(|v| !v.trim().is_empty())
}
