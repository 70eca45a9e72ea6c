//! Thin helpers over `web_sys` for the page's fixed markup.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, EventTarget, Window};

/// Class that hides an element.
pub const HIDDEN: &str = "hidden";

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| "No global window object".into())
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| "No document object".into())
}

/// Element `id`, if present and of type `T`.
pub fn find_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// Every element matching `selector`, in document order.
pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);

    for i in 0..nodes.length() {
        if let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<T>().ok()) {
            elements.push(element);
        }
    }

    Ok(elements)
}

pub fn is_hidden(element: &Element) -> bool {
    element.class_list().contains(HIDDEN)
}

pub fn set_hidden(element: &Element, hidden: bool) {
    let _ = element.class_list().toggle_with_force(HIDDEN, hidden);
}

/// Attach `handler` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// Readable description of a thrown JS value.
pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }

    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
