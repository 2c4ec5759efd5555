use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

pub(crate) fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

pub(crate) fn document(window: &Window) -> Result<Document, JsValue> {
    window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

pub(crate) fn by_id(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(id)
}

pub(crate) fn html_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    by_id(document, id).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Attach a listener for the lifetime of the page
pub(crate) fn listen<F>(target: &EventTarget, kind: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// Run `f` once after `ms` milliseconds
pub(crate) fn after<F>(window: &Window, ms: i32, f: F) -> Result<i32, JsValue>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(f);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms)
}

/// Log handler failures instead of throwing back into the event loop
pub(crate) fn report(context: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::error!("{}: {:?}", context, err);
    }
}
