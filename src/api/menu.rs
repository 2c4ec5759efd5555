use wasm_bindgen::prelude::*;

use super::dom;

/// Wire the mobile navigation toggle. Returns false when the page has no menu.
#[wasm_bindgen(js_name = mountMenu)]
pub fn mount_menu() -> Result<bool, JsValue> {
    let window = dom::window()?;
    let document = dom::document(&window)?;

    let (Some(toggle), Some(nav)) = (
        document.query_selector(".menu-toggle")?,
        document.query_selector(".primary-nav")?,
    ) else {
        return Ok(false);
    };

    let button = toggle.clone();
    dom::listen(&toggle, "click", move |_| {
        dom::report("menu toggle", (|| {
            let open = nav.class_list().toggle("open")?;
            button.set_attribute("aria-expanded", if open { "true" } else { "false" })
        })());
    })?;

    Ok(true)
}
