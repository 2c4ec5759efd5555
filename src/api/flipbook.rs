//! Flipbook page wiring
//!
//! Expected markup ids: `flipbook`, `pageLeft`, `pageRight`, `prevPage`,
//! `nextPage`, `pageIndicator`, `pageTotal`, `loadingSpinner`,
//! `thumbnailList`, `editionTitle`, `zoomBtn`, `fullscreenBtn`,
//! `downloadBtn`, `shareBtn`; fullscreen targets `.flipbook-wrapper`.
//! Missing elements are skipped.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, MediaQueryList, TouchEvent, UrlSearchParams, Window};

use super::dom;
use crate::domain::catalog::{Catalog, EDITION_QUERY_PARAM};
use crate::flipbook::viewer::{LOADING_DELAY_MS, PAGE_FLIP_MS, SINGLE_PAGE_QUERY};
use crate::flipbook::{key_action, FlipbookViewer, KeyAction, ShareData, SwipeDirection, SwipeTracker};

const PAGE_FLIP_CLASS: &str = "page-flip";

struct Flipbook {
    window: Window,
    document: Document,
    root: HtmlElement,
    page_left: Option<Element>,
    page_right: Option<Element>,
    page_indicator: Option<Element>,
    page_total: Option<Element>,
    viewer: RefCell<FlipbookViewer>,
    single_page_query: Option<MediaQueryList>,
    swipe: Cell<SwipeTracker>,
}

impl Flipbook {
    fn is_single_page(&self) -> bool {
        self.single_page_query
            .as_ref()
            .map(MediaQueryList::matches)
            .unwrap_or(false)
    }

    fn update_pages(&self) -> Result<(), JsValue> {
        let (Some(left), Some(right)) = (&self.page_left, &self.page_right) else {
            return Ok(());
        };

        {
            let viewer = self.viewer.borrow();
            let (left_slot, right_slot) = viewer.visible_pages();
            left.set_inner_html(&left_slot.markup());
            right.set_inner_html(&right_slot.map(|slot| slot.markup()).unwrap_or_default());

            if let Some(indicator) = &self.page_indicator {
                indicator.set_text_content(Some(&viewer.current_page().to_string()));
            }
            if let Some(total) = &self.page_total {
                total.set_text_content(Some(&viewer.total_pages().to_string()));
            }
        }

        left.class_list().add_1(PAGE_FLIP_CLASS)?;
        right.class_list().add_1(PAGE_FLIP_CLASS)?;
        let (left, right) = (left.clone(), right.clone());
        dom::after(&self.window, PAGE_FLIP_MS, move || {
            let _ = left.class_list().remove_1(PAGE_FLIP_CLASS);
            let _ = right.class_list().remove_1(PAGE_FLIP_CLASS);
        })?;
        Ok(())
    }

    fn update_layout_mode(&self) -> Result<(), JsValue> {
        let single = self.is_single_page();
        self.viewer.borrow_mut().set_single_page_view(single);
        self.update_pages()
    }

    fn next(&self) -> Result<(), JsValue> {
        let changed = self.viewer.borrow_mut().next();
        if changed {
            self.update_pages()?;
        }
        Ok(())
    }

    fn prev(&self) -> Result<(), JsValue> {
        let changed = self.viewer.borrow_mut().prev();
        if changed {
            self.update_pages()?;
        }
        Ok(())
    }

    fn go_to(&self, page: u32) -> Result<(), JsValue> {
        self.viewer.borrow_mut().go_to(page);
        self.update_pages()
    }

    fn is_fullscreen(&self) -> bool {
        self.document.fullscreen_element().is_some()
    }

    fn toggle_fullscreen(&self) -> Result<(), JsValue> {
        let Some(wrapper) = self.document.query_selector(".flipbook-wrapper")? else {
            return Ok(());
        };
        if self.is_fullscreen() {
            self.document.exit_fullscreen();
        } else if let Err(err) = wrapper.request_fullscreen() {
            log::warn!("fullscreen request rejected: {:?}", err);
        }
        Ok(())
    }
}

/// Wire the flipbook viewer. `catalog_json` replaces the built-in editions.
/// Returns false when the page has no `#flipbook`; share and fullscreen
/// buttons are still wired in that case.
#[wasm_bindgen(js_name = mountFlipbook)]
pub fn mount_flipbook(catalog_json: Option<String>) -> Result<bool, JsValue> {
    let window = dom::window()?;
    let document = dom::document(&window)?;

    let Some(root) = dom::html_by_id(&document, "flipbook") else {
        mount_share(&window, &document, None)?;
        return Ok(false);
    };

    let catalog = match catalog_json {
        Some(json) => Catalog::from_json(&json).map_err(|e| JsValue::from_str(&e))?,
        None => Catalog::builtin(),
    };
    let query = edition_query(&window)?;
    let edition = catalog.select(query.as_deref()).clone();
    log::debug!("flipbook edition: {}", edition.title);

    let single_page_query = window.match_media(SINGLE_PAGE_QUERY)?;
    let single = single_page_query.as_ref().map(MediaQueryList::matches).unwrap_or(false);

    let flipbook = Rc::new(Flipbook {
        page_left: dom::by_id(&document, "pageLeft"),
        page_right: dom::by_id(&document, "pageRight"),
        page_indicator: dom::by_id(&document, "pageIndicator"),
        page_total: dom::by_id(&document, "pageTotal"),
        viewer: RefCell::new(FlipbookViewer::new(edition, single)),
        single_page_query,
        swipe: Cell::new(SwipeTracker::new()),
        root,
        window: window.clone(),
        document: document.clone(),
    });

    if let Some(title) = dom::by_id(&document, "editionTitle") {
        title.set_text_content(Some(&flipbook.viewer.borrow().edition().title));
    }
    build_thumbnails(&flipbook)?;
    mount_navigation(&flipbook)?;
    mount_zoom(&flipbook)?;
    mount_download(&flipbook)?;
    mount_share(&window, &document, Some(flipbook.clone()))?;
    mount_gestures(&flipbook)?;

    if let Some(query) = &flipbook.single_page_query {
        let fb = flipbook.clone();
        dom::listen(query, "change", move |_| {
            dom::report("layout change", fb.update_layout_mode());
        })?;
    }

    let fb = flipbook.clone();
    let spinner = dom::html_by_id(&document, "loadingSpinner");
    dom::after(&window, LOADING_DELAY_MS, move || {
        if let Some(spinner) = spinner {
            let _ = spinner.style().set_property("display", "none");
        }
        dom::report("initial layout", fb.update_layout_mode());
    })?;

    Ok(true)
}

fn edition_query(window: &Window) -> Result<Option<String>, JsValue> {
    let search = window.location().search()?;
    Ok(UrlSearchParams::new_with_str(&search)?.get(EDITION_QUERY_PARAM))
}

fn build_thumbnails(flipbook: &Rc<Flipbook>) -> Result<(), JsValue> {
    let Some(list) = dom::by_id(&flipbook.document, "thumbnailList") else {
        return Ok(());
    };
    list.set_inner_html("");

    let labels = flipbook.viewer.borrow().thumbnail_labels();
    for (index, label) in labels.iter().enumerate() {
        let item = flipbook.document.create_element("div")?;
        item.set_class_name("thumbnail-item");
        item.set_text_content(Some(label));

        let fb = flipbook.clone();
        let page = index as u32 + 1;
        dom::listen(&item, "click", move |_| {
            dom::report("thumbnail", fb.go_to(page));
        })?;
        list.append_child(&item)?;
    }
    Ok(())
}

fn mount_navigation(flipbook: &Rc<Flipbook>) -> Result<(), JsValue> {
    if let Some(prev) = dom::by_id(&flipbook.document, "prevPage") {
        let fb = flipbook.clone();
        dom::listen(&prev, "click", move |_| dom::report("previous page", fb.prev()))?;
    }
    if let Some(next) = dom::by_id(&flipbook.document, "nextPage") {
        let fb = flipbook.clone();
        dom::listen(&next, "click", move |_| dom::report("next page", fb.next()))?;
    }
    Ok(())
}

fn mount_zoom(flipbook: &Rc<Flipbook>) -> Result<(), JsValue> {
    let Some(button) = dom::by_id(&flipbook.document, "zoomBtn") else {
        return Ok(());
    };
    let fb = flipbook.clone();
    dom::listen(&button, "click", move |_| {
        let transform = {
            let mut viewer = fb.viewer.borrow_mut();
            viewer.toggle_zoom();
            viewer.zoom_transform()
        };
        dom::report("zoom", fb.root.style().set_property("transform", transform));
    })
}

fn mount_download(flipbook: &Rc<Flipbook>) -> Result<(), JsValue> {
    let Some(button) = dom::by_id(&flipbook.document, "downloadBtn") else {
        return Ok(());
    };
    let fb = flipbook.clone();
    dom::listen(&button, "click", move |_| {
        let pdf = fb.viewer.borrow().download_ref().to_string();
        if pdf.is_empty() {
            return;
        }
        if let Err(err) = fb.window.open_with_url_and_target(&pdf, "_blank") {
            log::warn!("could not open {}: {:?}", pdf, err);
        }
    })
}

fn mount_gestures(flipbook: &Rc<Flipbook>) -> Result<(), JsValue> {
    let fb = flipbook.clone();
    dom::listen(&flipbook.root, "touchstart", move |event| {
        let Some(touch) = event.dyn_ref::<TouchEvent>().and_then(|e| e.touches().get(0)) else {
            return;
        };
        let mut swipe = fb.swipe.get();
        swipe.begin(touch.client_x() as f64);
        fb.swipe.set(swipe);
    })?;

    let fb = flipbook.clone();
    dom::listen(&flipbook.root, "touchend", move |event| {
        let Some(touch) = event.dyn_ref::<TouchEvent>().and_then(|e| e.changed_touches().get(0)) else {
            return;
        };
        match fb.swipe.get().end(touch.client_x() as f64) {
            Some(SwipeDirection::Next) => dom::report("swipe", fb.next()),
            Some(SwipeDirection::Prev) => dom::report("swipe", fb.prev()),
            None => {}
        }
    })?;

    let fb = flipbook.clone();
    dom::listen(&flipbook.document, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        match key_action(&event.key(), fb.is_fullscreen()) {
            Some(KeyAction::Next) => {
                event.prevent_default();
                dom::report("key", fb.next());
            }
            Some(KeyAction::Prev) => {
                event.prevent_default();
                dom::report("key", fb.prev());
            }
            Some(KeyAction::ExitFullscreen) => fb.document.exit_fullscreen(),
            None => {}
        }
    })?;

    let Some(button) = dom::by_id(&flipbook.document, "fullscreenBtn") else {
        return Ok(());
    };
    let fb = flipbook.clone();
    dom::listen(&button, "click", move |_| {
        dom::report("fullscreen", fb.toggle_fullscreen());
    })
}

fn mount_share(window: &Window, document: &Document, flipbook: Option<Rc<Flipbook>>) -> Result<(), JsValue> {
    let Some(button) = dom::by_id(document, "shareBtn") else {
        return Ok(());
    };
    let window = window.clone();
    dom::listen(&button, "click", move |_| {
        let viewer = flipbook.as_ref().map(|fb| fb.viewer.borrow().clone());
        dom::report("share", share(&window, viewer.as_ref()));
    })
}

/// Web Share API when available, clipboard copy otherwise. Looked up
/// dynamically since not every browser exposes either.
fn share(window: &Window, viewer: Option<&FlipbookViewer>) -> Result<(), JsValue> {
    let url = window.location().href()?;
    let data = ShareData::new(viewer, &url);
    let navigator = window.navigator();

    let share_fn = Reflect::get(&navigator, &JsValue::from_str("share"))?;
    if let Some(share_fn) = share_fn.dyn_ref::<Function>() {
        let payload = Object::new();
        Reflect::set(&payload, &JsValue::from_str("title"), &JsValue::from_str(&data.title))?;
        Reflect::set(&payload, &JsValue::from_str("text"), &JsValue::from_str(&data.text))?;
        Reflect::set(&payload, &JsValue::from_str("url"), &JsValue::from_str(&data.url))?;

        let result = share_fn.call1(&navigator, &payload)?;
        if let Ok(promise) = result.dyn_into::<Promise>() {
            let on_reject = Closure::wrap(Box::new(|err: JsValue| {
                log::error!("share failed: {:?}", err);
            }) as Box<dyn FnMut(JsValue)>);
            let _ = promise.catch(&on_reject);
            on_reject.forget();
        }
        return Ok(());
    }

    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    if clipboard.is_object() {
        let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))?;
        if let Some(write_text) = write_text.dyn_ref::<Function>() {
            write_text.call1(&clipboard, &JsValue::from_str(&data.url))?;
        }
    }
    window.alert_with_message("Link copied to clipboard")
}
