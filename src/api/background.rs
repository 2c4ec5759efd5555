//! `FlowFieldBackground` as seen from JavaScript
//!
//! ```js
//! const bg = new FlowFieldBackground(document.querySelector(".hero"), '{"particleCount": 400}');
//! // ...
//! bg.destroy();
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlElement, MouseEvent};

use super::dom;
use crate::domain::config::FlowFieldConfig;
use crate::render::CanvasSurface;
use crate::simulation::{FieldEvents, FlowFieldBackground, FrameStats, FrameToken};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

struct Mounted {
    background: FlowFieldBackground<CanvasSurface>,
    container: HtmlElement,
    /// Token of the scheduled frame and its requestAnimationFrame id
    pending: Option<(FrameToken, i32)>,
}

struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn add<F>(target: &EventTarget, kind: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }

    fn remove(self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

#[wasm_bindgen(js_name = FlowFieldBackground)]
pub struct FlowFieldHandle {
    mounted: Rc<RefCell<Mounted>>,
    frame_callback: FrameCallback,
    listeners: Vec<Listener>,
}

#[wasm_bindgen(js_class = FlowFieldBackground)]
impl FlowFieldHandle {
    /// Mount a canvas as the first child of `container` and start animating
    #[wasm_bindgen(constructor)]
    pub fn new(container: HtmlElement, options_json: Option<String>) -> Result<FlowFieldHandle, JsValue> {
        let window = dom::window()?;
        let document = dom::document(&window)?;

        let config = match options_json {
            Some(json) => FlowFieldConfig::from_json(&json).map_err(|e| JsValue::from_str(&e))?,
            None => FlowFieldConfig::default(),
        };

        let surface = CanvasSurface::new(&document)?;
        container.insert_before(surface.canvas(), container.first_child().as_ref())?;

        let (width, height) = measure(&container);
        let background =
            FlowFieldBackground::attach(surface, width, height, window.device_pixel_ratio(), config);

        let mounted = Rc::new(RefCell::new(Mounted {
            background,
            container: container.clone(),
            pending: None,
        }));
        let frame_callback: FrameCallback = Rc::new(RefCell::new(None));
        *frame_callback.borrow_mut() = Some(animation_frame(
            Rc::downgrade(&mounted),
            Rc::downgrade(&frame_callback),
        ));

        let mut handle = FlowFieldHandle {
            mounted,
            frame_callback,
            listeners: Vec::new(),
        };
        handle.listeners = handle.install_listeners(&window, &container)?;
        handle.start()?;
        Ok(handle)
    }

    /// Start the frame loop; no-op when already running or destroyed
    pub fn start(&mut self) -> Result<(), JsValue> {
        let token = self.mounted.borrow_mut().background.start();
        match token {
            Some(token) => schedule(&self.mounted, &self.frame_callback, token),
            None => Ok(()),
        }
    }

    /// Cancel the loop, remove listeners and the canvas. Safe to call twice.
    pub fn destroy(&mut self) {
        for listener in self.listeners.drain(..) {
            listener.remove();
        }

        {
            let mut mounted = self.mounted.borrow_mut();
            mounted.background.detach();
            if let Some((_, raf_id)) = mounted.pending.take() {
                if let Some(window) = web_sys::window() {
                    let _ = window.cancel_animation_frame(raf_id);
                }
            }

            let canvas = mounted.background.surface().canvas();
            if canvas.parent_node().is_some() {
                canvas.remove();
            }
        }

        self.frame_callback.borrow_mut().take();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.mounted.borrow().background.is_running()
    }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 {
        self.mounted.borrow().background.field().particle_count() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.mounted.borrow().background.field().frame()
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.mounted
            .borrow_mut()
            .background
            .field_mut()
            .enable_perf_metrics(enabled);
    }

    /// Last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> FrameStats {
        self.mounted.borrow().background.field().perf_stats()
    }
}

impl FlowFieldHandle {
    fn install_listeners(&self, window: &web_sys::Window, container: &HtmlElement) -> Result<Vec<Listener>, JsValue> {
        let mut listeners = Vec::with_capacity(3);

        let mounted = self.mounted.clone();
        listeners.push(Listener::add(window, "resize", move |_| {
            let Some(window) = web_sys::window() else { return };
            let mut mounted = mounted.borrow_mut();
            let (width, height) = measure(&mounted.container);
            mounted.background.set_device_pixel_ratio(window.device_pixel_ratio());
            mounted.background.on_resize(width, height);
        })?);

        let mounted = self.mounted.clone();
        listeners.push(Listener::add(container, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else { return };
            let mut mounted = mounted.borrow_mut();
            let rect = mounted.background.surface().canvas().get_bounding_client_rect();
            let x = event.client_x() as f64 - rect.left();
            let y = event.client_y() as f64 - rect.top();
            mounted.background.on_pointer_move(x, y);
        })?);

        let mounted = self.mounted.clone();
        listeners.push(Listener::add(container, "mouseleave", move |_| {
            mounted.borrow_mut().background.on_pointer_leave();
        })?);

        Ok(listeners)
    }
}

impl Drop for FlowFieldHandle {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn measure(container: &HtmlElement) -> (f64, f64) {
    (container.client_width() as f64, container.client_height() as f64)
}

fn schedule(mounted: &RefCell<Mounted>, frame_callback: &FrameCallback, token: FrameToken) -> Result<(), JsValue> {
    let callback = frame_callback.borrow();
    let Some(callback) = callback.as_ref() else {
        return Ok(());
    };
    let raf_id = dom::window()?.request_animation_frame(callback.as_ref().unchecked_ref())?;
    mounted.borrow_mut().pending = Some((token, raf_id));
    Ok(())
}

/// The per-frame callback. Holds weak references only, so dropping the
/// handle frees everything even while a frame is queued.
fn animation_frame(mounted: Weak<RefCell<Mounted>>, frame_callback: Weak<RefCell<Option<Closure<dyn FnMut()>>>>) -> Closure<dyn FnMut()> {
    Closure::wrap(Box::new(move || {
        let (Some(mounted), Some(frame_callback)) = (mounted.upgrade(), frame_callback.upgrade()) else {
            return;
        };

        let next = {
            let mut state = mounted.borrow_mut();
            match state.pending.take() {
                Some((token, _)) => state.background.on_frame(token),
                None => None,
            }
        };

        if let Some(next) = next {
            dom::report("schedule frame", schedule(&mounted, &frame_callback, next));
        }
    }) as Box<dyn FnMut()>)
}
