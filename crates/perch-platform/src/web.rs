//! DOM host (wasm32): renders views as elements under a mount node and
//! drives frames with `requestAnimationFrame`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use anyhow::anyhow;
use perch_core::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::dom::{SVG_NS, click_handler, polygon_points, style_for, tag_for};

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{e:?}")
}

pub struct DomHost {
    document: Document,
    mount: Element,
    // keyed elements of the last presented tree
    nodes: HashMap<String, Element>,
    // listeners must outlive the elements they are attached to
    listeners: Vec<Closure<dyn FnMut()>>,
}

impl DomHost {
    /// Renders into the element with id `mount_id`.
    pub fn new(mount_id: &str) -> anyhow::Result<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| anyhow!("no document"))?;
        let mount = document
            .get_element_by_id(mount_id)
            .ok_or_else(|| anyhow!("no element with id `{mount_id}`"))?;
        Ok(Self {
            document,
            mount,
            nodes: HashMap::new(),
            listeners: Vec::new(),
        })
    }

    fn build(&mut self, view: &View) -> anyhow::Result<Element> {
        let el = match &view.kind {
            ViewKind::Polygon {
                points,
                width,
                height,
                fill,
                stroke,
                stroke_width,
            } => {
                let svg = self
                    .document
                    .create_element_ns(Some(SVG_NS), "svg")
                    .map_err(js_err)?;
                svg.set_attribute("width", &width.to_string()).map_err(js_err)?;
                svg.set_attribute("height", &height.to_string()).map_err(js_err)?;
                let poly = self
                    .document
                    .create_element_ns(Some(SVG_NS), "polygon")
                    .map_err(js_err)?;
                poly.set_attribute("points", &polygon_points(points)).map_err(js_err)?;
                poly.set_attribute("fill", &fill.to_string()).map_err(js_err)?;
                if let Some(stroke) = stroke {
                    poly.set_attribute("stroke", &stroke.to_string()).map_err(js_err)?;
                    poly.set_attribute("stroke-width", &stroke_width.to_string())
                        .map_err(js_err)?;
                }
                svg.append_child(&poly).map_err(js_err)?;
                svg
            }
            kind => {
                let el = self.document.create_element(tag_for(kind)).map_err(js_err)?;
                if let ViewKind::Text { text, .. } | ViewKind::Button { text, .. } = kind {
                    el.set_text_content(Some(text));
                }
                el
            }
        };

        let class = view.modifier.class_attr();
        if !class.is_empty() {
            el.set_attribute("class", &class).map_err(js_err)?;
        }
        let style = style_for(view);
        if !style.is_empty() {
            el.set_attribute("style", &style).map_err(js_err)?;
        }
        if let Some(key) = &view.key {
            el.set_attribute("id", key).map_err(js_err)?;
            self.nodes.insert(key.clone(), el.clone());
        }
        if let Some(cb) = click_handler(view) {
            let listener = Closure::<dyn FnMut()>::new(move || cb());
            el.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
                .map_err(js_err)?;
            self.listeners.push(listener);
        }

        for child in &view.children {
            let c = self.build(child)?;
            el.append_child(&c).map_err(js_err)?;
        }
        Ok(el)
    }
}

impl Host for DomHost {
    fn present(&mut self, root: &View) {
        self.nodes.clear();
        self.mount.set_inner_html("");
        self.listeners.clear();
        match self.build(root) {
            Ok(el) => {
                if let Err(e) = self.mount.append_child(&el) {
                    log::error!("present: {e:?}");
                }
            }
            Err(e) => log::error!("present: {e}"),
        }
    }

    fn viewport(&self) -> Size {
        let Some(w) = web_sys::window() else {
            return Size::default();
        };
        let px = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
        Size::new(px(w.inner_width()), px(w.inner_height()))
    }

    fn measure(&self, key: &str) -> Option<Measurement> {
        let el = self.nodes.get(key)?;
        if !el.is_connected() {
            return None;
        }
        let r = el.get_bounding_client_rect();
        Some(Measurement {
            rect: Rect::from_edges(
                r.left() as f32,
                r.top() as f32,
                r.right() as f32,
                r.bottom() as f32,
            ),
            client: Size::new(el.client_width() as f32, el.client_height() as f32),
        })
    }
}

/// Mounts `root` under the element `mount_id` and re-renders it on the next
/// animation frame after every state change.
pub fn run_web_app(
    mount_id: &str,
    root: impl FnMut(&mut Scheduler) -> View + 'static,
) -> Result<(), JsValue> {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    let _ = console_log::init_with_level(log::Level::Info);

    let host = DomHost::new(mount_id).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let mut app = WebApp {
        host,
        sched: Scheduler::new(),
        root: Box::new(root),
    };
    app.sched.frame(&mut app.host, &mut app.root);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let on_resize = Closure::<dyn FnMut()>::new(request_frame);
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();

    let app = Rc::new(RefCell::new(app));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = tick.clone();
    *tick.borrow_mut() = Some(Closure::new(move || {
        if frame_requested() {
            let mut app = app.borrow_mut();
            let WebApp { host, sched, root } = &mut *app;
            sched.frame(host, root);
        }
        if let Some(cb) = next.borrow().as_ref() {
            request_animation_frame(cb);
        }
    }));
    if let Some(cb) = tick.borrow().as_ref() {
        request_animation_frame(cb);
    }
    Ok(())
}

struct WebApp {
    host: DomHost,
    sched: Scheduler,
    root: Box<dyn FnMut(&mut Scheduler) -> View>,
}

fn request_animation_frame(f: &Closure<dyn FnMut()>) {
    let requested = web_sys::window()
        .map(|w| w.request_animation_frame(f.as_ref().unchecked_ref()));
    if !matches!(requested, Some(Ok(_))) {
        log::error!("requestAnimationFrame unavailable; frame loop stopped");
    }
}
