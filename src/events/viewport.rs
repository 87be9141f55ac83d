use super::Listener;
use crate::core::{GateField, InputStore};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct ViewportWiring {
    pub window: web::Window,
    pub store: InputStore,
    pub gates: Option<Rc<RefCell<GateField>>>,
    pub canvas: Option<web::HtmlCanvasElement>,
}

pub fn wire_viewport_handlers(w: &ViewportWiring) -> anyhow::Result<Vec<Listener>> {
    let scroll = {
        let store = w.store.clone();
        Listener::passive(w.window.as_ref(), "scroll", move |_ev: web::Event| {
            store.set_scroll(dom::scroll_y());
        })?
    };
    let resize = {
        let store = w.store.clone();
        let gates = w.gates.clone();
        let canvas = w.canvas.clone();
        Listener::new(w.window.as_ref(), "resize", move |_ev: web::Event| {
            let size = dom::viewport_size();
            store.set_viewport(size.x, size.y);
            if let Some(g) = &gates {
                g.borrow_mut().regenerate(size);
            }
            if let Some(c) = &canvas {
                dom::sync_canvas_backing_size(c);
            }
        })?
    };
    Ok(vec![scroll, resize])
}
