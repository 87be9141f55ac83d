use crate::constants::TILT_PERSPECTIVE_PX;
use crate::core::{Magnetic, Tilt};
use crate::dom;
use crate::events::Listener;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One `[data-magnetic]` and/or `[data-tilt]` element with its springs.
struct HoverBinding {
    el: web::HtmlElement,
    magnetic: Option<Rc<RefCell<Magnetic>>>,
    tilt: Option<Rc<RefCell<Tilt>>>,
    resting: bool,
    _listeners: [Listener; 2],
}

pub struct HoverBindings {
    bindings: Vec<HoverBinding>,
}

impl HoverBindings {
    /// Bind every magnetic or tilt element currently in the document.
    pub fn bind(document: &web::Document, default_strength: f32) -> Self {
        let bindings: Vec<HoverBinding> =
            dom::query_all(document, "[data-magnetic], [data-tilt]")
                .into_iter()
                .filter_map(|el| match bind_element(el, default_strength) {
                    Ok(b) => Some(b),
                    Err(e) => {
                        log::warn!("[hover] skipped element: {e:#}");
                        None
                    }
                })
                .collect();
        log::info!("[hover] bound {} elements", bindings.len());
        Self { bindings }
    }

    pub fn step(&mut self, dt_sec: f32) {
        for b in self.bindings.iter_mut() {
            b.step(dt_sec);
        }
    }
}

fn bind_element(el: web::HtmlElement, default_strength: f32) -> anyhow::Result<HoverBinding> {
    let magnetic = el.get_attribute("data-magnetic").map(|v| {
        let strength = v.trim().parse::<f32>().unwrap_or(default_strength);
        Rc::new(RefCell::new(Magnetic::new(strength)))
    });
    let tilt = el
        .has_attribute("data-tilt")
        .then(|| Rc::new(RefCell::new(Tilt::default())));

    let target: &web::EventTarget = el.as_ref();
    let on_move = {
        let el = el.clone();
        let magnetic = magnetic.clone();
        let tilt = tilt.clone();
        Listener::new(target, "mousemove", move |ev: web::Event| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            let rect = dom::rect_of(&el);
            if let Some(m) = &magnetic {
                m.borrow_mut().pointer_move(rect, pointer);
            }
            if let Some(t) = &tilt {
                t.borrow_mut().pointer_move(rect, pointer);
            }
        })?
    };
    let on_leave = {
        let magnetic = magnetic.clone();
        let tilt = tilt.clone();
        Listener::new(target, "mouseleave", move |_ev: web::Event| {
            if let Some(m) = &magnetic {
                m.borrow_mut().pointer_leave();
            }
            if let Some(t) = &tilt {
                t.borrow_mut().pointer_leave();
            }
        })?
    };
    Ok(HoverBinding {
        el,
        magnetic,
        tilt,
        resting: true,
        _listeners: [on_move, on_leave],
    })
}

impl HoverBinding {
    fn step(&mut self, dt_sec: f32) {
        let offset = self
            .magnetic
            .as_ref()
            .map(|m| m.borrow_mut().step(dt_sec))
            .unwrap_or(Vec2::ZERO);
        let (rx, ry) = self
            .tilt
            .as_ref()
            .map(|t| t.borrow_mut().step(dt_sec))
            .unwrap_or((0.0, 0.0));
        let at_rest = offset.abs().max_element() < 0.01 && rx.abs() < 0.01 && ry.abs() < 0.01;
        if at_rest && self.resting {
            return;
        }
        self.resting = at_rest;
        if at_rest {
            dom::set_style(&self.el, "transform", "");
            return;
        }
        let mut transform = String::new();
        if self.tilt.is_some() {
            transform.push_str(&format!(
                "perspective({TILT_PERSPECTIVE_PX}px) rotateX({rx:.2}deg) rotateY({ry:.2}deg) "
            ));
        }
        if self.magnetic.is_some() {
            transform.push_str(&format!(
                "translate3d({:.2}px,{:.2}px,0)",
                offset.x, offset.y
            ));
        }
        dom::set_style(&self.el, "transform", transform.trim_end());
    }
}
