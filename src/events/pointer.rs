use super::Listener;
use crate::core::cursor::is_interactive;
use crate::core::{Cursor, InputStore};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub store: InputStore,
    /// Absent when the cursor is disabled for this device.
    pub cursor: Option<Rc<RefCell<Cursor>>>,
}

pub fn wire_pointer_handlers(w: &PointerWiring) -> anyhow::Result<Vec<Listener>> {
    let mut listeners = vec![wire_pointermove(w)?];
    listeners.extend(wire_press(w)?);
    if w.cursor.is_some() {
        listeners.extend(wire_hover(w)?);
    }
    Ok(listeners)
}

fn wire_pointermove(w: &PointerWiring) -> anyhow::Result<Listener> {
    let store = w.store.clone();
    Listener::new(w.window.as_ref(), "pointermove", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            store.record_pointer(ev.client_x() as f32, ev.client_y() as f32);
        }
    })
}

fn wire_press(w: &PointerWiring) -> anyhow::Result<Vec<Listener>> {
    let press = |event: &'static str, pressed: bool| {
        let store = w.store.clone();
        let cursor = w.cursor.clone();
        Listener::new(w.window.as_ref(), event, move |_ev: web::Event| {
            store.set_pressed(pressed);
            if let Some(c) = &cursor {
                let mut c = c.borrow_mut();
                if pressed {
                    c.pointer_down();
                } else {
                    c.pointer_up();
                }
            }
        })
    };
    Ok(vec![
        press("pointerdown", true)?,
        press("pointerup", false)?,
        press("pointercancel", false)?,
    ])
}

fn wire_hover(w: &PointerWiring) -> anyhow::Result<Vec<Listener>> {
    let over = {
        let cursor = w.cursor.clone();
        Listener::new(w.document.as_ref(), "mouseover", move |ev: web::Event| {
            let Some(c) = &cursor else { return };
            let interactive = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
                .map(|el| is_interactive(&el))
                .unwrap_or(false);
            c.borrow_mut().pointer_over(interactive);
        })?
    };
    let out = {
        let cursor = w.cursor.clone();
        Listener::new(w.document.as_ref(), "mouseout", move |_ev: web::Event| {
            if let Some(c) = &cursor {
                c.borrow_mut().pointer_out();
            }
        })?
    };
    Ok(vec![over, out])
}
