use crate::config::{parse_css_color, DeviceHints, ATTRIBUTE_PREFIX};
use crate::core::{CursorTarget, Rect};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn viewport_size() -> Vec2 {
    let Some(w) = web::window() else {
        return Vec2::ZERO;
    };
    let px = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Vec2::new(px(w.inner_width()), px(w.inner_height()))
}

pub fn scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

pub fn media_matches(query: &str) -> bool {
    web::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}

pub fn device_hints() -> DeviceHints {
    let cores = web::window()
        .map(|w| w.navigator().hardware_concurrency() as u32)
        .unwrap_or(0);
    DeviceHints {
        coarse_pointer: media_matches("(pointer: coarse)"),
        reduced_motion: media_matches("(prefers-reduced-motion: reduce)"),
        cores,
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

#[inline]
pub fn rect_of(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Non-interactive, `aria-hidden` div for effect layers; the caller mounts it.
pub fn create_overlay_div(
    document: &web::Document,
    class: &str,
    style: &str,
) -> Option<web::HtmlElement> {
    let el = document
        .create_element("div")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    el.set_class_name(class);
    _ = el.set_attribute("style", style);
    _ = el.set_attribute("aria-hidden", "true");
    Some(el)
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// `data-fx-*` attributes of `el` as owned `(name, value)` pairs.
pub fn fx_attributes(el: &web::Element) -> Vec<(String, String)> {
    let names: js_sys::Array = el.get_attribute_names();
    names
        .iter()
        .filter_map(|name| name.as_string())
        .filter(|name| name.starts_with(ATTRIBUTE_PREFIX))
        .map(|name| {
            let value = el.get_attribute(&name).unwrap_or_default();
            (name, value)
        })
        .collect()
}

/// Theme accent read from the `--color-accent` custom property.
pub fn accent_color(document: &web::Document) -> Option<[f32; 3]> {
    let root = document.document_element()?;
    let style = web::window()?.get_computed_style(&root).ok().flatten()?;
    let value = style.get_property_value("--color-accent").ok()?;
    parse_css_color(&value)
}

impl CursorTarget for web::Element {
    fn tag_name(&self) -> String {
        web::Element::tag_name(self)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn parent(&self) -> Option<Self> {
        self.parent_element()
    }
}
