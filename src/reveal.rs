use crate::constants::REVEAL_STAGGER_SEC;
use crate::core::scroll::{intersects_viewport, RevealFrame};
use crate::core::{InputSnapshot, Marquee, NavVisibility, Parallax, Reveal};
use crate::dom;
use fnv::FnvHashMap;
use wasm_bindgen::JsCast;
use web_sys as web;

const NAV_VISIBLE_CLASS: &str = "fx-visible";

struct ParallaxBinding {
    el: web::HtmlElement,
    /// Measured instead of `el` so the applied translation does not feed back.
    frame: web::Element,
    parallax: Parallax,
    opacity: Option<Parallax>,
}

/// Scroll-driven bindings: fire-once reveals, parallax layers and the
/// floating nav, plus marquee tracks.
pub struct ScrollBindings {
    reveals: FnvHashMap<usize, (web::HtmlElement, Reveal)>,
    parallax: Vec<ParallaxBinding>,
    marquees: Vec<(web::HtmlElement, Marquee)>,
    nav: Option<(web::Element, NavVisibility)>,
}

impl ScrollBindings {
    pub fn bind(document: &web::Document, reduced_motion: bool) -> Self {
        let mut reveals = FnvHashMap::default();
        let mut next_id = 0usize;
        let mut push = |el: web::HtmlElement, reveal: Reveal| {
            if reduced_motion {
                apply_reveal(&el, RevealFrame::SHOWN);
            } else {
                apply_reveal(&el, RevealFrame::HIDDEN);
                reveals.insert(next_id, (el, reveal));
                next_id += 1;
            }
        };

        for el in dom::query_all(document, "[data-reveal]") {
            let delay = el
                .get_attribute("data-reveal")
                .and_then(|v| v.trim().parse::<f32>().ok())
                .unwrap_or(0.0);
            push(el, Reveal::new(delay));
        }
        for group in dom::query_all(document, "[data-reveal-stagger]") {
            let base = group
                .get_attribute("data-reveal-stagger")
                .and_then(|v| v.trim().parse::<f32>().ok())
                .unwrap_or(0.0);
            let children = group.children();
            for i in 0..children.length() {
                let Some(child) = children
                    .item(i)
                    .and_then(|c| c.dyn_into::<web::HtmlElement>().ok())
                else {
                    continue;
                };
                push(child, Reveal::staggered(base, i as usize, REVEAL_STAGGER_SEC));
            }
        }

        let parallax: Vec<ParallaxBinding> = if reduced_motion {
            Vec::new()
        } else {
            dom::query_all(document, "[data-parallax]")
                .into_iter()
                .map(|el| {
                    let parallax = el
                        .get_attribute("data-parallax")
                        .and_then(|v| Parallax::parse(&v))
                        .unwrap_or_default();
                    let opacity = el
                        .get_attribute("data-parallax-opacity")
                        .and_then(|v| Parallax::parse(&v));
                    let frame = el
                        .parent_element()
                        .unwrap_or_else(|| el.clone().into());
                    ParallaxBinding {
                        el,
                        frame,
                        parallax,
                        opacity,
                    }
                })
                .collect()
        };

        // reduced motion leaves marquee tracks static
        let marquees: Vec<(web::HtmlElement, Marquee)> = if reduced_motion {
            Vec::new()
        } else {
            dom::query_all(document, "[data-marquee]")
                .into_iter()
                .map(|el| {
                    let marquee = el
                        .get_attribute("data-marquee")
                        .and_then(|v| v.trim().parse::<f32>().ok())
                        .map(Marquee::new)
                        .unwrap_or_default();
                    (el, marquee)
                })
                .collect()
        };

        let nav = document
            .query_selector("[data-fx-nav]")
            .ok()
            .flatten()
            .map(|el| (el, NavVisibility::default()));

        log::info!(
            "[scroll] {} reveals, {} parallax layers, {} marquees, nav={}",
            reveals.len(),
            parallax.len(),
            marquees.len(),
            nav.is_some()
        );
        Self {
            reveals,
            parallax,
            marquees,
            nav,
        }
    }

    pub fn step(&mut self, dt_sec: f32, input: &InputSnapshot) {
        let vh = input.viewport.y;

        self.reveals.retain(|_, (el, reveal)| {
            if !reveal.has_fired() {
                let r = el.get_bounding_client_rect();
                if !reveal.observe(intersects_viewport(r.top() as f32, r.height() as f32, vh)) {
                    return true;
                }
            }
            apply_reveal(el, reveal.step(dt_sec));
            !reveal.is_complete()
        });

        for b in &self.parallax {
            let r = b.frame.get_bounding_client_rect();
            let (top, height) = (r.top() as f32, r.height() as f32);
            let y = b.parallax.value_for_rect(top, height, vh);
            dom::set_style(&b.el, "transform", &format!("translate3d(0,{y:.2}px,0)"));
            if let Some(o) = b.opacity {
                let opacity = o.value_for_rect(top, height, vh);
                dom::set_style(&b.el, "opacity", &format!("{opacity:.3}"));
            }
        }

        for (el, marquee) in self.marquees.iter_mut() {
            let x = marquee.step(dt_sec);
            dom::set_style(el, "transform", &format!("translate3d({x:.3}%,0,0)"));
        }

        if let Some((el, nav)) = self.nav.as_mut() {
            if let Some(visible) = nav.update(input.scroll_y, vh) {
                _ = el.class_list().toggle_with_force(NAV_VISIBLE_CLASS, visible);
            }
        }
    }
}

fn apply_reveal(el: &web::HtmlElement, frame: RevealFrame) {
    dom::set_style(el, "opacity", &format!("{:.3}", frame.opacity));
    if frame.translate_y.abs() < 0.01 {
        dom::set_style(el, "transform", "");
    } else {
        dom::set_style(
            el,
            "transform",
            &format!("translate3d(0,{:.2}px,0)", frame.translate_y),
        );
    }
}
