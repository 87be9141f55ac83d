use crate::core::cursor::{CursorFrame, CursorShape};
use crate::core::Cursor;
use crate::dom;
use web_sys as web;

/// Root class that hides the native cursor while the custom one is mounted.
pub const ACTIVE_CLASS: &str = "fx-cursor-active";

const LAYER_STYLE: &str = "position:fixed;left:0;top:0;pointer-events:none;z-index:9999;opacity:0;\
                           will-change:transform,width,height,opacity;box-sizing:border-box;";

/// DOM layers mirroring a `Cursor`'s shapes, one fixed element per layer.
pub struct CursorView {
    root: web::Element,
    layers: Vec<web::HtmlElement>,
}

impl CursorView {
    pub fn mount(document: &web::Document, cursor: &Cursor) -> anyhow::Result<Self> {
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no body"))?;
        let root = document
            .document_element()
            .ok_or_else(|| anyhow::anyhow!("no document element"))?;
        let mut layers = Vec::new();
        for shape in cursor.shapes() {
            let style = format!("{LAYER_STYLE}{}", shape_style(shape));
            let el = dom::create_overlay_div(document, shape_class(shape), &style)
                .ok_or_else(|| anyhow::anyhow!("create cursor layer"))?;
            body.append_child(&el)
                .map_err(|e| anyhow::anyhow!("append cursor layer: {:?}", e))?;
            layers.push(el);
        }
        _ = root.class_list().add_1(ACTIVE_CLASS);
        log::debug!(
            "[cursor] mounted {:?} with {} layers",
            cursor.variant(),
            layers.len()
        );
        Ok(Self { root, layers })
    }

    pub fn apply(&self, frame: &CursorFrame) {
        for (el, layer) in self.layers.iter().zip(frame.iter()) {
            let half = layer.size * 0.5;
            let transform = format!(
                "translate3d({:.2}px,{:.2}px,0) rotate({:.2}deg)",
                layer.center.x - half,
                layer.center.y - half,
                layer.rotation_deg
            );
            dom::set_style(el, "transform", &transform);
            let size = format!("{:.2}px", layer.size);
            dom::set_style(el, "width", &size);
            dom::set_style(el, "height", &size);
            dom::set_style(el, "opacity", &format!("{:.3}", layer.opacity));
        }
    }
}

impl Drop for CursorView {
    fn drop(&mut self) {
        for el in &self.layers {
            el.remove();
        }
        _ = self.root.class_list().remove_1(ACTIVE_CLASS);
    }
}

fn shape_class(shape: CursorShape) -> &'static str {
    match shape {
        CursorShape::Dot => "fx-cursor-dot",
        CursorShape::Ring => "fx-cursor-ring",
        CursorShape::Polygon { .. } => "fx-cursor-prism",
    }
}

fn shape_style(shape: CursorShape) -> String {
    match shape {
        CursorShape::Dot => "border-radius:50%;background:var(--color-accent);".to_string(),
        CursorShape::Ring => {
            "border-radius:50%;border:1px solid var(--color-accent);".to_string()
        }
        CursorShape::Polygon { sides } => format!(
            "background:var(--color-accent);clip-path:{};",
            polygon_clip_path(sides)
        ),
    }
}

/// Regular polygon inscribed in the element box, first vertex at the top.
fn polygon_clip_path(sides: u32) -> String {
    let sides = sides.max(3);
    let points: Vec<String> = (0..sides)
        .map(|i| {
            let a = std::f32::consts::TAU * i as f32 / sides as f32 - std::f32::consts::FRAC_PI_2;
            format!("{:.2}% {:.2}%", 50.0 + 50.0 * a.cos(), 50.0 + 50.0 * a.sin())
        })
        .collect();
    format!("polygon({})", points.join(","))
}
