use crate::core::gates::{Anchor, GateVisual};
use crate::core::GateField;
use crate::dom;
use crate::constants::GATE_GLOW_SIZE;
use web_sys as web;

const CONTAINER_STYLE: &str =
    "position:fixed;inset:0;pointer-events:none;overflow:hidden;z-index:0;";

struct GateNodes {
    root: web::HtmlElement,
    left: web::HtmlElement,
    right: web::HtmlElement,
    glow: web::HtmlElement,
}

/// Fixed overlay holding one split gate per anchor.
pub struct GatesView {
    document: web::Document,
    container: web::HtmlElement,
    gates: Vec<GateNodes>,
    generation: Option<u32>,
}

impl GatesView {
    pub fn mount(document: &web::Document) -> anyhow::Result<Self> {
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no body"))?;
        let container = dom::create_overlay_div(document, "fx-gates", CONTAINER_STYLE)
            .ok_or_else(|| anyhow::anyhow!("create gates container"))?;
        body.prepend_with_node_1(&container)
            .map_err(|e| anyhow::anyhow!("mount gates: {:?}", e))?;
        Ok(Self {
            document: document.clone(),
            container,
            gates: Vec::new(),
            generation: None,
        })
    }

    /// Recreate the gate elements when the field has been regenerated.
    pub fn sync(&mut self, field: &GateField) {
        if self.generation == Some(field.generation()) {
            return;
        }
        self.generation = Some(field.generation());
        self.container.set_inner_html("");
        // nodes stay index-aligned with the field's visuals, or there are none
        let built: Option<Vec<GateNodes>> =
            field.anchors().iter().map(|a| self.build_gate(a)).collect();
        match built {
            Some(gates) => {
                self.gates = gates;
                log::debug!("[gates] view rebuilt with {} gates", self.gates.len());
            }
            None => {
                self.gates.clear();
                self.container.set_inner_html("");
                log::warn!("[gates] could not create gate elements; hidden until next resize");
            }
        }
    }

    fn build_gate(&self, anchor: &Anchor) -> Option<GateNodes> {
        let s = anchor.size;
        let root_style = format!(
            "position:absolute;left:0;top:0;width:{s:.1}px;height:{s:.1}px;\
             transform:translate({:.1}px,{:.1}px) rotate({:.1}deg);",
            anchor.position.x - s * 0.5,
            anchor.position.y - s * 0.5,
            anchor.rotation_deg
        );
        let half_style = format!(
            "position:absolute;top:{:.1}px;width:{:.1}px;height:1px;\
             background:var(--color-accent);will-change:transform;",
            s * 0.5,
            s * 0.5
        );
        let glow = GATE_GLOW_SIZE;
        let glow_style = format!(
            "position:absolute;left:{:.1}px;top:{:.1}px;width:{glow}px;height:{glow}px;\
             border-radius:50%;background:var(--color-accent);\
             box-shadow:0 0 8px var(--color-accent);opacity:0;display:none;",
            (s - glow) * 0.5,
            (s - glow) * 0.5
        );
        let root = dom::create_overlay_div(&self.document, "fx-gate", &root_style)?;
        let left = dom::create_overlay_div(
            &self.document,
            "fx-gate-half",
            &format!("{half_style}left:0;"),
        )?;
        let right = dom::create_overlay_div(
            &self.document,
            "fx-gate-half",
            &format!("{half_style}left:{:.1}px;", s * 0.5),
        )?;
        let glow = dom::create_overlay_div(&self.document, "fx-gate-glow", &glow_style)?;
        root.append_child(&left).ok()?;
        root.append_child(&right).ok()?;
        root.append_child(&glow).ok()?;
        self.container.append_child(&root).ok()?;
        Some(GateNodes {
            root,
            left,
            right,
            glow,
        })
    }

    pub fn apply(&self, visuals: &[GateVisual]) {
        for (nodes, v) in self.gates.iter().zip(visuals) {
            dom::set_style(&nodes.root, "opacity", &format!("{:.3}", v.opacity));
            dom::set_style(
                &nodes.left,
                "transform",
                &format!("translateX({:.2}px)", -v.spread),
            );
            dom::set_style(
                &nodes.right,
                "transform",
                &format!("translateX({:.2}px)", v.spread),
            );
            match v.glow_opacity {
                Some(o) => {
                    dom::set_style(&nodes.glow, "display", "block");
                    dom::set_style(&nodes.glow, "opacity", &format!("{:.3}", o));
                }
                None => dom::set_style(&nodes.glow, "display", "none"),
            }
        }
    }
}

impl Drop for GatesView {
    fn drop(&mut self) {
        self.container.remove();
    }
}
