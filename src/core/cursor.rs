// Layered custom cursor.
//
// Hover is decided from the event target's ancestor chain, press is tracked
// globally. Every layer owns springs for position, size, rotation and
// opacity so layers can trail the pointer at different rates.

use crate::constants::*;
use crate::core::spring::{Spring, Spring2, SpringConfig};
use glam::Vec2;
use smallvec::SmallVec;
use std::str::FromStr;

/// Minimal view of a DOM node needed for hover detection.
pub trait CursorTarget: Sized {
    /// Upper-case tag name, e.g. `"A"`.
    fn tag_name(&self) -> String;
    fn attribute(&self, name: &str) -> Option<String>;
    fn parent(&self) -> Option<Self>;
}

/// True when `target` or one of its ancestors is a link, a button or is
/// tagged with `data-cursor="pointer"`.
pub fn is_interactive<T: CursorTarget>(target: &T) -> bool {
    if is_interactive_node(target) {
        return true;
    }
    let mut node = target.parent();
    while let Some(current) = node {
        if is_interactive_node(&current) {
            return true;
        }
        node = current.parent();
    }
    false
}

fn is_interactive_node<T: CursorTarget>(node: &T) -> bool {
    let tag = node.tag_name();
    tag.eq_ignore_ascii_case("a")
        || tag.eq_ignore_ascii_case("button")
        || node.attribute("data-cursor").as_deref() == Some("pointer")
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorVariant {
    #[default]
    DotRing,
    Prism,
}

impl FromStr for CursorVariant {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dot-ring" | "dotring" | "ring" => Ok(Self::DotRing),
            "prism" | "polygon" => Ok(Self::Prism),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorShape {
    Dot,
    Ring,
    Polygon { sides: u32 },
}

/// Discrete cursor flags; hover and press are independent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CursorState {
    pub hovering: bool,
    pub pressed: bool,
}

impl CursorState {
    pub fn is_idle(&self) -> bool {
        !self.hovering && !self.pressed
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct LayerStyle {
    size: f32,
    rotation_deg: f32,
    opacity: f32,
}

#[derive(Clone, Copy, Debug)]
struct LayerSpec {
    shape: CursorShape,
    /// `None` pins the layer to the raw pointer sample.
    follow: Option<SpringConfig>,
    idle: LayerStyle,
    hover: LayerStyle,
}

impl LayerSpec {
    fn style_for(&self, state: CursorState) -> LayerStyle {
        let mut style = if state.hovering { self.hover } else { self.idle };
        if state.pressed {
            style.size *= CURSOR_PRESS_SCALE;
        }
        style
    }
}

fn layer_specs(variant: CursorVariant) -> SmallVec<[LayerSpec; 3]> {
    let mut specs = SmallVec::new();
    match variant {
        CursorVariant::DotRing => {
            let dot = LayerStyle {
                size: CURSOR_DOT_SIZE,
                rotation_deg: 0.0,
                opacity: 1.0,
            };
            specs.push(LayerSpec {
                shape: CursorShape::Dot,
                follow: None,
                idle: dot,
                hover: dot,
            });
            specs.push(LayerSpec {
                shape: CursorShape::Ring,
                follow: Some(SpringConfig::new(
                    CURSOR_RING_STIFFNESS,
                    CURSOR_RING_DAMPING,
                    CURSOR_RING_MASS,
                )),
                idle: LayerStyle {
                    size: CURSOR_RING_SIZE,
                    rotation_deg: 0.0,
                    opacity: CURSOR_RING_OPACITY,
                },
                hover: LayerStyle {
                    size: CURSOR_RING_HOVER_SIZE,
                    rotation_deg: 0.0,
                    opacity: CURSOR_RING_HOVER_OPACITY,
                },
            });
        }
        CursorVariant::Prism => {
            let dot = LayerStyle {
                size: CURSOR_DOT_SIZE,
                rotation_deg: 0.0,
                opacity: 1.0,
            };
            specs.push(LayerSpec {
                shape: CursorShape::Dot,
                follow: None,
                idle: dot,
                hover: LayerStyle { opacity: 0.0, ..dot },
            });
            specs.push(LayerSpec {
                shape: CursorShape::Polygon {
                    sides: CURSOR_PRISM_SIDES,
                },
                follow: Some(SpringConfig::new(
                    CURSOR_PRISM_STIFFNESS,
                    CURSOR_PRISM_DAMPING,
                    CURSOR_PRISM_MASS,
                )),
                idle: LayerStyle {
                    size: CURSOR_PRISM_SIZE,
                    rotation_deg: 0.0,
                    opacity: CURSOR_RING_OPACITY,
                },
                hover: LayerStyle {
                    size: CURSOR_PRISM_HOVER_SIZE,
                    rotation_deg: CURSOR_PRISM_HOVER_ROTATION_DEG,
                    opacity: CURSOR_RING_HOVER_OPACITY,
                },
            });
        }
    }
    specs
}

#[derive(Clone, Debug)]
struct CursorLayer {
    spec: LayerSpec,
    position: Option<Spring2>,
    size: Spring,
    rotation: Spring,
    opacity: Spring,
}

impl CursorLayer {
    fn new(spec: LayerSpec) -> Self {
        let style = SpringConfig::with_unit_mass(CURSOR_STYLE_STIFFNESS, CURSOR_STYLE_DAMPING);
        Self {
            position: spec.follow.map(|cfg| Spring2::new(cfg, Vec2::ZERO)),
            size: Spring::new(style, spec.idle.size),
            rotation: Spring::new(style, spec.idle.rotation_deg),
            opacity: Spring::new(style, spec.idle.opacity),
            spec,
        }
    }
}

/// Per-frame output for one layer, in viewport pixels and degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerFrame {
    pub shape: CursorShape,
    pub center: Vec2,
    pub size: f32,
    pub rotation_deg: f32,
    pub opacity: f32,
}

pub type CursorFrame = SmallVec<[LayerFrame; 3]>;

pub struct Cursor {
    variant: CursorVariant,
    state: CursorState,
    layers: SmallVec<[CursorLayer; 3]>,
    enabled: bool,
    placed: bool,
}

impl Cursor {
    /// A coarse (touch) primary pointer disables the cursor entirely.
    pub fn new(variant: CursorVariant, coarse_pointer: bool) -> Self {
        let enabled = !coarse_pointer;
        let layers = if enabled {
            layer_specs(variant).into_iter().map(CursorLayer::new).collect()
        } else {
            SmallVec::new()
        };
        Self {
            variant,
            state: CursorState::default(),
            layers,
            enabled,
            placed: false,
        }
    }

    pub fn variant(&self) -> CursorVariant {
        self.variant
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    pub fn shapes(&self) -> impl Iterator<Item = CursorShape> + '_ {
        self.layers.iter().map(|l| l.spec.shape)
    }

    pub fn pointer_over(&mut self, interactive: bool) {
        if interactive {
            self.state.hovering = true;
        }
    }

    pub fn pointer_out(&mut self) {
        self.state.hovering = false;
    }

    pub fn pointer_down(&mut self) {
        self.state.pressed = true;
    }

    pub fn pointer_up(&mut self) {
        self.state.pressed = false;
    }

    /// Advance every layer toward `pointer` and the current state's style.
    /// Returns `None` while disabled.
    pub fn step(&mut self, dt_sec: f32, pointer: Vec2) -> Option<CursorFrame> {
        if !self.enabled {
            return None;
        }
        let first_frame = !self.placed;
        self.placed = true;
        let state = self.state;
        let frame = self
            .layers
            .iter_mut()
            .map(|layer| {
                let style = layer.spec.style_for(state);
                layer.size.set_target(style.size);
                layer.rotation.set_target(style.rotation_deg);
                layer.opacity.set_target(style.opacity);
                let center = match layer.position.as_mut() {
                    Some(spring) if first_frame => {
                        spring.jump_to(pointer);
                        pointer
                    }
                    Some(spring) => {
                        spring.set_target(pointer);
                        spring.step(dt_sec)
                    }
                    None => pointer,
                };
                LayerFrame {
                    shape: layer.spec.shape,
                    center,
                    size: layer.size.step(dt_sec).max(0.0),
                    rotation_deg: layer.rotation.step(dt_sec),
                    opacity: layer.opacity.step(dt_sec).clamp(0.0, 1.0),
                }
            })
            .collect();
        Some(frame)
    }
}
