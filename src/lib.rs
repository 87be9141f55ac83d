#![cfg(target_arch = "wasm32")]
use crate::config::FxConfig;
use crate::constants::{SCENE_FALLBACK_TINT, SCENE_OPACITY};
use crate::core::{Cursor, GateField, InputStore, Scene};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod config;
mod constants;
mod core;
mod cursor;
mod dom;
mod events;
mod frame;
mod gates;
mod magnetic;
mod render;
mod reveal;

/// Everything the effects layer owns while mounted.
struct Effects {
    _listeners: Vec<events::Listener>,
    _frame_loop: frame::FrameLoop,
}

thread_local! {
    static EFFECTS: RefCell<Option<Effects>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-fx starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Remove every listener, overlay element and pending frame.
#[wasm_bindgen]
pub fn teardown() {
    let effects = EFFECTS.with(|e| e.borrow_mut().take());
    if effects.is_some() {
        drop(effects);
        log::info!("folio-fx torn down");
    }
}

fn load_config(root: &web::Element) -> FxConfig {
    let mut config = FxConfig::default();
    let attrs = dom::fx_attributes(root);
    if let Err(e) = config.apply_overrides(attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))) {
        log::warn!("[config] {e}; later options ignored");
    }
    config
}

fn find_scene_canvas(document: &web::Document) -> Option<web::HtmlCanvasElement> {
    let canvas = document
        .get_element_by_id("fx-scene")?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()?;
    dom::set_style(&canvas, "opacity", &SCENE_OPACITY.to_string());
    dom::sync_canvas_backing_size(&canvas);
    Some(canvas)
}

async fn init() -> anyhow::Result<()> {
    if EFFECTS.with(|e| e.borrow().is_some()) {
        log::warn!("effects already mounted");
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root = document
        .document_element()
        .ok_or_else(|| anyhow::anyhow!("no document element"))?;

    let hints = dom::device_hints();
    let mut config = load_config(&root);
    config.adjust_for_device(hints);
    log::set_max_level(config.log_level.to_level_filter());
    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!(
        "[config] cursor={:?} scene={:?} gates={} seed={seed} hints={hints:?}",
        config.cursor_enabled.then_some(config.cursor),
        config.scene,
        if config.gates_enabled { config.gates.count } else { 0 },
    );

    let viewport = dom::viewport_size();
    let store = InputStore::new(viewport);
    store.set_scroll(dom::scroll_y());

    let cursor = Cursor::new(config.cursor, hints.coarse_pointer);
    let cursor = if config.cursor_enabled && cursor.is_enabled() {
        match cursor::CursorView::mount(&document, &cursor) {
            Ok(view) => Some(frame::CursorLayer {
                cursor: Rc::new(RefCell::new(cursor)),
                view,
            }),
            Err(e) => {
                log::warn!("[cursor] disabled: {e:#}");
                None
            }
        }
    } else {
        None
    };

    let gates = if config.gates_enabled && config.gates.count > 0 {
        match gates::GatesView::mount(&document) {
            Ok(view) => Some(frame::GateLayer {
                field: Rc::new(RefCell::new(GateField::new(config.gates, viewport, seed))),
                view,
            }),
            Err(e) => {
                log::warn!("[gates] disabled: {e:#}");
                None
            }
        }
    } else {
        None
    };

    let scene = config.scene.and_then(|variant| match find_scene_canvas(&document) {
        Some(canvas) => Some(frame::SceneLayer {
            scene: Scene::new(variant, &config.scene_config, seed.rotate_left(17)),
            canvas,
            gpu: None,
        }),
        None => {
            log::info!("[scene] no #fx-scene canvas; scene disabled");
            None
        }
    });
    let scene_canvas = scene.as_ref().map(|s| s.canvas.clone());

    let mut listeners = events::wire_pointer_handlers(&events::PointerWiring {
        window: window.clone(),
        document: document.clone(),
        store: store.clone(),
        cursor: cursor.as_ref().map(|c| c.cursor.clone()),
    })?;
    listeners.extend(events::wire_viewport_handlers(&events::ViewportWiring {
        window: window.clone(),
        store: store.clone(),
        gates: gates.as_ref().map(|g| g.field.clone()),
        canvas: scene_canvas.clone(),
    })?);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        input: store.reader(),
        cursor,
        gates,
        hovers: magnetic::HoverBindings::bind(&document, config.magnetic_strength),
        scroll: reveal::ScrollBindings::bind(&document, hints.reduced_motion),
        scene,
        last_instant: Instant::now(),
    }));

    if let Some(canvas) = scene_canvas {
        let tint = dom::accent_color(&document).unwrap_or(SCENE_FALLBACK_TINT);
        let weak_ctx = Rc::downgrade(&frame_ctx);
        spawn_local(async move {
            let gpu = frame::init_gpu(&canvas, tint).await;
            let Some(ctx) = weak_ctx.upgrade() else {
                return;
            };
            let mut ctx = ctx.borrow_mut();
            match gpu {
                Some(gpu) => ctx.attach_gpu(gpu),
                None => ctx.detach_scene(),
            }
        });
    }

    let frame_loop = frame::start_loop(frame_ctx);
    EFFECTS.with(|e| {
        *e.borrow_mut() = Some(Effects {
            _listeners: listeners,
            _frame_loop: frame_loop,
        })
    });
    log::info!("folio-fx mounted");
    Ok(())
}
