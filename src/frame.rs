use crate::constants::MAX_FRAME_DT_SEC;
use crate::core::{Cursor, GateField, InputReader, Scene};
use crate::cursor::CursorView;
use crate::dom;
use crate::gates::GatesView;
use crate::magnetic::HoverBindings;
use crate::render;
use crate::reveal::ScrollBindings;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CursorLayer {
    pub cursor: Rc<RefCell<Cursor>>,
    pub view: CursorView,
}

pub struct GateLayer {
    pub field: Rc<RefCell<GateField>>,
    pub view: GatesView,
}

pub struct SceneLayer {
    pub scene: Scene,
    pub canvas: web::HtmlCanvasElement,
    /// Attached once the async WebGPU setup finishes.
    pub gpu: Option<render::GpuState<'static>>,
}

pub struct FrameContext {
    pub input: InputReader,
    pub cursor: Option<CursorLayer>,
    pub gates: Option<GateLayer>,
    pub hovers: HoverBindings,
    pub scroll: ScrollBindings,
    pub scene: Option<SceneLayer>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant)
            .as_secs_f32()
            .min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        let input = self.input.snapshot();
        let pointer = input.pointer_seen.then(|| input.pointer.as_vec2());

        if let (Some(layer), Some(p)) = (&self.cursor, pointer) {
            let frame = layer.cursor.borrow_mut().step(dt_sec, p);
            if let Some(frame) = frame {
                layer.view.apply(&frame);
            }
        }

        if let Some(layer) = self.gates.as_mut() {
            let mut field = layer.field.borrow_mut();
            layer.view.sync(&field);
            let visuals = field.step(dt_sec, pointer);
            layer.view.apply(visuals);
        }

        self.hovers.step(dt_sec);
        self.scroll.step(dt_sec, &input);

        if let Some(layer) = self.scene.as_mut() {
            layer.scene.update(dt_sec, input.pointer_ndc());
            if let Some(g) = layer.gpu.as_mut() {
                g.resize_if_needed(layer.canvas.width(), layer.canvas.height());
                if let Err(e) = g.render(&layer.scene) {
                    log::warn!("[scene] frame skipped: {:?}", e);
                }
            }
        }
    }

    pub fn attach_gpu(&mut self, gpu: render::GpuState<'static>) {
        if let Some(layer) = self.scene.as_mut() {
            layer.gpu = Some(gpu);
            log::info!("[scene] WebGPU renderer attached");
        }
    }

    /// Stop stepping the scene and hide its canvas. Used when the renderer
    /// cannot be created.
    pub fn detach_scene(&mut self) {
        if let Some(layer) = self.scene.take() {
            dom::set_style(&layer.canvas, "display", "none");
            log::info!("[scene] disabled, canvas hidden");
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    tint: [f32; 3],
) -> Option<render::GpuState<'static>> {
    match render::GpuState::new(canvas, tint).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Running requestAnimationFrame loop. Dropping it cancels the pending frame
/// and releases the frame context.
pub struct FrameLoop {
    tick: Tick,
    handle: Rc<Cell<Option<i32>>>,
}

fn request_frame(tick: &Weak<RefCell<Option<Closure<dyn FnMut()>>>>, handle: &Cell<Option<i32>>) {
    let (Some(tick), Some(w)) = (tick.upgrade(), web::window()) else {
        return;
    };
    let tick = tick.borrow();
    if let Some(cb) = tick.as_ref() {
        handle.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: Tick = Rc::new(RefCell::new(None));
    let handle = Rc::new(Cell::new(None));
    let weak_tick = Rc::downgrade(&tick);
    let handle_tick = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        handle_tick.set(None);
        if let Ok(mut ctx) = frame_ctx.try_borrow_mut() {
            ctx.frame();
        }
        request_frame(&weak_tick, &handle_tick);
    }) as Box<dyn FnMut()>));
    request_frame(&Rc::downgrade(&tick), &handle);
    FrameLoop { tick, handle }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}
