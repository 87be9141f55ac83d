// Shared input store: latest pointer sample, press flag, viewport and scroll.
//
// Event handlers own the [`InputStore`]; effects only get an [`InputReader`]
// and take one [`InputSnapshot`] per frame, so every effect in a frame sees
// the same values.

use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;

/// Pointer position in viewport (CSS pixel) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Map to normalized device coordinates: `[-1, 1]` on both axes, y up.
    pub fn to_ndc(&self, viewport: Vec2) -> Vec2 {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return Vec2::ZERO;
        }
        let u = (self.x / viewport.x).clamp(0.0, 1.0);
        let v = (self.y / viewport.y).clamp(0.0, 1.0);
        Vec2::new(u * 2.0 - 1.0, 1.0 - v * 2.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    pub pointer: PointerSample,
    /// False until the first pointer event arrives.
    pub pointer_seen: bool,
    pub pressed: bool,
    pub viewport: Vec2,
    pub scroll_y: f32,
}

impl InputSnapshot {
    pub fn pointer_ndc(&self) -> Vec2 {
        self.pointer.to_ndc(self.viewport)
    }
}

/// Writable side of the store.
#[derive(Clone, Default)]
pub struct InputStore {
    inner: Rc<Cell<InputSnapshot>>,
}

impl InputStore {
    pub fn new(viewport: Vec2) -> Self {
        let store = Self::default();
        store.set_viewport(viewport.x, viewport.y);
        store
    }

    fn update(&self, f: impl FnOnce(&mut InputSnapshot)) {
        let mut snap = self.inner.get();
        f(&mut snap);
        self.inner.set(snap);
    }

    pub fn record_pointer(&self, x: f32, y: f32) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        self.update(|s| {
            s.pointer = PointerSample::new(x, y);
            s.pointer_seen = true;
        });
    }

    pub fn set_pressed(&self, pressed: bool) {
        self.update(|s| s.pressed = pressed);
    }

    pub fn set_viewport(&self, width: f32, height: f32) {
        self.update(|s| s.viewport = Vec2::new(width.max(0.0), height.max(0.0)));
    }

    pub fn set_scroll(&self, scroll_y: f32) {
        if scroll_y.is_finite() {
            self.update(|s| s.scroll_y = scroll_y);
        }
    }

    pub fn reader(&self) -> InputReader {
        InputReader {
            inner: self.inner.clone(),
        }
    }
}

/// Read-only handle handed to effects.
#[derive(Clone)]
pub struct InputReader {
    inner: Rc<Cell<InputSnapshot>>,
}

impl InputReader {
    #[inline]
    pub fn snapshot(&self) -> InputSnapshot {
        self.inner.get()
    }
}
