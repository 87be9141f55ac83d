// Scroll-linked effects: one-shot reveal, parallax mapping and nav
// visibility. Everything here is recomputed from element rects every frame.
// The marquee loop lives here too; it runs on time alone.

use crate::constants::*;

/// True when an element spanning `[top, top + height]` overlaps the viewport.
#[inline]
pub fn intersects_viewport(top: f32, height: f32, viewport_height: f32) -> bool {
    top < viewport_height && top + height.max(0.0) > 0.0
}

/// Progress of an element through the viewport: 0 when its top touches the
/// viewport bottom, 1 when its bottom leaves the viewport top.
pub fn scroll_progress(top: f32, height: f32, viewport_height: f32) -> f32 {
    let travel = viewport_height + height;
    if travel <= 0.0 || !travel.is_finite() {
        return 0.0;
    }
    ((viewport_height - top) / travel).clamp(0.0, 1.0)
}

/// Linear map of `value` from `[in_min, in_max]` onto `[out_min, out_max]`,
/// clamped to the output range.
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    let span = in_max - in_min;
    if span == 0.0 {
        return out_min;
    }
    let t = ((value - in_min) / span).clamp(0.0, 1.0);
    out_min + (out_max - out_min) * t
}

#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealFrame {
    pub opacity: f32,
    pub translate_y: f32,
}

impl RevealFrame {
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        translate_y: REVEAL_OFFSET_PX,
    };
    pub const SHOWN: Self = Self {
        opacity: 1.0,
        translate_y: 0.0,
    };
}

/// Fire-once entrance animation.
#[derive(Clone, Debug)]
pub struct Reveal {
    delay_sec: f32,
    duration_sec: f32,
    offset_px: f32,
    /// Seconds since the first intersection; `None` until then.
    elapsed: Option<f32>,
}

impl Reveal {
    pub fn new(delay_sec: f32) -> Self {
        Self {
            delay_sec: if delay_sec.is_finite() { delay_sec.max(0.0) } else { 0.0 },
            duration_sec: REVEAL_DURATION_SEC,
            offset_px: REVEAL_OFFSET_PX,
            elapsed: None,
        }
    }

    /// Delay for the `index`-th item of a staggered group (letters, list rows).
    pub fn staggered(base_delay_sec: f32, index: usize, step_sec: f32) -> Self {
        Self::new(base_delay_sec + index as f32 * step_sec)
    }

    pub fn delay(&self) -> f32 {
        self.delay_sec
    }

    pub fn has_fired(&self) -> bool {
        self.elapsed.is_some()
    }

    /// Feed the current intersection state. Returns true only on the call
    /// that triggers the animation.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && self.elapsed.is_none() {
            self.elapsed = Some(0.0);
            return true;
        }
        false
    }

    pub fn step(&mut self, dt_sec: f32) -> RevealFrame {
        let offset_px = self.offset_px;
        let Some(elapsed) = self.elapsed.as_mut() else {
            return RevealFrame {
                opacity: 0.0,
                translate_y: offset_px,
            };
        };
        if dt_sec.is_finite() && dt_sec > 0.0 {
            *elapsed += dt_sec;
        }
        let elapsed = *elapsed;
        let t = if self.duration_sec > 0.0 {
            ((elapsed - self.delay_sec) / self.duration_sec).clamp(0.0, 1.0)
        } else if elapsed >= self.delay_sec {
            1.0
        } else {
            0.0
        };
        let eased = ease_out_cubic(t);
        RevealFrame {
            opacity: eased,
            translate_y: offset_px * (1.0 - eased),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed
            .map(|e| e >= self.delay_sec + self.duration_sec)
            .unwrap_or(false)
    }
}

/// Scroll-progress to translation mapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    pub from: f32,
    pub to: f32,
}

impl Default for Parallax {
    fn default() -> Self {
        Self {
            from: PARALLAX_DEFAULT_RANGE_PX,
            to: -PARALLAX_DEFAULT_RANGE_PX,
        }
    }
}

impl Parallax {
    pub fn new(from: f32, to: f32) -> Self {
        Self { from, to }
    }

    /// Parse `"from,to"`; missing or malformed input yields `None`.
    pub fn parse(spec: &str) -> Option<Self> {
        let (a, b) = spec.split_once(',')?;
        let from = a.trim().parse::<f32>().ok()?;
        let to = b.trim().parse::<f32>().ok()?;
        (from.is_finite() && to.is_finite()).then_some(Self { from, to })
    }

    #[inline]
    pub fn value(&self, progress: f32) -> f32 {
        map_range(progress, 0.0, 1.0, self.from, self.to)
    }

    pub fn value_for_rect(&self, top: f32, height: f32, viewport_height: f32) -> f32 {
        self.value(scroll_progress(top, height, viewport_height))
    }
}

/// Floating nav shown once the page has scrolled past a fraction of the
/// viewport height.
#[derive(Clone, Debug, Default)]
pub struct NavVisibility {
    visible: bool,
}

impl NavVisibility {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns `Some(new_state)` only when visibility flips.
    pub fn update(&mut self, scroll_y: f32, viewport_height: f32) -> Option<bool> {
        let visible = scroll_y > viewport_height * NAV_SHOW_VIEWPORT_FRACTION;
        if visible == self.visible {
            return None;
        }
        self.visible = visible;
        Some(visible)
    }
}

/// Continuous linear loop: the track slides left by
/// [`MARQUEE_TRAVEL_PERCENT`] of its width once per period, then restarts.
#[derive(Clone, Debug)]
pub struct Marquee {
    period_sec: f32,
    phase_sec: f32,
}

impl Default for Marquee {
    fn default() -> Self {
        Self::new(MARQUEE_PERIOD_SEC)
    }
}

impl Marquee {
    pub fn new(period_sec: f32) -> Self {
        let period_sec = if period_sec.is_finite() && period_sec > 0.0 {
            period_sec
        } else {
            MARQUEE_PERIOD_SEC
        };
        Self {
            period_sec,
            phase_sec: 0.0,
        }
    }

    /// Advance and return the x translation in percent, in
    /// `(-MARQUEE_TRAVEL_PERCENT, 0]`.
    pub fn step(&mut self, dt_sec: f32) -> f32 {
        if dt_sec.is_finite() && dt_sec > 0.0 {
            self.phase_sec = (self.phase_sec + dt_sec).rem_euclid(self.period_sec);
        }
        -self.phase_sec / self.period_sec * MARQUEE_TRAVEL_PERCENT
    }
}
