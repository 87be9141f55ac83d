// Runtime configuration.
//
// Defaults come from `constants.rs`. The host page can override them with
// `data-fx-*` attributes on the `<html>` element, e.g.
// `<html data-fx-cursor="prism" data-fx-gates="24">`.

use crate::constants::*;
use crate::core::cursor::CursorVariant;
use crate::core::gates::GateConfig;
use crate::core::scene::{SceneConfig, SceneVariant};
use thiserror::Error;

pub const ATTRIBUTE_PREFIX: &str = "data-fx-";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown option `{0}`")]
    UnknownKey(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
}

impl ConfigError {
    fn invalid(key: &str, value: &str) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

/// What the page knows about the device at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DeviceHints {
    pub coarse_pointer: bool,
    pub reduced_motion: bool,
    /// `navigator.hardwareConcurrency`, 0 when unknown.
    pub cores: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FxConfig {
    pub cursor: CursorVariant,
    pub cursor_enabled: bool,
    /// `None` disables the background scene.
    pub scene: Option<SceneVariant>,
    pub scene_config: SceneConfig,
    pub gates_enabled: bool,
    pub gates: GateConfig,
    pub magnetic_strength: f32,
    /// Fixed seed for reproducible layouts; random when `None`.
    pub seed: Option<u64>,
    pub log_level: log::Level,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            cursor: CursorVariant::default(),
            cursor_enabled: true,
            scene: Some(SceneVariant::default()),
            scene_config: SceneConfig::default(),
            gates_enabled: true,
            gates: GateConfig::default(),
            magnetic_strength: MAGNETIC_STRENGTH,
            seed: None,
            log_level: log::Level::Info,
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "on" | "true" | "1" | "yes" => Ok(true),
        "off" | "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::invalid(key, value)),
    }
}

fn parse_num<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::invalid(key, value))
}

impl FxConfig {
    /// Apply `(key, value)` pairs; keys may carry the `data-fx-` prefix.
    /// Stops at the first bad pair, keeping everything applied before it.
    pub fn apply_overrides<'a, I>(&mut self, pairs: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (raw_key, value) in pairs {
            let key = raw_key.strip_prefix(ATTRIBUTE_PREFIX).unwrap_or(raw_key);
            self.apply(key, value)?;
        }
        Ok(())
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "cursor" => match value.trim() {
                "off" | "none" => self.cursor_enabled = false,
                v => {
                    self.cursor = v.parse().map_err(|_| ConfigError::invalid(key, value))?;
                    self.cursor_enabled = true;
                }
            },
            "scene" => match value.trim() {
                "off" | "none" => self.scene = None,
                v => {
                    self.scene = Some(v.parse().map_err(|_| ConfigError::invalid(key, value))?)
                }
            },
            "gates" => match parse_bool(key, value) {
                Ok(enabled) => self.gates_enabled = enabled,
                Err(_) => {
                    self.gates.count = parse_num(key, value)?;
                    self.gates_enabled = self.gates.count > 0;
                }
            },
            "gate-distance" => {
                let d: f32 = parse_num(key, value)?;
                if !(d.is_finite() && d > 0.0) {
                    return Err(ConfigError::invalid(key, value));
                }
                self.gates.max_distance = d;
            }
            "magnetic" => {
                let s: f32 = parse_num(key, value)?;
                if !(0.0..=1.0).contains(&s) {
                    return Err(ConfigError::invalid(key, value));
                }
                self.magnetic_strength = s;
            }
            "particles" => self.scene_config.particle_count = parse_num(key, value)?,
            "shards" => self.scene_config.shard_count = parse_num(key, value)?,
            "seed" => self.seed = Some(parse_num(key, value)?),
            "log" => {
                self.log_level = value
                    .trim()
                    .parse::<log::Level>()
                    .map_err(|_| ConfigError::invalid(key, value))?
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Touch devices lose the cursor, reduced motion drops the scene and the
    /// gate field, low core counts halve decorative counts.
    pub fn adjust_for_device(&mut self, hints: DeviceHints) {
        if hints.coarse_pointer {
            self.cursor_enabled = false;
        }
        if hints.reduced_motion {
            self.scene = None;
            self.gates_enabled = false;
        }
        if hints.cores > 0 && hints.cores <= LOW_END_MAX_CORES {
            let scale = |n: usize| (n as f32 * LOW_END_COUNT_SCALE).round() as usize;
            self.gates.count = scale(self.gates.count);
            self.scene_config.particle_count = scale(self.scene_config.particle_count);
            self.scene_config.shard_count = scale(self.scene_config.shard_count);
        }
    }
}

/// Parse a computed CSS color (`#rgb`, `#rrggbb`, `rgb()`/`rgba()`) into
/// linear-ish `[0, 1]` RGB components.
pub fn parse_css_color(input: &str) -> Option<[f32; 3]> {
    let s = input.trim();
    if let Some(hex) = s.strip_prefix('#') {
        let expand = |c: char| c.to_digit(16).map(|d| (d * 17) as f32 / 255.0);
        return match hex.len() {
            3 => {
                let mut it = hex.chars();
                Some([expand(it.next()?)?, expand(it.next()?)?, expand(it.next()?)?])
            }
            6 => {
                let channel = |i: usize| {
                    u8::from_str_radix(hex.get(i..i + 2)?, 16)
                        .ok()
                        .map(|v| v as f32 / 255.0)
                };
                Some([channel(0)?, channel(2)?, channel(4)?])
            }
            _ => None,
        };
    }
    let inner = s
        .strip_prefix("rgba(")
        .or_else(|| s.strip_prefix("rgb("))?
        .strip_suffix(')')?;
    let mut parts = inner
        .split(|c: char| c == ',' || c.is_whitespace() || c == '/')
        .filter(|p| !p.is_empty());
    let mut rgb = [0.0f32; 3];
    for slot in rgb.iter_mut() {
        let v: f32 = parts.next()?.parse().ok()?;
        *slot = (v / 255.0).clamp(0.0, 1.0);
    }
    Some(rgb)
}
