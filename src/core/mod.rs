pub mod cursor;
pub mod gates;
pub mod geometry;
pub mod magnetic;
pub mod pointer;
pub mod scene;
pub mod scroll;
pub mod spring;

pub use cursor::{Cursor, CursorTarget, CursorVariant};
pub use gates::GateField;
pub use magnetic::{Magnetic, Rect, Tilt};
pub use pointer::{InputReader, InputSnapshot, InputStore};
pub use scene::{Scene, SceneVariant};
pub use scroll::{Marquee, NavVisibility, Parallax, Reveal};
pub use spring::{Spring, SpringConfig};

// Shader bundled as a string constant
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
