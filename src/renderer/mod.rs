//! Rendering module
//!
//! `scene` turns simulation state into an ordered list of draw commands;
//! `canvas` executes that list on an SDL2 window.

pub mod canvas;
pub mod commands;
pub mod scene;

pub use canvas::{Fonts, SdlCanvas};
pub use commands::{Anchor, DrawCommand, Rgba, TextSize, colors};
pub use scene::{HudInfo, build_frame};
