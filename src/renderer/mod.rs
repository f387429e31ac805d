//! Rendering
//!
//! `scene` turns game state into colored triangles in logical pixels,
//! `pipeline` pushes them through WebGPU, `hud` formats the DOM overlay text.

pub mod hud;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use hud::HudText;
pub use pipeline::RenderState;
pub use scene::build_scene;
