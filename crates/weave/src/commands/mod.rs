//! CLI command implementations.

pub(crate) mod presets;
pub(crate) mod render;

pub(crate) use render::RenderArgs;
