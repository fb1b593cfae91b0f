mod convert;
mod render;

// Convert commands
pub use convert::run_convert;

// Render commands
pub use render::run_render;
