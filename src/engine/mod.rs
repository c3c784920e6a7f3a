//! Palette domain: roles, color values, the palette itself, presets, and the
//! color prompt state.

pub mod appearance;
pub mod color;
pub mod palette;
pub mod prompt;
pub mod role;
