//! UI layer: App orchestrator, AppWindow trait, custom widgets, and windows.

pub mod app;
pub mod widgets;
pub mod window;
pub mod windows;

#[cfg(test)]
pub mod testing;
