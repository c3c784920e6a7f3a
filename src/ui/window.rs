//! The `AppWindow` trait and the shared `AppState` view passed to each window.
//!
//! To add a new secondary window:
//! 1. Create a new file in `ui/windows/`.
//! 2. Implement `AppWindow` for your struct.
//! 3. Push `Box::new(MyWindow::new(..))` onto `App::windows` from the action
//!    that opens it.

use eframe::egui;

use crate::engine::appearance::Appearance;

/// Mutable view of application state shared with every window's `show` call.
///
/// Windows are drawn one after another, so exactly one of them holds this
/// borrow at any time.
pub struct AppState<'a> {
    pub appearance: &'a mut Appearance,
}

/// Trait implemented by every secondary window or dialog.
///
/// Each window owns its open/closed flag and any window-specific UI state.
/// The orchestrator (`App`) calls `show` on each frame and drops windows
/// whose `is_open` turned false.
pub trait AppWindow {
    /// Title shown in the window's title bar.
    fn title(&self) -> &str;

    /// Whether this window is still visible.
    fn is_open(&self) -> bool;

    /// Draw the window contents.  Called every frame by `App::update`.
    fn show(&mut self, ctx: &egui::Context, state: &mut AppState<'_>);
}
