//! Application orchestrator: owns the appearance and drives the window system.

use crate::config::AppConfig;
use crate::engine::appearance::{Appearance, StylePreset};
use crate::ui::window::{AppState, AppWindow};
use crate::ui::windows::{
    message_box::MessageBox,
    palette_editor::PaletteEditor,
    widget_catalogue::{CatalogueAction, WidgetCatalogue},
};
use eframe::egui;

// ── App struct ─────────────────────────────────────────────────────────────────

/// The top-level application, implementing [`eframe::App`].
///
/// `App` only:
/// 1. Pushes the appearance into the egui context whenever it changed.
/// 2. Renders the central panel (the widget catalogue) and reacts to its
///    two actions.
/// 3. Draws every secondary window and drops the ones that were closed.
pub struct App {
    appearance: Appearance,
    /// Fingerprint of the appearance last pushed into the context.
    applied: Option<(StylePreset, u64)>,
    catalogue: WidgetCatalogue,

    // ── Window registry ────────────────────────────────────────────────────
    windows: Vec<Box<dyn AppWindow>>,
    next_editor_id: usize,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let preset = config
            .style
            .unwrap_or_else(|| StylePreset::from(cc.egui_ctx.theme()));
        log::info!("Starting with {preset} style preset");
        Self::with_preset(preset)
    }

    pub fn with_preset(preset: StylePreset) -> Self {
        Self {
            appearance: Appearance::new(preset),
            applied: None,
            catalogue: WidgetCatalogue::default(),
            windows: Vec::new(),
            next_editor_id: 0,
        }
    }

    fn show_message(&mut self) {
        self.windows
            .push(Box::new(MessageBox::new("Message", "Button clicked!")));
    }

    fn open_palette_editor(&mut self) {
        let id = self.next_editor_id;
        self.next_editor_id += 1;
        log::info!("Palette editor #{id} opened");
        self.windows.push(Box::new(PaletteEditor::new(id)));
    }

    fn sync_style(&mut self, ctx: &egui::Context) {
        let fingerprint = self.appearance.fingerprint();
        if self.applied != Some(fingerprint) {
            self.appearance.apply(ctx);
            self.applied = Some(fingerprint);
            ctx.request_repaint();
        }
    }

    /// One frame of UI; `update` forwards here.
    pub fn frame(&mut self, ctx: &egui::Context) {
        self.sync_style(ctx);

        // ── Central panel ─────────────────────────────────────────────────────
        let action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.catalogue
                            .render_inline(ui, &self.appearance.palette)
                    })
                    .inner
            })
            .inner;

        match action {
            Some(CatalogueAction::ShowMessage) => self.show_message(),
            Some(CatalogueAction::EditPalette) => self.open_palette_editor(),
            None => {}
        }

        // ── Secondary windows ─────────────────────────────────────────────────
        let mut state = AppState {
            appearance: &mut self.appearance,
        };
        for w in &mut self.windows {
            w.show(ctx, &mut state);
        }
        self.windows.retain(|w| w.is_open());

        self.sync_style(ctx);
    }
}

// ── eframe::App ────────────────────────────────────────────────────────────────

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.frame(ctx);
    }
}
