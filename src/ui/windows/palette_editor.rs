//! Palette Editor window: per-role swatches, the color prompt, the style
//! selector and the read-only palette dump.

use crate::engine::appearance::StylePreset;
use crate::engine::color::PaletteColor;
use crate::engine::palette::Palette;
use crate::engine::prompt::{ColorPrompt, PromptOutcome};
use crate::engine::role::ColorRole;
use crate::ui::widgets::swatch;
use crate::ui::window::{AppState, AppWindow};
use eframe::egui::{self, Vec2};
use egui::color_picker::{Alpha, color_picker_color32};

/// Dump text cached against the palette revision it was rendered from.
#[derive(Default)]
struct DumpCache {
    revision: Option<u64>,
    text: String,
}

pub struct PaletteEditor {
    id: usize,
    open: bool,
    prompt: Option<ColorPrompt>,
    dump: DumpCache,
}

impl PaletteEditor {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            open: true,
            prompt: None,
            dump: DumpCache::default(),
        }
    }

    /// Open the color prompt for `role`, seeded with its current color.
    pub fn request_change(&mut self, role: ColorRole, palette: &Palette) {
        self.prompt = Some(ColorPrompt::new(role, palette.get(role).color()));
    }

    /// Close the prompt. Returns `true` if the palette was changed.
    pub fn resolve_prompt(&mut self, outcome: PromptOutcome, palette: &mut Palette) -> bool {
        let Some(prompt) = self.prompt.take() else {
            return false;
        };
        match outcome {
            PromptOutcome::Confirmed(color) => {
                let value = PaletteColor::hex(color);
                log::debug!("{} set to {}", prompt.role, value.to_hex());
                palette.set(prompt.role, value);
                true
            }
            PromptOutcome::Cancelled => {
                log::debug!("{} color prompt cancelled", prompt.role);
                false
            }
        }
    }

    /// Current dump, regenerated only when the palette changed since last call.
    pub fn dump_text(&mut self, palette: &Palette) -> &str {
        if self.dump.revision != Some(palette.revision()) {
            self.dump.text = palette.dump();
            self.dump.revision = Some(palette.revision());
        }
        &self.dump.text
    }

    fn contents(&mut self, ui: &mut egui::Ui, state: &mut AppState<'_>) {
        // ── Style selector ──────────────────────────────────────────────────
        ui.horizontal(|ui| {
            ui.label("Select Style:");
            let mut selected = state.appearance.preset();
            egui::ComboBox::from_id_salt(("style_preset", self.id))
                .selected_text(selected.name())
                .show_ui(ui, |ui| {
                    for preset in StylePreset::ALL {
                        ui.selectable_value(&mut selected, preset, preset.name());
                    }
                });
            state.appearance.set_preset(selected);
        });
        ui.separator();

        // ── Role rows ───────────────────────────────────────────────────────
        let palette = &state.appearance.palette;
        egui::Grid::new(("palette_roles", self.id))
            .num_columns(2)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                for (role, color) in palette.iter() {
                    if ui.button(format!("Change {role} Color")).clicked() {
                        self.request_change(role, palette);
                    }
                    swatch(ui, color.color()).on_hover_text(color.to_hex());
                    ui.end_row();
                }
            });
        ui.separator();

        ui.horizontal(|ui| {
            if ui.button("Reset to Preset").clicked() {
                state.appearance.reset_palette();
            }
            if ui.button("Copy").clicked() {
                let text = self.dump_text(&state.appearance.palette).to_owned();
                ui.ctx().copy_text(text);
            }
        });

        let mut text = self.dump_text(&state.appearance.palette);
        ui.add(
            egui::TextEdit::multiline(&mut text)
                .font(egui::TextStyle::Monospace)
                .desired_rows(ColorRole::COUNT)
                .desired_width(f32::INFINITY),
        );
    }

    fn prompt_modal(&mut self, ctx: &egui::Context) -> Option<PromptOutcome> {
        let prompt = self.prompt.as_mut()?;
        let modal = egui::Modal::new(egui::Id::new(("color_prompt", self.id))).show(ctx, |ui| {
            ui.heading(format!("Select {} Color", prompt.role));
            ui.add_space(4.0);

            let mut color = prompt.candidate;
            if color_picker_color32(ui, &mut color, Alpha::Opaque) {
                prompt.picked(color);
            }

            ui.horizontal(|ui| {
                ui.label("Hex:");
                let mut hex = prompt.hex_text().to_owned();
                if ui.text_edit_singleline(&mut hex).changed() {
                    prompt.set_hex_text(hex);
                }
            });
            ui.separator();

            ui.horizontal(|ui| {
                let ok = ui.button("OK").clicked();
                let cancel = ui.button("Cancel").clicked();
                if ok {
                    Some(prompt.confirm())
                } else if cancel {
                    Some(PromptOutcome::Cancelled)
                } else {
                    None
                }
            })
            .inner
        });

        if modal.should_close() {
            return Some(modal.inner.unwrap_or(PromptOutcome::Cancelled));
        }
        modal.inner
    }
}

impl AppWindow for PaletteEditor {
    fn title(&self) -> &str {
        "Palette Editor"
    }
    fn is_open(&self) -> bool {
        self.open
    }

    fn show(&mut self, ctx: &egui::Context, state: &mut AppState<'_>) {
        let mut open = self.open;
        egui::Window::new(self.title())
            .id(egui::Id::new(("palette_editor", self.id)))
            .default_pos([150.0, 150.0])
            .default_size(Vec2::new(500.0, 400.0))
            .open(&mut open)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| self.contents(ui, state));
            });

        if let Some(outcome) = self.prompt_modal(ctx) {
            self.resolve_prompt(outcome, &mut state.appearance.palette);
        }

        if !open {
            log::info!("Palette editor #{} closed", self.id);
            self.prompt = None;
        }
        self.open = open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::appearance::Appearance;
    use eframe::egui::Color32;

    fn pending_role(editor: &PaletteEditor) -> Option<ColorRole> {
        editor.prompt.as_ref().map(|p| p.role)
    }

    fn palette() -> Palette {
        Palette::from_visuals(&StylePreset::Dark.visuals())
    }

    #[test]
    fn confirmed_change_updates_role_and_dump() {
        let mut palette = palette();
        let mut editor = PaletteEditor::new(0);
        for role in ColorRole::ALL {
            let before = editor.dump_text(&palette).to_owned();
            editor.request_change(role, &palette);
            assert_eq!(pending_role(&editor), Some(role));

            let v = Color32::from_rgb(role.index() as u8 * 20, 0, 255);
            assert!(editor.resolve_prompt(PromptOutcome::Confirmed(v), &mut palette));
            assert_eq!(palette.get(role).color(), v);
            assert_eq!(pending_role(&editor), None);

            let after = editor.dump_text(&palette);
            assert_ne!(before, after);
            let line = format!("palette.set(ColorRole::{role}, \"{}\");", PaletteColor::hex(v).to_hex());
            assert!(after.contains(&line), "missing {line}");
        }
    }

    #[test]
    fn cancel_leaves_everything_identical() {
        let mut palette = palette();
        let mut editor = PaletteEditor::new(0);
        let before_palette = palette.clone();
        let before_dump = editor.dump_text(&palette).to_owned();

        for role in ColorRole::ALL {
            editor.request_change(role, &palette);
            assert!(!editor.resolve_prompt(PromptOutcome::Cancelled, &mut palette));
        }

        assert_eq!(palette, before_palette);
        assert_eq!(editor.dump_text(&palette).as_bytes(), before_dump.as_bytes());
    }

    #[test]
    fn invalid_prompt_text_is_a_no_op() {
        let mut palette = palette();
        let mut editor = PaletteEditor::new(0);
        editor.request_change(ColorRole::Highlight, &palette);

        let mut prompt = ColorPrompt::new(ColorRole::Highlight, Color32::RED);
        prompt.set_hex_text("not a color".to_owned());
        let before = palette.clone();
        assert!(!editor.resolve_prompt(prompt.confirm(), &mut palette));
        assert_eq!(palette, before);
    }

    #[test]
    fn resolve_without_prompt_does_nothing() {
        let mut palette = palette();
        let mut editor = PaletteEditor::new(0);
        assert!(!editor.resolve_prompt(PromptOutcome::Confirmed(Color32::RED), &mut palette));
        assert_eq!(palette.revision(), 0);
    }

    #[test]
    fn second_editor_sees_first_editors_edits() {
        let mut palette = palette();
        let mut first = PaletteEditor::new(0);
        let mut second = PaletteEditor::new(1);
        let _ = second.dump_text(&palette);

        first.request_change(ColorRole::Highlight, &palette);
        first.resolve_prompt(PromptOutcome::Confirmed(Color32::from_rgb(255, 0, 0)), &mut palette);

        assert!(second
            .dump_text(&palette)
            .contains("palette.set(ColorRole::Highlight, \"#ff0000\");"));

        let mut third = PaletteEditor::new(2);
        third.request_change(ColorRole::Highlight, &palette);
        assert_eq!(
            third.prompt.as_ref().map(|p| p.candidate),
            Some(Color32::from_rgb(255, 0, 0))
        );
    }

    #[test]
    fn renders_headless_with_open_prompt() {
        let ctx = egui::Context::default();
        let mut appearance = Appearance::new(StylePreset::Light);
        let mut editor = PaletteEditor::new(7);
        editor.request_change(ColorRole::Button, &appearance.palette);

        for _ in 0..2 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                let mut state = AppState {
                    appearance: &mut appearance,
                };
                editor.show(ctx, &mut state);
            });
        }
        assert!(editor.is_open());
        assert_eq!(pending_role(&editor), Some(ColorRole::Button));
        assert_eq!(appearance.palette.revision(), 0);
    }
}
