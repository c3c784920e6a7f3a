//! Demo window body: one labeled row per widget kind.

use crate::engine::palette::Palette;
use crate::engine::role::ColorRole;
use crate::ui::widgets::Dial;
use eframe::egui::{self, FontId, Response, RichText, Ui};
use egui_plot::Plot;

/// What the user asked for this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogueAction {
    ShowMessage,
    EditPalette,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    One,
    Two,
}

/// Widget values; nothing here affects application state.
pub struct WidgetCatalogue {
    line_edit: String,
    text_edit: String,
    checked: bool,
    radio_selected: bool,
    combo_index: usize,
    spin: i32,
    slider: i32,
    progress: f32,
    dial: i32,
    tab: Tab,
}

const COMBO_OPTIONS: [&str; 3] = ["Option 1", "Option 2", "Option 3"];

impl Default for WidgetCatalogue {
    fn default() -> Self {
        Self {
            line_edit: String::new(),
            text_edit: String::new(),
            checked: false,
            radio_selected: false,
            combo_index: 0,
            spin: 0,
            slider: 0,
            progress: 0.0,
            dial: 0,
            tab: Tab::One,
        }
    }
}

impl WidgetCatalogue {
    pub fn render_inline(&mut self, ui: &mut Ui, palette: &Palette) -> Option<CatalogueAction> {
        let mut action = None;
        let text_color = palette.get(ColorRole::Text).color();

        ui.horizontal(|ui| {
            ui.label("Label: Hello, egui!");
            let button = tooltip(ui.button("Button"), "Shows a message", palette);
            if button.clicked() {
                action = Some(CatalogueAction::ShowMessage);
            }
        });

        row(ui, "Line Edit:", "Single-line text", palette, |ui| {
            ui.add(egui::TextEdit::singleline(&mut self.line_edit).text_color(text_color))
        });

        row(ui, "Text Edit:", "Multi-line text", palette, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut self.text_edit)
                    .text_color(text_color)
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            )
        });

        row(ui, "Checkbox:", "Toggles on click", palette, |ui| {
            ui.checkbox(&mut self.checked, "Check me")
        });

        row(ui, "Radio Button:", "Selects on click", palette, |ui| {
            let response = ui.radio(self.radio_selected, "Select me");
            if response.clicked() {
                self.radio_selected = true;
            }
            response
        });

        row(ui, "Combo Box:", "Pick one option", palette, |ui| {
            egui::ComboBox::from_id_salt("demo_combo")
                .selected_text(COMBO_OPTIONS[self.combo_index])
                .show_index(ui, &mut self.combo_index, COMBO_OPTIONS.len(), |i| {
                    COMBO_OPTIONS[i]
                })
        });

        row(ui, "Spin Box:", "Drag or type a number", palette, |ui| {
            ui.add(egui::DragValue::new(&mut self.spin).range(0..=99))
        });

        row(ui, "Slider:", "Horizontal slider", palette, |ui| {
            ui.add(egui::Slider::new(&mut self.slider, 0..=99))
        });

        row(ui, "Progress Bar:", "Progress indicator", palette, |ui| {
            ui.add(egui::ProgressBar::new(self.progress).show_percentage())
        });

        row(ui, "Knob (Dial):", "Drag to rotate", palette, |ui| {
            let response = ui.add(Dial::new(&mut self.dial, 0..=99).notches_visible(true));
            ui.label(self.dial.to_string());
            response
        });

        ui.add_space(8.0);
        ui.label(RichText::new("Plot Widget:").font(FontId::proportional(14.0)));
        Plot::new("demo_plot")
            .height(200.0)
            .show_axes([true, true])
            .show_grid(true)
            .show(ui, |_plot_ui| {});

        ui.add_space(8.0);
        ui.label(RichText::new("Tab Widget:").font(FontId::proportional(14.0)));
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.tab, Tab::One, "Tab 1");
                ui.selectable_value(&mut self.tab, Tab::Two, "Tab 2");
            });
            ui.separator();
            ui.label(match self.tab {
                Tab::One => "Tab 1 Content",
                Tab::Two => "Tab 2 Content",
            });
        });

        ui.add_space(8.0);
        if ui.button("Edit Palette").clicked() {
            action = Some(CatalogueAction::EditPalette);
        }

        action
    }
}

/// `label` followed by one widget, with a palette-colored tooltip.
fn row(
    ui: &mut Ui,
    label: &str,
    tip: &str,
    palette: &Palette,
    add_contents: impl FnOnce(&mut Ui) -> Response,
) -> Response {
    ui.horizontal(|ui| {
        ui.label(label);
        let response = add_contents(ui);
        tooltip(response, tip, palette)
    })
    .inner
}

/// Tooltip drawn with the ToolTipBase / ToolTipText roles.
///
/// egui fills tooltip frames with `window_fill` from the context style, so the
/// fill is swapped for the duration of the call and restored afterwards.
fn tooltip(response: Response, text: &str, palette: &Palette) -> Response {
    if !response.hovered() {
        return response;
    }
    let fill = palette.get(ColorRole::ToolTipBase).color();
    let fg = palette.get(ColorRole::ToolTipText).color();

    let ctx = response.ctx.clone();
    let base = ctx.style();
    ctx.style_mut(|style| style.visuals.window_fill = fill);
    let response = response.on_hover_ui(|ui| {
        ui.colored_label(fg, text);
    });
    ctx.set_style(base);
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::appearance::StylePreset;
    use crate::engine::color::PaletteColor;
    use crate::ui::testing::{has_fill, input, text_center};
    use eframe::egui::Color32;

    #[test]
    fn renders_every_row_without_action() {
        let ctx = egui::Context::default();
        let palette = Palette::from_visuals(&StylePreset::Dark.visuals());
        let mut catalogue = WidgetCatalogue::default();
        let mut action = None;

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                action = catalogue.render_inline(ui, &palette);
            });
        });

        assert_eq!(action, None);
        assert_eq!(catalogue.combo_index, 0);
        assert_eq!(catalogue.tab, Tab::One);
    }

    #[test]
    fn tooltip_frame_uses_tooltip_base_and_restores_style() {
        let ctx = egui::Context::default();
        let mut palette = Palette::from_visuals(&StylePreset::Dark.visuals());
        let tip_fill = Color32::from_rgb(1, 2, 3);
        palette.set(ColorRole::ToolTipBase, PaletteColor::hex(tip_fill));
        let mut catalogue = WidgetCatalogue::default();
        let window_fill = ctx.style().visuals.window_fill;

        let mut frame = |input: egui::RawInput| {
            ctx.run(input, |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    let _ = catalogue.render_inline(ui, &palette);
                });
            })
        };

        let first = frame(input(0.0, Vec::new()));
        let button = text_center(&first, "Button").expect("button drawn");
        let _ = frame(input(0.1, vec![egui::Event::PointerMoved(button)]));
        let mut shown = None;
        for step in 1..=10 {
            let out = frame(input(0.1 + f64::from(step) * 0.5, Vec::new()));
            if text_center(&out, "Shows a message").is_some() {
                shown = Some(out);
                break;
            }
        }

        let shown = shown.expect("tooltip never appeared");
        assert!(has_fill(&shown, tip_fill));
        assert_eq!(ctx.style().visuals.window_fill, window_fill);
    }
}
