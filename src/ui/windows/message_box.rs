//! Modal acknowledgement dialog shown by the demo window's "Button".

use crate::ui::window::{AppState, AppWindow};
use eframe::egui;

pub struct MessageBox {
    title: String,
    text: String,
    open: bool,
}

impl MessageBox {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            open: true,
        }
    }
}

impl AppWindow for MessageBox {
    fn title(&self) -> &str {
        &self.title
    }
    fn is_open(&self) -> bool {
        self.open
    }

    fn show(&mut self, ctx: &egui::Context, _state: &mut AppState<'_>) {
        let modal = egui::Modal::new(egui::Id::new(("message_box", self.title.as_str())))
            .show(ctx, |ui| {
                ui.set_min_width(220.0);
                ui.heading(&self.title);
                ui.add_space(6.0);
                ui.label(&self.text);
                ui.add_space(6.0);
                ui.separator();
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.button("OK").clicked()
                })
                .inner
            });

        if modal.inner || modal.should_close() {
            self.open = false;
        }
    }
}
