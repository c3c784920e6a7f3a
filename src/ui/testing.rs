//! Headless input helpers shared by the UI tests.

use eframe::egui::{self, Color32, Event, Modifiers, PointerButton, Pos2, RawInput, Rect, Shape};

pub fn input(time: f64, events: Vec<Event>) -> RawInput {
    RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, egui::vec2(800.0, 2000.0))),
        time: Some(time),
        events,
        ..Default::default()
    }
}

pub fn press(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

/// Center of the first text shape reading exactly `text`.
pub fn text_center(output: &egui::FullOutput, text: &str) -> Option<Pos2> {
    fn find(shape: &Shape, text: &str) -> Option<Pos2> {
        match shape {
            Shape::Text(t) if t.galley.text() == text => {
                Some(t.pos + t.galley.rect.center().to_vec2())
            }
            Shape::Vec(shapes) => shapes.iter().find_map(|s| find(s, text)),
            _ => None,
        }
    }
    output.shapes.iter().find_map(|c| find(&c.shape, text))
}

/// Whether any rectangle in the output is filled with `color`.
pub fn has_fill(output: &egui::FullOutput, color: Color32) -> bool {
    fn find(shape: &Shape, color: Color32) -> bool {
        match shape {
            Shape::Rect(r) => r.fill == color,
            Shape::Vec(shapes) => shapes.iter().any(|s| find(s, color)),
            _ => false,
        }
    }
    output.shapes.iter().any(|c| find(&c.shape, color))
}
