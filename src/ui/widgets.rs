//! Custom egui widgets: the color swatch and the rotary dial.

use std::f32::consts::TAU;
use std::ops::RangeInclusive;

use eframe::egui::{
    self, Color32, Pos2, Response, Sense, Stroke, StrokeKind, Ui, Vec2, Widget,
};

/// Size of a palette swatch.
pub const SWATCH_SIZE: Vec2 = Vec2::new(50.0, 20.0);

/// A plain rectangle filled with `color`.
pub fn swatch(ui: &mut Ui, color: Color32) -> Response {
    let (rect, response) = ui.allocate_exact_size(SWATCH_SIZE, Sense::hover());
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect_filled(rect, 2.0, color);
        painter.rect_stroke(
            rect,
            2.0,
            ui.visuals().widgets.noninteractive.bg_stroke,
            StrokeKind::Inside,
        );
    }
    response
}

// ── Dial ──────────────────────────────────────────────────────────────────────

/// Angle (screen space, radians, clockwise from +x) of the minimum position.
const SWEEP_START: f32 = 0.375 * TAU;
/// The dial travels three quarters of a turn; the gap sits at the bottom.
const SWEEP: f32 = 0.75 * TAU;

/// Fraction of the sweep `[0, 1]` → screen angle.
pub fn fraction_to_angle(t: f32) -> f32 {
    SWEEP_START + SWEEP * t.clamp(0.0, 1.0)
}

/// Screen angle → fraction of the sweep. Angles in the bottom gap snap to
/// whichever end is closer.
pub fn angle_to_fraction(angle: f32) -> f32 {
    let rel = (angle - SWEEP_START).rem_euclid(TAU);
    if rel <= SWEEP {
        rel / SWEEP
    } else if rel < SWEEP + (TAU - SWEEP) / 2.0 {
        1.0
    } else {
        0.0
    }
}

/// A rotary knob over an integer range, with optional notches around the rim.
pub struct Dial<'a> {
    value: &'a mut i32,
    range: RangeInclusive<i32>,
    notches: bool,
    diameter: f32,
}

impl<'a> Dial<'a> {
    pub fn new(value: &'a mut i32, range: RangeInclusive<i32>) -> Self {
        Self {
            value,
            range,
            notches: false,
            diameter: 64.0,
        }
    }

    pub fn notches_visible(mut self, notches: bool) -> Self {
        self.notches = notches;
        self
    }

    fn fraction(&self) -> f32 {
        let (min, max) = (*self.range.start(), *self.range.end());
        if max <= min {
            return 0.0;
        }
        ((*self.value).clamp(min, max) - min) as f32 / (max - min) as f32
    }

    fn value_at(&self, t: f32) -> i32 {
        let (min, max) = (*self.range.start(), *self.range.end());
        min + ((max - min) as f32 * t).round() as i32
    }
}

impl Widget for Dial<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, mut response) =
            ui.allocate_exact_size(Vec2::splat(self.diameter), Sense::click_and_drag());
        let center = rect.center();
        let radius = self.diameter / 2.0 - 2.0;

        if let Some(pointer) = response.interact_pointer_pos() {
            let delta = pointer - center;
            if delta.length() > 1.0 {
                let new_value = self.value_at(angle_to_fraction(delta.y.atan2(delta.x)));
                if new_value != *self.value {
                    *self.value = new_value;
                    response.mark_changed();
                }
            }
        }

        if ui.is_rect_visible(rect) {
            let visuals = ui.style().interact(&response);
            let painter = ui.painter();
            painter.circle(center, radius * 0.75, visuals.bg_fill, visuals.bg_stroke);

            if self.notches {
                let steps = (self.range.end() - self.range.start()).clamp(1, 100);
                let tick = Stroke::new(1.0, visuals.fg_stroke.color.gamma_multiply(0.6));
                for i in 0..=steps {
                    let dir = Vec2::angled(fraction_to_angle(i as f32 / steps as f32));
                    let inner: Pos2 = center + dir * radius * 0.82;
                    let outer: Pos2 = center + dir * radius;
                    painter.line_segment([inner, outer], tick);
                }
            }

            let dir = Vec2::angled(fraction_to_angle(self.fraction()));
            painter.line_segment(
                [center + dir * radius * 0.2, center + dir * radius * 0.7],
                Stroke::new(2.5, visuals.fg_stroke.color),
            );
        }

        response.on_hover_cursor(egui::CursorIcon::Grab)
    }
}
