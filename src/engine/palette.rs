//! The palette: one color per [`ColorRole`], plus its textual dump.

use eframe::egui::Visuals;

use crate::engine::color::PaletteColor;
use crate::engine::role::ColorRole;

/// Color configuration shared by the demo window and every palette editor.
///
/// Every role always holds a color. `revision` increments on each mutation so
/// views can tell when cached output (e.g. the dump text) is stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [PaletteColor; ColorRole::COUNT],
    revision: u64,
}

impl Palette {
    /// Defaults taken from a preset's visuals.
    pub fn from_visuals(visuals: &Visuals) -> Self {
        Self {
            colors: ColorRole::ALL.map(|role| PaletteColor::from_color32(role.default_in(visuals))),
            revision: 0,
        }
    }

    pub fn get(&self, role: ColorRole) -> PaletteColor {
        self.colors[role.index()]
    }

    pub fn set(&mut self, role: ColorRole, color: PaletteColor) {
        self.colors[role.index()] = color;
        self.revision += 1;
    }

    /// Replace every role with the defaults from `visuals`.
    pub fn reset_from(&mut self, visuals: &Visuals) {
        self.colors = Self::from_visuals(visuals).colors;
        self.revision += 1;
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, PaletteColor)> + '_ {
        ColorRole::ALL.into_iter().map(|role| (role, self.get(role)))
    }

    /// Write every mapped role into `visuals`.
    pub fn apply_to(&self, visuals: &mut Visuals) {
        for (role, color) in self.iter() {
            for field in role.visuals_fields() {
                field.set(visuals, color.color());
            }
        }
    }

    /// One assignment line per role, in [`ColorRole::ALL`] order.
    pub fn dump(&self) -> String {
        self.iter()
            .map(|(role, color)| format!("palette.set(ColorRole::{role}, {color});\n"))
            .collect()
    }
}
