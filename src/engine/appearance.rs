//! Style presets and the appearance (preset + palette) applied to the context.

use std::fmt;
use std::str::FromStr;

use eframe::egui::{self, Style, Theme, Visuals};

use crate::engine::palette::Palette;
use crate::error::AppError;

/// Process-wide visual style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StylePreset {
    Dark,
    Light,
}

impl StylePreset {
    pub const ALL: [StylePreset; 2] = [StylePreset::Dark, StylePreset::Light];

    pub fn name(self) -> &'static str {
        match self {
            StylePreset::Dark => "Dark",
            StylePreset::Light => "Light",
        }
    }

    pub fn theme(self) -> Theme {
        match self {
            StylePreset::Dark => Theme::Dark,
            StylePreset::Light => Theme::Light,
        }
    }

    pub fn visuals(self) -> Visuals {
        self.theme().default_visuals()
    }

    pub fn style(self) -> Style {
        Style {
            visuals: self.visuals(),
            ..Style::default()
        }
    }
}

impl From<Theme> for StylePreset {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Dark => StylePreset::Dark,
            Theme::Light => StylePreset::Light,
        }
    }
}

impl fmt::Display for StylePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StylePreset {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StylePreset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::UnknownStyle(s.to_owned()))
    }
}

/// Active preset plus the user-editable palette.
///
/// The palette is seeded from the initial preset and afterwards only changes
/// through explicit edits or [`Appearance::reset_palette`]; switching presets
/// keeps it as is.
pub struct Appearance {
    preset: StylePreset,
    pub palette: Palette,
}

impl Appearance {
    pub fn new(preset: StylePreset) -> Self {
        Self {
            preset,
            palette: Palette::from_visuals(&preset.visuals()),
        }
    }

    pub fn preset(&self) -> StylePreset {
        self.preset
    }

    pub fn set_preset(&mut self, preset: StylePreset) {
        if self.preset != preset {
            log::info!("Style preset switched: {} -> {}", self.preset, preset);
            self.preset = preset;
        }
    }

    /// Re-derive all palette roles from the active preset.
    pub fn reset_palette(&mut self) {
        log::info!("Palette reset to {} preset defaults", self.preset);
        self.palette.reset_from(&self.preset.visuals());
    }

    /// Changes whenever the composed style would change.
    pub fn fingerprint(&self) -> (StylePreset, u64) {
        (self.preset, self.palette.revision())
    }

    /// The preset's style with every mapped palette role written over it.
    pub fn style(&self) -> Style {
        let mut style = self.preset.style();
        self.palette.apply_to(&mut style.visuals);
        style
    }

    pub fn apply(&self, ctx: &egui::Context) {
        let theme = self.preset.theme();
        ctx.set_theme(theme);
        ctx.set_style_of(theme, self.style());
    }
}
