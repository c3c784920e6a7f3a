//! The closed set of palette color roles and their mapping onto egui `Visuals`.

use std::fmt;

use eframe::egui::{Color32, Visuals};

use crate::engine::color::flatten_over;

/// One of the 12 fixed palette slots.
///
/// Declaration order is the canonical iteration order used everywhere the
/// palette is listed or serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Window,
    WindowText,
    Base,
    AlternateBase,
    ToolTipBase,
    ToolTipText,
    Text,
    Button,
    ButtonText,
    BrightText,
    Highlight,
    HighlightedText,
}

impl ColorRole {
    pub const COUNT: usize = 12;

    pub const ALL: [ColorRole; Self::COUNT] = [
        ColorRole::Window,
        ColorRole::WindowText,
        ColorRole::Base,
        ColorRole::AlternateBase,
        ColorRole::ToolTipBase,
        ColorRole::ToolTipText,
        ColorRole::Text,
        ColorRole::Button,
        ColorRole::ButtonText,
        ColorRole::BrightText,
        ColorRole::Highlight,
        ColorRole::HighlightedText,
    ];

    /// Position of the role in [`ColorRole::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorRole::Window => "Window",
            ColorRole::WindowText => "WindowText",
            ColorRole::Base => "Base",
            ColorRole::AlternateBase => "AlternateBase",
            ColorRole::ToolTipBase => "ToolTipBase",
            ColorRole::ToolTipText => "ToolTipText",
            ColorRole::Text => "Text",
            ColorRole::Button => "Button",
            ColorRole::ButtonText => "ButtonText",
            ColorRole::BrightText => "BrightText",
            ColorRole::Highlight => "Highlight",
            ColorRole::HighlightedText => "HighlightedText",
        }
    }

    /// The egui fields this role drives.
    ///
    /// Empty for roles egui has no slot for; the demo window paints those
    /// itself (tooltips and text-field text).
    pub fn visuals_fields(self) -> &'static [VisualsField] {
        use VisualsField::*;
        match self {
            ColorRole::Window => &[PanelFill, WindowFill],
            ColorRole::WindowText => &[NoninteractiveText],
            ColorRole::Base => &[ExtremeBg],
            ColorRole::AlternateBase => &[FaintBg],
            ColorRole::ToolTipBase | ColorRole::ToolTipText | ColorRole::Text => &[],
            ColorRole::Button => &[InactiveBgFill, InactiveWeakBgFill],
            ColorRole::ButtonText => &[InactiveText],
            ColorRole::BrightText => &[ActiveText],
            ColorRole::Highlight => &[SelectionBg],
            ColorRole::HighlightedText => &[SelectionStroke],
        }
    }

    /// The color `visuals` gives this role before any user edit, as it
    /// appears on the panel background.
    ///
    /// Translucent and additive slots (e.g. `faint_bg_color`) are flattened
    /// over `panel_fill`.
    pub fn default_in(self, visuals: &Visuals) -> Color32 {
        let raw = match self.visuals_fields().first() {
            Some(field) => field.get(visuals),
            None => match self {
                ColorRole::ToolTipBase => visuals.window_fill,
                _ => visuals.text_color(),
            },
        };
        flatten_over(raw, visuals.panel_fill)
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single color slot inside [`egui::Visuals`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualsField {
    PanelFill,
    WindowFill,
    NoninteractiveText,
    ExtremeBg,
    FaintBg,
    InactiveBgFill,
    InactiveWeakBgFill,
    InactiveText,
    ActiveText,
    SelectionBg,
    SelectionStroke,
}

impl VisualsField {
    pub fn get(self, visuals: &Visuals) -> Color32 {
        match self {
            VisualsField::PanelFill => visuals.panel_fill,
            VisualsField::WindowFill => visuals.window_fill,
            VisualsField::NoninteractiveText => visuals.widgets.noninteractive.fg_stroke.color,
            VisualsField::ExtremeBg => visuals.extreme_bg_color,
            VisualsField::FaintBg => visuals.faint_bg_color,
            VisualsField::InactiveBgFill => visuals.widgets.inactive.bg_fill,
            VisualsField::InactiveWeakBgFill => visuals.widgets.inactive.weak_bg_fill,
            VisualsField::InactiveText => visuals.widgets.inactive.fg_stroke.color,
            VisualsField::ActiveText => visuals.widgets.active.fg_stroke.color,
            VisualsField::SelectionBg => visuals.selection.bg_fill,
            VisualsField::SelectionStroke => visuals.selection.stroke.color,
        }
    }

    pub fn set(self, visuals: &mut Visuals, color: Color32) {
        match self {
            VisualsField::PanelFill => visuals.panel_fill = color,
            VisualsField::WindowFill => visuals.window_fill = color,
            VisualsField::NoninteractiveText => {
                visuals.widgets.noninteractive.fg_stroke.color = color;
            }
            VisualsField::ExtremeBg => visuals.extreme_bg_color = color,
            VisualsField::FaintBg => visuals.faint_bg_color = color,
            VisualsField::InactiveBgFill => visuals.widgets.inactive.bg_fill = color,
            VisualsField::InactiveWeakBgFill => visuals.widgets.inactive.weak_bg_fill = color,
            VisualsField::InactiveText => visuals.widgets.inactive.fg_stroke.color = color,
            VisualsField::ActiveText => visuals.widgets.active.fg_stroke.color = color,
            VisualsField::SelectionBg => visuals.selection.bg_fill = color,
            VisualsField::SelectionStroke => visuals.selection.stroke.color = color,
        }
    }
}
