//! State of the modal color prompt opened by "Change <role> Color".

use eframe::egui::Color32;

use crate::engine::color::{format_hex, parse_hex};
use crate::engine::role::ColorRole;

/// How a prompt was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    /// The user accepted a valid color.
    Confirmed(Color32),
    /// Cancelled, dismissed, or accepted while the hex field was invalid.
    Cancelled,
}

/// Candidate color plus the editable hex text shown next to the picker.
///
/// The picker and the text field edit the same candidate; while the text does
/// not parse the prompt is invalid and cannot yield a color.
#[derive(Debug, Clone)]
pub struct ColorPrompt {
    pub role: ColorRole,
    pub candidate: Color32,
    hex_text: String,
    valid: bool,
}

impl ColorPrompt {
    pub fn new(role: ColorRole, initial: Color32) -> Self {
        Self {
            role,
            candidate: initial,
            hex_text: format_hex(initial),
            valid: true,
        }
    }

    pub fn hex_text(&self) -> &str {
        &self.hex_text
    }

    /// Called after the hex field was edited.
    pub fn set_hex_text(&mut self, text: String) {
        match parse_hex(&text) {
            Ok(color) => {
                self.candidate = color;
                self.valid = true;
            }
            Err(e) => {
                log::debug!("{} prompt: {e}", self.role);
                self.valid = false;
            }
        }
        self.hex_text = text;
    }

    /// Called after the picker moved the candidate.
    pub fn picked(&mut self, color: Color32) {
        self.candidate = color;
        self.hex_text = format_hex(color);
        self.valid = true;
    }

    pub fn confirm(&self) -> PromptOutcome {
        if self.valid {
            PromptOutcome::Confirmed(self.candidate)
        } else {
            PromptOutcome::Cancelled
        }
    }
}
