//! Retained display model.
//!
//! The game writes into it through [`Display`]; the TUI reads it every frame.

use says_types::Button;

use crate::device::Display;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    status: String,
    info: String,
    highlights: [bool; 3],
    flash: Option<u32>,
}

impl Screen {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    #[must_use]
    pub fn info(&self) -> &str {
        &self.info
    }

    #[must_use]
    pub fn is_highlighted(&self, button: Button) -> bool {
        self.highlights[button.index()]
    }

    #[must_use]
    pub fn highlighted(&self) -> Vec<Button> {
        Button::ALL
            .into_iter()
            .filter(|button| self.is_highlighted(*button))
            .collect()
    }

    #[must_use]
    pub fn flash(&self) -> Option<u32> {
        self.flash
    }
}

impl Display for Screen {
    fn show_text(&mut self, message: &str) {
        message.clone_into(&mut self.status);
    }

    fn show_round_info(&mut self, info: &str) {
        info.clone_into(&mut self.info);
    }

    fn set_highlight(&mut self, button: Button, on: bool) {
        self.highlights[button.index()] = on;
    }

    fn set_flash(&mut self, phase: Option<u32>) {
        self.flash = phase;
    }
}
