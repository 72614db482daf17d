//! Color theme and glyphs for Says TUI.
//!
//! Uses Kanagawa Wave palette by default with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use says_engine::{Button, UiOptions};

/// Kanagawa Wave color palette constants.
mod colors {
    use super::Color;

    // === Backgrounds (Sumi Ink) ===
    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40); // sumiInk3
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6

    // === Foregrounds (Fuji) ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray

    // === Primary/Brand ===
    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet

    // === Buttons ===
    pub const BLUE: Color = Color::Rgb(126, 156, 216); // crystalBlue
    pub const GREEN: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const RED: Color = Color::Rgb(255, 93, 98); // peachRed

    // === Flash overlay ===
    pub const FLASH_WHITE: Color = Color::Rgb(242, 236, 188); // brightened fujiWhite
    pub const FLASH_YELLOW: Color = Color::Rgb(230, 195, 132); // carpYellow
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub button_up: Color,
    pub button_select: Color,
    pub button_down: Color,
    pub flash_light: Color,
    pub flash_warm: Color,
    /// Monochrome palettes flash on/off instead of alternating two colours.
    pub monochrome: bool,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::PRIMARY,
            button_up: colors::RED,
            button_select: colors::BLUE,
            button_down: colors::GREEN,
            flash_light: colors::FLASH_WHITE,
            flash_warm: colors::FLASH_YELLOW,
            monochrome: false,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_muted: Color::Gray,
            primary: Color::White,
            button_up: Color::White,
            button_select: Color::White,
            button_down: Color::White,
            flash_light: Color::White,
            flash_warm: Color::White,
            monochrome: true,
        }
    }

    #[must_use]
    pub fn button(&self, button: Button) -> Color {
        match button {
            Button::Up => self.button_up,
            Button::Select => self.button_select,
            Button::Down => self.button_down,
        }
    }

    /// Overlay fill for a flash phase, or `None` when this phase shows the base screen.
    ///
    /// Colour palettes alternate two frames light, two frames warm. The monochrome
    /// palette fills on even phases only.
    #[must_use]
    pub fn flash_fill(&self, phase: u32) -> Option<Color> {
        if self.monochrome {
            return (phase % 2 == 0).then_some(self.flash_light);
        }
        if phase % 4 < 2 {
            Some(self.flash_light)
        } else {
            Some(self.flash_warm)
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for the button column.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub up: &'static str,
    pub select: &'static str,
    pub down: &'static str,
    /// Marker drawn beside a highlighted button.
    pub selected: &'static str,
}

impl Glyphs {
    #[must_use]
    pub fn button(&self, button: Button) -> &'static str {
        match button {
            Button::Up => self.up,
            Button::Select => self.select,
            Button::Down => self.down,
        }
    }
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            up: "U",
            select: "S",
            down: "D",
            selected: ">",
        }
    } else {
        Glyphs {
            up: "▲",
            select: "●",
            down: "▼",
            selected: "▸",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Button, Color, Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn status(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn info(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    /// Idle glyphs are drawn in their button colour; lit glyphs invert onto it.
    #[must_use]
    pub fn button(palette: &Palette, button: Button, lit: bool) -> Style {
        let color = palette.button(button);
        if lit {
            Style::default()
                .fg(palette.bg_dark)
                .bg(color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        }
    }

    /// Text drawn on top of a flash fill.
    #[must_use]
    pub fn on_flash(fill: Color) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(fill)
            .add_modifier(Modifier::BOLD)
    }
}
