//! TUI rendering for Says using ratatui.
//!
//! The layout mimics a watch face: a status line and a round counter on the
//! left, the three button glyphs stacked in an action bar on the right.

mod effects;
mod input;
mod theme;

pub use effects::apply_pulse_effect;
pub use input::{InputPump, KeyAction, apply_event, handle_events, key_action};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use says_engine::{App, Button, FormFactor};

const CARD_WIDTH: u16 = 34;
const CARD_HEIGHT: u16 = 11;
const ACTION_BAR_WIDTH: u16 = 4;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    let screen = app.screen();

    let area = frame.area();
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, area);

    let mut card = centered(area, CARD_WIDTH, CARD_HEIGHT);
    if let Some(effect) = app.pulse_effect() {
        card = apply_pulse_effect(effect, card, area);
    }

    // Reduced motion keeps the base colours and marks the flash on the border only.
    let flash = screen.flash();
    let fill = flash
        .filter(|_| !options.reduced_motion)
        .and_then(|phase| palette.flash_fill(phase));

    let (card_style, text_style, info_style) = match fill {
        Some(color) => {
            let on_flash = styles::on_flash(color);
            (Style::default().bg(color), on_flash, on_flash)
        }
        None => (
            Style::default().bg(palette.bg_panel),
            styles::status(&palette),
            styles::info(&palette),
        ),
    };

    let border_type = match (flash.is_some() && options.reduced_motion, options.form_factor) {
        (true, _) => BorderType::Double,
        (false, FormFactor::Round) => BorderType::Rounded,
        (false, FormFactor::Rect) => BorderType::Plain,
    };
    let border_style = if flash.is_some() {
        styles::title(&palette)
    } else {
        Style::default().fg(palette.bg_border)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(card_style)
        .title(Line::from(Span::styled(" Says ", styles::title(&palette))))
        .title_bottom(
            Line::from(Span::styled(" q quit ", styles::key_hint(&palette)))
                .alignment(Alignment::Right),
        );
    let inner = block.inner(card);
    frame.render_widget(Clear, card);
    frame.render_widget(block, card);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(ACTION_BAR_WIDTH)])
        .split(inner);

    draw_text(frame, columns[0], screen.status(), screen.info(), text_style, info_style);
    draw_action_bar(frame, app, columns[1], &palette, &glyphs);
}

fn draw_text(
    frame: &mut Frame,
    area: Rect,
    status: &str,
    info: &str,
    status_style: Style,
    info_style: Style,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(1), // Status
            Constraint::Length(1),
            Constraint::Length(2), // Info
            Constraint::Fill(1),
        ])
        .split(area);

    let status = Paragraph::new(Line::from(Span::styled(status.to_owned(), status_style)))
        .alignment(Alignment::Center);
    frame.render_widget(status, rows[1]);

    let info_lines: Vec<Line> = info
        .lines()
        .map(|line| Line::from(Span::styled(line.to_owned(), info_style)))
        .collect();
    frame.render_widget(
        Paragraph::new(info_lines).alignment(Alignment::Center),
        rows[3],
    );
}

fn draw_action_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(area);

    for (button, row) in Button::ALL.into_iter().zip([rows[0], rows[2], rows[4]]) {
        let lit = app.screen().is_highlighted(button);
        let marker = if lit { glyphs.selected } else { " " };
        let line = Line::from(vec![
            Span::styled(marker, styles::button(palette, button, false)),
            Span::styled(
                format!(" {} ", glyphs.button(button)),
                styles::button(palette, button, lit),
            ),
        ])
        .alignment(Alignment::Right);
        frame.render_widget(Paragraph::new(line), row);
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
