//! Roster footer component
//!
//! Key hints for the current focus.

use crate::browser::DisplayMode;
use crate::ui::keys::Focus;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn key_hints(focus: Focus, mode: DisplayMode) -> &'static str {
    match (focus, mode) {
        (Focus::Browse, DisplayMode::Slideshow) => {
            "[←/→] Prev/Next | [/] Search | [G] Jump | [P] Pick | [M] Show all | [F] Fields | [Q] Quit"
        }
        (Focus::Browse, DisplayMode::ShowAll) => {
            "[↑/↓ PgUp/PgDn] Scroll | [/] Search | [M] Slideshow | [F] Fields | [Q] Quit"
        }
        (Focus::Search, _) => "Type to filter | [Backspace] Delete | [Enter/Esc] Done",
        (Focus::Jump, _) => "Type a number | [Enter] Go | [Esc] Cancel",
        (Focus::Picker, _) => "[↑/↓] Choose | [Enter] Go | [Esc] Cancel",
        (Focus::Fields, _) => "[1-9] Toggle field | [Enter/Esc] Done",
    }
}

pub fn render_footer(f: &mut Frame, area: Rect, focus: Focus, mode: DisplayMode) {
    let footer = Paragraph::new(key_hints(focus, mode))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
