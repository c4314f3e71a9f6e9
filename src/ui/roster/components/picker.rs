//! Name picker overlay
//!
//! Lists the filtered roster as "i. Name" and highlights the cursor row.

use super::super::state::RosterScreen;
use super::super::utils::centered_rect;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState};

pub fn render_picker(f: &mut Frame, area: Rect, state: &RosterScreen) {
    let entries = state.browser.picker_entries();
    let longest = entries.iter().map(|e| e.chars().count()).max().unwrap_or(0);
    let width = (longest as u16).saturating_add(8).max(30);
    let height = (entries.len() as u16).saturating_add(2).clamp(3, 20);
    let popup = centered_rect(area, width, height);

    let block = Block::default()
        .title("CHOOSE A STUDENT")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    f.render_widget(Clear, popup);
    if entries.is_empty() {
        f.render_widget(block, popup);
        return;
    }

    let items: Vec<ListItem> = entries.into_iter().map(ListItem::new).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    let mut list_state = ListState::default().with_selected(Some(state.picker_cursor));
    f.render_stateful_widget(list, popup, &mut list_state);
}
