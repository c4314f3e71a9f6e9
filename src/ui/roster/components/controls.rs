//! Roster controls bar
//!
//! Search box, jump box and the field toggles, side by side. The box with
//! input focus is highlighted.

use super::super::state::RosterScreen;
use crate::browser::DisplayMode;
use crate::ui::keys::Focus;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

fn control_block(title: &str, focused: bool) -> Block<'_> {
    let color = if focused { Color::LightYellow } else { Color::Cyan };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

/// Text of an input box: its value with a cursor when focused, else a dim hint.
fn input_line(value: &str, hint: &str, focused: bool) -> Line<'static> {
    let mut spans = Vec::new();
    if value.is_empty() && !focused {
        spans.push(Span::styled(
            hint.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::raw(value.to_string()));
    }
    if focused {
        spans.push(Span::styled(
            "█",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    Line::from(spans)
}

pub fn render_controls(f: &mut Frame, area: Rect, state: &RosterScreen) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Percentage(20),
            Constraint::Percentage(35),
        ])
        .split(area);

    let browser = &state.browser;

    let search_focused = state.focus == Focus::Search;
    let search = Paragraph::new(input_line(
        browser.search_term(),
        "[/] Search by name",
        search_focused,
    ))
    .block(control_block("SEARCH", search_focused));
    f.render_widget(search, chunks[0]);

    let jump_focused = state.focus == Focus::Jump;
    let jump_text = if browser.display_mode() == DisplayMode::Slideshow {
        input_line(browser.jump_input(), &browser.jump_hint(), jump_focused)
    } else {
        Line::from(Span::styled("-", Style::default().fg(Color::DarkGray)))
    };
    f.render_widget(
        Paragraph::new(jump_text).block(control_block("JUMP TO", jump_focused)),
        chunks[1],
    );

    let fields_focused = state.focus == Focus::Fields;
    let hidden = browser
        .field_visibility()
        .entries()
        .filter(|(_, shown)| !shown)
        .count();
    let fields_text = if hidden == 0 {
        "All fields shown".to_string()
    } else {
        format!("{} field(s) hidden", hidden)
    };
    f.render_widget(
        Paragraph::new(fields_text).block(control_block("FIELDS [F]", fields_focused)),
        chunks[2],
    );
}
