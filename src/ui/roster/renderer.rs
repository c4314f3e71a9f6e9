//! Roster screen main renderer

use super::components::{content, controls, fields, footer, header, logs, picker};
use super::state::RosterScreen;
use crate::ui::keys::Focus;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_roster(f: &mut Frame, state: &RosterScreen) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    controls::render_controls(f, main_chunks[1], state);
    content::render_content(f, main_chunks[2], state);
    logs::render_log_line(f, main_chunks[3], state);
    footer::render_footer(
        f,
        main_chunks[4],
        state.focus,
        state.browser.display_mode(),
    );

    match state.focus {
        Focus::Picker => picker::render_picker(f, main_chunks[2], state),
        Focus::Fields => fields::render_fields(f, main_chunks[2], state),
        Focus::Browse | Focus::Search | Focus::Jump => {}
    }
}
