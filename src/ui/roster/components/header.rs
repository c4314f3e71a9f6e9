//! Roster header component
//!
//! Title chrome, then mode, position counter and match summary.

use super::super::state::RosterScreen;
use crate::consts::cli_consts::ROSTER_PAGE_TITLE;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_header(f: &mut Frame, area: Rect, state: &RosterScreen) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(area);

    let title = Paragraph::new(format!("{} | {}", state.site_title, ROSTER_PAGE_TITLE))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let browser = &state.browser;
    let status = Line::from(vec![
        Span::styled(
            format!("Mode: {}", browser.display_mode()),
            Style::default().fg(Color::LightYellow),
        ),
        Span::styled("  |  ", Style::default().fg(Color::DarkGray)),
        Span::styled(browser.counter(), Style::default().fg(Color::White)),
        Span::styled("  |  ", Style::default().fg(Color::DarkGray)),
        Span::styled(browser.summary(), Style::default().fg(Color::LightGreen)),
    ]);
    f.render_widget(
        Paragraph::new(status).alignment(Alignment::Center),
        header_chunks[1],
    );
}
