//! Roster main area
//!
//! Loading notice, fetch error, no-results message, or the cards themselves.

use super::super::state::RosterScreen;
use super::super::utils::card_lines;
use crate::browser::DisplayMode;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

fn navigation_line(state: &RosterScreen) -> Line<'static> {
    let style = Style::default().fg(Color::LightBlue);
    Line::from(vec![
        Span::styled("◀ Previous", style),
        Span::styled(
            format!("   {}   ", state.browser.counter()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("Next ▶", style),
    ])
    .alignment(Alignment::Center)
}

/// Lines of the main area, before wrapping and scrolling.
pub fn content_lines(state: &RosterScreen) -> Vec<Line<'static>> {
    let browser = &state.browser;

    if browser.is_loading() {
        let spinner = SPINNER[(state.tick / 2) % SPINNER.len()];
        return vec![Line::from(Span::styled(
            format!("{} Loading roster from {}", spinner, state.roster_url),
            Style::default().fg(Color::LightBlue),
        ))];
    }

    let mut lines = Vec::new();
    if let Some(error) = browser.error() {
        lines.push(Line::from(Span::styled(
            format!("Error: {}", error),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }
    if let Some(message) = browser.no_results_message() {
        lines.push(Line::from(Span::styled(
            message,
            Style::default().fg(Color::Gray),
        )));
        return lines;
    }

    let cards = state.visible_cards();
    match browser.display_mode() {
        DisplayMode::Slideshow => {
            lines.push(navigation_line(state));
            lines.push(Line::from(""));
            for card in &cards {
                lines.extend(card_lines(card));
            }
            lines.push(Line::from(""));
            lines.push(navigation_line(state));
        }
        DisplayMode::ShowAll => {
            for (i, card) in cards.iter().enumerate() {
                if i > 0 {
                    lines.push(Line::from(""));
                }
                lines.extend(card_lines(card));
            }
        }
    }
    lines
}

/// The main area text, wrapped the way it is drawn.
pub fn content_paragraph(state: &RosterScreen) -> Paragraph<'static> {
    Paragraph::new(content_lines(state)).wrap(Wrap { trim: false })
}

pub fn render_content(f: &mut Frame, area: Rect, state: &RosterScreen) {
    let title = match state.browser.display_mode() {
        DisplayMode::Slideshow => "STUDENT",
        DisplayMode::ShowAll => "ALL STUDENTS",
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    state.viewport.set(block.inner(area).as_size());
    let paragraph = content_paragraph(state)
        .block(block)
        .scroll((state.scroll, 0));
    f.render_widget(paragraph, area);
}
