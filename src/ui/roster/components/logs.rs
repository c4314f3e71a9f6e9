//! Roster activity line
//!
//! The most recent displayable event, one line high.

use super::super::state::RosterScreen;
use super::super::utils::{event_color, format_compact_timestamp};
use crate::events::EventType;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub fn render_log_line(f: &mut Frame, area: Rect, state: &RosterScreen) {
    let line = match state
        .activity_logs
        .iter()
        .rev()
        .find(|event| event.should_display())
    {
        Some(event) => {
            let icon = match event.event_type {
                EventType::Success => "✅ ",
                EventType::Error => "❌ ",
                EventType::Refresh => "",
            };
            Line::from(vec![
                Span::raw(icon),
                Span::styled(
                    format!("{} ", format_compact_timestamp(&event.timestamp)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    event.msg.clone(),
                    Style::default().fg(event_color(event.event_type)),
                ),
            ])
        }
        None => Line::from(Span::styled(
            "Starting up...",
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}
