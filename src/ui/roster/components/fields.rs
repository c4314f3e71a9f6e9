//! Field toggle overlay

use super::super::state::RosterScreen;
use super::super::utils::centered_rect;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

pub fn render_fields(f: &mut Frame, area: Rect, state: &RosterScreen) {
    let lines: Vec<Line> = state
        .browser
        .field_visibility()
        .entries()
        .enumerate()
        .map(|(i, (field, shown))| {
            let (mark, color) = if shown {
                ("[x]", Color::LightGreen)
            } else {
                ("[ ]", Color::DarkGray)
            };
            Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(Color::Yellow)),
                Span::styled(format!("{} ", mark), Style::default().fg(color)),
                Span::raw(field.label()),
            ])
        })
        .collect();

    let height = lines.len() as u16 + 2;
    let popup = centered_rect(area, 36, height);
    let block = Block::default()
        .title("FIELDS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    f.render_widget(Clear, popup);
    f.render_widget(Paragraph::new(lines).block(block), popup);
}
