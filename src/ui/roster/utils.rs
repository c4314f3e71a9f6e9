//! Roster screen helpers
//!
//! Turns cards into styled lines and formats activity log entries.

use crate::browser::card::{CardImage, NO_IMAGE, StudentCard};
use crate::events::EventType;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Colour of an activity log entry.
pub fn event_color(event_type: EventType) -> Color {
    match event_type {
        EventType::Success => Color::Green,
        EventType::Error => Color::Red,
        EventType::Refresh => Color::Cyan,
    }
}

/// "MM-DD HH:MM" from a "YYYY-MM-DD HH:MM:SS" timestamp, or the input unchanged.
pub fn format_compact_timestamp(timestamp: &str) -> String {
    let mut parts = timestamp.split(' ');
    let (Some(date), Some(time)) = (parts.next(), parts.next()) else {
        return timestamp.to_string();
    };
    match (date.get(5..10), time.get(0..5)) {
        (Some(month_day), Some(hour_min)) => format!("{} {}", month_day, hour_min),
        _ => timestamp.to_string(),
    }
}

/// A `width` x `height` rectangle centred in `area`, shrunk to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Styled lines for one card. Hidden or empty sections produce no lines.
pub fn card_lines(card: &StudentCard) -> Vec<Line<'static>> {
    let label = Style::default()
        .fg(Color::LightBlue)
        .add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();

    if let Some(heading) = &card.heading {
        lines.push(Line::from(Span::styled(
            heading.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
    }

    if let Some(figure) = &card.figure {
        match &figure.image {
            CardImage::Url { url, alt } => {
                lines.push(Line::from(vec![
                    Span::styled("Image: ", label),
                    Span::styled(
                        url.clone(),
                        Style::default()
                            .fg(Color::LightCyan)
                            .add_modifier(Modifier::UNDERLINED),
                    ),
                ]));
                lines.push(Line::from(Span::styled(
                    format!("  ({})", alt),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            CardImage::Placeholder => lines.push(Line::from(Span::styled(
                format!("[{}]", NO_IMAGE),
                Style::default().fg(Color::DarkGray),
            ))),
        }
        if !figure.caption.is_empty() {
            lines.push(Line::from(Span::styled(
                figure.caption.clone(),
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
    }

    if let Some(statement) = &card.statement {
        lines.push(Line::from(""));
        lines.push(Line::from(statement.clone()));
    }

    if !card.details.is_empty() || !card.courses.is_empty() {
        lines.push(Line::from(""));
    }
    for detail in &card.details {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", detail.label), label),
            Span::raw(detail.value.clone()),
        ]));
    }
    if !card.courses.is_empty() {
        lines.push(Line::from(Span::styled("Courses:", label)));
        for course in &card.courses {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {}: ", course.title),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(course.reason.clone()),
            ]));
        }
    }

    lines
}
