use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::{marker, to_terminal_color};
use super::theme::Theme;
use crate::app::App;

pub fn build_saved_text(app: &App) -> Text<'_> {
    if app.saved.is_empty() {
        return Text::from("No saved palettes. Press 's' on the palette view to save one.");
    }

    let lines = app
        .saved
        .iter()
        .enumerate()
        .map(|(index, saved)| {
            let selected = index == app.selected_saved_index;
            let marker_style = if selected {
                Style::default()
                    .fg(Theme::highlight())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Theme::dim())
            };
            let mut spans = vec![
                Span::styled(marker(selected), marker_style),
                Span::styled(
                    format!("#{:<4}", saved.id.unwrap_or_default()),
                    Style::default().fg(Theme::accent()),
                ),
            ];
            spans.extend(saved.palette.colors.iter().map(|color| {
                Span::styled("██", Style::default().fg(to_terminal_color(*color)))
            }));
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("{:<14}", saved.palette.rule.label()),
                Style::default().fg(Theme::text()),
            ));
            spans.push(Span::styled(
                saved.palette.created_at.format("%Y-%m-%d %H:%M").to_string(),
                Style::default().fg(Theme::dim()),
            ));
            Line::from(spans)
        })
        .collect::<Vec<_>>();

    Text::from(lines)
}
