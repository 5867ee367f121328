use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use palettr::HarmonyRule;

use super::helpers::{marker, rgb_label, to_terminal_color};
use super::theme::Theme;
use crate::app::App;

const SWATCH: &str = "████████";

pub fn build_palette_text(app: &App) -> Text<'_> {
    let palette = app.palette();
    let mut lines = vec![rules_line(palette.rule), Line::from("")];
    lines.push(Line::from(Span::styled(
        format!("  {}", palette.rule.description()),
        Style::default().fg(Theme::dim()),
    )));
    lines.push(Line::from(""));

    for (index, color) in palette.colors.iter().enumerate() {
        let selected = index == app.selected_swatch_index;
        let marker_style = if selected {
            Style::default()
                .fg(Theme::selection_marker())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::dim())
        };
        let hex_style = if selected {
            Style::default().fg(Theme::text()).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::text())
        };
        lines.push(Line::from(vec![
            Span::styled(marker(selected), marker_style),
            Span::styled(SWATCH, Style::default().fg(to_terminal_color(*color))),
            Span::raw("  "),
            Span::styled(color.to_string(), hex_style),
            Span::raw("  "),
            Span::styled(
                format!("{:<18}", rgb_label(*color)),
                Style::default().fg(Theme::dim()),
            ),
            Span::styled(color.to_hsl().to_string(), Style::default().fg(Theme::dim())),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "  generated {}",
            palette.created_at.format("%Y-%m-%d %H:%M:%S")
        ),
        Style::default().fg(Theme::dim()),
    )));

    Text::from(lines)
}

fn rules_line(current: HarmonyRule) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (index, rule) in HarmonyRule::ALL.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if rule == current {
            Style::default()
                .fg(ratatui::style::Color::Black)
                .bg(Theme::primary())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::dim())
        };
        spans.push(Span::styled(format!(" {} {} ", index + 1, rule.label()), style));
    }
    Line::from(spans)
}
