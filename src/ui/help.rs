use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;

pub fn build_help_text() -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(section_title("Global"));
    lines.extend(section_lines(&[
        "q: Quit",
        "?: Toggle help",
        "Tab: Next view (back from Saved)",
        "esc: Back",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Palette"));
    lines.extend(section_lines(&[
        "space/g: Generate a new palette",
        "Left/Right: Previous/next harmony rule",
        "1-4: Random, Monochromatic, Complementary, Triadic",
        "Up/Down: Select swatch",
        "s: Save palette",
        "e: Export palette as JSON",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Saved"));
    lines.extend(section_lines(&[
        "Up/Down: Move selection",
        "Enter: Show palette",
        "d: Delete palette",
        "e: Export palette as JSON",
        "r: Reload list",
        "Tab: Back",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Harmony rules"));
    lines.extend(
        palettr::HarmonyRule::ALL
            .into_iter()
            .map(|rule| format!("{}: {}", rule.label(), rule.description()))
            .map(|item| {
                Line::from(Span::styled(
                    format!("  - {item}"),
                    Style::default().fg(Theme::text()),
                ))
            }),
    );

    Text::from(lines)
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(Theme::secondary())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(items: &[&str]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("  - {item}"),
                Style::default().fg(Theme::text()),
            ))
        })
        .collect()
}
