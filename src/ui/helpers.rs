use palettr::Color as PaletteColor;
use ratatui::style::Color;

pub fn to_terminal_color(color: PaletteColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb(r, g, b)
}

pub fn rgb_label(color: PaletteColor) -> String {
    let (r, g, b) = color.rgb();
    format!("rgb({r}, {g}, {b})")
}

pub fn marker(selected: bool) -> &'static str {
    if selected { "> " } else { "  " }
}
