use grouplist_types::Rgb;
use owo_colors::OwoColorize;
use ratatui::style::Color;

pub fn tui_color(accent: Rgb) -> Color {
    Color::Rgb(accent.r, accent.g, accent.b)
}

/// Light gray band behind group headers.
pub fn header_background() -> Color {
    Color::Rgb(0xE0, 0xE0, 0xE0)
}

/// `text` on an accent background for truecolor terminals.
pub fn console_accent(text: &str, accent: Rgb) -> String {
    text.black()
        .on_truecolor(accent.r, accent.g, accent.b)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_color_keeps_channels() {
        assert_eq!(tui_color(Rgb::from_hex(0xB0D9FF)), Color::Rgb(0xB0, 0xD9, 0xFF));
    }

    #[test]
    fn test_console_accent_wraps_text() {
        let painted = console_accent(" 1 ", Rgb::from_hex(0xB0D9FF));
        assert!(painted.contains(" 1 "));
        assert!(painted.starts_with('\u{1b}'));
    }
}
