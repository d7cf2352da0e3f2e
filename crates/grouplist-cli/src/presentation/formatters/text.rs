use ratatui::text::Span;

/// Terminal cell width of `text`.
pub fn display_width(text: &str) -> usize {
    Span::raw(text).width()
}

/// Shortens `text` to at most `max_width` terminal cells, ending in `...`
/// when anything was cut. A double-width character that would straddle the
/// limit is dropped whole.
pub fn truncate_text(text: &str, max_width: usize) -> String {
    if display_width(text) <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut used = 0;
    let mut truncated = String::new();
    for ch in text.chars() {
        let width = display_width(ch.encode_utf8(&mut [0; 4]));
        if used + width > budget {
            break;
        }
        used += width;
        truncated.push(ch);
    }
    format!("{}...", truncated)
}
