//! Key cap glyphs.
//!
//! Responsibilities:
//! - Map key labels from the catalogs to the compact glyphs shown on caps.
//! - Build styled spans for a sequence of key caps.
//!
//! Invariants:
//! - Labels without a glyph render verbatim.

use ratatui::style::Style;
use ratatui::text::Span;

/// Display text for one key label.
pub fn glyph(label: &str) -> &str {
    match label {
        "Super" => "⌘",
        "Shift" => "⇧",
        "Alt" => "⌥",
        "Enter" | "Return" => "⏎",
        "Arrow" | "Arrows" => "←↑↓→",
        "Space" => "␣ Space",
        "Print Screen" => "PrtSc",
        "CapsLock" => "Caps",
        "PageUp" => "PgUp",
        "PageDown" => "PgDn",
        other => other,
    }
}

/// One cap: the glyph padded by a space on each side.
pub fn cap<'a>(label: &'a str, style: Style) -> Span<'a> {
    Span::styled(format!(" {} ", glyph(label)), style)
}

/// Caps joined with `+`, as in `⌘ + ⏎`.
pub fn chord<'a>(labels: &[&'a str], cap_style: Style, sep_style: Style) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(labels.len() * 2);
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("+", sep_style));
        }
        spans.push(cap(label, cap_style));
    }
    spans
}

/// Display width of `chord(labels, ..)` in terminal cells.
pub fn chord_width(labels: &[&str]) -> u16 {
    let caps: usize = labels.iter().map(|l| glyph(l).chars().count() + 2).sum();
    let seps = labels.len().saturating_sub(1);
    u16::try_from(caps + seps).unwrap_or(u16::MAX)
}
