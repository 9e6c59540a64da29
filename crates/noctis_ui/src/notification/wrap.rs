//! Greedy word wrapping against measured text widths.

use crate::render::TextMetrics;

/// Suffix appended to words cut to fit.
pub const ELLIPSIS: &str = "...";

/// Splits `text` on spaces into lines no wider than `max_width`.
///
/// Words are packed greedily. A word wider than a whole line is cut and
/// suffixed with [`ELLIPSIS`] so no line ever overflows. Empty text yields
/// no lines; any other text yields at least one.
#[must_use]
pub fn wrap_text(font: &dyn TextMetrics, text: &str, font_size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split(' ') {
        let candidate = if current.is_empty() {
            word.to_owned()
        } else {
            format!("{current} {word}")
        };

        if font.measure_width(&candidate, font_size) <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if font.measure_width(word, font_size) <= max_width {
            current = word.to_owned();
        } else {
            lines.push(truncate_text(font, word, font_size, max_width));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() && !text.is_empty() {
        lines.push(truncate_text(font, text, font_size, max_width));
    }
    lines
}

/// Cuts `text` to the longest prefix that still fits with [`ELLIPSIS`]
/// appended.
///
/// Text that already fits is returned unchanged. The result never measures
/// wider than `max_width`: when not even [`ELLIPSIS`] fits, only as many of
/// its dots as fit are returned, possibly none.
#[must_use]
pub fn truncate_text(font: &dyn TextMetrics, text: &str, font_size: f32, max_width: f32) -> String {
    if font.measure_width(text, font_size) <= max_width {
        return text.to_owned();
    }

    let ellipsis_width = font.measure_width(ELLIPSIS, font_size);
    if ellipsis_width > max_width {
        return longest_fitting_prefix(font, ELLIPSIS, font_size, max_width);
    }

    let mut kept = longest_fitting_prefix(font, text, font_size, max_width - ellipsis_width);
    kept.push_str(ELLIPSIS);
    kept
}

fn longest_fitting_prefix(font: &dyn TextMetrics, text: &str, font_size: f32, budget: f32) -> String {
    let mut kept = String::new();
    for ch in text.chars() {
        kept.push(ch);
        if font.measure_width(&kept, font_size) > budget {
            kept.pop();
            break;
        }
    }
    kept
}
