//! Display-width aware text helpers used by the page layout.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal columns occupied by `s`.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Greedy word wrap by display width.
///
/// Words wider than `width` are hard-split at character boundaries.  Always
/// returns at least one (possibly empty) line.
pub fn wrap(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_w = 0;

    for word in s.split_whitespace() {
        let word_w = word.width();

        if word_w > width {
            // Flush, then chop the long word into width-sized pieces.
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_w = 0;
            }
            for c in word.chars() {
                let cw = c.width().unwrap_or(0);
                if current_w + cw > width {
                    lines.push(std::mem::take(&mut current));
                    current_w = 0;
                }
                current.push(c);
                current_w += cw;
            }
            continue;
        }

        let sep = usize::from(!current.is_empty());
        if current_w + sep + word_w > width {
            lines.push(std::mem::take(&mut current));
            current_w = 0;
        } else if sep == 1 {
            current.push(' ');
            current_w += 1;
        }
        current.push_str(word);
        current_w += word_w;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Shorten `s` to at most `width` columns, ending in `…` when cut.
pub fn truncate(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut w = 0;
    for c in s.chars() {
        let cw = c.width().unwrap_or(0);
        if w + cw + 1 > width {
            break;
        }
        out.push(c);
        w += cw;
    }
    out.push('…');
    out
}
