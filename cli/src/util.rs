// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Terminal width of the first `n` chars of `s`, where the cursor of a text
/// input sits.
pub fn unicode_width_of_slice(s: &str, n: usize) -> usize {
    let end = s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    s[..end].width()
}

/// Byte range of the `index`-th grapheme cluster of `s`.
pub fn byte_range_of_grapheme_at(s: &str, index: usize) -> Option<Range<usize>> {
    s.grapheme_indices(true)
        .nth(index)
        .map(|(start, g)| start..start + g.len())
}

/// Cuts `s` to at most `max_width` terminal columns, marking the cut with `…`.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    } else if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for g in s.graphemes(true) {
        let w = g.width();
        if width + w + 1 > max_width {
            break;
        }
        out.push_str(g);
        width += w;
    }
    out.push('…');
    out
}
