//! # Text Layout
//!
//! Greedy line breaking over UAX#14 break opportunities, measured with real
//! font metrics from the [`FontContext`]. This is what decides how many
//! 5 mm lines a paragraph occupies, which in turn drives every fit decision
//! the layout engine makes.

use crate::font::FontContext;
use crate::style::FontFace;
use unicode_linebreak::{linebreaks, BreakOpportunity};

/// Break `text` into lines no wider than `max_width_pt`.
///
/// First-fit greedy: segments between UAX#14 break opportunities are packed
/// onto the current line until the next one would overflow. Mandatory breaks
/// (newlines) always flush the line. Trailing whitespace never counts toward
/// a line's width and is trimmed from the output.
///
/// A single segment wider than the line is emitted on its own line rather
/// than split mid-word; the layout engine tolerates the horizontal overflow.
/// Empty input produces one empty line, so an empty paragraph still has a
/// height.
pub fn break_into_lines(
    fonts: &FontContext,
    text: &str,
    max_width_pt: f64,
    face: FontFace,
    size_pt: f64,
) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    // linebreaks() yields (byte_offset, opportunity) where the offset is the
    // start of the next segment; it always ends with a mandatory break at
    // text.len(), so every segment gets flushed.
    let mut segment_start = 0;
    for (byte_offset, opportunity) in linebreaks(text) {
        let segment = &text[segment_start..byte_offset];
        segment_start = byte_offset;

        if !current.is_empty() {
            let mut candidate = current.clone();
            candidate.push_str(segment);
            if fonts.measure_string(candidate.trim_end(), face, size_pt) > max_width_pt {
                lines.push(current.trim_end().to_string());
                current.clear();
            }
        }
        current.push_str(segment);

        if matches!(opportunity, BreakOpportunity::Mandatory) {
            lines.push(current.trim_end().to_string());
            current.clear();
        }
    }

    if !current.is_empty() {
        lines.push(current.trim_end().to_string());
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
