//! Query match highlighting
//!
//! Splits display text into runs so every case-insensitive occurrence of the
//! query can be emphasized without touching the original casing.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// A run of the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub matched: bool,
}

impl<'a> Segment<'a> {
    fn plain(text: &'a str) -> Self {
        Self {
            text,
            matched: false,
        }
    }

    fn marked(text: &'a str) -> Self {
        Self {
            text,
            matched: true,
        }
    }
}

/// Split `text` around non-overlapping, case-insensitive matches of `query`
///
/// The query is matched literally. Segments borrow from `text` and
/// concatenate back to it exactly.
pub fn split_matches<'a>(text: &'a str, query: &str) -> Vec<Segment<'a>> {
    if text.is_empty() {
        return Vec::new();
    }
    if query.is_empty() {
        return vec![Segment::plain(text)];
    }

    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let byte_at = |idx: usize| chars.get(idx).map(|(b, _)| *b).unwrap_or(text.len());

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;

    while i < chars.len() {
        match match_len(&chars[i..], &needle) {
            Some(len) => {
                let start = byte_at(i);
                let end = byte_at(i + len);
                if start > plain_start {
                    segments.push(Segment::plain(&text[plain_start..start]));
                }
                segments.push(Segment::marked(&text[start..end]));
                plain_start = end;
                i += len;
            }
            None => i += 1,
        }
    }

    if plain_start < text.len() {
        segments.push(Segment::plain(&text[plain_start..]));
    }

    segments
}

/// Number of source chars matching `needle` at the start of `chars`
fn match_len(chars: &[(usize, char)], needle: &[char]) -> Option<usize> {
    let mut matched = 0;
    let mut consumed = 0;

    while matched < needle.len() {
        let (_, ch) = chars.get(consumed)?;
        for lower in ch.to_lowercase() {
            if needle.get(matched) != Some(&lower) {
                return None;
            }
            matched += 1;
        }
        consumed += 1;
    }

    Some(consumed)
}

/// Build a styled line with matches emphasized
pub fn highlight_line(text: &str, query: &str, base: Style, emphasis: Style) -> Line<'static> {
    let spans: Vec<Span<'static>> = split_matches(text, query)
        .into_iter()
        .map(|segment| {
            let style = if segment.matched {
                base.patch(emphasis)
            } else {
                base
            };
            Span::styled(segment.text.to_string(), style)
        })
        .collect();

    Line::from(spans)
}

#[cfg(test)]
#[path = "highlight_tests.rs"]
mod highlight_tests;
