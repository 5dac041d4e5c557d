//! Utilities for highlighting text spans in search results.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightTextSpan {
    pub text: String,
    pub is_highlighted: bool,
    pub index: u64,
}

/// Splits `text` on case-insensitive occurrences of `term`, preserving the
/// original casing of matched and unmatched portions alike. The term is a
/// literal substring, never a pattern. An empty (or whitespace-only) term
/// yields a single unmatched span holding the whole text. Highlighted spans
/// are numbered left to right.
///
/// This only shapes rendered output; it plays no part in deciding which
/// products are included.
pub fn highlight_term(text: &str, term: &str) -> Vec<HighlightTextSpan> {
    let term = term.trim();
    if term.is_empty() {
        return vec![HighlightTextSpan { text: text.to_string(), is_highlighted: false, index: 0 }];
    }

    let mut spans = highlight_spans(text, &term.to_lowercase());
    let mut index = 0;
    for span in spans.iter_mut() {
        if span.is_highlighted {
            span.index = index;
            index += 1;
        }
    }
    spans
}

fn highlight_spans(text: &str, needle: &str) -> Vec<HighlightTextSpan> {
    let (folded, offsets) = case_fold(text);

    let mut spans: Vec<HighlightTextSpan> = Vec::new();
    let mut cursor = 0; // byte position in the original text
    let mut folded_cursor = 0; // byte position in the folded text
    while let Some(found) = folded[folded_cursor..].find(needle) {
        let folded_start = folded_cursor + found;
        let start = map_offset(&offsets, folded_start, text.len());
        let end = map_offset(&offsets, folded_start + needle.len(), text.len());
        push_span(&mut spans, &text[cursor..start], false);
        push_span(&mut spans, &text[start..end], true);
        cursor = end;
        folded_cursor = folded_start + needle.len();
    }
    push_span(&mut spans, &text[cursor..], false);

    if spans.is_empty() {
        // Unmatched empty text still renders as one plain span.
        spans.push(HighlightTextSpan { text: String::new(), is_highlighted: false, index: 0 });
    }
    spans
}

// Merges into the previous span when the highlight state repeats, so the
// output stays a strictly alternating sequence.
fn push_span(spans: &mut Vec<HighlightTextSpan>, text: &str, is_highlighted: bool) {
    if text.is_empty() {
        return;
    }
    if let Some(last) = spans.last_mut() {
        if last.is_highlighted == is_highlighted {
            last.text.push_str(text);
            return;
        }
    }
    spans.push(HighlightTextSpan { text: text.to_string(), is_highlighted, index: 0 });
}

/// Lowercases `text` while recording, per original character, where its
/// lowered form starts in the folded string. Lowercasing can grow a
/// character into several, so byte offsets need an explicit mapping back.
fn case_fold(text: &str) -> (String, Vec<(usize, usize)>) {
    let mut folded = String::with_capacity(text.len());
    let mut offsets: Vec<(usize, usize)> = Vec::new();
    for (original_pos, c) in text.char_indices() {
        offsets.push((folded.len(), original_pos));
        for lowered in c.to_lowercase() {
            folded.push(lowered);
        }
    }
    offsets.push((folded.len(), text.len()));
    (folded, offsets)
}

// A position inside a multi-byte lowering expansion rounds up to the next
// original character boundary.
fn map_offset(offsets: &[(usize, usize)], folded_pos: usize, original_len: usize) -> usize {
    match offsets.binary_search_by_key(&folded_pos, |entry| entry.0) {
        Ok(i) => offsets[i].1,
        Err(i) => offsets.get(i).map(|entry| entry.1).unwrap_or(original_len),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> HighlightTextSpan {
        HighlightTextSpan { text: text.to_string(), is_highlighted: false, index: 0 }
    }

    fn matched(text: &str, index: u64) -> HighlightTextSpan {
        HighlightTextSpan { text: text.to_string(), is_highlighted: true, index }
    }

    #[test]
    fn empty_term_returns_the_whole_text_unmatched() {
        assert_eq!(highlight_term("Red Shoe", ""), vec![plain("Red Shoe")]);
        assert_eq!(highlight_term("Red Shoe", "   "), vec![plain("Red Shoe")]);
        assert_eq!(highlight_term("", ""), vec![plain("")]);
    }

    #[test]
    fn matching_preserves_original_casing() {
        assert_eq!(
            highlight_term("Red Shoe", "shoe"),
            vec![plain("Red "), matched("Shoe", 0)],
        );
    }

    #[test]
    fn all_occurrences_are_highlighted_in_order() {
        assert_eq!(
            highlight_term("Shoe rack for shoes", "shoe"),
            vec![matched("Shoe", 0), plain(" rack for "), matched("shoe", 1), plain("s")],
        );
    }

    #[test]
    fn pattern_special_characters_match_literally() {
        assert_eq!(
            highlight_term("C++ (special) edition", "(special)"),
            vec![plain("C++ "), matched("(special)", 0), plain(" edition")],
        );
        assert_eq!(
            highlight_term("50% off .*", ".*"),
            vec![plain("50% off "), matched(".*", 0)],
        );
    }

    #[test]
    fn adjacent_matches_merge_into_one_span() {
        assert_eq!(highlight_term("aaaa", "a"), vec![matched("aaaa", 0)]);
    }

    #[test]
    fn no_match_yields_a_single_unmatched_span() {
        assert_eq!(highlight_term("Red Shoe", "boot"), vec![plain("Red Shoe")]);
    }

    #[test]
    fn non_ascii_text_is_sliced_on_character_boundaries() {
        assert_eq!(
            highlight_term("Café CRÈME", "crème"),
            vec![plain("Café "), matched("CRÈME", 0)],
        );
    }

    #[test]
    fn whole_text_match_produces_one_highlighted_span() {
        assert_eq!(highlight_term("Nike", "NIKE"), vec![matched("Nike", 0)]);
    }
}
