//! Utilities for highlighting search matches in question text.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightTextSpan {
    pub text: String,
    pub is_highlighted: bool,
    pub index: u64,
}

/// Splits `text` into spans, highlighting case-insensitive occurrences of `query`.
///
/// Highlighted spans are numbered in order starting at 0. Adjacent matches
/// merge into a single span.
pub fn highlight_query_matches(text: &str, query: &str) -> Vec<HighlightTextSpan> {
    let mut v = do_highlight_query_matches(text, query);
    let mut index = 0;
    for item in v.iter_mut() {
        if item.is_highlighted {
            item.index = index;
            index += 1;
        }
    }
    v
}

fn do_highlight_query_matches(text: &str, query: &str) -> Vec<HighlightTextSpan> {
    if text.is_empty() {
        return vec![];
    }
    if query.trim().is_empty() {
        return vec![HighlightTextSpan { text: text.to_string(), is_highlighted: false, index: 0 }];
    }

    let needle: Vec<char> = query.to_lowercase().chars().collect();
    let folded = fold_with_offsets(text);

    let mut spans: Vec<HighlightTextSpan> = Vec::new();
    let push_span = |spans: &mut Vec<HighlightTextSpan>, piece: &str, highlighted: bool| {
        if piece.is_empty() {
            return;
        }
        if let Some(last) = spans.last_mut() {
            if last.is_highlighted == highlighted {
                last.text.push_str(piece);
                return;
            }
        }
        spans.push(HighlightTextSpan { text: piece.to_string(), is_highlighted: highlighted, index: 0 });
    };

    let mut plain_start = 0;
    let mut k = 0;
    while k + needle.len() <= folded.len() {
        let is_match = folded[k..k + needle.len()].iter().map(|(_, c)| *c).eq(needle.iter().copied());
        if !is_match {
            k += 1;
            continue;
        }

        let start = folded[k].0;
        let last = k + needle.len() - 1;
        let mut end_k = last + 1;
        while end_k < folded.len() && folded[end_k].0 == folded[last].0 {
            end_k += 1;
        }
        let end = folded.get(end_k).map(|(offset, _)| *offset).unwrap_or(text.len());

        push_span(&mut spans, &text[plain_start..start], false);
        push_span(&mut spans, &text[start..end], true);
        plain_start = end;
        k = end_k;
    }
    push_span(&mut spans, &text[plain_start..], false);

    spans
}

/// Lowercases `text` exactly as `str::to_lowercase` does, tagging each
/// folded char with the byte offset of the original char it came from.
///
/// Whole-string lowercasing is context sensitive (a word-final `Σ` becomes
/// `ς`), so the chars come from `text.to_lowercase()` and only the offsets
/// come from the per-char expansion. Both produce the same number of chars
/// per original char.
fn fold_with_offsets(text: &str) -> Vec<(usize, char)> {
    let offsets = text
        .char_indices()
        .flat_map(|(offset, c)| std::iter::repeat_n(offset, c.to_lowercase().count()));
    offsets.zip(text.to_lowercase().chars()).collect()
}
