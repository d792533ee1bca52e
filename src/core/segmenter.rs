//! Word segmentation for multi-word identifiers.
//!
//! Decomposes identifiers like `XMLDocument`, `m_fooBar`, or
//! `snake_case_name` into word spans by scanning casing transitions,
//! underscores, and digit runs. Two modes exist and differ only in how an
//! uppercase run is grouped:
//!
//! - word mode: `XMLDocument` segments as `XML` + `Document`
//! - character mode: `XMLDocument` segments as `X` + `M` + `L` + `Document`
//!
//! ```
//! use namestyle_rs::core::segmenter::split_words;
//!
//! let parts: Vec<&str> = split_words("XMLDocument").collect();
//! assert_eq!(parts, ["XML", "Document"]);
//! ```

use unicode_general_category::{get_general_category, GeneralCategory};

use crate::core::spans::TextSpan;

/// How aggressively uppercase runs are grouped during segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentMode {
    /// Keep uppercase acronym runs together (`XML` + `Document`).
    Word,
    /// Split uppercase runs into single letters (`X` + `M` + `L` + `Document`).
    Character,
}

/// Lazy iterator over the word spans of an identifier.
///
/// Spans are emitted in order, never overlap, and always lie within the
/// identifier. The iterator is `Clone`, so a segmentation can be restarted
/// or forked mid-scan.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    text: &'a str,
    mode: SegmentMode,
    pos: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = TextSpan;

    fn next(&mut self) -> Option<TextSpan> {
        if self.pos >= self.text.len() {
            return None;
        }
        let span = generate_span(self.text, self.pos, self.mode);
        if span.is_empty() {
            // A character no rule recognizes ends the scan at that position.
            self.pos = self.text.len();
            return None;
        }
        self.pos = span.end();
        Some(span)
    }
}

/// Segment `text` into word spans under the given mode.
pub fn segment(text: &str, mode: SegmentMode) -> Segments<'_> {
    Segments {
        text,
        mode,
        pos: 0,
    }
}

/// Segment `text` in word mode.
pub fn word_parts(text: &str) -> Segments<'_> {
    segment(text, SegmentMode::Word)
}

/// Segment `text` in character mode.
pub fn character_parts(text: &str) -> Segments<'_> {
    segment(text, SegmentMode::Character)
}

/// The word-mode parts of `text` as string slices.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    word_parts(text).map(move |span| span.slice_of(text))
}

/// Produce the next span starting at or after `word_start`.
///
/// Returns an empty span when nothing more can be recognized; the empty
/// span's position is where scanning stopped.
fn generate_span(text: &str, mut word_start: usize, mode: SegmentMode) -> TextSpan {
    // Leading punctuation other than underscore is skipped, not emitted.
    while let Some(ch) = char_at(text, word_start) {
        if ch != '_' && is_punctuation(ch) {
            word_start += ch.len_utf8();
        } else {
            break;
        }
    }

    let mut chars = text[word_start..].chars();
    let Some(first) = chars.next() else {
        return TextSpan::empty_at(word_start);
    };
    let second_pos = word_start + first.len_utf8();

    if first.is_uppercase() {
        let Some(second) = chars.next() else {
            // Final character of the identifier.
            return TextSpan::new(word_start, second_pos);
        };
        return match mode {
            SegmentMode::Word => scan_word_run(text, word_start, second_pos, second),
            SegmentMode::Character => scan_character_run(text, word_start, second_pos, second),
        };
    }
    if is_lower(first) {
        return scan_lower_case_run(text, word_start);
    }
    if first == '_' {
        return TextSpan::new(word_start, second_pos);
    }
    if is_digit(first) {
        return scan_number(text, word_start);
    }

    TextSpan::empty_at(word_start)
}

/// Word-mode scan from an uppercase letter that is not the last character.
fn scan_word_run(text: &str, word_start: usize, second_pos: usize, second: char) -> TextSpan {
    if second.is_uppercase() {
        // Uppercase run. If a lowercase letter follows it, the last
        // uppercase letter starts the next word ("XMLDocument" -> "XML").
        let mut last_upper = second_pos;
        let mut current = second_pos;
        while let Some(ch) = char_at(text, current) {
            if ch.is_uppercase() {
                last_upper = current;
                current += ch.len_utf8();
            } else {
                break;
            }
        }
        match char_at(text, current) {
            Some(ch) if is_lower(ch) => TextSpan::new(word_start, last_upper),
            _ => TextSpan::new(word_start, current),
        }
    } else if is_lower(second) {
        // Single uppercase letter followed by its lowercase tail.
        TextSpan::new(word_start, lower_run_end(text, second_pos))
    } else {
        TextSpan::new(word_start, second_pos)
    }
}

/// Character-mode scan from an uppercase letter that is not the last
/// character: the letter stands alone unless a lowercase tail follows.
fn scan_character_run(text: &str, word_start: usize, second_pos: usize, second: char) -> TextSpan {
    if is_lower(second) {
        TextSpan::new(word_start, lower_run_end(text, second_pos))
    } else {
        TextSpan::new(word_start, second_pos)
    }
}

fn scan_lower_case_run(text: &str, word_start: usize) -> TextSpan {
    TextSpan::new(word_start, lower_run_end(text, word_start))
}

fn scan_number(text: &str, word_start: usize) -> TextSpan {
    let mut current = word_start;
    while let Some(ch) = char_at(text, current) {
        if is_digit(ch) {
            current += ch.len_utf8();
        } else {
            break;
        }
    }
    TextSpan::new(word_start, current)
}

/// End of the maximal lowercase run starting at `from`.
fn lower_run_end(text: &str, from: usize) -> usize {
    let mut current = from;
    while let Some(ch) = char_at(text, current) {
        if is_lower(ch) {
            current += ch.len_utf8();
        } else {
            break;
        }
    }
    current
}

fn char_at(text: &str, pos: usize) -> Option<char> {
    text[pos..].chars().next()
}

/// Lowercase test with an ASCII fast path.
fn is_lower(ch: char) -> bool {
    if ch.is_ascii() {
        ch.is_ascii_lowercase()
    } else {
        ch.is_lowercase()
    }
}

/// Decimal digit (Unicode category Nd).
fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit() || get_general_category(ch) == GeneralCategory::DecimalNumber
}

/// Unicode punctuation (the seven P* categories; symbols are excluded).
fn is_punctuation(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}
