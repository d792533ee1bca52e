//! Compliance checking of identifiers against a naming style.
//!
//! Checking is total: every input string yields a verdict. Violations
//! carry a human-readable reason naming the offending words or affixes.

use crate::core::affixes::strip_common_prefixes;
use crate::core::casing::{has_casing, Capitalization};
use crate::core::segmenter::word_parts;
use crate::core::spans::TextSpan;
use crate::style::descriptor::NamingStyle;

/// Verdict of a compliance check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Compliance {
    /// The identifier satisfies the naming style.
    Compliant,
    /// The identifier violates the naming style.
    Violation {
        /// Human-readable explanation of the failure.
        reason: String,
    },
}

impl Compliance {
    /// Whether the verdict is compliant.
    pub fn is_compliant(&self) -> bool {
        matches!(self, Self::Compliant)
    }

    /// The violation reason, when present.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Compliant => None,
            Self::Violation { reason } => Some(reason),
        }
    }

    fn violation(reason: impl Into<String>) -> Self {
        Self::Violation {
            reason: reason.into(),
        }
    }
}

impl NamingStyle {
    /// Check `name` against this style.
    pub fn check_name(&self, name: &str) -> Compliance {
        if !name.starts_with(self.prefix.as_str()) {
            return Compliance::violation(format!("Missing prefix: '{}'", self.prefix));
        }
        if !name.ends_with(self.suffix.as_str()) {
            return Compliance::violation(format!("Missing suffix: '{}'", self.suffix));
        }

        if name.len() <= self.prefix.len() + self.suffix.len() {
            // The affixes overlap inside the name; no base remains to check.
            return Compliance::Compliant;
        }

        let (rest, informal) = strip_common_prefixes(&name[self.prefix.len()..]);
        if !informal.is_empty() {
            return Compliance::violation(if self.prefix.is_empty() {
                format!("Prefix '{informal}' is not expected")
            } else {
                format!(
                    "Prefix '{informal}' does not match expected prefix '{}'",
                    self.prefix
                )
            });
        }

        // Casing applies to the base only; the suffix region is excluded.
        let check_end = rest.len() - self.suffix.len();
        let words = self.word_spans(rest, check_end);
        match self.capitalization_scheme {
            Capitalization::PascalCase => check_all_words(
                rest,
                &words,
                first_char_is_upper,
                "These words must begin with upper case characters: ",
            ),
            Capitalization::AllUpper => check_all_words(
                rest,
                &words,
                word_is_all_upper,
                "These words cannot contain lower case characters: ",
            ),
            Capitalization::AllLower => check_all_words(
                rest,
                &words,
                word_is_all_lower,
                "These words cannot contain upper case characters: ",
            ),
            Capitalization::CamelCase => check_first_and_rest_words(
                rest,
                &words,
                first_char_is_lower,
                |word| format!("The first word, '{word}', must begin with a lower case character"),
                first_char_is_upper,
                "These non-leading words must begin with an upper case letter: ",
            ),
            Capitalization::FirstUpper => check_first_and_rest_words(
                rest,
                &words,
                first_char_is_upper,
                |word| format!("The first word, '{word}', must begin with an upper case character"),
                first_char_is_lower,
                "These non-leading words must begin with a lowercase letter: ",
            ),
        }
    }

    /// Word spans of the base region `text[..check_end]`.
    ///
    /// With a separator configured the words are the separator-delimited
    /// runs; without one the base is decomposed by the word segmenter, so
    /// each casing hump is checked on its own.
    fn word_spans(&self, text: &str, check_end: usize) -> Vec<TextSpan> {
        if self.word_separator.is_empty() {
            word_parts(&text[..check_end]).collect()
        } else {
            separated_words(text, &self.word_separator, check_end).collect()
        }
    }
}

/// Schemes that constrain every word the same way.
fn check_all_words(
    text: &str,
    words: &[TextSpan],
    word_ok: fn(&str, TextSpan) -> bool,
    message: &str,
) -> Compliance {
    let violations: Vec<&str> = words
        .iter()
        .copied()
        .filter(|span| !word_ok(text, *span))
        .map(|span| span.slice_of(text))
        .collect();
    if violations.is_empty() {
        Compliance::Compliant
    } else {
        Compliance::violation(format!("{message}{}", violations.join(", ")))
    }
}

/// Schemes that constrain the first word differently from the rest.
fn check_first_and_rest_words(
    text: &str,
    words: &[TextSpan],
    first_ok: fn(&str, TextSpan) -> bool,
    first_message: fn(&str) -> String,
    rest_ok: fn(&str, TextSpan) -> bool,
    rest_message: &str,
) -> Compliance {
    let mut reasons: Vec<String> = Vec::new();

    if let Some((first, rest)) = words.split_first() {
        if !first_ok(text, *first) {
            reasons.push(first_message(first.slice_of(text)));
        }
        let violations: Vec<&str> = rest
            .iter()
            .copied()
            .filter(|span| !rest_ok(text, *span))
            .map(|span| span.slice_of(text))
            .collect();
        if !violations.is_empty() {
            reasons.push(format!("{rest_message}{}", violations.join(", ")));
        }
    }

    if reasons.is_empty() {
        Compliance::Compliant
    } else {
        Compliance::violation(reasons.join("\n"))
    }
}

/// Word spans of `text[..check_end]` delimited by `separator` occurrences.
///
/// The separator must be non-empty. Separators are searched over the full
/// text so an occurrence straddling `check_end` still terminates the last
/// word; spans themselves are clipped to `check_end`.
fn separated_words<'a>(text: &'a str, separator: &'a str, check_end: usize) -> SeparatedWords<'a> {
    debug_assert!(!separator.is_empty());
    SeparatedWords {
        text,
        separator,
        end: check_end,
        cursor: 0,
        exhausted: false,
    }
}

struct SeparatedWords<'a> {
    text: &'a str,
    separator: &'a str,
    end: usize,
    cursor: usize,
    exhausted: bool,
}

impl<'a> Iterator for SeparatedWords<'a> {
    type Item = TextSpan;

    fn next(&mut self) -> Option<TextSpan> {
        if self.exhausted {
            return None;
        }
        loop {
            let tail = &self.text[self.cursor..];
            if tail.starts_with(self.separator) {
                // Separators at the cursor are skipped one occurrence at a time.
                self.cursor += self.separator.len();
                continue;
            }
            let next_sep = tail
                .find(self.separator)
                .map_or(self.end, |i| self.cursor + i);
            if self.cursor > self.end {
                self.exhausted = true;
                return None;
            }
            let span = TextSpan::new(self.cursor, next_sep.min(self.end));
            self.cursor = span.end();
            if span.is_empty() {
                self.exhausted = true;
                return None;
            }
            return Some(span);
        }
    }
}

// Characters without case (digits, underscores) are neutral and satisfy
// every per-word constraint.

fn first_char_is_upper(text: &str, span: TextSpan) -> bool {
    match span.slice_of(text).chars().next() {
        Some(ch) => !has_casing(ch) || ch.is_uppercase(),
        None => true,
    }
}

fn first_char_is_lower(text: &str, span: TextSpan) -> bool {
    match span.slice_of(text).chars().next() {
        Some(ch) => !has_casing(ch) || ch.is_lowercase(),
        None => true,
    }
}

fn word_is_all_upper(text: &str, span: TextSpan) -> bool {
    span.slice_of(text)
        .chars()
        .all(|ch| !has_casing(ch) || ch.is_uppercase())
}

fn word_is_all_lower(text: &str, span: TextSpan) -> bool {
    span.slice_of(text)
        .chars()
        .all(|ch| !has_casing(ch) || ch.is_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn style() -> NamingStyle {
        NamingStyle::new(Uuid::nil())
    }

    #[test]
    fn test_missing_prefix() {
        let rule = style().with_prefix("m_");
        let verdict = rule.check_name("field");
        assert_eq!(verdict.reason(), Some("Missing prefix: 'm_'"));
    }

    #[test]
    fn test_missing_suffix() {
        let rule = style().with_suffix("_t");
        let verdict = rule.check_name("size");
        assert_eq!(verdict.reason(), Some("Missing suffix: '_t'"));
    }

    #[test]
    fn test_overlapping_affixes_are_compliant() {
        // prefix "s_" and suffix "_t" share the underscore inside "s_t".
        let rule = style().with_prefix("s_").with_suffix("_t");
        assert!(rule.check_name("s_t").is_compliant());
    }

    #[test]
    fn test_unexpected_informal_prefix() {
        let verdict = style().check_name("m_Foo");
        assert_eq!(verdict.reason(), Some("Prefix 'm_' is not expected"));

        let verdict = style().check_name("_Foo");
        assert_eq!(verdict.reason(), Some("Prefix '_' is not expected"));
    }

    #[test]
    fn test_informal_prefix_after_configured_prefix() {
        let rule = style().with_prefix("x_");
        let verdict = rule.check_name("x_m_foo");
        assert_eq!(
            verdict.reason(),
            Some("Prefix 'm_' does not match expected prefix 'x_'")
        );
    }

    #[test]
    fn test_pascal_case_lists_offending_words() {
        let rule = style().with_word_separator("_");
        let verdict = rule.check_name("foo_Bar_baz");
        assert_eq!(
            verdict.reason(),
            Some("These words must begin with upper case characters: foo, baz")
        );
        assert!(rule.check_name("Foo_Bar_Baz").is_compliant());
    }

    #[test]
    fn test_all_upper() {
        let rule = style()
            .with_word_separator("_")
            .with_capitalization(Capitalization::AllUpper);
        assert!(rule.check_name("MAX_RETRIES").is_compliant());
        let verdict = rule.check_name("MAX_bAD");
        assert_eq!(
            verdict.reason(),
            Some("These words cannot contain lower case characters: bAD")
        );
    }

    #[test]
    fn test_all_lower() {
        let rule = style()
            .with_word_separator("_")
            .with_capitalization(Capitalization::AllLower);
        assert!(rule.check_name("max_retries").is_compliant());
        let verdict = rule.check_name("max_BAD");
        assert_eq!(
            verdict.reason(),
            Some("These words cannot contain upper case characters: BAD")
        );
    }

    #[test]
    fn test_camel_case_reports_first_and_rest() {
        let rule = style()
            .with_word_separator("_")
            .with_capitalization(Capitalization::CamelCase);
        assert!(rule.check_name("foo_Bar").is_compliant());

        let verdict = rule.check_name("Foo_bar");
        assert_eq!(
            verdict.reason(),
            Some(
                "The first word, 'Foo', must begin with a lower case character\n\
                 These non-leading words must begin with an upper case letter: bar"
            )
        );
    }

    #[test]
    fn test_first_upper() {
        let rule = style()
            .with_word_separator("_")
            .with_capitalization(Capitalization::FirstUpper);
        assert!(rule.check_name("My_name").is_compliant());

        let verdict = rule.check_name("my_Name");
        assert_eq!(
            verdict.reason(),
            Some(
                "The first word, 'my', must begin with an upper case character\n\
                 These non-leading words must begin with a lowercase letter: Name"
            )
        );
    }

    #[test]
    fn test_empty_separator_segments_the_base() {
        // Without a separator each casing hump is a word of its own.
        assert!(style().check_name("FooBar").is_compliant());

        let verdict = style().check_name("fooBar");
        assert_eq!(
            verdict.reason(),
            Some("These words must begin with upper case characters: foo")
        );

        let camel = style().with_capitalization(Capitalization::CamelCase);
        assert!(camel.check_name("fooBar").is_compliant());

        // PascalCase tolerates interior underscores; they have no case.
        assert!(style().check_name("Foo_Bar").is_compliant());
    }

    #[test]
    fn test_empty_separator_first_upper_rejects_later_humps() {
        let rule = style().with_capitalization(Capitalization::FirstUpper);
        assert!(rule.check_name("Foobar").is_compliant());

        let verdict = rule.check_name("FooBar");
        assert_eq!(
            verdict.reason(),
            Some("These non-leading words must begin with a lowercase letter: Bar")
        );
    }

    #[test]
    fn test_suffix_region_is_not_case_checked() {
        let rule = style().with_suffix("_t").with_word_separator("_");
        assert!(rule.check_name("Foo_Bar_t").is_compliant());
    }

    #[test]
    fn test_caseless_words_are_neutral() {
        let rule = style().with_word_separator("_");
        assert!(rule.check_name("Foo_42_Bar").is_compliant());

        let upper = style()
            .with_word_separator("_")
            .with_capitalization(Capitalization::AllUpper);
        assert!(upper.check_name("MAX_2_RETRIES").is_compliant());
    }

    #[test]
    fn test_consecutive_separators_are_skipped() {
        let rule = style().with_word_separator("_");
        assert!(rule.check_name("Foo__Bar").is_compliant());
        let verdict = rule.check_name("Foo__bar");
        assert_eq!(
            verdict.reason(),
            Some("These words must begin with upper case characters: bar")
        );
    }

    #[test]
    fn test_empty_name_with_empty_style() {
        // Zero-length name, zero-length affixes: compliant by the overlap rule.
        assert!(style().check_name("").is_compliant());
    }

    #[test]
    fn test_separated_words_spans() {
        let spans: Vec<TextSpan> = separated_words("foo_bar_t", "_", 7).collect();
        assert_eq!(spans, [TextSpan::new(0, 3), TextSpan::new(4, 7)]);

        let spans: Vec<TextSpan> = separated_words("a__b", "_", 4).collect();
        assert_eq!(spans, [TextSpan::new(0, 1), TextSpan::new(3, 4)]);
    }
}
