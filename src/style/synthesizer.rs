//! Candidate synthesis for non-compliant identifiers.

use smallvec::SmallVec;

use crate::core::affixes::{ensure_prefix, ensure_suffix, strip_common_prefixes};
use crate::core::segmenter::split_words;
use crate::style::descriptor::NamingStyle;

/// Candidate names produced by [`NamingStyle::make_compliant`]: one or two
/// entries, reuse-strategy result first, no duplicates.
pub type Candidates = SmallVec<[String; 2]>;

impl NamingStyle {
    /// Produce replacement candidates for `name` under this style.
    ///
    /// Two synthesis strategies run: the reuse strategy salvages affix
    /// fragments already present in the name, the direct strategy attaches
    /// the affixes verbatim. The reuse result always comes first; the
    /// direct result is appended only when it differs. At least one
    /// candidate is always returned.
    pub fn make_compliant(&self, name: &str) -> Candidates {
        let mut candidates = Candidates::new();
        candidates.push(self.fix_reusing_affixes(name));

        let direct = self.fix_directly(name);
        if direct != candidates[0] {
            candidates.push(direct);
        }
        candidates
    }

    /// Reuse strategy: overlap-aware affix attachment, so partial affixes
    /// already in the name are completed rather than duplicated.
    fn fix_reusing_affixes(&self, name: &str) -> String {
        let (rest, _) = strip_common_prefixes(name);
        let fixed = ensure_prefix(rest, &self.prefix);
        let fixed = ensure_suffix(&fixed, &self.suffix);
        self.finish_fixing_name(fixed)
    }

    /// Direct strategy: strip what does not belong, then attach the missing
    /// affixes whole.
    fn fix_directly(&self, name: &str) -> String {
        let stripped = name.strip_prefix(self.prefix.as_str()).unwrap_or(name);
        let (rest, _) = strip_common_prefixes(stripped);

        let mut fixed = if rest.starts_with(self.prefix.as_str()) {
            rest.to_string()
        } else {
            format!("{}{}", self.prefix, rest)
        };
        if !fixed.ends_with(self.suffix.as_str()) {
            fixed.push_str(&self.suffix);
        }
        self.finish_fixing_name(fixed)
    }

    /// Recase the base between the affixes according to the style.
    ///
    /// The incoming name is guaranteed by the strategies to carry both
    /// affixes.
    fn finish_fixing_name(&self, name: String) -> String {
        if self.suffix.len() + self.prefix.len() >= name.len() {
            // Degenerate overlap (prefix "as", suffix "sa", name "asa"):
            // there is no base to recase.
            return name;
        }

        let base = &name[self.prefix.len()..name.len() - self.suffix.len()];
        let words: Vec<&str> = if self.word_separator.is_empty() {
            let parts: Vec<&str> = split_words(base).collect();
            if parts.is_empty() {
                vec![base]
            } else {
                parts
            }
        } else {
            let pieces: Vec<&str> = base
                .split(self.word_separator.as_str())
                .filter(|piece| !piece.is_empty())
                .collect();
            match pieces.len() {
                // The base consists solely of separators; hand it back.
                0 => return base.to_string(),
                // A single word may still be multiple words in disguise.
                1 => split_words(pieces[0]).collect(),
                _ => pieces,
            }
        };

        let cased = self.capitalization_scheme.apply(words);
        format!(
            "{}{}{}",
            self.prefix,
            cased.join(self.word_separator.as_str()),
            self.suffix
        )
    }
}
