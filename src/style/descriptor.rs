//! The naming-rule descriptor value type.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::casing::Capitalization;

/// An immutable naming rule: required affixes, word separator, and
/// capitalization scheme under a stable identity.
///
/// Equality compares all formatting fields plus `id`, so two rules that
/// format identically but were defined separately remain distinguishable.
///
/// ```
/// use namestyle_rs::{Capitalization, NamingStyle};
/// use uuid::Uuid;
///
/// let style = NamingStyle::new(Uuid::new_v4())
///     .with_prefix("m_")
///     .with_capitalization(Capitalization::PascalCase);
///
/// assert_eq!(style.create_name(&["my", "name"]), "m_MyName");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NamingStyle {
    /// Identity of the rule.
    #[serde(rename = "ID")]
    pub id: Uuid,

    /// Optional display label; no effect on checking or fixing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Required leading affix (may be empty).
    pub prefix: String,

    /// Required trailing affix (may be empty).
    pub suffix: String,

    /// Literal separator between words (may be empty or multi-character).
    pub word_separator: String,

    /// Casing requirement for the words between the affixes.
    pub capitalization_scheme: Capitalization,
}

impl NamingStyle {
    /// The default rule under `id`: no affixes, no separator, `PascalCase`.
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            name: None,
            prefix: String::new(),
            suffix: String::new(),
            word_separator: String::new(),
            capitalization_scheme: Capitalization::PascalCase,
        }
    }

    /// Set the display label. Empty labels are treated as absent.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = if name.is_empty() { None } else { Some(name) };
        self
    }

    /// Set the required prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the required suffix.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Set the word separator.
    pub fn with_word_separator(mut self, separator: impl Into<String>) -> Self {
        self.word_separator = separator.into();
        self
    }

    /// Set the capitalization scheme.
    pub fn with_capitalization(mut self, scheme: Capitalization) -> Self {
        self.capitalization_scheme = scheme;
        self
    }

    /// Build a brand-new identifier from an ordered word list.
    ///
    /// The scheme is applied to the words exactly as given; no segmentation
    /// or informal-prefix stripping takes place.
    pub fn create_name<S: AsRef<str>>(&self, words: &[S]) -> String {
        let words: Vec<&str> = words.iter().map(AsRef::as_ref).collect();
        let cased = self.capitalization_scheme.apply(words);
        format!(
            "{}{}{}",
            self.prefix,
            cased.join(self.word_separator.as_str()),
            self.suffix
        )
    }
}
