//! Capitalization schemes and their application to word lists.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::NamestyleError;

/// The five capitalization schemes a naming style can require.
///
/// The enum is closed: scheme dispatch is an exhaustive match and an
/// out-of-range scheme is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capitalization {
    /// Every word begins with an uppercase letter (`FooBar`).
    PascalCase,
    /// The first word begins lowercase, every later word uppercase (`fooBar`).
    CamelCase,
    /// The first word begins uppercase, every later word lowercase (`Foobar`).
    FirstUpper,
    /// Every word is fully uppercase (`FOO_BAR`).
    AllUpper,
    /// Every word is fully lowercase (`foo_bar`).
    AllLower,
}

impl Capitalization {
    /// All five schemes in declaration order.
    pub const ALL: [Capitalization; 5] = [
        Capitalization::PascalCase,
        Capitalization::CamelCase,
        Capitalization::FirstUpper,
        Capitalization::AllUpper,
        Capitalization::AllLower,
    ];

    /// Canonical scheme name, as used in serialized rules and on the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PascalCase => "PascalCase",
            Self::CamelCase => "CamelCase",
            Self::FirstUpper => "FirstUpper",
            Self::AllUpper => "AllUpper",
            Self::AllLower => "AllLower",
        }
    }

    /// Recase an ordered word list under this scheme.
    ///
    /// Word order and count are preserved; characters without case (digits,
    /// underscores) pass through untouched. Words that already carry the
    /// required casing are returned borrowed.
    pub fn apply<'a, I>(&self, words: I) -> Vec<Cow<'a, str>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        match self {
            Self::PascalCase => words.into_iter().map(capitalize_first).collect(),
            Self::CamelCase => words
                .into_iter()
                .enumerate()
                .map(|(i, word)| {
                    if i == 0 {
                        decapitalize_first(word)
                    } else {
                        capitalize_first(word)
                    }
                })
                .collect(),
            Self::FirstUpper => words
                .into_iter()
                .enumerate()
                .map(|(i, word)| {
                    if i == 0 {
                        capitalize_first(word)
                    } else {
                        decapitalize_first(word)
                    }
                })
                .collect(),
            Self::AllUpper => words
                .into_iter()
                .map(|word| Cow::Owned(word.to_uppercase()))
                .collect(),
            Self::AllLower => words
                .into_iter()
                .map(|word| Cow::Owned(word.to_lowercase()))
                .collect(),
        }
    }
}

impl fmt::Display for Capitalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capitalization {
    type Err = NamestyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PascalCase" => Ok(Self::PascalCase),
            "CamelCase" => Ok(Self::CamelCase),
            "FirstUpper" => Ok(Self::FirstUpper),
            "AllUpper" => Ok(Self::AllUpper),
            "AllLower" => Ok(Self::AllLower),
            other => Err(NamestyleError::unknown_scheme(other)),
        }
    }
}

/// Uppercase the first letter of `word`, borrowing when nothing changes.
pub fn capitalize_first(word: &str) -> Cow<'_, str> {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if !first.is_uppercase() => {
            let mut out = String::with_capacity(word.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            Cow::Owned(out)
        }
        _ => Cow::Borrowed(word),
    }
}

/// Lowercase the first letter of `word`, borrowing when nothing changes.
pub fn decapitalize_first(word: &str) -> Cow<'_, str> {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if !first.is_lowercase() => {
            let mut out = String::with_capacity(word.len());
            out.extend(first.to_lowercase());
            out.push_str(chars.as_str());
            Cow::Owned(out)
        }
        _ => Cow::Borrowed(word),
    }
}

/// Whether `ch` distinguishes upper and lower case forms at all.
pub(crate) fn has_casing(ch: char) -> bool {
    ch.to_lowercase().ne(ch.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applied(scheme: Capitalization, words: &[&str]) -> Vec<String> {
        scheme
            .apply(words.iter().copied())
            .into_iter()
            .map(Cow::into_owned)
            .collect()
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(applied(Capitalization::PascalCase, &["foo", "bar"]), ["Foo", "Bar"]);
        assert_eq!(applied(Capitalization::PascalCase, &["_", "42", "x"]), ["_", "42", "X"]);
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(applied(Capitalization::CamelCase, &["Foo", "Bar"]), ["foo", "Bar"]);
        assert_eq!(applied(Capitalization::CamelCase, &["foo"]), ["foo"]);
    }

    #[test]
    fn test_first_upper() {
        assert_eq!(applied(Capitalization::FirstUpper, &["my", "Name"]), ["My", "name"]);
    }

    #[test]
    fn test_all_upper_and_lower() {
        assert_eq!(applied(Capitalization::AllUpper, &["foo", "Bar"]), ["FOO", "BAR"]);
        assert_eq!(applied(Capitalization::AllLower, &["FOO", "Bar"]), ["foo", "bar"]);
    }

    #[test]
    fn test_word_count_preserved() {
        for scheme in Capitalization::ALL {
            assert_eq!(applied(scheme, &["a", "_", "b"]).len(), 3);
            assert!(applied(scheme, &[]).is_empty());
        }
    }

    #[test]
    fn test_capitalize_first_borrows_when_unchanged() {
        assert!(matches!(capitalize_first("Foo"), Cow::Borrowed(_)));
        assert!(matches!(capitalize_first(""), Cow::Borrowed(_)));
        assert!(matches!(capitalize_first("foo"), Cow::Owned(_)));
        assert!(matches!(decapitalize_first("foo"), Cow::Borrowed(_)));
        assert!(matches!(decapitalize_first("Foo"), Cow::Owned(_)));
    }

    #[test]
    fn test_caseless_first_char_passes_through() {
        assert_eq!(capitalize_first("_foo"), "_foo");
        assert_eq!(decapitalize_first("42x"), "42x");
    }

    #[test]
    fn test_scheme_name_round_trip() {
        for scheme in Capitalization::ALL {
            assert_eq!(scheme.as_str().parse::<Capitalization>().unwrap(), scheme);
        }
        assert!("SnakeCase".parse::<Capitalization>().is_err());
        assert!("pascalcase".parse::<Capitalization>().is_err());
    }

    #[test]
    fn test_has_casing() {
        assert!(has_casing('a'));
        assert!(has_casing('Z'));
        assert!(!has_casing('_'));
        assert!(!has_casing('7'));
    }
}
