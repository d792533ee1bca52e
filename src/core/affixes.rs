//! Prefix and suffix handling: informal-prefix stripping and overlap-aware
//! affix attachment.

/// Strip informal prefixes (`m_`, `s_`, `t_`, `_`) from the front of a name.
///
/// The letter prefixes match case-insensitively and are only stripped when
/// at least one character remains after them; stripping stops once fewer
/// than two characters remain. Returns `(remainder, stripped)`, both
/// subslices of the input, with `stripped` + `remainder` == `name`.
///
/// ```
/// use namestyle_rs::core::affixes::strip_common_prefixes;
///
/// assert_eq!(strip_common_prefixes("m_testField"), ("testField", "m_"));
/// assert_eq!(strip_common_prefixes("__x"), ("x", "__"));
/// ```
pub fn strip_common_prefixes(name: &str) -> (&str, &str) {
    let mut index = 0;
    loop {
        let mut chars = name[index..].chars();
        let Some(first) = chars.next() else { break };
        if chars.clone().next().is_none() {
            // Fewer than two characters left.
            break;
        }
        match first.to_ascii_lowercase() {
            'm' | 's' | 't' => {
                // Letter prefixes only count with an underscore attached and
                // a nonempty base behind them.
                if chars.next() == Some('_') && chars.next().is_some() {
                    index += first.len_utf8() + 1;
                    continue;
                }
                break;
            }
            '_' => {
                index += 1;
                continue;
            }
            _ => break,
        }
    }
    (&name[index..], &name[..index])
}

/// Prepend as little of `prefix` as possible so the result starts with it.
///
/// If `name` already begins with a trailing part of the prefix, only the
/// missing head is prepended: `ensure_prefix("dog_test", "catdog_")` is
/// `"catdog_test"`, not `"catdog_dog_test"`.
pub fn ensure_prefix(name: &str, prefix: &str) -> String {
    for (i, _) in prefix.char_indices() {
        if name.starts_with(&prefix[i..]) {
            return format!("{}{}", &prefix[..i], name);
        }
    }
    format!("{prefix}{name}")
}

/// Append as little of `suffix` as possible so the result ends with it.
///
/// The longest leading part of the suffix already present at the end of
/// `name` is reused; only the remainder is appended.
pub fn ensure_suffix(name: &str, suffix: &str) -> String {
    for i in (1..=suffix.len()).rev() {
        if !suffix.is_char_boundary(i) {
            continue;
        }
        if name.ends_with(&suffix[..i]) {
            return format!("{}{}", name, &suffix[i..]);
        }
    }
    format!("{name}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_single_informal_prefix() {
        assert_eq!(strip_common_prefixes("m_testField"), ("testField", "m_"));
        assert_eq!(strip_common_prefixes("s_instance"), ("instance", "s_"));
        assert_eq!(strip_common_prefixes("T_Param"), ("Param", "T_"));
        assert_eq!(strip_common_prefixes("_field"), ("field", "_"));
    }

    #[test]
    fn test_strip_stacked_prefixes() {
        assert_eq!(strip_common_prefixes("m_s_x"), ("x", "m_s_"));
        assert_eq!(strip_common_prefixes("__x"), ("x", "__"));
        assert_eq!(strip_common_prefixes("_m_x"), ("x", "_m_"));
    }

    #[test]
    fn test_strip_requires_a_base() {
        // "m_" alone keeps its letter; only one character would remain.
        assert_eq!(strip_common_prefixes("m_"), ("m_", ""));
        assert_eq!(strip_common_prefixes("_"), ("_", ""));
        assert_eq!(strip_common_prefixes("__"), ("_", "_"));
        assert_eq!(strip_common_prefixes(""), ("", ""));
    }

    #[test]
    fn test_strip_leaves_ordinary_names_alone() {
        assert_eq!(strip_common_prefixes("myName"), ("myName", ""));
        assert_eq!(strip_common_prefixes("test"), ("test", ""));
        assert_eq!(strip_common_prefixes("x_y"), ("x_y", ""));
    }

    #[test]
    fn test_ensure_prefix_overlap() {
        assert_eq!(ensure_prefix("dog_test", "catdog_"), "catdog_test");
        assert_eq!(ensure_prefix("test", "m_"), "m_test");
        assert_eq!(ensure_prefix("m_test", "m_"), "m_test");
        assert_eq!(ensure_prefix("_test", "m_"), "m_test");
    }

    #[test]
    fn test_ensure_prefix_empty_cases() {
        assert_eq!(ensure_prefix("test", ""), "test");
        assert_eq!(ensure_prefix("", "m_"), "m_");
    }

    #[test]
    fn test_ensure_suffix_overlap() {
        assert_eq!(ensure_suffix("catdog", "og_"), "catdog_");
        assert_eq!(ensure_suffix("name", "_t"), "name_t");
        assert_eq!(ensure_suffix("name_t", "_t"), "name_t");
        assert_eq!(ensure_suffix("name_", "_t"), "name_t");
    }

    #[test]
    fn test_ensure_suffix_empty_cases() {
        assert_eq!(ensure_suffix("test", ""), "test");
        assert_eq!(ensure_suffix("", "_t"), "_t");
    }
}
