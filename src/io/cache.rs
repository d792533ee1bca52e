//! Concurrent cache of decoded naming rules, keyed by rule ID.
//!
//! Decoding a rule is far more expensive than any single check or fix
//! performed with it, so hosts that evaluate many identifiers against the
//! same rule set decode each rule once and look it up by `ID` afterwards.

use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use crate::core::errors::Result;
use crate::io::serialization::{decode_style, detect_format};
use crate::style::descriptor::NamingStyle;

/// Concurrent store of decoded naming rules.
///
/// All methods take `&self`; a shared cache can be read and written from
/// any number of threads at once.
#[derive(Debug, Default)]
pub struct StyleCache {
    styles: DashMap<Uuid, NamingStyle>,
}

impl StyleCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            styles: DashMap::new(),
        }
    }

    /// Stores a rule under its own ID.
    ///
    /// Returns the rule previously cached under that ID, if any.
    pub fn insert(&self, style: NamingStyle) -> Option<NamingStyle> {
        self.styles.insert(style.id, style)
    }

    /// Looks up a rule by ID.
    pub fn get(&self, id: Uuid) -> Option<NamingStyle> {
        self.styles.get(&id).map(|entry| entry.value().clone())
    }

    /// Decodes a serialized rule, caches it under its ID, and returns it.
    ///
    /// The carrier format is sniffed from the input. A freshly decoded rule
    /// replaces any previously cached rule with the same ID.
    pub fn resolve(&self, input: &str) -> Result<NamingStyle> {
        let format = detect_format(input);
        let style = decode_style(input, format)?;
        debug!("Cached naming rule {} decoded from {}", style.id, format);
        self.styles.insert(style.id, style.clone());
        Ok(style)
    }

    /// Number of cached rules.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// True when no rules are cached.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
