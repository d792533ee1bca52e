//! Engine facade tying rules, the cache, and the naming operations together.

use tracing::{debug, info};
use uuid::Uuid;

use crate::core::errors::{NamestyleError, Result};
use crate::io::cache::StyleCache;
use crate::style::checker::Compliance;
use crate::style::descriptor::NamingStyle;
use crate::style::synthesizer::Candidates;

/// Main naming engine.
///
/// Owns a [`StyleCache`] of registered rules and exposes the checking,
/// fixing, and construction operations against them by rule ID. Hosts that
/// work with a single ad-hoc rule can call the same operations directly on
/// [`NamingStyle`]; the engine earns its keep once several rules are in
/// play at once.
#[derive(Debug)]
pub struct NamingEngine {
    /// Registered rules, keyed by ID
    styles: StyleCache,
}

impl NamingEngine {
    /// Creates an engine with no registered rules.
    pub fn new() -> Self {
        info!("Initializing naming engine");
        Self {
            styles: StyleCache::new(),
        }
    }

    /// Registers a rule and returns its ID.
    ///
    /// Registering a rule whose ID is already present replaces the earlier
    /// rule.
    pub fn register(&self, style: NamingStyle) -> Uuid {
        let id = style.id;
        debug!("Registered naming rule {}", id);
        self.styles.insert(style);
        id
    }

    /// Decodes a serialized rule (XML, JSON, or YAML), registers it, and
    /// returns it.
    pub fn load_rule(&self, input: &str) -> Result<NamingStyle> {
        self.styles.resolve(input)
    }

    /// Looks up a registered rule by ID.
    pub fn style(&self, id: Uuid) -> Option<NamingStyle> {
        self.styles.get(id)
    }

    /// Checks `name` against the rule registered under `id`.
    pub fn check(&self, id: Uuid, name: &str) -> Result<Compliance> {
        Ok(self.require(id)?.check_name(name))
    }

    /// Produces candidate fixes for `name` under the rule registered under
    /// `id`.
    pub fn fix(&self, id: Uuid, name: &str) -> Result<Candidates> {
        Ok(self.require(id)?.make_compliant(name))
    }

    /// Builds a fresh identifier from `words` under the rule registered
    /// under `id`.
    pub fn build<S: AsRef<str>>(&self, id: Uuid, words: &[S]) -> Result<String> {
        Ok(self.require(id)?.create_name(words))
    }

    fn require(&self, id: Uuid) -> Result<NamingStyle> {
        self.styles.get(id).ok_or_else(|| {
            NamestyleError::validation_field(
                format!("no naming rule registered under id {id}"),
                "ID",
            )
        })
    }
}

impl Default for NamingEngine {
    fn default() -> Self {
        Self::new()
    }
}
