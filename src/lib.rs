//! # namestyle-rs: Identifier Naming-Convention Engine
//!
//! A library that models identifier naming conventions (for example
//! `PascalCase` with prefix `m_`) as first-class rule values and provides
//! three capabilities on top of them:
//!
//! - **Compliance checking**: decide whether an identifier satisfies a
//!   rule, with a precise reason when it does not
//! - **Name synthesis**: produce one or two candidate replacements for a
//!   non-compliant identifier
//! - **Name construction**: build a brand-new identifier from an ordered
//!   word list
//!
//! Supporting these, the crate contains a casing-transition word segmenter
//! (`XMLDocument` is `XML` + `Document`), a capitalization applier for five
//! schemes, and an overlap-aware prefix/suffix matcher that never doubles
//! affix fragments already present in a name.
//!
//! The core engine is pure and synchronous: rule values are immutable,
//! checking and fixing are total functions, and everything is `Send + Sync`
//! by construction. Serialization (XML, JSON, YAML), the concurrent rule
//! cache, and the engine facade form a thin host shell around it.
//!
//! ## Quick Start
//!
//! ```rust
//! use namestyle_rs::{Capitalization, NamingStyle};
//! use uuid::Uuid;
//!
//! let rule = NamingStyle::new(Uuid::new_v4())
//!     .with_name("Private fields")
//!     .with_prefix("m_")
//!     .with_capitalization(Capitalization::PascalCase);
//!
//! assert!(rule.check_name("m_FooBar").is_compliant());
//!
//! let fixes = rule.make_compliant("fooBar");
//! assert_eq!(fixes[0], "m_FooBar");
//!
//! assert_eq!(rule.create_name(&["foo", "bar"]), "m_FooBar");
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Core naming algorithms
pub mod core {
    //! Core naming algorithms and data structures.

    pub mod affixes;
    pub mod casing;
    pub mod errors;
    pub mod segmenter;
    pub mod spans;
}

// Rule values and the operations defined on them
pub mod style {
    //! Naming rules and the checking and fixing operations on them.

    pub mod checker;
    pub mod descriptor;
    pub mod synthesizer;
}

// Serialization and caching
pub mod io {
    //! Rule serialization and the concurrent decoded-rule cache.

    pub mod cache;
    pub mod serialization;
}

// Public API and engine interface
pub mod api {
    //! High-level API and engine interface.

    pub mod engine;
}

// Re-export primary types for convenience
pub use crate::api::engine::NamingEngine;
pub use crate::core::casing::Capitalization;
pub use crate::core::errors::{NamestyleError, Result, ResultExt};
pub use crate::core::segmenter::{character_parts, split_words, word_parts, SegmentMode};
pub use crate::core::spans::TextSpan;
pub use crate::io::cache::StyleCache;
pub use crate::io::serialization::RuleFormat;
pub use crate::style::checker::Compliance;
pub use crate::style::descriptor::NamingStyle;
pub use crate::style::synthesizer::Candidates;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
