//! Error types for the namestyle-rs library.
//!
//! Structured error types for every fallible operation in the crate:
//! rule decoding, rule validation, and host-level I/O. The checking and
//! fixing paths themselves are total and never surface these errors.

use std::io;

use thiserror::Error;

/// Main result type for namestyle operations.
pub type Result<T> = std::result::Result<T, NamestyleError>;

/// Comprehensive error type for all namestyle operations.
#[derive(Error, Debug)]
pub enum NamestyleError {
    /// I/O related errors (rule file operations)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Rule format being processed (XML, JSON, YAML)
        format: Option<String>,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A required attribute is absent from a serialized naming style
    #[error("Missing required attribute '{attribute}' in serialized naming style")]
    MissingAttribute {
        /// Name of the absent attribute
        attribute: String,
    },

    /// A capitalization scheme name that is not one of the five known schemes
    #[error("Unknown capitalization scheme '{value}' (expected one of: PascalCase, CamelCase, FirstUpper, AllUpper, AllLower)")]
    UnknownScheme {
        /// The rejected scheme name
        value: String,
    },

    /// Validation errors for rules and rule lookups
    #[error("Validation error: {message}")]
    Validation {
        /// Error description
        message: String,
        /// Field or input that failed validation
        field: Option<String>,
    },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal {
        /// Error description
        message: String,
        /// Additional context
        context: Option<String>,
    },
}

impl NamestyleError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
            format: None,
            source: None,
        }
    }

    /// Create a new serialization error tagged with the rule format
    pub fn serialization_in(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
            format: Some(format.into()),
            source: None,
        }
    }

    /// Create a new missing-attribute error
    pub fn missing_attribute(attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            attribute: attribute.into(),
        }
    }

    /// Create a new unknown-scheme error
    pub fn unknown_scheme(value: impl Into<String>) -> Self {
        Self::UnknownScheme {
            value: value.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new validation error with field context
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            context: None,
        }
    }

    /// Add context to an existing error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        match &mut self {
            Self::Internal { context: ctx, .. } => {
                *ctx = Some(context.into());
            }
            _ => {} // Other variants carry their own context fields
        }
        self
    }
}

// Implement From traits for common error types
impl From<io::Error> for NamestyleError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<serde_json::Error> for NamestyleError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {err}"),
            format: Some("JSON".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_yaml::Error> for NamestyleError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML serialization failed: {err}"),
            format: Some("YAML".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<quick_xml::Error> for NamestyleError {
    fn from(err: quick_xml::Error) -> Self {
        Self::Serialization {
            message: format!("XML processing failed: {err}"),
            format: Some("XML".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<uuid::Error> for NamestyleError {
    fn from(err: uuid::Error) -> Self {
        Self::validation_field(format!("Invalid UUID: {err}"), "ID")
    }
}

/// Result extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;

    /// Add static context to an error result
    fn context(self, msg: &'static str) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<NamestyleError>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.into().with_context(f()))
    }

    fn context(self, msg: &'static str) -> Result<T> {
        self.map_err(|e| e.into().with_context(msg))
    }
}
