//! Rule serialization across XML, JSON, and YAML carriers.
//!
//! The XML form is a single empty element whose attributes carry the rule
//! fields. JSON and YAML use the same PascalCase field names through serde.
//! Every encoder/decoder pair round-trips: decoding an encoded rule yields
//! a value equal to the original, including the `ID`.
//!
//! ```rust
//! use namestyle_rs::io::serialization::{decode_style, encode_style, RuleFormat};
//! use namestyle_rs::{Capitalization, NamingStyle};
//! use uuid::Uuid;
//!
//! let rule = NamingStyle::new(Uuid::new_v4())
//!     .with_prefix("m_")
//!     .with_capitalization(Capitalization::PascalCase);
//!
//! let xml = encode_style(&rule, RuleFormat::Xml)?;
//! assert_eq!(decode_style(&xml, RuleFormat::Xml)?, rule);
//! # Ok::<(), namestyle_rs::NamestyleError>(())
//! ```

use std::borrow::Cow;
use std::fmt;

use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use uuid::Uuid;

use crate::core::errors::{NamestyleError, Result};
use crate::style::descriptor::NamingStyle;

/// Serialization carrier for naming rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFormat {
    /// Attribute-based XML element
    Xml,
    /// JSON object with PascalCase keys
    Json,
    /// YAML mapping with PascalCase keys
    Yaml,
}

impl RuleFormat {
    /// Maps a file extension (without the dot) to a format.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "xml" => Some(Self::Xml),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Short uppercase tag used in error messages and log lines.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xml => "XML",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

impl fmt::Display for RuleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detects the carrier format from the leading content of `input`.
///
/// XML documents open with `<`, JSON objects with `{`, and anything else is
/// treated as YAML, which has no reliable sigil of its own.
pub fn detect_format(input: &str) -> RuleFormat {
    let trimmed = input.trim_start();
    if trimmed.starts_with('<') {
        RuleFormat::Xml
    } else if trimmed.starts_with('{') {
        RuleFormat::Json
    } else {
        RuleFormat::Yaml
    }
}

/// Encodes a naming rule in the requested format.
pub fn encode_style(style: &NamingStyle, format: RuleFormat) -> Result<String> {
    match format {
        RuleFormat::Xml => style_to_xml(style),
        RuleFormat::Json => Ok(serde_json::to_string_pretty(style)?),
        RuleFormat::Yaml => Ok(serde_yaml::to_string(style)?),
    }
}

/// Decodes a naming rule from the given format.
pub fn decode_style(input: &str, format: RuleFormat) -> Result<NamingStyle> {
    let mut style = match format {
        RuleFormat::Xml => style_from_xml(input)?,
        RuleFormat::Json => serde_json::from_str(input)?,
        RuleFormat::Yaml => serde_yaml::from_str(input)?,
    };
    // An empty label means no label, regardless of carrier format.
    if style.name.as_deref() == Some("") {
        style.name = None;
    }
    Ok(style)
}

/// Renders a rule as a single `<NamingStyle .../>` element.
///
/// The `Name` attribute is omitted when the rule has no label; every other
/// attribute is always written, even when empty, so decoding never has to
/// guess at defaults.
pub fn style_to_xml(style: &NamingStyle) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    let id = style.id.to_string();

    let mut element = BytesStart::new("NamingStyle");
    element.push_attribute(("ID", id.as_str()));
    if let Some(name) = style.name.as_deref() {
        element.push_attribute(("Name", name));
    }
    element.push_attribute(("Prefix", style.prefix.as_str()));
    element.push_attribute(("Suffix", style.suffix.as_str()));
    element.push_attribute(("WordSeparator", style.word_separator.as_str()));
    element.push_attribute((
        "CapitalizationScheme",
        style.capitalization_scheme.as_str(),
    ));
    writer.write_event(Event::Empty(element))?;

    String::from_utf8(writer.into_inner())
        .map_err(|err| NamestyleError::serialization_in("XML", err.to_string()))
}

/// Parses a rule from the first `<NamingStyle>` element in `xml`.
pub fn style_from_xml(xml: &str) -> Result<NamingStyle> {
    let mut reader = Reader::from_reader(xml.as_bytes());
    reader.trim_text(true);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(tag)) | Ok(Event::Empty(tag))
                if tag.name().as_ref() == b"NamingStyle" =>
            {
                return style_from_element(&tag);
            }
            Ok(Event::Eof) => {
                return Err(NamestyleError::serialization_in(
                    "XML",
                    "no <NamingStyle> element found",
                ));
            }
            Err(err) => return Err(err.into()),
            _ => {}
        }
        buf.clear();
    }
}

fn style_from_element(tag: &BytesStart<'_>) -> Result<NamingStyle> {
    let id = required_attribute(tag, b"ID")?;
    let mut style = NamingStyle::new(Uuid::parse_str(&id)?)
        .with_prefix(required_attribute(tag, b"Prefix")?)
        .with_suffix(required_attribute(tag, b"Suffix")?)
        .with_word_separator(required_attribute(tag, b"WordSeparator")?)
        .with_capitalization(required_attribute(tag, b"CapitalizationScheme")?.parse()?);

    if let Some(name) = attribute_value(tag, b"Name") {
        style = style.with_name(name);
    }
    Ok(style)
}

fn attribute_value(tag: &BytesStart<'_>, name: &[u8]) -> Option<String> {
    tag.attributes()
        .with_checks(false)
        .flatten()
        .find(|attr| attr.key.as_ref() == name)
        .and_then(|attr| attr.unescape_value().ok().map(Cow::into_owned))
}

fn required_attribute(tag: &BytesStart<'_>, name: &[u8]) -> Result<String> {
    attribute_value(tag, name).ok_or_else(|| {
        NamestyleError::missing_attribute(String::from_utf8_lossy(name).into_owned())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::casing::Capitalization;

    fn sample_style() -> NamingStyle {
        NamingStyle::new(Uuid::new_v4())
            .with_name("Private fields")
            .with_prefix("m_")
            .with_suffix("_t")
            .with_word_separator("_")
            .with_capitalization(Capitalization::AllLower)
    }

    #[test]
    fn xml_round_trip_preserves_every_field() {
        let style = sample_style();
        let xml = style_to_xml(&style).unwrap();
        assert!(xml.starts_with("<NamingStyle "));
        assert!(xml.contains("CapitalizationScheme=\"AllLower\""));
        assert_eq!(style_from_xml(&xml).unwrap(), style);
    }

    #[test]
    fn xml_omits_the_name_attribute_for_unlabeled_rules() {
        let style = NamingStyle::new(Uuid::new_v4());
        let xml = style_to_xml(&style).unwrap();
        assert!(!xml.contains("Name="));
        assert_eq!(style_from_xml(&xml).unwrap().name, None);
    }

    #[test]
    fn xml_escapes_and_unescapes_attribute_values() {
        let style = sample_style().with_name("Fields & \"members\" <private>");
        let xml = style_to_xml(&style).unwrap();
        assert!(xml.contains("&amp;"));
        assert_eq!(style_from_xml(&xml).unwrap(), style);
    }

    #[test]
    fn xml_missing_attribute_is_reported_by_name() {
        let xml = r#"<NamingStyle ID="1f2e3d4c-5b6a-4788-99aa-bbccddeeff00" Prefix="m_"/>"#;
        let err = style_from_xml(xml).unwrap_err();
        assert!(err.to_string().contains("'Suffix'"), "got: {err}");
    }

    #[test]
    fn xml_rejects_malformed_ids() {
        let xml = r#"<NamingStyle ID="not-a-uuid" Prefix="" Suffix="" WordSeparator="" CapitalizationScheme="PascalCase"/>"#;
        let err = style_from_xml(xml).unwrap_err();
        assert!(matches!(
            err,
            NamestyleError::Validation { field: Some(ref f), .. } if f == "ID"
        ));
    }

    #[test]
    fn xml_rejects_unknown_schemes() {
        let xml = r#"<NamingStyle ID="1f2e3d4c-5b6a-4788-99aa-bbccddeeff00" Prefix="" Suffix="" WordSeparator="" CapitalizationScheme="SnakeCase"/>"#;
        let err = style_from_xml(xml).unwrap_err();
        assert!(err.to_string().contains("SnakeCase"));
    }

    #[test]
    fn xml_without_the_expected_element_is_an_error() {
        let err = style_from_xml("<SomethingElse/>").unwrap_err();
        assert!(err.to_string().contains("no <NamingStyle> element"));
    }

    #[test]
    fn json_round_trip_preserves_every_field() {
        let style = sample_style();
        let json = encode_style(&style, RuleFormat::Json).unwrap();
        assert!(json.contains("\"ID\""));
        assert!(json.contains("\"WordSeparator\""));
        assert_eq!(decode_style(&json, RuleFormat::Json).unwrap(), style);
    }

    #[test]
    fn yaml_round_trip_preserves_every_field() {
        let style = sample_style();
        let yaml = encode_style(&style, RuleFormat::Yaml).unwrap();
        assert_eq!(decode_style(&yaml, RuleFormat::Yaml).unwrap(), style);
    }

    #[test]
    fn empty_labels_decode_to_none_in_every_format() {
        let json = r#"{
            "ID": "1f2e3d4c-5b6a-4788-99aa-bbccddeeff00",
            "Name": "",
            "Prefix": "",
            "Suffix": "",
            "WordSeparator": "",
            "CapitalizationScheme": "CamelCase"
        }"#;
        assert_eq!(decode_style(json, RuleFormat::Json).unwrap().name, None);

        let xml = r#"<NamingStyle ID="1f2e3d4c-5b6a-4788-99aa-bbccddeeff00" Name="" Prefix="" Suffix="" WordSeparator="" CapitalizationScheme="CamelCase"/>"#;
        assert_eq!(decode_style(xml, RuleFormat::Xml).unwrap().name, None);
    }

    #[test]
    fn detect_format_sniffs_the_leading_content() {
        assert_eq!(detect_format("  <NamingStyle/>"), RuleFormat::Xml);
        assert_eq!(detect_format("{\"ID\": \"x\"}"), RuleFormat::Json);
        assert_eq!(detect_format("ID: 1f2e3d4c"), RuleFormat::Yaml);
        assert_eq!(detect_format(""), RuleFormat::Yaml);
    }

    #[test]
    fn extensions_map_to_formats_case_insensitively() {
        assert_eq!(RuleFormat::from_extension("xml"), Some(RuleFormat::Xml));
        assert_eq!(RuleFormat::from_extension("JSON"), Some(RuleFormat::Json));
        assert_eq!(RuleFormat::from_extension("yml"), Some(RuleFormat::Yaml));
        assert_eq!(RuleFormat::from_extension("yaml"), Some(RuleFormat::Yaml));
        assert_eq!(RuleFormat::from_extension("toml"), None);
    }
}
