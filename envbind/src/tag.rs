//! Grammar of the per-field `#[env("...")]` annotation
//!
//! ```text
//! <name>[;<mandatory|optional>[;<default>]]
//! ```

use std::str::FromStr;

use crate::error::TagError;

const SEPARATOR: char = ';';
const MANDATORY: &str = "mandatory";
const OPTIONAL: &str = "optional";

/// Parsed annotation of one struct field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTag {
    /// Environment variable name before the application prefix is applied.
    pub name: String,
    /// Whether a missing value is an error.
    pub required: bool,
    /// Value used when the environment has none.
    ///
    /// An empty third segment is indistinguishable from an absent one and
    /// parses to `None`.
    pub default: Option<String>,
}

impl FieldTag {
    /// An empty tag does not bind the field to any variable.
    pub fn is_unbound(&self) -> bool {
        self.name.is_empty()
    }
}

impl FromStr for FieldTag {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tag(s)
    }
}

/// Parse a raw annotation into a [`FieldTag`].
///
/// - An empty string yields an unbound tag.
/// - The name is trimmed and must not be empty.
/// - The mode must be exactly `mandatory` or `optional`; omitted means optional.
/// - The default is taken verbatim. Segments past the default are ignored.
pub fn parse_tag(raw: &str) -> Result<FieldTag, TagError> {
    if raw.is_empty() {
        return Ok(FieldTag::default());
    }

    let mut segments = raw.split(SEPARATOR);

    let name = segments.next().unwrap_or_default().trim();
    if name.is_empty() {
        return Err(TagError::EmptyName);
    }

    let required = match segments.next() {
        None | Some(OPTIONAL) => false,
        Some(MANDATORY) => true,
        Some(mode) => {
            return Err(TagError::InvalidMode {
                mode: mode.to_string(),
            })
        }
    };

    let default = segments
        .next()
        .filter(|value| !value.is_empty())
        .map(str::to_string);

    Ok(FieldTag {
        name: name.to_string(),
        required,
        default,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_tag() {
        let tag = parse_tag("HOST;mandatory;localhost").unwrap();
        assert_eq!(
            tag,
            FieldTag {
                name: "HOST".to_string(),
                required: true,
                default: Some("localhost".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_empty_tag() {
        let tag = parse_tag("").unwrap();
        assert_eq!(tag, FieldTag::default());
        assert!(tag.is_unbound());
        assert!(!tag.required);
        assert_eq!(tag.default, None);
    }

    #[test]
    fn test_name_only_is_optional() {
        let tag = parse_tag("PORT").unwrap();
        assert_eq!(tag.name, "PORT");
        assert!(!tag.required);
        assert_eq!(tag.default, None);
    }

    #[test]
    fn test_name_is_trimmed() {
        let tag = parse_tag("  PORT \t;optional").unwrap();
        assert_eq!(tag.name, "PORT");
    }

    #[test]
    fn test_blank_name_is_rejected() {
        assert_eq!(parse_tag("   "), Err(TagError::EmptyName));
        assert_eq!(parse_tag(";mandatory;x"), Err(TagError::EmptyName));
    }

    #[test]
    fn test_mode_is_exact_and_case_sensitive() {
        assert_eq!(
            parse_tag("PORT;Mandatory"),
            Err(TagError::InvalidMode {
                mode: "Mandatory".to_string()
            })
        );
        assert_eq!(
            parse_tag("PORT; optional"),
            Err(TagError::InvalidMode {
                mode: " optional".to_string()
            })
        );
        assert_eq!(
            parse_tag("PORT;;8080"),
            Err(TagError::InvalidMode {
                mode: String::new()
            })
        );
    }

    #[test]
    fn test_default_is_verbatim() {
        let tag = parse_tag("GREETING;optional; hello world ").unwrap();
        assert_eq!(tag.default.as_deref(), Some(" hello world "));
    }

    #[test]
    fn test_empty_default_means_none() {
        let tag = parse_tag("PORT;mandatory;").unwrap();
        assert!(tag.required);
        assert_eq!(tag.default, None);
    }

    #[test]
    fn test_extra_segments_are_ignored() {
        let tag = parse_tag("URL;optional;http://a;b;c").unwrap();
        assert_eq!(tag.default.as_deref(), Some("http://a"));
    }

    #[test]
    fn test_from_str() {
        let tag: FieldTag = "LEVEL;optional;info".parse().unwrap();
        assert_eq!(tag.name, "LEVEL");
        assert_eq!(tag.default.as_deref(), Some("info"));
    }
}
