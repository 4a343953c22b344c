//! Redirect rule parsing.
//!
//! # Responsibilities
//! - Deserialize YAML and JSON redirect documents into [`PathRule`]s
//! - Preserve document order (later rules override earlier ones downstream)
//! - Infer the document format from a file extension
//!
//! # Design Decisions
//! - Structural parsing only: paths and URLs are not validated
//! - Empty and `null` documents parse to an empty rule list
//! - Unknown keys in a rule are ignored; missing or non-string keys are errors

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One configured redirect.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PathRule {
    /// Request path to match exactly (e.g. `/go`).
    pub path: String,

    /// Redirect target, absolute or relative.
    #[serde(rename = "url")]
    pub destination: String,
}

impl PathRule {
    pub fn new(path: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            destination: destination.into(),
        }
    }
}

/// Failure to deserialize a redirect document.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid YAML redirect document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON redirect document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Supported redirect document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Infer the format from a file extension (`.yaml`, `.yml`, `.json`).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(Format::Yaml),
            "json" => Some(Format::Json),
            _ => None,
        }
    }

    /// Parse `data` with the parser for this format.
    pub fn parse(self, data: &[u8]) -> Result<Vec<PathRule>, ParseError> {
        match self {
            Format::Yaml => parse_yaml(data),
            Format::Json => parse_json(data),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Yaml => f.write_str("yaml"),
            Format::Json => f.write_str("json"),
        }
    }
}

/// Parse a YAML sequence of `{ path, url }` mappings.
pub fn parse_yaml(data: &[u8]) -> Result<Vec<PathRule>, ParseError> {
    if is_blank(data) {
        return Ok(Vec::new());
    }
    let rules: Option<Vec<PathRule>> = serde_yaml::from_slice(data)?;
    Ok(rules.unwrap_or_default())
}

/// Parse a JSON array of `{ "path", "url" }` objects.
pub fn parse_json(data: &[u8]) -> Result<Vec<PathRule>, ParseError> {
    let rules: Option<Vec<PathRule>> = serde_json::from_slice(data)?;
    Ok(rules.unwrap_or_default())
}

fn is_blank(data: &[u8]) -> bool {
    data.iter().all(|b| b.is_ascii_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_preserves_order() {
        let yaml = b"- path: /urlshort\n  url: https://github.com/gophercises/urlshort\n- path: /final\n  url: https://github.com/gophercises/urlshort/tree/solution\n";
        let rules = parse_yaml(yaml).unwrap();
        assert_eq!(
            rules,
            vec![
                PathRule::new("/urlshort", "https://github.com/gophercises/urlshort"),
                PathRule::new("/final", "https://github.com/gophercises/urlshort/tree/solution"),
            ]
        );
    }

    #[test]
    fn test_parse_json_preserves_order() {
        let json = br#"[{"path":"/a","url":"https://x.test"},{"path":"/b","url":"/relative"}]"#;
        let rules = parse_json(json).unwrap();
        assert_eq!(
            rules,
            vec![
                PathRule::new("/a", "https://x.test"),
                PathRule::new("/b", "/relative"),
            ]
        );
    }

    #[test]
    fn test_round_trip_through_both_formats() {
        let rules = vec![
            PathRule::new("/one", "https://one.test/"),
            PathRule::new("/two", "https://two.test/?q=1"),
            PathRule::new("/one", "https://again.test/"),
        ];

        let yaml = serde_yaml::to_string(&rules).unwrap();
        assert!(yaml.contains("url:"));
        assert_eq!(parse_yaml(yaml.as_bytes()).unwrap(), rules);

        let json = serde_json::to_vec(&rules).unwrap();
        assert_eq!(parse_json(&json).unwrap(), rules);
    }

    #[test]
    fn test_yaml_scalar_is_rejected() {
        let err = parse_yaml(b"just a string").unwrap_err();
        assert!(matches!(err, ParseError::Yaml(_)));
    }

    #[test]
    fn test_yaml_malformed_is_rejected() {
        assert!(parse_yaml(b"- path: /a\n  url: [unclosed").is_err());
    }

    #[test]
    fn test_yaml_non_string_field_is_rejected() {
        assert!(parse_yaml(b"- path: /a\n  url:\n    nested: map\n").is_err());
    }

    #[test]
    fn test_json_missing_path_is_rejected() {
        let err = parse_json(br#"[{"url":"https://x.test"}]"#).unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
        assert!(err.to_string().contains("path"));
    }

    #[test]
    fn test_json_wrong_type_is_rejected() {
        assert!(parse_json(br#"[{"path":1,"url":"https://x.test"}]"#).is_err());
        assert!(parse_json(br#"{"path":"/a","url":"https://x.test"}"#).is_err());
    }

    #[test]
    fn test_json_empty_input_is_rejected() {
        assert!(parse_json(b"").is_err());
    }

    #[test]
    fn test_empty_documents_yield_no_rules() {
        assert!(parse_yaml(b"").unwrap().is_empty());
        assert!(parse_yaml(b"  \n").unwrap().is_empty());
        assert!(parse_yaml(b"[]").unwrap().is_empty());
        assert!(parse_json(b"[]").unwrap().is_empty());
        assert!(parse_json(b"null").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let rules = parse_json(br#"[{"path":"/a","url":"/b","note":"ignored"}]"#).unwrap();
        assert_eq!(rules, vec![PathRule::new("/a", "/b")]);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("r.yaml")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("dir/r.YML")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("r.json")), Some(Format::Json));
        assert_eq!(Format::from_path(Path::new("r.toml")), None);
        assert_eq!(Format::from_path(Path::new("redirects")), None);
    }

    #[test]
    fn test_format_dispatch() {
        let rules = Format::Json.parse(br#"[{"path":"/a","url":"/b"}]"#).unwrap();
        assert_eq!(rules.len(), 1);
        assert!(Format::Yaml.parse(b"{not: a sequence}").is_err());
    }
}
