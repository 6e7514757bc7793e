//! Namespaced tag vocabulary.
//!
//! # Responsibility
//! - Keep tags from different subsystems (portfolios, blocks, maintenance)
//!   from colliding by prefixing them with a namespace.
//! - Normalise free text into tag suffixes.
//!
//! # Invariants
//! - Generated tags are `<PREFIX><SUFFIX>` with `SUFFIX` matching `^[A-Z0-9-]+$`.
//! - A suffix never carries a second namespace prefix.

use crate::model::vocabulary::{decode_strict, Vocabulary, VocabularyError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static INVALID_SUFFIX_CHARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Z0-9\-]").expect("valid suffix charset regex"));
static REPEATED_HYPHENS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-+").expect("valid hyphen run regex"));
static VALID_SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9\-]+$").expect("valid suffix regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TagNamespace {
    Portfolio,
    Block,
    Maintenance,
    Tenant,
    System,
    Custom,
}

/// Tag construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    EmptySuffix,
}

impl Display for TagError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySuffix => write!(f, "tag suffix must not be empty"),
        }
    }
}

impl Error for TagError {}

impl TagNamespace {
    pub fn prefix(self) -> &'static str {
        self.code()
    }

    /// Builds a namespaced tag from free text.
    ///
    /// # Errors
    /// - `EmptySuffix` when nothing usable is left after normalisation.
    pub fn create_tag(self, suffix: &str) -> Result<String, TagError> {
        let trimmed = suffix.trim();
        let unprefixed = match Self::namespace_of(trimmed) {
            Some(existing) => &trimmed[existing.prefix().len()..],
            None => trimmed,
        };

        let upper = unprefixed.to_uppercase().replace([' ', '_'], "-");
        let stripped = INVALID_SUFFIX_CHARS_RE.replace_all(&upper, "");
        let collapsed = REPEATED_HYPHENS_RE.replace_all(&stripped, "-");
        let cleaned = collapsed.trim_matches('-');
        if cleaned.is_empty() {
            return Err(TagError::EmptySuffix);
        }

        Ok(format!("{}{}", self.prefix(), cleaned))
    }

    /// Returns the namespace whose prefix starts `tag`.
    pub fn namespace_of(tag: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|namespace| tag.starts_with(namespace.prefix()))
    }

    /// Strips a known namespace prefix; unprefixed tags come back unchanged.
    pub fn extract_suffix(tag: &str) -> &str {
        match Self::namespace_of(tag) {
            Some(namespace) => &tag[namespace.prefix().len()..],
            None => tag,
        }
    }

    pub fn is_in_namespace(tag: &str, namespace: Self) -> bool {
        tag.starts_with(namespace.prefix())
    }

    pub fn is_valid_namespaced_tag(tag: &str) -> bool {
        if Self::namespace_of(tag).is_none() {
            return false;
        }
        VALID_SUFFIX_RE.is_match(Self::extract_suffix(tag))
    }

    /// Moves a pre-namespace tag into `target`; namespaced tags are kept as-is.
    pub fn convert_legacy_tag(legacy: &str, target: Self) -> Result<String, TagError> {
        if Self::namespace_of(legacy).is_some() {
            return Ok(legacy.to_string());
        }
        target.create_tag(legacy)
    }
}

impl Vocabulary for TagNamespace {
    const NAME: &'static str = "tag_namespace";
    const ALL: &'static [Self] = &[
        Self::Portfolio,
        Self::Block,
        Self::Maintenance,
        Self::Tenant,
        Self::System,
        Self::Custom,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::Portfolio => "PF-",
            Self::Block => "BL-",
            Self::Maintenance => "MT-",
            Self::Tenant => "TN-",
            Self::System => "SYS-",
            Self::Custom => "CUSTOM-",
        }
    }

    fn identity(self) -> &'static str {
        match self {
            Self::Portfolio => "PORTFOLIO",
            Self::Block => "BLOCK",
            Self::Maintenance => "MAINTENANCE",
            Self::Tenant => "TENANT",
            Self::System => "SYSTEM",
            Self::Custom => "CUSTOM",
        }
    }

    fn description(self) -> Option<&'static str> {
        Some(match self {
            Self::Portfolio => "Portfolio tags for property organization",
            Self::Block => "Block tags for property grouping within portfolios",
            Self::Maintenance => "Maintenance and ticketing system tags",
            Self::Tenant => "Tenant categorization tags",
            Self::System => "Internal system operation tags",
            Self::Custom => "User-defined custom tags",
        })
    }
}

impl FromStr for TagNamespace {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_strict(s)
    }
}
