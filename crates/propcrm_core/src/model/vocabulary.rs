//! Shared contract for closed vocabularies.
//!
//! # Responsibility
//! - Define the code/identity/label surface every vocabulary exposes.
//! - Provide strict lookup helpers and the invalid-argument error.
//! - Emit the single diagnostic shape used by degrade-on-unknown decoders.
//!
//! # Invariants
//! - `code` is injective within one vocabulary, ignoring ASCII case.
//! - `ALL` lists every variant exactly once, in declaration order.
//! - External code and identity name are independent encodings.

use crate::logging::sanitize_message;
use log::warn;
use std::borrow::Cow;
use std::error::Error;
use std::fmt::{Display, Formatter};

const MAX_LOGGED_CODE_CHARS: usize = 64;

/// Closed, compile-time vocabulary with an external wire code.
pub trait Vocabulary: Copy + Eq + Sized + 'static {
    /// Stable vocabulary name used in diagnostics and catalogue lookups.
    const NAME: &'static str;
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Wire code exchanged with the PayProp integration.
    fn code(self) -> &'static str;

    /// Persisted identity name in `SCREAMING_SNAKE_CASE`.
    fn identity(self) -> &'static str;

    /// Human-readable label.
    ///
    /// Defaults to the identity name capitalised word by word, so
    /// `GLOBAL_BENEFICIARY` renders as `Global Beneficiary`.
    fn display_label(self) -> Cow<'static, str> {
        Cow::Owned(humanize_identity(self.identity()))
    }

    /// Optional explanatory text. Carries no behavior.
    fn description(self) -> Option<&'static str> {
        None
    }
}

/// Invalid-argument failures from strict decoders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularyError {
    EmptyCode {
        vocabulary: &'static str,
    },
    UnrecognizedCode {
        vocabulary: &'static str,
        code: String,
    },
}

impl Display for VocabularyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCode { vocabulary } => {
                write!(f, "{vocabulary} code must not be empty")
            }
            Self::UnrecognizedCode { vocabulary, code } => {
                write!(f, "unrecognized {vocabulary} code: {code}")
            }
        }
    }
}

impl Error for VocabularyError {}

/// Finds the variant whose wire code matches `code` (trimmed, ASCII case-insensitive).
pub fn find_by_code<V: Vocabulary>(code: &str) -> Option<V> {
    let normalized = code.trim();
    V::ALL
        .iter()
        .copied()
        .find(|variant| variant.code().eq_ignore_ascii_case(normalized))
}

/// Finds the variant whose identity name matches `name` (trimmed, ASCII case-insensitive).
pub fn find_by_identity<V: Vocabulary>(name: &str) -> Option<V> {
    let normalized = name.trim();
    V::ALL
        .iter()
        .copied()
        .find(|variant| variant.identity().eq_ignore_ascii_case(normalized))
}

/// Strict wire-code decode.
///
/// # Errors
/// - `EmptyCode` when `code` is blank.
/// - `UnrecognizedCode` when no variant carries `code`.
pub fn decode_strict<V: Vocabulary>(code: &str) -> Result<V, VocabularyError> {
    let normalized = code.trim();
    if normalized.is_empty() {
        return Err(VocabularyError::EmptyCode {
            vocabulary: V::NAME,
        });
    }

    find_by_code(normalized).ok_or_else(|| VocabularyError::UnrecognizedCode {
        vocabulary: V::NAME,
        code: normalized.to_string(),
    })
}

/// Capitalises each underscore-separated word of an identity name.
pub fn humanize_identity(identity: &str) -> String {
    identity
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let lower = word.to_ascii_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |raw| raw.trim().is_empty())
}

/// Logs one degraded-fallback substitution.
///
/// Never fails: the `log` facade drops the record when no logger is active.
pub(crate) fn log_fallback<V: Vocabulary>(source: &str, raw: &str, fallback: V) {
    warn!(
        "event=vocabulary_fallback module=model status=degraded vocabulary={} source={} \
         code={} fallback={}",
        V::NAME,
        source,
        sanitize_message(raw, MAX_LOGGED_CODE_CHARS),
        fallback.identity()
    );
}
