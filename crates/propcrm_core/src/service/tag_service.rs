//! Batch operations over namespaced tag collections.
//!
//! # Responsibility
//! - Split tag lists by namespace and by validity.
//! - Flag tags in different namespaces whose suffixes look alike, so a
//!   portfolio tag is not mistaken for a block tag during migration.
//!
//! # Invariants
//! - Input order is preserved in every returned list.
//! - Each conflicting pair is reported once, in input order.

use crate::logging::sanitize_message;
use crate::model::tag::{TagError, TagNamespace};
use log::warn;
use std::fmt::{Display, Formatter};

const MAX_LOGGED_TAG_CHARS: usize = 64;
const SIMILAR_SUFFIX_MAX_EDITS: usize = 2;

/// Valid and invalid partitions of a tag list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagValidationResult {
    pub valid: Vec<String>,
    pub invalid: Vec<String>,
}

impl TagValidationResult {
    /// `true` when no tag was rejected. An empty input is valid.
    pub fn is_valid(&self) -> bool {
        self.invalid.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagConflictKind {
    SameSuffix,
    SimilarSuffix,
}

/// Two tags from different namespaces with matching or near suffixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagConflict {
    pub first: String,
    pub second: String,
    pub kind: TagConflictKind,
}

impl Display for TagConflict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let relation = match self.kind {
            TagConflictKind::SameSuffix => "same suffix",
            TagConflictKind::SimilarSuffix => "similar suffixes",
        };
        write!(
            f,
            "{relation} in different namespaces: {} vs {}",
            self.first, self.second
        )
    }
}

/// Tags of `tags` that carry the prefix of `namespace`.
pub fn filter_by_namespace<S: AsRef<str>>(tags: &[S], namespace: TagNamespace) -> Vec<&str> {
    tags.iter()
        .map(|tag| tag.as_ref())
        .filter(|tag| TagNamespace::is_in_namespace(tag, namespace))
        .collect()
}

pub fn portfolio_tags<S: AsRef<str>>(tags: &[S]) -> Vec<&str> {
    filter_by_namespace(tags, TagNamespace::Portfolio)
}

pub fn block_tags<S: AsRef<str>>(tags: &[S]) -> Vec<&str> {
    filter_by_namespace(tags, TagNamespace::Block)
}

pub fn maintenance_tags<S: AsRef<str>>(tags: &[S]) -> Vec<&str> {
    filter_by_namespace(tags, TagNamespace::Maintenance)
}

/// Partitions `tags` by `TagNamespace::is_valid_namespaced_tag`.
///
/// Each rejected tag is logged once.
pub fn validate_tags<S: AsRef<str>>(tags: &[S]) -> TagValidationResult {
    let mut result = TagValidationResult::default();
    for tag in tags.iter().map(|tag| tag.as_ref()) {
        if TagNamespace::is_valid_namespaced_tag(tag) {
            result.valid.push(tag.to_string());
        } else {
            warn!(
                "event=tag_validation module=service status=rejected tag={}",
                sanitize_message(tag, MAX_LOGGED_TAG_CHARS)
            );
            result.invalid.push(tag.to_string());
        }
    }
    result
}

/// Finds pairs of tags in different namespaces whose suffixes collide.
///
/// Suffixes collide when they are equal, when one contains the other
/// (ignoring case), or when they are at most two edits apart. Tags outside
/// every namespace and tags with an empty suffix are skipped.
pub fn detect_conflicts<S: AsRef<str>>(tags: &[S]) -> Vec<TagConflict> {
    let namespaced: Vec<(&str, TagNamespace, &str)> = tags
        .iter()
        .map(|tag| tag.as_ref())
        .filter_map(|tag| {
            let namespace = TagNamespace::namespace_of(tag)?;
            let suffix = TagNamespace::extract_suffix(tag);
            (!suffix.is_empty()).then_some((tag, namespace, suffix))
        })
        .collect();

    let mut conflicts = Vec::new();
    for (index, (first, first_ns, first_suffix)) in namespaced.iter().enumerate() {
        for (second, second_ns, second_suffix) in &namespaced[index + 1..] {
            if first_ns == second_ns {
                continue;
            }
            let kind = if first_suffix == second_suffix {
                TagConflictKind::SameSuffix
            } else if suffixes_are_similar(first_suffix, second_suffix) {
                TagConflictKind::SimilarSuffix
            } else {
                continue;
            };
            conflicts.push(TagConflict {
                first: (*first).to_string(),
                second: (*second).to_string(),
                kind,
            });
        }
    }
    conflicts
}

/// Keeps valid namespaced tags and moves everything else into `namespace`.
///
/// # Errors
/// - `EmptySuffix` when the tag has no usable text.
pub fn ensure_namespaced(tag: &str, namespace: TagNamespace) -> Result<String, TagError> {
    if TagNamespace::is_valid_namespaced_tag(tag) {
        return Ok(tag.to_string());
    }
    namespace.create_tag(tag)
}

/// Spellings under which `tag` may already be stored: the tag itself, plus
/// its namespaced form for legacy tags or its bare suffix for namespaced ones.
pub fn tag_variations(tag: &str, namespace: TagNamespace) -> Vec<String> {
    if tag.trim().is_empty() {
        return Vec::new();
    }

    let mut variations = vec![tag.to_string()];
    if TagNamespace::is_valid_namespaced_tag(tag) {
        variations.push(TagNamespace::extract_suffix(tag).to_string());
    } else if let Ok(namespaced) = namespace.create_tag(tag) {
        variations.push(namespaced);
    }
    variations
}

fn suffixes_are_similar(first: &str, second: &str) -> bool {
    let first = first.to_lowercase();
    let second = second.to_lowercase();
    first.contains(&second)
        || second.contains(&first)
        || edit_distance(&first, &second) <= SIMILAR_SUFFIX_MAX_EDITS
}

/// Levenshtein distance over chars.
fn edit_distance(first: &str, second: &str) -> usize {
    let second: Vec<char> = second.chars().collect();
    let mut costs: Vec<usize> = (0..=second.len()).collect();

    for (row, left) in first.chars().enumerate() {
        let mut diagonal = costs[0];
        costs[0] = row + 1;
        for (col, right) in second.iter().enumerate() {
            let above = costs[col + 1];
            costs[col + 1] = if left == *right {
                diagonal
            } else {
                1 + diagonal.min(above).min(costs[col])
            };
            diagonal = above;
        }
    }
    costs[second.len()]
}
