//! Column codecs for vocabulary-valued fields.
//!
//! # Invariants
//! - Columns store identity names (`GLOBAL_BENEFICIARY`), never wire codes.
//! - `beneficiary_type_from_column` never fails; unreadable values degrade
//!   to `BeneficiaryType::FALLBACK` with a warning.

use crate::model::beneficiary::BeneficiaryType;
use crate::model::vocabulary::{find_by_identity, is_blank, log_fallback, Vocabulary};
use crate::repo::RepoError;

/// Stored form of a beneficiary type.
pub fn beneficiary_type_to_column(kind: BeneficiaryType) -> &'static str {
    kind.identity()
}

/// Reads a stored beneficiary type.
///
/// Blank columns mean "not set" and come back as `None`.
pub fn beneficiary_type_from_column(value: Option<&str>) -> Option<BeneficiaryType> {
    if is_blank(value) {
        return None;
    }
    let raw = value?.trim();
    match find_by_identity(raw) {
        Some(kind) => Some(kind),
        None => {
            log_fallback("column", raw, BeneficiaryType::FALLBACK);
            Some(BeneficiaryType::FALLBACK)
        }
    }
}

/// Strict identity-name decode for the remaining vocabulary columns.
pub(crate) fn identity_from_column<V: Vocabulary>(
    table: &str,
    column: &str,
    value: &str,
) -> Result<V, RepoError> {
    find_by_identity(value).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid {} `{value}` in {table}.{column}",
            V::NAME
        ))
    })
}
