//! Beneficiary use cases.
//!
//! # Responsibility
//! - Create beneficiaries and import them from PayProp payloads.
//! - Drive the local sync status of each record.
//!
//! # Invariants
//! - Imports upsert by PayProp id; a second import of the same id updates
//!   the existing row.
//! - Inbound vocabulary fields never fail an import; unknown values degrade.

use crate::model::beneficiary::{
    Beneficiary, BeneficiaryId, BeneficiaryType, BeneficiaryValidationError,
};
use crate::model::payment::{AccountType, PaymentMethod};
use crate::model::sync::SyncStatus;
use crate::model::vocabulary::Vocabulary;
use crate::repo::beneficiary_repo::{BeneficiaryListQuery, BeneficiaryRepository};
use crate::repo::{RepoError, RepoResult};
use log::{info, warn};
use serde::Deserialize;

/// Beneficiary object as returned by the PayProp export API.
///
/// Every field is optional on the wire; PayProp also sends the literal
/// `"undefined"` for unset enum fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PayPropBeneficiaryPayload {
    #[serde(alias = "id")]
    pub payprop_id: Option<String>,
    pub account_type: Option<String>,
    pub payment_method: Option<String>,
    pub beneficiary_type: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub business_name: Option<String>,
    pub email_address: Option<String>,
}

/// Result of one PayProp import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOutcome {
    pub id: BeneficiaryId,
    pub created: bool,
}

pub struct BeneficiaryService<R: BeneficiaryRepository> {
    repo: R,
}

impl<R: BeneficiaryRepository> BeneficiaryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_beneficiary(&self, beneficiary: &Beneficiary) -> RepoResult<BeneficiaryId> {
        self.repo.create_beneficiary(beneficiary)
    }

    pub fn get_beneficiary(&self, id: BeneficiaryId) -> RepoResult<Option<Beneficiary>> {
        self.repo.get_beneficiary(id)
    }

    /// Inserts or refreshes the local copy of a PayProp beneficiary.
    ///
    /// Imported records are marked `Synced`.
    ///
    /// Field merge on re-import:
    /// - Vocabulary fields and `business_name` always mirror the payload, since
    ///   `name` is derived from them. An absent business name clears the old one.
    /// - `email` is contact data PayProp often omits; an absent value keeps the
    ///   stored address.
    ///
    /// # Errors
    /// - `Validation(BlankPayPropId)` when the payload carries no id.
    /// - Storage errors from the repository.
    pub fn import_payprop_beneficiary(
        &self,
        payload: &PayPropBeneficiaryPayload,
    ) -> RepoResult<ImportOutcome> {
        let Some(payprop_id) = non_blank(payload.payprop_id.as_deref()) else {
            warn!("event=payprop_import module=service status=skipped reason=missing_payprop_id");
            return Err(RepoError::Validation(
                BeneficiaryValidationError::BlankPayPropId,
            ));
        };

        let existing = self.repo.find_by_payprop_id(payprop_id)?;
        let created = existing.is_none();
        let mut beneficiary = existing.unwrap_or_else(|| {
            let mut fresh = Beneficiary::new(payprop_id, BeneficiaryType::FALLBACK);
            fresh.payprop_id = Some(payprop_id.to_string());
            fresh
        });

        beneficiary.account_type = AccountType::from_payprop_code(payload.account_type.as_deref());
        beneficiary.payment_method =
            PaymentMethod::from_payprop_code(payload.payment_method.as_deref());
        beneficiary.beneficiary_type = Some(
            non_blank(payload.beneficiary_type.as_deref())
                .map_or(BeneficiaryType::FALLBACK, BeneficiaryType::from_payprop_code),
        );
        beneficiary.business_name =
            non_blank(payload.business_name.as_deref()).map(str::to_string);
        if let Some(email) = non_blank(payload.email_address.as_deref()) {
            beneficiary.email = Some(email.to_string());
        }
        beneficiary.name = derive_name(payload, beneficiary.account_type, payprop_id);
        beneficiary.sync_status = SyncStatus::Synced;

        if created {
            self.repo.create_beneficiary(&beneficiary)?;
        } else {
            self.repo.update_beneficiary(&beneficiary)?;
        }

        info!(
            "event=payprop_import module=service status=ok created={} beneficiary_type={}",
            created,
            beneficiary
                .beneficiary_type
                .map_or("NONE", |kind| kind.identity())
        );
        Ok(ImportOutcome {
            id: beneficiary.uuid,
            created,
        })
    }

    /// Active beneficiaries of one type, ordered by name.
    pub fn list_by_type(&self, kind: BeneficiaryType) -> RepoResult<Vec<Beneficiary>> {
        self.repo.list_beneficiaries(&BeneficiaryListQuery {
            beneficiary_type: Some(kind),
            ..BeneficiaryListQuery::default()
        })
    }

    pub fn mark_synced(&self, id: BeneficiaryId) -> RepoResult<()> {
        self.repo.set_sync_status(id, SyncStatus::Synced)
    }

    pub fn mark_sync_failed(&self, id: BeneficiaryId) -> RepoResult<()> {
        self.repo.set_sync_status(id, SyncStatus::Failed)
    }

    /// Active beneficiaries whose status still needs a push.
    pub fn pending_sync(&self) -> RepoResult<Vec<Beneficiary>> {
        let all = self.repo.list_beneficiaries(&BeneficiaryListQuery::default())?;
        Ok(all
            .into_iter()
            .filter(|beneficiary| beneficiary.sync_status.needs_sync())
            .collect())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|raw| !raw.is_empty())
}

fn derive_name(
    payload: &PayPropBeneficiaryPayload,
    account_type: AccountType,
    payprop_id: &str,
) -> String {
    let first = non_blank(payload.first_name.as_deref());
    let last = non_blank(payload.last_name.as_deref());
    let business = non_blank(payload.business_name.as_deref());

    match (business, first, last) {
        (Some(business), _, _) if account_type.is_business() => business.to_string(),
        (_, Some(first), Some(last)) => format!("{first} {last}"),
        (_, Some(first), None) => first.to_string(),
        (_, None, Some(last)) => last.to_string(),
        (Some(business), None, None) => business.to_string(),
        (None, None, None) => {
            warn!("event=payprop_import module=service status=degraded reason=missing_name");
            format!("Beneficiary {payprop_id}")
        }
    }
}
