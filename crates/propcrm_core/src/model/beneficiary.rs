//! Beneficiary domain model.
//!
//! # Responsibility
//! - Define the beneficiary-type vocabulary and its two decode policies.
//! - Define the canonical beneficiary record persisted by the repo layer.
//!
//! # Invariants
//! - `uuid` is stable and never nil.
//! - `name` is never blank.
//! - Unknown PayProp beneficiary types degrade to `BeneficiaryType::FALLBACK`
//!   through `from_payprop_code`; `FromStr` stays strict.

use crate::model::payment::{AccountType, PaymentMethod};
use crate::model::sync::SyncStatus;
use crate::model::vocabulary::{
    decode_strict, find_by_code, log_fallback, Vocabulary, VocabularyError,
};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// PayProp wire code for agency beneficiaries.
pub const BENEFICIARY_CODE_AGENCY: &str = "agency";
/// PayProp wire code for regular beneficiaries.
pub const BENEFICIARY_CODE_BENEFICIARY: &str = "beneficiary";
/// PayProp wire code for global beneficiaries.
pub const BENEFICIARY_CODE_GLOBAL_BENEFICIARY: &str = "global_beneficiary";
/// PayProp wire code for property holding accounts.
pub const BENEFICIARY_CODE_PROPERTY_ACCOUNT: &str = "property_account";
/// PayProp wire code for deposit holding accounts.
pub const BENEFICIARY_CODE_DEPOSIT_ACCOUNT: &str = "deposit_account";

/// Stable identifier for a beneficiary record.
pub type BeneficiaryId = Uuid;

/// Who receives an outgoing payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeneficiaryType {
    /// The letting agency itself (commission and fees).
    Agency,
    /// A property owner or other per-property payee.
    Beneficiary,
    /// A payee shared across every property (utilities, councils).
    GlobalBeneficiary,
    /// Money retained against one property.
    PropertyAccount,
    /// Tenancy deposit holding account.
    DepositAccount,
}

impl BeneficiaryType {
    /// Substituted for unknown codes on lenient read paths.
    pub const FALLBACK: Self = Self::Beneficiary;

    /// Lenient decode for inbound PayProp payloads.
    ///
    /// Unknown or blank codes are logged and mapped to [`Self::FALLBACK`].
    pub fn from_payprop_code(code: &str) -> Self {
        match find_by_code(code) {
            Some(kind) => kind,
            None => {
                log_fallback("payprop", code, Self::FALLBACK);
                Self::FALLBACK
            }
        }
    }

    pub fn is_agency(self) -> bool {
        self == Self::Agency
    }

    /// Property and deposit accounts hold money rather than pay a person.
    pub fn is_holding_account(self) -> bool {
        matches!(self, Self::PropertyAccount | Self::DepositAccount)
    }

    pub fn is_payee(self) -> bool {
        matches!(self, Self::Beneficiary | Self::GlobalBeneficiary)
    }

    /// Transaction type recorded when money is paid to this beneficiary type.
    pub fn payment_transaction_type(self) -> &'static str {
        match self {
            Self::Agency => "payment_to_agency",
            Self::Beneficiary | Self::GlobalBeneficiary => "payment_to_beneficiary",
            Self::PropertyAccount => "payment_property_account",
            Self::DepositAccount => "payment_deposit_account",
        }
    }
}

impl Vocabulary for BeneficiaryType {
    const NAME: &'static str = "beneficiary_type";
    const ALL: &'static [Self] = &[
        Self::Agency,
        Self::Beneficiary,
        Self::GlobalBeneficiary,
        Self::PropertyAccount,
        Self::DepositAccount,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::Agency => BENEFICIARY_CODE_AGENCY,
            Self::Beneficiary => BENEFICIARY_CODE_BENEFICIARY,
            Self::GlobalBeneficiary => BENEFICIARY_CODE_GLOBAL_BENEFICIARY,
            Self::PropertyAccount => BENEFICIARY_CODE_PROPERTY_ACCOUNT,
            Self::DepositAccount => BENEFICIARY_CODE_DEPOSIT_ACCOUNT,
        }
    }

    fn identity(self) -> &'static str {
        match self {
            Self::Agency => "AGENCY",
            Self::Beneficiary => "BENEFICIARY",
            Self::GlobalBeneficiary => "GLOBAL_BENEFICIARY",
            Self::PropertyAccount => "PROPERTY_ACCOUNT",
            Self::DepositAccount => "DEPOSIT_ACCOUNT",
        }
    }

    fn description(self) -> Option<&'static str> {
        Some(match self {
            Self::Agency => "Agency commission and fee payments",
            Self::Beneficiary => "Owner or per-property payee",
            Self::GlobalBeneficiary => "Payee shared across all properties",
            Self::PropertyAccount => "Funds retained against a property",
            Self::DepositAccount => "Tenancy deposit holding account",
        })
    }
}

/// Strict decode: unknown codes are an invalid argument.
impl FromStr for BeneficiaryType {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_strict(s)
    }
}

/// Validation failures for beneficiary records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeneficiaryValidationError {
    NilUuid,
    EmptyName,
    BlankPayPropId,
}

impl Display for BeneficiaryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilUuid => write!(f, "beneficiary uuid must not be nil"),
            Self::EmptyName => write!(f, "beneficiary name must not be empty"),
            Self::BlankPayPropId => {
                write!(f, "payprop_id must be omitted rather than blank")
            }
        }
    }
}

impl Error for BeneficiaryValidationError {}

/// Canonical payee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beneficiary {
    pub uuid: BeneficiaryId,
    /// Identifier in the PayProp system, when linked.
    pub payprop_id: Option<String>,
    pub name: String,
    pub business_name: Option<String>,
    pub email: Option<String>,
    /// `None` when the stored column is empty.
    pub beneficiary_type: Option<BeneficiaryType>,
    pub account_type: AccountType,
    pub payment_method: PaymentMethod,
    pub sync_status: SyncStatus,
    pub is_active: bool,
}

impl Beneficiary {
    /// Creates an active, unsynced individual beneficiary paid locally.
    pub fn new(name: impl Into<String>, beneficiary_type: BeneficiaryType) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            payprop_id: None,
            name: name.into(),
            business_name: None,
            email: None,
            beneficiary_type: Some(beneficiary_type),
            account_type: AccountType::Individual,
            payment_method: PaymentMethod::Local,
            sync_status: SyncStatus::Pending,
            is_active: true,
        }
    }

    /// Creates a beneficiary with a caller-provided stable ID.
    ///
    /// # Errors
    /// - `NilUuid` when `uuid` is nil.
    pub fn with_id(
        uuid: BeneficiaryId,
        name: impl Into<String>,
        beneficiary_type: BeneficiaryType,
    ) -> Result<Self, BeneficiaryValidationError> {
        let mut beneficiary = Self::new(name, beneficiary_type);
        beneficiary.uuid = uuid;
        beneficiary.validate()?;
        Ok(beneficiary)
    }

    pub fn validate(&self) -> Result<(), BeneficiaryValidationError> {
        if self.uuid.is_nil() {
            return Err(BeneficiaryValidationError::NilUuid);
        }
        if self.name.trim().is_empty() {
            return Err(BeneficiaryValidationError::EmptyName);
        }
        if self
            .payprop_id
            .as_deref()
            .is_some_and(|id| id.trim().is_empty())
        {
            return Err(BeneficiaryValidationError::BlankPayPropId);
        }
        Ok(())
    }

    /// Name shown on statements: the business name for business accounts.
    pub fn display_name(&self) -> &str {
        match self.business_name.as_deref() {
            Some(business) if self.account_type.is_business() && !business.trim().is_empty() => {
                business
            }
            _ => self.name.as_str(),
        }
    }
}
