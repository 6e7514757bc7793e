//! Name-based access to every vocabulary.
//!
//! # Responsibility
//! - Resolve a vocabulary by its stable name.
//! - Decode a code with that vocabulary's own policy and describe the result.
//!
//! # Invariants
//! - `lookup` never unifies policies: lenient vocabularies always succeed,
//!   strict ones surface `VocabularyError`.

use crate::model::beneficiary::BeneficiaryType;
use crate::model::customer::{AssignmentType, CustomerType};
use crate::model::frequency::{FrequencyCode, InvoiceFrequency};
use crate::model::lead::{LeadStatus, LeadType};
use crate::model::payment::{AccountType, PaymentMethod};
use crate::model::portfolio::{PortfolioAssignmentType, PortfolioType};
use crate::model::sync::SyncStatus;
use crate::model::tag::TagNamespace;
use crate::model::transaction::TransactionLevel;
use crate::model::vocabulary::{decode_strict, Vocabulary, VocabularyError};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Every vocabulary known to the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VocabularyKind {
    BeneficiaryType,
    PaymentMethod,
    AccountType,
    FrequencyCode,
    InvoiceFrequency,
    LeadType,
    LeadStatus,
    TransactionLevel,
    PortfolioType,
    PortfolioAssignmentType,
    SyncStatus,
    CustomerType,
    AssignmentType,
    TagNamespace,
}

const ALL_KINDS: &[VocabularyKind] = &[
    VocabularyKind::BeneficiaryType,
    VocabularyKind::PaymentMethod,
    VocabularyKind::AccountType,
    VocabularyKind::FrequencyCode,
    VocabularyKind::InvoiceFrequency,
    VocabularyKind::LeadType,
    VocabularyKind::LeadStatus,
    VocabularyKind::TransactionLevel,
    VocabularyKind::PortfolioType,
    VocabularyKind::PortfolioAssignmentType,
    VocabularyKind::SyncStatus,
    VocabularyKind::CustomerType,
    VocabularyKind::AssignmentType,
    VocabularyKind::TagNamespace,
];

impl VocabularyKind {
    /// Stable vocabulary name, identical to `Vocabulary::NAME`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BeneficiaryType => BeneficiaryType::NAME,
            Self::PaymentMethod => PaymentMethod::NAME,
            Self::AccountType => AccountType::NAME,
            Self::FrequencyCode => FrequencyCode::NAME,
            Self::InvoiceFrequency => InvoiceFrequency::NAME,
            Self::LeadType => LeadType::NAME,
            Self::LeadStatus => LeadStatus::NAME,
            Self::TransactionLevel => TransactionLevel::NAME,
            Self::PortfolioType => PortfolioType::NAME,
            Self::PortfolioAssignmentType => PortfolioAssignmentType::NAME,
            Self::SyncStatus => SyncStatus::NAME,
            Self::CustomerType => CustomerType::NAME,
            Self::AssignmentType => AssignmentType::NAME,
            Self::TagNamespace => TagNamespace::NAME,
        }
    }

    pub fn all() -> &'static [VocabularyKind] {
        ALL_KINDS
    }
}

/// Unknown vocabulary name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVocabulary(pub String);

impl Display for UnknownVocabulary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown vocabulary: {}", self.0)
    }
}

impl Error for UnknownVocabulary {}

/// Parses a vocabulary name such as `frequency_code`.
pub fn parse_vocabulary_kind(value: &str) -> Result<VocabularyKind, UnknownVocabulary> {
    let normalized = value.trim();
    ALL_KINDS
        .iter()
        .copied()
        .find(|kind| kind.as_str() == normalized)
        .ok_or_else(|| UnknownVocabulary(normalized.to_string()))
}

/// Flattened view of one variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VocabularyEntry {
    pub vocabulary: &'static str,
    pub identity: &'static str,
    pub code: &'static str,
    pub label: String,
    pub description: Option<&'static str>,
}

impl VocabularyEntry {
    pub fn of<V: Vocabulary>(variant: V) -> Self {
        Self {
            vocabulary: V::NAME,
            identity: variant.identity(),
            code: variant.code(),
            label: variant.display_label().into_owned(),
            description: variant.description(),
        }
    }
}

/// Decodes `code` in vocabulary `kind` using that vocabulary's policy.
///
/// # Errors
/// - Invalid-argument `VocabularyError` from strict vocabularies only.
pub fn lookup(kind: VocabularyKind, code: &str) -> Result<VocabularyEntry, VocabularyError> {
    let entry = match kind {
        VocabularyKind::BeneficiaryType => {
            VocabularyEntry::of(BeneficiaryType::from_payprop_code(code))
        }
        VocabularyKind::PaymentMethod => {
            VocabularyEntry::of(PaymentMethod::from_payprop_code(Some(code)))
        }
        VocabularyKind::AccountType => {
            VocabularyEntry::of(AccountType::from_payprop_code(Some(code)))
        }
        VocabularyKind::FrequencyCode => VocabularyEntry::of(FrequencyCode::from_code(code)?),
        VocabularyKind::InvoiceFrequency => {
            VocabularyEntry::of(InvoiceFrequency::parse_lenient(Some(code)))
        }
        VocabularyKind::LeadType => VocabularyEntry::of(LeadType::from_code(Some(code))),
        VocabularyKind::LeadStatus => VocabularyEntry::of(LeadStatus::from_value(Some(code))?),
        VocabularyKind::TransactionLevel => {
            VocabularyEntry::of(decode_strict::<TransactionLevel>(code)?)
        }
        VocabularyKind::PortfolioType => VocabularyEntry::of(decode_strict::<PortfolioType>(code)?),
        VocabularyKind::PortfolioAssignmentType => {
            VocabularyEntry::of(decode_strict::<PortfolioAssignmentType>(code)?)
        }
        VocabularyKind::SyncStatus => VocabularyEntry::of(decode_strict::<SyncStatus>(code)?),
        VocabularyKind::CustomerType => VocabularyEntry::of(decode_strict::<CustomerType>(code)?),
        VocabularyKind::AssignmentType => {
            VocabularyEntry::of(decode_strict::<AssignmentType>(code)?)
        }
        VocabularyKind::TagNamespace => VocabularyEntry::of(decode_strict::<TagNamespace>(code)?),
    };
    Ok(entry)
}

/// Lists every variant of `kind` in declaration order.
pub fn entries(kind: VocabularyKind) -> Vec<VocabularyEntry> {
    match kind {
        VocabularyKind::BeneficiaryType => entries_of::<BeneficiaryType>(),
        VocabularyKind::PaymentMethod => entries_of::<PaymentMethod>(),
        VocabularyKind::AccountType => entries_of::<AccountType>(),
        VocabularyKind::FrequencyCode => entries_of::<FrequencyCode>(),
        VocabularyKind::InvoiceFrequency => entries_of::<InvoiceFrequency>(),
        VocabularyKind::LeadType => entries_of::<LeadType>(),
        VocabularyKind::LeadStatus => entries_of::<LeadStatus>(),
        VocabularyKind::TransactionLevel => entries_of::<TransactionLevel>(),
        VocabularyKind::PortfolioType => entries_of::<PortfolioType>(),
        VocabularyKind::PortfolioAssignmentType => entries_of::<PortfolioAssignmentType>(),
        VocabularyKind::SyncStatus => entries_of::<SyncStatus>(),
        VocabularyKind::CustomerType => entries_of::<CustomerType>(),
        VocabularyKind::AssignmentType => entries_of::<AssignmentType>(),
        VocabularyKind::TagNamespace => entries_of::<TagNamespace>(),
    }
}

fn entries_of<V: Vocabulary>() -> Vec<VocabularyEntry> {
    V::ALL.iter().copied().map(VocabularyEntry::of).collect()
}
