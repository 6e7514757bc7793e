//! Lead vocabularies.
//!
//! # Invariants
//! - `LeadType::from_code` never fails and never logs.
//! - Terminal lead statuses have no outgoing transitions.

use crate::model::vocabulary::{decode_strict, find_by_code, Vocabulary, VocabularyError};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;

/// Kind of enquiry a lead represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadType {
    Business,
    PropertyRental,
}

impl LeadType {
    pub const FALLBACK: Self = Self::Business;

    /// Decodes a stored lead type, defaulting silently on blank or unknown input.
    pub fn from_code(code: Option<&str>) -> Self {
        code.and_then(find_by_code::<Self>)
            .unwrap_or(Self::FALLBACK)
    }

    /// Rental leads must point at the property being let.
    pub fn requires_property(self) -> bool {
        self == Self::PropertyRental
    }
}

impl Vocabulary for LeadType {
    const NAME: &'static str = "lead_type";
    const ALL: &'static [Self] = &[Self::Business, Self::PropertyRental];

    fn code(self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::PropertyRental => "property_rental",
        }
    }

    fn identity(self) -> &'static str {
        match self {
            Self::Business => "BUSINESS",
            Self::PropertyRental => "PROPERTY_RENTAL",
        }
    }

    fn display_label(self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            Self::Business => "Business Lead",
            Self::PropertyRental => "Property Rental",
        })
    }
}

/// Stage of a rental lead in the tenant pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadStatus {
    Enquiry,
    ViewingScheduled,
    ViewingCompleted,
    Interested,
    ApplicationSubmitted,
    Referencing,
    InContracts,
    ContractsComplete,
    Converted,
    Lost,
}

impl LeadStatus {
    /// Decodes a stored status value.
    ///
    /// A missing value is a fresh enquiry; an unknown value is rejected.
    pub fn from_value(value: Option<&str>) -> Result<Self, VocabularyError> {
        match value {
            None => Ok(Self::Enquiry),
            Some(raw) => decode_strict(raw),
        }
    }

    /// Zero-based column on the lead kanban board.
    pub fn kanban_order(self) -> usize {
        Self::ALL
            .iter()
            .position(|status| *status == self)
            .unwrap_or(Self::ALL.len())
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Enquiry => "badge-secondary",
            Self::ViewingScheduled | Self::Referencing => "badge-info",
            Self::ViewingCompleted => "badge-primary",
            Self::Interested | Self::InContracts => "badge-warning",
            Self::ApplicationSubmitted | Self::ContractsComplete | Self::Converted => {
                "badge-success"
            }
            Self::Lost => "badge-dark",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Converted | Self::Lost)
    }

    pub fn is_active(self) -> bool {
        !self.is_terminal()
    }

    pub fn can_transition_to(self, next: Self) -> bool {
        if self.is_terminal() {
            return false;
        }
        if next == Self::Lost {
            return true;
        }

        match self {
            Self::Enquiry => matches!(
                next,
                Self::ViewingScheduled | Self::Interested | Self::ApplicationSubmitted
            ),
            Self::ViewingScheduled => next == Self::ViewingCompleted,
            Self::ViewingCompleted => {
                matches!(next, Self::Interested | Self::ApplicationSubmitted)
            }
            Self::Interested => next == Self::ApplicationSubmitted,
            Self::ApplicationSubmitted => next == Self::Referencing,
            Self::Referencing => next == Self::InContracts,
            Self::InContracts => next == Self::ContractsComplete,
            Self::ContractsComplete => next == Self::Converted,
            Self::Converted | Self::Lost => false,
        }
    }
}

impl Vocabulary for LeadStatus {
    const NAME: &'static str = "lead_status";
    const ALL: &'static [Self] = &[
        Self::Enquiry,
        Self::ViewingScheduled,
        Self::ViewingCompleted,
        Self::Interested,
        Self::ApplicationSubmitted,
        Self::Referencing,
        Self::InContracts,
        Self::ContractsComplete,
        Self::Converted,
        Self::Lost,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::Enquiry => "enquiry",
            Self::ViewingScheduled => "viewing-scheduled",
            Self::ViewingCompleted => "viewing-completed",
            Self::Interested => "interested",
            Self::ApplicationSubmitted => "application-submitted",
            Self::Referencing => "referencing",
            Self::InContracts => "in-contracts",
            Self::ContractsComplete => "contracts-complete",
            Self::Converted => "converted",
            Self::Lost => "lost",
        }
    }

    fn identity(self) -> &'static str {
        match self {
            Self::Enquiry => "ENQUIRY",
            Self::ViewingScheduled => "VIEWING_SCHEDULED",
            Self::ViewingCompleted => "VIEWING_COMPLETED",
            Self::Interested => "INTERESTED",
            Self::ApplicationSubmitted => "APPLICATION_SUBMITTED",
            Self::Referencing => "REFERENCING",
            Self::InContracts => "IN_CONTRACTS",
            Self::ContractsComplete => "CONTRACTS_COMPLETE",
            Self::Converted => "CONVERTED",
            Self::Lost => "LOST",
        }
    }

    fn description(self) -> Option<&'static str> {
        Some(match self {
            Self::Enquiry => "Initial enquiry received",
            Self::ViewingScheduled => "Property viewing has been scheduled",
            Self::ViewingCompleted => "Property viewing has taken place",
            Self::Interested => "Lead has expressed interest in the property",
            Self::ApplicationSubmitted => "Formal tenancy application received",
            Self::Referencing => "Tenant referencing in progress",
            Self::InContracts => "Tenancy agreement being prepared and signed",
            Self::ContractsComplete => "All contracts signed, ready for tenant creation",
            Self::Converted => "Lead converted to tenant",
            Self::Lost => "Lead did not proceed",
        })
    }
}

impl FromStr for LeadStatus {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_strict(s)
    }
}
