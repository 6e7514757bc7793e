//! Customer role vocabularies.

use crate::model::vocabulary::{decode_strict, humanize_identity, Vocabulary, VocabularyError};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;

/// Role a customer record plays in the CRM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerType {
    RegularCustomer,
    Tenant,
    PropertyOwner,
    Contractor,
    /// Acts on behalf of a property owner.
    DelegatedUser,
    Manager,
    Admin,
    Employee,
}

impl CustomerType {
    pub fn is_staff(self) -> bool {
        matches!(self, Self::Manager | Self::Admin | Self::Employee)
    }

    pub fn has_owner_portal_access(self) -> bool {
        matches!(self, Self::PropertyOwner | Self::DelegatedUser)
    }
}

impl Vocabulary for CustomerType {
    const NAME: &'static str = "customer_type";
    const ALL: &'static [Self] = &[
        Self::RegularCustomer,
        Self::Tenant,
        Self::PropertyOwner,
        Self::Contractor,
        Self::DelegatedUser,
        Self::Manager,
        Self::Admin,
        Self::Employee,
    ];

    fn code(self) -> &'static str {
        self.identity()
    }

    fn identity(self) -> &'static str {
        match self {
            Self::RegularCustomer => "REGULAR_CUSTOMER",
            Self::Tenant => "TENANT",
            Self::PropertyOwner => "PROPERTY_OWNER",
            Self::Contractor => "CONTRACTOR",
            Self::DelegatedUser => "DELEGATED_USER",
            Self::Manager => "MANAGER",
            Self::Admin => "ADMIN",
            Self::Employee => "EMPLOYEE",
        }
    }

    fn display_label(self) -> Cow<'static, str> {
        match self {
            Self::RegularCustomer => Cow::Borrowed("Customer"),
            other => Cow::Owned(humanize_identity(other.identity())),
        }
    }
}

impl FromStr for CustomerType {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_strict(s)
    }
}

/// Relationship between a customer and a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentType {
    Owner,
    Tenant,
    Manager,
    Contractor,
}

impl AssignmentType {
    /// Owners and delegated managers see the owner view of a property.
    pub fn grants_owner_access(self) -> bool {
        matches!(self, Self::Owner | Self::Manager)
    }
}

impl Vocabulary for AssignmentType {
    const NAME: &'static str = "assignment_type";
    const ALL: &'static [Self] = &[Self::Owner, Self::Tenant, Self::Manager, Self::Contractor];

    fn code(self) -> &'static str {
        self.identity()
    }

    fn identity(self) -> &'static str {
        match self {
            Self::Owner => "OWNER",
            Self::Tenant => "TENANT",
            Self::Manager => "MANAGER",
            Self::Contractor => "CONTRACTOR",
        }
    }
}

impl FromStr for AssignmentType {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_strict(s)
    }
}
