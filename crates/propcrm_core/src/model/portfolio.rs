//! Portfolio categorisation vocabularies.
//!
//! # Invariants
//! - Exactly one of `is_primary`, `is_secondary`, `is_tag` holds for every
//!   `PortfolioAssignmentType`.

use crate::model::vocabulary::{decode_strict, Vocabulary, VocabularyError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How a portfolio groups its properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PortfolioType {
    Geographic,
    PropertyType,
    InvestmentClass,
    TenantType,
    /// User-defined grouping; also used for portfolios created from sync.
    Custom,
}

impl PortfolioType {
    pub fn is_custom(self) -> bool {
        self == Self::Custom
    }
}

impl Vocabulary for PortfolioType {
    const NAME: &'static str = "portfolio_type";
    const ALL: &'static [Self] = &[
        Self::Geographic,
        Self::PropertyType,
        Self::InvestmentClass,
        Self::TenantType,
        Self::Custom,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::Geographic => "geographic",
            Self::PropertyType => "property_type",
            Self::InvestmentClass => "investment_class",
            Self::TenantType => "tenant_type",
            Self::Custom => "custom",
        }
    }

    fn identity(self) -> &'static str {
        match self {
            Self::Geographic => "GEOGRAPHIC",
            Self::PropertyType => "PROPERTY_TYPE",
            Self::InvestmentClass => "INVESTMENT_CLASS",
            Self::TenantType => "TENANT_TYPE",
            Self::Custom => "CUSTOM",
        }
    }
}

impl FromStr for PortfolioType {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_strict(s)
    }
}

/// Role of a property's membership in a portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PortfolioAssignmentType {
    /// The property's owning portfolio; at most one per property.
    Primary,
    Secondary,
    /// Lightweight grouping mirrored from a PayProp tag.
    Tag,
}

impl PortfolioAssignmentType {
    pub fn is_primary(self) -> bool {
        self == Self::Primary
    }

    pub fn is_secondary(self) -> bool {
        self == Self::Secondary
    }

    pub fn is_tag(self) -> bool {
        self == Self::Tag
    }
}

impl Vocabulary for PortfolioAssignmentType {
    const NAME: &'static str = "portfolio_assignment_type";
    const ALL: &'static [Self] = &[Self::Primary, Self::Secondary, Self::Tag];

    fn code(self) -> &'static str {
        self.identity()
    }

    fn identity(self) -> &'static str {
        match self {
            Self::Primary => "PRIMARY",
            Self::Secondary => "SECONDARY",
            Self::Tag => "TAG",
        }
    }
}

impl FromStr for PortfolioAssignmentType {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_strict(s)
    }
}

#[cfg(test)]
mod tests {
    use super::{PortfolioAssignmentType, PortfolioType};
    use crate::model::vocabulary::Vocabulary;

    #[test]
    fn exactly_one_assignment_role_holds() {
        for assignment in PortfolioAssignmentType::ALL {
            let roles = [
                assignment.is_primary(),
                assignment.is_secondary(),
                assignment.is_tag(),
            ];
            assert_eq!(roles.iter().filter(|role| **role).count(), 1);
        }
    }

    #[test]
    fn assignment_codes_are_uppercase_identities() {
        assert_eq!(
            "tag".parse::<PortfolioAssignmentType>(),
            Ok(PortfolioAssignmentType::Tag)
        );
        assert_eq!(PortfolioAssignmentType::Primary.display_label(), "Primary");
    }

    #[test]
    fn portfolio_type_parses_codes_only() {
        assert_eq!(
            "investment_class".parse::<PortfolioType>(),
            Ok(PortfolioType::InvestmentClass)
        );
        assert!("investment class".parse::<PortfolioType>().is_err());
        assert!(PortfolioType::Custom.is_custom());
    }
}
