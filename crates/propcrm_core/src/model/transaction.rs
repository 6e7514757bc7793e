//! Transaction posting level.

use crate::model::vocabulary::{decode_strict, Vocabulary, VocabularyError};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;

/// Scope a financial transaction is posted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionLevel {
    Property,
    Block,
    Owner,
    Portfolio,
}

impl TransactionLevel {
    pub fn requires_property(self) -> bool {
        self == Self::Property
    }

    pub fn requires_block(self) -> bool {
        self == Self::Block
    }

    /// Owner and portfolio postings span several properties.
    pub fn is_aggregate(self) -> bool {
        matches!(self, Self::Owner | Self::Portfolio)
    }
}

impl Vocabulary for TransactionLevel {
    const NAME: &'static str = "transaction_level";
    const ALL: &'static [Self] = &[Self::Property, Self::Block, Self::Owner, Self::Portfolio];

    fn code(self) -> &'static str {
        match self {
            Self::Property => "property",
            Self::Block => "block",
            Self::Owner => "owner",
            Self::Portfolio => "portfolio",
        }
    }

    fn identity(self) -> &'static str {
        match self {
            Self::Property => "PROPERTY",
            Self::Block => "BLOCK",
            Self::Owner => "OWNER",
            Self::Portfolio => "PORTFOLIO",
        }
    }

    fn display_label(self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            Self::Property => "Property Level",
            Self::Block => "Block Level",
            Self::Owner => "Owner Level",
            Self::Portfolio => "Portfolio Level",
        })
    }
}

impl FromStr for TransactionLevel {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_strict(s)
    }
}

#[cfg(test)]
mod tests {
    use super::TransactionLevel;
    use crate::model::vocabulary::Vocabulary;

    #[test]
    fn only_property_level_requires_property() {
        let requiring: Vec<_> = TransactionLevel::ALL
            .iter()
            .filter(|level| level.requires_property())
            .collect();
        assert_eq!(requiring, vec![&TransactionLevel::Property]);
    }

    #[test]
    fn scope_predicates_are_exclusive() {
        for level in TransactionLevel::ALL {
            let hits = [level.requires_property(), level.requires_block(), level.is_aggregate()]
                .into_iter()
                .filter(|hit| *hit)
                .count();
            assert_eq!(hits, 1);
        }
    }

    #[test]
    fn unknown_level_is_rejected() {
        assert!("unit".parse::<TransactionLevel>().is_err());
        assert_eq!(
            "Block".parse::<TransactionLevel>(),
            Ok(TransactionLevel::Block)
        );
    }
}
