//! Sync status of a local record against PayProp.

use crate::model::vocabulary::{decode_strict, Vocabulary, VocabularyError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SyncStatus {
    /// Local changes not yet pushed.
    Pending,
    Syncing,
    Synced,
    Failed,
    /// Managed by hand; automatic sync leaves it alone.
    Manual,
}

impl SyncStatus {
    pub fn needs_sync(self) -> bool {
        matches!(self, Self::Pending | Self::Failed)
    }

    pub fn is_in_flight(self) -> bool {
        self == Self::Syncing
    }

    pub fn is_settled(self) -> bool {
        matches!(self, Self::Synced | Self::Manual)
    }

    pub fn allows_auto_sync(self) -> bool {
        self != Self::Manual
    }
}

impl Vocabulary for SyncStatus {
    const NAME: &'static str = "sync_status";
    const ALL: &'static [Self] = &[
        Self::Pending,
        Self::Syncing,
        Self::Synced,
        Self::Failed,
        Self::Manual,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Syncing => "syncing",
            Self::Synced => "synced",
            Self::Failed => "failed",
            Self::Manual => "manual",
        }
    }

    fn identity(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Syncing => "SYNCING",
            Self::Synced => "SYNCED",
            Self::Failed => "FAILED",
            Self::Manual => "MANUAL",
        }
    }
}

impl FromStr for SyncStatus {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_strict(s)
    }
}
