//! Property CRM core: PayProp vocabularies and beneficiary storage.
//! Every code-to-variant mapping in the CRM goes through this crate.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, init_stderr_logging, logging_status};
pub use model::beneficiary::{
    Beneficiary, BeneficiaryId, BeneficiaryType, BeneficiaryValidationError,
};
pub use model::catalog::{
    entries, lookup, parse_vocabulary_kind, UnknownVocabulary, VocabularyEntry, VocabularyKind,
};
pub use model::customer::{AssignmentType, CustomerType};
pub use model::frequency::{FrequencyCode, InvoiceFrequency};
pub use model::lead::{LeadStatus, LeadType};
pub use model::payment::{AccountType, PaymentMethod, PayoutDetails};
pub use model::portfolio::{PortfolioAssignmentType, PortfolioType};
pub use model::sync::SyncStatus;
pub use model::tag::{TagError, TagNamespace};
pub use model::transaction::TransactionLevel;
pub use model::vocabulary::{Vocabulary, VocabularyError};
pub use repo::beneficiary_repo::{
    BeneficiaryListQuery, BeneficiaryRepository, SqliteBeneficiaryRepository,
};
pub use repo::column::{beneficiary_type_from_column, beneficiary_type_to_column};
pub use repo::{RepoError, RepoResult};
pub use service::beneficiary_service::{
    BeneficiaryService, ImportOutcome, PayPropBeneficiaryPayload,
};
pub use service::tag_service::{
    detect_conflicts, filter_by_namespace, validate_tags, TagConflict, TagConflictKind,
    TagValidationResult,
};

/// Liveness probe for embedding callers.
pub fn ping() -> &'static str {
    "pong"
}

pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
