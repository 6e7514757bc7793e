//! Persistence contracts and their SQLite implementations.
//!
//! # Responsibility
//! - Keep SQL and column encodings behind repository traits.
//! - Translate storage failures into `RepoError`.
//!
//! # Invariants
//! - Writes validate the record before touching SQL.
//! - Corrupt strict columns surface `InvalidData`; only the beneficiary
//!   type column degrades.

use crate::db::DbError;
use crate::model::beneficiary::{BeneficiaryId, BeneficiaryValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod beneficiary_repo;
pub mod column;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository failures.
#[derive(Debug)]
pub enum RepoError {
    Validation(BeneficiaryValidationError),
    Db(DbError),
    NotFound(BeneficiaryId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "beneficiary not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid stored data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<BeneficiaryValidationError> for RepoError {
    fn from(value: BeneficiaryValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
