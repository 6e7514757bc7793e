//! Domain vocabularies and the beneficiary record.
//!
//! # Responsibility
//! - Define the closed vocabularies exchanged with PayProp and stored locally.
//! - Keep per-vocabulary decode policy (strict, degraded, silent) next to
//!   the vocabulary it governs.
//!
//! # Invariants
//! - Every vocabulary implements `vocabulary::Vocabulary`.
//! - Wire codes and persisted identity names are never mixed up.

pub mod beneficiary;
pub mod catalog;
pub mod customer;
pub mod frequency;
pub mod lead;
pub mod payment;
pub mod portfolio;
pub mod sync;
pub mod tag;
pub mod transaction;
pub mod vocabulary;
