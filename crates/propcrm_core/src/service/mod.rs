//! Use-case services over the repository layer.
//!
//! # Invariants
//! - Services stay storage-agnostic and never bypass repository validation.

pub mod beneficiary_service;
pub mod tag_service;
