//! # vex-attest Core
//!
//! Pure primitives for vex-attest: subjects, digests, predicates, and the
//! canonical JSON encoding of in-toto statements.
//!
//! This crate contains no I/O. It is pure computation over the data that
//! makes up an attestation.
//!
//! ## Key Types
//!
//! - [`Subject`] - An artifact identified by name and content digests
//! - [`DigestSet`] - Algorithm name to hex digest mapping
//! - [`Predicate`] - Capability required of an attestation payload
//! - [`VexDocument`] - The OpenVEX predicate
//! - [`Statement`] - The wire-visible in-toto statement
//!
//! ## Canonicalization
//!
//! Statements are encoded as indented JSON with stable key order. See
//! [`canonical`] module.

pub mod canonical;
pub mod error;
pub mod predicate;
pub mod statement;
pub mod types;
pub mod vex;

pub use canonical::{to_canonical_json, JsonConfig};
pub use error::{CoreError, Result};
pub use predicate::Predicate;
pub use statement::{Statement, STATEMENT_TYPE_V01};
pub use types::{DigestAlgorithm, DigestSet, Subject};
pub use vex::{Justification, VexDocument, VexStatement, VexStatus, VEX_TYPE_URI};
