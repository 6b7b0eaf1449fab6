//! # vex-attest
//!
//! In-toto attestations that carry OpenVEX documents as their predicate.
//!
//! ## Overview
//!
//! An [`Attestation`] binds a predicate to a list of subjects, each pinned
//! by content digests. It has two serialization modes:
//!
//! - **Unsigned**: the statement fields are encoded to canonical JSON
//!   (two-space indent, stable key order, no HTML escaping).
//! - **Signed**: the exact bytes produced by an external signer are written
//!   back out untouched, so signatures over them stay valid.
//!
//! This crate does not sign or verify anything. It records signed bytes
//! handed to it and respects them on emission.
//!
//! ## Usage
//!
//! ```rust
//! use vex_attest::{Attestation, Subject};
//!
//! let mut att: Attestation = Attestation::new();
//! att.add_subjects(vec![Subject::new("img").with_digest("sha256", "abc123")])
//!     .unwrap();
//!
//! let mut out = Vec::new();
//! att.to_json(&mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("\"name\": \"img\""));
//! ```
//!
//! ## Re-exports
//!
//! `vex_attest::core` re-exports the core crate (subjects, digests, the
//! OpenVEX model, canonical JSON).

pub mod attestation;
pub mod error;

pub use vex_attest_core as core;

pub use attestation::{Attestation, Envelope};
pub use error::{AttestationError, Result};

pub use vex_attest_core::{
    DigestAlgorithm, DigestSet, JsonConfig, Justification, Predicate, Statement, Subject,
    VexDocument, VexStatement, VexStatus, STATEMENT_TYPE_V01, VEX_TYPE_URI,
};
