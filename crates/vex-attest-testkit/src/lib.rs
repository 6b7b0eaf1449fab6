//! # vex-attest Testkit
//!
//! Testing utilities for vex-attest.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known attestations with their exact expected JSON
//! - **Generators**: Proptest strategies for subjects and VEX documents
//! - **Fixtures**: An external DSSE signer so the signed path can be
//!   exercised end to end
//!
//! ## Golden Vectors
//!
//! ```rust
//! use vex_attest_testkit::vectors::verify_all_vectors;
//!
//! for (name, ok) in verify_all_vectors() {
//!     assert!(ok, "vector {name} did not match");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use vex_attest::Attestation;
//! use vex_attest_testkit::generators::valid_subjects;
//!
//! proptest! {
//!     #[test]
//!     fn emission_is_deterministic(subjects in valid_subjects(8)) {
//!         let mut a: Attestation = Attestation::new();
//!         a.add_subjects(subjects).unwrap();
//!         prop_assert_eq!(a.to_json_vec().unwrap(), a.to_json_vec().unwrap());
//!     }
//! }
//! ```
//!
//! ## Signing Fixture
//!
//! ```rust
//! use vex_attest::Attestation;
//! use vex_attest_testkit::fixtures::ExternalSigner;
//!
//! let signer = ExternalSigner::from_seed([7; 32]);
//! let att: Attestation = Attestation::new();
//! let signed = signer.sign(att).unwrap();
//! assert!(signer.verify(&signed.to_json_vec().unwrap()));
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{sample_subjects, DsseEnvelope, DsseSignature, ExternalSigner};
pub use generators::{subject, valid_subjects, vex_document};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
