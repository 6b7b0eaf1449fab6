//! Subjects and content digests.
//!
//! A subject names an artifact and pins it by one or more content digests.
//! Digest maps are ordered so that encoding is stable.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha512};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A map from digest algorithm name to lowercase hex-encoded value.
pub type DigestSet = BTreeMap<String, String>;

/// Digest algorithms this crate can compute locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    Sha256,
    Sha512,
    Blake3,
}

impl DigestAlgorithm {
    /// The in-toto name of the algorithm.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
            Self::Blake3 => "blake3",
        }
    }

    /// Hash `data` and return the lowercase hex digest.
    pub fn compute(self, data: &[u8]) -> String {
        match self {
            Self::Sha256 => hex::encode(Sha256::digest(data)),
            Self::Sha512 => hex::encode(Sha512::digest(data)),
            Self::Blake3 => blake3::hash(data).to_hex().to_string(),
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sha256" => Ok(Self::Sha256),
            "sha512" => Ok(Self::Sha512),
            "blake3" => Ok(Self::Blake3),
            other => Err(CoreError::UnsupportedDigestAlgorithm(other.to_string())),
        }
    }
}

/// An artifact identified by its name and a set of digests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subject {
    /// Artifact name (image reference, file path, package URL).
    pub name: String,

    /// Content digests keyed by algorithm name.
    pub digest: DigestSet,
}

impl Subject {
    /// Create a subject with no digests yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            digest: DigestSet::new(),
        }
    }

    /// Add (or replace) a digest entry.
    pub fn with_digest(mut self, algorithm: impl Into<String>, value: impl Into<String>) -> Self {
        self.digest.insert(algorithm.into(), value.into());
        self
    }

    /// Build a subject by hashing the artifact bytes with each algorithm.
    pub fn from_artifact(
        name: impl Into<String>,
        data: &[u8],
        algorithms: &[DigestAlgorithm],
    ) -> Self {
        let digest = algorithms
            .iter()
            .map(|alg| (alg.name().to_string(), alg.compute(data)))
            .collect();
        Self {
            name: name.into(),
            digest,
        }
    }

    /// Whether the subject carries at least one digest.
    pub fn has_digests(&self) -> bool {
        !self.digest.is_empty()
    }

    /// Look up the digest recorded for an algorithm.
    pub fn digest_for(&self, algorithm: DigestAlgorithm) -> Option<&str> {
        self.digest.get(algorithm.name()).map(String::as_str)
    }
}

/// Check every subject before anything is committed.
///
/// Returns the first subject without digests as an error.
pub fn validate_subjects(subjects: &[Subject]) -> Result<(), CoreError> {
    match subjects.iter().find(|s| !s.has_digests()) {
        Some(bad) => Err(CoreError::InvalidSubject {
            name: bad.name.clone(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digests() {
        assert_eq!(
            DigestAlgorithm::Sha256.compute(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            DigestAlgorithm::Sha256.compute(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            DigestAlgorithm::Blake3.compute(b""),
            "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262"
        );
        assert_eq!(DigestAlgorithm::Sha512.compute(b"abc").len(), 128);
    }

    #[test]
    fn test_algorithm_names_roundtrip() {
        for alg in [
            DigestAlgorithm::Sha256,
            DigestAlgorithm::Sha512,
            DigestAlgorithm::Blake3,
        ] {
            assert_eq!(alg.to_string().parse::<DigestAlgorithm>().unwrap(), alg);
        }
    }

    #[test]
    fn test_unknown_algorithm() {
        let err = "md5".parse::<DigestAlgorithm>().unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedDigestAlgorithm(ref s) if s == "md5"));
    }

    #[test]
    fn test_subject_from_artifact() {
        let subject = Subject::from_artifact(
            "app.tar",
            b"abc",
            &[DigestAlgorithm::Sha256, DigestAlgorithm::Blake3],
        );
        assert_eq!(subject.digest.len(), 2);
        assert_eq!(
            subject.digest_for(DigestAlgorithm::Sha256),
            Some("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
        );
        assert!(subject.digest_for(DigestAlgorithm::Sha512).is_none());
    }

    #[test]
    fn test_subject_without_digests() {
        let subject = Subject::new("empty");
        assert!(!subject.has_digests());
        assert!(Subject::new("x").with_digest("sha256", "00").has_digests());
    }

    #[test]
    fn test_validate_subjects_reports_first_offender() {
        let subjects = vec![
            Subject::new("ok").with_digest("sha256", "aa"),
            Subject::new("bad"),
            Subject::new("worse"),
        ];
        match validate_subjects(&subjects) {
            Err(CoreError::InvalidSubject { name }) => assert_eq!(name, "bad"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(validate_subjects(&[]).is_ok());
    }

    #[test]
    fn test_digest_keys_are_ordered() {
        let subject = Subject::new("x")
            .with_digest("sha512", "bb")
            .with_digest("sha256", "aa");
        let json = serde_json::to_string(&subject).unwrap();
        assert_eq!(json, r#"{"name":"x","digest":{"sha256":"aa","sha512":"bb"}}"#);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_digest_lengths(data in prop::collection::vec(any::<u8>(), 0..512)) {
                let subject = Subject::from_artifact(
                    "blob",
                    &data,
                    &[DigestAlgorithm::Sha256, DigestAlgorithm::Sha512, DigestAlgorithm::Blake3],
                );
                prop_assert_eq!(subject.digest_for(DigestAlgorithm::Sha256).unwrap().len(), 64);
                prop_assert_eq!(subject.digest_for(DigestAlgorithm::Sha512).unwrap().len(), 128);
                prop_assert_eq!(subject.digest_for(DigestAlgorithm::Blake3).unwrap().len(), 64);
            }

            #[test]
            fn test_validation_matches_digest_presence(
                names in prop::collection::vec("[a-z]{1,8}", 0..8),
                empty_mask in prop::collection::vec(any::<bool>(), 8),
            ) {
                let subjects: Vec<Subject> = names
                    .iter()
                    .zip(&empty_mask)
                    .map(|(name, empty)| {
                        let subject = Subject::new(name.as_str());
                        if *empty {
                            subject
                        } else {
                            subject.with_digest("sha256", "aa")
                        }
                    })
                    .collect();
                let any_empty = subjects.iter().any(|s| !s.has_digests());
                prop_assert_eq!(validate_subjects(&subjects).is_err(), any_empty);
            }
        }
    }
}
