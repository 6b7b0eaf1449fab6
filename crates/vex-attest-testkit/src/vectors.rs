//! Golden test vectors for deterministic verification.
//!
//! Each vector builds an unsigned attestation and pins the exact bytes it
//! must emit. Any change to key order, indentation, escaping or the default
//! predicate shows up here first.

use vex_attest::{Attestation, Justification, Subject, VexStatement, VexStatus};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Builds the attestation under test.
    pub build: fn() -> Attestation,
    /// Expected emitted JSON.
    pub expected: &'static str,
}

impl GoldenVector {
    /// Emit the vector's attestation as a string.
    pub fn emit(&self) -> String {
        let bytes = (self.build)()
            .to_json_vec()
            .expect("golden vector must encode");
        String::from_utf8(bytes).expect("emitted JSON is UTF-8")
    }
}

fn empty() -> Attestation {
    Attestation::new()
}

fn single_subject() -> Attestation {
    let mut att: Attestation = Attestation::new();
    att.add_subjects(vec![Subject::new("img").with_digest("sha256", "abc123")])
        .expect("subject has a digest");
    att
}

fn html_characters() -> Attestation {
    let mut att: Attestation = Attestation::new();
    att.add_subjects(vec![Subject::new("a<b>&c").with_digest("sha256", "00")])
        .expect("subject has a digest");
    att.predicate_mut().author = "R&D <sec@example.com>".to_string();
    att
}

fn with_statement() -> Attestation {
    let mut att: Attestation = Attestation::new();
    att.add_subjects(vec![Subject::new("pkg")
        .with_digest("sha512", "ff")
        .with_digest("sha256", "ee")])
        .expect("subject has a digest");
    att.predicate_mut().add_statement(
        VexStatement::new("CVE-2023-44487", VexStatus::NotAffected)
            .product("pkg")
            .justification(Justification::VulnerableCodeNotPresent),
    );
    att
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "empty attestation",
            build: empty,
            expected: r#"{
  "_type": "https://in-toto.io/Statement/v0.1",
  "predicateType": "https://openvex.dev/ns",
  "subject": [],
  "predicate": {
    "@context": "https://openvex.dev/ns",
    "author": "Unknown Author",
    "role": "Document Creator",
    "version": 1,
    "statements": []
  }
}
"#,
        },
        GoldenVector {
            name: "single sha256 subject",
            build: single_subject,
            expected: r#"{
  "_type": "https://in-toto.io/Statement/v0.1",
  "predicateType": "https://openvex.dev/ns",
  "subject": [
    {
      "name": "img",
      "digest": {
        "sha256": "abc123"
      }
    }
  ],
  "predicate": {
    "@context": "https://openvex.dev/ns",
    "author": "Unknown Author",
    "role": "Document Creator",
    "version": 1,
    "statements": []
  }
}
"#,
        },
        GoldenVector {
            name: "html characters kept literal",
            build: html_characters,
            expected: r#"{
  "_type": "https://in-toto.io/Statement/v0.1",
  "predicateType": "https://openvex.dev/ns",
  "subject": [
    {
      "name": "a<b>&c",
      "digest": {
        "sha256": "00"
      }
    }
  ],
  "predicate": {
    "@context": "https://openvex.dev/ns",
    "author": "R&D <sec@example.com>",
    "role": "Document Creator",
    "version": 1,
    "statements": []
  }
}
"#,
        },
        GoldenVector {
            name: "statement with sorted digests",
            build: with_statement,
            expected: r#"{
  "_type": "https://in-toto.io/Statement/v0.1",
  "predicateType": "https://openvex.dev/ns",
  "subject": [
    {
      "name": "pkg",
      "digest": {
        "sha256": "ee",
        "sha512": "ff"
      }
    }
  ],
  "predicate": {
    "@context": "https://openvex.dev/ns",
    "author": "Unknown Author",
    "role": "Document Creator",
    "version": 1,
    "statements": [
      {
        "vulnerability": "CVE-2023-44487",
        "products": [
          "pkg"
        ],
        "status": "not_affected",
        "justification": "vulnerable_code_not_present"
      }
    ]
  }
}
"#,
        },
    ]
}

/// Check every vector against its expected output.
pub fn verify_all_vectors() -> Vec<(String, bool)> {
    all_vectors()
        .iter()
        .map(|v| (v.name.to_string(), v.emit() == v.expected))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vectors_match() {
        for vector in all_vectors() {
            assert_eq!(vector.emit(), vector.expected, "vector '{}'", vector.name);
        }
    }

    #[test]
    fn test_vectors_are_deterministic() {
        for vector in all_vectors() {
            assert_eq!(
                vector.emit(),
                vector.emit(),
                "vector '{}' produced different bytes on regeneration",
                vector.name
            );
        }
    }
}
