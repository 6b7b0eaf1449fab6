//! Proptest generators for property-based testing.

use proptest::prelude::*;

use vex_attest::{DigestSet, Justification, Subject, VexDocument, VexStatement, VexStatus};

/// Generate a digest algorithm name.
pub fn algorithm() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("sha256".to_string()),
        Just("sha512".to_string()),
        Just("blake3".to_string()),
        "[a-z][a-z0-9]{2,9}",
    ]
}

/// Generate a lowercase hex digest value.
pub fn hex_digest() -> impl Strategy<Value = String> {
    any::<[u8; 32]>().prop_map(hex::encode)
}

/// Generate a non-empty digest set.
pub fn digest_set() -> impl Strategy<Value = DigestSet> {
    prop::collection::btree_map(algorithm(), hex_digest(), 1..4)
}

/// Generate free text, biased toward characters HTML-escaping encoders rewrite.
pub fn text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ._/:@-]{0,24}",
        "[<>&a-z ]{1,16}",
        any::<String>(),
    ]
}

/// Generate a subject with at least one digest.
pub fn subject() -> impl Strategy<Value = Subject> {
    (text(), digest_set()).prop_map(|(name, digest)| Subject { name, digest })
}

/// Generate a subject with no digests.
pub fn digestless_subject() -> impl Strategy<Value = Subject> {
    text().prop_map(Subject::new)
}

/// Generate up to `max_len` valid subjects.
pub fn valid_subjects(max_len: usize) -> impl Strategy<Value = Vec<Subject>> {
    prop::collection::vec(subject(), 0..=max_len)
}

/// Generate a batch that contains at least one subject without digests.
pub fn poisoned_subjects(max_len: usize) -> impl Strategy<Value = Vec<Subject>> {
    (valid_subjects(max_len), digestless_subject(), any::<prop::sample::Index>()).prop_map(
        |(mut batch, bad, idx)| {
            let at = idx.index(batch.len() + 1);
            batch.insert(at, bad);
            batch
        },
    )
}

/// Generate a VEX status.
pub fn vex_status() -> impl Strategy<Value = VexStatus> {
    prop_oneof![
        Just(VexStatus::NotAffected),
        Just(VexStatus::Affected),
        Just(VexStatus::Fixed),
        Just(VexStatus::UnderInvestigation),
    ]
}

/// Generate a justification.
pub fn justification() -> impl Strategy<Value = Justification> {
    prop_oneof![
        Just(Justification::ComponentNotPresent),
        Just(Justification::VulnerableCodeNotPresent),
        Just(Justification::VulnerableCodeNotInExecutePath),
        Just(Justification::VulnerableCodeCannotBeControlledByAdversary),
        Just(Justification::InlineMitigationsAlreadyExist),
    ]
}

/// Generate a VEX statement.
pub fn vex_statement() -> impl Strategy<Value = VexStatement> {
    (
        "CVE-20[0-9]{2}-[0-9]{4,6}",
        prop::collection::vec(text(), 0..4),
        vex_status(),
        prop::option::of(justification()),
        prop::option::of(text()),
    )
        .prop_map(|(vulnerability, products, status, justification, impact)| VexStatement {
            vulnerability,
            products,
            status,
            justification,
            impact_statement: impact,
            action_statement: None,
        })
}

/// Generate a VEX document.
pub fn vex_document() -> impl Strategy<Value = VexDocument> {
    (text(), prop::collection::vec(vex_statement(), 0..4)).prop_map(|(author, statements)| {
        let mut doc = VexDocument::new();
        doc.author = author;
        doc.statements = statements;
        doc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vex_attest::{Attestation, AttestationError};

    proptest! {
        #[test]
        fn test_emission_deterministic(
            subjects in valid_subjects(6),
            doc in vex_document(),
        ) {
            let build = || {
                let mut att: Attestation = Attestation::new();
                att.add_subjects(subjects.clone()).unwrap();
                *att.predicate_mut() = doc.clone();
                att
            };

            prop_assert_eq!(build().to_json_vec().unwrap(), build().to_json_vec().unwrap());
        }

        #[test]
        fn test_append_is_concatenation(
            existing in valid_subjects(4),
            a in valid_subjects(4),
            b in valid_subjects(4),
        ) {
            let mut att: Attestation = Attestation::new();
            att.add_subjects(existing.clone()).unwrap();
            att.add_subjects(a.clone()).unwrap();
            att.add_subjects(b.clone()).unwrap();

            let expected: Vec<Subject> = existing.into_iter().chain(a).chain(b).collect();
            prop_assert_eq!(att.subjects(), expected.as_slice());
        }

        #[test]
        fn test_poisoned_batch_is_rejected_whole(
            existing in valid_subjects(4),
            batch in poisoned_subjects(4),
        ) {
            let mut att: Attestation = Attestation::new();
            att.add_subjects(existing.clone()).unwrap();

            let result = att.add_subjects(batch);
            let is_invalid_subject = matches!(result, Err(AttestationError::InvalidSubject { .. }));
            prop_assert!(is_invalid_subject);
            prop_assert_eq!(att.subjects(), existing.as_slice());
        }

        #[test]
        fn test_signed_passthrough(
            signed in prop::collection::vec(any::<u8>(), 0..256),
            subjects in valid_subjects(4),
            doc in vex_document(),
        ) {
            let mut att: Attestation = Attestation::new().into_signed(signed.clone());
            att.add_subjects(subjects).unwrap();
            *att.predicate_mut() = doc;

            prop_assert_eq!(att.to_json_vec().unwrap(), signed);
        }

        #[test]
        fn test_unsigned_output_parses_back(
            subjects in valid_subjects(4),
            doc in vex_document(),
        ) {
            let mut att: Attestation = Attestation::new();
            att.add_subjects(subjects).unwrap();
            *att.predicate_mut() = doc;

            let parsed: Attestation = Attestation::from_json(&att.to_json_vec().unwrap()).unwrap();
            prop_assert_eq!(parsed, att);
        }
    }
}
